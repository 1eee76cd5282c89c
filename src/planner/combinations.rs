use crate::models::{Category, LunchCombination, MenuItem};

/// Items of `items` that actually belong to `category`, in input order.
fn of_category<'a>(items: &[&'a MenuItem], category: Category) -> Vec<&'a MenuItem> {
    items
        .iter()
        .copied()
        .filter(|item| item.category == category)
        .collect()
}

/// The four category slots of a lunch, filtered and ready to enumerate.
///
/// Every lunch has a Cartesian index: the dessert varies fastest and the
/// starter slowest.
#[derive(Debug, Clone)]
pub struct CombinationSpace<'a> {
    starters: Vec<&'a MenuItem>,
    mains: Vec<&'a MenuItem>,
    sides: Vec<&'a MenuItem>,
    desserts: Vec<&'a MenuItem>,
}

impl<'a> CombinationSpace<'a> {
    /// Build the space, dropping items placed in the wrong slot.
    pub fn new(
        starters: &[&'a MenuItem],
        mains: &[&'a MenuItem],
        sides: &[&'a MenuItem],
        desserts: &[&'a MenuItem],
    ) -> Self {
        Self {
            starters: of_category(starters, Category::Starter),
            mains: of_category(mains, Category::Main),
            sides: of_category(sides, Category::Side),
            desserts: of_category(desserts, Category::Dessert),
        }
    }

    pub fn starters(&self) -> &[&'a MenuItem] {
        &self.starters
    }

    /// Lunches sharing one starter.
    pub fn block_len(&self) -> usize {
        self.mains.len() * self.sides.len() * self.desserts.len()
    }

    pub fn len(&self) -> usize {
        self.starters.len() * self.block_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lunch at Cartesian `index`, if in range.
    pub fn get(&self, index: usize) -> Option<LunchCombination<'a>> {
        if index >= self.len() {
            return None;
        }
        let d = index % self.desserts.len();
        let rest = index / self.desserts.len();
        let si = rest % self.sides.len();
        let rest = rest / self.sides.len();
        let m = rest % self.mains.len();
        let s = rest / self.mains.len();
        Some(LunchCombination::new(
            self.starters[s],
            self.mains[m],
            self.sides[si],
            self.desserts[d],
        ))
    }

    /// Lunches with their Cartesian index, restricted to `range`.
    pub fn indexed(
        &self,
        range: std::ops::Range<usize>,
    ) -> impl Iterator<Item = (usize, LunchCombination<'a>)> + '_ {
        let end = range.end.min(self.len());
        (range.start..end).filter_map(move |i| self.get(i).map(|combo| (i, combo)))
    }

    pub fn iter(&self) -> impl Iterator<Item = LunchCombination<'a>> + '_ {
        self.indexed(0..self.len()).map(|(_, combo)| combo)
    }
}

/// Lazily enumerate every lunch built from one item per category.
///
/// Items placed in the wrong slot are skipped. Lunches come out in Cartesian
/// order: the dessert varies fastest, the starter slowest.
pub fn combinations<'a>(
    starters: &[&'a MenuItem],
    mains: &[&'a MenuItem],
    sides: &[&'a MenuItem],
    desserts: &[&'a MenuItem],
) -> impl Iterator<Item = LunchCombination<'a>> + use<'a> {
    let space = CombinationSpace::new(starters, mains, sides, desserts);
    (0..space.len()).filter_map(move |i| space.get(i))
}

/// Materialize all lunches; see [`combinations`].
pub fn generate_combinations<'a>(
    starters: &[&'a MenuItem],
    mains: &[&'a MenuItem],
    sides: &[&'a MenuItem],
    desserts: &[&'a MenuItem],
) -> Vec<LunchCombination<'a>> {
    combinations(starters, mains, sides, desserts).collect()
}

/// Number of lunches [`combinations`] will yield.
pub fn count_combinations(
    starters: &[&MenuItem],
    mains: &[&MenuItem],
    sides: &[&MenuItem],
    desserts: &[&MenuItem],
) -> usize {
    CombinationSpace::new(starters, mains, sides, desserts).len()
}
