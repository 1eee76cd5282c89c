use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{LunchError, Result};
use crate::models::{Interval, IntervalSet, Limit, MenuItem, NumericKind};

/// Load menu items from a CSV file with a `meal,category,...,amount,price` header.
///
/// Empty numeric cells are read as zero.
pub fn load_meals<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let items = reader
        .deserialize()
        .collect::<std::result::Result<Vec<MenuItem>, csv::Error>>()?;

    info!(count = items.len(), path = %path.as_ref().display(), "loaded meals");
    Ok(items)
}

/// Save menu items to a CSV file in the format [`load_meals`] reads.
pub fn save_meals<P: AsRef<Path>>(path: P, items: &[MenuItem]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for item in items {
        writer.serialize(item)?;
    }
    writer.flush()?;
    Ok(())
}

/// Load bounds from a file.
///
/// `.json` files are validated strictly with [`IntervalSet::from_json`];
/// anything else is read as interval text, see [`parse_interval_text`].
pub fn load_intervals<P: AsRef<Path>>(path: P) -> Result<IntervalSet> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let intervals = if is_json {
        let raw: serde_json::Value = serde_json::from_str(&content)?;
        IntervalSet::from_json(&raw)?
    } else {
        parse_interval_text(&content)?
    };

    info!(limits = intervals.len(), path = %path.display(), "loaded intervals");
    Ok(intervals)
}

/// Save bounds as JSON.
pub fn save_intervals<P: AsRef<Path>>(path: P, intervals: &IntervalSet) -> Result<()> {
    let json = serde_json::to_string_pretty(&intervals.to_json())?;
    fs::write(path, json)?;
    Ok(())
}

/// Parse headerless `name,low,high` rows.
///
/// When a name repeats, the last row wins. Nutrient bounds are truncated to
/// whole numbers. A price row with a single value means `[0, value]`. Rows
/// for unknown names are ignored.
pub fn parse_interval_text(content: &str) -> Result<IntervalSet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut rows: HashMap<Limit, Vec<String>> = HashMap::new();
    for record in reader.records() {
        let record = record?;
        let mut fields = record.iter();
        let Some(limit) = fields
            .next()
            .and_then(|name| Limit::from_name(&name.to_lowercase()))
        else {
            continue;
        };
        let values: Vec<String> = fields
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
        rows.insert(limit, values);
    }

    for limit in Limit::ALL {
        if !rows.contains_key(&limit) {
            return Err(LunchError::MissingKey(limit.name().to_string()));
        }
    }

    let mut set = IntervalSet::new();
    for limit in Limit::ALL {
        let values = &rows[&limit];
        let interval = match (limit.kind(), values.as_slice()) {
            (NumericKind::Integral, [low, high]) => Interval::integral(
                limit,
                parse_number(limit, low)?.trunc() as i64,
                parse_number(limit, high)?.trunc() as i64,
            )?,
            (NumericKind::Decimal, [high]) => {
                Interval::decimal(limit, 0.0, parse_number(limit, high)?)?
            }
            (NumericKind::Decimal, [low, high]) => {
                Interval::decimal(limit, parse_number(limit, low)?, parse_number(limit, high)?)?
            }
            _ => {
                return Err(LunchError::ArityMismatch(format!(
                    "{} limits should have two values, got {}",
                    limit,
                    values.len()
                )));
            }
        };
        debug!(%limit, %interval, "parsed interval");
        set = set.with(limit, interval);
    }

    Ok(set)
}

fn parse_number(limit: Limit, text: &str) -> Result<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LunchError::InvalidInput(format!(
            "{} limit '{}' is not a finite number",
            limit, text
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MEALS_CSV: &str = "\
meal,category,calories,protein,fat,carbs,amount,price
Lentil Soup,soup,60,4.1,1.2,8.5,300,1.3
Roast Chicken,main dish,190,25.0,9.0,,250,4.8
Rice,sidedish,130,2.7,0.3,28.0,200,0.7
Apple Pie,dessert,240,2.4,11.0,34.0,120,1.6
";

    #[test]
    fn test_load_and_save_roundtrip() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(MEALS_CSV.as_bytes()).unwrap();

        let items = load_meals(file.path()).unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].name, "Lentil Soup");
        assert_eq!(items[1].category, Category::Main);
        // Empty cell reads as zero
        assert_eq!(items[1].carbs, 0.0);

        // Save and reload
        let out_file = NamedTempFile::new().unwrap();
        save_meals(out_file.path(), &items).unwrap();

        let reloaded = load_meals(out_file.path()).unwrap();
        assert_eq!(reloaded, items);
    }

    #[test]
    fn test_unknown_category_fails_load() {
        let csv = "meal,category,calories,protein,fat,carbs,amount,price\n\
                   Flan,desert,200,3,5,30,100,1.0\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let err = load_meals(file.path()).unwrap_err();
        assert!(err.to_string().contains("did you mean 'dessert'"), "{err}");
    }

    #[test]
    fn test_parse_interval_text() {
        let text = "\
calories,800,1200
protein,20,100
fat,10,70.9
carbs,100,200
price,9.5
calories,700,1300
";
        let set = parse_interval_text(text).unwrap();

        // Last calories row wins
        assert_eq!(set.get(Limit::Calories).unwrap().low(), 700.0);
        // Truncated to a whole number
        assert_eq!(set.get(Limit::Fat).unwrap().high(), 70.0);
        // Single price value means [0, value]
        let price = set.get(Limit::Price).unwrap();
        assert_eq!((price.low(), price.high()), (0.0, 9.5));
    }

    #[test]
    fn test_parse_interval_text_errors() {
        let missing = "calories,800,1200\nfat,10,70\ncarbs,100,200\nprice,9.5\n";
        assert!(matches!(
            parse_interval_text(missing),
            Err(LunchError::MissingKey(ref key)) if key == "protein"
        ));

        let short = "calories,800\nprotein,20,100\nfat,10,70\ncarbs,100,200\nprice,9.5\n";
        assert!(matches!(
            parse_interval_text(short),
            Err(LunchError::ArityMismatch(_))
        ));

        let inverted = "calories,1200,800\nprotein,20,100\nfat,10,70\ncarbs,100,200\nprice,9.5\n";
        assert!(matches!(
            parse_interval_text(inverted),
            Err(LunchError::RangeInverted(ref key)) if key == "calories"
        ));

        let garbage = "calories,lots,800\nprotein,20,100\nfat,10,70\ncarbs,100,200\nprice,9.5\n";
        assert!(matches!(
            parse_interval_text(garbage),
            Err(LunchError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_interval_text_rejects_non_finite() {
        let nan = "calories,nan,NaN\nprotein,20,100\nfat,10,70\ncarbs,10,200\nprice,9.5\n";
        assert!(matches!(
            parse_interval_text(nan),
            Err(LunchError::InvalidInput(ref msg)) if msg.starts_with("calories")
        ));

        let inf = "calories,800,1200\nprotein,20,inf\nfat,10,70\ncarbs,10,200\nprice,9.5\n";
        assert!(matches!(
            parse_interval_text(inf),
            Err(LunchError::InvalidInput(ref msg)) if msg.starts_with("protein")
        ));

        let price = "calories,800,1200\nprotein,20,100\nfat,10,70\ncarbs,10,200\nprice,-inf\n";
        assert!(matches!(
            parse_interval_text(price),
            Err(LunchError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_interval_text_matches_names_case_insensitively() {
        let text = "Calories,800,1200\nPROTEIN,20,100\nfat,10,70\ncarbs,10,200\nprice,9.5\nfibre,1,2\n";
        let set = parse_interval_text(text).unwrap();
        assert!(set.is_complete());
        assert_eq!(set.get(Limit::Protein).unwrap().high(), 100.0);
    }

    #[test]
    fn test_load_intervals_json() {
        let json = r#"{
            "calories": [800, 1200],
            "protein": [20, 100],
            "fat": [10, 70],
            "carbs": [100, 200],
            "price": [0.0, 9.5]
        }"#;
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let set = load_intervals(file.path()).unwrap();
        assert!(set.is_complete());

        let out = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        save_intervals(out.path(), &set).unwrap();
        assert_eq!(load_intervals(out.path()).unwrap(), set);
    }
}
