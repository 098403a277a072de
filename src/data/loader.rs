use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome, RawRecord};

// ---------------------------------------------------------------------------
// Row validation errors
// ---------------------------------------------------------------------------

/// A malformed row in the source table. The loader enforces the dataset
/// preconditions here so the aggregation layer never sees invalid records.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("row {row}: payload mass {mass} is negative")]
    NegativePayload { row: usize, mass: f64 },
    #[error("row {row}: class value {class} is not 0 or 1")]
    InvalidClass { row: usize, class: i64 },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load launch records from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with columns `Launch Site`, `Payload Mass (kg)`,
///             `class`, `Booster Version Category`
/// * `.json` – records-oriented array of objects with the same fields
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let text = std::fs::read_to_string(path).context("reading CSV file")?;
            load_csv(&text)
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            load_json(&text)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Parse CSV text (also used for the dataset bundled into the binary).
pub fn load_csv(text: &str) -> Result<LaunchDataset> {
    load_csv_reader(text.as_bytes())
}

fn load_csv_reader<R: Read>(rdr: R) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut records = Vec::new();

    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(validate_row(row_no, raw)?);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "KSC LC-39A",
///     "Payload Mass (kg)": 5300.0,
///     "class": 1,
///     "Booster Version Category": "FT"
///   },
///   ...
/// ]
/// ```
pub fn load_json(text: &str) -> Result<LaunchDataset> {
    let raw: Vec<RawRecord> = serde_json::from_str(text).context("parsing JSON records")?;

    let records = raw
        .into_iter()
        .enumerate()
        .map(|(row_no, raw)| validate_row(row_no, raw))
        .collect::<Result<Vec<_>>>()?;

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Row validation
// ---------------------------------------------------------------------------

fn validate_row(row_no: usize, raw: RawRecord) -> Result<LaunchRecord> {
    if raw.payload_mass < 0.0 {
        return Err(DataError::NegativePayload {
            row: row_no,
            mass: raw.payload_mass,
        }
        .into());
    }
    let outcome = match raw.class {
        0 => Outcome::Failure,
        1 => Outcome::Success,
        class => return Err(DataError::InvalidClass { row: row_no, class }.into()),
    };

    Ok(LaunchRecord {
        site: raw.site,
        payload_mass: raw.payload_mass,
        outcome,
        booster_category: raw.booster_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,500.0,0,v1.0
KSC LC-39A,5300.0,1,FT
";

    #[test]
    fn csv_parses_all_four_columns() {
        let ds = load_csv(CSV).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].site, "CCAFS LC-40");
        assert_eq!(ds.records[0].payload_mass, 500.0);
        assert_eq!(ds.records[0].outcome, Outcome::Failure);
        assert_eq!(ds.records[1].booster_category, "FT");
        assert_eq!(ds.payload_bounds, (500.0, 5300.0));
    }

    #[test]
    fn csv_missing_column_is_an_error() {
        let text = "Launch Site,class\nCCAFS LC-40,1\n";
        assert!(load_csv(text).is_err());
    }

    #[test]
    fn negative_payload_is_rejected() {
        let text = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,-1.0,1,v1.0
";
        let err = load_csv(text).unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn class_outside_zero_one_is_rejected() {
        let text = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,100.0,2,v1.0
";
        let err = load_csv(text).unwrap_err();
        assert!(err.to_string().contains("not 0 or 1"));
    }

    #[test]
    fn json_records_parse() {
        let text = r#"[
            {"Launch Site": "VAFB SLC-4E", "Payload Mass (kg)": 9600.0,
             "class": 1, "Booster Version Category": "FT"}
        ]"#;
        let ds = load_json(text).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].site, "VAFB SLC-4E");
        assert_eq!(ds.records[0].outcome, Outcome::Success);
    }
}
