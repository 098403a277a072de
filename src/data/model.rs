use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Outcome – binary launch result
// ---------------------------------------------------------------------------

/// Launch outcome, parsed from the source's 0/1 `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// The 0/1 indicator used by the source data and the scatter y-axis.
    pub fn indicator(self) -> u64 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Chart label for this outcome.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch event. Immutable once loaded.
///
/// Field names follow the source table's logical columns:
/// `Launch Site`, `Payload Mass (kg)`, `class`, `Booster Version Category`.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    /// Payload mass in kilograms, non-negative (enforced by the loader).
    pub payload_mass: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

/// Raw row shape shared by the CSV and JSON loaders.
#[derive(Debug, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Launch Site")]
    pub site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass: f64,
    #[serde(rename = "class")]
    pub class: i64,
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed indices.
///
/// Created once at startup (or on File → Open) and read-only afterwards;
/// every derived view is recomputed from it in full.
#[derive(Debug, Clone, Default)]
pub struct LaunchDataset {
    /// All launch records in source order.
    pub records: Vec<LaunchRecord>,
    /// Sorted unique launch sites.
    pub sites: Vec<String>,
    /// Sorted unique booster version categories.
    pub booster_categories: Vec<String>,
    /// Observed (min, max) payload mass; (0.0, 0.0) when empty.
    pub payload_bounds: (f64, f64),
}

impl LaunchDataset {
    /// Build the site/booster indices and payload bounds from loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut site_set: BTreeSet<&str> = BTreeSet::new();
        let mut booster_set: BTreeSet<&str> = BTreeSet::new();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for rec in &records {
            site_set.insert(&rec.site);
            booster_set.insert(&rec.booster_category);
            min = min.min(rec.payload_mass);
            max = max.max(rec.payload_mass);
        }

        let payload_bounds = if records.is_empty() {
            (0.0, 0.0)
        } else {
            (min, max)
        };

        LaunchDataset {
            sites: site_set.into_iter().map(str::to_string).collect(),
            booster_categories: booster_set.into_iter().map(str::to_string).collect(),
            payload_bounds,
            records,
        }
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(site: &str, mass: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass: mass,
            outcome,
            booster_category: "FT".to_string(),
        }
    }

    #[test]
    fn indices_are_sorted_and_unique() {
        let ds = LaunchDataset::from_records(vec![
            rec("B", 100.0, Outcome::Success),
            rec("A", 200.0, Outcome::Failure),
            rec("B", 300.0, Outcome::Success),
        ]);
        assert_eq!(ds.sites, vec!["A", "B"]);
        assert_eq!(ds.booster_categories, vec!["FT"]);
        assert_eq!(ds.payload_bounds, (100.0, 300.0));
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn empty_dataset_has_zero_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.payload_bounds, (0.0, 0.0));
        assert!(ds.sites.is_empty());
    }

    #[test]
    fn outcome_indicator_matches_class_column() {
        assert_eq!(Outcome::Success.indicator(), 1);
        assert_eq!(Outcome::Failure.indicator(), 0);
        assert_eq!(Outcome::Success.label(), "Success");
        assert_eq!(Outcome::Failure.to_string(), "Failure");
    }
}
