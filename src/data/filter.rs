use super::model::{LaunchDataset, LaunchRecord};

// ---------------------------------------------------------------------------
// Selection: which slice of the dataset the derived views look at
// ---------------------------------------------------------------------------

/// Launch-site restriction: everything, or a single named site.
///
/// A `Site` value that does not occur in the dataset is tolerated; it simply
/// matches nothing, so every derived view degrades to an empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Whether `record` passes the site restriction.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.site == *site,
        }
    }

    /// Human-readable label for the UI.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All sites",
            SiteSelection::Site(site) => site,
        }
    }
}

/// Closed payload-mass interval `[low, high]`, in kilograms.
///
/// An inverted interval (`low > high`) is kept as-is rather than swapped;
/// it contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// Whether `mass` lies within the closed interval.
    pub fn contains(&self, mass: f64) -> bool {
        mass >= self.low && mass <= self.high
    }

    /// True when the interval is inverted and cannot match any record.
    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }
}

/// The full user-chosen filter state. Fields are only ever replaced whole;
/// there is no partial update a reader could observe.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl Selection {
    /// Default selection for a freshly loaded dataset: all sites, full
    /// observed payload range.
    pub fn for_dataset(dataset: &LaunchDataset) -> Self {
        let (min, max) = dataset.payload_bounds;
        Selection {
            site: SiteSelection::All,
            payload: PayloadRange::new(min, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    fn rec(site: &str, mass: f64) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass: mass,
            outcome: Outcome::Success,
            booster_category: "v1.0".to_string(),
        }
    }

    #[test]
    fn all_matches_every_site() {
        assert!(SiteSelection::All.matches(&rec("KSC LC-39A", 100.0)));
        assert!(SiteSelection::All.matches(&rec("VAFB SLC-4E", 100.0)));
    }

    #[test]
    fn site_matches_exact_name_only() {
        let sel = SiteSelection::Site("KSC LC-39A".to_string());
        assert!(sel.matches(&rec("KSC LC-39A", 100.0)));
        assert!(!sel.matches(&rec("CCAFS LC-40", 100.0)));
    }

    #[test]
    fn range_is_a_closed_interval() {
        let range = PayloadRange::new(1000.0, 2000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(2000.0));
        assert!(range.contains(1500.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(2000.1));
    }

    #[test]
    fn degenerate_range_contains_only_its_point() {
        let range = PayloadRange::new(1500.0, 1500.0);
        assert!(range.contains(1500.0));
        assert!(!range.contains(1499.0));
        assert!(!range.is_empty());
    }

    #[test]
    fn inverted_range_is_empty() {
        let range = PayloadRange::new(2000.0, 1000.0);
        assert!(range.is_empty());
        assert!(!range.contains(1500.0));
    }

    #[test]
    fn default_selection_spans_dataset_bounds() {
        let ds = LaunchDataset::from_records(vec![rec("A", 500.0), rec("A", 3000.0)]);
        let sel = Selection::for_dataset(&ds);
        assert_eq!(sel.site, SiteSelection::All);
        assert_eq!(sel.payload, PayloadRange::new(500.0, 3000.0));
    }
}
