use std::collections::BTreeMap;

use super::filter::{Selection, SiteSelection};
use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Derived tables
// ---------------------------------------------------------------------------

/// One labelled bucket of the outcome-distribution view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionSlice {
    pub label: String,
    pub count: u64,
}

/// One row of the payload/outcome correlation view.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationPoint {
    pub site: String,
    pub payload_mass: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// Outcome distribution
// ---------------------------------------------------------------------------

/// Derive the outcome-distribution table for the current site selection.
///
/// * `All` – per-site **success counts** (not a full outcome breakdown),
///   one slice per site in sorted site order, labelled with the site name.
/// * `Site(s)` – success and failure counts among records of that site,
///   labelled "Success" / "Failure", ordered by descending count with
///   success first on ties; outcomes with zero occurrences are omitted.
///
/// A site absent from the dataset yields an empty table, never an error.
pub fn outcome_distribution(
    dataset: &LaunchDataset,
    site: &SiteSelection,
) -> Vec<DistributionSlice> {
    match site {
        SiteSelection::All => {
            let mut successes_by_site: BTreeMap<&str, u64> = BTreeMap::new();
            for rec in &dataset.records {
                *successes_by_site.entry(&rec.site).or_default() +=
                    rec.outcome.indicator();
            }
            successes_by_site
                .into_iter()
                .map(|(site, count)| DistributionSlice {
                    label: site.to_string(),
                    count,
                })
                .collect()
        }
        SiteSelection::Site(_) => {
            let mut successes = 0u64;
            let mut failures = 0u64;
            for rec in dataset.records.iter().filter(|r| site.matches(r)) {
                if rec.outcome.is_success() {
                    successes += 1;
                } else {
                    failures += 1;
                }
            }

            let mut slices: Vec<(Outcome, u64)> = [
                (Outcome::Success, successes),
                (Outcome::Failure, failures),
            ]
            .into_iter()
            .filter(|&(_, count)| count > 0)
            .collect();
            // Stable sort keeps success ahead of failure on equal counts.
            slices.sort_by(|a, b| b.1.cmp(&a.1));

            slices
                .into_iter()
                .map(|(outcome, count)| DistributionSlice {
                    label: outcome.label().to_string(),
                    count,
                })
                .collect()
        }
    }
}

// ---------------------------------------------------------------------------
// Payload / outcome correlation
// ---------------------------------------------------------------------------

/// Derive the correlation table for the current selection.
///
/// Records are restricted to the selected site (all sites when `All`), then
/// narrowed by two sequential passes: first the lower payload bound, then
/// the upper bound on the already-filtered rows. Row order is the dataset's
/// natural order. An inverted range yields an empty table.
pub fn correlation_view(dataset: &LaunchDataset, selection: &Selection) -> Vec<CorrelationPoint> {
    let mut rows: Vec<&_> = dataset
        .records
        .iter()
        .filter(|rec| selection.site.matches(rec))
        .collect();

    rows.retain(|rec| rec.payload_mass >= selection.payload.low);
    rows.retain(|rec| rec.payload_mass <= selection.payload.high);

    rows.into_iter()
        .map(|rec| CorrelationPoint {
            site: rec.site.clone(),
            payload_mass: rec.payload_mass,
            outcome: rec.outcome,
            booster_category: rec.booster_category.clone(),
        })
        .collect()
}
