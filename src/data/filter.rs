use std::fmt;

use super::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Filter predicate: site selection + inclusive payload range
// ---------------------------------------------------------------------------

/// Dropdown selection: every site, or one specific site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    AllSites,
    Site(String),
}

impl SiteSelection {
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(name) => name == site,
        }
    }

}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::AllSites => write!(f, "All Sites"),
            SiteSelection::Site(name) => write!(f, "{name}"),
        }
    }
}

/// The current control values, applied to both charts.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterQuery {
    pub site: SiteSelection,
    /// Inclusive payload mass range in kg (low, high).
    pub payload_range: (f64, f64),
}

impl FilterQuery {
    fn accepts(&self, site: &str, payload_mass_kg: f64) -> bool {
        let (low, high) = self.payload_range;
        self.site.matches(site) && payload_mass_kg >= low && payload_mass_kg <= high
    }
}

/// Return indices of records that pass the query.
///
/// A record passes when its site matches the selection (always, for
/// [`SiteSelection::AllSites`]) and its payload mass lies in the inclusive
/// range. An unknown site or an inverted range yields an empty result rather
/// than an error; the UI constrains both controls to valid values.
pub fn filter_indices(dataset: &LaunchDataset, query: &FilterQuery) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| query.accepts(&rec.site, rec.payload_mass_kg))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn record(site: &str, mass: f64, outcome: Outcome, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: mass,
            outcome,
            booster_category: booster.to_string(),
        }
    }

    /// The four-record dataset used throughout the filter tests.
    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("SiteA", 500.0, Outcome::Success, "v1.0"),
            record("SiteA", 1500.0, Outcome::Failure, "v1.0"),
            record("SiteB", 3000.0, Outcome::Success, "v1.1"),
            record("SiteB", 9000.0, Outcome::Failure, "v1.1"),
        ])
    }

    fn query(site: SiteSelection, low: f64, high: f64) -> FilterQuery {
        FilterQuery {
            site,
            payload_range: (low, high),
        }
    }

    #[test]
    fn all_sites_full_range_returns_everything() {
        let ds = dataset();
        let q = query(SiteSelection::AllSites, 0.0, 10_000.0);
        assert_eq!(filter_indices(&ds, &q), vec![0, 1, 2, 3]);
    }

    #[test]
    fn single_site_with_narrow_range() {
        let ds = dataset();
        let q = query(SiteSelection::Site("SiteA".to_string()), 0.0, 1000.0);
        assert_eq!(filter_indices(&ds, &q), vec![0]);
    }

    #[test]
    fn all_sites_with_lower_bound_cut() {
        let ds = dataset();
        let q = query(SiteSelection::AllSites, 2000.0, 10_000.0);
        assert_eq!(filter_indices(&ds, &q), vec![2, 3]);
    }

    #[test]
    fn site_filter_only_matches_that_site() {
        let ds = dataset();
        let q = query(SiteSelection::Site("SiteB".to_string()), 0.0, 10_000.0);
        let indices = filter_indices(&ds, &q);
        assert!(indices.iter().all(|&i| ds.records[i].site == "SiteB"));
        assert_eq!(indices, vec![2, 3]);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let ds = dataset();
        // Both endpoints sit exactly on record payload masses.
        let q = query(SiteSelection::AllSites, 1500.0, 3000.0);
        assert_eq!(filter_indices(&ds, &q), vec![1, 2]);

        let q = query(SiteSelection::AllSites, 500.0, 500.0);
        assert_eq!(filter_indices(&ds, &q), vec![0]);
    }

    #[test]
    fn unknown_site_yields_empty_not_error() {
        let ds = dataset();
        let q = query(SiteSelection::Site("SiteC".to_string()), 0.0, 10_000.0);
        assert!(filter_indices(&ds, &q).is_empty());
    }

    #[test]
    fn inverted_range_yields_empty_not_error() {
        let ds = dataset();
        let q = query(SiteSelection::AllSites, 5000.0, 1000.0);
        assert!(filter_indices(&ds, &q).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = dataset();
        let q = query(SiteSelection::Site("SiteA".to_string()), 0.0, 2000.0);
        let first = filter_indices(&ds, &q);
        let second = filter_indices(&ds, &q);
        assert_eq!(first, second);
    }
}
