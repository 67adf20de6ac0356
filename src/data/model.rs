use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – binary launch result
// ---------------------------------------------------------------------------

/// Launch outcome, encoded as 0 (failure) / 1 (success) in source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret the raw 0/1 encoding used by the source datasets.
    pub fn from_class(class: i64) -> Option<Outcome> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// The raw 0/1 encoding, also used as the scatter plot's y value.
    pub fn as_class(self) -> i64 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site label, e.g. `CCAFS LC-40`.
    pub site: String,
    /// Payload mass in kilograms.
    pub payload_mass_kg: f64,
    /// Binary launch result.
    pub outcome: Outcome,
    /// Booster version category, e.g. `v1.1` or `FT`.
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with indices computed once at load time.
/// Read-only for the rest of the process lifetime.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches (rows), in source order.
    pub records: Vec<LaunchRecord>,
    /// Sorted list of distinct launch sites.
    pub sites: Vec<String>,
    /// Sorted set of distinct booster version categories.
    pub booster_categories: BTreeSet<String>,
    /// Observed payload mass bounds (min, max) across all records.
    pub payload_bounds: (f64, f64),
}

impl LaunchDataset {
    /// Build the site/category indices and payload bounds from the rows.
    ///
    /// Callers must not pass an empty record list; the loader rejects empty
    /// inputs before this point so the payload bounds are always defined.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut site_set: BTreeSet<String> = BTreeSet::new();
        let mut booster_categories: BTreeSet<String> = BTreeSet::new();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for rec in &records {
            site_set.insert(rec.site.clone());
            booster_categories.insert(rec.booster_category.clone());
            min = min.min(rec.payload_mass_kg);
            max = max.max(rec.payload_mass_kg);
        }

        let sites: Vec<String> = site_set.into_iter().collect();
        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_bounds: (min, max),
        }
    }

    /// Number of launches.
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

    fn record(site: &str, mass: f64, outcome: Outcome, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: mass,
            outcome,
            booster_category: booster.to_string(),
        }
    }

    #[test]
    fn indices_are_sorted_and_distinct() {
        let ds = LaunchDataset::from_records(vec![
            record("SiteB", 3000.0, Outcome::Success, "v1.1"),
            record("SiteA", 500.0, Outcome::Success, "v1.0"),
            record("SiteA", 1500.0, Outcome::Failure, "v1.0"),
        ]);

        assert_eq!(ds.sites, vec!["SiteA".to_string(), "SiteB".to_string()]);
        assert_eq!(ds.booster_categories.len(), 2);
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
    }

    #[test]
    fn payload_bounds_are_observed_min_max() {
        let ds = LaunchDataset::from_records(vec![
            record("SiteA", 500.0, Outcome::Success, "v1.0"),
            record("SiteB", 9000.0, Outcome::Failure, "v1.1"),
            record("SiteB", 3000.0, Outcome::Success, "v1.1"),
        ]);

        assert_eq!(ds.payload_bounds, (500.0, 9000.0));
    }

    #[test]
    fn outcome_class_round_trip() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.as_class(), 1);
        assert!(Outcome::Success.is_success());
        assert!(!Outcome::Failure.is_success());
    }
}
