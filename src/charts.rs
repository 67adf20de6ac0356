use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::filter::SiteSelection;
use crate::data::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Chart specs – abstract descriptions handed to the rendering layer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

/// Outcome distribution as labelled slices. An empty subset produces a spec
/// with zero slices; the renderer decides how to show the empty state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChartSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChartSpec {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    /// Booster version category for this series.
    pub label: String,
    /// `[payload mass kg, outcome class]` pairs, one per record.
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChartSpec {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Builders – stateless, recomputed on every input change
// ---------------------------------------------------------------------------

/// Build the outcome pie from the filtered subset.
///
/// With [`SiteSelection::AllSites`] there is one slice per site present in
/// the subset, valued by that site's count of successful launches. With a
/// single site selected there is one slice per outcome present in the
/// subset (success first), so at most two.
pub fn outcome_distribution(
    dataset: &LaunchDataset,
    subset: &[usize],
    selection: &SiteSelection,
) -> PieChartSpec {
    match selection {
        SiteSelection::AllSites => {
            let mut successes_by_site: BTreeMap<&str, f64> = BTreeMap::new();
            for &idx in subset {
                let rec = &dataset.records[idx];
                let entry = successes_by_site.entry(rec.site.as_str()).or_insert(0.0);
                if rec.outcome.is_success() {
                    *entry += 1.0;
                }
            }
            PieChartSpec {
                title: "Total Success Launches by Site".to_string(),
                slices: successes_by_site
                    .into_iter()
                    .map(|(site, value)| PieSlice {
                        label: site.to_string(),
                        value,
                    })
                    .collect(),
            }
        }
        SiteSelection::Site(site) => {
            let mut successes = 0.0;
            let mut failures = 0.0;
            for &idx in subset {
                match dataset.records[idx].outcome {
                    Outcome::Success => successes += 1.0,
                    Outcome::Failure => failures += 1.0,
                }
            }
            let mut slices = Vec::new();
            for (outcome, count) in [(Outcome::Success, successes), (Outcome::Failure, failures)] {
                if count > 0.0 {
                    slices.push(PieSlice {
                        label: outcome.to_string(),
                        value: count,
                    });
                }
            }
            PieChartSpec {
                title: format!("Success vs Failure for {site}"),
                slices,
            }
        }
    }
}

/// Build the payload-vs-outcome scatter from the filtered subset.
///
/// No aggregation: one point per record, grouped into a series per booster
/// version category so the rendering layer can colour by category.
pub fn payload_outcome_scatter(
    dataset: &LaunchDataset,
    subset: &[usize],
    selection: &SiteSelection,
) -> ScatterChartSpec {
    let mut by_category: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in subset {
        let rec = &dataset.records[idx];
        by_category
            .entry(rec.booster_category.as_str())
            .or_default()
            .push([rec.payload_mass_kg, rec.outcome.as_class() as f64]);
    }

    let title = match selection {
        SiteSelection::AllSites => "Payload vs Outcome for All Sites".to_string(),
        SiteSelection::Site(site) => format!("Payload vs Outcome for {site}"),
    };

    ScatterChartSpec {
        title,
        x_label: "Payload Mass (kg)".to_string(),
        y_label: "Outcome".to_string(),
        series: by_category
            .into_iter()
            .map(|(label, points)| ScatterSeries {
                label: label.to_string(),
                points,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn record(site: &str, mass: f64, outcome: Outcome, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: mass,
            outcome,
            booster_category: booster.to_string(),
        }
    }

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("SiteA", 500.0, Outcome::Success, "v1.0"),
            record("SiteA", 1500.0, Outcome::Failure, "v1.0"),
            record("SiteB", 3000.0, Outcome::Success, "v1.1"),
            record("SiteB", 9000.0, Outcome::Failure, "v1.1"),
            record("SiteB", 4000.0, Outcome::Success, "FT"),
        ])
    }

    fn all_indices(ds: &LaunchDataset) -> Vec<usize> {
        (0..ds.len()).collect()
    }

    #[test]
    fn pie_all_sites_has_one_slice_per_site_with_success_counts() {
        let ds = dataset();
        let spec = outcome_distribution(&ds, &all_indices(&ds), &SiteSelection::AllSites);

        assert_eq!(spec.title, "Total Success Launches by Site");
        assert_eq!(spec.slices.len(), 2);
        assert_eq!(spec.slices[0].label, "SiteA");
        assert_eq!(spec.slices[0].value, 1.0);
        assert_eq!(spec.slices[1].label, "SiteB");
        assert_eq!(spec.slices[1].value, 2.0);
    }

    #[test]
    fn pie_all_sites_counts_only_sites_in_subset() {
        let ds = dataset();
        // Subset restricted to SiteB rows.
        let spec = outcome_distribution(&ds, &[2, 3, 4], &SiteSelection::AllSites);
        assert_eq!(spec.slices.len(), 1);
        assert_eq!(spec.slices[0].label, "SiteB");
    }

    #[test]
    fn pie_single_site_has_at_most_two_slices() {
        let ds = dataset();
        let selection = SiteSelection::Site("SiteA".to_string());
        let spec = outcome_distribution(&ds, &[0, 1], &selection);

        assert_eq!(spec.title, "Success vs Failure for SiteA");
        assert_eq!(spec.slices.len(), 2);
        assert_eq!(spec.slices[0].label, "Success");
        assert_eq!(spec.slices[0].value, 1.0);
        assert_eq!(spec.slices[1].label, "Failure");
        assert_eq!(spec.slices[1].value, 1.0);
        assert_eq!(spec.total(), 2.0);
    }

    #[test]
    fn pie_single_site_omits_absent_outcomes() {
        let ds = dataset();
        let selection = SiteSelection::Site("SiteB".to_string());
        // Only the two successful SiteB launches.
        let spec = outcome_distribution(&ds, &[2, 4], &selection);
        assert_eq!(spec.slices.len(), 1);
        assert_eq!(spec.slices[0].label, "Success");
        assert_eq!(spec.slices[0].value, 2.0);
    }

    #[test]
    fn pie_empty_subset_has_zero_slices() {
        let ds = dataset();
        let spec = outcome_distribution(&ds, &[], &SiteSelection::AllSites);
        assert!(spec.slices.is_empty());
        assert_eq!(spec.total(), 0.0);
    }

    #[test]
    fn scatter_has_one_point_per_record() {
        let ds = dataset();
        let spec = payload_outcome_scatter(&ds, &all_indices(&ds), &SiteSelection::AllSites);

        assert_eq!(spec.title, "Payload vs Outcome for All Sites");
        assert_eq!(spec.point_count(), ds.len());
        // One series per booster category present, sorted by label.
        let labels: Vec<&str> = spec.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["FT", "v1.0", "v1.1"]);
    }

    #[test]
    fn scatter_points_carry_payload_and_class() {
        let ds = dataset();
        let selection = SiteSelection::Site("SiteA".to_string());
        let spec = payload_outcome_scatter(&ds, &[0, 1], &selection);

        assert_eq!(spec.title, "Payload vs Outcome for SiteA");
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].label, "v1.0");
        assert_eq!(spec.series[0].points, vec![[500.0, 1.0], [1500.0, 0.0]]);
    }

    #[test]
    fn scatter_empty_subset_has_zero_series() {
        let ds = dataset();
        let spec = payload_outcome_scatter(&ds, &[], &SiteSelection::AllSites);
        assert!(spec.series.is_empty());
        assert_eq!(spec.point_count(), 0);
    }
}
