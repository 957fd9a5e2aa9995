//! Aggregates behind the stats view.

use ppgis_core::entities::Observation;
use ppgis_core::ratings::{MAX_RATING, RatingDimension, round_one_decimal};
use ppgis_core::responses::{DimensionAverage, StatsResponse};

/// Summarize the whole collection.
///
/// Dimension means only consider observations that carry ratings. The overall
/// average spans every observation, so issue reports pull it toward zero.
#[must_use]
pub fn summarize(observations: &[Observation]) -> StatsResponse {
    let rated: Vec<_> = observations.iter().filter_map(|o| o.ratings).collect();
    let issue_reports = observations.iter().filter(|o| o.is_issue()).count();

    let dimensions = if rated.is_empty() {
        Vec::new()
    } else {
        RatingDimension::ALL
            .into_iter()
            .map(|dimension| {
                let total: u32 = rated.iter().map(|r| u32::from(r.get(dimension))).sum();
                DimensionAverage {
                    dimension,
                    label: dimension.label().to_string(),
                    average: round_one_decimal(f64::from(total) / count_f64(rated.len())),
                    full_mark: MAX_RATING,
                }
            })
            .collect()
    };

    let overall_average = if observations.is_empty() {
        0.0
    } else {
        let total: f64 = observations.iter().map(|o| o.average_score).sum();
        round_one_decimal(total / count_f64(observations.len()))
    };

    StatsResponse {
        total_observations: saturating_u32(observations.len()),
        rated_observations: saturating_u32(rated.len()),
        issue_reports: saturating_u32(issue_reports),
        overall_average,
        dimensions,
    }
}

#[allow(clippy::cast_precision_loss)]
fn count_f64(count: usize) -> f64 {
    count as f64
}

fn saturating_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use ppgis_core::catalog::seed_observations;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_collection() {
        let stats = summarize(&[]);
        assert_eq!(stats.total_observations, 0);
        assert_eq!(stats.overall_average, 0.0);
        assert!(stats.dimensions.is_empty());
    }

    #[test]
    fn seeds() {
        let stats = summarize(&seed_observations(Utc::now()));
        assert_eq!(stats.total_observations, 2);
        assert_eq!(stats.rated_observations, 1);
        assert_eq!(stats.issue_reports, 1);
        // (7.8 + 0.0) / 2
        assert_eq!(stats.overall_average, 3.9);

        let averages: Vec<f64> = stats.dimensions.iter().map(|d| d.average).collect();
        assert_eq!(averages, vec![9.0, 9.0, 8.0, 6.0, 7.0]);
        assert_eq!(stats.dimensions[2].label, "Heritage");
        assert!(stats.dimensions.iter().all(|d| d.full_mark == 10));
    }
}
