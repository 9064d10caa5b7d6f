//! Aggregations over the filtered view: per-crop yield averages,
//! fertilizer-usage counts, and the summary shown in the stat tiles.

use common::PredictionRecord;
use tracing::instrument;

/// Mean predicted yield for one crop group.
#[derive(Debug, Clone, PartialEq)]
pub struct CropAverage {
    pub crop: String,
    pub average_yield: f64,
}

/// Groups records by crop and computes the arithmetic mean of predicted
/// yield per group.
///
/// Group order follows the first occurrence of each crop within `records`,
/// not a fixed global order, so bars reorder across filter changes. Groups
/// are built only from present values and are therefore never empty.
#[instrument(skip(records))]
pub fn crop_averages(records: &[PredictionRecord]) -> Vec<CropAverage> {
    let mut groups: Vec<(String, f64, usize)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(crop, _, _)| crop == &record.crop) {
            Some((_, sum, count)) => {
                *sum += record.predicted_yield;
                *count += 1;
            }
            None => groups.push((record.crop.clone(), record.predicted_yield, 1)),
        }
    }

    groups
        .into_iter()
        .map(|(crop, sum, count)| CropAverage {
            crop,
            average_yield: sum / count as f64,
        })
        .collect()
}

/// Fertilizer usage counts over the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FertilizerSplit {
    pub used: usize,
    pub not_used: usize,
}

impl FertilizerSplit {
    pub fn total(&self) -> usize {
        self.used + self.not_used
    }
}

/// Partitions the filtered view into fertilizer-used / not-used counts.
pub fn fertilizer_split(records: &[PredictionRecord]) -> FertilizerSplit {
    let used = records.iter().filter(|r| r.fertilizer_used).count();
    FertilizerSplit {
        used,
        not_used: records.len() - used,
    }
}

/// Summary of the filtered view for the stat tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub mean_yield: Option<f64>,
    /// Mean over the records that carry the field; `None` when none do.
    pub mean_days_to_harvest: Option<f64>,
}

#[instrument(skip(records))]
pub fn summarize(records: &[PredictionRecord]) -> SummaryStats {
    let count = records.len();

    let mean_yield = if count == 0 {
        None
    } else {
        Some(records.iter().map(|r| r.predicted_yield).sum::<f64>() / count as f64)
    };

    let harvest_days: Vec<f64> = records
        .iter()
        .filter_map(|r| r.days_to_harvest)
        .map(f64::from)
        .collect();
    let mean_days_to_harvest = if harvest_days.is_empty() {
        None
    } else {
        Some(harvest_days.iter().sum::<f64>() / harvest_days.len() as f64)
    };

    SummaryStats {
        count,
        mean_yield,
        mean_days_to_harvest,
    }
}

/// Qualitative classification of a predicted yield value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YieldLevel {
    Low,
    Average,
    High,
}

/// Assessment shown next to the average-yield stat tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YieldAssessment {
    pub level: YieldLevel,
    pub label: &'static str,
    pub message: &'static str,
    pub tip: &'static str,
}

/// Classifies a yield value: below 2 t/ha is low, below 4 average,
/// otherwise high.
pub fn assess_yield(yield_value: f64) -> YieldAssessment {
    if yield_value < 2.0 {
        YieldAssessment {
            level: YieldLevel::Low,
            label: "Low Yield 🌱",
            message: "Below average yield. Conditions may not be optimal.",
            tip: "Increase irrigation, improve soil nutrients, or review weather impact.",
        }
    } else if yield_value < 4.0 {
        YieldAssessment {
            level: YieldLevel::Average,
            label: "Average Yield 🌿",
            message: "Normal productivity for current conditions.",
            tip: "Small optimizations in fertilizer or irrigation could improve output.",
        }
    } else {
        YieldAssessment {
            level: YieldLevel::High,
            label: "High Yield 🌾",
            message: "Strong prediction. Conditions look favorable.",
            tip: "Maintain current farming strategy and monitor weather stability.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(crop: &str, predicted_yield: f64, fertilizer_used: bool) -> PredictionRecord {
        PredictionRecord {
            crop: crop.to_string(),
            predicted_yield,
            rainfall: 500.0,
            temperature: 22.0,
            fertilizer_used,
            irrigation_used: false,
            days_to_harvest: None,
        }
    }

    #[test]
    fn averages_one_group() {
        let records = vec![record("Maize", 4.0, true), record("Maize", 6.0, true)];
        let averages = crop_averages(&records);
        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].crop, "Maize");
        assert_eq!(averages[0].average_yield, 5.0);
    }

    #[test]
    fn group_order_follows_first_occurrence() {
        let records = vec![
            record("Wheat", 3.0, false),
            record("Maize", 4.0, false),
            record("Wheat", 5.0, false),
            record("Cotton", 2.0, false),
        ];
        let averages = crop_averages(&records);
        let crops: Vec<&str> = averages.iter().map(|a| a.crop.as_str()).collect();
        assert_eq!(crops, vec!["Wheat", "Maize", "Cotton"]);
        assert_eq!(averages[0].average_yield, 4.0);
    }

    #[test]
    fn no_records_means_no_groups() {
        assert!(crop_averages(&[]).is_empty());
    }

    #[test]
    fn fertilizer_split_partitions_the_view() {
        let records = vec![
            record("Maize", 4.0, true),
            record("Wheat", 3.0, false),
            record("Rice", 5.0, true),
        ];
        let split = fertilizer_split(&records);
        assert_eq!(split.used, 2);
        assert_eq!(split.not_used, 1);
        assert_eq!(split.total(), records.len());
    }

    #[test]
    fn summarize_empty_view() {
        let summary = summarize(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean_yield, None);
        assert_eq!(summary.mean_days_to_harvest, None);
    }

    #[test]
    fn summarize_averages_only_present_harvest_days() {
        let mut records = vec![
            record("Maize", 4.0, true),
            record("Maize", 2.0, false),
            record("Rice", 6.0, true),
        ];
        records[0].days_to_harvest = Some(100);
        records[2].days_to_harvest = Some(140);

        let summary = summarize(&records);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.mean_yield, Some(4.0));
        assert_eq!(summary.mean_days_to_harvest, Some(120.0));
    }

    #[test]
    fn yield_levels_at_the_boundaries() {
        assert_eq!(assess_yield(1.99).level, YieldLevel::Low);
        assert_eq!(assess_yield(2.0).level, YieldLevel::Average);
        assert_eq!(assess_yield(3.99).level, YieldLevel::Average);
        assert_eq!(assess_yield(4.0).level, YieldLevel::High);
    }
}
