//! Chart-ready Plotly structures, built from the filtered view.
//!
//! Every builder is a pure function of `(records, config)` returning the
//! data or layout value handed to Plotly, so the whole shaping step can be
//! tested without a browser. The chart components own the actual
//! newPlot/react/purge calls.

use common::PredictionRecord;
use plotly::common::{Marker, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Scatter};
use serde_json::{Value, json};

use crate::settings::AppSettings;

/// Shared presentation settings, passed explicitly into every builder call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub transition_ms: u32,
    pub easing: String,
    pub responsive: bool,
    pub display_mode_bar: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            transition_ms: 1200,
            // Closest Plotly easing to the upstream dashboard's easeOutQuart
            easing: "cubic-out".to_string(),
            responsive: true,
            display_mode_bar: false,
        }
    }
}

impl ChartConfig {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            transition_ms: settings.chart_transition_ms,
            ..Self::default()
        }
    }

    fn transition(&self) -> Value {
        json!({"duration": self.transition_ms, "easing": self.easing})
    }

    /// The Plotly config object shared by all four charts.
    pub fn plot_config(&self) -> Value {
        json!({"responsive": self.responsive, "displayModeBar": self.display_mode_bar})
    }
}

/// Fixed crop palette; crops outside the mapping fall back to grey.
pub fn crop_color(crop: &str) -> &'static str {
    match crop {
        "Maize" => "#ffd900",
        "Wheat" => "#ff6a00",
        "Rice" => "#fe0000",
        "Soybean" => "#00fe08",
        "Cotton" => "#0783ff",
        _ => "#888888",
    }
}

/// Category-axis label for a record: crop name plus 1-based position.
fn point_label(record: &PredictionRecord, index: usize) -> String {
    format!("{} {}", record.crop, index + 1)
}

/// Hover line reporting fertilizer/irrigation usage for one record.
fn usage_note(record: &PredictionRecord) -> String {
    format!(
        "Fertilizer: {} | Irrigation: {}",
        if record.fertilizer_used { "✅" } else { "❌" },
        if record.irrigation_used { "💧" } else { "❌" }
    )
}

/// Traces for the yield/weather combo: one yield line on the left axis and
/// rainfall/temperature bars on the right axis, sharing a category axis
/// indexed by record position.
pub fn combo_data(records: &[PredictionRecord]) -> Value {
    let labels: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(i, r)| point_label(r, i))
        .collect();
    let yields: Vec<f64> = records.iter().map(|r| r.predicted_yield).collect();
    let rainfall: Vec<f64> = records.iter().map(|r| r.rainfall).collect();
    let temperature: Vec<f64> = records.iter().map(|r| r.temperature).collect();
    let usage: Vec<String> = records.iter().map(usage_note).collect();

    json!([
        {
            "type": "scatter",
            "mode": "lines+markers",
            "name": "Predicted Yield (tons/ha)",
            "x": labels.clone(),
            "y": yields,
            "customdata": usage,
            "hovertemplate": "%{y:.2f} tons/ha<br>%{customdata}<extra></extra>",
            "line": {"color": "#6bff0256", "shape": "spline"},
            "fill": "tozeroy",
            "fillcolor": "rgba(9, 135, 193, 0.28)",
            "marker": {"size": 5},
            "yaxis": "y"
        },
        {
            "type": "bar",
            "name": "Rainfall (mm)",
            "x": labels.clone(),
            "y": rainfall,
            "marker": {"color": "rgb(153, 0, 255)"},
            "yaxis": "y2"
        },
        {
            "type": "bar",
            "name": "Temperature (°C)",
            "x": labels,
            "y": temperature,
            "marker": {"color": "rgb(255, 166, 0)"},
            "yaxis": "y2"
        }
    ])
}

/// Combo layout: independent dual y-axes, right-axis gridlines suppressed,
/// unified hover so the usage note shows per hovered index.
pub fn combo_layout(config: &ChartConfig) -> Value {
    json!({
        "margin": {"t": 10, "r": 60, "l": 50, "b": 30},
        "hovermode": "x unified",
        "barmode": "group",
        "legend": {"orientation": "h", "y": -0.2},
        "yaxis": {
            "title": {"text": "Yield (tons/ha)"},
            "rangemode": "tozero"
        },
        "yaxis2": {
            "title": {"text": "Rainfall / Temperature"},
            "overlaying": "y",
            "side": "right",
            "showgrid": false,
            "rangemode": "tozero"
        },
        "transition": config.transition()
    })
}

/// One (rainfall, predicted_yield) point per filtered record.
pub fn scatter_data(records: &[PredictionRecord]) -> Value {
    let rainfall: Vec<f64> = records.iter().map(|r| r.rainfall).collect();
    let yields: Vec<f64> = records.iter().map(|r| r.predicted_yield).collect();

    let trace = Scatter::new(rainfall, yields)
        .mode(Mode::Markers)
        .name("Rainfall vs Yield")
        .marker(Marker::new().color("rgb(0, 51, 255)"));

    Value::Array(vec![serde_json::to_value(&trace).unwrap()])
}

pub fn scatter_layout(config: &ChartConfig) -> Value {
    let layout = Layout::new()
        .x_axis(Axis::new().title(Title::with_text("Rainfall (mm)")))
        .y_axis(Axis::new().title(Title::with_text("Yield (tons/ha)")))
        .height(300);

    let mut value = serde_json::to_value(&layout).unwrap();
    value["transition"] = config.transition();
    value
}

/// One bar per distinct crop in the filtered view, in first-occurrence
/// order, colored by the fixed crop palette.
pub fn crop_bar_data(records: &[PredictionRecord]) -> Value {
    let averages = compute::crop_averages(records);
    let labels: Vec<String> = averages.iter().map(|a| a.crop.clone()).collect();
    let values: Vec<f64> = averages.iter().map(|a| a.average_yield).collect();
    let colors: Vec<&'static str> = averages.iter().map(|a| crop_color(&a.crop)).collect();

    json!([{
        "type": "bar",
        "name": "Avg Yield (tons/ha)",
        "x": labels,
        "y": values,
        "marker": {"color": colors}
    }])
}

pub fn crop_bar_layout(config: &ChartConfig) -> Value {
    json!({
        "margin": {"t": 10, "r": 10, "l": 50, "b": 30},
        "showlegend": false,
        "yaxis": {"title": {"text": "Avg Yield (tons/ha)"}},
        "transition": config.transition()
    })
}

/// Fertilizer usage split as a two-segment doughnut.
pub fn doughnut_data(records: &[PredictionRecord]) -> Value {
    let split = compute::fertilizer_split(records);

    json!([{
        "type": "pie",
        "hole": 0.5,
        "labels": ["Used", "Not Used"],
        "values": [split.used, split.not_used],
        "marker": {"colors": ["#ff9c07", "#fe0048"]}
    }])
}

pub fn doughnut_layout(config: &ChartConfig) -> Value {
    json!({
        "margin": {"t": 10, "r": 10, "l": 10, "b": 30},
        "legend": {"orientation": "h", "y": -0.2},
        "transition": config.transition()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use compute::{CropFilter, apply_filter};

    fn record(crop: &str, predicted_yield: f64, rainfall: f64) -> PredictionRecord {
        PredictionRecord {
            crop: crop.to_string(),
            predicted_yield,
            rainfall,
            temperature: 23.0,
            fertilizer_used: crop == "Maize",
            irrigation_used: true,
            days_to_harvest: None,
        }
    }

    fn sample() -> Vec<PredictionRecord> {
        vec![
            record("Maize", 4.0, 600.0),
            record("Wheat", 3.2, 420.0),
            record("Maize", 6.0, 710.0),
        ]
    }

    #[test]
    fn combo_labels_records_by_crop_and_position() {
        let data = combo_data(&sample());
        let traces = data.as_array().unwrap();
        assert_eq!(traces.len(), 3);

        let labels = traces[0]["x"].as_array().unwrap();
        assert_eq!(labels[0], "Maize 1");
        assert_eq!(labels[1], "Wheat 2");
        assert_eq!(labels[2], "Maize 3");
        // All three traces share the category axis.
        assert_eq!(traces[1]["x"], traces[0]["x"]);
        assert_eq!(traces[2]["x"], traces[0]["x"]);
    }

    #[test]
    fn combo_splits_series_across_both_axes() {
        let data = combo_data(&sample());
        let traces = data.as_array().unwrap();

        assert_eq!(traces[0]["yaxis"], "y");
        assert_eq!(traces[0]["y"].as_array().unwrap().len(), 3);
        assert_eq!(traces[1]["yaxis"], "y2");
        assert_eq!(traces[1]["y"][0], 600.0);
        assert_eq!(traces[2]["yaxis"], "y2");
        assert_eq!(traces[2]["y"][0], 23.0);
    }

    #[test]
    fn combo_hover_reports_usage_per_record() {
        let data = combo_data(&sample());
        let usage = data[0]["customdata"].as_array().unwrap();
        assert_eq!(usage.len(), 3);
        assert_eq!(usage[0], "Fertilizer: ✅ | Irrigation: 💧");
        assert_eq!(usage[1], "Fertilizer: ❌ | Irrigation: 💧");
    }

    #[test]
    fn combo_layout_suppresses_right_axis_grid() {
        let layout = combo_layout(&ChartConfig::default());
        assert_eq!(layout["yaxis2"]["side"], "right");
        assert_eq!(layout["yaxis2"]["showgrid"], false);
        assert_eq!(layout["transition"]["duration"], 1200);
    }

    #[test]
    fn scatter_emits_one_point_per_record() {
        let records = sample();
        let data = scatter_data(&records);
        let trace = &data.as_array().unwrap()[0];

        assert_eq!(trace["x"].as_array().unwrap().len(), records.len());
        assert_eq!(trace["x"][0], 600.0);
        assert_eq!(trace["y"][0], 4.0);
        assert_eq!(trace["mode"], "markers");
    }

    #[test]
    fn scatter_layout_carries_the_transition() {
        let config = ChartConfig {
            transition_ms: 300,
            ..ChartConfig::default()
        };
        let layout = scatter_layout(&config);
        assert_eq!(layout["transition"]["duration"], 300);
        assert_eq!(layout["transition"]["easing"], "cubic-out");
    }

    #[test]
    fn crop_bars_average_and_color_each_group() {
        let data = crop_bar_data(&sample());
        let trace = &data.as_array().unwrap()[0];

        assert_eq!(trace["x"][0], "Maize");
        assert_eq!(trace["x"][1], "Wheat");
        assert_eq!(trace["y"][0], 5.0);
        assert_eq!(trace["y"][1], 3.2);
        assert_eq!(trace["marker"]["color"][0], "#ffd900");
        assert_eq!(trace["marker"]["color"][1], "#ff6a00");
    }

    #[test]
    fn unmapped_crops_fall_back_to_grey() {
        let data = crop_bar_data(&[record("Quinoa", 1.0, 200.0)]);
        assert_eq!(data[0]["marker"]["color"][0], "#888888");
        assert_eq!(crop_color("Soybean"), "#00fe08");
    }

    #[test]
    fn doughnut_counts_partition_the_view() {
        let records = sample();
        let data = doughnut_data(&records);
        let values = data[0]["values"].as_array().unwrap();

        assert_eq!(values[0], 2);
        assert_eq!(values[1], 1);
        assert_eq!(
            values[0].as_u64().unwrap() + values[1].as_u64().unwrap(),
            records.len() as u64
        );
        assert_eq!(data[0]["labels"][0], "Used");
        assert_eq!(data[0]["hole"], 0.5);
    }

    #[test]
    fn refiltering_to_all_rebuilds_identical_charts() {
        let records = sample();
        let narrowed = apply_filter(&records, &CropFilter::from_value("Maize"));
        assert_eq!(scatter_data(&narrowed)[0]["x"].as_array().unwrap().len(), 2);

        let restored = apply_filter(&records, &CropFilter::All);
        assert_eq!(combo_data(&restored), combo_data(&records));
        assert_eq!(scatter_data(&restored), scatter_data(&records));
        assert_eq!(crop_bar_data(&restored), crop_bar_data(&records));
        assert_eq!(doughnut_data(&restored), doughnut_data(&records));
    }
}
