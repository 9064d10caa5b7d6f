use common::PredictionRecord;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::charts::{self, ChartConfig};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = Plotly)]
    fn react(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = Plotly)]
    fn purge(div_id: &str);
}

fn to_js(value: &serde_json::Value) -> JsValue {
    use serde::Serialize;
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap()
}

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    /// The current filtered view.
    pub records: Vec<PredictionRecord>,
    pub config: ChartConfig,
}

/// Combined yield line and rainfall/temperature bars on dual axes.
#[function_component(YieldWeatherChart)]
pub fn yield_weather_chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();
    let initialized = use_mut_ref(|| false);
    let records = props.records.clone();
    let config = props.config.clone();

    use_effect_with(
        (container_ref.clone(), records, config),
        move |(container_ref, records, config)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                let div_id = element.id();
                if !div_id.is_empty() {
                    let data = to_js(&charts::combo_data(records));
                    let layout = to_js(&charts::combo_layout(config));
                    let plot_config = to_js(&config.plot_config());

                    // First render constructs the chart; later renders swap the
                    // data in place so animation continuity is preserved.
                    if *initialized.borrow() {
                        log::trace!("Updating combo chart in place");
                        react(&div_id, data, layout, plot_config);
                    } else {
                        newPlot(&div_id, data, layout, plot_config);
                        *initialized.borrow_mut() = true;
                    }
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} id="chart-yield-weather" class="chart-container" style="height: 340px;"></div>
    }
}

/// Rainfall vs predicted yield, one point per filtered record.
#[function_component(RainfallScatterChart)]
pub fn rainfall_scatter_chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();
    let initialized = use_mut_ref(|| false);
    let records = props.records.clone();
    let config = props.config.clone();

    use_effect_with(
        (container_ref.clone(), records, config),
        move |(container_ref, records, config)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                let div_id = element.id();
                if !div_id.is_empty() {
                    // The trace comes from the typed plotly API, so it goes
                    // through a JSON round trip instead of the serializer.
                    let data_json = charts::scatter_data(records).to_string();
                    let data = js_sys::JSON::parse(&data_json).unwrap();
                    let layout_json = charts::scatter_layout(config).to_string();
                    let layout = js_sys::JSON::parse(&layout_json).unwrap();
                    let plot_config = to_js(&config.plot_config());

                    if *initialized.borrow() {
                        log::trace!("Updating scatter chart in place");
                        react(&div_id, data, layout, plot_config);
                    } else {
                        newPlot(&div_id, data, layout, plot_config);
                        *initialized.borrow_mut() = true;
                    }
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} id="chart-rainfall-scatter" class="chart-container" style="height: 340px;"></div>
    }
}

/// Average predicted yield per crop in the filtered view.
#[function_component(CropAverageChart)]
pub fn crop_average_chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();
    let records = props.records.clone();
    let config = props.config.clone();

    use_effect_with(
        (container_ref.clone(), records, config),
        move |(container_ref, records, config)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                let div_id = element.id();
                if !div_id.is_empty() {
                    // The label set changes size and order across filters,
                    // which the in-place update path does not handle safely.
                    // Tear the chart down and rebuild it.
                    purge(&div_id);
                    newPlot(
                        &div_id,
                        to_js(&charts::crop_bar_data(records)),
                        to_js(&charts::crop_bar_layout(config)),
                        to_js(&config.plot_config()),
                    );
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} id="chart-crop-average" class="chart-container" style="height: 340px;"></div>
    }
}

/// Fertilizer usage split over the filtered view.
#[function_component(FertilizerDoughnutChart)]
pub fn fertilizer_doughnut_chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();
    let records = props.records.clone();
    let config = props.config.clone();

    use_effect_with(
        (container_ref.clone(), records, config),
        move |(container_ref, records, config)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                let div_id = element.id();
                if !div_id.is_empty() {
                    purge(&div_id);
                    newPlot(
                        &div_id,
                        to_js(&charts::doughnut_data(records)),
                        to_js(&charts::doughnut_layout(config)),
                        to_js(&config.plot_config()),
                    );
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} id="chart-fertilizer-usage" class="chart-container" style="height: 340px;"></div>
    }
}
