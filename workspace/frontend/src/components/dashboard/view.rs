use compute::{CropFilter, apply_filter, distinct_crops};
use yew::prelude::*;

use super::charts::{
    CropAverageChart, FertilizerDoughnutChart, RainfallScatterChart, YieldWeatherChart,
};
use super::filter::CropFilterSelect;
use super::stats::Stats;
use crate::charts::ChartConfig;
use crate::data;
use crate::settings;

/// The data-to-chart binder: loads the embedded records once, owns the
/// filter selection, and feeds the same filtered view to every chart.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let records = use_memo((), |_| data::load_embedded_records());
    let selection = use_state(|| CropFilter::All);

    // Absent or empty payloads render nothing at all.
    let Some(all_records) = (*records).as_ref() else {
        return html! {};
    };

    let config = ChartConfig::from_settings(&settings::get_settings());
    let crops = distinct_crops(all_records);
    let filtered = apply_filter(all_records, &selection);

    log::trace!(
        "Rendering dashboard with {} of {} records",
        filtered.len(),
        all_records.len()
    );

    let on_filter_change = {
        let selection = selection.clone();
        Callback::from(move |next: CropFilter| {
            log::debug!("Applying crop filter: {:?}", next);
            selection.set(next);
        })
    };

    html! {
        <>
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"Crop Yield Dashboard"}</h1>
                <CropFilterSelect
                    crops={crops}
                    selection={(*selection).clone()}
                    on_change={on_filter_change}
                />
            </div>
            <div class="mt-6">
                <Stats records={filtered.clone()} />
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Predicted Yield vs Weather"}</h2>
                        <YieldWeatherChart records={filtered.clone()} config={config.clone()} />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Rainfall vs Yield"}</h2>
                        <RainfallScatterChart records={filtered.clone()} config={config.clone()} />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Average Yield per Crop"}</h2>
                        <CropAverageChart records={filtered.clone()} config={config.clone()} />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Fertilizer Usage"}</h2>
                        <FertilizerDoughnutChart records={filtered} config={config} />
                    </div>
                </div>
            </div>
        </>
    }
}
