use common::PredictionRecord;
use compute::{YieldLevel, assess_yield, summarize};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub records: Vec<PredictionRecord>,
}

/// Summary tiles over the current filtered view.
#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    let summary = summarize(&props.records);

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Predictions"}</div>
                    <div class="stat-value">{summary.count}</div>
                    <div class="stat-desc">{"Records in the current view"}</div>
                </div>
            </div>
            { yield_tile(summary.mean_yield) }
            { harvest_tile(summary.mean_days_to_harvest) }
        </div>
    }
}

fn yield_tile(mean_yield: Option<f64>) -> Html {
    let Some(mean) = mean_yield else {
        return html! {};
    };

    let assessment = assess_yield(mean);
    let value_class = match assessment.level {
        YieldLevel::Low => "text-error",
        YieldLevel::Average => "text-warning",
        YieldLevel::High => "text-success",
    };

    html! {
        <div class="stats shadow bg-base-100" title={assessment.tip}>
            <div class="stat">
                <div class="stat-title">{"Average Yield"}</div>
                <div class={classes!("stat-value", value_class)}>{format!("{:.2} t/ha", mean)}</div>
                <div class="stat-desc">{assessment.label}</div>
            </div>
        </div>
    }
}

fn harvest_tile(mean_days: Option<f64>) -> Html {
    match mean_days {
        Some(days) => html! {
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Days to Harvest"}</div>
                    <div class="stat-value">{format!("{:.0}", days)}</div>
                    <div class="stat-desc">{"Average over the current view"}</div>
                </div>
            </div>
        },
        None => html! {},
    }
}
