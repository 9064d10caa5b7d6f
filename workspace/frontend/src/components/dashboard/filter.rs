use compute::{ALL_CROPS, CropFilter};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CropFilterProps {
    /// Distinct crop names in first-occurrence order.
    pub crops: Vec<String>,
    pub selection: CropFilter,
    pub on_change: Callback<CropFilter>,
}

/// The crop filter dropdown: "All" followed by one option per crop.
#[function_component(CropFilterSelect)]
pub fn crop_filter_select(props: &CropFilterProps) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let value = target.value();
                log::debug!("Crop filter changed to: {}", value);
                on_change.emit(CropFilter::from_value(&value));
            }
        })
    };

    html! {
        <select class="select select-bordered" onchange={on_change}>
            <option value={ALL_CROPS} selected={props.selection.is_all()}>{ALL_CROPS}</option>
            { for props.crops.iter().map(|crop| {
                let selected = crop.as_str() == props.selection.as_value();
                html! {
                    <option value={crop.clone()} selected={selected}>{crop.clone()}</option>
                }
            })}
        </select>
    }
}
