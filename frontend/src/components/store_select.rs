use yew::prelude::*;
use web_sys::HtmlSelectElement;
use shared::api::ALL_STORES;
use shared::StoreOption;

#[derive(Properties, PartialEq)]
pub struct StoreSelectProps {
    pub id: AttrValue,
    pub options: Vec<StoreOption>,
    /// Currently selected value, empty for none
    pub selected: String,
    pub on_change: Callback<String>,
    /// Offer an "All" entry ahead of the store names
    #[prop_or_default]
    pub include_all: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(StoreSelect)]
pub fn store_select(props: &StoreSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{"Select Store"}</label>
            <select id={props.id.clone()} {onchange} disabled={props.disabled}>
                <option value="" selected={props.selected.is_empty()} disabled=true>
                    {"Select Store"}
                </option>
                {if props.include_all {
                    html! {
                        <option value={ALL_STORES} selected={props.selected == ALL_STORES}>
                            {ALL_STORES}
                        </option>
                    }
                } else { html! {} }}
                {for props.options.iter().map(|option| {
                    html! {
                        <option
                            key={option.value.clone()}
                            value={option.value.clone()}
                            selected={props.selected == option.value}
                        >
                            {option.label.clone()}
                        </option>
                    }
                })}
            </select>
        </div>
    }
}
