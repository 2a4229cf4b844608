use leptos::prelude::*;

/// Select component with label support
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Option shown for the empty value
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || placeholder.get().map(|text| {
                    let is_selected = move || value.get().is_empty();
                    view! { <option value="" selected=is_selected>{text}</option> }
                })}
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
