use leptos::prelude::*;

use crate::shared::components::ui::Select;

/// Выбор схемы базы данных
#[component]
pub fn SchemaSelector(
    #[prop(into)] id: String,
    /// Имена доступных схем
    #[prop(into)]
    schemas: Signal<Vec<String>>,
    #[prop(into)] selected_schema_name: Signal<String>,
    on_select_schema: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let options = Signal::derive(move || {
        schemas
            .get()
            .into_iter()
            .map(|name| (name.clone(), name))
            .collect::<Vec<_>>()
    });

    view! {
        <Select
            id=id
            label="Schema"
            value=selected_schema_name
            options=options
            placeholder="Choose a schema..."
            on_change=on_select_schema
            disabled=disabled
        />
    }
}
