use contracts::domain::a001_auth_hooks::selector::SchemaFunctionSelection;
use leptos::logging::log;
use leptos::prelude::*;

use crate::shared::pg_catalog::{FunctionSelector, PgCatalogState, SchemaSelector};

/// Выбор функции хука: сначала схема, затем функция из неё.
///
/// Значение поля формы меняется только через `on_change`:
/// смена схемы пишет пустую строку, выбор функции пишет собранный URI.
#[component]
pub fn SchemaFunctionSelector(
    /// ID поля формы
    #[prop(into)]
    id: String,
    /// Текущее значение поля (URI функции)
    #[prop(into)]
    value: Signal<String>,
    /// Запись нового значения в поле формы
    on_change: Callback<String>,
    /// Меняется при загрузке/сбросе формы
    #[prop(into)]
    revision: Signal<u32>,
    catalog: PgCatalogState,
    #[prop(optional, into)] description_text: Option<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let selection = RwSignal::new(SchemaFunctionSelection::from_uri(&value.get_untracked()));

    // Перечитываем поле, если оно изменилось извне (загрузка, сброс формы)
    Effect::new(move |prev_revision: Option<u32>| {
        let current_revision = revision.get();
        let current_value = value.get();
        let revision_changed = prev_revision
            .map(|prev| prev != current_revision)
            .unwrap_or(false);

        if selection.with_untracked(|s| s.needs_resync(&current_value, revision_changed)) {
            selection.set(SchemaFunctionSelection::from_uri(&current_value));
        }
        current_revision
    });

    let selected_schema =
        Signal::derive(move || selection.with(|s| s.schema().unwrap_or_default().to_string()));
    let selected_function =
        Signal::derive(move || selection.with(|s| s.function().unwrap_or_default().to_string()));

    let field_id = id.clone();
    let on_select_schema = Callback::new(move |name: String| {
        log!("[{}] schema selected: {:?}", field_id, name);
        selection.update(|s| s.select_schema(&name));
        on_change.run(selection.with_untracked(|s| s.uri()));
    });

    let field_id = id.clone();
    let on_select_function = Callback::new(move |name: String| {
        log!("[{}] function selected: {:?}", field_id, name);
        selection.update(|s| s.select_function(&name));
        on_change.run(selection.with_untracked(|s| s.uri()));
    });

    let schema_names = catalog.schema_names();
    let function_names = catalog.function_names(selected_schema);

    view! {
        <div class="schema-function-selector">
            <SchemaSelector
                id=format!("{}-schema", id)
                schemas=schema_names
                selected_schema_name=selected_schema
                on_select_schema=on_select_schema
                disabled=disabled
            />
            <FunctionSelector
                id=format!("{}-function", id)
                functions=function_names
                schema=selected_schema
                loading=catalog.loading
                selected_function_name=selected_function
                on_select_function=on_select_function
                disabled=disabled
            />
            {description_text.map(|text| view! {
                <div class="help-text">{text}</div>
            })}
        </div>
    }
}
