use leptos::prelude::*;

use crate::shared::components::ui::Select;

/// Выбор функции внутри выбранной схемы
#[component]
pub fn FunctionSelector(
    #[prop(into)] id: String,
    /// Имена функций выбранной схемы
    #[prop(into)]
    functions: Signal<Vec<String>>,
    #[prop(into)] schema: Signal<String>,
    /// Каталог ещё загружается
    #[prop(into)]
    loading: Signal<bool>,
    #[prop(into)] selected_function_name: Signal<String>,
    on_select_function: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let options = Signal::derive(move || {
        functions
            .get()
            .into_iter()
            .map(|name| (name.clone(), name))
            .collect::<Vec<_>>()
    });

    // Без схемы выбирать нечего
    let is_disabled = Signal::derive(move || disabled.get() || schema.get().is_empty());

    let placeholder = Signal::derive(move || {
        Some(
            placeholder_text(
                !schema.get().is_empty(),
                loading.get(),
                functions.with(|f| f.is_empty()),
            )
            .to_string(),
        )
    });

    view! {
        <Select
            id=id
            label="Function"
            value=selected_function_name
            options=options
            placeholder=placeholder
            on_change=on_select_function
            disabled=is_disabled
        />
    }
}

fn placeholder_text(has_schema: bool, loading: bool, no_functions: bool) -> &'static str {
    if !has_schema {
        "Choose a schema first"
    } else if loading {
        "Loading functions..."
    } else if no_functions {
        "No functions in this schema"
    } else {
        "Choose a function..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_text() {
        assert_eq!(placeholder_text(false, true, true), "Choose a schema first");
        assert_eq!(placeholder_text(true, true, true), "Loading functions...");
        assert_eq!(placeholder_text(true, false, true), "No functions in this schema");
        assert_eq!(placeholder_text(true, false, false), "Choose a function...");
    }
}
