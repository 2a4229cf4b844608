use contracts::domain::a001_auth_hooks::aggregate::{HookKind, HooksForm};
use contracts::system::access::FieldAccess;
use leptos::prelude::*;
use thaw::*;

use super::schema_function_selector::SchemaFunctionSelector;
use super::view_model::{ConfigLoadState, HooksFormViewModel};
use crate::shared::components::page_header::PageHeader;
use crate::shared::notifications::Notifier;
use crate::shared::pg_catalog::PgCatalogState;

/// Форма настроек хуков: секция на каждый хук формы, кнопки Save/Cancel
#[component]
pub fn HooksFormView<F>(
    vm: HooksFormViewModel<F>,
    #[prop(into)] project_ref: Signal<Option<String>>,
    #[prop(into)] config_state: Signal<ConfigLoadState>,
    catalog: PgCatalogState,
    #[prop(into)] can_update: Signal<bool>,
    /// Тариф организации позволяет расширенные хуки
    #[prop(into)]
    plan_qualifies: Signal<bool>,
) -> impl IntoView
where
    F: HooksForm,
{
    let notifier = Notifier::expect_context();

    // Для форм без тарифных ограничений достаточно права на изменение
    let fields_enabled = Signal::derive(move || {
        FieldAccess::resolve(can_update.get(), !F::plan_gated() || plan_qualifies.get())
    });
    let loading = Signal::derive(move || config_state.with(|s| s.is_loading()));
    let load_error = Signal::derive(move || config_state.with(|s| s.error()));

    let on_success = Callback::new(move |_| notifier.success("Successfully updated settings"));
    let on_error = Callback::new(move |_: String| notifier.error("Failed to update settings"));

    let submit = move |_| {
        if let Some(project_ref) = project_ref.get_untracked() {
            vm.submit_command(project_ref, on_success, on_error);
        }
    };

    view! {
        <Show
            when=move || load_error.get().is_none()
            fallback=move || view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <div>
                        <strong>"Failed to retrieve auth configuration"</strong>
                        <div>{move || load_error.get().unwrap_or_default()}</div>
                    </div>
                </MessageBar>
            }
        >
            <div class="settings-form" id=F::FORM_ID>
                <PageHeader title=F::TITLE subtitle=F::DESCRIPTION />

                <div class="settings-form__panel">
                    {F::KINDS
                        .iter()
                        .map(|kind| hook_section(vm, *kind, catalog, fields_enabled, loading))
                        .collect_view()}
                </div>

                <div class="settings-form__footer">
                    {move || {
                        FieldAccess::missing_permission_helper(can_update.get())
                            .map(|text| view! { <small class="help-text">{text}</small> })
                    }}
                    <Space>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.reset()
                            disabled=move || !vm.actions_enabled(fields_enabled.get())
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=submit
                            disabled=move || !vm.actions_enabled(fields_enabled.get())
                        >
                            {move || if vm.is_submitting.get() { "Saving..." } else { "Save" }}
                        </Button>
                    </Space>
                </div>
            </div>
        </Show>
    }
}

fn hook_section<F: HooksForm>(
    vm: HooksFormViewModel<F>,
    kind: HookKind,
    catalog: PgCatalogState,
    fields_enabled: Signal<bool>,
    loading: Signal<bool>,
) -> impl IntoView {
    let disabled = Signal::derive(move || !fields_enabled.get());
    let toggle_visible = vm.toggle_visible(kind);
    let enabled = vm.enabled(kind);

    view! {
        <section class="settings-form__section">
            <h3 class="settings-form__section-label">{kind.title()}</h3>
            <div class="settings-form__section-content">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <Flex gap=FlexGap::Small style="align-items: center;">
                            <Spinner />
                            <span>"Loading..."</span>
                        </Flex>
                    }
                >
                    <SchemaFunctionSelector
                        id=kind.uri_key()
                        value=vm.uri(kind)
                        on_change=Callback::new(move |uri: String| vm.set_uri(kind, uri))
                        revision=vm.revision()
                        catalog=catalog
                        description_text=kind.description()
                        disabled=disabled
                    />
                    <Show when=move || toggle_visible.get()>
                        <label class="form__checkbox-wrapper">
                            <input
                                type="checkbox"
                                id=kind.enabled_key()
                                prop:checked=move || enabled.get()
                                disabled=move || disabled.get()
                                on:change=move |ev| vm.set_enabled(kind, event_target_checked(&ev))
                            />
                            <span class="form__checkbox-label">"Enable hook"</span>
                        </label>
                    </Show>
                </Show>
            </div>
        </section>
    }
}
