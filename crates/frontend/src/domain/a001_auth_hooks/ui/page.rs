use contracts::domain::a001_auth_hooks::aggregate::{BasicHooksForm, EnterpriseHooksForm};
use contracts::system::access::{plan_qualifies, ProjectPermissions, Subscription};
use contracts::system::projects::ProjectInfo;
use leptos::logging::log;
use leptos::prelude::*;

use super::form::HooksFormView;
use super::model;
use super::view_model::{ConfigLoadState, HooksFormViewModel};
use crate::shared::api_utils::is_stale_response;
use crate::shared::pg_catalog::PgCatalogState;

/// Страница настроек Auth Hooks.
///
/// Выбранный проект передаётся параметром; всё, что от него зависит
/// (конфигурация, каталог функций, права, тариф), перезагружается при его смене.
#[component]
pub fn AuthHooksPage(#[prop(into)] project: Signal<Option<ProjectInfo>>) -> impl IntoView {
    let project_ref =
        Signal::derive(move || project.with(|p| p.as_ref().map(|p| p.project_ref.clone())));

    let config_state = RwSignal::new(ConfigLoadState::Loading);
    let permissions = RwSignal::new(None::<ProjectPermissions>);
    let subscription = RwSignal::new(None::<Subscription>);
    let catalog = PgCatalogState::new();

    let basic_vm = HooksFormViewModel::<BasicHooksForm>::new();
    let enterprise_vm = HooksFormViewModel::<EnterpriseHooksForm>::new();

    // Load everything when the selected project changes
    Effect::new(move |_| {
        let Some(info) = project.get() else {
            config_state.set(ConfigLoadState::Loading);
            return;
        };

        catalog.load(info.project_ref.clone());
        load_config(info.project_ref.clone(), project_ref, config_state);
        load_access(info, project_ref, permissions, subscription);
    });

    // Form is reset once remote data is loaded
    Effect::new(move |_| {
        if let ConfigLoadState::Loaded(config) = config_state.get() {
            basic_vm.reset_from_config(&config);
            enterprise_vm.reset_from_config(&config);
        }
    });

    let can_update = Signal::derive(move || {
        permissions
            .get()
            .map(|p| p.can_update_auth_config)
            .unwrap_or(false)
    });
    let plan_ok = Signal::derive(move || subscription.with(|s| plan_qualifies(s.as_ref())));

    view! {
        <div class="page auth-hooks-page">
            {move || catalog.error.get().map(|e| view! {
                <div class="warning-box text-error">{format!("Failed to load database functions: {}", e)}</div>
            })}

            <HooksFormView
                vm=basic_vm
                project_ref=project_ref
                config_state=config_state
                catalog=catalog
                can_update=can_update
                plan_qualifies=plan_ok
            />

            <HooksFormView
                vm=enterprise_vm
                project_ref=project_ref
                config_state=config_state
                catalog=catalog
                can_update=can_update
                plan_qualifies=plan_ok
            />
        </div>
    }
}

fn load_config(
    requested_ref: String,
    current_ref: Signal<Option<String>>,
    config_state: RwSignal<ConfigLoadState>,
) {
    config_state.set(ConfigLoadState::Loading);
    wasm_bindgen_futures::spawn_local(async move {
        let result = model::fetch_auth_config(&requested_ref).await;

        // Ответ для уже не выбранного проекта отбрасываем
        if is_stale_response(current_ref.get_untracked().as_deref(), &requested_ref) {
            return;
        }

        match result {
            Ok(config) => config_state.set(ConfigLoadState::Loaded(config)),
            Err(e) => {
                log!("[AuthHooks] failed to load auth config: {}", e);
                config_state.set(ConfigLoadState::Failed(e));
            }
        }
    });
}

fn load_access(
    info: ProjectInfo,
    current_ref: Signal<Option<String>>,
    permissions: RwSignal<Option<ProjectPermissions>>,
    subscription: RwSignal<Option<Subscription>>,
) {
    permissions.set(None);
    subscription.set(None);

    wasm_bindgen_futures::spawn_local(async move {
        let loaded_permissions = model::fetch_permissions(&info.project_ref).await;
        let loaded_subscription = model::fetch_subscription(&info.organization_slug).await;

        if is_stale_response(current_ref.get_untracked().as_deref(), &info.project_ref) {
            return;
        }

        match loaded_permissions {
            Ok(p) => permissions.set(Some(p)),
            Err(e) => log!("[AuthHooks] failed to load permissions: {}", e),
        }
        match loaded_subscription {
            Ok(s) => subscription.set(Some(s)),
            Err(e) => log!("[AuthHooks] failed to load subscription: {}", e),
        }
    });
}
