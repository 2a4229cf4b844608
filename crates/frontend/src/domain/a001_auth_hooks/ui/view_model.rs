use contracts::domain::a001_auth_hooks::aggregate::{AuthHooksConfig, HookKind, HooksForm};
use contracts::domain::a001_auth_hooks::form_state::HooksFormState;
use leptos::logging::log;
use leptos::prelude::*;

use super::model;

/// Состояние загрузки конфигурации с сервера
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigLoadState {
    Loading,
    Loaded(AuthHooksConfig),
    Failed(String),
}

impl ConfigLoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ConfigLoadState::Loading)
    }

    pub fn error(&self) -> Option<String> {
        match self {
            ConfigLoadState::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }
}

/// ViewModel формы хуков поверх [`HooksFormState`]
pub struct HooksFormViewModel<F: HooksForm> {
    pub state: RwSignal<HooksFormState<F>>,
    pub is_submitting: RwSignal<bool>,
}

impl<F: HooksForm> Clone for HooksFormViewModel<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: HooksForm> Copy for HooksFormViewModel<F> {}

impl<F: HooksForm> HooksFormViewModel<F> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(HooksFormState::default()),
            is_submitting: RwSignal::new(false),
        }
    }

    /// Сброс формы после загрузки удалённых данных
    pub fn reset_from_config(&self, config: &AuthHooksConfig) {
        self.state.update(|s| s.load(config));
    }

    /// Отмена несохранённых изменений
    pub fn reset(&self) {
        self.state.update(|s| s.reset());
    }

    /// Save/Cancel доступны только при разрешённых полях
    pub fn actions_enabled(&self, fields_enabled: bool) -> bool {
        let is_submitting = self.is_submitting.get();
        self.state
            .with(|s| s.actions_enabled(fields_enabled, is_submitting))
    }

    pub fn revision(&self) -> Signal<u32> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.revision))
    }

    pub fn uri(&self, kind: HookKind) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| s.values.entry(kind).map(|e| e.uri.clone()).unwrap_or_default())
        })
    }

    pub fn enabled(&self, kind: HookKind) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| s.values.entry(kind).map(|e| e.enabled).unwrap_or(false))
        })
    }

    pub fn toggle_visible(&self, kind: HookKind) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| {
                s.values
                    .entry(kind)
                    .map(|e| e.enable_toggle_visible())
                    .unwrap_or(false)
            })
        })
    }

    pub fn set_uri(&self, kind: HookKind, uri: String) {
        self.state.update(|s| s.set_uri(kind, uri));
    }

    pub fn set_enabled(&self, kind: HookKind, enabled: bool) {
        self.state.update(|s| s.set_enabled(kind, enabled));
    }

    /// Отправка формы целиком одним патчем.
    ///
    /// При успехе отправленные значения становятся новой базой;
    /// при ошибке правки пользователя остаются в форме.
    pub fn submit_command(
        &self,
        project_ref: String,
        on_success: Callback<()>,
        on_error: Callback<String>,
    ) {
        if self.is_submitting.get_untracked() {
            return;
        }

        let submitted = self.state.with_untracked(|s| s.values.clone());
        let patch = submitted.to_patch();
        let state = self.state;
        let is_submitting = self.is_submitting;
        is_submitting.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            match model::update_auth_config(&project_ref, &patch).await {
                Ok(updated) => {
                    log!(
                        "[{}] settings saved at {}",
                        F::FORM_ID,
                        updated.updated_at.to_rfc3339()
                    );
                    state.update(|s| s.finish_submit(submitted, true));
                    on_success.run(());
                }
                Err(e) => {
                    log!("[{}] failed to save settings: {}", F::FORM_ID, e);
                    state.update(|s| s.finish_submit(submitted, false));
                    on_error.run(e);
                }
            }
            is_submitting.set(false);
        });
    }
}

impl<F: HooksForm> Default for HooksFormViewModel<F> {
    fn default() -> Self {
        Self::new()
    }
}
