use super::aggregate::{has_changes, AuthHooksConfig, HookKind, HooksForm};

/// Состояние формы хуков между загрузкой, правками и сохранением.
///
/// - `values`: текущие значения полей
/// - `baseline`: значения, с которыми сравниваются изменения
/// - `revision`: растёт при загрузке и сбросе, селекторы по нему перечитывают поле
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HooksFormState<F: HooksForm> {
    pub values: F,
    pub baseline: F,
    pub revision: u32,
}

impl<F: HooksForm> HooksFormState<F> {
    /// Сброс после загрузки конфигурации с сервера
    pub fn load(&mut self, config: &AuthHooksConfig) {
        let form = F::from_config(config);
        self.values = form.clone();
        self.baseline = form;
        self.bump_revision();
    }

    /// Отмена несохранённых правок
    pub fn reset(&mut self) {
        self.values = self.baseline.clone();
        self.bump_revision();
    }

    pub fn has_changes(&self) -> bool {
        has_changes(&self.values, &self.baseline)
    }

    pub fn set_uri(&mut self, kind: HookKind, uri: String) {
        if let Some(entry) = self.values.entry_mut(kind) {
            entry.uri = uri;
        }
    }

    pub fn set_enabled(&mut self, kind: HookKind, enabled: bool) {
        if let Some(entry) = self.values.entry_mut(kind) {
            entry.enabled = enabled;
        }
    }

    /// Итог сохранения: при успехе отправленные значения становятся базой,
    /// при ошибке правки остаются в форме
    pub fn finish_submit(&mut self, submitted: F, saved: bool) {
        if saved {
            self.baseline = submitted;
        }
    }

    /// Save и Cancel доступны при одних и тех же условиях
    pub fn actions_enabled(&self, fields_enabled: bool, is_submitting: bool) -> bool {
        fields_enabled && !is_submitting && self.has_changes()
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_auth_hooks::aggregate::{
        BasicHooksForm, EnterpriseHooksForm, HookConfigEntry,
    };

    const MY_FN: &str = "pg-functions://postgres/public/my_fn";
    const OTHER_FN: &str = "pg-functions://postgres/auth/other_fn";

    fn loaded_basic() -> HooksFormState<BasicHooksForm> {
        let mut config = AuthHooksConfig::default();
        config.set_entry(
            HookKind::CustomizeAccessToken,
            HookConfigEntry::new(MY_FN, true),
        );
        let mut state = HooksFormState::default();
        state.load(&config);
        state
    }

    #[test]
    fn test_load_resets_values_and_baseline() {
        let mut state = loaded_basic();
        assert_eq!(state.revision, 1);
        assert_eq!(state.values.customize_access_token.uri, MY_FN);
        assert_eq!(state.values, state.baseline);
        assert!(!state.has_changes());

        state.set_uri(HookKind::CustomizeAccessToken, OTHER_FN.to_string());
        state.load(&AuthHooksConfig::default());
        assert_eq!(state.revision, 2);
        assert_eq!(state.values, BasicHooksForm::default());
        assert_eq!(state.baseline, BasicHooksForm::default());
    }

    #[test]
    fn test_reset_restores_baseline_and_bumps_revision() {
        let mut state = loaded_basic();
        state.set_uri(HookKind::CustomizeAccessToken, String::new());
        state.set_enabled(HookKind::CustomizeAccessToken, false);
        assert!(state.has_changes());

        state.reset();
        assert_eq!(state.revision, 2);
        assert_eq!(state.values.customize_access_token, HookConfigEntry::new(MY_FN, true));
        assert!(!state.has_changes());
    }

    #[test]
    fn test_successful_submit_moves_baseline() {
        let mut state = loaded_basic();
        state.set_uri(HookKind::CustomizeAccessToken, OTHER_FN.to_string());
        let submitted = state.values.clone();

        state.finish_submit(submitted, true);
        assert_eq!(state.baseline.customize_access_token.uri, OTHER_FN);
        assert!(!state.has_changes());
        assert_eq!(state.revision, 1);
    }

    #[test]
    fn test_failed_submit_keeps_edits() {
        let mut state = loaded_basic();
        state.set_uri(HookKind::CustomizeAccessToken, OTHER_FN.to_string());
        let submitted = state.values.clone();

        state.finish_submit(submitted, false);
        assert_eq!(state.values.customize_access_token.uri, OTHER_FN);
        assert_eq!(state.baseline.customize_access_token.uri, MY_FN);
        assert!(state.has_changes());
    }

    #[test]
    fn test_foreign_kinds_are_ignored() {
        let mut state = HooksFormState::<EnterpriseHooksForm>::default();
        state.set_uri(HookKind::CustomizeAccessToken, MY_FN.to_string());
        assert!(!state.has_changes());
    }

    #[test]
    fn test_actions_follow_field_access() {
        let mut state = loaded_basic();
        assert!(!state.actions_enabled(true, false));

        state.set_enabled(HookKind::CustomizeAccessToken, false);
        assert!(state.actions_enabled(true, false));
        assert!(!state.actions_enabled(false, false));
        assert!(!state.actions_enabled(true, true));
    }
}
