use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Hook kinds
// ============================================================================

/// Точка жизненного цикла аутентификации, к которой подключается хук
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookKind {
    CustomizeAccessToken,
    MfaVerificationAttempt,
    PasswordVerificationAttempt,
}

impl HookKind {
    pub const ALL: [HookKind; 3] = [
        HookKind::CustomizeAccessToken,
        HookKind::MfaVerificationAttempt,
        HookKind::PasswordVerificationAttempt,
    ];

    pub fn uri_key(&self) -> &'static str {
        match self {
            HookKind::CustomizeAccessToken => "HOOK_CUSTOMIZE_ACCESS_TOKEN_URI",
            HookKind::MfaVerificationAttempt => "HOOK_MFA_VERIFICATION_ATTEMPT_URI",
            HookKind::PasswordVerificationAttempt => "HOOK_PASSWORD_VERIFICATION_ATTEMPT_URI",
        }
    }

    pub fn enabled_key(&self) -> &'static str {
        match self {
            HookKind::CustomizeAccessToken => "HOOK_CUSTOMIZE_ACCESS_TOKEN_ENABLED",
            HookKind::MfaVerificationAttempt => "HOOK_MFA_VERIFICATION_ATTEMPT_ENABLED",
            HookKind::PasswordVerificationAttempt => "HOOK_PASSWORD_VERIFICATION_ATTEMPT_ENABLED",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            HookKind::CustomizeAccessToken => "Customize Access Token (JWT) Claims",
            HookKind::MfaVerificationAttempt => "MFA Verification Attempt",
            HookKind::PasswordVerificationAttempt => "Password Verification Attempt",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HookKind::CustomizeAccessToken => {
                "Select the function to be called by Auth each time a new JWT is created. \
                 It should return the claims you wish to be present in the JWT."
            }
            HookKind::MfaVerificationAttempt => {
                "Select the function to be called by Auth each time a user tries to verify \
                 an MFA factor. Return a decision on whether to reject the attempt and future \
                 ones, or to allow the user to keep trying."
            }
            HookKind::PasswordVerificationAttempt => {
                "Select the function to be called by Auth each time a user tries to sign in \
                 with a password. Return a decision whether to reject the attempt, or to \
                 allow the user to keep trying."
            }
        }
    }

    /// Хуки верификации доступны только на тарифах Team/Enterprise
    pub fn is_plan_gated(&self) -> bool {
        !matches!(self, HookKind::CustomizeAccessToken)
    }
}

// ============================================================================
// Entries and remote config
// ============================================================================

/// URI функции и флаг включения для одного хука
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookConfigEntry {
    pub uri: String,
    pub enabled: bool,
}

impl HookConfigEntry {
    pub fn new(uri: impl Into<String>, enabled: bool) -> Self {
        Self {
            uri: uri.into(),
            enabled,
        }
    }

    /// Переключатель имеет смысл только при выбранной функции
    pub fn enable_toggle_visible(&self) -> bool {
        !self.uri.is_empty()
    }
}

/// null от сервера трактуется как значение по умолчанию
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Конфигурация хуков сервиса аутентификации в том виде, в каком её отдаёт API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthHooksConfig {
    #[serde(
        rename = "HOOK_CUSTOMIZE_ACCESS_TOKEN_URI",
        default,
        deserialize_with = "null_as_default"
    )]
    pub customize_access_token_uri: String,
    #[serde(
        rename = "HOOK_CUSTOMIZE_ACCESS_TOKEN_ENABLED",
        default,
        deserialize_with = "null_as_default"
    )]
    pub customize_access_token_enabled: bool,

    #[serde(
        rename = "HOOK_MFA_VERIFICATION_ATTEMPT_URI",
        default,
        deserialize_with = "null_as_default"
    )]
    pub mfa_verification_attempt_uri: String,
    #[serde(
        rename = "HOOK_MFA_VERIFICATION_ATTEMPT_ENABLED",
        default,
        deserialize_with = "null_as_default"
    )]
    pub mfa_verification_attempt_enabled: bool,

    #[serde(
        rename = "HOOK_PASSWORD_VERIFICATION_ATTEMPT_URI",
        default,
        deserialize_with = "null_as_default"
    )]
    pub password_verification_attempt_uri: String,
    #[serde(
        rename = "HOOK_PASSWORD_VERIFICATION_ATTEMPT_ENABLED",
        default,
        deserialize_with = "null_as_default"
    )]
    pub password_verification_attempt_enabled: bool,
}

impl AuthHooksConfig {
    pub fn entry(&self, kind: HookKind) -> HookConfigEntry {
        match kind {
            HookKind::CustomizeAccessToken => HookConfigEntry::new(
                self.customize_access_token_uri.clone(),
                self.customize_access_token_enabled,
            ),
            HookKind::MfaVerificationAttempt => HookConfigEntry::new(
                self.mfa_verification_attempt_uri.clone(),
                self.mfa_verification_attempt_enabled,
            ),
            HookKind::PasswordVerificationAttempt => HookConfigEntry::new(
                self.password_verification_attempt_uri.clone(),
                self.password_verification_attempt_enabled,
            ),
        }
    }

    fn fields_mut(&mut self, kind: HookKind) -> (&mut String, &mut bool) {
        match kind {
            HookKind::CustomizeAccessToken => (
                &mut self.customize_access_token_uri,
                &mut self.customize_access_token_enabled,
            ),
            HookKind::MfaVerificationAttempt => (
                &mut self.mfa_verification_attempt_uri,
                &mut self.mfa_verification_attempt_enabled,
            ),
            HookKind::PasswordVerificationAttempt => (
                &mut self.password_verification_attempt_uri,
                &mut self.password_verification_attempt_enabled,
            ),
        }
    }

    pub fn set_entry(&mut self, kind: HookKind, entry: HookConfigEntry) {
        let (uri, enabled) = self.fields_mut(kind);
        *uri = entry.uri;
        *enabled = entry.enabled;
    }
}

// ============================================================================
// Patch
// ============================================================================

/// Частичное обновление конфигурации: передаются только заданные ключи
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfigPatch {
    #[serde(
        rename = "HOOK_CUSTOMIZE_ACCESS_TOKEN_URI",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub customize_access_token_uri: Option<String>,
    #[serde(
        rename = "HOOK_CUSTOMIZE_ACCESS_TOKEN_ENABLED",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub customize_access_token_enabled: Option<bool>,

    #[serde(
        rename = "HOOK_MFA_VERIFICATION_ATTEMPT_URI",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mfa_verification_attempt_uri: Option<String>,
    #[serde(
        rename = "HOOK_MFA_VERIFICATION_ATTEMPT_ENABLED",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mfa_verification_attempt_enabled: Option<bool>,

    #[serde(
        rename = "HOOK_PASSWORD_VERIFICATION_ATTEMPT_URI",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub password_verification_attempt_uri: Option<String>,
    #[serde(
        rename = "HOOK_PASSWORD_VERIFICATION_ATTEMPT_ENABLED",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub password_verification_attempt_enabled: Option<bool>,
}

impl AuthConfigPatch {
    fn fields_mut(&mut self, kind: HookKind) -> (&mut Option<String>, &mut Option<bool>) {
        match kind {
            HookKind::CustomizeAccessToken => (
                &mut self.customize_access_token_uri,
                &mut self.customize_access_token_enabled,
            ),
            HookKind::MfaVerificationAttempt => (
                &mut self.mfa_verification_attempt_uri,
                &mut self.mfa_verification_attempt_enabled,
            ),
            HookKind::PasswordVerificationAttempt => (
                &mut self.password_verification_attempt_uri,
                &mut self.password_verification_attempt_enabled,
            ),
        }
    }

    fn fields(&self, kind: HookKind) -> (Option<&String>, Option<bool>) {
        match kind {
            HookKind::CustomizeAccessToken => (
                self.customize_access_token_uri.as_ref(),
                self.customize_access_token_enabled,
            ),
            HookKind::MfaVerificationAttempt => (
                self.mfa_verification_attempt_uri.as_ref(),
                self.mfa_verification_attempt_enabled,
            ),
            HookKind::PasswordVerificationAttempt => (
                self.password_verification_attempt_uri.as_ref(),
                self.password_verification_attempt_enabled,
            ),
        }
    }

    /// Записать в патч оба поля хука
    pub fn set_entry(&mut self, kind: HookKind, entry: &HookConfigEntry) {
        let (uri, enabled) = self.fields_mut(kind);
        *uri = Some(entry.uri.clone());
        *enabled = Some(entry.enabled);
    }

    pub fn is_empty(&self) -> bool {
        self.touched_kinds().is_empty()
    }

    /// Хуки, хотя бы одно поле которых присутствует в патче
    pub fn touched_kinds(&self) -> Vec<HookKind> {
        HookKind::ALL
            .into_iter()
            .filter(|kind| {
                let (uri, enabled) = self.fields(*kind);
                uri.is_some() || enabled.is_some()
            })
            .collect()
    }

    pub fn touches_gated_hooks(&self) -> bool {
        self.touched_kinds().iter().any(HookKind::is_plan_gated)
    }

    pub fn apply_to(&self, config: &mut AuthHooksConfig) {
        for kind in HookKind::ALL {
            let (patch_uri, patch_enabled) = self.fields(kind);
            let (uri, enabled) = config.fields_mut(kind);
            if let Some(value) = patch_uri {
                *uri = value.clone();
            }
            if let Some(value) = patch_enabled {
                *enabled = value;
            }
        }
    }
}

/// Ответ на успешное обновление конфигурации
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfigUpdated {
    pub config: AuthHooksConfig,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Forms
// ============================================================================

/// Форма настроек хуков с фиксированным набором полей.
///
/// Каждая форма объявляет, какие хуки она редактирует; загрузка из конфигурации
/// и сборка патча выводятся из этого списка.
pub trait HooksForm: Clone + Default + PartialEq + Send + Sync + 'static {
    const FORM_ID: &'static str;
    const TITLE: &'static str;
    const DESCRIPTION: &'static str;
    const KINDS: &'static [HookKind];

    fn entry(&self, kind: HookKind) -> Option<&HookConfigEntry>;
    fn entry_mut(&mut self, kind: HookKind) -> Option<&mut HookConfigEntry>;

    /// Значения формы из конфигурации; отсутствующие значения уже заменены умолчаниями
    fn from_config(config: &AuthHooksConfig) -> Self {
        let mut form = Self::default();
        for kind in Self::KINDS {
            if let Some(entry) = form.entry_mut(*kind) {
                *entry = config.entry(*kind);
            }
        }
        form
    }

    /// Форма отправляется целиком одним патчем
    fn to_patch(&self) -> AuthConfigPatch {
        let mut patch = AuthConfigPatch::default();
        for kind in Self::KINDS {
            if let Some(entry) = self.entry(*kind) {
                patch.set_entry(*kind, entry);
            }
        }
        patch
    }

    fn plan_gated() -> bool {
        Self::KINDS.iter().any(HookKind::is_plan_gated)
    }
}

/// Признак несохранённых изменений
pub fn has_changes<F: HooksForm>(values: &F, baseline: &F) -> bool {
    values != baseline
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicHooksForm {
    pub customize_access_token: HookConfigEntry,
}

impl HooksForm for BasicHooksForm {
    const FORM_ID: &'static str = "auth-config-basic-hooks-form";
    const TITLE: &'static str = "Hook into Auth (Beta)";
    const DESCRIPTION: &'static str =
        "Use PostgreSQL functions to customize the behavior of Auth to meet your needs.";
    const KINDS: &'static [HookKind] = &[HookKind::CustomizeAccessToken];

    fn entry(&self, kind: HookKind) -> Option<&HookConfigEntry> {
        match kind {
            HookKind::CustomizeAccessToken => Some(&self.customize_access_token),
            _ => None,
        }
    }

    fn entry_mut(&mut self, kind: HookKind) -> Option<&mut HookConfigEntry> {
        match kind {
            HookKind::CustomizeAccessToken => Some(&mut self.customize_access_token),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterpriseHooksForm {
    pub mfa_verification_attempt: HookConfigEntry,
    pub password_verification_attempt: HookConfigEntry,
}

impl HooksForm for EnterpriseHooksForm {
    const FORM_ID: &'static str = "enterprise-hooks-config";
    const TITLE: &'static str = "Enterprise Hooks";
    const DESCRIPTION: &'static str =
        "Advanced Auth hooks available only to Teams and Enterprise plan customers.";
    const KINDS: &'static [HookKind] = &[
        HookKind::MfaVerificationAttempt,
        HookKind::PasswordVerificationAttempt,
    ];

    fn entry(&self, kind: HookKind) -> Option<&HookConfigEntry> {
        match kind {
            HookKind::MfaVerificationAttempt => Some(&self.mfa_verification_attempt),
            HookKind::PasswordVerificationAttempt => Some(&self.password_verification_attempt),
            _ => None,
        }
    }

    fn entry_mut(&mut self, kind: HookKind) -> Option<&mut HookConfigEntry> {
        match kind {
            HookKind::MfaVerificationAttempt => Some(&mut self.mfa_verification_attempt),
            HookKind::PasswordVerificationAttempt => {
                Some(&mut self.password_verification_attempt)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_auth_hooks::identifier::{decode, FunctionRef};
    use serde_json::json;

    #[test]
    fn test_config_deserializes_remote_keys_with_defaults() {
        let config: AuthHooksConfig = serde_json::from_value(json!({
            "HOOK_CUSTOMIZE_ACCESS_TOKEN_URI": "pg-functions://postgres/public/my_fn",
            "HOOK_CUSTOMIZE_ACCESS_TOKEN_ENABLED": true,
            "HOOK_MFA_VERIFICATION_ATTEMPT_URI": null,
            "SITE_URL": "http://localhost:3000"
        }))
        .unwrap();

        assert_eq!(
            config.customize_access_token_uri,
            "pg-functions://postgres/public/my_fn"
        );
        assert!(config.customize_access_token_enabled);
        assert_eq!(config.mfa_verification_attempt_uri, "");
        assert!(!config.password_verification_attempt_enabled);
    }

    #[test]
    fn test_basic_form_from_config() {
        let mut config = AuthHooksConfig::default();
        config.set_entry(
            HookKind::CustomizeAccessToken,
            HookConfigEntry::new("pg-functions://postgres/public/my_fn", true),
        );

        let form = BasicHooksForm::from_config(&config);
        let entry = &form.customize_access_token;
        assert!(entry.enabled);
        assert!(entry.enable_toggle_visible());
        assert_eq!(decode(&entry.uri), FunctionRef::new("public", "my_fn"));
    }

    #[test]
    fn test_toggle_hidden_without_uri() {
        let entry = HookConfigEntry::new("", true);
        assert!(!entry.enable_toggle_visible());
    }

    #[test]
    fn test_enterprise_patch_contains_only_its_hooks() {
        let mut form = EnterpriseHooksForm::default();
        form.mfa_verification_attempt = HookConfigEntry::new("pg-functions://postgres/auth/mfa", true);

        let patch = form.to_patch();
        assert_eq!(
            patch.touched_kinds(),
            vec![
                HookKind::MfaVerificationAttempt,
                HookKind::PasswordVerificationAttempt
            ]
        );
        assert!(patch.touches_gated_hooks());

        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            body,
            json!({
                "HOOK_MFA_VERIFICATION_ATTEMPT_URI": "pg-functions://postgres/auth/mfa",
                "HOOK_MFA_VERIFICATION_ATTEMPT_ENABLED": true,
                "HOOK_PASSWORD_VERIFICATION_ATTEMPT_URI": "",
                "HOOK_PASSWORD_VERIFICATION_ATTEMPT_ENABLED": false
            })
        );
    }

    #[test]
    fn test_patch_apply_keeps_untouched_keys() {
        let mut config = AuthHooksConfig::default();
        config.set_entry(
            HookKind::MfaVerificationAttempt,
            HookConfigEntry::new("pg-functions://postgres/auth/mfa", true),
        );

        let form = BasicHooksForm {
            customize_access_token: HookConfigEntry::new("pg-functions://postgres/public/claims", true),
        };
        let patch = form.to_patch();
        assert!(!patch.touches_gated_hooks());
        patch.apply_to(&mut config);

        assert_eq!(
            config.entry(HookKind::CustomizeAccessToken),
            form.customize_access_token
        );
        assert_eq!(
            config.entry(HookKind::MfaVerificationAttempt),
            HookConfigEntry::new("pg-functions://postgres/auth/mfa", true)
        );
    }

    #[test]
    fn test_empty_patch() {
        assert!(AuthConfigPatch::default().is_empty());
        assert_eq!(serde_json::to_value(AuthConfigPatch::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_has_changes() {
        let baseline = BasicHooksForm::default();
        let mut values = baseline.clone();
        assert!(!has_changes(&values, &baseline));

        values.customize_access_token.enabled = true;
        assert!(has_changes(&values, &baseline));
    }

    #[test]
    fn test_plan_gating_per_form() {
        assert!(!BasicHooksForm::plan_gated());
        assert!(EnterpriseHooksForm::plan_gated());
    }
}
