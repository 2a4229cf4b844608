//! Права пользователя и тариф организации

use serde::{Deserialize, Serialize};

/// Ресурс, на изменение которого проверяется право
pub const AUTH_CONFIG_RESOURCE: &str = "custom_config_gotrue";

/// Тариф организации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Free,
    Pro,
    Team,
    Enterprise,
}

impl PlanId {
    /// Расширенные хуки доступны на всех тарифах кроме Free и Pro
    pub fn qualifies_for_enterprise_hooks(&self) -> bool {
        !matches!(self, PlanId::Free | PlanId::Pro)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PlanId::Free => "Free",
            PlanId::Pro => "Pro",
            PlanId::Team => "Team",
            PlanId::Enterprise => "Enterprise",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: PlanId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub plan: SubscriptionPlan,
}

impl Subscription {
    pub fn new(plan: PlanId) -> Self {
        Self {
            plan: SubscriptionPlan {
                id: plan,
                name: plan.display_name().to_string(),
            },
        }
    }
}

/// Не загруженная подписка считается неподходящей
pub fn plan_qualifies(subscription: Option<&Subscription>) -> bool {
    subscription
        .map(|s| s.plan.id.qualifies_for_enterprise_hooks())
        .unwrap_or(false)
}

/// Права текущего пользователя в проекте
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPermissions {
    /// UPDATE на [`AUTH_CONFIG_RESOURCE`]
    pub can_update_auth_config: bool,
}

/// Доступность полей формы
pub struct FieldAccess;

impl FieldAccess {
    pub fn resolve(can_update: bool, plan_qualifies: bool) -> bool {
        can_update && plan_qualifies
    }

    pub fn missing_permission_helper(can_update: bool) -> Option<&'static str> {
        if can_update {
            None
        } else {
            Some("You need additional permissions to update authentication settings")
        }
    }
}
