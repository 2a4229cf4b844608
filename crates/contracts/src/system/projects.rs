use serde::{Deserialize, Serialize};

/// Проект, выбранный в дашборде
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub project_ref: String,
    pub organization_slug: String,
}
