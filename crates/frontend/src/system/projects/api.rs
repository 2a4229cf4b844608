use contracts::system::projects::ProjectInfo;
use serde::Deserialize;

use crate::shared::api_utils::{get_json, path_segment};

/// Проект, выбранный на сервере по умолчанию
pub async fn fetch_current_project() -> Result<ProjectInfo, String> {
    get_json("/api/projects/current").await
}

pub async fn fetch_project(project_ref: &str) -> Result<ProjectInfo, String> {
    get_json(&format!("/api/projects/{}", path_segment(project_ref))).await
}

#[derive(Debug, Default, Deserialize)]
struct ProjectQuery {
    project: Option<String>,
}

/// Проект из query string (`?project=...`)
pub fn project_from_query(search: &str) -> Option<String> {
    let query: ProjectQuery =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    query.project.filter(|p| !p.trim().is_empty())
}

/// Проект из URL, если задан, иначе текущий проект сервера
pub async fn resolve_project() -> Result<ProjectInfo, String> {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    match project_from_query(&search) {
        Some(project_ref) => fetch_project(&project_ref).await,
        None => fetch_current_project().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_from_query() {
        assert_eq!(project_from_query("?project=abc"), Some("abc".to_string()));
        assert_eq!(project_from_query("project=abc&x=1"), Some("abc".to_string()));
        assert_eq!(project_from_query("?project="), None);
        assert_eq!(project_from_query(""), None);
    }
}
