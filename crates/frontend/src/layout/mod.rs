use contracts::system::projects::ProjectInfo;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  TopHeader (title, selected project)     |
/// +------------------------------------------+
/// |               Content                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(#[prop(into)] project: Signal<Option<ProjectInfo>>, children: Children) -> impl IntoView {
    let project_label = move || {
        project
            .get()
            .map(|p| format!("{} · {}", p.organization_slug, p.project_ref))
            .unwrap_or_else(|| "No project selected".to_string())
    };

    view! {
        <div class="app-layout">
            <div class="top-header">
                <div class="top-header__brand">
                    <span class="top-header__title">"Authentication · Hooks"</span>
                </div>
                <div class="top-header__actions">
                    <span class="top-header__project">{project_label}</span>
                </div>
            </div>
            <div class="app-body">
                <div class="app-main">{children()}</div>
            </div>
        </div>
    }
}
