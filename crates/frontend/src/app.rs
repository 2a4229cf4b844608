use contracts::system::projects::ProjectInfo;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::{ConfigProvider, MessageBar, MessageBarIntent, ToasterProvider};

use crate::domain::a001_auth_hooks::ui::AuthHooksPage;
use crate::layout::Shell;
use crate::system::projects::api;

#[component]
pub fn App() -> impl IntoView {
    // Выбранный проект принадлежит приложению и передаётся страницам параметром
    let project = RwSignal::new(None::<ProjectInfo>);
    let project_error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::resolve_project().await {
                Ok(info) => {
                    log!("[App] selected project {}", info.project_ref);
                    project.set(Some(info));
                }
                Err(e) => project_error.set(Some(e)),
            }
        });
    });

    view! {
        <ConfigProvider>
            <ToasterProvider>
                <Shell project=project>
                    {move || project_error.get().map(|e| view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            <span>{format!("Failed to select project: {}", e)}</span>
                        </MessageBar>
                    })}
                    <AuthHooksPage project=project />
                </Shell>
            </ToasterProvider>
        </ConfigProvider>
    }
}
