//! Всплывающие уведомления (thaw Toaster)

use leptos::prelude::*;
use thaw::{Toast, ToastIntent, ToastOptions, ToastTitle, ToasterInjection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationCategory {
    Success,
    Error,
}

impl NotificationCategory {
    fn intent(self) -> ToastIntent {
        match self {
            NotificationCategory::Success => ToastIntent::Success,
            NotificationCategory::Error => ToastIntent::Error,
        }
    }
}

/// Обёртка над ToasterInjection; получать внутри компонента под `ToasterProvider`
#[derive(Clone, Copy)]
pub struct Notifier {
    toaster: StoredValue<ToasterInjection, LocalStorage>,
}

impl Notifier {
    pub fn expect_context() -> Self {
        Self {
            toaster: StoredValue::new_local(ToasterInjection::expect_context()),
        }
    }

    pub fn notify(&self, category: NotificationCategory, message: impl Into<String>) {
        let message: String = message.into();
        self.toaster.with_value(|toaster| {
            toaster.dispatch_toast(
                move || {
                    view! {
                        <Toast>
                            <ToastTitle>{message}</ToastTitle>
                        </Toast>
                    }
                },
                ToastOptions::default().with_intent(category.intent()),
            )
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(NotificationCategory::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(NotificationCategory::Error, message);
    }
}
