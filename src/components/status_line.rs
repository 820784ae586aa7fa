//! Status Line Component
//!
//! Inline message under the auth forms.

use leptos::prelude::*;
use leptos_toast::ToastLevel;

/// Latest status of an auth form
#[derive(Clone, Copy)]
pub struct StatusLine(RwSignal<Option<(String, ToastLevel)>>);

impl StatusLine {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    pub fn show(&self, message: impl Into<String>, level: ToastLevel) {
        self.0.set(Some((message.into(), level)));
    }
}

#[component]
pub fn StatusMessage(status: StatusLine) -> impl IntoView {
    move || {
        status.0.get().map(|(message, level)| {
            let icon = match level {
                ToastLevel::Success => "✔",
                _ => "!",
            };
            view! {
                <p id="message" class=format!("message {} animate-fade", level.as_str())>
                    <span class="message-icon">{icon}</span>
                    " "
                    {message}
                </p>
            }
        })
    }
}
