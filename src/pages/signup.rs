//! Signup Page

use leptos::prelude::*;

use crate::actions;
use crate::components::{StatusLine, StatusMessage};
use crate::routes::Page;

#[component]
pub fn SignupPage() -> impl IntoView {
    let status = StatusLine::new();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        actions::signup(username.get(), password.get(), status);
    };

    view! {
        <div class="auth-container">
            <form id="signupForm" class="auth-card glass animate-slide" on:submit=submit>
                <h1>"Create Account"</h1>
                <p class="auth-subtitle">"Report and recover lost items"</p>

                <div class="form-group">
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        required
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        required
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>

                <button type="submit" class="btn btn-primary">"Sign Up"</button>
                <StatusMessage status=status />

                <p class="auth-switch">
                    "Already registered? " <a href=Page::Login.path()>"Log in"</a>
                </p>
            </form>
        </div>
    }
}
