//! Login Page

use leptos::prelude::*;

use crate::actions;
use crate::components::{StatusLine, StatusMessage};
use crate::context::use_session;
use crate::models::Role;
use crate::routes::Page;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let status = StatusLine::new();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Role::User);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        actions::login(username.get(), password.get(), role.get(), session, status);
    };

    view! {
        <div class="auth-container">
            <form id="loginForm" class="auth-card glass animate-slide" on:submit=submit>
                <h1>"Welcome Back"</h1>
                <p class="auth-subtitle">"Sign in to the Lost & Found portal"</p>

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
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="role">"Sign in as"</label>
                    <select
                        id="role"
                        prop:value=move || role.get().as_str()
                        on:change=move |ev| set_role.set(Role::parse(&event_target_value(&ev)))
                    >
                        <option value="user">"User"</option>
                        <option value="admin">"Admin"</option>
                    </select>
                </div>

                <button type="submit" class="btn btn-primary">"Login"</button>
                <StatusMessage status=status />

                <p class="auth-switch">
                    "No account yet? " <a href=Page::Signup.path()>"Sign up"</a>
                </p>
            </form>
        </div>
    }
}
