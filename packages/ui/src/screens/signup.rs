//! Signup screen. Registration creates the account and its member profile
//! together but does not sign the new member in; they land back on the
//! login form.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Select};

#[component]
pub fn SignupScreen() -> Element {
    let nav = use_navigator();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut ministry = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = full_name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let m = ministry();

            if n.is_empty() {
                error.set(Some("Full name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }
            if m.is_empty() {
                error.set(Some("Please pick a ministry".to_string()));
                return;
            }

            loading.set(true);
            match api::register(n, e, p, m).await {
                Ok(()) => {
                    nav.replace("/login");
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Create Account" }
            p { class: "auth-subtitle", "Join the Flock community" }

            form {
                class: "auth-form",
                onsubmit: handle_signup,

                if let Some(err) = error() {
                    div { class: "status status-error", "{err}" }
                }

                Input {
                    r#type: "text",
                    placeholder: "Full name",
                    value: full_name(),
                    oninput: move |evt: FormEvent| full_name.set(evt.value()),
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                Select {
                    options: api::auth::MINISTRIES.iter().map(|m| m.to_string()).collect(),
                    value: ministry(),
                    placeholder: Some("Select your ministry".to_string()),
                    onchange: move |evt: FormEvent| ministry.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already a member? "
                a { href: "/login", "Sign in" }
            }
        }
    }
}
