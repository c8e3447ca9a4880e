//! Profile screen: edit the signed-in member's own contact details and
//! upload an avatar.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::{use_auth, use_status, StatusBanner};

use api::profile::ProfileUpdate;

fn content_type_for(filename: &str) -> Option<&'static str> {
    let ext = filename.rsplit('.').next()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[component]
pub fn ProfileScreen() -> Element {
    let mut auth = use_auth();
    let mut status = use_status();

    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut birth_date = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut seeded = use_signal(|| false);

    // Seed the form once from the loaded profile.
    use_effect(move || {
        if seeded() {
            return;
        }
        if let Some(user) = auth().user {
            phone.set(user.phone.unwrap_or_default());
            address.set(user.address.unwrap_or_default());
            birth_date.set(user.birth_date.unwrap_or_default());
            age.set(user.age.map(|a| a.to_string()).unwrap_or_default());
            seeded.set(true);
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let (parsed_age, clear_age) = match ProfileUpdate::parse_age_field(&age()) {
                Ok(parsed) => parsed,
                Err(msg) => {
                    status.error(msg);
                    return;
                }
            };

            let update = ProfileUpdate {
                phone: Some(phone()),
                address: Some(address()),
                birth_date: Some(birth_date()),
                age: parsed_age,
                clear_age,
            };
            match api::profile::update_profile(update).await {
                Ok(user) => {
                    let mut state = auth();
                    state.user = Some(user);
                    auth.set(state);
                    status.success("Profile saved");
                }
                Err(e) => status.error(e.to_string()),
            }
        });
    };

    let handle_avatar = move |evt: FormEvent| {
        spawn(async move {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };
            let name = file.name();
            let Some(content_type) = content_type_for(&name) else {
                status.error("Use a PNG, JPEG, or WebP image");
                return;
            };
            let Ok(data) = file.read_bytes().await else {
                status.error("Could not read the image");
                return;
            };

            match api::profile::upload_avatar(data.to_vec(), content_type.to_string()).await {
                Ok(user) => {
                    let mut state = auth();
                    state.user = Some(user);
                    auth.set(state);
                    status.success("Avatar updated");
                }
                Err(e) => status.error(e.to_string()),
            }
        });
    };

    let Some(user) = auth().user else {
        return rsx! {
            div { class: "page",
                p { class: "muted", "Sign in to edit your profile." }
            }
        };
    };

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "My Profile" }
            StatusBanner { status: status.current() }

            div {
                class: "profile-header",
                if let Some(url) = &user.avatar_url {
                    img { class: "member-avatar member-avatar-lg", src: "{url}", alt: "{user.full_name}" }
                } else {
                    span { class: "member-avatar member-avatar-lg member-avatar-placeholder", "{user.initial()}" }
                }
                div {
                    h2 { class: "card-title", "{user.full_name}" }
                    p { class: "card-meta", "{user.ministry} · {user.email}" }
                }
            }

            div {
                class: "form-row",
                Label { html_for: "avatar-upload", "Change avatar" }
                input {
                    id: "avatar-upload",
                    class: "input",
                    r#type: "file",
                    accept: "image/png,image/jpeg,image/webp",
                    onchange: handle_avatar,
                }
            }

            form {
                class: "card form",
                onsubmit: handle_save,

                div {
                    class: "form-row",
                    Label { html_for: "profile-phone", "Phone" }
                    Input {
                        id: "profile-phone",
                        value: phone(),
                        oninput: move |evt: FormEvent| phone.set(evt.value()),
                    }
                }

                div {
                    class: "form-row",
                    Label { html_for: "profile-address", "Address" }
                    Input {
                        id: "profile-address",
                        value: address(),
                        oninput: move |evt: FormEvent| address.set(evt.value()),
                    }
                }

                div {
                    class: "form-row",
                    Label { html_for: "profile-birth-date", "Birth date" }
                    Input {
                        id: "profile-birth-date",
                        r#type: "date",
                        value: birth_date(),
                        oninput: move |evt: FormEvent| birth_date.set(evt.value()),
                    }
                }

                div {
                    class: "form-row",
                    Label { html_for: "profile-age", "Age" }
                    Input {
                        id: "profile-age",
                        r#type: "number",
                        value: age(),
                        oninput: move |evt: FormEvent| age.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    "Save"
                }
            }
        }
    }
}
