//! Small form primitives shared by every screen.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: "{r#type}",
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(
    #[props(default = "".to_string())] html_for: String,
    children: Element,
) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: "{html_for}",
            {children}
        }
    }
}

/// A select over a fixed vocabulary, with an optional leading placeholder
/// entry that maps to the empty value.
#[component]
pub fn Select(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] class: String,
    options: Vec<String>,
    #[props(default = "".to_string())] value: String,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "select {class}",
            value: "{value}",
            onchange: move |evt| onchange.call(evt),
            if let Some(ph) = placeholder {
                option { value: "", "{ph}" }
            }
            for opt in &options {
                option {
                    key: "{opt}",
                    value: "{opt}",
                    "{opt}"
                }
            }
        }
    }
}
