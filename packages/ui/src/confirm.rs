//! Two-step delete confirmation rendered inline where the row's actions
//! normally sit.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrashCan;
use dioxus_free_icons::Icon;

use crate::components::{Button, ButtonVariant};

#[component]
pub fn ConfirmDelete(
    #[props(default = "Delete this entry?".to_string())] message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "confirm-delete",
            span { class: "confirm-delete-message", "{message}" }
            Button {
                variant: ButtonVariant::Danger,
                onclick: move |_| on_confirm.call(()),
                Icon { icon: FaTrashCan, width: 12, height: 12 }
                span { "Delete" }
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| on_cancel.call(()),
                "Cancel"
            }
        }
    }
}
