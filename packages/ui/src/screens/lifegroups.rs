//! Life groups screen: meeting logs with attendance. Managers create and
//! delete logs and record attendees; everyone can read them.

use dioxus::prelude::*;
use liststate::{SnapshotList, Trigger};

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::{now_millis, use_auth, use_status, ConfirmDelete, StatusBanner};

use api::models::{LifeGroupInfo, LifeGroupMemberInfo};

#[component]
pub fn LifeGroupsScreen() -> Element {
    let auth = use_auth();
    let mut status = use_status();

    let mut groups = use_signal(SnapshotList::<LifeGroupInfo>::default);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);

    // Which log's attendance panel is open, if any.
    let mut open_group = use_signal(|| Option::<String>::None);
    let mut attendees = use_signal(Vec::<LifeGroupMemberInfo>::new);
    let mut new_attendee = use_signal(String::new);

    let load = move || async move {
        match api::lifegroup::list_lifegroups().await {
            Ok(items) => {
                groups.write().replace(items);
                load_error.set(None);
            }
            Err(e) => load_error.set(Some(e.to_string())),
        }
        loading.set(false);
    };

    let load_attendees = move || async move {
        let Some(group_id) = open_group() else {
            return;
        };
        match api::lifegroup::list_lifegroup_members(group_id).await {
            Ok(items) => attendees.set(items),
            Err(e) => status.error(e.to_string()),
        }
    };

    let _ = use_resource(move || load());

    let mut gate = crate::use_collection_watch(
        "lifegroup_updates",
        EventHandler::new(move |()| {
            spawn(async move {
                load().await;
            });
        }),
    );

    crate::use_collection_watch(
        "lifegroup_members",
        EventHandler::new(move |()| {
            spawn(async move {
                load().await;
                load_attendees().await;
            });
        }),
    );

    let mut reload_now = move || {
        if gate.write().begin(now_millis(), Trigger::Direct) {
            spawn(async move {
                load().await;
                gate.write().finish(now_millis());
            });
        }
    };

    // Create form
    let mut group_name = use_signal(String::new);
    let mut leader_name = use_signal(String::new);
    let mut agenda = use_signal(String::new);

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            match api::lifegroup::create_lifegroup(group_name(), leader_name(), agenda()).await {
                Ok(_) => {
                    status.success("Life group log created");
                    group_name.set(String::new());
                    leader_name.set(String::new());
                    agenda.set(String::new());
                    reload_now();
                }
                Err(e) => status.error(e.to_string()),
            }
        });
    };

    let confirm_delete = move |id: String| {
        spawn(async move {
            if !groups.write().take_pending(&id) {
                return;
            }
            if open_group() == Some(id.clone()) {
                open_group.set(None);
            }
            match api::lifegroup::delete_lifegroup(id).await {
                Ok(()) => {
                    status.success("Log deleted");
                    reload_now();
                }
                Err(e) => {
                    status.error(e.to_string());
                    reload_now();
                }
            }
        });
    };

    let mut toggle_attendance = move |id: String| {
        if open_group() == Some(id.clone()) {
            open_group.set(None);
        } else {
            open_group.set(Some(id));
            attendees.set(Vec::new());
            spawn(async move {
                load_attendees().await;
            });
        }
    };

    let handle_add_attendee = move |_| {
        spawn(async move {
            let Some(group_id) = open_group() else {
                return;
            };
            match api::lifegroup::add_lifegroup_member(group_id, new_attendee()).await {
                Ok(_) => {
                    new_attendee.set(String::new());
                    load_attendees().await;
                    reload_now();
                }
                Err(e) => status.error(e.to_string()),
            }
        });
    };

    let remove_attendee = move |member_id: String| {
        spawn(async move {
            match api::lifegroup::remove_lifegroup_member(member_id).await {
                Ok(()) => {
                    load_attendees().await;
                    reload_now();
                }
                Err(e) => status.error(e.to_string()),
            }
        });
    };

    let is_manager = auth().can_manage_lifegroups();

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Life Groups" }
            StatusBanner { status: status.current() }
            if let Some(err) = load_error() {
                div { class: "status status-error", "Could not load life groups: {err}" }
            }

            if is_manager {
                form {
                    class: "card form",
                    onsubmit: handle_create,
                    h2 { class: "section-title", "New meeting log" }
                    div {
                        class: "form-row",
                        Label { html_for: "lg-name", "Group" }
                        Input {
                            id: "lg-name",
                            value: group_name(),
                            oninput: move |evt: FormEvent| group_name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-row",
                        Label { html_for: "lg-leader", "Leader" }
                        Input {
                            id: "lg-leader",
                            value: leader_name(),
                            oninput: move |evt: FormEvent| leader_name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-row",
                        Label { html_for: "lg-agenda", "Agenda" }
                        textarea {
                            id: "lg-agenda",
                            class: "input",
                            value: agenda(),
                            oninput: move |evt| agenda.set(evt.value()),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        "Create"
                    }
                }
            }

            if loading() {
                p { class: "muted", "Loading..." }
            } else if groups.read().is_empty() {
                p { class: "muted", "No life group logs yet." }
            }

            ul {
                class: "card-list",
                for group in groups.read().items().iter().cloned() {
                    li {
                        key: "{group.id}",
                        class: "card",
                        div {
                            class: "card-header",
                            h3 { class: "card-title", "{group.group_name}" }
                            span { class: "card-meta", "Led by {group.leader_name}" }
                            span { class: "badge", "{group.member_count} attendees" }
                        }
                        p { class: "card-body", "{group.agenda}" }

                        div {
                            class: "card-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: {
                                    let id = group.id.clone();
                                    move |_| toggle_attendance(id.clone())
                                },
                                if open_group() == Some(group.id.clone()) { "Hide attendance" } else { "Attendance" }
                            }

                            if groups.read().is_pending(&group.id) {
                                ConfirmDelete {
                                    message: "Delete the {group.group_name} log?",
                                    on_confirm: {
                                        let id = group.id.clone();
                                        move |()| confirm_delete(id.clone())
                                    },
                                    on_cancel: move |()| groups.write().cancel_delete(),
                                }
                            } else if is_manager {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let id = group.id.clone();
                                        move |_| groups.write().request_delete(&id)
                                    },
                                    "Delete"
                                }
                            }
                        }

                        if open_group() == Some(group.id.clone()) {
                            div {
                                class: "attendance",
                                ul {
                                    class: "attendance-list",
                                    for member in attendees() {
                                        li {
                                            key: "{member.id}",
                                            span { "{member.full_name}" }
                                            if is_manager {
                                                button {
                                                    class: "btn btn-link",
                                                    onclick: {
                                                        let id = member.id.clone();
                                                        move |_| remove_attendee(id.clone())
                                                    },
                                                    "remove"
                                                }
                                            }
                                        }
                                    }
                                }
                                if is_manager {
                                    div {
                                        class: "form-row",
                                        Input {
                                            placeholder: "Attendee name",
                                            value: new_attendee(),
                                            oninput: move |evt: FormEvent| new_attendee.set(evt.value()),
                                        }
                                        Button {
                                            variant: ButtonVariant::Primary,
                                            onclick: handle_add_attendee,
                                            "Add"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
