//! Duty roster screen. Lineup managers assign members to team roles for a
//! service date; every member answers Available/Unavailable on the entries
//! carrying their own name.

use dioxus::prelude::*;
use liststate::{SnapshotList, Trigger};

use crate::components::{Button, ButtonVariant, Select};
use crate::{now_millis, use_auth, use_status, ConfirmDelete, StatusBanner};

use api::models::{Availability, RosterEntryInfo, UserInfo};

#[component]
pub fn RosterScreen() -> Element {
    let auth = use_auth();
    let mut status = use_status();

    let mut entries = use_signal(SnapshotList::<RosterEntryInfo>::default);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut service_date = use_signal(String::new);

    let load = move || async move {
        let date = {
            let d = service_date();
            if d.is_empty() {
                None
            } else {
                Some(d)
            }
        };
        match api::roster::list_duty_roster(date).await {
            Ok(items) => {
                entries.write().replace(items);
                load_error.set(None);
            }
            Err(e) => load_error.set(Some(e.to_string())),
        }
        loading.set(false);
    };

    let _ = use_resource(move || {
        let _ = service_date();
        load()
    });

    let mut gate = crate::use_collection_watch(
        "duty_roster",
        EventHandler::new(move |()| {
            spawn(async move {
                load().await;
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

    // Manager-only form state: which lineup date, which role, which member.
    let dates = use_resource(|| async { api::posts::lineup_dates().await });
    let members = use_resource(|| async { api::profile::list_members().await });
    let mut new_role = use_signal(String::new);
    let mut new_member = use_signal(String::new);

    let handle_add = move |_| {
        spawn(async move {
            let date = service_date();
            if date.is_empty() {
                status.error("Pick a service date first");
                return;
            }
            if new_role().is_empty() || new_member().is_empty() {
                status.error("Pick a role and a member");
                return;
            }
            match api::roster::add_roster_entry(new_member(), new_role(), date).await {
                Ok(_) => {
                    status.success("Added to the roster");
                    new_member.set(String::new());
                    reload_now();
                }
                Err(e) => status.error(e.to_string()),
            }
        });
    };

    let set_availability = move |(id, availability): (String, Availability)| {
        spawn(async move {
            match api::roster::set_roster_availability(id, availability.as_str().to_string()).await
            {
                Ok(_) => {
                    status.success("Availability saved");
                    reload_now();
                }
                Err(e) => status.error(e.to_string()),
            }
        });
    };

    let confirm_delete = move |id: String| {
        spawn(async move {
            if !entries.write().take_pending(&id) {
                return;
            }
            match api::roster::delete_roster_entry(id).await {
                Ok(()) => {
                    status.success("Entry removed");
                    reload_now();
                }
                Err(e) => {
                    status.error(e.to_string());
                    reload_now();
                }
            }
        });
    };

    let my_name = auth().user.map(|u| u.full_name).unwrap_or_default();
    let is_manager = auth().can_manage_lineup();

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Duty Roster" }
            StatusBanner { status: status.current() }
            if let Some(err) = load_error() {
                div { class: "status status-error", "Could not load the roster: {err}" }
            }

            div {
                class: "form-row",
                match &*dates.read() {
                    Some(Ok(dates)) => rsx! {
                        Select {
                            options: dates.clone(),
                            value: service_date(),
                            placeholder: Some("All service dates".to_string()),
                            onchange: move |evt: FormEvent| {
                                service_date.set(evt.value());
                                loading.set(true);
                            },
                        }
                    },
                    Some(Err(e)) => rsx! {
                        div { class: "status status-error", "Could not load dates: {e}" }
                    },
                    None => rsx! {
                        p { class: "muted", "Loading dates..." }
                    },
                }
            }

            if is_manager {
                div {
                    class: "card form",
                    h2 { class: "section-title", "Assign a member" }
                    div {
                        class: "form-row",
                        Select {
                            options: api::auth::TEAM_ROLES.iter().map(|r| r.to_string()).collect(),
                            value: new_role(),
                            placeholder: Some("Team role".to_string()),
                            onchange: move |evt: FormEvent| new_role.set(evt.value()),
                        }
                        if let Some(Ok(members)) = &*members.read() {
                            Select {
                                options: members.iter().map(|m: &UserInfo| m.full_name.clone()).collect(),
                                value: new_member(),
                                placeholder: Some("Member".to_string()),
                                onchange: move |evt: FormEvent| new_member.set(evt.value()),
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: handle_add,
                            "Add"
                        }
                    }
                }
            }

            if loading() {
                p { class: "muted", "Loading..." }
            } else if entries.read().is_empty() {
                p { class: "muted", "No roster entries for this date." }
            }

            ul {
                class: "card-list",
                for entry in entries.read().items().iter().cloned() {
                    li {
                        key: "{entry.id}",
                        class: "card roster-entry",
                        div {
                            class: "card-header",
                            span { class: "badge", "{entry.role}" }
                            span { class: "card-title", "{entry.full_name}" }
                            span { class: "card-date", "{entry.service_date}" }
                            span {
                                class: match entry.availability {
                                    Availability::Available => "availability availability-yes",
                                    Availability::Unavailable => "availability availability-no",
                                    Availability::Pending => "availability availability-pending",
                                },
                                "{entry.availability.as_str()}"
                            }
                        }

                        if entry.full_name == my_name {
                            div {
                                class: "roster-actions",
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: {
                                        let id = entry.id.clone();
                                        move |_| set_availability((id.clone(), Availability::Available))
                                    },
                                    "I'm available"
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let id = entry.id.clone();
                                        move |_| set_availability((id.clone(), Availability::Unavailable))
                                    },
                                    "Can't make it"
                                }
                            }
                        }

                        if entries.read().is_pending(&entry.id) {
                            ConfirmDelete {
                                message: "Remove {entry.full_name} from {entry.role}?",
                                on_confirm: {
                                    let id = entry.id.clone();
                                    move |()| confirm_delete(id.clone())
                                },
                                on_cancel: move |()| entries.write().cancel_delete(),
                            }
                        } else if is_manager {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: {
                                    let id = entry.id.clone();
                                    move |_| entries.write().request_delete(&id)
                                },
                                "Remove"
                            }
                        }
                    }
                }
            }
        }
    }
}
