//! Thin route components wrapping the shared screens in `ui`.

use dioxus::prelude::*;

mod shell;
pub use shell::Shell;

#[component]
pub fn Login() -> Element {
    rsx! { ui::screens::LoginScreen {} }
}

#[component]
pub fn Signup() -> Element {
    rsx! { ui::screens::SignupScreen {} }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { ui::screens::DashboardScreen {} }
}

#[component]
pub fn Announcements() -> Element {
    rsx! { ui::screens::PostManagerScreen {} }
}

#[component]
pub fn Events() -> Element {
    rsx! { ui::screens::EventsScreen {} }
}

#[component]
pub fn SongLineups() -> Element {
    rsx! { ui::screens::SongLineupsScreen {} }
}

#[component]
pub fn LifeGroups() -> Element {
    rsx! { ui::screens::LifeGroupsScreen {} }
}

#[component]
pub fn Roster() -> Element {
    rsx! { ui::screens::RosterScreen {} }
}

#[component]
pub fn Members() -> Element {
    rsx! { ui::screens::MembersScreen {} }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ui::screens::ProfileScreen {} }
}
