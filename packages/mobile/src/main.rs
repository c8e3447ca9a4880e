use dioxus::prelude::*;

use ui::AuthProvider;
use views::{
    Announcements, Dashboard, Events, LifeGroups, Login, Members, Profile, Roster, Shell, Signup,
    SongLineups,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(Shell)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/announcements")]
        Announcements {},
        #[route("/events")]
        Events {},
        #[route("/song-lineups")]
        SongLineups {},
        #[route("/lifegroups")]
        LifeGroups {},
        #[route("/roster")]
        Roster {},
        #[route("/members")]
        Members {},
        #[route("/profile")]
        Profile {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
