//! The app's screens, shared between the web and mobile frontends.

mod login;
pub use login::LoginScreen;

mod signup;
pub use signup::SignupScreen;

mod dashboard;
pub use dashboard::DashboardScreen;

mod posts;
pub use posts::PostManagerScreen;

mod events;
pub use events::EventsScreen;

mod lineups;
pub use lineups::SongLineupsScreen;

mod lifegroups;
pub use lifegroups::LifeGroupsScreen;

mod roster;
pub use roster::RosterScreen;

mod members;
pub use members::MembersScreen;

mod profile;
pub use profile::ProfileScreen;
