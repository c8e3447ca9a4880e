//! Data models: full database rows (server only) and the client-safe DTOs
//! that cross the server/client boundary via server functions.

mod lifegroup;
mod post;
mod roster;
mod user;

#[cfg(feature = "server")]
pub use lifegroup::{LifeGroupMemberRow, LifeGroupRow};
pub use lifegroup::{LifeGroupInfo, LifeGroupMemberInfo};
#[cfg(feature = "server")]
pub use post::PostRow;
pub use post::{PostDetails, PostDraft, PostInfo, CATEGORY_ANNOUNCEMENT, CATEGORY_EVENT, CATEGORY_SONG_LINEUP};
#[cfg(feature = "server")]
pub use roster::RosterRow;
pub use roster::{Availability, RosterEntryInfo};
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
