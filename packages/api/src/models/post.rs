//! # Post model — announcements, events, and song lineups
//!
//! One storage table, three kinds of record. The `announcements` table keeps
//! the original columnar layout (a `category` discriminator plus nullable
//! per-category columns); the model layer converts each row into a tagged
//! union so that "optional field meaningful only for some categories" is a
//! type-level fact rather than a convention:
//!
//! - [`PostDetails::Announcement`] — no extra fields.
//! - [`PostDetails::Event`] — optional location.
//! - [`PostDetails::SongLineup`] — four positional song slots plus an
//!   optional external link. Slot order and position survive the round trip
//!   through the column mapping.
//!
//! [`PostDraft`] is the insert payload with its local validation; [`PostInfo`]
//! is the DTO screens render.

use serde::{Deserialize, Serialize};

pub const CATEGORY_ANNOUNCEMENT: &str = "announcement";
pub const CATEGORY_EVENT: &str = "event";
pub const CATEGORY_SONG_LINEUP: &str = "song-lineup";

/// Per-category payload of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PostDetails {
    Announcement,
    Event {
        location: Option<String>,
    },
    SongLineup {
        songs: [Option<String>; 4],
        external_link: Option<String>,
    },
}

impl PostDetails {
    pub fn category(&self) -> &'static str {
        match self {
            PostDetails::Announcement => CATEGORY_ANNOUNCEMENT,
            PostDetails::Event { .. } => CATEGORY_EVENT,
            PostDetails::SongLineup { .. } => CATEGORY_SONG_LINEUP,
        }
    }

    /// Rebuild the union from the columnar representation. Columns not
    /// meaningful for the category are dropped here, in one place.
    pub fn from_columns(
        category: &str,
        location: Option<String>,
        songs: [Option<String>; 4],
        external_link: Option<String>,
    ) -> PostDetails {
        match category {
            CATEGORY_EVENT => PostDetails::Event { location },
            CATEGORY_SONG_LINEUP => PostDetails::SongLineup {
                songs,
                external_link,
            },
            _ => PostDetails::Announcement,
        }
    }

    /// Flatten back into the nullable columns of the storage layout:
    /// `(location, [song_1..song_4], external_link)`.
    pub fn to_columns(
        &self,
    ) -> (Option<String>, [Option<String>; 4], Option<String>) {
        match self {
            PostDetails::Announcement => (None, Default::default(), None),
            PostDetails::Event { location } => (location.clone(), Default::default(), None),
            PostDetails::SongLineup {
                songs,
                external_link,
            } => (None, songs.clone(), external_link.clone()),
        }
    }
}

/// A post as rendered by the screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    /// ISO date (`YYYY-MM-DD`), if scheduled.
    pub target_date: Option<String>,
    /// Free-form, e.g. "9:00 AM".
    pub target_time: Option<String>,
    pub created_at: String,
    pub details: PostDetails,
}

impl PostInfo {
    pub fn category(&self) -> &'static str {
        self.details.category()
    }
}

impl liststate::HasId for PostInfo {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Insert payload for a new post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    pub target_date: String,
    pub target_time: Option<String>,
    pub details: PostDetails,
}

impl PostDraft {
    /// Local required-field validation, run before any remote call.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        if self.target_date.trim().is_empty() {
            return Err("Date is required".to_string());
        }
        Ok(())
    }
}

/// Full row from the `announcements` table.
#[cfg(feature = "server")]
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRow {
    pub id: uuid::Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub target_date: Option<chrono::NaiveDate>,
    pub target_time: Option<String>,
    pub location: Option<String>,
    pub song_1: Option<String>,
    pub song_2: Option<String>,
    pub song_3: Option<String>,
    pub song_4: Option<String>,
    pub external_link: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(feature = "server")]
impl PostRow {
    pub fn to_info(&self) -> PostInfo {
        PostInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            target_date: self.target_date.map(|d| d.format("%Y-%m-%d").to_string()),
            target_time: self.target_time.clone(),
            created_at: self.created_at.to_rfc3339(),
            details: PostDetails::from_columns(
                &self.category,
                self.location.clone(),
                [
                    self.song_1.clone(),
                    self.song_2.clone(),
                    self.song_3.clone(),
                    self.song_4.clone(),
                ],
                self.external_link.clone(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lineup_details() -> PostDetails {
        PostDetails::SongLineup {
            songs: [
                Some("Way Maker".to_string()),
                Some("Goodness of God".to_string()),
                Some("What a Beautiful Name".to_string()),
                Some("Gratitude".to_string()),
            ],
            external_link: Some("https://youtube.com/playlist".to_string()),
        }
    }

    #[test]
    fn song_slots_round_trip_in_order() {
        let details = lineup_details();
        let (location, songs, link) = details.to_columns();
        assert_eq!(location, None);

        let rebuilt =
            PostDetails::from_columns(CATEGORY_SONG_LINEUP, location, songs, link);
        assert_eq!(rebuilt, details);

        let PostDetails::SongLineup { songs, .. } = rebuilt else {
            panic!("category changed in round trip");
        };
        assert_eq!(songs[0].as_deref(), Some("Way Maker"));
        assert_eq!(songs[3].as_deref(), Some("Gratitude"));
    }

    #[test]
    fn sparse_song_slots_keep_their_positions() {
        let details = PostDetails::SongLineup {
            songs: [None, Some("Oceans".to_string()), None, None],
            external_link: None,
        };
        let (_, songs, _) = details.to_columns();
        assert_eq!(songs[0], None);
        assert_eq!(songs[1].as_deref(), Some("Oceans"));
        assert_eq!(songs[2], None);
    }

    #[test]
    fn event_columns_carry_location_only() {
        let details = PostDetails::Event {
            location: Some("Main Hall".to_string()),
        };
        let (location, songs, link) = details.to_columns();
        assert_eq!(location.as_deref(), Some("Main Hall"));
        assert_eq!(songs, <[Option<String>; 4]>::default());
        assert_eq!(link, None);
    }

    #[test]
    fn unknown_category_degrades_to_announcement() {
        let details = PostDetails::from_columns("mystery", None, Default::default(), None);
        assert_eq!(details, PostDetails::Announcement);
    }

    #[test]
    fn draft_requires_title_and_date() {
        let mut draft = PostDraft {
            title: "".to_string(),
            description: "desc".to_string(),
            target_date: "2026-09-06".to_string(),
            target_time: None,
            details: PostDetails::Announcement,
        };
        assert!(draft.validate().is_err());

        draft.title = "Prayer night".to_string();
        assert!(draft.validate().is_ok());

        draft.target_date = "  ".to_string();
        assert!(draft.validate().is_err());
    }
}
