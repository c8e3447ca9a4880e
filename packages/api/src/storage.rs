//! Local-disk storage for uploaded avatar images. Files land under
//! `uploads/avatars/{user_id}/` and the web server exposes the `uploads/`
//! tree as static files.

use std::path::PathBuf;

/// Root directory for uploaded files, relative to the server's working
/// directory.
pub const UPLOADS_DIR: &str = "uploads";

const MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("unsupported image type: {0}")]
    UnsupportedType(String),
    #[error("image is empty")]
    Empty,
    #[error("image is too large (max 5 MB)")]
    TooLarge,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/png" => Some("png"),
        "image/jpeg" => Some("jpg"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

/// Write an avatar image to disk and return the URL path it will be served
/// under. A timestamped filename keeps old URLs from serving stale bytes
/// out of browser caches.
pub async fn store_avatar(
    user_id: uuid::Uuid,
    data: &[u8],
    content_type: &str,
) -> Result<String, StorageError> {
    if data.is_empty() {
        return Err(StorageError::Empty);
    }
    if data.len() > MAX_AVATAR_BYTES {
        return Err(StorageError::TooLarge);
    }
    let ext = extension_for(content_type)
        .ok_or_else(|| StorageError::UnsupportedType(content_type.to_string()))?;

    let dir: PathBuf = [UPLOADS_DIR, "avatars", &user_id.to_string()]
        .iter()
        .collect();
    tokio::fs::create_dir_all(&dir).await?;

    let filename = format!("{}.{}", chrono::Utc::now().timestamp_millis(), ext);
    tokio::fs::write(dir.join(&filename), data).await?;

    Ok(format!("/{UPLOADS_DIR}/avatars/{user_id}/{filename}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_image_types_map_to_extensions() {
        assert_eq!(extension_for("image/png"), Some("png"));
        assert_eq!(extension_for("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for("image/webp"), Some("webp"));
        assert_eq!(extension_for("image/gif"), None);
    }

    #[tokio::test]
    async fn rejects_empty_and_unsupported_uploads() {
        let id = uuid::Uuid::new_v4();
        assert!(matches!(
            store_avatar(id, &[], "image/png").await,
            Err(StorageError::Empty)
        ));
        assert!(matches!(
            store_avatar(id, &[1, 2, 3], "text/plain").await,
            Err(StorageError::UnsupportedType(_))
        ));
    }
}
