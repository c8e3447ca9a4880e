//! The local snapshot of a remote collection, with the two-step delete flow.

/// Records that expose a stable string identifier.
pub trait HasId {
    fn id(&self) -> &str;
}

/// An ordered local copy of a remote collection.
///
/// The remote service is the sole source of truth; a snapshot is replaced
/// wholesale on every reload and never merged incrementally. At most one row
/// can be in the "confirm delete" state at a time — requesting a second
/// delete while one is pending moves the marker to the new row.
///
/// Per-row lifecycle: Visible → (request_delete) → PendingConfirm →
/// (cancel_delete) → Visible, or PendingConfirm → (take_pending + remote
/// delete) → absent from the next snapshot. There are no other states.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotList<T> {
    items: Vec<T>,
    pending_delete: Option<String>,
}

impl<T> Default for SnapshotList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pending_delete: None,
        }
    }
}

impl<T: HasId> SnapshotList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Replace the snapshot with a freshly loaded one.
    ///
    /// If the row awaiting confirmation no longer exists remotely, its marker
    /// is dropped with it.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        if let Some(ref id) = self.pending_delete {
            if !self.items.iter().any(|item| item.id() == *id) {
                self.pending_delete = None;
            }
        }
    }

    /// The id currently awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending_delete.as_deref() == Some(id)
    }

    /// Mark a row for deletion. Local only, idempotent; replaces any
    /// previously pending id without touching remote state.
    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    /// Clear the confirmation marker. Local only, idempotent.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// The local half of a confirmed delete: clears the marker
    /// unconditionally (the remote delete is not retried on failure, and the
    /// row stays visible until the next reload reconciles it) and reports
    /// whether `id` was the row awaiting confirmation.
    pub fn take_pending(&mut self, id: &str) -> bool {
        let matched = self.pending_delete.as_deref() == Some(id);
        self.pending_delete = None;
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Rec {
        id: String,
        title: String,
    }

    impl Rec {
        fn new(id: &str, title: &str) -> Self {
            Self {
                id: id.to_string(),
                title: title.to_string(),
            }
        }
    }

    impl HasId for Rec {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn loaded(recs: &[Rec]) -> SnapshotList<Rec> {
        let mut list = SnapshotList::new();
        list.replace(recs.to_vec());
        list
    }

    #[test]
    fn request_then_cancel_leaves_collection_unchanged() {
        let recs = vec![Rec::new("a", "first"), Rec::new("b", "second")];
        let mut list = loaded(&recs);

        list.request_delete("a");
        list.cancel_delete();

        assert_eq!(list.items(), recs.as_slice());
        assert_eq!(list.pending_delete(), None);
    }

    #[test]
    fn confirm_removes_row_on_next_reload() {
        let mut list = loaded(&[Rec::new("a", "first"), Rec::new("b", "second")]);

        list.request_delete("b");
        assert!(list.take_pending("b"));

        // Remote delete succeeded; the next snapshot no longer carries "b".
        list.replace(vec![Rec::new("a", "first")]);
        assert!(!list.contains("b"));
        assert_eq!(list.pending_delete(), None);
    }

    #[test]
    fn second_request_replaces_pending_marker() {
        let mut list = loaded(&[Rec::new("a", "first"), Rec::new("b", "second")]);

        list.request_delete("a");
        list.request_delete("b");

        assert_eq!(list.pending_delete(), Some("b"));
        // The collection itself is untouched.
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn insert_appears_in_next_snapshot() {
        // Simulated remote collection: insert, then reload the full snapshot.
        let mut remote = vec![Rec::new("a", "first")];
        let mut list = loaded(&remote);

        remote.push(Rec::new("b", "posted"));
        list.replace(remote.clone());

        let matches: Vec<_> = list
            .items()
            .iter()
            .filter(|r| r.title == "posted")
            .collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "b");
    }

    #[test]
    fn pending_marker_dropped_when_row_vanishes_remotely() {
        let mut list = loaded(&[Rec::new("a", "first")]);
        list.request_delete("a");

        // Another client deleted the row; the reload reconciles.
        list.replace(vec![]);
        assert_eq!(list.pending_delete(), None);
    }

    #[test]
    fn take_pending_clears_even_on_mismatch() {
        let mut list = loaded(&[Rec::new("a", "first")]);
        list.request_delete("a");

        assert!(!list.take_pending("b"));
        assert_eq!(list.pending_delete(), None);
    }

    #[test]
    fn request_and_cancel_are_idempotent() {
        let mut list = loaded(&[Rec::new("a", "first")]);

        list.request_delete("a");
        list.request_delete("a");
        assert_eq!(list.pending_delete(), Some("a"));

        list.cancel_delete();
        list.cancel_delete();
        assert_eq!(list.pending_delete(), None);
    }
}
