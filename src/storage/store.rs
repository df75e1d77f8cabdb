//! Typed store over a key-value backend.
//!
//! All persisted state goes through `CommunityStore`: values are loaded from
//! the backend on demand and written back after every mutation, so there is
//! no ambient in-memory mirror to drift from the persisted truth.

use std::rc::Rc;

use super::backend::KeyValueBackend;
use super::error::StoreError;
use super::types::{IdeaRecord, LikeState, Session};

/// Persisted keys. All values are text; structured values are JSON.
pub const KEY_LOGGED_IN: &str = "isLoggedIn";
pub const KEY_USER_NAME: &str = "userName";
pub const KEY_HAS_LIKED: &str = "hasLiked";
pub const KEY_IDEA_LIKES: &str = "ideaLikes";
pub const KEY_IDEAS: &str = "communityIdeas";

/// Typed accessors over the raw key-value backend.
#[derive(Clone)]
pub struct CommunityStore {
    backend: Rc<dyn KeyValueBackend>,
}

impl CommunityStore {
    pub fn new(backend: Rc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// The current session, if the visitor is logged in.
    pub fn session(&self) -> Option<Session> {
        if self.backend.get(KEY_LOGGED_IN).as_deref() == Some("true") {
            Some(Session {
                user_name: self.backend.get(KEY_USER_NAME).unwrap_or_default(),
            })
        } else {
            None
        }
    }

    pub fn set_session(&self, user_name: &str) {
        self.backend.set(KEY_LOGGED_IN, "true");
        self.backend.set(KEY_USER_NAME, user_name);
    }

    pub fn clear_session(&self) {
        self.backend.remove(KEY_LOGGED_IN);
        self.backend.remove(KEY_USER_NAME);
    }

    /// All stored ideas in insertion order.
    ///
    /// A missing or corrupt list degrades to empty rather than failing.
    pub fn ideas(&self) -> Vec<IdeaRecord> {
        self.backend
            .get(KEY_IDEAS)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Append an idea and persist the full list, returning the new list.
    pub fn push_idea(&self, idea: IdeaRecord) -> Result<Vec<IdeaRecord>, StoreError> {
        let mut ideas = self.ideas();
        ideas.push(idea);
        let raw = serde_json::to_string(&ideas)?;
        self.backend.set(KEY_IDEAS, &raw);
        Ok(ideas)
    }

    /// Current like state. The count clamps at zero, so an externally
    /// tampered negative value loads as 0.
    pub fn like_state(&self) -> LikeState {
        let has_liked = self.backend.get(KEY_HAS_LIKED).as_deref() == Some("true");
        let like_count = self
            .backend
            .get(KEY_IDEA_LIKES)
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or(0)
            .max(0) as u32;
        LikeState {
            has_liked,
            like_count,
        }
    }

    pub fn set_like_state(&self, state: LikeState) {
        self.backend
            .set(KEY_HAS_LIKED, if state.has_liked { "true" } else { "false" });
        self.backend
            .set(KEY_IDEA_LIKES, &state.like_count.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::super::backend::MemoryBackend;
    use super::*;

    fn test_store() -> (CommunityStore, Rc<MemoryBackend>) {
        let backend = Rc::new(MemoryBackend::default());
        (CommunityStore::new(backend.clone()), backend)
    }

    fn idea(n: usize) -> IdeaRecord {
        IdeaRecord {
            author: format!("crew-{}", n),
            title: format!("Idea {}", n),
            description: format!("Description {}", n),
            submitted: "01/02/2026".to_string(),
        }
    }

    #[test]
    fn ideas_round_trip_in_insertion_order() {
        let (store, _) = test_store();
        for n in 0..5 {
            store.push_idea(idea(n)).expect("push should serialize");
        }

        let loaded = store.ideas();
        assert_eq!(loaded.len(), 5);
        for (n, record) in loaded.iter().enumerate() {
            assert_eq!(*record, idea(n));
        }
    }

    #[test]
    fn corrupt_idea_list_degrades_to_empty() {
        let (store, backend) = test_store();
        backend.set(KEY_IDEAS, "not json {{");
        assert!(store.ideas().is_empty());

        // A push over the corrupt list starts fresh rather than failing.
        store.push_idea(idea(0)).expect("push should serialize");
        assert_eq!(store.ideas().len(), 1);
    }

    #[test]
    fn missing_like_state_defaults_to_zero() {
        let (store, _) = test_store();
        assert_eq!(store.like_state(), LikeState::default());
    }

    #[test]
    fn tampered_negative_like_count_clamps_to_zero() {
        let (store, backend) = test_store();
        backend.set(KEY_IDEA_LIKES, "-3");
        backend.set(KEY_HAS_LIKED, "true");
        let state = store.like_state();
        assert_eq!(state.like_count, 0);
        assert!(state.has_liked);
    }

    #[test]
    fn like_state_persists_both_fields() {
        let (store, backend) = test_store();
        store.set_like_state(LikeState {
            has_liked: true,
            like_count: 4,
        });
        assert_eq!(backend.get(KEY_HAS_LIKED).as_deref(), Some("true"));
        assert_eq!(backend.get(KEY_IDEA_LIKES).as_deref(), Some("4"));
        assert_eq!(
            store.like_state(),
            LikeState {
                has_liked: true,
                like_count: 4
            }
        );
    }

    #[test]
    fn session_round_trip_and_clear() {
        let (store, backend) = test_store();
        assert_eq!(store.session(), None);

        store.set_session("ares");
        assert_eq!(
            store.session(),
            Some(Session {
                user_name: "ares".to_string()
            })
        );
        assert_eq!(backend.get(KEY_LOGGED_IN).as_deref(), Some("true"));

        store.clear_session();
        assert_eq!(store.session(), None);
        assert_eq!(backend.get(KEY_USER_NAME), None);
    }
}
