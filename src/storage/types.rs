//! Core persisted data structures.

use serde::{Deserialize, Serialize};

/// The simulated login session. Present iff the visitor is logged in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user_name: String,
}

/// A community idea, appended on submission and never mutated.
///
/// Records are stored as a JSON array. Every field defaults so that records
/// written before a field existed still deserialize.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeaRecord {
    pub author: String,
    pub title: String,
    pub description: String,
    /// Local date the idea was submitted, formatted for display.
    pub submitted: String,
}

/// Whether this browser has liked the idea board, and the shared counter.
///
/// The flag is keyed to the browser, not a user: it models "has this browser
/// liked" and is never reconciled against anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LikeState {
    pub has_liked: bool,
    pub like_count: u32,
}

impl LikeState {
    /// Flip the liked flag, moving the counter with it.
    pub fn toggled(self) -> LikeState {
        if self.has_liked {
            LikeState {
                has_liked: false,
                like_count: self.like_count.saturating_sub(1),
            }
        } else {
            LikeState {
                has_liked: true,
                like_count: self.like_count + 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_like_is_an_involution() {
        let initial = LikeState {
            has_liked: false,
            like_count: 7,
        };
        let liked = initial.toggled();
        assert_eq!(
            liked,
            LikeState {
                has_liked: true,
                like_count: 8
            }
        );
        assert_eq!(liked.toggled(), initial);
    }

    #[test]
    fn unlike_at_zero_does_not_underflow() {
        let tampered = LikeState {
            has_liked: true,
            like_count: 0,
        };
        assert_eq!(tampered.toggled().like_count, 0);
    }

    #[test]
    fn old_records_deserialize_with_missing_fields() {
        let idea: IdeaRecord =
            serde_json::from_str(r#"{"author":"jo","title":"Compost reactor"}"#)
                .expect("partial record should parse");
        assert_eq!(idea.author, "jo");
        assert_eq!(idea.title, "Compost reactor");
        assert_eq!(idea.description, "");
        assert_eq!(idea.submitted, "");
    }
}
