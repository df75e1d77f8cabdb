//! Global Application State
//!
//! Reactive state management using Leptos signals. Every mutation goes
//! through the persistent store first, then updates the matching signal, so
//! the rendered view and localStorage never diverge.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::storage::{CommunityStore, IdeaRecord, LikeState, LocalStorageBackend, Session};

/// How long a notification stays visible.
pub const NOTICE_HIDE_MS: u32 = 4_000;

/// Overlay panels the app can open. More than one may be open at a time
/// (the login modal stacks over a gated idea attempt).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalId {
    Login,
    Signup,
    IdeaSubmit,
    IdeaList,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient banner message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

/// Global application state provided to all components.
#[derive(Clone)]
pub struct GlobalState {
    store: CommunityStore,
    /// Present iff the visitor is logged in
    pub session: RwSignal<Option<Session>>,
    /// All submitted ideas, insertion order
    pub ideas: RwSignal<Vec<IdeaRecord>>,
    /// Like flag and shared counter
    pub likes: RwSignal<LikeState>,
    /// Currently open overlay panels
    pub open_modals: RwSignal<Vec<ModalId>>,
    /// Visible notification, if any
    pub notice: RwSignal<Option<Notice>>,
    hide_timer: Rc<RefCell<Option<Timeout>>>,
}

/// Provide global state to the component tree.
pub fn provide_global_state() {
    let store = CommunityStore::new(Rc::new(LocalStorageBackend));
    provide_context(GlobalState::new(store));
}

impl GlobalState {
    /// Build the state, loading persisted values through the store.
    pub fn new(store: CommunityStore) -> Self {
        Self {
            session: create_rw_signal(store.session()),
            ideas: create_rw_signal(store.ideas()),
            likes: create_rw_signal(store.like_state()),
            open_modals: create_rw_signal(Vec::new()),
            notice: create_rw_signal(None),
            hide_timer: Rc::new(RefCell::new(None)),
            store,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.with_untracked(|session| session.is_some())
    }

    pub fn open_modal(&self, id: ModalId) {
        self.open_modals.update(|open| {
            if !open.contains(&id) {
                open.push(id);
            }
        });
    }

    pub fn close_modal(&self, id: ModalId) {
        self.open_modals.update(|open| open.retain(|open_id| *open_id != id));
    }

    /// Idea submission is gated on a live session: logged-out visitors get
    /// the login modal and an error notice instead.
    pub fn open_idea_modal(&self) {
        if self.is_logged_in() {
            self.open_modal(ModalId::IdeaSubmit);
        } else {
            self.notify("Please log in to contribute your ideas.", NoticeKind::Error);
            self.open_modal(ModalId::Login);
        }
    }

    /// Log in with an email address. No credential check exists; the display
    /// name is the email truncated at its first `@`.
    pub fn login(&self, email: &str) {
        let name = display_name_from_email(email);
        self.store.set_session(&name);
        self.session.set(Some(Session {
            user_name: name.clone(),
        }));
        self.close_modal(ModalId::Login);
        self.notify(
            &format!("Welcome back, {}! Logged in successfully.", name),
            NoticeKind::Success,
        );
    }

    /// Sign up with a display name, taken verbatim.
    pub fn signup(&self, name: &str) {
        self.store.set_session(name);
        self.session.set(Some(Session {
            user_name: name.to_string(),
        }));
        self.close_modal(ModalId::Signup);
        self.notify(
            &format!("Account created! Welcome to MarsWasteNet, {}.", name),
            NoticeKind::Success,
        );
    }

    pub fn logout(&self) {
        self.store.clear_session();
        self.session.set(None);
        self.notify("Logged out. See you next Sol!", NoticeKind::Success);
    }

    /// Append an idea stamped with the current local date and persist it.
    /// Blank fields are accepted; there is no validation.
    pub fn submit_idea(&self, author: &str, title: &str, description: &str) {
        let idea = IdeaRecord {
            author: author.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            submitted: chrono::Local::now().format("%m/%d/%Y").to_string(),
        };

        match self.store.push_idea(idea) {
            Ok(ideas) => self.ideas.set(ideas),
            Err(err) => {
                web_sys::console::error_1(&format!("failed to persist idea: {}", err).into())
            }
        }

        self.close_modal(ModalId::IdeaSubmit);
        self.notify(
            "Idea submitted! Thank you for contributing to Mars innovation.",
            NoticeKind::Success,
        );
    }

    /// Flip the liked flag and move the counter with it, persisting both.
    pub fn toggle_like(&self) {
        let next = self.likes.get_untracked().toggled();
        self.store.set_like_state(next);
        self.likes.set(next);
    }

    /// Show a notification, replacing any visible one. The pending hide is
    /// cancelled before a new one is scheduled, so every message gets its
    /// full display window.
    pub fn notify(&self, message: &str, kind: NoticeKind) {
        if let Some(pending) = self.hide_timer.borrow_mut().take() {
            pending.cancel();
        }

        self.notice.set(Some(Notice {
            message: message.to_string(),
            kind,
        }));

        // Timers need the browser event loop.
        #[cfg(target_arch = "wasm32")]
        {
            let notice = self.notice;
            let timer = Timeout::new(NOTICE_HIDE_MS, move || notice.set(None));
            *self.hide_timer.borrow_mut() = Some(timer);
        }
    }
}

/// Display name for a login: everything before the first `@`.
pub fn display_name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}

/// Avatar badge character: first character upper-cased, `U` placeholder for
/// an empty name.
pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "U".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::backend::{KeyValueBackend, MemoryBackend};
    use crate::storage::store::{KEY_LOGGED_IN, KEY_USER_NAME};

    fn with_state(f: impl FnOnce(GlobalState, Rc<MemoryBackend>)) {
        let runtime = create_runtime();
        let backend = Rc::new(MemoryBackend::default());
        let store = CommunityStore::new(backend.clone());
        f(GlobalState::new(store), backend);
        runtime.dispose();
    }

    #[test]
    fn login_derives_name_from_email() {
        with_state(|state, _| {
            state.login("alice@example.com");
            assert_eq!(
                state.session.get_untracked().map(|s| s.user_name),
                Some("alice".to_string())
            );
        });
    }

    #[test]
    fn signup_takes_name_verbatim() {
        with_state(|state, _| {
            state.signup("Bob");
            assert_eq!(
                state.session.get_untracked().map(|s| s.user_name),
                Some("Bob".to_string())
            );
        });
    }

    #[test]
    fn logout_clears_both_session_fields() {
        with_state(|state, backend| {
            state.login("alice@example.com");
            state.logout();
            assert!(!state.is_logged_in());
            assert_eq!(backend.get(KEY_LOGGED_IN), None);
            assert_eq!(backend.get(KEY_USER_NAME), None);
        });
    }

    #[test]
    fn idea_modal_is_gated_on_login() {
        with_state(|state, _| {
            state.open_idea_modal();

            let open = state.open_modals.get_untracked();
            assert!(!open.contains(&ModalId::IdeaSubmit));
            assert!(open.contains(&ModalId::Login));

            let notice = state.notice.get_untracked().expect("notice should be set");
            assert_eq!(notice.message, "Please log in to contribute your ideas.");
            assert_eq!(notice.kind, NoticeKind::Error);
        });
    }

    #[test]
    fn idea_modal_opens_when_logged_in() {
        with_state(|state, _| {
            state.signup("Bob");
            state.open_idea_modal();
            assert!(state
                .open_modals
                .get_untracked()
                .contains(&ModalId::IdeaSubmit));
        });
    }

    #[test]
    fn submissions_append_in_order_and_close_the_modal() {
        with_state(|state, _| {
            state.signup("Bob");
            state.open_idea_modal();

            state.submit_idea("Bob", "Regolith filter", "Sieve fines before intake");
            state.submit_idea("Bob", "Night shift", "Run the shredder off-peak");

            let ideas = state.ideas.get_untracked();
            assert_eq!(ideas.len(), 2);
            assert_eq!(ideas[0].title, "Regolith filter");
            assert_eq!(ideas[1].title, "Night shift");
            assert_eq!(ideas[1].description, "Run the shredder off-peak");
            assert!(!state
                .open_modals
                .get_untracked()
                .contains(&ModalId::IdeaSubmit));
        });
    }

    #[test]
    fn toggle_like_round_trips_flag_and_counter() {
        with_state(|state, _| {
            let initial = state.likes.get_untracked();
            state.toggle_like();
            let liked = state.likes.get_untracked();
            assert!(liked.has_liked);
            assert_eq!(liked.like_count, initial.like_count + 1);

            state.toggle_like();
            assert_eq!(state.likes.get_untracked(), initial);
        });
    }

    #[test]
    fn newer_notice_replaces_older() {
        with_state(|state, _| {
            state.notify("first", NoticeKind::Success);
            state.notify("second", NoticeKind::Error);
            let notice = state.notice.get_untracked().expect("notice should be set");
            assert_eq!(notice.message, "second");
            assert_eq!(notice.kind, NoticeKind::Error);
        });
    }

    #[test]
    fn display_name_handles_plain_strings() {
        assert_eq!(display_name_from_email("alice@example.com"), "alice");
        assert_eq!(display_name_from_email("no-at-sign"), "no-at-sign");
        assert_eq!(display_name_from_email(""), "");
    }

    #[test]
    fn avatar_initial_uppercases_with_placeholder() {
        assert_eq!(avatar_initial("bob"), "B");
        assert_eq!(avatar_initial("Ares"), "A");
        assert_eq!(avatar_initial(""), "U");
    }
}
