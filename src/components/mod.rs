//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod charts;
pub mod stat_card;
pub mod modal;
pub mod auth_modals;
pub mod idea_modals;
pub mod notification;

pub use nav::Nav;
pub use charts::{EfficiencyChart, RecoveryChart, TrendsChart, WasteMixChart};
pub use stat_card::StatCard;
pub use modal::Modal;
pub use auth_modals::{LoginModal, SignupModal};
pub use idea_modals::{IdeaListModal, IdeaSubmitModal};
pub use notification::Notification;
