//! Notification Banner
//!
//! Transient banner for success and error messages. Visibility and the
//! auto-hide timer are owned by the global state.

use leptos::*;

use crate::state::global::{GlobalState, NoticeKind};

/// Notification banner container
#[component]
pub fn Notification() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let notice = state.notice;

    view! {
        <div class="fixed top-20 right-4 z-50">
            {move || {
                notice.get().map(|notice| {
                    let (icon, accent) = match notice.kind {
                        NoticeKind::Success => ("✓", "border-green-400"),
                        NoticeKind::Error => ("✕", "border-red-400"),
                    };
                    view! {
                        <div class=format!(
                            "flex items-center space-x-3 bg-gray-800 border-l-4 {} text-white \
                             px-4 py-3 rounded-lg shadow-lg",
                            accent
                        )>
                            <span class="text-lg">{icon}</span>
                            <span class="text-sm font-medium">{notice.message}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
