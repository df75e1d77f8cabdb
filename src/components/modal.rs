//! Modal Shell
//!
//! Overlay panel shared by every modal.

use leptos::*;
use web_sys::MouseEvent;

use crate::state::global::{GlobalState, ModalId};

/// Overlay shell for a named modal. Clicking the dimmed backdrop itself
/// closes the panel; clicks inside the panel reach the handler with a
/// different target and are ignored.
#[component]
pub fn Modal(id: ModalId, title: &'static str, children: ChildrenFn) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let open_modals = state.open_modals;
    let visible = create_memo(move |_| open_modals.get().contains(&id));

    let state_for_backdrop = state.clone();
    let on_backdrop = move |ev: MouseEvent| {
        let hit_backdrop = match (ev.target(), ev.current_target()) {
            (Some(target), Some(current)) => target == current,
            _ => false,
        };
        if hit_backdrop {
            state_for_backdrop.close_modal(id);
        }
    };

    let state_for_close = state;
    view! {
        {move || {
            visible.get().then(|| {
                let on_backdrop = on_backdrop.clone();
                let state = state_for_close.clone();
                view! {
                    <div
                        class="fixed inset-0 z-40 bg-black/70 flex items-center justify-center px-4"
                        on:click=on_backdrop
                    >
                        <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md border border-gray-700 shadow-lg">
                            <div class="flex items-center justify-between mb-4">
                                <h3 class="text-xl font-semibold">{title}</h3>
                                <button
                                    on:click=move |_| state.close_modal(id)
                                    class="text-gray-400 hover:text-white text-2xl leading-none"
                                >
                                    "×"
                                </button>
                            </div>
                            {children()}
                        </div>
                    </div>
                }
            })
        }}
    }
}
