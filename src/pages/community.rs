//! Community Page
//!
//! The idea board: submission stats, the shared like counter, and entry
//! points for contributing and browsing ideas.

use leptos::*;

use crate::state::global::{GlobalState, ModalId};

/// Community page component
#[component]
pub fn Community() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let ideas = state.ideas;
    let likes = state.likes;

    let state_for_like = state.clone();
    let state_for_contribute = state.clone();
    let state_for_view = state;

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Community"</h1>
                <p class="text-gray-400 mt-1">"Crew ideas for a better recycling loop"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 space-y-6">
                // Board stats
                <div class="grid grid-cols-2 gap-4">
                    <div class="bg-gray-700 rounded-lg p-4 text-center">
                        <div class="text-3xl font-bold">
                            {move || ideas.with(|list| list.len())}
                        </div>
                        <span class="text-gray-400 text-sm">"Ideas Submitted"</span>
                    </div>

                    <div class="bg-gray-700 rounded-lg p-4 text-center">
                        <div class="text-3xl font-bold">
                            {move || likes.get().like_count}
                        </div>
                        <span class="text-gray-400 text-sm">"Board Likes"</span>
                    </div>
                </div>

                // Actions
                <div class="flex flex-wrap items-center gap-3">
                    <button
                        on:click=move |_| state_for_contribute.open_idea_modal()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                               font-medium transition-colors"
                    >
                        "Contribute Idea"
                    </button>

                    <button
                        on:click=move |_| state_for_view.open_modal(ModalId::IdeaList)
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                               font-medium transition-colors"
                    >
                        "View Ideas"
                    </button>

                    <button
                        on:click=move |_| state_for_like.toggle_like()
                        class=move || {
                            let base = "px-4 py-2 rounded-lg font-medium transition-colors";
                            if likes.get().has_liked {
                                format!("{} bg-primary-600 text-white", base)
                            } else {
                                format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                            }
                        }
                    >
                        {move || format!("♥ {}", likes.get().like_count)}
                    </button>
                </div>
            </section>
        </div>
    }
}
