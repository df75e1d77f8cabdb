//! Idea Modals
//!
//! The submission form and the read-only list view for community ideas.

use leptos::*;

use crate::components::modal::Modal;
use crate::state::global::{GlobalState, ModalId};

/// Idea submission form.
///
/// The author field is refilled from the session whenever the modal opens
/// and intentionally left populated after a submission, so repeat ideas only
/// need a new title and description.
#[component]
pub fn IdeaSubmitModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (author, set_author) = create_signal(String::new());
    let (title, set_title) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());

    let open_modals = state.open_modals;
    let session = state.session;
    create_effect(move |_| {
        if open_modals.get().contains(&ModalId::IdeaSubmit) {
            let name = session
                .get_untracked()
                .map(|s| s.user_name)
                .unwrap_or_default();
            set_author.set(name);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.submit_idea(&author.get(), &title.get(), &description.get());
        set_title.set(String::new());
        set_description.set(String::new());
    };

    view! {
        <Modal id=ModalId::IdeaSubmit title="Contribute an Idea">
            <form on:submit=on_submit.clone() class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Your Name"</label>
                    <input
                        type="text"
                        prop:value=move || author.get()
                        on:input=move |ev| set_author.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Title"</label>
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Description"</label>
                    <textarea
                        rows=4
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Submit Idea"
                </button>
            </form>
        </Modal>
    }
}

/// Read-only list of every submitted idea, in submission order.
#[component]
pub fn IdeaListModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let ideas = state.ideas;

    view! {
        <Modal id=ModalId::IdeaList title="Community Innovations">
            <div class="space-y-3 max-h-96 overflow-y-auto">
                {move || {
                    let list = ideas.get();
                    if list.is_empty() {
                        view! {
                            <p class="text-gray-400 text-center py-4">
                                "No innovations submitted yet. Be the first!"
                            </p>
                        }
                        .into_view()
                    } else {
                        list.into_iter()
                            .map(|idea| {
                                view! {
                                    <div class="bg-gray-700 rounded-lg p-4">
                                        <div class="flex items-center justify-between mb-2">
                                            <h4 class="font-semibold text-gray-100">{idea.title}</h4>
                                            <span class="px-2 py-1 rounded bg-primary-600 text-xs font-medium">
                                                {idea.author}
                                            </span>
                                        </div>
                                        <p class="text-gray-300 text-sm">{idea.description}</p>
                                        <p class="text-green-400 text-xs text-right mt-2">
                                            {format!("Submitted: {}", idea.submitted)}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()
                    }
                }}
            </div>
        </Modal>
    }
}
