//! Auth Modals
//!
//! Login and signup forms. Authentication is simulated: nothing is checked,
//! any submission transitions the session to logged in.

use leptos::*;

use crate::components::modal::Modal;
use crate::state::global::{GlobalState, ModalId};

/// Login modal. The display name is derived from the email; the password is
/// collected for appearance only and never read.
#[component]
pub fn LoginModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.login(&email.get());
        set_password.set(String::new());
    };

    view! {
        <Modal id=ModalId::Login title="Log In">
            <form on:submit=on_submit.clone() class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Log In"
                </button>
            </form>
        </Modal>
    }
}

/// Signup modal. The submitted name is used verbatim as the display name.
#[component]
pub fn SignupModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.signup(&name.get());
        set_password.set(String::new());
    };

    view! {
        <Modal id=ModalId::Signup title="Sign Up">
            <form on:submit=on_submit.clone() class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Create Account"
                </button>
            </form>
        </Modal>
    }
}
