//! Navigation Component
//!
//! Header navigation bar with brand, section links, and the auth controls.

use leptos::*;
use leptos_router::*;

use crate::state::global::{avatar_initial, GlobalState, ModalId};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"♻️"</span>
                        <span class="text-xl font-bold text-white">"MarsWasteNet"</span>
                    </A>

                    // Section links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Dashboard" />
                        <NavLink href="/operations" label="Operations" />
                        <NavLink href="/community" label="Community" />
                    </div>

                    // Login/signup buttons or the user badge
                    <AuthControls />
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

/// Auth buttons while logged out, user badge while logged in
#[component]
fn AuthControls() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = state.session;

    view! {
        {move || {
            match session.get() {
                Some(user) => {
                    let state = state.clone();
                    view! {
                        <div class="flex items-center space-x-3">
                            <span class="w-8 h-8 rounded-full bg-primary-600 flex items-center
                                         justify-center font-bold">
                                {avatar_initial(&user.user_name)}
                            </span>
                            <span class="text-gray-300 text-sm">
                                {format!("Hello, {}!", user.user_name)}
                            </span>
                            <button
                                on:click=move |_| state.logout()
                                class="px-3 py-2 rounded-lg text-sm bg-gray-700 text-gray-300
                                       hover:bg-gray-600 transition-colors"
                            >
                                "Log Out"
                            </button>
                        </div>
                    }
                    .into_view()
                }
                None => {
                    let state_for_login = state.clone();
                    let state_for_signup = state.clone();
                    view! {
                        <div class="flex items-center space-x-2">
                            <button
                                on:click=move |_| state_for_login.open_modal(ModalId::Login)
                                class="px-3 py-2 rounded-lg text-sm bg-gray-700 text-gray-300
                                       hover:bg-gray-600 transition-colors"
                            >
                                "Log In"
                            </button>
                            <button
                                on:click=move |_| state_for_signup.open_modal(ModalId::Signup)
                                class="px-3 py-2 rounded-lg text-sm bg-primary-600 hover:bg-primary-700
                                       text-white font-medium transition-colors"
                            >
                                "Sign Up"
                            </button>
                        </div>
                    }
                    .into_view()
                }
            }
        }}
    }
}
