//! App Root Component
//!
//! Main application component with routing, the global modals, and the
//! notification banner.

use leptos::*;
use leptos_router::*;

use crate::components::{
    IdeaListModal, IdeaSubmitModal, LoginModal, Nav, Notification, SignupModal,
};
use crate::pages::{Community, Dashboard, Operations};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/operations" view=Operations />
                        <Route path="/community" view=Community />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Overlay panels
                <LoginModal />
                <SignupModal />
                <IdeaSubmitModal />
                <IdeaListModal />

                // Notification banner
                <Notification />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🛰️"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
