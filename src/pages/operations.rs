//! Operations Page
//!
//! Per-sol efficiency and resource recovery charts.

use leptos::*;

use crate::components::{EfficiencyChart, RecoveryChart};

/// Operations page component
#[component]
pub fn Operations() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Operations"</h1>
                <p class="text-gray-400 mt-1">"System efficiency and resource recovery"</p>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"System Efficiency"</h2>
                    <EfficiencyChart />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Resource Recovery"</h2>
                    <RecoveryChart />
                </section>
            </div>
        </div>
    }
}
