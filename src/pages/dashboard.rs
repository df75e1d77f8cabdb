//! Dashboard Page
//!
//! Main view: throughput summary tiles plus the processing-trend and
//! waste-composition charts.

use leptos::*;

use crate::components::charts::{EFFICIENCY_PCT, PROCESSED_MASS_KG};
use crate::components::{StatCard, TrendsChart, WasteMixChart};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let ideas = state.ideas;

    let total_mass: f64 = PROCESSED_MASS_KG.iter().sum();
    let latest = PROCESSED_MASS_KG[PROCESSED_MASS_KG.len() - 1];
    let previous = PROCESSED_MASS_KG[PROCESSED_MASS_KG.len() - 2];
    let diff = latest - previous;
    let arrow = if diff > 0.0 { "↑" } else { "↓" };
    let mean_efficiency = EFFICIENCY_PCT.iter().sum::<f64>() / EFFICIENCY_PCT.len() as f64;

    let idea_count = Signal::derive(move || ideas.with(|list| list.len().to_string()));

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Facility throughput at a glance"</p>
            </div>

            // Summary tiles
            <section>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <StatCard
                        label="Processed (7 sols)"
                        value=format!("{:.0} kg", total_mass)
                    />
                    <StatCard
                        label="Latest Sol"
                        value=format!("{:.0} kg", latest)
                        detail=format!("{} {:+.0} kg vs previous sol", arrow, diff)
                    />
                    <StatCard
                        label="Mean Efficiency"
                        value=format!("{:.1}%", mean_efficiency)
                    />
                    <StatCard
                        label="Community Ideas"
                        value=idea_count
                        detail="submitted by crew".to_string()
                    />
                </div>
            </section>

            // Charts
            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Processing Trends"</h2>
                    <TrendsChart />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Waste Composition"</h2>
                    <WasteMixChart />
                </section>
            </div>
        </div>
    }
}
