//! Stat Card Component
//!
//! Small summary tiles for the dashboard grid.

use leptos::*;

/// Stat tile with a label, a value, and an optional detail line.
#[component]
pub fn StatCard(
    /// Tile label
    #[prop(into)]
    label: String,
    /// Displayed value
    #[prop(into)]
    value: MaybeSignal<String>,
    /// Optional detail line under the value
    #[prop(optional)]
    detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">{move || value.get()}</div>
            {detail.map(|detail| view! {
                <div class="text-sm text-gray-500 mt-2">{detail}</div>
            })}
        </div>
    }
}
