//! Dashboard Page
//!
//! Reading dashboard layout: streak summary, shelves, and per-book progress.
//! The sections render as placeholders until the data layer is wired in.

use leptos::*;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Your reading at a glance"</p>
            </div>

            // Streak summary row
            <section>
                <h2 class="text-lg font-semibold mb-4">"Streaks"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <SummaryCard label="Reading streak" value="—" unit="days" />
                    <SummaryCard label="Pages today" value="—" unit="pages" />
                    <SummaryCard label="Books finished" value="—" unit="" />
                    <SummaryCard label="Shelves" value="—" unit="" />
                </div>
            </section>

            // Shelves
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Your Shelves"</h2>
                <EmptyState message="No shelves yet. Create one to start adding books." />
            </section>

            // Currently reading
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Currently Reading"</h2>
                <EmptyState message="Nothing in progress. Add a book to a shelf to log pages." />
            </section>
        </div>
    }
}

/// Small stat card in the summary row
#[component]
fn SummaryCard(
    label: &'static str,
    value: &'static str,
    unit: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4">
            <div class="text-sm text-gray-400 mb-1">{label}</div>
            <div class="flex items-baseline space-x-1">
                <span class="text-2xl font-bold">{value}</span>
                <span class="text-sm text-gray-400">{unit}</span>
            </div>
        </div>
    }
}

/// Placeholder shown while a section has no content
#[component]
fn EmptyState(message: &'static str) -> impl IntoView {
    view! {
        <div class="py-8 text-center text-gray-500 text-sm">
            {message}
        </div>
    }
}
