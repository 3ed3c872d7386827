//! Stats section: four count-up tiles observed by the 50% visibility trigger.

#[cfg(test)]
#[path = "stats_section_test.rs"]
mod stats_section_test;

use leptos::html::Section;
use leptos::prelude::*;

use crate::state::stats::{CounterSlot, StatsState};

pub const STAT_SLOTS: [CounterSlot; 4] =
    [CounterSlot::Subscribers, CounterSlot::Views, CounterSlot::Posts, CounterSlot::Projects];

/// Text shown in a tile's number element.
pub fn tile_text(stats: &StatsState, counter: CounterSlot) -> String {
    stats.get(counter).to_string()
}

#[component]
pub fn StatsSection(region: NodeRef<Section>) -> impl IntoView {
    let stats = expect_context::<RwSignal<StatsState>>();

    view! {
        <section id="stats-section" node_ref=region class="py-16 bg-gray-100 dark:bg-gray-800">
            <div class="container mx-auto px-6 grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                {STAT_SLOTS.iter().map(|counter| view! { <StatTile counter=*counter stats=stats/> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn StatTile(counter: CounterSlot, stats: RwSignal<StatsState>) -> impl IntoView {
    view! {
        <div class="p-6 rounded-lg bg-white dark:bg-gray-700 shadow-sm">
            <div id=counter.element_id() class="text-4xl font-bold text-blue-600 dark:text-blue-400">
                {move || stats.with(|s| tile_text(s, counter))}
            </div>
            <p class="mt-2 text-gray-600 dark:text-gray-300">{counter.label()}</p>
        </div>
    }
}
