//! Exclusive tag filter buttons above the project grid.

#[cfg(test)]
#[path = "project_filters_test.rs"]
mod project_filters_test;

use leptos::prelude::*;

use crate::config::FilterOption;
use crate::state::projects::ProjectsState;

const FILTER_BASE: &str = "project-filter px-4 py-2 rounded-full text-sm transition-colors";
pub const ACTIVE_FILTER_CLASSES: &str = "bg-blue-600 text-white dark:bg-blue-700";
pub const INACTIVE_FILTER_CLASSES: &str =
    "bg-gray-200 text-gray-800 hover:bg-gray-300 dark:bg-gray-700 dark:text-white dark:hover:bg-gray-600";

pub fn filter_button_class(active: bool) -> String {
    let state = if active { ACTIVE_FILTER_CLASSES } else { INACTIVE_FILTER_CLASSES };
    format!("{FILTER_BASE} {state}")
}

#[component]
pub fn ProjectFilters(filters: Vec<FilterOption>) -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectsState>>();

    view! {
        <div class="flex flex-wrap justify-center gap-3 mb-8">
            {filters
                .into_iter()
                .map(|FilterOption { label, value }| {
                    let active_value = value.clone();
                    let click_value = value.clone();
                    view! {
                        <button
                            class=move || filter_button_class(projects.with(|p| p.is_filter_active(&active_value)))
                            data-filter=value
                            on:click=move |_| projects.update(|p| p.select_filter(&click_value))
                        >
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
