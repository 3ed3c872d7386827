//! Projects section: count header, filters, skeleton, grid, and empty/error
//! states, observed by the 10% visibility trigger.

#[cfg(test)]
#[path = "projects_section_test.rs"]
mod projects_section_test;

use leptos::html::Section;
use leptos::prelude::*;

use super::project_card::ProjectCardView;
use super::project_filters::ProjectFilters;
use crate::services::Services;
use crate::state::projects::ProjectsState;

/// Shared by the skeleton and the card grid so placeholders line up with cards.
const GRID_CLASSES: &str = "grid md:grid-cols-2 lg:grid-cols-3 gap-8";
const EMPTY_CLASSES: &str = "text-center py-12 text-gray-600 dark:text-gray-300";

/// `base`, with `hidden` appended unless `shown`.
pub fn hidden_unless(shown: bool, base: &str) -> String {
    if shown { base.to_owned() } else { format!("{base} hidden") }
}

pub fn count_label(count: usize) -> String {
    if count == 1 { "1 project".to_owned() } else { format!("{count} projects") }
}

#[component]
pub fn ProjectsSection(region: NodeRef<Section>) -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let services = expect_context::<Services>();
    let filters = services.config.project_filters.clone();

    // Filter clicks only change visibility; the card list itself is rebuilt
    // only when a load lands.
    let cards = Memo::new(move |_| projects.with(|p| p.cards.clone()));
    let error = Memo::new(move |_| projects.with(|p| p.error.clone()));

    view! {
        <section id="projects" node_ref=region class="py-16">
            <div class="container mx-auto px-6">
                <div class="flex items-center justify-between mb-8">
                    <h2 class="text-3xl font-bold">"Projects"</h2>
                    <span id="projects-visible-count" class="text-gray-500 dark:text-gray-400">
                        {move || count_label(projects.with(|p| p.count))}
                    </span>
                </div>
                <ProjectFilters filters=filters/>
                <div
                    id="loading-skeleton"
                    class=move || hidden_unless(projects.with(ProjectsState::shows_skeleton), GRID_CLASSES)
                >
                    {(0..3)
                        .map(|_| view! { <div class="h-80 rounded-lg bg-gray-200 dark:bg-gray-700 animate-pulse"></div> })
                        .collect::<Vec<_>>()}
                </div>
                <div
                    id="projects-container"
                    class=move || hidden_unless(projects.with(ProjectsState::shows_container), GRID_CLASSES)
                >
                    {move || match error.get() {
                        Some(message) => view! { <FailureNotice message=message/> }.into_any(),
                        None => cards
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, card)| {
                                let visible = Signal::derive(move || projects.with(|p| p.is_card_visible(index)));
                                view! { <ProjectCardView card=card visible=visible/> }
                            })
                            .collect::<Vec<_>>()
                            .into_any(),
                    }}
                </div>
                <div
                    id="no-projects-message"
                    class=move || hidden_unless(projects.with(ProjectsState::shows_empty_message), EMPTY_CLASSES)
                >
                    <i class="fas fa-folder-open text-4xl mb-4"></i>
                    <p>"No projects found."</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FailureNotice(message: String) -> impl IntoView {
    view! {
        <div class="col-span-full text-center py-12">
            <i class="fas fa-exclamation-triangle text-4xl text-yellow-500 mb-4"></i>
            <p class="text-gray-600 dark:text-gray-300">{message}</p>
        </div>
    }
}
