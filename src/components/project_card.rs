//! Card view for one project in the grid.

use leptos::prelude::*;

use crate::state::project_card::ProjectCard;

const CARD_BASE: &str = "project-card bg-white dark:bg-gray-700 rounded-lg overflow-hidden shadow-sm hover:shadow-md transition-shadow";

pub fn card_class(visible: bool) -> String {
    if visible { CARD_BASE.to_owned() } else { format!("{CARD_BASE} hidden") }
}

/// A linked project card. Hidden, not removed, when filtered out.
#[component]
pub fn ProjectCardView(card: ProjectCard, #[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let ProjectCard { href, image, alt, title, description, categories, date, icon, reading_time, filter_key } = card;

    view! {
        <div class=move || card_class(visible.get()) data-filters=filter_key>
            <a href=href target="_blank" rel="noopener noreferrer">
                <div class="h-48 bg-gray-200 dark:bg-gray-600 overflow-hidden">
                    <img src=image alt=alt class="w-full h-full object-cover" loading="lazy"/>
                </div>
                <div class="p-6">
                    <h3 class="text-xl font-semibold mb-2">{title}</h3>
                    <p class="text-gray-600 dark:text-gray-300 mb-4 line-clamp-2">{description}</p>
                    <div class="flex flex-wrap gap-2 mb-4">
                        {categories
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <span class="px-2 py-1 text-xs rounded-full bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200">
                                        {category}
                                    </span>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="flex justify-between items-center text-sm text-gray-500 dark:text-gray-400">
                        <span>{date}</span>
                        <span class="flex items-center gap-1">
                            <i class=format!("far {icon}")></i>
                            {reading_time}
                        </span>
                    </div>
                </div>
            </a>
        </div>
    }
}
