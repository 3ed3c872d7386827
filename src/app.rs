//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::navbar::Navbar;
use crate::pages::home::HomePage;
use crate::services::Services;
use crate::state::{projects::ProjectsState, stats::StatsState, ui::UiState};
use crate::util::dark_mode;
use crate::util::preferences::system_prefers_dark;

/// Root component wired to the browser: HTTP feeds and `localStorage`.
#[component]
pub fn App() -> impl IntoView {
    view! { <Portfolio services=Services::browser()/> }
}

/// Portfolio page with injected services.
///
/// Resolves and applies the initial theme, then provides every shared state
/// signal to the page.
#[component]
pub fn Portfolio(services: Services) -> impl IntoView {
    provide_meta_context();

    let theme = dark_mode::read_preference(
        services.preferences.as_ref(),
        &services.config.theme_storage_key,
        system_prefers_dark(),
    );
    dark_mode::apply(theme);

    let ui = RwSignal::new(UiState::with_theme(theme));
    let stats = RwSignal::new(StatsState::default());
    let projects = RwSignal::new(ProjectsState::default());

    provide_context(services);
    provide_context(ui);
    provide_context(stats);
    provide_context(projects);

    view! {
        <Title text="Zynji | Portfolio"/>
        <Meta name="description" content="Projects, posts, and videos by Zynji."/>
        <div class="min-h-screen bg-white text-gray-900 dark:bg-gray-900 dark:text-white transition-colors">
            <Navbar/>
            <main>
                <HomePage/>
            </main>
            <footer class="py-8 text-center text-sm text-gray-500 dark:text-gray-400">
                <a href="https://blog.zynji.my.id" target="_blank" rel="noopener noreferrer">"blog.zynji.my.id"</a>
            </footer>
        </div>
    }
}
