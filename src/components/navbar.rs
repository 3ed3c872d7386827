//! Top navigation bar with theme toggle and mobile menu.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::services::Services;
use crate::state::ui::UiState;
use crate::util::dark_mode::{self, Theme};

/// In-page anchors shown in both the desktop and mobile menus.
pub const NAV_LINKS: &[(&str, &str)] = &[("About", "#about"), ("Stats", "#stats-section"), ("Projects", "#projects")];

const MOBILE_MENU_BASE: &str = "md:hidden px-6 pb-4 flex flex-col gap-3";

pub fn mobile_menu_class(open: bool) -> String {
    if open { MOBILE_MENU_BASE.to_owned() } else { format!("{MOBILE_MENU_BASE} hidden") }
}

/// Font Awesome icon for the toggle: offer the mode the user can switch to.
pub fn theme_icon_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "fas fa-moon",
        Theme::Dark => "fas fa-sun",
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let services = expect_context::<Services>();

    let on_theme = move |_| {
        let current = ui.get_untracked().theme;
        let next = dark_mode::toggle(current, services.preferences.as_ref(), &services.config.theme_storage_key);
        ui.update(|u| u.theme = next);
    };

    let links = |class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|(label, href)| view! { <a href=*href class=class>{*label}</a> })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="fixed top-0 w-full z-10 bg-white/80 dark:bg-gray-900/80 backdrop-blur-sm shadow-sm">
            <div class="container mx-auto px-6 py-4 flex items-center justify-between">
                <a href="#" class="text-xl font-bold">"Zynji"</a>
                <div class="hidden md:flex items-center space-x-8">
                    {links("hover:text-blue-600 dark:hover:text-blue-400")}
                </div>
                <div class="flex items-center gap-4">
                    <button
                        id="theme-toggle"
                        class="p-2 rounded-full hover:bg-gray-200 dark:hover:bg-gray-700"
                        on:click=on_theme
                        title="Toggle dark mode"
                    >
                        <i class=move || theme_icon_class(ui.get().theme)></i>
                    </button>
                    <button
                        id="mobile-menu-button"
                        class="md:hidden p-2"
                        on:click=move |_| ui.update(UiState::toggle_menu)
                        aria-label="Toggle menu"
                    >
                        <i class="fas fa-bars"></i>
                    </button>
                </div>
            </div>
            <div id="mobile-menu" class=move || mobile_menu_class(ui.get().mobile_menu_open)>
                {links("py-2 hover:text-blue-600 dark:hover:text-blue-400")}
            </div>
        </nav>
    }
}
