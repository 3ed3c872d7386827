//! Single-page portfolio: intro, stats, and projects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing touches the network on mount. Two one-shot visibility triggers
//! start the loads instead:
//! - the stats region at 50% launches the stat fetchers and the project load
//!   together, then counts the tiles up;
//! - the projects region at 10% launches only the project load.
//!
//! Both project paths go through `ProjectsState::begin_loading`, so whichever
//! trigger fires first owns the single fetch.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::projects_section::ProjectsSection;
use crate::components::stats_section::StatsSection;
use crate::config::{CounterDurations, SiteConfig};
use crate::net::error::FeedError;
use crate::net::types::ProjectEntry;
use crate::services::Services;
use crate::state::projects::ProjectsState;
use crate::state::stats::{CounterSlot, StatsState};
use crate::tasks::StatsSnapshot;
use crate::util::counter::{CounterAnimation, animate_value};

#[component]
pub fn HomePage() -> impl IntoView {
    let services = expect_context::<Services>();
    let stats = expect_context::<RwSignal<StatsState>>();
    let projects = expect_context::<RwSignal<ProjectsState>>();

    let stats_region = NodeRef::<Section>::new();
    let projects_region = NodeRef::<Section>::new();

    // The stats projects tile mirrors the grid count; the reveal re-runs this
    // so a count that landed earlier gets its count-up. Memos keep tile
    // animation frames from re-running it.
    let project_count = Memo::new(move |_| projects.with(|p| p.count));
    let revealed = Memo::new(move |_| stats.with(|s| s.revealed));
    let projects_ms = services.config.durations.projects_ms;
    Effect::new(move || {
        revealed.track();
        sync_projects_tile(stats, project_count.get(), projects_ms);
    });

    #[cfg(feature = "csr")]
    install_triggers(&services, stats, projects, stats_region, projects_region);

    view! {
        <section id="about" class="pt-32 pb-16">
            <div class="container mx-auto px-6 text-center">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">"Hi, I'm Zynji"</h1>
                <p class="text-lg text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">
                    "I write about software, build small tools, and share videos about what I learn."
                </p>
            </div>
        </section>
        <StatsSection region=stats_region/>
        <ProjectsSection region=projects_region/>
    }
}

/// Write a finished project load into the grid state.
pub fn apply_projects_result(
    projects: RwSignal<ProjectsState>,
    result: Result<Vec<ProjectEntry>, FeedError>,
    config: &SiteConfig,
) {
    match result {
        Ok(entries) => projects.update(|p| p.apply_entries(&entries, config)),
        Err(e) => projects.update(|p| p.apply_failure(&e)),
    }
}

/// Count the subscriber, post, and view tiles up to `snapshot`.
pub fn animate_stats(stats: RwSignal<StatsState>, snapshot: StatsSnapshot, durations: &CounterDurations) {
    animate_value(
        stats,
        CounterSlot::Subscribers,
        CounterAnimation::from_zero(snapshot.channel.subs, durations.subscribers_ms),
    );
    animate_value(stats, CounterSlot::Posts, CounterAnimation::from_zero(snapshot.posts, durations.posts_ms));
    animate_value(
        stats,
        CounterSlot::Views,
        CounterAnimation::from_zero(snapshot.channel.channel_views, durations.views_ms),
    );
}

/// Update the stats projects tile for a new grid `count`.
///
/// The first positive count seen after the reveal counts up from zero; every
/// other count (before the reveal, or filter clicks later) is written
/// directly.
pub fn sync_projects_tile(stats: RwSignal<StatsState>, count: usize, duration_ms: f64) {
    let claimed = stats.try_update(|s| s.claim_projects_animation(count)).unwrap_or(false);
    if claimed {
        let end = u64::try_from(count).unwrap_or(u64::MAX);
        animate_value(stats, CounterSlot::Projects, CounterAnimation::from_zero(end, duration_ms));
    } else {
        let value = i64::try_from(count).unwrap_or(i64::MAX);
        stats.update(|s| s.set(CounterSlot::Projects, value));
    }
}

#[cfg(feature = "csr")]
fn install_triggers(
    services: &Services,
    stats: RwSignal<StatsState>,
    projects: RwSignal<ProjectsState>,
    stats_region: NodeRef<Section>,
    projects_region: NodeRef<Section>,
) {
    use crate::util::visibility::observe_once;

    let stats_threshold = services.config.stats_threshold;
    let on_stats_visible = {
        let services = services.clone();
        move || {
            stats.update(StatsState::mark_revealed);
            let include_projects = projects.try_update(ProjectsState::begin_loading).unwrap_or(false);
            spawn_reveal(services.clone(), stats, projects, include_projects);
        }
    };
    Effect::new(move || {
        let Some(region) = stats_region.get() else {
            return;
        };
        if let Err(e) = observe_once(&region, stats_threshold, on_stats_visible.clone()) {
            leptos::logging::error!("could not observe stats section: {e:?}");
        }
    });

    let projects_threshold = services.config.projects_threshold;
    let on_projects_visible = {
        let services = services.clone();
        move || {
            if projects.try_update(ProjectsState::begin_loading).unwrap_or(false) {
                spawn_project_load(services.clone(), projects);
            }
        }
    };
    Effect::new(move || {
        let Some(region) = projects_region.get() else {
            return;
        };
        if let Err(e) = observe_once(&region, projects_threshold, on_projects_visible.clone()) {
            leptos::logging::error!("could not observe projects section: {e:?}");
        }
    });
}

#[cfg(feature = "csr")]
fn spawn_reveal(
    services: Services,
    stats: RwSignal<StatsState>,
    projects: RwSignal<ProjectsState>,
    include_projects: bool,
) {
    leptos::task::spawn_local(async move {
        let config = services.config.clone();
        let report = crate::tasks::run_reveal(
            services.transport.as_ref(),
            &config,
            include_projects,
            |snapshot| animate_stats(stats, snapshot, &config.durations),
            |result| apply_projects_result(projects, result, &config),
        )
        .await;
        leptos::logging::log!("stats reveal finished: {report:?}");
    });
}

#[cfg(feature = "csr")]
fn spawn_project_load(services: Services, projects: RwSignal<ProjectsState>) {
    leptos::task::spawn_local(async move {
        let result = crate::tasks::load_projects(services.transport.as_ref(), &services.config).await;
        apply_projects_result(projects, result, &services.config);
    });
}
