use leptos::prelude::*;
use portfolio::config::MotionConfig;
use portfolio::content::PROFILE;
use portfolio::{Reveal, SectionId};

use crate::components::Motion;
use crate::controller::PageController;

#[component]
pub fn Nav(controller: PageController, motion: MotionConfig) -> impl IntoView {
    let links = SectionId::NAVIGABLE
        .into_iter()
        .filter_map(|id| id.nav_label().map(|label| (id, label)))
        .map(|(id, label)| {
            view! {
                <button
                    class=move || if controller.is_active(id) { "nav-link active" } else { "nav-link" }
                    on:click=move |_| controller.go_to(id)
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <Motion reveal=Reveal::slide_in(&motion) class="nav-brand">
                    {PROFILE.name}
                </Motion>
                <div class="nav-links">{links}</div>
            </div>
        </nav>
    }
}
