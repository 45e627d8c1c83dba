use leptos::prelude::*;
use portfolio::config::MotionConfig;
use portfolio::content::{ABOUT_PARAGRAPHS, ABOUT_TAGLINE, HIGHLIGHTS, STATS};
use portfolio::{Reveal, SectionId};

use crate::components::{Card, CardContent, CardHeader, Icon, Motion, SectionHeading};

#[component]
pub fn About(motion: MotionConfig) -> impl IntoView {
    let stats = STATS
        .iter()
        .map(|stat| {
            view! {
                <div class=format!("stat {}", stat.accent.class())>
                    <div class="stat-value">{stat.value}</div>
                    <div class="stat-label">{stat.label}</div>
                </div>
            }
        })
        .collect_view();

    let highlights = HIGHLIGHTS
        .iter()
        .map(|h| {
            view! {
                <Card class=format!("card-accent-left {}", h.accent.class())>
                    <CardHeader>
                        <h3 class="card-title">
                            <Icon glyph=h.glyph class="card-icon" />
                            {h.title}
                        </h3>
                    </CardHeader>
                    <CardContent>
                        <p class="muted">{h.description}</p>
                    </CardContent>
                </Card>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::About.as_str() class="section section-light">
            <div class="container">
                <Motion reveal=Reveal::fade_up(&motion) class="section-header">
                    <SectionHeading title="About Me" />
                </Motion>

                <div class="two-col">
                    <Motion reveal=Reveal::from_left(&motion)>
                        <h3 class="about-tagline">{ABOUT_TAGLINE}</h3>
                        {ABOUT_PARAGRAPHS
                            .iter()
                            .map(|p| view! { <p class="about-text">{*p}</p> })
                            .collect_view()}
                        <div class="stats">{stats}</div>
                    </Motion>

                    <Motion reveal=Reveal::from_right(&motion) class="stack">
                        {highlights}
                    </Motion>
                </div>
            </div>
        </section>
    }
}
