use leptos::prelude::*;
use portfolio::config::{LinksConfig, MotionConfig};
use portfolio::content::{Glyph, PROFILE};
use portfolio::{Reveal, SectionId};

use crate::components::{Icon, Motion};
use crate::controller::PageController;

#[component]
pub fn Hero(controller: PageController, motion: MotionConfig, links: LinksConfig) -> impl IntoView {
    let resume = match links.resume_url {
        Some(url) => view! {
            <a class="btn btn-outline" href=url target="_blank" rel="noopener">
                <Icon glyph=Glyph::Download size="16" />
                "Download Resume"
            </a>
        }
        .into_any(),
        None => view! {
            <button class="btn btn-outline" type="button">
                <Icon glyph=Glyph::Download size="16" />
                "Download Resume"
            </button>
        }
        .into_any(),
    };

    view! {
        <section id=SectionId::Hero.as_str() class="hero">
            // Parallax backdrop, drifts down as the page scrolls
            <div
                class="hero-backdrop"
                style=move || format!("transform: translateY({}%);", controller.parallax_percent())
            >
                <div class="hero-gradient"></div>
            </div>

            <div class="container hero-inner">
                <div class="hero-grid">
                    <Motion reveal=Reveal::fade_up(&motion).on_mount()>
                        <h1 class="hero-title">
                            "Hi, I'm "
                            <span class="gradient-text">{PROFILE.first_name}</span>
                        </h1>
                        <h2 class="hero-headline">{PROFILE.headline}</h2>
                        <p class="hero-summary">{PROFILE.summary}</p>
                        <div class="hero-actions">
                            <button
                                class="btn btn-primary"
                                on:click=move |_| controller.go_to(SectionId::Contact)
                            >
                                "Get In Touch"
                            </button>
                            {resume}
                        </div>
                    </Motion>

                    <Motion reveal=Reveal::zoom(&motion).on_mount() class="hero-portrait">
                        <div class="portrait-glow"></div>
                        <img src=PROFILE.photo alt=PROFILE.name class="portrait" />
                    </Motion>
                </div>
            </div>

            <div class="scroll-hint">
                <Icon glyph=Glyph::ChevronDown size="24" />
            </div>
        </section>
    }
}
