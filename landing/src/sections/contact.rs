use leptos::prelude::*;
use portfolio::config::{LinksConfig, MotionConfig};
use portfolio::content::{CONTACT_INTRO, EDUCATION, Glyph, PROFILE};
use portfolio::{Reveal, SectionId};

use crate::components::{Card, CardContent, CardHeader, Icon, Motion, SectionHeading};

#[component]
pub fn Contact(motion: MotionConfig, links: LinksConfig) -> impl IntoView {
    let schools = EDUCATION
        .iter()
        .map(|e| {
            view! {
                <div class="school">
                    <div class="school-degree">{e.degree}</div>
                    <div class="school-name">{e.school}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Contact.as_str() class="section section-light">
            <div class="container">
                <Motion reveal=Reveal::fade_up(&motion) class="section-header">
                    <SectionHeading title="Let's Connect" intro=CONTACT_INTRO />
                </Motion>

                <div class="two-col">
                    <Motion reveal=Reveal::from_left(&motion) class="stack">
                        <ContactRow glyph=Glyph::Mail label="Email" value=PROFILE.email accent="accent-blue" />
                        <ContactRow glyph=Glyph::Phone label="Phone" value=PROFILE.phone accent="accent-purple" />
                        <div class="socials">
                            <SocialButton glyph=Glyph::Linkedin label="LinkedIn" href=links.linkedin_url />
                            <SocialButton glyph=Glyph::Github label="GitHub" href=links.github_url />
                        </div>
                    </Motion>

                    <Motion reveal=Reveal::from_right(&motion)>
                        <Card>
                            <CardHeader>
                                <h3 class="card-title">"Education"</h3>
                            </CardHeader>
                            <CardContent class="stack-tight">{schools}</CardContent>
                        </Card>
                    </Motion>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactRow(
    glyph: Glyph,
    label: &'static str,
    value: &'static str,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("contact-row {accent}")>
            <Icon glyph=glyph size="24" />
            <div>
                <div class="contact-label">{label}</div>
                <div class="contact-value">{value}</div>
            </div>
        </div>
    }
}

/// Icon button; inert when no link is configured.
#[component]
fn SocialButton(glyph: Glyph, label: &'static str, href: Option<String>) -> impl IntoView {
    match href {
        Some(href) => view! {
            <a class="btn btn-outline btn-icon" href=href target="_blank" rel="noopener" aria-label=label>
                <Icon glyph=glyph />
            </a>
        }
        .into_any(),
        None => view! {
            <button class="btn btn-outline btn-icon" type="button" aria-label=label>
                <Icon glyph=glyph />
            </button>
        }
        .into_any(),
    }
}
