use leptos::prelude::*;
use portfolio::config::MotionConfig;
use portfolio::content::SKILLS;
use portfolio::{Reveal, SectionId};

use crate::components::{Badge, Card, CardContent, CardHeader, Icon, Motion, SectionHeading};

#[component]
pub fn Skills(motion: MotionConfig) -> impl IntoView {
    let categories = SKILLS
        .iter()
        .enumerate()
        .map(|(i, category)| {
            view! {
                <Motion reveal=Reveal::fade_up(&motion).staggered(i, &motion)>
                    <Card class="card-full card-hover">
                        <CardHeader>
                            <h3 class="card-title">
                                <Icon glyph=category.glyph class=category.accent.class() />
                                {category.title()}
                            </h3>
                        </CardHeader>
                        <CardContent>
                            <div class="badges">
                                {category
                                    .skills
                                    .iter()
                                    .map(|skill| view! { <Badge>{*skill}</Badge> })
                                    .collect_view()}
                            </div>
                        </CardContent>
                    </Card>
                </Motion>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Skills.as_str() class="section section-muted">
            <div class="container">
                <Motion reveal=Reveal::fade_up(&motion) class="section-header">
                    <SectionHeading title="Technical Skills" />
                </Motion>
                <div class="grid-3">{categories}</div>
            </div>
        </section>
    }
}
