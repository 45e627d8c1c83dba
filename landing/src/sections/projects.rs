use leptos::prelude::*;
use portfolio::config::MotionConfig;
use portfolio::content::{PROJECTS, PROJECTS_INTRO};
use portfolio::{Reveal, SectionId};

use crate::components::{Badge, Card, CardContent, CardHeader, Motion, SectionHeading};

#[component]
pub fn Projects(motion: MotionConfig) -> impl IntoView {
    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, project)| {
            view! {
                <Motion reveal=Reveal::fade_up(&motion).staggered(i, &motion)>
                    <Card class="card-full card-hover project">
                        <CardHeader>
                            <h3 class="card-title project-title">{project.title}</h3>
                            <p class="project-company">{project.company}</p>
                        </CardHeader>
                        <CardContent>
                            <p class="muted project-description">{project.description}</p>
                            <div class="badges">
                                {project
                                    .tech
                                    .iter()
                                    .map(|tech| view! { <Badge>{*tech}</Badge> })
                                    .collect_view()}
                            </div>
                        </CardContent>
                    </Card>
                </Motion>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Projects.as_str() class="section section-muted">
            <div class="container">
                <Motion reveal=Reveal::fade_up(&motion) class="section-header">
                    <SectionHeading title="Featured Projects" intro=PROJECTS_INTRO />
                </Motion>
                <div class="grid-3">{cards}</div>
            </div>
        </section>
    }
}
