use leptos::prelude::*;
use portfolio::config::MotionConfig;
use portfolio::content::EXPERIENCES;
use portfolio::{Reveal, SectionId};

use crate::components::{Badge, Card, CardContent, CardHeader, Motion, SectionHeading};

#[component]
pub fn Experience(motion: MotionConfig) -> impl IntoView {
    let jobs = EXPERIENCES
        .iter()
        .enumerate()
        .map(|(i, job)| {
            view! {
                <Motion reveal=Reveal::alternating(i, &motion)>
                    <Card class="card-hover">
                        <CardHeader>
                            <div class="job-header">
                                <div>
                                    <h3 class="card-title job-role">{job.role}</h3>
                                    <p class="job-company">{job.company} " • " {job.location}</p>
                                </div>
                                <Badge variant="outline">{job.period}</Badge>
                            </div>
                        </CardHeader>
                        <CardContent>
                            <ul class="achievements">
                                {job
                                    .achievements
                                    .iter()
                                    .map(|line| {
                                        view! {
                                            <li>
                                                <span class="bullet"></span>
                                                {*line}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </CardContent>
                    </Card>
                </Motion>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Experience.as_str() class="section section-light">
            <div class="container">
                <Motion reveal=Reveal::fade_up(&motion) class="section-header">
                    <SectionHeading title="Professional Experience" />
                </Motion>
                <div class="timeline">{jobs}</div>
            </div>
        </section>
    }
}
