//! Display primitives: card, badge, accent rule.

use leptos::prelude::*;

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("card {class}")>{children()}</div> }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="card-header">{children()}</div> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("card-content {class}")>{children()}</div> }
}

/// Small pill label. `variant` is `secondary` (filled) or `outline`.
#[component]
pub fn Badge(#[prop(default = "secondary")] variant: &'static str, children: Children) -> impl IntoView {
    view! { <span class=format!("badge badge-{variant}")>{children()}</span> }
}

/// Centered section title with the gradient rule underneath.
#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] intro: Option<&'static str>,
) -> impl IntoView {
    view! {
        <h2 class="section-title">{title}</h2>
        <div class="section-rule"></div>
        {intro.map(|text| view! { <p class="section-intro">{text}</p> })}
    }
}
