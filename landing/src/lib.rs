//! # portfolio-landing
//!
//! Leptos CSR front end for the portfolio page. Content and scroll logic
//! live in the `portfolio` crate; this crate renders the sections, wires
//! browser scroll events into [`controller::PageController`] and owns the
//! DOM adapters.

pub mod components;
pub mod controller;
pub mod dom;
pub mod sections;
pub mod telemetry;

use leptos::prelude::*;
use portfolio::SiteConfig;

use controller::PageController;
use dom::ScrollListener;
use sections::*;

/// Site configuration embedded at build time.
pub fn site_config() -> SiteConfig {
    SiteConfig::from_toml_or_default(include_str!("../site.toml"))
}

/// Install panic hook and logging, then mount the page on `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();

    let config = site_config();
    telemetry::init(config.max_level());
    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

/// Keep `controller` in step with the page: one pass right after mount,
/// then one per scroll event until the current owner is disposed.
pub fn track_scroll(controller: PageController) {
    Effect::new(move || {
        controller.sync();
        let attached =
            dom::window().and_then(|window| ScrollListener::attach(&window, move || controller.sync()));
        match attached {
            // Removed when the owner of this effect is disposed
            Ok(listener) => {
                StoredValue::new_local(listener);
            }
            Err(e) => tracing::warn!("active-section tracking disabled: {e}"),
        }
    });
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let controller = PageController::new(&config);
    let motion = config.motion;
    let links = config.links;

    track_scroll(controller);

    view! {
        <div class="page">
            <Nav controller=controller motion=motion />
            <main>
                <Hero controller=controller motion=motion links=links.clone() />
                <About motion=motion />
                <Skills motion=motion />
                <Experience motion=motion />
                <Projects motion=motion />
                <Contact motion=motion links=links />
            </main>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_site_config_parses() {
        let source = include_str!("../site.toml");
        let config = SiteConfig::from_toml_str(source).expect("shipped site.toml must be valid");
        assert_eq!(config, site_config());
    }
}
