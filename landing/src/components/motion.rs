//! Reveal-on-mount / reveal-on-scroll wrapper.

use leptos::html;
use leptos::prelude::*;
use portfolio::{Reveal, Trigger};

use crate::dom;

/// Wraps children in a block that plays `reveal` when its trigger fires.
#[component]
pub fn Motion(
    reveal: Reveal,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    let node = NodeRef::<html::Div>::new();

    Effect::new(move || {
        let Some(element) = node.get() else {
            return;
        };
        match reveal.trigger {
            // rAF runs before the paint; the nested one lands after the hidden frame
            Trigger::Mount => {
                request_animation_frame(move || request_animation_frame(move || visible.set(true)))
            }
            Trigger::InView { once } => {
                match dom::watch_visibility(&element, once, move |seen| visible.set(seen)) {
                    // Disconnected when this effect's owner is disposed
                    Ok(watch) => {
                        StoredValue::new_local(watch);
                    }
                    Err(e) => {
                        tracing::debug!("reveal shown without observer: {e}");
                        visible.set(true);
                    }
                }
            }
        }
    });

    view! {
        <div node_ref=node class=class style=move || reveal.style(visible.get())>
            {children()}
        </div>
    }
}
