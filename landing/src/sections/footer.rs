use leptos::prelude::*;
use portfolio::content::COPYRIGHT;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
