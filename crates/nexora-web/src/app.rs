//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::dom;
use crate::pages::HomePage;
use crate::shell::{Footer, Header};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Hash edits and bookmarks land under the header, same as the menu
    let hash_listener = window_event_listener(leptos::ev::hashchange, move |_| {
        if let Some(section) = dom::location_section() {
            dom::scroll_to_section(section);
        }
    });
    on_cleanup(move || hash_listener.remove());

    Effect::new(move |_| {
        if let Some(section) = dom::location_section() {
            request_animation_frame(move || {
                dom::scroll_to_section(section);
            });
        }
    });

    view! {
        <Router>
            <div class="app">
                <Header />
                <Routes fallback=|| view! { <p class="not-found">"Página no encontrada"</p> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
                <Footer />
            </div>
        </Router>
    }
}
