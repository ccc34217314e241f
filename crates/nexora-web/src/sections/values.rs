use leptos::prelude::*;
use nexora_core::content::{VALUES, VALUES_HEADING};

use crate::components::SectionTitle;

/// Mission, vision and values cards
#[component]
pub fn MissionVisionValues() -> impl IntoView {
    view! {
        <section class="mvv">
            <div class="container">
                <SectionTitle heading=VALUES_HEADING />
                <div class="mvv-cards">
                    <For
                        each=|| VALUES
                        key=|value| value.title
                        children=|value| view! {
                            <div class="mvv-card">
                                <i class=value.icon></i>
                                <h3>{value.title}</h3>
                                <p>{value.description}</p>
                            </div>
                        }
                    />
                </div>
            </div>
        </section>
    }
}
