use leptos::prelude::*;
use nexora_core::{
    Section,
    content::{SERVICES, SERVICES_HEADING},
};

use crate::components::{SectionTitle, ServiceCard};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section class="services" id=Section::Services.anchor_id()>
            <div class="container">
                <SectionTitle heading=SERVICES_HEADING />
                <div class="services-grid">
                    <For
                        each=|| SERVICES
                        key=|service| service.title
                        children=|service| view! { <ServiceCard service=service /> }
                    />
                </div>
            </div>
        </section>
    }
}
