//! UI Components

use leptos::prelude::*;
use nexora_core::{
    Particle, Section,
    content::{SERVICE_CTA, SectionHeading, ServiceEntry},
};

use crate::dom;

/// Section heading with its lead paragraph
#[component]
pub fn SectionTitle(heading: SectionHeading) -> impl IntoView {
    view! {
        <div class="section-title">
            <h2>{heading.title}</h2>
            <p>{heading.lead}</p>
        </div>
    }
}

/// Service offering card
#[component]
pub fn ServiceCard(service: ServiceEntry) -> impl IntoView {
    view! {
        <div class="service-card">
            <div class="service-card-header">
                <i class=service.icon></i>
                <h3>{service.title}</h3>
            </div>
            <div class="service-card-body">
                <p>{service.description}</p>
                <a
                    href=Section::Contact.href()
                    class="btn"
                    on:click=move |ev| {
                        ev.prevent_default();
                        dom::scroll_to_section(Section::Contact);
                    }
                >
                    {SERVICE_CTA}
                </a>
            </div>
        </div>
    }
}

/// Decorative background particles
#[component]
pub fn ParticleField(particles: Vec<Particle>) -> impl IntoView {
    view! {
        <div class="tech-bg" aria-hidden="true">
            <div class="particles">
                <For
                    each=move || particles.clone()
                    key=|particle| particle.id
                    children=|particle| view! { <div class="particle" style=particle.style()></div> }
                />
            </div>
        </div>
    }
}
