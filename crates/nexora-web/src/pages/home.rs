//! Home Page

use leptos::prelude::*;
use nexora_core::particles;

use crate::components::ParticleField;
use crate::sections::{About, Contact, Hero, MissionVisionValues, Services, Testimonials};

#[component]
pub fn HomePage() -> impl IntoView {
    // Drawn once per mount and never regenerated
    let particles = particles::generate();

    view! {
        <ParticleField particles=particles />
        <Hero />
        <About />
        <MissionVisionValues />
        <Services />
        <Testimonials />
        <Contact />
    }
}
