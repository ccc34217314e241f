use leptos::prelude::*;
use nexora_core::{Section, content::HERO};

use crate::dom;

#[component]
fn CallToAction(label: &'static str, target: Section, variant: &'static str) -> impl IntoView {
    view! {
        <a
            href=target.href()
            class=variant
            on:click=move |ev| {
                ev.prevent_default();
                dom::scroll_to_section(target);
            }
        >
            {label}
        </a>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let (primary_label, primary_target) = HERO.primary_cta;
    let (secondary_label, secondary_target) = HERO.secondary_cta;

    view! {
        <section class="hero" id=Section::Home.anchor_id()>
            <div class="container hero-content">
                <h1>{HERO.headline}</h1>
                <p>{HERO.body}</p>
                <div class="hero-buttons">
                    <CallToAction label=primary_label target=primary_target variant="btn" />
                    <CallToAction label=secondary_label target=secondary_target variant="btn btn-outline" />
                </div>
            </div>
        </section>
    }
}
