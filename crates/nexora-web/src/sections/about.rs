use leptos::prelude::*;
use nexora_core::{
    Section,
    content::{ABOUT_HEADING, ABOUT_PARAGRAPHS, ABOUT_TITLE},
};

use crate::components::SectionTitle;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="about" id=Section::About.anchor_id()>
            <div class="container">
                <SectionTitle heading=ABOUT_HEADING />
                <div class="about-content">
                    <div class="about-text">
                        <h3>{ABOUT_TITLE}</h3>
                        {ABOUT_PARAGRAPHS.into_iter().map(|paragraph| view! { <p>{paragraph}</p> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
