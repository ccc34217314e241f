use leptos::prelude::*;
use nexora_core::{
    Carousel, Section,
    content::{TESTIMONIALS, TESTIMONIALS_HEADING},
};

use crate::components::SectionTitle;

/// Testimonial carousel. All items stay in the document; only the active
/// one is styled as visible.
#[component]
pub fn Testimonials() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));

    view! {
        <section class="testimonials" id=Section::Testimonials.anchor_id()>
            <div class="container">
                <SectionTitle heading=TESTIMONIALS_HEADING />
                <div class="testimonials-container">
                    <For
                        each=|| TESTIMONIALS.into_iter().enumerate()
                        key=|(_, testimonial)| testimonial.id
                        children=move |(index, testimonial)| view! {
                            <div class=move || carousel.with(|c| c.class_for("testimonial-item", index))>
                                <p class="testimonial-content">{testimonial.content}</p>
                                <div class="testimonial-author">
                                    <img src=testimonial.image alt=testimonial.author />
                                    <div class="author-info">
                                        <h4>{testimonial.author}</h4>
                                        <p>{testimonial.position}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    />
                </div>
                <div class="testimonial-controls">
                    <For
                        each=|| 0..TESTIMONIALS.len()
                        key=|index| *index
                        children=move |index| view! {
                            <span
                                class=move || carousel.with(|c| c.class_for("testimonial-btn", index))
                                role="button"
                                aria-label=format!("Testimonio {}", index + 1)
                                on:click=move |_| {
                                    carousel.update(|c| {
                                        c.select(index);
                                    });
                                }
                            ></span>
                        }
                    />
                </div>
            </div>
        </section>
    }
}
