use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use nexora_core::{
    ContactField, ContactFlow, Section,
    content::{CONTACT_CHANNELS, CONTACT_HEADING, CONTACT_INTRO, CONTACT_INTRO_TITLE},
};

use crate::api;
use crate::components::SectionTitle;

#[component]
fn FormField(field: ContactField, flow: RwSignal<ContactFlow>) -> impl IntoView {
    let id = field.as_str();
    let value = move || flow.with(|f| f.form().get(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| {
        flow.update(|f| f.on_field_change(field, event_target_value(&ev)));
    };

    let control = match field.input_type() {
        Some(kind) => view! {
            <input type=kind id=id name=id required=true prop:value=value on:input=on_input />
        }
        .into_any(),
        None => view! {
            <textarea id=id name=id required=true prop:value=value on:input=on_input></textarea>
        }
        .into_any(),
    };

    view! {
        <div class="form-group">
            <label for=id>{field.label()}</label>
            {control}
        </div>
    }
}

/// Contact section: company channels plus the relay-backed form
#[component]
pub fn Contact() -> impl IntoView {
    let flow = RwSignal::new(ContactFlow::new());

    // Cleared on unmount so a late relay answer is dropped
    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = Arc::clone(&alive);
        move || alive.store(false, Ordering::Release)
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // Refused while a previous submission is still in flight
        let Some(Ok(payload)) = flow.try_update(ContactFlow::begin_submit) else {
            return;
        };

        let alive = Arc::clone(&alive);
        spawn_local(async move {
            let outcome = api::send_contact(payload).await;
            if alive.load(Ordering::Acquire) {
                flow.try_update(|f| f.finish(&outcome));
            }
        });
    };

    let form = move || {
        let on_submit = on_submit.clone();
        view! {
            <form on:submit=on_submit>
                {ContactField::ALL
                    .into_iter()
                    .map(|field| view! { <FormField field=field flow=flow /> })
                    .collect_view()}
                {move || {
                    flow.with(|f| {
                        f.error_message()
                            .map(|reason| view! { <p class="form-error" role="alert">{reason.to_owned()}</p> })
                    })
                }}
                <button type="submit" class="btn" disabled=move || flow.with(ContactFlow::is_sending)>
                    {move || if flow.with(ContactFlow::is_sending) { "Enviando..." } else { "Enviar Mensaje" }}
                </button>
            </form>
        }
    };

    view! {
        <section class="contact" id=Section::Contact.anchor_id()>
            <div class="container">
                <SectionTitle heading=CONTACT_HEADING />
                <div class="contact-container">
                    <div class="contact-info">
                        <h3>{CONTACT_INTRO_TITLE}</h3>
                        <p>{CONTACT_INTRO}</p>
                        {CONTACT_CHANNELS
                            .into_iter()
                            .map(|channel| view! {
                                <div class="contact-item">
                                    <i class=channel.icon></i>
                                    <div>
                                        <h4>{channel.heading}</h4>
                                        <p>{channel.detail}</p>
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                    <div class="contact-form">
                        <Show when=move || flow.with(ContactFlow::is_submitted) fallback=form>
                            <div class="form-success">
                                <i class="fas fa-check-circle"></i>
                                <h3>"¡Mensaje Enviado!"</h3>
                                <p>{move || flow.with(|f| f.confirmation().unwrap_or_default())}</p>
                                <button class="btn" on:click=move |_| flow.update(ContactFlow::on_reset)>
                                    "Enviar Otro Mensaje"
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}
