//! Page Shell: header and footer

use leptos::prelude::*;
use nexora_core::{
    HeaderState, NAV_SECTIONS, Section,
    content::{self, COMPANY_NAME, COMPANY_TAGLINE, COPYRIGHT, FooterLink},
};

use crate::dom;

/// Fixed header with section navigation and the mobile menu
#[component]
pub fn Header() -> impl IntoView {
    let header = RwSignal::new(HeaderState::default());

    // Attached for the header's lifetime, removed when it unmounts
    let scroll_listener = window_event_listener(leptos::ev::scroll, move |_| {
        let y = dom::scroll_y();
        header.update(|h| h.on_scroll(y));
    });
    on_cleanup(move || scroll_listener.remove());

    let navigate = move |section: Section| {
        let target = header
            .try_update(|h| h.navigate(&dom::anchor_top, section))
            .flatten();
        if let Some(top) = target {
            dom::smooth_scroll_to(top);
        }
    };

    view! {
        <header class=move || if header.with(|h| h.scrolled) { "header scrolled" } else { "header" }>
            <div class="container header-container">
                <div class="logo">
                    <div class="logo-text">{COMPANY_NAME}</div>
                </div>
                <nav>
                    <ul class=move || {
                        if header.with(|h| h.menu_open) { "nav-links mobile-active" } else { "nav-links" }
                    }>
                        <For
                            each=|| NAV_SECTIONS
                            key=|section| *section
                            children=move |section| view! {
                                <li>
                                    <a
                                        href=section.href()
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            navigate(section);
                                        }
                                    >
                                        {section.label()}
                                    </a>
                                </li>
                            }
                        />
                    </ul>
                </nav>
                <button
                    class="mobile-menu"
                    aria-label="Menú"
                    aria-expanded=move || header.with(|h| h.menu_open).to_string()
                    on:click=move |_| header.update(HeaderState::toggle_menu)
                >
                    <i class=move || {
                        if header.with(|h| h.menu_open) { "fas fa-times" } else { "fas fa-bars" }
                    }></i>
                </button>
            </div>
        </header>
    }
}

#[component]
fn FooterLinks(title: &'static str, links: &'static [FooterLink]) -> impl IntoView {
    view! {
        <div class="footer-col">
            <h4>{title}</h4>
            <ul>
                {links
                    .iter()
                    .map(|link| {
                        let target = link.target;
                        view! {
                            <li>
                                <a
                                    href=link.href()
                                    on:click=move |ev| {
                                        // Keeps the router from scrolling without the header offset
                                        ev.prevent_default();
                                        dom::scroll_to_section(target);
                                    }
                                >
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="container">
                <div class="footer-container">
                    <div class="footer-col">
                        <h4>{COMPANY_NAME}</h4>
                        <p>{COMPANY_TAGLINE}</p>
                    </div>
                    <FooterLinks title="Enlaces Rápidos" links=&content::QUICK_LINKS />
                    <FooterLinks title="Servicios" links=&content::FOOTER_SERVICES />
                    <div class="footer-col">
                        <h4>"Contacto"</h4>
                        <ul>
                            {content::CONTACT_CHANNELS
                                .iter()
                                .map(|channel| view! {
                                    <li><i class=channel.icon></i>" "{channel.detail}</li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{COPYRIGHT}</p>
                </div>
            </div>
        </footer>
    }
}
