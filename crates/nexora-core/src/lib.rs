//! # nexora-core
//!
//! Content and UI state for the Nexora landing page, free of any DOM or
//! network dependency so it can be tested natively.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       nexora-web (Leptos)                     │
//! │   Header ─ Hero ─ About ─ Values ─ Services ─ Testimonials   │
//! │                        ─ Contact ─ Footer                     │
//! └──────┬─────────────┬──────────────┬──────────────┬───────────┘
//!        │             │              │              │
//!   ┌────▼────┐  ┌─────▼─────┐  ┌─────▼─────┐  ┌─────▼──────┐
//!   │ scroll  │  │ particles │  │ carousel  │  │  contact   │
//!   │ + nav   │  │           │  │           │  │ MailRelay  │
//!   └─────────┘  └───────────┘  └───────────┘  └────────────┘
//! ```
//!
//! The `MailRelay` trait lets the contact form run against EmailJS in the
//! browser and against an in-memory relay in tests.

pub mod carousel;
pub mod contact;
pub mod content;
pub mod error;
pub mod nav;
pub mod particles;
pub mod relay;
pub mod scroll;

pub use carousel::Carousel;
pub use contact::{ContactField, ContactFlow, ContactForm, SubmissionStatus};
pub use error::{Result, SiteError};
pub use nav::{NAV_SECTIONS, Section};
pub use particles::{PARTICLE_COUNT, Particle};
pub use relay::{MailRelay, RelayPayload, RelayReceipt};
pub use scroll::{AnchorLookup, HeaderState};
