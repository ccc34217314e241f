//! Landing Page Sections

mod about;
mod contact;
mod hero;
mod services;
mod testimonials;
mod values;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use services::Services;
pub use testimonials::Testimonials;
pub use values::MissionVisionValues;
