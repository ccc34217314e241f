//! Page Content
//!
//! Every record the page renders, compiled in. Lists are rendered in the
//! order they appear here.

use crate::nav::Section;

pub const COMPANY_NAME: &str = "Nexora";
pub const COMPANY_TAGLINE: &str =
    "Líderes en soluciones tecnológicas innovadoras para la transformación digital empresarial.";
pub const COPYRIGHT: &str = "© 2025 Nexora. Todos los derechos reservados.";

/// Heading and lead paragraph shared by every content section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionHeading {
    pub title: &'static str,
    pub lead: &'static str,
}

pub struct Hero {
    pub headline: &'static str,
    pub body: &'static str,
    pub primary_cta: (&'static str, Section),
    pub secondary_cta: (&'static str, Section),
}

pub const HERO: Hero = Hero {
    headline: "Tecnología de Vanguardia para un Mundo Digital",
    body: "En Nexora fusionamos innovación y experiencia para crear soluciones tecnológicas que transforman el futuro de las empresas.",
    primary_cta: ("Explorar Servicios", Section::Services),
    secondary_cta: ("Contactar Expertos", Section::Contact),
};

pub const ABOUT_HEADING: SectionHeading = SectionHeading {
    title: "Sobre Nexora",
    lead: COMPANY_TAGLINE,
};

pub const ABOUT_TITLE: &str = "Pioneros en Innovación Tecnológica";

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Nexora es la rama especializada en tecnología de nuestro grupo corporativo, creada para acompañar a las empresas en cada etapa de su transformación digital.",
    "Con un equipo de expertos apasionados por la tecnología, diseñamos, construimos y operamos soluciones a la medida de cada cliente.",
    "Nuestra misión es convertir ideas complejas en soluciones tecnológicas elegantes, seguras y listas para crecer.",
];

/// Mission / vision / values card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueEntry {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES_HEADING: SectionHeading = SectionHeading {
    title: "Nuestra Filosofía",
    lead: "Los principios que guían cada proyecto y decisión en Nexora.",
};

pub const VALUES: [ValueEntry; 3] = [
    ValueEntry {
        icon: "fas fa-rocket",
        title: "Misión",
        description: "Impulsar la transformación digital de las empresas con soluciones tecnológicas innovadoras, seguras y escalables.",
    },
    ValueEntry {
        icon: "fas fa-eye",
        title: "Visión",
        description: "Ser el referente regional en soluciones tecnológicas de vanguardia para la empresa moderna.",
    },
    ValueEntry {
        icon: "fas fa-gem",
        title: "Valores",
        description: "Innovación constante, integridad técnica, compromiso con el cliente y excelencia en cada entrega.",
    },
];

/// Service offering card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES_HEADING: SectionHeading = SectionHeading {
    title: "Soluciones Tecnológicas",
    lead: "Ofrecemos un portfolio integral de servicios digitales para transformar tu negocio.",
};

pub const SERVICE_CTA: &str = "Solicitar Información";

pub const SERVICES: [ServiceEntry; 6] = [
    ServiceEntry {
        icon: "fas fa-laptop-code",
        title: "Desarrollo Web Avanzado",
        description: "Plataformas web personalizadas con arquitecturas escalables, optimizadas para rendimiento y experiencia de usuario excepcional.",
    },
    ServiceEntry {
        icon: "fas fa-mobile-alt",
        title: "Aplicaciones Móviles",
        description: "Soluciones nativas y multiplataforma para iOS y Android, con interfaces intuitivas y funcionalidades de última generación.",
    },
    ServiceEntry {
        icon: "fas fa-cloud",
        title: "Infraestructura Cloud",
        description: "Diseño e implementación de arquitecturas cloud seguras, escalables y optimizadas para maximizar la eficiencia operativa.",
    },
    ServiceEntry {
        icon: "fas fa-brain",
        title: "Inteligencia Artificial",
        description: "Soluciones de IA y machine learning para automatizar procesos, analizar datos y crear experiencias personalizadas a escala.",
    },
    ServiceEntry {
        icon: "fas fa-shield-alt",
        title: "Ciberseguridad",
        description: "Estrategias integrales de protección digital, desde auditorías de vulnerabilidad hasta implementación de sistemas defensivos avanzados.",
    },
    ServiceEntry {
        icon: "fas fa-cogs",
        title: "Automatización Digital",
        description: "Transformación de procesos empresariales mediante flujos de trabajo automatizados que optimizan recursos y aumentan productividad.",
    },
];

/// Client testimonial
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub content: &'static str,
    pub author: &'static str,
    pub position: &'static str,
    /// Avatar from the placeholder image service; no fallback on failure
    pub image: &'static str,
}

pub const TESTIMONIALS_HEADING: SectionHeading = SectionHeading {
    title: "Testimonios de Clientes",
    lead: "La experiencia de quienes confían en nuestras soluciones tecnológicas.",
};

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        id: 1,
        content: "La transformación digital que Nexora implementó en nuestra empresa ha revolucionado nuestros procesos internos y mejorado significativamente nuestra competitividad. Su enfoque técnico y visión estratégica son incomparables.",
        author: "Ana Martínez",
        position: "Directora de Innovación",
        image: "https://picsum.photos/seed/person1/100/100.jpg",
    },
    Testimonial {
        id: 2,
        content: "La solución de inteligencia artificial desarrollada por Nexora ha optimizado nuestros sistemas de recomendación, aumentando nuestras conversiones en un 40%. Su equipo técnico demuestra un conocimiento profundo y una capacidad excepcional.",
        author: "Carlos Rodríguez",
        position: "E-commerce Global",
        image: "https://picsum.photos/seed/person2/100/100.jpg",
    },
    Testimonial {
        id: 3,
        content: "La migración a la nube gestionada por Nexora no solo mejoró nuestra infraestructura tecnológica, sino que también redujo nuestros costos operativos en un 35%. Su profesionalismo y atención al detalle fueron fundamentales para el éxito del proyecto.",
        author: "Laura Gómez",
        position: "Directora de TI",
        image: "https://picsum.photos/seed/person3/100/100.jpg",
    },
];

/// A way to reach the company
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub heading: &'static str,
    pub detail: &'static str,
}

pub const CONTACT_HEADING: SectionHeading = SectionHeading {
    title: "Contacto",
    lead: "Hablemos sobre cómo podemos transformar tu negocio con tecnología de vanguardia.",
};

pub const CONTACT_INTRO_TITLE: &str = "Conecta con Nuestros Expertos";
pub const CONTACT_INTRO: &str = "Nuestro equipo de especialistas está listo para analizar tus necesidades y diseñar soluciones tecnológicas personalizadas que impulsen tu crecimiento empresarial.";

pub const CONTACT_CHANNELS: [ContactChannel; 2] = [
    ContactChannel {
        icon: "fas fa-phone-alt",
        heading: "Llámanos",
        detail: "+52 55 33465069 (Solo Whatsapp)",
    },
    ContactChannel {
        icon: "fas fa-envelope",
        heading: "Email",
        detail: "nexoratecnology@gmail.com",
    },
];

/// Footer link to one of the page sections
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub target: Section,
}

impl FooterLink {
    pub fn href(&self) -> String {
        self.target.href()
    }
}

pub const QUICK_LINKS: [FooterLink; 5] = [
    FooterLink { label: "Inicio", target: Section::Home },
    FooterLink { label: "Nosotros", target: Section::About },
    FooterLink { label: "Servicios", target: Section::Services },
    FooterLink { label: "Testimonios", target: Section::Testimonials },
    FooterLink { label: "Contacto", target: Section::Contact },
];

pub const FOOTER_SERVICES: [FooterLink; 6] = [
    FooterLink { label: "Desarrollo Web", target: Section::Services },
    FooterLink { label: "Aplicaciones Móviles", target: Section::Services },
    FooterLink { label: "Infraestructura Cloud", target: Section::Services },
    FooterLink { label: "Inteligencia Artificial", target: Section::Services },
    FooterLink { label: "Ciberseguridad", target: Section::Services },
    FooterLink { label: "Automatización Digital", target: Section::Services },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::nav::NAV_SECTIONS;
    use crate::scroll::{HEADER_OFFSET, resolve_target};

    #[test]
    fn test_footer_links_scroll_below_header() {
        let anchors: HashMap<&str, f64> = NAV_SECTIONS
            .iter()
            .zip([0.0, 700.0, 1400.0, 2200.0, 3000.0])
            .map(|(section, top)| (section.anchor_id(), top))
            .collect();
        let lookup = |id: &str| anchors.get(id).copied();

        for link in QUICK_LINKS.iter().chain(FOOTER_SERVICES.iter()) {
            assert_eq!(Section::from_hash(&link.href()), Some(link.target));
            let top = anchors[link.target.anchor_id()];
            assert_eq!(
                resolve_target(&lookup, link.target.anchor_id()),
                Some(top - HEADER_OFFSET),
                "{} skips the header offset",
                link.label
            );
        }
    }

    #[test]
    fn test_testimonial_ids_unique() {
        let mut ids: Vec<u32> = TESTIMONIALS.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TESTIMONIALS.len());
    }

    #[test]
    fn test_footer_services_match_cards() {
        assert_eq!(FOOTER_SERVICES.len(), SERVICES.len());
    }
}
