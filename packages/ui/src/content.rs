//! Static page copy. Every string exists in English and French.

use crate::i18n::Bilingual;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: Bilingual,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub icon: &'static str,
    pub title: Bilingual,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: Bilingual,
    pub tags: &'static [&'static str],
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineItem {
    pub period: Bilingual,
    pub role: Bilingual,
    pub place: &'static str,
    pub summary: Bilingual,
}

pub const BRAND: Bilingual = Bilingual::new("Portfolio", "Portfolio");

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { href: "#about", label: Bilingual::new("About", "À propos") },
    NavLink { href: "#skills", label: Bilingual::new("Skills", "Compétences") },
    NavLink { href: "#projects", label: Bilingual::new("Projects", "Projets") },
    NavLink { href: "#experience", label: Bilingual::new("Experience", "Parcours") },
    NavLink { href: "#contact", label: Bilingual::new("Contact", "Contact") },
];

pub const HERO_GREETING: Bilingual = Bilingual::new("Hello, I'm", "Bonjour, je suis");
pub const HERO_NAME: &str = "Alex Martin";
pub const HERO_TAGLINE: Bilingual = Bilingual::new(
    "Software engineer building <span class=\"accent\">fast, reliable</span> web products.",
    "Ingénieur logiciel, je construis des produits web <span class=\"accent\">rapides et fiables</span>.",
);
pub const HERO_CTA_WORK: Bilingual = Bilingual::new("See my work", "Voir mes projets");
pub const HERO_CTA_CONTACT: Bilingual = Bilingual::new("Get in touch", "Me contacter");

pub const ABOUT_TITLE: Bilingual = Bilingual::new("About me", "À propos de moi");
pub const ABOUT_BODY: [Bilingual; 2] = [
    Bilingual::new(
        "I design and ship web applications end to end, from the database schema to the last pixel.",
        "Je conçois et livre des applications web de bout en bout, du schéma de base de données au dernier pixel.",
    ),
    Bilingual::new(
        "Lately I have been writing front ends in Rust &amp; WebAssembly.",
        "Depuis peu, j'écris des interfaces en Rust &amp; WebAssembly.",
    ),
];

pub const SKILLS_TITLE: Bilingual = Bilingual::new("Skills", "Compétences");
pub const SKILLS: [Skill; 3] = [
    Skill {
        icon: "fa-solid fa-code",
        title: Bilingual::new("Languages", "Langages"),
        items: &["Rust", "TypeScript", "SQL", "Python"],
    },
    Skill {
        icon: "fa-solid fa-layer-group",
        title: Bilingual::new("Frameworks", "Frameworks"),
        items: &["Dioxus", "Axum", "React", "Tokio"],
    },
    Skill {
        icon: "fa-solid fa-server",
        title: Bilingual::new("Infrastructure", "Infrastructure"),
        items: &["PostgreSQL", "Docker", "CI/CD", "Linux"],
    },
];

pub const PROJECTS_TITLE: Bilingual = Bilingual::new("Selected projects", "Projets choisis");
pub const PROJECT_LINK: Bilingual = Bilingual::new("View project", "Voir le projet");
pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Trailhead",
        description: Bilingual::new(
            "Offline-first hiking planner with route sharing.",
            "Planificateur de randonnées hors ligne avec partage d'itinéraires.",
        ),
        tags: &["Rust", "Dioxus", "SQLite"],
        url: "https://github.com/alexmartin/trailhead",
    },
    Project {
        title: "Ledgerly",
        description: Bilingual::new(
            "Small-business bookkeeping API serving 2k daily users.",
            "API de comptabilité pour petites entreprises, 2k utilisateurs par jour.",
        ),
        tags: &["Axum", "PostgreSQL"],
        url: "https://github.com/alexmartin/ledgerly",
    },
    Project {
        title: "Pixel Garden",
        description: Bilingual::new(
            "Generative art playground running entirely in the browser.",
            "Terrain de jeu d'art génératif qui tourne entièrement dans le navigateur.",
        ),
        tags: &["WebAssembly", "Canvas"],
        url: "https://github.com/alexmartin/pixel-garden",
    },
];

pub const EXPERIENCE_TITLE: Bilingual = Bilingual::new("Experience", "Parcours");
pub const TIMELINE: [TimelineItem; 3] = [
    TimelineItem {
        period: Bilingual::new("2022 – today", "2022 – aujourd'hui"),
        role: Bilingual::new("Senior software engineer", "Ingénieur logiciel senior"),
        place: "Northwind Labs",
        summary: Bilingual::new(
            "Lead the web platform team and its move to Rust services.",
            "Responsable de l'équipe plateforme web et de sa migration vers des services Rust.",
        ),
    },
    TimelineItem {
        period: Bilingual::new("2019 – 2022", "2019 – 2022"),
        role: Bilingual::new("Full-stack developer", "Développeur full-stack"),
        place: "Atelier Numérique",
        summary: Bilingual::new(
            "Built client sites and internal tools for agencies.",
            "Création de sites clients et d'outils internes pour des agences.",
        ),
    },
    TimelineItem {
        period: Bilingual::new("2016 – 2019", "2016 – 2019"),
        role: Bilingual::new("Computer science degree", "Diplôme d'informatique"),
        place: "Université de Lyon",
        summary: Bilingual::new(
            "Systems programming &amp; networks.",
            "Programmation système &amp; réseaux.",
        ),
    },
];

pub const CONTACT_TITLE: Bilingual = Bilingual::new("Let's talk", "Discutons");
pub const CONTACT_INTRO: Bilingual = Bilingual::new(
    "Have a project in mind? Send me a message.",
    "Un projet en tête ? Envoyez-moi un message.",
);
pub const CONTACT_NAME: Bilingual = Bilingual::new("Name", "Nom");
pub const CONTACT_EMAIL: Bilingual = Bilingual::new("Email", "E-mail");
pub const CONTACT_MESSAGE: Bilingual = Bilingual::new("Message", "Message");
pub const CONTACT_NAME_PH: Bilingual = Bilingual::new("Your name", "Votre nom");
pub const CONTACT_EMAIL_PH: Bilingual = Bilingual::new("you@example.com", "vous@exemple.com");
pub const CONTACT_MESSAGE_PH: Bilingual =
    Bilingual::new("Tell me about your project", "Parlez-moi de votre projet");
pub const CONTACT_SUBMIT: Bilingual = Bilingual::new("Send Message", "Envoyer le message");

pub const FOOTER: Bilingual = Bilingual::new(
    "&copy; Alex Martin. Built with Rust.",
    "&copy; Alex Martin. Réalisé en Rust.",
);
