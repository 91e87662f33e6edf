use dioxus::prelude::*;

use crate::content::{
    ABOUT_BODY, ABOUT_TITLE, EXPERIENCE_TITLE, FOOTER, PROJECTS, PROJECTS_TITLE, PROJECT_LINK,
    SKILLS, SKILLS_TITLE, TIMELINE,
};
use crate::Tr;

const SECTIONS_CSS: Asset = asset!("/assets/styling/sections.css");

#[component]
pub fn About() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: SECTIONS_CSS }
        section { id: "about", class: "section",
            h2 { class: "section-title", Tr { text: ABOUT_TITLE } }
            for (i, paragraph) in ABOUT_BODY.into_iter().enumerate() {
                p { key: "{i}", class: "about-text", Tr { text: paragraph } }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: "skills", class: "section",
            h2 { class: "section-title", Tr { text: SKILLS_TITLE } }
            div { class: "skills-grid",
                for skill in SKILLS {
                    div { key: "{skill.icon}", class: "skill-card",
                        i { class: skill.icon }
                        h3 { Tr { text: skill.title } }
                        ul { class: "skill-list",
                            for item in skill.items.iter() {
                                li { key: "{item}", {*item} }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: "projects", class: "section",
            h2 { class: "section-title", Tr { text: PROJECTS_TITLE } }
            div { class: "projects-grid",
                for project in PROJECTS {
                    article { key: "{project.title}", class: "project-card",
                        h3 { {project.title} }
                        p { Tr { text: project.description } }
                        div { class: "project-tags",
                            for tag in project.tags.iter() {
                                span { key: "{tag}", class: "tag", {*tag} }
                            }
                        }
                        a {
                            class: "project-link",
                            href: project.url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Tr { text: PROJECT_LINK }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Experience() -> Element {
    rsx! {
        section { id: "experience", class: "section",
            h2 { class: "section-title", Tr { text: EXPERIENCE_TITLE } }
            div { class: "timeline",
                for item in TIMELINE {
                    div { key: "{item.place}", class: "timeline-item",
                        span { class: "timeline-period", Tr { text: item.period } }
                        h3 { Tr { text: item.role } }
                        p { class: "timeline-place", {item.place} }
                        p { Tr { text: item.summary } }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            p { Tr { text: FOOTER } }
        }
    }
}
