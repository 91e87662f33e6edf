use dioxus::prelude::*;
use ui::{About, ContactSection, Experience, Footer, Hero, Projects, Skills};

#[component]
pub fn Home() -> Element {
    ui::use_reveal_animations();

    rsx! {
        Hero {}
        About {}
        Skills {}
        Projects {}
        Experience {}
        ContactSection {}
        Footer {}
    }
}
