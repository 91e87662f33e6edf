//! This crate contains all shared UI for the portfolio: page sections and the
//! browser behavior behind them.

mod dom;
mod storage;
pub use storage::{BrowserStorage, MemoryStore, PreferenceStore};

mod i18n;
pub use i18n::{
    t, toggle_label, toggle_lang, use_lang, Bilingual, I18nProvider, Lang, LangController,
    TextMode, Tr, LANG_STORAGE_KEY,
};

pub mod content;

mod scroll;
pub use scroll::{fragment_target, scroll_offset, scroll_to_fragment, AnchorLink, HEADER_OFFSET};

mod reveal;
pub use reveal::{install_reveal_animations, use_reveal_animations, RevealTracker};

mod menu;
pub use menu::{MenuState, Navbar};

mod hero;
pub use hero::Hero;

mod sections;
pub use sections::{About, Experience, Footer, Projects, Skills};

mod contact_form;
pub use contact_form::{notice_for, ContactSection};

mod theme;
pub use theme::PortfolioTheme;
