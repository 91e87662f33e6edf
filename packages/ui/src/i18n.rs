use dioxus::prelude::*;

use crate::storage::{BrowserStorage, PreferenceStore};

/// Local storage key holding the visitor's language.
pub const LANG_STORAGE_KEY: &str = "portfolio-lang";

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Fr,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Lang::En),
            "fr" => Some(Lang::Fr),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::En => Lang::Fr,
            Lang::Fr => Lang::En,
        }
    }
}

/// Label of the language switch button.
pub fn toggle_label(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "EN / FR",
        Lang::Fr => "FR / EN",
    }
}

/// How a translated value is injected into its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    Plain,
    Markup,
}

impl TextMode {
    /// Tag-like or entity-like values are injected as markup. This is a
    /// substring check, not parsing.
    pub fn detect(value: &str) -> Self {
        if value.contains('<') || value.contains('&') {
            TextMode::Markup
        } else {
            TextMode::Plain
        }
    }
}

/// An English/French pair as carried by `data-en` / `data-fr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub en: &'static str,
    pub fr: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, fr: &'static str) -> Self {
        Self { en, fr }
    }

    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.en,
            Lang::Fr => self.fr,
        }
    }

    pub fn resolve(&self, lang: Lang) -> (TextMode, &'static str) {
        let value = self.get(lang);
        (TextMode::detect(value), value)
    }
}

/// Current language plus the store it is persisted in.
pub struct LangController<S: PreferenceStore> {
    store: S,
    lang: Lang,
}

impl<S: PreferenceStore> LangController<S> {
    /// Missing or unknown stored values fall back to English.
    pub fn load(store: S) -> Self {
        let lang = store
            .get(LANG_STORAGE_KEY)
            .and_then(|code| Lang::from_code(&code))
            .unwrap_or_default();
        Self { store, lang }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn toggle(&mut self) -> Lang {
        self.lang = self.lang.toggled();
        self.store.set(LANG_STORAGE_KEY, self.lang.code());
        tracing::debug!("i18n.toggle: lang={}", self.lang.code());
        self.lang
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }
}

/// Provide `Signal<Lang>` to the component tree, defaulting to English.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(Lang::default);
    use_context_provider(|| lang);

    // Stored preference is read once after mount so server and client
    // render the same first frame.
    use_effect(move || {
        let stored = LangController::load(BrowserStorage).lang();
        if stored != Lang::default() {
            lang.set(stored);
        }
    });

    use_effect(move || {
        let code = lang().code();
        crate::dom::set_document_lang(code);
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    tracing::warn!("startup: missing I18nProvider context, using local Lang::En signal");
    use_signal(Lang::default)
}

/// Flip the page language and persist it.
pub fn toggle_lang(mut lang: Signal<Lang>) {
    let mut controller = LangController {
        store: BrowserStorage,
        lang: lang(),
    };
    lang.set(controller.toggle());
}

/// Translatable text: carries the `data-en` / `data-fr` pair and shows the
/// value for the current language.
#[component]
pub fn Tr(text: Bilingual, #[props(default, into)] class: String) -> Element {
    let lang = use_lang()();
    match text.resolve(lang) {
        (TextMode::Markup, value) => rsx! {
            span {
                class: "{class}",
                "data-en": text.en,
                "data-fr": text.fr,
                dangerous_inner_html: value,
            }
        },
        (TextMode::Plain, value) => rsx! {
            span {
                class: "{class}",
                "data-en": text.en,
                "data-fr": text.fr,
                {value}
            }
        },
    }
}

/// Fixed UI strings not rendered through [`Tr`].
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        (Lang::En, "contact.sending") => "Sending...".to_string(),
        (Lang::Fr, "contact.sending") => "Envoi en cours...".to_string(),
        (Lang::En, "contact.success") => "Your message has been sent. Thank you!".to_string(),
        (Lang::Fr, "contact.success") => "Votre message a bien été envoyé. Merci !".to_string(),
        (Lang::En, "contact.error") => "Oops! There was a problem sending your message.".to_string(),
        (Lang::Fr, "contact.error") => {
            "Oups ! Un problème est survenu lors de l'envoi de votre message.".to_string()
        }
        (Lang::En, "contact.submit") => "Send Message".to_string(),
        (Lang::Fr, "contact.submit") => "Envoyer le message".to_string(),
        (Lang::En, "menu.toggle") => "Toggle navigation".to_string(),
        (Lang::Fr, "menu.toggle") => "Afficher la navigation".to_string(),

        // Fallback: use English string if present, else show key.
        (Lang::Fr, k) => t(Lang::En, k),
        (Lang::En, _) => key.to_string(),
    }
}
