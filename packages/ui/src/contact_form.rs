use std::rc::Rc;

use contact::{ContactFields, ContactForm, SiteConfig, SubmitOutcome, Submission};
use dioxus::html::FormValue;
use dioxus::prelude::*;

use crate::content::{
    CONTACT_EMAIL, CONTACT_EMAIL_PH, CONTACT_INTRO, CONTACT_MESSAGE, CONTACT_MESSAGE_PH,
    CONTACT_NAME, CONTACT_NAME_PH, CONTACT_SUBMIT, CONTACT_TITLE,
};
use crate::i18n::{t, use_lang, Lang};
use crate::Tr;

/// Localized alert shown once a submission settles. Spam gets none.
pub fn notice_for(lang: Lang, outcome: SubmitOutcome) -> Option<String> {
    match outcome {
        SubmitOutcome::Sent => Some(t(lang, "contact.success")),
        SubmitOutcome::Failed => Some(t(lang, "contact.error")),
        SubmitOutcome::Spam => None,
    }
}

/// Text inputs of a submit event, as the browser holds them. Values set by
/// script or typed before hydration never fire `oninput`.
fn submitted_fields(evt: &FormEvent) -> ContactFields {
    ContactFields::from_submitted(evt.values().into_iter().filter_map(|(name, value)| {
        match value {
            FormValue::Text(text) => Some((name, text)),
            _ => None,
        }
    }))
}

#[component]
pub fn ContactSection() -> Element {
    let lang_sig = use_lang();
    let lang = lang_sig();
    let config = use_hook(|| Rc::new(SiteConfig::from_env()));
    let mut form = use_signal(|| ContactForm::new(t(Lang::default(), "contact.submit")));

    // Idle label follows the page language.
    use_effect(move || {
        let label = t(lang_sig(), "contact.submit");
        form.write().button.set_label(label);
    });

    let endpoint = config.form_endpoint.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let lang = lang_sig();
        let submitted = submitted_fields(&evt);
        let payload = {
            let mut state = form.write();
            if !state.button.is_sending() {
                state.fields = submitted;
            }
            match state.begin(&t(lang, "contact.sending")) {
                Submission::Ready(payload) => payload,
                Submission::Spam | Submission::Busy => return,
            }
        };
        let config = Rc::clone(&config);
        spawn(async move {
            let transport = config.transport();
            let outcome = contact::deliver(transport.as_ref(), &payload).await;
            form.write().complete(outcome);
            if let Some(notice) = notice_for(lang, outcome) {
                crate::dom::alert(&notice);
            }
        });
    };

    let state = form.read();
    let fields = &state.fields;

    rsx! {
        section { id: "contact", class: "section contact",
            h2 { class: "section-title", Tr { text: CONTACT_TITLE } }
            p { class: "contact-intro", Tr { text: CONTACT_INTRO } }

            form {
                id: "contact-form",
                class: "contact-form",
                method: "POST",
                action: "{endpoint}",
                onsubmit: on_submit,

                label { r#for: "contact-name", Tr { text: CONTACT_NAME } }
                input {
                    id: "contact-name",
                    name: "name",
                    r#type: "text",
                    required: true,
                    value: "{fields.name}",
                    placeholder: CONTACT_NAME_PH.get(lang),
                    "data-placeholder-en": CONTACT_NAME_PH.en,
                    "data-placeholder-fr": CONTACT_NAME_PH.fr,
                    oninput: move |e| form.write().fields.name = e.value(),
                }

                label { r#for: "contact-email", Tr { text: CONTACT_EMAIL } }
                input {
                    id: "contact-email",
                    name: "email",
                    r#type: "email",
                    required: true,
                    value: "{fields.email}",
                    placeholder: CONTACT_EMAIL_PH.get(lang),
                    "data-placeholder-en": CONTACT_EMAIL_PH.en,
                    "data-placeholder-fr": CONTACT_EMAIL_PH.fr,
                    oninput: move |e| form.write().fields.email = e.value(),
                }

                label { r#for: "contact-message", Tr { text: CONTACT_MESSAGE } }
                textarea {
                    id: "contact-message",
                    name: "message",
                    rows: "6",
                    required: true,
                    value: "{fields.message}",
                    placeholder: CONTACT_MESSAGE_PH.get(lang),
                    "data-placeholder-en": CONTACT_MESSAGE_PH.en,
                    "data-placeholder-fr": CONTACT_MESSAGE_PH.fr,
                    oninput: move |e| form.write().fields.message = e.value(),
                }

                // Honeypot: hidden from people, filled in by bots.
                input {
                    class: "honeypot",
                    name: "_gotcha",
                    r#type: "text",
                    tabindex: "-1",
                    autocomplete: "off",
                    "aria-hidden": "true",
                    style: "display:none",
                    value: "{fields.gotcha}",
                    oninput: move |e| form.write().fields.gotcha = e.value(),
                }

                button {
                    class: "btn primary",
                    r#type: "submit",
                    disabled: state.button.is_disabled(),
                    "data-en": CONTACT_SUBMIT.en,
                    "data-fr": CONTACT_SUBMIT.fr,
                    {state.button.label()}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_label_matches_fixed_strings() {
        assert_eq!(CONTACT_SUBMIT.en, t(Lang::En, "contact.submit"));
        assert_eq!(CONTACT_SUBMIT.fr, t(Lang::Fr, "contact.submit"));
    }

    #[test]
    fn notices_follow_outcome_and_language() {
        assert_eq!(
            notice_for(Lang::En, SubmitOutcome::Sent).as_deref(),
            Some("Your message has been sent. Thank you!")
        );
        assert_eq!(
            notice_for(Lang::Fr, SubmitOutcome::Failed).as_deref(),
            Some("Oups ! Un problème est survenu lors de l'envoi de votre message.")
        );
        assert_eq!(notice_for(Lang::En, SubmitOutcome::Spam), None);
    }
}
