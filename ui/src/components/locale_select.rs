use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;

/// Language selector for the top navigation.
///
/// Lists the embedded locales and switches the shared loader at runtime.
/// When the site shell provides a global language-code `Signal<String>`, a
/// switch is propagated there so the rest of the chrome re-renders with fresh
/// strings. Renders nothing when only one locale is embedded.
#[component]
pub fn LocaleSelect() -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    if langs().len() < 2 {
        // Nothing to choose between.
        return rsx! {};
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    rsx! {
        label {
            class: "visually-hidden",
            r#for: "locale-select",
            {t!("locale-select-label")}
        }
        select {
            id: "locale-select",
            value: "{current_lang()}",
            oninput: on_change,
            { langs().iter().map(|code| {
                let c = code.clone();
                rsx! {
                    option { key: "{c}", value: "{c}", "{c}" }
                }
            })}
        }
    }
}
