use crate::core::platform;
use crate::core::storage;
use crate::core::theme::{Appearance, Theme, ThemeController};
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;

/// Theme picker: `dark`, `light`, or `auto` (follow the user agent).
///
/// Selections are persisted through [`ThemeController`]; picking `auto`
/// clears the stored choice. The resolved appearance lands on the document as
/// a single `data-theme` write in [`apply_appearance`]. When the site shell
/// provides a shared `Signal<Theme>` context, every mounted picker reflects a
/// change made by any of them; a lone picker falls back to a local signal.
#[component]
pub fn ThemeSelect() -> Element {
    i18n::init();

    let local = use_signal(Theme::default);
    let mut theme = try_use_context::<Signal<Theme>>().unwrap_or(local);

    // Pick up the persisted choice once the picker is live in the document.
    use_effect(move || {
        let controller = ThemeController::new(storage::preference_store());
        let stored = controller.load();
        apply_appearance(stored.resolve(platform::prefers_light()));
        theme.set(stored);
    });

    let on_change = move |evt: dioxus::events::FormEvent| {
        let selected = Theme::normalize(Some(evt.value().as_str()));
        let controller = ThemeController::new(storage::preference_store());
        let appearance = controller.select(selected, platform::prefers_light());
        apply_appearance(appearance);
        theme.set(selected);
    };

    let value = theme().as_str();

    rsx! {
        div { class: "theme-select",
            label {
                class: "visually-hidden",
                r#for: "theme-select",
                {t!("theme-select-label")}
            }
            select {
                id: "theme-select",
                value: "{value}",
                oninput: on_change,
                option { value: "dark", {t!("theme-select-dark")} }
                option { value: "light", {t!("theme-select-light")} }
                option { value: "auto", {t!("theme-select-auto")} }
            }
        }
    }
}

/// The one place the resolved appearance touches the document.
#[cfg(target_arch = "wasm32")]
fn apply_appearance(appearance: Appearance) {
    use wasm_bindgen::JsCast;

    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let html = root.unchecked_into::<web_sys::HtmlElement>();
        let _ = html.dataset().set("theme", appearance.as_str());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_appearance(_appearance: Appearance) {}
