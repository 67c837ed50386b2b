use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so the page
    // re-renders on language switches.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }

            ul { class: "page-home__points",
                li { {crate::t!("home-point-theming")} }
                li { {crate::t!("home-point-locales")} }
                li { {crate::t!("home-point-config")} }
            }
        }
    }
}
