use dioxus::prelude::*;

use ui::components::{LocaleSelect, TopNav};
use ui::core::logo::{LogoConfig, ResolvedImage, ResolvedLogos};
use ui::core::theme::Theme;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteChrome)]
    #[route("/")]
    Home {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const LOGO_LIGHT: Asset = asset!("/assets/logo-light.svg");
const LOGO_DARK: Asset = asset!("/assets/logo-dark.svg");

/// Logo declaration a real site would read from its configuration file.
fn site_logo() -> LogoConfig {
    LogoConfig::Split {
        light: "assets/logo-light.svg".to_string(),
        dark: "assets/logo-dark.svg".to_string(),
        alt: "Lumen".to_string(),
        replaces_title: false,
    }
}

/// Asset-pipeline output for the declared logo images.
fn site_logos() -> ResolvedLogos {
    ResolvedLogos {
        light: Some(ResolvedImage {
            src: LOGO_LIGHT.to_string(),
            width: 24,
            height: 24,
        }),
        dark: Some(ResolvedImage {
            src: LOGO_DARK.to_string(),
            width: 24,
            height: 24,
        }),
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Shared chrome state: the active theme and the current language code.
    use_context_provider(|| Signal::new(Theme::Auto));
    use_context_provider(|| Signal::new(String::from("en-US")));

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Site chrome: the top navigation above every routed page.
#[component]
fn SiteChrome() -> Element {
    rsx! {
        TopNav {
            config: site_logo(),
            logos: site_logos(),
            title: "Lumen Docs".to_string(),
            home_href: "/".to_string(),
            social_icons: rsx! {
                a { href: "https://github.com/lumen-docs/lumen", rel: "me", "GitHub" }
            },
            language_select: rsx! {
                LocaleSelect {}
            },

            // Extension slot
            span { class: "top-nav__version", "v0.1" }
        }
        Outlet::<Route> {}
    }
}
