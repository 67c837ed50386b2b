use crate::core::logo::{resolve_logo, LogoConfig, LogoImage, ResolvedLogos};
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;

use super::theme_select::ThemeSelect;

// Shared chrome stylesheets (color tokens + nav layout).
const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const TOPNAV_CSS: Asset = asset!("/assets/styling/topnav.css");

/// Top navigation bar for the documentation site.
///
/// Fixed item order: brand/home link, social icon links, language selector,
/// theme picker, then the caller's extension slot. The social and language
/// entries are opaque elements supplied by the site shell; omit them and
/// their wrappers are not rendered at all.
///
/// The brand is resolved from the site's logo configuration plus whatever the
/// asset pipeline produced for the `light`/`dark` keys. An unresolvable
/// declared image aborts the render with the resolver's message; a nav
/// without its configured brand must never ship.
///
/// When the site shell provides a global language-code `Signal<String>`, the
/// nav re-renders on language switches (a hidden marker keeps the dependency
/// live across the rsx tree).
#[component]
pub fn TopNav(
    config: Option<LogoConfig>,
    #[props(default)] logos: ResolvedLogos,
    title: Option<String>,
    #[props(default = String::from("/"))] home_href: String,
    social_icons: Option<Element>,
    language_select: Option<Element>,
    children: Element,
) -> Element {
    i18n::init();

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        if _lang_marker.is_empty() {
            println!("[nav] TopNav render lang=<none>");
        } else {
            println!("[nav] TopNav render lang={_lang_marker}");
        }
    }

    let brand = match resolve_logo(config.as_ref(), &logos, title.as_deref()) {
        Ok(brand) => brand,
        // Site configuration defect; rendering must not continue.
        Err(err) => panic!("top-nav: {err}"),
    };

    let brand_label = brand.accessible_text();
    let brand_label = if brand_label.is_empty() {
        t!("topnav-home-label")
    } else {
        brand_label
    };
    let logo = brand
        .image
        .as_ref()
        .map(|image| (image.clone(), logo_class(image)));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Link { rel: "stylesheet", href: TOPNAV_CSS }

        header { class: "top-nav", aria_label: t!("topnav-label"),
            // Hidden marker ensures the nav re-renders when the global
            // language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "top-nav__inner",
                a {
                    class: "top-nav__brand",
                    href: "{home_href}",
                    aria_label: "{brand_label}",
                    if let Some((image, class)) = &logo {
                        img {
                            class: "{class}",
                            alt: "{image.alt}",
                            src: "{image.image.src}",
                            width: "{image.image.width}",
                            height: "{image.image.height}",
                        }
                    }
                    if let Some(site_title) = &brand.title {
                        if logo.is_some() {
                            " "
                        }
                        span { class: "top-nav__title", "{site_title}" }
                    }
                }

                if let Some(icons) = social_icons {
                    div { class: "top-nav__social", {icons} }
                }

                if let Some(select) = language_select {
                    div { class: "top-nav__locale", {select} }
                }

                ThemeSelect {}

                div { class: "top-nav__extra", {children} }
            }
        }
    }
}

/// Class list for the rendered logo image.
fn logo_class(image: &LogoImage) -> String {
    match image.appearance.css_modifier() {
        "" => "top-nav__logo".to_string(),
        modifier => format!("top-nav__logo {modifier}"),
    }
}
