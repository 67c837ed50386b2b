//! Logo configuration and resolution for the top navigation brand.
//!
//! The site configuration declares either a single logo image or an explicit
//! light/dark pair; the asset pipeline hands us whatever it managed to
//! resolve for the `light` and `dark` keys. [`resolve_logo`] reconciles the
//! two into a renderable brand, or fails when a declared image did not make
//! it through the pipeline. That failure is a site configuration defect, so
//! the navigation bar must not render at all rather than quietly drop its
//! brand.

use serde::Deserialize;
use thiserror::Error;

/// Logo declaration from the site configuration.
///
/// The variant is decided by the presence of `src`: a single image adapted to
/// both appearances, or an explicit light/dark pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LogoConfig {
    Single {
        src: String,
        #[serde(default)]
        alt: String,
        #[serde(default, rename = "replacesTitle")]
        replaces_title: bool,
    },
    Split {
        light: String,
        dark: String,
        #[serde(default)]
        alt: String,
        #[serde(default, rename = "replacesTitle")]
        replaces_title: bool,
    },
}

/// Image metadata produced by the asset pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResolvedImage {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

/// Asset-pipeline output for the two logo appearance keys. An absent entry
/// means resolution failed (or nothing was declared for that key).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedLogos {
    pub light: Option<ResolvedImage>,
    pub dark: Option<ResolvedImage>,
}

/// The appearance key a resolver error points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoKey {
    Light,
    Dark,
}

impl LogoKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "logo.light",
            Self::Dark => "logo.dark",
        }
    }
}

/// How the rendered logo participates in appearance switching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoAppearance {
    /// One image shown in both color schemes.
    Adaptive,
    /// The light image only; dark-mode substitution belongs to the
    /// presentation layer.
    LightOnly,
}

impl LogoAppearance {
    /// Class modifier the stylesheet keys visibility rules on. Empty for an
    /// adaptive logo, which is never hidden.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Adaptive => "",
            Self::LightOnly => "light-only",
        }
    }
}

/// A logo image ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoImage {
    pub appearance: LogoAppearance,
    pub alt: String,
    pub image: ResolvedImage,
}

/// Resolved brand for the home link: an image, a title, or both.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderableLogo {
    pub image: Option<LogoImage>,
    pub title: Option<String>,
}

impl RenderableLogo {
    /// Text form of the brand (alt text, then the title when one is kept),
    /// used for the home link's accessible name.
    pub fn accessible_text(&self) -> String {
        match (&self.image, &self.title) {
            (Some(image), Some(title)) => format!("{} {title}", image.alt),
            (Some(image), None) => image.alt.clone(),
            (None, Some(title)) => title.clone(),
            (None, None) => String::new(),
        }
    }
}

/// A declared logo image the asset pipeline failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedLogo {
    /// Path exactly as written in the site configuration.
    pub path: String,
    pub key: LogoKey,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("could not resolve logo import for {}", format_unresolved(.missing))]
    UnresolvedLogo { missing: Vec<UnresolvedLogo> },
}

fn format_unresolved(missing: &[UnresolvedLogo]) -> String {
    missing
        .iter()
        .map(|entry| format!("{:?} ({})", entry.path, entry.key.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve the configured logo against the asset pipeline's output.
///
/// Required keys are checked up front, light before dark, and every failure
/// is collected into a single [`ConfigError`] citing the path declared for
/// it. Both variants require both pipeline entries: a single `src` feeds both
/// appearances, and a light/dark pair declares two paths that must each
/// resolve even though only the light one is rendered here.
pub fn resolve_logo(
    config: Option<&LogoConfig>,
    logos: &ResolvedLogos,
    title: Option<&str>,
) -> Result<RenderableLogo, ConfigError> {
    let Some(config) = config else {
        // Text-only brand mark.
        return Ok(RenderableLogo {
            image: None,
            title: title.map(str::to_string),
        });
    };

    let (appearance, alt, image, replaces_title) = match config {
        LogoConfig::Single {
            src,
            alt,
            replaces_title,
        } => {
            let missing = collect_missing(logos, src, src);
            // A single source feeds both pipeline entries; render the dark
            // one and let it stand in both color schemes.
            match logos.dark.clone() {
                Some(image) if missing.is_empty() => {
                    (LogoAppearance::Adaptive, alt, image, *replaces_title)
                }
                _ => return Err(ConfigError::UnresolvedLogo { missing }),
            }
        }
        LogoConfig::Split {
            light,
            dark,
            alt,
            replaces_title,
        } => {
            let missing = collect_missing(logos, light, dark);
            match logos.light.clone() {
                Some(image) if missing.is_empty() => {
                    (LogoAppearance::LightOnly, alt, image, *replaces_title)
                }
                _ => return Err(ConfigError::UnresolvedLogo { missing }),
            }
        }
    };

    let title = match (replaces_title, title) {
        (false, Some(title)) => Some(title.to_string()),
        _ => None,
    };

    Ok(RenderableLogo {
        image: Some(LogoImage {
            appearance,
            alt: alt.clone(),
            image,
        }),
        title,
    })
}

fn collect_missing(logos: &ResolvedLogos, light_path: &str, dark_path: &str) -> Vec<UnresolvedLogo> {
    let mut missing = Vec::new();
    if logos.light.is_none() {
        missing.push(UnresolvedLogo {
            path: light_path.to_string(),
            key: LogoKey::Light,
        });
    }
    if logos.dark.is_none() {
        missing.push(UnresolvedLogo {
            path: dark_path.to_string(),
            key: LogoKey::Dark,
        });
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(src: &str) -> ResolvedImage {
        ResolvedImage {
            src: src.to_string(),
            width: 32,
            height: 32,
        }
    }

    fn both_resolved() -> ResolvedLogos {
        ResolvedLogos {
            light: Some(image("/_assets/logo.light.png")),
            dark: Some(image("/_assets/logo.dark.png")),
        }
    }

    fn single(src: &str, replaces_title: bool) -> LogoConfig {
        LogoConfig::Single {
            src: src.to_string(),
            alt: "Co".to_string(),
            replaces_title,
        }
    }

    fn split(replaces_title: bool) -> LogoConfig {
        LogoConfig::Split {
            light: "light.svg".to_string(),
            dark: "dark.svg".to_string(),
            alt: "Co".to_string(),
            replaces_title,
        }
    }

    #[test]
    fn single_with_both_entries_is_adaptive() {
        let config = single("logo.png", true);
        let brand = resolve_logo(Some(&config), &both_resolved(), Some("Docs")).unwrap();
        let logo = brand.image.unwrap();
        assert_eq!(logo.appearance, LogoAppearance::Adaptive);
        assert_eq!(logo.appearance.css_modifier(), "");
        // The dark pipeline entry is the rendered one.
        assert_eq!(logo.image.src, "/_assets/logo.dark.png");
    }

    #[test]
    fn single_missing_dark_cites_declared_src() {
        let config = single("logo.png", false);
        let logos = ResolvedLogos {
            light: Some(image("/_assets/logo.light.png")),
            dark: None,
        };
        let err = resolve_logo(Some(&config), &logos, Some("Docs")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("logo.png"), "got: {message}");
        assert!(message.contains("logo.dark"), "got: {message}");
        assert!(!message.contains("logo.light"), "got: {message}");
    }

    #[test]
    fn single_missing_both_collects_both_keys() {
        let config = single("logo.png", false);
        let err = resolve_logo(Some(&config), &ResolvedLogos::default(), None).unwrap_err();
        let ConfigError::UnresolvedLogo { missing } = &err;
        assert_eq!(missing.len(), 2);
        assert_eq!(missing[0].key, LogoKey::Light);
        assert_eq!(missing[1].key, LogoKey::Dark);
        let message = err.to_string();
        assert!(message.contains("logo.light") && message.contains("logo.dark"));
    }

    #[test]
    fn split_renders_the_light_entry_only() {
        let config = split(true);
        let brand = resolve_logo(Some(&config), &both_resolved(), None).unwrap();
        let logo = brand.image.unwrap();
        assert_eq!(logo.appearance, LogoAppearance::LightOnly);
        assert_eq!(logo.appearance.css_modifier(), "light-only");
        assert_eq!(logo.image.src, "/_assets/logo.light.png");
    }

    #[test]
    fn split_missing_light_cites_its_declared_path() {
        let config = split(false);
        let logos = ResolvedLogos {
            light: None,
            dark: Some(image("/_assets/logo.dark.png")),
        };
        let err = resolve_logo(Some(&config), &logos, None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("light.svg"), "got: {message}");
        assert!(message.contains("logo.light"), "got: {message}");
    }

    #[test]
    fn split_missing_dark_is_still_fatal() {
        // Only the light image is rendered, but a declared path that fails to
        // resolve is a configuration error either way.
        let config = split(false);
        let logos = ResolvedLogos {
            light: Some(image("/_assets/logo.light.png")),
            dark: None,
        };
        let err = resolve_logo(Some(&config), &logos, None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("dark.svg"), "got: {message}");
        assert!(message.contains("logo.dark"), "got: {message}");
    }

    #[test]
    fn title_is_kept_after_the_image_when_not_replaced() {
        let config = single("logo.png", false);
        let brand = resolve_logo(Some(&config), &both_resolved(), Some("Docs")).unwrap();
        assert_eq!(brand.title.as_deref(), Some("Docs"));
        assert!(brand.accessible_text().ends_with(" Docs"));
    }

    #[test]
    fn title_is_dropped_when_the_logo_replaces_it() {
        let config = split(true);
        let brand = resolve_logo(Some(&config), &both_resolved(), Some("Docs")).unwrap();
        assert_eq!(brand.title, None);
        assert_eq!(brand.accessible_text(), "Co");
    }

    #[test]
    fn absent_config_is_a_text_only_brand() {
        let brand = resolve_logo(None, &ResolvedLogos::default(), Some("Docs")).unwrap();
        assert_eq!(brand.image, None);
        assert_eq!(brand.accessible_text(), "Docs");

        let empty = resolve_logo(None, &ResolvedLogos::default(), None).unwrap();
        assert_eq!(empty, RenderableLogo::default());
    }

    #[test]
    fn config_variant_follows_presence_of_src() {
        let single: LogoConfig =
            serde_json::from_str(r#"{"src": "logo.png", "alt": "Co", "replacesTitle": true}"#)
                .unwrap();
        assert!(matches!(single, LogoConfig::Single { .. }));

        let split: LogoConfig =
            serde_json::from_str(r#"{"light": "l.svg", "dark": "d.svg", "alt": "Co"}"#).unwrap();
        match split {
            LogoConfig::Split { replaces_title, .. } => assert!(!replaces_title),
            other => panic!("expected split variant, got {other:?}"),
        }
    }
}
