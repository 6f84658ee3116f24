//! Link target resolution.
//!
//! A [`LinkTarget`] references either an internal page by slug or an
//! external absolute URL. Resolution never fails the surrounding render:
//! a slug missing from the page index or a URL with a disallowed scheme
//! degrades to a disabled placeholder link plus a recorded diagnostic.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Diagnostic;
use crate::locale::Locale;

/// A link destination as authored in the content backend.
///
/// Exactly one variant is populated; the backend stores the discriminator
/// in a `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LinkTarget {
    /// Reference to an internal page by URL slug, scoped to the active
    /// locale at resolution time.
    Internal { slug: String },
    /// Absolute external URL.
    External { url: String },
}

/// Lookup into the content backend's page index.
///
/// Implemented by the content-storage collaborator; the core only asks
/// whether a (locale, slug) pair denotes an existing page.
pub trait SlugIndex {
    fn contains(&self, locale: Locale, slug: &str) -> bool;
}

/// A link ready for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderableLink {
    pub href: String,
    /// False for the disabled placeholder produced from broken targets.
    pub enabled: bool,
    /// External links open in a new tab.
    pub new_tab: bool,
}

impl RenderableLink {
    /// The disabled placeholder substituted for broken targets.
    pub fn disabled() -> Self {
        Self {
            href: "#".to_string(),
            enabled: false,
            new_tab: false,
        }
    }
}

/// Resolve a link target to a renderable URL.
///
/// Broken targets produce [`RenderableLink::disabled`] and record a
/// diagnostic instead of failing the page.
pub fn resolve_link(
    target: &LinkTarget,
    locale: Locale,
    index: &dyn SlugIndex,
    diagnostics: &mut Vec<Diagnostic>,
) -> RenderableLink {
    match target {
        LinkTarget::Internal { slug } => {
            if index.contains(locale, slug) {
                RenderableLink {
                    href: format!("/{locale}/{slug}"),
                    enabled: true,
                    new_tab: false,
                }
            } else {
                Diagnostic::broken_link(format!(
                    "internal page '{slug}' not found for locale '{locale}'"
                ))
                .record(diagnostics);
                RenderableLink::disabled()
            }
        }
        LinkTarget::External { url } => match Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => RenderableLink {
                href: url.clone(),
                enabled: true,
                new_tab: true,
            },
            _ => {
                Diagnostic::broken_link(format!("external URL '{url}' is not valid http(s)"))
                    .record(diagnostics);
                RenderableLink::disabled()
            }
        },
    }
}
