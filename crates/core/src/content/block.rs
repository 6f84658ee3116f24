//! Content block types and conversion from backend JSON.
//!
//! [`ContentBlock`] is a closed tagged union: one variant per authored
//! block kind, discriminated by the backend's `blockType` field, plus an
//! explicit [`ContentBlock::Unknown`] fallback. Adding a kind is a
//! compile-time change — every match over the enum is exhaustive, so the
//! unknown-kind path stays an explicit, tested fallback rather than an
//! accident of deserialization.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::link::LinkTarget;
use crate::locale::Localized;

/// Rich text authored per locale. Sanitized at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextBlock {
    pub content: Localized,
}

/// A media reference with localized alternative text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
    pub url: String,
    #[serde(default)]
    pub alt: Localized,
    #[serde(default)]
    pub caption: Option<Localized>,
}

/// Reference to a form managed by the form backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormBlock {
    pub form_id: String,
}

/// A prominent link with a localized label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToActionBlock {
    pub label: Localized,
    pub link: LinkTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionItem {
    pub title: Localized,
    pub body: Localized,
}

/// Collapsible sections rendered in authored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionBlock {
    #[serde(default)]
    pub items: Vec<AccordionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabPane {
    pub key: String,
    pub title: Localized,
    pub body: Localized,
}

/// Tabbed content whose active pane is selected by a query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabsBlock {
    /// Name of the query parameter that selects the active pane.
    pub param: String,
    #[serde(default)]
    pub panes: Vec<TabPane>,
}

/// One authored unit of page content, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    RichText(RichTextBlock),
    Image(ImageBlock),
    Form(FormBlock),
    CallToAction(CallToActionBlock),
    Accordion(AccordionBlock),
    Tabs(TabsBlock),
    /// A block whose kind tag has no registered strategy, or whose
    /// payload did not match its kind's shape. Kept in place so the
    /// rendered output preserves the authored block count.
    Unknown { kind: String },
}

impl ContentBlock {
    /// The kind tag of this block.
    pub fn kind(&self) -> &str {
        match self {
            ContentBlock::RichText(_) => "richText",
            ContentBlock::Image(_) => "image",
            ContentBlock::Form(_) => "form",
            ContentBlock::CallToAction(_) => "callToAction",
            ContentBlock::Accordion(_) => "accordion",
            ContentBlock::Tabs(_) => "tabs",
            ContentBlock::Unknown { kind } => kind,
        }
    }

    /// Convert one backend block object into a typed block.
    ///
    /// Never fails: an unrecognized `blockType`, a missing tag, or a
    /// payload that does not match its kind's shape all convert to
    /// [`ContentBlock::Unknown`], leaving the degradation decision to the
    /// dispatcher.
    pub fn from_value(value: &Value) -> ContentBlock {
        let kind = value
            .get("blockType")
            .and_then(Value::as_str)
            .unwrap_or_default();
        match kind {
            "richText" => convert(value, kind, ContentBlock::RichText),
            "image" => convert(value, kind, ContentBlock::Image),
            "form" => convert(value, kind, ContentBlock::Form),
            "callToAction" => convert(value, kind, ContentBlock::CallToAction),
            "accordion" => convert(value, kind, ContentBlock::Accordion),
            "tabs" => convert(value, kind, ContentBlock::Tabs),
            _ => ContentBlock::Unknown {
                kind: kind.to_string(),
            },
        }
    }

    /// Convert an ordered backend block array, preserving order and count.
    pub fn from_values(values: &[Value]) -> Vec<ContentBlock> {
        values.iter().map(ContentBlock::from_value).collect()
    }
}

fn convert<T, F>(value: &Value, kind: &str, wrap: F) -> ContentBlock
where
    T: DeserializeOwned,
    F: FnOnce(T) -> ContentBlock,
{
    match serde_json::from_value::<T>(value.clone()) {
        Ok(payload) => wrap(payload),
        Err(error) => {
            debug!(kind = %kind, error = %error, "block payload does not match its kind");
            ContentBlock::Unknown {
                kind: kind.to_string(),
            }
        }
    }
}
