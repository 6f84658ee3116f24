//! Page content model and block rendering pipeline.

mod block;
mod render;

pub use block::{
    AccordionBlock, AccordionItem, CallToActionBlock, ContentBlock, FormBlock, ImageBlock,
    RichTextBlock, TabPane, TabsBlock,
};
pub use render::{AccordionPane, RenderOutput, RenderedNode, render_block, render_page};

use std::collections::HashMap;

use crate::locale::{Locale, Localized};

/// An editor-authored content page as provided by the content backend.
///
/// Block order is rendering order and is preserved through the whole
/// pipeline.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: Localized,
    pub slug: String,
    pub blocks: Vec<ContentBlock>,
}

/// Per-request context threaded through every dispatch call.
///
/// Locale and query parameters are passed explicitly rather than read from
/// ambient state, so concurrent requests with different locales cannot
/// interfere.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub locale: Locale,
    pub query: HashMap<String, String>,
    pub page_slug: String,
}

impl RenderContext {
    pub fn new(locale: Locale, page_slug: impl Into<String>) -> Self {
        Self {
            locale,
            query: HashMap::new(),
            page_slug: page_slug.into(),
        }
    }

    pub fn with_query(mut self, query: HashMap<String, String>) -> Self {
        self.query = query;
        self
    }
}
