//! Block dispatch and page rendering.
//!
//! The dispatcher walks a page's blocks in order and resolves each through
//! an exhaustive match over [`ContentBlock`]. An unknown kind never blanks
//! the page: its slot gets a [`RenderedNode::Placeholder`] and a
//! diagnostic, and rendering continues with the next block. Output length
//! always equals input length; no reordering, deduplication, or merging.

use crate::content::block::{ContentBlock, TabsBlock};
use crate::content::{Page, RenderContext};
use crate::error::Diagnostic;
use crate::link::{RenderableLink, SlugIndex, resolve_link};

/// Sanitize authored rich text, keeping only safe inline HTML.
fn sanitize_rich_text(input: &str) -> String {
    ammonia::clean(input)
}

/// One resolved accordion section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionPane {
    pub title: String,
    pub html: String,
}

/// The output unit produced per block, consumed by the presentation
/// layer. Carries resolved, locale-selected content but no visual layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedNode {
    RichText {
        html: String,
    },
    Image {
        url: String,
        alt: String,
        caption: Option<String>,
    },
    FormEmbed {
        form_id: String,
    },
    Link {
        label: String,
        link: RenderableLink,
    },
    Accordion {
        panes: Vec<AccordionPane>,
    },
    TabPanel {
        active: String,
        title: String,
        html: String,
        /// Keys of all panes, for the presentation layer's tab strip.
        keys: Vec<String>,
    },
    /// Neutral substitute for a block that could not be rendered.
    Placeholder {
        kind: String,
    },
}

/// A fully rendered page: title and nodes for the presentation layer,
/// plus the diagnostics collected along the way.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub title: String,
    pub nodes: Vec<RenderedNode>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Render a page's blocks in authored order.
pub fn render_page(page: &Page, ctx: &RenderContext, index: &dyn SlugIndex) -> RenderOutput {
    let mut diagnostics = Vec::new();
    let nodes = page
        .blocks
        .iter()
        .map(|block| render_block(block, ctx, index, &mut diagnostics))
        .collect();
    RenderOutput {
        title: page.title.get(ctx.locale).to_string(),
        nodes,
        diagnostics,
    }
}

/// Render a single block.
///
/// The match is exhaustive over the closed kind set; the block itself is
/// never mutated and the context is passed through unmodified.
pub fn render_block(
    block: &ContentBlock,
    ctx: &RenderContext,
    index: &dyn SlugIndex,
    diagnostics: &mut Vec<Diagnostic>,
) -> RenderedNode {
    match block {
        ContentBlock::RichText(rich) => RenderedNode::RichText {
            html: sanitize_rich_text(rich.content.get(ctx.locale)),
        },
        ContentBlock::Image(image) => RenderedNode::Image {
            url: image.url.clone(),
            alt: image.alt.get(ctx.locale).to_string(),
            caption: image
                .caption
                .as_ref()
                .map(|caption| caption.get(ctx.locale).to_string()),
        },
        ContentBlock::Form(form) => RenderedNode::FormEmbed {
            form_id: form.form_id.clone(),
        },
        ContentBlock::CallToAction(cta) => RenderedNode::Link {
            label: cta.label.get(ctx.locale).to_string(),
            link: resolve_link(&cta.link, ctx.locale, index, diagnostics),
        },
        ContentBlock::Accordion(accordion) => RenderedNode::Accordion {
            panes: accordion
                .items
                .iter()
                .map(|item| AccordionPane {
                    title: item.title.get(ctx.locale).to_string(),
                    html: sanitize_rich_text(item.body.get(ctx.locale)),
                })
                .collect(),
        },
        ContentBlock::Tabs(tabs) => render_tabs(tabs, ctx),
        ContentBlock::Unknown { kind } => {
            Diagnostic::unknown_block(kind).record(diagnostics);
            RenderedNode::Placeholder { kind: kind.clone() }
        }
    }
}

/// Resolve a tabs block to its active pane.
///
/// The pane is selected by the query parameter the block names, falling
/// back to the first pane when the parameter is absent or names no pane.
/// A tabs block authored without panes degrades to a placeholder.
fn render_tabs(tabs: &TabsBlock, ctx: &RenderContext) -> RenderedNode {
    let requested = ctx.query.get(&tabs.param).map(String::as_str);
    let active = requested
        .and_then(|key| tabs.panes.iter().find(|pane| pane.key == key))
        .or_else(|| tabs.panes.first());

    let Some(pane) = active else {
        return RenderedNode::Placeholder {
            kind: "tabs".to_string(),
        };
    };

    RenderedNode::TabPanel {
        active: pane.key.clone(),
        title: pane.title.get(ctx.locale).to_string(),
        html: sanitize_rich_text(pane.body.get(ctx.locale)),
        keys: tabs.panes.iter().map(|pane| pane.key.clone()).collect(),
    }
}
