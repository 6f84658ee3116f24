//! Telar content core.
//!
//! Takes editor-authored content as it arrives from the content backend —
//! variant-tagged block arrays, nested menu entry lists, per-locale text —
//! and deterministically produces renderable structures for the
//! presentation layer, plus a CSV encoder for dynamically-shaped form
//! submission data.
//!
//! Everything here is synchronous and stateless: external I/O lives behind
//! the [`link::SlugIndex`] and [`export::SubmissionSource`] collaborator
//! traits, and every call operates solely on its inputs.

pub mod content;
pub mod error;
pub mod export;
pub mod link;
pub mod locale;
pub mod menu;

pub use content::{ContentBlock, Page, RenderContext, RenderOutput, RenderedNode, render_page};
pub use error::{Diagnostic, DiagnosticKind, Error};
pub use export::{SubmissionRecord, SubmissionSource, encode_submissions, export_form_submissions};
pub use link::{LinkTarget, RenderableLink, SlugIndex, resolve_link};
pub use locale::{Locale, Localized};
pub use menu::{MenuLimits, MenuNode, RawMenuEntry, build_menu, menu_from_value};
