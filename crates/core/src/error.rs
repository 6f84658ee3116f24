//! Error types and render diagnostics.
//!
//! Two severities exist. [`Error`] is for failures that make the whole
//! requested operation meaningless (malformed menu source, unavailable
//! export source) and propagates to the caller. [`Diagnostic`] records a
//! locally-contained degradation (unknown block kind, broken link target):
//! it is collected alongside the render output and logged, never raised,
//! so one bad input degrades nothing beyond its own node.

use thiserror::Error;
use tracing::warn;

/// Hard failures surfaced to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Menu nesting is deeper than the configured maximum.
    #[error("menu nesting depth {depth} exceeds the maximum of {max}")]
    MenuTooDeep { depth: usize, max: usize },

    /// The raw menu source could not be parsed into entry records.
    #[error("malformed menu source")]
    MenuMalformed(#[from] serde_json::Error),

    /// The submission fetch backing an export failed. No partial CSV is
    /// ever returned in this case.
    #[error("submission source unavailable")]
    ExportSourceUnavailable(#[source] anyhow::Error),
}

/// Classification of a render diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A content block carried a kind tag with no registered strategy.
    UnknownBlockKind,
    /// A link target could not be resolved to a usable URL.
    BrokenLinkTarget,
}

/// A non-fatal recorded warning about degraded rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub detail: String,
}

impl Diagnostic {
    /// Diagnostic for a block kind with no registered strategy.
    pub fn unknown_block(kind: &str) -> Self {
        Self {
            kind: DiagnosticKind::UnknownBlockKind,
            detail: format!("no render strategy for block kind '{kind}'"),
        }
    }

    /// Diagnostic for a link target that resolved to nothing usable.
    pub fn broken_link(detail: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::BrokenLinkTarget,
            detail: detail.into(),
        }
    }

    /// Log this diagnostic and append it to the collection for the
    /// current render.
    pub fn record(self, diagnostics: &mut Vec<Diagnostic>) {
        warn!(kind = ?self.kind, detail = %self.detail, "render degraded");
        diagnostics.push(self);
    }
}
