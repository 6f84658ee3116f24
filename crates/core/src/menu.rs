//! Navigation menu tree builder.
//!
//! Converts the raw nested entry list authored in the content backend into
//! a validated tree. The leaf/branch exclusivity invariant holds by
//! construction: [`MenuNode`] has no variant carrying both a link and
//! children. An entry with sub-entries becomes a branch and any link
//! authored on it is ignored — the authoring UI hides the link field once
//! sub-entries exist, and the builder treats that rule as authoritative,
//! not as a UI hint. A leaf without a link is a valid label-only entry.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::Error;
use crate::link::LinkTarget;
use crate::locale::Localized;

/// A menu entry as authored in the content backend, prior to validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMenuEntry {
    pub label: Localized,
    #[serde(default)]
    pub link: Option<LinkTarget>,
    #[serde(default)]
    pub sub_menu: Vec<RawMenuEntry>,
}

/// A validated navigation node. Leaf/branch exclusivity holds by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    /// An entry without sub-entries. The link is optional: a leaf with no
    /// link renders as a non-interactive label.
    Leaf {
        label: Localized,
        link: Option<LinkTarget>,
    },
    /// An entry with sub-entries. Carries no link of its own.
    Branch {
        label: Localized,
        children: Vec<MenuNode>,
    },
}

impl MenuNode {
    pub fn label(&self) -> &Localized {
        match self {
            MenuNode::Leaf { label, .. } | MenuNode::Branch { label, .. } => label,
        }
    }
}

/// Structural limits for menu building.
#[derive(Debug, Clone)]
pub struct MenuLimits {
    /// Maximum nesting depth. The model is unbounded but render cost is
    /// not, so builds beyond this depth fail.
    pub max_depth: usize,
}

impl Default for MenuLimits {
    fn default() -> Self {
        Self { max_depth: 2 }
    }
}

/// Build a validated menu tree from raw entries.
///
/// Entry and sub-entry order is preserved from input order. Nesting
/// beyond `limits.max_depth` fails the whole build with
/// [`Error::MenuTooDeep`]; that failure is for the content-authoring
/// collaborator, never for page viewers.
pub fn build_menu(entries: Vec<RawMenuEntry>, limits: &MenuLimits) -> Result<Vec<MenuNode>, Error> {
    let tree = entries
        .into_iter()
        .map(|entry| build_entry(entry, 1, limits))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(entries = tree.len(), "built menu tree");
    Ok(tree)
}

/// Build a menu tree straight from the backend's raw JSON.
pub fn menu_from_value(value: Value, limits: &MenuLimits) -> Result<Vec<MenuNode>, Error> {
    let entries: Vec<RawMenuEntry> = serde_json::from_value(value)?;
    build_menu(entries, limits)
}

fn build_entry(entry: RawMenuEntry, depth: usize, limits: &MenuLimits) -> Result<MenuNode, Error> {
    if depth > limits.max_depth {
        return Err(Error::MenuTooDeep {
            depth,
            max: limits.max_depth,
        });
    }

    if entry.sub_menu.is_empty() {
        return Ok(MenuNode::Leaf {
            label: entry.label,
            link: entry.link,
        });
    }

    if entry.link.is_some() {
        debug!(
            label = %entry.label.de,
            "ignoring link on menu entry with sub-entries"
        );
    }

    let children = entry
        .sub_menu
        .into_iter()
        .map(|child| build_entry(child, depth + 1, limits))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MenuNode::Branch {
        label: entry.label,
        children,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn label(text: &str) -> Localized {
        Localized::new(text, text, text)
    }

    fn leaf_entry(text: &str, slug: &str) -> RawMenuEntry {
        RawMenuEntry {
            label: label(text),
            link: Some(LinkTarget::Internal {
                slug: slug.to_string(),
            }),
            sub_menu: Vec::new(),
        }
    }

    #[test]
    fn leaf_keeps_its_link() {
        let tree = build_menu(vec![leaf_entry("Programm", "programm")], &MenuLimits::default())
            .unwrap();
        assert_eq!(
            tree,
            vec![MenuNode::Leaf {
                label: label("Programm"),
                link: Some(LinkTarget::Internal {
                    slug: "programm".to_string()
                }),
            }]
        );
    }

    #[test]
    fn leaf_without_link_is_a_valid_label_only_entry() {
        let entries = vec![RawMenuEntry {
            label: label("Bald verfügbar"),
            link: None,
            sub_menu: Vec::new(),
        }];
        let tree = build_menu(entries, &MenuLimits::default()).unwrap();
        assert_eq!(
            tree,
            vec![MenuNode::Leaf {
                label: label("Bald verfügbar"),
                link: None,
            }]
        );
    }

    #[test]
    fn entry_with_sub_entries_becomes_branch_and_drops_its_link() {
        // Authored link on a parent entry must be ignored once sub-entries
        // exist, mirroring the authoring-time field condition.
        let entries = vec![RawMenuEntry {
            label: label("Lager"),
            link: Some(LinkTarget::Internal {
                slug: "lager".to_string(),
            }),
            sub_menu: vec![leaf_entry("Anmeldung", "anmeldung")],
        }];
        let tree = build_menu(entries, &MenuLimits::default()).unwrap();

        let MenuNode::Branch { children, .. } = &tree[0] else {
            panic!("expected branch, got {:?}", tree[0]);
        };
        assert_eq!(children.len(), 1);
        // No MenuNode variant carries both a link and children, so the
        // dropped link is unrepresentable in the output by construction.
    }

    #[test]
    fn entry_order_is_preserved() {
        let entries = vec![
            leaf_entry("Drei", "drei"),
            leaf_entry("Eins", "eins"),
            leaf_entry("Zwei", "zwei"),
        ];
        let tree = build_menu(entries, &MenuLimits::default()).unwrap();
        let labels: Vec<&str> = tree.iter().map(|node| node.label().de.as_str()).collect();
        assert_eq!(labels, vec!["Drei", "Eins", "Zwei"]);
    }

    #[test]
    fn nesting_beyond_max_depth_fails_the_build() {
        let entries = vec![RawMenuEntry {
            label: label("Ebene 1"),
            link: None,
            sub_menu: vec![RawMenuEntry {
                label: label("Ebene 2"),
                link: None,
                sub_menu: vec![leaf_entry("Ebene 3", "zu-tief")],
            }],
        }];
        let err = build_menu(entries, &MenuLimits::default()).unwrap_err();
        assert!(matches!(err, Error::MenuTooDeep { depth: 3, max: 2 }));
    }

    #[test]
    fn deeper_limit_allows_deeper_trees() {
        let entries = vec![RawMenuEntry {
            label: label("Ebene 1"),
            link: None,
            sub_menu: vec![RawMenuEntry {
                label: label("Ebene 2"),
                link: None,
                sub_menu: vec![leaf_entry("Ebene 3", "tief")],
            }],
        }];
        let tree = build_menu(entries, &MenuLimits { max_depth: 3 }).unwrap();
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn menu_from_value_parses_backend_json() {
        let value = json!([
            {
                "label": { "de": "Info", "fr": "Info", "en": "Info" },
                "subMenu": [
                    {
                        "label": { "de": "Kontakt" },
                        "link": { "type": "internal", "slug": "kontakt" }
                    },
                    {
                        "label": { "de": "Extern" },
                        "link": { "type": "external", "url": "https://cevi.ch" }
                    }
                ]
            }
        ]);
        let tree = menu_from_value(value, &MenuLimits::default()).unwrap();
        let MenuNode::Branch { children, .. } = &tree[0] else {
            panic!("expected branch");
        };
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn malformed_menu_json_is_a_hard_failure() {
        let value = json!([{ "label": 42 }]);
        let err = menu_from_value(value, &MenuLimits::default()).unwrap_err();
        assert!(matches!(err, Error::MenuMalformed(_)));
    }
}
