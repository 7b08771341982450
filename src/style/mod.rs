//! Style rules for presentation attributes.
//!
//! A [`DotStyle`] holds two ordered rule lists, one for nodes and one for
//! edges. Each [`StyleRule`] pairs a [`StylePredicate`] with an attribute
//! overlay; [`resolve_attributes`] merges the overlays of every matching rule
//! in list order, later rules overriding earlier ones key by key. Rule order
//! is therefore a priority list from least to most specific: put general
//! rules first and let specific rules override individual keys.
//!
//! A style is immutable once constructed and can be shared read-only across
//! concurrent export calls.

use crate::frame::Element;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Boolean matcher over a frame element's declared type.
///
/// Predicates are pure and total: matching never fails and never mutates the
/// element. An element without a type tag matches [`StylePredicate::MatchAll`]
/// and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StylePredicate {
    /// Matches every element
    MatchAll,
    /// Matches elements whose type tag equals the given name (case-sensitive)
    MatchType(String),
}

impl StylePredicate {
    /// Test the predicate against an element.
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        match self {
            StylePredicate::MatchAll => true,
            StylePredicate::MatchType(type_name) => element.type_name() == Some(type_name),
        }
    }
}

/// One style rule: a predicate plus the attribute overlay it contributes.
///
/// The overlay is applied verbatim (no interpolation) and keeps insertion
/// order, so the attributes a rule contributes appear in the output in the
/// order they were declared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleRule {
    /// Which elements this rule applies to
    pub predicate: StylePredicate,
    /// Attribute names and values merged into matching elements
    pub attributes: IndexMap<String, String>,
}

impl StyleRule {
    /// Create a rule from a predicate and (key, value) attribute pairs.
    pub fn new<K, V>(predicate: StylePredicate, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            predicate,
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Style configuration for DOT export: ordered node rules plus ordered edge rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DotStyle {
    /// Rules applied to node statements, least specific first
    pub node_rules: Vec<StyleRule>,
    /// Rules applied to edge statements, least specific first
    pub edge_rules: Vec<StyleRule>,
}

impl DotStyle {
    /// Create a style from explicit rule lists.
    pub fn new(node_rules: Vec<StyleRule>, edge_rules: Vec<StyleRule>) -> Self {
        Self {
            node_rules,
            edge_rules,
        }
    }

    /// Create a style with no rules at all.
    ///
    /// Every element resolves to an empty attribute set; nodes still carry
    /// their computed label.
    pub fn empty() -> Self {
        Self {
            node_rules: Vec::new(),
            edge_rules: Vec::new(),
        }
    }
}

impl Default for DotStyle {
    /// The built-in stock-and-flow style.
    ///
    /// A match-all rule seeds node baselines, then per-type rules pick shapes
    /// for stocks, flow rates, and auxiliaries. Flow and parameter edges get
    /// distinct arrowheads and colors.
    fn default() -> Self {
        Self {
            node_rules: vec![
                StyleRule::new(StylePredicate::MatchAll, [("labelloc", "b")]),
                StyleRule::new(
                    StylePredicate::MatchType("FlowRate".to_string()),
                    [("shape", "ellipse"), ("style", "bold")],
                ),
                StyleRule::new(
                    StylePredicate::MatchType("Stock".to_string()),
                    [("style", "bold"), ("shape", "box")],
                ),
                StyleRule::new(
                    StylePredicate::MatchType("Auxiliary".to_string()),
                    [("shape", "ellipse"), ("style", "dotted")],
                ),
            ],
            edge_rules: vec![
                StyleRule::new(
                    StylePredicate::MatchType("Flow".to_string()),
                    [
                        ("color", "blue:white:blue"),
                        ("arrowhead", "empty"),
                        ("arrowsize", "2"),
                    ],
                ),
                StyleRule::new(
                    StylePredicate::MatchType("Parameter".to_string()),
                    [("arrowhead", "open"), ("color", "red")],
                ),
            ],
        }
    }
}

/// Compute the merged attribute mapping for one element.
///
/// Rules are applied in list order; every matching rule's overlay is merged
/// into the accumulator with later rules overriding earlier ones per key
/// (last-match-wins per key, not first-match-wins per rule). A key overridden
/// by a later rule keeps its original position in the mapping, so emission
/// order is stable. If no rule matches, the result is empty.
pub fn resolve_attributes<E: Element>(
    element: &E,
    rules: &[StyleRule],
) -> IndexMap<String, String> {
    let mut resolved = IndexMap::new();

    for rule in rules {
        if rule.predicate.matches(element) {
            for (key, value) in &rule.attributes {
                resolved.insert(key.clone(), value.clone());
            }
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{AttributeMap, Object};

    fn stock(id: &str) -> Object {
        Object::new(id, "Stock", AttributeMap::new())
    }

    #[test]
    fn test_match_all_matches_untyped() {
        let element = Object::untyped("mystery", AttributeMap::new());
        assert!(StylePredicate::MatchAll.matches(&element));
        assert!(!StylePredicate::MatchType("Stock".to_string()).matches(&element));
    }

    #[test]
    fn test_match_type_is_case_sensitive() {
        let element = stock("tank");
        assert!(StylePredicate::MatchType("Stock".to_string()).matches(&element));
        assert!(!StylePredicate::MatchType("stock".to_string()).matches(&element));
    }

    #[test]
    fn test_later_rules_override_per_key() {
        let rules = vec![
            StyleRule::new(StylePredicate::MatchAll, [("a", "1"), ("b", "1")]),
            StyleRule::new(
                StylePredicate::MatchType("Stock".to_string()),
                [("a", "2")],
            ),
        ];

        let resolved = resolve_attributes(&stock("tank"), &rules);
        assert_eq!(resolved.get("a"), Some(&"2".to_string()));
        assert_eq!(resolved.get("b"), Some(&"1".to_string()));

        let other = Object::new("tap", "FlowRate", AttributeMap::new());
        let resolved = resolve_attributes(&other, &rules);
        assert_eq!(resolved.get("a"), Some(&"1".to_string()));
    }

    #[test]
    fn test_no_match_resolves_empty() {
        let rules = vec![StyleRule::new(
            StylePredicate::MatchType("Cloud".to_string()),
            [("shape", "none")],
        )];

        let resolved = resolve_attributes(&stock("tank"), &rules);
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let rules = DotStyle::default().node_rules;
        let element = stock("tank");

        let first = resolve_attributes(&element, &rules);
        let second = resolve_attributes(&element, &rules);
        assert_eq!(first, second);
    }

    #[test]
    fn test_overridden_key_keeps_position() {
        let rules = vec![
            StyleRule::new(StylePredicate::MatchAll, [("shape", "ellipse"), ("style", "solid")]),
            StyleRule::new(
                StylePredicate::MatchType("Stock".to_string()),
                [("style", "bold")],
            ),
        ];

        let resolved = resolve_attributes(&stock("tank"), &rules);
        let keys: Vec<&str> = resolved.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["shape", "style"]);
        assert_eq!(resolved.get("style"), Some(&"bold".to_string()));
    }

    #[test]
    fn test_default_style_shapes() {
        let style = DotStyle::default();

        let resolved = resolve_attributes(&stock("tank"), &style.node_rules);
        assert_eq!(resolved.get("shape"), Some(&"box".to_string()));
        assert_eq!(resolved.get("style"), Some(&"bold".to_string()));
        assert_eq!(resolved.get("labelloc"), Some(&"b".to_string()));

        let aux = Object::new("ratio", "Auxiliary", AttributeMap::new());
        let resolved = resolve_attributes(&aux, &style.node_rules);
        assert_eq!(resolved.get("shape"), Some(&"ellipse".to_string()));
        assert_eq!(resolved.get("style"), Some(&"dotted".to_string()));
    }
}
