//! Markup syntax tree.
//!
//! A message is composed as a tree of [`Node`]s and rendered into a
//! [`ParseMode`](crate::ParseMode) only at the end. Only text leaves are
//! escaped during rendering; formatting nodes add their markers around the
//! already rendered children, so markers and escaped content never mix.
//!
//! ```
//! use tgmarkup::{Node, ParseMode};
//!
//! let msg = Node::group([
//!     Node::bold([Node::text("Build")]),
//!     Node::text(" finished: "),
//!     Node::link(Node::text("logs"), "https://ci.example/run/42"),
//! ]);
//! assert_eq!(
//!     msg.render(ParseMode::Html),
//!     "<b>Build</b> finished: <a href=\"https://ci.example/run/42\">logs</a>"
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::language::{Language, LanguageRegistry};

/// Inline style applied by [`Node::Wrap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Bold,
    Italic,
    /// Not expressible in legacy Markdown; renders without markers there.
    Underline,
    /// Not expressible in legacy Markdown; renders without markers there.
    Strike,
    /// Not expressible in legacy Markdown; renders without markers there.
    Spoiler,
}

/// A node of the markup tree.
///
/// Trees are built bottom-up and owned top-down; each node exclusively owns
/// its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Literal text, escaped for the target mode.
    Text { content: String },

    /// Inline fixed-width code.
    Code { content: String },

    /// Multi-line code block with an optional highlighting language.
    Pre {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<Language>,
    },

    /// Children concatenated with no markers.
    Group { children: Vec<Node> },

    /// Children surrounded by the style's open/close markers.
    Wrap { style: Style, children: Vec<Node> },

    /// Clickable link; the label is itself a tree.
    Link { label: Box<Node>, url: String },

    /// Custom emoji. Only HTML can reference it; other modes show `fallback`.
    Emoji { id: String, fallback: String },

    /// Block quotation, one rendered unit per line.
    Quote {
        lines: Vec<Node>,
        #[serde(default)]
        expandable: bool,
    },
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text {
            content: content.into(),
        }
    }

    /// Inline code. Its content is never run through the text escaper.
    pub fn code(content: impl Into<String>) -> Self {
        Node::Code {
            content: content.into(),
        }
    }

    /// Code block without a language.
    pub fn pre(content: impl Into<String>) -> Self {
        Node::Pre {
            content: content.into(),
            language: None,
        }
    }

    /// Code block highlighted as `language`.
    pub fn pre_with_language(content: impl Into<String>, language: Language) -> Self {
        Node::Pre {
            content: content.into(),
            language: Some(language),
        }
    }

    /// Code block whose language is given as a name or alias.
    ///
    /// Fails with [`MarkupError::UnknownLanguage`](crate::MarkupError::UnknownLanguage)
    /// when `registry` does not know `language`.
    pub fn pre_resolved(
        content: impl Into<String>,
        language: &str,
        registry: &LanguageRegistry,
    ) -> Result<Self> {
        let language = registry.resolve(language)?;
        Ok(Node::pre_with_language(content, language))
    }

    pub fn group(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Group {
            children: children.into_iter().collect(),
        }
    }

    pub fn wrap(style: Style, children: impl IntoIterator<Item = Node>) -> Self {
        Node::Wrap {
            style,
            children: children.into_iter().collect(),
        }
    }

    pub fn bold(children: impl IntoIterator<Item = Node>) -> Self {
        Node::wrap(Style::Bold, children)
    }

    pub fn italic(children: impl IntoIterator<Item = Node>) -> Self {
        Node::wrap(Style::Italic, children)
    }

    pub fn underline(children: impl IntoIterator<Item = Node>) -> Self {
        Node::wrap(Style::Underline, children)
    }

    pub fn strike(children: impl IntoIterator<Item = Node>) -> Self {
        Node::wrap(Style::Strike, children)
    }

    pub fn spoiler(children: impl IntoIterator<Item = Node>) -> Self {
        Node::wrap(Style::Spoiler, children)
    }

    pub fn link(label: Node, url: impl Into<String>) -> Self {
        Node::Link {
            label: Box::new(label),
            url: url.into(),
        }
    }

    /// Link to a user by numeric id (`tg://user?id=...`).
    pub fn mention(label: Node, user_id: i64) -> Self {
        Node::link(label, format!("tg://user?id={user_id}"))
    }

    pub fn emoji(id: impl Into<String>, fallback: impl Into<String>) -> Self {
        Node::Emoji {
            id: id.into(),
            fallback: fallback.into(),
        }
    }

    pub fn quote(lines: impl IntoIterator<Item = Node>) -> Self {
        Node::Quote {
            lines: lines.into_iter().collect(),
            expandable: false,
        }
    }

    /// Quote collapsed by default in HTML; a regular quote elsewhere.
    pub fn quote_expandable(lines: impl IntoIterator<Item = Node>) -> Self {
        Node::Quote {
            lines: lines.into_iter().collect(),
            expandable: true,
        }
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Node::text(content)
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Node::text(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarkupError;

    #[test]
    fn mention_builds_user_link() {
        let node = Node::mention(Node::text("Ann"), 42);
        let Node::Link { label, url } = node else {
            panic!("expected link");
        };
        assert_eq!(url, "tg://user?id=42");
        assert_eq!(*label, Node::text("Ann"));
    }

    #[test]
    fn negative_user_id() {
        let Node::Link { url, .. } = Node::mention("x".into(), -100123) else {
            panic!("expected link");
        };
        assert_eq!(url, "tg://user?id=-100123");
    }

    #[test]
    fn pre_resolved_normalizes_alias() {
        let node = Node::pre_resolved("x = 1", "PY", LanguageRegistry::builtin()).unwrap();
        assert_eq!(node, Node::pre_with_language("x = 1", Language::PYTHON));
    }

    #[test]
    fn pre_resolved_rejects_unknown() {
        let err = Node::pre_resolved("x", "klingon", LanguageRegistry::builtin()).unwrap_err();
        assert!(matches!(err, MarkupError::UnknownLanguage { .. }));
    }

    #[test]
    fn style_helpers_set_style() {
        let cases = [
            (Node::bold([]), Style::Bold),
            (Node::italic([]), Style::Italic),
            (Node::underline([]), Style::Underline),
            (Node::strike([]), Style::Strike),
            (Node::spoiler([]), Style::Spoiler),
        ];
        for (node, want) in cases {
            assert!(matches!(node, Node::Wrap { style, .. } if style == want));
        }
    }

    #[test]
    fn json_shape() {
        let node = Node::group([
            Node::bold([Node::text("hi")]),
            Node::pre_with_language("fn main() {}", Language::RUST),
        ]);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "group",
                "children": [
                    {
                        "type": "wrap",
                        "style": "bold",
                        "children": [{"type": "text", "content": "hi"}]
                    },
                    {"type": "pre", "content": "fn main() {}", "language": "rust"}
                ]
            })
        );
        let back: Node = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn json_quote_defaults_to_not_expandable() {
        let node: Node = serde_json::from_str(
            r#"{"type": "quote", "lines": [{"type": "text", "content": "a"}]}"#,
        )
        .unwrap();
        assert_eq!(node, Node::quote([Node::text("a")]));
    }

    #[test]
    fn json_rejects_unknown_language() {
        let result = serde_json::from_str::<Node>(
            r#"{"type": "pre", "content": "x", "language": "klingon"}"#,
        );
        assert!(result.is_err());
    }
}
