//! Tree → string rendering.
//!
//! Rendering is pure and total: every node renders in every mode, degrading
//! to fewer markers where a dialect lacks a construct.
//!
//! | Construct                     | HTML      | Markdown       | MarkdownV2    |
//! |-------------------------------|-----------|----------------|---------------|
//! | underline / strike / spoiler  | tags      | no markers     | `__ ~ \|\|`   |
//! | expandable quote              | attribute | plain quote    | plain quote   |
//! | code block language           | class     | ignored        | fence suffix  |
//! | custom emoji                  | element   | fallback text  | fallback text |

use crate::escape::{escape_code, escape_html, escape_html_attr, escape_text, escape_url};
use crate::mode::ParseMode;
use crate::node::{Node, Style};

/// Render `node` into the dialect selected by `mode`.
///
/// # Examples
///
/// ```
/// use tgmarkup::{Node, ParseMode, render};
///
/// let node = Node::bold([Node::text("a*b")]);
/// assert_eq!(render(&node, ParseMode::MarkdownV2), "*a\\*b*");
/// assert_eq!(render(&node, "HTML".into()), "<b>a*b</b>");
/// ```
pub fn render(node: &Node, mode: ParseMode) -> String {
    node.render(mode)
}

impl Node {
    /// Render this tree into the dialect selected by `mode`.
    pub fn render(&self, mode: ParseMode) -> String {
        let mut out = String::new();
        self.render_into(mode, &mut out);
        out
    }

    fn render_into(&self, mode: ParseMode, out: &mut String) {
        match self {
            Node::Text { content } => out.push_str(&escape_text(mode, content)),
            Node::Code { content } => render_code(content, mode, out),
            Node::Pre { content, language } => {
                render_pre(content, language.as_ref().map(|l| l.as_str()), mode, out)
            }
            Node::Group { children } => render_children(children, mode, out),
            Node::Wrap { style, children } => {
                let (open, close) = markers(*style, mode);
                out.push_str(open);
                render_children(children, mode, out);
                out.push_str(close);
            }
            Node::Link { label, url } => match mode {
                ParseMode::Html => {
                    out.push_str("<a href=\"");
                    out.push_str(&escape_url(mode, url));
                    out.push_str("\">");
                    label.render_into(mode, out);
                    out.push_str("</a>");
                }
                ParseMode::Markdown | ParseMode::MarkdownV2 => {
                    out.push('[');
                    label.render_into(mode, out);
                    out.push_str("](");
                    out.push_str(&escape_url(mode, url));
                    out.push(')');
                }
                ParseMode::Plain => {
                    label.render_into(mode, out);
                    out.push_str(" (");
                    out.push_str(url);
                    out.push(')');
                }
            },
            Node::Emoji { id, fallback } => {
                if mode == ParseMode::Html {
                    out.push_str("<tg-emoji emoji-id=\"");
                    out.push_str(&escape_html_attr(id));
                    out.push_str("\">");
                    out.push_str(&escape_html(fallback));
                    out.push_str("</tg-emoji>");
                } else {
                    out.push_str(&escape_text(mode, fallback));
                }
            }
            Node::Quote { lines, expandable } => render_quote(lines, *expandable, mode, out),
        }
    }
}

fn render_children(children: &[Node], mode: ParseMode, out: &mut String) {
    for child in children {
        child.render_into(mode, out);
    }
}

fn render_code(content: &str, mode: ParseMode, out: &mut String) {
    match mode {
        ParseMode::Html => {
            out.push_str("<code>");
            out.push_str(&escape_html(content));
            out.push_str("</code>");
        }
        ParseMode::Markdown | ParseMode::MarkdownV2 => {
            out.push('`');
            out.push_str(&escape_code(content));
            out.push('`');
        }
        ParseMode::Plain => out.push_str(content),
    }
}

fn render_pre(content: &str, language: Option<&str>, mode: ParseMode, out: &mut String) {
    match (mode, language) {
        (ParseMode::Html, Some(lang)) => {
            out.push_str("<pre><code class=\"language-");
            out.push_str(&escape_html_attr(lang));
            out.push_str("\">");
            out.push_str(&escape_html(content));
            out.push_str("</code></pre>");
        }
        (ParseMode::Html, None) => {
            out.push_str("<pre>");
            out.push_str(&escape_html(content));
            out.push_str("</pre>");
        }
        // Legacy Markdown has no language syntax on fences.
        (ParseMode::Markdown, _) | (ParseMode::MarkdownV2, None) => {
            out.push_str("```\n");
            out.push_str(&escape_code(content));
            out.push_str("\n```");
        }
        (ParseMode::MarkdownV2, Some(lang)) => {
            out.push_str("```");
            out.push_str(lang);
            out.push('\n');
            out.push_str(&escape_code(content));
            out.push_str("\n```");
        }
        (ParseMode::Plain, _) => out.push_str(content),
    }
}

fn render_quote(lines: &[Node], expandable: bool, mode: ParseMode, out: &mut String) {
    match mode {
        ParseMode::Html => {
            out.push_str(if expandable {
                "<blockquote expandable>"
            } else {
                "<blockquote>"
            });
            join_lines(lines, mode, "", out);
            out.push_str("</blockquote>");
        }
        ParseMode::Markdown | ParseMode::MarkdownV2 => join_lines(lines, mode, ">", out),
        ParseMode::Plain => join_lines(lines, mode, "", out),
    }
}

fn join_lines(lines: &[Node], mode: ParseMode, prefix: &str, out: &mut String) {
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(prefix);
        line.render_into(mode, out);
    }
}

/// Open/close markers of `style` in `mode`. Empty where the dialect has no
/// representation.
fn markers(style: Style, mode: ParseMode) -> (&'static str, &'static str) {
    match (mode, style) {
        (ParseMode::Html, Style::Bold) => ("<b>", "</b>"),
        (ParseMode::Html, Style::Italic) => ("<i>", "</i>"),
        (ParseMode::Html, Style::Underline) => ("<u>", "</u>"),
        (ParseMode::Html, Style::Strike) => ("<s>", "</s>"),
        (ParseMode::Html, Style::Spoiler) => ("<span class=\"tg-spoiler\">", "</span>"),

        (ParseMode::Markdown | ParseMode::MarkdownV2, Style::Bold) => ("*", "*"),
        (ParseMode::Markdown | ParseMode::MarkdownV2, Style::Italic) => ("_", "_"),

        (ParseMode::MarkdownV2, Style::Underline) => ("__", "__"),
        (ParseMode::MarkdownV2, Style::Strike) => ("~", "~"),
        (ParseMode::MarkdownV2, Style::Spoiler) => ("||", "||"),

        (ParseMode::Markdown, Style::Underline | Style::Strike | Style::Spoiler) => ("", ""),
        (ParseMode::Plain, _) => ("", ""),
    }
}

/// One-line summary of a rendered payload for log output:
/// title, byte length and the first 60 characters, quoted.
pub fn debug_dump(title: &str, s: &str) -> String {
    let head: String = s.chars().take(60).collect();
    format!("[{title}] len={} head={head:?}", s.len())
}
