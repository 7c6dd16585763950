//! CommonMark → [`Node`] conversion.
//!
//! Upstream content (LLM replies, README snippets, templates) usually
//! arrives as CommonMark. Converting it into a tree first, instead of
//! rewriting the markup text for each dialect, keeps escaping in one place:
//! the resulting tree renders into any [`ParseMode`](crate::ParseMode).
//!
//! Mapping:
//!
//! - `**strong**` → bold, `*emphasis*` → italic, `~~strike~~` → strike
//! - `` `code` `` → inline code, fenced blocks → pre (fence language
//!   resolved through a [`LanguageRegistry`])
//! - links and images → link
//! - headings → bold line
//! - list items → `- ` / `N. ` prefixed lines
//! - block quotes → quote, one line per source line; styles spanning a
//!   line break are closed and reopened, code blocks become one code span
//!   per line and nested quotes are flattened
//! - tables → one line per row, cells separated by ` | `
//! - raw HTML → text (escaped on render)
//!
//! Top-level blocks are separated by a blank line.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};

use crate::error::{MarkupError, Result};
use crate::language::{Language, LanguageRegistry};
use crate::node::{Node, Style};

/// Parse `markdown` into a tree.
///
/// An unknown fence language is dropped with a warning, or rejected with
/// [`MarkupError::UnknownLanguage`] when `strict` is set.
///
/// # Examples
///
/// ```
/// use tgmarkup::{LanguageRegistry, ParseMode, from_commonmark};
///
/// let node = from_commonmark("**done** in 1.5s", LanguageRegistry::builtin(), false).unwrap();
/// assert_eq!(node.render(ParseMode::MarkdownV2), "*done* in 1\\.5s");
/// ```
pub fn from_commonmark(markdown: &str, registry: &LanguageRegistry, strict: bool) -> Result<Node> {
    let options =
        Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS;
    let mut builder = TreeBuilder::new();

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(tag) => {
                let frame = match tag {
                    Tag::Paragraph => Frame::Paragraph,
                    Tag::Heading { .. } => Frame::Heading,
                    Tag::BlockQuote(_) => Frame::Quote,
                    Tag::List(start) => Frame::List { next: start },
                    Tag::Item => Frame::Item {
                        marker: builder.next_item_marker(),
                    },
                    Tag::Strong => Frame::Style(Style::Bold),
                    Tag::Emphasis => Frame::Style(Style::Italic),
                    Tag::Strikethrough => Frame::Style(Style::Strike),
                    Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. } => {
                        Frame::Link(dest_url.into_string())
                    }
                    Tag::CodeBlock(kind) => Frame::CodeBlock {
                        language: fence_language(&kind, registry, strict)?,
                        code: String::new(),
                    },
                    Tag::Table(_) => Frame::Table,
                    Tag::TableHead | Tag::TableRow => Frame::TableRow,
                    Tag::TableCell => Frame::TableCell,
                    _ => Frame::Other,
                };
                builder.open(frame);
            }
            Event::End(_) => builder.close(),
            Event::Text(text) => builder.text(&text),
            Event::Code(code) => builder.push_inline(Node::code(code.into_string())),
            Event::Html(html) | Event::InlineHtml(html) => builder.text(&html),
            Event::SoftBreak | Event::HardBreak => builder.text("\n"),
            Event::Rule => builder.push_block(Node::text("---")),
            Event::TaskListMarker(checked) => {
                builder.text(if checked { "[x] " } else { "[ ] " })
            }
            Event::FootnoteReference(label) => builder.text(&format!("[{label}]")),
            _ => {}
        }
    }

    Ok(builder.finish())
}

fn fence_language(
    kind: &CodeBlockKind<'_>,
    registry: &LanguageRegistry,
    strict: bool,
) -> Result<Option<Language>> {
    let CodeBlockKind::Fenced(info) = kind else {
        return Ok(None);
    };
    // Info strings may carry attributes after the language: "rust,ignore", "py title=x".
    let name = info
        .split(|c: char| c.is_whitespace() || c == ',')
        .next()
        .unwrap_or_default();
    if name.is_empty() {
        return Ok(None);
    }
    match registry.normalize(name) {
        Some(lang) => Ok(Some(lang)),
        None if strict => Err(MarkupError::UnknownLanguage {
            input: name.to_owned(),
        }),
        None => {
            tracing::warn!(language = name, "dropping unsupported code block language");
            Ok(None)
        }
    }
}

#[derive(Debug)]
enum Frame {
    Root,
    Paragraph,
    Heading,
    Quote,
    List { next: Option<u64> },
    Item { marker: String },
    Style(Style),
    Link(String),
    CodeBlock { language: Option<Language>, code: String },
    Table,
    TableRow,
    TableCell,
    Other,
}

#[derive(Debug)]
struct Open {
    frame: Frame,
    children: Vec<Node>,
}

/// Stack of open containers; `Start`/`End` events are always balanced.
struct TreeBuilder {
    stack: Vec<Open>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Open {
                frame: Frame::Root,
                children: Vec::new(),
            }],
        }
    }

    fn open(&mut self, frame: Frame) {
        self.stack.push(Open {
            frame,
            children: Vec::new(),
        });
    }

    fn next_item_marker(&mut self) -> String {
        match self.stack.last_mut().map(|open| &mut open.frame) {
            Some(Frame::List { next: Some(n) }) => {
                let marker = format!("{n}. ");
                *n += 1;
                marker
            }
            _ => "- ".to_owned(),
        }
    }

    fn close(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        let Some(Open { frame, children }) = self.stack.pop() else {
            return;
        };
        match frame {
            Frame::Root => {}
            Frame::Paragraph | Frame::Other => self.push_block(Node::group(children)),
            Frame::Heading => self.push_block(Node::bold(children)),
            Frame::Quote => self.push_block(Node::quote(split_lines(children))),
            Frame::List { .. } | Frame::Table => self.push_block(join_with(children, "\n")),
            Frame::TableRow => self.push_block(join_with(children, " | ")),
            Frame::TableCell => self.push_block(Node::group(children)),
            Frame::Item { marker } => {
                let mut entry = Vec::with_capacity(children.len() + 1);
                entry.push(Node::text(marker));
                entry.extend(children);
                self.push_block(Node::group(entry));
            }
            Frame::Style(style) => self.push_inline(Node::wrap(style, children)),
            Frame::Link(url) => self.push_inline(Node::link(single_or_group(children), url)),
            Frame::CodeBlock { language, mut code } => {
                if code.ends_with('\n') {
                    code.pop();
                }
                self.push_block(Node::Pre {
                    content: code,
                    language,
                });
            }
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(Open {
            frame: Frame::CodeBlock { code, .. },
            ..
        }) = self.stack.last_mut()
        {
            code.push_str(text);
            return;
        }
        self.push_inline(Node::text(text));
    }

    /// Append an inline node, merging adjacent text leaves.
    fn push_inline(&mut self, node: Node) {
        let Some(top) = self.stack.last_mut() else {
            return;
        };
        if let (Some(Node::Text { content: last }), Node::Text { content }) =
            (top.children.last_mut(), &node)
        {
            last.push_str(content);
            return;
        }
        top.children.push(node);
    }

    /// Append a block, separated from its previous sibling by a newline
    /// (a blank line at the top level). List items, table rows and cells
    /// need no separator here; their container joins them on close.
    fn push_block(&mut self, node: Node) {
        let Some(top) = self.stack.last_mut() else {
            return;
        };
        if !top.children.is_empty() {
            match top.frame {
                Frame::List { .. } | Frame::Table | Frame::TableRow => {}
                Frame::Root => top.children.push(Node::text("\n\n")),
                _ => top.children.push(Node::text("\n")),
            }
        }
        top.children.push(node);
    }

    fn finish(mut self) -> Node {
        while self.stack.len() > 1 {
            self.close();
        }
        let children = self.stack.pop().map(|open| open.children).unwrap_or_default();
        Node::group(children)
    }
}

fn single_or_group(mut nodes: Vec<Node>) -> Node {
    if nodes.len() == 1 {
        nodes.remove(0)
    } else {
        Node::group(nodes)
    }
}

fn join_with(nodes: Vec<Node>, separator: &str) -> Node {
    let mut joined = Vec::with_capacity(nodes.len() * 2);
    for (i, node) in nodes.into_iter().enumerate() {
        if i > 0 {
            joined.push(Node::text(separator));
        }
        joined.push(node);
    }
    Node::group(joined)
}

/// Split the contents of a block quote into one node per line.
///
/// Trailing empty lines are dropped.
fn split_lines(nodes: Vec<Node>) -> Vec<Node> {
    let mut lines = lines_of(nodes);
    while lines.last().is_some_and(Vec::is_empty) {
        lines.pop();
    }
    lines.into_iter().map(single_or_group).collect()
}

/// Concatenate the lines of each node: the first line of a node continues
/// the current line, the rest start new ones.
fn lines_of(nodes: Vec<Node>) -> Vec<Vec<Node>> {
    let mut lines = vec![Vec::new()];
    for node in nodes {
        let mut more = node_lines(node).into_iter();
        if let (Some(first), Some(last)) = (more.next(), lines.last_mut()) {
            last.extend(first);
        }
        lines.extend(more);
    }
    lines
}

/// The lines a single node renders to. An empty `Vec` is an empty line.
fn node_lines(node: Node) -> Vec<Vec<Node>> {
    match node {
        Node::Text { content } => content.split('\n').map(text_line).collect(),
        Node::Group { children } => lines_of(children),
        // Each line gets its own open and close marker.
        Node::Wrap { style, children } => lines_of(children)
            .into_iter()
            .map(|line| {
                if line.is_empty() {
                    line
                } else {
                    vec![Node::wrap(style, line)]
                }
            })
            .collect(),
        Node::Link { label, url } => node_lines(*label)
            .into_iter()
            .map(|line| {
                if line.is_empty() {
                    line
                } else {
                    vec![Node::link(single_or_group(line), url.clone())]
                }
            })
            .collect(),
        Node::Pre { content, .. } => content
            .split('\n')
            .map(|line| {
                if line.is_empty() {
                    Vec::new()
                } else {
                    vec![Node::code(line)]
                }
            })
            .collect(),
        Node::Quote { lines, .. } => lines.into_iter().flat_map(node_lines).collect(),
        leaf @ (Node::Code { .. } | Node::Emoji { .. }) => vec![vec![leaf]],
    }
}

fn text_line(piece: &str) -> Vec<Node> {
    if piece.is_empty() {
        Vec::new()
    } else {
        vec![Node::text(piece)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ParseMode;

    fn convert(md: &str) -> Node {
        from_commonmark(md, LanguageRegistry::builtin(), false).unwrap()
    }

    fn html(md: &str) -> String {
        convert(md).render(ParseMode::Html)
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(html("**bold** and *italic*"), "<b>bold</b> and <i>italic</i>");
    }

    #[test]
    fn strikethrough() {
        assert_eq!(html("~~gone~~"), "<s>gone</s>");
        assert_eq!(convert("~~gone~~").render(ParseMode::MarkdownV2), "~gone~");
    }

    #[test]
    fn inline_code() {
        assert_eq!(html("run `a < b`"), "run <code>a &lt; b</code>");
    }

    #[test]
    fn fenced_code_with_alias() {
        let node = convert("```py\nprint(1)\n```");
        assert_eq!(node.render(ParseMode::MarkdownV2), "```python\nprint(1)\n```");
        assert_eq!(
            node.render(ParseMode::Html),
            "<pre><code class=\"language-python\">print(1)</code></pre>"
        );
    }

    #[test]
    fn fence_info_attributes_ignored() {
        let node = convert("```rust,ignore\nlet x = 1;\n```");
        assert_eq!(node, Node::group([Node::pre_with_language("let x = 1;", Language::RUST)]));
    }

    #[test]
    fn unknown_fence_language_dropped() {
        let node = convert("```klingon\nqapla'\n```");
        assert_eq!(node, Node::group([Node::pre("qapla'")]));
    }

    #[test]
    fn unknown_fence_language_strict() {
        let err = from_commonmark("```klingon\nx\n```", LanguageRegistry::builtin(), true)
            .unwrap_err();
        assert!(matches!(err, MarkupError::UnknownLanguage { ref input } if input == "klingon"));
    }

    #[test]
    fn indented_code_block() {
        let node = convert("    let x = 1;\n");
        assert_eq!(node, Node::group([Node::pre("let x = 1;")]));
    }

    #[test]
    fn link_with_styled_label() {
        assert_eq!(
            html("[**docs**](https://example.com?a=1&b=2)"),
            "<a href=\"https://example.com?a=1&amp;b=2\"><b>docs</b></a>"
        );
    }

    #[test]
    fn heading_becomes_bold_line() {
        assert_eq!(html("# Title\n\nbody"), "<b>Title</b>\n\nbody");
    }

    #[test]
    fn paragraphs_separated_by_blank_line() {
        assert_eq!(html("one\n\ntwo"), "one\n\ntwo");
    }

    #[test]
    fn soft_break_kept_as_newline() {
        assert_eq!(html("one\ntwo"), "one\ntwo");
    }

    #[test]
    fn unordered_list() {
        assert_eq!(html("- item one\n- item two"), "- item one\n- item two");
    }

    #[test]
    fn ordered_list_numbering() {
        assert_eq!(html("3. c\n4. d\n5. e"), "3. c\n4. d\n5. e");
    }

    #[test]
    fn list_markers_escaped_in_markdown_v2() {
        assert_eq!(convert("- a\n- b").render(ParseMode::MarkdownV2), "\\- a\n\\- b");
    }

    #[test]
    fn block_quote_lines() {
        let node = convert("> first\n> second *it*");
        assert_eq!(node.render(ParseMode::MarkdownV2), ">first\n>second _it_");
        assert_eq!(
            node.render(ParseMode::Html),
            "<blockquote>first\nsecond <i>it</i></blockquote>"
        );
    }

    fn mdv2(md: &str) -> String {
        convert(md).render(ParseMode::MarkdownV2)
    }

    #[test]
    fn style_spanning_quote_lines_is_reopened() {
        assert_eq!(mdv2("> *a\n> b*"), ">_a_\n>_b_");
        assert_eq!(html("> **a\n> b**"), "<blockquote><b>a</b>\n<b>b</b></blockquote>");
        assert_eq!(mdv2("> x **a *b\n> c* d**"), ">x *a _b_*\n>*_c_ d*");
    }

    #[test]
    fn link_spanning_quote_lines() {
        assert_eq!(
            mdv2("> [a\n> b](http://x.test)"),
            ">[a](http://x.test)\n>[b](http://x.test)"
        );
    }

    #[test]
    fn nested_quote_is_flattened() {
        assert_eq!(mdv2("> > x\n> > y"), ">x\n>y");
        assert_eq!(mdv2("> a\n>\n> > b\n> > c"), ">a\n>b\n>c");
    }

    #[test]
    fn code_block_in_quote_keeps_every_line_quoted() {
        let node = convert("> ```py\n> a = 1\n> b\n> ```");
        assert_eq!(node.render(ParseMode::MarkdownV2), ">`a = 1`\n>`b`");
        assert_eq!(
            node.render(ParseMode::Html),
            "<blockquote><code>a = 1</code>\n<code>b</code></blockquote>"
        );
    }

    #[test]
    fn quote_paragraphs_become_lines() {
        assert_eq!(mdv2("> a\n>\n> b"), ">a\n>b");
    }

    #[test]
    fn every_quote_line_is_prefixed() {
        let md = concat!(
            "> *one\n> two* [three\n> four](http://x.test)\n",
            ">\n> > five\n",
            ">\n> ```\n> six\n> ```",
        );
        for mode in [ParseMode::Markdown, ParseMode::MarkdownV2] {
            let out = convert(md).render(mode);
            assert_eq!(out.lines().count(), 5, "{mode}: {out}");
            assert!(out.lines().all(|line| line.starts_with('>')), "{mode}: {out}");
        }
    }

    #[test]
    fn table_rows_join_cells() {
        let md = "| a | b |\n|---|---|\n| 1 | 2 |";
        assert_eq!(html(md), "a | b\n1 | 2");
        assert_eq!(mdv2(md), "a \\| b\n1 \\| 2");
    }

    #[test]
    fn table_is_a_top_level_block() {
        let md = "intro\n\n| a | b |\n|---|---|\n| **1** |  |";
        assert_eq!(html(md), "intro\n\na | b\n<b>1</b> | ");
    }

    #[test]
    fn raw_html_is_escaped() {
        let out = html("<script>alert('xss')</script>");
        assert!(out.contains("&lt;script&gt;"));
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(html(""), "");
    }

    #[test]
    fn adjacent_text_is_merged() {
        let node = convert("a*b");
        assert_eq!(node, Node::group([Node::group([Node::text("a*b")])]));
        assert_eq!(node.render(ParseMode::MarkdownV2), "a\\*b");
    }

    #[test]
    fn task_list_markers() {
        assert_eq!(html("- [x] done\n- [ ] todo"), "- [x] done\n- [ ] todo");
    }

    #[test]
    fn split_lines_flattens_groups() {
        let lines = split_lines(vec![
            Node::group([Node::text("a\nb"), Node::bold([Node::text("c")])]),
            Node::text("\n"),
            Node::text("d"),
        ]);
        assert_eq!(
            lines,
            vec![
                Node::text("a"),
                Node::group([Node::text("b"), Node::bold([Node::text("c")])]),
                Node::text("d"),
            ]
        );
    }
}
