//! A fixed document exercising every node kind.
//!
//! Handy for eyeballing a dialect in a real client, and as a regression
//! fixture: nested styles, links, mentions, custom emoji, code with and
//! without a language, and both quote kinds.

use crate::escape::escape_text;
use crate::language::Language;
use crate::mode::ParseMode;
use crate::node::Node;

/// Placeholder replaced by the mode name in [`render_showcase`].
const TITLE_PLACEHOLDER: &str = "__PLACEHOLDER_TITLE__";

/// Build the showcase tree. `user_id` is the target of the mention line.
pub fn showcase(user_id: i64) -> Node {
    Node::group([
        Node::text(TITLE_PLACEHOLDER),
        Node::text("\n\n"),
        Node::bold([Node::text("bold text")]),
        Node::text("\n"),
        Node::italic([Node::text("italic text")]),
        Node::text("\n"),
        Node::underline([Node::text("underline")]),
        Node::text("\n"),
        Node::strike([Node::text("strikethrough")]),
        Node::text("\n"),
        Node::spoiler([Node::text("spoiler")]),
        Node::text("\n"),
        Node::group([
            Node::bold([Node::italic([
                Node::text("italic bold "),
                Node::strike([Node::text("italic bold strikethrough ")]),
                Node::spoiler([Node::text("italic bold strikethrough spoiler")]),
                Node::text(" "),
                Node::underline([Node::text("underline italic bold")]),
            ])]),
            Node::text(" "),
            Node::bold([Node::text("bold")]),
        ]),
        Node::text("\n"),
        Node::link(Node::text("inline URL"), "http://www.example.com/"),
        Node::text("\n"),
        Node::mention(Node::text("inline mention of a user"), user_id),
        Node::text("\n"),
        Node::emoji("5368324170671202286", "👍"),
        Node::text("\n"),
        Node::code("inline fixed-width code"),
        Node::text("\n"),
        Node::pre("pre-formatted fixed-width code block"),
        Node::text("\n"),
        Node::pre_with_language(
            "pre-formatted fixed-width code block written in the Python programming language",
            Language::PYTHON,
        ),
        Node::text("\n"),
        Node::quote([
            Node::text("Block quotation started"),
            Node::text("Block quotation continued"),
            Node::text("The last line of the block quotation"),
        ]),
        Node::text("\n"),
        Node::quote_expandable([
            Node::text("Expandable block quotation started"),
            Node::text("Expandable block quotation continued"),
            Node::text("Hidden by default part of the block quotation started"),
            Node::text("The last line of the block quotation"),
        ]),
    ])
}

/// Render the showcase with its title set to `"<mode> showcase"`.
pub fn render_showcase(mode: ParseMode, user_id: i64) -> String {
    let text = showcase(user_id).render(mode);
    // The placeholder went through the text escaper like any other leaf.
    let escaped = escape_text(mode, TITLE_PLACEHOLDER);
    text.replacen(&escaped, &format!("{mode} showcase"), 1)
}
