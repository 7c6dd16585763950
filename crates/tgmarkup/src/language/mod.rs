//! Code-block language tags.
//!
//! Telegram clients highlight `pre` blocks with libprisma grammars, keyed by
//! a canonical lowercase tag (`python`, `markup`, `go-module`, ...). Users
//! and upstream content tend to use aliases instead (`py`, `html`,
//! `go-mod`), so every tag that reaches a [`Node::Pre`](crate::Node::Pre)
//! goes through a [`LanguageRegistry`] first.
//!
//! The registry is an immutable value: build it once (or use
//! [`LanguageRegistry::builtin`]) and share it by reference. Lookups need no
//! synchronization.

mod table;

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{MarkupError, Result};

pub use table::{BUILTIN_OVERRIDES, BUILTIN_ROWS};

/// A canonical language tag.
///
/// Only obtainable from a [`LanguageRegistry`] or the associated constants,
/// so a `Language` in hand is always a tag the registry recognized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(Cow<'static, str>);

impl Language {
    pub const MARKUP: Language = Language::from_static("markup");
    pub const CSS: Language = Language::from_static("css");
    pub const JAVASCRIPT: Language = Language::from_static("javascript");
    pub const TYPESCRIPT: Language = Language::from_static("typescript");
    pub const PYTHON: Language = Language::from_static("python");
    pub const GO: Language = Language::from_static("go");
    pub const GO_MODULE: Language = Language::from_static("go-module");
    pub const RUST: Language = Language::from_static("rust");
    pub const C: Language = Language::from_static("c");
    pub const CPP: Language = Language::from_static("cpp");
    pub const CSHARP: Language = Language::from_static("csharp");
    pub const JAVA: Language = Language::from_static("java");
    pub const KOTLIN: Language = Language::from_static("kotlin");
    pub const SWIFT: Language = Language::from_static("swift");
    pub const RUBY: Language = Language::from_static("ruby");
    pub const PHP: Language = Language::from_static("php");
    pub const BASH: Language = Language::from_static("bash");
    pub const SQL: Language = Language::from_static("sql");
    pub const JSON: Language = Language::from_static("json");
    pub const YAML: Language = Language::from_static("yaml");
    pub const TOML: Language = Language::from_static("toml");
    pub const MARKDOWN: Language = Language::from_static("markdown");
    pub const DIFF: Language = Language::from_static("diff");
    pub const DOCKER: Language = Language::from_static("docker");

    const fn from_static(tag: &'static str) -> Self {
        Language(Cow::Borrowed(tag))
    }

    /// The canonical tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Language {
    type Error = MarkupError;

    /// Resolves through the built-in registry.
    fn try_from(input: String) -> Result<Self> {
        LanguageRegistry::builtin().resolve(&input)
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.0.into_owned()
    }
}

static BUILTIN: LazyLock<LanguageRegistry> = LazyLock::new(|| {
    let registry = LanguageRegistry::from_rows(BUILTIN_ROWS).with_overrides(
        BUILTIN_OVERRIDES
            .iter()
            .map(|&(alias, tag)| (alias, Language::from_static(tag))),
    );
    tracing::debug!(
        aliases = registry.len(),
        languages = registry.canonical_tags().len(),
        "built language registry"
    );
    registry
});

/// Alias → canonical tag lookup table.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    aliases: HashMap<String, Language>,
}

impl LanguageRegistry {
    /// The registry built from the libprisma table and built-in overrides.
    ///
    /// Built on first use; every caller sees the fully populated table.
    pub fn builtin() -> &'static LanguageRegistry {
        &BUILTIN
    }

    /// Build a registry from `(display name, "alias,alias,...")` rows.
    ///
    /// The first non-empty alias of a row is its canonical tag. Aliases are
    /// trimmed and lowercased; empty ones are skipped, as are rows with no
    /// alias at all. A later row wins when two rows share an alias.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a (&'a str, &'a str)>,
    {
        let mut aliases = HashMap::with_capacity(512);
        for &(_display, csv) in rows {
            let mut canonical: Option<Language> = None;
            for token in csv.split(',') {
                let key = fold(token);
                if key.is_empty() {
                    continue;
                }
                let tag = canonical
                    .get_or_insert_with(|| Language(Cow::Owned(key.clone())))
                    .clone();
                aliases.insert(key, tag);
            }
        }
        Self { aliases }
    }

    /// Build a registry from tab-separated text, one
    /// `DisplayName<TAB>alias,alias,...` row per line.
    ///
    /// Lines without exactly one tab are skipped.
    pub fn parse_table(text: &str) -> Self {
        let rows: Vec<(&str, &str)> = text
            .lines()
            .filter_map(|line| {
                let mut parts = line.split('\t');
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(display), Some(csv), None) => Some((display, csv)),
                    _ => None,
                }
            })
            .collect();
        Self::from_rows(&rows)
    }

    /// Merge hand-maintained aliases into the table, replacing existing keys.
    pub fn with_overrides<K, I>(mut self, overrides: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Language)>,
    {
        for (alias, tag) in overrides {
            let key = fold(alias.as_ref());
            if !key.is_empty() {
                self.aliases.insert(key, tag);
            }
        }
        self
    }

    /// Normalize a name or alias to its canonical tag.
    ///
    /// Input is trimmed and case-folded. Returns `None` for empty or
    /// unregistered input.
    pub fn normalize(&self, input: &str) -> Option<Language> {
        let key = fold(input);
        if key.is_empty() {
            return None;
        }
        self.aliases.get(&key).cloned()
    }

    /// Like [`normalize`](Self::normalize), but unknown input is an error.
    pub fn resolve(&self, input: &str) -> Result<Language> {
        self.normalize(input)
            .ok_or_else(|| MarkupError::UnknownLanguage {
                input: input.to_owned(),
            })
    }

    /// Resolve a tag the caller has already validated.
    ///
    /// # Panics
    ///
    /// Panics if `input` is not a registered name or alias.
    pub fn must_resolve(&self, input: &str) -> Language {
        match self.resolve(input) {
            Ok(lang) => lang,
            Err(e) => panic!("{e}"),
        }
    }

    /// Whether `input` normalizes to some tag.
    pub fn contains(&self, input: &str) -> bool {
        self.normalize(input).is_some()
    }

    /// All distinct canonical tags, sorted ascending.
    pub fn canonical_tags(&self) -> Vec<Language> {
        self.aliases
            .values()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every alias that resolves to `tag`, sorted.
    pub fn aliases_of(&self, tag: &Language) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, t)| *t == tag)
            .map(|(alias, _)| alias.as_str())
            .collect();
        out.sort_unstable();
        out
    }

    /// Number of registered aliases (canonical tags included).
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

fn fold(input: &str) -> String {
    input.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> &'static LanguageRegistry {
        LanguageRegistry::builtin()
    }

    #[test]
    fn resolves_known_aliases() {
        let cases = [
            ("html", Language::MARKUP),
            ("xml", Language::MARKUP),
            ("js", Language::JAVASCRIPT),
            ("ts", Language::TYPESCRIPT),
            ("py", Language::PYTHON),
            ("go", Language::GO),
            ("go-mod", Language::GO_MODULE),
            ("yml", Language::YAML),
            ("c++", Language::CPP),
            ("dockerfile", Language::DOCKER),
        ];
        for (input, want) in cases {
            assert_eq!(builtin().normalize(input), Some(want), "input {input:?}");
        }
        assert_eq!(builtin().normalize("scss").unwrap().as_str(), "scss");
        assert_eq!(builtin().normalize("objc").unwrap().as_str(), "objectivec");
        assert_eq!(builtin().normalize("razor").unwrap().as_str(), "cshtml");
    }

    #[test]
    fn normalize_is_case_insensitive_and_trimmed() {
        assert_eq!(builtin().normalize("PY"), Some(Language::PYTHON));
        assert_eq!(builtin().normalize("  Python \n"), Some(Language::PYTHON));
        assert_eq!(builtin().normalize("HTML"), Some(Language::MARKUP));
    }

    #[test]
    fn not_found_outcomes() {
        assert_eq!(builtin().normalize(""), None);
        assert_eq!(builtin().normalize("   "), None);
        assert_eq!(builtin().normalize("not-a-real-language"), None);
        assert!(!builtin().contains("not-a-real-language"));
    }

    #[test]
    fn resolve_reports_input_as_given() {
        let err = builtin().resolve(" Klingon ").unwrap_err();
        assert!(matches!(err, MarkupError::UnknownLanguage { ref input } if input == " Klingon "));
    }

    #[test]
    #[should_panic(expected = "unsupported language")]
    fn must_resolve_panics_on_unknown() {
        builtin().must_resolve("not-a-real-language");
    }

    #[test]
    fn must_resolve_returns_tag() {
        assert_eq!(builtin().must_resolve("Rust"), Language::RUST);
    }

    #[test]
    fn alias_equivalence() {
        for tag in builtin().canonical_tags() {
            for alias in builtin().aliases_of(&tag) {
                assert_eq!(builtin().normalize(alias).as_ref(), Some(&tag), "alias {alias:?}");
            }
        }
    }

    #[test]
    fn canonical_tags_sorted_and_unique() {
        let tags = builtin().canonical_tags();
        assert_eq!(tags.len(), BUILTIN_ROWS.len());
        assert!(tags.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn every_canonical_tag_resolves_to_itself() {
        for tag in builtin().canonical_tags() {
            assert_eq!(builtin().normalize(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn constants_are_registered() {
        let consts = [
            Language::MARKUP,
            Language::CSS,
            Language::JAVASCRIPT,
            Language::TYPESCRIPT,
            Language::PYTHON,
            Language::GO,
            Language::GO_MODULE,
            Language::RUST,
            Language::C,
            Language::CPP,
            Language::CSHARP,
            Language::JAVA,
            Language::KOTLIN,
            Language::SWIFT,
            Language::RUBY,
            Language::PHP,
            Language::BASH,
            Language::SQL,
            Language::JSON,
            Language::YAML,
            Language::TOML,
            Language::MARKDOWN,
            Language::DIFF,
            Language::DOCKER,
        ];
        for lang in consts {
            assert_eq!(builtin().normalize(lang.as_str()), Some(lang));
        }
    }

    #[test]
    fn first_non_empty_token_is_canonical() {
        let rows = [("Odd", " , OdD ,odd-alias"), ("Empty", " , ")];
        let registry = LanguageRegistry::from_rows(&rows);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.normalize("odd-alias").unwrap().as_str(), "odd");
        assert!(registry.normalize("").is_none());
    }

    #[test]
    fn overrides_win_on_collision() {
        let registry = LanguageRegistry::from_rows(&[("Alpha", "alpha,a"), ("Beta", "beta")])
            .with_overrides([("a", Language::from_static("beta"))]);
        assert_eq!(registry.normalize("a").unwrap().as_str(), "beta");
        assert_eq!(registry.canonical_tags().len(), 2);
    }

    #[test]
    fn parse_table_skips_malformed_rows() {
        let text = "Foo\tfoo,f\nno tab here\nBar\tbar\textra\n\nBaz\tbaz";
        let registry = LanguageRegistry::parse_table(text);
        let tags: Vec<String> = registry.canonical_tags().into_iter().map(String::from).collect();
        assert_eq!(tags, ["baz", "foo"]);
        assert_eq!(registry.aliases_of(&registry.must_resolve("f")), ["f", "foo"]);
    }

    #[test]
    fn serde_resolves_aliases() {
        let lang: Language = serde_json::from_str("\"PY\"").unwrap();
        assert_eq!(lang, Language::PYTHON);
        assert_eq!(serde_json::to_string(&lang).unwrap(), "\"python\"");
        assert!(serde_json::from_str::<Language>("\"klingon\"").is_err());
    }
}
