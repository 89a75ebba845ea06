//! Name heuristics for screen anchors.
//!
//! Whether a layer *looks like* a header or a tab bar by its name is a
//! convention of whoever drew the design, not geometry. The screen detector
//! only talks to the [`AnchorPredicate`] trait, so the word lists below can
//! be swapped for anything else (a configurable list, a learned model)
//! without touching the geometric checks.

use crate::node::SourceNode;

/// Which end of a screen an anchor candidate sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorRole {
    /// Top bar.
    Header,
    /// Bottom bar.
    Footer,
}

/// Decides whether a node's identity marks it as a header or footer.
pub trait AnchorPredicate {
    /// Return `true` if `node` is named or tagged like an anchor of `role`.
    fn matches(&self, role: AnchorRole, node: &SourceNode) -> bool;
}

impl<F> AnchorPredicate for F
where
    F: Fn(AnchorRole, &SourceNode) -> bool,
{
    fn matches(&self, role: AnchorRole, node: &SourceNode) -> bool {
        self(role, node)
    }
}

/// Case-insensitive substring match against two word lists.
///
/// # Example
///
/// ```rust
/// use stackfit_layout::geometry::BoundingBox;
/// use stackfit_layout::lexicon::{AnchorPredicate, AnchorRole, NameLexicon};
/// use stackfit_layout::node::SourceNode;
///
/// let lexicon = NameLexicon::default();
/// let tabs = SourceNode::container("1", "Bottom Tabs", BoundingBox::new(0.0, 0.0, 1.0, 1.0));
///
/// assert!(lexicon.matches(AnchorRole::Footer, &tabs));
/// assert!(!lexicon.matches(AnchorRole::Header, &tabs));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameLexicon {
    header_words: Vec<String>,
    footer_words: Vec<String>,
}

/// Stock header words.
pub const HEADER_WORDS: &[&str] = &["header", "nav", "top"];

/// Stock footer words.
pub const FOOTER_WORDS: &[&str] = &["navigation", "tab", "bar", "bottom"];

impl NameLexicon {
    /// Build a lexicon from custom word lists. Words are lower-cased.
    pub fn new<H, F>(header_words: H, footer_words: F) -> Self
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        Self {
            header_words: lower_all(header_words),
            footer_words: lower_all(footer_words),
        }
    }

    /// Words checked for [`AnchorRole::Header`].
    pub fn header_words(&self) -> &[String] {
        &self.header_words
    }

    /// Words checked for [`AnchorRole::Footer`].
    pub fn footer_words(&self) -> &[String] {
        &self.footer_words
    }
}

impl Default for NameLexicon {
    fn default() -> Self {
        Self::new(HEADER_WORDS, FOOTER_WORDS)
    }
}

impl AnchorPredicate for NameLexicon {
    fn matches(&self, role: AnchorRole, node: &SourceNode) -> bool {
        let words = match role {
            AnchorRole::Header => &self.header_words,
            AnchorRole::Footer => &self.footer_words,
        };
        let name = node.name.to_lowercase();
        words.iter().any(|w| name.contains(w.as_str()))
    }
}

fn lower_all<I>(words: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
