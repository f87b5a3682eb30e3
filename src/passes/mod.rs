//! Rewrite passes.
//!
//! A pass is an ordered table of regex [`Rule`]s applied to the full text of
//! a stylesheet. Two passes are built in:
//!
//! - [`compat`]: neutralizes CSS features the mini-program runtime does not
//!   support (`patch` command).
//! - [`repair`]: collapses nested or duplicated comment markers left by
//!   repeated patching (`repair` command).
//!
//! Use [`all_passes`] to obtain both and [`all_rules`] to list every rule
//! they define.

pub mod compat;
pub mod repair;

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// How a [`Rule`] builds its replacement text.
pub enum Rewrite {
    /// A [`regex`] replacement template (`$1`, `${name}`).
    Template(&'static str),
    /// A function of the match, for replacements a template cannot express.
    With(fn(&Captures) -> String),
}

/// Where a [`Rule`] is allowed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Anywhere,
    /// The pattern starts with `(?m)^`. A match at the very start of a text
    /// fragment is only accepted when the fragment itself begins a line.
    LineStart,
}

/// A single find/replace rule.
pub struct Rule {
    /// Unique rule identifier (e.g., `"patch/gap"`).
    pub id: &'static str,
    pub regex: &'static LazyLock<Regex>,
    pub rewrite: Rewrite,
    pub anchor: Anchor,
    /// Short description of what the rule rewrites.
    pub message: &'static str,
    /// Sample input and the output the rule produces for it.
    pub example: (&'static str, &'static str),
}

impl Rule {
    /// Applies the rule to every non-overlapping match in `text`.
    ///
    /// `line_start` tells a [`Anchor::LineStart`] rule whether offset 0 of
    /// `text` is the beginning of a line in the enclosing document.
    ///
    /// A replacement that opens a comment right after a `*` in `text` gets a
    /// leading space, so the two never fuse into a stray `*/`.
    pub fn apply<'t>(&self, text: &'t str, line_start: bool) -> Cow<'t, str> {
        self.regex.replace_all(text, |caps: &Captures| {
            let (whole, start) = caps.get(0).map_or(("", 0), |m| (m.as_str(), m.start()));
            if self.anchor == Anchor::LineStart && start == 0 && !line_start {
                return whole.to_string();
            }
            let mut dst = match self.rewrite {
                Rewrite::Template(template) => {
                    let mut dst = String::new();
                    caps.expand(template, &mut dst);
                    dst
                }
                Rewrite::With(f) => f(caps),
            };
            // A match that already began with "/*" was fused in the input too.
            if dst.starts_with("/*") && !whole.starts_with("/*") && text[..start].ends_with('*') {
                dst.insert(0, ' ');
            }
            dst
        })
    }
}

/// The result of running a pass over one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub content: String,
    /// Ids of the rules that changed the text, in rule order.
    pub applied: Vec<&'static str>,
}

/// A rewrite pass over stylesheet text.
///
/// Implementers only need to supply the rule table; the default
/// [`transform`](Pass::transform) applies every rule in order to the whole
/// text.
pub trait Pass {
    /// Returns the pass name, which is also its CLI subcommand and config
    /// section (`"patch"`, `"repair"`).
    fn name(&self) -> &'static str;

    /// Returns a short, human-readable description of the pass.
    fn description(&self) -> &'static str;

    /// Returns the ordered rule table. Later rules see the output of earlier
    /// ones.
    fn rules(&self) -> &'static [Rule];

    /// Applies the pass to a full file content.
    fn transform(&self, content: &str) -> Transformed {
        let rules = self.rules();
        let mut hits = vec![false; rules.len()];
        let content = apply_rules(rules, content, true, &mut hits);
        Transformed {
            content,
            applied: applied_ids(rules, &hits),
        }
    }
}

/// Runs `rules` in order over `text`, setting `hits[i]` when rule `i`
/// changed something.
pub(crate) fn apply_rules(rules: &[Rule], text: &str, line_start: bool, hits: &mut [bool]) -> String {
    let mut current = text.to_string();
    for (rule, hit) in rules.iter().zip(hits.iter_mut()) {
        let next = match rule.apply(&current, line_start) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(s) => s,
        };
        // Owned output can still be identical when every match was rejected
        // by the line anchor.
        if next != current {
            *hit = true;
            current = next;
        }
    }
    current
}

pub(crate) fn applied_ids(rules: &[Rule], hits: &[bool]) -> Vec<&'static str> {
    rules
        .iter()
        .zip(hits)
        .filter(|(_, hit)| **hit)
        .map(|(rule, _)| rule.id)
        .collect()
}

/// Returns every built-in pass, in the order they are meant to be run.
pub fn all_passes() -> Vec<Box<dyn Pass>> {
    vec![Box::new(compat::CompatPatcher), Box::new(repair::CommentRepair)]
}

/// Looks up a built-in pass by name.
pub fn find_pass(name: &str) -> Option<Box<dyn Pass>> {
    all_passes().into_iter().find(|p| p.name() == name)
}

/// Metadata for a single rule.
///
/// Returned by [`all_rules`] and used by the `list-rules` and `explain`
/// CLI commands.
pub struct RuleInfo {
    /// Unique rule identifier (e.g., `"patch/gap"`).
    pub id: &'static str,
    /// Pass that owns this rule.
    pub pass: &'static str,
    /// Short description of what the rule rewrites.
    pub message: &'static str,
    /// The regex the rule matches.
    pub pattern: &'static str,
    /// Sample input for the rule.
    pub before: &'static str,
    /// What the rule turns [`before`](RuleInfo::before) into.
    pub after: &'static str,
}

/// Aggregates [`RuleInfo`] from every pass, in pass then rule order.
pub fn all_rules() -> Vec<RuleInfo> {
    all_passes()
        .iter()
        .flat_map(|pass| {
            let name = pass.name();
            pass.rules().iter().map(move |rule| RuleInfo {
                id: rule.id,
                pass: name,
                message: rule.message,
                pattern: rule.regex.as_str(),
                before: rule.example.0,
                after: rule.example.1,
            })
        })
        .collect()
}
