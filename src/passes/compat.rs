//! Compatibility patcher.
//!
//! Rewrites viewport units to `rpx` and comments out `gap`, `@media`,
//! `::placeholder` and `var()`, leaving the original construct visible in a
//! comment for manual review.
//!
//! Rules only touch code that was outside comments in the input, which makes
//! the pass idempotent: a second run finds every rewritten construct inside
//! a comment and leaves the file alone.

use crate::comments::{segments, SegmentKind};
use crate::passes::{applied_ids, apply_rules, Anchor, Pass, Rewrite, Rule, Transformed};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_VIEWPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d*\.?\d+)(vh|vw)").unwrap());

static RE_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([ \t]*)gap\s*:").unwrap());

static RE_MEDIA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([ \t]*)@media").unwrap());

static RE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"::placeholder").unwrap());

// Arguments stop at the first ')', so nested calls like var(--a, calc(1px))
// leave a stray ')' behind.
static RE_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"var\s*\([^)]+\)").unwrap());

/// Maps a viewport length to `rpx`, keeping the original in a comment.
///
/// `100vh` and `50vh` are the full and half screen height of the 750rpx-wide
/// reference device; every other magnitude keeps its number.
fn viewport_to_rpx(caps: &Captures) -> String {
    let number = &caps[1];
    let unit = &caps[2];
    let rpx = match (number, unit) {
        ("100", "vh") => "1334",
        ("50", "vh") => "667",
        _ => number,
    };
    format!("{rpx}rpx /* was {number}{unit} */")
}

static RULES: &[Rule] = &[
    Rule {
        id: "patch/viewport-units",
        regex: &RE_VIEWPORT,
        rewrite: Rewrite::With(viewport_to_rpx),
        anchor: Anchor::Anywhere,
        message: "vh/vw units are unsupported; rewritten to rpx with the original kept in a comment",
        example: ("height: 100vh;", "height: 1334rpx /* was 100vh */;"),
    },
    Rule {
        id: "patch/gap",
        regex: &RE_GAP,
        rewrite: Rewrite::Template("${1}/* gap: removed for compatibility */ /* gap:"),
        anchor: Anchor::LineStart,
        message: "gap is unsupported; the declaration is commented out",
        example: (
            "  gap: 8px;",
            "  /* gap: removed for compatibility */ /* gap: 8px;",
        ),
    },
    Rule {
        id: "patch/media",
        regex: &RE_MEDIA,
        rewrite: Rewrite::Template("${1}/* @media removed for compatibility */ /* @media"),
        anchor: Anchor::LineStart,
        message: "@media queries are unsupported; the query is commented out",
        example: (
            "@media (max-width: 600px) {",
            "/* @media removed for compatibility */ /* @media (max-width: 600px) {",
        ),
    },
    Rule {
        id: "patch/placeholder",
        regex: &RE_PLACEHOLDER,
        rewrite: Rewrite::Template(
            "/* ::placeholder removed for compatibility */ /* ::placeholder",
        ),
        anchor: Anchor::Anywhere,
        message: "::placeholder is unsupported; use the placeholder-style attribute instead",
        example: (
            "input::placeholder {",
            "input/* ::placeholder removed for compatibility */ /* ::placeholder {",
        ),
    },
    Rule {
        id: "patch/var",
        regex: &RE_VAR,
        rewrite: Rewrite::Template("/* var() removed for compatibility */"),
        anchor: Anchor::Anywhere,
        message: "CSS custom properties are unsupported; var() calls are replaced by a comment",
        example: (
            "background: var(--main-color);",
            "background: /* var() removed for compatibility */;",
        ),
    },
];

pub struct CompatPatcher;

impl Pass for CompatPatcher {
    fn name(&self) -> &'static str {
        "patch"
    }

    fn description(&self) -> &'static str {
        "Rewrite vh/vw to rpx and comment out gap, @media, ::placeholder and var()"
    }

    fn rules(&self) -> &'static [Rule] {
        RULES
    }

    fn transform(&self, content: &str) -> Transformed {
        let mut hits = vec![false; RULES.len()];
        let mut out = String::with_capacity(content.len());

        for segment in segments(content) {
            match segment.kind {
                SegmentKind::Comment => out.push_str(segment.text),
                SegmentKind::Code => out.push_str(&apply_rules(
                    RULES,
                    segment.text,
                    segment.line_start,
                    &mut hits,
                )),
            }
        }

        Transformed {
            content: out,
            applied: applied_ids(RULES, &hits),
        }
    }
}
