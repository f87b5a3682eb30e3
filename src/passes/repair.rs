//! Nested-comment repair.
//!
//! Collapses the comment artifacts produced by patching a file more than once
//! or by hand edits around an earlier patch. The specific rules run first; the
//! last two are blunt fallbacks that also merge legitimately adjacent comments
//! separated by a single space.

use crate::passes::{Anchor, Pass, Rewrite, Rule};
use regex::Regex;
use std::sync::LazyLock;

static RE_UNIT_NEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/\* 替换[^/]*/\* was [^/]*/\* was [^/]*\*/ \*/[^/]*\*/").unwrap()
});

static RE_VAR_NEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/\* /\* var\(\) removed for compatibility \*/ \*/").unwrap()
});

// Accepts both the hand-written marker and the one emitted by the patch pass.
static RE_GAP_WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"/\* gap(?: removed - not supported|: removed for compatibility) \*/ /\* gap:\s*([^;]*;)",
    )
    .unwrap()
});

static RE_BACKDROP_NEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/\* /\* backdrop-filter: blur removed for compatibility \*/ \*/").unwrap()
});

static RE_PLACEHOLDER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"/\* 小程序不支持/\* ::placeholder removed for compatibility \*/ /\* ::placeholder[^}]*\}[^/]*\*/",
    )
    .unwrap()
});

static RE_MEDIA_WRAPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\* @media - not supported \*/ /\* @media").unwrap());

static RE_DOUBLE_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\* /\*").unwrap());

static RE_DOUBLE_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*/ \*/").unwrap());

static RULES: &[Rule] = &[
    Rule {
        id: "repair/unit-comment",
        regex: &RE_UNIT_NEST,
        rewrite: Rewrite::Template("/* 替换单位，小程序不支持vh单位 */"),
        anchor: Anchor::Anywhere,
        message: "Triple-nested viewport-unit note collapsed to a single comment",
        example: (
            "/* 替换1334rpx /* was 1334rpx /* was 100vh */ */，高度 */",
            "/* 替换单位，小程序不支持vh单位 */",
        ),
    },
    Rule {
        id: "repair/var",
        regex: &RE_VAR_NEST,
        rewrite: Rewrite::Template("/* var() removed for compatibility */"),
        anchor: Anchor::Anywhere,
        message: "Doubled var() removal note collapsed",
        example: (
            "/* /* var() removed for compatibility */ */",
            "/* var() removed for compatibility */",
        ),
    },
    Rule {
        id: "repair/gap",
        regex: &RE_GAP_WRAPPER,
        rewrite: Rewrite::Template("/* gap: ${1} removed for compatibility */"),
        anchor: Anchor::Anywhere,
        message: "Open gap wrapper closed into a single trailing comment",
        example: (
            "/* gap: removed for compatibility */ /* gap: 8px;",
            "/* gap: 8px; removed for compatibility */",
        ),
    },
    Rule {
        id: "repair/backdrop-filter",
        regex: &RE_BACKDROP_NEST,
        rewrite: Rewrite::Template("/* backdrop-filter: blur removed for compatibility */"),
        anchor: Anchor::Anywhere,
        message: "Doubled backdrop-filter removal note collapsed",
        example: (
            "/* /* backdrop-filter: blur removed for compatibility */ */",
            "/* backdrop-filter: blur removed for compatibility */",
        ),
    },
    Rule {
        id: "repair/placeholder",
        regex: &RE_PLACEHOLDER_BLOCK,
        rewrite: Rewrite::Template("/* 小程序不支持::placeholder伪元素，通过placeholder-style属性处理 */"),
        anchor: Anchor::Anywhere,
        message: "Commented-out ::placeholder block replaced by a single note",
        example: (
            "/* 小程序不支持/* ::placeholder removed for compatibility */ /* ::placeholder { color: #999; } */",
            "/* 小程序不支持::placeholder伪元素，通过placeholder-style属性处理 */",
        ),
    },
    Rule {
        id: "repair/media",
        regex: &RE_MEDIA_WRAPPER,
        rewrite: Rewrite::Template("/* @media removed for compatibility"),
        anchor: Anchor::Anywhere,
        message: "Doubled @media wrapper collapsed",
        example: (
            "/* @media - not supported */ /* @media (max-width: 600px) {",
            "/* @media removed for compatibility (max-width: 600px) {",
        ),
    },
    Rule {
        id: "repair/double-open",
        regex: &RE_DOUBLE_OPEN,
        rewrite: Rewrite::Template("/*"),
        anchor: Anchor::Anywhere,
        message: "Remaining \"/* /*\" collapsed to a single comment open",
        example: ("/* /* note */", "/* note */"),
    },
    Rule {
        id: "repair/double-close",
        regex: &RE_DOUBLE_CLOSE,
        rewrite: Rewrite::Template("*/"),
        anchor: Anchor::Anywhere,
        message: "Remaining \"*/ */\" collapsed to a single comment close",
        example: ("/* note */ */", "/* note */"),
    },
];

pub struct CommentRepair;

impl Pass for CommentRepair {
    fn name(&self) -> &'static str {
        "repair"
    }

    fn description(&self) -> &'static str {
        "Collapse nested and duplicated comment markers"
    }

    fn rules(&self) -> &'static [Rule] {
        RULES
    }
}
