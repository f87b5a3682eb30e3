//! Code/comment segmentation for stylesheet text.
//!
//! Stylesheets only have one comment form, `/* ... */`, and it does not nest.
//! [`segments`] splits a text into alternating code and comment runs so that
//! rewrites can be restricted to code. String literals are not tracked: a
//! `/*` inside a quoted string still opens a comment.

/// Kind of a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Code,
    Comment,
}

/// A contiguous run of code or comment text borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    pub text: &'a str,
    /// `true` when the segment starts at the beginning of a line.
    pub line_start: bool,
}

const OPEN: &str = "/*";
const CLOSE: &str = "*/";

/// Splits `text` into code and comment segments.
///
/// Comment segments include their delimiters. An unterminated comment runs to
/// the end of the text. Concatenating the segment texts yields `text` again;
/// empty code runs are omitted.
///
/// # Examples
///
/// ```
/// use wxss_fix::comments::{segments, SegmentKind};
///
/// let segs = segments("a { /* note */ }");
/// let kinds: Vec<_> = segs.iter().map(|s| s.kind).collect();
/// assert_eq!(kinds, [SegmentKind::Code, SegmentKind::Comment, SegmentKind::Code]);
/// assert_eq!(segs[1].text, "/* note */");
/// ```
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(rel_open) = text[pos..].find(OPEN) else {
            out.push(code(text, pos, text.len()));
            break;
        };
        let open = pos + rel_open;
        if open > pos {
            out.push(code(text, pos, open));
        }

        // The close search starts after "/*" so that "/*/" is not a full comment.
        let end = text[open + OPEN.len()..]
            .find(CLOSE)
            .map(|rel| open + OPEN.len() + rel + CLOSE.len())
            .unwrap_or(text.len());
        out.push(Segment {
            kind: SegmentKind::Comment,
            text: &text[open..end],
            line_start: is_line_start(text, open),
        });
        pos = end;
    }

    out
}

fn code(text: &str, start: usize, end: usize) -> Segment<'_> {
    Segment {
        kind: SegmentKind::Code,
        text: &text[start..end],
        line_start: is_line_start(text, start),
    }
}

fn is_line_start(text: &str, offset: usize) -> bool {
    offset == 0 || text[..offset].ends_with('\n')
}
