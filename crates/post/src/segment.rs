use serde::Serialize;
use tracing::debug;

/// Sentinel substring marking the first line of the closing CTA block
pub const CTA_SENTINEL: &str = "40년 현장에서 증명된 해답";

/// Prefix of the homepage line inside the CTA block
pub const HOMEPAGE_PREFIX: &str = "홈페이지:";

/// Label rendered for the homepage hyperlink
pub const CTA_LINK_LABEL: &str = "지금 바로 문의하기";

/// Honorific openers that mark line 1 as body copy rather than a subtitle
const HONORIFIC_PREFIXES: &[&str] = &["사장님", "대표님"];

/// One line of the call-to-action block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CtaLine {
    /// Centered emphasized paragraph
    Text { text: String },

    /// Homepage hyperlink
    Link { url: String, label: String },
}

/// Structured view of a generated post, recomputed from raw text on every
/// successful generation and never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPost {
    /// First non-blank line
    pub title: String,

    /// Second non-blank line, unless it opens the body or the CTA
    pub subtitle: Option<String>,

    /// Main content paragraphs, in order
    pub body: Vec<String>,

    /// Call-to-action block, in order
    pub cta: Vec<CtaLine>,
}

/// Split raw response text into title, optional subtitle, body paragraphs
/// and the call-to-action block.
///
/// Returns None when the text has no non-blank lines (nothing to render).
/// Deterministic: identical input always yields the identical decomposition.
pub fn parse_post(raw: &str) -> Option<ParsedPost> {
    let lines: Vec<&str> = raw
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let title = (*lines.first()?).to_string();

    let subtitle = match lines.get(1) {
        Some(second) if takes_subtitle_slot(second) => Some((*second).to_string()),
        _ => None,
    };

    let body_start = if subtitle.is_some() { 2 } else { 1 };
    let candidates = &lines[body_start..];

    let (main, cta) = match candidates.iter().position(|line| line.contains(CTA_SENTINEL)) {
        Some(idx) => {
            debug!("CTA sentinel found at body line {}", idx);
            candidates.split_at(idx)
        }
        None => (candidates, &[] as &[&str]),
    };

    Some(ParsedPost {
        title,
        subtitle,
        body: main.iter().map(|line| (*line).to_string()).collect(),
        cta: cta.iter().map(|line| cta_line(line)).collect(),
    })
}

/// Line 1 is a subtitle unless it opens the CTA homepage line or starts
/// with an honorific body opener
fn takes_subtitle_slot(line: &str) -> bool {
    !line.starts_with(HOMEPAGE_PREFIX)
        && !HONORIFIC_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

/// A CTA line is a centered paragraph, except the homepage line which
/// renders as a single hyperlink to the address after the prefix
fn cta_line(line: &str) -> CtaLine {
    match line.strip_prefix(HOMEPAGE_PREFIX) {
        Some(rest) => CtaLine::Link {
            url: rest.trim_start().to_string(),
            label: CTA_LINK_LABEL.to_string(),
        },
        None => CtaLine::Text {
            text: line.to_string(),
        },
    }
}
