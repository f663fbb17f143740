//! Density Scoring and Content Extraction
//!
//! Every element under `<body>` gets a content score combining its text
//! density and symbol density:
//!
//! ```text
//!            ti - lti                         ti - lti
//! density = ------------------      sbdi = ------------
//!            tgi + 1 - ltgi                    sbi + 1
//!
//! score = density * log10(p_tag_count + 2) * ln(sbdi)
//! ```
//!
//! Narrative prose has long runs of non-link text with ordinary punctuation,
//! navigation has many short links and little punctuation. The highest
//! scoring element is taken as the chapter body.

use crate::dom;
use crate::options::Options;
use crate::stats::{NodeIndex, NodeStats, StatsArena};

/// Score record for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredNode {
    /// Index of the element in its [`StatsArena`].
    pub index: NodeIndex,
    pub density: f64,
    pub symbol_density: f64,
    pub p_tag_count: usize,
    pub score: f64,
}

/// Text density of a node.
///
/// When every descendant element is a link (`tgi == ltgi`) the node is either
/// a pure link block or prose with a couple of inline links. In the second
/// case the non-link text dwarfs the link text (`ti / (lti + 1) > ratio`) and
/// the links are dropped from the denominator; otherwise the density is 0.
#[must_use]
pub fn text_density(stats: &NodeStats, link_skip_ratio: usize) -> f64 {
    let ti = stats.text_len;
    let lti = stats.link_text_len;
    let tgi = stats.tag_count;
    let mut ltgi = stats.link_tag_count;

    if tgi == ltgi {
        if ti / (lti + 1) > link_skip_ratio {
            ltgi = 0;
        } else {
            return 0.0;
        }
    }

    // ltgi <= tgi, so the denominator is at least 1.
    ti.saturating_sub(lti) as f64 / (tgi + 1 - ltgi) as f64
}

/// Symbol density of a node, never 0 so its logarithm stays finite.
#[must_use]
pub fn symbol_density(stats: &NodeStats) -> f64 {
    let sbdi = stats.text_len.saturating_sub(stats.link_text_len) as f64
        / (stats.punctuation_count + 1) as f64;
    if sbdi > 0.0 {
        sbdi
    } else {
        1.0
    }
}

/// Score one node.
#[must_use]
pub fn score_node(index: NodeIndex, stats: &NodeStats, options: &Options) -> ScoredNode {
    let density = text_density(stats, options.link_skip_ratio);
    let symbol_density = symbol_density(stats);
    let score = density * ((stats.p_tag_count + 2) as f64).log10() * symbol_density.ln();

    ScoredNode {
        index,
        density,
        symbol_density,
        p_tag_count: stats.p_tag_count,
        score,
    }
}

/// Score every node of an arena, in pre-order.
#[must_use]
pub fn score_nodes(arena: &StatsArena, options: &Options) -> Vec<ScoredNode> {
    arena
        .iter()
        .map(|(index, stats)| score_node(index, stats, options))
        .collect()
}

/// Highest scoring node; the first one in document order wins ties.
#[must_use]
pub fn best_node(scored: &[ScoredNode]) -> Option<&ScoredNode> {
    scored.iter().fold(None, |best: Option<&ScoredNode>, node| match best {
        Some(b) if node.score <= b.score => Some(b),
        _ => Some(node),
    })
}

/// Extract the main body text of a page.
///
/// Returns an empty string when the document has no scoreable text.
#[must_use]
pub fn extract_content(html: &str, options: &Options) -> String {
    let doc = dom::parse(html);
    let Some(body) = dom::body(&doc) else {
        return String::new();
    };

    let arena = StatsArena::build(&body, options);
    let scored = score_nodes(&arena, options);

    match best_node(&scored) {
        Some(best) => {
            tracing::debug!(
                nodes = scored.len(),
                tag = arena.tag(best.index),
                score = best.score,
                density = best.density,
                "selected content node"
            );
            arena.text(best.index)
        }
        None => String::new(),
    }
}
