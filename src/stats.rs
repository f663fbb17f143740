//! Density Statistics
//!
//! Builds a flat arena over one subtree and computes, for every element in
//! it, the counts the density scorer works from:
//!
//! - `ti`: length of the node's cleaned text (fragments trimmed, inline
//!   whitespace collapsed, joined with `\n`), boosted by half for
//!   content-looking tags and classes
//! - `lti`: length of the text inside descendant `<a>` elements
//! - `tgi` / `ltgi`: number of descendant elements / descendant `<a>` elements
//!
//! Nodes are numbered in pre-order during a single walk and every statistic is
//! keyed by that index. Counts are accumulated bottom-up in one reverse pass:
//! because indices are pre-order, all descendants of a node carry larger
//! indices than the node itself. The cleaned text fragments of a subtree form
//! one contiguous run of the fragment list, so text lengths and punctuation
//! counts come from prefix sums instead of per-node string building.

use crate::dom::{self, NodeRef};
use crate::options::Options;
use crate::patterns::{HIGH_WEIGHT_KEYWORD, INLINE_WHITESPACE, PUNCTUATION};

/// Index of an element inside one [`StatsArena`].
///
/// Only meaningful for the arena that produced it.
pub type NodeIndex = usize;

/// Per-node statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeStats {
    /// `ti`, after the high-weight boost.
    pub text_len: usize,
    /// `lti`
    pub link_text_len: usize,
    /// `tgi`
    pub tag_count: usize,
    /// `ltgi`
    pub link_tag_count: usize,
    /// Descendant `<p>` elements plus direct child text nodes.
    pub p_tag_count: usize,
    /// Punctuation marks in the node's cleaned text.
    pub punctuation_count: usize,
}

#[derive(Debug)]
struct ArenaNode {
    parent: Option<NodeIndex>,
    tag: String,
    high_weight: bool,
    frag_start: usize,
    frag_count: usize,
    stats: NodeStats,
}

/// Statistics for every element of one subtree.
#[derive(Debug)]
pub struct StatsArena {
    nodes: Vec<ArenaNode>,
    fragments: Vec<String>,
    /// `char_prefix[i]` = characters in `fragments[..i]`.
    char_prefix: Vec<usize>,
    /// `punct_prefix[i]` = punctuation marks in `fragments[..i]`.
    punct_prefix: Vec<usize>,
}

fn count_punctuation(text: &str) -> usize {
    text.chars().filter(|c| PUNCTUATION.contains(*c)).count()
}

fn is_high_weight(node: &NodeRef, tag: &str) -> bool {
    let class = dom::get_attribute(node, "class").unwrap_or_default();
    HIGH_WEIGHT_KEYWORD.is_match(tag) || HIGH_WEIGHT_KEYWORD.is_match(&class)
}

impl StatsArena {
    /// Walk the subtree under `root` and compute statistics for each element.
    #[must_use]
    pub fn build(root: &NodeRef, options: &Options) -> Self {
        let mut arena = StatsArena {
            nodes: Vec::new(),
            fragments: Vec::new(),
            char_prefix: vec![0],
            punct_prefix: vec![0],
        };
        if !root.is_element() {
            return arena;
        }

        // Raw counts that only make sense during accumulation.
        let mut is_link: Vec<bool> = Vec::new();
        let mut is_para: Vec<bool> = Vec::new();
        let mut direct_text: Vec<usize> = Vec::new();

        // (node, parent index, text is visible)
        let mut stack: Vec<(NodeRef, Option<NodeIndex>, bool)> = vec![(*root, None, true)];

        while let Some((node, parent, visible)) = stack.pop() {
            if node.is_text() {
                let Some(p) = parent else { continue };
                direct_text[p] += 1;
                if !visible {
                    continue;
                }
                let text = node.text();
                if let Some(fragment) = dom::clean_fragment(&text, &INLINE_WHITESPACE) {
                    let chars = fragment.chars().count();
                    let punct = count_punctuation(&fragment);
                    arena.char_prefix.push(arena.char_prefix[arena.fragments.len()] + chars);
                    arena.punct_prefix.push(arena.punct_prefix[arena.fragments.len()] + punct);
                    arena.fragments.push(fragment);
                    arena.nodes[p].frag_count += 1;
                }
                continue;
            }
            if !node.is_element() {
                continue;
            }

            let index = arena.nodes.len();
            let tag = dom::tag_name(&node);
            let high_weight = is_high_weight(&node, &tag);
            is_link.push(tag == "a");
            is_para.push(tag == "p");
            direct_text.push(0);
            arena.nodes.push(ArenaNode {
                parent,
                tag,
                high_weight,
                frag_start: arena.fragments.len(),
                frag_count: 0,
                stats: NodeStats::default(),
            });

            let child_visible = visible && !dom::is_invisible(&node);
            let mut children = dom::child_nodes(&node);
            children.reverse();
            stack.extend(children.into_iter().map(|c| (c, Some(index), child_visible)));
        }

        // Bottom-up: fold every node into its parent.
        for index in (0..arena.nodes.len()).rev() {
            let own_chars = arena.range_chars(index);
            let node = &arena.nodes[index];
            let Some(p) = node.parent else { continue };
            let child = node.stats;
            let child_frags = node.frag_count;

            let parent = &mut arena.nodes[p];
            parent.frag_count += child_frags;
            parent.stats.tag_count += 1 + child.tag_count;
            parent.stats.link_tag_count += usize::from(is_link[index]) + child.link_tag_count;
            parent.stats.p_tag_count += usize::from(is_para[index]) + child.p_tag_count;
            parent.stats.link_text_len +=
                if is_link[index] { own_chars } else { 0 } + child.link_text_len;
        }

        // Text lengths need the final fragment ranges; direct text nodes are
        // added last so they do not leak into ancestors.
        for index in 0..arena.nodes.len() {
            let frags = arena.nodes[index].frag_count;
            let mut ti = arena.range_chars(index) + frags.saturating_sub(1);
            if options.boost_high_weight && arena.nodes[index].high_weight {
                ti += ti / 2;
            }
            let start = arena.nodes[index].frag_start;
            let punct = arena.punct_prefix[start + frags] - arena.punct_prefix[start];

            let stats = &mut arena.nodes[index].stats;
            stats.text_len = ti;
            stats.punctuation_count = punct;
            stats.p_tag_count += direct_text[index];
        }

        arena
    }

    /// Characters in the node's fragments, without join separators.
    fn range_chars(&self, index: NodeIndex) -> usize {
        let node = &self.nodes[index];
        self.char_prefix[node.frag_start + node.frag_count] - self.char_prefix[node.frag_start]
    }

    /// Number of elements in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Statistics of one node.
    #[must_use]
    pub fn stats(&self, index: NodeIndex) -> &NodeStats {
        &self.nodes[index].stats
    }

    /// Tag name of one node.
    #[must_use]
    pub fn tag(&self, index: NodeIndex) -> &str {
        &self.nodes[index].tag
    }

    /// Cleaned text of one node: its fragments joined with `\n`.
    #[must_use]
    pub fn text(&self, index: NodeIndex) -> String {
        let node = &self.nodes[index];
        self.fragments[node.frag_start..node.frag_start + node.frag_count].join("\n")
    }

    /// Statistics of every node in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &NodeStats)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i, &n.stats))
    }
}
