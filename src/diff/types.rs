use serde::{Deserialize, Serialize};
use std::fmt;

/// How the two query texts are split before they are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    #[default]
    Lines,
    Words,
    Characters,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [
        Granularity::Lines,
        Granularity::Words,
        Granularity::Characters,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Granularity::Lines => "Lines",
            Granularity::Words => "Words",
            Granularity::Characters => "Characters",
        }
    }

    /// Plural noun used in summaries, e.g. "12 unchanged lines"
    pub fn unit(self) -> &'static str {
        match self {
            Granularity::Lines => "lines",
            Granularity::Words => "words",
            Granularity::Characters => "characters",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffType {
    Unchanged,
    Added,
    Removed,
    Modified,
}

impl DiffType {
    pub fn block_kind(self) -> BlockKind {
        match self {
            DiffType::Unchanged => BlockKind::Unchanged,
            DiffType::Added | DiffType::Removed | DiffType::Modified => BlockKind::Changed,
        }
    }
}

/// One aligned position of the two token sequences.
///
/// A side that ran out of tokens is a placeholder: empty content and no position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffPair {
    pub diff_type: DiffType,
    pub original: String,
    pub modified: String,
    /// 1-based index of the original token, `None` for a placeholder
    pub original_position: Option<usize>,
    /// 1-based index of the modified token, `None` for a placeholder
    pub modified_position: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    Changed,
    Unchanged,
}

/// A run of consecutive pairs sharing the same [`BlockKind`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffBlock {
    pub kind: BlockKind,
    /// 1-based row of the first pair within the aligned sequence
    pub start_position: usize,
    /// 1-based row of the last pair, inclusive
    pub end_position: usize,
    pub pairs: Vec<DiffPair>,
}

impl DiffBlock {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
}

/// Everything the view needs for one comparison
#[derive(Debug, Clone, Serialize)]
pub struct DiffResult {
    pub granularity: Granularity,
    pub pairs: Vec<DiffPair>,
    pub blocks: Vec<DiffBlock>,
    pub stats: DiffStats,
}

impl DiffResult {
    pub fn is_identical(&self) -> bool {
        self.stats.added == 0 && self.stats.removed == 0 && self.stats.modified == 0
    }
}
