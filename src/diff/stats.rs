use super::types::{DiffBlock, DiffStats, DiffType};

impl DiffStats {
    /// Tally pair types across all blocks
    pub fn from_blocks(blocks: &[DiffBlock]) -> Self {
        let mut stats = DiffStats::default();

        for pair in blocks.iter().flat_map(|b| b.pairs.iter()) {
            match pair.diff_type {
                DiffType::Added => stats.added += 1,
                DiffType::Removed => stats.removed += 1,
                DiffType::Modified => stats.modified += 1,
                DiffType::Unchanged => stats.unchanged += 1,
            }
        }

        stats
    }

    pub fn changed(&self) -> usize {
        self.added + self.removed + self.modified
    }
}
