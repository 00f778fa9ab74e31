use super::types::{DiffBlock, DiffPair};

/// Group consecutive pairs into blocks of changed or unchanged content.
///
/// Added, removed and modified pairs all count as changed, so a removal followed by
/// an addition lands in the same block.
pub fn group(pairs: &[DiffPair]) -> Vec<DiffBlock> {
    let mut blocks: Vec<DiffBlock> = Vec::new();

    for (idx, pair) in pairs.iter().enumerate() {
        let row = idx + 1;
        let kind = pair.diff_type.block_kind();

        match blocks.last_mut() {
            Some(block) if block.kind == kind => {
                block.pairs.push(pair.clone());
                block.end_position = row;
            }
            _ => blocks.push(DiffBlock {
                kind,
                start_position: row,
                end_position: row,
                pairs: vec![pair.clone()],
            }),
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::align::align;
    use crate::diff::types::BlockKind;

    #[test]
    fn no_pairs_no_blocks() {
        assert!(group(&[]).is_empty());
    }

    #[test]
    fn changed_types_share_a_block() {
        let pairs = align(&["a", "x", "y"], &["a", "z"]);
        // unchanged, modified, removed
        let blocks = group(&pairs);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind, BlockKind::Unchanged);
        assert_eq!(blocks[1].kind, BlockKind::Changed);
        assert_eq!(blocks[1].len(), 2);
        assert_eq!((blocks[1].start_position, blocks[1].end_position), (2, 3));
    }

    #[test]
    fn blocks_alternate_and_cover_every_row() {
        let pairs = align(&["a", "b", "c", "d", "e"], &["a", "B", "c", "d", "E"]);
        let blocks = group(&pairs);
        let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Unchanged,
                BlockKind::Changed,
                BlockKind::Unchanged,
                BlockKind::Changed
            ]
        );

        let mut next_row = 1;
        for block in &blocks {
            assert_eq!(block.start_position, next_row);
            assert_eq!(block.end_position - block.start_position + 1, block.len());
            next_row = block.end_position + 1;
        }
        assert_eq!(next_row, pairs.len() + 1);
    }

    #[test]
    fn flattening_blocks_restores_pairs() {
        let pairs = align(&["a", "b", "c"], &["a", "x", "c", "d"]);
        let flattened: Vec<DiffPair> = group(&pairs)
            .into_iter()
            .flat_map(|b| b.pairs)
            .collect();
        assert_eq!(flattened, pairs);
    }
}
