//! Query comparison core
//!
//! Text goes through three pure steps: [`tokenize`] splits it by the chosen
//! [`Granularity`], [`align`] pairs the tokens of both sides position by position,
//! and [`group`] folds the pairs into changed/unchanged blocks. [`compute_diff`]
//! runs the whole pipeline; the view calls it again on every frame.

mod align;
mod group;
mod stats;
mod tokenize;
mod types;

pub use align::align;
pub use group::group;
pub use tokenize::tokenize;
pub use types::{
    BlockKind, DiffBlock, DiffPair, DiffResult, DiffStats, DiffType, Granularity,
};

/// Compare two query texts at the given granularity
pub fn compute_diff(original: &str, modified: &str, granularity: Granularity) -> DiffResult {
    let original_tokens = tokenize(original, granularity);
    let modified_tokens = tokenize(modified, granularity);

    let pairs = align(&original_tokens, &modified_tokens);
    let blocks = group(&pairs);
    let stats = DiffStats::from_blocks(&blocks);

    DiffResult {
        granularity,
        pairs,
        blocks,
        stats,
    }
}

/// Render pairs as a plain-text listing with `+`/`-` markers, one token per line
pub fn render_text(pairs: &[DiffPair], granularity: Granularity) -> String {
    let show = |token: &str| -> String {
        match granularity {
            // a bare newline or tab token would be invisible
            Granularity::Characters => token.escape_debug().to_string(),
            Granularity::Lines | Granularity::Words => token.to_string(),
        }
    };

    let mut out = Vec::with_capacity(pairs.len());
    for pair in pairs {
        match pair.diff_type {
            DiffType::Unchanged => out.push(format!("  {}", show(&pair.original))),
            DiffType::Removed => out.push(format!("- {}", show(&pair.original))),
            DiffType::Added => out.push(format!("+ {}", show(&pair.modified))),
            DiffType::Modified => {
                out.push(format!("- {}", show(&pair.original)));
                out.push(format!("+ {}", show(&pair.modified)));
            }
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[(&str, &str)] = &[
        ("", ""),
        ("", "SELECT 1"),
        ("SELECT 1", ""),
        ("SELECT a, b\nFROM t\nWHERE x = 1", "SELECT a\nFROM t\nWHERE x = 2\nLIMIT 5"),
        ("select  *\n from t", "select * from  t where x=1"),
        ("a\n\nb\n", "\na\nb"),
        ("héllo wörld", "hello world!"),
    ];

    fn side_tokens(pairs: &[DiffPair], original: bool) -> Vec<String> {
        pairs
            .iter()
            .filter_map(|p| {
                let (content, position) = if original {
                    (&p.original, p.original_position)
                } else {
                    (&p.modified, p.modified_position)
                };
                position.map(|_| content.clone())
            })
            .collect()
    }

    #[test]
    fn every_token_appears_once_per_side() {
        for granularity in Granularity::ALL {
            for (a, b) in SAMPLES {
                let result = compute_diff(a, b, granularity);
                assert_eq!(
                    side_tokens(&result.pairs, true),
                    tokenize(a, granularity),
                    "original side of {a:?} vs {b:?} at {granularity}"
                );
                assert_eq!(
                    side_tokens(&result.pairs, false),
                    tokenize(b, granularity),
                    "modified side of {a:?} vs {b:?} at {granularity}"
                );
            }
        }
    }

    #[test]
    fn identical_inputs_are_all_unchanged() {
        for granularity in Granularity::ALL {
            for (a, _) in SAMPLES {
                let result = compute_diff(a, a, granularity);
                assert!(
                    result
                        .pairs
                        .iter()
                        .all(|p| p.diff_type == DiffType::Unchanged)
                );
                assert!(result.is_identical());
            }
        }
    }

    #[test]
    fn blocks_flatten_to_pairs() {
        for granularity in Granularity::ALL {
            for (a, b) in SAMPLES {
                let result = compute_diff(a, b, granularity);
                let flattened: Vec<DiffPair> = result
                    .blocks
                    .iter()
                    .flat_map(|block| block.pairs.iter().cloned())
                    .collect();
                assert_eq!(flattened, result.pairs);
            }
        }
    }

    #[test]
    fn one_empty_side() {
        let result = compute_diff("", "SELECT 1\nFROM t", Granularity::Lines);
        assert_eq!(result.pairs.len(), 2);
        assert!(result.pairs.iter().all(|p| p.diff_type == DiffType::Added));

        let result = compute_diff("select * from t", "", Granularity::Words);
        assert_eq!(result.pairs.len(), 4);
        assert!(result.pairs.iter().all(|p| p.diff_type == DiffType::Removed));

        let result = compute_diff("", "", Granularity::Characters);
        assert!(result.pairs.is_empty());
        assert!(result.blocks.is_empty());
    }

    #[test]
    fn same_single_line() {
        let result = compute_diff("SELECT 1", "SELECT 1", Granularity::Lines);
        assert_eq!(result.pairs.len(), 1);
        assert_eq!(result.pairs[0].diff_type, DiffType::Unchanged);
        assert_eq!(result.stats.changed(), 0);
    }

    #[test]
    fn changed_first_line() {
        let result = compute_diff("SELECT 1\nFROM t", "SELECT 2\nFROM t", Granularity::Lines);
        assert_eq!(result.pairs.len(), 2);
        assert_eq!(result.pairs[0].diff_type, DiffType::Modified);
        assert_eq!(result.pairs[0].original, "SELECT 1");
        assert_eq!(result.pairs[0].modified, "SELECT 2");
        assert_eq!(result.pairs[1].diff_type, DiffType::Unchanged);
        assert_eq!(result.pairs[1].original, "FROM t");
        assert_eq!(
            (result.stats.added, result.stats.removed, result.stats.modified),
            (0, 0, 1)
        );
    }

    #[test]
    fn appended_line() {
        let result = compute_diff("A\nB", "A\nB\nC", Granularity::Lines);
        let types: Vec<_> = result.pairs.iter().map(|p| p.diff_type).collect();
        assert_eq!(
            types,
            vec![DiffType::Unchanged, DiffType::Unchanged, DiffType::Added]
        );
        assert_eq!(result.pairs[2].original, "");
        assert_eq!(result.pairs[2].modified, "C");
        assert_eq!(
            (result.stats.added, result.stats.removed, result.stats.modified),
            (1, 0, 0)
        );
    }

    #[test]
    fn appended_where_clause_by_word() {
        let result = compute_diff(
            "select * from t",
            "select * from t where x=1",
            Granularity::Words,
        );
        assert_eq!(result.pairs.len(), 6);
        assert!(
            result.pairs[..4]
                .iter()
                .all(|p| p.diff_type == DiffType::Unchanged)
        );
        assert_eq!(result.pairs[4].diff_type, DiffType::Added);
        assert_eq!(result.pairs[4].modified, "where");
        assert_eq!(result.pairs[5].diff_type, DiffType::Added);
        assert_eq!(result.pairs[5].modified, "x=1");
    }

    #[test]
    fn word_positions_advance() {
        let result = compute_diff("a b", "a c d", Granularity::Words);
        assert_eq!(result.pairs[2].modified_position, Some(3));
        assert_eq!(result.pairs[1].original_position, Some(2));
    }

    #[test]
    fn text_rendering_marks_each_type() {
        let result = compute_diff("a\nb\nc", "a\nB", Granularity::Lines);
        assert_eq!(render_text(&result.pairs, result.granularity), "  a\n- b\n+ B\n- c");
    }

    #[test]
    fn character_rendering_escapes_newlines() {
        let result = compute_diff("a\n", "a", Granularity::Characters);
        assert_eq!(render_text(&result.pairs, result.granularity), "  a\n- \\n");
    }
}
