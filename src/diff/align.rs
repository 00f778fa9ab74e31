use super::types::{DiffPair, DiffType};

/// Walk both token sequences side by side and classify every position.
///
/// This is a positional comparison, not a minimal edit script: tokens are only
/// compared against the token at the same cursor on the other side, so an insertion
/// near the top shows up as a run of modified pairs below it.
pub fn align(original: &[&str], modified: &[&str]) -> Vec<DiffPair> {
    let mut pairs = Vec::with_capacity(original.len().max(modified.len()));
    let mut i = 0usize;
    let mut j = 0usize;

    loop {
        let pair = match (original.get(i), modified.get(j)) {
            (None, None) => break,
            (None, Some(new)) => {
                j += 1;
                DiffPair {
                    diff_type: DiffType::Added,
                    original: String::new(),
                    modified: new.to_string(),
                    original_position: None,
                    modified_position: Some(j),
                }
            }
            (Some(old), None) => {
                i += 1;
                DiffPair {
                    diff_type: DiffType::Removed,
                    original: old.to_string(),
                    modified: String::new(),
                    original_position: Some(i),
                    modified_position: None,
                }
            }
            (Some(old), Some(new)) => {
                i += 1;
                j += 1;
                let diff_type = if old == new {
                    DiffType::Unchanged
                } else {
                    DiffType::Modified
                };
                DiffPair {
                    diff_type,
                    original: old.to_string(),
                    modified: new.to_string(),
                    original_position: Some(i),
                    modified_position: Some(j),
                }
            }
        };
        pairs.push(pair);
    }

    pairs
}
