use tracing::debug;

use crate::block::{new_block_id, Block, BlockPatch};

/// Suffix appended to the content of a duplicated block.
pub const COPY_SUFFIX: &str = " (Copy)";

/// Splice `blocks` into `seq` at `index` (append when `index > seq.len()`).
///
/// Accepts anything iterable so a composite palette entry
/// ([`crate::block::Created::Pair`]) lands as one contiguous run.
pub fn insert(seq: &[Block], index: usize, blocks: impl IntoIterator<Item = Block>) -> Vec<Block> {
    let at = index.min(seq.len());
    let mut out = Vec::with_capacity(seq.len() + 2);
    out.extend_from_slice(&seq[..at]);
    out.extend(blocks);
    out.extend_from_slice(&seq[at..]);
    out
}

/// Move the block at `from` so that it ends up at index `to` of the result.
///
/// `[A, B, C, D]` with `(0, 3)` gives `[B, C, D, A]`; with `(3, 0)` gives
/// `[D, A, B, C]`. `to` past the end moves to the end.
pub fn move_block(seq: &[Block], from: usize, to: usize) -> Vec<Block> {
    if from >= seq.len() || from == to {
        return seq.to_vec();
    }
    let mut out = seq.to_vec();
    let moved = out.remove(from);
    let to = to.min(out.len());
    out.insert(to, moved);
    out
}

/// Drag-and-drop reorder. `drop_slot` is a gap position in the *original*
/// sequence (`0` = before the first block, `len` = after the last).
///
/// Dropping below the dragged block's own position shifts the insertion
/// point up by one, since the block is removed first: `[A, B, C, D]` with
/// `(0, 4)` gives `[B, C, D, A]` and `(0, 2)` gives `[B, A, C, D]`. Dropping
/// into either gap adjacent to the block is a no-op.
pub fn drop_block(seq: &[Block], from: usize, drop_slot: usize) -> Vec<Block> {
    if from >= seq.len() {
        return seq.to_vec();
    }
    let slot = drop_slot.min(seq.len());
    let target = if slot > from { slot - 1 } else { slot };
    move_block(seq, from, target)
}

/// Insert a copy of block `id` right after it. The copy gets a fresh id and,
/// for types with content, [`COPY_SUFFIX`] appended to the content.
pub fn duplicate(seq: &[Block], id: &str) -> Vec<Block> {
    let Some(index) = position(seq, id) else {
        debug!(id, "duplicate: no such block");
        return seq.to_vec();
    };
    insert(seq, index + 1, [copy_of(&seq[index])])
}

/// The copy [`duplicate`] would insert, without inserting it.
pub fn copy_of(original: &Block) -> Block {
    let mut copy = original.clone();
    copy.id = new_block_id(original.type_name());
    if let Some(content) = original.content() {
        copy.set_content(format!("{content}{COPY_SUFFIX}"));
    }
    copy
}

pub fn remove(seq: &[Block], id: &str) -> Vec<Block> {
    seq.iter().filter(|b| b.id != id).cloned().collect()
}

/// Shallow-merge `patch` into block `id`. Other blocks come back unchanged.
pub fn update(seq: &[Block], id: &str, patch: &BlockPatch) -> Vec<Block> {
    if position(seq, id).is_none() {
        debug!(id, "update: no such block");
        return seq.to_vec();
    }
    seq.iter()
        .map(|b| if b.id == id { b.patched(patch) } else { b.clone() })
        .collect()
}

pub fn position(seq: &[Block], id: &str) -> Option<usize> {
    seq.iter().position(|b| b.id == id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::block::{create_block, BlockKind};

    fn text(id: &str) -> Block {
        Block::new(id, BlockKind::Text {
            content: Some(id.to_uppercase()),
        })
    }

    fn abcd() -> Vec<Block> {
        ["a", "b", "c", "d"].into_iter().map(text).collect()
    }

    fn ids(seq: &[Block]) -> Vec<&str> {
        seq.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_insert_at_index() {
        let out = insert(&abcd(), 2, [text("x")]);
        assert_eq!(ids(&out), vec!["a", "b", "x", "c", "d"]);
    }

    #[test]
    fn test_insert_clamps_to_end() {
        let out = insert(&abcd(), 99, [text("x")]);
        assert_eq!(ids(&out), vec!["a", "b", "c", "d", "x"]);
    }

    #[test]
    fn test_insert_into_empty() {
        let out = insert(&[], 0, [text("x")]);
        assert_eq!(ids(&out), vec!["x"]);
    }

    #[test]
    fn test_insert_pair_is_contiguous() {
        let pair = create_block(crate::block::HEADER_TEXT);
        let expected: Vec<String> = pair.clone().into_iter().map(|b| b.id).collect();
        let out = insert(&abcd(), 1, pair);
        assert_eq!(out.len(), 6);
        assert_eq!(out[1].id, expected[0]);
        assert_eq!(out[2].id, expected[1]);
        assert_eq!(out[3].id, "b");
    }

    #[test]
    fn test_insert_leaves_input_untouched() {
        let seq = abcd();
        let _ = insert(&seq, 0, [text("x")]);
        assert_eq!(ids(&seq), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_move_forward_to_end() {
        assert_eq!(ids(&move_block(&abcd(), 0, 3)), vec!["b", "c", "d", "a"]);
    }

    #[test]
    fn test_move_backward_to_start() {
        assert_eq!(ids(&move_block(&abcd(), 3, 0)), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_move_middle() {
        assert_eq!(ids(&move_block(&abcd(), 1, 2)), vec!["a", "c", "b", "d"]);
        assert_eq!(ids(&move_block(&abcd(), 2, 1)), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_move_same_index_is_noop() {
        assert_eq!(move_block(&abcd(), 2, 2), abcd());
    }

    #[test]
    fn test_move_out_of_range() {
        assert_eq!(move_block(&abcd(), 7, 0), abcd());
        assert_eq!(ids(&move_block(&abcd(), 0, 42)), vec!["b", "c", "d", "a"]);
        assert!(move_block(&[], 0, 0).is_empty());
    }

    #[test]
    fn test_drop_below_adjusts_for_removal() {
        assert_eq!(ids(&drop_block(&abcd(), 0, 4)), vec!["b", "c", "d", "a"]);
        assert_eq!(ids(&drop_block(&abcd(), 0, 3)), vec!["b", "c", "a", "d"]);
        assert_eq!(ids(&drop_block(&abcd(), 0, 2)), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_drop_above() {
        assert_eq!(ids(&drop_block(&abcd(), 3, 0)), vec!["d", "a", "b", "c"]);
        assert_eq!(ids(&drop_block(&abcd(), 2, 1)), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_drop_adjacent_gaps_are_noops() {
        assert_eq!(drop_block(&abcd(), 1, 1), abcd());
        assert_eq!(drop_block(&abcd(), 1, 2), abcd());
    }

    #[test]
    fn test_duplicate_inserts_after_original() {
        let original = create_block("text").first().clone();
        let out = duplicate(std::slice::from_ref(&original), &original.id);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], original);
        let copy = &out[1];
        assert_ne!(copy.id, original.id);
        assert!(copy.content().unwrap().ends_with(COPY_SUFFIX));
        assert_eq!(copy.layout, original.layout);
        assert_eq!(copy.style, original.style);
    }

    #[test]
    fn test_duplicate_without_content() {
        let divider = create_block("divider").first().clone();
        let out = duplicate(&[divider.clone()], &divider.id);
        assert_eq!(out[1].kind, divider.kind);
        assert_eq!(out[1].content(), None);
    }

    #[test]
    fn test_duplicate_missing_id_is_noop() {
        assert_eq!(duplicate(&abcd(), "zzz"), abcd());
    }

    #[test]
    fn test_remove() {
        assert_eq!(ids(&remove(&abcd(), "b")), vec!["a", "c", "d"]);
        assert_eq!(remove(&abcd(), "zzz"), abcd());
        assert!(remove(&[], "a").is_empty());
    }

    #[test]
    fn test_update_isolation() {
        let seq = abcd();
        let patch = BlockPatch {
            padding_top: Some(1),
            ..BlockPatch::default()
        };
        let out = update(&seq, "c", &patch);
        assert_eq!(out[0], seq[0]);
        assert_eq!(out[1], seq[1]);
        assert_eq!(out[3], seq[3]);
        assert_ne!(out[2], seq[2]);
        assert_eq!(out[2].layout.padding_top, Some(1));
        assert_eq!(out[2].content(), Some("C"));
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let patch = BlockPatch {
            content: Some("x".to_string()),
            ..BlockPatch::default()
        };
        assert_eq!(update(&abcd(), "zzz", &patch), abcd());
    }
}
