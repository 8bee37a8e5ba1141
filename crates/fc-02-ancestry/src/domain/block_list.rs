//! Helpers over lists of blocks.

use fc_01_block_codec::Block;
use std::sync::Arc;

/// Append `block` unless a block with the same hash is already listed.
/// Returns whether it was added.
pub fn add_block_to_list(blocks: &mut Vec<Arc<Block>>, block: Arc<Block>) -> bool {
    let hash = block.hash();
    if blocks.iter().any(|b| b.hash() == hash) {
        return false;
    }
    blocks.push(block);
    true
}

/// Copy of `blocks` ordered by ascending number. Equal numbers keep their
/// relative order.
pub fn sort_blocks_by_number(blocks: &[Arc<Block>]) -> Vec<Arc<Block>> {
    let mut sorted = blocks.to_vec();
    sorted.sort_by_key(|block| block.number());
    sorted
}
