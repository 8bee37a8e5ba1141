use fc_01_block_codec::{Block, BlockBuilder, BlockHeader, HeaderFields};
use shared_types::{Hash, EMPTY_TRIE_ROOT, ZERO_HASH};

/// Empty block at `number` on top of `parent_hash`. `salt` tells apart
/// siblings that share a parent.
pub fn make_test_block(number: u64, parent_hash: Hash, salt: u8) -> Block {
    let fields = HeaderFields {
        parent_hash,
        number,
        timestamp: number.saturating_add(1_000),
        transactions_root: EMPTY_TRIE_ROOT,
        extra_data: vec![salt],
        ..Default::default()
    };
    let header = BlockHeader::new(fields).expect("extra data within bound");
    BlockBuilder::new(header, vec![], vec![]).seal()
}

/// Genesis plus `len - 1` descendants.
pub fn make_chain(len: u64) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut parent = ZERO_HASH;
    for number in 0..len {
        let block = make_test_block(number, parent, 0);
        parent = block.hash();
        blocks.push(block);
    }
    blocks
}
