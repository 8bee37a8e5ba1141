//! Block and transaction builders shared by the flows and benchmarks.

use fc_01_block_codec::{
    transactions_root, Block, BlockAssembly, BlockCodec, GasLimit, HeaderFields,
    SystemTransaction, Transaction, TxSignature,
};
use primitive_types::U256;
use shared_types::{Hash, ZERO_HASH};

/// Signed value transfer from a sender identified by `seed`.
pub fn transfer(seed: u8, nonce: u64) -> Transaction {
    Transaction {
        nonce: U256::from(nonce),
        gas_price: U256::from(60_000_000u64),
        gas_limit: GasLimit::from(21_000u64),
        to: Some([seed; 20]),
        value: U256::from(1_000u64) * U256::from(seed as u64 + 1),
        data: None,
        signature: Some(TxSignature {
            v: 27 + (seed as u64 % 2),
            r: U256::from(seed as u64 + 1),
            s: U256::from(nonce + 1),
        }),
    }
}

/// Block `number` on `parent` holding `tx_count` transfers plus the system
/// transaction, assembled and sealed through `codec`.
pub fn produce_block(
    codec: &BlockCodec,
    number: u64,
    parent_hash: Hash,
    tx_count: usize,
    salt: u8,
) -> Block {
    let mut transactions: Vec<Transaction> = (0..tx_count)
        .map(|i| transfer(salt.wrapping_add(i as u8), i as u64))
        .collect();
    transactions.push(SystemTransaction::for_block(number).into_transaction());

    let assembly = BlockAssembly {
        header: HeaderFields {
            parent_hash,
            number,
            timestamp: 1_600_000_000 + number * 5,
            gas_limit: U256::from(6_800_000u64),
            gas_used: 21_000 * tx_count as u64,
            transactions_root: transactions_root(&transactions),
            producer: [salt; 20],
            extra_data: vec![salt],
            ..Default::default()
        },
        transactions,
        signatures: vec![vec![salt; 65]],
    };
    codec
        .assemble(assembly)
        .expect("fixture blocks are well formed")
        .seal()
}

/// Genesis plus `len - 1` descendants, each with `tx_count` transfers.
pub fn produce_chain(codec: &BlockCodec, len: u64, tx_count: usize) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut parent = ZERO_HASH;
    for number in 0..len {
        let block = produce_block(codec, number, parent, tx_count, 0);
        parent = block.hash();
        blocks.push(block);
    }
    blocks
}
