//! # Block Value Type
//!
//! A block has two lifecycle phases expressed as two types:
//!
//! ```text
//! BlockBuilder (mutable) ──seal()──→ Block (immutable, shareable)
//! ```
//!
//! `seal` consumes the builder, so there is no way back: editing a sealed
//! block means taking a fresh copy through [`Block::to_builder`].
//!
//! Canonical encoding is a 3-item RLP list
//! `[header, [tx_0, tx_1, ...], []]`. The last slot is reserved and always
//! written empty; decoding accepts any content there but insists on the arity.
//!
//! A sealed block has no mutators at all:
//!
//! ```compile_fail
//! use fc_01_block_codec::{BlockBuilder, BlockHeader, HeaderFields};
//!
//! let header = BlockHeader::new(HeaderFields::default()).unwrap();
//! let block = BlockBuilder::new(header, vec![], vec![]).seal();
//! block.set_state_root([1u8; 32]);
//! ```

use super::header::{check_extra_data, BlockHeader};
use super::transaction::{classify_transactions, BlockTransaction, Transaction};
use super::{BlockError, BlockResult};
use rlp::{Rlp, RlpStream, EMPTY_LIST_RLP};
use shared_crypto::{keccak256_concat, ordered_trie_root};
use shared_types::{to_hex, Coin, Hash};
use std::fmt;
use std::sync::OnceLock;

/// Number of items in an encoded block.
pub const BLOCK_ITEM_COUNT: usize = 3;

/// Sealed, immutable block.
///
/// Equality and hashing go through the block hash only.
#[derive(Clone)]
pub struct Block {
    header: BlockHeader,
    transactions: Vec<BlockTransaction>,
    signatures: Vec<Vec<u8>>,
    encoded: OnceLock<Vec<u8>>,
}

impl Block {
    fn from_parts(
        header: BlockHeader,
        transactions: Vec<Transaction>,
        signatures: Vec<Vec<u8>>,
    ) -> Self {
        Self {
            header,
            transactions: classify_transactions(transactions),
            signatures,
            encoded: OnceLock::new(),
        }
    }

    /// Build a sealed block from data already known to be consistent, such as
    /// a block read back from local storage. Roots are not verified.
    pub fn from_valid_data(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Self::from_parts(header, transactions, Vec::new())
    }

    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    pub fn number(&self) -> u64 {
        self.header.number()
    }

    pub fn parent_hash(&self) -> Hash {
        self.header.parent_hash()
    }

    pub fn paid_fees(&self) -> Coin {
        self.header.paid_fees()
    }

    pub fn is_genesis(&self) -> bool {
        self.header.is_genesis()
    }

    pub fn transactions(&self) -> &[BlockTransaction] {
        &self.transactions
    }

    /// The closing system transaction, if the block has one.
    pub fn system_transaction(&self) -> Option<&BlockTransaction> {
        self.transactions.last().filter(|tx| tx.is_system())
    }

    pub fn signatures(&self) -> &[Vec<u8>] {
        &self.signatures
    }

    /// Whether `self` is the direct parent of `child`.
    pub fn is_parent_of(&self, child: &Block) -> bool {
        self.hash() == child.parent_hash()
    }

    /// Canonical encoding (memoized).
    pub fn encode(&self) -> &[u8] {
        self.encoded.get_or_init(|| {
            let mut stream = RlpStream::new_list(BLOCK_ITEM_COUNT);
            stream.append_raw(self.header.encode(), 1);
            stream.append_raw(&self.encode_transactions(), 1);
            stream.append_raw(&EMPTY_LIST_RLP, 1);
            stream.out().to_vec()
        })
    }

    /// Body only: `[[tx_0, tx_1, ...]]`.
    pub fn encode_body(&self) -> Vec<u8> {
        let mut stream = RlpStream::new_list(1);
        stream.append_raw(&self.encode_transactions(), 1);
        stream.out().to_vec()
    }

    fn encode_transactions(&self) -> Vec<u8> {
        let mut stream = RlpStream::new_list(self.transactions.len());
        for tx in &self.transactions {
            stream.append_raw(&tx.encode(), 1);
        }
        stream.out().to_vec()
    }

    /// `#<number> (<hash> <~ <parent hash>) Txs:<count>`, hashes shortened.
    pub fn short_description(&self) -> String {
        format!(
            "#{} ({} <~ {}) Txs:{}",
            self.number(),
            self.header.short_hash(),
            self.header.parent_short_hash(),
            self.transactions.len()
        )
    }

    /// A mutable copy of this block.
    pub fn to_builder(&self) -> BlockBuilder {
        let mut inner = self.clone();
        inner.encoded = OnceLock::new();
        BlockBuilder { inner }
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.hash() == other.hash()
    }
}

impl Eq for Block {}

impl std::hash::Hash for Block {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&Block::hash(self), state);
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("hash", &to_hex(&self.hash()))
            .field("number", &self.number())
            .field("transactions", &self.transactions.len())
            .field("signatures", &self.signatures.len())
            .finish()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BlockData [ hash={}", to_hex(&self.hash()))?;
        write!(f, "{}", self.header)?;
        if self.transactions.is_empty() {
            writeln!(f, "Txs []")?;
        } else {
            writeln!(f, "Txs [")?;
            for tx in &self.transactions {
                writeln!(f, "  {tx}")?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "]")
    }
}

/// Mutable block under construction.
///
/// Every mutator drops the cached encoding (and the header hash with it).
#[derive(Clone, Debug)]
pub struct BlockBuilder {
    inner: Block,
}

impl BlockBuilder {
    /// Build directly from fields. The declared transactions root is kept
    /// as given; see [`crate::BlockCodec::assemble`] for the verifying path.
    pub fn new(
        header: BlockHeader,
        transactions: Vec<Transaction>,
        signatures: Vec<Vec<u8>>,
    ) -> Self {
        Self {
            inner: Block::from_parts(header, transactions, signatures),
        }
    }

    /// Read-only view of the block being built.
    pub fn as_block(&self) -> &Block {
        &self.inner
    }

    pub fn header(&self) -> &BlockHeader {
        &self.inner.header
    }

    pub fn hash(&self) -> Hash {
        self.inner.hash()
    }

    pub fn encode(&self) -> &[u8] {
        self.inner.encode()
    }

    fn touch(&mut self) -> &mut Block {
        self.inner.encoded = OnceLock::new();
        &mut self.inner
    }

    pub fn set_state_root(&mut self, state_root: Hash) {
        self.touch().header.fields_mut().state_root = state_root;
    }

    pub fn set_receipts_root(&mut self, receipts_root: Hash) {
        self.touch().header.fields_mut().receipts_root = receipts_root;
    }

    pub fn set_paid_fees(&mut self, paid_fees: Coin) {
        self.touch().header.fields_mut().paid_fees = paid_fees;
    }

    pub fn set_gas_used(&mut self, gas_used: u64) {
        self.touch().header.fields_mut().gas_used = gas_used;
    }

    /// Fails without changing anything when `extra_data` exceeds the bound.
    pub fn set_extra_data(&mut self, extra_data: Vec<u8>) -> BlockResult<()> {
        check_extra_data(&extra_data)?;
        self.touch().header.fields_mut().extra_data = extra_data;
        Ok(())
    }

    /// Replace the transaction list. The header's transactions root follows.
    pub fn set_transactions(&mut self, transactions: Vec<Transaction>) {
        let root = transactions_root(&transactions);
        let block = self.touch();
        block.header.fields_mut().transactions_root = root;
        block.transactions = classify_transactions(transactions);
    }

    /// Append a producer signature. The header's signature root follows.
    pub fn add_signature(&mut self, signature: Vec<u8>) {
        let block = self.touch();
        block.signatures.push(signature);
        block.header.fields_mut().signature_root = signatures_hash(&block.signatures);
    }

    pub fn set_signatures(&mut self, signatures: Vec<Vec<u8>>) {
        let block = self.touch();
        block.header.fields_mut().signature_root = signatures_hash(&signatures);
        block.signatures = signatures;
    }

    /// Freeze the block. The builder is consumed.
    pub fn seal(self) -> Block {
        self.inner
    }
}

/// Root of the index-keyed trie over the transactions' encodings.
pub fn transactions_root<'a, I>(transactions: I) -> Hash
where
    I: IntoIterator<Item = &'a Transaction>,
{
    ordered_trie_root(transactions.into_iter().map(Transaction::encode))
}

/// Keccak-256 over the concatenation of all signatures, in order.
pub fn signatures_hash(signatures: &[Vec<u8>]) -> Hash {
    keccak256_concat(signatures)
}

/// Decode a canonical block encoding and verify its transactions root.
///
/// Signatures travel outside the block encoding, so the result has none.
/// A payload that is not a list counts as a list of zero items. Callers
/// outside the crate go through [`crate::BlockCodec`], which escalates.
pub(crate) fn decode_block(raw: &[u8]) -> BlockResult<Block> {
    let rlp = Rlp::new(raw);
    if !rlp.is_list() {
        return Err(BlockError::InvalidArity {
            expected: BLOCK_ITEM_COUNT,
            actual: 0,
        });
    }
    let arity = rlp
        .item_count()
        .map_err(|e| BlockError::format("block", e))?;
    if arity != BLOCK_ITEM_COUNT {
        return Err(BlockError::InvalidArity {
            expected: BLOCK_ITEM_COUNT,
            actual: arity,
        });
    }

    let header_rlp = rlp.at(0).map_err(|e| BlockError::format("header", e))?;
    let header = BlockHeader::decode(&header_rlp)?;

    let txs_rlp = rlp
        .at(1)
        .map_err(|e| BlockError::format("transactions", e))?;
    if !txs_rlp.is_list() {
        return Err(BlockError::format("transactions", "expected an RLP list"));
    }
    let transactions = txs_rlp
        .iter()
        .map(|item| Transaction::decode_rlp(&item))
        .collect::<BlockResult<Vec<_>>>()?;

    let computed = transactions_root(&transactions);
    if computed != header.transactions_root() {
        return Err(BlockError::TransactionsRootMismatch {
            number: header.number(),
            declared: header.transactions_root(),
            computed,
        });
    }

    Ok(Block::from_parts(header, transactions, Vec::new()))
}
