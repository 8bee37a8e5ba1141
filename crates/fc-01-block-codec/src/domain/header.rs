//! Block header
//!
//! The header hash is `keccak256(rlp(fields))`. The field order of the RLP
//! list is part of the hash pre-image and must never change:
//!
//! ```text
//! [parent_hash, coinbase, state_root, transactions_root, receipts_root,
//!  logs_bloom, number, gas_limit, gas_used, timestamp, extra_data,
//!  paid_fees, minimum_gas_price, producer, signature_root]
//! ```

use super::fields::{expect_list, fixed, value};
use super::{BlockError, BlockResult};
use rlp::{Rlp, RlpStream};
use shared_crypto::keccak256;
use shared_types::{short_hex, to_hex, Address, Coin, Hash, U256};
use std::fmt;
use std::sync::OnceLock;

/// Number of items in an encoded header.
pub const HEADER_ITEM_COUNT: usize = 15;

/// Maximum size of the header's extra data.
pub const MAX_EXTRA_DATA_SIZE: usize = 32;

/// Plain header fields, as supplied by a block producer or a decoder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderFields {
    pub parent_hash: Hash,
    pub coinbase: Address,
    pub state_root: Hash,
    pub transactions_root: Hash,
    pub receipts_root: Hash,
    pub logs_bloom: Vec<u8>,
    pub number: u64,
    pub gas_limit: U256,
    pub gas_used: u64,
    pub timestamp: u64,
    pub extra_data: Vec<u8>,
    pub paid_fees: Coin,
    pub minimum_gas_price: Coin,
    /// Federation member that produced and signed the block.
    pub producer: Address,
    /// Keccak-256 of the concatenated producer signatures.
    pub signature_root: Hash,
}

/// Block header with memoized encoding and hash.
///
/// Fields are only reachable for writing through [`BlockHeader::fields_mut`],
/// which drops both caches, so the hash can never go stale.
#[derive(Clone)]
pub struct BlockHeader {
    fields: HeaderFields,
    encoded: OnceLock<Vec<u8>>,
    hash: OnceLock<Hash>,
}

impl BlockHeader {
    /// Build a header, enforcing the extra-data bound.
    pub fn new(fields: HeaderFields) -> BlockResult<Self> {
        check_extra_data(&fields.extra_data)?;
        Ok(Self {
            fields,
            encoded: OnceLock::new(),
            hash: OnceLock::new(),
        })
    }

    pub fn fields(&self) -> &HeaderFields {
        &self.fields
    }

    /// Mutable access for the owning block builder. Invalidates caches.
    pub(crate) fn fields_mut(&mut self) -> &mut HeaderFields {
        self.encoded = OnceLock::new();
        self.hash = OnceLock::new();
        &mut self.fields
    }

    pub fn hash(&self) -> Hash {
        *self.hash.get_or_init(|| keccak256(self.encode()))
    }

    pub fn parent_hash(&self) -> Hash {
        self.fields.parent_hash
    }

    pub fn number(&self) -> u64 {
        self.fields.number
    }

    pub fn coinbase(&self) -> Address {
        self.fields.coinbase
    }

    pub fn state_root(&self) -> Hash {
        self.fields.state_root
    }

    pub fn transactions_root(&self) -> Hash {
        self.fields.transactions_root
    }

    pub fn receipts_root(&self) -> Hash {
        self.fields.receipts_root
    }

    pub fn logs_bloom(&self) -> &[u8] {
        &self.fields.logs_bloom
    }

    pub fn gas_limit(&self) -> U256 {
        self.fields.gas_limit
    }

    pub fn gas_used(&self) -> u64 {
        self.fields.gas_used
    }

    pub fn timestamp(&self) -> u64 {
        self.fields.timestamp
    }

    pub fn extra_data(&self) -> &[u8] {
        &self.fields.extra_data
    }

    pub fn paid_fees(&self) -> Coin {
        self.fields.paid_fees
    }

    pub fn minimum_gas_price(&self) -> Coin {
        self.fields.minimum_gas_price
    }

    pub fn producer(&self) -> Address {
        self.fields.producer
    }

    pub fn signature_root(&self) -> Hash {
        self.fields.signature_root
    }

    /// Genesis is the block at height zero.
    pub fn is_genesis(&self) -> bool {
        self.fields.number == 0
    }

    pub fn short_hash(&self) -> String {
        short_hex(&self.hash())
    }

    pub fn parent_short_hash(&self) -> String {
        short_hex(&self.fields.parent_hash)
    }

    /// Canonical RLP encoding (memoized).
    pub fn encode(&self) -> &[u8] {
        self.encoded.get_or_init(|| {
            let f = &self.fields;
            let mut stream = RlpStream::new_list(HEADER_ITEM_COUNT);
            stream.append(&f.parent_hash.to_vec());
            stream.append(&f.coinbase.to_vec());
            stream.append(&f.state_root.to_vec());
            stream.append(&f.transactions_root.to_vec());
            stream.append(&f.receipts_root.to_vec());
            stream.append(&f.logs_bloom);
            stream.append(&f.number);
            stream.append(&f.gas_limit);
            stream.append(&f.gas_used);
            stream.append(&f.timestamp);
            stream.append(&f.extra_data);
            stream.append(&f.paid_fees);
            stream.append(&f.minimum_gas_price);
            stream.append(&f.producer.to_vec());
            stream.append(&f.signature_root.to_vec());
            stream.out().to_vec()
        })
    }

    /// Decode a header from its RLP list.
    pub fn decode(rlp: &Rlp) -> BlockResult<Self> {
        expect_list(rlp, "header", HEADER_ITEM_COUNT)?;
        let fields = HeaderFields {
            parent_hash: fixed(rlp, 0, "header.parent_hash")?,
            coinbase: fixed(rlp, 1, "header.coinbase")?,
            state_root: fixed(rlp, 2, "header.state_root")?,
            transactions_root: fixed(rlp, 3, "header.transactions_root")?,
            receipts_root: fixed(rlp, 4, "header.receipts_root")?,
            logs_bloom: value(rlp, 5, "header.logs_bloom")?,
            number: value(rlp, 6, "header.number")?,
            gas_limit: value(rlp, 7, "header.gas_limit")?,
            gas_used: value(rlp, 8, "header.gas_used")?,
            timestamp: value(rlp, 9, "header.timestamp")?,
            extra_data: value(rlp, 10, "header.extra_data")?,
            paid_fees: value(rlp, 11, "header.paid_fees")?,
            minimum_gas_price: value(rlp, 12, "header.minimum_gas_price")?,
            producer: fixed(rlp, 13, "header.producer")?,
            signature_root: fixed(rlp, 14, "header.signature_root")?,
        };
        Self::new(fields)
    }
}

pub(crate) fn check_extra_data(extra_data: &[u8]) -> BlockResult<()> {
    if extra_data.len() > MAX_EXTRA_DATA_SIZE {
        return Err(BlockError::ExtraDataTooLarge {
            size: extra_data.len(),
            limit: MAX_EXTRA_DATA_SIZE,
        });
    }
    Ok(())
}

impl PartialEq for BlockHeader {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Eq for BlockHeader {}

impl fmt::Debug for BlockHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockHeader")
            .field("hash", &to_hex(&self.hash()))
            .field("fields", &self.fields)
            .finish()
    }
}

impl fmt::Display for BlockHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = &self.fields;
        writeln!(f, "  parentHash={}", to_hex(&h.parent_hash))?;
        writeln!(f, "  coinbase={}", to_hex(&h.coinbase))?;
        writeln!(f, "  stateRoot={}", to_hex(&h.state_root))?;
        writeln!(f, "  txTrieRoot={}", to_hex(&h.transactions_root))?;
        writeln!(f, "  receiptsTrieRoot={}", to_hex(&h.receipts_root))?;
        writeln!(f, "  number={}", h.number)?;
        writeln!(f, "  gasLimit={}", h.gas_limit)?;
        writeln!(f, "  gasUsed={}", h.gas_used)?;
        writeln!(f, "  timestamp={}", h.timestamp)?;
        writeln!(f, "  extraData={}", to_hex(&h.extra_data))?;
        writeln!(f, "  paidFees={}", h.paid_fees)?;
        writeln!(f, "  minGasPrice={}", h.minimum_gas_price)?;
        writeln!(f, "  producer={}", to_hex(&h.producer))?;
        writeln!(f, "  signatureRoot={}", to_hex(&h.signature_root))
    }
}
