//! Transactions as carried inside a block
//!
//! Legacy layout, RLP list of 9 items:
//! `[nonce, gas_price, gas_limit, to, value, data, v, r, s]`.
//!
//! An empty `to` is a contract creation, an empty `data` is *absent* data and
//! `v = r = s = 0` is an *absent* signature. `Some(vec![])` data therefore
//! encodes exactly like `None`; blocks store transactions in the
//! [`Transaction::into_canonical`] form so both sides of a round trip agree.
//!
//! The gas limit is kept as the raw bytes found on the wire. Leading zero
//! bytes are legal there and must survive re-encoding, or the transactions
//! root would change.

use super::fields::{expect_list, optional_bytes, optional_fixed, value};
use super::{BlockError, BlockResult};
use rlp::{Rlp, RlpStream};
use shared_crypto::keccak256;
use shared_types::{to_hex, Address, Coin, Hash, SYSTEM_CONTRACT_ADDRESS, U256};
use std::fmt;

/// Number of items in an encoded transaction.
pub const TRANSACTION_ITEM_COUNT: usize = 9;

/// ECDSA signature components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TxSignature {
    pub v: u64,
    pub r: U256,
    pub s: U256,
}

impl TxSignature {
    pub fn is_zero(&self) -> bool {
        self.v == 0 && self.r.is_zero() && self.s.is_zero()
    }
}

/// Gas limit as an unsigned big-endian byte string, exactly as encoded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GasLimit(Vec<u8>);

impl GasLimit {
    /// Wrap wire bytes. At most 32 bytes; leading zeros are kept.
    pub fn from_bytes(bytes: Vec<u8>) -> BlockResult<Self> {
        if bytes.len() > 32 {
            return Err(BlockError::format(
                "transaction.gas_limit",
                format!("{} bytes exceed 256 bits", bytes.len()),
            ));
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn value(&self) -> U256 {
        U256::from_big_endian(&self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl From<U256> for GasLimit {
    /// Minimal big-endian form, empty for zero.
    fn from(value: U256) -> Self {
        let mut buf = [0u8; 32];
        value.to_big_endian(&mut buf);
        let start = buf.iter().position(|b| *b != 0).unwrap_or(buf.len());
        Self(buf[start..].to_vec())
    }
}

impl From<u64> for GasLimit {
    fn from(value: u64) -> Self {
        U256::from(value).into()
    }
}

impl fmt::Display for GasLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A signed (or unsigned) transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub nonce: U256,
    pub gas_price: Coin,
    pub gas_limit: GasLimit,
    pub to: Option<Address>,
    pub value: Coin,
    pub data: Option<Vec<u8>>,
    pub signature: Option<TxSignature>,
}

impl Transaction {
    /// Canonical RLP encoding.
    pub fn encode(&self) -> Vec<u8> {
        let mut stream = RlpStream::new_list(TRANSACTION_ITEM_COUNT);
        stream.append(&self.nonce);
        stream.append(&self.gas_price);
        stream.append(&self.gas_limit.0);
        match &self.to {
            Some(to) => stream.append(&to.to_vec()),
            None => stream.append_empty_data(),
        };
        stream.append(&self.value);
        match &self.data {
            Some(data) => stream.append(data),
            None => stream.append_empty_data(),
        };
        let signature = self.signature.unwrap_or(TxSignature {
            v: 0,
            r: U256::zero(),
            s: U256::zero(),
        });
        stream.append(&signature.v);
        stream.append(&signature.r);
        stream.append(&signature.s);
        stream.out().to_vec()
    }

    pub fn decode(data: &[u8]) -> BlockResult<Self> {
        Self::decode_rlp(&Rlp::new(data))
    }

    pub fn decode_rlp(rlp: &Rlp) -> BlockResult<Self> {
        expect_list(rlp, "transaction", TRANSACTION_ITEM_COUNT)?;

        let v: u64 = value(rlp, 6, "transaction.v")?;
        let r: U256 = value(rlp, 7, "transaction.r")?;
        let s: U256 = value(rlp, 8, "transaction.s")?;
        let signature = Some(TxSignature { v, r, s }).filter(|sig| !sig.is_zero());

        Ok(Self {
            nonce: value(rlp, 0, "transaction.nonce")?,
            gas_price: value(rlp, 1, "transaction.gas_price")?,
            gas_limit: GasLimit::from_bytes(value(rlp, 2, "transaction.gas_limit")?)?,
            to: optional_fixed(rlp, 3, "transaction.to")?,
            value: value(rlp, 4, "transaction.value")?,
            data: optional_bytes(rlp, 5, "transaction.data")?,
            signature,
        })
    }

    /// Keccak-256 of the canonical encoding.
    pub fn hash(&self) -> Hash {
        keccak256(&self.encode())
    }

    pub fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }

    /// The same transaction with empty data and an all-zero signature
    /// spelled as absent. The encoding does not change.
    pub fn into_canonical(mut self) -> Self {
        if self.data.as_ref().is_some_and(Vec::is_empty) {
            self.data = None;
        }
        if self.signature.as_ref().is_some_and(TxSignature::is_zero) {
            self.signature = None;
        }
        self
    }
}

/// The protocol reward/settlement transaction closing a block.
///
/// It is never signed and carries no value, gas or data; it is recognised by
/// [`is_system_transaction`], never by a type tag on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemTransaction(Transaction);

impl SystemTransaction {
    /// The canonical system transaction for block `number`.
    pub fn for_block(number: u64) -> Self {
        Self(Transaction {
            nonce: U256::from(number.saturating_sub(1)),
            gas_price: U256::zero(),
            gas_limit: GasLimit::default(),
            to: Some(SYSTEM_CONTRACT_ADDRESS),
            value: U256::zero(),
            data: None,
            signature: None,
        })
    }

    pub fn transaction(&self) -> &Transaction {
        &self.0
    }

    pub fn into_transaction(self) -> Transaction {
        self.0
    }
}

/// A transaction at a given position of a block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockTransaction {
    Standard(Transaction),
    System(SystemTransaction),
}

impl BlockTransaction {
    pub fn transaction(&self) -> &Transaction {
        match self {
            BlockTransaction::Standard(tx) => tx,
            BlockTransaction::System(tx) => tx.transaction(),
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, BlockTransaction::System(_))
    }

    pub fn encode(&self) -> Vec<u8> {
        self.transaction().encode()
    }

    pub fn hash(&self) -> Hash {
        self.transaction().hash()
    }
}

impl fmt::Display for BlockTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tx = self.transaction();
        let kind = if self.is_system() { "SystemTx" } else { "Tx" };
        write!(
            f,
            "{kind} [hash={} nonce={} to={} value={} gasPrice={} gasLimit={}]",
            to_hex(&tx.hash()),
            tx.nonce,
            tx.to.map(|to| to_hex(&to)).unwrap_or_else(|| "-".to_string()),
            tx.value,
            tx.gas_price,
            tx.gas_limit
        )
    }
}

/// Whether `tx`, found at `position` of a `count`-long list, is the system
/// transaction.
///
/// All conditions are required: last position, system contract recipient,
/// zero value, zero gas limit, zero gas price, no data and no signature.
pub fn is_system_transaction(tx: &Transaction, position: usize, count: usize) -> bool {
    position + 1 == count
        && tx.to == Some(SYSTEM_CONTRACT_ADDRESS)
        && tx.data.is_none()
        && tx.signature.is_none()
        && tx.value.is_zero()
        && tx.gas_limit.is_zero()
        && tx.gas_price.is_zero()
}

/// Tag each transaction with its variant. Only the last one can be `System`.
///
/// Transactions are brought into canonical form first, so the variant only
/// depends on what the encoding can express.
pub fn classify_transactions(transactions: Vec<Transaction>) -> Vec<BlockTransaction> {
    let count = transactions.len();
    transactions
        .into_iter()
        .map(Transaction::into_canonical)
        .enumerate()
        .map(|(position, tx)| {
            if is_system_transaction(&tx, position, count) {
                BlockTransaction::System(SystemTransaction(tx))
            } else {
                BlockTransaction::Standard(tx)
            }
        })
        .collect()
}
