//! RLP field readers shared by the header and transaction decoders.

use super::{BlockError, BlockResult};
use rlp::{Decodable, Rlp};

/// Check that `rlp` is a list with exactly `count` items.
pub(crate) fn expect_list(rlp: &Rlp, field: &'static str, count: usize) -> BlockResult<()> {
    if !rlp.is_list() {
        return Err(BlockError::format(field, "expected an RLP list"));
    }
    let actual = rlp
        .item_count()
        .map_err(|e| BlockError::format(field, e))?;
    if actual != count {
        return Err(BlockError::format(
            field,
            format!("expected {count} items, got {actual}"),
        ));
    }
    Ok(())
}

/// Decode item `index` as `T`.
pub(crate) fn value<T: Decodable>(rlp: &Rlp, index: usize, field: &'static str) -> BlockResult<T> {
    rlp.val_at(index).map_err(|e| BlockError::format(field, e))
}

/// Decode item `index` as a byte string of exactly `N` bytes.
pub(crate) fn fixed<const N: usize>(
    rlp: &Rlp,
    index: usize,
    field: &'static str,
) -> BlockResult<[u8; N]> {
    let bytes: Vec<u8> = value(rlp, index, field)?;
    bytes.try_into().map_err(|bytes: Vec<u8>| {
        BlockError::format(field, format!("expected {N} bytes, got {}", bytes.len()))
    })
}

/// Decode item `index` as a byte string where the empty string means absent.
pub(crate) fn optional_bytes(
    rlp: &Rlp,
    index: usize,
    field: &'static str,
) -> BlockResult<Option<Vec<u8>>> {
    let bytes: Vec<u8> = value(rlp, index, field)?;
    Ok(if bytes.is_empty() { None } else { Some(bytes) })
}

/// Decode item `index` as an optional `N`-byte string (empty means absent).
pub(crate) fn optional_fixed<const N: usize>(
    rlp: &Rlp,
    index: usize,
    field: &'static str,
) -> BlockResult<Option<[u8; N]>> {
    match optional_bytes(rlp, index, field)? {
        None => Ok(None),
        Some(bytes) => bytes.try_into().map(Some).map_err(|bytes: Vec<u8>| {
            BlockError::format(field, format!("expected {N} bytes, got {}", bytes.len()))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlp::RlpStream;

    #[test]
    fn test_expect_list_rejects_wrong_count() {
        let mut stream = RlpStream::new_list(2);
        stream.append(&1u64);
        stream.append(&2u64);
        let encoded = stream.out().to_vec();
        let rlp = Rlp::new(&encoded);

        assert!(expect_list(&rlp, "pair", 2).is_ok());
        let err = expect_list(&rlp, "pair", 3).unwrap_err();
        assert!(err.to_string().contains("expected 3 items, got 2"));
    }

    #[test]
    fn test_expect_list_rejects_scalar() {
        let encoded = rlp::encode(&5u64).to_vec();
        assert!(expect_list(&Rlp::new(&encoded), "scalar", 1).is_err());
    }

    #[test]
    fn test_fixed_and_optional_fields() {
        let mut stream = RlpStream::new_list(3);
        stream.append(&vec![7u8; 20]);
        stream.append_empty_data();
        stream.append(&vec![1u8, 2, 3]);
        let encoded = stream.out().to_vec();
        let rlp = Rlp::new(&encoded);

        let addr: [u8; 20] = fixed(&rlp, 0, "address").unwrap();
        assert_eq!(addr, [7u8; 20]);
        assert!(fixed::<32>(&rlp, 0, "hash").is_err());
        assert_eq!(optional_fixed::<20>(&rlp, 1, "to").unwrap(), None);
        assert_eq!(optional_bytes(&rlp, 2, "data").unwrap(), Some(vec![1, 2, 3]));
    }
}
