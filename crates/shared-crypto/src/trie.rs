//! # Ordered Trie Root
//!
//! Computes the root of a Merkle Patricia trie built from a set of key/value
//! pairs, without materialising the trie.
//!
//! Per Ethereum Yellow Paper Appendix D, there are four node types:
//! - Empty (RLP empty string)
//! - Leaf: `[hex_prefix(path, true), value]`
//! - Extension: `[hex_prefix(path, false), child]`
//! - Branch: `[child_0, ..., child_15, value]`
//!
//! A child whose encoding is shorter than 32 bytes is embedded in its parent;
//! longer children are referenced by their Keccak-256 hash.

use crate::hashing::keccak256;
use rlp::RlpStream;
use shared_types::{Hash, EMPTY_TRIE_ROOT};

/// Nibble path for trie traversal.
///
/// Keys are converted to nibbles (half-bytes, 0-15) for traversal through the
/// trie. Lexicographic order on nibbles equals lexicographic order on bytes.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Nibbles(pub Vec<u8>);

impl Nibbles {
    /// Create nibbles from arbitrary bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut nibbles = Vec::with_capacity(bytes.len() * 2);
        for byte in bytes {
            nibbles.push(byte >> 4);
            nibbles.push(byte & 0x0F);
        }
        Nibbles(nibbles)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get nibble at index.
    pub fn at(&self, index: usize) -> u8 {
        self.0[index]
    }
}

/// Encode a nibble path with hex-prefix.
///
/// First nibble encodes flags: 0=extension even, 1=extension odd, 2=leaf even,
/// 3=leaf odd. If the path is odd, the first path nibble shares the flag byte.
fn encode_hex_prefix(path: &[u8], is_leaf: bool) -> Vec<u8> {
    let odd = path.len() % 2 == 1;
    let prefix = if is_leaf { 2 } else { 0 } + if odd { 1 } else { 0 };

    let mut result = Vec::with_capacity(path.len() / 2 + 1);
    let rest = if odd {
        result.push((prefix << 4) | path[0]);
        &path[1..]
    } else {
        result.push(prefix << 4);
        path
    };
    for chunk in rest.chunks(2) {
        result.push((chunk[0] << 4) | chunk.get(1).copied().unwrap_or(0));
    }
    result
}

/// Root of the trie keyed by `rlp(index)` over an ordered list of values.
///
/// This is the transactions-root construction: entry `i` is stored under the
/// RLP encoding of `i`.
pub fn ordered_trie_root<I, V>(values: I) -> Hash
where
    I: IntoIterator<Item = V>,
    V: AsRef<[u8]>,
{
    let entries = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let key = rlp::encode(&(index as u64));
            (key.to_vec(), value.as_ref().to_vec())
        })
        .collect();
    trie_root(entries)
}

/// Root of the trie holding the given key/value pairs.
///
/// Later duplicates of a key replace earlier ones.
pub fn trie_root(entries: Vec<(Vec<u8>, Vec<u8>)>) -> Hash {
    if entries.is_empty() {
        return EMPTY_TRIE_ROOT;
    }

    let mut nodes: Vec<(Nibbles, Vec<u8>)> = entries
        .into_iter()
        .map(|(key, value)| (Nibbles::from_bytes(&key), value))
        .collect();
    // Stable sort keeps insertion order among equal keys, dedup keeps the last.
    nodes.sort_by(|a, b| a.0.cmp(&b.0));
    nodes.reverse();
    nodes.dedup_by(|a, b| a.0 == b.0);
    nodes.reverse();

    keccak256(&encode_node(&nodes, 0))
}

/// RLP-encode the subtrie holding `entries`, all of which share the first
/// `depth` nibbles. `entries` must be sorted and key-unique.
fn encode_node(entries: &[(Nibbles, Vec<u8>)], depth: usize) -> Vec<u8> {
    match entries {
        [] => vec![0x80],
        [(key, value)] => {
            let mut stream = RlpStream::new_list(2);
            stream.append(&encode_hex_prefix(&key.0[depth..], true));
            stream.append(value);
            stream.out().to_vec()
        }
        [(first, _), .., (last, _)] => {
            // Sorted input: the prefix shared by all keys is the one shared by
            // the first and the last.
            let shared = first.0[depth..]
                .iter()
                .zip(last.0[depth..].iter())
                .take_while(|(a, b)| a == b)
                .count();

            if shared > 0 {
                let child = encode_node(entries, depth + shared);
                let mut stream = RlpStream::new_list(2);
                stream.append(&encode_hex_prefix(&first.0[depth..depth + shared], false));
                append_child(&mut stream, &child);
                return stream.out().to_vec();
            }

            // A key ending exactly here sorts first and becomes the branch value.
            let (value, rest) = if first.len() == depth {
                (Some(&entries[0].1), &entries[1..])
            } else {
                (None, entries)
            };

            let mut stream = RlpStream::new_list(17);
            let mut start = 0;
            for nibble in 0..16u8 {
                let end = start
                    + rest[start..]
                        .iter()
                        .take_while(|(key, _)| key.at(depth) == nibble)
                        .count();
                if end == start {
                    stream.append_empty_data();
                } else {
                    let child = encode_node(&rest[start..end], depth + 1);
                    append_child(&mut stream, &child);
                }
                start = end;
            }
            if let Some(value) = value {
                stream.append(value);
            } else {
                stream.append_empty_data();
            }
            stream.out().to_vec()
        }
    }
}

fn append_child(stream: &mut RlpStream, encoded: &[u8]) {
    if encoded.len() < 32 {
        stream.append_raw(encoded, 1);
    } else {
        stream.append(&keccak256(encoded).to_vec());
    }
}
