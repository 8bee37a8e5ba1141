//! Call descriptor voted on by federation members.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A function name plus its encoded arguments.
///
/// Ordering is by function name, then arguments lexicographically. The
/// election relies on it to pick a winner deterministically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CallSpec {
    function: String,
    arguments: Vec<Vec<u8>>,
}

impl CallSpec {
    pub fn new(function: impl Into<String>, arguments: Vec<Vec<u8>>) -> Self {
        Self {
            function: function.into(),
            arguments,
        }
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn arguments(&self) -> &[Vec<u8>] {
        &self.arguments
    }
}

impl fmt::Display for CallSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "0x{}", hex::encode(argument))?;
        }
        write!(f, ")")
    }
}
