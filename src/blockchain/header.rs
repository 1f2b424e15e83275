use std::fmt;

use serde::Serialize;

/// Fixed-length sequence of decimal digits: the unit both published as a
/// target and guessed by candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Header(Vec<u8>);

impl Header {
    /// All-zero header, as carried by the genesis block.
    pub fn zeroed(len: usize) -> Self {
        Self(vec![0; len])
    }

    /// Build a header from raw digits. Values above 9 are clamped.
    pub fn from_digits(digits: impl IntoIterator<Item = u8>) -> Self {
        Self(digits.into_iter().map(|d| d.min(9)).collect())
    }

    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_zeroed(&self) -> bool {
        self.0.iter().all(|&d| d == 0)
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}
