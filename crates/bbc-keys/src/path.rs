//! BIP32/44-style derivation paths.
//!
//! A path is an ordered sequence of `(index, hardened)` steps starting
//! at the master node, written textually as `m/44'/6602'/0'/0'/0'` (or
//! the reduced simple form `m/44'`). Indices occupy 31 bits; the top
//! bit is the hardened flag.

use std::fmt;
use std::str::FromStr;

use crate::KeysError;

/// The purpose field of BIP-44 paths.
pub const PURPOSE: u32 = 44;

/// The chain's registered coin type.
pub const COIN_TYPE: u32 = 6602;

/// Offset added to an index for hardened derivation.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// A single derivation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildStep {
    /// The 31-bit child index.
    pub index: u32,
    /// Whether the step uses the hardened (private-key) branch.
    pub hardened: bool,
}

impl ChildStep {
    /// Create a hardened step for the given index.
    pub fn hardened(index: u32) -> Self {
        ChildStep { index, hardened: true }
    }
}

/// A parsed derivation path.
///
/// Parsing validates syntax only; whether each step is derivable on
/// the target curve is decided by [`crate::derivation::derive`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivationPath {
    steps: Vec<ChildStep>,
}

impl DerivationPath {
    /// The fixed shallow path `m/44'` used when a caller wants a single
    /// key for a seed with no further indexing.
    ///
    /// # Returns
    /// The one-step simple path.
    pub fn simple() -> Self {
        DerivationPath {
            steps: vec![ChildStep::hardened(PURPOSE)],
        }
    }

    /// A fully-specified BIP-44 path `m/44'/6602'/account'/change'/index'`.
    ///
    /// Every level is hardened because ed25519 defines no public
    /// derivation branch. On this chain change is typically returned to
    /// the sending address, so `change_type` (0 = external receive,
    /// 1 = change) is largely informational.
    ///
    /// # Arguments
    /// * `account` - Account index, starting at 0.
    /// * `change_type` - 0 for external use, 1 for change.
    /// * `index` - Address index, starting at 0.
    ///
    /// # Returns
    /// The five-step path.
    pub fn bip44(account: u32, change_type: u32, index: u32) -> Self {
        DerivationPath {
            steps: vec![
                ChildStep::hardened(PURPOSE),
                ChildStep::hardened(COIN_TYPE),
                ChildStep::hardened(account),
                ChildStep::hardened(change_type),
                ChildStep::hardened(index),
            ],
        }
    }

    /// Return the ordered derivation steps.
    ///
    /// # Returns
    /// A slice of the parsed steps.
    pub fn steps(&self) -> &[ChildStep] {
        &self.steps
    }
}

impl FromStr for DerivationPath {
    type Err = KeysError;

    /// Parse a textual derivation path.
    ///
    /// Accepts `'` or `h` as the hardened marker. Fails with
    /// `InvalidPath` for a missing `m/` root, empty segments,
    /// non-numeric indices, or indices that do not fit in 31 bits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let rest = s
            .strip_prefix("m/")
            .ok_or_else(|| KeysError::InvalidPath(format!("path must start with 'm/': {s}")))?;
        if rest.is_empty() {
            return Err(KeysError::InvalidPath("empty derivation path".to_string()));
        }

        let mut steps = Vec::new();
        for segment in rest.split('/') {
            if segment.is_empty() {
                return Err(KeysError::InvalidPath(format!("empty path segment in {s}")));
            }

            let (digits, hardened) = match segment.strip_suffix('\'').or_else(|| segment.strip_suffix('h')) {
                Some(d) => (d, true),
                None => (segment, false),
            };

            let index: u32 = digits.parse().map_err(|_| {
                KeysError::InvalidPath(format!("invalid index '{segment}' in {s}"))
            })?;
            if index >= HARDENED_OFFSET {
                return Err(KeysError::InvalidPath(format!(
                    "index {index} does not fit in 31 bits"
                )));
            }

            steps.push(ChildStep { index, hardened });
        }

        Ok(DerivationPath { steps })
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for step in &self.steps {
            write!(f, "/{}", step.index)?;
            if step.hardened {
                write!(f, "'")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let path: DerivationPath = "m/44'".parse().unwrap();
        assert_eq!(path, DerivationPath::simple());
    }

    #[test]
    fn test_parse_full() {
        let path: DerivationPath = "m/44'/6602'/0'/0'/0'".parse().unwrap();
        assert_eq!(path, DerivationPath::bip44(0, 0, 0));
    }

    #[test]
    fn test_parse_h_marker() {
        let path: DerivationPath = "m/44h/6602h".parse().unwrap();
        assert!(path.steps().iter().all(|s| s.hardened));
    }

    #[test]
    fn test_parse_non_hardened_is_valid_syntax() {
        // Syntax permits non-hardened steps; the deriver rejects them.
        let path: DerivationPath = "m/44'/0".parse().unwrap();
        assert!(!path.steps()[1].hardened);
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "m", "44'/0'", "m/", "m//44'", "m/44'/", "m/abc'", "m/44'x", "m/2147483648'"] {
            let result: Result<DerivationPath, _> = bad.parse();
            assert!(
                matches!(result, Err(KeysError::InvalidPath(_))),
                "expected InvalidPath for {bad:?}"
            );
        }
    }

    #[test]
    fn test_display_roundtrip() {
        let path = DerivationPath::bip44(3, 1, 7);
        assert_eq!(path.to_string(), "m/44'/6602'/3'/1'/7'");
        let reparsed: DerivationPath = path.to_string().parse().unwrap();
        assert_eq!(reparsed, path);
    }
}
