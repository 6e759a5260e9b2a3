//! Define the [`HashFunction`] trait as well as standard hash functions.
//!
//! The isomorphism algorithm only requires a deterministic function
//! (across processes, and across the two graphs being compared)
//! with a negligible collision rate;
//! any implementation of [`HashFunction`] can be plugged in.
use std::fmt::{Debug, Write};
use std::hash::{Hash, Hasher};

use sha2::Digest;

/// Abstraction of hash function used by the isomorphism algorithm.
pub trait HashFunction {
    /// Output of the hash function; usually `[u8; N]`.
    type Output: AsRef<[u8]> + Copy + Debug + Eq + Hash + Ord;

    /// Start the computation of a hash
    fn initialize() -> Self;

    /// Update internal state by hashing `data`
    fn update(&mut self, data: impl AsRef<[u8]>);

    /// Return the hash
    fn finalize(self) -> Self::Output;

    /// Hash `data` in one go.
    fn hash(data: impl AsRef<[u8]>) -> Self::Output
    where
        Self: Sized,
    {
        let mut state = Self::initialize();
        state.update(data);
        state.finalize()
    }
}

/// The [SHA-256](https://en.wikipedia.org/wiki/SHA-2) [`HashFunction`]
pub struct Sha256(sha2::Sha256);

impl HashFunction for Sha256 {
    type Output = [u8; 32];

    fn initialize() -> Self {
        Sha256(sha2::Sha256::new())
    }

    fn update(&mut self, data: impl AsRef<[u8]>) {
        self.0.update(data.as_ref());
    }

    fn finalize(self) -> Self::Output {
        self.0.finalize().into()
    }
}

/// The [SHA-384](https://en.wikipedia.org/wiki/SHA-2) [`HashFunction`]
pub struct Sha384(sha2::Sha384);

impl HashFunction for Sha384 {
    type Output = [u8; 48];

    fn initialize() -> Self {
        Sha384(sha2::Sha384::new())
    }

    fn update(&mut self, data: impl AsRef<[u8]>) {
        self.0.update(data.as_ref());
    }

    fn finalize(self) -> Self::Output {
        self.0.finalize().into()
    }
}

/// A fast, non-cryptographic 64-bit [`HashFunction`],
/// based on [`rustc_hash::FxHasher`].
///
/// It is deterministic (no random seed),
/// but offers a much smaller output space than [`Sha256`];
/// prefer it only for small graphs where speed matters.
#[derive(Default)]
pub struct FxHash64(rustc_hash::FxHasher);

impl HashFunction for FxHash64 {
    type Output = [u8; 8];

    fn initialize() -> Self {
        FxHash64::default()
    }

    fn update(&mut self, data: impl AsRef<[u8]>) {
        let data = data.as_ref();
        // length prefix, so that consecutive updates can not be confused
        self.0.write_usize(data.len());
        self.0.write(data);
    }

    fn finalize(self) -> Self::Output {
        self.0.finish().to_be_bytes()
    }
}

/// Render a hash value as lowercase hexadecimal.
pub fn hex(hash: &impl AsRef<[u8]>) -> String {
    let mut digest = String::with_capacity(2 * hash.as_ref().len());
    for b in hash.as_ref() {
        // writing to a String can not fail
        let _ = write!(&mut digest, "{b:02x}");
    }
    digest
}
