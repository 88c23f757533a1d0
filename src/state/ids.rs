//! Identifier generation for list entries.
//!
//! Ids look like `_k3j9x0q2m`: a `_` prefix followed by nine base-36 digits.
//! That gives roughly 10^14 distinct values, plenty for interactive use.

use crate::constants::{ID_DIGITS, ID_PREFIX};
use uuid::Uuid;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of fresh entry ids.
///
/// Implementations must never fail; uniqueness only has to hold within a
/// single process run.
pub trait IdGenerator: Send {
    fn generate(&mut self) -> String;
}

/// Random ids backed by the entropy of a v4 UUID.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&mut self) -> String {
        let space = 36u128.pow(ID_DIGITS as u32);
        encode_base36(Uuid::new_v4().as_u128() % space)
    }
}

/// Deterministic ids (`_000000001`, `_000000002`, ...), handy for tests and demos.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u128,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&mut self) -> String {
        let id = encode_base36(self.next);
        self.next += 1;
        id
    }
}

/// Format `value` as a prefixed, zero-padded base-36 id.
fn encode_base36(mut value: u128) -> String {
    let mut digits = [b'0'; ID_DIGITS];
    for slot in digits.iter_mut().rev() {
        *slot = ALPHABET[(value % 36) as usize];
        value /= 36;
    }
    let mut id = String::with_capacity(ID_PREFIX.len() + ID_DIGITS);
    id.push_str(ID_PREFIX);
    id.extend(digits.iter().map(|&b| b as char));
    id
}
