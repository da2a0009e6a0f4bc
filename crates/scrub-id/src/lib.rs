//! Error identifier issuance
//!
//! Issues the opaque identifier that correlates a sanitized error surfaced
//! to a user with the unsanitized original retained in logs. Two formats:
//! a random v4 UUID, or a 26-character lexicographically time-sortable
//! identifier (Crockford base32, 48-bit millisecond timestamp + 80 bits of
//! entropy). Uniqueness is statistical; no dedup table is kept.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Identifier issuance mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    #[default]
    None,
    Random,
    Sortable,
}

/// Issue an identifier for the given mode. `IdMode::None` issues nothing;
/// the issuer never produces an empty string.
pub fn issue(mode: IdMode) -> Option<String> {
    match mode {
        IdMode::None => None,
        IdMode::Random => Some(uuid::Uuid::new_v4().to_string()),
        IdMode::Sortable => Some(sortable()),
    }
}

// Crockford base32: no I, L, O, U.
const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";
const RANDOM_MASK: u128 = (1 << 80) - 1;

// Last issued (timestamp ms, random component). Identifiers issued within
// one millisecond increment the random component instead of re-rolling it,
// keeping issuance order and lexicographic order aligned.
static LAST: Mutex<(u64, u128)> = Mutex::new((0, 0));

fn sortable() -> String {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);

    let (timestamp, random) = match LAST.lock() {
        Ok(mut last) => {
            let next = if now_ms <= last.0 {
                // Same millisecond (or a clock step backwards): stay on the
                // last timestamp and increment.
                (last.0, (last.1 + 1) & RANDOM_MASK)
            } else {
                (now_ms, rand::random::<u128>() & RANDOM_MASK)
            };
            *last = next;
            next
        }
        // Poisoned lock: fall back to an unordered but still unique value.
        Err(_) => (now_ms, rand::random::<u128>() & RANDOM_MASK),
    };

    encode(timestamp, random)
}

fn encode(timestamp_ms: u64, random: u128) -> String {
    let value = ((timestamp_ms as u128) << 80) | (random & RANDOM_MASK);
    let mut out = [0u8; 26];
    let mut rest = value;
    for slot in out.iter_mut().rev() {
        *slot = ALPHABET[(rest & 0x1F) as usize];
        rest >>= 5;
    }
    String::from_utf8(out.to_vec()).expect("alphabet is ASCII")
}
