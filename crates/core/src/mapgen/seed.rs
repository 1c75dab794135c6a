//! Seed text hashing and runtime seed derivation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use xxhash_rust::xxh3::xxh3_64;

/// Hashes the seed text into the value that seeds the noise RNG.
pub(super) fn hash_seed_text(text: &str) -> u64 {
    xxh3_64(text.as_bytes())
}

static RUNTIME_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Time-derived seed text for requests that ask for a random seed.
///
/// Not reproducible across runs; callers record the returned text on the
/// generated map so any run can still be replayed.
pub(super) fn runtime_seed_text() -> String {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = RUNTIME_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    format!("{:016x}", mix_seed(entropy))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashing_the_same_text_gives_the_same_value() {
        assert_eq!(hash_seed_text("cavern"), hash_seed_text("cavern"));
        assert_ne!(hash_seed_text("cavern"), hash_seed_text("cavern2"));
        assert_ne!(hash_seed_text(""), hash_seed_text(" "));
    }

    #[test]
    fn runtime_seed_text_changes_between_calls() {
        let first = runtime_seed_text();
        let second = runtime_seed_text();
        assert_ne!(first, second, "runtime seed derivation should vary per call");
    }

    #[test]
    fn runtime_seed_text_is_sixteen_hex_digits() {
        let text = runtime_seed_text();
        assert_eq!(text.len(), 16);
        assert!(text.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
