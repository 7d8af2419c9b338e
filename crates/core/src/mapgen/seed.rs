//! Seed resolution and deterministic random draw helpers over `ChaCha8Rng`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use super::params::GenerationParameters;

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Entropy-derived seed for runs without a fixed custom seed. The counter
/// keeps back-to-back calls distinct even at nanosecond clock granularity.
pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// The seed a generation run will actually use, always reported on the result.
pub(super) fn resolve_seed(params: &GenerationParameters) -> u64 {
    if params.use_custom_seed { params.custom_seed } else { generate_runtime_seed() }
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

/// Uniform draw in `[0, 1)` built from the top 53 bits of one RNG word.
pub(super) fn random_unit(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
}

/// Uniform draw in `[min_value, max_value]` (inclusive).
pub(super) fn random_usize(rng: &mut ChaCha8Rng, min_value: usize, max_value: usize) -> usize {
    debug_assert!(min_value <= max_value);
    let range_size = max_value - min_value + 1;
    min_value + (rng.next_u64() as usize % range_size)
}

pub(super) fn random_bool(rng: &mut ChaCha8Rng) -> bool {
    rng.next_u64() & 1 == 0
}
