use crate::config::VALUE_BOUND;
use anyhow::{Context, Result};
use rand::Rng;

/// Element type of the dataset. Values stay below [`VALUE_BOUND`], so sums of
/// any dataset this crate can allocate fit comfortably in an `i64` accumulator.
pub type Elem = i32;

/// Generate `count` uniformly random elements in `[0, VALUE_BOUND)`.
///
/// The generator instance is owned by the caller and passed by reference, so
/// there is no hidden process-wide random state. Allocation failure is
/// reported as an error instead of aborting the process.
pub fn generate(count: usize, rng: &mut impl Rng) -> Result<Vec<Elem>> {
    let mut data: Vec<Elem> = Vec::new();
    data.try_reserve_exact(count)
        .context(format!("failed to allocate dataset buffer ({} elements)", count))?;
    data.extend((0..count).map(|_| rng.gen_range(0..VALUE_BOUND)));
    Ok(data)
}

/// Sum a slice of elements into a 64-bit accumulator.
pub fn partial_sum(values: &[Elem]) -> i64 {
    values.iter().map(|&v| i64::from(v)).sum()
}
