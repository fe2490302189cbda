use rand::SeedableRng;
use rand::seq::index;
use rand_chacha::ChaCha8Rng;

/// Seed used for every draw unless the params file overrides it.
pub const SUBSAMPLE_SEED: u64 = 42;

/// Draws `min_reads` of `lines` uniformly without replacement.
///
/// The generator is seeded fresh on every call, so the subset chosen for one key
/// does not depend on which keys were drawn before it. Selected lines keep their
/// input order. When there are no more than `min_reads` lines, all are returned.
pub fn subsample(lines: Vec<String>, min_reads: usize, seed: u64) -> Vec<String> {
    if lines.len() <= min_reads {
        return lines;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut keep = vec![false; lines.len()];
    for i in index::sample(&mut rng, lines.len(), min_reads).into_vec() {
        keep[i] = true;
    }

    lines
        .into_iter()
        .zip(keep)
        .filter_map(|(line, keep)| if keep { Some(line) } else { None })
        .collect()
}
