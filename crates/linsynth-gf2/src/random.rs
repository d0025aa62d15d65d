//! Seeded generation of random invertible binary matrices.
//!
//! The seed-to-matrix mapping is part of the public contract and is
//! versioned by [`GENERATOR_VERSION`]:
//!
//! 1. The stream is `Pcg64Mcg::seed_from_u64(seed)`, sampled with
//!    `Rng::gen_range`.
//! 2. Start from the identity. For `n == 1` the identity is returned.
//! 3. Run [`mixing_rounds`]`(n)` steps. Each step draws `a` in `[0, n)`,
//!    `b` in `[0, n - 1)` (incremented when `b >= a`) and `k` in `[0, 4)`.
//!    `k == 0` swaps rows `a` and `b`; otherwise row `a` ^= row `b`.
//!
//! Elementary row operations are invertible, so the result is invertible
//! without rejection sampling.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use tracing::trace;

use crate::error::{Gf2Error, Gf2Result};
use crate::matrix::BinaryMatrix;

/// Version of the seed-to-matrix mapping implemented here.
pub const GENERATOR_VERSION: u32 = 1;

/// Number of elementary operations applied for an `n x n` matrix.
pub fn mixing_rounds(n: usize) -> usize {
    let log = usize::BITS - n.saturating_sub(1).leading_zeros();
    2 * n * (log as usize).max(1)
}

/// Generate a random invertible `n x n` matrix, deterministic in `(n, seed)`.
pub fn random_invertible_matrix(n: usize, seed: u64) -> Gf2Result<BinaryMatrix> {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    random_invertible_matrix_with_rng(n, &mut rng)
}

/// Generate a random invertible matrix from a caller-provided stream.
pub fn random_invertible_matrix_with_rng<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
) -> Gf2Result<BinaryMatrix> {
    if n == 0 {
        return Err(Gf2Error::invalid_size(0));
    }

    let mut matrix = BinaryMatrix::identity(n);
    if n == 1 {
        return Ok(matrix);
    }

    let rounds = mixing_rounds(n);
    trace!(n, rounds, "mixing identity with elementary row operations");
    for _ in 0..rounds {
        let a = rng.gen_range(0..n);
        let mut b = rng.gen_range(0..n - 1);
        if b >= a {
            b += 1;
        }
        if rng.gen_range(0..4u8) == 0 {
            matrix.swap_rows(a, b);
        } else {
            matrix.row_xor(a, b);
        }
    }

    debug_assert!(matrix.is_invertible());
    Ok(matrix)
}

/// Generate a uniformly random `n x n` matrix, which may be singular.
pub fn random_matrix(n: usize, seed: u64) -> Gf2Result<BinaryMatrix> {
    if n == 0 {
        return Err(Gf2Error::invalid_size(0));
    }
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut matrix = BinaryMatrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            matrix.set(i, j, rng.r#gen());
        }
    }
    Ok(matrix)
}
