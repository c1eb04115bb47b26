//! Exact binomial coefficients.

/// Binomial coefficient `C(n, k)`, computed exactly in integer arithmetic.
///
/// Uses the multiplicative form `r = r * (n - k + i) / i`, which stays exact
/// because every intermediate `r` is itself a binomial coefficient. Returns 0
/// when `k > n`.
pub fn binomial(n: u32, k: u32) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;

    let mut r: u64 = 1;
    for i in 1..=k {
        r = r * (n - k + i) / i;
    }
    r
}
