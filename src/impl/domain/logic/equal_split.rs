use crate::entities::RemainderPolicy;

use super::utils::{from_cents, to_cents};

/// Divides `basis` into `n` shares rounded to the cent. See `RemainderPolicy`
/// for how the leftover cents are handled.
pub fn split_equally(basis: f64, n: usize, policy: RemainderPolicy) -> Vec<f64> {
    if n == 0 {
        return vec![];
    }
    let basis_cents = to_cents(basis);
    let parts = n as i64;
    let rounded_share = (basis_cents as f64 / parts as f64).round() as i64;

    let shares: Vec<i64> = match policy {
        RemainderPolicy::Unadjusted => vec![rounded_share; n],
        RemainderPolicy::LastEntry => {
            let floor_share = basis_cents.div_euclid(parts);
            let mut shares = vec![floor_share; n];
            shares[n - 1] = floor_share + basis_cents.rem_euclid(parts);
            shares
        }
        RemainderPolicy::Distribute => {
            let floor_share = basis_cents.div_euclid(parts);
            let leftover = basis_cents.rem_euclid(parts) as usize;
            (0..n)
                .map(|i| floor_share + if i < leftover { 1 } else { 0 })
                .collect()
        }
    };
    shares.into_iter().map(from_cents).collect()
}
