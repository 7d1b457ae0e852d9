//! Slice statistics shared by capability and control-limit estimation
//!
//! A measurement sequence is a plain `&[f64]`; these helpers never modify it.

/// Ascending copy of the data, ordered by [`f64::total_cmp`]
///
/// Positive NaN sorts after every number.
///
/// ```rust
/// use spc_core::utils::sorted;
///
/// assert_eq!(sorted(&[2.5, -1.0, 0.0]), vec![-1.0, 0.0, 2.5]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut out = data.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(data: &[f64]) -> Option<f64> {
    (!data.is_empty()).then(|| data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample standard deviation with the `n - 1` denominator
///
/// `None` below two measurements, where the sample estimate is undefined.
///
/// ```rust
/// use spc_core::utils::std_dev;
///
/// let sd = std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((sd * sd - 2.5).abs() < 1e-12);
/// ```
pub fn std_dev(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let m = mean(data)?;
    let sum_sq: f64 = data.iter().map(|&x| (x - m).powi(2)).sum();
    Some((sum_sq / (data.len() - 1) as f64).sqrt())
}

pub fn all_finite(data: &[f64]) -> bool {
    data.iter().all(|x| x.is_finite())
}
