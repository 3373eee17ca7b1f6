//! Bounded accuracy score comparing measured to theoretical operation counts.

/// Score how closely a measured operation count tracks its theoretical
/// estimate, on a 0–100 scale.
///
/// The ratio `actual / theoretical` maps piecewise:
/// - Within ±20% of 1.0: a perfect-to-near-perfect band, `100 − |ratio − 1| · 100`
/// - Below 0.8 (suspiciously few operations): steep penalty, 200 points per
///   unit of shortfall from 0.8
/// - Above 1.2 (more operations than predicted): gentler penalty, 50 points
///   per unit of excess over 1.2
///
/// A zero theoretical count scores 100 rather than dividing by zero; the
/// result is always clamped to `[0, 100]`.
pub fn score(actual_ops: f64, theoretical_ops: f64) -> f64 {
    if theoretical_ops == 0.0 {
        return 100.0;
    }
    let ratio = actual_ops / theoretical_ops;
    let raw = if (0.8..=1.2).contains(&ratio) {
        100.0 - (ratio - 1.0).abs() * 100.0
    } else if ratio < 0.8 {
        (80.0 - (0.8 - ratio) * 200.0).max(0.0)
    } else {
        (80.0 - (ratio - 1.2) * 50.0).max(0.0)
    };
    raw.clamp(0.0, 100.0)
}
