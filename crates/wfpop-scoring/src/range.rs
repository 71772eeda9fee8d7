//! Run-wide min–max rescaling of raw scores into `[0, 100]`.

/// Rounds half away from zero to `places` decimal places.
///
/// Values too large to scale are already integral at that precision and are
/// returned unchanged.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Linearly rescales `raw_scores` into `[0, 100]`, rounded to 2 places.
///
/// The minimum maps to `0.0` and the maximum to `100.0`. When every score is
/// equal (including a single score) the span falls back to `1.0`, so every
/// result is `0.0`. An empty slice yields an empty vector.
///
/// Inputs must be finite. A span wider than `f64::MAX` is computed on halved
/// values so the result stays in range.
#[must_use]
pub fn normalize_scores(raw_scores: &[f64]) -> Vec<f64> {
    let Some(min_r) = raw_scores.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let max_r = raw_scores.iter().copied().reduce(f64::max).unwrap_or(min_r);

    #[allow(clippy::float_cmp)]
    let (scale, span) = if max_r == min_r {
        (1.0, 1.0)
    } else if (max_r - min_r).is_finite() {
        (1.0, max_r - min_r)
    } else {
        (0.5, max_r * 0.5 - min_r * 0.5)
    };

    raw_scores
        .iter()
        .map(|raw| round_to((raw * scale - min_r * scale) / span * 100.0, 2))
        .collect()
}
