//! Preseed-round estimator: choose `preseed_rounds` so the stream solver's
//! total time dominates expected network jitter.
//!
//! No counterpart in `og/pos.go` or its siblings; implemented fresh as a
//! small pure helper.

/// Estimates the number of preseed rounds needed so that streaming the claim
/// `R` times takes at least `scale` seconds, given a stream rate of `rate`
/// bytes/second.
///
/// `unscaled = claim / rate` is the time to stream the claim once. If that
/// already exceeds `scale`, no preseed rounds are needed (`0`). Otherwise,
/// returns `ceil(scale / unscaled)`.
pub fn estimate_preseed_rounds(claim: u64, rate: f64, scale: f64) -> u64 {
    let unscaled = claim as f64 / rate;

    if unscaled > scale {
        return 0;
    }

    (scale / unscaled).ceil() as u64
}
