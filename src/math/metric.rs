//! Color distance between RGBA16 samples

use crate::spatial::buffer::Pixel;

/// Squared Euclidean distance over the R, G, B and A channels
///
/// The largest possible value is `4 * 65535^2`, well inside `u64`.
pub fn squared_distance(reference: Pixel, candidate: Pixel) -> u64 {
    reference
        .iter()
        .zip(candidate.iter())
        .map(|(&r, &c)| {
            let diff = u64::from(r.abs_diff(c));
            diff * diff
        })
        .sum()
}
