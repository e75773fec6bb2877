//! Derive per-series border and background colors for chart datasets.

use crate::blend::{blend, BlendRequest};
use crate::color::Component;
use crate::random;

/// The blend strength used to derive a background tone from a border color.
const DIM_AMOUNT: Component = 0.5;

/// Return `len` independent `#`-prefixed border colors, zero-padded to six
/// digits so every derived color parses again.
pub fn series_colors(len: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| format!("#{:06x}", random::draw(&mut rng)))
        .collect()
}

/// Derive the dimmed background tone for each border color, a half blend
/// toward white. A color that fails to blend is passed through unchanged.
pub fn dimmed<S: AsRef<str>>(colors: &[S]) -> Vec<String> {
    colors
        .iter()
        .map(|color| {
            let color = color.as_ref();
            blend(&BlendRequest::new(DIM_AMOUNT, color)).unwrap_or_else(|_| color.to_string())
        })
        .collect()
}
