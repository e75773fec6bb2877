//! Random hex-color generation.

use rand::Rng;

/// Draw a uniformly random 24-bit color value.
pub(crate) fn draw<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(0..0xff_ffff)
}

pub(crate) fn hex_digits<R: Rng>(rng: &mut R) -> String {
    format!("{:x}", draw(rng))
}

/// Return the hex digits of a uniformly random 24-bit color, unprefixed.
///
/// The result is not zero-padded, so small draws yield fewer than six
/// digits. [`crate::series_colors`] produces padded, `#`-prefixed colors.
pub fn next_color() -> String {
    hex_digits(&mut rand::thread_rng())
}

/// Return `count` independently drawn random colors, as in [`next_color`].
pub fn next_colors(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| hex_digits(&mut rng)).collect()
}
