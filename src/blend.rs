//! Weighted blending of a color toward black, white or a second color.

use num_traits::Float;
use thiserror::Error;

use crate::color::{Color, Component};
use crate::parse::{parse_color, ParseColorError};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Weighted root-sum-square of two channels, the perceptual midpoint.
fn rss<T: Float>(a: T, b: T, t: T) -> T {
    ((T::one() - t) * a * a + t * b * b).sqrt()
}

/// How the channels of two colors are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// Weighted arithmetic mean of the channels.
    Linear,
    /// Weighted root-sum-square of the channels.
    #[default]
    Magnitude,
}

/// The color a blend moves toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Target<'a> {
    /// Pure black when the amount is negative, pure white otherwise. The
    /// output keeps the base color's notation family.
    #[default]
    Default,
    /// Same target as [`Target::Default`], but the output notation family is
    /// flipped: hex in, functional out, and the other way around.
    Convert,
    /// An explicit second color. Its notation family decides the output
    /// family.
    Color(&'a str),
}

/// Immutable parameters for one blend operation.
#[derive(Clone, Copy, Debug)]
pub struct BlendRequest<'a> {
    /// Blend strength in `[-1, 1]`. The magnitude is the weight of the
    /// target, the sign selects the default target.
    pub amount: Component,
    /// The color to start from, in any supported notation.
    pub base: &'a str,
    /// The color to move toward.
    pub target: Target<'a>,
    /// The channel interpolation mode.
    pub interpolation: Interpolation,
}

impl<'a> BlendRequest<'a> {
    /// Create a request that blends `base` toward the polarity default with
    /// magnitude interpolation.
    pub fn new(amount: Component, base: &'a str) -> Self {
        Self {
            amount,
            base,
            target: Target::default(),
            interpolation: Interpolation::default(),
        }
    }
}

/// The ways a blend can fail.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BlendError {
    /// The amount was NaN or outside `[-1, 1]`.
    #[error("blend amount must be within [-1, 1]")]
    AmountOutOfRange,
    /// The base or target color did not parse.
    #[error(transparent)]
    Parse(#[from] ParseColorError),
}

impl Color {
    /// Mix this color toward `other`, with `weight` as the fraction of
    /// `other` in every channel. Alpha is mixed only when both sides carry
    /// one; a one-sided alpha is kept as is, and two missing alphas stay
    /// missing.
    pub fn mix(&self, other: &Self, weight: Component, interpolation: Interpolation) -> Self {
        let channel = |a: u8, b: u8| -> u8 {
            let (a, b) = (a as Component, b as Component);
            let mixed = match interpolation {
                Interpolation::Linear => lerp(a, b, weight),
                Interpolation::Magnitude => rss(a, b, weight),
            };
            mixed.round() as u8
        };

        let alpha = match (self.alpha(), other.alpha()) {
            (Some(a), Some(b)) => Some(lerp(a, b, weight)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        };

        Color::new(
            channel(self.red, other.red),
            channel(self.green, other.green),
            channel(self.blue, other.blue),
            alpha,
            self.notation,
        )
    }
}

/// Blend the request's base color toward its target and serialize the result
/// in the matching notation family.
///
/// ```rust
/// use tinct::{blend, BlendRequest, Interpolation, Target};
/// let request = BlendRequest {
///     amount: 0.5,
///     base: "#000000",
///     target: Target::Default,
///     interpolation: Interpolation::Linear,
/// };
/// assert_eq!(blend(&request).unwrap(), "#808080");
/// ```
pub fn blend(request: &BlendRequest) -> Result<String, BlendError> {
    let BlendRequest {
        amount,
        base,
        target,
        interpolation,
    } = *request;

    if !(-1.0..=1.0).contains(&amount) {
        return Err(BlendError::AmountOutOfRange);
    }

    let base = parse_color(base)?;

    // The default target is decided by the sign of the amount, the weight
    // only by its magnitude.
    let polarity_default = || -> Color {
        let channel = if amount < 0.0 { 0 } else { 255 };
        Color::new(channel, channel, channel, None, base.notation)
    };

    let (target, family) = match target {
        Target::Color(text) => {
            let target = parse_color(text)?;
            let family = target.notation.family();
            (target, family)
        }
        Target::Default => (polarity_default(), base.notation.family()),
        Target::Convert => (polarity_default(), base.notation.family().flipped()),
    };

    let mixed = base.mix(&target, amount.abs(), interpolation);

    Ok(mixed.serialize(family))
}
