//! A [`Color`] represents a color parsed from any of the supported textual
//! notations.

use bitflags::bitflags;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value used for alpha and blend arithmetic.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value used for alpha and blend arithmetic.
pub type Component = f64;

bitflags! {
    /// Flags to mark any missing components on a [`Color`].
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Flags : u8 {
        /// Set when the alpha component of a [`Color`] is missing.
        const ALPHA_IS_NONE = 1 << 0;
    }
}

/// The textual notations a color can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    /// Shorthand hex, `#rgb`, each digit duplicated.
    Hex3,
    /// Shorthand hex with alpha, `#rgba`, each digit duplicated.
    Hex4,
    /// Full hex, `#rrggbb`.
    Hex6,
    /// Full hex with alpha, `#rrggbbaa`.
    Hex8,
    /// Functional notation, `rgb(r,g,b)`.
    Rgb,
    /// Functional notation with alpha, `rgba(r,g,b,a)`.
    Rgba,
}

impl Notation {
    /// Return the serialization family of this notation.
    pub fn family(&self) -> Family {
        match self {
            Notation::Hex3 | Notation::Hex4 | Notation::Hex6 | Notation::Hex8 => Family::Hex,
            Notation::Rgb | Notation::Rgba => Family::Functional,
        }
    }
}

/// The two serialization families a [`Notation`] can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    /// `#`-prefixed hex digits.
    Hex,
    /// `rgb(..)`/`rgba(..)` function syntax.
    Functional,
}

impl Family {
    /// Return the other family.
    pub fn flipped(&self) -> Family {
        match self {
            Family::Hex => Family::Functional,
            Family::Functional => Family::Hex,
        }
    }
}

/// Struct that holds a color parsed from any of the supported notations.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    /// The red channel of the color.
    pub red: u8,
    /// The green channel of the color.
    pub green: u8,
    /// The blue channel of the color.
    pub blue: u8,
    /// The alpha component of the color.
    pub alpha: Component,
    /// Holds any flags that might be enabled for this color.
    pub flags: Flags,
    /// The notation the color was written in.
    pub notation: Notation,
}

impl Color {
    /// Create a new [`Color`]. The alpha component can take values that can
    /// be converted into a [`ComponentDetails`], which automates marking it
    /// missing. For example:
    /// ```rust
    /// use tinct::{Color, Notation};
    /// let c = Color::new(16, 32, 64, None, Notation::Hex6);
    /// assert!(c.alpha().is_none());
    /// ```
    pub fn new(
        red: u8,
        green: u8,
        blue: u8,
        alpha: impl Into<ComponentDetails>,
        notation: Notation,
    ) -> Self {
        let mut flags = Flags::empty();

        let alpha = alpha
            .into()
            .value_and_flag(&mut flags, Flags::ALPHA_IS_NONE);

        Self {
            red,
            green,
            blue,
            alpha,
            flags,
            notation,
        }
    }

    /// Return the alpha component of the color.
    pub fn alpha(&self) -> Option<Component> {
        if self.flags.contains(Flags::ALPHA_IS_NONE) {
            None
        } else {
            Some(self.alpha)
        }
    }
}

/// A struct that holds details about an alpha component passed to
/// [`Color::new`]. Anything that can be passed implements a
/// `From<?> for ComponentDetails`.
pub struct ComponentDetails {
    value: Component,
    is_none: bool,
}

impl ComponentDetails {
    /// Extract the value and set the given flag if the component is none.
    pub fn value_and_flag(&self, flags: &mut Flags, flag: Flags) -> Component {
        if self.is_none {
            *flags |= flag;
        }
        self.value
    }
}

impl From<Component> for ComponentDetails {
    fn from(value: Component) -> Self {
        Self {
            value,
            is_none: false,
        }
    }
}

impl From<Option<Component>> for ComponentDetails {
    fn from(value: Option<Component>) -> Self {
        if let Some(value) = value {
            Self::from(value)
        } else {
            Self {
                value: 0.0,
                is_none: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_color_with_correct_components() {
        let c = Color::new(10, 20, 30, 0.4, Notation::Hex6);
        assert_eq!((c.red, c.green, c.blue), (10, 20, 30));
        assert_eq!(c.alpha, 0.4);
        assert_eq!(c.flags, Flags::empty());
        assert_eq!(c.notation, Notation::Hex6);

        let c = Color::new(10, 20, 30, None, Notation::Rgb);
        assert_eq!(c.alpha, 0.0);
        assert_eq!(c.flags, Flags::ALPHA_IS_NONE);
        assert_eq!(c.alpha(), None);
    }

    #[test]
    fn test_component_details() {
        let cd = ComponentDetails::from(0.5);
        assert_eq!(cd.value, 0.5);
        assert!(!cd.is_none);

        let cd = ComponentDetails::from(Some(0.25));
        assert_eq!(cd.value, 0.25);
        assert!(!cd.is_none);

        let cd = ComponentDetails::from(None);
        assert_eq!(cd.value, 0.0);
        assert!(cd.is_none);
    }

    #[test]
    fn notation_families() {
        assert_eq!(Notation::Hex3.family(), Family::Hex);
        assert_eq!(Notation::Hex8.family(), Family::Hex);
        assert_eq!(Notation::Rgb.family(), Family::Functional);
        assert_eq!(Notation::Rgba.family(), Family::Functional);
        assert_eq!(Family::Hex.flipped(), Family::Functional);
        assert_eq!(Family::Functional.flipped(), Family::Hex);
    }
}
