//! Serialize a [`Color`] back to text in a given notation family.

use crate::color::{Color, Family};

impl Color {
    /// Serialize the color in the given family. Hex output is always
    /// zero-padded to 6 digits, with 2 more for alpha when it is present.
    /// Functional output carries no spaces and rounds alpha to 3 decimals.
    pub fn serialize(&self, family: Family) -> String {
        match family {
            Family::Hex => match self.alpha() {
                Some(alpha) => format!(
                    "#{:02x}{:02x}{:02x}{:02x}",
                    self.red,
                    self.green,
                    self.blue,
                    (alpha * 255.0).round() as u8
                ),
                None => format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue),
            },
            Family::Functional => match self.alpha() {
                Some(alpha) => {
                    let alpha = (alpha * 1000.0).round() / 1000.0;
                    format!("rgba({},{},{},{})", self.red, self.green, self.blue, alpha)
                }
                None => format!("rgb({},{},{})", self.red, self.green, self.blue),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::color::{Family, Notation};
    use crate::parse::parse_color;

    #[test]
    fn hex_output_is_padded() {
        let c = parse_color("rgb(1,2,3)").unwrap();
        assert_eq!(c.serialize(Family::Hex), "#010203");
    }

    #[test]
    fn alpha_selects_the_long_form() {
        let c = parse_color("rgba(1,2,3,0.5)").unwrap();
        assert_eq!(c.serialize(Family::Hex), "#01020380");
        assert_eq!(c.serialize(Family::Functional), "rgba(1,2,3,0.5)");

        let c = parse_color("#010203").unwrap();
        assert_eq!(c.serialize(Family::Functional), "rgb(1,2,3)");
    }

    #[test]
    fn shorthand_serializes_to_full_hex() {
        let c = parse_color("#fa0").unwrap();
        assert_eq!(c.notation, Notation::Hex3);
        assert_eq!(c.serialize(Family::Hex), "#ffaa00");
    }

    #[test]
    fn hex_alpha_byte_round_trips() {
        let c = parse_color("#80808080").unwrap();
        assert_eq!(c.serialize(Family::Hex), "#80808080");
    }
}
