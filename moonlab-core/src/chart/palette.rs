//! Color and marker sequences for phase and trend traces.

use serde::{Serialize, Serializer};

/// 24-bit color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// Qualitative color sequence, cycled per phase in order of first appearance.
pub const QUALITATIVE: [Rgb; 10] = [
    Rgb(0x63, 0x6e, 0xfa),
    Rgb(0xef, 0x55, 0x3b),
    Rgb(0x00, 0xcc, 0x96),
    Rgb(0xab, 0x63, 0xfa),
    Rgb(0xff, 0xa1, 0x5a),
    Rgb(0x19, 0xd3, 0xf3),
    Rgb(0xff, 0x66, 0x92),
    Rgb(0xb6, 0xe8, 0x80),
    Rgb(0xff, 0x97, 0xff),
    Rgb(0xfe, 0xcb, 0x52),
];

/// Marker shapes, cycled per phase alongside the colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerSymbol {
    Circle,
    Diamond,
    Square,
    X,
    Cross,
    TriangleUp,
    Pentagon,
    Star,
}

pub const MARKER_SEQUENCE: [MarkerSymbol; 8] = [
    MarkerSymbol::Circle,
    MarkerSymbol::Diamond,
    MarkerSymbol::Square,
    MarkerSymbol::X,
    MarkerSymbol::Cross,
    MarkerSymbol::TriangleUp,
    MarkerSymbol::Pentagon,
    MarkerSymbol::Star,
];

pub fn phase_color(slot: usize) -> Rgb {
    QUALITATIVE[slot % QUALITATIVE.len()]
}

pub fn phase_marker(slot: usize) -> MarkerSymbol {
    MARKER_SEQUENCE[slot % MARKER_SEQUENCE.len()]
}

/// Trend traces continue the color sequence after the phase colors.
pub fn trend_color(phase_count: usize, trend_slot: usize) -> Rgb {
    QUALITATIVE[(phase_count + trend_slot) % QUALITATIVE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_six_digits() {
        assert_eq!(Rgb(0x63, 0x6e, 0xfa).hex(), "#636efa");
        assert_eq!(Rgb(0, 0, 0).hex(), "#000000");
    }

    #[test]
    fn sequences_cycle() {
        assert_eq!(phase_color(0), phase_color(QUALITATIVE.len()));
        assert_eq!(phase_marker(1), MarkerSymbol::Diamond);
        assert_eq!(phase_marker(MARKER_SEQUENCE.len()), MarkerSymbol::Circle);
    }

    #[test]
    fn trend_colors_skip_phase_colors() {
        assert_eq!(trend_color(4, 0), phase_color(4));
        assert_ne!(trend_color(4, 0), phase_color(0));
    }

    #[test]
    fn marker_serializes_kebab_case() {
        let json = serde_json::to_string(&MarkerSymbol::TriangleUp).unwrap();
        assert_eq!(json, "\"triangle-up\"");
    }
}
