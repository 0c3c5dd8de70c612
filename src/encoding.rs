//! Hex digit to segment pattern encoding

use crate::config::DIGIT_COUNT;

//           A
//          ===
//      F ||   || B
//          =G=
//      E ||   || C
//          ===   . DP
//           D

/// Segment patterns for the hex digits 0-F, bit 0 is segment A.
pub const HEX_SEGMENTS: [u8; 16] = [
    //.GFE_DCBA
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
    0b0111_0111, // A
    0b0111_1100, // b
    0b0011_1001, // C
    0b0101_1110, // d
    0b0111_1001, // E
    0b0111_0001, // F
];

/// Bit lighting the decimal point in a segment byte.
pub const DECIMAL_POINT: u8 = 1 << 7;

/// What gets driven onto the two ports for one digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// One-hot digit select
    pub select: u8,
    /// Segment pattern with the decimal point in bit 7
    pub segments: u8,
}

/// Segment pattern for the low nibble of `nibble`.
pub const fn encode_hex(nibble: u8) -> u8 {
    HEX_SEGMENTS[(nibble & 0xF) as usize]
}

/// The hex digit shown at position `index`, digit 0 being the low nibble.
pub const fn nibble(value: u16, index: u8) -> u8 {
    ((value >> ((index & 0b11) * 4)) & 0xF) as u8
}

/// Decimal point contribution of `dp_mask` for position `index`.
pub const fn decimal_point(dp_mask: u8, index: u8) -> u8 {
    ((dp_mask >> (index & 0b11)) & 1) << 7
}

pub const fn digit_select(index: u8) -> u8 {
    1 << (index & 0b11)
}

/// Compute the frame for position `index` of a display showing `value`.
pub const fn render(value: u16, dp_mask: u8, index: u8) -> Frame {
    Frame {
        select: digit_select(index),
        segments: encode_hex(nibble(value, index)) | decimal_point(dp_mask, index),
    }
}

/// Position following `index` in the multiplexing cycle.
pub const fn next_index(index: u8) -> u8 {
    (index + 1) % DIGIT_COUNT
}
