//! Parameter types: colours and option tokens
//!
//! Option enums carry no behaviour beyond the byte they put on the wire.

use core::ops::{BitAnd, BitOr, BitXor, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 24-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Create a colour from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed 3-3-2 form used by the 256-colour commands
    pub const fn to_rgb332(self) -> u8 {
        (self.r & 0xE0) | ((self.g & 0xE0) >> 3) | ((self.b & 0xC0) >> 6)
    }

    /// Packed 5-6-5 form
    pub const fn to_rgb565(self) -> u16 {
        ((self.r as u16 & 0xF8) << 8) | ((self.g as u16 & 0xFC) << 3) | ((self.b as u16 & 0xF8) >> 3)
    }

    /// 6-bit channels used by the `ESC` command
    pub const fn to_rgb666(self) -> [u8; 3] {
        [self.r >> 2, self.g >> 2, self.b >> 2]
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.to_rgb332()
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.to_rgb565()
    }
}

impl BitXor for Color {
    type Output = Self;

    fn bitxor(self, other: Self) -> Self {
        Self::new(self.r ^ other.r, self.g ^ other.g, self.b ^ other.b)
    }
}

impl BitAnd for Color {
    type Output = Self;

    fn bitand(self, other: Self) -> Self {
        Self::new(self.r & other.r, self.g & other.g, self.b & other.b)
    }
}

impl BitOr for Color {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        Self::new(self.r | other.r, self.g | other.g, self.b | other.b)
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        Self::new(!self.r, !self.g, !self.b)
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics::pixelcolor::Rgb888> for Color {
    fn from(color: embedded_graphics::pixelcolor::Rgb888) -> Self {
        use embedded_graphics::pixelcolor::RgbColor;
        Self::new(color.r(), color.g(), color.b())
    }
}

/// Screen orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    #[default]
    Rot0,
    Rot90,
    Rot180,
    Rot270,
}

impl Orientation {
    /// Protocol token
    pub const fn token(self) -> u8 {
        match self {
            Orientation::Rot0 => b'0',
            Orientation::Rot90 => b'1',
            Orientation::Rot180 => b'2',
            Orientation::Rot270 => b'3',
        }
    }
}

/// Colour depth of bitmap data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BitmapDepth {
    /// 1 bit per pixel, rows padded to whole bytes
    Mono,
    /// 1 byte per pixel (3-3-2)
    Color256,
    /// 3 bytes per pixel (6-6-6)
    Color262K,
}

impl BitmapDepth {
    /// Number of data bytes a `w` x `h` image occupies
    ///
    /// `None` if the size does not fit in `usize`.
    pub fn data_len(self, w: u16, h: u16) -> Option<usize> {
        let (w, h) = (w as usize, h as usize);
        match self {
            BitmapDepth::Mono => h.checked_mul(w.div_ceil(8)),
            BitmapDepth::Color256 => w.checked_mul(h),
            BitmapDepth::Color262K => w.checked_mul(h)?.checked_mul(3),
        }
    }
}

/// Unit for text cursor positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TextUnit {
    /// Character cells of the current font
    #[default]
    Character,
    /// Pixels
    Pixel,
}

/// Touchscreen read mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TouchMode {
    /// Wait until the screen is pressed
    Down,
    /// Report immediately, pressed or not
    DownNonBlocking,
    /// Wait until a press is released ("click")
    Up,
}

impl TouchMode {
    /// Protocol token
    pub const fn token(self) -> u8 {
        match self {
            TouchMode::Down => b'W',
            TouchMode::DownNonBlocking => b'I',
            TouchMode::Up => b'C',
        }
    }
}

/// How drawn pixels combine with the existing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawMode {
    #[default]
    Copy,
    Not,
    Or,
    Xor,
    And,
}

impl DrawMode {
    /// Protocol token
    pub const fn token(self) -> u8 {
        match self {
            DrawMode::Copy => b'C',
            DrawMode::Not => b'!',
            DrawMode::Or => b'|',
            DrawMode::Xor => b'^',
            DrawMode::And => b'&',
        }
    }
}

/// Controller chip of a character/graphic LCD driven in pass-through mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LcdChip {
    St7920,
    Ks0108,
    St7565,
}

impl LcdChip {
    /// Protocol token
    pub const fn token(self) -> u8 {
        match self {
            LcdChip::St7920 => b'0',
            LcdChip::Ks0108 => b'1',
            LcdChip::St7565 => b'2',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb332_packing() {
        assert_eq!(Color::WHITE.to_rgb332(), 0xFF);
        assert_eq!(Color::RED.to_rgb332(), 0xE0);
        assert_eq!(Color::GREEN.to_rgb332(), 0x1C);
        assert_eq!(Color::BLUE.to_rgb332(), 0x03);
        assert_eq!(u8::from(Color::new(0x1F, 0x1F, 0x3F)), 0);
    }

    #[test]
    fn test_rgb565_packing() {
        assert_eq!(Color::WHITE.to_rgb565(), 0xFFFF);
        assert_eq!(Color::RED.to_rgb565(), 0xF800);
        assert_eq!(Color::GREEN.to_rgb565(), 0x07E0);
        assert_eq!(u16::from(Color::BLUE), 0x001F);
    }

    #[test]
    fn test_rgb666_channels() {
        assert_eq!(Color::new(255, 128, 3).to_rgb666(), [63, 32, 0]);
    }

    #[test]
    fn test_bitwise_ops() {
        let a = Color::new(0xF0, 0x0F, 0xAA);
        let b = Color::new(0xFF, 0xFF, 0x0F);
        assert_eq!(a & b, Color::new(0xF0, 0x0F, 0x0A));
        assert_eq!(a | b, Color::new(0xFF, 0xFF, 0xAF));
        assert_eq!(a ^ b, Color::new(0x0F, 0xF0, 0xA5));
        assert_eq!(!a, Color::new(0x0F, 0xF0, 0x55));
    }

    #[test]
    fn test_bitmap_data_len() {
        assert_eq!(BitmapDepth::Mono.data_len(9, 2), Some(4));
        assert_eq!(BitmapDepth::Mono.data_len(8, 2), Some(2));
        assert_eq!(BitmapDepth::Color256.data_len(4, 3), Some(12));
        assert_eq!(BitmapDepth::Color262K.data_len(4, 3), Some(36));
        assert_eq!(
            BitmapDepth::Color262K.data_len(u16::MAX, u16::MAX),
            (u16::MAX as usize)
                .checked_mul(u16::MAX as usize)
                .and_then(|n| n.checked_mul(3))
        );
    }

    #[test]
    fn test_tokens() {
        assert_eq!(Orientation::Rot270.token(), b'3');
        assert_eq!(TouchMode::Up.token(), b'C');
        assert_eq!(DrawMode::Xor.token(), b'^');
        assert_eq!(LcdChip::Ks0108.token(), b'1');
    }
}
