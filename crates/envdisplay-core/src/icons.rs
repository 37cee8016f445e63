//! Monochrome icons for the status display.
//!
//! Bitmaps are row-major, one bit per pixel, most significant bit leftmost,
//! each row padded to a whole byte. This is the layout `ImageRaw<BinaryColor>`
//! reads with its default big-endian bit order.

use embedded_graphics::{geometry::Size, image::ImageRaw, pixelcolor::BinaryColor};

/// A packed 1bpp bitmap stored in read-only memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    data: &'static [u8],
    width: u32,
}

impl Icon {
    /// # Panics
    ///
    /// Panics if `width` is 0.
    pub const fn new(data: &'static [u8], width: u32) -> Self {
        assert!(width > 0, "icon width must be at least one pixel");
        Self { data, width }
    }

    pub const fn data(&self) -> &'static [u8] {
        self.data
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Bytes per row.
    pub const fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    pub const fn height(&self) -> u32 {
        (self.data.len() / self.stride()) as u32
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height())
    }

    /// Whether the pixel at (`x`, `y`) is set. Out-of-range coordinates read
    /// as unset.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height() {
            return false;
        }
        let byte = self.data[y as usize * self.stride() + x as usize / 8];
        byte & (0x80 >> (x % 8)) != 0
    }

    /// The bitmap as an `embedded-graphics` image, for drawing with `Image`.
    pub fn raw(&self) -> ImageRaw<'static, BinaryColor> {
        ImageRaw::new(self.data, self.width)
    }
}

/// Degrees-celsius symbol.
pub static CELSIUS: Icon = Icon::new(&CELSIUS_DATA, 16);
static CELSIUS_DATA: [u8; 32] = [
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00110000, 0b01111100,
    0b01001000, 0b11000010,
    0b01001001, 0b10000001,
    0b01001001, 0b00000000,
    0b00110001, 0b00000000,
    0b00000001, 0b00000000,
    0b00000001, 0b00000000,
    0b00000001, 0b00000000,
    0b00000001, 0b00000000,
    0b00000001, 0b00000000,
    0b00000001, 0b10000001,
    0b00000000, 0b11000010,
    0b00000000, 0b01111100,
    0b00000000, 0b00000000,
];

/// CO2 cloud.
pub static CO2: Icon = Icon::new(&CO2_DATA, 32);
static CO2_DATA: [u8; 128] = [
    0b00000000, 0b00000000, 0b01111000, 0b00000000,
    0b00000000, 0b00000000, 0b11001100, 0b00000000,
    0b00000000, 0b00000001, 0b10000110, 0b00000000,
    0b00000000, 0b00000011, 0b00000011, 0b11100000,
    0b00000000, 0b00000110, 0b00000000, 0b00100000,
    0b00000000, 0b00000100, 0b00000000, 0b00110000,
    0b00000000, 0b00011100, 0b00000000, 0b00011000,
    0b00000000, 0b00111000, 0b00000000, 0b00001100,
    0b00000000, 0b01100011, 0b11111000, 0b00000100,
    0b00000000, 0b01000110, 0b00001110, 0b00000010,
    0b00000000, 0b11001100, 0b00000011, 0b00000010,
    0b00000001, 0b11111000, 0b00000001, 0b00000010,
    0b00000011, 0b00000000, 0b00000001, 0b10000011,
    0b00000010, 0b00000000, 0b00000000, 0b10000011,
    0b00000110, 0b00000000, 0b00000000, 0b11000011,
    0b00001100, 0b00000000, 0b00000000, 0b01110110,
    0b00011000, 0b00000000, 0b00000000, 0b00011100,
    0b00110000, 0b00111100, 0b11100000, 0b00001100,
    0b01100000, 0b01000101, 0b00010000, 0b00000100,
    0b01000000, 0b01000001, 0b00010000, 0b00000110,
    0b01000000, 0b01000001, 0b00010000, 0b00000010,
    0b11000000, 0b01000001, 0b00010111, 0b00000010,
    0b11000000, 0b01000001, 0b00010101, 0b00000010,
    0b11000000, 0b01000001, 0b00010001, 0b00000011,
    0b11000000, 0b01000101, 0b00010010, 0b00000011,
    0b01000000, 0b00111101, 0b11100100, 0b00000011,
    0b01000000, 0b00000000, 0b00000111, 0b00000011,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b00110000, 0b00000000, 0b00000000, 0b00001100,
    0b00011100, 0b00000000, 0b00000000, 0b00011000,
    0b00001111, 0b11111111, 0b11111111, 0b11110000,
    0b00000011, 0b11111111, 0b11111111, 0b11000000,
];

/// Warning triangle with heat waves.
pub static HEAT: Icon = Icon::new(&HEAT_DATA, 32);
static HEAT_DATA: [u8; 128] = [
    0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000001, 0b10000000, 0b00000000,
    0b00000000, 0b00000011, 0b11000000, 0b00000000,
    0b00000000, 0b00000011, 0b11000000, 0b00000000,
    0b00000000, 0b00000110, 0b01100000, 0b00000000,
    0b00000000, 0b00000100, 0b00100000, 0b00000000,
    0b00000000, 0b00001100, 0b00110000, 0b00000000,
    0b00000000, 0b00011000, 0b00011000, 0b00000000,
    0b00000000, 0b00011000, 0b00011000, 0b00000000,
    0b00000000, 0b00110000, 0b00001100, 0b00000000,
    0b00000000, 0b00110000, 0b00001100, 0b00000000,
    0b00000000, 0b01100000, 0b00000110, 0b00000000,
    0b00000000, 0b01100000, 0b00000110, 0b00000000,
    0b00000000, 0b11000000, 0b00000011, 0b00000000,
    0b00000000, 0b11001001, 0b10010011, 0b00000000,
    0b00000001, 0b10010001, 0b00110001, 0b10000000,
    0b00000001, 0b10010010, 0b00100001, 0b10000000,
    0b00000011, 0b00010010, 0b00100000, 0b11000000,
    0b00000011, 0b00010001, 0b00100000, 0b11000000,
    0b00000110, 0b00001000, 0b10010000, 0b01100000,
    0b00000110, 0b00000100, 0b10011000, 0b01100000,
    0b00001100, 0b00000100, 0b01001000, 0b00110000,
    0b00001100, 0b00000100, 0b01001000, 0b00110000,
    0b00011000, 0b00001100, 0b11011000, 0b00011000,
    0b00011000, 0b00001000, 0b10010000, 0b00011000,
    0b00110000, 0b00000000, 0b00000000, 0b00001100,
    0b00100000, 0b11111111, 0b11111111, 0b00000100,
    0b01100000, 0b01111111, 0b11111110, 0b00000110,
    0b11000000, 0b00000000, 0b00000000, 0b00000011,
    0b11000000, 0b00000000, 0b00000000, 0b00000011,
    0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b01111111, 0b11111111, 0b11111111, 0b11111110,
];

pub static THERMOMETER: Icon = Icon::new(&THERMOMETER_DATA, 16);
static THERMOMETER_DATA: [u8; 64] = [
    0b00011100, 0b00000000,
    0b00100010, 0b00000000,
    0b00100010, 0b00000000,
    0b00100010, 0b00000000,
    0b00100010, 0b00000000,
    0b00100010, 0b00000000,
    0b00100010, 0b00000000,
    0b00100011, 0b10000000,
    0b00100010, 0b00000000,
    0b00100010, 0b00000000,
    0b00100010, 0b00000000,
    0b00100011, 0b10000000,
    0b00100010, 0b00000000,
    0b00100010, 0b00000000,
    0b00101010, 0b00000000,
    0b00101011, 0b10000000,
    0b00101010, 0b00000000,
    0b00101010, 0b00000000,
    0b00101010, 0b00000000,
    0b00101010, 0b00000000,
    0b00101011, 0b10000000,
    0b00101010, 0b00000000,
    0b00101010, 0b00000000,
    0b00101010, 0b00000000,
    0b01011101, 0b00000000,
    0b10111110, 0b10000000,
    0b10111110, 0b10000000,
    0b10111110, 0b10000000,
    0b10111110, 0b10000000,
    0b10011100, 0b10000000,
    0b01000001, 0b00000000,
    0b00111110, 0b00000000,
];

/// WiFi connected marker.
pub static WIFI: Icon = Icon::new(&WIFI_DATA, 16);
static WIFI_DATA: [u8; 18] = [
    0b01010001, 0b01000000,
    0b10100100, 0b10100000,
    0b10101110, 0b10100000,
    0b10101110, 0b10100000,
    0b10100100, 0b10100000,
    0b01010101, 0b01000000,
    0b00000100, 0b00000000,
    0b00000100, 0b00000000,
    0b00000100, 0b00000000,
];

#[cfg(test)]
mod tests {
    use super::*;

    use embedded_graphics::prelude::OriginDimensions;

    #[test]
    fn test_icon_sizes() {
        assert_eq!(CELSIUS.size(), Size::new(16, 16));
        assert_eq!(CO2.size(), Size::new(32, 32));
        assert_eq!(HEAT.size(), Size::new(32, 32));
        assert_eq!(THERMOMETER.size(), Size::new(16, 32));
        assert_eq!(WIFI.size(), Size::new(16, 9));
    }

    #[test]
    fn test_raw_image_matches_icon_size() {
        for icon in [&CELSIUS, &CO2, &HEAT, &THERMOMETER, &WIFI] {
            assert_eq!(icon.raw().size(), icon.size());
        }
    }

    #[test]
    fn test_bit_order_is_msb_first() {
        // row 2 of the celsius glyph is 0b00110000, 0b01111100
        assert!(!CELSIUS.is_set(0, 2));
        assert!(!CELSIUS.is_set(1, 2));
        assert!(CELSIUS.is_set(2, 2));
        assert!(CELSIUS.is_set(3, 2));
        assert!(!CELSIUS.is_set(8, 2));
        assert!(CELSIUS.is_set(9, 2));
        assert!(CELSIUS.is_set(13, 2));
        assert!(!CELSIUS.is_set(14, 2));
    }

    #[test]
    #[should_panic]
    fn test_zero_width_rejected() {
        static EMPTY_ROW: [u8; 1] = [0];
        Icon::new(&EMPTY_ROW, 0);
    }

    #[test]
    fn test_out_of_range_reads_unset() {
        assert!(!WIFI.is_set(16, 0));
        assert!(!WIFI.is_set(0, 9));
        // last row of the thermometer is the closed bulb
        assert!(THERMOMETER.is_set(2, 31));
    }
}
