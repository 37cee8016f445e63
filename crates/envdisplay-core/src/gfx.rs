use embedded_graphics::{
    Drawable, Pixel,
    prelude::{DrawTarget, PixelColor, Point},
};

use crate::icons::Icon;

/// Paints the set bits of an icon in `color`. Unset bits are skipped, so the
/// icon overlays whatever is already in the frame.
pub struct IconSprite<'a, C>
where
    C: PixelColor,
{
    icon: &'a Icon,
    position: Point,
    color: C,
}

impl<'a, C> IconSprite<'a, C>
where
    C: PixelColor,
{
    pub fn new(icon: &'a Icon, position: Point, color: C) -> Self {
        Self {
            icon,
            position,
            color,
        }
    }
}

impl<C> Drawable for IconSprite<'_, C>
where
    C: PixelColor,
{
    type Color = C;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let size = self.icon.size();
        let pixels = (0..size.height).flat_map(|y| {
            (0..size.width)
                .filter(move |&x| self.icon.is_set(x, y))
                .map(move |x| Pixel(self.position + Point::new(x as i32, y as i32), self.color))
        });
        target.draw_iter(pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use embedded_graphics::{mock_display::MockDisplay, pixelcolor::BinaryColor};

    use crate::icons;

    #[test]
    fn test_only_set_bits_are_drawn() {
        let mut display = MockDisplay::<BinaryColor>::new();
        IconSprite::new(&icons::CELSIUS, Point::zero(), BinaryColor::On)
            .draw(&mut display)
            .unwrap();

        assert_eq!(display.get_pixel(Point::new(2, 2)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(0, 2)), None);
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
    }

    #[test]
    fn test_position_offsets_pixels() {
        let mut display = MockDisplay::<BinaryColor>::new();
        IconSprite::new(&icons::WIFI, Point::new(10, 20), BinaryColor::On)
            .draw(&mut display)
            .unwrap();

        // first row of the wifi glyph starts 0b01010001
        assert_eq!(display.get_pixel(Point::new(11, 20)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(10, 20)), None);
        assert_eq!(display.get_pixel(Point::new(1, 0)), None);
    }
}
