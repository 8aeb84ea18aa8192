use crate::screen::Palette;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};

pub const TEXTURE_SIZE: usize = 32;

pub const TRANSPARENT_COLOR: u8 = 175;

pub const TRANSPARENT_TEXTURE: u8 = 255;

const COORD_MASK: u8 = TEXTURE_SIZE as u8 - 1;

#[derive(Clone, PartialEq, Eq)]
pub struct Texture {
    data: [u8; TEXTURE_SIZE * TEXTURE_SIZE],
}

impl Texture {
    pub const fn new(data: [u8; TEXTURE_SIZE * TEXTURE_SIZE]) -> Self {
        Texture { data }
    }

    pub fn data(&self) -> &[u8; TEXTURE_SIZE * TEXTURE_SIZE] {
        &self.data
    }

    /// Coordinates wrap around, so any pair addresses a texel.
    pub fn texel(&self, x: u8, y: u8) -> u8 {
        self.data[(x & COORD_MASK) as usize * TEXTURE_SIZE + (y & COORD_MASK) as usize]
    }

    pub fn column(&self, x: u8) -> &[u8] {
        let start = (x & COORD_MASK) as usize * TEXTURE_SIZE;
        &self.data[start..start + TEXTURE_SIZE]
    }

    pub fn has_transparency(&self) -> bool {
        self.data.iter().any(|&c| c == TRANSPARENT_COLOR)
    }
}

impl core::fmt::Debug for Texture {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Texture")
            .field("size", &TEXTURE_SIZE)
            .field("transparent", &self.has_transparency())
            .finish()
    }
}

pub fn get_texel(texture: &Texture, x: u8, y: u8) -> u8 {
    texture.texel(x, y)
}

pub struct TextureImage<'a> {
    pub texture: &'a Texture,
    pub palette: &'a Palette,
}

impl<'a> TextureImage<'a> {
    pub fn new(texture: &'a Texture, palette: &'a Palette) -> Self {
        TextureImage { texture, palette }
    }
}

impl ImageDrawable for TextureImage<'_> {
    type Color = Rgb565;

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.draw_sub_image(target, &self.bounding_box())
    }

    fn draw_sub_image<D>(&self, target: &mut D, area: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let area = area.intersection(&self.bounding_box());
        let origin = area.top_left;
        let pixels = area.points().filter_map(|p| {
            let index = self.texture.texel(p.x as u8, p.y as u8);
            if index == TRANSPARENT_COLOR {
                None
            } else {
                Some(Pixel(p - origin, self.palette.color(index)))
            }
        });
        target.draw_iter(pixels)
    }
}

impl OriginDimensions for TextureImage<'_> {
    fn size(&self) -> Size {
        Size::new(TEXTURE_SIZE as u32, TEXTURE_SIZE as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::tests::RecordingTarget;
    use embedded_graphics::image::Image;

    fn gradient() -> Texture {
        let mut data = [0u8; TEXTURE_SIZE * TEXTURE_SIZE];
        for (i, v) in data.iter_mut().enumerate() {
            *v = (i % 251) as u8;
        }
        Texture::new(data)
    }

    #[test]
    fn test_texel_wraps_column_major() {
        let texture = gradient();
        for x in 0..=u8::MAX {
            for y in 0..=u8::MAX {
                let expected = texture.data()[(x & 31) as usize * 32 + (y & 31) as usize];
                assert_eq!(get_texel(&texture, x, y), expected);
            }
        }
    }

    #[test]
    fn test_column_is_contiguous() {
        let texture = gradient();
        let column = texture.column(33);
        assert_eq!(column.len(), TEXTURE_SIZE);
        for y in 0..TEXTURE_SIZE as u8 {
            assert_eq!(column[y as usize], texture.texel(1, y));
        }
    }

    #[test]
    fn test_draw_skips_transparent_color() {
        let mut data = [3u8; TEXTURE_SIZE * TEXTURE_SIZE];
        data[0] = TRANSPARENT_COLOR;
        data[TEXTURE_SIZE] = 9; // x = 1, y = 0
        let texture = Texture::new(data);
        let palette = Palette::grayscale();
        let mut target = RecordingTarget::new();
        Image::new(&TextureImage::new(&texture, &palette), Point::new(2, 3))
            .draw(&mut target)
            .unwrap();
        assert_eq!(target.count(), TEXTURE_SIZE * TEXTURE_SIZE - 1);
        assert_eq!(target.get(Point::new(2, 3)), None);
        assert_eq!(target.get(Point::new(3, 3)), Some(palette.color(9)));
        assert_eq!(target.get(Point::new(2, 4)), Some(palette.color(3)));
    }
}
