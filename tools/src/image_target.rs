use anarch::screen::Flush;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use image::{Rgba, RgbaImage};

pub struct ImageTarget {
    image: RgbaImage,
    size: Size,
    scale: u32,
    flushes: u32,
}

impl ImageTarget {
    pub fn new(size: Size, scale: u32) -> Self {
        let scale = scale.max(1);
        Self {
            image: RgbaImage::new(size.width * scale, size.height * scale),
            size,
            scale,
            flushes: 0,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn flushes(&self) -> u32 {
        self.flushes
    }

    pub fn get(&self, p: Point) -> Option<Rgb888> {
        if p.x < 0 || p.y < 0 || p.x as u32 >= self.size.width || p.y as u32 >= self.size.height {
            return None;
        }
        let px = self.image.get_pixel(p.x as u32 * self.scale, p.y as u32 * self.scale);
        if px[3] == 0 {
            None
        } else {
            Some(Rgb888::new(px[0], px[1], px[2]))
        }
    }
}

impl DrawTarget for ImageTarget {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if p.x < 0 || p.y < 0 || p.x as u32 >= self.size.width || p.y as u32 >= self.size.height
            {
                continue;
            }
            let c = Rgb888::from(color);
            let rgba = Rgba([c.r(), c.g(), c.b(), 255]);
            for dy in 0..self.scale {
                for dx in 0..self.scale {
                    self.image.put_pixel(
                        p.x as u32 * self.scale + dx,
                        p.y as u32 * self.scale + dy,
                        rgba,
                    );
                }
            }
        }
        Ok(())
    }
}

impl OriginDimensions for ImageTarget {
    fn size(&self) -> Size {
        self.size
    }
}

impl Flush for ImageTarget {
    fn flush(&mut self) {
        self.flushes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_pixels() {
        let mut target = ImageTarget::new(Size::new(4, 3), 3);
        assert_eq!(target.image().dimensions(), (12, 9));
        Pixel(Point::new(1, 2), Rgb565::RED).draw(&mut target).unwrap();
        Pixel(Point::new(4, 0), Rgb565::RED).draw(&mut target).unwrap();
        assert_eq!(target.get(Point::new(1, 2)), Some(Rgb888::RED));
        assert_eq!(target.get(Point::new(0, 0)), None);
        assert_eq!(target.image().get_pixel(5, 8), &Rgba([255, 0, 0, 255]));
        assert_eq!(target.image().get_pixel(6, 8)[3], 0);
    }
}
