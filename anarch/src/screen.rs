use crate::host::PixelSink;
use core::convert::Infallible;
use core::convert::TryInto;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::{
    pixelcolor::{raw::RawU16, Gray8, GrayColor, Rgb565},
    prelude::*,
    primitives::Rectangle,
};

pub const SCREEN_WIDTH: usize = 160;
pub const SCREEN_HEIGHT: usize = 128;

#[derive(Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb565; 256],
}

impl Palette {
    pub fn new(colors: [Rgb565; 256]) -> Self {
        Palette { colors }
    }

    pub fn from_raw(raw: &[u16; 256]) -> Self {
        let mut colors = [Rgb565::BLACK; 256];
        for (color, &value) in colors.iter_mut().zip(raw.iter()) {
            *color = RawU16::new(value).into();
        }
        Palette { colors }
    }

    pub fn grayscale() -> Self {
        let mut colors = [Rgb565::BLACK; 256];
        for (i, color) in colors.iter_mut().enumerate() {
            let v = i as u8;
            *color = Rgb565::new(v >> 3, v >> 2, v >> 3);
        }
        Palette { colors }
    }

    pub fn color(&self, index: u8) -> Rgb565 {
        self.colors[index as usize]
    }
}

impl core::fmt::Debug for Palette {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Palette").finish_non_exhaustive()
    }
}

pub struct Frame {
    pixels: [u8; SCREEN_WIDTH * SCREEN_HEIGHT],
}

impl Frame {
    pub fn new() -> Self {
        Frame {
            pixels: [0; SCREEN_WIDTH * SCREEN_HEIGHT],
        }
    }

    pub fn set_pixel(&mut self, x: u16, y: u16, color: u8) {
        if (x as usize) < SCREEN_WIDTH && (y as usize) < SCREEN_HEIGHT {
            self.pixels[x as usize + y as usize * SCREEN_WIDTH] = color;
        }
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<u8> {
        if (x as usize) < SCREEN_WIDTH && (y as usize) < SCREEN_HEIGHT {
            Some(self.pixels[x as usize + y as usize * SCREEN_WIDTH])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn fill(&mut self, color: u8) {
        self.pixels.fill(color);
    }

    pub fn blit<S: PixelSink + ?Sized>(&self, sink: &mut S) {
        for (y, row) in self.pixels.chunks_exact(SCREEN_WIDTH).enumerate() {
            for (x, &color) in row.iter().enumerate() {
                sink.set_pixel(x as u16, y as u16, color);
            }
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

// Gray8 luma carries the palette index.
impl DrawTarget for Frame {
    type Color = Gray8;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        const M: u32 = SCREEN_WIDTH as u32 - 1;
        const N: u32 = SCREEN_HEIGHT as u32 - 1;
        for Pixel(coord, color) in pixels.into_iter() {
            if let Ok((x @ 0..=M, y @ 0..=N)) = coord.try_into() {
                let index: u32 = x + y * SCREEN_WIDTH as u32;
                self.pixels[index as usize] = color.luma();
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped_area = area.intersection(&self.bounding_box());
        let width = clipped_area.size.width as usize;
        for y in 0..clipped_area.size.height as i32 {
            let start = clipped_area.top_left.x as usize
                + (clipped_area.top_left.y + y) as usize * SCREEN_WIDTH;
            self.pixels[start..start + width].fill(color.luma());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.luma());
        Ok(())
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
    }
}

pub trait Flush {
    fn flush(&mut self);
}

pub struct PaletteSurface<D> {
    target: D,
    palette: Palette,
    commits: u32,
}

impl<D> PaletteSurface<D>
where
    D: DrawTarget<Color = Rgb565, Error = Infallible> + Flush,
{
    pub fn new(target: D, palette: Palette) -> Self {
        PaletteSurface {
            target,
            palette,
            commits: 0,
        }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn commits(&self) -> u32 {
        self.commits
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> PixelSink for PaletteSurface<D>
where
    D: DrawTarget<Color = Rgb565, Error = Infallible> + Flush,
{
    fn set_pixel(&mut self, x: u16, y: u16, color: u8) {
        let pixel = Pixel(Point::new(x as i32, y as i32), self.palette.color(color));
        self.target
            .draw_iter(core::iter::once(pixel))
            .unwrap_or_else(|e| match e {});
    }

    fn commit(&mut self) {
        self.target.flush();
        self.commits = self.commits.wrapping_add(1);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use embedded_graphics::primitives::PrimitiveStyle;
    use std::collections::BTreeMap;

    pub(crate) struct RecordingTarget {
        pixels: BTreeMap<(i32, i32), Rgb565>,
        pub(crate) flushes: u32,
    }

    impl RecordingTarget {
        pub(crate) fn new() -> Self {
            RecordingTarget {
                pixels: BTreeMap::new(),
                flushes: 0,
            }
        }

        pub(crate) fn get(&self, p: Point) -> Option<Rgb565> {
            self.pixels.get(&(p.x, p.y)).copied()
        }

        pub(crate) fn count(&self) -> usize {
            self.pixels.len()
        }
    }

    impl DrawTarget for RecordingTarget {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, color) in pixels {
                self.pixels.insert((p.x, p.y), color);
            }
            Ok(())
        }
    }

    impl OriginDimensions for RecordingTarget {
        fn size(&self) -> Size {
            Size::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
        }
    }

    impl Flush for RecordingTarget {
        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn test_frame_ignores_out_of_bounds() {
        let mut frame = Frame::new();
        frame.set_pixel(SCREEN_WIDTH as u16, 0, 5);
        frame.set_pixel(0, SCREEN_HEIGHT as u16, 5);
        assert!(frame.pixels().iter().all(|&c| c == 0));
        frame.set_pixel(3, 4, 5);
        assert_eq!(frame.pixel(3, 4), Some(5));
        assert_eq!(frame.pixel(SCREEN_WIDTH as u16, 4), None);
    }

    #[test]
    fn test_frame_draw_target_clips() {
        let mut frame = Frame::new();
        Rectangle::new(Point::new(-4, SCREEN_HEIGHT as i32 - 2), Size::new(8, 8))
            .into_styled(PrimitiveStyle::with_fill(Gray8::new(42)))
            .draw(&mut frame)
            .unwrap();
        assert_eq!(frame.pixel(0, SCREEN_HEIGHT as u16 - 1), Some(42));
        assert_eq!(frame.pixel(3, SCREEN_HEIGHT as u16 - 2), Some(42));
        assert_eq!(frame.pixel(4, SCREEN_HEIGHT as u16 - 2), Some(0));
        assert_eq!(frame.pixels().iter().filter(|&&c| c == 42).count(), 8);
    }

    #[test]
    fn test_palette_surface_maps_colors() {
        let mut raw = [0u16; 256];
        raw[7] = Rgb565::RED.into_storage();
        let mut surface = PaletteSurface::new(RecordingTarget::new(), Palette::from_raw(&raw));
        surface.set_pixel(1, 2, 7);
        surface.set_pixel(2, 2, 8);
        surface.commit();
        assert_eq!(surface.target().get(Point::new(1, 2)), Some(Rgb565::RED));
        assert_eq!(surface.target().get(Point::new(2, 2)), Some(Rgb565::BLACK));
        assert_eq!(surface.commits(), 1);
        assert_eq!(surface.into_inner().flushes, 1);
    }

    #[test]
    fn test_grayscale_endpoints() {
        let palette = Palette::grayscale();
        assert_eq!(palette.color(0), Rgb565::BLACK);
        assert_eq!(palette.color(255), Rgb565::WHITE);
    }
}
