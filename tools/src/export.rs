use crate::image_target::ImageTarget;
use crate::preview::PreviewEngine;
use anarch::adapter::FrameAdapter;
use anarch::host::{LoopManager, Tickable};
use anarch::level::Level;
use anarch::screen::{Palette, PaletteSurface, SCREEN_HEIGHT, SCREEN_WIDTH};
use anarch::texture::{Texture, TextureImage, TEXTURE_SIZE};
use embedded_graphics::image::Image;
use embedded_graphics::prelude::*;
use image::RgbaImage;
use log::info;

pub const PREVIEW_TICK_US: u32 = 33_333;

pub fn texture_image(texture: &Texture, palette: &Palette, scale: u32) -> RgbaImage {
    let size = TEXTURE_SIZE as u32;
    let mut target = ImageTarget::new(Size::new(size, size), scale);
    Image::new(&TextureImage::new(texture, palette), Point::zero())
        .draw(&mut target)
        .unwrap_or_else(|e| match e {});
    target.into_image()
}

pub struct Preview {
    pub image: RgbaImage,
    pub frames: u32,
    pub commits: u32,
}

pub fn preview_image(
    level: &'static Level,
    palette: Palette,
    ticks: u32,
    scale: u32,
) -> anarch::Result<Preview> {
    let target = ImageTarget::new(
        Size::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
        scale,
    );
    let mut host: LoopManager<_> = LoopManager::new(PaletteSurface::new(target, palette));
    let mut adapter = FrameAdapter::new(PreviewEngine::new(level));
    adapter.start(&mut host)?;
    for tick in 0..ticks {
        host.tick(tick.wrapping_mul(PREVIEW_TICK_US), &mut adapter);
    }
    adapter.stop(&mut host);
    let frames = adapter.frames();
    info!("preview rendered {} frames", frames);

    let surface = host.into_surface().ok_or(anarch::Error::SurfaceUnavailable)?;
    let commits = surface.commits();
    Ok(Preview {
        image: surface.into_inner().into_image(),
        frames,
        commits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anarch::assets;
    use anarch::levels;
    use anarch::texture::TRANSPARENT_COLOR;

    #[test]
    fn test_texture_export_keeps_transparency() {
        let texture = assets::wall_texture(0).unwrap();
        let palette = Palette::grayscale();
        let image = texture_image(texture, &palette, 2);
        assert_eq!(image.dimensions(), (64, 64));
        let mut rng = oorandom::Rand32::new(7);
        for _ in 0..64 {
            let x = rng.rand_range(0..32) as u8;
            let y = rng.rand_range(0..32) as u8;
            let alpha = image.get_pixel(x as u32 * 2 + 1, y as u32 * 2 + 1)[3];
            let transparent = texture.texel(x, y) == TRANSPARENT_COLOR;
            assert_eq!(alpha == 0, transparent);
        }
    }

    #[test]
    fn test_preview_runs_adapter() {
        let level = levels::get(1).unwrap();
        let preview = preview_image(level, Palette::grayscale(), 5, 1).unwrap();
        assert_eq!(preview.image.dimensions(), (160, 128));
        assert_eq!(preview.frames, 5);
        assert_eq!(preview.commits, 5);
        assert!(preview.image.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_preview_without_ticks() {
        let level = levels::get(0).unwrap();
        let preview = preview_image(level, Palette::grayscale(), 0, 1).unwrap();
        assert_eq!(preview.frames, 0);
        assert!(preview.image.pixels().all(|p| p[3] == 0));
    }
}
