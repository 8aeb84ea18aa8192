mod data;

use crate::texture::{Texture, TRANSPARENT_TEXTURE};

pub use data::{BACKGROUNDS, WALL_TEXTURES};

pub fn wall_texture(index: u8) -> Option<&'static Texture> {
    if index == TRANSPARENT_TEXTURE {
        return None;
    }
    WALL_TEXTURES.get(index as usize)
}

pub fn background(index: u8) -> Option<&'static Texture> {
    BACKGROUNDS.get(index as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_texture_lookup() {
        assert_eq!(WALL_TEXTURES.len(), 5);
        assert_eq!(wall_texture(0).unwrap().texel(0, 3), 21);
        assert_eq!(wall_texture(0).unwrap().texel(1, 0), 4);
        assert_eq!(wall_texture(4).unwrap().texel(31, 31), 11);
        assert!(wall_texture(5).is_none());
        assert!(wall_texture(TRANSPARENT_TEXTURE).is_none());
    }

    #[test]
    fn test_background_lookup() {
        assert_eq!(background(0).unwrap().texel(0, 0), 10);
        assert!(background(1).is_none());
    }
}
