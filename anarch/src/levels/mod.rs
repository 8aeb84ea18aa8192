mod level0;
mod level1;
mod level2;
mod level3;
mod level4;

use crate::level::Level;

pub const NUMBER_OF_LEVELS: usize = 10;

// Levels 5 to 9 have not been authored yet and share an empty map.
static UNFINISHED: Level = Level::empty();

static LEVELS: [&Level; NUMBER_OF_LEVELS] = [
    &level0::LEVEL,
    &level1::LEVEL,
    &level2::LEVEL,
    &level3::LEVEL,
    &level4::LEVEL,
    &UNFINISHED,
    &UNFINISHED,
    &UNFINISHED,
    &UNFINISHED,
    &UNFINISHED,
];

pub fn get(index: usize) -> Option<&'static Level> {
    LEVELS.get(index).copied()
}

pub fn all() -> impl Iterator<Item = &'static Level> {
    LEVELS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{ElementType, PlayerStart};
    use crate::tile::{TileDefinition, TileProperty};

    #[test]
    fn test_catalog_size() {
        assert_eq!(all().count(), NUMBER_OF_LEVELS);
        assert!(get(NUMBER_OF_LEVELS - 1).is_some());
        assert!(get(NUMBER_OF_LEVELS).is_none());
    }

    #[test]
    fn test_level0_player_start_tile() {
        let level = get(0).unwrap();
        let start = level.player_start();
        assert_eq!(start, PlayerStart::new(52, 55, 80));
        let (tile, property) = level.tile(start.x as i16, start.y as i16);
        assert!(level.cell(start.x as i16, start.y as i16).is_some());
        assert_eq!(tile, TileDefinition::new(8, 31, 4, 0));
        assert_eq!(property, TileProperty::Normal);
    }

    #[test]
    fn test_level0_header() {
        let level = get(0).unwrap();
        assert_eq!(level.texture_indices(), &[1, 3, 12, 14, 5, 11, 6]);
        assert_eq!(level.door_texture_index(), 13);
        assert_eq!(level.floor_color(), 20);
        assert_eq!(level.ceiling_color(), 3);
        assert_eq!(level.background_image(), 0);
        assert_eq!(level.elements().count(), 71);
        // door at (38, 18) carries the first lock
        assert_eq!(level.tile(38, 18).1, TileProperty::Door);
        assert_eq!(
            level.element_at(38, 18).map(|e| e.element_type),
            Some(ElementType::Lock0)
        );
        assert_eq!(level.tile(23, 10).1, TileProperty::Elevator);
    }

    #[test]
    fn test_player_starts() {
        let starts: std::vec::Vec<_> = all().take(5).map(|l| l.player_start()).collect();
        assert_eq!(
            starts,
            [
                PlayerStart::new(52, 55, 80),
                PlayerStart::new(62, 2, 240),
                PlayerStart::new(44, 61, 240),
                PlayerStart::new(56, 50, 240),
                PlayerStart::new(53, 61, 240),
            ]
        );
    }

    #[test]
    fn test_catalog_is_valid() {
        for (index, level) in all().enumerate() {
            assert_eq!(level.validate(), Ok(()), "level {}", index);
        }
    }

    #[test]
    fn test_stray_locks() {
        let level = get(3).unwrap();
        let mut stray = level.stray_locks().map(|e| (e.x, e.y));
        assert_eq!(stray.next(), Some((27, 10)));
        assert_eq!(stray.next(), Some((21, 10)));
        assert_eq!(stray.next(), None);
        assert_eq!(get(0).unwrap().stray_locks().count(), 0);
    }

    #[test]
    fn test_unfinished_levels_are_empty() {
        for index in 5..NUMBER_OF_LEVELS {
            let level = get(index).unwrap();
            assert_eq!(level.elements().count(), 0);
            assert!(core::ptr::eq(level, get(5).unwrap()));
        }
    }
}
