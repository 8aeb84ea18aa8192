use crate::tile::{
    MapCell, TileDefinition, TileDictionary, TileProperty, OUTSIDE_TILE, TILE_DICTIONARY_SIZE,
    TILE_TEXTURE_TRANSPARENT,
};
use crate::texture::TRANSPARENT_TEXTURE;

pub const MAP_SIZE: usize = 64;
pub const MAX_LEVEL_ELEMENTS: usize = 128;
pub const LEVEL_TEXTURE_SLOTS: usize = 7;
pub const MONSTERS_TOTAL: u8 = 7;

const MONSTER_BASE: u8 = 0x20;

/// Kind of a placed level element. Values stay below 128; the engine uses
/// the top bit for its own bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ElementType {
    None = 0x00,
    Barrel = 0x01,
    Health = 0x02,
    Bullets = 0x03,
    Rockets = 0x04,
    Plasma = 0x05,
    Tree = 0x06,
    Finish = 0x07,
    Teleport = 0x08,
    Terminal = 0x09,
    Column = 0x0a,
    Ruin = 0x0b,
    Lamp = 0x0c,
    Card0 = 0x0d,
    Card1 = 0x0e,
    Card2 = 0x0f,
    Lock0 = 0x10,
    Lock1 = 0x11,
    Lock2 = 0x12,
    Blocker = 0x13,
    Spider = 0x20,
    Destroyer = 0x21,
    Warrior = 0x22,
    Plasmabot = 0x23,
    Ender = 0x24,
    Turret = 0x25,
    Exploder = 0x26,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementClass {
    None,
    Item,
    Decoration,
    Marker,
    Monster,
}

impl ElementType {
    const MONSTERS: [ElementType; MONSTERS_TOTAL as usize] = [
        ElementType::Spider,
        ElementType::Destroyer,
        ElementType::Warrior,
        ElementType::Plasmabot,
        ElementType::Ender,
        ElementType::Turret,
        ElementType::Exploder,
    ];

    pub const fn from_raw(raw: u8) -> Option<Self> {
        use ElementType::*;
        Some(match raw {
            0x00 => None,
            0x01 => Barrel,
            0x02 => Health,
            0x03 => Bullets,
            0x04 => Rockets,
            0x05 => Plasma,
            0x06 => Tree,
            0x07 => Finish,
            0x08 => Teleport,
            0x09 => Terminal,
            0x0a => Column,
            0x0b => Ruin,
            0x0c => Lamp,
            0x0d => Card0,
            0x0e => Card1,
            0x0f => Card2,
            0x10 => Lock0,
            0x11 => Lock1,
            0x12 => Lock2,
            0x13 => Blocker,
            0x20..=0x26 => return Self::from_monster_index(raw - MONSTER_BASE),
            _ => return Option::None,
        })
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }

    pub const fn is_monster(self) -> bool {
        self as u8 >= MONSTER_BASE
    }

    pub const fn monster_index(self) -> Option<u8> {
        if self.is_monster() {
            Some(self as u8 - MONSTER_BASE)
        } else {
            Option::None
        }
    }

    pub const fn from_monster_index(index: u8) -> Option<Self> {
        if index < MONSTERS_TOTAL {
            Some(Self::MONSTERS[index as usize])
        } else {
            Option::None
        }
    }

    pub const fn class(self) -> ElementClass {
        use ElementType::*;
        match self {
            None => ElementClass::None,
            Health | Bullets | Rockets | Plasma | Card0 | Card1 | Card2 => ElementClass::Item,
            Barrel | Tree | Teleport | Terminal | Column | Ruin | Lamp => ElementClass::Decoration,
            Finish | Lock0 | Lock1 | Lock2 | Blocker => ElementClass::Marker,
            Spider | Destroyer | Warrior | Plasmabot | Ender | Turret | Exploder => {
                ElementClass::Monster
            }
        }
    }

    pub const fn key_card(self) -> Option<Self> {
        match self {
            ElementType::Lock0 => Some(ElementType::Card0),
            ElementType::Lock1 => Some(ElementType::Card1),
            ElementType::Lock2 => Some(ElementType::Card2),
            _ => Option::None,
        }
    }

    pub const fn is_lock(self) -> bool {
        self.key_card().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelElement {
    pub element_type: ElementType,
    pub x: u8,
    pub y: u8,
}

impl LevelElement {
    pub const NONE: LevelElement = LevelElement::new(ElementType::None, 0, 0);

    pub const fn new(element_type: ElementType, x: u8, y: u8) -> Self {
        LevelElement { element_type, x, y }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self.element_type, ElementType::None)
    }
}

pub const fn pad_elements<const N: usize>(
    placed: [LevelElement; N],
) -> [LevelElement; MAX_LEVEL_ELEMENTS] {
    assert!(N <= MAX_LEVEL_ELEMENTS);
    let mut elements = [LevelElement::NONE; MAX_LEVEL_ELEMENTS];
    let mut i = 0;
    while i < N {
        elements[i] = placed[i];
        i += 1;
    }
    elements
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerStart {
    pub x: u8,
    pub y: u8,
    pub direction: u8,
}

impl PlayerStart {
    pub const fn new(x: u8, y: u8, direction: u8) -> Self {
        PlayerStart { x, y, direction }
    }

    /// Direction in engine angle units, where 1024 is a full turn.
    pub const fn direction_units(self) -> u16 {
        self.direction as u16 * 4
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("element {index} at ({x}, {y}) is outside the map")]
    ElementOutOfBounds { index: usize, x: u8, y: u8 },
    #[error("element {index} follows the padding")]
    ElementAfterPadding { index: usize },
    #[error("player start ({x}, {y}) is outside the map")]
    PlayerStartOutOfBounds { x: u8, y: u8 },
}

pub struct Level {
    pub(crate) map: [u8; MAP_SIZE * MAP_SIZE],
    pub(crate) tile_dictionary: TileDictionary,
    pub(crate) texture_indices: [u8; LEVEL_TEXTURE_SLOTS],
    pub(crate) door_texture_index: u8,
    pub(crate) floor_color: u8,
    pub(crate) ceiling_color: u8,
    pub(crate) player_start: PlayerStart,
    pub(crate) background_image: u8,
    pub(crate) elements: [LevelElement; MAX_LEVEL_ELEMENTS],
}

impl Level {
    pub const fn empty() -> Self {
        Level {
            map: [0; MAP_SIZE * MAP_SIZE],
            tile_dictionary: [TileDefinition::new(0, 31, 0, 0); TILE_DICTIONARY_SIZE],
            texture_indices: [0; LEVEL_TEXTURE_SLOTS],
            door_texture_index: 0,
            floor_color: 0,
            ceiling_color: 0,
            player_start: PlayerStart::new(MAP_SIZE as u8 / 2, MAP_SIZE as u8 / 2, 0),
            background_image: 0,
            elements: [LevelElement::NONE; MAX_LEVEL_ELEMENTS],
        }
    }

    pub fn cell(&self, x: i16, y: i16) -> Option<MapCell> {
        if x < 0 || x >= MAP_SIZE as i16 || y < 0 || y >= MAP_SIZE as i16 {
            return None;
        }
        Some(MapCell::from_raw(self.map[y as usize * MAP_SIZE + x as usize]))
    }

    /// Tile at a map square. Squares outside the map read as `OUTSIDE_TILE`
    /// with normal properties.
    pub fn tile(&self, x: i16, y: i16) -> (TileDefinition, TileProperty) {
        match self.cell(x, y) {
            Some(cell) => (self.tile_dictionary[cell.index()], cell.property()),
            None => (OUTSIDE_TILE, TileProperty::Normal),
        }
    }

    pub fn tile_dictionary(&self) -> &TileDictionary {
        &self.tile_dictionary
    }

    pub fn texture_indices(&self) -> &[u8; LEVEL_TEXTURE_SLOTS] {
        &self.texture_indices
    }

    pub fn wall_texture(&self, slot: u8) -> u8 {
        if slot == TILE_TEXTURE_TRANSPARENT {
            TRANSPARENT_TEXTURE
        } else {
            self.texture_indices[(slot & 0x07) as usize]
        }
    }

    pub fn door_texture_index(&self) -> u8 {
        self.door_texture_index
    }

    pub fn floor_color(&self) -> u8 {
        self.floor_color
    }

    pub fn ceiling_color(&self) -> u8 {
        self.ceiling_color
    }

    pub fn player_start(&self) -> PlayerStart {
        self.player_start
    }

    pub fn background_image(&self) -> u8 {
        self.background_image
    }

    pub fn element_table(&self) -> &[LevelElement; MAX_LEVEL_ELEMENTS] {
        &self.elements
    }

    pub fn elements(&self) -> impl Iterator<Item = &LevelElement> + '_ {
        self.elements.iter().filter(|e| !e.is_none())
    }

    pub fn monsters(&self) -> impl Iterator<Item = &LevelElement> + '_ {
        self.elements().filter(|e| e.element_type.is_monster())
    }

    pub fn element_at(&self, x: u8, y: u8) -> Option<&LevelElement> {
        self.elements().find(|e| e.x == x && e.y == y)
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        let start = self.player_start;
        if start.x as usize >= MAP_SIZE || start.y as usize >= MAP_SIZE {
            return Err(LevelError::PlayerStartOutOfBounds {
                x: start.x,
                y: start.y,
            });
        }

        let mut padding = false;
        for (index, element) in self.elements.iter().enumerate() {
            if element.is_none() {
                padding = true;
                continue;
            }
            if padding {
                return Err(LevelError::ElementAfterPadding { index });
            }
            let (x, y) = (element.x, element.y);
            if x as usize >= MAP_SIZE || y as usize >= MAP_SIZE {
                return Err(LevelError::ElementOutOfBounds { index, x, y });
            }
        }
        Ok(())
    }

    pub fn stray_locks(&self) -> impl Iterator<Item = &LevelElement> + '_ {
        self.elements().filter(move |e| {
            e.element_type.is_lock() && self.tile(e.x as i16, e.y as i16).1 != TileProperty::Door
        })
    }
}

impl core::fmt::Debug for Level {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Level")
            .field("texture_indices", &self.texture_indices)
            .field("door_texture_index", &self.door_texture_index)
            .field("player_start", &self.player_start)
            .field("background_image", &self.background_image)
            .field("elements", &self.elements().count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::{PROPERTY_DOOR, PROPERTY_ELEVATOR};

    fn sample_level() -> Level {
        let mut level = Level::empty();
        level.tile_dictionary[1] = TileDefinition::new(10, 5, 2, 7);
        level.tile_dictionary[2] = TileDefinition::new(3, 31, 1, 0);
        level.map[4 * MAP_SIZE + 3] = 1 | PROPERTY_ELEVATOR;
        level.map[6 * MAP_SIZE + 5] = 2 | PROPERTY_DOOR;
        level.texture_indices = [9, 3, 6, 11, 12, 2, 5];
        level.elements = pad_elements([
            LevelElement::new(ElementType::Bullets, 1, 1),
            LevelElement::new(ElementType::Warrior, 2, 1),
            LevelElement::new(ElementType::Lock1, 5, 6),
        ]);
        level
    }

    #[test]
    fn test_tile_inside() {
        let level = sample_level();
        let (tile, property) = level.tile(3, 4);
        assert_eq!(tile, TileDefinition::new(10, 5, 2, 7));
        assert_eq!(property, TileProperty::Elevator);
        assert_eq!(level.tile(5, 6).1, TileProperty::Door);
        assert_eq!(level.tile(0, 0).1, TileProperty::Normal);
    }

    #[test]
    fn test_tile_outside() {
        let level = sample_level();
        for (x, y) in [(-1, 0), (0, -1), (64, 0), (0, 64), (i16::MIN, i16::MAX), (63, 64)] {
            let (tile, property) = level.tile(x, y);
            assert_eq!(tile, OUTSIDE_TILE);
            assert_eq!(property, TileProperty::Normal);
        }
    }

    #[test]
    fn test_tile_outside_random() {
        let level = sample_level();
        let mut rng = oorandom::Rand32::new(0x5eed);
        for _ in 0..10_000 {
            let x = rng.rand_u32() as i16;
            let y = rng.rand_u32() as i16;
            let inside = (0..64).contains(&x) && (0..64).contains(&y);
            assert_eq!(level.cell(x, y).is_none(), !inside);
            if !inside {
                assert_eq!(level.tile(x, y), (OUTSIDE_TILE, TileProperty::Normal));
            }
        }
    }

    #[test]
    fn test_sentinel_valued_tile_inside_map() {
        let mut level = sample_level();
        level.tile_dictionary[3] = TileDefinition::new(31, 0, 7, 7);
        level.map[9 * MAP_SIZE + 8] = 3;
        assert_eq!(level.tile(8, 9), (OUTSIDE_TILE, TileProperty::Normal));
        assert!(level.cell(8, 9).is_some());
        assert!(level.cell(8, 64).is_none());
    }

    #[test]
    fn test_wall_texture_slots() {
        let level = sample_level();
        assert_eq!(level.wall_texture(0), 9);
        assert_eq!(level.wall_texture(6), 5);
        assert_eq!(level.wall_texture(TILE_TEXTURE_TRANSPARENT), TRANSPARENT_TEXTURE);
        let (tile, _) = level.tile(3, 4);
        assert_eq!(level.wall_texture(tile.ceiling_texture()), TRANSPARENT_TEXTURE);
        assert_eq!(level.wall_texture(tile.floor_texture()), 6);
    }

    #[test]
    fn test_elements_skip_padding() {
        let level = sample_level();
        assert_eq!(level.element_table().len(), MAX_LEVEL_ELEMENTS);
        assert_eq!(level.elements().count(), 3);
        assert_eq!(level.monsters().count(), 1);
        assert_eq!(
            level.element_at(2, 1).map(|e| e.element_type),
            Some(ElementType::Warrior)
        );
        assert!(level.element_at(0, 0).is_none());
    }

    #[test]
    fn test_monster_index_mapping() {
        for index in 0..MONSTERS_TOTAL {
            let monster = ElementType::from_monster_index(index).unwrap();
            assert!(monster.is_monster());
            assert_eq!(monster.monster_index(), Some(index));
            assert_eq!(monster.raw(), index + 0x20);
        }
        assert_eq!(ElementType::from_monster_index(MONSTERS_TOTAL), None);
        assert_eq!(ElementType::Blocker.monster_index(), None);
    }

    #[test]
    fn test_raw_round_trip() {
        for raw in 0..=u8::MAX {
            if let Some(element_type) = ElementType::from_raw(raw) {
                assert_eq!(element_type.raw(), raw);
                assert!(raw < 0x80);
            }
        }
        assert_eq!(ElementType::from_raw(0x14), None);
        assert_eq!(ElementType::from_raw(0x27), None);
    }

    #[test]
    fn test_classes() {
        assert_eq!(ElementType::None.class(), ElementClass::None);
        assert_eq!(ElementType::Card2.class(), ElementClass::Item);
        assert_eq!(ElementType::Lamp.class(), ElementClass::Decoration);
        assert_eq!(ElementType::Finish.class(), ElementClass::Marker);
        assert_eq!(ElementType::Exploder.class(), ElementClass::Monster);
        assert_eq!(ElementType::Lock2.key_card(), Some(ElementType::Card2));
        assert_eq!(ElementType::Card0.key_card(), None);
    }

    #[test]
    fn test_validate() {
        let mut level = sample_level();
        assert_eq!(level.validate(), Ok(()));

        level.elements[5] = LevelElement::new(ElementType::Tree, 1, 2);
        assert_eq!(level.validate(), Err(LevelError::ElementAfterPadding { index: 5 }));

        level.elements[5] = LevelElement::NONE;
        level.elements[2] = LevelElement::new(ElementType::Health, 64, 0);
        assert_eq!(
            level.validate(),
            Err(LevelError::ElementOutOfBounds { index: 2, x: 64, y: 0 })
        );

        level.player_start = PlayerStart::new(70, 1, 0);
        assert_eq!(
            level.validate(),
            Err(LevelError::PlayerStartOutOfBounds { x: 70, y: 1 })
        );
    }

    #[test]
    fn test_stray_locks() {
        let mut level = sample_level();
        assert_eq!(level.stray_locks().count(), 0);
        level.elements[3] = LevelElement::new(ElementType::Lock0, 3, 4);
        let stray: std::vec::Vec<_> = level.stray_locks().copied().collect();
        assert_eq!(stray, [LevelElement::new(ElementType::Lock0, 3, 4)]);
        assert_eq!(level.validate(), Ok(()));
    }

    #[test]
    fn test_direction_units() {
        assert_eq!(PlayerStart::new(0, 0, 80).direction_units(), 320);
        assert_eq!(PlayerStart::new(0, 0, 255).direction_units(), 1020);
    }
}
