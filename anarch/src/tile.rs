// Tile definition format:
//   MSB aaabbbbb cccddddd LSB
//   aaa:   ceiling texture slot (7 = transparent)
//   bbbbb: ceiling height above the floor (31 = no ceiling)
//   ccc:   floor texture slot (7 = transparent)
//   ddddd: floor height
//
// Map cell format:
//   MSB aabbbbbb LSB
//   aa:     property (normal, elevator, squeezer, door)
//   bbbbbb: index into the level's tile dictionary

pub const TILE_DICTIONARY_SIZE: usize = 64;
pub const TILE_CEILING_MAX_HEIGHT: u8 = 31;
pub const TILE_TEXTURE_TRANSPARENT: u8 = 7;

pub const PROPERTY_MASK: u8 = 0xc0;
pub const PROPERTY_NORMAL: u8 = 0x00;
pub const PROPERTY_ELEVATOR: u8 = 0x40;
pub const PROPERTY_SQUEEZER: u8 = 0x80;
pub const PROPERTY_DOOR: u8 = 0xc0;

const INDEX_MASK: u8 = 0x3f;

/// Floor height the outside tile is authored with. The packed field is five
/// bits wide, so the stored value saturates to the highest floor.
pub const OUTSIDE_FLOOR_HEIGHT: u8 = 63;

pub const OUTSIDE_TILE: TileDefinition = TileDefinition::new(
    OUTSIDE_FLOOR_HEIGHT,
    0,
    TILE_TEXTURE_TRANSPARENT,
    TILE_TEXTURE_TRANSPARENT,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TileDefinition(u16);

impl TileDefinition {
    pub const fn new(floor_height: u8, ceiling_height: u8, floor_texture: u8, ceiling_texture: u8) -> Self {
        TileDefinition(
            (floor_height as u16 & 0x001f)
                | ((floor_texture as u16 & 0x0007) << 5)
                | ((ceiling_height as u16 & 0x001f) << 8)
                | ((ceiling_texture as u16 & 0x0007) << 13),
        )
    }

    pub const fn from_raw(raw: u16) -> Self {
        TileDefinition(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn floor_height(self) -> u8 {
        (self.0 & 0x1f) as u8
    }

    pub const fn floor_texture(self) -> u8 {
        ((self.0 & 0xe0) >> 5) as u8
    }

    pub const fn ceiling_height(self) -> u8 {
        ((self.0 & 0x1f00) >> 8) as u8
    }

    pub const fn ceiling_texture(self) -> u8 {
        ((self.0 & 0xe000) >> 13) as u8
    }

    pub const fn has_ceiling(self) -> bool {
        self.ceiling_height() != TILE_CEILING_MAX_HEIGHT
    }
}

pub type TileDictionary = [TileDefinition; TILE_DICTIONARY_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileProperty {
    Normal,
    Elevator,
    Squeezer,
    Door,
}

impl TileProperty {
    pub const fn from_bits(bits: u8) -> Self {
        match bits & PROPERTY_MASK {
            PROPERTY_NORMAL => TileProperty::Normal,
            PROPERTY_ELEVATOR => TileProperty::Elevator,
            PROPERTY_SQUEEZER => TileProperty::Squeezer,
            _ => TileProperty::Door,
        }
    }

    pub const fn bits(self) -> u8 {
        match self {
            TileProperty::Normal => PROPERTY_NORMAL,
            TileProperty::Elevator => PROPERTY_ELEVATOR,
            TileProperty::Squeezer => PROPERTY_SQUEEZER,
            TileProperty::Door => PROPERTY_DOOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct MapCell(u8);

impl MapCell {
    pub const fn new(property: TileProperty, index: u8) -> Self {
        MapCell(property.bits() | (index & INDEX_MASK))
    }

    pub const fn from_raw(raw: u8) -> Self {
        MapCell(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn property(self) -> TileProperty {
        TileProperty::from_bits(self.0)
    }

    pub const fn index(self) -> usize {
        (self.0 & INDEX_MASK) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_layout() {
        let tile = TileDefinition::new(7, 31, 1, 0);
        assert_eq!(tile.raw(), 0x1f27);
        assert_eq!(tile.floor_height(), 7);
        assert_eq!(tile.floor_texture(), 1);
        assert_eq!(tile.ceiling_height(), 31);
        assert_eq!(tile.ceiling_texture(), 0);
        assert!(!tile.has_ceiling());
    }

    #[test]
    fn test_fields_are_masked() {
        let tile = TileDefinition::new(0xff, 0xff, 0xff, 0xff);
        assert_eq!(tile.raw(), 0xffff);
        assert_eq!(tile.floor_height(), 31);
        assert_eq!(tile.floor_texture(), 7);
        assert_eq!(tile.ceiling_height(), 31);
        assert_eq!(tile.ceiling_texture(), 7);
    }

    #[test]
    fn test_decode_encode_all_values() {
        for raw in 0..=u16::MAX {
            let tile = TileDefinition::from_raw(raw);
            let rebuilt = TileDefinition::new(
                tile.floor_height(),
                tile.ceiling_height(),
                tile.floor_texture(),
                tile.ceiling_texture(),
            );
            assert_eq!(rebuilt.raw(), raw);
        }
    }

    #[test]
    fn test_outside_tile() {
        assert_eq!(OUTSIDE_TILE.floor_height(), OUTSIDE_FLOOR_HEIGHT & 0x1f);
        assert_eq!(OUTSIDE_TILE.ceiling_height(), 0);
        assert_eq!(OUTSIDE_TILE.floor_texture(), TILE_TEXTURE_TRANSPARENT);
        assert_eq!(OUTSIDE_TILE.ceiling_texture(), TILE_TEXTURE_TRANSPARENT);
    }

    #[test]
    fn test_map_cell_all_bytes() {
        for raw in 0..=u8::MAX {
            let cell = MapCell::from_raw(raw);
            assert!(cell.index() < TILE_DICTIONARY_SIZE);
            assert_eq!(cell.property().bits(), raw & PROPERTY_MASK);
            assert_eq!(MapCell::new(cell.property(), cell.index() as u8), cell);
        }
    }

    #[test]
    fn test_property_tags() {
        assert_eq!(MapCell::from_raw(37 | PROPERTY_ELEVATOR).property(), TileProperty::Elevator);
        assert_eq!(MapCell::from_raw(3 | PROPERTY_SQUEEZER).property(), TileProperty::Squeezer);
        assert_eq!(MapCell::from_raw(16 | PROPERTY_DOOR).property(), TileProperty::Door);
        assert_eq!(MapCell::from_raw(63).property(), TileProperty::Normal);
        assert_eq!(MapCell::from_raw(16 | PROPERTY_DOOR).index(), 16);
    }
}
