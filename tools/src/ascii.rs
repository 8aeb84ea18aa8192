use anarch::level::{ElementClass, ElementType, Level, MAP_SIZE};
use anarch::tile::TileProperty;
use std::fmt::Write;

pub const PLAYER_CHAR: char = '@';

pub fn element_char(element_type: ElementType) -> char {
    match element_type.class() {
        ElementClass::None => ' ',
        ElementClass::Item => match element_type {
            ElementType::Card0 | ElementType::Card1 | ElementType::Card2 => 'K',
            _ => '+',
        },
        ElementClass::Decoration => '*',
        ElementClass::Marker => match element_type {
            ElementType::Finish => 'F',
            ElementType::Blocker => 'x',
            _ => 'L',
        },
        ElementClass::Monster => 'M',
    }
}

pub fn tile_char(level: &Level, x: i16, y: i16) -> char {
    let (tile, property) = level.tile(x, y);
    match property {
        TileProperty::Door => 'D',
        TileProperty::Elevator => 'E',
        TileProperty::Squeezer => 'S',
        TileProperty::Normal => {
            std::char::from_digit(tile.floor_height() as u32, 32).unwrap_or('?')
        }
    }
}

pub fn render_map(level: &Level) -> String {
    let mut grid = [[' '; MAP_SIZE]; MAP_SIZE];
    for (y, row) in grid.iter_mut().enumerate() {
        for (x, c) in row.iter_mut().enumerate() {
            *c = tile_char(level, x as i16, y as i16);
        }
    }
    for element in level.elements() {
        grid[element.y as usize][element.x as usize] = element_char(element.element_type);
    }
    let start = level.player_start();
    grid[start.y as usize][start.x as usize] = PLAYER_CHAR;

    let mut out = String::with_capacity((MAP_SIZE + 1) * MAP_SIZE);
    for row in grid.iter() {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

pub fn render_elements(level: &Level) -> String {
    let mut out = String::new();
    for (index, element) in level.elements().enumerate() {
        let _ = writeln!(
            out,
            "{:3} {:<10} ({:2}, {:2}) {:?}",
            index,
            format!("{:?}", element.element_type),
            element.x,
            element.y,
            element.element_type.class()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use anarch::levels;

    fn at(map: &str, x: usize, y: usize) -> char {
        map.lines().nth(y).unwrap().chars().nth(x).unwrap()
    }

    #[test]
    fn test_level0_map() {
        let map = render_map(levels::get(0).unwrap());
        assert_eq!(map.lines().count(), MAP_SIZE);
        assert!(map.lines().all(|l| l.chars().count() == MAP_SIZE));
        assert_eq!(at(&map, 52, 55), PLAYER_CHAR);
        assert_eq!(at(&map, 28, 54), 'F');
        assert_eq!(at(&map, 38, 18), 'L');
        assert_eq!(at(&map, 50, 20), 'K');
        assert_eq!(at(&map, 23, 10), 'E');
        assert_eq!(map.matches('M').count(), 11);
    }

    #[test]
    fn test_tile_char_digits() {
        let level = levels::get(0).unwrap();
        // player start floor is height 8
        assert_eq!(tile_char(level, 52, 55), '8');
        // outside reads as the sentinel's masked floor height
        assert_eq!(tile_char(level, -1, 0), 'v');
    }

    #[test]
    fn test_element_list() {
        let list = render_elements(levels::get(0).unwrap());
        assert_eq!(list.lines().count(), 71);
        assert!(list.contains("Lock0      (38, 18) Marker"));
    }
}
