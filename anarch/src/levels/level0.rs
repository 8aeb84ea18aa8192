use crate::level::{pad_elements, ElementType as E, Level, LevelElement, PlayerStart};
use crate::tile::TileDefinition as TD;
use crate::tile::{PROPERTY_DOOR as DOOR, PROPERTY_ELEVATOR as ELEVATOR};

const O: u8 = 0;
const AA: u8 = 37 | ELEVATOR;
const BB: u8 = 24 | ELEVATOR;
const CC: u8 = 16 | DOOR;
const DD: u8 = 18 | ELEVATOR;
const EE: u8 = 32 | DOOR;

#[rustfmt::skip]
pub static LEVEL: Level = Level {
    map: [
        // 0  1  2  3  4  5  6  7  8  9  10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63
        1, 1, 1, 1, 1, 1, 1, 23,23,23,23,23,1, 1, 1, 1, 1, 1, 1, 1, 23,23,23,23,23,27,23,23,23,23,23,23,23,23,23,27,23,23,23,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, // 0
        1, 1, 1, 1, 1, 1, 1, 23,23,23,23,23,1, 1, 1, 1, 1, 1, 1, 1, 23,23,27,27,23,1, 29,29,29,27,27,27,29,29,29,1, 23,27,27,29,29,29,29,29,29,29,29,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, // 1
        1, 1, 1, 1, 1, 1, 1, 23,23,23,23,23,1, 1, 1, 1, O, O, O, O, 23,23,29,1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 29,30,30,30,29,30,30,30,29,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, // 2
        1, 1, 1, 1, 1, 1, 1, 23,23,23,23,23,1, 1, 1, 1, O, O, O, O, O, 23,29,1, 1, 1, 6, 6, 1, 1, 1, 1, 1, 6, 6, 1, 1, 1, 28,30,30,30,30,30,30,30,29,O, 5, 5, 5, 5, 5, 5, 5, O, O, O, O, O, O, O, O, O, // 3
        1, 1, 1, 1, 1, 1, 1, 23,23,23,23,23,11,11,11,O, O, 38,38,38,O, 23,29,1, 1, O, 26,O, O, O, O, O, O, O, 26,O, 1, 1, 29,30,30,30,29,30,30,30,29,O, 5, 15,15,15,15,15,5, O, O, O, O, O, O, O, O, O, // 4
        1, 1, 1, 1, 1, 1, 1, 23,23,23,23,23,11,11,11,O, O, 38,38,38,O, 23,23,1, 1, O, 26,O, O, O, O, O, O, O, 26,O, 1, 1, 23,29,29,29,29,30,30,30,29,O, 5, 15,15,15,15,15,5, O, O, O, O, O, O, O, O, O, // 5
        O, O, O, O, O, O, O, 23,23,23,23,23,11,11,11,O, O, 38,38,38,O, 23,23,29,1, O, O, O, O, O, O, O, O, O, O, O, 1, 29,23,O, O, O, 29,30,30,30,29,O, 5, 15,15,15,15,15,5, O, O, O, O, O, O, O, O, O, // 6
        O, O, O, O, O, O, O, 23,23,23,23,23,11,11,11,O, O, 38,38,38,O, 23,23,23,6, 8, O, O, O, O, O, O, O, O, O, 8, 6, 23,23,O, O, O, 29,29,29,29,29,O, 5, 15,15,15,15,15,5, O, O, O, O, O, O, O, O, O, // 7
        O, O, O, O, 3, 3, 3, 23,23,23,23,23,O, O, O, O, O, O, 38,O, O, 23,23,29,6, 8, O, O, O, O, O, O, O, O, O, 8, 6, 23,23,O, O, O, O, O, O, O, O, O, 5, 15,15,15,15,15,5, O, O, O, O, O, O, O, O, O, // 8
        O, O, O, O, 3, O, O, O, O, 3, O, O, O, O, O, O, O, O, 38,O, 23,23,23,1, 1, O, O, O, O, O, O, O, O, O, O, O, 1, 29,23,O, O, O, O, O, O, O, O, O, 5, 15,15,15,15,15,5, O, O, O, O, O, O, O, O, O, // 9
        O, O, O, O, 3, O, O, O, O, 3, O, O, O, O, O, O, O, O, 38,38,38,38,38,AA,1, O, O, O, O, O, O, O, O, O, O, O, 1, 1, 23,O, O, O, O, O, 5, 5, 5, 5, 5, 15,15,15,5, 5, 5, O, O, O, O, O, O, O, O, O, // 10
        O, O, O, O, 3, O, O, O, O, 3, 3, 3, 3, O, O, O, 3, 3, 3, 3, 23,23,27,O, O, O, O, O, O, O, O, O, O, O, O, O, 1, 1, 27,O, O, O, O, O, 5, 15,15,15,15,15,15,15,5, O, O, O, O, O, O, O, O, O, O, O, // 11
        O, O, O, O, 3, O, O, O, O, O, O, 31,31,O, O, O, 31,31,O, O, 23,23,27,27,23,O, O, O, O, O, O, O, O, O, O, O, 6, 6, 27,O, O, O, O, O, 5, 15,15,15,15,15,15,15,5, O, O, O, O, O, O, O, O, O, O, O, // 12
        22,22,22,22,22,39,39,39,22,O, O, O, O, O, O, O, O, O, O, O, 23,23,23,23,23,26,26,O, O, O, O, O, 26,26,25,25,BB,BB,27,O, O, O, O, O, 5, 15,15,15,15,15,15,15,5, 1, 1, 1, 1, 1, 1, 1, 1, 14,14,14, // 13
        21,21,21,21,21,21,21,21,22,O, O, O, O, O, O, O, O, O, O, O, 23,23,23,23,23,O, O, O, O, O, O, O, O, O, 25,25,19,19,5, 5, 5, O, O, O, 5, 15,15,15,5, 5, 5, 5, 5, 1, 1, 1, 1, 1, 1, 1, 1, 14,14,14, // 14
        21,21,21,21,21,21,21,21,22,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 5, 19,19,19,19,19,5, 5, 5, 5, 5, 15,15,15,5, 5, 6, 6, 5, 5, O, 1, 1, 1, 1, 1, 1, O, 14,14, // 15
        21,21,21,21,21,21,21,21,22,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,8, 8, 8, 36,O, O, O, 5, 19,19,19,19,19,5, O, O, O, 19,15,15,15,5, O, O, O, O, 3, O, 1, 1, 1, 1, 1, 1, O, 14,14, // 16
        22,22,22,22,22,21,21,21,22,31,31,O, O, 31,31,O, O, O, 31,31,O, O, O, 31,31,O, 12,9, 9, 9, 12,O, 31,31,5, 19,19,19,19,19,5, O, O, O, 5, 17,17,17,5, 26,O, O, 26,3, O, O, O, O, O, O, O, O, 14,14, // 17
        O, O, O, O, 22,20,20,20,39,2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 12,10,10,10,12,2, 2, 2, 2, 5, 5, 6, CC,6, 5, O, O, O, O, O, O, O, O, O, O, O, O, 3, 3, 3, O, O, O, O, O, O, 14,14, // 18
        O, O, O, O, 22,21,21,21,39,2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 12,10,10,10,12,2, 2, 2, 2, 5, 5, 19,19,19,5, O, O, O, O, O, O, O, O, 8, 8, 8, 26,O, O, 3, O, O, O, O, O, O, 14,14, // 19
        O, O, O, O, 39,20,20,20,39,2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 12,10,10,10,12,2, 2, 2, 2, 6, 5, 15,15,15,19,11,10,9, 8, O, O, O, O, 8, 8, 8, 26,O, O, 3, O, O, O, O, O, O, 14,14, // 20
        O, O, O, O, 39,21,21,21,39,2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 12,10,10,10,12,2, 2, 2, 2, 6, 5, 15,15,15,19,11,10,9, 8, O, O, O, O, 8, 8, 8, 26,O, O, 3, O, O, O, O, O, O, 14,14, // 21
        O, O, O, O, 22,20,20,20,22,DD,O, O, O, O, O, O, 26,26,26,26,26,O, O, O, O, O, 12,9, 9, 9, 12,O, 2, 2, 2, 6, 5, 15,15,15,19,11,10,9, 8, O, O, O, O, O, O, O, O, O, O, 3, O, O, O, O, O, O, 14,14, // 22
        O, O, O, O, 22,21,21,21,22,12,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,8, 8, 8, 36,O, 2, 2, 2, 5, 5, 15,15,15,19,11,10,9, 8, O, O, O, O, O, O, O, O, O, O, 3, O, O, O, O, O, O, 14,14, // 23
        O, O, O, O, 39,21,21,21,21,11,10,9, 8, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 2, 2, 2, 6, 5, 19,19,19,5, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 3, O, O, O, O, O, O, 14,14, // 24
        O, O, O, O, 39,21,21,21,21,11,10,9, 8, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 2, 2, 2, 6, 5, 15,15,15,5, O, O, O, O, O, O, O, O, O, O, O, O, 3, 3, 3, O, O, O, O, O, O, 14,14, // 25
        O, O, O, O, 22,21,21,21,22,12,O, O, O, O, O, O, 8, 8, O, O, O, 8, 8, O, O, O, 8, 8, O, O, O, O, DD,2, 2, 6, 5, 15,15,15,5, O, O, O, 5, 17,17,17,5, 26,O, O, 26,3, O, O, O, O, O, O, O, O, 14,14, // 26
        O, O, O, O, 22,20,20,20,22,5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 31,31,2, 2, 2, 5, 5, 15,15,15,5, O, O, O, 5, 15,15,15,5, O, O, O, O, 3, O, 1, 1, 1, 1, 1, 1, O, 14,14, // 27
        O, O, O, O, 39,21,21,21,39,5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 2, 2, 2, 2, 2, 5, 15,15,15,15,5, 5, 5, 5, 5, 19,19,19,5, 5, 6, 6, 5, 5, O, 1, 1, 1, 1, 1, 1, 3, 14,14, // 28
        O, O, O, O, 39,20,20,20,39,5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 2, 2, 2, 2, 2, 5, 5, 15,15,15,15,15,15,15,19,15,15,15,5, O, O, O, O, O, O, 1, 1, 1, 1, 1, 1, 3, 14,14, // 29
        O, O, O, O, 22,21,21,21,39,5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 2, 2, 2, 2, 2, 5, 15,15,15,15,15,15,15,15,19,15,15,15,5, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 14,14,14, // 30
        O, O, O, O, 22,20,20,20,39,5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 2, 2, 2, 2, 2, 5, 5, 15,15,15,15,15,15,15,19,15,15,15,5, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 14,14,14, // 31
        O, O, O, O, 39,21,21,21,22,5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 1, 1, 1, 1, 5, 2, 2, 2, 2, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 19,19,19,5, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 14,14,14, // 32
        O, O, O, O, 39,21,21,21,22,40,40,40,40,40,40,40,40,40,26,35,31,O, O, 31,35,31,O, O, 31,35,2, 2, 2, 2, 2, 6, 5, 5, 5, 5, 5, 5, 5, 5, 5, 15,15,15,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, // 33
        O, O, O, O, 22,21,21,21,21,11,10,40,40,40,40,40,40,40,26,35,31,O, O, 31,35,31,O, O, 31,35,2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 5, 1, 1, 1, 5, 15,15,15,5, O, 14,14,14,14,14,14,14,O, O, O, O, O, O, 14, // 34
        O, O, O, O, 22,21,21,21,21,11,10,40,40,40,40,40,40,40,26,35,O, O, O, O, 35,O, O, O, O, 35,2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 6, 1, 1, 1, 5, 15,15,15,5, O, 14,14,14,14,14,14,14,O, O, O, O, O, O, 14, // 35
        O, O, O, O, 22,21,21,21,21,11,10,40,40,40,40,40,40,40,40,35,O, O, O, O, 35,O, O, O, O, 35,2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 6, 1, 1, 1, 5, 15,15,15,5, 6, 14,14,14,14,14,14,14,3, 3, 3, 3, O, O, 14, // 36
        O, O, O, O, 22,39,39,39,22,40,40,40,40,40,40,40,40,40,40,35,35,O, O, 35,35,35,O, O, 35,35,31,31,31,31,6, 6, 6, 6, 2, 2, 6, 1, 1, 1, 1, 6, CC,6, 1, O, O, O, O, O, O, O, O, O, O, O, 3, O, 14,14, // 37
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 10,34,10,34,40,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 1, 1, 1, 6, 2, 2, 5, 1, 1, 1, 11,11,11,11,11,O, O, O, O, O, O, O, O, O, O, O, 3, O, 14,14, // 38
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 10,34,10,34,40,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 1, 1, 1, 6, 2, 2, 6, 1, 1, 1, 11,11,11,11,11,O, O, O, O, 12,O, O, O, O, O, O, 3, O, 14,14, // 39
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 35,35,35,35,35,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 1, 1, 1, 6, 2, 2, 6, 1, 1, 1, 11,11,11,11,11,11,11,11,11,12,11,10,9, 8, O, O, 3, O, 14,14, // 40
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 31,O, O, O, 35,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 1, 1, 1, 6, 2, 2, 6, 1, 1, 1, 11,11,11,11,11,11,11,11,11,12,11,10,9, 8, O, O, 3, O, 14,14, // 41
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 31,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 5, 1, 1, 6, 2, 2, 5, 1, 1, 1, 11,11,11,11,11,11,11,11,11,12,11,10,9, 8, O, O, 3, O, O, 1, // 42
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 31,O, O, O, 35,O, O, O, O, O, O, O, O, O, 3, 3, 3, 3, O, O, O, O, O, O, O, 26,2, 2, 6, 1, 1, 1, 11,11,11,11,11,11,4, O, O, 12,O, O, O, O, O, O, 3, O, O, 1, // 43
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 35,35,35,35,35,O, O, O, O, O, O, O, O, O, 3, 40,40,O, O, O, O, O, O, O, O, 26,2, 2, 6, 1, 1, 1, 1, 1, 1, 1, 1, 1, 5, O, O, O, O, O, O, O, O, O, 3, O, O, 1, // 44
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 3, 3, 3, 3, 3, 3, O, O, O, 3, 3, 3, 3, 3, 40,40,O, O, O, O, O, O, O, O, 26,2, 2, 6, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, O, O, O, O, O, O, O, O, O, 3, O, O, 1, // 45
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, O, O, O, O, O, O, O, O, O, O, O, O, O, 3, 40,40,O, O, O, O, O, O, O, O, 31,2, 2, 5, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, O, O, O, O, 5, 1, 1, 1, 1, 1, O, O, 1, // 46
        1, 1, 1, 1, 1, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 23,23,23,23,23,29,O, O, O, O, O, 31,2, 2, 6, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, O, O, O, O, 1, 1, 1, 1, 1, 1, O, O, 1, // 47
        1, 1, 1, 1, 1, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 23,23,23,23,23,23,O, O, O, O, O, 31,2, 2, 6, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 8, O, O, 8, 1, 1, 1, 1, 1, 1, O, O, 1, // 48
        1, 1, 1, 1, 1, O, O, O, O, O, O, O, 3, O, O, O, O, O, O, O, O, O, O, O, O, O, 23,23,23,23,23,23,23,29,O, O, O, 26,2, 2, 6, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, O, O, O, O, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 49
        1, 1, 1, 1, 1, O, O, O, O, O, O, O, 3, O, O, O, O, O, O, 11,11,11,O, O, O, O, 23,23,23,23,23,23,23,23,O, O, O, 26,2, 2, 5, 5, 6, 1, 1, 1, 6, 1, 1, 1, 5, 8, O, O, 8, 6, 1, 1, 1, 1, 1, 1, 1, 1, // 50
        1, 1, 1, 1, 1, O, O, O, O, O, O, O, 3, O, O, O, 8, 9, 10,11,11,11,10,9, 8, O, 23,23,23,23,23,27,23,29,O, O, O, 26,2, 2, 2, 2, 2, 2, 2, 2, 2, O, O, O, O, O, O, O, O, 6, 1, 1, 1, 1, 1, 1, 1, 1, // 51
        1, 1, 1, 1, 1, O, O, O, O, O, O, O, 3, 3, 3, O, 8, 9, 10,11,11,11,10,9, 8, O, 23,23,23,27,1, 1, 9, 9, O, O, O, O, O, O, O, O, 2, 2, 2, 2, 2, O, O, O, O, O, O, O, O, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 52
        1, 1, 1, 1, 1, O, O, O, O, O, O, O, O, O, O, 23,27,1, 27,15,15,15,27,1, 27,23,23,23,23,27,O, O, O, O, O, O, O, O, O, O, O, O, 2, 2, 2, 2, 2, O, O, O, O, O, O, O, O, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 53
        1, 1, 1, 1, 1, O, O, O, O, O, O, O, O, O, O, 23,23,23,27,15,15,15,27,23,23,23,23,23,33,EE,O, O, O, O, O, O, O, O, O, O, O, O, 2, 2, 2, 2, 2, O, O, O, O, O, O, O, O, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 54
        1, 1, 1, 1, 1, O, O, O, O, O, O, O, O, O, O, 23,23,23,27,15,15,15,27,23,23,23,23,23,23,27,O, O, O, O, O, O, O, O, O, O, O, O, 2, 2, 2, 2, 2, O, O, O, 8, 8, 8, 8, 8, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 55
        1, 1, 1, 1, 1, O, O, O, O, O, O, O, O, O, O, 23,15,15,15,15,15,15,15,15,15,23,23,23,23,27,1, 1, 9, 9, O, O, O, O, O, O, O, O, 2, 2, 2, 2, 2, O, O, O, 8, 8, 8, 8, 8, 5, 1, 1, 1, 1, 1, 1, 1, 1, // 56
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, O, 23,15,15,15,15,15,15,15,15,15,23,23,23,23,23,23,27,23,29,O, O, O, O, O, O, O, O, 2, 2, 2, 2, DD,O, O, O, 8, 8, 8, 8, 8, 8, 8, 9, 10,11,11,3, 1, 1, // 57
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, O, 23,15,15,23,23,23,23,23,15,15,23,23,23,23,23,23,23,23,23,O, O, O, O, O, O, O, O, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 1, 1, 11,3, 1, 1, // 58
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, O, 23,15,15,23,23,23,23,23,15,15,23,23,23,23,23,23,23,23,29,O, O, O, O, O, O, O, O, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 8, 8, 8, 8, 1, 11,3, 1, 1, // 59
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, O, 23,15,15,23,23,23,23,23,15,15,23,23,23,23,23,23,23,O, O, O, O, O, O, O, O, O, O, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 8, 8, 8, 8, 8, 8, 1, 1, 1, // 60
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, O, 23,15,15,23,23,23,23,23,15,15,23,23,23,23,23,23,29,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 8, 8, 8, 8, 8, 8, 1, 1, 1, // 61
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 3, O, O, O, O, O, O, O, O, O, O, O, O, 1, 1, 1, 1, 1, 1, 1, O, O, O, 1, 1, 1, 1, 1, 1, 1, 8, 8, 1, 1, 1, // 62
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, O, O, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 1, 1, 1, 1, 1, 1, 1, 3, 3, 3, 1, 1, 1, 1, 1, 1, 1, 8, 8, O, O, O, // 63
    ],
    tile_dictionary: [
        TD::new( 7, 31, 1, 0), TD::new(26, 31, 0, 0), TD::new( 0, 31, 0, 0), TD::new(14, 31, 2, 0), // 0
        TD::new(11, 31, 2, 0), TD::new(26, 31, 2, 0), TD::new(26, 31, 3, 0), TD::new( 7, 11, 0, 0), // 4
        TD::new( 8, 31, 4, 0), TD::new( 9, 31, 4, 0), TD::new(10, 31, 4, 0), TD::new(11, 31, 4, 0), // 8
        TD::new(11, 31, 2, 0), TD::new( 7, 11, 4, 0), TD::new(30, 31, 0, 0), TD::new(11,  7, 2, 0), // 12
        TD::new(15,  0, 4, 3), TD::new(13,  2, 2, 2), TD::new( 0,  7, 5, 0), TD::new(11,  5, 2, 2), // 16
        TD::new(11, 31, 2, 0), TD::new(11,  7, 2, 7), TD::new(18,  0, 2, 7), TD::new( 7,  0, 0, 0), // 20
        TD::new(11, 15, 5, 0), TD::new(30, 31, 2, 0), TD::new(12, 31, 6, 0), TD::new( 7,  0, 3, 3), // 24
        TD::new(26,  4, 0, 0), TD::new(31,  0, 2, 0), TD::new(26,  5, 0, 0), TD::new(10, 31, 6, 0), // 28
        TD::new(11,  0, 1, 0), TD::new( 7,  4, 1, 0), TD::new(10, 31, 2, 0), TD::new(14, 31, 4, 0), // 32
        TD::new(14, 31, 2, 0), TD::new( 3, 23, 5, 0), TD::new( 3,  4, 1, 0), TD::new(18, 31, 4, 0), // 36
        TD::new( 8, 31, 2, 0), TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), // 40
        TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), // 44
        TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), // 48
        TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), // 52
        TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), // 56
        TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), TD::new( 7, 11, 0, 0), // 60
    ],
    texture_indices: [1, 3, 12, 14, 5, 11, 6],
    door_texture_index: 13,
    floor_color: 20,
    ceiling_color: 3,
    player_start: PlayerStart::new(52, 55, 80),
    background_image: 0,
    elements: pad_elements([
        LevelElement::new(E::Bullets, 31, 2), LevelElement::new(E::Bullets, 29, 2),
        LevelElement::new(E::Bullets, 35, 4), LevelElement::new(E::Bullets, 25, 4),
        LevelElement::new(E::Bullets, 51, 5), LevelElement::new(E::Rockets, 50, 5),
        LevelElement::new(E::Teleport, 18, 5), LevelElement::new(E::Bullets, 51, 6),
        LevelElement::new(E::Rockets, 50, 6), LevelElement::new(E::Teleport, 50, 9),
        LevelElement::new(E::Turret, 29, 13), LevelElement::new(E::Warrior, 36, 14),
        LevelElement::new(E::Terminal, 35, 15), LevelElement::new(E::Lamp, 32, 15),
        LevelElement::new(E::Ruin, 19, 15), LevelElement::new(E::Bullets, 49, 16),
        LevelElement::new(E::Ruin, 18, 16), LevelElement::new(E::Ruin, 19, 17),
        LevelElement::new(E::Lock0, 38, 18), LevelElement::new(E::Card0, 50, 20),
        LevelElement::new(E::Ruin, 6, 21), LevelElement::new(E::Ruin, 5, 21),
        LevelElement::new(E::Warrior, 46, 22), LevelElement::new(E::Ruin, 7, 22),
        LevelElement::new(E::Lamp, 9, 23), LevelElement::new(E::Turret, 16, 24),
        LevelElement::new(E::Lamp, 31, 25), LevelElement::new(E::Warrior, 16, 25),
        LevelElement::new(E::Lamp, 9, 26), LevelElement::new(E::Health, 49, 27),
        LevelElement::new(E::Bullets, 47, 27), LevelElement::new(E::Bullets, 45, 27),
        LevelElement::new(E::Lamp, 36, 28), LevelElement::new(E::Lamp, 36, 30),
        LevelElement::new(E::Warrior, 34, 32), LevelElement::new(E::Health, 30, 33),
        LevelElement::new(E::Bullets, 27, 33), LevelElement::new(E::Bullets, 22, 33),
        LevelElement::new(E::Warrior, 21, 36), LevelElement::new(E::Tree, 53, 39),
        LevelElement::new(E::Warrior, 46, 39), LevelElement::new(E::Tree, 15, 39),
        LevelElement::new(E::Tree, 13, 39), LevelElement::new(E::Bullets, 44, 41),
        LevelElement::new(E::Tree, 53, 43), LevelElement::new(E::Warrior, 32, 43),
        LevelElement::new(E::Turret, 31, 43), LevelElement::new(E::Warrior, 30, 43),
        LevelElement::new(E::Ruin, 21, 45), LevelElement::new(E::Ruin, 20, 45),
        LevelElement::new(E::Ruin, 19, 45), LevelElement::new(E::Lamp, 54, 48),
        LevelElement::new(E::Barrel, 53, 48), LevelElement::new(E::Barrel, 52, 48),
        LevelElement::new(E::Lamp, 51, 48), LevelElement::new(E::Lamp, 54, 50),
        LevelElement::new(E::Lamp, 51, 50), LevelElement::new(E::Ruin, 40, 51),
        LevelElement::new(E::Tree, 32, 52), LevelElement::new(E::Finish, 28, 54),
        LevelElement::new(E::Bullets, 49, 55), LevelElement::new(E::Bullets, 48, 55),
        LevelElement::new(E::Bullets, 49, 56), LevelElement::new(E::Bullets, 48, 56),
        LevelElement::new(E::Tree, 32, 56), LevelElement::new(E::Blocker, 58, 57),
        LevelElement::new(E::Ruin, 46, 59), LevelElement::new(E::Ruin, 46, 60),
        LevelElement::new(E::Ruin, 44, 61), LevelElement::new(E::Ruin, 43, 61),
        LevelElement::new(E::Lamp, 42, 61),
    ]),
};
