use crate::level::{pad_elements, ElementType as E, Level, LevelElement, PlayerStart};
use crate::tile::TileDefinition as TD;
use crate::tile::{PROPERTY_DOOR as DOOR, PROPERTY_ELEVATOR as ELEVATOR, PROPERTY_SQUEEZER as SQUEEZER};

const O: u8 = 0;
const AA: u8 = 20 | DOOR;
const BB: u8 = 32 | DOOR;
const CC: u8 = 22 | ELEVATOR;
const DD: u8 = 40 | SQUEEZER;
const EE: u8 = 44 | DOOR;

#[rustfmt::skip]
pub static LEVEL: Level = Level {
    map: [
        // 0  1  2  3  4  5  6  7  8  9  10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63
        23,23,23,23,23,23,23,23,23,20,4, 4, 4, 20,20,20,20,20,20,20,20,20,20,20,20,20,20,20,20,20,20,20,20,20,20,20,20,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, // 0
        23,22,22,22,22,22,22,22,22,16,16,4, 16,16,16,16,16,16,16,16,16,16,16,16,16,16,16,16,16,16,20,16,16,16,16,16,20,4, 2, 2, 2, 48,3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 2, O, O, 48,4, 4, 4, 4, 4, 4, 4, // 1
        23,22,22,22,22,22,22,22,22,O, O, 3, O, O, 18,18,18,18,18,18,18,O, O, 46,O, O, O, O, O, 16,20,21,19,19,19,19,4, 2, 2, O, O, O, O, O, O, O, O, O, 2, 2, 48,4, 3, O, 5, 5, 3, 4, 4, 4, 4, 4, 4, 4, // 2
        23,22,22,22,22,22,22,22,22,17,17,3, 17,17,18,18,18,18,18,18,18,17,17,47,17,17,17,17,O, 16,AA,19,19,19,19,19,2, O, O, 5, 5, O, O, 3, 48,4, 5, 5, O, O, O, O, O, O, O, O, 4, 4, 6, 7, 6, 4, 4, 4, // 3
        23,22,22,22,22,22,22,22,22,O, 3, O, O, O, 18,18,18,18,18,18,18,O, O, 46,O, O, O, 17,O, 16,20,19,19,19,19,19,3, O, O, O, O, 2, 4, 4, 4, 4, 2, O, 3, 3, 4, O, 2, 4, 4, 4, 4, 4, 10,11,11,4, 4, 4, // 4
        23,22,22,22,22,22,22,22,22,16,4, 4, 16,16,16,16,16,16,16,16,16,16,16,16,16,16,O, 17,O, 16,20,16,16,16,16,16,20,20,20,20,20,20,20,20,20,4, 4, 4, 4, 4, 4, 8, 4, 4, 4, 4, 9, 9, 10,4, 11,12,4, 4, // 5
        23,22,22,22,22,22,23,23,23,20,4, 4, 4, 20,20,20,20,20,20,20,20,20,20,20,20,16,O, 17,O, 16,20,20,20,AA,20,20,20,19,19,19,19,19,19,19,20,4, 4, 4, 4, 4, 9, 9, 4, 4, 4, 4, 9, 4, 4, 4, 4, 12,4, 4, // 6
        23,22,22,22,22,22,23,23,23,20,20,20,20,20,20,20,20,20,20,20,20,20,20,20,20,16,O, 17,O, 16,20,20,20,19,19,19,19,19,19,19,19,19,19,19,20,4, 4, 4, 4, 10,10,9, 10,11,4, 8, 8, 4, 4, 13,13,12,4, 4, // 7
        23,22,22,22,22,22,23,23,23,20,20,20,20,20,20,20,20,20,20,20,20,20,20,20,4, 3, 18,18,18,16,20,20,20,20,20,20,20,20,20,24,24,29,29,29,20,4, 4, 4, 11,11,4, 4, 4, 12,12,8, 4, 4, 13,13,4, 4, 4, 4, // 8
        23,22,22,22,22,22,23,23,23,20,20,20,20,20,20,20,20,20,20,20,20,20,20,20,4, 4, 18,18,18,16,20,29,29,29,29,29,29,29,20,25,25,29,29,29,20,4, 4, 12,12,4, 4, 4, 4, 4, 4, 8, 4, 4, 13,4, 4, 4, 4, 4, // 9
        30,30,30,30,30,30,30,30,30,30,30,30,30,30,30,30,30,30,30,30,30,20,20,20,4, 3, 18,18,18,3, 20,29,29,29,29,29,29,29,20,26,26,29,20,29,20,4, 4, 12,12,4, 4, 15,9, 9, 8, 8, 13,13,13,13,15,4, 4, 4, // 10
        30,40,40,40,40,40,40,40,40,40,40,40,40,40,40,40,40,40,40,40,40,41,O, O, 20,16,18,18,18,16,20,29,29,34,34,34,29,29,20,27,27,29,20,29,20,4, 4, 13,13,4, 4, 15,8, 8, 8, 8, 13,13,13,13,13,15,4, 4, // 11
        30,40,41,41,41,41,41,40,40,40,40,40,41,41,41,41,41,41,40,40,40,41,O, O, 20,16,18,18,18,16,20,29,29,34,34,34,29,29,20,28,28,29,20,29,20,4, 4, 13,13,13,4, 13,8, 8, 8, 8, 13,13,4, 13,13,13,4, 4, // 12
        30,40,41,40,40,40,41,41,41,41,40,40,41,40,40,40,40,41,40,40,40,41,O, O, 31,16,18,18,18,16,20,29,29,29,29,29,29,29,20,29,29,29,20,29,20,4, 4, 4, 4, 13,4, 8, 8, 8, 8, 8, 13,13,4, 4, 13,13,6, 4, // 13
        30,40,41,40,40,40,40,40,40,41,40,40,41,40,40,41,41,41,40,40,40,41,O, O, 32,16,18,18,18,16,20,29,29,29,29,29,29,29,20,29,29,29,20,29,20,4, 4, 4, 4, 13,13,8, 8, 8, 8, 8, 12,13,4, 6, 13,13,7, 4, // 14
        30,40,41,40,40,40,40,40,40,41,41,41,41,40,40,41,40,40,40,40,42,41,O, 36,31,16,O, 17,O, 16,20,20,20,29,29,29,20,20,20,32,32,32,32,29,20,20,4, 4, 4, 13,13,8, 8, 8, 8, 8, 8, 13,4, 7, 12,12,6, 4, // 15
        30,40,41,40,40,40,40,40,40,40,40,40,40,40,40,41,40,40,40,40,43,41,O, 35,20,16,O, 17,O, 16,20,19,19,28,28,28,19,19,20,29,29,29,29,29,29,20,4, 4, 4, 13,13,8, 8, 8, 8, 8, 8, 13,13,6, 11,11,4, 4, // 16
        30,40,41,41,41,41,41,41,40,40,40,40,40,40,40,41,40,40,41,41,41,41,O, 16,AA,16,O, 17,O, 16,20,19,19,27,27,27,19,19,20,29,30,31,31,30,29,31,4, 4, 4, 13,13,12,8, 8, 8, 8, 12,13,13,4, 11,10,10,4, // 17
        30,40,40,40,40,40,40,41,40,40,40,40,40,41,40,41,40,40,41,40,43,41,O, 35,20,16,O, 17,O, 16,20,19,19,26,26,26,19,19,20,29,31,31,31,31,29,30,4, 4, 4, 4, 13,13,13,13,10,13,13,13,4, 4, 4, 10,9, 4, // 18
        30,40,40,40,40,40,40,41,40,40,41,40,40,41,40,41,40,40,41,40,42,41,O, 36,31,16,O, 17,O, 16,20,19,19,25,25,25,19,19,20,29,31,31,31,31,29,30,4, 4, 15,15,15,13,13,13,13,13,13,4, 4, 4, 4, 9, 9, 4, // 19
        30,41,41,41,41,40,40,41,41,41,41,40,40,41,40,41,41,41,41,40,40,41,O, O, 32,16,O, 17,O, 16,20,19,19,24,24,24,19,19,20,29,30,31,31,30,29,31,4, 4, 15,4, 15,4, 4, 14,4, 4, 4, 4, 4, 4, 8, 8, 8, 4, // 20
        30,40,40,40,40,40,40,40,40,40,41,40,40,41,40,40,40,40,40,40,40,41,O, O, 31,16,O, 17,O, 16,20,19,19,19,19,19,19,19,20,29,29,29,29,29,29,20,4, 4, 15,4, 11,11,11,12,4, 4, O, O, 3, 4, 8, 8, 4, 4, // 21
        30,40,40,40,40,40,40,40,40,40,41,40,40,41,40,40,40,40,40,40,40,41,O, O, 20,16,O, 17,O, 16,16,19,19,19,19,25,21,19,20,24,25,26,27,28,28,20,4, 4, 15,15,4, 11,4, 4, 4, O, 5, 5, O, 1, O, 4, 4, 4, // 22
        30,40,41,41,41,41,41,41,40,40,41,40,30,30,30,30,30,30,30,30,30,20,20,20,20,16,O, 17,O, 16,16,19,19,19,19,25,34,19,20,19,19,19,19,19,19,20,4, 4, 4, 15,15,8, 33,4, 4, 48,O, O, 3, 4, 4, 4, 4, 4, // 23
        30,40,41,40,40,40,40,41,41,40,41,40,30,31,31,31,31,31,31,31,31,31,31,31,20,16,O, 17,O, 16,16,19,19,19,19,19,19,19,20,19,19,19,19,19,19,20,4, 4, 4, 4, 4, 14,14,4, 4, 2, 3, 6, 4, 4, 4, 4, 4, 4, // 24
        30,40,41,40,40,40,40,40,41,41,41,40,30,31,O, O, O, O, O, O, O, O, O, 31,31,16,O, 17,O, 16,16,19,19,19,19,19,19,21,20,19,19,19,19,19,19,20,4, 4, 4, 14,14,14,14,3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, // 25
        30,40,41,41,41,41,40,40,40,40,40,40,30,31,O, O, O, O, O, O, O, O, O, 31,32,16,O, 17,O, 16,16,19,19,19,19,19,19,19,20,19,19,19,19,19,19,20,20,4, 14,14,14,14,4, 4, 2, 3, 4, 2, 3, 3, 2, 4, 4, 4, // 26
        30,40,40,40,40,41,41,40,40,40,40,40,30,31,O, O, O, O, O, O, O, O, O, 31,31,16,O, 17,O, 16,16,19,19,19,19,19,19,19,20,21,19,19,19,19,19,19,20,4, 14,14,14,4, 4, 3, O, O, 3, O, O, O, O, 3, 4, 4, // 27
        30,40,40,40,40,40,41,40,40,40,40,40,30,31,O, O, O, O, O, O, O, O, O, 31,20,16,O, 17,O, 16,16,19,19,19,19,25,34,19,20,19,19,21,19,19,19,19,20,4, 14,14,14,4, 3, O, O, O, O, O, 5, 5, 5, 1, 4, 4, // 28
        30,40,40,40,40,40,41,40,40,40,40,40,30,31,O, O, O, O, O, O, O, O, O, 31,20,16,O, 17,O, 16,16,19,19,19,19,25,21,19,20,20,20,20,20,20,16,16,20,4, 14,14,14,8, O, O, 2, O, O, O, O, O, 5, O, 3, 4, // 29
        30,40,30,40,40,41,41,41,40,40,30,40,30,31,O, O, O, 47,31,6, 36,36,36,31,20,16,O, 17,O, 16,20,19,19,19,19,19,19,19,20,29,29,29,20,20,16,16,32,4, 14,14,8, 8, O, 3, 3, 3, O, O, 4, 3, O, 5, O, 4, // 30
        30,43,30,41,41,41,41,41,41,41,30,43,30,31,O, O, O, O, 46,O, 35,35,35,31,31,16,O, 17,O, 16,20,19,19,24,24,24,19,19,20,29,29,29,20,20,16,16,32,4, 4, 4, 8, O, 4, 4, 4, 4, O, 4, 4, 4, O, 5, O, 4, // 31
        30,42,30,40,40,30,30,30,40,40,30,42,30,31,O, O, O, 47,46,O, 16,16,16,31,32,16,O, 17,O, 16,20,19,19,25,25,25,19,19,20,29,29,29,20,20,16,16,20,20,20,20,3, O, 4, 4, 4, 4, 2, 4, 4, 4, O, 5, O, 4, // 32
        30,40,40,40,40,30,30,30,40,40,40,40,30,31,4, 3, 3, 31,31,31,32,BB,32,32,31,16,O, 17,O, 16,20,19,19,26,26,26,19,19,20,29,29,29,20,20,19,19,19,19,19,20,3, O, O, 4, 4, 3, 3, 4, 4, 4, 3, O, 1, 4, // 33
        30,30,30,30,30,30,30,30,30,30,30,30,30,4, 4, O, O, 4, 4, 32,16,16,16,16,20,16,O, 17,O, 16,20,19,19,27,27,27,19,19,20,29,29,29,20,20,19,19,19,19,19,20,6, O, O, O, 4, 4, 4, 4, 4, 3, 2, 48,4, 4, // 34
        30,30,30,30,30,30,30,30,30,30,30,30,30,4, 2, O, O, 2, 4, 32,16,16,16,16,20,16,O, 17,O, 16,20,19,19,28,28,28,19,19,20,29,29,29,20,20,19,19,19,19,19,20,4, O, 5, O, 1, 4, 4, 4, 1, 3, 4, 4, 4, 4, // 35
        30,30,30,30,30,30,30,30,30,30,30,30,30,4, 4, O, O, O, 4, 32,16,16,16,16,20,16,O, 17,O, 16,16,20,20,29,29,29,20,20,20,29,29,29,20,34,19,25,25,25,19,34,4, 3, O, 5, O, 3, 3, 1, 2, 2, 4, 4, 4, 4, // 36
        30,30,30,30,30,30,30,30,30,30,30,30,30,32,32,4, 3, 3, 4, 32,16,16,16,16,31,16,O, 17,O, 16,20,29,29,29,29,29,29,29,29,29,29,29,20,34,19,25,25,25,19,34,4, 4, 3, O, 2, 3, 3, 1, O, O, 3, 4, 4, 4, // 37
        30,40,40,40,40,40,40,40,40,40,42,43,41,O, O, O, O, 36,35,32,16,16,16,16,32,16,O, 17,O, 16,20,29,29,29,29,29,29,29,29,29,29,29,20,34,19,25,25,25,19,34,4, 4, 4, 4, 3, 3, 4, 4, O, 5, O, 3, 6, 6, // 38
        30,40,41,40,40,40,40,40,40,40,42,43,41,O, O, O, O, O, 16,BB,16,16,16,16,31,16,O, 17,O, 16,20,20,20,34,34,34,20,20,20,20,20,20,20,20,19,19,19,19,19,20,4, 4, 4, 4, 4, 4, 4, 4, O, 5, 5, O, O, 7, // 39
        30,40,40,40,40,40,40,40,40,40,40,40,41,O, O, O, O, 36,35,32,16,16,16,16,20,16,O, 17,O, 16,34,20,20,20,20,20,20,34,34,34,20,20,20,20,20,20,20,20,20,20,4, 4, 4, 4, 4, 4, 4, 2, O, 5, O, 3, 6, 6, // 40
        30,40,40,40,40,40,40,40,40,40,40,40,30,32,32,38,38,38,32,32,16,16,16,16,20,16,O, 17,O, 16,16,16,16,16,16,16,16,16,16,16,16,16,16,16,16,16,16,20,4, 4, 4, 4, 4, 4, 4, 4, 2, O, O, O, O, 4, 4, 4, // 41
        30,40,40,40,40,40,40,40,40,40,40,40,30,O, O, O, O, O, O, 32,16,16,34,AA,20,16,O, 17,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 16,34,20,7, 7, 7, 7, 7, 4, 4, 1, 5, O, O, 3, 4, 4, 4, // 42
        30,40,40,40,40,40,40,40,40,40,40,40,30,O, O, O, O, O, O, 32,16,16,34,16,16,16,O, 17,17,17,17,17,17,17,17,17,17,17,17,17,17,17,17,17,17,O, 16,16,31,7, 7, O, O, 7, 7, 4, 1, 5, O, 2, 3, 4, 4, 4, // 43
        30,40,40,40,42,43,41,43,42,40,40,40,41,O, O, O, O, O, O, 32,32,32,34,34,20,16,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 17,O, 16,34,20,7, O, O, O, O, 7, 4, 3, 5, 5, O, 2, 4, 4, 4, // 44
        30,30,30,30,30,30,41,30,30,30,30,30,30,O, 30,O, 30,O, 30,32,32,32,20,20,20,16,16,16,16,16,16,16,16,16,16,16,16,16,16,16,16,16,16,O, 17,O, 16,20,7, 7, O, O, O, O, 7, 4, 4, O, 5, 5, O, 4, 4, 4, // 45
        44,44,44,44,44,34,46,34,44,44,44,44,44,32,32,32,32,32,32,32,32,32,20,20,20,20,20,31,32,31,20,20,31,32,31,20,20,31,16,31,20,20,16,O, 17,O, 16,20,7, O, O, O, O, 7, 7, 4, 4, 3, O, O, O, O, 4, 4, // 46
        44,46,46,46,39,O, O, O, 39,46,46,46,44,44,44,44,44,44,44,20,20,20,20,30,32,32,16,32,32,30,20,20,20,20,20,20,20,32,32,32,20,20,16,O, 17,O, 16,20,7, O, O, O, O, 7, 4, 4, 1, 3, 3, O, O, O, 3, 4, // 47
        44,46,46,46,39,O, O, O, 39,46,46,46,44,CC,CC,CC,CC,CC,44,20,20,16,16,16,16,16,16,16,16,16,16,16,20,20,20,20,20,20,20,20,20,20,16,O, 17,O, 16,20,7, 7, O, O, 7, 7, 4, 1, 1, 3, 3, 4, O, 5, O, 4, // 48
        44,46,46,46,39,O, O, O, 39,46,46,46,44,CC,DD,DD,DD,CC,44,20,31,16,16,16,16,16,16,16,16,16,16,16,31,16,16,16,16,16,16,16,16,20,16,O, 17,O, 16,20,7, 7, 7, O, 7, 6, 4, 1, 3, 3, 3, 4, O, 5, O, 4, // 49
        44,46,46,46,39,O, O, O, 39,46,46,46,44,CC,DD,DD,DD,CC,44,20,31,16,16,16,16,16,16,16,16,16,16,16,31,16,16,16,16,16,16,16,16,AA,16,O, 17,O, 16,20,4, 4, 6, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, O, 3, 4, // 50
        44,44,EE,44,44,O, O, O, 44,44,EE,44,44,CC,DD,DD,DD,CC,44,20,20,16,16,16,16,16,16,16,16,16,16,16,20,20,20,20,16,16,20,20,20,20,3, 3, 3, 3, 4, 4, 4, 4, 6, 6, 6, 4, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, // 51
        44,O, O, O, O, O, O, O, O, O, O, O, 44,CC,CC,CC,CC,CC,44,20,20,16,16,16,20,20,20,20,20,16,16,16,20,20,20,20,16,16,20,16,16,AA,16,O, 17,3, 3, 4, 4, 4, 4, 4, 4, 3, 3, O, O, 3, 1, 3, 4, 4, 4, 4, // 52
        44,44,44,44,34,O, O, O, 34,44,44,44,44,36,36,36,36,36,44,35,35,16,16,16,35,35,37,35,35,16,16,16,35,35,37,20,16,16,20,16,16,20,16,O, 17,O, 16,20,4, 4, 4, 4, 3, 2, O, O, O, O, O, 1, 3, 4, 4, 4, // 53
        4, 4, 4, 4, 44,O, O, O, 44,36,46,46,46,46,46,46,46,46,44,36,36,O, O, O, 36,36,37,36,36,O, O, O, 36,36,37,20,16,16,20,16,16,20,16,O, 17,O, 16,20,4, 4, 3, 48,2, O, O, O, 5, 5, O, O, 1, 4, 4, 4, // 54
        4, 4, 4, 4, 44,O, O, O, 44,36,46,O, O, O, O, O, O, O, 44,O, O, O, O, O, O, O, 37,46,O, O, O, O, O, 46,37,20,16,16,34,16,16,20,16,O, 17,O, 16,20,5, 5, O, O, O, O, 5, 5, 5, 5, 5, O, 1, 1, 4, 4, // 55
        4, 4, 4, 44,44,O, O, O, 44,36,46,45,45,O, 45,45,O, O, 44,O, O, O, O, O, O, O, 37,46,O, O, O, O, O, 46,37,20,16,16,16,16,16,20,16,O, 17,O, 3, 4, 5, 5, 5, 5, 5, 5, 5, O, O, O, O, O, O, 1, 4, 4, // 56
        4, 4, 4, O, O, O, O, O, O, O, 46,45,45,O, 45,45,O, O, O, O, O, O, O, O, O, 30,37,46,O, 36,36,36,O, 46,37,20,16,16,16,16,16,20,16,O, 17,O, O, 3, O, 5, 5, 5, O, O, O, 2, 3, 48,1, O, 5, 5, 5, 6, // 57
        4, 4, 4, O, O, O, O, O, O, O, 46,O, O, O, O, O, O, O, O, O, O, O, O, O, O, 46,37,46,O, 36,36,36,O, 46,37,20,16,16,16,16,16,20,16,O, 17,O, O, 3, 2, O, O, O, O, 2, 2, 4, 4, 4, 4, 1, O, 5, 5, 6, // 58
        4, 4, 4, 4, 2, O, O, O, O, O, 46,45,45,O, 45,45,O, O, O, O, O, O, O, O, O, 46,37,46,O, 36,36,36,O, 46,37,20,31,31,31,31,31,20,16,O, 17,O, 3, 4, 2, 2, O, O, 2, 2, 4, 4, 4, 4, 4, 3, 1, O, O, 4, // 59
        4, 4, 4, 4, 4, 4, 4, 3, O, O, 46,45,45,O, 45,45,O, O, O, O, 30,46,46,46,46,46,37,46,O, O, O, O, O, 46,37,20,20,20,20,20,20,20,16,O, 17,O, 16,20,2, 2, 2, 2, 2, 3, 4, 4, 4, 4, 4, 4, 3, 3, 4, 4, // 60
        4, 4, 4, 4, 4, 4, 4, 4, 4, 3, 46,O, O, O, O, O, O, O, 37,37,37,37,37,37,37,37,37,30,O, O, O, O, O, 30,37,20,20,20,20,20,20,20,16,O, 17,22,16,20,2, 2, 2, 3, 4, 3, 3, 4, 3, 3, 3, 4, 4, 4, 4, 4, // 61
        4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 2, 2, O, O, 3, 3, 37,4, 4, 4, 4, 4, 4, 4, 32,32,32,32,CC,32,32,32,32,20,20,20,20,20,20,20,4, 3, 17,2, 3, 20,3, 3, 4, 4, 4, 4, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, // 62
        4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 32,32,32,32,32,32,32,32,32,20,20,20,20,20,20,20,20,4, 4, 4, 4, 20,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, // 63
    ],
    tile_dictionary: [
        TD::new(14, 10, 0, 0), TD::new(16,  8, 0, 0), TD::new(14,  8, 0, 0), TD::new(16,  6, 0, 0), // 0
        TD::new(14,  0, 0, 0), TD::new(13, 12, 0, 0), TD::new(21,  0, 1, 1), TD::new(14,  0, 2, 2), // 4
        TD::new(14, 24, 0, 0), TD::new(16, 22, 0, 0), TD::new(18, 20, 0, 0), TD::new(20, 18, 0, 0), // 8
        TD::new(22, 16, 0, 0), TD::new(24, 14, 0, 0), TD::new(24,  4, 0, 0), TD::new(31,  7, 0, 0), // 12
        TD::new(17,  5, 1, 1), TD::new(15,  9, 3, 0), TD::new(23,  1, 3, 0), TD::new(17, 10, 1, 1), // 16
        TD::new(21,  0, 1, 4), TD::new(22,  5, 5, 1), TD::new(14, 31, 3, 0), TD::new(26,  0, 1, 7), // 20
        TD::new(18,  9, 1, 1), TD::new(19,  8, 1, 1), TD::new(20,  7, 1, 1), TD::new(21,  6, 1, 1), // 24
        TD::new(22,  5, 1, 1), TD::new(23,  4, 1, 1), TD::new(21,  0, 3, 3), TD::new(21,  0, 5, 5), // 28
        TD::new(21,  0, 6, 6), TD::new(14,  4, 0, 0), TD::new(21,  0, 4, 4), TD::new(16,  6, 1, 1), // 32
        TD::new(15,  7, 1, 1), TD::new(21,  0, 5, 1), TD::new(17,  2, 6, 6), TD::new(16,  3, 1, 1), // 36
        TD::new( 9, 15, 1, 3), TD::new(14,  4, 3, 3), TD::new(11, 13, 3, 3), TD::new(13, 11, 3, 3), // 40
        TD::new(18,  0, 1, 1), TD::new(15,  9, 5, 1), TD::new(14,  9, 0, 3), TD::new(15,  8, 3, 3), // 44
        TD::new(16,  6, 1, 0), TD::new(14, 15, 0, 0), TD::new(14, 15, 0, 0), TD::new(14, 15, 0, 0), // 48
        TD::new(14, 15, 0, 0), TD::new(14, 15, 0, 0), TD::new(14, 15, 0, 0), TD::new(14, 15, 0, 0), // 52
        TD::new(14, 15, 0, 0), TD::new(14, 15, 0, 0), TD::new(14, 15, 0, 0), TD::new(14, 15, 0, 0), // 56
        TD::new(14, 15, 0, 0), TD::new(14, 15, 0, 0), TD::new(14, 15, 0, 0), TD::new(14, 15, 0, 0), // 60
    ],
    texture_indices: [9, 3, 6, 11, 12, 2, 5],
    door_texture_index: 13,
    floor_color: 18,
    ceiling_color: 26,
    player_start: PlayerStart::new(44, 61, 240),
    background_image: 0,
    elements: pad_elements([
        LevelElement::new(E::Bullets, 55, 2), LevelElement::new(E::Rockets, 12, 2),
        LevelElement::new(E::Ruin, 11, 2), LevelElement::new(E::Spider, 25, 3),
        LevelElement::new(E::Ruin, 11, 3), LevelElement::new(E::Ruin, 10, 4),
        LevelElement::new(E::Warrior, 51, 5), LevelElement::new(E::Barrel, 32, 5),
        LevelElement::new(E::Lamp, 31, 5), LevelElement::new(E::Turret, 61, 6),
        LevelElement::new(E::Health, 26, 7), LevelElement::new(E::Barrel, 55, 10),
        LevelElement::new(E::Ruin, 29, 10), LevelElement::new(E::Bullets, 23, 11),
        LevelElement::new(E::Bullets, 22, 11), LevelElement::new(E::Warrior, 13, 11),
        LevelElement::new(E::Bullets, 54, 12), LevelElement::new(E::Turret, 43, 13),
        LevelElement::new(E::Lamp, 50, 14), LevelElement::new(E::Ruin, 34, 14),
        LevelElement::new(E::Ruin, 33, 14), LevelElement::new(E::Turret, 50, 15),
        LevelElement::new(E::Ruin, 35, 15), LevelElement::new(E::Warrior, 10, 15),
        LevelElement::new(E::Warrior, 11, 16), LevelElement::new(E::Spider, 55, 18),
        LevelElement::new(E::Teleport, 50, 20), LevelElement::new(E::Lamp, 31, 20),
        LevelElement::new(E::Warrior, 5, 21), LevelElement::new(E::Teleport, 51, 23),
        LevelElement::new(E::Lamp, 25, 23), LevelElement::new(E::Tree, 36, 24),
        LevelElement::new(E::Warrior, 32, 24), LevelElement::new(E::Spider, 34, 25),
        LevelElement::new(E::Turret, 25, 25), LevelElement::new(E::Bullets, 18, 25),
        LevelElement::new(E::Barrel, 55, 26), LevelElement::new(E::Barrel, 54, 26),
        LevelElement::new(E::Plasma, 48, 26), LevelElement::new(E::Lamp, 39, 26),
        LevelElement::new(E::Health, 37, 26), LevelElement::new(E::Warrior, 32, 26),
        LevelElement::new(E::Warrior, 17, 26), LevelElement::new(E::Plasma, 48, 27),
        LevelElement::new(E::Tree, 36, 27), LevelElement::new(E::Warrior, 20, 27),
        LevelElement::new(E::Warrior, 19, 27), LevelElement::new(E::Warrior, 9, 27),
        LevelElement::new(E::Rockets, 48, 28), LevelElement::new(E::Warrior, 17, 28),
        LevelElement::new(E::Terminal, 18, 29), LevelElement::new(E::Lamp, 31, 31),
        LevelElement::new(E::Health, 50, 32), LevelElement::new(E::Barrel, 16, 32),
        LevelElement::new(E::Barrel, 15, 32), LevelElement::new(E::Health, 55, 33),
        LevelElement::new(E::Barrel, 25, 33), LevelElement::new(E::Card1, 3, 33),
        LevelElement::new(E::Exploder, 56, 36), LevelElement::new(E::Spider, 44, 36),
        LevelElement::new(E::Lamp, 30, 36), LevelElement::new(E::Card0, 46, 37),
        LevelElement::new(E::Ruin, 36, 37), LevelElement::new(E::Ruin, 35, 38),
        LevelElement::new(E::Health, 31, 38), LevelElement::new(E::Ruin, 18, 39),
        LevelElement::new(E::Turret, 2, 39), LevelElement::new(E::Ruin, 18, 40),
        LevelElement::new(E::Barrel, 33, 41), LevelElement::new(E::Exploder, 23, 41),
        LevelElement::new(E::Warrior, 37, 42), LevelElement::new(E::Lock1, 23, 42),
        LevelElement::new(E::Blocker, 9, 42), LevelElement::new(E::Blocker, 8, 42),
        LevelElement::new(E::Blocker, 7, 42), LevelElement::new(E::Blocker, 6, 42),
        LevelElement::new(E::Blocker, 5, 42), LevelElement::new(E::Blocker, 4, 42),
        LevelElement::new(E::Blocker, 3, 42), LevelElement::new(E::Terminal, 47, 43),
        LevelElement::new(E::Spider, 35, 43), LevelElement::new(E::Bullets, 21, 43),
        LevelElement::new(E::Health, 20, 43), LevelElement::new(E::Rockets, 16, 43),
        LevelElement::new(E::Rockets, 52, 44), LevelElement::new(E::Exploder, 51, 44),
        LevelElement::new(E::Exploder, 37, 44), LevelElement::new(E::Lamp, 38, 46),
        LevelElement::new(E::Lamp, 26, 47), LevelElement::new(E::Health, 61, 49),
        LevelElement::new(E::Exploder, 57, 49), LevelElement::new(E::Turret, 10, 49),
        LevelElement::new(E::Turret, 2, 49), LevelElement::new(E::Barrel, 1, 49),
        LevelElement::new(E::Ruin, 44, 50), LevelElement::new(E::Warrior, 35, 50),
        LevelElement::new(E::Health, 33, 50), LevelElement::new(E::Plasma, 15, 50),
        LevelElement::new(E::Ruin, 45, 51), LevelElement::new(E::Ruin, 43, 51),
        LevelElement::new(E::Ruin, 42, 51), LevelElement::new(E::Lock0, 41, 52),
        LevelElement::new(E::Ruin, 9, 52), LevelElement::new(E::Lamp, 58, 55),
        LevelElement::new(E::Bullets, 53, 56), LevelElement::new(E::Bullets, 52, 56),
        LevelElement::new(E::Turret, 30, 56), LevelElement::new(E::Exploder, 22, 57),
        LevelElement::new(E::Ruin, 46, 60), LevelElement::new(E::Finish, 30, 62),
    ]),
};
