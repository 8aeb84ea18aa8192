use crate::level::{pad_elements, ElementType as E, Level, LevelElement, PlayerStart};
use crate::tile::TileDefinition as TD;
use crate::tile::{PROPERTY_DOOR as DOOR, PROPERTY_ELEVATOR as ELEVATOR, PROPERTY_SQUEEZER as SQUEEZER};

const O: u8 = 0;
const AA: u8 = 21 | DOOR;
const BB: u8 = 23 | ELEVATOR;
const CC: u8 = 3 | SQUEEZER;
const DD: u8 = 31 | ELEVATOR;
const EE: u8 = 1 | DOOR;
const FF: u8 = 22 | DOOR;
const GG: u8 = 50 | ELEVATOR;
const HH: u8 = 49 | ELEVATOR;
const II: u8 = 48 | ELEVATOR;

#[rustfmt::skip]
pub static LEVEL: Level = Level {
    map: [
        // 0  1  2  3  4  5  6  7  8  9  10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63
        4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 6, 7, 7, 7, 7, 6, 7, 7, 7, 7, 6, 6, 6, 6, 6, 7, 7, 6, 6, 6, 9, 9, 9, 9, 6, 6, 6, 6, 6, 6, 6, 6, 6, 12,6, 6, 6, 12,6, 6, 6, 12,6, 6, 6, 12,6, 6, 6, 12,6, 6, // 0
        4, 4, 4, 4, 5, 5, 5, 4, 4, 4, 4, 4, 6, 8, 8, 8, 8, 8, 8, 8, 8, 8, 21,8, 8, 8, 8, 8, 8, 8, 8, 7, 9, 9, 9, 9, 6, 5, 5, 5, 5, 5, 21,6, 5, 5, 5, 57,57,5, 5, 5, 13,16,16,16,16,16,16,16,16,16,16,6, // 1
        4, 4, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 6, 8, 8, 8, 8, 8, 8, 8, 8, 8, 21,8, 8, 8, 8, 8, 8, 8, 8, 7, 9, 9, 9, 9, 6, 28,28,28,5, 5, 21,4, 5, 5, 5, 5, 5, 5, 5, 5, 16,16,16,16,16,16,16,16,16,16,16,15, // 2
        4, 4, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 6, 54,54,54,54,4, 8, 8, 8, 8, 21,8, 8, 4, 54,54,54,54,54,6, 9, 9, 9, 9, 6, 21,21,28,5, 5, 21,21,57,5, 5, 5, 5, 5, 5, 5, 16,16,16,16,16,16,16,16,16,16,16,6, // 3
        4, 5, 5, 5, 9, 9, 9, 5, 5, 5, 4, 4, 4, 8, 8, 8, 8, 54,8, 8, 8, 8, 21,8, 8, 54,8, 8, 8, 8, 8, 6, 6, 6, 6, 6, 6, 21,21,28,5, 5, 21,39,57,5, 5, 5, 5, 5, 5, 5, 13,16,16,16,16,16,16,16,16,16,16,6, // 4
        4, 5, 5, 5, 9, 9, 9, 5, 5, 5, 8, 8, AA,8, 8, 8, 8, 54,8, 8, 8, 8, 21,8, 8, 54,8, 8, 8, 8, 8, 6, 16,16,16,16,16,21,21,28,5, 5, 21,13,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 6, // 5
        4, 5, 5, 5, 9, 9, 9, 5, 5, 5, 4, 4, 4, 8, 8, 8, 8, 54,8, 8, 8, 8, 21,8, 8, 54,8, 8, 8, 8, 8, 6, 16,16,16,16,16,63,21,28,5, 5, 21,39,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 57,6, // 6
        9, 4, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 6, 8, 8, 8, 8, 4, 21,21,21,21,21,AA,21,4, 8, 8, 8, 8, 8, 6, 16,16,16,16,16,63,21,28,5, 5, 21,21,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 57,6, // 7
        9, 4, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 6, 8, 8, 21,21,4, 54,54,54,54,54,54,54,4, 21,21,21,BB,BB,27,16,16,16,16,16,21,21,28,5, 5, 21,39,5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, // 8
        10,10,4, 4, 5, 5, 5, 4, 4, 4, 4, 4, 6, 8, 8, 8, 8, 54,8, 8, 8, 8, 8, 8, 8, 54,8, 8, 21,BB,BB,27,16,16,17,17,17,21,21,28,5, 5, 21,13,5, 5, 5, 5, 5, 5, 4, 5, 5, 5, 5, 53,53,53,53,5, 5, 5, 56,6, // 9
        10,10,10,9, 4, 3, 4, 4, 4, 4, 4, 4, 6, 8, 8, 8, 8, 54,8, 8, 8, 8, 8, 8, 8, 54,8, 8, 21,BB,BB,27,16,16,18,18,18,21,21,28,5, 5, 21,21,5, 5, 5, 5, 5, 5, 20,5, 5, 5, 5, 53,53,53,53,5, 5, 5, 57,6, // 10
        10,10,10,9, 9, 9, 9, 1, 6, 6, 15,6, 6, 6, 6, 6, 6, 6, 7, 7, 7, 7, 7, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 19,19,19,21,21,28,5, 5, 21,21,59,5, 5, 5, 5, 5, 21,5, 5, 5, 5, 53,53,53,53,1, 13,13,13,1, // 11
        10,10,10,9, 9, 9, 9, 1, 12,16,16,16,16,16,16,12,5, 56,28,28,28,28,28,60,58,58,5, 5, 5, 5, 5, 5, 21,21,20,20,20,21,21,28,5, 5, 21,21,5, 5, 59,5, 5, 5, 21,3, 3, 3, 3, 3, 3, 3, 3, 1, O, O, O, 1, // 12
        9, 11,9, 9, 9, 9, 11,1, 6, 16,16,16,16,16,16,16,5, 25,25,25,25,25,25,25,25,25,25,25,25,25,25,25,21,28,28,28,28,28,28,28,28,28,4, 21,21,21,21,20,20,20,21,1, 1, 1, 1, 2, 4, 1, 1, 4, 3, 3, 4, 1, // 13
        9, 11,9, 9, 9, 9, 11,1, 6, 16,16,16,16,16,16,16,5, 25,5, 5, 5, 5, 5, 5, 56,5, 5, 5, 5, 5, 5, 5, 20,28,5, 5, 5, 5, 5, 5, 5, 5, 21,21,21,21,O, CC,CC,CC,O, 21,1, 4, O, O, O, O, O, O, 14,14,O, 1, // 14
        9, 11,11,11,9, 9, 9, 1, 12,16,16,16,16,16,16,12,5, 25,5, 5, 5, 5, 5, 59,5, 5, 5, 5, 5, 5, 5, 5, 20,28,5, 5, 5, 5, 5, 5, 5, 5, 21,21,21,21,21,28,28,28,21,21,1, 3, O, O, O, O, O, O, 14,14,O, 1, // 15
        10,10,11,11,9, 9, 9, 1, 6, 5, 5, 5, 5, 5, 5, 5, 5, 25,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 20,28,5, 5, 5, 5, 5, 5, 5, 60,29,5, 5, 21,21,53,53,53,21,21,1, 3, O, O, O, O, O, O, 14,14,O, 1, // 16
        10,10,9, 9, 9, 9, 9, 1, 6, 5, 5, 5, 5, 5, 5, 5, 5, 25,25,25,25,25,25,25,25,25,25,25,25,25,25,25,21,28,5, 5, 5, 5, 5, 5, 5, 60,29,5, 5, 53,53,53,53,53,53,53,1, 3, O, O, O, O, O, O, 14,14,O, 1, // 17
        10,10,9, 9, 9, 9, 9, 1, 6, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 58,58,5, 5, 5, 5, 21,4, 5, 5, 5, 5, 5, 5, 5, 5, 29,5, 5, 53,53,53,53,53,53,53,1, 3, O, O, O, O, O, O, 14,14,O, 1, // 18
        10,9, 9, 9, 9, 9, 9, 4, 21,21,20,20,21,6, 6, 58,5, 5, 5, 5, 5, 5, 5, 5, 59,5, 6, 6, 21,21,21,21,21,24,24,24,24,24,24,24,24,5, 21,5, 5, 53,53,53,53,53,53,53,1, 3, O, O, O, O, 13,O, 14,14,O, 1, // 19
        10,10,10,9, 9, 9, 9, 8, 8, 8, 20,20,8, 6, 6, 58,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 6, 6, 31,30,30,31,31,31,31,31,31,31,30,31,31,6, 6, 5, 5, 53,53,53,53,53,53,53,1, 3, O, O, O, O, 1, O, 14,14,O, 1, // 20
        9, 10,10,9, 9, 9, 9, 8, 8, 8, 20,20,8, 6, 6, 5, 5, 59,5, 5, 5, 5, 5, 5, 5, 56,6, 6, 31,31,31,31,31,31,31,31,31,31,30,31,31,6, DD,8, 8, 53,53,53,53,53,53,53,1, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 1, // 21
        11,11,9, 9, 9, 9, 9, 4, 8, 8, 20,20,8, 6, 6, 58,58,5, 5, 5, 5, 5, 5, 56,5, 59,6, 6, 31,30,30,30,31,31,31,31,31,31,30,31,31,6, 31,8, 8, 53,53,53,53,53,53,53,1, O, O, O, O, 3, 1, O, 14,14,O, 1, // 22
        11,11,9, 9, 9, 9, 9, 21,8, 8, 20,20,8, 8, 8, 58,58,5, 5, 5, 5, 5, 5, 5, 5, 57,6, 6, 31,30,31,30,30,31,31,31,31,31,30,31,31,31,31,8, 8, 53,53,53,53,53,53,53,1, O, O, O, O, 3, 1, O, 14,14,O, 1, // 23
        9, 10,10,10,9, 9, 9, 21,8, 8, 20,20,8, 8, 8, 62,58,5, 5, 5, 5, 57,61,5, 61,57,6, 6, 31,30,31,31,30,30,30,30,30,30,30,31,31,6, 6, 6, 6, 1, 1, 1, 1, EE,1, 1, 1, O, O, O, O, 3, 1, O, 14,14,O, 1, // 24
        9, 10,10,10,9, 9, 9, 21,8, 5, 5, 5, 8, 6, 6, 57,61,56,5, 5, 5, 57,5, 5, 56,58,6, 6, 31,30,31,31,31,31,31,31,31,31,31,31,31,6, 58,O, O, O, 1, O, O, O, O, O, 61,O, O, O, O, 3, 1, 1, 19,19,1, 1, // 25
        9, 10,10,10,9, 9, 9, 21,8, 5, 5, 5, 8, 6, 12,57,5, 5, 5, 5, 5, 5, 56,5, 5, 5, 12,6, 31,30,31,31,31,31,31,31,31,31,31,31,31,6, 58,O, O, O, 2, O, O, O, O, O, EE,O, O, O, O, 3, 1, 1, 18,18,1, 1, // 26
        9, 11,11,9, 9, 9, 9, 20,5, 5, 5, 5, 8, 6, 6, 61,5, 5, 5, 5, 5, 5, 5, 59,58,5, 6, 6, 31,31,31,31,31,31,31,31,31,31,31,31,31,6, 1, 1, 1, 1, 1, O, O, O, O, 3, 61,3, 3, 3, 3, 4, 1, 1, 17,17,1, 1, // 27
        9, 11,11,9, 9, 9, 9, 21,8, 8, 8, 8, 8, 21,6, 58,5, 5, 5, 5, 5, 5, 5, 56,5, 5, 6, 6, 31,30,31,31,31,31,31,31,31,31,31,31,31,6, 58,O, O, O, 1, O, O, O, O, 3, 1, 1, 1, 1, 1, 1, 1, 16,16,16,16,1, // 28
        1, 1, 1, 1, 1, 1, 20,20,20,20,20,20,20,21,6, 58,5, 5, 5, 5, 5, 5, 5, 58,5, 56,6, 6, 31,30,31,30,30,30,30,30,30,30,31,31,31,6, 58,O, O, O, 2, O, O, O, O, 3, EE,5, 5, 5, 5, 5, 1, 16,16,16,16,1, // 29
        1, 58,58,57,57,57,21,21,21,21,20,20,20,21,6, 56,5, 5, 5, 5, 5, 5, 5, 57,5, 60,6, 6, 31,30,30,30,31,31,31,31,31,30,30,31,31,6, 58,O, O, O, 1, O, O, O, O, 3, 1, O, O, O, 5, 5, 1, 16,16,16,16,1, // 30
        1, 5, 5, 5, 5, 5, 5, 5, 1, 21,20,20,20,21,6, 5, 5, 5, 5, 5, 5, 5, 5, 5, 59,5, 6, 6, 31,31,31,31,31,31,31,31,31,31,30,31,31,6, 58,O, O, 1, 1, O, O, O, O, 3, 1, O, O, O, 5, 5, 1, 16,16,16,16,1, // 31
        1, 5, 58,58,5, 1, 5, 57,57,21,20,20,20,21,21,21,21,21,20,20,20,20,21,4, 7, 7, 6, 6, 31,31,31,31,31,31,31,31,31,31,30,31,31,6, 58,O, O, O, EE,O, O, O, O, 3, EE,O, O, O, 5, 5, 1, 16,16,16,16,1, // 32
        1, 5, 1, 5, 5, 5, 5, 5, 1, 57,5, 5, 5, 5, 5, 12,13,13,53,53,53,53,21,21,13,13,6, 6, 6, 6, 6, 6, 31,31,30,30,30,30,30,31,31,6, 58,O, O, O, 1, O, O, O, O, 3, 1, 5, 5, 5, 5, 5, 1, 16,16,16,16,1, // 33
        1, 58,5, 5, 1, 1, 5, 5, 5, 57,5, 5, 5, 5, 5, 13,13,13,53,53,53,53,53,53,13,13,13,13,53,53,53,53,24,24,24,24,6, 6, 6, 6, 6, 6, 1, 1, 1, 1, 1, O, O, O, O, 3, 1, 1, 1, 1, 16,16,1, 16,16,16,16,15, // 34
        1, 5, 5, 1, 5, 5, 5, 57,5, 57,5, 5, 5, 5, 5, 13,13,13,53,53,53,53,53,53,13,5, 5, 13,53,53,53,53,53,53,53,53,6, O, O, O, O, O, O, O, O, O, 2, O, O, O, O, 3, 2, O, O, 1, 16,16,1, 16,16,16,16,21, // 35
        1, 5, 1, 1, 5, 57,1, 5, 1, 1, 1, 5, 5, 5, 5, 12,13,13,53,53,53,53,53,5, 5, 5, 5, 5, 5, 53,53,53,13,13,13,13,13,O, O, O, O, O, O, O, O, O, 1, O, O, O, O, 3, 1, O, O, 21,16,16,16,16,21,27,27,21, // 36
        1, 19,18,1, 5, 1, 5, 5, 5, 5, 5, 5, 5, 5, 5, 53,13,13,53,53,53,53,13,5, 5, 5, 5, 5, 5, 13,13,13,13,13,4, 61,1, 2, 1, 1, 2, 1, 1, 2, 1, 61,4, O, O, O, O, 3, 1, O, O, 21,16,16,16,16,21,BB,BB,21, // 37
        1, 57,17,1, 5, 1, 5, 57,57,5, 58,5, 5, 5, 5, 53,53,13,13,13,13,13,5, 5, 5, 5, 5, 5, 5, 5, 13,13,13,1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, O, O, O, O, 3, 4, O, O, 21,21,21,21,21,21,8, 8, 21, // 38
        1, 16,16,1, 5, 5, 5, 58,5, 5, 58,5, 5, 5, 5, 12,53,53,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 59,57,3, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 3, 1, O, O, 1, O, O, 21,7, 7, 54,54,4, // 39
        1, 16,1, 1, 1, 1, 1, 5, 5, 58,62,5, 5, 5, 5, 53,53,53,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, EE,3, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 3, 1, 1, 1, 1, O, O, 21,7, 8, 8, 54,21, // 40
        1, 16,1, 16,16,16,16,1, 5, 5, 62,5, 5, 5, 5, 53,53,53,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, EE,3, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 3, 2, O, O, O, O, O, 21,7, 8, 8, 54,21, // 41
        1, 16,16,16,16,16,1, 1, 58,5, 62,59,5, 5, 5, 12,53,53,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 59,57,3, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 3, 1, O, O, O, O, O, 21,7, 8, 8, 54,21, // 42
        1, 58,5, 1, 5, 57,5, 5, 5, 5, 1, 5, 5, 5, 5, 53,53,13,13,13,13,13,5, 5, 5, 5, 5, 5, 5, 5, 13,13,13,1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, O, O, 21,21,21,21,7, 8, 8, 54,21, // 43
        1, 5, 5, 1, 5, 5, 5, 1, 1, 5, 1, 5, 5, 5, 5, 53,13,13,13,13,13,13,13,5, 5, 5, 5, 5, 5, 13,13,1, 1, 1, 4, 1, 1, 2, 1, 1, 2, 1, 1, 57,EE,57,1, 1, 1, EE,1, 4, 1, O, O, 1, 7, 7, 7, 7, 54,54,54,4, // 44
        1, 5, 5, 5, 57,1, 1, 5, 58,5, 1, 5, 56,5, 5, 12,13,13,13,13,13,13,13,13,5, 5, 5, 5, 13,13,13,1, O, O, O, O, O, O, 1, O, O, 22,22,22,FF,22,22,22,1, O, 1, 1, 1, O, O, 1, 8, 8, 8, 8, 8, 8, 54,1, // 45
        1, 5, 57,5, 5, 5, 1, 5, 5, 5, 58,21,21,21,21,21,21,21,21,21,13,13,13,13,13,5, 5, 13,13,53,53,1, O, O, O, O, O, O, 1, O, O, 22,O, O, O, O, O, 22,1, O, O, O, 1, O, O, 1, 8, 8, 8, 8, 8, 8, 54,1, // 46
        1, 58,57,1, 1, 5, 58,58,1, 1, 58,21,5, 5, 5, 5, 56,5, 5, 21,13,13,13,13,13,5, 5, 13,13,53,53,EE,O, O, 55,1, 1, 1, 1, O, O, 22,O, O, O, O, O, 22,1, O, O, O, 1, O, O, 1, 8, 8, 8, 8, 8, 8, 54,1, // 47
        6, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 20,5, 5, 5, 5, 5, 5, 5, 20,53,53,53,EE,53,53,53,53,53,53,53,1, O, O, 55,1, O, O, O, O, O, 22,O, O, O, O, O, 22,4, 5, 5, 5, 4, 1, 1, 1, 1, 1, 1, 8, 8, 8, 54,1, // 48
        7, 57,5, 5, 5, 5, 5, 5, 5, 5, 5, 20,5, 5, 5, 5, 5, 5, 5, 20,53,53,53,1, 53,53,53,53,53,53,53,1, 1, 1, 1, 1, O, O, O, O, O, 22,O, O, O, O, O, 22,1, 8, 8, 8, 54,8, 8, 8, 8, 8, 8, 8, 8, 8, 54,1, // 49
        7, 57,5, 5, 5, 5, 5, 5, 5, 5, 5, 20,5, 5, 5, 5, 5, 5, 5, 21,13,13,13,13,13,13,13,13,53,53,53,1, 1, 22,22,22,22,22,22,22,22,4, O, O, O, O, O, 22,1, 8, 8, 8, 54,8, 8, 8, 8, 8, 8, 8, 8, 8, 54,1, // 50
        6, 5, 5, 57,58,5, 1, 1, 58,58,58,21,59,5, 5, 5, 5, 5, 5, 21,1, 1, 1, 1, 1, 1, 1, 1, 28,28,28,1, 4, GG,3, 3, 3, 3, 3, 3, 3, 3, O, O, O, O, O, 22,1, 8, 8, 8, 54,8, 8, 8, 8, 8, 8, 8, 8, 8, 54,1, // 51
        6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 5, 5, 5, 5, 5, 5, 5, 6, 28,28,28,28,28,28,28,1, 28,28,28,1, 1, 22,3, O, O, O, O, 3, 3, 3, O, O, O, O, O, 22,1, 8, 8, 8, 54,54,54,54,54,54,54,54,54,54,54,4, // 52
        11,11,11,11,9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 6, 28,28,28,28,28,28,28,1, 28,28,28,1, 1, 22,3, O, O, O, O, 3, 3, 3, O, O, O, O, O, 22,1, 8, 8, 1, 4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 53
        11,11,11,11,9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 6, 28,28,28,28,28,28,28,1, 28,28,28,1, 4, HH,3, 3, 3, 3, 3, 3, 3, 3, O, O, O, O, O, 22,1, 8, 8, 1, 22,22,22,22,22,22,22,22,22,22,22,22, // 54
        11,11,10,10,9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 6, 28,28,28,28,28,28,28,1, 28,28,28,1, 1, 22,22,22,22,22,22,22,22,4, 22,GG,HH,II,22,22,1, 8, 8, 1, 22,22,22,22,22,63,6, 6, 6, 6, 6, 6, // 55
        6, 10,10,10,9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 6, O, O, O, O, 1, 26,26,1, 28,28,28,1, 1, 1, 1, 1, 1, 1, 1, 63,8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 1, 22,5, 5, 56,5, 5, 5, 56,6, 6, 6, 6, // 56
        6, 10,10,10,9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 6, O, O, O, O, 26,28,28,28,28,28,28,5, 5, 5, 5, 5, 5, 5, 63,54,54,8, 54,54,54,54,54,54,54,54,54,1, 22,5, 5, 5, 5, 5, 5, 5, 5, 6, 6, 6, // 57
        6, 6, 6, 6, 6, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 6, O, O, O, O, 26,28,28,28,28,28,28,5, 5, 5, 5, 5, 5, 5, 1, 28,28,28,28,28,28,28,28,28,28,12,12,12,22,5, 5, 5, 5, 5, 5, 5, 5, 4, 6, 6, // 58
        6, 6, 6, 6, 6, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 6, O, O, O, O, 26,28,28,28,28,28,28,5, 5, 5, 5, 5, 5, 5, EE,28,28,28,28,28,28,28,28,28,28,28,FF,FF,FF,5, 5, 5, 5, 5, 5, 5, 5, 3, 31,13, // 59
        6, 6, 6, 6, 6, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 6, O, O, O, O, EE,28,28,28,28,28,28,5, 5, 5, 5, 5, 5, 5, 1, 28,28,28,28,28,28,28,28,28,28,12,12,12,22,5, 5, 5, 5, 5, 5, 5, 5, 4, 6, 6, // 60
        6, 6, 6, 6, 6, 11,11,11,11,9, 9, 9, 9, 9, 9, 9, 11,11,11,6, O, O, O, O, 26,28,28,28,28,28,28,5, 5, 5, 5, 5, 5, 5, 63,54,54,8, 54,54,54,54,54,54,54,54,54,1, 22,5, 5, 5, 5, 5, 5, 5, 5, 6, 6, 6, // 61
        9, 9, 9, 9, 9, 11,11,11,11,10,10,10,10,10,10,10,11,11,11,6, 1, 1, 1, 1, 1, 1, 2, 1, 1, 2, 1, 1, 1, 1, 1, 26,26,26,1, 63,8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 1, 22,5, 5, 5, 5, 5, 5, 59,6, 6, 6, 6, // 62
        9, 9, 9, 9, 9, 11,11,11,11,10,10,10,10,10,10,10,11,11,11,6, 28,28,28,28,22,22,22,22,22,22,22,22,22,22,6, 9, 9, 9, 6, 22,22,4, 22,II,GG,HH,22,22,22,22,22,22,22,22,22,22,22,63,6, 6, 6, 6, 6, 6, // 63
    ],
    tile_dictionary: [
        TD::new(14,  7, 0, 0), TD::new(18,  0, 0, 1), TD::new(18,  0, 2, 1), TD::new(14,  6, 0, 4), // 0
        TD::new(14,  0, 4, 4), TD::new(14, 20, 4, 4), TD::new(29,  0, 3, 4), TD::new(27,  2, 3, 4), // 4
        TD::new(25,  6, 4, 4), TD::new(14, 31, 0, 0), TD::new(26, 31, 1, 0), TD::new(30, 31, 0, 0), // 8
        TD::new(31,  0, 2, 2), TD::new(14,  0, 6, 6), TD::new(14,  8, 0, 0), TD::new(22,  0, 2, 3), // 12
        TD::new(18,  8, 6, 0), TD::new(17,  9, 6, 0), TD::new(16, 10, 6, 0), TD::new(15, 11, 6, 0), // 16
        TD::new(14,  7, 3, 3), TD::new(29,  0, 3, 3), TD::new(18,  0, 5, 2), TD::new(18,  7, 4, 0), // 20
        TD::new(14, 20, 3, 4), TD::new(13, 21, 0, 4), TD::new(16,  2, 0, 1), TD::new(18,  4, 6, 3), // 24
        TD::new(14, 17, 0, 4), TD::new(18,  8, 3, 3), TD::new(13, 21, 0, 0), TD::new( 4, 30, 0, 0), // 28
        TD::new(14,  8, 0, 0), TD::new(14,  8, 0, 0), TD::new(14,  8, 0, 0), TD::new(14,  8, 0, 0), // 32
        TD::new(14,  8, 0, 0), TD::new(14,  8, 0, 0), TD::new(14,  8, 0, 0), TD::new(30,  0, 3, 6), // 36
        TD::new(14,  8, 0, 0), TD::new(14,  8, 0, 0), TD::new(14,  8, 0, 0), TD::new(14,  8, 0, 0), // 40
        TD::new(14,  8, 0, 0), TD::new(14,  8, 0, 0), TD::new(14,  8, 0, 0), TD::new(14,  8, 0, 0), // 44
        TD::new(29, 17, 5, 5), TD::new(29, 18, 5, 5), TD::new(29, 19, 5, 5), TD::new(14,  8, 0, 0), // 48
        TD::new(14,  8, 0, 0), TD::new(14,  7, 0, 6), TD::new(25,  5, 4, 4), TD::new(16,  5, 1, 0), // 52
        TD::new(18, 16, 1, 0), TD::new(22, 12, 1, 0), TD::new(26,  8, 0, 0), TD::new(18, 16, 0, 0), // 56
        TD::new(17, 17, 1, 0), TD::new(21, 13, 0, 0), TD::new(25,  9, 1, 0), TD::new(14,  0, 5, 5), // 60
    ],
    texture_indices: [0, 4, 7, 5, 11, 15, 3],
    door_texture_index: 7,
    floor_color: 3,
    ceiling_color: 18,
    player_start: PlayerStart::new(62, 2, 240),
    background_image: 1,
    elements: pad_elements([
        LevelElement::new(E::Bullets, 28, 1), LevelElement::new(E::Bullets, 27, 1),
        LevelElement::new(E::Bullets, 56, 2), LevelElement::new(E::Health, 21, 4),
        LevelElement::new(E::Lock1, 12, 5), LevelElement::new(E::Card2, 10, 5),
        LevelElement::new(E::Spider, 5, 7), LevelElement::new(E::Turret, 45, 8),
        LevelElement::new(E::Barrel, 45, 9), LevelElement::new(E::Ruin, 40, 9),
        LevelElement::new(E::Warrior, 20, 9), LevelElement::new(E::Ruin, 41, 10),
        LevelElement::new(E::Ruin, 39, 10), LevelElement::new(E::Warrior, 20, 10),
        LevelElement::new(E::Ruin, 39, 11), LevelElement::new(E::Health, 61, 12),
        LevelElement::new(E::Bullets, 58, 12), LevelElement::new(E::Bullets, 57, 12),
        LevelElement::new(E::Health, 11, 12), LevelElement::new(E::Bullets, 41, 15),
        LevelElement::new(E::Turret, 23, 15), LevelElement::new(E::Spider, 36, 16),
        LevelElement::new(E::Turret, 18, 16), LevelElement::new(E::Bullets, 53, 17),
        LevelElement::new(E::Bullets, 53, 18), LevelElement::new(E::Terminal, 14, 18),
        LevelElement::new(E::Turret, 24, 19), LevelElement::new(E::Rockets, 7, 20),
        LevelElement::new(E::Bullets, 7, 21), LevelElement::new(E::Warrior, 61, 23),
        LevelElement::new(E::Warrior, 42, 23), LevelElement::new(E::Barrel, 23, 23),
        LevelElement::new(E::Turret, 61, 26), LevelElement::new(E::Warrior, 37, 26),
        LevelElement::new(E::Bullets, 16, 28), LevelElement::new(E::Ruin, 53, 29),
        LevelElement::new(E::Bullets, 16, 29), LevelElement::new(E::Health, 57, 31),
        LevelElement::new(E::Ruin, 44, 31), LevelElement::new(E::Bullets, 43, 32),
        LevelElement::new(E::Warrior, 43, 39), LevelElement::new(E::Turret, 41, 39),
        LevelElement::new(E::Spider, 26, 40), LevelElement::new(E::Turret, 41, 41),
        LevelElement::new(E::Tree, 32, 45), LevelElement::new(E::Bullets, 7, 45),
        LevelElement::new(E::Terminal, 37, 46), LevelElement::new(E::Turret, 43, 47),
        LevelElement::new(E::Lock1, 23, 48), LevelElement::new(E::Turret, 44, 50),
        LevelElement::new(E::Column, 29, 50), LevelElement::new(E::Health, 39, 52),
        LevelElement::new(E::Terminal, 34, 52), LevelElement::new(E::Bullets, 39, 53),
        LevelElement::new(E::Terminal, 34, 53), LevelElement::new(E::Teleport, 46, 54),
        LevelElement::new(E::Teleport, 35, 54), LevelElement::new(E::Turret, 9, 54),
        LevelElement::new(E::Turret, 25, 55), LevelElement::new(E::Barrel, 18, 55),
        LevelElement::new(E::Spider, 11, 55), LevelElement::new(E::Terminal, 57, 56),
        LevelElement::new(E::Column, 23, 56), LevelElement::new(E::Column, 20, 56),
        LevelElement::new(E::Health, 4, 56), LevelElement::new(E::Tree, 37, 57),
        LevelElement::new(E::Tree, 32, 57), LevelElement::new(E::Bullets, 20, 58),
        LevelElement::new(E::Card1, 8, 58), LevelElement::new(E::Finish, 62, 59),
        LevelElement::new(E::Turret, 58, 59), LevelElement::new(E::Lock2, 52, 59),
        LevelElement::new(E::Card0, 41, 59), LevelElement::new(E::Lock0, 38, 59),
        LevelElement::new(E::Warrior, 28, 59), LevelElement::new(E::Bullets, 20, 60),
        LevelElement::new(E::Tree, 37, 61), LevelElement::new(E::Tree, 32, 61),
        LevelElement::new(E::Terminal, 57, 62), LevelElement::new(E::Rockets, 49, 62),
    ]),
};
