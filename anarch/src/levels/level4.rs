use crate::level::{pad_elements, ElementType as E, Level, LevelElement, PlayerStart};
use crate::tile::TileDefinition as TD;
use crate::tile::{PROPERTY_DOOR as DOOR};

const O: u8 = 0;
const AA: u8 = 5 | DOOR;
const BB: u8 = 10 | DOOR;
const CC: u8 = 6 | DOOR;
const DD: u8 = 8 | DOOR;

#[rustfmt::skip]
pub static LEVEL: Level = Level {
    map: [
        // 0  1  2  3  4  5  6  7  8  9  10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63
        62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,60,60,62,62,62,62,62,62,62,62,62,O, O, O, O, O, 62,62,62,18,2, 2, 2, 18,18,18,18,18,18,18,18,18,18,18,18,18,18,18,18,18,18,18,18, // 0
        62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,O, O, 62,62,62,62,62,62,62,62,62,O, O, O, O, O, 62,62,62,18,2, 2, 2, 18,18,18,18,18,18,18,18,18,18,18,18,18,18,18,18,18,18,18,18, // 1
        62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,O, O, 62,62,62,62,62,62,62,62,62,O, O, O, O, O, 62,62,62,18,2, 2, 2, 18,18,18,18,18,18,18,18,18,17,18,18,18,17,18,18,18,18,18,18, // 2
        62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,62,O, O, 62,62,62,62,62,62,62,62,62,O, O, O, O, O, 62,62,62,18,2, 2, 2, 17,18,18,18,17,18,18,18,7, 7, 7, 7, 7, 7, 7, 17,18,18,18,18, // 3
        62,62,62,62,62,62,62,62,62,62,62,62,62,O, O, O, O, O, O, O, O, O, O, 62,62,62,62,62,62,62,62,62,O, O, O, O, O, 62,62,62,18,2, 2, 2, 17,2, 2, 2, 2, 2, 2, 2, 7, 7, 7, 7, 7, 7, 7, 2, 2, 2, 2, 18, // 4
        O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 62,62,62,18,2, 2, 2, 2, 2, 2, 2, 2, 2, 2, AA,7, 7, 7, 7, 7, 7, 7, 2, 2, 2, 2, 18, // 5
        O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 62,62,62,18,2, 2, 2, 17,2, 2, 2, 2, 2, 2, 2, 7, 7, 7, 7, 7, 7, 7, 2, 2, 2, 2, 18, // 6
        O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 62,62,62,18,18,18,18,17,18,18,18,17,18,18,18,7, 7, 7, 7, 7, 7, 7, 17,2, 2, 2, 17, // 7
        O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 62,62,62,18,7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 18,2, 2, 2, 18, // 8
        O, O, O, O, 63,63,63,61,61,61,63,63,63,63,63,63,63,63,63,63,63,63,63,63,63,63,63,63,O, O, O, O, O, O, O, O, O, 62,62,62,18,7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 18,2, 2, 2, 18, // 9
        O, O, O, O, 63,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 63,O, O, O, O, O, 62,62,62,62,62,62,62,18,7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 17,2, 2, 2, 17, // 10
        62,62,O, O, 63,O, O, O, O, O, 60,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 63,O, O, O, O, O, 62,62,62,62,62,62,62,18,7, 7, 11,11,11,7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 18,2, 2, 2, 18, // 11
        62,62,O, O, 63,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 59,59,59,O, O, 63,O, O, O, O, O, 62,62,62,62,62,62,62,18,7, 7, 11,11,11,7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 18,2, 2, 2, 18, // 12
        62,62,O, O, 63,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 59,59,59,O, O, 63,O, O, O, O, O, 62,62,62,62,62,62,62,18,7, 7, 11,11,11,7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 17,2, 2, 2, 17, // 13
        62,62,O, O, 63,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 59,59,59,O, O, 63,O, O, O, O, O, 62,62,62,62,62,62,62,18,18,7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 18,2, 2, 2, 18, // 14
        62,62,O, O, 63,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 63,O, O, O, O, O, 62,62,62,62,62,62,62,1, 18,18,18,17,18,18,18,17,18,18,18,17,18,18,18,17,18,18,18,2, 2, 2, 18, // 15
        62,62,O, O, 63,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 63,O, O, O, O, O, 62,62,62,62,62,62,1, 17,17,17,17,17,17,17,17,1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 18,2, 2, 2, 18, // 16
        62,62,O, O, 63,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 63,O, O, O, 62,62,62,62,62,62,62,62,1, 17,17,17,17,17,2, 2, 17,1, 1, 55,1, 1, 1, 1, 1, 55,1, 1, 17,2, 2, 2, 17, // 17
        62,62,O, O, 63,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 63,O, O, O, 62,62,62,62,62,62,62,62,1, 17,17,17,17,17,2, 2, 2, 2, 2, 2, 25,1, 1, 1, 25,2, 2, 2, 2, 2, 2, 2, 1, // 18
        60,O, O, O, 63,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 63,O, O, O, 62,62,62,62,62,62,62,62,1, 17,17,17,17,17,2, 2, 2, 2, 2, 2, 25,25,25,25,25,2, 2, 2, 2, 2, 2, 2, 1, // 19
        60,O, O, O, 63,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 63,O, O, O, 62,62,O, O, O, O, O, 62,1, 17,17,17,17,17,2, 2, 17,1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, // 20
        60,O, O, O, 63,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 63,60,60,60,62,62,O, O, O, O, O, 62,1, 17,17,17,17,17,17,17,1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, // 21
        60,O, O, O, 63,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 63,O, O, O, 62,62,60,60,60,60,60,O, 62,1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, // 22
        60,O, O, O, 63,O, O, O, O, O, O, O, O, O, 55,10,BB,BB,BB,10,55,O, O, O, O, O, O, 63,O, O, O, O, O, O, O, O, O, 60,O, 62,1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 1, 1, 1, 2, 2, 2, 2, 2, 2, 1, 1, 1, // 23
        60,O, O, O, 63,O, O, O, O, O, O, O, O, 10,10,36,36,36,36,36,10,10,O, O, O, O, O, 63,O, O, O, O, O, O, O, O, O, 60,O, 62,1, 1, 1, 1, 1, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 1, 1, // 24
        60,O, O, O, 63,O, O, O, O, O, O, O, 10,36,36,36,36,36,36,36,36,36,10,O, O, O, O, 59,O, O, O, O, O, O, O, O, O, 60,O, 62,1, 1, 1, 1, 1, 51,51,1, 1, 1, 1, 2, 3, 2, 3, 2, 1, 1, 1, 1, 51,51,1, 1, // 25
        10,49,49,10,10,10,10,10,10,10,10,10,10,36,36,36,36,36,36,36,36,36,10,10,10,10,10,10,10,10,10,10,49,49,10,O, O, 60,O, 62,62,1, 1, 1, 1, 51,51,1, 1, 1, 1, 2, CC,2, CC,2, 1, 1, 1, 1, 51,51,1, 1, // 26
        10,33,33,33,45,46,46,46,46,46,46,46,46,36,36,36,36,36,36,36,36,36,46,46,46,46,46,46,46,46,45,33,33,33,10,O, O, 60,O, 62,62,62,1, 1, 1, 51,51,51,51,51,51,2, 2, 2, 2, 2, 51,51,51,51,51,51,1, 1, // 27
        10,33,33,33,45,46,46,46,46,46,46,46,46,36,36,36,36,36,36,36,36,36,46,46,46,46,46,46,46,46,45,33,33,33,10,O, O, 60,O, 62,62,62,62,1, 1, 51,51,51,51,51,51,2, 2, 2, 2, 2, 51,51,51,51,51,51,1, 1, // 28
        10,33,33,33,45,46,46,46,46,46,46,46,46,46,46,46,46,46,46,46,46,46,46,46,46,46,46,46,46,46,45,33,33,33,10,60,60,60,60,8, 62,62,62,62,1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, // 29
        10,33,33,33,10,10,10,10,10,10,10,10,10,10,10,10,10,10,10,10,10,10,10,10,10,10,10,10,10,10,10,33,33,33,10,O, O, O, O, O, O, 21,21,62,1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, // 30
        10,34,34,34,10,8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 10,34,34,34,10,O, O, O, O, O, O, O, O, 62,62,62,62,62,62,1, 1, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, // 31
        49,35,35,35,10,35,35,43,35,43,35,43,35,43,35,43,35,43,35,43,35,43,35,43,35,43,35,43,35,35,10,35,35,35,49,O, O, O, O, O, O, O, O, O, O, O, O, O, 8, 1, 1, 4, 2, 2, 2, 4, 1, 1, 1, 1, 1, 1, 1, 1, // 32
        49,35,35,35,10,35,34,42,34,42,34,42,34,42,34,42,34,42,34,42,34,42,34,42,34,42,34,42,34,35,10,35,35,35,49,O, O, O, O, O, O, O, O, O, O, O, O, O, 8, 1, 1, 1, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 33
        49,35,35,35,10,43,42,41,33,41,33,41,33,41,33,41,33,41,33,41,33,41,33,41,33,41,33,41,42,43,10,35,35,35,49,O, O, O, O, O, O, O, O, 62,62,62,62,62,62,1, 1, 1, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 34
        10,35,35,35,DD,35,34,33,32,40,32,40,32,40,32,40,32,40,32,40,32,40,32,40,32,40,32,33,34,35,DD,35,35,35,10,O, O, O, O, O, O, O, O, 62,1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 35
        10,10,10,10,10,43,42,41,40,36,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,40,41,42,43,10,10,10,10,10,O, O, O, O, O, O, O, O, 62,1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 1, 1, 1, 17,17,17,17,17,17, // 36
        10,9, 9, 9, 9, 9, 34,33,32,36,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,32,33,34,9, 9, 9, 9, 9, 10,O, O, 60,60,60,60,60,60,62,1, 1, 1, 25,25,25,25,25,1, 2, 1, 1, 1, 1, 17,30,30,30,17,17, // 37
        10,9, 9, 9, 9, 9, 42,41,40,36,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,40,41,42,9, 9, 9, 9, 9, 10,O, O, 60,O, O, O, O, O, 62,1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 29,30,30,30,17,17, // 38
        10,9, 9, 9, 9, 9, 34,33,32,36,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,32,33,34,9, 9, 9, 9, 9, 10,O, O, 60,O, O, O, O, O, 62,1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 29,30,30,30,17,17, // 39
        10,BB,10,10,8, 43,42,41,40,36,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,40,41,42,43,8, 10,10,BB,10,O, O, 60,62,62,8, 8, 62,62,1, 1, 2, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 17,30,30,30,17,17, // 40
        10,9, 9, 9, 8, 35,34,33,32,36,22,O, O, O, O, O, O, O, O, O, O, O, O, O, 22,36,32,33,34,35,8, 9, 9, 9, 10,O, O, 60,62,1, 1, 1, 1, 1, 17,1, 2, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 17,17,30,17,17,17, // 41
        10,9, 9, 9, 8, 43,42,41,40,36,22,O, O, O, O, O, O, O, O, O, O, O, O, O, 22,36,40,41,42,43,8, 9, 9, 9, 10,O, O, 60,62,1, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 17,30,30,30,17,17, // 42
        10,9, 9, 9, 8, 35,34,33,32,36,22,O, O, O, O, O, O, O, O, O, O, O, O, O, 22,36,32,33,34,35,8, 9, 9, 9, 10,O, O, 60,62,1, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 17,30,30,30,17,17, // 43
        10,9, 9, 9, 8, 43,42,41,40,36,22,O, O, O, O, O, O, O, O, O, O, O, O, O, 22,36,40,41,42,43,8, 9, 9, 9, 10,62,62,62,62,1, 2, 2, 2, 1, 17,1, 1, 1, 1, 1, 1, 1, 4, 2, 4, 1, 1, 1, 17,30,30,30,17,17, // 44
        10,9, 9, 9, 8, 35,34,33,32,36,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,32,33,34,35,8, 9, 9, 9, 10,62,62,1, 1, 1, 29,29,29,1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 1, 1, 1, 17,17,17,17,17,17, // 45
        10,9, 9, 9, 9, 9, 36,36,36,36,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,36,36,36,9, 9, 9, 9, 9, 10,62,62,1, 1, 30,30,30,30,30,1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, // 46
        BB,9, 9, 9, 9, 9, 36,36,36,36,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,36,36,36,9, 9, 9, 9, 9, BB,62,62,1, 31,31,31,31,31,31,31,1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, // 47
        10,9, 9, 9, 9, 9, 36,36,36,36,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,36,36,36,9, 9, 9, 9, 9, 10,62,62,1, 31,31,31,31,31,31,31,1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, // 48
        10,9, 9, 9, 8, 35,34,33,32,36,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,32,33,34,35,8, 9, 9, 9, 10,62,62,1, 31,31,31,31,31,31,31,1, 1, 1, 1, 4, 2, 2, 2, 2, 2, 2, 2, 4, 1, 1, 1, 1, 1, 1, // 49
        10,9, 9, 9, 8, 43,42,41,40,36,22,O, O, O, O, O, O, O, O, O, O, O, O, O, 22,36,40,41,42,43,8, 9, 9, 9, 10,62,62,1, 1, 31,31,31,31,31,1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, // 50
        10,9, 9, 9, 8, 35,34,33,32,36,22,O, O, O, O, O, O, O, O, O, O, O, O, O, 22,36,32,33,34,35,8, 9, 9, 9, 10,62,62,1, 1, 31,31,31,31,31,1, 1, 17,1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 17,1, 1, 1, // 51
        10,9, 9, 9, 8, 43,42,41,40,36,22,O, O, O, O, O, O, O, O, O, O, O, O, O, 22,36,40,41,42,43,8, 9, 9, 9, 10,62,62,1, 1, 1, 31,31,31,1, 1, 1, 3, 1, 1, 4, 2, 2, 2, 2, 2, 2, 2, 4, 1, 1, 3, 1, 1, 1, // 52
        10,9, 9, 9, 8, 35,34,33,32,36,22,O, O, O, O, O, O, O, O, O, O, O, O, O, 22,36,32,33,34,35,8, 9, 9, 9, 12,O, 62,62,62,1, 31,31,31,1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, // 53
        10,BB,10,10,8, 43,42,41,40,36,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,40,41,42,43,8, 10,10,BB,10,O, O, 21,8, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, // 54
        10,9, 9, 9, 9, 9, 34,33,32,36,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,32,33,34,9, 9, 9, 9, 9, 10,O, O, 21,8, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 29,29,2, 2, 2, 29,29,2, 2, 2, 2, 1, 1, 1, // 55
        10,9, 9, 9, 9, 9, 42,41,40,36,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,40,41,42,9, 9, 9, 9, 9, 10,O, O, O, 8, 62,62,62,62,1, 1, 1, 4, 2, 2, 30,30,30,2, 2, 2, 30,30,30,2, 2, 4, 1, 1, 1, // 56
        10,9, 9, 9, 9, 9, 34,33,32,36,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,32,33,34,9, 9, 9, 9, 9, 10,O, O, O, O, O, O, O, 62,1, 1, 1, 1, 1, 2, 30,30,30,2, 2, 2, 30,30,30,2, 1, 1, 1, 1, 1, // 57
        10,10,10,10,10,43,42,41,40,36,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 36,40,41,42,43,10,10,10,10,10,O, O, O, O, O, O, O, 62,1, 1, 1, 1, 1, 2, 30,30,30,2, 2, 2, 30,30,30,2, 1, 1, 1, 1, 1, // 58
        10,35,35,35,DD,35,34,33,32,40,32,40,40,40,32,40,32,40,32,40,32,40,40,40,32,40,32,33,34,35,DD,35,35,35,10,60,60,60,60,60,60,60,62,1, 1, 1, 1, 1, 1, 30,30,30,2, 2, 2, 30,30,30,1, 1, 1, 1, 1, 1, // 59
        49,35,35,35,8, 43,42,41,33,41,33,41,33,41,33,41,33,41,33,41,33,41,33,41,33,41,33,41,42,43,8, 35,35,35,49,O, O, O, O, O, O, O, 62,1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 60
        49,35,35,35,8, 35,34,42,34,42,34,42,34,42,34,42,34,42,34,42,34,42,34,42,34,42,34,42,34,35,8, 35,35,35,49,O, O, O, O, O, O, O, 62,1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 61
        49,35,35,35,8, 35,35,43,35,43,35,43,35,43,35,43,35,43,35,43,35,43,35,43,35,43,35,43,35,35,8, 35,35,35,49,O, O, O, O, O, O, O, 62,1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 62
        10,35,35,35,8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 35,35,35,10,O, O, O, O, O, O, O, 62,1, 1, 1, 1, 1, 1, 1, 1, 1, 17,BB,17,1, 1, 1, 1, 1, 1, 1, 1, 1, // 63
    ],
    tile_dictionary: [
        TD::new(19, 31, 1, 0), TD::new(23,  0, 4, 4), TD::new(19,  7, 4, 4), TD::new(22,  4, 6, 0), // 0
        TD::new(19,  3, 0, 3), TD::new(23,  3, 3, 4), TD::new(24,  5, 4, 4), TD::new(19, 12, 4, 4), // 4
        TD::new(31,  0, 0, 1), TD::new(19,  6, 1, 1), TD::new(23,  0, 1, 1), TD::new(20, 11, 1, 4), // 8
        TD::new(19,  4, 1, 1), TD::new(19, 15, 0, 0), TD::new(19, 15, 0, 0), TD::new(19, 15, 0, 0), // 12
        TD::new(19, 15, 0, 0), TD::new(23,  0, 1, 1), TD::new(23,  0, 2, 4), TD::new(19, 15, 0, 0), // 16
        TD::new(19, 15, 0, 0), TD::new(23, 31, 2, 0), TD::new(21, 31, 2, 0), TD::new(27, 31, 1, 0), // 20
        TD::new(19, 15, 0, 0), TD::new(22,  3, 4, 4), TD::new(19, 15, 0, 0), TD::new(19, 15, 0, 0), // 24
        TD::new(19, 15, 0, 0), TD::new(18,  8, 4, 4), TD::new(17,  9, 4, 4), TD::new(16, 10, 4, 4), // 28
        TD::new(21, 20, 0, 0), TD::new(23, 18, 0, 0), TD::new(25, 16, 0, 0), TD::new(27, 14, 0, 0), // 32
        TD::new(19, 22, 0, 0), TD::new(19, 15, 0, 0), TD::new(19, 15, 0, 0), TD::new(19, 15, 0, 0), // 36
        TD::new(21, 20, 2, 0), TD::new(23, 18, 2, 0), TD::new(25, 16, 2, 0), TD::new(27, 14, 2, 0), // 40
        TD::new(19, 15, 0, 0), TD::new(21, 10, 0, 1), TD::new(19, 12, 1, 1), TD::new(19, 15, 0, 0), // 44
        TD::new(19, 15, 0, 0), TD::new(29,  3, 1, 1), TD::new(19, 15, 0, 0), TD::new(19,  6, 4, 4), // 48
        TD::new(19, 15, 0, 0), TD::new(19, 15, 0, 0), TD::new(19, 15, 0, 0), TD::new(31, 31, 3, 0), // 52
        TD::new(19, 15, 0, 0), TD::new(19, 15, 0, 0), TD::new(19, 15, 0, 0), TD::new(21, 31, 1, 0), // 56
        TD::new(25, 31, 4, 0), TD::new(22, 31, 2, 0), TD::new(19,  0, 5, 5), TD::new(27, 31, 1, 0), // 60
    ],
    texture_indices: [3, 12, 0, 8, 5, 1, 15],
    door_texture_index: 7,
    floor_color: 202,
    ceiling_color: 66,
    player_start: PlayerStart::new(53, 61, 240),
    background_image: 2,
    elements: pad_elements([
        LevelElement::new(E::Lamp, 58, 3), LevelElement::new(E::Column, 51, 4),
        LevelElement::new(E::Lock2, 51, 5), LevelElement::new(E::Finish, 44, 5),
        LevelElement::new(E::Column, 51, 6), LevelElement::new(E::Lamp, 58, 7),
        LevelElement::new(E::Blocker, 9, 9), LevelElement::new(E::Blocker, 8, 9),
        LevelElement::new(E::Blocker, 7, 9), LevelElement::new(E::Spider, 51, 10),
        LevelElement::new(E::Lamp, 6, 11), LevelElement::new(E::Teleport, 44, 12),
        LevelElement::new(E::Teleport, 23, 13), LevelElement::new(E::Health, 17, 17),
        LevelElement::new(E::Bullets, 15, 17), LevelElement::new(E::Spider, 17, 18),
        LevelElement::new(E::Health, 55, 19), LevelElement::new(E::Bullets, 53, 19),
        LevelElement::new(E::Health, 51, 19), LevelElement::new(E::Exploder, 56, 21),
        LevelElement::new(E::Lamp, 20, 22), LevelElement::new(E::Lamp, 14, 22),
        LevelElement::new(E::Ruin, 26, 24), LevelElement::new(E::Health, 8, 24),
        LevelElement::new(E::Warrior, 18, 25), LevelElement::new(E::Rockets, 54, 26),
        LevelElement::new(E::Plasma, 52, 26), LevelElement::new(E::Health, 36, 26),
        LevelElement::new(E::Warrior, 16, 26), LevelElement::new(E::Tree, 18, 29),
        LevelElement::new(E::Tree, 16, 29), LevelElement::new(E::Exploder, 17, 33),
        LevelElement::new(E::Rockets, 51, 37), LevelElement::new(E::Health, 49, 37),
        LevelElement::new(E::Column, 19, 37), LevelElement::new(E::Column, 15, 37),
        LevelElement::new(E::Turret, 60, 38), LevelElement::new(E::Bullets, 30, 38),
        LevelElement::new(E::Barrel, 21, 38), LevelElement::new(E::Barrel, 13, 38),
        LevelElement::new(E::Health, 4, 38), LevelElement::new(E::Plasmabot, 20, 40),
        LevelElement::new(E::Spider, 13, 40), LevelElement::new(E::Health, 21, 41),
        LevelElement::new(E::Plasma, 13, 41), LevelElement::new(E::Plasma, 60, 43),
        LevelElement::new(E::Barrel, 17, 46), LevelElement::new(E::Warrior, 12, 46),
        LevelElement::new(E::Plasmabot, 42, 47), LevelElement::new(E::Plasmabot, 40, 47),
        LevelElement::new(E::Lock0, 34, 47), LevelElement::new(E::Bullets, 23, 47),
        LevelElement::new(E::Barrel, 18, 47), LevelElement::new(E::Barrel, 16, 47),
        LevelElement::new(E::Rockets, 11, 47), LevelElement::new(E::Turret, 3, 47),
        LevelElement::new(E::Lock0, 0, 47), LevelElement::new(E::Barrel, 41, 48),
        LevelElement::new(E::Turret, 32, 48), LevelElement::new(E::Exploder, 21, 48),
        LevelElement::new(E::Barrel, 17, 48), LevelElement::new(E::Barrel, 42, 49),
        LevelElement::new(E::Barrel, 40, 49), LevelElement::new(E::Plasma, 42, 50),
        LevelElement::new(E::Plasma, 40, 50), LevelElement::new(E::Rockets, 43, 51),
        LevelElement::new(E::Plasma, 41, 51), LevelElement::new(E::Plasma, 39, 51),
        LevelElement::new(E::Ruin, 33, 52), LevelElement::new(E::Terminal, 41, 53),
        LevelElement::new(E::Health, 40, 53), LevelElement::new(E::Plasma, 21, 53),
        LevelElement::new(E::Health, 13, 53), LevelElement::new(E::Spider, 21, 54),
        LevelElement::new(E::Ender, 17, 55), LevelElement::new(E::Plasmabot, 13, 55),
        LevelElement::new(E::Health, 30, 56), LevelElement::new(E::Barrel, 21, 56),
        LevelElement::new(E::Barrel, 13, 56), LevelElement::new(E::Rockets, 4, 56),
        LevelElement::new(E::Health, 41, 57), LevelElement::new(E::Column, 19, 57),
        LevelElement::new(E::Column, 15, 57), LevelElement::new(E::Ruin, 29, 59),
        LevelElement::new(E::Lock0, 4, 59), LevelElement::new(E::Lock1, 53, 63),
    ]),
};
