use crate::level::{pad_elements, ElementType as E, Level, LevelElement, PlayerStart};
use crate::tile::TileDefinition as TD;
use crate::tile::{PROPERTY_DOOR as DOOR, PROPERTY_ELEVATOR as ELEVATOR, PROPERTY_SQUEEZER as SQUEEZER};

const O: u8 = 0;
const AA: u8 = 5 | SQUEEZER;
const BB: u8 = 19 | DOOR;
const CC: u8 = 24 | DOOR;
const DD: u8 = 56 | ELEVATOR;
const EE: u8 = 7 | ELEVATOR;
const FF: u8 = 8 | DOOR;
const GG: u8 = 63 | DOOR;
const HH: u8 = 47 | SQUEEZER;
const II: u8 = 4 | SQUEEZER;
const JJ: u8 = 51 | ELEVATOR;
const KK: u8 = 17 | ELEVATOR;
const LL: u8 = 50 | ELEVATOR;
const MM: u8 = 1 | DOOR;

#[rustfmt::skip]
pub static LEVEL: Level = Level {
    map: [
        // 0  1  2  3  4  5  6  7  8  9  10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63
        8, 8, 8, 8, 8, 24,24,24,8, 8, 24,24,24,8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 21,8, 8, 8, 8, 8, 8, 8, 24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,24,8, // 0
        8, 5, 5, 5, 5, 24,5, 24,9, 9, 24,5, 24,5, 5, 5, 5, 5, 5, 27,27,27,59,59,21,59,59,27,27,27,27,27,24,6, 6, 6, 6, 6, 24,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 24,8, // 1
        8, 5, 24,24,24,9, 5, 9, 9, 9, 9, 5, 9, 9, 5, 5, 5, 5, 5, 27,27,27,59,59,21,59,59,27,27,27,27,27,24,6, 6, 6, 6, 6, 24,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 24,8, // 2
        8, 5, 24,5, 5, AA,AA,AA,AA,9, AA,AA,AA,9, 5, 5, 5, 5, 5, 27,27,27,59,5, 5, 5, 59,27,27,27,27,27,24,6, 6, 6, 6, 6, 24,6, 6, 24,6, 6, 24,6, 6, 24,6, 32,32,32,6, 24,6, 6, 24,6, 6, 24,6, 6, 24,8, // 3
        8, 5, 24,5, 9, AA,AA,9, AA,AA,AA,AA,AA,9, 5, 5, 5, 5, 57,9, 59,59,59,5, 5, 5, 59,59,59,9, 9, 27,24,6, 6, 6, 6, 6, 24,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 32,32,32,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 24,8, // 4
        63,57,24,5, 9, AA,AA,9, AA,AA,AA,AA,9, 9, 5, 5, 5, 5, 57,59,5, 5, 5, 5, 5, 5, 5, 5, 5, 59,57,5, 6, 6, 6, 6, 6, 6, 24,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 32,32,32,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 24,8, // 5
        8, 57,9, AA,AA,AA,AA,9, 9, 9, 9, 9, 5, 5, 5, 5, 5, 5, 57,59,5, 59,59,59,59,59,59,59,5, 59,57,5, 6, 6, 6, 6, 6, 6, 24,6, 6, 24,6, 6, 24,6, 6, 24,32,32,32,32,32,24,6, 6, 24,6, 6, 24,6, 6, 24,8, // 6
        8, 57,9, AA,AA,AA,9, 24,5, AA,AA,9, 5, 5, 5, 5, 5, 5, 57,59,5, 59,9, 27,27,27,9, 59,5, 59,57,5, 23,6, 6, 6, 6, 6, 24,6, 6, 6, 6, 6, 6, 6, 6, 6, 32,32,32,32,32,6, 6, 6, 6, 6, 6, 6, 6, 6, 24,8, // 7
        53,57,9, AA,AA,AA,9, 24,5, AA,AA,21,5, 5, 5, 5, 5, 5, 57,59,5, 59,27,5, 5, 5, 27,59,5, 59,57,5, 23,6, 6, 6, 6, 6, 24,6, 6, 6, 6, 6, 6, 6, 6, 6, 32,32,32,32,32,6, 6, 6, 6, 6, 6, 6, 6, 6, 24,8, // 8
        8, 57,24,5, 9, AA,9, 24,5, AA,AA,21,5, 5, 5, 5, 5, 5, 57,59,5, 59,27,5, 5, 5, 27,59,5, 59,57,5, 23,6, 6, 6, 6, 6, 24,6, 6, 24,6, 6, 24,6, 6, 24,32,32,32,32,32,24,6, 6, 24,6, 6, 24,6, 6, 24,8, // 9
        8, 57,24,5, 9, AA,9, 24,5, AA,AA,9, 5, 5, 5, 5, 5, 5, 57,59,5, 19,27,5, 5, 5, 27,19,5, 59,57,5, 6, 6, 6, 6, 6, 6, 24,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 32,32,32,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 24,8, // 10
        63,57,9, 9, 9, AA,9, 9, 9, AA,AA,9, 5, 5, 5, 5, 5, 5, 57,59,5, BB,27,5, 5, 5, 27,BB,5, 59,57,5, 6, 6, 6, 6, 6, 6, 24,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 32,32,32,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 24,8, // 11
        8, 57,9, AA,AA,AA,AA,AA,9, AA,AA,9, 9, 9, 9, 27,27,27,9, 58,59,58,9, 27,27,27,9, 58,59,58,9, 27,24,6, 6, 6, 6, 6, 24,6, 6, 24,6, 6, 24,6, 6, 24,6, 32,32,32,6, 24,6, 6, 24,6, 6, 24,6, 6, 24,8, // 12
        8, 57,9, AA,AA,AA,AA,AA,9, AA,AA,AA,AA,9, 27,27,27,27,27,27,27,27,27,27,27,27,27,27,27,27,27,27,24,6, 6, 6, 6, 6, 24,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 24,8, // 13
        53,57,9, 9, AA,AA,9, 9, 9, 9, 9, AA,AA,9, 27,27,27,27,27,27,27,27,9, 27,27,27,9, 27,27,27,27,27,24,6, 6, 6, 6, 6, 24,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 24,8, // 14
        8, 57,24,5, AA,AA,5, 24,5, AA,AA,AA,AA,9, 27,27,27,27,27,27,27,27,27,27,27,27,27,27,27,27,27,27,24,6, 6, 6, 6, 6, 24,6, 6, 24,6, 6, 24,6, 6, 24,6, 6, 24,6, 6, 24,6, 6, 24,6, 6, 24,6, 6, 24,8, // 15
        8, 57,24,5, AA,AA,5, 24,5, AA,AA,AA,9, 9, 27,27,27,27,27,27,27,27,9, 27,9, 27,9, 27,27,27,27,27,24,6, 6, 6, 6, 6, 24,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 24,8, // 16
        63,57,9, 9, AA,AA,9, 9, 9, AA,AA,AA,9, 57,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 23,6, 6, 6, 6, 6, 24,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 24,8, // 17
        8, 5, 9, AA,AA,AA,AA,AA,AA,AA,AA,AA,9, 57,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 23,6, 6, 6, 6, 6, 24,6, 6, 24,6, 6, 24,6, 6, 24,6, 6, 24,6, 6, 24,6, 6, 24,6, 6, 24,6, 6, 24,8, // 18
        8, 5, 9, 9, 9, 9, AA,AA,AA,AA,AA,AA,9, 57,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 23,6, 6, 6, 6, 6, 24,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 24,8, // 19
        53,5, 9, 9, 9, 9, 9, AA,AA,AA,AA,AA,9, 57,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 24,6, 6, 6, 6, 6, 24,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 25,24,8, // 20
        53,5, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 57,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6, 24,24,24,24,24,24,24,24,24,24,24,24,CC,24,24,24,24,24,24,24,24,24,24,42,24,8, // 21
        8, 5, 19,59,59,59,63,63,63,59,59,59,19,57,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6, 6, 6, 6, 26,6, 6, 6, 24,6, 6, 6, 6, 6, 6, 6, 6, 6, 24,6, 6, 6, 24,24,42,24,8, // 22
        8, 5, BB,5, 5, 5, 5, 5, 5, 5, 5, 5, 59,57,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 24,48,48,48,48,48,24,6, 6, 6, 6, 6, 6, 6, 6, 26,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 24,42,42,24,8, // 23
        8, 59,19,59,59,59,19,21,19,59,59,59,19,57,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 27,5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6, 6, 6, 6, 26,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 24,24,24,24,8, // 24
        53,27,27,27,27,27,27,27,27,27,27,27,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 24,48,48,48,48,5, 6, 6, 6, 6, 6, 6, 6, 6, 6, 26,6, 24,24,24,6, 6, 6, 24,24,24,6, 6, 6, 24,24,24,6, 26,6, 6, 8, 8, // 25
        8, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 27,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 23,5, 5, 5, 48,5, 6, 6, 6, 6, 6, 6, 24,26,26,24,6, 24,24,24,6, 6, 6, 24,6, 24,6, 6, 6, 24,24,24,6, 26,6, 6, DD,8, // 26
        8, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 27,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 23,5, 48,5, 5, 5, 23,6, 6, 6, 6, 6, 26,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 26,6, 6, 8, 8, // 27
        8, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 27,19,57,57,57,57,57,57,57,57,57,5, 5, 5, 5, 23,5, 48,48,48,48,23,6, 6, 6, 6, 6, 26,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 24,6, 6, DD,8, // 28
        8, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 27,19,59,59,59,58,58,59,59,59,19,5, 5, 5, 5, 23,5, 5, 5, 5, 5, 23,6, 6, 6, 6, 6, 26,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 8, 8, // 29
        8, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 27,BB,27,27,27,27,27,27,27,27,BB,5, 5, 5, 5, 24,48,48,48,63,11,22,63,20,CC,20,20,20,6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 8, 8, // 30
        53,5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 27,19,9, 9, 9, 9, 9, 9, 9, 9, 19,5, 5, 5, 5, 5, 5, 5, 5, 22,EE,EE,12,6, 6, 20,20,20,6, 6, 6, 23,6, 6, 6, 26,6, 6, 6, 23,6, 6, 6, 23,6, 6, 6, 23,6, 6, 6, 8, 8, // 31
        8, O, O, O, O, O, O, O, O, O, O, 15,14,3, 3, 3, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 10,EE,EE,22,47,47,18,4, 4, 18,47,47,47,47,47,47,63,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 33,8, // 32
        8, O, O, O, O, O, O, O, O, O, O, 15,14,3, 3, 3, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 63,22,FF,63,47,47,18,4, 4, 18,47,47,47,47,47,47,63,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 33,8, // 33
        63,O, O, O, O, 63,63,O, O, O, O, O, O, 3, 3, 3, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 46,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 55,8, // 34
        8, O, O, O, 63,63,63,63,O, O, O, O, O, 3, 3, 3, 61,61,63,24,63,61,61,O, O, O, O, O, O, O, O, O, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 46,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 18,13,18,4, 55,DD, // 35
        8, O, O, O, 63,63,63,63,O, O, O, O, O, 3, 3, 3, 61,63,62,62,62,63,61,O, O, O, O, O, O, O, O, O, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 46,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 13,13,13,4, 55,DD, // 36
        63,O, O, O, O, 63,63,O, O, O, O, O, O, 62,62,62,63,62,62,62,62,62,63,O, O, O, O, O, O, O, O, O, 4, 4, 4, 4, 4, 4, 4, 4, 4, 46,46,46,46,46,46,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 13,13,13,4, 55,8, // 37
        8, O, 54,54,54,O, O, 54,54,54,O, O, O, 62,62,62,GG,62,62,62,62,62,24,O, O, O, O, O, O, O, 8, 53,4, 4, 4, 4, 4, 4, 4, 46,46,46,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 18,13,13,13,18,18,4, 53,8, // 38
        8, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 15,15,62,62,62,63,62,62,62,62,62,63,O, O, O, O, O, O, O, O, O, 4, 4, 4, 4, 4, 4, 46,46,16,16,16,16,16,16,16,4, 4, 4, 4, 4, 4, 4, 4, 13,13,13,13,18,4, 4, 55,8, // 39
        8, 3, JJ,JJ,JJ,3, 3, JJ,JJ,JJ,3, 14,14,3, 3, 3, 61,63,62,62,62,63,61,O, O, O, O, O, O, O, O, O, 4, 4, 4, 4, 4, 4, 46,4, 16,HH,16,II,16,HH,16,4, 4, 4, 4, 4, 4, 4, 4, 13,13,13,4, 4, 4, 4, 55,8, // 40
        63,3, JJ,JJ,JJ,3, 3, JJ,JJ,JJ,3, 3, 3, 3, 3, 3, 61,61,63,24,63,61,61,O, O, O, O, O, O, O, O, O, 4, 4, 4, 4, 4, 46,46,4, 4, 47,4, 47,4, 47,4, 4, 8, 18,4, 4, 4, 4, 4, 13,13,13,4, 4, 4, 4, 55,8, // 41
        8, 3, JJ,JJ,JJ,3, 3, JJ,JJ,JJ,3, 14,14,3, 3, 3, O, O, O, O, O, O, O, O, O, O, 61,61,O, O, O, O, 4, 4, 4, 4, 4, 46,4, 4, 4, 47,4, 47,4, 47,4, 4, 13,45,4, 4, 4, 4, 4, 18,13,18,4, 4, 4, 4, 55,8, // 42
        8, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 15,15,3, 3, 3, O, O, O, O, O, O, O, O, O, O, 61,61,O, O, 8, 53,4, 4, 4, 4, 4, 46,4, 4, 4, 45,4, 45,4, 45,4, 4, 13,45,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 53,8, // 43
        8, O, 54,54,54,O, O, 54,54,54,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 61,61,61,O, O, O, O, 4, 4, 4, 4, 4, 46,4, 4, 4, 47,47,47,47,47,4, 4, 18,45,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 8, 8, // 44
        8, O, 49,49,49,O, O, O, O, O, O, O, O, O, O, O, O, O, O, 61,61,61,61,61,61,61,24,24,O, O, O, O, 4, 4, 4, 4, 4, 19,4, 4, 4, 46,46,46,46,47,4, 4, 18,45,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 8, 8, // 45
        63,O, 49,49,49,O, O, O, O, O, O, O, O, O, O, O, O, O, O, 61,61,61,61,61,61,61,24,24,O, O, O, O, 4, 4, 4, 4, 4, 4, 4, 4, 4, 46,46,46,46,47,4, 4, 13,45,4, 4, 46,46,4, 4, 4, 4, 4, 46,46,4, 8, 8, // 46
        8, O, 49,49,49,O, O, O, 15,15,15,O, O, 15,15,15,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 4, 4, 4, 4, 4, 4, 4, 4, 4, 46,46,46,46,47,4, 4, 13,45,4, 4, 46,46,4, 4, 4, 4, 4, 46,46,4, 8, 8, // 47
        8, O, 49,49,49,O, O, O, 14,14,14,O, O, 14,14,14,O, O, O, O, O, O, O, O, O, O, O, O, O, O, 8, 53,4, 4, 4, 4, 4, 4, 4, 4, 4, 47,47,47,47,47,4, 4, 18,18,4, 4, 4, 4, 4, 18,13,18,4, 4, 4, 4, 8, 8, // 48
        8, O, 49,49,49,O, O, O, 3, 3, 3, O, O, 3, 3, 3, O, O, 54,O, O, O, 54,O, O, O, O, O, O, O, O, O, 4, 4, 4, 4, 18,18,4, 4, 4, 45,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 16,13,16,4, 4, 4, 4, 8, 8, // 49
        8, O, 49,49,49,O, O, O, 3, O, O, O, O, O, O, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, O, O, O, O, O, O, O, 4, 4, 4, 4, 18,18,4, 4, 4, 45,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 16,KK,16,4, 4, 4, 4, 8, 8, // 50
        8, O, 24,LL,24,O, O, 54,3, 54,O, O, O, O, 54,3, 3, 3, 3, 3, 3, 3, 3, 3, 3, O, O, O, O, O, O, O, 4, 4, 4, 4, 18,18,4, 4, 4, 47,47,47,47,47,4, 4, 18,18,4, 4, 4, 4, 4, 16,16,16,4, 4, 4, 4, DD,8, // 51
        63,O, 2, 2, 2, O, O, O, 3, O, O, O, O, O, O, 3, 3, 49,61,61,49,3, 3, 3, 3, 54,O, O, O, O, O, O, 4, 4, 4, 4, 4, 18,4, 4, 4, 4, 4, 4, 4, 47,4, 4, 13,45,4, 4, 4, 4, 4, 18,13,18,4, 4, 4, 4, 8, 8, // 52
        8, O, 2, 2, 2, O, O, O, 3, O, O, O, O, O, O, O, O, 60,61,61,61,3, 3, 3, 3, O, O, O, O, O, 8, 53,4, 4, 4, 4, 4, 18,4, 4, 4, 4, 4, 4, 4, 47,4, 4, 13,45,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 8, 8, // 53
        8, 15,2, 2, 2, O, O, 54,3, 54,O, O, O, O, O, O, O, 60,61,61,61,3, 3, 3, 3, O, O, O, O, O, O, O, 4, 4, 4, 4, 18,18,4, 4, 4, 47,47,47,4, 47,4, 4, 18,45,4, 19,46,46,46,46,46,46,46,46,46,46,19,8, // 54
        8, 14,2, 2, 2, O, O, O, 3, O, O, O, O, O, O, 3, 3, 49,61,61,49,3, 3, 3, 3, 54,O, O, O, O, O, O, 4, 4, 4, 4, 18,18,4, 4, 4, 45,4, 45,4, 47,4, 4, 18,45,4, 46,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 8, 8, // 55
        8, 3, 2, 2, 2, 2, 8, 24,3, 61,61,O, O, O, 54,3, 3, 3, 3, 3, 3, 3, 3, 3, 3, O, O, O, O, O, O, O, 4, 4, 4, 4, 18,18,4, 4, 4, 47,4, 47,47,47,4, 4, 13,45,4, 46,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 8, 8, // 56
        8, 3, 2, 2, 2, 2, 2, 8, 3, 61,61,O, O, O, 54,3, 3, 3, 3, 3, 3, 3, 3, 3, 3, O, O, O, O, O, O, O, 4, 4, 4, 4, 4, 4, 4, 4, 4, 47,4, 4, 4, 4, 4, 4, 13,45,4, 46,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 8, 8, // 57
        63,14,2, 2, 2, 2, 2, 2, MM,61,61,O, O, O, O, 3, O, O, 54,O, O, O, 54,O, O, O, 63,63,O, O, 8, 53,4, 4, 4, 4, 4, 4, 4, 4, 18,HH,18,4, 4, 4, 4, 4, 8, 18,4, 46,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 8, 8, // 58
        8, 15,2, 2, 2, 2, 2, 8, 3, 61,61,O, O, O, O, 3, O, O, O, O, O, O, O, O, O, 63,63,63,63,O, O, O, 4, 4, 4, 4, 4, 4, 4, 4, 16,16,16,4, 4, 4, 4, 4, 4, 4, 4, 46,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 8, 8, // 59
        8, O, 2, 2, 2, 2, 8, 24,3, 61,61,54,O, 54,O, 3, O, O, O, O, O, O, O, O, O, 63,63,63,63,O, O, O, 4, 4, 4, 4, 19,46,46,46,19,46,19,46,46,46,46,46,46,46,46,19,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 53,8, // 60
        8, O, O, O, O, O, O, O, 3, 3, 3, 3, 3, 3, 3, 3, O, O, O, O, O, O, O, O, O, O, 63,63,O, O, O, O, 4, 4, 4, 4, 46,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 34,8, // 61
        8, O, O, O, O, O, O, O, O, 54,O, 54,O, 54,O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, O, 4, 4, 4, 4, 46,4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 34,8, // 62
        8, 8, 8, DD,8, DD,8, 8, 8, 8, 53,53,53,8, 8, 8, 53,8, 34,34,34,8, 53,8, 34,34,34,8, 53,8, 19,19,33,33,33,53,19,8, 8, 8, 8, 8, 53,34,34,53,8, 8, 8, 8, 53,34,34,53,8, 8, 8, 8, 8, 53,34,34,34,8, // 63
    ],
    tile_dictionary: [
        TD::new(10, 20, 0, 0), TD::new( 4, 26, 0, 0), TD::new( 0,  4, 0, 0), TD::new( 4, 26, 0, 0), // 0
        TD::new( 0, 30, 2, 2), TD::new(17, 13, 0, 2), TD::new(24,  6, 0, 1), TD::new( 0, 24, 1, 0), // 4
        TD::new( 4,  0, 1, 0), TD::new(19,  0, 4, 1), TD::new(10,  5, 0, 0), TD::new(17,  5, 0, 0), // 8
        TD::new(24,  5, 0, 0), TD::new( 8, 22, 3, 0), TD::new( 6, 24, 0, 0), TD::new( 8, 22, 0, 0), // 12
        TD::new(11, 19, 1, 0), TD::new( 0, 10, 0, 0), TD::new( 8, 22, 0, 0), TD::new(21,  0, 4, 4), // 16
        TD::new(24,  0, 0, 5), TD::new(17,  5, 0, 1), TD::new( 0,  0, 0, 0), TD::new(24,  6, 5, 5), // 20
        TD::new(28,  0, 5, 1), TD::new(24,  8, 0, 1), TD::new(26,  3, 5, 1), TD::new(17, 10, 0, 5), // 24
        TD::new(13, 15, 0, 0), TD::new(13, 15, 0, 0), TD::new(13, 15, 0, 0), TD::new(13, 15, 0, 0), // 28
        TD::new(24,  8, 0, 1), TD::new( 8,  0, 6, 0), TD::new(18,  0, 0, 6), TD::new(13, 15, 0, 0), // 32
        TD::new(13, 15, 0, 0), TD::new(13, 15, 0, 0), TD::new(13, 15, 0, 0), TD::new(13, 15, 0, 0), // 36
        TD::new(13, 15, 0, 0), TD::new(13, 15, 0, 0), TD::new(28,  4, 5, 1), TD::new(13, 15, 0, 0), // 40
        TD::new(13, 15, 0, 0), TD::new( 2, 28, 4, 2), TD::new( 0, 13, 0, 4), TD::new( 2, 28, 2, 2), // 44
        TD::new(22,  8, 5, 2), TD::new(15, 15, 0, 0), TD::new( 0, 15, 0, 0), TD::new(15, 11, 5, 0), // 48
        TD::new(13, 15, 0, 0), TD::new( 0,  0, 1, 1), TD::new(10, 20, 1, 0), TD::new(22,  8, 0, 0), // 52
        TD::new(31, 24, 4, 4), TD::new(19, 11, 6, 2), TD::new( 0,  0, 3, 3), TD::new(19,  3, 4, 3), // 56
        TD::new(12, 18, 5, 0), TD::new(14, 16, 5, 0), TD::new(17, 13, 1, 1), TD::new(21,  0, 2, 2), // 60
    ],
    texture_indices: [14, 3, 11, 15, 2, 12, 10],
    door_texture_index: 13,
    floor_color: 50,
    ceiling_color: 186,
    player_start: PlayerStart::new(56, 50, 240),
    background_image: 1,
    elements: pad_elements([
        LevelElement::new(E::Finish, 24, 0), LevelElement::new(E::Bullets, 29, 1),
        LevelElement::new(E::Bullets, 28, 1), LevelElement::new(E::Card0, 11, 1),
        LevelElement::new(E::Plasma, 4, 1), LevelElement::new(E::Rockets, 3, 1),
        LevelElement::new(E::Teleport, 35, 2), LevelElement::new(E::Warrior, 60, 3),
        LevelElement::new(E::Card2, 40, 6), LevelElement::new(E::Plasmabot, 51, 7),
        LevelElement::new(E::Lamp, 12, 7), LevelElement::new(E::Spider, 36, 9),
        LevelElement::new(E::Spider, 47, 10), LevelElement::new(E::Lock2, 27, 10),
        LevelElement::new(E::Lock2, 21, 10), LevelElement::new(E::Lamp, 12, 10),
        LevelElement::new(E::Turret, 1, 10), LevelElement::new(E::Plasmabot, 42, 11),
        LevelElement::new(E::Spider, 34, 11), LevelElement::new(E::Barrel, 5, 11),
        LevelElement::new(E::Column, 37, 12), LevelElement::new(E::Warrior, 35, 12),
        LevelElement::new(E::Column, 33, 12), LevelElement::new(E::Turret, 55, 13),
        LevelElement::new(E::Warrior, 1, 13), LevelElement::new(E::Health, 3, 15),
        LevelElement::new(E::Warrior, 50, 17), LevelElement::new(E::Spider, 53, 20),
        LevelElement::new(E::Barrel, 18, 20), LevelElement::new(E::Lock2, 50, 21),
        LevelElement::new(E::Barrel, 19, 21), LevelElement::new(E::Warrior, 18, 21),
        LevelElement::new(E::Barrel, 17, 21), LevelElement::new(E::Barrel, 18, 22),
        LevelElement::new(E::Teleport, 60, 23), LevelElement::new(E::Health, 39, 23),
        LevelElement::new(E::Rockets, 39, 24), LevelElement::new(E::Rockets, 61, 25),
        LevelElement::new(E::Health, 60, 25), LevelElement::new(E::Turret, 50, 26),
        LevelElement::new(E::Warrior, 29, 27), LevelElement::new(E::Health, 5, 28),
        LevelElement::new(E::Lamp, 22, 29), LevelElement::new(E::Lock1, 35, 30),
        LevelElement::new(E::Column, 56, 31), LevelElement::new(E::Column, 50, 31),
        LevelElement::new(E::Rockets, 54, 32), LevelElement::new(E::Bullets, 53, 32),
        LevelElement::new(E::Bullets, 38, 32), LevelElement::new(E::Plasma, 37, 32),
        LevelElement::new(E::Turret, 32, 32), LevelElement::new(E::Lamp, 33, 34),
        LevelElement::new(E::Spider, 33, 35), LevelElement::new(E::Plasma, 9, 35),
        LevelElement::new(E::Health, 23, 36), LevelElement::new(E::Terminal, 19, 36),
        LevelElement::new(E::Plasma, 9, 36), LevelElement::new(E::Card1, 21, 38),
        LevelElement::new(E::Plasmabot, 19, 38), LevelElement::new(E::Warrior, 57, 39),
        LevelElement::new(E::Plasma, 56, 40), LevelElement::new(E::Rockets, 56, 41),
        LevelElement::new(E::Barrel, 37, 48), LevelElement::new(E::Barrel, 36, 48),
        LevelElement::new(E::Turret, 44, 49), LevelElement::new(E::Health, 36, 52),
        LevelElement::new(E::Bullets, 36, 53), LevelElement::new(E::Spider, 18, 53),
        LevelElement::new(E::Plasmabot, 11, 53), LevelElement::new(E::Barrel, 3, 53),
        LevelElement::new(E::Bullets, 58, 57), LevelElement::new(E::Bullets, 56, 57),
        LevelElement::new(E::Turret, 44, 57), LevelElement::new(E::Turret, 3, 57),
        LevelElement::new(E::Barrel, 51, 58), LevelElement::new(E::Barrel, 50, 58),
        LevelElement::new(E::Terminal, 39, 58), LevelElement::new(E::Lock0, 8, 58),
        LevelElement::new(E::Warrior, 5, 58), LevelElement::new(E::Barrel, 51, 59),
        LevelElement::new(E::Turret, 3, 59), LevelElement::new(E::Bullets, 20, 61),
        LevelElement::new(E::Health, 3, 61),
    ]),
};
