use anarch::adapter::{Engine, StepStatus};
use anarch::assets;
use anarch::level::{ElementClass, Level, MAP_SIZE};
use anarch::screen::{Frame, SCREEN_HEIGHT, SCREEN_WIDTH};
use anarch::texture::{TEXTURE_SIZE, TRANSPARENT_COLOR};
use anarch::tile::TileProperty;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Gray8;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

pub const TILE_PIXELS: u32 = 2;
pub const PANEL_X: i32 = (MAP_SIZE as u32 * TILE_PIXELS) as i32;

pub const DOOR_COLOR: u8 = 200;
pub const ELEVATOR_COLOR: u8 = 150;
pub const SQUEEZER_COLOR: u8 = 120;
pub const MONSTER_COLOR: u8 = 255;
pub const ITEM_COLOR: u8 = 230;
pub const PLAYER_COLOR: u8 = 254;

pub struct PreviewEngine {
    level: &'static Level,
    steps: u32,
}

impl PreviewEngine {
    pub fn new(level: &'static Level) -> Self {
        Self { level, steps: 0 }
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    fn floor_color(height: u8) -> u8 {
        20 + height * 6
    }

    fn draw(&self, frame: &mut Frame) -> Result<(), Infallible> {
        frame.clear(Gray8::new(self.level.ceiling_color()))?;

        for y in 0..MAP_SIZE as i16 {
            for x in 0..MAP_SIZE as i16 {
                let (tile, property) = self.level.tile(x, y);
                let color = match property {
                    TileProperty::Door => DOOR_COLOR,
                    TileProperty::Elevator => ELEVATOR_COLOR,
                    TileProperty::Squeezer => SQUEEZER_COLOR,
                    TileProperty::Normal => Self::floor_color(tile.floor_height()),
                };
                fill_tile(frame, x as i32, y as i32, color)?;
            }
        }

        for element in self.level.elements() {
            let color = match element.element_type.class() {
                ElementClass::Monster => MONSTER_COLOR,
                ElementClass::Item => ITEM_COLOR,
                _ => continue,
            };
            fill_tile(frame, element.x as i32, element.y as i32, color)?;
        }

        // player start blinks so consecutive frames differ
        if self.steps % 2 == 0 {
            let start = self.level.player_start();
            fill_tile(frame, start.x as i32, start.y as i32, PLAYER_COLOR)?;
        }

        let slot_texture = self.level.wall_texture(0);
        if let Some(texture) = assets::wall_texture(slot_texture) {
            let pixels = (0..TEXTURE_SIZE as u8).flat_map(|x| {
                texture
                    .column(x)
                    .iter()
                    .enumerate()
                    .filter(|&(_, &c)| c != TRANSPARENT_COLOR)
                    .map(move |(y, &c)| {
                        Pixel(Point::new(PANEL_X + x as i32, y as i32), Gray8::new(c))
                    })
            });
            frame.draw_iter(pixels)?;
        }

        // progress bar along the bottom of the panel
        let width = (SCREEN_WIDTH as i32 - PANEL_X) as u32;
        Rectangle::new(
            Point::new(PANEL_X, SCREEN_HEIGHT as i32 - 4),
            Size::new(self.steps % (width + 1), 4),
        )
        .into_styled(PrimitiveStyle::with_fill(Gray8::new(self.level.floor_color())))
        .draw(frame)
    }
}

fn fill_tile(frame: &mut Frame, x: i32, y: i32, color: u8) -> Result<(), Infallible> {
    frame.fill_solid(
        &Rectangle::new(
            Point::new(x * TILE_PIXELS as i32, y * TILE_PIXELS as i32),
            Size::new(TILE_PIXELS, TILE_PIXELS),
        ),
        Gray8::new(color),
    )
}

impl Engine for PreviewEngine {
    fn step(&mut self, frame: &mut Frame) -> StepStatus {
        self.draw(frame).unwrap_or_else(|e| match e {});
        self.steps = self.steps.wrapping_add(1);
        StepStatus(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anarch::levels;

    #[test]
    fn test_player_start_blinks() {
        let level = levels::get(0).unwrap();
        let mut engine = PreviewEngine::new(level);
        let mut frame = Frame::new();
        engine.step(&mut frame);
        // start (52, 55) covers pixels (104..106, 110..112)
        assert_eq!(frame.pixel(104, 110), Some(PLAYER_COLOR));
        assert_eq!(frame.pixel(105, 111), Some(PLAYER_COLOR));
        engine.step(&mut frame);
        assert_eq!(frame.pixel(104, 110), Some(PreviewEngine::floor_color(8)));
        assert_eq!(engine.steps(), 2);
    }

    #[test]
    fn test_tile_properties_drawn() {
        let level = levels::get(0).unwrap();
        let mut engine = PreviewEngine::new(level);
        let mut frame = Frame::new();
        engine.step(&mut frame);
        assert_eq!(frame.pixel(46, 20), Some(ELEVATOR_COLOR));
        // (38, 18) is a door with a lock marker, which is not drawn
        assert_eq!(frame.pixel(76, 36), Some(DOOR_COLOR));
    }

    #[test]
    fn test_panel_shows_first_wall_texture() {
        let level = levels::get(0).unwrap();
        let mut engine = PreviewEngine::new(level);
        let mut frame = Frame::new();
        engine.step(&mut frame);
        let texture = assets::wall_texture(level.wall_texture(0)).unwrap();
        let expected = texture.texel(3, 5);
        if expected != TRANSPARENT_COLOR {
            assert_eq!(frame.pixel(PANEL_X as u16 + 3, 5), Some(expected));
        }
    }
}
