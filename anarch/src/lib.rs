#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod adapter;
pub mod assets;
pub mod fps_monitor;
pub mod host;
pub mod level;
pub mod levels;
pub mod screen;
pub mod texts;
pub mod texture;
pub mod tile;

use level::LevelError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("drawing surface is held elsewhere")]
    SurfaceUnavailable,
    #[error("no free slot in the listener table")]
    ListenerTableFull,
    #[error("invalid level: {0}")]
    Level(#[from] LevelError),
}

pub type Result<T> = core::result::Result<T, Error>;
