mod ascii;
mod export;
mod image_target;
mod logger;
mod preview;

use anarch::level::Level;
use anarch::screen::Palette;
use anarch::texts::{self, MenuItem};
use anarch::{assets, levels};
use log::{info, warn, LevelFilter};
use std::error::Error;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "anarch-tools", about = "Inspect and export the built-in game data")]
struct Opt {
    /// Log debug output to stderr
    #[structopt(short, long)]
    verbose: bool,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Print the version and a summary of every level
    Info,
    /// Print a level map as text
    Map { level: usize },
    /// List the elements placed in a level
    Elements { level: usize },
    /// Export a wall texture or background image as PNG
    Texture {
        index: u8,
        #[structopt(parse(from_os_str))]
        out: PathBuf,
        #[structopt(long)]
        background: bool,
        #[structopt(long, default_value = "1")]
        scale: u32,
    },
    /// Run the frame adapter with a top-down view and save the last frame
    Preview {
        level: usize,
        #[structopt(parse(from_os_str))]
        out: PathBuf,
        #[structopt(long, default_value = "2")]
        ticks: u32,
        #[structopt(long, default_value = "2")]
        scale: u32,
    },
    /// Check every level for authoring mistakes
    Validate,
}

fn level(index: usize) -> Result<&'static Level, Box<dyn Error>> {
    levels::get(index).ok_or_else(|| {
        format!(
            "no level {}, the catalog has {}",
            index,
            levels::NUMBER_OF_LEVELS
        )
        .into()
    })
}

fn print_info() {
    println!("anarch {}", texts::VERSION);
    if !texts::MALWARE_WARNING.is_empty() {
        println!("{}", texts::MALWARE_WARNING);
    }
    let menu: Vec<_> = MenuItem::ALL.iter().map(|i| i.text()).collect();
    println!("menu: {}", menu.join(", "));
    for (index, level) in levels::all().enumerate() {
        let start = level.player_start();
        println!(
            "level {}: {} elements, {} monsters, start ({}, {}) facing {}, background {}",
            index,
            level.elements().count(),
            level.monsters().count(),
            start.x,
            start.y,
            start.direction_units(),
            level.background_image()
        );
    }
}

fn validate() -> Result<(), Box<dyn Error>> {
    let mut failed = 0;
    for (index, level) in levels::all().enumerate() {
        if let Err(e) = level.validate() {
            println!("level {}: {}", index, anarch::Error::from(e));
            failed += 1;
        }
        for lock in level.stray_locks() {
            warn!(
                "level {}: {:?} at ({}, {}) is not on a door",
                index, lock.element_type, lock.x, lock.y
            );
        }
        for &texture in level.texture_indices().iter() {
            if assets::wall_texture(texture).is_none() {
                info!("level {}: wall texture {} not in this build", index, texture);
            }
        }
    }
    if failed > 0 {
        return Err(format!("{} levels failed validation", failed).into());
    }
    println!("{} levels ok", levels::NUMBER_OF_LEVELS);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    logger::init(if opt.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    match opt.command {
        Command::Info => print_info(),
        Command::Map { level: index } => print!("{}", ascii::render_map(level(index)?)),
        Command::Elements { level: index } => print!("{}", ascii::render_elements(level(index)?)),
        Command::Texture {
            index,
            out,
            background,
            scale,
        } => {
            let texture = if background {
                assets::background(index)
            } else {
                assets::wall_texture(index)
            }
            .ok_or_else(|| format!("texture {} is not in this build", index))?;
            let image = export::texture_image(texture, &Palette::grayscale(), scale);
            image.save(&out)?;
            info!("wrote {}", out.display());
        }
        Command::Preview {
            level: index,
            out,
            ticks,
            scale,
        } => {
            let preview = export::preview_image(level(index)?, Palette::grayscale(), ticks, scale)?;
            preview.image.save(&out)?;
            info!(
                "wrote {} after {} frames, {} commits",
                out.display(),
                preview.frames,
                preview.commits
            );
        }
        Command::Validate => validate()?,
    }
    Ok(())
}
