//! Homestead - line-driven farm scene session.
//!
//! Usage: cargo run --bin homestead -- [--config <scene.json>] [--catalog <catalog.json>]
//!
//! Reads one command per line from stdin:
//!   spawn <Kind>        start placing a new object
//!   move <x> <z>        hover the ground at world x/z
//!   click <x> <z>       click at world x/z (drop, pick up or remove)
//!   pointer <px> <py>   hover at window pixel coordinates
//!   press <px> <py>     click at window pixel coordinates
//!   rotate | cancel | remove | expand
//!   season <name> | weather <name> | night | day | tick <seconds>
//!   kinds | status | quit

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use glam::Vec3;

use homestead::catalog::Catalog;
use homestead::core::input::InputEvent;
use homestead::core::Result;
use homestead::environment::{Season, WeatherKind};
use homestead::math::Ray;
use homestead::scene::{SceneConfig, SceneManager};

fn main() {
    homestead::core::logging::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = match parse_path_arg(&args, "--config") {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    let catalog = match parse_path_arg(&args, "--catalog") {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    let mut manager = SceneManager::new(config, catalog);
    println!("=== Homestead ===");
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = words.split_first() else {
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "help" => println!("spawn move click pointer press rotate cancel remove expand season weather night day tick kinds status quit"),
            "spawn" => match rest.first() {
                Some(kind) => match manager.spawn(kind) {
                    Some(id) => println!("placing {} ({:?})", kind, id),
                    None => println!("unknown kind '{}'", kind),
                },
                None => println!("usage: spawn <Kind>"),
            },
            "move" => match parse_xz(rest) {
                Some(ray) => println!("{:?}", manager.pointer_move(&ray)),
                None => println!("usage: move <x> <z>"),
            },
            "click" => match parse_xz(rest) {
                Some(ray) => println!("{:?}", manager.pointer_down(&ray)),
                None => println!("usage: click <x> <z>"),
            },
            "pointer" | "press" => match parse_pair(rest) {
                Some((x, y)) => {
                    let event = if command == "pointer" {
                        InputEvent::PointerMove { x, y }
                    } else {
                        InputEvent::PointerDown { x, y }
                    };
                    println!("{:?}", manager.handle(&event));
                }
                None => println!("usage: {} <px> <py>", command),
            },
            "rotate" => println!("{:?}", manager.rotate()),
            "cancel" => println!("{:?}", manager.cancel()),
            "remove" => {
                manager.arm_removal();
                println!("removal armed; click an object");
            }
            "expand" => {
                let added = manager.expand_terrain();
                println!("{} new cells, {} total", added, manager.terrain().len());
            }
            "season" => match rest.first().and_then(|s| Season::parse(s)) {
                Some(season) => manager.set_season(season),
                None => println!("usage: season spring|summer|autumn|winter"),
            },
            "weather" => match rest.first().and_then(|s| WeatherKind::parse(s)) {
                Some(weather) => manager.set_weather(weather),
                None => println!("usage: weather sunny|cloudy|rainy|snowy|stormy"),
            },
            "night" => manager.set_night(true),
            "day" => manager.set_night(false),
            "tick" => match rest.first().and_then(|s| s.parse::<f32>().ok()) {
                Some(dt) => manager.update(dt),
                None => println!("usage: tick <seconds>"),
            },
            "kinds" => println!("{}", manager.catalog().names().collect::<Vec<_>>().join(", ")),
            "status" => print_status(&manager),
            other => println!("unknown command '{}'", other),
        }
        stdout.flush()?;
    }

    Ok(())
}

fn print_status(manager: &SceneManager) {
    let env = manager.environment();
    println!(
        "terrain: level {}, {} cells, {} blocks",
        manager.terrain().level(),
        manager.terrain().len(),
        manager.block_count()
    );
    match manager.placement().pending() {
        Some(p) => println!(
            "placing {} ({}x{}, {} turns) at {}",
            p.kind,
            p.footprint.width,
            p.footprint.height,
            p.turns.count(),
            p.cursor
        ),
        None => println!("idle"),
    }
    println!("removal armed: {}", manager.removal_armed());
    println!(
        "environment: {} / {}, night {}, sky #{:06X}, sun {:.1}",
        env.season().name(),
        env.weather().name(),
        env.is_night(),
        env.sky_color(),
        env.sun_intensity()
    );
}

fn parse_path_arg(args: &[String], flag: &str) -> Option<PathBuf> {
    let pos = args.iter().position(|a| a == flag)?;
    args.get(pos + 1).map(PathBuf::from)
}

fn parse_pair(words: &[&str]) -> Option<(f32, f32)> {
    let a = words.first()?.parse().ok()?;
    let b = words.get(1)?.parse().ok()?;
    Some((a, b))
}

/// Straight-down pick ray at world x/z
fn parse_xz(words: &[&str]) -> Option<Ray> {
    let (x, z) = parse_pair(words)?;
    Some(Ray::new(Vec3::new(x, 1000.0, z), Vec3::NEG_Y))
}
