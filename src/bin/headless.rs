//! Headless runner: plays a command script and prints the result as JSON.
//!
//! Every piece carries its image key as its visual handle, so the draw list
//! reads like what a sprite renderer would receive.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use just_not_tetris::cli::{parse_script, FieldArgs};
use just_not_tetris::core::FieldSnapshot;
use just_not_tetris::logging;
use just_not_tetris::types::Vector;

#[derive(Debug, Parser)]
#[command(name = "headless")]
#[command(about = "Run a command script (l/r/d/u) against a field and print JSON")]
struct Cli {
    #[command(flatten)]
    field: FieldArgs,

    /// Commands: l = left, r = right, d = down, u = rotate
    #[arg(long, default_value = "")]
    actions: String,

    /// Pixel x of the field's top-left corner
    #[arg(long, default_value_t = 0)]
    origin_x: i32,

    /// Pixel y of the field's top-left corner
    #[arg(long, default_value_t = 0)]
    origin_y: i32,
}

#[derive(Debug, Serialize)]
struct DrawCall {
    image: &'static str,
    x: i32,
    y: i32,
}

#[derive(Debug, Serialize)]
struct Report {
    seed: u32,
    applied: usize,
    snapshot: FieldSnapshot,
    draws: Vec<DrawCall>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.field.log_file.as_deref())?;

    let script = parse_script(&cli.actions)?;
    let seed = cli.field.seed.unwrap_or(1);
    let mut field = cli.field.build_field(seed, |kind| kind.as_str())?;
    field.set_top_left(Vector::new(cli.origin_x, cli.origin_y));

    let applied = script
        .into_iter()
        .map(|action| field.apply_action(action))
        .filter(|moved| *moved)
        .count();

    let mut draws = Vec::new();
    field.draw(|piece, px| {
        draws.push(DrawCall {
            image: *piece.handle(),
            x: px.x,
            y: px.y,
        })
    });

    let report = Report {
        seed,
        applied,
        snapshot: field.snapshot(),
        draws,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
