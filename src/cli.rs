//! Command-line arguments shared by the binaries.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use crate::core::{random_supply, FieldConfig, FieldError, PlayingField};
use crate::types::{
    GameAction, PieceKind, DEFAULT_CELL_SIZE_PX, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH,
    DEFAULT_PIECE_COUNT,
};

#[derive(Debug, Clone, Args)]
pub struct FieldArgs {
    /// Field width in cells
    #[arg(long, default_value_t = DEFAULT_FIELD_WIDTH)]
    pub width: u16,

    /// Field height in cells
    #[arg(long, default_value_t = DEFAULT_FIELD_HEIGHT)]
    pub height: u16,

    /// Size of one cell in pixels
    #[arg(long = "cell-size", default_value_t = DEFAULT_CELL_SIZE_PX)]
    pub cell_size: u16,

    /// Number of pieces in the round
    #[arg(long, default_value_t = DEFAULT_PIECE_COUNT)]
    pub pieces: usize,

    /// Seed for the random piece supply
    #[arg(long)]
    pub seed: Option<u32>,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl FieldArgs {
    pub fn config(&self) -> FieldConfig {
        FieldConfig::new(self.width, self.height).with_cell_size_px(self.cell_size)
    }

    /// Build a field with a freshly generated supply.
    pub fn build_field<H>(
        &self,
        seed: u32,
        handle_for: impl FnMut(PieceKind) -> H,
    ) -> Result<PlayingField<H>, FieldError> {
        PlayingField::new(self.config(), random_supply(seed, self.pieces, handle_for))
    }
}

/// Parse a compact command script: `l` left, `r` right, `d` down, `u` rotate.
///
/// Whitespace is ignored so scripts can be grouped for readability.
pub fn parse_script(script: &str) -> Result<Vec<GameAction>> {
    let mut actions = Vec::with_capacity(script.len());
    for (i, ch) in script.chars().enumerate() {
        let action = match ch.to_ascii_lowercase() {
            'l' => GameAction::MoveLeft,
            'r' => GameAction::MoveRight,
            'd' => GameAction::SoftDrop,
            'u' => GameAction::Rotate,
            c if c.is_whitespace() => continue,
            other => bail!("unknown command {other:?} at position {i}"),
        };
        actions.push(action);
    }
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        field: FieldArgs,
    }

    #[test]
    fn defaults_match_the_classic_board() {
        let cli = TestCli::parse_from(["test"]);
        assert_eq!(cli.field.config(), FieldConfig::default());
        assert_eq!(cli.field.pieces, DEFAULT_PIECE_COUNT);
        assert_eq!(cli.field.seed, None);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = TestCli::parse_from([
            "test", "--width", "10", "--height", "20", "--cell-size", "8", "--pieces", "3",
            "--seed", "9",
        ]);
        let config = cli.field.config();
        assert_eq!((config.width, config.height, config.cell_size_px), (10, 20, 8));
        assert_eq!(cli.field.seed, Some(9));

        let field = cli.field.build_field(9, |_| ()).unwrap();
        assert_eq!(field.remaining(), 2);
    }

    #[test]
    fn zero_width_is_a_config_error() {
        let cli = TestCli::parse_from(["test", "--width", "0"]);
        assert!(matches!(
            cli.field.build_field(1, |_| ()),
            Err(FieldError::InvalidSize { width: 0, .. })
        ));
    }

    #[test]
    fn oversized_field_is_a_config_error() {
        let cli = TestCli::parse_from(["test", "--width", "40000"]);
        assert!(matches!(
            cli.field.build_field(1, |_| ()),
            Err(FieldError::TooLarge { width: 40000, .. })
        ));
    }

    #[test]
    fn script_parsing() {
        assert_eq!(
            parse_script("lR d u").unwrap(),
            vec![
                GameAction::MoveLeft,
                GameAction::MoveRight,
                GameAction::SoftDrop,
                GameAction::Rotate
            ]
        );
        assert!(parse_script("lx").is_err());
    }
}
