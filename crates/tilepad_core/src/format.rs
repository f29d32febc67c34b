//! The level file format
//!
//! Levels persist as whitespace-delimited text:
//!
//! ```text
//! <width> <height>
//! <row 0: width cell values>
//! ...
//! <row height-1: width cell values>
//! <id> <name>
//! ...
//! ```
//!
//! Cell value 0 is an empty cell. Legend lines follow the cell rows, one per
//! entry, ascending by identifier, until the input ends. There is no version
//! header and no escaping; names are single whitespace-free tokens.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::{Legend, LevelGrid, TileId, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Errors surfaced while reading or writing level files.
#[derive(Debug, Error)]
pub enum LevelFormatError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Render a grid and its legend in the level file format.
pub fn write_level(grid: &LevelGrid, legend: &Legend) -> String {
    let mut out = format!("{} {}\n", grid.width(), grid.height());
    for y in 0..grid.height() {
        let row: Vec<String> = (0..grid.width())
            .map(|x| grid.get(x, y).unwrap_or(0).to_string())
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    for (id, name) in legend.iter() {
        out.push_str(&format!("{id} {name}\n"));
    }
    out
}

/// Parse level text into a grid and legend.
///
/// Cell values with no legend entry are kept as-is; resolving them is the
/// caller's concern (the editor draws a fallback tile for them). Anything
/// structurally wrong with the text - a non-numeric token, truncated cell
/// data, dimensions outside the editing bounds, a trailing identifier with
/// no name - is a [`LevelFormatError::Parse`].
pub fn parse_level(input: &str) -> Result<(LevelGrid, Legend), LevelFormatError> {
    let mut tokens = input.split_whitespace();

    let width: u32 = next_number(&mut tokens, "width")?;
    let height: u32 = next_number(&mut tokens, "height")?;
    if width < MIN_GRID_SIZE || height < MIN_GRID_SIZE {
        return Err(LevelFormatError::Parse(format!(
            "grid dimensions {width}x{height} are below the {MIN_GRID_SIZE}x{MIN_GRID_SIZE} minimum"
        )));
    }
    if width > MAX_GRID_SIZE || height > MAX_GRID_SIZE {
        return Err(LevelFormatError::Parse(format!(
            "grid dimensions {width}x{height} exceed the {MAX_GRID_SIZE}x{MAX_GRID_SIZE} maximum"
        )));
    }

    let mut grid = LevelGrid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let value: TileId = next_number(&mut tokens, "cell value")?;
            if value != 0 {
                grid.set(x, y, Some(value));
            }
        }
    }

    let mut legend = Legend::new();
    while let Some(token) = tokens.next() {
        let id: TileId = parse_number(token, "legend identifier")?;
        let name = tokens.next().ok_or_else(|| {
            LevelFormatError::Parse(format!("legend entry {id} is missing its name"))
        })?;
        legend.insert(id, name);
    }

    Ok((grid, legend))
}

/// Write a level file, creating or truncating `path`.
pub fn save_level(path: &Path, grid: &LevelGrid, legend: &Legend) -> Result<(), LevelFormatError> {
    fs::write(path, write_level(grid, legend))?;
    Ok(())
}

/// Read and parse a level file.
pub fn load_level(path: &Path) -> Result<(LevelGrid, Legend), LevelFormatError> {
    let content = fs::read_to_string(path)?;
    parse_level(&content)
}

fn next_number<'a, T, I>(tokens: &mut I, what: &str) -> Result<T, LevelFormatError>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or_else(|| {
        LevelFormatError::Parse(format!("unexpected end of input, expected {what}"))
    })?;
    parse_number(token, what)
}

fn parse_number<T: FromStr>(token: &str, what: &str) -> Result<T, LevelFormatError> {
    token
        .parse()
        .map_err(|_| LevelFormatError::Parse(format!("invalid {what} '{token}'")))
}
