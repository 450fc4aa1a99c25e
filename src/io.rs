//! Reading problem instances and writing solutions.
//!
//! # Input format
//!
//! Comma-separated text. The first line is a header and is skipped. Every
//! other non-blank line is `name,points,weight,volume` with integer
//! numbers. Exactly one line must be the capacity record, recognised by a
//! case-insensitive `knapsack` name; its points column is ignored.
//!
//! ```text
//! item,points,weight,volume
//! knapsack,0,4,3
//! A,10,2,1
//! B,6,3,2
//! ```
//!
//! # Output format
//!
//! `points:<total>` followed by one selected item name per line.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{KnapsackError, Result};
use crate::model::{Item, ItemCatalog, KnapsackState};

const CAPACITY_RECORD: &str = "knapsack";

/// Parses an instance into an empty knapsack and the item catalog.
///
/// # Errors
///
/// [`KnapsackError::MalformedRecord`] when a line does not have four
/// fields, a numeric field is not an integer, an item has a negative
/// field, the catalog's point, weight or volume total exceeds `i64`, or the
/// capacity record is missing or repeated.
///
/// # Examples
///
/// ```
/// let source = "name,points,weight,volume\nknapsack,0,4,3\nA,10,2,1\n";
/// let (state, catalog) = u_knapsack::io::load(source.as_bytes()).unwrap();
/// assert_eq!(state.resources(), (4, 3));
/// assert_eq!(catalog.len(), 1);
/// ```
pub fn load<R: BufRead>(reader: R) -> Result<(KnapsackState, ItemCatalog)> {
    let mut knapsack: Option<KnapsackState> = None;
    let mut catalog = ItemCatalog::new();
    let mut totals = [0i64; 3];

    for (i, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let (name, points, weight, volume) = parse_record(&line, line_no)?;
        if name.eq_ignore_ascii_case(CAPACITY_RECORD) {
            if knapsack.is_some() {
                return Err(KnapsackError::malformed(
                    line_no,
                    "duplicate knapsack capacity record",
                ));
            }
            knapsack = Some(KnapsackState::new(weight, volume));
        } else {
            if points < 0 || weight < 0 || volume < 0 {
                return Err(KnapsackError::malformed(
                    line_no,
                    format!("item {name:?} has a negative field"),
                ));
            }
            // Catalog sums bound every selection sum.
            for (total, value) in totals.iter_mut().zip([points, weight, volume]) {
                *total = total.checked_add(value).ok_or_else(|| {
                    KnapsackError::malformed(line_no, "catalog totals overflow i64")
                })?;
            }
            catalog.push(Item::new(name, points, weight, volume));
        }
    }

    let knapsack =
        knapsack.ok_or_else(|| KnapsackError::malformed(0, "missing knapsack capacity record"))?;
    debug!(
        items = catalog.len(),
        max_weight = knapsack.max_weight(),
        max_volume = knapsack.max_volume(),
        "instance loaded"
    );
    Ok((knapsack, catalog))
}

/// Opens `path` and [`load`]s it.
pub fn load_path(path: impl AsRef<Path>) -> Result<(KnapsackState, ItemCatalog)> {
    let file = File::open(path.as_ref())?;
    load(BufReader::new(file))
}

fn parse_record(line: &str, line_no: usize) -> Result<(&str, i64, i64, i64)> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [name, points, weight, volume] = fields.as_slice() else {
        return Err(KnapsackError::malformed(
            line_no,
            format!("expected 4 fields, got {}", fields.len()),
        ));
    };

    let number = |column: &str, raw: &str| -> Result<i64> {
        raw.parse().map_err(|_| {
            KnapsackError::malformed(line_no, format!("{column} {raw:?} is not an integer"))
        })
    };

    Ok((
        *name,
        number("points", *points)?,
        number("weight", *weight)?,
        number("volume", *volume)?,
    ))
}

/// Writes the solution header and the selected item names.
pub fn save<W: Write>(state: &KnapsackState, mut writer: W) -> Result<()> {
    writeln!(writer, "points:{}", state.points())?;
    for item in state.items() {
        writeln!(writer, "{item}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and [`save`]s into it.
pub fn save_path(state: &KnapsackState, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    info!(
        points = state.points(),
        path = %path.display(),
        "saving solution"
    );
    let file = File::create(path)?;
    save(state, BufWriter::new(file))
}

/// `<dir>/<stem>_solution_<strategy>.csv`, where `dir` defaults to the
/// input's own directory.
pub fn solution_path(input: &Path, strategy: &str, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "knapsack".to_string());
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!("{stem}_solution_{strategy}.csv"))
}
