//! Tabular reader - loads workbook sheets into ordered rows and columns

use crate::error::{LexpError, LexpResult};
use crate::transform::Cell;
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One sheet of a workbook: ordered column headers and ordered rows.
///
/// The first column is the translation-key column; the remaining headers are
/// language identifiers, taken verbatim from the sheet's first row.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Load every requested sheet (1-based indices, in the order given).
///
/// The workbook is opened once and all reads complete before the caller
/// writes anything, so a bad index never leaves a partial output file.
pub fn load_sheets<P: AsRef<Path>>(path: P, indices: &[usize]) -> LexpResult<Vec<Sheet>> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        LexpError::Workbook(format!("failed to open {}: {e}", path.display()))
    })?;

    indices
        .iter()
        .map(|&index| read_sheet(&mut workbook, index))
        .collect()
}

/// Load a single sheet by 1-based index.
pub fn load_sheet<P: AsRef<Path>>(path: P, index: usize) -> LexpResult<Sheet> {
    Ok(load_sheets(path, &[index])?.remove(0))
}

fn read_sheet(workbook: &mut Sheets<BufReader<File>>, index: usize) -> LexpResult<Sheet> {
    let names = workbook.sheet_names().to_vec();
    if index == 0 || index > names.len() {
        return Err(LexpError::SheetNotFound {
            index,
            count: names.len(),
        });
    }

    let name = &names[index - 1];
    let range = workbook
        .worksheet_range(name)
        .map_err(|e| LexpError::Workbook(format!("failed to read sheet '{name}': {e}")))?;

    Ok(sheet_from_range(name, &range))
}

fn sheet_from_range(name: &str, range: &Range<Data>) -> Sheet {
    let (height, width) = range.get_size();

    if height == 0 {
        return Sheet {
            name: name.to_string(),
            columns: Vec::new(),
            rows: Vec::new(),
        };
    }

    // Header row: verbatim text, with a positional fallback for blank cells.
    let mut columns = Vec::with_capacity(width);
    for col in 0..width {
        let header = match range.get((0, col)) {
            Some(Data::String(s)) => s.clone(),
            Some(Data::Int(i)) => i.to_string(),
            Some(Data::Float(f)) => f.to_string(),
            Some(Data::Empty) | None => format!("col_{col}"),
            Some(other) => other.to_string(),
        };
        columns.push(header);
    }

    let mut rows = Vec::with_capacity(height.saturating_sub(1));
    for row in 1..height {
        let cells = (0..width)
            .map(|col| match range.get((row, col)) {
                Some(data) => cell_from_data(data),
                None => Cell::Missing,
            })
            .collect();
        rows.push(cells);
    }

    Sheet {
        name: name.to_string(),
        columns,
        rows,
    }
}

/// Fold a calamine cell into the closed [`Cell`] variant.
///
/// Whole-valued floats become `Int` - the file format does not distinguish
/// the two, and a count column should export as `3`, not `3.0`. Booleans,
/// datetimes and error cells fold into text via their display form.
fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Missing,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() <= i64::MAX as f64 {
                Cell::Int(*f as i64)
            } else {
                Cell::Float(*f)
            }
        }
        other => Cell::Text(other.to_string()),
    }
}
