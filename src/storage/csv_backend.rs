use std::{
    fs,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, WriterBuilder};

use crate::errors::ExpenseError;
use crate::ledger::Expense;

use super::Result;

const TMP_SUFFIX: &str = "tmp";

/// Encodes one record as a single CSV line without a trailing newline,
/// fields in the fixed order `amount,category,description,date`. Fields
/// containing the delimiter are quoted, so such records survive a round
/// trip instead of corrupting the layout on the next load.
pub fn encode_line(expense: &Expense) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buffer);
        writer.serialize(expense)?;
        writer.flush()?;
    }
    let line = String::from_utf8_lossy(&buffer);
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Decodes one CSV line into a record. Fails when the line has fewer than
/// four fields, or when the amount or date field does not parse.
pub fn decode_line(line: &str) -> Result<Expense> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_reader(line.as_bytes());
    match reader.deserialize::<Expense>().next() {
        Some(record) => Ok(record?),
        None => Err(ExpenseError::MalformedLine(line.to_string())),
    }
}

/// Reads every record from `path`, in file order. A missing file is an
/// empty data set, not an error; the first undecodable line aborts the
/// whole load with its error.
pub fn load_expenses(path: &Path) -> Result<Vec<Expense>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut reader = ReaderBuilder::new().has_headers(false).from_path(path)?;
    let mut expenses = Vec::new();
    for record in reader.deserialize() {
        expenses.push(record?);
    }
    Ok(expenses)
}

/// Rewrites `path` with one encoded line per record. The file is written
/// to a `.tmp` sibling and renamed into place, so readers never observe a
/// partial write.
pub fn save_expenses(path: &Path, expenses: &[Expense]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut writer = WriterBuilder::new().has_headers(false).from_path(&tmp)?;
    for expense in expenses {
        writer.serialize(expense)?;
    }
    writer.flush()?;
    drop(writer);
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
