//! CSV reading and text decoding.
//!
//! Uploads arrive as raw bytes. They are decoded strictly as UTF-8 (a byte
//! order mark is stripped) through `encoding_rs`, then read with a fixed
//! dialect: comma delimiter, header row, RFC 4180 quoting, and no ragged rows.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use encoding_rs::UTF_8;

pub const CSV_DELIMITER: u8 = b',';

pub fn open_csv_reader<R>(reader: R) -> csv::Reader<R>
where
    R: Read,
{
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .delimiter(CSV_DELIMITER)
        .double_quote(true)
        .flexible(false);
    builder.from_reader(reader)
}

pub fn decode_utf8(bytes: &[u8]) -> Result<String> {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if had_errors {
        Err(anyhow!("Input is not valid {} text", UTF_8.name()))
    } else {
        Ok(text.into_owned())
    }
}

pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut reader =
        BufReader::new(File::open(path).with_context(|| format!("Opening input file {path:?}"))?);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .with_context(|| format!("Reading input file {path:?}"))?;
    Ok(bytes)
}

/// Reads the header row and every record as owned strings.
pub fn read_records<R>(reader: &mut csv::Reader<R>) -> Result<(Vec<String>, Vec<Vec<String>>)>
where
    R: Read,
{
    let headers = reader
        .headers()
        .context("Reading header row")?
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>();
    if headers.is_empty() {
        return Err(anyhow!("CSV input has no header row"));
    }
    let mut rows = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Reading row {}", row_idx + 2))?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }
    Ok((headers, rows))
}
