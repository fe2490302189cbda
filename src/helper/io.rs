use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::helper::error::Result;

static SAMPLE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\.[A-Za-z0-9]+)?\.gz$|\.[A-Za-z0-9]+$").unwrap());

#[derive(Debug, PartialEq)]
pub enum DataType {
    Tsv,
    TsvGz,
}

impl DataType {
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext == "gz" => DataType::TsvGz,
            _ => DataType::Tsv,
        }
    }
}

/// Opens a tab-delimited reads file and returns a buffered line reader over its text.
/// The stream type is picked from the file name through `DataType`: files ending in
/// `.gz` are read through flate2's `MultiGzDecoder`, so concatenated gzip members are
/// decoded as one stream; anything else is read as plain text.
/// *Arguments*
/// - `path`: path to the reads file.
/// *Returns*
/// - `Result<Box<dyn BufRead>>`: a reader yielding the decompressed lines, or an `Io`
///   error when the file cannot be opened.
pub fn open_tsv(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    let stream: Box<dyn BufRead> = match DataType::from_path(path) {
        DataType::Tsv => Box::new(BufReader::new(file)),
        DataType::TsvGz => Box::new(BufReader::new(MultiGzDecoder::new(BufReader::new(file)))),
    };
    Ok(stream)
}

/// Reads every line of a reads file, without line terminators.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in open_tsv(path)?.lines() {
        lines.push(line?);
    }
    Ok(lines)
}

/// Opens `path` for appending, creating it if needed. Existing content is kept.
pub fn append_writer(path: &Path) -> Result<BufWriter<File>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(BufWriter::new(file))
}

/// Sample name for a reads file, e.g. `S1_reads.bed.gz` -> `S1_reads`.
pub fn sample_name(path: &Path) -> String {
    let fname = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    SAMPLE_SUFFIX.replace(&fname, "").into_owned()
}
