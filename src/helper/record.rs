use std::path::Path;

use crate::helper::error::{Result, SubsampleError};

/// Column holding the gene identifier.
pub const KEY_COLUMN: usize = 3;
/// Column holding the per-gene read count.
pub const COUNT_COLUMN: usize = 6;

/// One tab-delimited line. `line` is 1-based and only used for error reporting.
#[derive(Debug)]
pub struct TsvRecord<'a> {
    path: &'a Path,
    line: usize,
    fields: Vec<&'a str>,
}

impl<'a> TsvRecord<'a> {
    pub fn new(path: &'a Path, line: usize, text: &'a str) -> Self {
        TsvRecord {
            path,
            line,
            fields: text.split('\t').collect(),
        }
    }

    pub fn field(&self, idx: usize) -> Result<&'a str> {
        self.fields
            .get(idx)
            .copied()
            .ok_or_else(|| SubsampleError::MalformedRecord {
                path: self.path.to_path_buf(),
                line: self.line,
                columns: self.fields.len(),
                needed: idx + 1,
            })
    }

    pub fn count(&self, idx: usize) -> Result<u64> {
        let value = self.field(idx)?;
        value
            .trim()
            .parse::<u64>()
            .map_err(|_| SubsampleError::InvalidCount {
                path: self.path.to_path_buf(),
                line: self.line,
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static GENE_LINE: &str = "chr1\t100\t150\tgeneX\t0\t+\t12";

    #[test]
    fn test_fields() {
        let path = Path::new("reads.bed.gz");
        let record = TsvRecord::new(path, 1, GENE_LINE);
        assert_eq!(record.field(KEY_COLUMN).unwrap(), "geneX");
        assert_eq!(record.count(COUNT_COLUMN).unwrap(), 12);
    }

    #[test]
    fn test_malformed_record() {
        let path = Path::new("reads.bed.gz");
        let record = TsvRecord::new(path, 7, "chr1\t100\t150");
        let err = record.field(KEY_COLUMN).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed record at reads.bed.gz:7: found 3 columns, need at least 4"
        );
    }

    #[test]
    fn test_invalid_count() {
        let path = Path::new("reads.bed.gz");
        let record = TsvRecord::new(path, 2, "chr1\t100\t150\tgeneX\t0\t+\t-3");
        assert!(matches!(
            record.count(COUNT_COLUMN),
            Err(SubsampleError::InvalidCount { line: 2, .. })
        ));
    }
}
