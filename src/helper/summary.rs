use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::helper::error::Result;

pub const SAMPLED_READS: &str = "Sampled reads";
pub const FILTERED_READS: &str = "Filtered reads";

/// Writes `group<TAB>key<TAB>metric<TAB>value` lines.
pub struct SummaryWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(writer: W) -> Self {
        let inner = WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(writer);
        SummaryWriter { inner }
    }

    pub fn write_line(&mut self, group: &str, key: &str, metric: &str, value: u64) -> Result<()> {
        self.inner
            .write_record([group, key, metric, value.to_string().as_str()])?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| std::io::Error::other(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lines() {
        let mut summary = SummaryWriter::new(Vec::new());
        summary.write_line("A", "geneX", SAMPLED_READS, 6).unwrap();
        summary.write_line("A", "S1", FILTERED_READS, 10).unwrap();
        let out = String::from_utf8(summary.into_inner().unwrap()).unwrap();
        assert_eq!(out, "A\tgeneX\tSampled reads\t6\nA\tS1\tFiltered reads\t10\n");
    }

    #[test]
    fn test_no_quoting() {
        let mut summary = SummaryWriter::new(Vec::new());
        summary.write_line("A", "gene \"X\"", SAMPLED_READS, 1).unwrap();
        let out = String::from_utf8(summary.into_inner().unwrap()).unwrap();
        assert_eq!(out, "A\tgene \"X\"\tSampled reads\t1\n");
    }
}
