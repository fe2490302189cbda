use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::Path;

use getset::Getters;

use crate::helper::error::Result;
use crate::helper::io::{open_tsv, read_lines, sample_name};
use crate::helper::record::TsvRecord;
use crate::helper::sampler::subsample;
use crate::helper::subsample_dict::MinCountStore;

/// Lines grouped by key, keys in first-seen order.
#[derive(Debug, Default)]
pub struct KeyedReads {
    keys: Vec<String>,
    index: HashMap<String, usize>,
    lines: Vec<Vec<String>>,
}

impl KeyedReads {
    pub fn push(&mut self, key: &str, line: String) {
        match self.index.get(key) {
            Some(&i) => self.lines[i].push(line),
            None => {
                self.index.insert(key.to_string(), self.keys.len());
                self.keys.push(key.to_string());
                self.lines.push(vec![line]);
            }
        }
    }

    fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn into_groups(self) -> impl Iterator<Item = (String, Vec<String>)> {
        self.keys.into_iter().zip(self.lines)
    }

    /// Groups the lines of a reads file on the given column.
    pub fn from_file(path: &Path, key_column: usize) -> Result<Self> {
        let mut reads = KeyedReads::default();
        for (i, line) in open_tsv(path)?.lines().enumerate() {
            let line = line?;
            let key = TsvRecord::new(path, i + 1, &line)
                .field(key_column)?
                .to_string();
            reads.push(&key, line);
        }
        Ok(reads)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Getters)]
pub struct DrawReport {
    #[getset(get = "pub")]
    keys: usize,
    #[getset(get = "pub")]
    records_in: usize,
    #[getset(get = "pub")]
    records_out: usize,
}

fn to_usize(min_reads: u64) -> usize {
    usize::try_from(min_reads).unwrap_or(usize::MAX)
}

/// Writes a per-key subsample of `reads` to `out`.
/// Keys are visited in the order they were first seen in the reads file. A key with
/// more lines than its stored minimum is cut down to exactly that minimum with a
/// generator re-seeded from `seed`; any other key keeps all of its lines in order.
/// Every key's minimum is looked up before anything is written, so a key the scan
/// step never saw fails the draw without leaving partial output behind.
/// *Arguments*
/// - `reads`: the lines of one reads file, grouped by key.
/// - `seed`: seed applied before each key's draw.
/// - `store`: minimums written by the scan step of the same namespace.
/// - `out`: destination of the selected lines, each terminated by a newline.
/// *Returns*
/// - `Result<DrawReport>`: key count plus lines read and written, or
///   `MissingMinimum` for the first key without a stored minimum.
pub fn draw_keyed_subsample<S, W>(
    reads: KeyedReads,
    seed: u64,
    store: &S,
    out: &mut W,
) -> Result<DrawReport>
where
    S: MinCountStore,
    W: Write,
{
    let mut groups = Vec::with_capacity(reads.len());
    for (key, lines) in reads.into_groups() {
        let min_reads = store.fetch(&key)?;
        groups.push((lines, min_reads));
    }

    let mut report = DrawReport {
        keys: groups.len(),
        ..DrawReport::default()
    };

    for (lines, min_reads) in groups {
        report.records_in += lines.len();
        let selected = subsample(lines, to_usize(min_reads), seed);
        report.records_out += selected.len();
        for line in selected {
            writeln!(out, "{}", line)?;
        }
    }

    out.flush()?;
    Ok(report)
}

/// Subsamples a reads file gene by gene against the stored per-gene minimums.
pub fn draw_gene_subsample<S, W>(
    reads: &Path,
    key_column: usize,
    seed: u64,
    store: &S,
    out: &mut W,
) -> Result<DrawReport>
where
    S: MinCountStore,
    W: Write,
{
    let keyed = KeyedReads::from_file(reads, key_column)?;
    draw_keyed_subsample(keyed, seed, store, out)
}

/// Subsamples a whole reads file against the minimum stored for it by the scan step.
///
/// The file is looked up by its sample name, so a file that was not part of the
/// group's scan fails with `MissingMinimum` and nothing is written.
pub fn draw_group_subsample<S, W>(
    reads: &Path,
    seed: u64,
    store: &S,
    out: &mut W,
) -> Result<DrawReport>
where
    S: MinCountStore,
    W: Write,
{
    let min_reads = store.fetch(&sample_name(reads))?;
    let lines = read_lines(reads)?;
    let records_in = lines.len();

    let selected = subsample(lines, to_usize(min_reads), seed);
    for line in &selected {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    Ok(DrawReport {
        keys: 1,
        records_in,
        records_out: selected.len(),
    })
}
