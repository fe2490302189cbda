use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::helper::error::{Result, SubsampleError};
use crate::helper::io::{open_tsv, sample_name};
use crate::helper::params::SubsampleParams;
use crate::helper::record::TsvRecord;
use crate::helper::subsample_dict::MinCountStore;
use crate::helper::summary::{FILTERED_READS, SAMPLED_READS, SummaryWriter};
use crate::helper::utils::uniq_in_order;

/// Genes of one file in first-seen order, with the count of their first record.
struct GeneCounts {
    genes: Vec<String>,
    counts: HashMap<String, u64>,
}

fn read_gene_counts(path: &Path, params: &SubsampleParams) -> Result<GeneCounts> {
    let mut genes = Vec::new();
    let mut counts = HashMap::new();

    for (i, line) in open_tsv(path)?.lines().enumerate() {
        let line = line?;
        let record = TsvRecord::new(path, i + 1, &line);
        let gene = record.field(params.key_column)?;
        let count = record.count(params.count_column)?;
        if !counts.contains_key(gene) {
            counts.insert(gene.to_string(), count);
            genes.push(gene.to_string());
        }
    }

    Ok(GeneCounts { genes, counts })
}

fn count_records(path: &Path) -> Result<u64> {
    let mut n = 0;
    for line in open_tsv(path)?.lines() {
        line?;
        n += 1;
    }
    Ok(n)
}

/// Per-gene minimum counts across the files of a group.
/// The genes considered are the ones in the first file; every file of a group is
/// expected to list the same genes. A gene missing from another file counts as zero
/// there, and a gene listed more than once uses the count of its first record.
/// The store is cleared before the first minimum is written, and one
/// `Sampled reads` summary line is written per gene.
/// *Arguments*
/// - `inputs`: reads files of the group, the first one defining the gene universe.
/// - `group`: group name written in the summary lines.
/// - `params`: key and count columns.
/// - `store`: dictionary receiving `gene -> minimum`.
/// - `summary`: destination of the summary lines.
/// *Returns*
/// - `Result<Vec<(String, u64)>>`: each gene with its stored minimum in first-seen
///   order, or `EmptyGroup` when `inputs` is empty (the store is left untouched).
pub fn scan_gene_minimums<S, W>(
    inputs: &[PathBuf],
    group: &str,
    params: &SubsampleParams,
    store: &mut S,
    summary: &mut SummaryWriter<W>,
) -> Result<Vec<(String, u64)>>
where
    S: MinCountStore,
    W: Write,
{
    let (first, rest) = inputs
        .split_first()
        .ok_or_else(|| SubsampleError::EmptyGroup(group.to_string()))?;

    store.clear()?;

    let first_counts = read_gene_counts(first, params)?;
    let mut per_file = vec![first_counts.counts];
    for path in rest {
        per_file.push(read_gene_counts(path, params)?.counts);
    }

    let genes = uniq_in_order(first_counts.genes);
    let mut minimums = Vec::with_capacity(genes.len());

    for gene in genes {
        let min_reads = per_file
            .iter()
            .map(|counts| counts.get(&gene).copied().unwrap_or(0))
            .min()
            .unwrap_or(0);

        store.store(&gene, min_reads)?;
        summary.write_line(group, &gene, SAMPLED_READS, min_reads)?;
        minimums.push((gene, min_reads));
    }

    summary.flush()?;
    Ok(minimums)
}

/// Minimum record count across the files of a group.
///
/// The minimum is stored once per file, keyed by the file's sample name, so only
/// files that took part in the scan can be drawn later. Writes a `Filtered reads`
/// and a `Sampled reads` line for every file. Returns the record count of each file
/// keyed by sample name, and the minimum.
pub fn scan_group_minimum<S, W>(
    inputs: &[PathBuf],
    group: &str,
    store: &mut S,
    summary: &mut SummaryWriter<W>,
) -> Result<(Vec<(String, u64)>, u64)>
where
    S: MinCountStore,
    W: Write,
{
    if inputs.is_empty() {
        return Err(SubsampleError::EmptyGroup(group.to_string()));
    }

    store.clear()?;

    let mut file_counts = Vec::with_capacity(inputs.len());
    for path in inputs {
        file_counts.push((sample_name(path), count_records(path)?));
    }

    let min_reads = file_counts.iter().map(|(_, n)| *n).min().unwrap_or(0);

    for (sample, n) in &file_counts {
        store.store(sample, min_reads)?;
        summary.write_line(group, sample, FILTERED_READS, *n)?;
        summary.write_line(group, sample, SAMPLED_READS, min_reads)?;
    }

    summary.flush()?;
    Ok((file_counts, min_reads))
}
