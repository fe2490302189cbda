use std::io::Write;
use std::path::{Path, PathBuf};

use getset::Getters;

use crate::helper::draw::{DrawReport, draw_gene_subsample, draw_group_subsample};
use crate::helper::error::Result;
use crate::helper::io::append_writer;
use crate::helper::namespace::Namespace;
use crate::helper::params::SubsampleParams;
use crate::helper::scan::{scan_gene_minimums, scan_group_minimum};
use crate::helper::subsample_dict::{MinCountStore, clear_directory};
use crate::helper::summary::SummaryWriter;
use crate::helper::utils::log_line;

#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ScanReport {
    #[getset(get = "pub")]
    dict_name: String,
    #[getset(get = "pub")]
    minimums: Vec<(String, u64)>,
}

fn mode_label(namespace: &Namespace) -> &'static str {
    if namespace.is_gene_mode() {
        "per gene"
    } else {
        "per file"
    }
}

/// Scan step: computes the group minimums and persists them for the draw step.
///
/// The namespace dictionary is cleared first, so rerunning a scan replaces the
/// results of the previous run. Summary lines are appended to `summary_path`.
pub fn run_scan<L: Write>(
    inputs: &[PathBuf],
    summary_path: &Path,
    namespace: &Namespace,
    dict_dir: &Path,
    params: &SubsampleParams,
    logger: &mut L,
) -> Result<ScanReport> {
    log_line(logger, &format!("Starting scan for {}", namespace))?;
    log_line(logger, &format!("Mode: {}", mode_label(namespace)))?;
    log_line(logger, &format!("Input files: {}", inputs.len()))?;
    for input in inputs {
        log_line(logger, &format!("Input file: {}", input.display()))?;
    }

    // the scan functions clear the dictionary once the input list is known to be usable
    let mut dict = namespace.open(dict_dir)?;
    log_line(
        logger,
        &format!("Writing dictionary {}", dict.path().display()),
    )?;

    let mut summary = SummaryWriter::new(append_writer(summary_path)?);

    let minimums = match namespace {
        Namespace::Gene { group, .. } => {
            scan_gene_minimums(inputs, group, params, &mut dict, &mut summary)?
        }
        Namespace::Group { group } => {
            let (file_counts, min_reads) =
                scan_group_minimum(inputs, group, &mut dict, &mut summary)?;
            log_line(logger, &format!("Group minimum: {} reads", min_reads))?;
            for (sample, n) in &file_counts {
                log_line(logger, &format!("{}: {} reads", sample, n))?;
            }
            file_counts
                .into_iter()
                .map(|(sample, _)| (sample, min_reads))
                .collect()
        }
    };

    log_line(
        logger,
        &format!(
            "Stored {} minimum(s) in {}, summary appended to {}",
            dict.len(),
            dict.name(),
            summary_path.display()
        ),
    )?;

    Ok(ScanReport {
        dict_name: dict.name().to_string(),
        minimums,
    })
}

/// Draw step: appends the subsample of one reads file to `output_path`.
///
/// Reads the minimums persisted by the scan step of the same namespace and never
/// modifies them.
pub fn run_draw<L: Write>(
    reads: &Path,
    output_path: &Path,
    namespace: &Namespace,
    dict_dir: &Path,
    params: &SubsampleParams,
    logger: &mut L,
) -> Result<DrawReport> {
    log_line(
        logger,
        &format!("Starting draw of {} for {}", reads.display(), namespace),
    )?;

    log_line(logger, &format!("Mode: {}", mode_label(namespace)))?;

    let dict = namespace.open(dict_dir)?;
    log_line(
        logger,
        &format!("Loaded {} minimum(s) from {}", dict.len(), dict.name()),
    )?;

    let mut out = append_writer(output_path)?;
    let report = match namespace {
        Namespace::Gene { .. } => {
            draw_gene_subsample(reads, params.key_column, params.seed, &dict, &mut out)?
        }
        Namespace::Group { .. } => draw_group_subsample(reads, params.seed, &dict, &mut out)?,
    };

    log_line(
        logger,
        &format!(
            "Kept {} of {} reads across {} key(s), appended to {}",
            report.records_out(),
            report.records_in(),
            report.keys(),
            output_path.display()
        ),
    )?;

    Ok(report)
}

/// Empties a namespace dictionary. With `purge` every file in the namespace
/// directory goes too.
pub fn run_clear(namespace: &Namespace, dict_dir: &Path, purge: bool) -> Result<()> {
    if purge {
        clear_directory(&namespace.dict_dir(dict_dir))?;
    } else {
        namespace.open_cleared(dict_dir)?;
    }
    Ok(())
}

/// Writes `key<TAB>minimum` for every stored entry, sorted by key.
pub fn run_dump<W: Write>(namespace: &Namespace, dict_dir: &Path, out: &mut W) -> Result<usize> {
    let dict = namespace.open(dict_dir)?;
    let entries = dict.entries();
    for (key, value) in &entries {
        writeln!(out, "{}\t{}", key, value)?;
    }
    out.flush()?;
    Ok(entries.len())
}
