use clap::builder::styling::{AnsiColor, Color};
use clap::builder::styling::{Style, Styles};
use clap::{Args as ClapArgs, ColorChoice, Parser, Subcommand};

use crate::helper::namespace::Namespace;

pub const ABOUT: &str =
    "\x1b[1;91mGroup-wise minimum-count read subsampling for sequencing pipelines\x1b[0m";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "subsample",
    version = env!("CARGO_PKG_VERSION"),
    about = ABOUT,
    color = ColorChoice::Always,
    styles = get_styles(),
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Identifies the subsample dictionary shared by the scan and draw steps.
#[derive(ClapArgs, Debug, Clone)]
pub struct NamespaceArgs {
    /// Subsampling group name
    #[arg(short, long)]
    pub group: String,

    /// Sub-region; when given, reads are subsampled per gene
    #[arg(short = 'r', long)]
    pub sub_region: Option<String>,

    /// Base directory holding the subsample dictionaries
    #[arg(short, long)]
    pub dict_dir: String,
}

impl NamespaceArgs {
    pub fn namespace(&self) -> Namespace {
        Namespace::new(&self.group, self.sub_region.as_deref())
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute minimum read counts across the files of a group and store them
    #[command(alias = "s")]
    Scan {
        /// Reads files of the group (tab-delimited, gzip compressed)
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<String>,

        /// Summary file, appended to
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        namespace: NamespaceArgs,

        /// JSON param file (seed, key_column, count_column)
        #[arg(short, long)]
        param: Option<String>,

        /// Run log path, defaults to subsample_log.txt in the dictionary directory
        #[arg(long)]
        log: Option<String>,
    },

    /// Subsample one reads file down to the stored group minimums
    #[command(alias = "d")]
    Draw {
        /// Reads file (tab-delimited, gzip compressed)
        #[arg(short, long)]
        input: String,

        /// Output file, appended to
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        namespace: NamespaceArgs,

        /// JSON param file (seed, key_column, count_column)
        #[arg(short, long)]
        param: Option<String>,

        /// Run log path, defaults to subsample_log.txt in the dictionary directory
        #[arg(long)]
        log: Option<String>,
    },

    /// Remove stored minimums of a namespace
    Clear {
        #[command(flatten)]
        namespace: NamespaceArgs,

        /// Delete every file in the namespace directory
        #[arg(long, default_value_t = false)]
        purge: bool,
    },

    /// Print stored minimums of a namespace
    Dump {
        #[command(flatten)]
        namespace: NamespaceArgs,
    },
}

pub fn get_styles() -> Styles {
    let yellow = Some(Color::Ansi(AnsiColor::Yellow));
    let green = Some(Color::Ansi(AnsiColor::Green));
    let red = Some(Color::Ansi(AnsiColor::Red));

    Styles::styled()
        .usage(Style::new().bold().underline().fg_color(yellow))
        .header(Style::new().bold().underline().fg_color(yellow))
        .literal(Style::new().fg_color(green))
        .invalid(Style::new().bold().fg_color(red))
        .error(Style::new().bold().fg_color(red))
        .valid(Style::new().bold().underline().fg_color(green))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gene_scan() {
        let args = Args::try_parse_from([
            "subsample", "scan", "-i", "s1.bed.gz", "s2.bed.gz", "-o", "summary.tsv", "-g", "A",
            "-r", "exon", "-d", "dicts",
        ])
        .unwrap();

        match args.command {
            Commands::Scan {
                input, namespace, ..
            } => {
                assert_eq!(input, vec!["s1.bed.gz", "s2.bed.gz"]);
                assert_eq!(namespace.namespace().dict_name(), "GENE_SUB_DICT_A_exon");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_group_draw() {
        let args = Args::try_parse_from([
            "subsample", "d", "-i", "S1.bed.gz", "-o", "out.tmp", "-g", "A", "-d", "dicts",
        ])
        .unwrap();

        match args.command {
            Commands::Draw { namespace, .. } => {
                assert!(!namespace.namespace().is_gene_mode());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_scan_needs_input() {
        let result = Args::try_parse_from([
            "subsample", "scan", "-o", "summary.tsv", "-g", "A", "-d", "dicts",
        ]);
        assert!(result.is_err());
    }
}
