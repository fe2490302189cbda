use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use seq_subsample::cli::{Args, Commands, NamespaceArgs};
use seq_subsample::helper::io::append_writer;
use seq_subsample::helper::{Result, SubsampleParams};
use seq_subsample::pipelines::{run_clear, run_draw, run_dump, run_scan};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn log_path(log: Option<&str>, namespace: &NamespaceArgs) -> Result<PathBuf> {
    match log {
        Some(path) => Ok(PathBuf::from(path)),
        None => {
            let dir = namespace.namespace().dict_dir(Path::new(&namespace.dict_dir));
            fs::create_dir_all(&dir)?;
            Ok(dir.join("subsample_log.txt"))
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Scan {
            input,
            output,
            namespace,
            param,
            log,
        } => {
            let ns = namespace.namespace();
            println!("Running scan for {} with {} input file(s)", ns, input.len());
            let params = SubsampleParams::load(param.as_deref().map(Path::new))?;
            let mut logger = append_writer(&log_path(log.as_deref(), &namespace)?)?;
            let inputs: Vec<PathBuf> = input.iter().map(PathBuf::from).collect();

            let report = run_scan(
                &inputs,
                Path::new(&output),
                &ns,
                Path::new(&namespace.dict_dir),
                &params,
                &mut logger,
            )?;
            println!(
                "Stored {} minimum(s) in {}",
                report.minimums().len(),
                report.dict_name()
            );
        }
        Commands::Draw {
            input,
            output,
            namespace,
            param,
            log,
        } => {
            let ns = namespace.namespace();
            println!("Running draw of {} for {}", input, ns);
            let params = SubsampleParams::load(param.as_deref().map(Path::new))?;
            let mut logger = append_writer(&log_path(log.as_deref(), &namespace)?)?;

            let report = run_draw(
                Path::new(&input),
                Path::new(&output),
                &ns,
                Path::new(&namespace.dict_dir),
                &params,
                &mut logger,
            )?;
            println!(
                "Kept {} of {} reads",
                report.records_out(),
                report.records_in()
            );
        }
        Commands::Clear { namespace, purge } => {
            let ns = namespace.namespace();
            run_clear(&ns, Path::new(&namespace.dict_dir), purge)?;
            println!("Cleared {}", ns.dict_name());
        }
        Commands::Dump { namespace } => {
            let ns = namespace.namespace();
            let stdout = io::stdout();
            run_dump(&ns, Path::new(&namespace.dict_dir), &mut stdout.lock())?;
        }
    }
    Ok(())
}
