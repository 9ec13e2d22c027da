use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use kicad_pinout::{render, Netlist, PinFilter, PinType};

#[derive(Parser)]
#[command(name = "kicad-pinout")]
#[command(about = "Write the pinout of one component of a KiCad 9 project as CSV", long_about = None)]
#[command(version)]
struct Cli {
    /// KiCad project folder containing a `.net` netlist
    #[arg(value_hint = clap::ValueHint::DirPath)]
    project: PathBuf,

    /// Directory the CSV is written to, created if missing
    #[arg(value_hint = clap::ValueHint::DirPath)]
    output_dir: PathBuf,

    /// Reference designator of the component, e.g. U1
    refdes: String,

    /// Pin type to leave out (repeatable); replaces the default of
    /// power_in, power_out and no_connect
    #[arg(short, long = "exclude", value_name = "PINTYPE")]
    exclude: Vec<PinType>,

    /// Keep pins of every type
    #[arg(long, conflicts_with = "exclude")]
    keep_all: bool,
}

impl Cli {
    fn filter(&self) -> PinFilter {
        if self.keep_all {
            PinFilter::none()
        } else if self.exclude.is_empty() {
            PinFilter::default()
        } else {
            PinFilter::new(self.exclude.iter().copied())
        }
    }
}

/// The first `.net` file of the project folder, by name
fn find_netlist(project: &Path) -> anyhow::Result<PathBuf> {
    if !project.is_dir() {
        bail!(
            "Invalid path: '{}'. Specify a KiCad project folder containing a netlist.",
            project.display()
        );
    }
    let mut netlists: Vec<PathBuf> = fs::read_dir(project)
        .with_context(|| format!("Cannot read '{}'", project.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "net"))
        .collect();
    netlists.sort();
    if netlists.len() > 1 {
        log::warn!(
            "{} netlists found in '{}', using the first",
            netlists.len(),
            project.display()
        );
    }
    netlists.into_iter().next().with_context(|| {
        format!(
            "Invalid path: '{}'. Please verify the directory contains valid KiCad netlist files.",
            project.display()
        )
    })
}

fn run(cli: &Cli) -> anyhow::Result<PathBuf> {
    let netlist_path = find_netlist(&cli.project)?;
    fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!(
            "Permission denied: '{}'. Choose a directory with write permissions.",
            cli.output_dir.display()
        )
    })?;

    println!("Parsing netlist: {}", netlist_path.display());
    let input = fs::read_to_string(&netlist_path)
        .with_context(|| format!("Missing netlist file '{}'", netlist_path.display()))?;
    let netlist = Netlist::parse(&input)
        .with_context(|| format!("Error parsing '{}'", netlist_path.display()))?;
    let title = netlist.title();

    let filter = cli.filter();
    log::info!(
        "excluding pin types: [{}]",
        filter
            .excluded()
            .map(|typ| typ.tag())
            .collect::<Vec<_>>()
            .join(", ")
    );

    println!("Locating component: {}", cli.refdes);
    let comp = netlist.find_component(&cli.refdes, &filter)?;

    println!("Generating pinout for {}...", cli.refdes);
    let path = cli
        .output_dir
        .join(render::pinout_file_name(title, comp.ref_des.0));
    let file = File::create(&path)
        .with_context(|| format!("Error writing to file '{}'", path.display()))?;
    let generated_on = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    render::write_pinout(BufWriter::new(file), &comp, title, &generated_on)
        .with_context(|| format!("Error writing to file '{}'", path.display()))?;
    Ok(path)
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    match run(&cli) {
        Ok(path) => println!(
            "Successfully generated pinout for {} at {}",
            cli.refdes,
            path.display()
        ),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}
