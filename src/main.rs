use std::error::Error;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::PathBuf;
use std::process::exit;

use structopt::StructOpt;

use point_components::{load_registry, Loaded, MalformedPolicy};

/// Groups 2D integer points into connected components. Each input
/// line carries one record: four runs of digits read as `x1 y1 x2 y2`,
/// asserting that (x1, y1) and (x2, y2) belong to the same group. The
/// final groups are printed one per line.
#[derive(StructOpt, Debug)]
struct Opt {
    /// Input file; reads stdin if omitted
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Skip lines that fail to parse instead of aborting on the first
    #[structopt(long)]
    skip_malformed: bool,
}

fn load(opt: &Opt, policy: MalformedPolicy) -> Result<Loaded, Box<dyn Error>> {
    let loaded = match &opt.input {
        Some(path) => {
            let file = File::open(path)?;
            load_registry(io::BufReader::new(file), policy)?
        }
        None => {
            let stdin = io::stdin();
            load_registry(stdin.lock(), policy)?
        }
    };

    Ok(loaded)
}

fn main() {
    let opt = Opt::from_args();

    let policy = if opt.skip_malformed {
        MalformedPolicy::Skip
    } else {
        MalformedPolicy::Abort
    };

    let loaded = match load(&opt, policy) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("error: {}", err);
            exit(1);
        }
    };

    if loaded.skipped > 0 {
        eprintln!("# skipped lines: {}", loaded.skipped);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for group in loaded.registry.groups() {
        let points: Vec<String> = group.iter().map(|p| p.to_string()).collect();
        // stdout closing early, e.g. piping into head, is not an error
        if writeln!(out, "{}", points.join(" ")).is_err() {
            break;
        }
    }
}
