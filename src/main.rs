use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use traffic_scenic::{convert_file, ScenicAttributes, DEFAULT_MAP, DEFAULT_MODEL};

/// Converts a Refinery fact file into a Scenic scenario.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the fact file, e.g. `scenario.refinery`.
    input: PathBuf,
    /// Map asset referenced by the generated scenario.
    #[arg(long, default_value = DEFAULT_MAP)]
    map: String,
    /// Simulator model used by the generated scenario.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let attribs = ScenicAttributes {
        map: args.map,
        model: args.model,
        ..Default::default()
    };
    match convert_file(&args.input, &attribs) {
        Ok(output) => println!("Scenic code written to {}", output.display()),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
