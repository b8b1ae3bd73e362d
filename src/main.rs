use clap::Parser;
use rgb565a8_convert::convert;
use std::error::Error;
use std::path::PathBuf;
use std::process;
use tracing::level_filters::LevelFilter;

const USAGE: &str = "Usage: rgb565a8-convert <input.png> <output.h>";

#[derive(Debug, Parser)]
struct Args {
    file: PathBuf,
    out_file: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(LevelFilter::INFO).init();

    let Ok(args) = Args::try_parse() else {
        println!("{USAGE}");
        process::exit(1);
    };
    convert(&args.file, &args.out_file)?;
    Ok(())
}
