use clap::Parser;
use assetfill::{run, Args};

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    run(&args)?;

    Ok(())
}
