//! Command-line dot routing demo.
//!
//! Run: cargo run --bin dotroute -- --dots 10 --seed 7 --walk 3,1,4,2,0

use clap::Parser;
use dotroute_demos::{Args, init_logging, render, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging();

    let report = run(&args)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render(&report));
    }
    Ok(())
}
