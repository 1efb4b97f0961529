use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use bfx::{Interpreter, Strictness};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "bfx",
    version,
    about = "An extended Brainfuck interpreter with block comments and an xxd-style debug dump"
)]
struct Cli {
    /// Path to the script to execute
    script: PathBuf,

    /// Report cell overflow/underflow as errors instead of ignoring them
    #[arg(long)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let source = match fs::read_to_string(&cli.script) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("bfx: failed to read {}: {err}", cli.script.display());
            return 1;
        }
    };

    let mut interp = match Interpreter::new(&source) {
        Ok(interp) => interp,
        Err(err) => {
            eprintln!("bfx: {err}");
            return 1;
        }
    };
    if cli.strict {
        interp.set_strictness(Strictness::Strict);
    }

    let result = interp.run();
    let _ = io::stdout().flush();
    if let Err(err) = result {
        eprintln!("bfx: {err}");
        let _ = io::stderr().flush();
        return 1;
    }
    0
}
