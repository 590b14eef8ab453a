use std::fs;

use clap::Parser;
use listkit::{evaluate, interpreter::evaluator::core::Context};

/// listkit evaluates list and number-theory builtins such as
/// `Riffle[{1, 2, 3}, {10}]` and prints the results.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells listkit to read expressions from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Seeds the random generator so `Shuffle` and `RandomChoice` are
    /// reproducible.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Logs every builtin dispatch.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut context = args.seed.map_or_else(Context::new, Context::with_seed);

    match evaluate(&source, &mut context) {
        Ok(values) => {
            for value in values {
                println!("{value}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
