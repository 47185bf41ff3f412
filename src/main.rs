use std::io;

use clap::Parser;
use little_quiz::QuizOptions;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the question order and feedback, for a repeatable game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Ask only this many questions
    #[arg(short, long)]
    limit: Option<usize>,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => {
            info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let options = QuizOptions { limit: args.limit };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    if let Err(e) = little_quiz::run_quiz(None, options, &mut input, &mut output, &mut rng) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
