// cspell:ignore ADQS
use anyhow::{bail, Context};
use clap::Parser;
use cli::bidding_utils::*;
use engine::{Evaluation, OpeningRules};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Pick a simplified opening bid for one or more bridge hands"
)]
struct Args {
    /// Encoded hands, two characters per card (e.g. ADQS4C3DJH9S3CQD3S7S5HKHJD)
    hands: Vec<String>,

    /// Number of random hands to deal and evaluate
    #[arg(short = 'n', long, default_value_t = 0)]
    random: usize,

    /// Random seed for reproducible deals (random if omitted, always printed)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Reject malformed hands instead of scoring them leniently
    #[arg(long)]
    strict: bool,

    /// Print evaluations as JSON
    #[arg(long)]
    json: bool,

    /// Show the decision table steps for every hand
    #[arg(short, long)]
    trace: bool,

    /// YAML file overriding the opening thresholds
    #[arg(long, env = "OPENING_RULES")]
    rules: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_rules(args: &Args) -> anyhow::Result<OpeningRules> {
    let Some(path) = &args.rules else {
        return Ok(OpeningRules::default());
    };
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules from {}", path.display()))?;
    let rules = OpeningRules::from_yaml_str(&yaml)
        .with_context(|| format!("Invalid rules in {}", path.display()))?;
    log::info!("using rules from {}: {:?}", path.display(), rules);
    Ok(rules)
}

fn collect_hands(args: &Args) -> Vec<String> {
    let mut hands = args.hands.clone();
    if args.random > 0 {
        let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
        eprintln!("Seed: {seed} | Hands: {}", args.random);
        let mut rng = StdRng::seed_from_u64(seed);
        hands.extend((0..args.random).map(|_| engine::random_encoded_hand(&mut rng)));
    }
    hands
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let rules = load_rules(&args)?;
    let hands = collect_hands(&args);
    if hands.is_empty() {
        bail!("Must provide at least one hand or --random <N>");
    }

    let mut evaluations: Vec<(usize, Evaluation)> = Vec::with_capacity(hands.len());
    let mut rejected = 0usize;
    for (i, hand) in hands.iter().enumerate() {
        let idx = i + 1;
        if args.strict {
            match engine::evaluate_strict_with_rules(hand, &rules) {
                Ok(eval) => evaluations.push((idx, eval)),
                Err(e) => {
                    eprintln!("{idx}: {hand}: {e}");
                    rejected += 1;
                }
            }
        } else {
            evaluations.push((idx, engine::evaluate_with_rules(hand, &rules)));
        }
    }

    if args.json {
        let reports: Vec<EvaluationReport> =
            evaluations.iter().map(|(_, eval)| eval.into()).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print!("{}", format_table_header());
        for (idx, eval) in &evaluations {
            println!("{}", format_evaluation_row(*idx, eval));
        }
        if args.trace {
            for (idx, eval) in &evaluations {
                print!("{}", format_full_trace(*idx, eval, &eval.trace(&rules)));
            }
        }
    }

    if rejected > 0 {
        bail!("{rejected} of {} hands rejected", hands.len());
    }
    Ok(())
}
