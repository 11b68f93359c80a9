//! This is the command line tool that loads a recorded walk and decides if a
//! human or a computer generated it.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{value_parser, Arg, ArgAction, Command};
use walkclass::hist::RunHistogram;
use walkclass::{parse_steps, Classifier, FamilyVerdict, ModelConfig, Walk};
use walkclass::MAX_STEPS;

use std::io::Read;
use std::{fs, process};

fn fail(msg: String) -> ! {
    log::error!("{}", msg);
    process::exit(1);
}

fn read_input(path: &str) -> String {
    if path == "-" {
        let mut text = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut text) {
            fail(format!("Can't read the walk from stdin: {}", e));
        }
        return text;
    }
    fs::read_to_string(path).unwrap_or_else(|e| {
        fail(format!("Can't open the input file {}: {}", path, e))
    })
}

fn print_verdict(title: &str, verdict: &FamilyVerdict) {
    println!("{}", title);
    println!("  Log joint probability (human):    {:.6}", verdict.human_log_prob);
    println!(
        "  Log joint probability (computer): {:.6}",
        verdict.computer_log_prob
    );
    println!(
        "  Log-likelihood ratio:             {:.6}",
        verdict.log_likelihood_ratio
    );
    println!("  Decision: more likely a {}", verdict.decision);
}

fn main() {
    let matches = Command::new("CLI")
        .version("1.x")
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("FILE")
                .help("A JSON model to use instead of the built-in fit")
                .num_args(1),
        )
        .arg(
            Arg::new("dump-model")
                .long("dump-model")
                .help("Print the model description and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("histogram")
                .long("histogram")
                .help("Print the run-length histogram of the walk")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the classification result as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-steps")
                .long("max-steps")
                .value_name("N")
                .help("The maximum number of steps in the walk")
                .value_parser(value_parser!(usize))
                .num_args(1),
        )
        .arg(
            Arg::new("INPUT")
                .help("The walk to classify ('-' reads stdin)")
                .required_unless_present("dump-model")
                .index(1),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let config = match matches.get_one::<String>("model") {
        Some(path) => ModelConfig::load(path).unwrap_or_else(|e| {
            fail(format!("Can't load the model {}: {}", path, e))
        }),
        None => ModelConfig::default(),
    };

    if matches.get_flag("dump-model") {
        match config.to_json() {
            Ok(text) => println!("{}", text),
            Err(e) => fail(format!("Can't serialize the model: {}", e)),
        }
        return;
    }

    let classifier: Classifier = config
        .build()
        .unwrap_or_else(|e| fail(format!("Invalid model: {}", e)));

    let max_steps = matches
        .get_one::<usize>("max-steps")
        .copied()
        .unwrap_or(MAX_STEPS);
    let input_path = match matches.get_one::<String>("INPUT") {
        Some(path) => path,
        None => fail(String::from("No input walk")),
    };
    let steps = parse_steps(&read_input(input_path))
        .unwrap_or_else(|e| fail(format!("Can't parse the walk: {}", e)));

    let mut walk = Walk::with_capacity(max_steps);
    for step in steps {
        if let Err(e) = walk.push(step) {
            fail(format!("Can't record the walk: {}", e));
        }
    }
    log::info!(
        "Loaded a walk of {} steps, ending at position {}.",
        walk.len(),
        walk.position()
    );
    if !walk.is_complete() {
        log::info!("The walk is shorter than {} steps.", max_steps);
    }

    let analysis = walk
        .analyze(&classifier)
        .unwrap_or_else(|e| fail(format!("Classification failed: {}", e)));
    let result = analysis.result();

    if matches.get_flag("histogram") {
        RunHistogram::from_runs(walk.runs()).dump();
    }

    if matches.get_flag("json") {
        match serde_json::to_string_pretty(result) {
            Ok(text) => println!("{}", text),
            Err(e) => fail(format!("Can't serialize the result: {}", e)),
        }
        return;
    }

    print_verdict("Continuous model", &result.continuous);
    print_verdict("Discrete model", &result.discrete);
    if !result.out_of_range.is_empty() {
        println!(
            "Run lengths outside the bucket table: {:?}",
            result.out_of_range
        );
    }
}
