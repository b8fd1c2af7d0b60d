extern crate clap;

use std::io::{self, BufRead, BufReader, Read};
use std::process::exit;

use clap::{App, Arg};
use rayon::prelude::*;
use serde::Serialize;

use jumble::*;

#[derive(Serialize)]
struct SolveRecord<'a> {
    input: &'a str,
    matches: Vec<&'a str>,
}

fn output_matches_as_tsv(input: &str, matches: &[&str]) {
    print!("{}", input);
    for word in matches {
        print!("\t{}", word);
    }
    println!();
}

fn output_matches_as_json(input: &str, matches: Vec<&str>) {
    let record = SolveRecord { input, matches };
    println!(
        "{}",
        serde_json::to_string(&record).expect("serializing record")
    );
}

///Process queries from an input stream, one per line. The queries are independent and the model
///is immutable once loaded, so the batch is solved in parallel; output is emitted in input
///order. Invalid lines are reported on stderr and produce no output row, they do not abort the
///batch.
fn process(model: &JumbleModel, inputstream: impl Read, params: &SolveParams, json: bool) {
    let f_buffer = BufReader::new(inputstream);
    let lines: Vec<String> = f_buffer.lines().map_while(Result::ok).collect();
    let results: Vec<Result<Vec<&str>, InvalidInputError>> = lines
        .par_iter()
        .map(|line| model.solve_jumble_with(line, params))
        .collect();
    for (line, result) in lines.iter().zip(results) {
        match result {
            Ok(matches) => {
                if json {
                    output_matches_as_json(line, matches);
                } else {
                    output_matches_as_tsv(line, &matches);
                }
            }
            Err(err) => eprintln!("WARNING: skipping {:?}: {}", line, err),
        }
    }
}

fn main() {
    let args = App::new("Jumble")
        .version("0.1")
        .about("Finds all dictionary words whose letters are all present in the given input")
        .arg(
            Arg::with_name("wordlist")
                .long("wordlist")
                .short("w")
                .help("Wordlist file against which all matches are made, one word per line")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .short("j")
                .help("Output matches as JSON records, one per line"),
        )
        .arg(
            Arg::with_name("no-self-match")
                .long("no-self-match")
                .help("Exclude the dictionary word that is identical to the input itself"),
        )
        .arg(
            Arg::with_name("hash-max-len")
                .long("hash-max-len")
                .help("Inputs shorter than this use the prime fingerprint strategy, longer ones the histogram strategy")
                .takes_value(true)
                .default_value("120"),
        )
        .arg(
            Arg::with_name("debug")
                .long("debug")
                .short("D")
                .help("Debug output to stderr"),
        )
        .arg(
            Arg::with_name("input")
                .help("Input letters; if not provided, queries are read from stdin, one per line")
                .takes_value(true),
        )
        .get_matches();

    let mut model = JumbleModel::new();
    model.debug = args.is_present("debug");
    eprintln!("Loading wordlist...");
    if let Err(err) = model.read_wordlist(args.value_of("wordlist").unwrap()) {
        eprintln!("ERROR: {}", err);
        exit(1);
    }
    eprintln!(" - Loaded {} words", model.len());

    let hash_max_len: usize = args
        .value_of("hash-max-len")
        .unwrap()
        .parse()
        .expect("hash-max-len should be an integer");
    let params = SolveParams::default()
        .with_self_match(!args.is_present("no-self-match"))
        .with_hash_max_len(hash_max_len);

    if let Some(input) = args.value_of("input") {
        match model.solve_jumble_with(input, &params) {
            Ok(matches) => {
                if args.is_present("json") {
                    output_matches_as_json(input, matches);
                } else {
                    for word in matches {
                        println!("{}", word);
                    }
                }
            }
            Err(err) => {
                eprintln!("ERROR: {}", err);
                exit(2);
            }
        }
    } else {
        process(&model, io::stdin(), &params, args.is_present("json"));
    }
}
