mod encoding;

use std::fs::File;
use std::io::{self, Write};

use clap::{App, Arg};

fn write_dimacs(mut out: impl Write) -> io::Result<()> {
    let clauses = encoding::build_clauses();
    writeln!(out, "c five houses logic puzzle")?;
    writeln!(out, "p cnf {} {}", encoding::NUM_VARS, clauses.len())?;
    for clause in &clauses {
        let line = clause.iter().map(|l| l.to_string()).collect::<Vec<_>>().join(" ");
        writeln!(out, "{} 0", line)?;
    }
    Ok(())
}

fn main() {
    let matches = App::new("puzzle-encoder")
        .version("1.0")
        .author("Alex&Korbi&Radek inc.")
        .about("Encodes the Einstein/Zebra five houses puzzle as DIMACS CNF")
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("Write to this file instead of stdout"),
        )
        .get_matches();

    let result = match matches.value_of("output") {
        Some(path) => File::create(path).and_then(write_dimacs),
        None => write_dimacs(io::stdout()),
    };

    if let Err(e) = result {
        eprintln!("puzzle-encoder: {}", e);
        std::process::exit(1);
    }
}
