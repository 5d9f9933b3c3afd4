use clap::{App, Arg};
use log::LevelFilter;
use solver::SolverError;

#[derive(Debug, Clone)]
pub enum Input {
    File(String),
    Dir(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input: Input,
    pub log_level: LevelFilter,
    pub heuristic: String,
    pub statistics: bool,
    pub profile: bool,
}

fn parse_log_level(name: &str) -> Result<LevelFilter, SolverError> {
    match name {
        "NONE" => Ok(LevelFilter::Off),
        "ERROR" => Ok(LevelFilter::Error),
        "INFO" => Ok(LevelFilter::Info),
        "DEBUG" => Ok(LevelFilter::Debug),
        "TRACE" => Ok(LevelFilter::Trace),
        other => Err(SolverError::ArgumentFormat(format!("unknown log level {}", other))),
    }
}

pub fn parse_args() -> Result<Config, SolverError> {
    let matches = App::new("solver-cli")
        .version("1.0")
        .author("Alex&Korbi&Radek inc.")
        .about("Solves DIMACS CNF instances with a CDCL solver")
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .takes_value(true)
                .conflicts_with("dir")
                .help("A single DIMACS CNF file"),
        )
        .arg(
            Arg::with_name("dir")
                .short("d")
                .long("dir")
                .takes_value(true)
                .conflicts_with("file")
                .help("A directory of .cnf files"),
        )
        .arg(
            Arg::with_name("log")
                .short("l")
                .long("log")
                .takes_value(true)
                .default_value("NONE")
                .possible_values(&["INFO", "DEBUG", "TRACE", "ERROR", "NONE"])
                .help("Log verbosity"),
        )
        .arg(
            Arg::with_name("branching")
                .short("b")
                .long("branching")
                .takes_value(true)
                .default_value("DEFAULT")
                .possible_values(&["DEFAULT", "DLIS", "RDLIS", "JWOS", "JWTS", "MOMS"])
                .help("Branching heuristic"),
        )
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .takes_value(false)
                .help("Emit decision count and elapsed time"),
        )
        .arg(
            Arg::with_name("profile")
                .short("p")
                .long("profile")
                .takes_value(false)
                .help("Enable coarse wall-clock profiling"),
        )
        .get_matches();

    let input = match (matches.value_of("file"), matches.value_of("dir")) {
        (Some(f), None) => Input::File(f.to_string()),
        (None, Some(d)) => Input::Dir(d.to_string()),
        (None, None) => return Err(SolverError::ArgumentFormat("exactly one of -f or -d is required".to_string())),
        (Some(_), Some(_)) => unreachable!("clap enforces conflicts_with"),
    };

    let log_level = parse_log_level(matches.value_of("log").unwrap())?;

    Ok(Config {
        input,
        log_level,
        heuristic: matches.value_of("branching").unwrap().to_string(),
        statistics: matches.is_present("stats"),
        profile: matches.is_present("profile"),
    })
}
