use clap::{App, Arg};

pub struct Config {
    pub input: String,
    pub plot: Option<String>,
}

pub fn make_config() -> Config {
    let matches = App::new("solver benchmarking")
        .version("1.0")
        .author("Alex&Korbi&Radek inc.")
        .about("Racing pit for branching heuristics")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .required(true)
                .help("Directory of .cnf testing cases"),
        )
        .arg(
            Arg::with_name("plot")
                .short("p")
                .long("plot")
                .takes_value(true)
                .help("Write a decisions/heuristic PNG plot to this path"),
        )
        .get_matches();

    Config {
        input: matches.value_of("input").map(String::from).unwrap(),
        plot: matches.value_of("plot").map(String::from),
    }
}
