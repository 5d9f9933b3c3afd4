mod config;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::error;

use solver::{heuristic_by_name, Literal, Outcome, Solver, SolverError, Statistics, VarId};

use config::Input;

fn collect_inputs(input: &Input) -> Result<Vec<PathBuf>, SolverError> {
    match input {
        Input::File(path) => Ok(vec![PathBuf::from(path)]),
        Input::Dir(dir) => {
            let entries = fs::read_dir(dir)
                .map_err(|e| SolverError::FileFormat(format!("cannot read directory {}: {}", dir, e)))?;
            let mut files: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| path.extension().map_or(false, |ext| ext == "cnf"))
                .collect();
            files.sort();
            Ok(files)
        }
    }
}

fn solve_file(path: &Path, heuristic_name: &str, statistics: bool, profile: bool) -> Result<(), SolverError> {
    let source = fs::read_to_string(path)
        .map_err(|e| SolverError::FileFormat(format!("cannot read {}: {}", path.display(), e)))?;
    let (_num_vars, clauses) = solver::dimacs::parse(&source)?;
    let variables: solver::util::HashSet<VarId> = clauses.iter().flat_map(|c| c.vars()).collect();
    let mut all_vars: Vec<VarId> = variables.iter().copied().collect();
    all_vars.sort_unstable();

    let profile_start = if profile { Some(Instant::now()) } else { None };
    let mut stats = if statistics { Some(Statistics::new()) } else { None };

    let heuristic = heuristic_by_name(heuristic_name)?;
    let mut solver = Solver::new(variables, clauses, heuristic);
    let outcome = solver.solve(stats.as_mut())?;

    print!("{}: ", path.display());
    match outcome {
        Outcome::Sat(assignment) => {
            println!("SAT");
            let listing = all_vars
                .iter()
                .filter(|v| assignment.value(Literal::pos(**v)) == Some(true))
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("{}", listing);
        }
        Outcome::Unsat => println!("UNSAT"),
    }

    if let Some(s) = stats {
        println!("{}", s);
    }
    if let Some(start) = profile_start {
        println!("profiled wall time: {:.4}s", start.elapsed().as_secs_f64());
    }

    Ok(())
}

fn main() {
    let config = match config::parse_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    env_logger::Builder::new().filter_level(config.log_level).init();

    let inputs = match collect_inputs(&config.input) {
        Ok(inputs) => inputs,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut had_error = false;
    for path in inputs {
        if let Err(e) = solve_file(&path, &config.heuristic, config.statistics, config.profile) {
            error!("{}: {}", path.display(), e);
            had_error = true;
        }
    }

    if had_error {
        std::process::exit(1);
    }
}
