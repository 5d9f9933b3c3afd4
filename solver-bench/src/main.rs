mod config;
mod plotting;

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use solver::{heuristic_by_name, Outcome, Solver, Statistics, VarId};

const HEURISTICS: &[&str] = &["DEFAULT", "DLIS", "RDLIS", "JWOS", "JWTS", "MOMS"];

fn cnf_files(dir: &str) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|e| panic!("cannot read directory {}: {}", dir, e));
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "cnf"))
        .collect();
    files.sort();
    files
}

fn run_one(path: &PathBuf, heuristic_name: &str) -> Option<(usize, f64)> {
    let source = fs::read_to_string(path).ok()?;
    let (_num_vars, clauses) = solver::dimacs::parse(&source).ok()?;
    let variables: solver::util::HashSet<VarId> = clauses.iter().flat_map(|c| c.vars()).collect();
    let heuristic = heuristic_by_name(heuristic_name).ok()?;
    let mut stats = Statistics::new();
    let start = Instant::now();
    let mut solver = Solver::new(variables, clauses, heuristic);
    let outcome = solver.solve(Some(&mut stats)).ok()?;
    let elapsed = start.elapsed().as_secs_f64();
    match outcome {
        Outcome::Sat(_) | Outcome::Unsat => Some((stats.decisions, elapsed)),
    }
}

fn main() {
    let config = config::make_config();
    let files = cnf_files(&config.input);

    if files.is_empty() {
        eprintln!("no .cnf files found in {}", config.input);
        std::process::exit(1);
    }

    let mut decisions: HashMap<String, Vec<usize>> = HashMap::new();
    let mut wall_times: HashMap<String, Vec<f64>> = HashMap::new();

    for heuristic_name in HEURISTICS {
        let mut ds = Vec::new();
        let mut ts = Vec::new();
        for path in &files {
            match run_one(path, heuristic_name) {
                Some((d, t)) => {
                    ds.push(d);
                    ts.push(t);
                }
                None => eprintln!("{}: failed to solve with {}", path.display(), heuristic_name),
            }
        }
        println!(
            "{:<8} instances={:<5} total_decisions={:<8} total_time={:.4}s",
            heuristic_name,
            ds.len(),
            ds.iter().sum::<usize>(),
            ts.iter().sum::<f64>(),
        );
        decisions.insert(heuristic_name.to_string(), ds);
        wall_times.insert(heuristic_name.to_string(), ts);
    }

    if let Some(plot_path) = &config.plot {
        if let Err(e) = plotting::plot_decisions(decisions, plot_path, (1024, 768)) {
            eprintln!("failed to write plot: {}", e);
            std::process::exit(1);
        }
    }
}
