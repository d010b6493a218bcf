use std::env;

use crate::assignment::assign_teams;
use crate::assignment::registry::AlgorithmCatalog;
use crate::data::directory::{load_player_directory, DEFAULT_DIRECTORY_PATH};
use crate::data::plan::{load_event_plan, DEFAULT_GAME_ID, DEFAULT_PLAN_PATH};
use crate::data::validate::{validate_player_directory, ValidationSeverity};
use crate::export::assignment_csv_string;
use crate::server;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Assign,
    Algorithms,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("assign") => Some(Command::Assign),
        Some("algorithms") => Some(Command::Algorithms),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Assign) => handle_assign(args),
        Some(Command::Algorithms) => handle_algorithms(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("usage: rallypoint <serve|assign|algorithms|validate>");
            2
        }
    }
}

fn handle_serve() -> i32 {
    let bind_addr = env::var("RALLYPOINT_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    match server::run_server(&bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

/// `assign [players.json] [plan.json] [--csv]`; paths default to the data/ files.
fn handle_assign(args: &[String]) -> i32 {
    let positional: Vec<&str> = args
        .iter()
        .skip(2)
        .map(String::as_str)
        .filter(|arg| !arg.starts_with("--"))
        .collect();
    let as_csv = args.iter().any(|arg| arg == "--csv");
    if positional.len() > 2 {
        eprintln!("usage: rallypoint assign [players.json] [plan.json] [--csv]");
        return 2;
    }
    let directory_path = positional.first().copied().unwrap_or(DEFAULT_DIRECTORY_PATH);
    let plan_path = positional.get(1).copied().unwrap_or(DEFAULT_PLAN_PATH);

    let directory = match load_player_directory(directory_path) {
        Ok(directory) => directory,
        Err(err) => {
            eprintln!("assign failed: {err}");
            return 1;
        }
    };
    let plan = match load_event_plan(plan_path) {
        Ok(plan) => plan,
        Err(err) => {
            eprintln!("assign failed: {err}");
            return 1;
        }
    };

    let catalog = AlgorithmCatalog::standard();
    let outcome = match assign_teams(&catalog, &plan.request(&directory)) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("assign failed: {err}");
            return 1;
        }
    };
    for name in &outcome.dropped_selections {
        eprintln!("warning: selection '{name}' is not in the player directory; skipped");
    }

    let rendered = if as_csv {
        assignment_csv_string(&outcome.result).map_err(|err| err.to_string())
    } else {
        serde_json::to_string_pretty(&outcome).map_err(|err| err.to_string())
    };
    match rendered {
        Ok(payload) => {
            print!("{payload}");
            if !as_csv {
                println!();
            }
            0
        }
        Err(err) => {
            eprintln!("failed to render assignment: {err}");
            1
        }
    }
}

fn handle_algorithms(args: &[String]) -> i32 {
    let game_id = args.get(2).map(String::as_str).unwrap_or(DEFAULT_GAME_ID);
    let catalog = AlgorithmCatalog::standard();
    let algorithms = catalog.list_algorithms_for_game(game_id);
    if algorithms.is_empty() {
        eprintln!("no assignment algorithms registered for game '{game_id}'");
    }
    match serde_json::to_string_pretty(&algorithms) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize algorithms: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let path = args
        .get(2)
        .map(String::as_str)
        .unwrap_or(DEFAULT_DIRECTORY_PATH);

    let report = match validate_player_directory(path) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("validation failed: {err}");
            return 1;
        }
    };

    for diagnostic in &report.diagnostics {
        if diagnostic.severity == ValidationSeverity::Error {
            eprintln!("- {diagnostic}");
        } else {
            println!("- {diagnostic}");
        }
    }
    if report.has_errors() {
        let errors = report
            .diagnostics
            .iter()
            .filter(|diag| diag.severity == ValidationSeverity::Error)
            .count();
        eprintln!("validation failed: {errors} error(s)");
        1
    } else {
        println!("validation passed: {path} ({} players)", report.player_count);
        0
    }
}
