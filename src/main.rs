use std::{
    env,
    fs::read_to_string,
    io::{self, Write},
    path::Path,
    process::ExitCode,
    rc::Rc,
};

use interpreter::{
    display_error, evaluator::evaluator::Evaluator, init_tracing, run, Position,
};
use tracing::{debug, info};

const PROMPT: &str = ">> ";

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => repl(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: {} [file]", args[0]);
            ExitCode::from(2)
        }
    }
}

/// Reads and runs one line at a time against a single evaluator, so
/// variables persist between lines. `read` statements take their input from
/// the same stdin.
fn repl() -> ExitCode {
    let mut evaluator = Evaluator::new(io::stdin().lock(), io::stdout());
    let shell = Position(0, Rc::new(String::from("shell")));

    println!("Welcome to the interpreter! Type `exit` or `quit` to leave.");

    loop {
        print!("{}", PROMPT);
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let line = match evaluator.read_line(&shell) {
            Ok(Some(line)) => line,
            Ok(None) => {
                println!();
                return ExitCode::SUCCESS;
            }
            Err(error) => {
                eprintln!("Error: {}", error);
                return ExitCode::FAILURE;
            }
        };

        let line = line.trim();
        if line == "exit" || line == "quit" {
            return ExitCode::SUCCESS;
        }

        match run(line, None, &mut evaluator) {
            Ok(Some(value)) => println!("{}", value),
            Ok(None) => {}
            Err(error) => println!("Error: {}", error),
        }
    }
}

fn run_file(file_path: &str) -> ExitCode {
    let file_name = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string());

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: could not read {}: {}", file_path, error);
            return ExitCode::FAILURE;
        }
    };

    info!(file = %file_name, bytes = source.len(), "running file");

    let stdin = io::stdin();
    let mut evaluator = Evaluator::new(stdin.lock(), io::stdout());

    match run(&source, Some(file_name), &mut evaluator) {
        Ok(result) => {
            debug!(?result, "finished");
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error, &source);
            ExitCode::FAILURE
        }
    }
}
