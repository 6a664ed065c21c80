use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use gmsc::{lexer::lexer::tokenize, render_error};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(default_env_filter())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file.gml>", args[0]);
        return ExitCode::FAILURE;
    }

    let file_path: &str = &args[1];
    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            error!(path = file_path, error = %err, "failed to read source file");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    match tokenize(&source) {
        Ok(lexemes) => {
            info!(tokens = lexemes.len(), elapsed = ?start.elapsed(), "tokenized");
            for lexeme in lexemes {
                println!("{}", lexeme);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprint!("{}", render_error(&err, &source, file_name));
            ExitCode::FAILURE
        }
    }
}

fn default_env_filter() -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("warn"),
    }
}
