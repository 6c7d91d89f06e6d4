use std::{fs::read_to_string, path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use analyzer::{display_error, lexer::lexer::tokenize, parser::parser::parse, type_checker::type_checker::type_check};
use clap::Parser;
use colored::Colorize;

#[derive(Parser)]
#[command(name = "analyzer")]
#[command(version)]
#[command(about = "Type checks a program and reports its usage counters", long_about = None)]
struct Cli {
    /// Source file to check
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the time spent in each stage to stderr
    #[arg(long)]
    timings: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| cli.file.to_string_lossy().to_string());

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{} failed to read {}: {}", "Error:".red().bold(), cli.file.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &file_name, &source);
            return ExitCode::FAILURE;
        }
    };

    if cli.timings {
        eprintln!("Tokenized in {:?}", start.elapsed());
    }

    let parse_start = Instant::now();
    let ast = match parse(tokens, Rc::new(file_name.clone())) {
        Ok(ast) => ast,
        Err(error) => {
            display_error(&error, &file_name, &source);
            return ExitCode::FAILURE;
        }
    };

    if cli.timings {
        eprintln!("Parsed in {:?}", parse_start.elapsed());
    }

    let type_check_start = Instant::now();
    let metrics = type_check(&ast);

    if cli.timings {
        eprintln!("Type checked in {:?}", type_check_start.elapsed());
        eprintln!("Total time: {:?}", start.elapsed());
    }

    match metrics {
        Ok(metrics) => {
            println!("{}", metrics);
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error, &file_name, &source);
            ExitCode::FAILURE
        }
    }
}
