use std::{
    env,
    io::{self, Write},
    path::Path,
    process,
};

use env_logger::Env;
use lexer::{errors::errors::ErrorTip, lexer::lexer::Scanner, read_source, render_snippet};
use log::{debug, info};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program_name = args.first().map(String::as_str).unwrap_or("lexer");

    if args.len() < 2 {
        print_usage(program_name);
        process::exit(1);
    }

    if args[1] == "--help" || args[1] == "-h" {
        print_help(program_name);
        return;
    }

    let file_path = Path::new(&args[1]);
    let source = match read_source(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    };

    info!("scanning {} ({} bytes)", file_path.display(), source.len());

    if let Err(error) = run(&source) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

/// Prints tokens until end of input. A lexical error ends the run normally.
fn run(source: &[u8]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut scanner = Scanner::new(source);

    loop {
        match scanner.next() {
            Ok(token) => {
                writeln!(out, "{}", token)?;
                if token.is_end_of_input() {
                    return Ok(());
                }
            }
            Err(error) => {
                out.flush()?;
                eprintln!("{}", error);

                if let ErrorTip::Suggestion(tip) = error.get_tip() {
                    debug!("{}", tip);
                }
                if let Some(snippet) = render_snippet(source, *error.get_position()) {
                    debug!("{}: {}\n{}", error.get_error_name(), error.get_reason(), snippet);
                }

                return Ok(());
            }
        }
    }
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <source-file>", program_name);
    eprintln!("       {} --help", program_name);
}

fn print_help(program_name: &str) {
    println!("lexer v{}", env!("CARGO_PKG_VERSION"));
    println!("Prints the token stream of a source file\n");
    println!("USAGE:");
    println!("    {} <source-file>    Tokenize a file", program_name);
    println!("    {} --help           Show this help message\n", program_name);
    println!("ENVIRONMENT:");
    println!("    RUST_LOG            Log filter (default: warn)");
}
