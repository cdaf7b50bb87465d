//! postkit CLI
//!
//! Format-preserving edits of PHP application files from the command line.

use postkit::commands::{
    lex_file, parse_config_args, parse_env_args, parse_file, parse_php_args, run_config,
    run_env, run_php,
};
use postkit::CliError;

fn main() {
    postkit::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let rest = &args[2..];

    let result = match command.as_str() {
        "php" => parse_php_args(rest).and_then(|parsed| run_php(&parsed)),
        "config" => parse_config_args(rest).and_then(|parsed| run_config(&parsed)),
        "env" => parse_env_args(rest).and_then(|parsed| run_env(&parsed)),
        "parse" => {
            if rest.is_empty() {
                eprintln!("Usage: postkit parse <file.php>");
                std::process::exit(1);
            }
            parse_file(&rest[0])
        }
        "lex" => {
            if rest.is_empty() {
                eprintln!("Usage: postkit lex <file.php>");
                std::process::exit(1);
            }
            lex_file(&rest[0])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(()) => {}
        Err(CliError::Usage(message)) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{}", usage_for(command));
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn usage_for(command: &str) -> &'static str {
    use postkit::commands::{CONFIG_USAGE, ENV_USAGE, PHP_USAGE};
    match command {
        "php" => PHP_USAGE,
        "config" => CONFIG_USAGE,
        _ => ENV_USAGE,
    }
}

fn print_usage() {
    println!("postkit - post-install scaffolding tools");
    println!();
    println!("Usage: postkit <command> [options]");
    println!();
    println!("Commands:");
    println!("  php <file> [edits...]       Edit a PHP class, keeping its formatting");
    println!("  config <file> <key> <value> Set a value in a config array");
    println!("  env <KEY> <VALUE>           Set a key in the project's .env");
    println!("  parse <file>                Print the outline of a PHP file");
    println!("  lex <file>                  Print the tokens of a PHP file");
    println!("  help                        Show this message");
    println!();
    println!("Run `postkit php` without edits to list the edit flags.");
    println!("Set RUST_LOG=debug to trace what each edit does.");
}
