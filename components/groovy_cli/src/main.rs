//! groovy2js command-line translator
//!
//! Entry point for the translator. Parses CLI arguments and delegates to
//! the Session for translation.

use clap::Parser as ClapParser;
use groovy_cli::{repl, Cli, CliError, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut session = Session::new()
        .with_print_tokens(cli.print_tokens)
        .with_print_ast(cli.print_ast);

    if let Some(path) = &cli.context {
        session = match session.load_context(path) {
            Ok(session) => session,
            Err(e) => {
                eprintln!("Error: Could not load context '{}': {}", path, e);
                std::process::exit(1);
            }
        };
    }

    if let Some(file) = &cli.file {
        match session.translate_file(file) {
            Ok(output) => println!("{}", output),
            Err(CliError::Io(e)) => {
                eprintln!("Error: Could not read file '{}': {}", file, e);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    } else if let Some(code) = &cli.eval {
        match session.translate_string(code) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    } else if cli.repl {
        repl::run_repl(&mut session)?;
    } else {
        println!("groovy2js v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage:");
        println!("  groovy2js --file <FILE>     Translate a script file");
        println!("  groovy2js --eval <CODE>     Translate inline source");
        println!("  groovy2js --repl            Start the interactive translator");
        println!();
        println!("Run 'groovy2js --help' for more options.");
    }

    Ok(())
}
