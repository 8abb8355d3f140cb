//! Command-line arguments

use clap::Parser as ClapParser;

/// Arguments accepted by `groovy2js`
#[derive(Debug, Clone, PartialEq, Eq, ClapParser)]
#[command(name = "groovy2js", version, about = "Translate Groovy-dialect scripts to JavaScript")]
pub struct Cli {
    /// Script file to translate
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,

    /// Inline source to translate
    #[arg(short, long, value_name = "CODE", conflicts_with = "file")]
    pub eval: Option<String>,

    /// Start the interactive translator
    #[arg(short, long)]
    pub repl: bool,

    /// JSON file whose top-level keys seed the global scope
    #[arg(short, long, value_name = "JSON")]
    pub context: Option<String>,

    /// Print the token stream as JSON lines before the translation
    #[arg(long)]
    pub print_tokens: bool,

    /// Print the parsed nodes before the translation
    #[arg(long)]
    pub print_ast: bool,

    /// Log every converted statement
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Arguments with every option unset
    pub fn new() -> Self {
        Self {
            file: None,
            eval: None,
            repl: false,
            context: None,
            print_tokens: false,
            print_ast: false,
            verbose: false,
        }
    }

    /// Arguments translating `file`
    pub fn with_file(file: String) -> Self {
        Self {
            file: Some(file),
            ..Self::new()
        }
    }

    /// Arguments starting the REPL
    pub fn with_repl() -> Self {
        Self {
            repl: true,
            ..Self::new()
        }
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}
