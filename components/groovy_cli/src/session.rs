//! Translation session driving the translator for the CLI
//!
//! A session keeps one global scope alive across calls, so a declaration
//! translated in one REPL entry informs the kinds seen by the next.

use crate::error::CliResult;
use serde_json::Value;
use tracing::debug;
use translator::{Analyser, Scope, ScopeEntry, Tokenizer};

/// Stateful front-end over the translator
pub struct Session {
    /// Context the global scope was seeded from
    context: Value,
    /// Global scope carried between calls
    scope: Scope,
    /// Whether to print the token stream before translating
    print_tokens: bool,
    /// Whether to print parsed nodes before translating
    print_ast: bool,
}

impl Session {
    /// Create a session with an empty global scope
    ///
    /// # Example
    /// ```
    /// use groovy_cli::Session;
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.translate_string("def a = 1").unwrap(), "var a = 1");
    /// ```
    pub fn new() -> Self {
        Self {
            context: Value::Null,
            scope: Scope::new(),
            print_tokens: false,
            print_ast: false,
        }
    }

    /// Seed the global scope from the top-level keys of `context`
    ///
    /// # Errors
    /// Returns `CliError::Translate` when `context` is neither an object nor `null`
    pub fn with_context(mut self, context: Value) -> CliResult<Self> {
        self.scope = Scope::from_context(&context)?;
        self.context = context;
        Ok(self)
    }

    /// Seed the global scope from a JSON file
    ///
    /// # Errors
    /// Returns `CliError::Io` if the file cannot be read and `CliError::Json`
    /// if it does not hold valid JSON
    pub fn load_context(self, path: &str) -> CliResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let context: Value = serde_json::from_str(&text)?;
        debug!(path = path, "loaded context");
        self.with_context(context)
    }

    /// Enable token printing
    pub fn with_print_tokens(mut self, enabled: bool) -> Self {
        self.print_tokens = enabled;
        self
    }

    /// Enable AST printing
    pub fn with_print_ast(mut self, enabled: bool) -> Self {
        self.print_ast = enabled;
        self
    }

    /// Check if token printing is enabled
    pub fn is_print_tokens_enabled(&self) -> bool {
        self.print_tokens
    }

    /// Check if AST printing is enabled
    pub fn is_print_ast_enabled(&self) -> bool {
        self.print_ast
    }

    /// Context the session was seeded from, `null` when none was given
    pub fn context(&self) -> &Value {
        &self.context
    }

    /// Bindings currently held by the global frame
    pub fn globals(&self) -> &[ScopeEntry] {
        self.scope.entries(0)
    }

    /// Drop every binding declared so far, keeping the seeded context
    pub fn reset(&mut self) -> CliResult<()> {
        self.scope = Scope::from_context(&self.context)?;
        Ok(())
    }

    /// Translate a script file
    ///
    /// # Errors
    /// Returns `CliError::Io` if the file cannot be read, or
    /// `CliError::Translate` on a lexical error
    pub fn translate_file(&mut self, path: &str) -> CliResult<String> {
        let source = std::fs::read_to_string(path)?;
        self.translate_string(&source)
    }

    /// Translate a source string
    ///
    /// Syntax errors do not fail the call; they come back as
    /// `/* SyntaxError ... */` comments in the output. The global scope is
    /// only updated when the whole source translates.
    ///
    /// # Errors
    /// Returns `CliError::Translate` on a lexical error
    pub fn translate_string(&mut self, source: &str) -> CliResult<String> {
        if self.print_tokens {
            for line in token_lines(source)? {
                println!("{}", line);
            }
        }

        let mut analyser = Analyser::with_scope(source, self.scope.clone())?;
        let nodes = analyser.parse_all()?;

        if self.print_ast {
            for node in &nodes {
                println!("AST: {:#?}", node);
            }
        }

        self.scope = analyser.into_scope();
        let output: Vec<String> = nodes.iter().map(|node| node.to_string()).collect();
        debug!(statements = output.len(), "translated");
        Ok(output.join("\n"))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialise each token of `source` as one JSON line
pub fn token_lines(source: &str) -> CliResult<Vec<String>> {
    let tokens = Tokenizer::new(source)?.tokenize()?;
    let mut lines = Vec::with_capacity(tokens.len());
    for token in &tokens {
        lines.push(serde_json::to_string(token)?);
    }
    Ok(lines)
}
