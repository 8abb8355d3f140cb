//! REPL (Read-Translate-Print Loop) implementation

use crate::error::{CliError, CliResult};
use crate::session::Session;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive translator
///
/// Every complete entry is translated with the session's global scope, so
/// bindings declared earlier affect how later entries are rendered.
///
/// # Returns
/// `Ok(())` when the REPL exits normally
pub fn run_repl(session: &mut Session) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("groovy2js v{}", env!("CARGO_PKG_VERSION"));
    println!("Type Groovy code to see its JavaScript translation, or 'exit' to quit.");
    println!();

    let mut line_buffer = String::new();
    let mut in_multiline = false;

    loop {
        let prompt = if in_multiline { "... " } else { "groovy> " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !in_multiline && (trimmed == "exit" || trimmed == ".exit" || trimmed == "quit") {
                    println!("Goodbye!");
                    break;
                }

                if !in_multiline && trimmed.starts_with('.') {
                    handle_repl_command(trimmed, session);
                    continue;
                }

                if in_multiline {
                    line_buffer.push('\n');
                }
                line_buffer.push_str(&line);

                if !is_input_complete(&line_buffer) {
                    in_multiline = true;
                    continue;
                }
                in_multiline = false;

                let _ = editor.add_history_entry(&line_buffer);

                match session.translate_string(&line_buffer) {
                    Ok(output) if output.is_empty() => {}
                    Ok(output) => println!("{}", output),
                    Err(e) => eprintln!("Error: {}", e),
                }

                line_buffer.clear();
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                if in_multiline {
                    println!("^C");
                    line_buffer.clear();
                    in_multiline = false;
                } else {
                    println!("Press Ctrl-D or type 'exit' to quit");
                }
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                return Err(CliError::Repl(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

/// Handle special REPL commands
fn handle_repl_command(command: &str, session: &mut Session) {
    match command {
        ".help" => {
            println!("REPL Commands:");
            println!("  .help     - Show this help message");
            println!("  .clear    - Clear the screen");
            println!("  .scope    - List global bindings and their kinds");
            println!("  .reset    - Forget every binding declared in this session");
            println!("  .exit     - Exit the REPL");
            println!("  exit      - Exit the REPL");
            println!("  quit      - Exit the REPL");
        }
        ".clear" => {
            print!("\x1B[2J\x1B[1;1H");
        }
        ".scope" => {
            for line in describe_globals(session) {
                println!("{}", line);
            }
        }
        ".reset" => match session.reset() {
            Ok(()) => println!("Scope reset"),
            Err(e) => eprintln!("Error: {}", e),
        },
        _ => {
            println!("Unknown command: {}", command);
            println!("Type .help for available commands");
        }
    }
}

/// One `name: kind` line per global binding
fn describe_globals(session: &Session) -> Vec<String> {
    let globals = session.globals();
    if globals.is_empty() {
        return vec!["(no bindings)".to_string()];
    }
    globals
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.kind.type_of()))
        .collect()
}

/// Check if the input appears to be complete
///
/// Balanced braces, brackets and parentheses outside of strings and
/// comments, with no string or block comment left open.
fn is_input_complete(input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    let mut depth: i32 = 0;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\'' | '"' => {
                let triple = chars.get(i + 1) == Some(&c) && chars.get(i + 2) == Some(&c);
                match skip_string(&chars, i, c, triple) {
                    Some(end) => i = end,
                    None => return false,
                }
                continue;
            }
            '/' if chars.get(i + 1) == Some(&'/') => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
                continue;
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                let mut j = i + 2;
                loop {
                    if j + 1 >= chars.len() {
                        return false;
                    }
                    if chars[j] == '*' && chars[j + 1] == '/' {
                        break;
                    }
                    j += 1;
                }
                i = j + 2;
                continue;
            }
            '{' | '[' | '(' => depth += 1,
            '}' | ']' | ')' => depth -= 1,
            _ => {}
        }
        i += 1;
    }

    depth <= 0
}

/// Index just past the string opened at `start`, `None` when unterminated
fn skip_string(chars: &[char], start: usize, quote: char, triple: bool) -> Option<usize> {
    let mut i = start + if triple { 3 } else { 1 };
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            c if c == quote => {
                if !triple {
                    return Some(i + 1);
                }
                if chars.get(i + 1) == Some(&quote) && chars.get(i + 2) == Some(&quote) {
                    return Some(i + 3);
                }
                i += 1;
            }
            '\n' if !triple => return None,
            _ => i += 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_input_complete_simple() {
        assert!(is_input_complete("def x = 42"));
        assert!(is_input_complete("println 'hello'"));
    }

    #[test]
    fn test_is_input_complete_incomplete_brace() {
        assert!(!is_input_complete("def f(a) {"));
        assert!(!is_input_complete("if (true) {"));
        assert!(!is_input_complete("def m = [a: 1,"));
    }

    #[test]
    fn test_is_input_complete_with_blocks() {
        assert!(is_input_complete("def f(a) { return a }"));
        assert!(is_input_complete("list.each { println it }"));
    }

    #[test]
    fn test_is_input_complete_with_strings() {
        assert!(is_input_complete(r#"def s = "hello {""#));
        assert!(!is_input_complete(r#"def s = "unclosed"#));
        assert!(is_input_complete(r#"def s = 'it\'s {'"#));
    }

    #[test]
    fn test_is_input_complete_triple_quoted() {
        assert!(!is_input_complete("def s = '''first line"));
        assert!(is_input_complete("def s = '''first\nsecond { '''"));
    }

    #[test]
    fn test_is_input_complete_comments() {
        assert!(is_input_complete("def a = 1 // {"));
        assert!(!is_input_complete("/* open"));
        assert!(is_input_complete("/* ( */ def a = 1"));
    }

    #[test]
    fn test_describe_globals() {
        let mut session = Session::new();
        assert_eq!(describe_globals(&session), vec!["(no bindings)"]);
        session.translate_string("def a = [:]").unwrap();
        assert_eq!(describe_globals(&session), vec!["a: map"]);
    }
}
