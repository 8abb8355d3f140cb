//! Dialect tokenizer - turns source characters into classified tokens
//!
//! The tokenizer makes a single pass over the characters and never backs up.
//! Dot runs are counted while scanning numbers and identifiers: one dot ends
//! the token (a member accessor or decimal point follows), two dots make a
//! range token, more than two is a lexical error.

use crate::error::lexical_error;
use core_types::{SourcePosition, TranslateError};
use serde::{Deserialize, Serialize};

/// Quoting style of a string literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StringStyle {
    /// `'text'`
    Single,
    /// `"text"`, may interpolate `$name` and `${expr}`
    Double,
    /// `'''text'''`, may span lines
    TripleSingle,
    /// `"""text"""`, may span lines and interpolate
    TripleDouble,
}

/// Kind of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// End of the source text
    EndOfInput,
    /// Identifier or keyword
    Identifier,
    /// Integer or decimal literal
    Number,
    /// String literal; the lexeme holds the text between the delimiters
    String(StringStyle),
    /// Line or block comment, delimiters included
    Comment,
    /// `=`
    Assign,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `!`
    Not,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    StarAssign,
    /// `/=`
    SlashAssign,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<=>`
    Spaceship,
    /// `->`, separates closure parameters from the body
    Pointer,
    /// `a..b`; the lexeme keeps both bounds, either may be empty
    Range,
    /// `.`
    Accessor,
    /// `?`
    Question,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `\n`
    LineTerminator,
}

/// A classified token with the line it started on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token classification
    pub kind: TokenKind,
    /// Source text of the token
    pub lexeme: String,
    /// Line number (1-indexed)
    pub line: u32,
}

impl Token {
    /// Create a token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    /// End-of-input token on `line`
    pub fn end(line: u32) -> Self {
        Self::new(TokenKind::EndOfInput, "", line)
    }

    /// Whether this is an identifier spelled `word`
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Identifier && self.lexeme == word
    }

    /// Human-readable description used in error messages
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndOfInput => "end of input".to_string(),
            TokenKind::LineTerminator => "end of line".to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

/// Operator runs the tokenizer recognises, longest first is not required
/// because runs are matched whole.
const OPERATOR_RUNS: &[(&str, TokenKind)] = &[
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("%", TokenKind::Percent),
    ("<", TokenKind::Less),
    (">", TokenKind::Greater),
    ("+=", TokenKind::PlusAssign),
    ("-=", TokenKind::MinusAssign),
    ("*=", TokenKind::StarAssign),
    ("/=", TokenKind::SlashAssign),
    ("++", TokenKind::Increment),
    ("--", TokenKind::Decrement),
    ("<<", TokenKind::ShiftLeft),
    (">>", TokenKind::ShiftRight),
    ("<=", TokenKind::LessEqual),
    (">=", TokenKind::GreaterEqual),
    ("->", TokenKind::Pointer),
    ("<=>", TokenKind::Spaceship),
];

/// Numeric type suffixes dropped from literals (`10L`, `1.5f`)
const NUMBER_SUFFIXES: &[char] = &['L', 'l', 'F', 'f', 'D', 'd', 'G', 'g', 'I', 'i'];

/// Tokenizer for dialect source code
///
/// # Examples
///
/// ```
/// use translator::{TokenKind, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("a = 0..19").unwrap();
/// assert_eq!(tokenizer.kind(), TokenKind::Identifier);
/// assert!(tokenizer.match_kind(TokenKind::Identifier).unwrap());
/// assert!(tokenizer.match_kind(TokenKind::Assign).unwrap());
/// assert_eq!(tokenizer.lexeme(), "0..19");
/// ```
pub struct Tokenizer<'a> {
    source: &'a str,
    chars: Vec<char>,
    position: usize,
    line: u32,
    current: Token,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned on the first token of `source`
    pub fn new(source: &'a str) -> Result<Self, TranslateError> {
        let mut tokenizer = Self {
            source,
            chars: source.chars().collect(),
            position: 0,
            line: 1,
            current: Token::end(1),
        };
        tokenizer.advance()?;
        Ok(tokenizer)
    }

    /// The source text being tokenized
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The current token
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Kind of the current token
    pub fn kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Lexeme of the current token
    pub fn lexeme(&self) -> &str {
        &self.current.lexeme
    }

    /// Line the scanner has reached
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Whether the current token is the end of input
    pub fn is_at_end(&self) -> bool {
        self.current.kind == TokenKind::EndOfInput
    }

    /// Scan the next token and make it current
    pub fn advance(&mut self) -> Result<&Token, TranslateError> {
        self.current = self.scan_token()?;
        Ok(&self.current)
    }

    /// Advance past the current token if it has the expected kind
    ///
    /// Returns whether the current token matched.
    pub fn match_kind(&mut self, kind: TokenKind) -> Result<bool, TranslateError> {
        if self.current.kind == kind {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Return the current token and advance past it
    pub fn next_token(&mut self) -> Result<Token, TranslateError> {
        let token = self.current.clone();
        if token.kind != TokenKind::EndOfInput {
            self.advance()?;
        }
        Ok(token)
    }

    /// Collect every remaining token, end of input included
    pub fn tokenize(mut self) -> Result<Vec<Token>, TranslateError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::EndOfInput;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn scan_token(&mut self) -> Result<Token, TranslateError> {
        self.skip_whitespace();

        let line = self.line;
        if self.at_source_end() {
            return Ok(Token::end(line));
        }

        let ch = self.advance_char();
        let single = |kind: TokenKind| Ok(Token::new(kind, ch.to_string(), line));

        match ch {
            '\n' => {
                self.line += 1;
                single(TokenKind::LineTerminator)
            }
            ',' => single(TokenKind::Comma),
            ';' => single(TokenKind::Semicolon),
            ':' => single(TokenKind::Colon),
            '(' => single(TokenKind::LParen),
            ')' => single(TokenKind::RParen),
            '[' => single(TokenKind::LBracket),
            ']' => single(TokenKind::RBracket),
            '{' => single(TokenKind::LBrace),
            '}' => single(TokenKind::RBrace),
            '?' => single(TokenKind::Question),

            '.' => match 1 + self.dot_run() {
                1 => single(TokenKind::Accessor),
                2 => {
                    self.advance_char();
                    self.scan_range(String::new(), line)
                }
                _ => Err(self.malformed_dots(".")),
            },

            '=' => {
                let mut run = 1;
                while self.match_char('=') {
                    run += 1;
                }
                match run {
                    1 => single(TokenKind::Assign),
                    2 => Ok(Token::new(TokenKind::Equal, "==", line)),
                    _ => Err(lexical_error(
                        format!("Unknown operator '{}'", "=".repeat(run)),
                        line,
                    )),
                }
            }

            '!' => {
                if self.match_char('=') {
                    Ok(Token::new(TokenKind::NotEqual, "!=", line))
                } else {
                    single(TokenKind::Not)
                }
            }

            '&' | '|' => {
                if self.match_char(ch) {
                    let kind = if ch == '&' { TokenKind::And } else { TokenKind::Or };
                    Ok(Token::new(kind, format!("{}{}", ch, ch), line))
                } else {
                    Err(lexical_error(format!("Unknown operator '{}'", ch), line))
                }
            }

            '/' if self.peek() == '/' => self.scan_line_comment(),
            '/' if self.peek() == '*' => self.scan_block_comment(),

            '+' | '-' | '*' | '/' | '%' | '<' | '>' => self.scan_operator(ch),

            '"' | '\'' => self.scan_string(ch),

            _ if ch.is_ascii_digit() => self.scan_number(ch),

            _ if is_id_start(ch) => self.scan_identifier(ch),

            _ => Err(lexical_error(format!("Unexpected character '{}'", ch), line)),
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.at_source_end() {
            match self.peek() {
                ' ' | '\t' | '\r' | '\u{000C}' | '\u{FEFF}' => {
                    self.advance_char();
                }
                _ => break,
            }
        }
    }

    fn scan_operator(&mut self, first: char) -> Result<Token, TranslateError> {
        let line = self.line;
        let mut run = first.to_string();
        while !self.at_source_end() && matches!(self.peek(), '+' | '-' | '*' | '/' | '%' | '<' | '>' | '=') {
            run.push(self.advance_char());
        }

        match OPERATOR_RUNS.iter().find(|(text, _)| *text == run) {
            Some((_, kind)) => Ok(Token::new(*kind, run, line)),
            None => Err(lexical_error(format!("Unknown operator '{}'", run), line)),
        }
    }

    fn scan_line_comment(&mut self) -> Result<Token, TranslateError> {
        let line = self.line;
        let mut text = String::from("/");
        while !self.at_source_end() && self.peek() != '\n' {
            let ch = self.advance_char();
            if ch != '\r' {
                text.push(ch);
            }
        }
        Ok(Token::new(TokenKind::Comment, text.trim_end(), line))
    }

    fn scan_block_comment(&mut self) -> Result<Token, TranslateError> {
        let line = self.line;
        let mut text = String::from("/");
        text.push(self.advance_char()); // *

        loop {
            if self.at_source_end() {
                return Err(lexical_error("Unterminated block comment", line));
            }
            let ch = self.advance_char();
            text.push(ch);
            if ch == '\n' {
                self.line += 1;
            } else if ch == '*' && self.peek() == '/' {
                text.push(self.advance_char());
                return Ok(Token::new(TokenKind::Comment, text, line));
            }
        }
    }

    fn scan_string(&mut self, quote: char) -> Result<Token, TranslateError> {
        let line = self.line;

        let triple = if self.peek() == quote && self.peek_next() == Some(quote) {
            self.advance_char();
            self.advance_char();
            true
        } else if self.peek() == quote {
            // Empty literal
            self.advance_char();
            return Ok(Token::new(TokenKind::String(string_style(quote, false)), "", line));
        } else {
            false
        };

        let mut value = String::new();
        loop {
            if self.at_source_end() {
                return Err(lexical_error("Unterminated string", line));
            }
            let ch = self.advance_char();
            match ch {
                '\\' => {
                    // Kept verbatim; only stops the next character closing the literal
                    value.push(ch);
                    if !self.at_source_end() {
                        let escaped = self.advance_char();
                        if escaped == '\n' {
                            self.line += 1;
                        }
                        value.push(escaped);
                    }
                }
                _ if ch == quote && !triple => break,
                _ if ch == quote && self.peek() == quote && self.peek_next() == Some(quote) => {
                    self.advance_char();
                    self.advance_char();
                    break;
                }
                '\n' if !triple => return Err(lexical_error("Unterminated string", line)),
                '\n' => {
                    self.line += 1;
                    value.push(ch);
                }
                _ => value.push(ch),
            }
        }

        Ok(Token::new(TokenKind::String(string_style(quote, triple)), value, line))
    }

    fn scan_number(&mut self, first: char) -> Result<Token, TranslateError> {
        let line = self.line;
        let mut text = first.to_string();
        let mut decimal = false;

        loop {
            match self.peek() {
                c if c.is_ascii_digit() => text.push(self.advance_char()),
                '.' => match self.dot_run() {
                    1 if self.peek_next().is_some_and(|c| c.is_ascii_digit()) => {
                        if decimal {
                            text.push(self.advance_char());
                            return Err(self.malformed_number(text));
                        }
                        decimal = true;
                        text.push(self.advance_char());
                    }
                    // `5.times`: the dot is a member accessor
                    1 => break,
                    2 if !decimal => {
                        self.advance_char();
                        self.advance_char();
                        return self.scan_range(text, line);
                    }
                    _ => {
                        while self.peek() == '.' {
                            text.push(self.advance_char());
                        }
                        return Err(self.malformed_number(text));
                    }
                },
                _ => break,
            }
        }

        if NUMBER_SUFFIXES.contains(&self.peek())
            && !self.peek_next().is_some_and(is_id_part)
        {
            self.advance_char();
        }

        Ok(Token::new(TokenKind::Number, text, line))
    }

    fn scan_identifier(&mut self, first: char) -> Result<Token, TranslateError> {
        let line = self.line;
        let mut text = first.to_string();
        while !self.at_source_end() && is_id_part(self.peek()) {
            text.push(self.advance_char());
        }

        if self.peek() == '.' {
            match self.dot_run() {
                1 => {}
                2 => {
                    self.advance_char();
                    self.advance_char();
                    return self.scan_range(text, line);
                }
                _ => return Err(self.malformed_dots(&text)),
            }
        }

        Ok(Token::new(TokenKind::Identifier, text, line))
    }

    /// Scan the upper bound of a range whose `..` has been consumed
    fn scan_range(&mut self, start: String, line: u32) -> Result<Token, TranslateError> {
        let mut end = String::new();
        if self.peek().is_ascii_digit() {
            while self.peek().is_ascii_digit() {
                end.push(self.advance_char());
            }
        } else if !self.at_source_end() && is_id_start(self.peek()) {
            while !self.at_source_end() && is_id_part(self.peek()) {
                end.push(self.advance_char());
            }
        }

        if self.peek() == '.' && self.peek_next() == Some('.') {
            let mut text = format!("{}..{}", start, end);
            while self.peek() == '.' {
                text.push(self.advance_char());
            }
            return Err(lexical_error(format!("Malformed range '{}'", text), line));
        }

        Ok(Token::new(TokenKind::Range, format!("{}..{}", start, end), line))
    }

    /// Number of consecutive dots starting at the current position
    fn dot_run(&self) -> usize {
        self.chars[self.position..]
            .iter()
            .take_while(|c| **c == '.')
            .count()
    }

    fn malformed_number(&mut self, mut text: String) -> TranslateError {
        while !self.at_source_end() && (self.peek().is_ascii_alphanumeric() || self.peek() == '.') {
            text.push(self.advance_char());
        }
        lexical_error(format!("Malformed number '{}'", text), self.line)
    }

    fn malformed_dots(&mut self, prefix: &str) -> TranslateError {
        let mut text = prefix.to_string();
        while self.peek() == '.' {
            text.push(self.advance_char());
        }
        lexical_error(format!("Malformed accessor '{}'", text), self.line)
    }

    /// Position of the scanner, for diagnostics
    pub fn position(&self) -> SourcePosition {
        SourcePosition::line(self.line)
    }

    fn at_source_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    fn peek(&self) -> char {
        if self.at_source_end() {
            '\0'
        } else {
            self.chars[self.position]
        }
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.position + 1).copied()
    }

    fn advance_char(&mut self) -> char {
        let ch = self.chars[self.position];
        self.position += 1;
        ch
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.at_source_end() || self.chars[self.position] != expected {
            false
        } else {
            self.position += 1;
            true
        }
    }
}

fn string_style(quote: char, triple: bool) -> StringStyle {
    match (quote, triple) {
        ('\'', false) => StringStyle::Single,
        ('\'', true) => StringStyle::TripleSingle,
        (_, false) => StringStyle::Double,
        (_, true) => StringStyle::TripleDouble,
    }
}

fn is_id_start(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_alphabetic()
}

fn is_id_part(ch: char) -> bool {
    is_id_start(ch) || ch.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ErrorKind;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Tokenizer::new(source)
            .unwrap()
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_tokenizer_empty_source() {
        let tokenizer = Tokenizer::new("").unwrap();
        assert!(tokenizer.is_at_end());
    }

    #[test]
    fn test_tokenizer_identifier() {
        let tokenizer = Tokenizer::new("foo").unwrap();
        assert_eq!(tokenizer.kind(), TokenKind::Identifier);
        assert_eq!(tokenizer.lexeme(), "foo");
    }

    #[test]
    fn test_tokenizer_integer_and_decimal() {
        let tokens = Tokenizer::new("42 3.14").unwrap().tokenize().unwrap();
        assert_eq!(tokens[0].lexeme, "42");
        assert_eq!(tokens[1].lexeme, "3.14");
        assert_eq!(tokens[1].kind, TokenKind::Number);
    }

    #[test]
    fn test_tokenizer_number_suffix_dropped() {
        let tokens = Tokenizer::new("10L 2.5f").unwrap().tokenize().unwrap();
        assert_eq!(tokens[0].lexeme, "10");
        assert_eq!(tokens[1].lexeme, "2.5");
    }

    #[test]
    fn test_tokenizer_number_then_accessor() {
        assert_eq!(
            kinds("5.times"),
            vec![
                TokenKind::Number,
                TokenKind::Accessor,
                TokenKind::Identifier,
                TokenKind::EndOfInput
            ]
        );
    }

    #[test]
    fn test_tokenizer_numeric_range() {
        let tokenizer = Tokenizer::new("0..19").unwrap();
        assert_eq!(tokenizer.kind(), TokenKind::Range);
        assert_eq!(tokenizer.lexeme(), "0..19");
    }

    #[test]
    fn test_tokenizer_identifier_range() {
        let tokens = Tokenizer::new("a..b").unwrap().tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Range);
        assert_eq!(tokens[0].lexeme, "a..b");
    }

    #[test]
    fn test_tokenizer_range_with_open_end() {
        let tokens = Tokenizer::new("0..(n)").unwrap().tokenize().unwrap();
        assert_eq!(tokens[0].lexeme, "0..");
        assert_eq!(tokens[1].kind, TokenKind::LParen);
    }

    #[test]
    fn test_tokenizer_member_chain() {
        assert_eq!(
            kinds("a.b.c"),
            vec![
                TokenKind::Identifier,
                TokenKind::Accessor,
                TokenKind::Identifier,
                TokenKind::Accessor,
                TokenKind::Identifier,
                TokenKind::EndOfInput
            ]
        );
    }

    #[test]
    fn test_tokenizer_three_dots_is_fatal() {
        let error = Tokenizer::new("1...2").err().unwrap();
        assert_eq!(error.kind, ErrorKind::LexicalError);
        assert_eq!(error.line(), Some(1));
        assert!(error.message.contains("1...2"));
    }

    #[test]
    fn test_tokenizer_identifier_three_dots_is_fatal() {
        let mut tokenizer = Tokenizer::new("x\na...b").unwrap();
        tokenizer.advance().unwrap();
        let error = tokenizer.advance().err().unwrap();
        assert_eq!(error.line(), Some(2));
    }

    #[test]
    fn test_tokenizer_string_styles() {
        let tokens = Tokenizer::new(r#"'a' "b" '''c''' """d""" ''"#)
            .unwrap()
            .tokenize()
            .unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String(StringStyle::Single));
        assert_eq!(tokens[1].kind, TokenKind::String(StringStyle::Double));
        assert_eq!(tokens[2].kind, TokenKind::String(StringStyle::TripleSingle));
        assert_eq!(tokens[3].kind, TokenKind::String(StringStyle::TripleDouble));
        assert_eq!(tokens[4].lexeme, "");
        assert_eq!(tokens[3].lexeme, "d");
    }

    #[test]
    fn test_tokenizer_string_keeps_backslash_verbatim() {
        let tokenizer = Tokenizer::new(r#""a\"b""#).unwrap();
        assert_eq!(tokenizer.lexeme(), r#"a\"b"#);
    }

    #[test]
    fn test_tokenizer_triple_string_spans_lines() {
        let tokens = Tokenizer::new("'''one\ntwo''' x").unwrap().tokenize().unwrap();
        assert_eq!(tokens[0].lexeme, "one\ntwo");
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_tokenizer_unterminated_string() {
        let error = Tokenizer::new("'abc").err().unwrap();
        assert!(error.message.contains("Unterminated string"));
    }

    #[test]
    fn test_tokenizer_assign_and_equality() {
        assert_eq!(
            kinds("= =="),
            vec![TokenKind::Assign, TokenKind::Equal, TokenKind::EndOfInput]
        );
        assert!(Tokenizer::new("===").is_err());
    }

    #[test]
    fn test_tokenizer_operator_runs() {
        assert_eq!(
            kinds("+= -= ++ -- << >> <= >= -> <=> *= /="),
            vec![
                TokenKind::PlusAssign,
                TokenKind::MinusAssign,
                TokenKind::Increment,
                TokenKind::Decrement,
                TokenKind::ShiftLeft,
                TokenKind::ShiftRight,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::Pointer,
                TokenKind::Spaceship,
                TokenKind::StarAssign,
                TokenKind::SlashAssign,
                TokenKind::EndOfInput
            ]
        );
    }

    #[test]
    fn test_tokenizer_unknown_operator_run() {
        let error = Tokenizer::new("a +*+ b").and_then(|t| t.tokenize()).err().unwrap();
        assert!(error.message.contains("+*+"));
    }

    #[test]
    fn test_tokenizer_line_terminators_count_lines() {
        let tokens = Tokenizer::new("a\nb\n\nc").unwrap().tokenize().unwrap();
        let c = tokens.iter().find(|t| t.lexeme == "c").unwrap();
        assert_eq!(c.line, 4);
        assert_eq!(tokens[1].kind, TokenKind::LineTerminator);
    }

    #[test]
    fn test_tokenizer_comments() {
        let tokens = Tokenizer::new("// note\n/* a\nb */ x").unwrap().tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].lexeme, "// note");
        assert_eq!(tokens[2].lexeme, "/* a\nb */");
        assert_eq!(tokens[3].line, 3);
    }

    #[test]
    fn test_tokenizer_match_kind() {
        let mut tokenizer = Tokenizer::new("( )").unwrap();
        assert!(!tokenizer.match_kind(TokenKind::RParen).unwrap());
        assert!(tokenizer.match_kind(TokenKind::LParen).unwrap());
        assert!(tokenizer.match_kind(TokenKind::RParen).unwrap());
        assert!(tokenizer.is_at_end());
    }

    #[test]
    fn test_tokenizer_unexpected_character() {
        let error = Tokenizer::new("#").err().unwrap();
        assert!(error.message.contains("Unexpected character"));
    }
}
