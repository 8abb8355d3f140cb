//! Recursive descent analyser for the dialect
//!
//! The analyser builds nodes and the scope tree in the same pass. Kinds are
//! looked up while parsing and stored on the nodes, so generation never
//! consults the scope.
//!
//! Syntax errors abandon the current top-level statement and surface as
//! [`Node::Error`]. Lexical errors are returned to the caller.

use crate::ast::*;
use crate::dictionary;
use crate::error::*;
use crate::lexer::{Token, TokenKind, Tokenizer};
use crate::scope::Scope;
use core_types::{Kind, TranslateError};
use std::collections::VecDeque;
use tracing::warn;

type Result<T> = std::result::Result<T, TranslateError>;

/// Longest parameter list scanned when looking for a closure's `->`
const CLOSURE_PARAMS_LOOKAHEAD: usize = 64;

/// Analyser over a single source text
pub struct Analyser<'a> {
    tokenizer: Tokenizer<'a>,
    /// Tokens read from the tokenizer but not consumed, comments excluded
    lookahead: VecDeque<Token>,
    /// Comments waiting to be emitted before the next statement
    comments: VecDeque<Token>,
    scope: Scope,
    brace_depth: usize,
    /// Kind of the last consumed token
    previous: TokenKind,
    /// Line of the last consumed token other than a line break
    last_line: u32,
}

impl<'a> Analyser<'a> {
    /// Create an analyser with an empty global scope
    pub fn new(source: &'a str) -> Result<Self> {
        Self::with_scope(source, Scope::new())
    }

    /// Create an analyser whose global scope is `scope`
    pub fn with_scope(source: &'a str, scope: Scope) -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new(source)?,
            lookahead: VecDeque::new(),
            comments: VecDeque::new(),
            scope,
            brace_depth: 0,
            previous: TokenKind::EndOfInput,
            last_line: 1,
        })
    }

    /// Scope tree built so far
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Consume the analyser, returning its scope tree
    pub fn into_scope(self) -> Scope {
        self.scope
    }

    /// Parse the next top-level statement
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn parse(&mut self) -> Result<Option<Node>> {
        self.skip_separators()?;

        if let Some(comment) = self.comments.pop_front() {
            return Ok(Some(Node::Comment(comment.lexeme)));
        }
        if self.check(TokenKind::EndOfInput)? {
            return Ok(None);
        }

        self.previous = TokenKind::EndOfInput;
        let frame = self.scope.current();
        let depth = self.brace_depth;
        let line = self.peek()?.line;

        match self.statement() {
            Ok(node) => Ok(Some(node)),
            Err(error) if error.is_syntax() => {
                let line = error.line().unwrap_or(line);
                warn!(line = line, error = %error.message, "statement replaced by error node");
                self.scope.reset_to(frame);
                self.recover(depth)?;
                Ok(Some(Node::Error {
                    message: error.message,
                    line,
                }))
            }
            Err(error) => Err(error),
        }
    }

    /// Parse every remaining top-level statement
    pub fn parse_all(&mut self) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();
        while let Some(node) = self.parse()? {
            nodes.push(node);
        }
        Ok(nodes)
    }

    /// Skip to the end of the abandoned statement
    fn recover(&mut self, depth: usize) -> Result<()> {
        loop {
            match self.peek_kind()? {
                TokenKind::EndOfInput => return Ok(()),
                TokenKind::Semicolon | TokenKind::LineTerminator if self.brace_depth <= depth => {
                    self.bump()?;
                    return Ok(());
                }
                _ => {
                    self.bump()?;
                }
            }
        }
    }

    // ---- statements ----

    fn statement(&mut self) -> Result<Node> {
        let token = self.peek()?.clone();

        let node = match token.kind {
            TokenKind::LBrace => self.block()?,
            TokenKind::Identifier => match token.lexeme.as_str() {
                "if" => self.if_statement()?,
                "for" => self.for_statement()?,
                "while" => self.while_statement()?,
                "do" => self.do_while_statement()?,
                "switch" => self.switch_statement()?,
                "class" => self.class_declaration()?,
                "break" => {
                    self.bump()?;
                    Node::Break
                }
                "return" => self.return_statement()?,
                "assert" => self.assert_statement()?,
                _ => self.super_expression()?,
            },
            _ => self.super_expression()?,
        };

        self.finish_statement(node)
    }

    /// Close a statement with `;` or check it ends the line
    fn finish_statement(&mut self, node: Node) -> Result<Node> {
        if self.check(TokenKind::Semicolon)? {
            self.bump()?;
            return Ok(Node::Statement(Box::new(node)));
        }
        if node.is_compound() {
            return Ok(node);
        }

        let token = self.peek()?.clone();
        match token.kind {
            TokenKind::LineTerminator | TokenKind::RBrace | TokenKind::EndOfInput => Ok(node),
            TokenKind::Identifier if matches!(token.lexeme.as_str(), "else" | "case" | "default") => {
                Ok(node)
            }
            _ => Err(unexpected_token(
                "end of statement",
                &token.describe(),
                token.line,
            )),
        }
    }

    fn block(&mut self) -> Result<Node> {
        self.scope.enter();
        let body = self.braced_body()?;
        self.scope.exit();
        Ok(Node::Block(body))
    }

    /// `{ statements }`, in the current frame
    fn braced_body(&mut self) -> Result<Vec<Node>> {
        self.expect(TokenKind::LBrace, "'{'")?;
        let body = self.block_body()?;
        self.expect(TokenKind::RBrace, "'}'")?;
        Ok(body)
    }

    /// Statements up to, not including, the closing `}`
    fn block_body(&mut self) -> Result<Vec<Node>> {
        let mut body = Vec::new();
        loop {
            self.skip_separators()?;
            self.drain_comments(&mut body);
            match self.peek_kind()? {
                TokenKind::RBrace => return Ok(body),
                TokenKind::EndOfInput => {
                    let line = self.peek()?.line;
                    return Err(unexpected_token("'}'", "end of input", line));
                }
                _ => body.push(self.statement()?),
            }
        }
    }

    /// Single statement or braced block after `if`, `else` and loop headers
    fn branch(&mut self) -> Result<Node> {
        self.skip_newlines()?;
        if self.check(TokenKind::LBrace)? {
            self.block()
        } else {
            self.statement()
        }
    }

    fn if_statement(&mut self) -> Result<Node> {
        self.bump()?; // if
        let condition = self.parenthesized()?;
        let then = self.branch()?;

        let mut otherwise = None;
        if self.word_after_newlines("else")? {
            self.skip_newlines()?;
            self.bump()?; // else
            self.skip_newlines()?;
            otherwise = Some(Box::new(if self.check_word("if")? {
                self.if_statement()?
            } else {
                self.branch()?
            }));
        }

        Ok(Node::If {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise,
        })
    }

    fn for_statement(&mut self) -> Result<Node> {
        self.bump()?; // for
        self.expect(TokenKind::LParen, "'(' after 'for'")?;

        let typed_in = self.peek_kind()? == TokenKind::Identifier
            && self.peek_nth(1)?.kind == TokenKind::Identifier
            && self.peek_nth(2)?.is_word("in");
        let plain_in = self.peek_kind()? == TokenKind::Identifier && self.peek_nth(1)?.is_word("in");

        if typed_in || plain_in {
            let declared = if typed_in {
                dictionary::type_kind(&self.bump()?.lexeme)
            } else {
                None
            };
            let variable = self.expect_identifier("loop variable")?;
            self.bump()?; // in
            let iterable = self.super_expression()?;
            self.expect(TokenKind::RParen, "')'")?;

            let element = match (&iterable, iterable.static_kind()) {
                (_, Kind::Map) => Kind::Map,
                (Node::Range { .. }, _) => Kind::Number,
                _ => declared.unwrap_or_default(),
            };

            self.scope.enter();
            self.scope.declare(variable.as_str(), element, None);
            let body = self.branch()?;
            self.scope.exit();

            return Ok(Node::ForIn {
                variable,
                iterable: Box::new(iterable),
                body: Box::new(body),
            });
        }

        self.scope.enter();
        let init = self.optional_clause(TokenKind::Semicolon)?;
        self.expect(TokenKind::Semicolon, "';'")?;
        let condition = self.optional_clause(TokenKind::Semicolon)?;
        self.expect(TokenKind::Semicolon, "';'")?;
        let step = self.optional_clause(TokenKind::RParen)?;
        self.expect(TokenKind::RParen, "')'")?;
        let body = self.branch()?;
        self.scope.exit();

        Ok(Node::For {
            init,
            condition,
            step,
            body: Box::new(body),
        })
    }

    fn optional_clause(&mut self, terminator: TokenKind) -> Result<Option<Box<Node>>> {
        if self.check(terminator)? {
            Ok(None)
        } else {
            Ok(Some(Box::new(self.super_expression()?)))
        }
    }

    fn while_statement(&mut self) -> Result<Node> {
        self.bump()?; // while
        let condition = self.parenthesized()?;
        let body = self.branch()?;
        Ok(Node::While {
            condition: Box::new(condition),
            body: Box::new(body),
        })
    }

    fn do_while_statement(&mut self) -> Result<Node> {
        self.bump()?; // do
        let body = self.branch()?;
        self.skip_newlines()?;
        if !self.check_word("while")? {
            let token = self.peek()?.clone();
            return Err(unexpected_token("'while'", &token.describe(), token.line));
        }
        self.bump()?;
        let condition = self.parenthesized()?;
        Ok(Node::DoWhile {
            body: Box::new(body),
            condition: Box::new(condition),
        })
    }

    fn switch_statement(&mut self) -> Result<Node> {
        self.bump()?; // switch
        let subject = self.parenthesized()?;
        self.skip_newlines()?;
        self.expect(TokenKind::LBrace, "'{'")?;

        let mut cases = Vec::new();
        loop {
            self.skip_separators()?;
            self.comments.clear();
            let token = self.peek()?.clone();
            let test = match token.kind {
                TokenKind::RBrace => break,
                TokenKind::Identifier if token.lexeme == "case" => {
                    self.bump()?;
                    Some(Box::new(self.ternary()?))
                }
                TokenKind::Identifier if token.lexeme == "default" => {
                    self.bump()?;
                    None
                }
                _ => {
                    return Err(unexpected_token(
                        "'case' or 'default'",
                        &token.describe(),
                        token.line,
                    ))
                }
            };
            self.expect(TokenKind::Colon, "':'")?;

            let mut body = Vec::new();
            loop {
                self.skip_separators()?;
                self.drain_comments(&mut body);
                let token = self.peek()?;
                let ends = matches!(token.kind, TokenKind::RBrace | TokenKind::EndOfInput)
                    || token.is_word("case")
                    || token.is_word("default");
                if ends {
                    break;
                }
                body.push(self.statement()?);
            }
            cases.push(Node::Case { test, body });
        }
        self.expect(TokenKind::RBrace, "'}'")?;

        Ok(Node::Switch {
            subject: Box::new(subject),
            cases,
        })
    }

    fn return_statement(&mut self) -> Result<Node> {
        self.bump()?; // return
        let value = match self.peek_kind()? {
            TokenKind::LineTerminator
            | TokenKind::Semicolon
            | TokenKind::RBrace
            | TokenKind::EndOfInput => None,
            _ => Some(Box::new(self.super_expression()?)),
        };
        Ok(Node::Return(value))
    }

    /// `assert condition [: message]`
    fn assert_statement(&mut self) -> Result<Node> {
        let keyword = self.bump()?;
        let mut args = vec![self.ternary()?];
        if self.check(TokenKind::Colon)? {
            self.bump()?;
            args.push(self.ternary()?);
        }
        Ok(Node::FunctionCall {
            callee: Box::new(Node::variable(keyword.lexeme, Kind::Function)),
            args,
        })
    }

    fn class_declaration(&mut self) -> Result<Node> {
        self.bump()?; // class
        let name = self.expect_identifier("class name")?;
        self.skip_newlines()?;
        self.expect(TokenKind::LBrace, "'{'")?;

        self.scope.enter();
        let mut fields = Vec::new();
        let mut methods = Vec::new();
        loop {
            self.skip_separators()?;
            self.comments.clear();
            let token = self.peek()?.clone();
            if token.kind == TokenKind::RBrace {
                break;
            }

            let member = if token.lexeme == name && self.peek_nth(1)?.kind == TokenKind::LParen {
                self.bump()?;
                self.function_declaration(name.clone())?
            } else if token.kind == TokenKind::Identifier && dictionary::is_type(&token.lexeme) {
                self.super_expression()?
            } else {
                return Err(unexpected_token(
                    "field or method declaration",
                    &token.describe(),
                    token.line,
                ));
            };

            let member = match self.finish_statement(member)? {
                Node::Statement(inner) => *inner,
                other => other,
            };
            match member {
                Node::FunctionDeclaration { .. } => methods.push(member),
                _ => fields.push(member),
            }
        }
        self.scope.exit();
        self.expect(TokenKind::RBrace, "'}'")?;

        self.scope.declare(name.as_str(), Kind::Function, None);
        Ok(Node::Class {
            name,
            fields,
            methods,
        })
    }

    // ---- expressions ----

    /// Typed declaration, function declaration, assignment or expression
    fn super_expression(&mut self) -> Result<Node> {
        let token = self.peek()?.clone();

        if token.kind == TokenKind::Identifier {
            let next = self.peek_nth(1)?.clone();

            if dictionary::is_type(&token.lexeme)
                && !matches!(
                    next.kind,
                    TokenKind::Accessor | TokenKind::LParen | TokenKind::LBracket
                )
            {
                return self.typed_declaration();
            }

            let callable = dictionary::keyword_rename(&token.lexeme).is_some()
                || self.scope.kind_of(&token.lexeme) == Kind::Function;
            if next.kind == TokenKind::Identifier
                && next.line == token.line
                && !callable
                && !dictionary::is_reserved_word(&token.lexeme)
                && !matches!(next.lexeme.as_str(), "in" | "as" | "instanceof")
            {
                return Err(syntax_error(
                    format!("Unknown type '{}'", token.lexeme),
                    token.line,
                ));
            }
        }

        let target = self.ternary()?;

        let operator = match self.peek_kind()? {
            TokenKind::Assign => AssignOp::Assign,
            TokenKind::PlusAssign => AssignOp::Add,
            TokenKind::MinusAssign => AssignOp::Subtract,
            TokenKind::StarAssign => AssignOp::Multiply,
            TokenKind::SlashAssign => AssignOp::Divide,
            _ => return Ok(target),
        };

        if !matches!(
            target,
            Node::Variable { .. } | Node::Property { .. } | Node::ArrayAccessor { .. }
        ) {
            let token = self.peek()?.clone();
            return Err(syntax_error(
                format!("Invalid assignment target before '{}'", token.lexeme),
                token.line,
            ));
        }

        self.bump()?;
        self.skip_newlines()?;
        let value = self.super_expression()?;

        Ok(Node::Assign {
            target: Box::new(target),
            operator,
            value: Box::new(value),
        })
    }

    fn typed_declaration(&mut self) -> Result<Node> {
        let type_token = self.bump()?;
        let name_token = self.peek()?.clone();
        if name_token.kind != TokenKind::Identifier || dictionary::is_reserved_word(&name_token.lexeme)
        {
            return Err(syntax_error(
                format!("Expected variable name after type '{}'", type_token.lexeme),
                name_token.line,
            ));
        }
        self.bump()?;
        let name = name_token.lexeme;

        if self.check(TokenKind::LParen)? {
            return self.function_declaration(name);
        }

        let declared = dictionary::type_kind(&type_token.lexeme).unwrap_or_default();
        let value = if self.check(TokenKind::Assign)? {
            self.bump()?;
            self.skip_newlines()?;
            Some(Box::new(self.super_expression()?))
        } else {
            None
        };

        let kind = match value.as_deref().map(Node::static_kind) {
            Some(Kind::Any) | None => declared,
            Some(inferred) => inferred,
        };

        let node = Node::VariableDeclaration {
            name: name.clone(),
            kind,
            value,
        };
        self.scope.declare(name, kind, Some(node.clone()));
        Ok(node)
    }

    /// `name(params) { body }` after the return type and name were consumed
    fn function_declaration(&mut self, name: String) -> Result<Node> {
        self.scope.enter();
        let params = self.parameters()?;
        self.skip_newlines()?;
        let body = self.braced_body()?;
        self.scope.exit();

        let node = Node::FunctionDeclaration {
            name: Some(name.clone()),
            params,
            body,
        };
        self.scope.declare(name, Kind::Function, Some(node.clone()));
        Ok(node)
    }

    /// `(Type a, b = 1)`, declaring each parameter in the current frame
    fn parameters(&mut self) -> Result<Vec<String>> {
        self.expect(TokenKind::LParen, "'('")?;
        let mut params = Vec::new();
        self.skip_newlines()?;

        while !self.check(TokenKind::RParen)? {
            let mut kind = Kind::Any;
            if self.peek_nth(1)?.kind == TokenKind::Identifier {
                let type_name = self.bump()?.lexeme;
                kind = dictionary::type_kind(&type_name).unwrap_or_default();
            }
            let name = self.expect_identifier("parameter name")?;
            if self.check(TokenKind::Assign)? {
                // Default values have no counterpart in the emitted function
                self.bump()?;
                self.ternary()?;
            }
            self.scope.declare(name.as_str(), kind, None);
            params.push(name);

            self.skip_newlines()?;
            if !self.check(TokenKind::Comma)? {
                break;
            }
            self.bump()?;
            self.skip_newlines()?;
        }

        self.expect(TokenKind::RParen, "')'")?;
        Ok(params)
    }

    fn ternary(&mut self) -> Result<Node> {
        let condition = self.logic_or()?;
        if !self.check(TokenKind::Question)? {
            return Ok(condition);
        }
        self.bump()?;

        // Elvis `a ?: b`
        if self.check(TokenKind::Colon)? {
            self.bump()?;
            self.skip_newlines()?;
            let fallback = self.ternary()?;
            return Ok(Node::LogicOperator {
                operator: LogicOp::Or,
                left: Box::new(condition),
                right: Box::new(fallback),
            });
        }

        self.skip_newlines()?;
        let then = self.ternary()?;
        self.skip_newlines()?;
        if !self.check(TokenKind::Colon)? {
            return Err(self.missing("':' in ternary expression")?);
        }
        self.bump()?;
        self.skip_newlines()?;
        let otherwise = self.ternary()?;

        Ok(Node::Ternary {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        })
    }

    fn logic_or(&mut self) -> Result<Node> {
        let mut left = self.logic_and()?;
        while self.check(TokenKind::Or)? {
            self.bump()?;
            self.skip_newlines()?;
            let right = self.logic_and()?;
            left = Node::LogicOperator {
                operator: LogicOp::Or,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn logic_and(&mut self) -> Result<Node> {
        let mut left = self.comparison()?;
        while self.check(TokenKind::And)? {
            self.bump()?;
            self.skip_newlines()?;
            let right = self.comparison()?;
            left = Node::LogicOperator {
                operator: LogicOp::And,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn comparison(&mut self) -> Result<Node> {
        let mut left = self.shift()?;
        loop {
            let operator = match self.peek_kind()? {
                TokenKind::Less => ComparisonOp::Less,
                TokenKind::LessEqual => ComparisonOp::LessEqual,
                TokenKind::Greater => ComparisonOp::Greater,
                TokenKind::GreaterEqual => ComparisonOp::GreaterEqual,
                TokenKind::Equal => ComparisonOp::Equal,
                TokenKind::NotEqual => ComparisonOp::NotEqual,
                TokenKind::Spaceship => ComparisonOp::Spaceship,
                _ => return Ok(left),
            };
            self.bump()?;
            self.skip_newlines()?;
            let right = self.shift()?;
            left = Node::Comparison {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
    }

    fn shift(&mut self) -> Result<Node> {
        let mut left = self.additive()?;
        loop {
            let operator = match self.peek_kind()? {
                TokenKind::ShiftLeft => BinaryOp::ShiftLeft,
                TokenKind::ShiftRight => BinaryOp::ShiftRight,
                _ => return Ok(left),
            };
            self.bump()?;
            self.skip_newlines()?;
            let right = self.additive()?;
            left = binary(operator, left, right);
        }
    }

    fn additive(&mut self) -> Result<Node> {
        let left = self.term()?;
        self.additive_from(left)
    }

    fn additive_from(&mut self, mut left: Node) -> Result<Node> {
        loop {
            let operator = match self.peek_kind()? {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Subtract,
                _ => return Ok(left),
            };
            self.bump()?;
            self.skip_newlines()?;
            let right = self.term()?;
            left = binary(operator, left, right);
        }
    }

    fn term(&mut self) -> Result<Node> {
        let left = self.unary()?;
        self.term_from(left)
    }

    fn term_from(&mut self, mut left: Node) -> Result<Node> {
        loop {
            let operator = match self.peek_kind()? {
                TokenKind::Star => BinaryOp::Multiply,
                TokenKind::Slash => BinaryOp::Divide,
                TokenKind::Percent => BinaryOp::Modulo,
                _ => return Ok(left),
            };
            self.bump()?;
            self.skip_newlines()?;
            let right = self.unary()?;
            left = binary(operator, left, right);
        }
    }

    fn unary(&mut self) -> Result<Node> {
        let operator = match self.peek_kind()? {
            TokenKind::Minus => UnaryOp::Negate,
            TokenKind::Not => UnaryOp::Not,
            TokenKind::Increment => UnaryOp::PreIncrement,
            TokenKind::Decrement => UnaryOp::PreDecrement,
            TokenKind::Plus => {
                self.bump()?;
                return self.unary();
            }
            TokenKind::LParen if self.is_cast()? => {
                self.bump()?; // (
                let target_type = self.bump()?.lexeme;
                self.bump()?; // )
                let operand = self.unary()?;
                return Ok(Node::CastOperator {
                    target_type,
                    operand: Box::new(operand),
                });
            }
            _ => return self.postfix(),
        };
        self.bump()?;
        let operand = self.unary()?;

        // Fold negative literals so they stay constants
        if let (UnaryOp::Negate, Node::Constant(Literal::Number(text))) = (operator, &operand) {
            return Ok(Node::number(format!("-{}", text)));
        }

        Ok(Node::UnaryOperator {
            operator,
            operand: Box::new(operand),
        })
    }

    /// `(Type)` directly followed by an operand
    fn is_cast(&mut self) -> Result<bool> {
        let name = self.peek_nth(1)?.clone();
        if name.kind != TokenKind::Identifier
            || !dictionary::is_type(&name.lexeme)
            || self.peek_nth(2)?.kind != TokenKind::RParen
        {
            return Ok(false);
        }
        Ok(matches!(
            self.peek_nth(3)?.kind,
            TokenKind::Identifier
                | TokenKind::Number
                | TokenKind::String(_)
                | TokenKind::LParen
                | TokenKind::LBracket
        ))
    }

    fn postfix(&mut self) -> Result<Node> {
        let node = self.factor()?;
        self.postfix_from(node)
    }

    fn postfix_from(&mut self, mut node: Node) -> Result<Node> {
        loop {
            let token = self.peek()?.clone();
            node = match token.kind {
                TokenKind::Accessor => {
                    self.bump()?;
                    self.member(node)?
                }
                // Safe navigation `a?.b` renders as plain member access
                TokenKind::Question if self.peek_nth(1)?.kind == TokenKind::Accessor => {
                    self.bump()?;
                    self.bump()?;
                    self.member(node)?
                }
                TokenKind::LineTerminator if self.chain_continues()? => {
                    self.skip_newlines()?;
                    continue;
                }
                TokenKind::LBracket => {
                    self.bump()?;
                    self.skip_newlines()?;
                    let index = self.super_expression()?;
                    self.skip_newlines()?;
                    self.expect(TokenKind::RBracket, "']'")?;
                    Node::ArrayAccessor {
                        target: Box::new(node),
                        index: Box::new(index),
                    }
                }
                TokenKind::Increment | TokenKind::Decrement => {
                    self.bump()?;
                    let operator = if token.kind == TokenKind::Increment {
                        UnaryOp::PostIncrement
                    } else {
                        UnaryOp::PostDecrement
                    };
                    Node::UnaryOperator {
                        operator,
                        operand: Box::new(node),
                    }
                }
                TokenKind::Range if token.lexeme.starts_with("..") => {
                    self.bump()?;
                    self.range(node, &token.lexeme[2..], token.line)?
                }
                TokenKind::Identifier if token.lexeme == "as" => {
                    self.bump()?;
                    let target_type = self.expect_identifier("type name after 'as'")?;
                    Node::CastOperator {
                        target_type,
                        operand: Box::new(node),
                    }
                }
                _ => return Ok(node),
            };
        }
    }

    /// Whether a `.member` follows on one of the next lines
    fn chain_continues(&mut self) -> Result<bool> {
        let mut i = 0;
        while self.peek_nth(i)?.kind == TokenKind::LineTerminator {
            i += 1;
        }
        Ok(self.peek_nth(i)?.kind == TokenKind::Accessor)
    }

    /// Member access or method call after the accessor was consumed
    fn member(&mut self, receiver: Node) -> Result<Node> {
        let token = self.peek()?.clone();
        if token.kind != TokenKind::Identifier {
            return Err(unexpected_token(
                "member name after '.'",
                &token.describe(),
                token.line,
            ));
        }
        self.bump()?;

        let property = Node::Property {
            receiver: Box::new(receiver),
            name: token.lexeme,
        };

        if self.check(TokenKind::LParen)? || self.check(TokenKind::LBrace)? {
            let args = self.call_arguments()?;
            return Ok(Node::FunctionCall {
                callee: Box::new(property),
                args,
            });
        }
        Ok(property)
    }

    /// `(args)` and/or a trailing closure
    fn call_arguments(&mut self) -> Result<Vec<Node>> {
        let mut args = if self.check(TokenKind::LParen)? {
            self.arguments()?
        } else {
            Vec::new()
        };
        if self.check(TokenKind::LBrace)? {
            args.push(self.closure()?);
        }
        Ok(args)
    }

    /// Parenthesised argument list; named arguments collapse into a leading map
    fn arguments(&mut self) -> Result<Vec<Node>> {
        self.expect(TokenKind::LParen, "'('")?;
        let mut args = Vec::new();
        let mut named = Vec::new();
        self.skip_newlines()?;

        while !self.check(TokenKind::RParen)? {
            if self.is_map_key()? {
                named.push(self.map_element()?);
            } else {
                args.push(self.ternary()?);
            }
            self.skip_newlines()?;
            if !self.check(TokenKind::Comma)? {
                break;
            }
            self.bump()?;
            self.skip_newlines()?;
        }
        self.expect(TokenKind::RParen, "')'")?;

        if !named.is_empty() {
            args.insert(0, Node::Map(named));
        }
        Ok(args)
    }

    fn factor(&mut self) -> Result<Node> {
        let token = self.peek()?.clone();

        match token.kind {
            TokenKind::Number => {
                self.bump()?;
                Ok(Node::number(token.lexeme))
            }
            TokenKind::String(style) => {
                self.bump()?;
                Ok(Node::Constant(Literal::String {
                    value: token.lexeme,
                    style,
                }))
            }
            TokenKind::Range => {
                self.bump()?;
                let (start, end) = token.lexeme.split_once("..").unwrap_or(("", ""));
                if start.is_empty() {
                    return Err(unexpected_token("range start", &token.describe(), token.line));
                }
                let start = self.bound(start);
                self.range(start, end, token.line)
            }
            TokenKind::LParen => {
                self.bump()?;
                self.skip_newlines()?;
                let inner = self.super_expression()?;
                self.skip_newlines()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            TokenKind::LBracket => self.list_or_map(),
            TokenKind::LBrace => self.closure(),
            TokenKind::Identifier => match token.lexeme.as_str() {
                "true" | "false" => {
                    self.bump()?;
                    Ok(Node::Constant(Literal::Boolean(token.lexeme == "true")))
                }
                "null" => {
                    self.bump()?;
                    Ok(Node::Constant(Literal::Null))
                }
                "new" => self.new_expression(),
                _ => self.identifier(),
            },
            _ => Err(self.missing("expression")?),
        }
    }

    /// Node for a bound scanned as part of a range token
    fn bound(&self, text: &str) -> Node {
        if text.starts_with(|c: char| c.is_ascii_digit()) {
            Node::number(text)
        } else {
            Node::variable(text, self.scope.kind_of(text))
        }
    }

    /// Complete `start..end`; an empty `end` is parsed as an expression
    fn range(&mut self, start: Node, end: &str, line: u32) -> Result<Node> {
        let end = if end.is_empty() {
            if matches!(
                self.peek_kind()?,
                TokenKind::LineTerminator | TokenKind::EndOfInput | TokenKind::Semicolon
            ) {
                return Err(syntax_error("Expected range end", line));
            }
            self.additive()?
        } else {
            let atom = self.bound(end);
            let atom = self.postfix_from(atom)?;
            let atom = self.term_from(atom)?;
            self.additive_from(atom)?
        };
        Ok(Node::Range {
            start: Box::new(start),
            end: Box::new(end),
        })
    }

    fn identifier(&mut self) -> Result<Node> {
        let token = self.bump()?;
        let name = token.lexeme;

        if dictionary::is_reserved_word(&name) {
            return Err(unexpected_token(
                "expression",
                &format!("'{}'", name),
                token.line,
            ));
        }

        let kind = self.scope.kind_of(&name);
        let callee = Node::variable(name.as_str(), kind);

        if self.check(TokenKind::LParen)? || self.check(TokenKind::LBrace)? {
            let args = self.call_arguments()?;
            return Ok(Node::FunctionCall {
                callee: Box::new(callee),
                args,
            });
        }

        let renamed = dictionary::keyword_rename(&name).is_some();
        if renamed || kind == Kind::Function {
            if self.starts_command_argument()? {
                let mut args = vec![self.ternary()?];
                while self.check(TokenKind::Comma)? {
                    self.bump()?;
                    self.skip_newlines()?;
                    args.push(self.ternary()?);
                }
                return Ok(Node::FunctionCall {
                    callee: Box::new(callee),
                    args,
                });
            }
            if renamed {
                return Ok(Node::FunctionCall {
                    callee: Box::new(callee),
                    args: Vec::new(),
                });
            }
        }

        Ok(callee)
    }

    /// Whether the next token can begin an argument of a call without parentheses
    fn starts_command_argument(&mut self) -> Result<bool> {
        let token = self.peek()?;
        Ok(match token.kind {
            TokenKind::Number
            | TokenKind::String(_)
            | TokenKind::Range
            | TokenKind::LBracket
            | TokenKind::Not => true,
            TokenKind::Identifier => !matches!(token.lexeme.as_str(), "in" | "as" | "instanceof"),
            _ => false,
        })
    }

    fn new_expression(&mut self) -> Result<Node> {
        self.bump()?; // new
        let class = self.expect_identifier("class name after 'new'")?;
        let args = if self.check(TokenKind::LParen)? {
            self.arguments()?
        } else {
            Vec::new()
        };
        Ok(Node::New { class, args })
    }

    fn list_or_map(&mut self) -> Result<Node> {
        self.bump()?; // [
        self.skip_newlines()?;

        if self.check(TokenKind::Colon)? && self.peek_nth(1)?.kind == TokenKind::RBracket {
            self.bump()?;
            self.bump()?;
            return Ok(Node::Map(Vec::new()));
        }

        let is_map = self.is_map_key()?;
        let mut elements = Vec::new();
        while !self.check(TokenKind::RBracket)? {
            if is_map {
                elements.push(self.map_element()?);
            } else {
                elements.push(self.ternary()?);
            }
            self.skip_newlines()?;
            if !self.check(TokenKind::Comma)? {
                break;
            }
            self.bump()?;
            self.skip_newlines()?;
        }
        self.expect(TokenKind::RBracket, "']'")?;

        Ok(if is_map {
            Node::Map(elements)
        } else {
            Node::Array(elements)
        })
    }

    /// `name:`, `'text':`, `1:` or `(expr):` at the current position
    fn is_map_key(&mut self) -> Result<bool> {
        let token = self.peek()?.clone();
        match token.kind {
            TokenKind::Identifier | TokenKind::String(_) | TokenKind::Number => {
                Ok(self.peek_nth(1)?.kind == TokenKind::Colon)
            }
            TokenKind::LParen => {
                let mut depth = 0usize;
                let mut i = 0;
                loop {
                    match self.peek_nth(i)?.kind {
                        TokenKind::LParen => depth += 1,
                        TokenKind::RParen => {
                            depth -= 1;
                            if depth == 0 {
                                return Ok(self.peek_nth(i + 1)?.kind == TokenKind::Colon);
                            }
                        }
                        TokenKind::EndOfInput => return Ok(false),
                        _ => {}
                    }
                    i += 1;
                }
            }
            _ => Ok(false),
        }
    }

    fn map_element(&mut self) -> Result<Node> {
        let token = self.peek()?.clone();
        let key = match token.kind {
            TokenKind::Identifier => {
                self.bump()?;
                Node::string(token.lexeme)
            }
            TokenKind::String(style) => {
                self.bump()?;
                Node::Constant(Literal::String {
                    value: token.lexeme,
                    style,
                })
            }
            TokenKind::Number => {
                self.bump()?;
                Node::number(token.lexeme)
            }
            _ => {
                self.expect(TokenKind::LParen, "map key")?;
                let key = self.super_expression()?;
                self.expect(TokenKind::RParen, "')'")?;
                key
            }
        };
        self.expect(TokenKind::Colon, "':' after map key")?;
        self.skip_newlines()?;
        let value = self.ternary()?;

        Ok(Node::MapElement {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    /// `{ a, b -> body }` or `{ body }` with an implicit `it`
    fn closure(&mut self) -> Result<Node> {
        self.expect(TokenKind::LBrace, "'{'")?;
        self.skip_newlines()?;
        self.scope.enter();

        let explicit = self.closure_params_len()?;
        let mut params = Vec::new();
        match explicit {
            Some(len) => {
                let mut group: Vec<Token> = Vec::new();
                for _ in 0..len {
                    let token = self.bump()?;
                    if token.kind == TokenKind::Comma {
                        params.push(self.declare_param(&group, token.line)?);
                        group.clear();
                    } else {
                        group.push(token);
                    }
                }
                if let Some(first) = group.first() {
                    let line = first.line;
                    params.push(self.declare_param(&group, line)?);
                }
                self.bump()?; // ->
            }
            None => {
                self.scope
                    .declare(dictionary::IMPLICIT_PARAMETER, Kind::Any, None);
            }
        }

        let body = self.block_body()?;
        self.expect(TokenKind::RBrace, "'}'")?;
        self.scope.exit();

        if explicit.is_none()
            && body
                .iter()
                .any(|node| node.references(dictionary::IMPLICIT_PARAMETER))
        {
            params.push(dictionary::IMPLICIT_PARAMETER.to_string());
        }

        Ok(Node::FunctionDeclaration {
            name: None,
            params,
            body,
        })
    }

    /// Number of tokens before a closure's `->`, if it has one
    fn closure_params_len(&mut self) -> Result<Option<usize>> {
        for i in 0..CLOSURE_PARAMS_LOOKAHEAD {
            match self.peek_nth(i)?.kind {
                TokenKind::Pointer => return Ok(Some(i)),
                TokenKind::Identifier | TokenKind::Comma => {}
                _ => return Ok(None),
            }
        }
        Ok(None)
    }

    /// `name` or `Type name` from a closure parameter list
    fn declare_param(&mut self, group: &[Token], line: u32) -> Result<String> {
        let (kind, name) = match group {
            [name] => (Kind::Any, name),
            [type_name, name] => (
                dictionary::type_kind(&type_name.lexeme).unwrap_or_default(),
                name,
            ),
            _ => return Err(syntax_error("Malformed closure parameter", line)),
        };
        self.scope.declare(name.lexeme.as_str(), kind, None);
        Ok(name.lexeme.clone())
    }

    // ---- token helpers ----

    fn parenthesized(&mut self) -> Result<Node> {
        self.expect(TokenKind::LParen, "'('")?;
        self.skip_newlines()?;
        let node = self.super_expression()?;
        self.skip_newlines()?;
        self.expect(TokenKind::RParen, "')'")?;
        Ok(node)
    }

    fn fill(&mut self, n: usize) -> Result<()> {
        while self.lookahead.len() < n {
            let token = self.tokenizer.next_token()?;
            if token.kind == TokenKind::Comment {
                self.comments.push_back(token);
            } else {
                self.lookahead.push_back(token);
            }
        }
        Ok(())
    }

    fn peek(&mut self) -> Result<&Token> {
        self.peek_nth(0)
    }

    fn peek_nth(&mut self, n: usize) -> Result<&Token> {
        self.fill(n + 1)?;
        Ok(&self.lookahead[n])
    }

    fn peek_kind(&mut self) -> Result<TokenKind> {
        Ok(self.peek()?.kind)
    }

    fn bump(&mut self) -> Result<Token> {
        self.fill(1)?;
        let token = match self.lookahead.pop_front() {
            Some(token) => token,
            None => Token::end(self.tokenizer.line()),
        };
        match token.kind {
            TokenKind::LBrace => self.brace_depth += 1,
            TokenKind::RBrace => self.brace_depth = self.brace_depth.saturating_sub(1),
            _ => {}
        }
        if token.kind != TokenKind::LineTerminator {
            self.last_line = token.line;
        }
        self.previous = token.kind;
        Ok(token)
    }

    fn check(&mut self, kind: TokenKind) -> Result<bool> {
        Ok(self.peek_kind()? == kind)
    }

    fn check_word(&mut self, word: &str) -> Result<bool> {
        Ok(self.peek()?.is_word(word))
    }

    fn word_after_newlines(&mut self, word: &str) -> Result<bool> {
        let mut i = 0;
        while self.peek_nth(i)?.kind == TokenKind::LineTerminator {
            i += 1;
        }
        Ok(self.peek_nth(i)?.is_word(word))
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token> {
        if self.check(kind)? {
            self.bump()
        } else {
            Err(self.missing(what)?)
        }
    }

    /// Error for a missing `what` at the current position
    ///
    /// When line breaks were skipped to get here, the statement ended at the
    /// last of them: the error is reported on the line of the last consumed
    /// token and one line break is put back so recovery stops before the
    /// next line.
    fn missing(&mut self, what: &str) -> Result<TranslateError> {
        let token = self.peek()?.clone();
        if self.previous == TokenKind::LineTerminator && token.kind != TokenKind::LineTerminator {
            let line = self.last_line;
            self.lookahead
                .push_front(Token::new(TokenKind::LineTerminator, "\n", line));
            self.previous = TokenKind::EndOfInput;
            return Ok(unexpected_token(what, "end of line", line));
        }
        Ok(unexpected_token(what, &token.describe(), token.line))
    }

    fn expect_identifier(&mut self, what: &str) -> Result<String> {
        let token = self.peek()?.clone();
        if token.kind == TokenKind::Identifier && !dictionary::is_reserved_word(&token.lexeme) {
            self.bump()?;
            Ok(token.lexeme)
        } else {
            Err(unexpected_token(what, &token.describe(), token.line))
        }
    }

    fn skip_newlines(&mut self) -> Result<()> {
        while self.check(TokenKind::LineTerminator)? {
            self.bump()?;
        }
        Ok(())
    }

    fn skip_separators(&mut self) -> Result<()> {
        while matches!(
            self.peek_kind()?,
            TokenKind::LineTerminator | TokenKind::Semicolon
        ) {
            self.bump()?;
        }
        Ok(())
    }

    fn drain_comments(&mut self, body: &mut Vec<Node>) {
        body.extend(self.comments.drain(..).map(|c| Node::Comment(c.lexeme)));
    }
}

fn binary(operator: BinaryOp, left: Node, right: Node) -> Node {
    Node::BinaryOperator {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ErrorKind;

    fn parse_one(source: &str) -> Node {
        let mut analyser = Analyser::new(source).unwrap();
        analyser.parse().unwrap().unwrap()
    }

    fn parse_all(source: &str) -> Vec<Node> {
        Analyser::new(source).unwrap().parse_all().unwrap()
    }

    #[test]
    fn test_parse_empty_source() {
        let mut analyser = Analyser::new("").unwrap();
        assert!(analyser.parse().unwrap().is_none());
    }

    #[test]
    fn test_parse_binary_precedence() {
        let node = parse_one("1 + 2 * 3");
        match node {
            Node::BinaryOperator {
                operator: BinaryOp::Add,
                right,
                ..
            } => assert!(matches!(
                *right,
                Node::BinaryOperator {
                    operator: BinaryOp::Multiply,
                    ..
                }
            )),
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn test_semicolon_wraps_statement() {
        let node = parse_one("x;");
        assert!(matches!(node, Node::Statement(_)));
    }

    #[test]
    fn test_typed_declaration_records_kind() {
        let mut analyser = Analyser::new("def a = [1, 2]\nint n\nString s = foo()").unwrap();
        analyser.parse_all().unwrap();
        assert_eq!(analyser.scope().kind_of("a"), Kind::Array);
        assert_eq!(analyser.scope().kind_of("n"), Kind::Number);
        assert_eq!(analyser.scope().kind_of("s"), Kind::String);
    }

    #[test]
    fn test_declaration_copies_variable_kind() {
        let mut analyser = Analyser::new("def m = [:]\ndef copy = m").unwrap();
        analyser.parse_all().unwrap();
        assert_eq!(analyser.scope().kind_of("copy"), Kind::Map);
    }

    #[test]
    fn test_reassignment_keeps_kind() {
        let mut analyser = Analyser::new("def a = [1]\na = 5").unwrap();
        analyser.parse_all().unwrap();
        assert_eq!(analyser.scope().kind_of("a"), Kind::Array);
    }

    #[test]
    fn test_variable_carries_parse_time_kind() {
        let nodes = parse_all("def a = 0..3\na");
        assert_eq!(
            nodes[1],
            Node::Variable {
                name: "a".to_string(),
                kind: Kind::Array
            }
        );
    }

    #[test]
    fn test_missing_ternary_colon_is_error_node() {
        let node = parse_one("1 ? 2");
        match node {
            Node::Error { message, line } => {
                assert!(message.contains("':'"));
                assert_eq!(line, 1);
            }
            other => panic!("expected error node, got {:?}", other),
        }
    }

    #[test]
    fn test_error_recovery_continues_with_next_statement() {
        let nodes = parse_all("def = 3\nx = 1");
        assert!(matches!(nodes[0], Node::Error { .. }));
        assert!(matches!(nodes[1], Node::Assign { .. }));
    }

    #[test]
    fn test_unclosed_paren_ends_at_line_break() {
        let nodes = parse_all("foo(1\ny = 3");
        assert_eq!(
            nodes[0],
            Node::Error {
                message: "Expected ')', got end of line".to_string(),
                line: 1
            }
        );
        assert!(matches!(nodes[1], Node::Assign { .. }));
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_unclosed_inside_block_skips_to_block_end() {
        let nodes = parse_all("if (a) {\n  b = [1\n  c = 2\n}\nd = 4");
        assert!(matches!(nodes[0], Node::Error { line: 2, .. }));
        assert_eq!(
            nodes[1],
            Node::Assign {
                target: Box::new(Node::variable("d", Kind::Any)),
                operator: AssignOp::Assign,
                value: Box::new(Node::number("4")),
            }
        );
    }

    #[test]
    fn test_assert_statement() {
        let node = parse_one("assert n == 3 : 'three'");
        match node {
            Node::FunctionCall { callee, args } => {
                assert_eq!(*callee, Node::variable("assert", Kind::Function));
                assert_eq!(args.len(), 2);
                assert!(matches!(args[0], Node::Comparison { .. }));
            }
            other => panic!("unexpected node {:?}", other),
        }
        assert!(matches!(parse_one("def assert = 1"), Node::Error { .. }));
    }

    #[test]
    fn test_missing_variable_name_message() {
        let node = parse_one("int = 4");
        assert_eq!(
            node,
            Node::Error {
                message: "Expected variable name after type 'int'".to_string(),
                line: 1
            }
        );
    }

    #[test]
    fn test_unknown_type_message() {
        let node = parse_one("Foo x = 1");
        assert!(matches!(node, Node::Error { ref message, .. } if message == "Unknown type 'Foo'"));
    }

    #[test]
    fn test_missing_paren_and_bracket() {
        let node = parse_one("(1 + 2");
        assert!(matches!(&node, Node::Error { message, .. } if message == "Expected ')', got end of input"));
        let node = parse_one("[1, 2");
        assert!(matches!(&node, Node::Error { message, .. } if message.contains("']'")));
    }

    #[test]
    fn test_lexical_error_propagates() {
        let mut analyser = Analyser::new("x = 1\ny = 'open").unwrap();
        let error = analyser.parse_all().unwrap_err();
        assert_eq!(error.kind, ErrorKind::LexicalError);
    }

    fn initializer(node: Node) -> Node {
        match node {
            Node::VariableDeclaration {
                value: Some(value), ..
            } => *value,
            other => panic!("expected declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_closure_implicit_parameter() {
        let node = initializer(parse_one("def f = { it * 2 }"));
        assert!(matches!(node, Node::FunctionDeclaration { ref params, .. } if params == &["it"]));

        let node = initializer(parse_one("def g = { 42 }"));
        assert!(matches!(node, Node::FunctionDeclaration { ref params, .. } if params.is_empty()));
    }

    #[test]
    fn test_top_level_brace_is_block() {
        assert!(matches!(parse_one("{ x }"), Node::Block(_)));
    }

    #[test]
    fn test_closure_explicit_parameters() {
        let node = initializer(parse_one("def f = { int a, b -> a + b }"));
        match node {
            Node::FunctionDeclaration { params, body, .. } => {
                assert_eq!(params, vec!["a", "b"]);
                assert!(matches!(
                    &body[0],
                    Node::BinaryOperator { left, .. }
                        if matches!(**left, Node::Variable { kind: Kind::Number, .. })
                ));
            }
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn test_closure_scope_does_not_leak() {
        let mut analyser = Analyser::new("def f = { x -> x }\nx").unwrap();
        let nodes = analyser.parse_all().unwrap();
        assert_eq!(nodes[1], Node::variable("x", Kind::Any));
        assert_eq!(analyser.scope().kind_of("f"), Kind::Function);
    }

    #[test]
    fn test_trailing_closure_folded_into_call() {
        let node = parse_one("list.each() { println it }");
        match node {
            Node::FunctionCall { args, .. } => {
                assert_eq!(args.len(), 1);
                assert!(matches!(args[0], Node::FunctionDeclaration { .. }));
            }
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn test_command_call_without_parentheses() {
        let node = parse_one("println 'hi', 2");
        assert!(matches!(node, Node::FunctionCall { ref args, .. } if args.len() == 2));
    }

    #[test]
    fn test_for_in_and_classic_for() {
        let nodes = parse_all("for (x in [1, 2]) { x }\nfor (int i = 0; i < 3; i++) { }");
        assert!(matches!(nodes[0], Node::ForIn { .. }));
        assert!(matches!(nodes[1], Node::For { .. }));
    }

    #[test]
    fn test_if_else_chain() {
        let node = parse_one("if (a) { b }\nelse if (c) d\nelse { e }");
        match node {
            Node::If { otherwise, .. } => {
                assert!(matches!(otherwise.as_deref(), Some(Node::If { .. })));
            }
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn test_switch_cases() {
        let node = parse_one("switch (x) {\ncase 1:\n a\n break\ndefault:\n b\n}");
        match node {
            Node::Switch { cases, .. } => {
                assert_eq!(cases.len(), 2);
                assert!(matches!(&cases[0], Node::Case { test: Some(_), body } if body.len() == 2));
                assert!(matches!(&cases[1], Node::Case { test: None, .. }));
            }
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn test_map_literal_keys() {
        let node = parse_one("[a: 1, 'b': 2, (k): 3]");
        match node {
            Node::Map(elements) => assert_eq!(elements.len(), 3),
            other => panic!("unexpected node {:?}", other),
        }
        assert_eq!(parse_one("[:]"), Node::Map(vec![]));
    }

    #[test]
    fn test_cast_forms() {
        assert!(matches!(parse_one("(int) x"), Node::CastOperator { .. }));
        assert!(matches!(parse_one("x as String"), Node::CastOperator { .. }));
        assert!(matches!(parse_one("(x)"), Node::Variable { .. }));
    }

    #[test]
    fn test_comments_become_nodes() {
        let nodes = parse_all("// first\nx = 1");
        assert_eq!(nodes[0], Node::Comment("// first".to_string()));
    }

    #[test]
    fn test_function_declaration() {
        let mut analyser = Analyser::new("def add(int a, b) { return a + b }").unwrap();
        let node = analyser.parse().unwrap().unwrap();
        assert!(matches!(
            node,
            Node::FunctionDeclaration { name: Some(ref n), ref params, .. }
                if n == "add" && params.len() == 2
        ));
        assert_eq!(analyser.scope().kind_of("add"), Kind::Function);
    }

    #[test]
    fn test_class_stub() {
        let node = parse_one("class Point {\n def x = 0\n Point(a) { x = a }\n def show() { x }\n}");
        match node {
            Node::Class {
                name,
                fields,
                methods,
            } => {
                assert_eq!(name, "Point");
                assert_eq!(fields.len(), 1);
                assert_eq!(methods.len(), 2);
            }
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn test_end_of_statement_required() {
        let node = parse_one("a b c");
        assert!(matches!(node, Node::Error { .. }));
        let node = parse_one("1 2");
        assert!(matches!(node, Node::Error { ref message, .. } if message.contains("end of statement")));
    }
}
