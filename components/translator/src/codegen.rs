//! JavaScript generation
//!
//! Every node renders itself from its own fields. Receiver-typed rewrites
//! read the kind stored on the receiver when it was parsed; the scope is
//! never consulted here.

use crate::ast::{renders_native, AssignOp, ComparisonOp, Literal, LogicOp, Node, UnaryOp};
use crate::dictionary::{self, CastRule, MemberRename};
use crate::lexer::StringStyle;
use core_types::Kind;
use std::fmt::{self, Display, Formatter, Write};

/// Iterable adapter turning map entries into `{key, value}` objects
const MAP_ENTRIES_SUFFIX: &str =
    ").map(function(e){ return {key: e[0], value: e[1]}; })";

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Constant(literal) => write_literal(f, literal),

            Node::Variable { name, .. } => f.write_str(name),

            Node::VariableDeclaration { name, value, .. } => match value {
                Some(value) => write!(f, "var {} = {}", name, value),
                None => write!(f, "var {}", name),
            },

            Node::Assign {
                target,
                operator,
                value,
            } => match operator {
                AssignOp::Assign => write!(f, "{} = {}", target, value),
                AssignOp::Divide => write!(f, "{} /= {}", target, value),
                compound => {
                    let Some(binary) = compound.binary() else {
                        return write!(f, "{} = {}", target, value);
                    };
                    let expanded = Node::BinaryOperator {
                        operator: binary,
                        left: target.clone(),
                        right: value.clone(),
                    };
                    write!(f, "{} = {}", target, expanded)
                }
            },

            Node::UnaryOperator { operator, operand } => match operator {
                UnaryOp::Negate => write!(f, "-{}", operand),
                UnaryOp::Not => write!(f, "!{}", operand),
                UnaryOp::PreIncrement => write!(f, "++{}", operand),
                UnaryOp::PreDecrement => write!(f, "--{}", operand),
                UnaryOp::PostIncrement => write!(f, "{}++", operand),
                UnaryOp::PostDecrement => write!(f, "{}--", operand),
            },

            Node::BinaryOperator {
                operator,
                left,
                right,
            } => {
                if renders_native(*operator, left, right) {
                    return write!(f, "({} {} {})", left, operator.symbol(), right);
                }
                match operator.helper() {
                    Some(helper) => write!(f, "{}({}, {})", helper, left, right),
                    None => write!(f, "({} {} {})", left, operator.symbol(), right),
                }
            }

            Node::Comparison {
                operator: ComparisonOp::Spaceship,
                left,
                right,
            } => {
                let helper = dictionary::operator_helper("<=>").unwrap_or("spaceship");
                write!(f, "{}({}, {})", helper, left, right)
            }

            Node::Comparison {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator.symbol(), right),

            Node::LogicOperator {
                operator,
                left,
                right,
            } => {
                let symbol = match operator {
                    LogicOp::And => "&&",
                    LogicOp::Or => "||",
                };
                write!(f, "({} {} {})", left, symbol, right)
            }

            Node::CastOperator {
                target_type,
                operand,
            } => match dictionary::cast_rule(target_type) {
                CastRule::ParseInt => write!(f, "parseInt({})", operand),
                CastRule::ParseFloat => write!(f, "parseFloat({})", operand),
                CastRule::ToString => {
                    write_receiver(f, operand)?;
                    f.write_str(".toString()")
                }
                CastRule::PassThrough => write!(f, "{}", operand),
            },

            Node::Ternary {
                condition,
                then,
                otherwise,
            } => write!(f, "({} ? {} : {})", condition, then, otherwise),

            Node::If {
                condition,
                then,
                otherwise,
            } => {
                write!(f, "if {} ", Condition(condition))?;
                write_branch(f, then)?;
                match otherwise.as_deref() {
                    None => Ok(()),
                    Some(next @ Node::If { .. }) => write!(f, " else {}", next),
                    Some(other) => {
                        f.write_str(" else ")?;
                        write_branch(f, other)
                    }
                }
            }

            Node::Block(body) => write_body(f, body),

            Node::For {
                init,
                condition,
                step,
                body,
            } => {
                f.write_str("for (")?;
                if let Some(init) = init {
                    write!(f, "{}", init)?;
                }
                f.write_str("; ")?;
                if let Some(condition) = condition {
                    write!(f, "{}", Bare(condition))?;
                }
                f.write_str("; ")?;
                if let Some(step) = step {
                    write!(f, "{}", step)?;
                }
                f.write_str(") ")?;
                write_branch(f, body)
            }

            Node::ForIn {
                variable,
                iterable,
                body,
            } => {
                if iterable.static_kind() == Kind::Map {
                    write!(
                        f,
                        "for (var {} of Object.entries({}{}) ",
                        variable, iterable, MAP_ENTRIES_SUFFIX
                    )?;
                } else {
                    write!(f, "for (var {} of {}) ", variable, iterable)?;
                }
                write_branch(f, body)
            }

            Node::While { condition, body } => {
                write!(f, "while {} ", Condition(condition))?;
                write_branch(f, body)
            }

            Node::DoWhile { body, condition } => {
                f.write_str("do ")?;
                write_branch(f, body)?;
                write!(f, " while {}", Condition(condition))
            }

            Node::Switch { subject, cases } => {
                write!(f, "switch {} {{", Condition(subject))?;
                for case in cases {
                    write!(f, " {}", case)?;
                }
                f.write_str(" }")
            }

            Node::Case { test, body } => {
                match test {
                    Some(test) => write!(f, "case {}:", test)?,
                    None => f.write_str("default:")?,
                }
                for statement in body {
                    write!(f, " {}", statement)?;
                    if !statement.is_compound() && !matches!(statement, Node::Statement(_)) {
                        f.write_char(';')?;
                    }
                    if statement.is_line_comment() {
                        f.write_char('\n')?;
                    }
                }
                Ok(())
            }

            Node::Break => f.write_str("break"),

            Node::Return(value) => match value {
                Some(value) => write!(f, "return {}", value),
                None => f.write_str("return"),
            },

            Node::FunctionDeclaration { name, params, body } => match name {
                Some(name) => {
                    write!(f, "function {}({}) ", name, params.join(", "))?;
                    write_body(f, body)
                }
                None => {
                    write!(f, "function({})", params.join(", "))?;
                    write_body(f, body)
                }
            },

            Node::FunctionCall { callee, args } => write_call(f, callee, args),

            Node::Property { receiver, name } => {
                match dictionary::member_rename(receiver.static_kind(), name) {
                    Some(
                        MemberRename::Property(property)
                        | MemberRename::Method(property)
                        | MemberRename::Callback(property),
                    ) => {
                        write_receiver(f, receiver)?;
                        write!(f, ".{}", property)
                    }
                    Some(MemberRename::Wrapped { prefix, suffix }) => {
                        write!(f, "{}{}{}", prefix, receiver, suffix)
                    }
                    Some(MemberRename::Helper(helper)) => write!(f, "{}({})", helper, receiver),
                    None => {
                        write_receiver(f, receiver)?;
                        write!(f, ".{}", name)
                    }
                }
            }

            Node::New { class, args } => match dictionary::constructor_literal(class) {
                Some(literal) => f.write_str(literal),
                None => {
                    write!(f, "new {}(", class)?;
                    write_list(f, args)?;
                    f.write_char(')')
                }
            },

            Node::Class {
                name,
                fields,
                methods,
            } => write_class(f, name, fields, methods),

            Node::Array(elements) => {
                f.write_char('[')?;
                write_list(f, elements)?;
                f.write_char(']')
            }

            Node::Map(elements) => {
                if elements.is_empty() {
                    return f.write_str("{}");
                }
                f.write_char('{')?;
                write_list(f, elements)?;
                f.write_char('}')
            }

            Node::MapElement { key, value } => match &**key {
                Node::Constant(Literal::String { value: text, .. }) => {
                    write!(f, "{}: {}", quote_key(text), value)
                }
                Node::Constant(_) => write!(f, "{}: {}", key, value),
                other => write!(f, "[{}]: {}", other, value),
            },

            Node::ArrayAccessor { target, index } => write!(f, "{}[{}]", target, index),

            Node::Range { start, end } => write!(f, "range({}, {})", start, end),

            Node::Comment(text) => f.write_str(text),

            Node::Statement(inner) => write!(f, "{};", inner),

            Node::Error { message, line } => write!(
                f,
                "/* SyntaxError (line {}): {} */",
                line,
                message.replace("*/", "*\\/")
            ),
        }
    }
}

/// A condition rendered inside exactly one pair of parentheses
struct Condition<'a>(&'a Node);

impl Display for Condition<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_self_parenthesized() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "({})", self.0)
        }
    }
}

/// A condition rendered without its own outer parentheses
struct Bare<'a>(&'a Node);

impl Display for Bare<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = self.0.to_string();
        if self.0.is_self_parenthesized() && text.len() >= 2 {
            f.write_str(&text[1..text.len() - 1])
        } else {
            f.write_str(&text)
        }
    }
}

/// `{ s1; s2 }`, statements separated by `;` unless already closed
fn write_body(f: &mut Formatter<'_>, body: &[Node]) -> fmt::Result {
    if body.is_empty() {
        return f.write_str("{ }");
    }
    f.write_char('{')?;
    for (i, statement) in body.iter().enumerate() {
        write!(f, " {}", statement)?;
        let last = i + 1 == body.len();
        if statement.is_line_comment() {
            f.write_char('\n')?;
        } else if !last && !statement.is_compound() && !matches!(statement, Node::Statement(_)) {
            f.write_char(';')?;
        }
    }
    f.write_str(" }")
}

/// Loop and `if` bodies are always braced
fn write_branch(f: &mut Formatter<'_>, node: &Node) -> fmt::Result {
    match node {
        Node::Block(body) => write_body(f, body),
        single => write_body(f, std::slice::from_ref(single)),
    }
}

fn write_list(f: &mut Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", node)?;
    }
    Ok(())
}

/// Numbers need parentheses before a member access
fn write_receiver(f: &mut Formatter<'_>, receiver: &Node) -> fmt::Result {
    match receiver {
        Node::Constant(Literal::Number(_)) => write!(f, "({})", receiver),
        _ => write!(f, "{}", receiver),
    }
}

fn write_call(f: &mut Formatter<'_>, callee: &Node, args: &[Node]) -> fmt::Result {
    match callee {
        Node::Property { receiver, name } => {
            match dictionary::member_rename(receiver.static_kind(), name) {
                Some(MemberRename::Method(method)) => {
                    write_receiver(f, receiver)?;
                    write!(f, ".{}(", method)?;
                }
                Some(MemberRename::Callback(method)) => {
                    write_receiver(f, receiver)?;
                    write!(f, ".{}(", method)?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        match returning_closure(arg) {
                            Some(closure) => write!(f, "{}", closure)?,
                            None => write!(f, "{}", arg)?,
                        }
                    }
                    return f.write_char(')');
                }
                Some(MemberRename::Property(property)) => {
                    write_receiver(f, receiver)?;
                    return write!(f, ".{}", property);
                }
                Some(MemberRename::Wrapped { prefix, suffix }) => {
                    return write!(f, "{}{}{}", prefix, receiver, suffix);
                }
                Some(MemberRename::Helper(helper)) => {
                    write!(f, "{}({}", helper, receiver)?;
                    if !args.is_empty() {
                        f.write_str(", ")?;
                    }
                }
                None => {
                    write_receiver(f, receiver)?;
                    write!(f, ".{}(", name)?;
                }
            }
        }
        Node::Variable { name, .. } => {
            let target = dictionary::keyword_rename(name).unwrap_or(name.as_str());
            write!(f, "{}(", target)?;
        }
        other => write!(f, "{}(", other)?,
    }
    write_list(f, args)?;
    f.write_char(')')
}

/// Copy of an anonymous closure whose last expression statement returns
///
/// `None` for anything else, or when the last statement has no value.
fn returning_closure(node: &Node) -> Option<Node> {
    let Node::FunctionDeclaration {
        name: None,
        params,
        body,
    } = node
    else {
        return None;
    };
    let (last, rest) = body.split_last()?;
    let last = match last {
        Node::Statement(inner) => Node::Statement(Box::new(returned(inner)?)),
        other => returned(other)?,
    };

    let mut body = rest.to_vec();
    body.push(last);
    Some(Node::FunctionDeclaration {
        name: None,
        params: params.clone(),
        body,
    })
}

/// `return expr` for a node that yields a value
fn returned(node: &Node) -> Option<Node> {
    match node {
        Node::VariableDeclaration { .. }
        | Node::Assign { .. }
        | Node::Return(_)
        | Node::Break
        | Node::Case { .. }
        | Node::Statement(_) => None,
        other if other.is_compound() => None,
        other => Some(Node::Return(Some(Box::new(other.clone())))),
    }
}

fn write_class(f: &mut Formatter<'_>, name: &str, fields: &[Node], methods: &[Node]) -> fmt::Result {
    let constructor = methods.iter().find_map(|method| match method {
        Node::FunctionDeclaration {
            name: Some(method_name),
            params,
            body,
        } if method_name == name => Some((params, body)),
        _ => None,
    });

    let mut body: Vec<String> = Vec::new();
    for field in fields {
        if let Node::VariableDeclaration {
            name: field_name,
            value,
            ..
        } = field
        {
            match value {
                Some(value) => body.push(format!("this.{} = {}", field_name, value)),
                None => body.push(format!("this.{} = null", field_name)),
            }
        }
    }

    let params = match constructor {
        Some((params, statements)) => {
            body.extend(statements.iter().map(|s| s.to_string()));
            params.join(", ")
        }
        None => String::new(),
    };

    write!(f, "function {}({}) {{", name, params)?;
    if body.is_empty() {
        f.write_str(" }")?;
    } else {
        for line in &body {
            write!(f, " {};", line.trim_end_matches(';'))?;
        }
        f.write_str(" }")?;
    }

    for method in methods {
        if let Node::FunctionDeclaration {
            name: Some(method_name),
            params,
            body,
        } = method
        {
            if method_name == name {
                continue;
            }
            write!(f, "\n{}.prototype.{} = function({}) ", name, method_name, params.join(", "))?;
            write_body(f, body)?;
            f.write_char(';')?;
        }
    }
    Ok(())
}

fn write_literal(f: &mut Formatter<'_>, literal: &Literal) -> fmt::Result {
    match literal {
        Literal::Number(text) => f.write_str(text),
        Literal::Boolean(value) => write!(f, "{}", value),
        Literal::Null => f.write_str("null"),
        Literal::String { value, style } => match style {
            StringStyle::Single => write!(f, "'{}'", value),
            StringStyle::Double if interpolates(value) => {
                f.write_str(&template_literal(value, true))
            }
            StringStyle::Double => write!(f, "\"{}\"", value),
            StringStyle::TripleDouble => f.write_str(&template_literal(value, true)),
            StringStyle::TripleSingle => f.write_str(&template_literal(value, false)),
        },
    }
}

fn quote_key(text: &str) -> String {
    if !text.is_empty()
        && text
            .chars()
            .all(|c| c == '_' || c == '$' || c.is_ascii_alphanumeric())
        && !text.starts_with(|c: char| c.is_ascii_digit())
    {
        return text.to_string();
    }

    // Escapes from the source are kept; bare quotes and line breaks are not
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    let mut escaped = false;
    for c in text.chars() {
        match c {
            '\'' if !escaped => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
        escaped = c == '\\' && !escaped;
    }
    out.push('\'');
    out
}

/// Whether a double-quoted string contains `$name` or `${expr}`
pub fn interpolates(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    chars.iter().enumerate().any(|(i, c)| {
        *c == '$'
            && (i == 0 || chars[i - 1] != '\\')
            && chars
                .get(i + 1)
                .is_some_and(|n| *n == '{' || *n == '_' || n.is_alphabetic())
    })
}

/// Backtick literal; `$name` becomes `${name}` when `interpolate` is set,
/// otherwise every `${` is escaped
fn template_literal(value: &str, interpolate: bool) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len() + 2);
    out.push('`');

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' => {
                out.push(c);
                if let Some(next) = chars.get(i + 1) {
                    out.push(*next);
                    i += 1;
                }
            }
            '`' => out.push_str("\\`"),
            '$' if !interpolate => {
                if chars.get(i + 1) == Some(&'{') {
                    out.push_str("\\$");
                } else {
                    out.push(c);
                }
            }
            '$' if chars.get(i + 1) == Some(&'{') => out.push(c),
            '$' if chars
                .get(i + 1)
                .is_some_and(|n| *n == '_' || n.is_alphabetic()) =>
            {
                let mut j = i + 1;
                let mut name = String::new();
                loop {
                    while j < chars.len() && (chars[j] == '_' || chars[j].is_alphanumeric()) {
                        name.push(chars[j]);
                        j += 1;
                    }
                    // `$user.name` interpolates the whole property chain
                    if j + 1 < chars.len()
                        && chars[j] == '.'
                        && (chars[j + 1] == '_' || chars[j + 1].is_alphabetic())
                    {
                        name.push('.');
                        j += 1;
                    } else {
                        break;
                    }
                }
                out.push_str("${");
                out.push_str(&name);
                out.push('}');
                i = j;
                continue;
            }
            _ => out.push(c),
        }
        i += 1;
    }

    out.push('`');
    out
}
