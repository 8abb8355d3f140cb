//! Node definitions for the translated dialect
//!
//! Nodes are built once by the analyser and never mutated. Rendering lives
//! in [`crate::codegen`].

use crate::dictionary;
use crate::lexer::StringStyle;
use core_types::Kind;

/// Literal constant value
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Numeric literal, kept as written (suffix dropped)
    Number(String),
    /// String literal
    String {
        /// Text between the delimiters, verbatim
        value: String,
        /// Quoting style it was written with
        style: StringStyle,
    },
    /// `true` or `false`
    Boolean(bool),
    /// `null`
    Null,
}

/// Assignment operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `+=`
    Add,
    /// `-=`
    Subtract,
    /// `*=`
    Multiply,
    /// `/=`
    Divide,
}

impl AssignOp {
    /// Binary operator a compound assignment expands to
    pub fn binary(&self) -> Option<BinaryOp> {
        match self {
            AssignOp::Assign => None,
            AssignOp::Add => Some(BinaryOp::Add),
            AssignOp::Subtract => Some(BinaryOp::Subtract),
            AssignOp::Multiply => Some(BinaryOp::Multiply),
            AssignOp::Divide => Some(BinaryOp::Divide),
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-x`
    Negate,
    /// `!x`
    Not,
    /// `++x`
    PreIncrement,
    /// `--x`
    PreDecrement,
    /// `x++`
    PostIncrement,
    /// `x--`
    PostDecrement,
}

/// Arithmetic and bitwise operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
}

impl BinaryOp {
    /// Source symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::ShiftLeft => "<<",
            BinaryOp::ShiftRight => ">>",
        }
    }

    /// Runtime helper used when the operands are not provably primitive
    pub fn helper(&self) -> Option<&'static str> {
        dictionary::operator_helper(self.symbol())
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<=>`
    Spaceship,
}

impl ComparisonOp {
    /// Source symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOp::Less => "<",
            ComparisonOp::LessEqual => "<=",
            ComparisonOp::Greater => ">",
            ComparisonOp::GreaterEqual => ">=",
            ComparisonOp::Equal => "==",
            ComparisonOp::NotEqual => "!=",
            ComparisonOp::Spaceship => "<=>",
        }
    }
}

/// Logical operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    /// `&&`
    And,
    /// `||`
    Or,
}

/// A node of the translated program
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal constant
    Constant(Literal),

    /// Variable reference with the kind known at parse time
    Variable {
        /// Variable name
        name: String,
        /// Kind looked up when the reference was parsed
        kind: Kind,
    },

    /// `def name = value` or `Type name`
    VariableDeclaration {
        /// Declared name
        name: String,
        /// Kind recorded in scope
        kind: Kind,
        /// Initializer
        value: Option<Box<Node>>,
    },

    /// Plain or compound assignment
    Assign {
        /// Assigned expression
        target: Box<Node>,
        /// Operator
        operator: AssignOp,
        /// Right-hand side
        value: Box<Node>,
    },

    /// Prefix or postfix unary operator
    UnaryOperator {
        /// Operator
        operator: UnaryOp,
        /// Operand
        operand: Box<Node>,
    },

    /// Arithmetic or bitwise operator
    BinaryOperator {
        /// Operator
        operator: BinaryOp,
        /// Left operand
        left: Box<Node>,
        /// Right operand
        right: Box<Node>,
    },

    /// Comparison
    Comparison {
        /// Operator
        operator: ComparisonOp,
        /// Left operand
        left: Box<Node>,
        /// Right operand
        right: Box<Node>,
    },

    /// `&&` / `||`
    LogicOperator {
        /// Operator
        operator: LogicOp,
        /// Left operand
        left: Box<Node>,
        /// Right operand
        right: Box<Node>,
    },

    /// `(Type) x` or `x as Type`
    CastOperator {
        /// Target type name
        target_type: String,
        /// Cast expression
        operand: Box<Node>,
    },

    /// `c ? a : b`
    Ternary {
        /// Condition
        condition: Box<Node>,
        /// Value when true
        then: Box<Node>,
        /// Value when false
        otherwise: Box<Node>,
    },

    /// `if` with optional `else`
    If {
        /// Condition
        condition: Box<Node>,
        /// Consequent, a block or a single statement
        then: Box<Node>,
        /// Alternate, a block, a single statement or another `if`
        otherwise: Option<Box<Node>>,
    },

    /// `{ ... }`
    Block(Vec<Node>),

    /// Three-part `for`
    For {
        /// Initializer
        init: Option<Box<Node>>,
        /// Loop condition
        condition: Option<Box<Node>>,
        /// Step expression
        step: Option<Box<Node>>,
        /// Loop body
        body: Box<Node>,
    },

    /// `for (x in iterable)`
    ForIn {
        /// Loop variable
        variable: String,
        /// Iterated expression
        iterable: Box<Node>,
        /// Loop body
        body: Box<Node>,
    },

    /// `while (c) body`
    While {
        /// Loop condition
        condition: Box<Node>,
        /// Loop body
        body: Box<Node>,
    },

    /// `do body while (c)`
    DoWhile {
        /// Loop body
        body: Box<Node>,
        /// Loop condition
        condition: Box<Node>,
    },

    /// `switch (subject) { cases }`
    Switch {
        /// Switched expression
        subject: Box<Node>,
        /// [`Node::Case`] entries in source order
        cases: Vec<Node>,
    },

    /// `case test:` or `default:`
    Case {
        /// Case value; `None` for `default`
        test: Option<Box<Node>>,
        /// Statements up to the next label
        body: Vec<Node>,
    },

    /// `break`
    Break,

    /// `return [value]`
    Return(Option<Box<Node>>),

    /// Named function or closure
    FunctionDeclaration {
        /// Name; `None` for closures
        name: Option<String>,
        /// Parameter names
        params: Vec<String>,
        /// Body statements
        body: Vec<Node>,
    },

    /// Call expression
    FunctionCall {
        /// Called expression, a [`Node::Property`] for method calls
        callee: Box<Node>,
        /// Arguments, a trailing closure last
        args: Vec<Node>,
    },

    /// `receiver.name`
    Property {
        /// Receiver expression
        receiver: Box<Node>,
        /// Member name
        name: String,
    },

    /// `new Class(args)`
    New {
        /// Class name
        class: String,
        /// Constructor arguments
        args: Vec<Node>,
    },

    /// Class stub
    Class {
        /// Class name
        name: String,
        /// Field declarations
        fields: Vec<Node>,
        /// Method declarations; one named like the class is the constructor
        methods: Vec<Node>,
    },

    /// `[a, b, c]`
    Array(Vec<Node>),

    /// `[k: v, ...]`, a list of [`Node::MapElement`]
    Map(Vec<Node>),

    /// `key: value` inside a map literal
    MapElement {
        /// Key expression
        key: Box<Node>,
        /// Value expression
        value: Box<Node>,
    },

    /// `target[index]`
    ArrayAccessor {
        /// Indexed expression
        target: Box<Node>,
        /// Index expression
        index: Box<Node>,
    },

    /// `start..end`
    Range {
        /// Lower bound
        start: Box<Node>,
        /// Upper bound, inclusive
        end: Box<Node>,
    },

    /// Comment, delimiters included
    Comment(String),

    /// A statement closed with `;`
    Statement(Box<Node>),

    /// Statement that failed to parse
    Error {
        /// Syntax error message
        message: String,
        /// Line the error was raised on
        line: u32,
    },
}

impl Node {
    /// Variable reference of unknown kind
    pub fn variable(name: impl Into<String>, kind: Kind) -> Node {
        Node::Variable {
            name: name.into(),
            kind,
        }
    }

    /// Numeric constant
    pub fn number(text: impl Into<String>) -> Node {
        Node::Constant(Literal::Number(text.into()))
    }

    /// Single-quoted string constant
    pub fn string(value: impl Into<String>) -> Node {
        Node::Constant(Literal::String {
            value: value.into(),
            style: StringStyle::Single,
        })
    }

    /// Direct children, in source order
    pub fn children(&self) -> Vec<&Node> {
        let mut nodes: Vec<&Node> = Vec::new();
        match self {
            Node::Constant(_)
            | Node::Variable { .. }
            | Node::Break
            | Node::Comment(_)
            | Node::Error { .. } => {}
            Node::VariableDeclaration { value, .. } | Node::Return(value) => {
                nodes.extend(value.as_deref());
            }
            Node::Assign { target, value, .. } => {
                nodes.push(target);
                nodes.push(value);
            }
            Node::UnaryOperator { operand, .. } | Node::CastOperator { operand, .. } => {
                nodes.push(operand);
            }
            Node::BinaryOperator { left, right, .. }
            | Node::Comparison { left, right, .. }
            | Node::LogicOperator { left, right, .. } => {
                nodes.push(left);
                nodes.push(right);
            }
            Node::Ternary {
                condition,
                then,
                otherwise,
            } => {
                nodes.push(condition);
                nodes.push(then);
                nodes.push(otherwise);
            }
            Node::If {
                condition,
                then,
                otherwise,
            } => {
                nodes.push(condition);
                nodes.push(then);
                nodes.extend(otherwise.as_deref());
            }
            Node::Block(body)
            | Node::Array(body)
            | Node::Map(body)
            | Node::FunctionDeclaration { body, .. }
            | Node::New { args: body, .. } => nodes.extend(body.iter()),
            Node::For {
                init,
                condition,
                step,
                body,
            } => {
                nodes.extend(init.as_deref());
                nodes.extend(condition.as_deref());
                nodes.extend(step.as_deref());
                nodes.push(body);
            }
            Node::ForIn { iterable, body, .. } => {
                nodes.push(iterable);
                nodes.push(body);
            }
            Node::While { condition, body } | Node::DoWhile { body, condition } => {
                nodes.push(condition);
                nodes.push(body);
            }
            Node::Switch { subject, cases } => {
                nodes.push(subject);
                nodes.extend(cases.iter());
            }
            Node::Case { test, body } => {
                nodes.extend(test.as_deref());
                nodes.extend(body.iter());
            }
            Node::FunctionCall { callee, args } => {
                nodes.push(callee);
                nodes.extend(args.iter());
            }
            Node::Property { receiver, .. } => nodes.push(receiver),
            Node::Class {
                fields, methods, ..
            } => nodes.extend(fields.iter().chain(methods.iter())),
            Node::MapElement { key, value } => {
                nodes.push(key);
                nodes.push(value);
            }
            Node::ArrayAccessor { target, index } => {
                nodes.push(target);
                nodes.push(index);
            }
            Node::Range { start, end } => {
                nodes.push(start);
                nodes.push(end);
            }
            Node::Statement(inner) => nodes.push(inner),
        }
        nodes
    }

    /// Whether a free reference to `name` occurs inside this node
    ///
    /// Functions that declare a parameter called `name` shadow it.
    pub fn references(&self, name: &str) -> bool {
        match self {
            Node::Variable { name: n, .. } => n == name,
            Node::FunctionDeclaration { params, .. } if params.iter().any(|p| p == name) => {
                false
            }
            _ => self.children().into_iter().any(|child| child.references(name)),
        }
    }

    /// Kind a declaration initialised with this node is tracked as
    pub fn static_kind(&self) -> Kind {
        match self {
            Node::Variable { kind, .. } => *kind,
            Node::Constant(Literal::Number(_)) => Kind::Number,
            Node::Constant(Literal::String { .. }) => Kind::String,
            Node::Constant(Literal::Boolean(_)) => Kind::Boolean,
            Node::Array(_) | Node::Range { .. } => Kind::Array,
            Node::Map(_) => Kind::Map,
            Node::FunctionDeclaration { .. } => Kind::Function,
            Node::New { class, .. } => dictionary::constructor_kind(class).unwrap_or_default(),
            Node::Statement(inner) => inner.static_kind(),
            _ => Kind::Any,
        }
    }

    /// Literal constant
    pub fn is_constant(&self) -> bool {
        matches!(self, Node::Constant(_))
    }

    /// Statement that carries its own braces and needs no separator
    pub fn is_compound(&self) -> bool {
        match self {
            Node::If { .. }
            | Node::For { .. }
            | Node::ForIn { .. }
            | Node::While { .. }
            | Node::Switch { .. }
            | Node::Block(_)
            | Node::Class { .. }
            | Node::Comment(_)
            | Node::Error { .. } => true,
            Node::FunctionDeclaration { name, .. } => name.is_some(),
            _ => false,
        }
    }

    /// Whether this node renders wrapped in a single pair of parentheses
    pub fn is_self_parenthesized(&self) -> bool {
        match self {
            Node::Comparison { operator, .. } => *operator != ComparisonOp::Spaceship,
            Node::LogicOperator { .. } | Node::Ternary { .. } => true,
            Node::BinaryOperator {
                operator,
                left,
                right,
            } => renders_native(*operator, left, right),
            _ => false,
        }
    }

    /// `// ...` comment, which must be followed by a line break
    pub fn is_line_comment(&self) -> bool {
        matches!(self, Node::Comment(text) if text.starts_with("//"))
    }
}

/// Whether `left op right` can be emitted as a native operator
///
/// Operators without a helper are always native. The others are native only
/// when both operands are constants or the left operand is a variable
/// known not to be an array.
pub fn renders_native(operator: BinaryOp, left: &Node, right: &Node) -> bool {
    if operator.helper().is_none() {
        return true;
    }
    if left.is_constant() && right.is_constant() {
        return true;
    }
    matches!(left, Node::Variable { kind, .. } if *kind != Kind::Array)
}
