//! Lexical scope tree with per-binding kind tracking
//!
//! Frames live in an arena and point at their parent by index. A frame is
//! never removed, so indices stay valid for the whole translation job.

use crate::ast::Node;
use core_types::{ErrorKind, Kind, TranslateError};
use serde_json::Value;
use tracing::trace;

/// A single binding
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeEntry {
    /// Bound name
    pub name: String,
    /// Kind computed when the binding was declared
    pub kind: Kind,
    /// Declaring node; parameters and context names have none
    pub declaration: Option<Node>,
}

/// One lexical frame
#[derive(Debug, Clone, Default)]
struct Frame {
    parent: Option<usize>,
    entries: Vec<ScopeEntry>,
    children: Vec<usize>,
}

/// Tree of scopes built while parsing
///
/// # Examples
///
/// ```
/// use core_types::Kind;
/// use translator::Scope;
///
/// let mut scope = Scope::new();
/// scope.declare("a", Kind::Array, None);
/// scope.enter();
/// scope.declare("a", Kind::Number, None);
/// assert_eq!(scope.kind_of("a"), Kind::Number);
/// scope.exit();
/// assert_eq!(scope.kind_of("a"), Kind::Array);
/// assert_eq!(scope.kind_of("missing"), Kind::Any);
/// ```
#[derive(Debug, Clone)]
pub struct Scope {
    frames: Vec<Frame>,
    current: usize,
}

impl Scope {
    /// Create a scope tree holding only the global frame
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::default()],
            current: 0,
        }
    }

    /// Create a global scope seeded from the top-level keys of `context`
    ///
    /// `null` yields an empty scope. Any other non-object value is rejected.
    pub fn from_context(context: &Value) -> Result<Self, TranslateError> {
        let mut scope = Scope::new();
        match context {
            Value::Null => {}
            Value::Object(map) => {
                for (name, value) in map {
                    scope.declare(name.as_str(), Kind::from_json(value), None);
                }
            }
            other => {
                return Err(TranslateError::new(
                    ErrorKind::ContextError,
                    format!("Context must be an object, got {}", json_type(other)),
                    None,
                ))
            }
        }
        Ok(scope)
    }

    /// Open a child frame of the current frame and make it current
    pub fn enter(&mut self) -> usize {
        let id = self.frames.len();
        self.frames.push(Frame {
            parent: Some(self.current),
            ..Frame::default()
        });
        self.frames[self.current].children.push(id);
        self.current = id;
        id
    }

    /// Return to the parent frame; the global frame is never left
    pub fn exit(&mut self) {
        if let Some(parent) = self.frames[self.current].parent {
            self.current = parent;
        }
    }

    /// Index of the current frame
    pub fn current(&self) -> usize {
        self.current
    }

    /// Make `frame` current again, used after abandoning a statement
    pub fn reset_to(&mut self, frame: usize) {
        if frame < self.frames.len() {
            self.current = frame;
        }
    }

    /// Nesting depth of the current frame; the global frame is 0
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut frame = self.current;
        while let Some(parent) = self.frames[frame].parent {
            depth += 1;
            frame = parent;
        }
        depth
    }

    /// Child frames of `frame`
    pub fn children(&self, frame: usize) -> &[usize] {
        self.frames
            .get(frame)
            .map(|f| f.children.as_slice())
            .unwrap_or(&[])
    }

    /// Bindings of `frame`, in declaration order
    pub fn entries(&self, frame: usize) -> &[ScopeEntry] {
        self.frames
            .get(frame)
            .map(|f| f.entries.as_slice())
            .unwrap_or(&[])
    }

    /// Record a binding in the current frame
    pub fn declare(&mut self, name: impl Into<String>, kind: Kind, declaration: Option<Node>) {
        let name = name.into();
        trace!(name = %name, kind = kind.type_of(), frame = self.current, "declare");
        self.frames[self.current].entries.push(ScopeEntry {
            name,
            kind,
            declaration,
        });
    }

    /// Nearest binding of `name`, walking parent-ward from the current frame
    pub fn lookup(&self, name: &str) -> Option<&ScopeEntry> {
        let mut frame = Some(self.current);
        while let Some(id) = frame {
            let found = self.frames[id]
                .entries
                .iter()
                .rev()
                .find(|entry| entry.name == name);
            if found.is_some() {
                return found;
            }
            frame = self.frames[id].parent;
        }
        None
    }

    /// Kind of the nearest binding of `name`, `Any` when unbound
    pub fn kind_of(&self, name: &str) -> Kind {
        self.lookup(name).map(|entry| entry.kind).unwrap_or_default()
    }

    /// Whether `name` is bound directly in the current frame
    pub fn is_declared_here(&self, name: &str) -> bool {
        self.frames[self.current]
            .entries
            .iter()
            .any(|entry| entry.name == name)
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
