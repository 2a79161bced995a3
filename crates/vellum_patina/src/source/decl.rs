//! Owned declaration model handed from the parser to lint rules.
//!
//! The oxc AST lives in an arena that is dropped once extraction finishes,
//! so everything rules need is copied into these small records.

use vellum_carton::{CompactString, FxHashMap, SmallVec};

/// Byte range of a node in the linted source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceSpan {
    pub start: u32,
    pub end: u32,
}

impl SourceSpan {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

impl From<oxc_span::Span> for SourceSpan {
    #[inline]
    fn from(span: oxc_span::Span) -> Self {
        Self::new(span.start, span.end)
    }
}

/// A class declaration or expression, with the classes nested inside it.
#[derive(Debug, Clone, Default)]
pub struct ClassDecl {
    /// Class name (`None` for anonymous class expressions)
    pub name: Option<CompactString>,
    pub span: SourceSpan,
    pub decorators: Vec<DecoratorDecl>,
    /// Class elements in source order
    pub members: Vec<MemberDecl>,
    /// Classes declared anywhere inside this class's body
    pub children: Vec<ClassDecl>,
}

impl ClassDecl {
    /// Whether the class carries the `@Component(...)` marker
    #[inline]
    pub fn is_component(&self) -> bool {
        self.decorators
            .iter()
            .any(|d| d.name.as_deref() == Some("Component"))
    }
}

/// Syntactic kind of a class element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Data field (`foo = 1`, `accessor foo`)
    Property,
    /// Regular method (`foo() {}`)
    Method,
    /// Getter or setter
    Accessor,
    Constructor,
}

/// A single class element.
#[derive(Debug, Clone)]
pub struct MemberDecl {
    /// Plain identifier name; `None` for computed, private or literal keys
    pub name: Option<CompactString>,
    pub kind: MemberKind,
    pub span: SourceSpan,
    /// Decorators in source order (usually zero or one)
    pub decorators: SmallVec<[DecoratorDecl; 1]>,
}

/// A decorator applied to a class or member.
#[derive(Debug, Clone)]
pub struct DecoratorDecl {
    /// Callee identifier for call-style decorators (`@Prop()` → `Prop`).
    /// Any other decorator shape has no name.
    pub name: Option<CompactString>,
    pub args: DecoratorArgs,
}

/// First argument of a call-style decorator, resolved once at extraction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DecoratorArgs {
    /// `@State()`
    #[default]
    NoArgs,
    /// `@Watch('value')`
    Name(CompactString),
    /// `@Prop({ mutable: true })`
    Options(FxHashMap<CompactString, OptionValue>),
    /// Any other argument shape
    Other,
}

impl DecoratorArgs {
    /// The string literal argument, if any
    #[inline]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Look up a key of an options-object argument
    #[inline]
    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        match self {
            Self::Options(map) => map.get(key),
            _ => None,
        }
    }
}

/// Literal value of a property inside an options-object argument
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Str(CompactString),
    Number(f64),
    Null,
    Undefined,
    /// Non-literal expression (identifier, call, nested object, ...)
    Other,
}

impl OptionValue {
    /// JavaScript truthiness. Non-literal expressions count as truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Str(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Null | Self::Undefined => false,
            Self::Other => true,
        }
    }
}
