//! AST node shapes handed to a [`TypeRequestor`](crate::search::TypeRequestor)
//! by the type-inference visitor.
//!
//! Positions recorded by the parser are best-effort: ranges may be missing,
//! off by one, or describe an array type when the component type carries the
//! real location. Nodes deserialize from the JSON dumps the replay tool reads.

use serde::{Deserialize, Serialize};

/// Qualified name of the metatype a `Foo.class` expression is inferred as.
pub const CLASS_METATYPE: &str = "java.lang.Class";

/// Offset used by parsers for "no location recorded".
pub const NO_OFFSET: i32 = -1;

/// Raw start/end offsets recorded on a node. `end` is exclusive but not
/// always trustworthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    pub start: i32,
    pub end: i32,
}

impl SourceRange {
    pub const fn new(
        start: i32,
        end: i32,
    ) -> Self {
        Self {
            start,
            end,
        }
    }
}

/// A class node as seen by the visitor: either a reference to a type, a
/// declaration of one, or an array wrapping a component type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRef {
    /// Fully qualified name, e.g. `pkg.Foo`.
    pub name: String,
    #[serde(default)]
    pub range: Option<SourceRange>,
    /// Element type when this node is an array type.
    #[serde(default)]
    pub component: Option<Box<ClassRef>>,
    /// Only set on declaration sites, where the parser records where the
    /// declared name ends.
    #[serde(default)]
    pub name_end: Option<i32>,
    /// The node redirects to itself. Reference nodes are proxies onto their
    /// declaration, so a self-redirecting node without a name end is a
    /// synthetic script class.
    #[serde(default)]
    pub self_redirect: bool,
}

impl ClassRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            range: None,
            component: None,
            name_end: None,
            self_redirect: false,
        }
    }

    /// Array type of `component`. The array node itself records no range.
    pub fn array_of(component: ClassRef) -> Self {
        Self {
            name: format!("{}[]", component.name),
            range: None,
            component: Some(Box::new(component)),
            name_end: None,
            self_redirect: false,
        }
    }

    pub fn at(
        mut self,
        start: i32,
        end: i32,
    ) -> Self {
        self.range = Some(SourceRange::new(start, end));
        self
    }

    pub fn declared(
        mut self,
        name_end: i32,
    ) -> Self {
        self.name_end = Some(name_end);
        self.self_redirect = true;
        self
    }

    pub fn script_class(mut self) -> Self {
        self.self_redirect = true;
        self
    }

    pub fn start(&self) -> i32 {
        self.range.map_or(NO_OFFSET, |r| r.start)
    }

    pub fn end(&self) -> i32 {
        self.range.map_or(NO_OFFSET, |r| r.end)
    }

    /// Name after the last package separator; nested `Outer$Inner` names are
    /// kept whole.
    pub fn name_without_package(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    pub fn is_array(&self) -> bool {
        self.component.is_some()
    }

    pub fn is_declaration(&self) -> bool {
        self.name_end.is_some_and(|end| end > 0)
    }

    /// Innermost component type: `Foo[][]` unwraps to `Foo`.
    pub fn remove_array(&self) -> &ClassRef {
        match &self.component {
            Some(component) => component.remove_array(),
            None => self,
        }
    }

    /// The direct component type when it has a recorded location, else `self`.
    ///
    /// Array nodes frequently have no location while their component does.
    pub fn with_located_component(&self) -> &ClassRef {
        match &self.component {
            Some(component) if component.range.is_some() => component,
            _ => self,
        }
    }
}

/// Typed representation of the node kinds a type requestor is offered.
///
/// `Other` stands in for every node kind the reference search ignores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VisitedNode {
    /// `Foo.class` or a bare class used as an expression.
    #[serde(rename_all = "camelCase")]
    ClassExpression {
        /// The class named by the literal, as opposed to the inferred type.
        operand: ClassRef,
        #[serde(default)]
        range: Option<SourceRange>,
    },
    ClassReference(ClassRef),
    Import {
        #[serde(default)]
        range: Option<SourceRange>,
    },
    Annotation {
        class: ClassRef,
        #[serde(default)]
        range: Option<SourceRange>,
    },
    #[serde(rename_all = "camelCase")]
    Constructor {
        declaring_class: ClassRef,
        name_start: i32,
        name_end: i32,
        #[serde(default)]
        range: Option<SourceRange>,
    },
    #[serde(other)]
    Other,
}

impl VisitedNode {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::ClassExpression {
                ..
            } => "class-expression",
            Self::ClassReference(_) => "class-reference",
            Self::Import {
                ..
            } => "import",
            Self::Annotation {
                ..
            } => "annotation",
            Self::Constructor {
                ..
            } => "constructor",
            Self::Other => "other",
        }
    }

    /// Start offset recorded on the node itself.
    pub fn start(&self) -> i32 {
        match self {
            Self::ClassReference(class_ref) => class_ref.start(),
            Self::ClassExpression {
                range,
                ..
            }
            | Self::Import {
                range,
            }
            | Self::Annotation {
                range,
                ..
            }
            | Self::Constructor {
                range,
                ..
            } => range.map_or(NO_OFFSET, |r| r.start),
            Self::Other => NO_OFFSET,
        }
    }

    /// End offset recorded on the node itself.
    pub fn end(&self) -> i32 {
        match self {
            Self::ClassReference(class_ref) => class_ref.end(),
            Self::ClassExpression {
                range,
                ..
            }
            | Self::Import {
                range,
            }
            | Self::Annotation {
                range,
                ..
            }
            | Self::Constructor {
                range,
                ..
            } => range.map_or(NO_OFFSET, |r| r.end),
            Self::Other => NO_OFFSET,
        }
    }
}

/// How sure the inference engine is about a resolved type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeConfidence {
    Exact,
    Inferred,
    LooselyInferred,
    #[default]
    Unknown,
}

/// Type the inference pass produced for a visited node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TypeLookupResult {
    #[serde(default, rename = "type")]
    pub ty: Option<ClassRef>,
    #[serde(default)]
    pub confidence: TypeConfidence,
}

impl TypeLookupResult {
    pub fn new(
        ty: ClassRef,
        confidence: TypeConfidence,
    ) -> Self {
        Self {
            ty: Some(ty),
            confidence,
        }
    }

    pub fn exact(ty: ClassRef) -> Self {
        Self::new(ty, TypeConfidence::Exact)
    }

    pub fn untyped() -> Self {
        Self::default()
    }

    pub fn is_metatype(&self) -> bool {
        self.ty.as_ref().is_some_and(|ty| ty.name == CLASS_METATYPE)
    }
}

#[cfg(test)]
#[path = "../../tests/src/ast/ast_tests.rs"]
mod tests;
