//! Type references and template specializations.
//!
//! Types arrive fully resolved from the parser. A template specialization
//! node carries a [`TypeNodeId`] so that a traversal can recognise the same
//! node when it is reached again through a different path.

use std::fmt;

use crate::decl::DeclarationInfo;

/// Identity of a template specialization node within one parsed library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeNodeId(u32);

impl TypeNodeId {
    /// Create a node identity from a raw index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the underlying index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type_{}", self.0)
    }
}

/// Allocator for fresh [`TypeNodeId`]s.
#[derive(Debug, Default)]
pub struct TypeNodeIds {
    next: u32,
}

impl TypeNodeIds {
    /// Create an allocator starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next unused node identity.
    pub fn next_id(&mut self) -> TypeNodeId {
        let id = TypeNodeId::new(self.next);
        self.next += 1;
        id
    }
}

/// A resolved C++ type as seen in a signature or template argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A builtin type such as `int` or `unsigned long`.
    Builtin(String),
    /// A class, struct, union or enum declared somewhere in the library.
    Record(DeclarationInfo),
    /// `T*`
    Pointer(Box<TypeRef>),
    /// `T&`
    LValueReference(Box<TypeRef>),
    /// `const T`
    Const(Box<TypeRef>),
    /// A concrete use of a class template.
    TemplateSpecialization(TemplateSpecializationType),
    /// `typename T::name` whose meaning depends on a template parameter.
    DependentName(String),
    /// A bare template parameter such as `T`.
    TemplateParameter(String),
}

impl TypeRef {
    /// Builtin type by spelling.
    pub fn builtin(name: impl Into<String>) -> Self {
        TypeRef::Builtin(name.into())
    }

    /// Pointer to `self`.
    pub fn pointer(self) -> Self {
        TypeRef::Pointer(Box::new(self))
    }

    /// Lvalue reference to `self`.
    pub fn reference(self) -> Self {
        TypeRef::LValueReference(Box::new(self))
    }

    /// `self` with a const qualifier.
    pub fn constant(self) -> Self {
        TypeRef::Const(Box::new(self))
    }
}

/// One argument of a template specialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateArgument {
    /// The argument type; `None` when the parser could not resolve it.
    pub ty: Option<TypeRef>,
    /// Declaration the argument refers to, if any.
    pub declaration: Option<DeclarationInfo>,
}

impl TemplateArgument {
    /// An argument that is a plain type.
    pub fn ty(ty: TypeRef) -> Self {
        Self {
            ty: Some(ty),
            declaration: None,
        }
    }

    /// An argument naming a declared record, carrying both the type and the declaration.
    pub fn record(decl: DeclarationInfo) -> Self {
        Self {
            ty: Some(TypeRef::Record(decl.clone())),
            declaration: Some(decl),
        }
    }

    /// An argument the parser failed to resolve.
    pub fn unresolved() -> Self {
        Self {
            ty: None,
            declaration: None,
        }
    }
}

/// A class template used with concrete arguments, e.g. `Box<int>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpecializationType {
    /// Node identity for revisit detection.
    pub id: TypeNodeId,
    /// Qualified name of the template.
    pub template_name: String,
    /// Arguments in declaration order.
    pub arguments: Vec<TemplateArgument>,
}

impl TemplateSpecializationType {
    /// Create a specialization node.
    pub fn new(
        id: TypeNodeId,
        template_name: impl Into<String>,
        arguments: Vec<TemplateArgument>,
    ) -> Self {
        Self {
            id,
            template_name: template_name.into(),
            arguments,
        }
    }

    /// Declarations referenced directly by this node's arguments.
    pub fn argument_declarations(&self) -> impl Iterator<Item = &DeclarationInfo> {
        self.arguments
            .iter()
            .filter_map(|argument| argument.declaration.as_ref())
    }
}

impl From<TemplateSpecializationType> for TypeRef {
    fn from(ty: TemplateSpecializationType) -> Self {
        TypeRef::TemplateSpecialization(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::UnitInfo;

    #[test]
    fn ids_are_sequential() {
        let mut ids = TypeNodeIds::new();
        assert_eq!(ids.next_id().index(), 0);
        assert_eq!(ids.next_id().index(), 1);
        assert_eq!(ids.next_id(), TypeNodeId::new(2));
    }

    #[test]
    fn record_argument_carries_declaration() {
        let decl = DeclarationInfo::new("geo::Point", UnitInfo::from_path("/src/point.h"));
        let argument = TemplateArgument::record(decl.clone());
        assert_eq!(argument.ty, Some(TypeRef::Record(decl.clone())));
        assert_eq!(argument.declaration, Some(decl));
    }

    #[test]
    fn argument_declarations_skips_plain_types() {
        let decl = DeclarationInfo::new("Point", UnitInfo::from_path("/src/point.h"));
        let ty = TemplateSpecializationType::new(
            TypeNodeId::new(0),
            "Pair",
            vec![
                TemplateArgument::ty(TypeRef::builtin("int")),
                TemplateArgument::record(decl),
            ],
        );
        let names: Vec<_> = ty.argument_declarations().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Point"]);
    }
}
