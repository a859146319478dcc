//! Declarations produced by the parser.
//!
//! Functions and variables are the two declaration kinds that own a mangled
//! symbol. [`MangledDecl`] gives the collector a single view over both.

use crate::access::AccessSpecifier;
use crate::types::TypeRef;
use crate::unit::UnitInfo;

/// Properties shared by every declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationInfo {
    /// Qualified name, e.g. `geo::Shape::area`.
    pub name: String,
    /// Access specifier computed by the parser.
    pub access: AccessSpecifier,
    /// Excluded from the public surface by upstream policy.
    pub ignore: bool,
    /// Translation unit that declares it.
    pub unit: UnitInfo,
}

impl DeclarationInfo {
    /// A public, non-ignored declaration.
    pub fn new(name: impl Into<String>, unit: UnitInfo) -> Self {
        Self {
            name: name.into(),
            access: AccessSpecifier::Public,
            ignore: false,
            unit,
        }
    }

    /// Set the access specifier.
    pub fn with_access(mut self, access: AccessSpecifier) -> Self {
        self.access = access;
        self
    }

    /// Mark the declaration as ignored.
    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }
}

/// Whether a function is free-standing or a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionKind {
    #[default]
    Free,
    Method {
        /// Overrides a virtual function of a base class.
        is_override: bool,
    },
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub decl: DeclarationInfo,
    pub mangled: String,
    pub kind: FunctionKind,
    pub return_type: TypeRef,
    pub parameters: Vec<TypeRef>,
}

impl Function {
    /// A free function returning `void` with no parameters.
    pub fn new(decl: DeclarationInfo, mangled: impl Into<String>) -> Self {
        Self {
            decl,
            mangled: mangled.into(),
            kind: FunctionKind::Free,
            return_type: TypeRef::builtin("void"),
            parameters: Vec::new(),
        }
    }

    /// Turn this function into a method.
    pub fn method(mut self, is_override: bool) -> Self {
        self.kind = FunctionKind::Method { is_override };
        self
    }

    pub fn returning(mut self, return_type: TypeRef) -> Self {
        self.return_type = return_type;
        self
    }

    pub fn with_parameter(mut self, ty: TypeRef) -> Self {
        self.parameters.push(ty);
        self
    }

    /// True for methods that override a base-class virtual.
    pub fn is_override(&self) -> bool {
        matches!(self.kind, FunctionKind::Method { is_override: true })
    }
}

/// A variable, including static data members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub decl: DeclarationInfo,
    pub mangled: String,
    pub ty: TypeRef,
}

impl Variable {
    pub fn new(decl: DeclarationInfo, mangled: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            decl,
            mangled: mangled.into(),
            ty,
        }
    }
}

/// A non-static data member. It owns no symbol, but its type is walked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeRef,
}

/// A class, struct or union definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub decl: DeclarationInfo,
    pub bases: Vec<TypeRef>,
    pub methods: Vec<Function>,
    /// Static data members.
    pub variables: Vec<Variable>,
    pub fields: Vec<Field>,
}

impl Class {
    pub fn new(decl: DeclarationInfo) -> Self {
        Self {
            decl,
            bases: Vec::new(),
            methods: Vec::new(),
            variables: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_base(mut self, base: TypeRef) -> Self {
        self.bases.push(base);
        self
    }

    pub fn with_method(mut self, method: Function) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_variable(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.fields.push(Field {
            name: name.into(),
            ty,
        });
        self
    }
}

/// A namespace and the declarations inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub name: String,
    pub decls: Vec<Decl>,
}

/// Any declaration that can appear at namespace scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Function(Function),
    Variable(Variable),
    Class(Class),
    Namespace(Namespace),
}

impl From<Function> for Decl {
    fn from(function: Function) -> Self {
        Decl::Function(function)
    }
}

impl From<Variable> for Decl {
    fn from(variable: Variable) -> Self {
        Decl::Variable(variable)
    }
}

impl From<Class> for Decl {
    fn from(class: Class) -> Self {
        Decl::Class(class)
    }
}

impl From<Namespace> for Decl {
    fn from(namespace: Namespace) -> Self {
        Decl::Namespace(namespace)
    }
}

/// A declaration that owns a mangled symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MangledDecl<'a> {
    Function(&'a Function),
    Variable(&'a Variable),
}

impl<'a> MangledDecl<'a> {
    /// The symbol the linker sees.
    pub fn mangled_name(&self) -> &'a str {
        match self {
            MangledDecl::Function(f) => &f.mangled,
            MangledDecl::Variable(v) => &v.mangled,
        }
    }

    /// Shared declaration properties.
    pub fn declaration(&self) -> &'a DeclarationInfo {
        match self {
            MangledDecl::Function(f) => &f.decl,
            MangledDecl::Variable(v) => &v.decl,
        }
    }

    /// Variables never override anything.
    pub fn is_override(&self) -> bool {
        match self {
            MangledDecl::Function(f) => f.is_override(),
            MangledDecl::Variable(_) => false,
        }
    }
}

impl<'a> From<&'a Function> for MangledDecl<'a> {
    fn from(function: &'a Function) -> Self {
        MangledDecl::Function(function)
    }
}

impl<'a> From<&'a Variable> for MangledDecl<'a> {
    fn from(variable: &'a Variable) -> Self {
        MangledDecl::Variable(variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> UnitInfo {
        UnitInfo::from_path("/src/shape.h")
    }

    #[test]
    fn free_function_is_not_override() {
        let f = Function::new(DeclarationInfo::new("area", unit()), "_Z4areav");
        assert!(!f.is_override());
        assert_eq!(f.kind, FunctionKind::Free);
    }

    #[test]
    fn method_override_flag() {
        let f = Function::new(DeclarationInfo::new("Shape::draw", unit()), "_ZN5Shape4drawEv")
            .method(true);
        assert!(f.is_override());
        let g = Function::new(DeclarationInfo::new("Shape::size", unit()), "_ZN5Shape4sizeEv")
            .method(false);
        assert!(!g.is_override());
    }

    #[test]
    fn mangled_decl_accessors() {
        let f = Function::new(
            DeclarationInfo::new("Shape::draw", unit()).with_access(AccessSpecifier::Private),
            "_ZN5Shape4drawEv",
        )
        .method(true);
        let v = Variable::new(
            DeclarationInfo::new("Shape::count", unit()),
            "_ZN5Shape5countE",
            TypeRef::builtin("int"),
        );

        let fd = MangledDecl::from(&f);
        assert_eq!(fd.mangled_name(), "_ZN5Shape4drawEv");
        assert_eq!(fd.declaration().access, AccessSpecifier::Private);
        assert!(fd.is_override());

        let vd = MangledDecl::from(&v);
        assert_eq!(vd.mangled_name(), "_ZN5Shape5countE");
        assert!(!vd.is_override());
    }

    #[test]
    fn ignored_builder() {
        let decl = DeclarationInfo::new("hidden", unit()).ignored();
        assert!(decl.ignore);
        assert_eq!(decl.access, AccessSpecifier::Public);
    }
}
