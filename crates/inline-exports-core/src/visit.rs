//! Library traversal.
//!
//! [`walk_library`] reaches every translation unit, declaration and type of a
//! [`Library`] exactly once per walk and reports them to a [`LibraryVisitor`].
//!
//! ## Order
//!
//! ```text
//! unit ─► visit_translation_unit
//!   └─ decl (source order)
//!        ├─ function  ─► visit_function, then return type, then parameters
//!        ├─ variable  ─► visit_variable, then its type
//!        ├─ class     ─► bases, methods, static members, fields
//!        └─ namespace ─► nested decls
//! type ─► pointers/references/const unwrap to the named type
//!   └─ specialization ─► visit_template_specialization, then argument types
//! ```
//!
//! A specialization node already reported during this walk (same
//! [`TypeNodeId`]) is skipped together with its arguments.

use rustc_hash::FxHashSet;

use crate::decl::{Class, Decl, Function, Variable};
use crate::library::{Library, TranslationUnit};
use crate::types::{TemplateSpecializationType, TypeNodeId, TypeRef};

/// Callbacks invoked by [`walk_library`]. All default to no-ops.
pub trait LibraryVisitor {
    fn visit_translation_unit(&mut self, _unit: &TranslationUnit) {}

    fn visit_function(&mut self, _function: &Function) {}

    fn visit_variable(&mut self, _variable: &Variable) {}

    fn visit_template_specialization(&mut self, _ty: &TemplateSpecializationType) {}
}

/// Walk `library` once, reporting every node to `visitor`.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn walk_library<V: LibraryVisitor + ?Sized>(library: &Library, visitor: &mut V) {
    let mut walker = Walker {
        visitor,
        visited: FxHashSet::default(),
    };
    for unit in &library.units {
        walker.walk_unit(unit);
    }
    tracing::trace!(
        units = library.units.len(),
        specializations = walker.visited.len(),
        "library walk finished"
    );
}

struct Walker<'v, V: ?Sized> {
    visitor: &'v mut V,
    /// Specialization nodes already reported in this walk.
    visited: FxHashSet<TypeNodeId>,
}

impl<V: LibraryVisitor + ?Sized> Walker<'_, V> {
    fn walk_unit(&mut self, unit: &TranslationUnit) {
        self.visitor.visit_translation_unit(unit);
        for decl in &unit.decls {
            self.walk_decl(decl);
        }
    }

    fn walk_decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Function(function) => self.walk_function(function),
            Decl::Variable(variable) => self.walk_variable(variable),
            Decl::Class(class) => self.walk_class(class),
            Decl::Namespace(namespace) => {
                for decl in &namespace.decls {
                    self.walk_decl(decl);
                }
            }
        }
    }

    fn walk_function(&mut self, function: &Function) {
        self.visitor.visit_function(function);
        self.walk_type(&function.return_type);
        for parameter in &function.parameters {
            self.walk_type(parameter);
        }
    }

    fn walk_variable(&mut self, variable: &Variable) {
        self.visitor.visit_variable(variable);
        self.walk_type(&variable.ty);
    }

    fn walk_class(&mut self, class: &Class) {
        for base in &class.bases {
            self.walk_type(base);
        }
        for method in &class.methods {
            self.walk_function(method);
        }
        for variable in &class.variables {
            self.walk_variable(variable);
        }
        for field in &class.fields {
            self.walk_type(&field.ty);
        }
    }

    fn walk_type(&mut self, ty: &TypeRef) {
        match ty {
            TypeRef::Pointer(inner) | TypeRef::LValueReference(inner) | TypeRef::Const(inner) => {
                self.walk_type(inner)
            }
            TypeRef::TemplateSpecialization(spec) => self.walk_specialization(spec),
            TypeRef::Builtin(_)
            | TypeRef::Record(_)
            | TypeRef::DependentName(_)
            | TypeRef::TemplateParameter(_) => {}
        }
    }

    fn walk_specialization(&mut self, spec: &TemplateSpecializationType) {
        if !self.visited.insert(spec.id) {
            return;
        }
        self.visitor.visit_template_specialization(spec);
        for argument in &spec.arguments {
            if let Some(ty) = &argument.ty {
                self.walk_type(ty);
            }
        }
    }
}
