//! Canonical C++ spelling of types.
//!
//! The printed form of a template specialization is both its identity for
//! deduplication and the text emitted in explicit instantiation directives,
//! so printing must be deterministic.

use crate::types::{TemplateArgument, TemplateSpecializationType, TypeRef};

/// Prints [`TypeRef`]s as C++ source text.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypePrinter;

impl TypePrinter {
    pub fn new() -> Self {
        Self
    }

    /// Print a type.
    ///
    /// ```
    /// use inline_exports_core::{TypePrinter, TypeRef};
    ///
    /// let ty = TypeRef::builtin("char").constant().pointer();
    /// assert_eq!(TypePrinter::new().print(&ty), "const char*");
    /// ```
    pub fn print(&self, ty: &TypeRef) -> String {
        let mut out = String::new();
        self.write_type(&mut out, ty);
        out
    }

    /// Print a specialization as `Name<A, B>`.
    pub fn print_specialization(&self, ty: &TemplateSpecializationType) -> String {
        let mut out = String::new();
        self.write_specialization(&mut out, ty);
        out
    }

    fn write_type(&self, out: &mut String, ty: &TypeRef) {
        match ty {
            TypeRef::Builtin(name)
            | TypeRef::DependentName(name)
            | TypeRef::TemplateParameter(name) => out.push_str(name),
            TypeRef::Record(decl) => out.push_str(&decl.name),
            TypeRef::Pointer(inner) => {
                self.write_type(out, inner);
                out.push('*');
            }
            TypeRef::LValueReference(inner) => {
                self.write_type(out, inner);
                out.push('&');
            }
            TypeRef::Const(inner) => {
                out.push_str("const ");
                self.write_type(out, inner);
            }
            TypeRef::TemplateSpecialization(spec) => self.write_specialization(out, spec),
        }
    }

    fn write_specialization(&self, out: &mut String, ty: &TemplateSpecializationType) {
        out.push_str(&ty.template_name);
        out.push('<');
        for (i, argument) in ty.arguments.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_argument(out, argument);
        }
        out.push('>');
    }

    fn write_argument(&self, out: &mut String, argument: &TemplateArgument) {
        match (&argument.ty, &argument.declaration) {
            (Some(ty), _) => self.write_type(out, ty),
            (None, Some(decl)) => out.push_str(&decl.name),
            (None, None) => out.push('?'),
        }
    }
}
