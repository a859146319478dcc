//! Template argument validation.
//!
//! An explicit instantiation is compiled in a translation unit of its own, so
//! every argument must be a concrete type that is visible from outside the
//! library. Nested specializations are checked recursively.

use inline_exports_core::{AccessSpecifier, TemplateArgument, TypeRef};

/// Why an argument list cannot be instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The parser could not resolve the argument type.
    Unresolved,
    /// `typename T::name` still depends on a template parameter.
    DependentName,
    /// The argument is itself a template parameter.
    TemplateParameter,
    /// The referenced declaration is ignored.
    IgnoredDeclaration,
    /// The referenced declaration is private.
    PrivateDeclaration,
}

/// Whether every argument, including those of nested specializations, can be
/// instantiated.
pub fn are_template_arguments_valid(arguments: &[TemplateArgument]) -> bool {
    find_invalid_argument(arguments).is_none()
}

/// The first reason an argument list is not instantiable, if any.
pub fn find_invalid_argument(arguments: &[TemplateArgument]) -> Option<InvalidArgument> {
    for argument in arguments {
        let Some(ty) = &argument.ty else {
            return Some(InvalidArgument::Unresolved);
        };
        match ty {
            TypeRef::DependentName(_) => return Some(InvalidArgument::DependentName),
            TypeRef::TemplateParameter(_) => return Some(InvalidArgument::TemplateParameter),
            _ => {}
        }
        if let Some(decl) = &argument.declaration {
            if decl.ignore {
                return Some(InvalidArgument::IgnoredDeclaration);
            }
            if decl.access == AccessSpecifier::Private {
                return Some(InvalidArgument::PrivateDeclaration);
            }
        }
        if let TypeRef::TemplateSpecialization(nested) = ty {
            if let Some(reason) = find_invalid_argument(&nested.arguments) {
                return Some(reason);
            }
        }
    }
    None
}
