//! Access specifiers for C++ declarations.

use std::fmt;

/// Access specifier computed by the parser for a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessSpecifier {
    #[default]
    Public,
    Protected,
    Private,
}

impl AccessSpecifier {
    /// Whether the declaration is reachable from outside its class.
    #[inline]
    pub fn is_visible(self) -> bool {
        !matches!(self, AccessSpecifier::Private)
    }
}

impl fmt::Display for AccessSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessSpecifier::Public => write!(f, "public"),
            AccessSpecifier::Protected => write!(f, "protected"),
            AccessSpecifier::Private => write!(f, "private"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_public() {
        assert_eq!(AccessSpecifier::default(), AccessSpecifier::Public);
    }

    #[test]
    fn visibility() {
        assert!(AccessSpecifier::Public.is_visible());
        assert!(AccessSpecifier::Protected.is_visible());
        assert!(!AccessSpecifier::Private.is_visible());
    }

    #[test]
    fn display() {
        assert_eq!(AccessSpecifier::Protected.to_string(), "protected");
    }
}
