//! Aggregation unit rendering.
//!
//! ```text
//! #include "box.h"
//! #include "util.h"
//!
//! template class __declspec(dllexport) Box<int>;
//! ```

/// Attribute placed on explicit instantiations to export them dynamically.
pub const DEFAULT_EXPORT_ATTRIBUTE: &str = "__declspec(dllexport)";

/// Render the include list (sorted) and the instantiation directives
/// (in the given order).
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn render_aggregation_unit<'h, 't>(
    headers: impl IntoIterator<Item = &'h str>,
    templates: impl IntoIterator<Item = &'t str>,
    export_attribute: &str,
) -> String {
    let mut headers: Vec<&str> = headers.into_iter().collect();
    headers.sort_unstable();
    headers.dedup();

    let mut out = String::new();
    for header in headers {
        out.push_str(&format!("#include \"{header}\"\n"));
    }
    out.push('\n');
    for template in templates {
        out.push_str(&format!("template class {export_attribute} {template};\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_sorted_then_templates_in_order() {
        let cpp = render_aggregation_unit(
            ["util.h", "box.h"],
            ["Vector<int>", "Box<float>"],
            DEFAULT_EXPORT_ATTRIBUTE,
        );
        assert_eq!(
            cpp,
            "#include \"box.h\"\n\
             #include \"util.h\"\n\
             \n\
             template class __declspec(dllexport) Vector<int>;\n\
             template class __declspec(dllexport) Box<float>;\n"
        );
    }

    #[test]
    fn empty_input_is_a_blank_line() {
        let cpp = render_aggregation_unit(
            std::iter::empty::<&str>(),
            std::iter::empty::<&str>(),
            DEFAULT_EXPORT_ATTRIBUTE,
        );
        assert_eq!(cpp, "\n");
    }

    #[test]
    fn custom_export_attribute() {
        let cpp = render_aggregation_unit(
            ["box.h"],
            ["Box<int>"],
            "__attribute__((visibility(\"default\")))",
        );
        assert!(cpp.ends_with(
            "template class __attribute__((visibility(\"default\"))) Box<int>;\n"
        ));
    }
}
