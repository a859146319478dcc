//! Export manifest rendering.
//!
//! Module-definition files assign ordinals by position, so the symbol order
//! must be the same on every run over the same input or previously linked
//! consumers break.

use inline_exports_core::ExportFormat;

/// Render `symbols` in the given order as an export manifest.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn render_export_manifest<'s>(
    symbols: impl IntoIterator<Item = &'s str>,
    format: ExportFormat,
) -> String {
    let eol = format.line_ending();
    let mut out = String::new();
    match format {
        ExportFormat::ModuleDefinition => {
            out.push_str("EXPORTS");
            out.push_str(eol);
            for (i, symbol) in symbols.into_iter().enumerate() {
                out.push_str(&format!("    {symbol} @{}{eol}", i + 1));
            }
        }
        ExportFormat::SymbolList => {
            for symbol in symbols {
                out.push_str(symbol);
                out.push_str(eol);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYMBOLS: [&str; 3] = ["_Z1av", "_Z1bv", "_Z1cv"];

    #[test]
    fn module_definition_with_ordinals() {
        let def = render_export_manifest(SYMBOLS, ExportFormat::ModuleDefinition);
        assert_eq!(
            def,
            "EXPORTS\r\n    _Z1av @1\r\n    _Z1bv @2\r\n    _Z1cv @3\r\n"
        );
    }

    #[test]
    fn plain_symbol_list() {
        let txt = render_export_manifest(SYMBOLS, ExportFormat::SymbolList);
        assert_eq!(txt, "_Z1av\n_Z1bv\n_Z1cv\n");
    }

    #[test]
    fn empty_manifests() {
        assert_eq!(
            render_export_manifest(std::iter::empty(), ExportFormat::ModuleDefinition),
            "EXPORTS\r\n"
        );
        assert_eq!(render_export_manifest(std::iter::empty(), ExportFormat::SymbolList), "");
    }

    #[test]
    fn ordinals_follow_given_order() {
        let def = render_export_manifest(["_Z1zv", "_Z1av"], ExportFormat::ModuleDefinition);
        let lines: Vec<&str> = def.split("\r\n").collect();
        assert_eq!(lines[1], "    _Z1zv @1");
        assert_eq!(lines[2], "    _Z1av @2");
    }
}
