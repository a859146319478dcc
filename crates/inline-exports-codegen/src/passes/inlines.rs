//! Inline Symbol Collection Pass.
//!
//! Inline functions and variables defined in headers are not guaranteed to be
//! emitted by any object file of the compiled library. This pass finds the
//! ones that must be forced into existence and records:
//!
//! - the headers the aggregation unit has to include,
//! - the template specializations it has to explicitly instantiate,
//! - the mangled symbols the export manifest has to list.
//!
//! ## Eligibility
//!
//! ```text
//! function / variable                  template specialization
//! ───────────────────                  ───────────────────────
//! not ignored                          arguments instantiable
//! public, protected, or                printed form not yet recorded
//!   private override                   ─► record printed form
//! not already exported                 ─► own header unless private unit
//! unit not private (_impl.h, _p.h)     ─► headers of argument declarations
//! ─► record header + symbol                (always, even private units)
//! ```
//!
//! All three sets keep first-discovery order and never hold duplicates, so
//! revisiting equivalent content changes nothing.

use indexmap::IndexSet;
use inline_exports_core::{
    AccessSpecifier, ExportedSymbols, Function, Library, LibraryVisitor, MangledDecl,
    TemplateSpecializationType, TranslationUnit, TypePrinter, UnitInfo, Variable, walk_library,
};
use rustc_hash::FxBuildHasher;

use crate::template::find_invalid_argument;

/// Insertion-ordered set with the Fx hasher.
pub type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Why a function or variable is not exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Excluded from the public surface upstream.
    Ignored,
    /// Private and not a virtual override.
    Inaccessible,
    /// The compiled library exports it already.
    AlreadyExported,
    /// Declared in a private-implementation header.
    PrivateUnit,
}

/// State accumulated over one library walk.
#[derive(Debug, Default, Clone)]
pub struct InlinesOutput {
    /// Include names, unsorted.
    pub headers: FxIndexSet<String>,
    /// Printed specializations in discovery order.
    pub templates: FxIndexSet<String>,
    /// Mangled names in discovery order. Position + 1 is the export ordinal.
    pub mangled_inlines: FxIndexSet<String>,
    /// Functions and variables that were not exported.
    pub skipped_declarations: usize,
    /// Specializations rejected for non-instantiable arguments.
    pub rejected_templates: usize,
}

impl InlinesOutput {
    /// Headers in lexicographic order, as they are emitted.
    pub fn sorted_headers(&self) -> Vec<&str> {
        let mut headers: Vec<&str> = self.headers.iter().map(String::as_str).collect();
        headers.sort_unstable();
        headers
    }

    /// Whether nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.templates.is_empty() && self.mangled_inlines.is_empty()
    }
}

/// Collects inline symbols and template specializations during a walk.
pub struct InlinesPass<'a> {
    symbols: &'a dyn ExportedSymbols,
    printer: TypePrinter,
    current_unit: Option<UnitInfo>,
    output: InlinesOutput,
}

impl<'a> InlinesPass<'a> {
    /// Create a pass that consults `symbols` for already-exported names.
    pub fn new(symbols: &'a dyn ExportedSymbols) -> Self {
        Self {
            symbols,
            printer: TypePrinter::new(),
            current_unit: None,
            output: InlinesOutput::default(),
        }
    }

    /// Walk the whole library once and return what was collected.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn run(mut self, library: &Library) -> InlinesOutput {
        walk_library(library, &mut self);
        tracing::debug!(
            headers = self.output.headers.len(),
            templates = self.output.templates.len(),
            symbols = self.output.mangled_inlines.len(),
            skipped = self.output.skipped_declarations,
            rejected = self.output.rejected_templates,
            "inline symbol collection finished"
        );
        self.output
    }

    /// Finish a pass driven callback by callback, without [`InlinesPass::run`].
    pub fn into_output(self) -> InlinesOutput {
        self.output
    }

    /// Decide whether a function or variable must be exported.
    pub fn classify(&self, mangled: MangledDecl<'_>) -> Option<SkipReason> {
        let decl = mangled.declaration();
        if decl.ignore {
            return Some(SkipReason::Ignored);
        }
        if !access_valid(decl.access, mangled.is_override()) {
            return Some(SkipReason::Inaccessible);
        }
        if self.symbols.contains(mangled.mangled_name()) {
            return Some(SkipReason::AlreadyExported);
        }
        if decl.unit.is_private_implementation() {
            return Some(SkipReason::PrivateUnit);
        }
        None
    }

    fn check_for_symbols(&mut self, mangled: MangledDecl<'_>) {
        if let Some(reason) = self.classify(mangled) {
            tracing::trace!(symbol = mangled.mangled_name(), ?reason, "skipping declaration");
            self.output.skipped_declarations += 1;
            return;
        }

        let decl = mangled.declaration();
        add_header(&mut self.output.headers, &decl.unit.file_name);
        if self
            .output
            .mangled_inlines
            .insert(mangled.mangled_name().to_string())
        {
            tracing::debug!(
                symbol = mangled.mangled_name(),
                unit = %decl.unit,
                "exporting inline symbol"
            );
        }
    }
}

impl LibraryVisitor for InlinesPass<'_> {
    fn visit_translation_unit(&mut self, unit: &TranslationUnit) {
        self.current_unit = Some(unit.info.clone());
    }

    fn visit_function(&mut self, function: &Function) {
        self.check_for_symbols(MangledDecl::Function(function));
    }

    fn visit_variable(&mut self, variable: &Variable) {
        self.check_for_symbols(MangledDecl::Variable(variable));
    }

    fn visit_template_specialization(&mut self, ty: &TemplateSpecializationType) {
        if let Some(reason) = find_invalid_argument(&ty.arguments) {
            tracing::trace!(template = %ty.template_name, ?reason, "rejecting specialization");
            self.output.rejected_templates += 1;
            return;
        }

        let printed = self.printer.print_specialization(ty);
        if self.output.templates.contains(&printed) {
            return;
        }
        tracing::debug!(template = %printed, "instantiating specialization");
        self.output.templates.insert(printed);

        // The unit's own header is withheld for private units, argument
        // headers never are.
        if let Some(unit) = &self.current_unit {
            if !unit.is_private_implementation() {
                add_header(&mut self.output.headers, &unit.file_name);
            }
        }
        for decl in ty.argument_declarations() {
            add_header(&mut self.output.headers, &decl.unit.file_name);
        }
    }
}

/// Private declarations are only reachable when they override a virtual.
fn access_valid(access: AccessSpecifier, is_override: bool) -> bool {
    access.is_visible() || is_override
}

fn add_header(headers: &mut FxIndexSet<String>, file_name: &str) {
    if !headers.contains(file_name) {
        headers.insert(file_name.to_string());
    }
}
