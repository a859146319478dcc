//! Benchmarks for inline symbol collection and artifact rendering.
//!
//! Libraries are synthetic: each unit declares a handful of inline
//! functions, a class with methods of mixed access, and uses a few template
//! specializations, some of them with private arguments.
//!
//! ## Profiling with Puffin
//!
//! ```bash
//! cargo bench --features profile-with-puffin
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use inline_exports::*;
use std::hint::black_box;

#[cfg(feature = "profile-with-puffin")]
fn setup_profiler() {
    puffin::set_scopes_on(true);
}

#[cfg(not(feature = "profile-with-puffin"))]
fn setup_profiler() {}

fn synthetic_library(units: usize) -> Library {
    let mut ids = TypeNodeIds::new();
    let mut library = Library::new();
    for u in 0..units {
        let info = UnitInfo::from_path(if u % 10 == 9 {
            format!("/include/detail{u}_p.h")
        } else {
            format!("/include/module{u}.h")
        });
        let record = DeclarationInfo::new(format!("Item{u}"), info.clone()).with_access(
            if u % 7 == 0 {
                AccessSpecifier::Private
            } else {
                AccessSpecifier::Public
            },
        );

        let mut class = Class::new(DeclarationInfo::new(format!("Widget{u}"), info.clone()));
        for m in 0..8 {
            let access = match m % 3 {
                0 => AccessSpecifier::Public,
                1 => AccessSpecifier::Protected,
                _ => AccessSpecifier::Private,
            };
            let spec = TemplateSpecializationType::new(
                ids.next_id(),
                format!("Box{}", m % 4),
                vec![TemplateArgument::record(record.clone())],
            );
            class = class.with_method(
                Function::new(
                    DeclarationInfo::new(format!("Widget{u}::m{m}"), info.clone())
                        .with_access(access),
                    format!("_ZN{u}Widget{m}mEv"),
                )
                .method(m % 5 == 0)
                .returning(spec.into()),
            );
        }

        let mut tu = TranslationUnit::new(info.clone()).with_decl(class);
        for f in 0..4 {
            tu.push(Function::new(
                DeclarationInfo::new(format!("free{f}"), info.clone()),
                format!("_Z{u}free{f}v"),
            ));
        }
        library.push(tu);
    }
    library
}

fn bench_collection(c: &mut Criterion) {
    setup_profiler();
    let mut group = c.benchmark_group("collect");
    for units in [10, 100, 1000] {
        let library = synthetic_library(units);
        group.throughput(Throughput::Elements(units as u64));
        group.bench_with_input(BenchmarkId::from_parameter(units), &library, |b, library| {
            b.iter(|| InlinesPass::new(&NoExportedSymbols).run(black_box(library)));
        });
    }
    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let output = InlinesPass::new(&NoExportedSymbols).run(&synthetic_library(1000));
    c.bench_function("render_aggregation_unit", |b| {
        b.iter(|| {
            render_aggregation_unit(
                output.headers.iter().map(String::as_str),
                output.templates.iter().map(String::as_str),
                DEFAULT_EXPORT_ATTRIBUTE,
            )
        })
    });
    c.bench_function("render_module_definition", |b| {
        b.iter(|| {
            render_export_manifest(
                output.mangled_inlines.iter().map(String::as_str),
                ExportFormat::ModuleDefinition,
            )
        })
    });
}

criterion_group!(benches, bench_collection, bench_rendering);
criterion_main!(benches);
