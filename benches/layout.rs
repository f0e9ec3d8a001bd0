//! Benchmarks for layout, hit-testing and drop resolution
//!
//! Run with: cargo bench layout

mod support;
use support::make_model;

use splitdeck::messages::{Msg, PointerMsg};
use splitdeck::model::{DragSession, Rect, WindowId};
use splitdeck::update::update;
use splitdeck::view::{hit_test, html, resolve_drop};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Layout
// ============================================================================

#[divan::bench(args = [1, 8, 32])]
fn compute_layout(bencher: divan::Bencher, tabs: usize) {
    let mut model = make_model(tabs);
    bencher.bench_local(|| {
        model
            .workspace
            .compute_layout(Rect::new(0.0, 0.0, 1920.0, 1080.0));
        divan::black_box(&model.workspace);
    });
}

// ============================================================================
// Hit-testing
// ============================================================================

#[divan::bench(args = [1, 8, 32])]
fn hit_test_tab_bar(bencher: divan::Bencher, tabs: usize) {
    let model = make_model(tabs);
    bencher.bench_local(|| divan::black_box(hit_test(&model, 500.0, 10.0)));
}

#[divan::bench(args = [1, 8, 32])]
fn resolve_drop_second_window(bencher: divan::Bencher, tabs: usize) {
    let model = make_model(tabs);
    let window = model.workspace.primary();
    let session = DragSession::new(window.pairs[0].id(), WindowId(1));
    bencher.bench_local(|| divan::black_box(resolve_drop(&model, &session, 1100.0, 10.0)));
}

// ============================================================================
// Full gesture
// ============================================================================

#[divan::bench(args = [8, 32])]
fn drag_reorder_round_trip(bencher: divan::Bencher, tabs: usize) {
    bencher
        .with_inputs(|| make_model(tabs))
        .bench_local_values(|mut model| {
            update(&mut model, Msg::Pointer(PointerMsg::DragStart { x: 10.0, y: 10.0 }));
            update(&mut model, Msg::Pointer(PointerMsg::DragOver { x: 300.0, y: 10.0 }));
            update(&mut model, Msg::Pointer(PointerMsg::Drop { x: 300.0, y: 10.0 }));
            model
        });
}

#[divan::bench(args = [1, 8, 32])]
fn render_html(bencher: divan::Bencher, tabs: usize) {
    let model = make_model(tabs);
    bencher.bench_local(|| divan::black_box(html::render(&model)));
}
