// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use wayfinder_hierarchy::{HierarchyController, NoDelegate, Properties, VisitAction, VisitProposal};
use wayfinder_stack::WebScreen;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

const CONTEXTS: &[&str] = &["default", "modal"];
const PRESENTATIONS: &[&str] = &[
    "default",
    "default",
    "default",
    "replace",
    "pop",
    "refresh",
    "clear_all",
    "replace_root",
    "none",
];

fn gen_proposals(n: usize, pages: u64, seed: u64) -> Vec<VisitProposal> {
    let mut rng = Rng::new(seed);
    (0..n)
        .map(|_| {
            let page = rng.below(pages);
            let context = CONTEXTS[rng.below(CONTEXTS.len() as u64) as usize];
            let presentation = PRESENTATIONS[rng.below(PRESENTATIONS.len() as u64) as usize];
            let action = if rng.below(4) == 0 {
                VisitAction::Replace
            } else {
                VisitAction::Advance
            };
            let props = Properties::new()
                .with("context", context)
                .with("presentation", presentation);
            VisitProposal::new(format!("https://example.com/p/{page}"), action, props)
        })
        .collect()
}

fn gen_deep_pushes(n: usize) -> Vec<VisitProposal> {
    (0..n)
        .map(|i| VisitProposal::advance(format!("https://example.com/d/{i}")))
        .collect()
}

fn route_all(hc: &mut HierarchyController<WebScreen>, proposals: &[VisitProposal]) -> usize {
    let mut ops = 0;
    for p in proposals {
        let screen = WebScreen::from(p.location().clone());
        ops += hc.route(screen, p, &mut NoDelegate).ops().len();
    }
    ops
}

fn bench_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    for &n in &[256usize, 1024, 4096] {
        let proposals = gen_proposals(n, 32, 0x5eed);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("route_n{}", n), |b| {
            b.iter_batched(
                || HierarchyController::with_root(WebScreen::new("https://example.com/")),
                |mut hc| black_box(route_all(&mut hc, &proposals)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_deep_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_stack");
    for &depth in &[64usize, 256, 1024] {
        let pushes = gen_deep_pushes(depth);
        // Revisit the root page: one reverse scan of the whole stack, then truncate.
        let back = VisitProposal::advance("https://example.com/d/0");
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("push_then_back_d{}", depth), |b| {
            b.iter_batched(
                HierarchyController::<WebScreen>::new,
                |mut hc| {
                    let ops = route_all(&mut hc, &pushes);
                    let t = hc.route(WebScreen::new("https://example.com/d/0"), &back, &mut NoDelegate);
                    black_box((ops, t.ops().len(), hc.main().len()));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mixed, bench_deep_stack);
criterion_main!(benches);
