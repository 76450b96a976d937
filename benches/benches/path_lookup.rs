// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use wayfinder_path_config::PathConfiguration;
use wayfinder_stack::Location;

fn gen_config(rules: usize) -> String {
    let mut out = String::from(r#"{"rules":["#);
    for i in 0..rules {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&format!(
            r#"{{"patterns":["^/section{i}/.*/new$","^/section{i}/.*/edit$"],"properties":{{"context":"modal","rule":{i}}}}}"#
        ));
    }
    out.push_str("]}");
    out
}

fn gen_locations(n: usize, sections: usize) -> Vec<Location> {
    (0..n)
        .map(|i| {
            let tail = match i % 3 {
                0 => "new",
                1 => "edit",
                _ => "show",
            };
            Location::new(format!(
                "https://example.com/section{}/items/{}/{}?page=2",
                i % sections,
                i,
                tail
            ))
        })
        .collect()
}

fn bench_properties_for(c: &mut Criterion) {
    let mut group = c.benchmark_group("properties_for");
    for &rules in &[8usize, 32, 128] {
        let config = match PathConfiguration::from_json(&gen_config(rules)) {
            Ok(config) => config,
            Err(err) => panic!("benchmark config failed to load: {err}"),
        };
        let locations = gen_locations(1024, rules);
        group.throughput(Throughput::Elements(locations.len() as u64));
        group.bench_function(format!("rules{}", rules), |b| {
            b.iter(|| {
                let matched: usize = locations
                    .iter()
                    .map(|l| config.properties_for(l).len())
                    .sum();
                black_box(matched)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_properties_for);
criterion_main!(benches);
