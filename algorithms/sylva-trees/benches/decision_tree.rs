use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sylva::prelude::*;
use sylva_trees::DecisionTree;

/// Random table of `n_features` ternary attributes, the class depends on the first two
fn generate_table(n_rows: usize, n_features: usize, rng: &mut SmallRng) -> ExampleTable<f64> {
    let mut attributes = (0..n_features)
        .map(|idx| Attribute::nominal(format!("f{}", idx), vec!["low", "mid", "high"]))
        .collect::<Vec<_>>();
    attributes.push(Attribute::nominal("class", vec!["a", "b", "c", "d"]));
    let catalog = Arc::new(AttributeCatalog::new(attributes).unwrap());

    let mut records = Array2::from_shape_fn((n_rows, n_features + 1), |_| {
        rng.gen_range(0..3) as f64
    });
    for mut row in records.rows_mut() {
        // ten percent label noise
        row[n_features] = if rng.gen_bool(0.1) {
            rng.gen_range(0..4) as f64
        } else {
            ((row[0] + row[1]) as usize % 4) as f64
        };
    }

    ExampleTable::from_rows(catalog, &records).unwrap()
}

fn decision_tree_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);

    let training_set_sizes = &[100, 1000, 10000];
    let n_features = 8;

    // Use the default configuration
    let hyperparams = DecisionTree::params();

    let mut group = c.benchmark_group("decision_tree");
    group.sample_size(10);

    for n in training_set_sizes.iter() {
        let table = generate_table(*n, n_features, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(n), &table, |b, t| {
            b.iter(|| hyperparams.fit(t))
        });
    }

    group.finish();
}

criterion_group!(benches, decision_tree_bench);
criterion_main!(benches);
