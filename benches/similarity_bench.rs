use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::*;
use showspace::builder::RecommenderBuilder;
use showspace::config::CfMethod;
use showspace::degree::compute_degree_matrices;
use showspace::interactions::InteractionMatrix;
use showspace::registry::ShowRegistry;
use showspace::similarity::{compute_item_similarity, compute_user_similarity};
use std::hint::black_box;
use std::time::Duration;

/// Synthetic binary watch history: a few popular shows, a long tail.
fn generate_interactions(n_users: usize, n_items: usize, density: f64, seed: u64) -> InteractionMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::with_capacity(n_users);

    for _ in 0..n_users {
        let mut row = Vec::with_capacity(n_items);
        for j in 0..n_items {
            // Popularity decays with the item index
            let p = (density * 3.0 / (1.0 + j as f64 / n_items as f64 * 4.0)).min(1.0);
            row.push(if rng.random::<f64>() < p { 1 } else { 0 });
        }
        rows.push(row);
    }
    InteractionMatrix::from_rows(rows).unwrap()
}

fn registry(n_items: usize) -> ShowRegistry {
    ShowRegistry::new((0..n_items).map(|j| format!("show-{}", j)))
}

pub fn criterion_benchmark(c: &mut Criterion) {
    // Group 1: similarity construction as the user count grows
    let mut group_users = c.benchmark_group("user_similarity_scalability");
    group_users.warm_up_time(Duration::from_millis(500));
    group_users.measurement_time(Duration::from_secs(3));
    group_users.sample_size(20);

    for &n_users in &[100, 250, 500, 1000] {
        let r = generate_interactions(n_users, 200, 0.05, 42);
        let deg = compute_degree_matrices(&r);

        group_users.bench_function(BenchmarkId::new("n_users", n_users), |b| {
            b.iter(|| {
                let su = compute_user_similarity(&r, &deg.p).unwrap();
                black_box(su);
            })
        });
    }
    group_users.finish();

    // Group 2: item similarity as the catalogue grows
    let mut group_items = c.benchmark_group("item_similarity_scalability");
    group_items.warm_up_time(Duration::from_millis(500));
    group_items.measurement_time(Duration::from_secs(3));
    group_items.sample_size(20);

    for &n_items in &[100, 250, 500, 1000] {
        let r = generate_interactions(500, n_items, 0.05, 42);
        let deg = compute_degree_matrices(&r);

        group_items.bench_function(BenchmarkId::new("n_items", n_items), |b| {
            b.iter(|| {
                let si = compute_item_similarity(&r, &deg.q).unwrap();
                black_box(si);
            })
        });
    }

    // Density changes the sparse walk cost, not the output size
    for &density in &[0.01, 0.05, 0.2] {
        let r = generate_interactions(500, 300, density, 7);
        let deg = compute_degree_matrices(&r);

        group_items.bench_function(BenchmarkId::new("density", format!("{:.2}", density)), |b| {
            b.iter(|| {
                let si = compute_item_similarity(&r, &deg.q).unwrap();
                black_box(si);
            })
        });
    }
    group_items.finish();

    // Group 3: end to end, build once then query
    let mut group_query = c.benchmark_group("recommend_query");
    group_query.sample_size(30);

    let r = generate_interactions(1000, 500, 0.05, 99);
    group_query.bench_function("build_context", |b| {
        b.iter_batched(
            || (r.clone(), registry(500)),
            |(r, reg)| {
                let ctx = RecommenderBuilder::new().build(r, reg).unwrap();
                black_box(ctx);
            },
            BatchSize::LargeInput,
        )
    });

    let ctx = RecommenderBuilder::new().build(r, registry(500)).unwrap();
    let candidates: Vec<usize> = (0..100).collect();
    for method in [CfMethod::UserUser, CfMethod::ItemItem] {
        group_query.bench_function(BenchmarkId::new("recommend", format!("{:?}", method)), |b| {
            b.iter(|| {
                let top = ctx.recommend(black_box(499), &candidates, method).unwrap();
                black_box(top);
            })
        });
    }
    group_query.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
