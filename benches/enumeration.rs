use criterion::{black_box, criterion_group, criterion_main, Criterion};
use endostruct::prelude::*;
use endostruct::utils::randfunc;

fn bench_tree_enumeration(c: &mut Criterion) {
    let trees = TreeEnumerator::new(14).unwrap();
    c.bench_function("dominant_trees_14", |b| b.iter(|| black_box(trees.iter().count())));
}

fn bench_structure_enumeration(c: &mut Criterion) {
    let structures = EndofunctionStructures::new(8);
    c.bench_function("structures_8", |b| {
        b.iter(|| {
            structures
                .iter()
                .map(|s| s.multiplicity())
                .fold(num_bigint::BigUint::default(), |acc, m| acc + m)
        })
    });
}

fn bench_from_func(c: &mut Criterion) {
    let mut rng = EnumerationConfig::new().with_seed(0).rng();
    let funcs: Vec<Endofunction> = (0..64).map(|_| randfunc(200, &mut rng)).collect();
    c.bench_function("structure_from_func_200", |b| {
        b.iter(|| {
            for f in &funcs {
                black_box(EndofunctionStructure::from_func(f));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_tree_enumeration,
    bench_structure_enumeration,
    bench_from_func
);
criterion_main!(benches);
