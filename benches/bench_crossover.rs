use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crossbreed::{
    crossover::CrossoverOperator,
    number::DiscreteUniformGenerator,
    rng::RandomNumberGenerator,
    strategy::{SequenceCrossover, StringCrossover},
};

fn bench_sequence_crossover(c: &mut Criterion) {
    let operator = CrossoverOperator::new(SequenceCrossover, 2);
    let mut rng = RandomNumberGenerator::from_seed(42);

    let mut group = c.benchmark_group("sequence_crossover");
    for size in [10, 100, 1000, 10000].iter() {
        let population: Vec<Vec<u32>> = (0..*size).map(|i| vec![i as u32; 64]).collect();
        group.bench_function(format!("sequence_crossover_{}", size), |b| {
            b.iter(|| {
                let result = operator.apply(black_box(&population), Some(&mut rng));
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_string_crossover(c: &mut Criterion) {
    let generator =
        DiscreteUniformGenerator::new(1, 5, RandomNumberGenerator::from_seed(1)).unwrap();
    let operator = CrossoverOperator::with_generator(StringCrossover, generator);
    let mut rng = RandomNumberGenerator::from_seed(42);
    let population: Vec<String> = (0..1000)
        .map(|i| format!("{:032}", i))
        .collect();

    c.bench_function("string_crossover_1000", |b| {
        b.iter(|| {
            let result = operator.apply(black_box(&population), Some(&mut rng));
            assert!(result.is_ok());
        })
    });
}

criterion_group!(benches, bench_sequence_crossover, bench_string_crossover);
criterion_main!(benches);
