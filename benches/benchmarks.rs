use empirical::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        collecting_histogram_from_observations,
        converting_histogram_to_pmf,
        normalizing_mutated_pmf,
        computing_pmf_moments,
        biasing_and_unbiasing_pmf,
        sampling_from_pmf,
}

fn observations() -> Vec<usize> {
    (0..65_536)
        .map(|_| rand::random_range(0..ARBITRARY_SUPPORT * 4))
        .collect()
}

fn collecting_histogram_from_observations(c: &mut criterion::Criterion) {
    let ref values = observations();
    c.bench_function("collect a Histogram from 64k observations", |b| {
        b.iter(|| Histogram::from_values(values.iter().copied()))
    });
}

fn converting_histogram_to_pmf(c: &mut criterion::Criterion) {
    let ref hist = Histogram::from_values(observations());
    c.bench_function("convert a Histogram into a Pmf", |b| {
        b.iter(|| Pmf::from(hist))
    });
}

fn normalizing_mutated_pmf(c: &mut criterion::Criterion) {
    let pmf = Pmf::<usize>::random();
    c.bench_function("incr, mult, and normalize a Pmf", |b| {
        b.iter(|| {
            let mut pmf = pmf.copy(None);
            pmf.incr(0, 0.25);
            pmf.mult(1, 0.5);
            pmf.normalize()
        })
    });
}

fn computing_pmf_moments(c: &mut criterion::Criterion) {
    let pmf = Pmf::<usize>::random();
    c.bench_function("compute Pmf mean and variance", |b| {
        b.iter(|| (pmf.mean(), pmf.var()))
    });
}

fn biasing_and_unbiasing_pmf(c: &mut criterion::Criterion) {
    let pmf = Pmf::from_values(observations().into_iter().map(|x| x + 1));
    c.bench_function("bias then unbias a Pmf", |b| {
        b.iter(|| bias(&pmf, None).and_then(|ref biased| unbias(biased, None)))
    });
}

fn sampling_from_pmf(c: &mut criterion::Criterion) {
    let pmf = Pmf::<usize>::random();
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("draw 1k samples from a Pmf", |b| {
        b.iter(|| pmf.samples(1_000, rng))
    });
}
