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
        scoring_random_codes,
        scoring_whole_action_space,
        sampling_targets,
        stepping_episode,
        solving_episode,
}

use mastermind::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn scoring_random_codes(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let guess = rng.random::<Code>();
    let target = rng.random::<Code>();
    c.bench_function("score a guess against a target", |b| {
        b.iter(|| Feedback::score(&guess, &target))
    });
}

fn scoring_whole_action_space(c: &mut criterion::Criterion) {
    let target = Code::try_from("1123").expect("valid code");
    c.bench_function("score every code against one target", |b| {
        b.iter(|| {
            Code::exhaust()
                .map(|guess| Feedback::score(&guess, &target))
                .filter(Feedback::is_solved)
                .count()
        })
    });
}

fn sampling_targets(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("sample a uniform target", |b| {
        b.iter(|| ActionSpace.sample(rng))
    });
}

fn stepping_episode(c: &mut criterion::Criterion) {
    let mut env = Episode::<SmallRng, ()>::seeded(0, ());
    let guess = Code::try_from("0011").expect("valid code");
    c.bench_function("reset and step an episode", |b| {
        b.iter(|| {
            env.reset();
            env.step(guess)
        })
    });
}

fn solving_episode(c: &mut criterion::Criterion) {
    let mut env = Episode::<SmallRng, ()>::seeded(0, ());
    let mut solver = Solver::default();
    c.bench_function("solve an episode with the consistent solver", |b| {
        b.iter(|| solver.play(&mut env))
    });
}
