use criterion::{criterion_group, criterion_main, Criterion};
use rl::{rollout, CartPoleEnv, LinearPolicy};

fn bench_rollout(c: &mut Criterion) {
    let mut env = CartPoleEnv::default();
    env.seed(Some(0));
    let policy = LinearPolicy::default();
    c.bench_function("linear_policy_rollout", |b| {
        b.iter(|| rollout(&mut env, &policy, 200).unwrap());
    });
}

criterion_group!(benches, bench_rollout);
criterion_main!(benches);
