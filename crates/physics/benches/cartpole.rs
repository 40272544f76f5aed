use criterion::{black_box, criterion_group, criterion_main, Criterion};
use physics::{CartPole, Integrator, PhysicalConstants, ResetOptions};

fn bench_episode(c: &mut Criterion) {
    for integrator in [Integrator::Euler, Integrator::SemiImplicitEuler] {
        let constants = PhysicalConstants::new(9.8, 1.0, 0.1, 0.5, 0.02, integrator).unwrap();
        let name = format!("cartpole_episode_{integrator:?}").to_lowercase();
        c.bench_function(&name, |b| {
            let mut engine = CartPole::new(constants);
            let mut rng = fastrand::Rng::with_seed(0);
            b.iter(|| {
                let mut state = engine.reset(&mut rng, ResetOptions::default().with_initial_angle(0.0));
                for _ in 0..200 {
                    let outcome = engine.step(&state, black_box(0.5)).unwrap();
                    state = outcome.state;
                    if outcome.done {
                        break;
                    }
                }
                state
            });
        });
    }
}

criterion_group!(benches, bench_episode);
criterion_main!(benches);
