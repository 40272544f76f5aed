use std::io::Write;

use physics::Integrator;
use pendulum::app::{run, RunOptions};
use pendulum::config::load_constants;

#[test]
fn seeded_runs_are_reproducible() {
    let options = RunOptions { seed: Some(7), log_every: 0, ..RunOptions::default() };
    let first = run(&options).unwrap();
    let second = run(&options).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.seed, 7);
    assert!(first.steps > 0 && first.steps <= 200);
}

#[test]
fn episode_length_caps_the_run() {
    let options = RunOptions {
        seed: Some(3),
        episode_length: Some(20),
        log_every: 5,
        ..RunOptions::default()
    };
    let report = run(&options).unwrap();
    assert_eq!(report.steps, 20);
    // Nineteen live steps then the end-of-episode penalty.
    assert!(report.total_reward < 19.0 * 2.0 - 20.0 + 2.0);
}

#[test]
fn constants_load_from_json_with_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "pole_mass": 0.2, "integrator": "semi-implicit-euler" }}"#).unwrap();

    let constants = load_constants(Some(file.path()), None).unwrap();
    assert_eq!(constants.pole_mass(), 0.2);
    assert_eq!(constants.cart_mass(), 1.0);
    assert_eq!(constants.integrator(), Integrator::SemiImplicitEuler);

    let overridden = load_constants(Some(file.path()), Some(Integrator::Euler)).unwrap();
    assert_eq!(overridden.integrator(), Integrator::Euler);
}

#[test]
fn invalid_constants_are_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "cart_mass": 0.0 }}"#).unwrap();
    let err = load_constants(Some(file.path()), None).unwrap_err();
    assert!(format!("{err:#}").contains("cart_mass"));

    assert!(load_constants(Some(std::path::Path::new("/nonexistent/constants.json")), None).is_err());
}
