use qsc::{PermutationKind, SelfTestError, hash, run_all_strategies, self_test};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn self_test_passes() {
    init_tracing();
    assert_eq!(self_test(), Ok(()));
}

#[test]
fn self_test_passes_under_both_strategies() {
    init_tracing();
    let before = hash::permutation();
    assert_eq!(run_all_strategies(), Ok(()));
    assert_eq!(hash::permutation(), before);
}

#[test]
fn default_strategy_follows_feature() {
    let expected = if cfg!(feature = "compact-permutation") {
        PermutationKind::Compact
    } else {
        PermutationKind::Unrolled
    };
    assert_eq!(PermutationKind::DEFAULT, expected);
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&SelfTestError::KnownAnswerMismatch { primitive: "FFT" });
}
