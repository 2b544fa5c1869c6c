use std::sync::atomic::Ordering;
use std::sync::Arc;

use quick_panel::activator::{ForegroundActivator, MAX_ATTEMPTS};

use mock_focus::{DeniedFocus, FlagFocus, GrantAfter, UnsupportedProbe};

#[test]
fn exhausts_attempt_budget_without_error() {
    let adapter = Arc::new(DeniedFocus::default());
    ForegroundActivator::new(adapter.clone()).activate();
    assert_eq!(
        adapter.activations.load(Ordering::SeqCst),
        MAX_ATTEMPTS as usize
    );
}

#[test]
fn stops_after_the_first_successful_attempt() {
    let adapter = Arc::new(FlagFocus::default());
    ForegroundActivator::new(adapter.clone()).activate();
    assert_eq!(adapter.activations.load(Ordering::SeqCst), 1);
}

#[test]
fn keeps_retrying_until_foreground_sticks() {
    let adapter = Arc::new(GrantAfter::new(3));
    ForegroundActivator::new(adapter.clone()).activate();
    assert_eq!(adapter.activations.load(Ordering::SeqCst), 3);
}

#[test]
fn unsupported_platform_attempts_nothing() {
    let adapter = Arc::new(UnsupportedProbe::default());
    ForegroundActivator::new(adapter.clone()).activate();
    assert_eq!(adapter.activations.load(Ordering::SeqCst), 0);
}
