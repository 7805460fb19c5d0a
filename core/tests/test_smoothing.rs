use barometer_core::smoothing::{smooth_series, ExpSmoother};

#[test]
fn test_exp_smoother() {
    let mut s = ExpSmoother::new(0.3);
    assert_eq!(s.value(), None);
    assert_eq!(s.update(1013.25), 1013.25);
    assert!((s.update(1000.0) - 1009.275).abs() < 1e-9);

    s.reset();
    assert_eq!(s.value(), None);
    assert_eq!(s.update(900.0), 900.0);
}

#[test]
fn test_peek_does_not_mutate() {
    let mut s = ExpSmoother::new(0.5);
    s.update(10.0);
    assert_eq!(s.peek(20.0), 15.0);
    assert_eq!(s.value(), Some(10.0));
}

#[test]
fn test_smooth_series_damps_spike() {
    let xs = [1000.0, 1000.0, 960.0, 1000.0, 1000.0];
    let out = smooth_series(&xs, 0.3);
    assert_eq!(out.len(), xs.len());
    assert!(out[2] > 985.0); // spiken dempes
    assert!(out.iter().all(|v| *v <= 1000.0));
}
