use barometer_core::metrics::{
    samples_accepted_total, samples_rejected_total, samples_throttled_total, smoothed_pressure_hpa,
};
use barometer_core::{Metrics, RawSample, SampleProcessor};

#[test]
fn test_counters_follow_ingest() {
    let metrics = Metrics::new();
    let mut p = SampleProcessor::with_metrics(metrics.clone());
    p.start(1000, 1.0).unwrap();

    p.ingest(RawSample::new(1000.0, 0)).unwrap();
    p.ingest(RawSample::new(1000.0, 10)).unwrap(); // strupet
    p.ingest(RawSample::new(995.0, 1000)).unwrap();
    let _ = p.ingest(RawSample::new(-1.0, 2000)); // avvist

    assert_eq!(samples_accepted_total(&metrics).get(), 2);
    assert_eq!(samples_throttled_total(&metrics).get(), 1);
    assert_eq!(samples_rejected_total(&metrics).get(), 1);
    assert_eq!(smoothed_pressure_hpa(&metrics).get(), 995.0);
}

#[test]
fn test_registry_exposes_families() {
    let metrics = Metrics::new();
    let names: Vec<String> = metrics
        .registry()
        .gather()
        .iter()
        .map(|f| f.get_name().to_string())
        .collect();
    assert!(names.contains(&"barometer_samples_accepted_total".to_string()));
    assert!(names.contains(&"barometer_smoothed_pressure_hpa".to_string()));
}

#[test]
fn test_default_processors_share_global_metrics() {
    let before = samples_accepted_total(Metrics::global()).get();

    let mut a = SampleProcessor::new();
    let mut b = SampleProcessor::new();
    a.start(0, 0.3).unwrap();
    b.start(0, 0.3).unwrap();
    a.ingest(RawSample::new(1000.0, 0)).unwrap();
    b.ingest(RawSample::new(1000.0, 0)).unwrap();

    assert!(samples_accepted_total(Metrics::global()).get() >= before + 2);
    assert_eq!(
        samples_accepted_total(a.metrics()).get(),
        samples_accepted_total(b.metrics()).get()
    );
}
