use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn linear_maps_and_inverts() {
    let y = LinearScale::new([10.0, 85.0], [461.0, 0.0]);
    assert!(close(y.apply(10.0), 461.0));
    assert!(close(y.apply(85.0), 0.0));
    assert!(close(y.invert(y.apply(47.5)), 47.5));
    // Unclamped scales extrapolate.
    assert!(y.apply(100.0) < 0.0);
}

#[test]
fn clamped_linear_invert_stays_in_domain() {
    let years = LinearScale::new([1800.0, 2009.0], [100.0, 500.0]).clamped();
    assert!(close(years.invert(100.0), 1800.0));
    assert!(close(years.invert(500.0), 2009.0));
    assert!(close(years.invert(-40.0), 1800.0));
    assert!(close(years.invert(9_000.0), 2009.0));
    assert!(close(years.invert(300.0), 1904.5));
}

#[test]
fn log_scale_maps_decades_evenly() {
    let x = LogScale::new([300.0, 1e5], [0.0, 901.0]);
    assert!(close(x.apply(300.0), 0.0));
    assert!(close(x.apply(1e5), 901.0));
    let a = x.apply(1_000.0) - x.apply(100.0 * 3.0);
    let b = x.apply(10_000.0) - x.apply(3_000.0);
    assert!(close(a, b));
    assert!(x.apply(0.0).is_nan());
    assert!(close(x.invert(x.apply(4_321.0)), 4_321.0));
}

#[test]
fn sqrt_scale_area_is_proportional_to_value() {
    let r = SqrtScale::new([0.0, 5e8], [0.0, 40.0]);
    assert_eq!(r.apply(0.0), 0.0);
    assert!(close(r.apply(5e8), 40.0));
    assert!(close(r.apply(1.25e8), 20.0));
    let big = r.apply(4e8);
    let small = r.apply(1e8);
    assert!(close((big / small).powi(2), 4.0));
}

#[test]
fn linear_ticks_are_nice() {
    assert_eq!(
        linear_ticks(10.0, 85.0, 10),
        vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0]
    );
    assert_eq!(linear_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(linear_ticks(1.0, 0.0, 2), vec![1.0, 0.5, 0.0]);
    assert_eq!(linear_ticks(3.0, 3.0, 10), vec![3.0]);
    assert!(linear_ticks(0.0, 1.0, 0).is_empty());
}

#[test]
fn fine_ticks_do_not_accumulate_float_error() {
    let ticks = linear_ticks(0.0, 0.3, 3);
    assert_eq!(ticks, vec![0.0, 0.1, 0.2, 0.3]);
}

#[test]
fn log_ticks_cover_each_decade() {
    let x = LogScale::new([300.0, 1e5], [0.0, 901.0]);
    let ticks = x.ticks(12);
    assert_eq!(ticks.len(), 26);
    assert_eq!(ticks[0], 300.0);
    assert_eq!(ticks[7], 1_000.0);
    assert_eq!(*ticks.last().unwrap(), 100_000.0);
    assert!(ticks.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn log_tick_labels_are_thinned_and_grouped() {
    let x = LogScale::new([300.0, 1e5], [0.0, 901.0]);
    let labeled: Vec<String> = x
        .ticks(12)
        .into_iter()
        .filter_map(|t| x.tick_label(t, 12))
        .collect();
    assert_eq!(
        labeled,
        vec![
            "300", "400", "1,000", "2,000", "3,000", "4,000", "10,000", "20,000", "30,000",
            "40,000", "100,000"
        ]
    );
}

#[test]
fn wide_log_domains_tick_on_powers() {
    let x = LogScale::new([1.0, 1e20], [0.0, 100.0]);
    let ticks = x.ticks(5);
    assert!(ticks.iter().all(|t| close(t.log10().fract(), 0.0)));
    assert_eq!(ticks[0], 1.0);
}

#[test]
fn thousands_formatting() {
    assert_eq!(format_thousands(0.0), "0");
    assert_eq!(format_thousands(999.4), "999");
    assert_eq!(format_thousands(1_000.0), "1,000");
    assert_eq!(format_thousands(1_234_567.0), "1,234,567");
    assert_eq!(format_thousands(-45_000.0), "-45,000");
}

#[test]
fn linear_tick_precision_follows_step() {
    assert_eq!(format_linear_tick(20.0, 10.0), "20");
    assert_eq!(format_linear_tick(0.2, 0.2), "0.2");
    assert_eq!(format_linear_tick(0.05, 0.05), "0.05");
}
