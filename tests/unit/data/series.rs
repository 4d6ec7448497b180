use super::*;

fn series(points: &[(f64, f64)]) -> Series {
    let samples = points.iter().copied().map(Sample::from).collect();
    Series::new("test", Attribute::Income, samples).unwrap()
}

#[test]
fn clamps_outside_sampled_range() {
    let s = series(&[(1950.0, 40.0), (1960.0, 50.0)]);
    assert_eq!(s.value_at(1800.0), 40.0);
    assert_eq!(s.value_at(2009.0), 50.0);
    assert_eq!(s.value_at(f64::INFINITY), 50.0);
}

#[test]
fn exact_sample_years_return_the_sample() {
    let s = series(&[(1900.0, 1.0), (1950.0, 7.5), (1990.0, -3.0), (2000.0, 12.0)]);
    for sample in s.samples() {
        assert_eq!(s.value_at(sample.year), sample.value);
    }
}

#[test]
fn interior_values_blend_linearly_between_neighbors() {
    let s = series(&[(1900.0, 10.0), (1910.0, 30.0), (1950.0, 20.0)]);
    assert!((s.value_at(1905.0) - 20.0).abs() < 1e-9);
    assert!((s.value_at(1930.0) - 25.0).abs() < 1e-9);

    let mut year = 1900.0;
    while year <= 1950.0 {
        let v = s.value_at(year);
        let (lo, hi) = if year <= 1910.0 { (10.0, 30.0) } else { (20.0, 30.0) };
        assert!(v >= lo - 1e-9 && v <= hi + 1e-9, "year {year} -> {v}");
        year += 0.25;
    }
}

#[test]
fn single_sample_is_constant() {
    let s = series(&[(1950.0, 42.0)]);
    assert_eq!(s.value_at(1800.0), 42.0);
    assert_eq!(s.value_at(1950.0), 42.0);
    assert_eq!(s.value_at(2009.0), 42.0);
}

#[test]
fn duplicate_years_resolve_without_dividing_by_zero() {
    let s = series(&[(1950.0, 40.0), (1960.0, 50.0), (1960.0, 80.0)]);
    assert_eq!(s.value_at(1960.0), 50.0);
    let past = s.value_at(2000.0);
    assert!(past.is_finite());
    assert_eq!(past, 80.0);
}

#[test]
fn empty_series_is_malformed() {
    let err = Series::new("Chad", Attribute::Population, vec![]).unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::ChartError::MalformedSeries {
            attribute: Attribute::Population,
            ..
        }
    ));
}

#[test]
fn unsorted_or_non_finite_series_is_malformed() {
    let unsorted = vec![Sample::new(1960.0, 1.0), Sample::new(1950.0, 2.0)];
    assert!(Series::new("x", Attribute::Income, unsorted).is_err());

    let nan = vec![Sample::new(1950.0, f64::NAN)];
    assert!(Series::new("x", Attribute::Income, nan).is_err());
}

#[test]
fn samples_deserialize_from_pairs() {
    let samples: Vec<Sample> = serde_json::from_str("[[1800, 359.93], [1820, 359.93]]").unwrap();
    assert_eq!(samples[1], Sample::new(1820.0, 359.93));
}
