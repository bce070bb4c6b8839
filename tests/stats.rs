use vercmp::{StatsError, average, largest_n, median, percentile, smallest_n};

#[test]
fn smallest_n_returns_ascending_head() {
    assert_eq!(smallest_n(&[1.0, 2.0, 3.0], 1), Ok(vec![1.0]));
    assert_eq!(smallest_n(&[1.0, 2.5, 3.99], 1), Ok(vec![1.0]));
    assert_eq!(smallest_n(&[3.0, 1.0, 2.0], 2), Ok(vec![1.0, 2.0]));
}

#[test]
fn largest_n_returns_ascending_tail() {
    assert_eq!(largest_n(&[1.0, 2.0, 3.0], 1), Ok(vec![3.0]));
    assert_eq!(largest_n(&[3.0, 1.0, 2.0], 2), Ok(vec![2.0, 3.0]));
}

#[test]
fn count_larger_than_input_returns_everything() {
    assert_eq!(smallest_n(&[2.0, 1.0], 5), Ok(vec![1.0, 2.0]));
    assert_eq!(largest_n(&[2.0, 1.0], 5), Ok(vec![1.0, 2.0]));
}

#[test]
fn zero_count_is_rejected() {
    assert_eq!(smallest_n(&[1.0], 0), Err(StatsError::ZeroCount));
    assert_eq!(largest_n(&[1.0], 0), Err(StatsError::ZeroCount));
}

#[test]
fn average_of_values() {
    assert_eq!(average(&[1.0, 2.0, 3.0]), Ok(2.0));
    assert_eq!(average(&[1.0, 2.0, 3.0, 99.0]), Ok(26.25));
    assert_eq!(average(&[-4.0, 4.0]), Ok(0.0));
}

#[test]
fn median_of_odd_and_even_counts() {
    assert_eq!(median(&[1.0, 2.0, 3.0]), Ok(2.0));
    assert_eq!(median(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]), Ok(4.5));
    assert_eq!(median(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 888.0]), Ok(4.5));
    assert_eq!(median(&[9.0, 1.0, 5.0]), Ok(5.0));
}

#[test]
fn percentile_uses_nearest_rank() {
    assert_eq!(percentile(&[1.0, 2.0, 3.0], 50.0), Ok(2.0));
    assert_eq!(percentile(&[3.0, 4.0, 5.0], 50.0), Ok(4.0));
    assert_eq!(percentile(&[3.0, 4.0, 5.0], 1.0), Ok(3.0));
    assert_eq!(percentile(&[3.0, 4.0, 5.0], 99.0), Ok(5.0));
}

#[test]
fn percentile_bounds_clamp_to_input() {
    let values = [15.0, 20.0, 35.0, 40.0, 50.0];

    assert_eq!(percentile(&values, 0.0), Ok(15.0));
    assert_eq!(percentile(&values, 100.0), Ok(50.0));
    assert_eq!(percentile(&values, 30.0), Ok(20.0));
    assert_eq!(percentile(&values, 40.0), Ok(20.0));
}

#[test]
fn percentile_always_returns_an_input_value() {
    let values = [7.5, -2.0, 3.25, 11.0];

    for q in 0..=100 {
        let picked = percentile(&values, f64::from(q)).unwrap();
        assert!(values.contains(&picked), "q={q} picked {picked}");
    }
}

#[test]
fn percentile_rejects_out_of_range_quantile() {
    assert_eq!(
        percentile(&[1.0], 100.5),
        Err(StatsError::QuantileOutOfRange(100.5))
    );
    assert_eq!(
        percentile(&[1.0], -1.0),
        Err(StatsError::QuantileOutOfRange(-1.0))
    );
    assert!(percentile(&[1.0], f64::NAN).is_err());
}

#[test]
fn empty_input_is_rejected_everywhere() {
    assert_eq!(smallest_n(&[], 1), Err(StatsError::EmptyInput));
    assert_eq!(largest_n(&[], 1), Err(StatsError::EmptyInput));
    assert_eq!(average(&[]), Err(StatsError::EmptyInput));
    assert_eq!(median(&[]), Err(StatsError::EmptyInput));
    assert_eq!(percentile(&[], 50.0), Err(StatsError::EmptyInput));
}

#[test]
fn non_finite_values_are_rejected() {
    assert_eq!(
        average(&[1.0, f64::INFINITY]),
        Err(StatsError::NonFiniteValue(f64::INFINITY))
    );
    assert!(median(&[f64::NAN]).is_err());
}

#[test]
fn percentile_rank_is_exact_for_fractional_quantiles() {
    assert_eq!(
        percentile(&(1..=250).map(f64::from).collect::<Vec<_>>(), 64.4),
        Ok(161.0)
    );
    assert_eq!(
        percentile(&(1..=375).map(f64::from).collect::<Vec<_>>(), 8.8),
        Ok(33.0)
    );
    assert_eq!(
        percentile(&(1..=375).map(f64::from).collect::<Vec<_>>(), 17.6),
        Ok(66.0)
    );
}

#[test]
fn percentile_rank_matches_integer_arithmetic_in_tenths() {
    for len in 1..=120usize {
        let values = (1..=len as u32).map(f64::from).collect::<Vec<_>>();

        for tenths in 0..=1000usize {
            let q = tenths as f64 / 10.0;
            let expected = (tenths * len).div_ceil(1000).clamp(1, len);
            let picked = percentile(&values, q).unwrap();

            assert_eq!(picked, expected as f64, "q={q} len={len}");
        }
    }
}

#[test]
fn average_of_huge_values_stays_finite() {
    assert_eq!(average(&[f64::MAX, f64::MAX]), Ok(f64::MAX));
    assert_eq!(average(&[-f64::MAX, -f64::MAX]), Ok(-f64::MAX));
    assert_eq!(average(&[f64::MAX, -f64::MAX]), Ok(0.0));
}

#[test]
fn median_of_huge_values_stays_finite() {
    assert_eq!(median(&[f64::MAX, f64::MAX]), Ok(f64::MAX));
    assert_eq!(median(&[-f64::MAX, f64::MAX]), Ok(0.0));
    assert_eq!(median(&[-f64::MAX, -f64::MAX]), Ok(-f64::MAX));
}
