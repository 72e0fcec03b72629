use approx::assert_abs_diff_eq;
use deck_rs::chart::{project, project_decimal_rates};
use rust_decimal::Decimal;

#[test]
fn projects_each_period_from_the_previous_rounded_value() {
    assert_eq!(project(100.0, &[10.0, -10.0]), vec![110.0, 99.0]);
}

#[test]
fn empty_schedule_yields_empty_projection() {
    assert!(project(100.0, &[]).is_empty());
}

#[test]
fn zero_rates_hold_the_value_flat() {
    assert_eq!(project(103_359.0, &[0.0, 0.0, 0.0]), vec![103_359.0; 3]);
}

#[test]
fn exact_ties_round_to_even() {
    // 1.0 * 1.5 = 1.5 and 5.0 * 0.5 = 2.5 both sit exactly between
    // integers; both resolve to the even neighbor 2.
    assert_eq!(project(1.0, &[50.0]), vec![2.0]);
    assert_eq!(project(5.0, &[-50.0]), vec![2.0]);
}

#[test]
fn population_schedule_reproduces_the_published_projection() {
    let rates = [-1.2, -1.2, -1.1, -1.1, -1.0, -1.0, -0.9, -0.9, -0.8, -0.8];
    let projected = project(103_359.0, &rates);
    assert_eq!(
        projected,
        vec![
            102_119.0, 100_894.0, 99_784.0, 98_686.0, 97_699.0, 96_722.0, 95_852.0, 94_989.0,
            94_229.0, 93_475.0,
        ]
    );
}

#[test]
fn rounding_stays_within_half_a_unit_of_the_exact_compound() {
    let rates = [-1.2, -1.2, -1.1, -1.1, -1.0, -1.0, -0.9, -0.9, -0.8, -0.8];
    let projected = project(103_359.0, &rates);

    let mut carry = 103_359.0;
    for (rate, rounded) in rates.iter().zip(&projected) {
        let exact = carry * (1.0 + rate / 100.0);
        assert_abs_diff_eq!(*rounded, exact, epsilon = 0.5 + 1e-9);
        carry = *rounded;
    }
}

#[test]
fn cumulative_rounding_never_diverges_from_the_direct_compound() {
    // Per-period rounding can drift at most half a unit per period from
    // compounding the whole schedule without intermediate rounding.
    let rates = [-1.2, -1.2, -1.1, -1.1, -1.0, -1.0, -0.9, -0.9, -0.8, -0.8];
    let projected = project(103_359.0, &rates);

    let mut direct = 103_359.0;
    for (rate, rounded) in rates.iter().zip(&projected) {
        direct *= 1.0 + rate / 100.0;
        assert_abs_diff_eq!(*rounded, direct, epsilon = 0.5 * rates.len() as f64);
    }
}

#[test]
fn decimal_rates_match_their_f64_equivalents() {
    let decimal_rates = [
        Decimal::new(-12, 1),
        Decimal::new(-11, 1),
        Decimal::new(-10, 1),
    ];
    let via_decimal =
        project_decimal_rates(103_359.0, &decimal_rates).expect("rates convert to f64");
    let via_f64 = project(103_359.0, &[-1.2, -1.1, -1.0]);
    assert_eq!(via_decimal, via_f64);
}

#[test]
fn negative_rates_are_monotonically_decreasing() {
    let projected = project(50_000.0, &[-0.5; 20]);
    for window in projected.windows(2) {
        assert!(window[1] < window[0]);
    }
}
