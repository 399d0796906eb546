//! Property tests for pay calculation and totals.

use proptest::prelude::*;

use payroll::{calculate_pay, RunningTotals};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: net = hours * rate * (1 - tax_rate).
    #[test]
    fn property_net_pay_formula(
        hours in 0.0f64..1_000.0,
        rate in 0.0f64..1_000.0,
        tax_rate in 0.0f64..=1.0,
    ) {
        let pay = calculate_pay(hours, rate, tax_rate);
        prop_assert!(close(pay.net, hours * rate * (1.0 - tax_rate)));
    }

    /// PROPERTY: net + tax = gross.
    #[test]
    fn property_net_plus_tax_is_gross(
        hours in 0.0f64..1_000.0,
        rate in 0.0f64..1_000.0,
        tax_rate in 0.0f64..=1.0,
    ) {
        let pay = calculate_pay(hours, rate, tax_rate);
        prop_assert!(close(pay.net + pay.tax, pay.gross));
        prop_assert!(pay.tax >= 0.0);
        prop_assert!(pay.net >= 0.0);
    }

    /// PROPERTY: the calculation has no hidden state.
    #[test]
    fn property_deterministic(
        hours in 0.0f64..1_000.0,
        rate in 0.0f64..1_000.0,
        tax_rate in 0.0f64..=1.0,
    ) {
        prop_assert_eq!(
            calculate_pay(hours, rate, tax_rate),
            calculate_pay(hours, rate, tax_rate)
        );
    }

    /// PROPERTY: totals count every record and sum its hours.
    #[test]
    fn property_totals_sum_records(
        entries in proptest::collection::vec((0.0f64..100.0, 0.0f64..100.0, 0.0f64..=1.0), 0..20)
    ) {
        let mut totals = RunningTotals::default();
        let mut hours_sum = 0.0;
        for (hours, rate, tax_rate) in &entries {
            totals.add(*hours, &calculate_pay(*hours, *rate, *tax_rate));
            hours_sum += hours;
        }
        prop_assert_eq!(totals.employee_count, entries.len());
        prop_assert_eq!(totals.total_hours, hours_sum);
        prop_assert!(close(totals.total_net + totals.total_tax, totals.total_gross));
    }
}
