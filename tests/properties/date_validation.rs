//! Property tests for date validation.

use proptest::prelude::*;

use payroll::{is_valid_date, PayDate, ReportFilter};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation never panics on arbitrary input.
    #[test]
    fn property_validation_never_panics(s in "(?s).{0,64}") {
        let _ = is_valid_date(&s);
        let _ = ReportFilter::parse(&s);
    }

    /// PROPERTY: the canonical rendering of a valid date parses back to it.
    #[test]
    fn property_canonical_form_round_trips(
        year in 1000i32..=9999,
        month in 1u32..=12,
        day in 1u32..=31,
    ) {
        if let Some(date) = PayDate::from_ymd(year, month, day) {
            let text = date.to_string();
            prop_assert_eq!(text.len(), 10);
            prop_assert_eq!(PayDate::parse(&text), Ok(date));
            prop_assert_eq!(PayDate::parse(&format!("{}/{}/{}", month, day, year)), Ok(date));
        }
    }

    /// PROPERTY: months above 12 are never valid.
    #[test]
    fn property_month_out_of_range(month in 13u32..=99, day in 1u32..=28, year in 1000i32..=9999) {
        let text = format!("{:02}/{:02}/{}", month, day, year);
        prop_assert!(!is_valid_date(&text));
    }
}
