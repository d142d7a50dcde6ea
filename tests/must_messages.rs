//! Integration tests for the validation layer's error contract

use std::error::Error;
use tidepool::must::{must, must_non_zero, must_ok, must_zero, unique, MustError};
use tidepool::predicate::{lt, non_zero, one_of};
use tidepool::seq;

#[test]
fn single_value_failure_message() {
    let err = must(lt(0), "greater than zero", [1]).unwrap_err();
    assert_eq!(err.to_string(), "failure for value \"1\": greater than zero");
    assert_eq!(err.pos(), None);
}

#[test]
fn multi_value_failure_reports_position() {
    let err = must(lt(0), "greater than zero", [-1, 1]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "failure for value \"1\" at position 1: greater than zero"
    );
    assert_eq!(err.pos(), Some(1));
}

#[test]
fn success_is_silent() {
    assert!(must(non_zero(), "ololo", [1, 2, 3]).is_ok());
}

#[test]
fn enum_style_uniqueness_message() {
    let err = unique(vec![1, 2, 3, 4, 5, 6, 6]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "failure for value \"6\": duplicate value \"6\"; index: 6"
    );
}

#[test]
fn unique_passes_values_through() {
    assert_eq!(unique(vec![1, 2, 3, 4, 5]).unwrap(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn offending_error_value_unwraps_to_cause() {
    let err = must_ok(["12", "nope"].map(str::parse::<i32>)).unwrap_err();

    let source = err.source().expect("cause should be exposed");
    assert!(source.is::<std::num::ParseIntError>());

    // The offending value itself is recoverable too.
    assert!(err.value().downcast_ref::<std::num::ParseIntError>().is_some());
}

#[test]
fn plain_offending_value_has_no_cause() {
    let err = must_non_zero([0]).unwrap_err();
    assert!(err.source().is_none());
    assert_eq!(err.to_string(), "failure for value \"0\": zero value is not allowed");
}

#[test]
fn must_zero_accepts_defaults() {
    assert!(must_zero([0, 0, 0]).is_ok());
    assert!(must_zero([0, 7]).is_err());
}

#[test]
fn validation_composes_with_combinators() {
    // Check a whole collection is drawn from an allowed domain, then
    // validate what made it through.
    let arr = [1, 2, 2, 2, 5, 11];
    let one_to_ten = seq::all(one_of((1..=10).collect::<Vec<_>>()), &arr);
    assert!(!one_to_ten);

    let in_domain = seq::filter(one_of((1..=10).collect::<Vec<_>>()), &arr);
    assert!(must(lt(100), "out of range", in_domain).is_ok());
}

#[test]
fn must_error_propagates_with_question_mark() {
    fn validate(values: Vec<i32>) -> Result<Vec<i32>, MustError> {
        must_non_zero(values.clone())?;
        unique(values)
    }

    assert!(validate(vec![1, 2, 3]).is_ok());
    assert!(validate(vec![0, 1]).is_err());
    assert!(validate(vec![1, 1]).is_err());
}

#[cfg(feature = "serde")]
mod serde_feature {
    use tidepool::{Pair, Set};

    #[test]
    fn pair_round_trips_through_json() {
        let pair = Pair::new(1, "a".to_string());
        let json = serde_json::to_string(&pair).unwrap();
        let back: Pair<i32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);
    }

    #[test]
    fn set_round_trips_through_json() {
        let set = Set::from([1, 2, 3]);
        let json = serde_json::to_string(&set).unwrap();
        let back: Set<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
