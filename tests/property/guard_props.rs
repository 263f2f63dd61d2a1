//! Properties of the guard operations.

use super::common::{MessageCounter, MessageError};
use decima::{
    ensure, ensure_not_null, ensure_not_null_with, ensure_with, DEFAULT_FALSE_MESSAGE,
    DEFAULT_NULL_MESSAGE,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Messages of any shape, including empty and non-ASCII text.
fn message_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z ]{1,40}",
        any::<String>(),
    ]
}

// ============================================================================
// ENSURE PROPERTIES
// ============================================================================

proptest! {
    /// Property: ensure succeeds exactly when the condition holds.
    #[test]
    fn prop_ensure_ok_iff_condition(condition in any::<bool>()) {
        let outcome = ensure::<MessageError>(condition);
        prop_assert_eq!(outcome.is_ok(), condition);
        if let Err(err) = outcome {
            prop_assert_eq!(err.0, DEFAULT_FALSE_MESSAGE);
        }
    }

    /// Property: a failed ensure carries exactly the producer's text.
    #[test]
    fn prop_ensure_failure_carries_message(message in message_strategy()) {
        let expected = message.clone();
        let err = ensure_with::<MessageError, _>(false, move || message).unwrap_err();
        prop_assert_eq!(err.0, expected);
    }

    /// Property: the producer runs zero times on success and once on failure.
    #[test]
    fn prop_ensure_message_is_lazy(condition in any::<bool>()) {
        let counter = MessageCounter::new();
        let _ = ensure_with::<MessageError, _>(condition, counter.producer("lazy"));
        prop_assert_eq!(counter.calls(), usize::from(!condition));
    }

    /// Property: Display values become their textual form.
    #[test]
    fn prop_display_values_become_message(value in any::<i64>()) {
        let err = ensure_with::<MessageError, _>(false, || value).unwrap_err();
        prop_assert_eq!(err.0, value.to_string());
    }
}

// ============================================================================
// ENSURE_NOT_NULL PROPERTIES
// ============================================================================

proptest! {
    /// Property: a present value comes back unchanged, an absent one fails.
    #[test]
    fn prop_ensure_not_null_round_trips_value(value in proptest::option::of(any::<i64>())) {
        match ensure_not_null::<MessageError, _>(value) {
            Ok(unwrapped) => prop_assert_eq!(Some(unwrapped), value),
            Err(err) => {
                prop_assert!(value.is_none());
                prop_assert_eq!(err.0, DEFAULT_NULL_MESSAGE);
            }
        }
    }

    /// Property: the producer runs only when the value is absent.
    #[test]
    fn prop_ensure_not_null_message_is_lazy(value in proptest::option::of(any::<u8>())) {
        let counter = MessageCounter::new();
        let _ = ensure_not_null_with::<MessageError, _, _>(value, counter.producer("absent"));
        prop_assert_eq!(counter.calls(), usize::from(value.is_none()));
    }

    /// Property: a failed ensure_not_null carries exactly the producer's text.
    #[test]
    fn prop_ensure_not_null_failure_carries_message(message in message_strategy()) {
        let expected = message.clone();
        let err = ensure_not_null_with::<MessageError, (), _>(None, move || message).unwrap_err();
        prop_assert_eq!(err.0, expected);
    }
}
