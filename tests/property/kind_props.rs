//! Properties of error-kind construction.

use super::common::{MessageError, SealedError, StrictError, UnitError};
use decima::{create_error, try_ensure_with, GuardError, Rejection};
use proptest::prelude::*;

proptest! {
    /// Property: a kind that can't take a message never yields a domain error.
    #[test]
    fn prop_unusable_kinds_always_misconfigured(message in any::<String>()) {
        let unit = try_ensure_with::<UnitError, _>(false, || message.clone()).unwrap_err();
        prop_assert!(unit.is_misconfigured());

        let sealed = try_ensure_with::<SealedError, _>(false, || message.clone()).unwrap_err();
        prop_assert!(sealed.is_misconfigured());
    }

    /// Property: a validating constructor fails exactly on the messages it refuses.
    #[test]
    fn prop_strict_kind_rejects_only_empty(message in "[a-z]{0,8}") {
        match try_ensure_with::<StrictError, _>(false, || message.clone()).unwrap_err() {
            GuardError::Failed(err) => {
                prop_assert!(!message.is_empty());
                prop_assert_eq!(err.message(), message.as_str());
            }
            GuardError::Misconfigured(misconfigured) => {
                prop_assert!(message.is_empty());
                let is_construction_failure =
                    matches!(misconfigured.reason(), Rejection::ConstructionFailed(_));
                prop_assert!(is_construction_failure);
            }
        }
    }

    /// Property: the instantiation helper is a pure function of the message.
    #[test]
    fn prop_create_error_is_deterministic(message in any::<String>()) {
        let first: MessageError = create_error(|| message.as_str()).unwrap();
        let second: MessageError = create_error(|| message.as_str()).unwrap();
        prop_assert_eq!(first, second);
    }
}
