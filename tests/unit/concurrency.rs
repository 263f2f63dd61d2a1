//! Guards called from many threads at once.

use super::common::MessageError;
use decima::{ensure_not_null_with, ensure_with};
use std::thread;

#[test]
fn guards_need_no_coordination_across_threads() {
    let outcomes: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..16u32)
            .map(|n| {
                scope.spawn(move || {
                    ensure_with::<MessageError, _>(n % 2 == 0, || format!("{} is odd", n))
                        .map(|()| n)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for (n, outcome) in (0..16u32).zip(outcomes) {
        if n % 2 == 0 {
            assert_eq!(outcome, Ok(n));
        } else {
            assert_eq!(outcome, Err(MessageError(format!("{} is odd", n))));
        }
    }
}

#[test]
fn each_failure_builds_a_fresh_error() {
    let errors: Vec<MessageError> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    ensure_not_null_with::<MessageError, (), _>(None, || "shared text").unwrap_err()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(errors.len(), 8);
    assert!(errors.iter().all(|e| e.0 == "shared text"));
}
