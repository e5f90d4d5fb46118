// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidSlotId(String::from("8.0"));
    assert_eq!(format!("{err}"), "Invalid slot id: '8.0'");

    let err: DomainError = DomainError::InvalidDateKey {
        value: String::from("2025-03-15"),
        reason: String::from("expected 10 characters in DD/MM/YYYY form"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid date key '2025-03-15': expected 10 characters in DD/MM/YYYY form"
    );

    let err: DomainError = DomainError::InvalidOptionValue {
        field: "daily_lesson_limit",
        value: 0,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid value 0 for option 'daily_lesson_limit'. Must be at least 1"
    );

    let err: DomainError = DomainError::InvalidOptionFlag(String::from("turbo"));
    assert_eq!(format!("{err}"), "Unknown option: 'turbo'");

    let err: DomainError = DomainError::DateArithmeticOverflow {
        operation: String::from("moving 3 months"),
    };
    assert_eq!(
        format!("{err}"),
        "Date arithmetic overflow while moving 3 months"
    );
}
