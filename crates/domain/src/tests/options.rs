// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, OptionFlag, OptionsConfig};

#[test]
fn test_defaults() {
    let options: OptionsConfig = OptionsConfig::default();

    assert_eq!(options.daily_lesson_limit, 1);
    assert_eq!(options.credits_per_slot, 1);
    for flag in OptionFlag::ALL {
        assert!(!options.flag(flag));
    }
}

#[test]
fn test_toggle_flips_only_the_named_flag() {
    let mut options: OptionsConfig = OptionsConfig::default();
    options.toggle(OptionFlag::BackToBackOnly);

    assert!(options.back_to_back_only);
    assert!(!options.stop_after_one_slot);
    assert!(!options.stop_at_midnight);
    assert!(!options.exclude_current_day);

    options.toggle(OptionFlag::BackToBackOnly);
    assert_eq!(options, OptionsConfig::default());
}

#[test]
fn test_counters_reject_zero() {
    let mut options: OptionsConfig = OptionsConfig::default();

    assert_eq!(
        options.set_daily_lesson_limit(0),
        Err(DomainError::InvalidOptionValue {
            field: "daily_lesson_limit",
            value: 0,
        })
    );
    assert_eq!(
        options.set_credits_per_slot(0),
        Err(DomainError::InvalidOptionValue {
            field: "credits_per_slot",
            value: 0,
        })
    );
    assert_eq!(options, OptionsConfig::default());

    options.set_daily_lesson_limit(3).unwrap();
    options.set_credits_per_slot(2).unwrap();
    assert_eq!(options.daily_lesson_limit, 3);
    assert_eq!(options.credits_per_slot, 2);
}

#[test]
fn test_option_flag_names() {
    for flag in OptionFlag::ALL {
        assert_eq!(flag.as_str().parse::<OptionFlag>().unwrap(), flag);
    }
    assert_eq!(
        "turbo".parse::<OptionFlag>(),
        Err(DomainError::InvalidOptionFlag(String::from("turbo")))
    );
}

#[test]
fn test_options_serialize_with_payload_field_names() {
    let value: serde_json::Value = serde_json::to_value(OptionsConfig::default()).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "stop_after_one_slot": false,
            "stop_at_midnight": false,
            "back_to_back_only": false,
            "exclude_current_day": false,
            "daily_lesson_limit": 1,
            "credits_per_slot": 1
        })
    );
}
