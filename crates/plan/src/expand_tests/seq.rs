// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::expand::{parse_seq, ExpandError, SeqGroup};

fn group(count: u32, filter: &str, exposure_time: f64) -> SeqGroup {
    SeqGroup {
        count,
        filter: filter.to_string(),
        exposure_time,
    }
}

#[test]
fn groups_keep_order() {
    assert_eq!(
        parse_seq("5/I/60,5/V/70").unwrap(),
        vec![group(5, "I", 60.0), group(5, "V", 70.0)]
    );
}

#[test]
fn fractional_and_zero_exposure() {
    assert_eq!(
        parse_seq("15/I/0,1/str_u/2.5").unwrap(),
        vec![group(15, "I", 0.0), group(1, "str_u", 2.5)]
    );
}

#[yare::parameterized(
    two_fields   = { "5/I", 2 },
    four_fields  = { "5/I/60/2", 4 },
    one_field    = { "5", 1 },
    empty_value  = { "", 1 },
    second_group = { "5/I/60,1/V", 2 },
)]
fn wrong_field_count_is_arity_error(value: &str, found_fields: usize) {
    match parse_seq(value).unwrap_err() {
        ExpandError::Arity { found, .. } => assert_eq!(found, found_fields),
        other => panic!("expected Arity, got {other:?}"),
    }
}

#[yare::parameterized(
    zero_count       = { "0/V/10", "exposure count" },
    negative_count   = { "-1/V/10", "exposure count" },
    word_count       = { "five/V/10", "exposure count" },
    fractional_count = { "1.5/V/10", "exposure count" },
    negative_time    = { "1/V/-10", "exposure time" },
    word_time        = { "1/V/long", "exposure time" },
    infinite_time    = { "1/V/inf", "exposure time" },
    nan_time         = { "1/V/NaN", "exposure time" },
)]
fn bad_numbers_are_invalid_values(value: &str, expected_field: &str) {
    match parse_seq(value).unwrap_err() {
        ExpandError::InvalidValue { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn error_message_names_the_group() {
    let err = parse_seq("5/I").unwrap_err();
    assert_eq!(
        err.to_string(),
        "wrong number of fields in seq group '5/I': expected 3 (count/filter/exposure_time), got 2"
    );
}
