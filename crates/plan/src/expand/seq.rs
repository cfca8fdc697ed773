// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `seq` exposure mini-format: `count/filter/exposure_time[,...]`.

use super::ExpandError;
use obsplan_core::split_values;

/// One `count/filter/exposure_time` group.
#[derive(Debug, Clone, PartialEq)]
pub struct SeqGroup {
    pub count: u32,
    pub filter: String,
    /// Seconds.
    pub exposure_time: f64,
}

/// Parse a `seq` value such as `5/I/60,5/V/70` into its groups, in order.
pub fn parse_seq(value: &str) -> Result<Vec<SeqGroup>, ExpandError> {
    split_values(value).map(parse_group).collect()
}

fn parse_group(group: &str) -> Result<SeqGroup, ExpandError> {
    let fields: Vec<&str> = group.split('/').collect();
    let [count, filter, exposure_time] = fields.as_slice() else {
        return Err(ExpandError::Arity {
            what: format!("fields in seq group '{}'", group),
            expected: "3 (count/filter/exposure_time)",
            found: fields.len(),
        });
    };

    Ok(SeqGroup {
        count: parse_count(count)?,
        filter: filter.to_string(),
        exposure_time: parse_exposure_time(exposure_time)?,
    })
}

fn parse_count(text: &str) -> Result<u32, ExpandError> {
    let invalid = |reason| ExpandError::InvalidValue {
        field: "exposure count",
        value: text.to_string(),
        reason,
    };
    match text.parse::<u32>() {
        Ok(0) => Err(invalid("must be at least 1")),
        Ok(count) => Ok(count),
        Err(_) => Err(invalid("not a whole number")),
    }
}

fn parse_exposure_time(text: &str) -> Result<f64, ExpandError> {
    let invalid = |reason| ExpandError::InvalidValue {
        field: "exposure time",
        value: text.to_string(),
        reason,
    };
    let seconds: f64 = text.parse().map_err(|_| invalid("not a number"))?;
    if !seconds.is_finite() {
        return Err(invalid("must be finite"));
    }
    if seconds < 0.0 {
        return Err(invalid("must not be negative"));
    }
    Ok(seconds)
}
