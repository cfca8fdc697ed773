// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::{bail, Result};
use clap::ValueEnum;
use obsplan_core::{split_values, Action, Kwargs};
use obsplan_grammar::{is_bare_word, is_reserved_keyword, IrNode, PlanIr, SequenceNode};
use obsplan_plan::{CommandInstance, NightPlan, SequenceInstance, TreeNode};
use serde::Serialize;
use std::fmt::Write;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const INDENT: &str = "    ";

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render parsed IR back to canonical plan text.
///
/// Every sequence is written with explicit keywords and one level of
/// indentation per depth; values that are not bare words are quoted.
///
/// Fails on a value the grammar has no way to spell, such as one holding
/// both quote characters.
pub fn format_plan(ir: &PlanIr) -> Result<String> {
    let mut out = String::new();
    for seq in &ir.sequences {
        write_sequence(&mut out, seq, 0)?;
    }
    Ok(out)
}

fn write_sequence(out: &mut String, seq: &SequenceNode, depth: usize) -> Result<()> {
    let pad = INDENT.repeat(depth);
    out.push_str(&pad);
    out.push_str("BEGINSEQUENCE");
    write_arguments(out, &seq.args, &seq.kwargs)?;
    out.push('\n');

    for child in &seq.children {
        match child {
            IrNode::Sequence(inner) => write_sequence(out, inner, depth + 1)?,
            IrNode::Command(cmd) => {
                out.push_str(&pad);
                out.push_str(INDENT);
                out.push_str(&cmd.name);
                write_arguments(out, &cmd.args, &cmd.kwargs)?;
                out.push('\n');
            }
        }
    }

    out.push_str(&pad);
    out.push_str("ENDSEQUENCE\n");
    Ok(())
}

fn write_arguments(out: &mut String, args: &[String], kwargs: &Kwargs) -> Result<()> {
    for arg in args {
        out.push(' ');
        out.push_str(&quote(arg)?);
    }
    for (key, value) in kwargs {
        let values = split_values(value).map(quote).collect::<Result<Vec<_>>>()?;
        write!(out, " {}={}", key, values.join(","))?;
    }
    Ok(())
}

/// Quote `text` unless it can be written as a bare word.
///
/// Quoted strings have no escapes and end at a newline.
fn quote(text: &str) -> Result<String> {
    if is_bare_word(text) && !is_reserved_keyword(text) {
        Ok(text.to_string())
    } else if text.contains('\n') {
        bail!("cannot write {:?} as plan text: it contains a newline", text)
    } else if !text.contains('"') {
        Ok(format!("\"{}\"", text))
    } else if !text.contains('\'') {
        Ok(format!("'{}'", text))
    } else {
        bail!("cannot write {:?} as plan text: it contains both quote characters", text)
    }
}

/// Render a built night as an indented tree with IDs.
///
/// Commands show their effective keyword arguments and, below them, their
/// actions.
pub fn format_night(night: &NightPlan) -> Result<String> {
    let mut out = format!("night {}\n", night.id);
    for seq in &night.sequences {
        write_sequence_instance(&mut out, seq, 1)?;
    }
    Ok(out)
}

fn write_sequence_instance(out: &mut String, seq: &SequenceInstance, depth: usize) -> Result<()> {
    write!(out, "{}{} sequence", INDENT.repeat(depth), seq.id)?;
    write_arguments(out, &seq.args, &seq.kwargs)?;
    out.push('\n');

    for child in &seq.children {
        match child {
            TreeNode::Sequence(inner) => write_sequence_instance(out, inner, depth + 1)?,
            TreeNode::Command(cmd) => write_command_instance(out, cmd, depth + 1)?,
        }
    }
    Ok(())
}

fn write_command_instance(out: &mut String, cmd: &CommandInstance, depth: usize) -> Result<()> {
    let pad = INDENT.repeat(depth);
    write!(out, "{}{} {}", pad, cmd.id, cmd.name)?;
    write_arguments(out, &cmd.args, &cmd.effective_kwargs)?;
    out.push('\n');

    if let Some(error) = &cmd.error {
        writeln!(out, "{}{}skipped: {}", pad, INDENT, error)?;
    }
    for action in &cmd.actions {
        writeln!(out, "{}{}{}", pad, INDENT, action)?;
    }
    Ok(())
}

/// One line per action.
pub fn format_actions(actions: &[Action]) -> String {
    actions.iter().map(|a| format!("{}\n", a)).collect()
}
