// ABOUTME: Output formatting helpers for karenderia-cli
// ABOUTME: Writes results as pretty JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use karenderia_engine::errors::AppResult;
use serde::Serialize;
use std::io::{self, Write};

/// Print `value` as pretty JSON followed by a newline
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
