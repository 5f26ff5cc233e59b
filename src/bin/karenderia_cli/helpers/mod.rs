// ABOUTME: Re-exports helper modules for karenderia-cli
// ABOUTME: Provides input loading and JSON output utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

pub mod display;
pub mod input;
