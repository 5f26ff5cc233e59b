// ABOUTME: Re-exports command modules for karenderia-cli
// ABOUTME: Provides analysis, safety, filter, and lexicon commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

pub mod analyze;
pub mod filter;
pub mod lexicon;
pub mod safety;
