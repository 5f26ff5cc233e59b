// ABOUTME: Core types and constants for the karenderia allergen and nutrition engine
// ABOUTME: Foundation crate with error handling, value-object models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

#![deny(unsafe_code)]

//! # Karenderia Core
//!
//! Foundation crate providing shared types and constants for the karenderia
//! allergen and nutrition engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Lexicon versioning, label units, and analysis message text
//! - **models**: Request/response value objects (nutrition, allergens, dishes, analyses)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Value-object models shared by the lexicon, analyzers, and callers
pub mod models;
