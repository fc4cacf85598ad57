// Copyright 2026 The Envreplace Project
// SPDX-License-Identifier: Apache-2.0

pub mod config;
pub mod engine;
pub mod error;
pub mod resolver;
