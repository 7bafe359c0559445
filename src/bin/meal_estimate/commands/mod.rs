// ABOUTME: Re-exports command modules for meal-estimate
// ABOUTME: Provides the single-meal and daily roll-up commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

pub mod daily;
pub mod meal;
