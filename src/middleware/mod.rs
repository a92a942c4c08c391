// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules.

pub mod errors;

pub use errors::{handle_panic, method_not_allowed, route_not_found};
