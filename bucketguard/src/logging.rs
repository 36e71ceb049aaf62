// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Log verbosity configuration.
//!
//! The hosting runtime may reuse one process across many invocations, so the
//! effective log level is re-applied at the start of every invocation from the
//! `logging_level` environment variable. Library code only emits through the
//! `log` facade; installing a logger implementation is the binary's job.

use log::{error, info, LevelFilter};
use std::env;

/// The environment variable that selects the log verbosity.
pub const LOGGING_LEVEL_VAR: &str = "logging_level";

/// Maps a `logging_level` value to a level filter.
///
/// Recognized values are `INFO`, `WARNING` and `ERROR`, case-insensitive. An
/// absent value falls back to `Error`; a present but unrecognized value also
/// falls back to `Error` and is reported through the returned flag.
pub fn resolve_level(value: Option<&str>) -> (LevelFilter, bool) {
    match value {
        None => (LevelFilter::Error, false),
        Some(v) => match v.to_uppercase().as_str() {
            "INFO" => (LevelFilter::Info, false),
            "WARNING" => (LevelFilter::Warn, false),
            "ERROR" => (LevelFilter::Error, false),
            _ => (LevelFilter::Error, true),
        },
    }
}

/// Applies the log verbosity selected by the `logging_level` environment
/// variable for the current invocation.
pub fn setup() {
    let value = env::var(LOGGING_LEVEL_VAR).ok();
    let (level, unrecognized) = resolve_level(value.as_deref());

    log::set_max_level(level);
    if unrecognized {
        error!(
            "The {} environment variable is not set to INFO, WARNING, or ERROR. \
                The log level is set to ERROR",
            LOGGING_LEVEL_VAR
        );
    }
    info!("Logging setup complete - set to log level {}", level);
}
