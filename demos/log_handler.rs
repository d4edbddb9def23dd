// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! SDL log output example
//!
//! Installs a custom output function, raises the verbosity of one
//! category, then switches to forwarding into the `log` crate, where
//! `env_logger` prints it.
//!
//! Usage: RUST_LOG=sdl3=trace cargo run --example log_handler

use sdl3::{LogCategory, LogPriority, Result, Sdl};
use std::time::SystemTime;

fn main() -> Result<()> {
    env_logger::init();
    let sdl = Sdl::load()?;

    // --- Step 1: custom handler ------------------------------------------
    sdl.set_log_output(|category, priority, msg| {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default();
        eprintln!(
            "{}.{:03} [{:?}] {}: {}",
            now.as_secs(),
            now.subsec_millis(),
            category,
            priority,
            msg
        );
    })?;

    sdl.set_log_priority(LogCategory::Application, LogPriority::Verbose)?;
    sdl.set_log_priority_prefix(LogPriority::Warn, "warning: ")?;
    sdl.log_message(LogCategory::Application, LogPriority::Verbose, "custom handler installed")?;
    sdl.log_message(LogCategory::Custom(20), LogPriority::Warn, "100% of a custom category")?;

    // --- Step 2: forward into `log` --------------------------------------
    sdl.forward_log_to_log_crate()?;
    sdl.log_message(LogCategory::Video, LogPriority::Critical, "forwarded to env_logger")?;

    // --- Step 3: restore SDL's own output --------------------------------
    sdl.reset_log_priorities()?;
    sdl.clear_log_output()?;
    sdl.log_message(LogCategory::Application, LogPriority::Info, "back to the default output")?;
    Ok(())
}
