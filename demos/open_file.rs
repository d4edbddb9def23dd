// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Open-file dialog example
//!
//! Shows a multi-select open dialog with two filters and waits for the
//! callback, which may arrive on another thread.
//!
//! Usage: cargo run --example open_file -- [default_dir]

use sdl3::{DialogFileFilter, DialogResult, Result, Sdl};
use std::env;
use std::sync::mpsc;
use std::time::Duration;

fn main() -> Result<()> {
    env_logger::init();
    let default_dir = env::args().nth(1);

    let sdl = Sdl::load()?;
    println!("SDL {}", sdl.version()?);

    let filters = [
        DialogFileFilter::new("Images", "png;jpg;jpeg"),
        DialogFileFilter::new("All files", "*"),
    ];

    let (tx, rx) = mpsc::channel();
    sdl.show_open_file_dialog(None, &filters, default_dir.as_deref(), true, move |result| {
        // `result` borrows transient buffers; print before returning
        match result {
            DialogResult::Error(msg) => eprintln!("dialog failed: {}", msg),
            DialogResult::Cancelled => println!("cancelled"),
            DialogResult::Selected { files, filter } => {
                println!("{} file(s), filter {:?}", files.len(), filter);
                for path in files.iter() {
                    println!("  {}", path);
                }
            }
        }
        let _ = tx.send(());
    })?;

    if rx.recv_timeout(Duration::from_secs(300)).is_err() {
        eprintln!("no answer from the dialog");
    }
    Ok(())
}
