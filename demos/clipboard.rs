// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Clipboard provider example
//!
//! Offers the same text as plain text and HTML, generating the data only
//! when another application pastes.
//!
//! Usage: cargo run --example clipboard -- "text to offer"

use sdl3::{Result, Sdl};
use std::env;
use std::io::{self, BufRead};

fn main() -> Result<()> {
    env_logger::init();
    let text = env::args().nth(1).unwrap_or_else(|| "Hello from SDL3".to_string());
    let sdl = Sdl::load()?;

    let offered = text.clone();
    sdl.set_clipboard_data(&["text/plain;charset=utf-8", "text/html"], move |mime| {
        log::info!("paste requested as {}", mime);
        match mime {
            "text/html" => Some(format!("<p>{}</p>", offered).into_bytes()),
            _ => Some(offered.clone().into_bytes()),
        }
    })?;

    println!("offered {:?}; types now on the clipboard:", text);
    for mime in sdl.clipboard_mime_types()? {
        println!("  {}", mime);
    }
    println!("paste somewhere, then press Enter to clear");
    let _ = io::stdin().lock().lines().next();

    sdl.clear_clipboard_data()?;
    Ok(())
}
