// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Message box example
//!
//! A three-button warning with a custom color scheme, then a simple box
//! reporting which button was pressed.
//!
//! Usage: cargo run --example message_box

use sdl3::{MessageBoxButton, MessageBoxColorScheme, MessageBoxData, MessageBoxFlags, Result, Sdl};

const SAVE: i32 = 1;
const DISCARD: i32 = 2;
const CANCEL: i32 = 3;

fn main() -> Result<()> {
    env_logger::init();
    let sdl = Sdl::load()?;

    let data = MessageBoxData::new(
        MessageBoxFlags::WARNING | MessageBoxFlags::BUTTONS_LEFT_TO_RIGHT,
        "Unsaved changes",
        "Save changes to \"notes.txt\" before closing?",
    )
    .button(MessageBoxButton::new(SAVE, "Save").return_key_default())
    .button(MessageBoxButton::new(DISCARD, "Discard"))
    .button(MessageBoxButton::new(CANCEL, "Cancel").escape_key_default())
    .color_scheme(MessageBoxColorScheme {
        background: (40, 44, 52),
        text: (220, 223, 228),
        button_border: (97, 175, 239),
        button_background: (50, 56, 66),
        button_selected: (97, 175, 239),
    });

    let pressed = sdl.show_message_box(&data)?;
    let answer = match pressed {
        SAVE => "save",
        DISCARD => "discard",
        CANCEL => "cancel",
        _ => "closed without choosing",
    };
    sdl.show_simple_message_box(MessageBoxFlags::INFORMATION, "Answer", answer, None)?;
    Ok(())
}
