// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Save dialog as a Future
//!
//! Uses a minimal thread-parking executor so it works without an async
//! runtime dependency.
//!
//! Usage: cargo run --example async_dialog --features async

use sdl3::{AsyncDialogs, DialogFileFilter, DialogOutcome, Result, Sdl};
use std::future::Future;
use std::pin::pin;
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};
use std::thread::{self, Thread};

struct ThreadWaker(Thread);

impl Wake for ThreadWaker {
    fn wake(self: Arc<Self>) {
        self.0.unpark();
    }
}

fn block_on<F: Future>(future: F) -> F::Output {
    let mut future = pin!(future);
    let waker: Waker = Arc::new(ThreadWaker(thread::current())).into();
    let mut cx = Context::from_waker(&waker);
    loop {
        match future.as_mut().poll(&mut cx) {
            Poll::Ready(output) => return output,
            Poll::Pending => thread::park(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let sdl = Sdl::load()?;

    let filters = [DialogFileFilter::new("Text", "txt;md")];
    let future = sdl.save_file_dialog_async(None, &filters, Some("notes.txt"))?;

    match block_on(future) {
        DialogOutcome::Error(msg) => eprintln!("dialog failed: {}", msg),
        DialogOutcome::Cancelled => println!("cancelled"),
        DialogOutcome::Selected { paths, .. } => println!("save to {}", paths.join(", ")),
    }
    Ok(())
}
