// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Async/await support for file dialogs
//!
//! The futures here work with any executor. They are completed by the
//! dialog trampoline, so whatever drives SDL (the event loop on the main
//! thread, usually) must keep running while they are awaited.
//!
//! # Example
//!
//! ```ignore
//! use sdl3::{AsyncDialogs, DialogFileFilter, DialogOutcome};
//!
//! async fn pick(sdl: &sdl3::Sdl) -> sdl3::Result<Vec<String>> {
//!     let filters = [DialogFileFilter::new("Text", "txt;md")];
//!     match sdl.open_file_dialog_async(None, &filters, None, true)?.await {
//!         DialogOutcome::Selected { paths, .. } => Ok(paths),
//!         _ => Ok(Vec::new()),
//!     }
//! }
//! ```

use crate::callback::DialogResult;
use crate::dialog::DialogFileFilter;
use crate::error::Result;
use crate::sdl::{Sdl, WindowRef};

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll, Waker};

/// Owned copy of a [`DialogResult`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Error(String),
    Cancelled,
    Selected {
        paths: Vec<String>,
        filter: Option<usize>,
    },
}

impl From<DialogResult<'_>> for DialogOutcome {
    fn from(result: DialogResult<'_>) -> Self {
        match result {
            DialogResult::Error(msg) => DialogOutcome::Error(msg.to_owned()),
            DialogResult::Cancelled => DialogOutcome::Cancelled,
            DialogResult::Selected { files, filter } => DialogOutcome::Selected {
                paths: files.to_vec(),
                filter,
            },
        }
    }
}

/// Shared state between the callback and the future
struct DialogState {
    /// Set by the callback
    outcome: Option<DialogOutcome>,
    /// Set by the future's poll
    waker: Option<Waker>,
}

/// A Future that resolves when the user closes a dialog
///
/// Dropping it does not close the dialog; the callback still runs and its
/// result is discarded.
pub struct DialogFuture {
    state: Arc<Mutex<DialogState>>,
}

impl Future for DialogFuture {
    type Output = DialogOutcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(outcome) = state.outcome.take() {
            return Poll::Ready(outcome);
        }

        state.waker = Some(cx.waker().clone());
        Poll::Pending
    }
}

/// Creates the callback and the future it completes
fn create_dialog_callback() -> (impl FnOnce(DialogResult<'_>) + Send + 'static, DialogFuture) {
    let state = Arc::new(Mutex::new(DialogState {
        outcome: None,
        waker: None,
    }));

    let callback_state = state.clone();
    let callback = move |result: DialogResult<'_>| {
        let outcome = DialogOutcome::from(result);
        let waker = {
            let mut state = callback_state.lock().unwrap_or_else(|e| e.into_inner());
            state.outcome = Some(outcome);
            state.waker.take()
        };
        // Wake outside the lock in case the executor polls inline
        if let Some(waker) = waker {
            waker.wake();
        }
    };

    (callback, DialogFuture { state })
}

/// Extension trait providing Future-returning dialogs on [`Sdl`]
pub trait AsyncDialogs {
    /// Async form of [`Sdl::show_open_file_dialog`]
    fn open_file_dialog_async(
        &self,
        window: Option<WindowRef>,
        filters: &[DialogFileFilter],
        default_location: Option<&str>,
        allow_many: bool,
    ) -> Result<DialogFuture>;

    /// Async form of [`Sdl::show_save_file_dialog`]
    fn save_file_dialog_async(
        &self,
        window: Option<WindowRef>,
        filters: &[DialogFileFilter],
        default_location: Option<&str>,
    ) -> Result<DialogFuture>;

    /// Async form of [`Sdl::show_open_folder_dialog`]
    fn open_folder_dialog_async(
        &self,
        window: Option<WindowRef>,
        default_location: Option<&str>,
        allow_many: bool,
    ) -> Result<DialogFuture>;
}

impl AsyncDialogs for Sdl {
    fn open_file_dialog_async(
        &self,
        window: Option<WindowRef>,
        filters: &[DialogFileFilter],
        default_location: Option<&str>,
        allow_many: bool,
    ) -> Result<DialogFuture> {
        let (callback, future) = create_dialog_callback();
        self.show_open_file_dialog(window, filters, default_location, allow_many, callback)?;
        Ok(future)
    }

    fn save_file_dialog_async(
        &self,
        window: Option<WindowRef>,
        filters: &[DialogFileFilter],
        default_location: Option<&str>,
    ) -> Result<DialogFuture> {
        let (callback, future) = create_dialog_callback();
        self.show_save_file_dialog(window, filters, default_location, callback)?;
        Ok(future)
    }

    fn open_folder_dialog_async(
        &self,
        window: Option<WindowRef>,
        default_location: Option<&str>,
        allow_many: bool,
    ) -> Result<DialogFuture> {
        let (callback, future) = create_dialog_callback();
        self.show_open_folder_dialog(window, default_location, allow_many, callback)?;
        Ok(future)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::tests::dialog_api;

    // A minimal executor for testing - just polls until complete
    fn block_on<F: Future>(future: F) -> F::Output {
        let waker = Waker::noop();
        let mut cx = Context::from_waker(waker);
        let mut future = std::pin::pin!(future);

        loop {
            match future.as_mut().poll(&mut cx) {
                Poll::Ready(result) => return result,
                Poll::Pending => std::thread::yield_now(),
            }
        }
    }

    fn sdl() -> Sdl {
        unsafe { Sdl::from_api(dialog_api()) }
    }

    #[test]
    fn test_open_resolves_synchronously_fired_dialog() {
        let sdl = sdl();
        let filters = [DialogFileFilter::new("Images", "png")];
        let future = sdl.open_file_dialog_async(None, &filters, None, true).unwrap();
        match block_on(future) {
            DialogOutcome::Selected { paths, filter } => {
                assert_eq!(paths, vec!["/data/a.png", "/data/b.jpg"]);
                assert_eq!(filter, Some(0));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_save_resolves_from_other_thread() {
        let sdl = sdl();
        let future = sdl.save_file_dialog_async(None, &[], None).unwrap();
        assert_eq!(
            block_on(future),
            DialogOutcome::Error("0 filters, location None".to_string())
        );
    }

    #[test]
    fn test_folder_cancelled() {
        let sdl = sdl();
        let future = sdl.open_folder_dialog_async(None, None, false).unwrap();
        assert_eq!(block_on(future), DialogOutcome::Cancelled);
    }

    #[test]
    fn test_pending_until_callback() {
        let (callback, future) = create_dialog_callback();
        let waker = Waker::noop();
        let mut cx = Context::from_waker(waker);
        let mut future = std::pin::pin!(future);
        assert!(future.as_mut().poll(&mut cx).is_pending());

        callback(DialogResult::Cancelled);
        assert_eq!(future.as_mut().poll(&mut cx), Poll::Ready(DialogOutcome::Cancelled));
    }
}
