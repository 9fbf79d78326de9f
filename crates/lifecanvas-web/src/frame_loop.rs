#![forbid(unsafe_code)]

//! requestAnimationFrame plumbing.
//!
//! One persistent callback closure for the app's lifetime; each frame
//! request is tracked by its rAF handle so [`FrameLoop::cancel`] can
//! revoke the outstanding request when playback pauses. Token-level
//! staleness checks live in the frame handler itself (see
//! `app::on_frame`): the loop guarantees at most one pending request,
//! the tokens guarantee a late callback does no work.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

struct LoopInner {
    window: web_sys::Window,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    /// rAF handle of the single outstanding request, if any.
    pending: Cell<Option<i32>>,
}

impl LoopInner {
    fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        let function: &js_sys::Function = callback.as_ref().unchecked_ref();
        if let Ok(id) = self.window.request_animation_frame(function) {
            self.pending.set(Some(id));
        }
    }
}

/// Owns the repeating animation-frame callback.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    /// Build the loop around a frame handler.
    ///
    /// The handler receives the frame's millisecond timestamp and
    /// returns whether the loop should re-arm for the next frame.
    pub fn new<F>(window: web_sys::Window, mut on_frame: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let inner = Rc::new(LoopInner {
            window,
            callback: RefCell::new(None),
            pending: Cell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |now: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if on_frame(now) {
                inner.request();
            }
        }) as Box<dyn FnMut(f64)>);

        *inner.callback.borrow_mut() = Some(closure);
        Self { inner }
    }

    /// Request the next frame. No-op while a request is outstanding,
    /// so double `play()` cannot mint a second callback.
    pub fn start(&self) {
        self.inner.request();
    }

    /// Revoke the outstanding request, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.inner.pending.take() {
            let _ = self.inner.window.cancel_animation_frame(id);
        }
    }
}
