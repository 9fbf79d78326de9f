#![forbid(unsafe_code)]

//! Composition root: wires the renderer, controls, input tracking, and
//! frame loop around an opaque simulation engine.
//!
//! All shared state lives in one `Rc<RefCell<AppState>>` captured by
//! the event closures; everything runs on the browser's single event
//! thread, so the only discipline needed is not holding a borrow across
//! a yield — and the frame loop's rAF suspension is the sole yield
//! point.
//!
//! Per frame (in order): advance the engine by the configured
//! steps-per-frame, full redraw, record the FPS sample and refresh the
//! readout, then re-arm the next frame request only if still playing.

use crate::config::AppConfig;
use crate::controls::{Controls, parse_rate};
use crate::error::AppError;
use crate::frame_loop::FrameLoop;
use crate::renderer::{CanvasRenderer, Theme};
use lifecanvas_core::{FrameToken, GridGeometry, Session, SimulationEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, KeyboardEvent, MouseEvent};

struct AppState {
    session: Session<Box<dyn SimulationEngine>>,
    renderer: CanvasRenderer,
    controls: Controls,
    frame_loop: Option<FrameLoop>,
    /// Token captured at request time for the outstanding frame, if any.
    armed: Option<FrameToken>,
}

impl AppState {
    fn redraw(&self) {
        let session = &self.session;
        let theme = self.renderer.theme();
        self.renderer
            .draw(|row, col| theme.cell_color(session.is_alive(row, col)));
    }

    fn run_frame(&mut self, now_ms: f64) {
        self.session.advance();
        self.redraw();
        if let Some(summary) = self.session.record_frame(now_ms) {
            self.controls.set_fps_text(&summary.readout());
        }
    }

    fn start_playing(&mut self) {
        let Some(token) = self.session.playback_mut().play() else {
            // Already playing: exactly one request is outstanding.
            return;
        };
        // Indicator flips with the transition, not after the next frame.
        self.controls.set_playing(true);
        self.armed = Some(token);
        if let Some(frame_loop) = &self.frame_loop {
            frame_loop.start();
        }
    }

    fn stop_playing(&mut self) {
        self.session.playback_mut().pause();
        self.controls.set_playing(false);
        self.armed = None;
        if let Some(frame_loop) = &self.frame_loop {
            frame_loop.cancel();
        }
    }
}

/// A mounted viewer.
///
/// Owns the listener closures, so the handle must stay alive for as
/// long as the page does; a typical host stashes it in a thread-local
/// or leaks it on purpose.
pub struct App {
    _state: Rc<RefCell<AppState>>,
    _listeners: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

/// Wire the viewer to the page and start playback.
///
/// Fails fast with a descriptive [`AppError`] if any configured element
/// is missing; nothing is partially attached on failure.
pub fn mount(engine: Box<dyn SimulationEngine>, config: AppConfig) -> Result<App, AppError> {
    config.validate()?;

    let window = web_sys::window().ok_or(AppError::NoDocument)?;
    let document = window.document().ok_or(AppError::NoDocument)?;

    let geometry = GridGeometry::new(engine.width(), engine.height(), config.cell_size);
    let theme = Theme::from_config(&config);
    let renderer = CanvasRenderer::new(&document, &config.canvas, geometry, theme)?;
    let controls = Controls::new(&document, &config)?;
    let session = Session::new(engine);

    let state = Rc::new(RefCell::new(AppState {
        session,
        renderer,
        controls,
        frame_loop: None,
        armed: None,
    }));

    let frame_loop = FrameLoop::new(window.clone(), on_frame(Rc::clone(&state)));
    state.borrow_mut().frame_loop = Some(frame_loop);

    let mut listeners = Vec::new();
    {
        let st = state.borrow();

        listeners.push(attach(st.controls.play_pause(), "click", {
            let state = Rc::clone(&state);
            move |_| {
                let mut st = state.borrow_mut();
                if st.session.playback().is_paused() {
                    st.start_playing();
                } else {
                    st.stop_playing();
                }
            }
        })?);

        listeners.push(attach(st.controls.reset(), "click", {
            let state = Rc::clone(&state);
            move |_| {
                let mut st = state.borrow_mut();
                st.session.reset();
                st.redraw();
            }
        })?);

        listeners.push(attach(st.controls.kill(), "click", {
            let state = Rc::clone(&state);
            move |_| {
                let mut st = state.borrow_mut();
                st.session.clear();
                st.redraw();
            }
        })?);

        listeners.push(attach(st.controls.rate(), "input", {
            let state = Rc::clone(&state);
            move |_| {
                let mut st = state.borrow_mut();
                let raw = st.controls.rate_value();
                if let Some(steps) = parse_rate(&raw) {
                    st.session.playback_mut().set_steps_per_frame(steps);
                }
            }
        })?);

        listeners.push(attach(st.renderer.canvas(), "click", {
            let state = Rc::clone(&state);
            move |event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let mut st = state.borrow_mut();
                let (row, col) = st
                    .renderer
                    .cell_at_client(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
                st.session.handle_click(row, col);
                st.redraw();
            }
        })?);

        // Modifier tracking is document-global; unrelated keys pass
        // through untouched (no preventDefault).
        listeners.push(attach(&document, "keydown", {
            let state = Rc::clone(&state);
            move |event| {
                if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                    state
                        .borrow_mut()
                        .session
                        .modifiers_mut()
                        .key_down(&key.key());
                }
            }
        })?);

        listeners.push(attach(&document, "keyup", {
            let state = Rc::clone(&state);
            move |event| {
                if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                    state
                        .borrow_mut()
                        .session
                        .modifiers_mut()
                        .key_up(&key.key());
                }
            }
        })?);

        // A keyup delivered to another window never reaches us; drop
        // all held modifiers on blur instead of guessing.
        listeners.push(attach(&window, "blur", {
            let state = Rc::clone(&state);
            move |_| {
                state
                    .borrow_mut()
                    .session
                    .modifiers_mut()
                    .handle_focus(false);
            }
        })?);
    }

    {
        let mut st = state.borrow_mut();
        st.redraw();
        st.start_playing();
    }

    Ok(App {
        _state: state,
        _listeners: listeners,
    })
}

/// Like [`mount`], but reports failure to the console and returns
/// `None`: the error is logged once and the viewer stays inert.
pub fn mount_or_log(engine: Box<dyn SimulationEngine>, config: AppConfig) -> Option<App> {
    match mount(engine, config) {
        Ok(app) => Some(app),
        Err(err) => {
            web_sys::console::error_1(&format!("lifecanvas mount failed: {err}").into());
            None
        }
    }
}

/// The per-frame handler given to [`FrameLoop`].
///
/// Checks the token captured at request time against current playback
/// state; a stale callback (paused, or superseded by a newer run) does
/// no work at all.
fn on_frame(state: Rc<RefCell<AppState>>) -> impl FnMut(f64) -> bool {
    move |now_ms| {
        let mut st = state.borrow_mut();
        let Some(token) = st.armed.take() else {
            return false;
        };
        if !st.session.playback().accept(token) {
            return false;
        }
        st.run_frame(now_ms);
        if st.session.playback().is_paused() {
            false
        } else {
            st.armed = Some(st.session.playback().current_token());
            true
        }
    }
}

fn attach<F>(
    target: &EventTarget,
    event: &str,
    handler: F,
) -> Result<Closure<dyn FnMut(web_sys::Event)>, AppError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|_| AppError::Dom(format!("failed to attach {event:?} listener")))?;
    Ok(closure)
}
