#![forbid(unsafe_code)]

//! DOM bindings for the five user controls.
//!
//! Play/pause toggle, reseed, clear, the steps-per-frame slider, and
//! the FPS readout. Lookup happens once at mount; a missing element is
//! a mount-time [`AppError`](crate::error::AppError), never a silent
//! no-op button.

/// Button glyph while playing (pressing it pauses).
pub const PLAYING_GLYPH: &str = "⏸";
/// Button glyph while paused (pressing it plays).
pub const PAUSED_GLYPH: &str = "▶";

/// Parse a rate slider value into a steps-per-frame count.
///
/// Returns `None` for anything that is not a positive integer; the
/// caller keeps the previous rate in that case. Values below 1 clamp
/// up rather than pausing the simulation by the back door.
#[must_use]
pub fn parse_rate(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().map(|n| n.max(1))
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use crate::config::AppConfig;
    use crate::error::AppError;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlInputElement};

    use super::{PAUSED_GLYPH, PLAYING_GLYPH};

    /// Resolved control elements.
    pub struct Controls {
        play_pause: Element,
        reset: Element,
        kill: Element,
        rate: HtmlInputElement,
        fps: Element,
    }

    fn require(document: &Document, selector: &str) -> Result<Element, AppError> {
        document
            .query_selector(selector)
            .map_err(|_| AppError::InvalidConfig(format!("bad selector {selector:?}")))?
            .ok_or_else(|| AppError::MissingElement {
                selector: selector.to_string(),
            })
    }

    impl Controls {
        pub fn new(document: &Document, config: &AppConfig) -> Result<Self, AppError> {
            let rate_element = require(document, &config.rate)?;
            let rate: HtmlInputElement =
                rate_element
                    .dyn_into()
                    .map_err(|_| AppError::InvalidConfig(format!(
                        "{:?} is not an <input>",
                        config.rate
                    )))?;

            Ok(Self {
                play_pause: require(document, &config.play_pause)?,
                reset: require(document, &config.reset)?,
                kill: require(document, &config.kill)?,
                rate,
                fps: require(document, &config.fps)?,
            })
        }

        /// Flip the toggle button's glyph. Called synchronously with
        /// every play/pause transition, before any frame work.
        pub fn set_playing(&self, playing: bool) {
            let glyph = if playing { PLAYING_GLYPH } else { PAUSED_GLYPH };
            self.play_pause.set_text_content(Some(glyph));
        }

        pub fn set_fps_text(&self, text: &str) {
            self.fps.set_text_content(Some(text));
        }

        /// Current raw slider value.
        #[must_use]
        pub fn rate_value(&self) -> String {
            self.rate.value()
        }

        #[must_use]
        pub fn play_pause(&self) -> &Element {
            &self.play_pause
        }

        #[must_use]
        pub fn reset(&self) -> &Element {
            &self.reset
        }

        #[must_use]
        pub fn kill(&self) -> &Element {
            &self.kill
        }

        #[must_use]
        pub fn rate(&self) -> &HtmlInputElement {
            &self.rate
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::Controls;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_parses_positive_integers() {
        assert_eq!(parse_rate("1"), Some(1));
        assert_eq!(parse_rate("10"), Some(10));
        assert_eq!(parse_rate(" 3 "), Some(3));
    }

    #[test]
    fn rate_clamps_zero_up_to_one() {
        assert_eq!(parse_rate("0"), Some(1));
    }

    #[test]
    fn garbage_rates_are_ignored() {
        assert_eq!(parse_rate(""), None);
        assert_eq!(parse_rate("-2"), None);
        assert_eq!(parse_rate("fast"), None);
        assert_eq!(parse_rate("1.5"), None);
    }

    #[test]
    fn glyphs_are_distinct() {
        assert_ne!(PLAYING_GLYPH, PAUSED_GLYPH);
    }
}
