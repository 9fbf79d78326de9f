#![forbid(unsafe_code)]

//! Rolling frame-rate statistics.
//!
//! One sample is recorded per rendered frame from the frame callback's
//! millisecond timestamp. The window keeps the most recent
//! [`SAMPLE_WINDOW`] instantaneous fps values (FIFO), so memory use is
//! bounded no matter how long playback runs.

use serde::Serialize;
use std::collections::VecDeque;

/// Number of frame samples retained for the summary.
pub const SAMPLE_WINDOW: usize = 100;

/// Collects per-frame timestamps and summarises the recent window.
#[derive(Debug, Clone, Default)]
pub struct FpsMeter {
    samples: VecDeque<f64>,
    last_timestamp: Option<f64>,
}

impl FpsMeter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(SAMPLE_WINDOW),
            last_timestamp: None,
        }
    }

    /// Record a frame at `now_ms` (milliseconds, monotonic).
    ///
    /// Returns the instantaneous fps for this frame, or `None` when no
    /// sample was taken: the very first call only seeds the timestamp,
    /// and a delta of zero or less is not a meaningful measurement and
    /// is skipped.
    pub fn record(&mut self, now_ms: f64) -> Option<f64> {
        let last = self.last_timestamp.replace(now_ms)?;
        let delta = now_ms - last;
        if delta <= 0.0 {
            return None;
        }
        let fps = 1000.0 / delta;
        if self.samples.len() == SAMPLE_WINDOW {
            self.samples.pop_front();
        }
        self.samples.push_back(fps);
        Some(fps)
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Summary over the current window, `None` while it is empty.
    #[must_use]
    pub fn summary(&self) -> Option<FpsSummary> {
        let latest = *self.samples.back()?;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &fps in &self.samples {
            min = min.min(fps);
            max = max.max(fps);
            sum += fps;
        }
        Some(FpsSummary {
            latest,
            mean: sum / self.samples.len() as f64,
            min,
            max,
        })
    }
}

/// Snapshot of the frame-rate window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FpsSummary {
    pub latest: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl FpsSummary {
    /// Serialize to a JSON string (machine-readable).
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Fixed four-line readout, each value rounded to the nearest
    /// integer: latest, then mean/min/max over the window.
    #[must_use]
    pub fn readout(&self) -> String {
        format!(
            "frames per second\n\
             latest        = {}\n\
             mean of 100   = {}\n\
             min of 100    = {}\n\
             max of 100    = {}",
            self.latest.round() as i64,
            self.mean.round() as i64,
            self.min.round() as i64,
            self.max.round() as i64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_call_only_seeds() {
        let mut meter = FpsMeter::new();
        assert_eq!(meter.record(0.0), None);
        assert_eq!(meter.sample_count(), 0);
        assert_eq!(meter.summary(), None);
    }

    #[test]
    fn steady_cadence() {
        let mut meter = FpsMeter::new();
        for i in 0..=10 {
            meter.record(f64::from(i) * 100.0);
        }
        let summary = meter.summary().unwrap();
        assert_eq!(summary.latest, 10.0);
        assert_eq!(summary.mean, 10.0);
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 10.0);
    }

    #[test]
    fn zero_delta_is_skipped() {
        // Timestamps 0, 100, 100, 200: the zero delta takes no sample.
        let mut meter = FpsMeter::new();
        assert_eq!(meter.record(0.0), None);
        assert_eq!(meter.record(100.0), Some(10.0));
        assert_eq!(meter.record(100.0), None);
        assert_eq!(meter.record(200.0), Some(10.0));
        assert_eq!(meter.sample_count(), 2);
        let summary = meter.summary().unwrap();
        assert!(summary.min <= summary.mean && summary.mean <= summary.max);
    }

    #[test]
    fn min_and_max_are_not_swapped() {
        let mut meter = FpsMeter::new();
        meter.record(0.0);
        meter.record(100.0); // 10 fps
        meter.record(120.0); // 50 fps
        meter.record(170.0); // 20 fps
        let summary = meter.summary().unwrap();
        assert_eq!(summary.latest, 20.0);
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 50.0);
        assert!((summary.mean - 80.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn window_evicts_oldest_past_capacity() {
        let mut meter = FpsMeter::new();
        let mut now = 0.0;
        meter.record(now);
        // One slow frame, then more than a window of fast frames.
        now += 1000.0;
        meter.record(now);
        for _ in 0..SAMPLE_WINDOW {
            now += 10.0;
            meter.record(now);
        }
        assert_eq!(meter.sample_count(), SAMPLE_WINDOW);
        // The 1 fps outlier has been evicted.
        assert_eq!(meter.summary().unwrap().min, 100.0);
    }

    #[test]
    fn readout_rounds_to_integers() {
        let summary = FpsSummary {
            latest: 59.7,
            mean: 60.2,
            min: 12.5,
            max: 144.4,
        };
        let text = summary.readout();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].ends_with("= 60"));
        assert!(lines[2].ends_with("= 60"));
        assert!(lines[3].ends_with("= 13"));
        assert!(lines[4].ends_with("= 144"));
    }

    #[test]
    fn summary_serializes_to_json() {
        let summary = FpsSummary {
            latest: 60.0,
            mean: 59.5,
            min: 30.0,
            max: 61.0,
        };
        let json = summary.to_json();
        assert!(json.contains("\"latest\":60.0"));
        assert!(json.contains("\"mean\":59.5"));
    }
}
