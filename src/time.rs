//! Frame timing and frame scheduling.
//!
//! [`Time`] counts frames and measures FPS for diagnostics only; physics
//! never reads a delta, so simulation speed follows the display refresh rate.
//!
//! [`FrameSource`] decides when the next frame happens. The native host uses
//! the window's redraw requests; tests use [`FixedFrames`] to step the
//! simulation deterministically.

use std::time::{Duration, Instant};

/// Source of frame ticks for [`Simulation::run`](crate::Simulation::run).
pub trait FrameSource {
    /// Block until the next frame is due. Returns `false` when no more frames will come.
    fn next_frame(&mut self) -> bool;
}

/// Yields a fixed number of frames back to back, then stops.
#[derive(Debug, Clone, Copy)]
pub struct FixedFrames(pub u64);

impl FrameSource for FixedFrames {
    fn next_frame(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        true
    }
}

/// Never stops. Frames are as fast as the caller can draw them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl FrameSource for Unbounded {
    fn next_frame(&mut self) -> bool {
        true
    }
}

/// Frame counter with a periodically refreshed FPS estimate.
#[derive(Debug)]
pub struct Time {
    start: Instant,
    last_frame: Instant,
    delta_secs: f32,
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
}

impl Time {
    pub fn new() -> Self {
        Self::with_fps_interval(Duration::from_secs(1))
    }

    /// Tracker that refreshes its FPS estimate every `interval`.
    pub fn with_fps_interval(interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: interval,
        }
    }

    /// Record one frame. Returns the new FPS estimate when it was refreshed.
    pub fn update(&mut self) -> Option<f32> {
        let now = Instant::now();
        self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
            return Some(self.fps);
        }
        None
    }

    /// Seconds since the tracker was created.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Wall time between the last two frames, in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_fixed_frames_counts_down() {
        let mut frames = FixedFrames(3);
        assert!(frames.next_frame());
        assert!(frames.next_frame());
        assert!(frames.next_frame());
        assert!(!frames.next_frame());
        assert!(!frames.next_frame());
    }

    #[test]
    fn test_unbounded_never_ends() {
        let mut frames = Unbounded;
        assert!((0..1000).all(|_| frames.next_frame()));
    }

    #[test]
    fn test_time_update() {
        let mut time = Time::new();
        thread::sleep(Duration::from_millis(10));
        time.update();

        assert!(time.delta() > 0.0);
        assert!(time.elapsed() > 0.0);
        assert_eq!(time.frame(), 1);
    }

    #[test]
    fn test_fps_refresh() {
        let mut time = Time::with_fps_interval(Duration::from_millis(5));
        time.update();
        thread::sleep(Duration::from_millis(10));
        let fps = time.update();
        assert!(fps.is_some());
        assert!(time.fps() > 0.0);
    }
}
