//! A single camera tween: fov, pitch and yaw from a start pose to an end
//! pose over a fixed duration.
//!
//! The session owns all of its mutable state; the caller drives it with one
//! [`CameraAnimation::tick`] per display frame and pushes the returned pose
//! to the viewer. Cancelling or restarting is dropping or replacing the
//! session.

use std::fmt;

use web_time::{Duration, Instant};

use super::CameraPose;
use crate::util::easing::EasingFunction;

/// Callback fired once when an animation reaches its end pose.
pub type CompletionCallback = Box<dyn FnOnce()>;

/// Lifecycle of an animation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Not ticked yet, or still inside the start delay.
    Pending,
    /// Interpolating.
    Running,
    /// Reached the end pose (naturally or via skip).
    Finished,
    /// Halted by [`CameraAnimation::stop`].
    Stopped,
}

/// Mutable per-session state, advanced by `tick`.
#[derive(Debug, Clone, Copy)]
struct SessionState {
    phase: Phase,
    /// First tick; the start delay counts from here.
    armed_at: Option<Instant>,
    /// First tick after the delay; progress counts from here.
    started_at: Option<Instant>,
    /// Last computed linear progress in [0, 1].
    progress: f64,
}

/// One interpolated frame produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// Pose to apply to the viewer.
    pub pose: CameraPose,
    /// Linear progress in [0, 1].
    pub progress: f64,
    /// Whether this frame completed the animation.
    pub finished: bool,
}

/// Camera animation session.
pub struct CameraAnimation {
    start: CameraPose,
    end: CameraPose,
    duration: Duration,
    easing: EasingFunction,
    delay: Duration,
    state: SessionState,
    on_complete: Option<CompletionCallback>,
}

impl CameraAnimation {
    /// Animation from `start` to `end` over `duration`, cubic in-out, no
    /// delay.
    #[must_use]
    pub fn new(start: CameraPose, end: CameraPose, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
            easing: EasingFunction::default(),
            delay: Duration::ZERO,
            state: SessionState {
                phase: Phase::Pending,
                armed_at: None,
                started_at: None,
                progress: 0.0,
            },
            on_complete: None,
        }
    }

    /// Use `easing` for fov and pitch. Yaw always moves linearly.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Wait `delay` after the first tick before animating.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fire `callback` once when the end pose is reached.
    #[must_use]
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Start pose.
    #[must_use]
    pub fn start_pose(&self) -> CameraPose {
        self.start
    }

    /// End pose.
    #[must_use]
    pub fn end_pose(&self) -> CameraPose {
        self.end
    }

    /// Easing applied to fov and pitch.
    #[must_use]
    pub fn easing(&self) -> EasingFunction {
        self.easing
    }

    /// Last computed linear progress in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    /// Whether the session can still produce frames.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state.phase, Phase::Pending | Phase::Running)
    }

    /// Whether the end pose was reached (naturally or via skip).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.phase == Phase::Finished
    }

    /// Pose at linear progress `progress`.
    ///
    /// fov and pitch follow the easing curve; yaw follows `progress`
    /// directly so rotation speed stays constant.
    #[must_use]
    pub fn sample(&self, progress: f64) -> CameraPose {
        let t = progress.clamp(0.0, 1.0);
        let eased = self.easing.evaluate(t);
        CameraPose {
            fov: lerp(self.start.fov, self.end.fov, eased),
            pitch: lerp(self.start.pitch, self.end.pitch, eased),
            yaw: lerp(self.start.yaw, self.end.yaw, t),
        }
    }

    /// Advance to `now`.
    ///
    /// Returns `None` while waiting out the start delay and once the session
    /// is finished or stopped. The frame that reaches progress 1 carries the
    /// exact end pose and fires the completion callback before returning;
    /// use [`tick_and_apply`](Self::tick_and_apply) when completion must
    /// observe the applied end pose.
    pub fn tick(&mut self, now: Instant) -> Option<AnimationFrame> {
        self.tick_and_apply(now, |_| {})
    }

    /// [`tick`](Self::tick), handing the frame to `apply` before the
    /// completion callback runs.
    pub fn tick_and_apply(
        &mut self,
        now: Instant,
        apply: impl FnOnce(&AnimationFrame),
    ) -> Option<AnimationFrame> {
        let frame = self.advance(now)?;
        Some(self.emit(frame, apply))
    }

    /// Halt without firing completion.
    pub fn stop(&mut self) {
        if self.is_active() {
            self.state.phase = Phase::Stopped;
            self.on_complete = None;
        }
    }

    /// Jump to the end pose and complete.
    ///
    /// Returns the end frame to apply, or `None` when the session already
    /// finished or was stopped; completion never fires twice.
    pub fn skip(&mut self) -> Option<AnimationFrame> {
        self.skip_and_apply(|_| {})
    }

    /// [`skip`](Self::skip), handing the end frame to `apply` before the
    /// completion callback runs.
    pub fn skip_and_apply(
        &mut self,
        apply: impl FnOnce(&AnimationFrame),
    ) -> Option<AnimationFrame> {
        if !self.is_active() {
            return None;
        }
        self.finish();
        let frame = self.end_frame();
        Some(self.emit(frame, apply))
    }

    fn advance(&mut self, now: Instant) -> Option<AnimationFrame> {
        if !self.is_active() {
            return None;
        }

        let armed_at = *self.state.armed_at.get_or_insert(now);
        if now.saturating_duration_since(armed_at) < self.delay {
            return None;
        }

        let started_at = *self.state.started_at.get_or_insert(now);
        self.state.phase = Phase::Running;

        let progress = if self.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(started_at);
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };

        if progress >= 1.0 {
            self.finish();
            return Some(self.end_frame());
        }

        self.state.progress = progress;
        Some(AnimationFrame {
            pose: self.sample(progress),
            progress,
            finished: false,
        })
    }

    /// Apply `frame`, then complete if it was the last one.
    fn emit(
        &mut self,
        frame: AnimationFrame,
        apply: impl FnOnce(&AnimationFrame),
    ) -> AnimationFrame {
        apply(&frame);
        if frame.finished {
            if let Some(callback) = self.on_complete.take() {
                callback();
            }
        }
        frame
    }

    fn finish(&mut self) {
        self.state.phase = Phase::Finished;
        self.state.progress = 1.0;
    }

    fn end_frame(&self) -> AnimationFrame {
        AnimationFrame {
            pose: self.end,
            progress: 1.0,
            finished: true,
        }
    }
}

impl fmt::Debug for CameraAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraAnimation")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("delay", &self.delay)
            .field("phase", &self.state.phase)
            .field("progress", &self.state.progress)
            .finish_non_exhaustive()
    }
}

/// Interpolate so that t = 0 and t = 1 return the endpoints exactly.
#[inline]
fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}
