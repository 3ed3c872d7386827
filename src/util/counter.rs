//! Count-up animation for the stats tiles.
//!
//! [`CounterAnimation`] is the pure timing curve; [`animate_value`] drives it
//! from `requestAnimationFrame` and writes each frame into [`StatsState`].
//! Animations are not cancellable, and two animations on the same slot race
//! with the last write winning each frame.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use leptos::prelude::*;

use crate::state::stats::{CounterSlot, StatsState};

/// Linear count from `start` to `end` over `duration_ms` of frame time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(start: f64, end: f64, duration_ms: f64) -> Self {
        Self { start, end, duration_ms }
    }

    /// Count up from zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_zero(end: u64, duration_ms: f64) -> Self {
        Self::new(0.0, end as f64, duration_ms)
    }

    /// Fraction of the animation completed, clamped to `0.0..=1.0`.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Integer shown after `elapsed_ms`: the interpolated value, floored.
    #[allow(clippy::cast_possible_truncation)]
    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        (self.progress(elapsed_ms) * (self.end - self.start) + self.start).floor() as i64
    }

    pub fn final_value(&self) -> i64 {
        self.value_at(self.duration_ms)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

/// Animate `slot` of `stats` along `animation`.
///
/// In the browser, the first animation frame fixes the start timestamp and
/// every later frame writes `value_at(elapsed)` until the duration has passed.
/// Outside the browser the final value is written immediately.
pub fn animate_value(stats: RwSignal<StatsState>, slot: CounterSlot, animation: CounterAnimation) {
    #[cfg(feature = "csr")]
    {
        if let Err(e) = frame_loop(stats, slot, animation) {
            leptos::logging::warn!("animation frame unavailable for {}: {e:?}", slot.element_id());
            stats.update(|s| s.set(slot, animation.final_value()));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        stats.update(|s| s.set(slot, animation.final_value()));
    }
}

/// What one animation frame decided.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) enum FrameOutcome<E> {
    Scheduled,
    Finished,
    Aborted(E),
}

/// Write the frame at `elapsed` into `slot`, then request the next frame
/// through `reschedule` unless the animation is done. A failed request jumps
/// the tile straight to its final value.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn advance_frame<E>(
    stats: RwSignal<StatsState>,
    slot: CounterSlot,
    animation: CounterAnimation,
    elapsed: f64,
    reschedule: impl FnOnce() -> Result<(), E>,
) -> FrameOutcome<E> {
    stats.update(|s| s.set(slot, animation.value_at(elapsed)));
    if animation.is_finished(elapsed) {
        return FrameOutcome::Finished;
    }
    match reschedule() {
        Ok(()) => FrameOutcome::Scheduled,
        Err(e) => {
            stats.update(|s| s.set(slot, animation.final_value()));
            FrameOutcome::Aborted(e)
        }
    }
}

#[cfg(feature = "csr")]
fn frame_loop(
    stats: RwSignal<StatsState>,
    slot: CounterSlot,
    animation: CounterAnimation,
) -> Result<(), wasm_bindgen::JsValue> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    let window = web_sys::window().ok_or_else(|| wasm_bindgen::JsValue::from_str("no window"))?;

    // The closure reschedules itself through this cell and empties it on its
    // last frame, which breaks the cycle.
    let step: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let step_handle = step.clone();
    let frame_window = window.clone();
    let mut started_at: Option<f64> = None;

    *step_handle.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
        let start = *started_at.get_or_insert(timestamp);
        let outcome = advance_frame(stats, slot, animation, timestamp - start, || {
            step.borrow().as_ref().map_or(Ok(()), |next| {
                frame_window.request_animation_frame(next.as_ref().unchecked_ref()).map(|_| ())
            })
        });
        match outcome {
            FrameOutcome::Scheduled => {}
            FrameOutcome::Finished => {
                step.borrow_mut().take();
            }
            FrameOutcome::Aborted(e) => {
                leptos::logging::warn!("animation frame lost for {}: {e:?}", slot.element_id());
                step.borrow_mut().take();
            }
        }
    }));

    let first = step_handle
        .borrow()
        .as_ref()
        .map(|callback| window.request_animation_frame(callback.as_ref().unchecked_ref()));
    if let Some(Err(e)) = first {
        step_handle.borrow_mut().take();
        return Err(e);
    }
    Ok(())
}
