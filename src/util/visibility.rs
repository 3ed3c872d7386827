//! One-shot visibility triggers for page regions.
//!
//! A registration observes one region and runs its action at most once, the
//! first time the region is intersecting the viewport at or above the
//! threshold ratio; the region is unobserved right after. [`VisibilityGate`]
//! holds that rule so it can be tested without an `IntersectionObserver`.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// At-most-once latch for a single observed region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityGate {
    threshold: f64,
    fired: bool,
}

impl VisibilityGate {
    pub fn new(threshold: f64) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), fired: false }
    }

    /// Feed one intersection report; returns `true` only for the first
    /// report that passes the threshold.
    pub fn notify(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.fired || !intersecting || ratio < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Run `action` once, the first time `target` is visible above `threshold`.
///
/// # Errors
///
/// Returns the browser exception if the observer cannot be constructed.
#[cfg(feature = "csr")]
pub fn observe_once<F>(target: &web_sys::Element, threshold: f64, action: F) -> Result<(), wasm_bindgen::JsValue>
where
    F: FnOnce() + 'static,
{
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    let mut gate = VisibilityGate::new(threshold);
    let mut action = Some(action);

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if gate.notify(entry.is_intersecting(), entry.intersection_ratio()) {
                    observer.unobserve(&entry.target());
                    if let Some(action) = action.take() {
                        action();
                    }
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(gate.threshold()));
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(target);
    // The observer owns the only reference to the callback from here on.
    callback.forget();
    Ok(())
}
