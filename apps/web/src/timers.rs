use std::convert::TryFrom;

use voces_core::error::SiteResult;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

use crate::dom::js_failure;

fn timeout(delay_ms: u32) -> i32 {
    i32::try_from(delay_ms).unwrap_or(i32::MAX)
}

/// Runs `task` once after `delay_ms`. The callback frees itself after it
/// runs.
pub fn set_timeout<F>(window: &Window, delay_ms: u32, task: F) -> SiteResult<i32>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(task);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            timeout(delay_ms),
        )
        .map_err(|error| js_failure("setTimeout", &error))
}

/// Resolves after `delay_ms`.
pub async fn sleep(window: &Window, delay_ms: u32) -> SiteResult<()> {
    let mut scheduled = Ok(0);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        scheduled = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout(delay_ms));
    });
    scheduled.map_err(|error| js_failure("setTimeout", &error))?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|error| js_failure("timer promise", &error))
}
