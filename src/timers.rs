use crate::core::TimerHost;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setTimeout`-backed timer host.
pub struct WindowTimers {
    window: web::Window,
}

/// Keeps the callback alive until the timeout fires or is cleared.
pub struct Timeout {
    id: Option<i32>,
    _closure: Closure<dyn FnMut()>,
}

impl WindowTimers {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl TimerHost for WindowTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        let closure = Closure::once(callback);
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms.min(i32::MAX as u32) as i32,
            )
            .map_err(|e| log::error!("setTimeout error: {:?}", e))
            .ok();
        Timeout {
            id,
            _closure: closure,
        }
    }

    fn cancel(&self, handle: Timeout) {
        if let Some(id) = handle.id {
            self.window.clear_timeout_with_handle(id);
        }
    }
}
