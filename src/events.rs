use crate::core::Viewport;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that is detached when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl Listener {
    pub fn new(target: &web::EventTarget, event: &'static str, handler: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        log::debug!("[events] detached {} listener", self.event);
    }
}

#[inline]
pub fn on_click(el: &web::HtmlElement, handler: impl FnMut() + 'static) -> Listener {
    Listener::new(el, "click", handler)
}

/// Report the new viewport on every window resize. `None` without a window.
pub fn on_resize(mut handler: impl FnMut(Viewport) + 'static) -> Option<Listener> {
    let window = web::window()?;
    Some(Listener::new(&window, "resize", move || handler(dom::viewport())))
}
