use crate::core::Track;
use anyhow::anyhow;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Looping `<audio>` element used as the background track.
pub struct HtmlTrack {
    element: web::HtmlAudioElement,
}

impl HtmlTrack {
    pub fn new(src: &str, volume: f64) -> anyhow::Result<Self> {
        let element = web::HtmlAudioElement::new_with_src(src)
            .map_err(|e| anyhow!("HtmlAudioElement error: {:?}", e))?;
        element.set_loop(true);
        element.set_volume(volume);
        Ok(Self { element })
    }
}

impl Track for HtmlTrack {
    fn start(&self, on_started: Box<dyn FnOnce()>) {
        // Autoplay policy rejects the promise until a user gesture; that is
        // expected and only worth a debug line.
        match self.element.play() {
            Ok(promise) => spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => on_started(),
                    Err(e) => log::debug!("[audio] play rejected: {:?}", e),
                }
            }),
            Err(e) => log::debug!("[audio] play threw: {:?}", e),
        }
    }
}
