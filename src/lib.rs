#![cfg(target_arch = "wasm32")]
use crate::core::{AudioUnlocker, CardConfig};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod celebration;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod intro;
mod question;
mod timers;

static STYLES_CSS: &str = include_str!("styles.css");

/// Shared, read-only handles every screen is built from.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub config: Rc<CardConfig>,
    pub audio: Rc<AudioUnlocker<audio::HtmlTrack>>,
    pub document: web::Document,
    pub root: web::HtmlElement,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("one-little-question starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn mount_root(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    match document.get_element_by_id(constants::MOUNT_ID) {
        Some(el) => el
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow!("#{} is not an HtmlElement: {:?}", constants::MOUNT_ID, e)),
        None => document.body().ok_or_else(|| anyhow!("no <body>")),
    }
}

fn load_config(root: &web::HtmlElement) -> CardConfig {
    let config = CardConfig::default().with_overrides(dom::data_lookup(root));
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            CardConfig::default()
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    let root = mount_root(&document)?;
    let config = load_config(&root);

    let stylesheet = format!(
        "{}\n{}",
        STYLES_CSS,
        crate::core::confetti::fall_keyframes(constants::CONFETTI_KEYFRAMES)
    );
    dom::inject_stylesheet(&document, constants::STYLE_ELEMENT_ID, &stylesheet)?;

    let track = audio::HtmlTrack::new(
        &config.assets.url(&config.assets.music),
        config.music_volume,
    )?;

    let ctx = AppContext {
        config: Rc::new(config),
        audio: Rc::new(AudioUnlocker::new(track)),
        document,
        root,
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(ctx)?));
    frame::start_loop(frame_ctx);
    Ok(())
}
