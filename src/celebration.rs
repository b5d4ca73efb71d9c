use crate::constants::*;
use crate::core::confetti::spawn_confetti;
use crate::core::constants::CONFETTI_COUNT;
use crate::dom;
use crate::AppContext;
use web_sys as web;

/// Terminal screen. Confetti runs purely on CSS keyframes, so nothing here
/// needs per-frame work.
pub struct CelebrationView {
    container: web::HtmlElement,
}

impl CelebrationView {
    pub fn mount(ctx: &AppContext) -> anyhow::Result<Self> {
        let doc = &ctx.document;
        let cfg = &ctx.config;

        let container =
            dom::create(doc, "div", &format!("{} {}", CLASS_SCREEN, CLASS_CELEBRATION))?;
        let backdrop = dom::image(doc, &cfg.assets.url(&cfg.assets.background), "", CLASS_BACKDROP)?;
        let layer = dom::create(doc, "div", CLASS_CONFETTI_LAYER)?;

        let particles = spawn_confetti(&mut rand::thread_rng(), CONFETTI_COUNT);
        for p in &particles {
            let piece = dom::create(doc, "div", CLASS_CONFETTI_PIECE)?;
            dom::set_style(&piece, "left", &format!("{:.2}%", p.left_pct));
            dom::set_style(&piece, "background-color", p.color);
            dom::set_style(&piece, "animation", &p.animation_css(CONFETTI_KEYFRAMES));
            dom::append(&layer, &piece)?;
        }

        let headline = dom::text(
            doc,
            "h1",
            &format!("{} {}", CLASS_HEADLINE, CLASS_OUTLINED),
            &cfg.accepted_headline,
        )?;
        let gif = dom::create(doc, "div", CLASS_CELEBRATION_GIF)?;
        let img = dom::image(doc, &cfg.assets.url(&cfg.assets.gif_yes), "Celebration", CLASS_GIF)?;
        dom::append(&gif, &img)?;

        dom::append(&container, &backdrop)?;
        dom::append(&container, &layer)?;
        dom::append(&container, &headline)?;
        dom::append(&container, &gif)?;
        dom::append(&ctx.root, &container)?;

        log::info!("[celebration] {} confetti pieces", particles.len());
        Ok(Self { container })
    }
}

impl Drop for CelebrationView {
    fn drop(&mut self) {
        self.container.remove();
    }
}
