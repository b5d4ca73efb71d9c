use crate::constants::*;
use crate::core::constants::{
    HELLO_FADE_SEC, HINT_FADE_SEC, HINT_OPACITY, INTRO_GIF_FADE_SEC, INTRO_GIF_RISE_PX,
    LOADING_FADE_SEC, LOADING_OPACITY, SCREEN_FADE_SEC,
};
use crate::core::{intro_cues, Channel, CueScheduler, IntroGate, Reveal, Tap, Transition};
use crate::dom;
use crate::events::{self, Listener};
use crate::timers::WindowTimers;
use crate::AppContext;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct IntroMotion {
    screen: Channel,
    hello: Channel,
    loading: Channel,
    hint: Channel,
    gif_opacity: Channel,
    gif_y: Channel,
}

/// Intro screen: timed reveals, then waits for a tap.
pub struct IntroView {
    container: web::HtmlElement,
    hello: web::HtmlElement,
    loading: web::HtmlElement,
    hint: web::HtmlElement,
    gif: web::HtmlElement,
    gate: Rc<RefCell<IntroGate>>,
    motion: IntroMotion,
    exiting: bool,
    _scheduler: CueScheduler<WindowTimers>,
    _tap: Listener,
}

impl IntroView {
    pub fn mount(ctx: &AppContext) -> anyhow::Result<Self> {
        let doc = &ctx.document;
        let cfg = &ctx.config;

        let container = dom::create(doc, "div", &format!("{} {}", CLASS_SCREEN, CLASS_INTRO))?;
        let text_box = dom::create(doc, "div", CLASS_INTRO_TEXT)?;
        let hello = dom::text(
            doc,
            "h1",
            &format!("{} {}", CLASS_INTRO_HELLO, CLASS_OUTLINED),
            &cfg.greeting(),
        )?;
        let loading = dom::text(doc, "p", CLASS_INTRO_LOADING, &cfg.loading_text)?;
        let hint = dom::text(doc, "p", CLASS_INTRO_HINT, &cfg.hint_text)?;
        let gif = dom::create(doc, "div", CLASS_INTRO_GIF)?;
        let img = dom::image(doc, &cfg.assets.url(&cfg.assets.gif_intro), "Intro", CLASS_GIF)?;

        dom::append(&text_box, &hello)?;
        dom::append(&text_box, &loading)?;
        dom::append(&text_box, &hint)?;
        dom::append(&gif, &img)?;
        dom::append(&container, &text_box)?;
        dom::append(&container, &gif)?;

        let motion = IntroMotion {
            screen: Channel::at(1.0),
            hello: Channel::at(0.0),
            loading: Channel::at(0.0),
            hint: Channel::at(0.0),
            gif_opacity: Channel::at(0.0),
            gif_y: Channel::at(INTRO_GIF_RISE_PX),
        };
        for el in [&hello, &loading, &hint, &gif] {
            dom::set_opacity(el, 0.0);
        }
        dom::set_style(&gif, "transform", &format!("translateY({}px)", INTRO_GIF_RISE_PX));

        let gate = Rc::new(RefCell::new(IntroGate::new()));

        let sink: Rc<dyn Fn(Reveal)> = {
            let gate = gate.clone();
            let audio = ctx.audio.clone();
            Rc::new(move |reveal| match reveal {
                Reveal::UnlockAudio => audio.ensure_playing(),
                other => gate.borrow_mut().apply(other),
            })
        };
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let scheduler = CueScheduler::start(WindowTimers::new(window), &intro_cues(), sink);

        let tap = {
            let gate = gate.clone();
            let audio = ctx.audio.clone();
            events::on_click(&container, move || {
                let outcome = gate.borrow_mut().on_tap();
                if outcome == Tap::Continue {
                    audio.ensure_playing();
                    log::info!("[intro] tapped through");
                }
            })
        };

        dom::append(&ctx.root, &container)?;

        Ok(Self {
            container,
            hello,
            loading,
            hint,
            gif,
            gate,
            motion,
            exiting: false,
            _scheduler: scheduler,
            _tap: tap,
        })
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.gate.borrow().is_done()
    }

    pub fn begin_exit(&mut self) {
        self.exiting = true;
    }

    pub fn exit_settled(&self) -> bool {
        self.exiting && self.motion.screen.value <= 0.0
    }

    pub fn animate(&mut self, dt_sec: f32) {
        let state = self.gate.borrow().state();
        let m = &mut self.motion;

        let screen = m.screen.drive(
            &Transition::tween(SCREEN_FADE_SEC),
            if self.exiting { 0.0 } else { 1.0 },
            dt_sec,
        );
        dom::set_opacity(&self.container, screen);

        let hello = m.hello.drive(
            &Transition::tween(HELLO_FADE_SEC),
            on_off(state.hello_shown, 1.0),
            dt_sec,
        );
        dom::set_opacity(&self.hello, hello);

        let loading = m.loading.drive(
            &Transition::tween(LOADING_FADE_SEC),
            on_off(state.loading_shown, LOADING_OPACITY),
            dt_sec,
        );
        dom::set_opacity(&self.loading, loading);

        let hint = m.hint.drive(
            &Transition::tween(HINT_FADE_SEC),
            on_off(state.hint_shown, HINT_OPACITY),
            dt_sec,
        );
        dom::set_opacity(&self.hint, hint);

        let gif_fade = Transition::tween(INTRO_GIF_FADE_SEC);
        let gif_opacity = m
            .gif_opacity
            .drive(&gif_fade, on_off(state.gif_shown, 1.0), dt_sec);
        let gif_y = m.gif_y.drive(
            &gif_fade,
            if state.gif_shown { 0.0 } else { INTRO_GIF_RISE_PX },
            dt_sec,
        );
        dom::set_opacity(&self.gif, gif_opacity);
        dom::set_style(&self.gif, "transform", &format!("translateY({:.2}px)", gif_y));
    }
}

impl Drop for IntroView {
    fn drop(&mut self) {
        // scheduler and tap listener drop with the view
        self.container.remove();
    }
}

#[inline]
fn on_off(shown: bool, opacity: f32) -> f32 {
    if shown {
        opacity
    } else {
        0.0
    }
}
