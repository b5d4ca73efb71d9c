use crate::constants::*;
use crate::core::constants::{
    BUTTONS_SPRING, GIF_SPRING_STIFFNESS, NO_SPRING, SCREEN_FADE_SEC, TITLE_SPRING_STIFFNESS,
    YES_SPRING,
};
use crate::core::{Answer, Channel, FlowPhase, Layout, QuestionFlow, Transition};
use crate::dom;
use crate::events::{self, Listener};
use crate::AppContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct QuestionMotion {
    screen: Channel,
    title_top: Channel,
    title_scale: Channel,
    gap: Channel,
    yes_w: Channel,
    yes_h: Channel,
    no_w: Channel,
    no_h: Channel,
    gif_top: Channel,
    gif_scale: Channel,
}

impl QuestionMotion {
    fn resting_at(layout: &Layout) -> Self {
        let no = layout.no.unwrap_or_default();
        Self {
            screen: Channel::at(0.0),
            title_top: Channel::at(layout.title_top),
            title_scale: Channel::at(layout.title_scale),
            gap: Channel::at(layout.gap),
            yes_w: Channel::at(layout.yes.x),
            yes_h: Channel::at(layout.yes.y),
            no_w: Channel::at(no.x),
            no_h: Channel::at(no.y),
            gif_top: Channel::at(layout.gif_top),
            gif_scale: Channel::at(layout.gif_scale),
        }
    }
}

/// The question screen: a growing Yes, an escalating No.
pub struct QuestionView {
    container: web::HtmlElement,
    title: web::HtmlElement,
    buttons: web::HtmlElement,
    yes: web::HtmlElement,
    no: Option<web::HtmlElement>,
    gif: web::HtmlElement,
    flow: Rc<RefCell<QuestionFlow>>,
    motion: QuestionMotion,
    shown_step: Option<usize>,
    _listeners: Vec<Listener>,
}

impl QuestionView {
    pub fn mount(ctx: &AppContext) -> anyhow::Result<Self> {
        let doc = &ctx.document;
        let cfg = &ctx.config;

        let flow = Rc::new(RefCell::new(QuestionFlow::new(cfg.script()?, dom::viewport())));
        let layout = flow.borrow().layout();

        let container = dom::create(doc, "div", &format!("{} {}", CLASS_SCREEN, CLASS_QUESTION))?;
        let backdrop = dom::image(doc, &cfg.assets.url(&cfg.assets.background), "", CLASS_BACKDROP)?;
        let title = dom::text(
            doc,
            "h1",
            &format!("{} {}", CLASS_TITLE, CLASS_OUTLINED),
            &cfg.question,
        )?;
        let buttons = dom::create(doc, "div", CLASS_BUTTONS)?;
        let yes = dom::text(doc, "button", CLASS_YES, &cfg.yes_label)?;
        let no = dom::text(doc, "button", CLASS_NO, flow.borrow().no_label().unwrap_or_default())?;
        let gif = dom::create(doc, "div", CLASS_QUESTION_GIF)?;
        let img = dom::image(
            doc,
            &cfg.assets.url(&cfg.assets.gif_main),
            "OneLittleQuestion",
            CLASS_GIF,
        )?;

        dom::append(&buttons, &yes)?;
        dom::append(&buttons, &no)?;
        dom::append(&gif, &img)?;
        dom::append(&container, &backdrop)?;
        dom::append(&container, &title)?;
        dom::append(&container, &buttons)?;
        dom::append(&container, &gif)?;

        let mut listeners = Vec::with_capacity(3);
        {
            let flow = flow.clone();
            listeners.push(events::on_click(&yes, move || {
                if flow.borrow_mut().answer(Answer::Yes) == FlowPhase::Accepted {
                    log::info!("[question] accepted");
                }
            }));
        }
        {
            let flow = flow.clone();
            listeners.push(events::on_click(&no, move || {
                let phase = flow.borrow_mut().answer(Answer::No);
                log::debug!("[question] refused -> {:?}", phase);
            }));
        }
        {
            let flow = flow.clone();
            if let Some(l) = events::on_resize(move |vp| flow.borrow_mut().resize(vp)) {
                listeners.push(l);
            }
        }

        dom::set_opacity(&container, 0.0);
        dom::append(&ctx.root, &container)?;

        let mut view = Self {
            container,
            title,
            buttons,
            yes,
            no: Some(no),
            gif,
            flow,
            motion: QuestionMotion::resting_at(&layout),
            shown_step: None,
            _listeners: listeners,
        };
        view.animate(0.0);
        Ok(view)
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.flow.borrow().is_accepted()
    }

    pub fn animate(&mut self, dt_sec: f32) {
        let (layout, step, label) = {
            let flow = self.flow.borrow();
            (flow.layout(), flow.step(), flow.no_label().map(str::to_string))
        };
        if self.shown_step != Some(step) {
            self.sync_no_button(label.as_deref());
            self.shown_step = Some(step);
        }

        let m = &mut self.motion;
        let screen = m
            .screen
            .drive(&Transition::tween(SCREEN_FADE_SEC), 1.0, dt_sec);
        dom::set_opacity(&self.container, screen);

        let title_spring = Transition::spring(TITLE_SPRING_STIFFNESS);
        let top = m.title_top.drive(&title_spring, layout.title_top, dt_sec);
        let scale = m.title_scale.drive(&title_spring, layout.title_scale, dt_sec);
        dom::set_px(&self.title, "top", top);
        dom::set_style(&self.title, "transform", &format!("scale({:.4})", scale));

        // flex direction cannot be interpolated; it switches outright
        dom::set_style(&self.buttons, "flex-direction", layout.stacking.css_direction());
        dom::set_px(&self.buttons, "top", layout.buttons_top);
        let gap = m.gap.drive(
            &Transition::spring_damped(BUTTONS_SPRING.0, BUTTONS_SPRING.1),
            layout.gap,
            dt_sec,
        );
        dom::set_px(&self.buttons, "gap", gap);

        let yes_spring = Transition::spring_damped(YES_SPRING.0, YES_SPRING.1);
        let yes_w = m.yes_w.drive(&yes_spring, layout.yes.x, dt_sec);
        let yes_h = m.yes_h.drive(&yes_spring, layout.yes.y, dt_sec);
        dom::set_px(&self.yes, "width", yes_w);
        dom::set_px(&self.yes, "height", yes_h);

        if let (Some(no), Some(goal)) = (&self.no, layout.no) {
            let no_spring = Transition::spring_damped(NO_SPRING.0, NO_SPRING.1);
            let no_w = m.no_w.drive(&no_spring, goal.x, dt_sec);
            let no_h = m.no_h.drive(&no_spring, goal.y, dt_sec);
            dom::set_px(no, "width", no_w);
            dom::set_px(no, "height", no_h);
        }

        let gif_spring = Transition::spring(GIF_SPRING_STIFFNESS);
        let gif_top = m.gif_top.drive(&gif_spring, layout.gif_top, dt_sec);
        let gif_scale = m.gif_scale.drive(&gif_spring, layout.gif_scale, dt_sec);
        dom::set_px(&self.gif, "top", gif_top);
        dom::set_style(
            &self.gif,
            "transform",
            &format!("translateX(-50%) scale({:.4})", gif_scale),
        );
    }

    fn sync_no_button(&mut self, label: Option<&str>) {
        match label {
            Some(text) => {
                if let Some(no) = &self.no {
                    no.set_text_content(Some(text));
                }
            }
            None => {
                if let Some(no) = self.no.take() {
                    no.remove();
                    log::info!("[question] refusal script exhausted; only Yes remains");
                }
            }
        }
    }
}

impl Drop for QuestionView {
    fn drop(&mut self) {
        self.container.remove();
    }
}
