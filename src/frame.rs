use crate::celebration::CelebrationView;
use crate::core::{Stage, StageEvent};
use crate::intro::IntroView;
use crate::question::QuestionView;
use crate::AppContext;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

enum Screen {
    Intro(IntroView),
    Question(QuestionView),
    Celebration(CelebrationView),
    Empty,
}

/// Owns the active screen and performs the one-way hand-offs between them.
///
/// Views only mutate their own state from event handlers; the frame loop
/// notices when a view is finished and swaps it out, so no handler ever
/// tears down the view it belongs to.
pub struct FrameContext {
    ctx: AppContext,
    stage: Stage,
    screen: Screen,
    last_instant: Instant,
}

impl FrameContext {
    pub fn new(ctx: AppContext) -> anyhow::Result<Self> {
        let intro = IntroView::mount(&ctx)?;
        Ok(Self {
            ctx,
            stage: Stage::Intro,
            screen: Screen::Intro(intro),
            last_instant: Instant::now(),
        })
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.stage.is_terminal()
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let event = match &mut self.screen {
            Screen::Intro(view) => {
                view.animate(dt_sec);
                if self.stage == Stage::Intro && view.is_done() {
                    view.begin_exit();
                    Some(StageEvent::IntroDone)
                } else if view.exit_settled() {
                    Some(StageEvent::IntroFadedOut)
                } else {
                    None
                }
            }
            Screen::Question(view) => {
                view.animate(dt_sec);
                view.is_accepted().then_some(StageEvent::Accepted)
            }
            Screen::Celebration(_) | Screen::Empty => None,
        };

        if let Some(event) = event {
            self.advance(event);
        }
    }

    fn advance(&mut self, event: StageEvent) {
        let next = self.stage.next(event);
        if next == self.stage {
            return;
        }
        log::info!("[stage] {:?} -> {:?}", self.stage, next);
        self.stage = next;

        let mounted = match next {
            Stage::Question => {
                // drop the intro first so its timers and DOM are gone
                self.screen = Screen::Empty;
                QuestionView::mount(&self.ctx).map(Screen::Question)
            }
            Stage::Celebration => {
                self.screen = Screen::Empty;
                CelebrationView::mount(&self.ctx).map(Screen::Celebration)
            }
            Stage::Intro | Stage::LeavingIntro => return,
        };
        match mounted {
            Ok(screen) => self.screen = screen,
            Err(e) => log::error!("mount {:?} error: {:?}", next, e),
        }
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` until the card reaches its
/// final screen.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let finished = {
            let mut fc = frame_ctx.borrow_mut();
            fc.frame();
            fc.is_finished()
        };
        // the celebration is CSS-only, so the loop simply stops rescheduling
        if !finished {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
