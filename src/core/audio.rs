use std::cell::Cell;
use std::rc::Rc;

/// A looping background track that may refuse to start.
pub trait Track {
    /// Begin playback. `on_started` runs only if the platform accepted the
    /// request; a rejection is dropped and `on_started` never runs.
    fn start(&self, on_started: Box<dyn FnOnce()>);
}

/// Owns the background track and remembers once playback got going.
///
/// Constructed once by the application and shared by reference; there is no
/// global. `ensure_playing` can be called from every user gesture: it retries
/// until a start succeeds and is a no-op afterwards.
pub struct AudioUnlocker<T: Track> {
    track: T,
    unlocked: Rc<Cell<bool>>,
}

impl<T: Track> AudioUnlocker<T> {
    pub fn new(track: T) -> Self {
        Self {
            track,
            unlocked: Rc::new(Cell::new(false)),
        }
    }

    #[inline]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked.get()
    }

    pub fn ensure_playing(&self) {
        if self.unlocked.get() {
            return;
        }
        let unlocked = self.unlocked.clone();
        self.track.start(Box::new(move || {
            if !unlocked.replace(true) {
                log::info!("[audio] background music unlocked");
            }
        }));
    }
}
