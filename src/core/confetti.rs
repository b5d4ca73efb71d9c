use super::constants::*;
use rand::Rng;

/// One falling square on the celebration screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal start, percent of the viewport width.
    pub left_pct: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub color: &'static str,
}

impl Particle {
    /// CSS `animation` shorthand for the shared fall keyframes.
    pub fn animation_css(&self, keyframes: &str) -> String {
        format!(
            "{} {:.3}s ease-out {:.3}s both",
            keyframes, self.duration_sec, self.delay_sec
        )
    }
}

pub fn spawn_confetti<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            left_pct: rng.gen_range(0.0..100.0),
            duration_sec: CONFETTI_MIN_DURATION_SEC
                + rng.gen_range(0.0..CONFETTI_DURATION_SPAN_SEC),
            delay_sec: rng.gen_range(0.0..CONFETTI_MAX_DELAY_SEC),
            color: CONFETTI_PALETTE[rng.gen_range(0..CONFETTI_PALETTE.len())],
        })
        .collect()
}

/// Keyframes body for a particle's fall: off-screen top to below the bottom
/// edge, one full turn, fading out.
pub fn fall_keyframes(name: &str) -> String {
    format!(
        "@keyframes {name} {{ \
           from {{ transform: translateY({start}px) rotate(0deg); opacity: 1; }} \
           to {{ transform: translateY({end}vh) rotate(360deg); opacity: 0; }} \
         }}",
        name = name,
        start = CONFETTI_START_Y_PX,
        end = CONFETTI_END_Y_VH,
    )
}
