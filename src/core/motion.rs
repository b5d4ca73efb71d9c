//! Goal-seeking interpolation used by the views.
//!
//! Views never animate directly: each frame they pass the latest goal for a
//! property together with a [`Transition`] through [`Interpolate`], and write
//! the returned [`Channel::value`] to the DOM.

use super::constants::{
    MAX_FRAME_DT_SEC, SPRING_DEFAULT_DAMPING, SPRING_DEFAULT_MASS, SPRING_MAX_SUBSTEP_SEC,
    SPRING_REST_DELTA, SPRING_REST_SPEED,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    EaseOut,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            // cubic ease-out
            Ease::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    Tween { duration_sec: f32, ease: Ease },
    Spring { stiffness: f32, damping: f32, mass: f32 },
}

impl Transition {
    pub fn tween(duration_sec: f32) -> Self {
        Transition::Tween {
            duration_sec,
            ease: Ease::EaseOut,
        }
    }

    pub fn spring(stiffness: f32) -> Self {
        Self::spring_damped(stiffness, SPRING_DEFAULT_DAMPING)
    }

    pub fn spring_damped(stiffness: f32, damping: f32) -> Self {
        Transition::Spring {
            stiffness,
            damping,
            mass: SPRING_DEFAULT_MASS,
        }
    }
}

/// A single animated scalar: where it is, how fast it moves, and where it is
/// heading. `from`/`elapsed` are only meaningful to tweens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channel {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
    from: f32,
    elapsed: f32,
}

impl Channel {
    /// A channel resting at `value`.
    pub fn at(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            from: value,
            elapsed: 0.0,
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < SPRING_REST_DELTA
            && self.velocity.abs() < SPRING_REST_SPEED
    }

    fn retarget(&mut self, target: f32) {
        if self.target != target {
            self.target = target;
            self.from = self.value;
            self.elapsed = 0.0;
        }
    }

    /// Advance toward `target` by `dt_sec` and return the new value.
    pub fn drive(&mut self, transition: &impl Interpolate, target: f32, dt_sec: f32) -> f32 {
        *self = transition.interpolate(*self, target, dt_sec);
        self.value
    }
}

/// Stand-in for an animation engine: given the current state of a property,
/// its goal and elapsed time, produce the next state.
pub trait Interpolate {
    fn interpolate(&self, current: Channel, target: f32, dt_sec: f32) -> Channel;
}

impl Interpolate for Transition {
    fn interpolate(&self, current: Channel, target: f32, dt_sec: f32) -> Channel {
        let mut ch = current;
        ch.retarget(target);
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        match *self {
            Transition::Tween { duration_sec, ease } => {
                ch.elapsed += dt;
                if duration_sec <= 0.0 || ch.elapsed >= duration_sec {
                    ch.value = ch.target;
                    ch.velocity = 0.0;
                } else {
                    let prev = ch.value;
                    let t = ease.apply(ch.elapsed / duration_sec);
                    ch.value = ch.from + (ch.target - ch.from) * t;
                    ch.velocity = if dt > 0.0 { (ch.value - prev) / dt } else { 0.0 };
                }
            }
            Transition::Spring {
                stiffness,
                damping,
                mass,
            } => {
                let mut remaining = dt;
                while remaining > 0.0 {
                    let h = remaining.min(SPRING_MAX_SUBSTEP_SEC);
                    // semi-implicit Euler
                    let force = -stiffness * (ch.value - ch.target) - damping * ch.velocity;
                    ch.velocity += force / mass * h;
                    ch.value += ch.velocity * h;
                    remaining -= h;
                }
                if ch.is_settled() {
                    ch.value = ch.target;
                    ch.velocity = 0.0;
                }
            }
        }
        ch
    }
}
