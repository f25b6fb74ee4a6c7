use std::time::Duration;

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// The visual effect a transition plays.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Effect {
    #[default]
    None,
    SlideDown,
    SlideUp,
    FadeIn,
    FadeOut,
    /// Rotate around the z axis to the given angle in degrees.
    Rotate(f32),
}

/// Configuration for a single transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub effect: Effect,
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(effect: Effect, duration: Duration) -> Self {
        Self {
            effect,
            duration,
            easing: Easing::default(),
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Eased progress of the transition `elapsed` after it started, 0.0 to 1.0.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.easing.apply(t)
    }
}

/// Enter and leave transitions of a drawer's content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerTransition {
    pub enter: TransitionConfig,
    pub leave: TransitionConfig,
}

impl DrawerTransition {
    pub fn new(enter: TransitionConfig, leave: TransitionConfig) -> Self {
        Self { enter, leave }
    }

    /// Slide down on enter, slide up on leave.
    pub fn slide(duration: Duration) -> Self {
        Self::new(
            TransitionConfig::new(Effect::SlideDown, duration),
            TransitionConfig::new(Effect::SlideUp, duration),
        )
    }
}
