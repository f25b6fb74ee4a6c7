use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::config::NodeProps;
use crate::transitions::{DrawerTransition, Effect, Easing, TransitionConfig};

pub type ToggleAnimation = Arc<dyn Fn(&NodeProps<'_>) -> TransitionConfig + Send + Sync>;
pub type DrawerAnimation = Arc<dyn Fn(&NodeProps<'_>) -> DrawerTransition + Send + Sync>;

const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Animations of a tree: either off everywhere, or a set of functions
/// computing each node's transitions from its props.
#[derive(Clone)]
pub enum Animations {
    Disabled,
    Enabled(AnimationSet),
}

impl Default for Animations {
    fn default() -> Self {
        Animations::Enabled(AnimationSet::default())
    }
}

impl Animations {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Animations::Enabled(_))
    }

    /// Merge the node's overrides into the set and evaluate it for `props`.
    /// `None` when animations are disabled, whatever the node overrides.
    pub fn resolve(&self, props: &NodeProps<'_>) -> Option<ResolvedAnimations> {
        match self {
            Animations::Disabled => None,
            Animations::Enabled(set) => Some(set.merged(&props.node.animations).resolve(props)),
        }
    }
}

impl fmt::Debug for Animations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Animations::Disabled => write!(f, "Disabled"),
            Animations::Enabled(_) => write!(f, "Enabled(..)"),
        }
    }
}

#[derive(Clone)]
pub struct AnimationSet {
    pub toggle: ToggleAnimation,
    pub drawer: DrawerAnimation,
}

impl Default for AnimationSet {
    /// The toggle turns a quarter when expanded; the drawer slides.
    fn default() -> Self {
        Self::new(
            |props| {
                let angle = if props.node.toggled { 90.0 } else { 0.0 };
                TransitionConfig::new(Effect::Rotate(angle), DEFAULT_DURATION)
                    .easing(Easing::EaseOut)
            },
            |_| DrawerTransition::slide(DEFAULT_DURATION),
        )
    }
}

impl AnimationSet {
    pub fn new(
        toggle: impl Fn(&NodeProps<'_>) -> TransitionConfig + Send + Sync + 'static,
        drawer: impl Fn(&NodeProps<'_>) -> DrawerTransition + Send + Sync + 'static,
    ) -> Self {
        Self {
            toggle: Arc::new(toggle),
            drawer: Arc::new(drawer),
        }
    }

    pub fn merged(&self, overrides: &AnimationOverrides) -> AnimationSet {
        AnimationSet {
            toggle: overrides.toggle.clone().unwrap_or_else(|| Arc::clone(&self.toggle)),
            drawer: overrides.drawer.clone().unwrap_or_else(|| Arc::clone(&self.drawer)),
        }
    }

    pub fn resolve(&self, props: &NodeProps<'_>) -> ResolvedAnimations {
        ResolvedAnimations {
            toggle: (self.toggle)(props),
            drawer: (self.drawer)(props),
        }
    }
}

/// Per-node replacements for entries of the tree's [`AnimationSet`].
#[derive(Clone, Default)]
pub struct AnimationOverrides {
    pub toggle: Option<ToggleAnimation>,
    pub drawer: Option<DrawerAnimation>,
}

impl AnimationOverrides {
    pub fn is_empty(&self) -> bool {
        self.toggle.is_none() && self.drawer.is_none()
    }
}

impl fmt::Debug for AnimationOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationOverrides")
            .field("toggle", &self.toggle.is_some())
            .field("drawer", &self.drawer.is_some())
            .finish()
    }
}

/// Transitions computed for one node in one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAnimations {
    pub toggle: TransitionConfig,
    pub drawer: DrawerTransition,
}
