//! Animator double that records every command.

use std::collections::HashMap;

use pullsep_animation::{AnimationSpec, ViewAnimator, ViewId, ViewProperty};

/// One command issued to the animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorCommand {
    pub view: ViewId,
    pub property: ViewProperty,
    /// The immediate value for `set`, or the interpolation target for
    /// `animate`.
    pub value: f32,
    /// `Some` for scheduled interpolations, `None` for immediate sets.
    pub spec: Option<AnimationSpec>,
}

/// A [`ViewAnimator`] that records commands and tracks property values.
///
/// `set` takes effect immediately; `animate` parks a pending target until
/// [`RecordingAnimator::finish_animations`] simulates the interpolations
/// running to completion. Unset properties read as their resting value
/// (0 translation, 1 scale).
#[derive(Debug, Default)]
pub struct RecordingAnimator {
    commands: Vec<AnimatorCommand>,
    values: HashMap<(ViewId, ViewProperty), f32>,
    pending: HashMap<(ViewId, ViewProperty), f32>,
}

impl RecordingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[AnimatorCommand] {
        &self.commands
    }

    pub fn commands_for(&self, view: ViewId, property: ViewProperty) -> Vec<AnimatorCommand> {
        self.commands
            .iter()
            .copied()
            .filter(|command| command.view == view && command.property == property)
            .collect()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Run every pending interpolation to its target.
    pub fn finish_animations(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        self.values.extend(pending);
    }

    fn resting_value(property: ViewProperty) -> f32 {
        match property {
            ViewProperty::TranslationY => 0.0,
            ViewProperty::ScaleX | ViewProperty::ScaleY => 1.0,
        }
    }

    /// Current value of a property, after any `set`s and finished
    /// animations.
    pub fn value_of(&self, view: ViewId, property: ViewProperty) -> f32 {
        self.values
            .get(&(view, property))
            .copied()
            .unwrap_or_else(|| Self::resting_value(property))
    }

    pub fn translation_y(&self, view: ViewId) -> f32 {
        self.value_of(view, ViewProperty::TranslationY)
    }
}

impl ViewAnimator for RecordingAnimator {
    fn set(&mut self, view: ViewId, property: ViewProperty, value: f32) {
        self.pending.remove(&(view, property));
        self.values.insert((view, property), value);
        self.commands.push(AnimatorCommand {
            view,
            property,
            value,
            spec: None,
        });
    }

    fn animate(&mut self, view: ViewId, property: ViewProperty, target: f32, spec: AnimationSpec) {
        self.pending.insert((view, property), target);
        self.commands.push(AnimatorCommand {
            view,
            property,
            value: target,
            spec: Some(spec),
        });
    }
}
