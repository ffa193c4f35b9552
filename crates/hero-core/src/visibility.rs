use crate::animation::{AnimationLoop, FrameScheduler};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateTransition {
    Unchanged,
    Pause,
    Resume,
}

/// Pauses the hero loop while its section is scrolled out of view.
///
/// Fed by an intersection observer; repeated signals with the same value
/// are no-ops, so the loop is never stopped or started twice.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityGate {
    visible: bool,
    paused: bool,
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self {
            visible: true,
            paused: false,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn observe(&mut self, visible: bool) -> GateTransition {
        self.visible = visible;
        match (visible, self.paused) {
            (true, true) => {
                self.paused = false;
                GateTransition::Resume
            }
            (false, false) => {
                self.paused = true;
                GateTransition::Pause
            }
            _ => GateTransition::Unchanged,
        }
    }

    /// Observe a visibility signal and start or stop `animation` accordingly.
    pub fn apply<S: FrameScheduler + ?Sized>(
        &mut self,
        visible: bool,
        animation: &mut AnimationLoop,
        scheduler: &mut S,
    ) -> GateTransition {
        let transition = self.observe(visible);
        match transition {
            GateTransition::Pause => {
                animation.stop(scheduler);
                log::info!("[gate] hero hidden, animation paused");
            }
            GateTransition::Resume => {
                animation.start(scheduler);
                log::info!("[gate] hero visible, animation resumed");
            }
            GateTransition::Unchanged => {}
        }
        transition
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_only_on_change() {
        let mut gate = VisibilityGate::new();
        assert_eq!(gate.observe(true), GateTransition::Unchanged);
        assert_eq!(gate.observe(false), GateTransition::Pause);
        assert_eq!(gate.observe(false), GateTransition::Unchanged);
        assert!(gate.is_paused());
        assert_eq!(gate.observe(true), GateTransition::Resume);
        assert_eq!(gate.observe(true), GateTransition::Unchanged);
        assert!(!gate.is_paused());
    }
}
