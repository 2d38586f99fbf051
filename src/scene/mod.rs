//! Group and scene composition. A group is just an ordered list of
//! animators, a scene an ordered list of groups; stepping either means
//! walking the list in order, strictly serially. No ring shares state with
//! any other, so there is nothing to coordinate.
use log::debug;

use crate::animator::{Frame, RingAnimator};
use crate::config::{GroupConfig, SceneConfig};
use crate::errors::ConfigError;

/// An ordered, fixed-length set of rings animated together. The length is
/// fixed for the group's lifetime; adding or removing a ring means building
/// a new group from a new config.
#[derive(Debug, Clone)]
pub struct RingGroup {
    animators: Vec<RingAnimator>,
}

impl RingGroup {
    pub fn new(config: &GroupConfig) -> Result<RingGroup, ConfigError> {
        let animators = config
            .rings
            .iter()
            .map(|ring| RingAnimator::new(ring.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Built ring group with {} rings", animators.len());
        Ok(RingGroup { animators })
    }

    pub fn len(&self) -> usize {
        self.animators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animators.is_empty()
    }

    pub fn animators(&self) -> &[RingAnimator] {
        &self.animators
    }

    /// One tick for the whole group: every ring's pre-advance frame, in
    /// ring order, each ring advanced after its frame is taken.
    pub fn frames_and_advance(&mut self) -> Vec<Frame> {
        self.animators
            .iter_mut()
            .map(|ring| ring.frame_and_advance())
            .collect()
    }
}

/// The full drawing: an ordered list of groups, iterated the same way as
/// the rings within them, one level up.
#[derive(Debug, Clone)]
pub struct Scene {
    groups: Vec<RingGroup>,
}

impl Scene {
    pub fn new(config: &SceneConfig) -> Result<Scene, ConfigError> {
        let groups = config
            .groups
            .iter()
            .map(RingGroup::new)
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Built scene with {} groups", groups.len());
        Ok(Scene { groups })
    }

    pub fn groups(&self) -> &[RingGroup] {
        &self.groups
    }

    /// One tick for the whole scene, nested in group order then ring order.
    pub fn frames_and_advance(&mut self) -> Vec<Vec<Frame>> {
        self.groups
            .iter_mut()
            .map(|group| group.frames_and_advance())
            .collect()
    }
}
