//! One-shot delete tool

use crate::catalog::Catalog;
use crate::scene::{SceneGraph, SceneHit, SceneNodeId};

/// What a removal attempt did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Trigger was not armed
    NotArmed,
    /// Nothing under the pointer; still armed
    Missed,
    /// Target can never be removed; still armed
    Protected(SceneNodeId),
    /// Target subtree removed; trigger disarmed
    Removed(SceneNodeId),
}

/// Armed by the UI, consumed by the next successful removal.
#[derive(Clone, Copy, Debug, Default)]
pub struct RemovalTrigger {
    armed: bool,
}

impl RemovalTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Remove the top-level object owning the hit node.
    pub fn try_remove(&mut self, scene: &mut SceneGraph, catalog: &Catalog, hit: Option<&SceneHit>) -> RemovalOutcome {
        if !self.armed {
            return RemovalOutcome::NotArmed;
        }
        let Some(hit) = hit else {
            return RemovalOutcome::Missed;
        };

        let target = hit.root_object;
        let Some(node) = scene.get(target) else {
            return RemovalOutcome::Missed;
        };
        let protected_kind = node
            .content
            .prop_kind()
            .and_then(|name| catalog.get(name))
            .is_some_and(|kind| kind.protected);
        if node.content.is_fixture() || protected_kind {
            log::debug!("Refusing to remove protected object '{}'", node.name);
            return RemovalOutcome::Protected(target);
        }

        log::info!("Removed '{}' ({:?})", node.name, target);
        scene.remove(target);
        self.armed = false;
        RemovalOutcome::Removed(target)
    }
}
