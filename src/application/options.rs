//! Options shared by every use case that renders artifacts

use crate::config::Profile;
use crate::domain::ports::ResourceStore;
use crate::domain::services::{Embedder, DEFAULT_GENERATOR};
use crate::domain::value_objects::CollisionPolicy;

/// How artifacts are rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Name written into the provenance comment
    pub generated_by: String,
    pub collision_policy: CollisionPolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            generated_by: DEFAULT_GENERATOR.to_string(),
            collision_policy: CollisionPolicy::default(),
        }
    }
}

impl RenderOptions {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            generated_by: profile.generated_by.clone(),
            collision_policy: profile.on_collision,
        }
    }

    pub(crate) fn embedder<'a, S: ResourceStore + ?Sized>(&self, store: &'a S) -> Embedder<'a, S> {
        Embedder::new(store)
            .with_generated_by(self.generated_by.clone())
            .with_collision_policy(self.collision_policy)
    }
}
