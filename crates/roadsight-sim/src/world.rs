//! [`SimWorld`] – id-keyed registry of simulator actors.
//!
//! The ground-truth source for the perception layer.  Actors are spawned by
//! tests, config seeding, or a bridge layer; the perception tick then asks
//! for every actor of a given kind and builds records from the snapshots.
//!
//! # Example
//!
//! ```rust
//! use roadsight_sim::{ActorKind, SimActor, SimTransform, SimWorld};
//!
//! let mut world = SimWorld::new();
//! world.spawn(SimActor::speed_limit_sign(1, 30, SimTransform::at(0.0, 0.0, 0.0)));
//! world.spawn(SimActor::speed_limit_sign(2, 60, SimTransform::at(50.0, 0.0, 0.0)));
//!
//! let signs = world.actors_of_kind(ActorKind::TrafficSign);
//! assert_eq!(signs.len(), 2);
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use crate::actor::{ActorKind, SimActor};

/// Queryable registry of every actor currently alive in the simulation.
///
/// Keyed by actor id in a `BTreeMap` so that by-kind queries come back in a
/// stable id order across runs.
#[derive(Debug, Default)]
pub struct SimWorld {
    actors: BTreeMap<i64, SimActor>,
}

impl SimWorld {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an actor to the world.  An existing actor with the same id is
    /// replaced, matching simulator respawn semantics.
    pub fn spawn(&mut self, actor: SimActor) {
        debug!(id = actor.id(), type_id = actor.type_id(), "spawning actor");
        self.actors.insert(actor.id(), actor);
    }

    /// Look up a single actor by id.
    pub fn actor(&self, id: i64) -> Option<&SimActor> {
        self.actors.get(&id)
    }

    /// All actors of the given kind, in ascending id order.
    pub fn actors_of_kind(&self, kind: ActorKind) -> Vec<&SimActor> {
        self.actors.values().filter(|a| a.kind() == kind).collect()
    }

    /// Number of actors currently in the world.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Whether the world holds no actors.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
