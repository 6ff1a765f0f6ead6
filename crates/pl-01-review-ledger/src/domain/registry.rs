//! Actor registry: reputation and activity counters per actor.

use super::entities::{Actor, ActorId};
use std::collections::HashMap;

/// Actors keyed by identity. Entries are created lazily and never removed.
#[derive(Debug, Default, Clone)]
pub struct ActorRegistry {
    actors: HashMap<ActorId, Actor>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    /// Verified status the actor has, or would get if created now.
    ///
    /// Does not insert anything, so a rejected operation leaves the
    /// registry as it found it.
    pub fn resolve_verified(&self, id: &ActorId, on_create: impl FnOnce() -> bool) -> bool {
        match self.actors.get(id) {
            Some(actor) => actor.verified,
            None => on_create(),
        }
    }

    /// Existing actor, or a new one with zero counters.
    ///
    /// `verified` is only used when the actor is created.
    pub fn get_or_create(&mut self, id: &ActorId, verified: bool) -> &mut Actor {
        self.actors
            .entry(id.clone())
            .or_insert_with(|| Actor::new(id.clone(), verified))
    }

    pub fn record_submission(&mut self, id: &ActorId, verified: bool) {
        let actor = self.get_or_create(id, verified);
        actor.papers_submitted = actor.papers_submitted.saturating_add(1);
    }

    pub fn record_review(&mut self, id: &ActorId, verified: bool, reward: u64) {
        let actor = self.get_or_create(id, verified);
        actor.reviews_completed = actor.reviews_completed.saturating_add(1);
        actor.reputation = actor.reputation.saturating_add(reward);
    }

    pub fn record_publication_reward(&mut self, id: &ActorId, reward: u64) {
        // Authors always exist by the time their paper publishes.
        let actor = self.get_or_create(id, true);
        actor.reputation = actor.reputation.saturating_add(reward);
    }

    /// Reputation of `id`; unknown actors have 0.
    pub fn reputation(&self, id: &ActorId) -> u64 {
        self.actors.get(id).map_or(0, |a| a.reputation)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    /// Sum of every actor's reputation.
    pub fn total_reputation(&self) -> u64 {
        self.actors
            .values()
            .fold(0u64, |acc, a| acc.saturating_add(a.reputation))
    }
}
