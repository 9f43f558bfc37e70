//! The population arena.

use epi_core::{AgentId, ContactMatrix, EpiResult, GroupId};

use crate::{Agent, AgentTraits};

/// All agents in a simulation, in creation order.
///
/// The arena is append-only: agents are never removed, so an [`AgentId`] is
/// a stable index for the simulation's lifetime.  The engine owns the arena
/// and mutates agents in place each day; collaborators read aggregate
/// counts, never individual agents.
#[derive(Default)]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` agents of `group`, each holding that group's row of the
    /// contact matrix.  Fails if the group is not in the matrix.
    pub fn spawn(
        &mut self,
        n: usize,
        group: GroupId,
        matrix: &ContactMatrix,
        traits: AgentTraits,
    ) -> EpiResult<()> {
        let row = matrix.row(group)?.to_vec();
        self.agents
            .extend((0..n).map(|_| Agent::new(group, row.clone(), traits)));
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn agent(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }

    #[inline]
    pub fn agent_mut(&mut self, id: AgentId) -> &mut Agent {
        &mut self.agents[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> {
        self.agents.iter_mut()
    }
}
