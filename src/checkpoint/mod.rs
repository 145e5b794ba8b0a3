//! Checkpoint and resume of a simulation frontier.
//!
//! A checkpoint captures which states a run currently occupies, so that a
//! long input stream can be suspended and resumed later, possibly in
//! another process that rebuilt the same automaton. Structure (transitions
//! and markers) is never captured; it is rebuilt by the same builder.

use crate::core::StateId;
use crate::engine::Automaton;
use crate::store::StoreFactory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of an automaton's active states.
///
/// # Example
///
/// ```rust
/// use frontier::checkpoint::Checkpoint;
/// use frontier::engine::Automaton;
/// use frontier::store::SymbolFactory;
///
/// let mut nfa: Automaton<_, &str> = Automaton::new(SymbolFactory::<char>::new());
/// let s0 = nfa.new_state();
/// let s1 = nfa.new_state();
/// nfa.new_transition(s0, s1, 'a').unwrap();
/// nfa.reset();
/// nfa.step(&'a');
///
/// let json = nfa.checkpoint().to_json().unwrap();
///
/// nfa.reset();
/// nfa.restore(&Checkpoint::from_json(&json).unwrap()).unwrap();
/// assert!(nfa.active_states().contains(&s1));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// State count of the automaton the checkpoint was taken from
    pub state_count: usize,

    /// Active states in ascending order
    pub active: Vec<StateId>,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    fn validate(&self, state_count: usize) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if self.state_count != state_count {
            return Err(CheckpointError::ValidationFailed(format!(
                "checkpoint taken from an automaton with {} states, restoring into {}",
                self.state_count, state_count
            )));
        }
        Ok(())
    }
}

impl<F: StoreFactory, M> Automaton<F, M> {
    /// Capture the current frontier.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state_count: self.state_count(),
            active: self.active_states().iter().copied().collect(),
        }
    }

    /// Resume from a checkpoint.
    ///
    /// The frontier is replaced by the checkpoint's states and closed. On
    /// any error the frontier is left as it was.
    pub fn restore(&mut self, checkpoint: &Checkpoint) -> Result<(), CheckpointError> {
        if let Err(e) = checkpoint.validate(self.state_count()) {
            warn!(id = %checkpoint.id, error = %e, "rejected checkpoint");
            return Err(e);
        }
        self.set_active_states(checkpoint.active.iter().copied())?;
        debug!(id = %checkpoint.id, active = checkpoint.active.len(), "restored checkpoint");
        Ok(())
    }
}
