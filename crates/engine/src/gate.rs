//! Entry/exit gates
//!
//! A gate is one concurrent caller identity bound to a lot: stateless beyond
//! its id and the shared lot reference, cheap to clone, safe to drive from
//! its own thread. Gates do not retry and do not queue; a rejected vehicle
//! must re-request.

use crate::lot::Lot;
use carpark_core::error::Result;
use carpark_core::types::{Placement, VehicleClass};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Unique identifier for a gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GateId(Uuid);

impl GateId {
    /// Create a new random gate id
    pub fn new() -> Self {
        GateId(Uuid::new_v4())
    }
}

impl Default for GateId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One physical entry/exit point.
///
/// Many gates may exist concurrently against the same lot; each carries its
/// own identity for tracing.
#[derive(Debug, Clone)]
pub struct Gate {
    id: GateId,
    lot: Arc<Lot>,
}

impl Gate {
    /// Create a gate bound to a lot
    pub fn new(lot: Arc<Lot>) -> Self {
        Self {
            id: GateId::new(),
            lot,
        }
    }

    /// This gate's identity
    pub fn id(&self) -> GateId {
        self.id
    }

    /// The lot this gate serves
    pub fn lot(&self) -> &Arc<Lot> {
        &self.lot
    }

    /// Admit a vehicle: find and claim a compatible spot.
    ///
    /// Synchronous, bounded only by lock contention. On exhaustion the
    /// caller gets [`carpark_core::Error::NoAvailableSpot`] and may retry.
    pub fn enter(&self, class: VehicleClass) -> Result<Placement> {
        match self.lot.park(class) {
            Ok(placement) => {
                info!(gate = %self.id, %class, %placement, "vehicle parked");
                Ok(placement)
            }
            Err(err) => {
                debug!(gate = %self.id, %class, "entry rejected: {err}");
                Err(err)
            }
        }
    }

    /// Let a vehicle out, freeing the spot named by a prior [`Gate::enter`].
    pub fn exit(&self, placement: Placement) -> Result<()> {
        self.lot.release(placement)?;
        info!(gate = %self.id, %placement, "vehicle exited");
        Ok(())
    }
}
