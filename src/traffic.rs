use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, GraphError};

/// Road conditions a travel time estimate accounts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum TrafficCondition {
    Normal,
    RushHour,
    AccidentZone,
}

impl TrafficCondition {
    /// Multiplier applied to the free-flow travel time.
    pub fn congestion_factor(&self) -> f64 {
        match self {
            TrafficCondition::Normal => 1.0,
            TrafficCondition::RushHour => 1.5,
            TrafficCondition::AccidentZone => 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TravelEstimate {
    pub distance: Distance,
    pub hours: f64,
}

/// Travel time for a computed distance at the given speed, scaled by the
/// congestion factor of the traffic condition. The distance itself is never
/// reweighted.
pub fn estimate_travel_time(
    distance: Distance,
    speed: f64,
    condition: TrafficCondition,
) -> Result<TravelEstimate, GraphError> {
    if !speed.is_finite() || speed <= 0.0 {
        return Err(GraphError::InvalidSpeed(speed));
    }

    Ok(TravelEstimate {
        distance,
        hours: distance / speed * condition.congestion_factor(),
    })
}
