use serde_derive::{Deserialize, Serialize};

use super::Point;

// One stored gesture template
#[derive(Debug)]
pub struct Gesture {
    // Registry index assigned at registration; never renumbered
    pub id: usize,
    // The template's points, copied at registration and immutable afterward
    pub skeleton: Vec<Point>,
}

// Result of a recognition pass
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Match {
    // Id of the closest template
    pub id: usize,
    // Its normalized DTW distance from the live stroke; lower is more similar
    pub distance: f32,
}
