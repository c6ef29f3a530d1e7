use super::entities::Match;
use super::matcher;
use super::point_buffer::PointBuffer;
use super::registry::GestureRegistry;
use super::{GestureError, Point};

// Owns the live stroke and the template registry; this is the entire
// persistent state of the recognizer. Single-threaded by design: every
// operation runs to completion before returning.
pub struct GestureEngine {
    stroke: PointBuffer,
    registry: GestureRegistry,
}

impl GestureEngine {
    pub fn new() -> GestureEngine {
        GestureEngine {
            stroke: PointBuffer::new(),
            registry: GestureRegistry::new(),
        }
    }

    // Records one pen-move sample. Returns the engine so event-handler code
    // can chain calls.
    pub fn add_point(&mut self, x: u32, y: u32) -> Result<&mut GestureEngine, GestureError> {
        self.stroke.push(x, y)?;
        Ok(self)
    }

    // Forgets the live stroke; registered templates are unaffected.
    pub fn clear(&mut self) -> &mut GestureEngine {
        self.stroke.clear();
        self
    }

    pub fn size(&self) -> usize {
        self.stroke.len()
    }

    pub fn get_point(&self, ix: usize) -> Result<Point, GestureError> {
        self.stroke.get(ix)
    }

    // Read-only view of the recorded stroke, for debugging and display
    pub fn points(&self) -> &[Point] {
        self.stroke.as_slice()
    }

    // Stores a copy of the point list as a new template and returns its id.
    // Independent of the live stroke.
    pub fn register_gesture(&mut self, skeleton: &[Point]) -> Result<usize, GestureError> {
        self.registry.register(skeleton)
    }

    pub fn registry(&self) -> &GestureRegistry {
        &self.registry
    }

    // Ranks every stored template against the live stroke and returns the
    // closest one. Strict < comparison: on an exact tie the earlier-registered
    // template keeps the win. Mutates nothing.
    pub fn recognize(&self) -> Result<Match, GestureError> {
        if self.registry.is_empty() {
            return Err(GestureError::NoTemplates);
        }
        if self.stroke.is_empty() {
            return Err(GestureError::EmptyStroke);
        }
        let mut min_id = 0;
        let mut min_dist = std::f32::MAX;
        for gesture in self.registry.iter() {
            let dist = matcher::sequence_dist(&gesture.skeleton, self.stroke.as_slice());
            if dist < min_dist {
                min_dist = dist;
                min_id = gesture.id;
            }
        }
        Ok(Match {
            id: min_id,
            distance: min_dist,
        })
    }
}
