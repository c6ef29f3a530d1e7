use super::entities::Gesture;
use super::matcher;
use super::{GestureError, Point};

// Initial capacity of the template registry
const INIT_GESTURE_SIZE: usize = 15;

// Ordered store of registered templates. Ids are positions at insertion time
// and are never renumbered; templates cannot be removed.
pub struct GestureRegistry {
    gestures: Vec<Gesture>,
}

impl GestureRegistry {
    pub fn new() -> GestureRegistry {
        GestureRegistry {
            gestures: Vec::with_capacity(INIT_GESTURE_SIZE),
        }
    }

    // Copies the skeleton into a new template and returns its assigned id.
    // A rejected registration leaves the registry unchanged.
    pub fn register(&mut self, skeleton: &[Point]) -> Result<usize, GestureError> {
        if skeleton.is_empty() {
            return Err(GestureError::DegenerateTemplate {
                reason: "empty point list",
            });
        }
        if matcher::bounding_span(skeleton) == 0 {
            return Err(GestureError::DegenerateTemplate {
                reason: "all points identical",
            });
        }
        if self.gestures.len() == self.gestures.capacity() {
            let grow = usize::max(self.gestures.capacity(), 1);
            self.gestures
                .try_reserve(grow)
                .map_err(|_| GestureError::AllocationFailure)?;
        }
        let id = self.gestures.len();
        self.gestures.push(Gesture {
            id: id,
            skeleton: skeleton.to_vec(),
        });
        Ok(id)
    }

    pub fn get(&self, id: usize) -> Option<&Gesture> {
        self.gestures.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Gesture> {
        self.gestures.iter()
    }

    pub fn len(&self) -> usize {
        self.gestures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(raw: &[(u32, u32)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point { x: x, y: y }).collect()
    }

    #[test]
    fn test_sequential_ids() {
        let mut registry = GestureRegistry::new();
        // Well past the initial capacity, so ids survive registry growth too
        for k in 0..40u32 {
            let id = registry.register(&points(&[(0, 0), (k + 1, 0)])).unwrap();
            assert!(id == k as usize, "The k-th registration must be assigned id k.");
        }
        assert_eq!(registry.len(), 40);
        let gesture = registry.get(17).unwrap();
        assert_eq!(gesture.id, 17);
        assert_eq!(gesture.skeleton, points(&[(0, 0), (18, 0)]));
    }

    #[test]
    fn test_skeleton_is_copied() {
        let mut registry = GestureRegistry::new();
        let mut original = points(&[(0, 0), (5, 5)]);
        registry.register(&original).unwrap();
        // Mutating the caller's list must not reach the stored skeleton
        original[0] = Point { x: 99, y: 99 };
        assert_eq!(registry.get(0).unwrap().skeleton[0], Point { x: 0, y: 0 });
    }

    #[test]
    fn test_rejects_empty_template() {
        let mut registry = GestureRegistry::new();
        let err = registry.register(&[]).unwrap_err();
        assert_eq!(
            err,
            GestureError::DegenerateTemplate { reason: "empty point list" }
        );
        assert!(registry.is_empty(), "A failed registration must not commit anything.");
    }

    #[test]
    fn test_rejects_zero_range_template() {
        let mut registry = GestureRegistry::new();
        let err = registry.register(&points(&[(4, 4), (4, 4), (4, 4)])).unwrap_err();
        assert_eq!(
            err,
            GestureError::DegenerateTemplate { reason: "all points identical" }
        );
        // The next good registration still gets id 0
        let id = registry.register(&points(&[(0, 0), (1, 1)])).unwrap();
        assert_eq!(id, 0);
    }
}
