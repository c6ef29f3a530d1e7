use super::{GestureError, Point};

// Initial capacity of the live stroke buffer, in points
const INIT_BUFFER_SIZE: usize = 255;

// Growable, bounds-checked store of recorded points. Backs the live stroke;
// capacity at least doubles when the buffer is full and is retained by clear().
pub struct PointBuffer {
    points: Vec<Point>,
}

impl PointBuffer {
    pub fn new() -> PointBuffer {
        PointBuffer {
            points: Vec::with_capacity(INIT_BUFFER_SIZE),
        }
    }

    // Appends one point, growing the backing storage first if it is full.
    pub fn push(&mut self, x: u32, y: u32) -> Result<(), GestureError> {
        if self.points.len() == self.points.capacity() {
            let grow = usize::max(self.points.capacity(), 1);
            self.points
                .try_reserve(grow)
                .map_err(|_| GestureError::AllocationFailure)?;
        }
        self.points.push(Point { x: x, y: y });
        Ok(())
    }

    // Length goes to zero; capacity is kept for the next stroke.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    pub fn get(&self, ix: usize) -> Result<Point, GestureError> {
        if ix >= self.points.len() {
            return Err(GestureError::OutOfRange {
                index: ix,
                size: self.points.len(),
            });
        }
        Ok(self.points[ix])
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}
