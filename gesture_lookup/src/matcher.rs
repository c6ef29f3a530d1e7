use super::Point;

// Normalization parameters of one sequence: per-axis minima, and a single
// shared scale (the larger of the two axis spans) so aspect ratio survives.
struct NormParams {
    min_x: f32,
    min_y: f32,
    range: f32,
}

// Largest axis span of a sequence in raw coordinates.
// Zero means every point is identical.
pub(crate) fn bounding_span(points: &[Point]) -> u32 {
    let mut min_x = std::u32::MAX;
    let mut min_y = std::u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    for pt in points {
        if pt.x < min_x { min_x = pt.x; }
        if pt.x > max_x { max_x = pt.x; }
        if pt.y < min_y { min_y = pt.y; }
        if pt.y > max_y { max_y = pt.y; }
    }
    u32::max(max_x - min_x, max_y - min_y)
}

fn norm_params(points: &[Point]) -> NormParams {
    let mut min_x = std::f32::MAX;
    let mut min_y = std::f32::MAX;
    let mut max_x = std::f32::MIN;
    let mut max_y = std::f32::MIN;
    for pt in points {
        min_x = f32::min(min_x, pt.x as f32);
        max_x = f32::max(max_x, pt.x as f32);
        min_y = f32::min(min_y, pt.y as f32);
        max_y = f32::max(max_y, pt.y as f32);
    }
    let range = f32::max(max_x - min_x, max_y - min_y);
    NormParams {
        min_x: min_x,
        min_y: min_y,
        // A stroke with no span cannot be scaled; unit range keeps the cost defined
        range: if range > 0f32 { range } else { 1f32 },
    }
}

// Squared Euclidean distance between two points, each normalized with its own
// sequence's parameters. Makes the cost invariant to translation and uniform
// scale, but not rotation.
fn point_dist(p: Point, q: Point, np: &NormParams, nq: &NormParams) -> f32 {
    let x1 = ((p.x as f32) - np.min_x) / np.range;
    let y1 = ((p.y as f32) - np.min_y) / np.range;
    let x2 = ((q.x as f32) - nq.min_x) / nq.range;
    let y2 = ((q.y as f32) - nq.min_y) / nq.range;
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx * dx + dy * dy
}

// Accumulated-cost table for one comparison: a flat vector addressed
// row-major, so cell (row, col) lives at row * cols + col.
struct CostTable {
    cells: Vec<f32>,
    cols: usize,
}

impl CostTable {
    fn new(rows: usize, cols: usize) -> CostTable {
        CostTable {
            cells: vec![0f32; rows * cols],
            cols: cols,
        }
    }

    fn get(&self, row: usize, col: usize) -> f32 {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, val: f32) {
        self.cells[row * self.cols + col] = val;
    }
}

// Normalized dynamic-time-warping distance between two non-empty point
// sequences; lower is more similar. The recurrence takes only the two
// "insert" predecessors, (i-1, j) and (i, j-1); the diagonal step of
// textbook DTW is deliberately omitted.
pub fn sequence_dist(first: &[Point], second: &[Point]) -> f32 {
    assert!(
        !first.is_empty() && !second.is_empty(),
        "Expected two non-empty sequences."
    );
    let np = norm_params(first);
    let nq = norm_params(second);
    let m = first.len();
    let n = second.len();
    let mut table = CostTable::new(m, n);
    table.set(0, 0, point_dist(first[0], second[0], &np, &nq));
    // First column: cumulative cost straight down the first sequence
    for i in 1..m {
        let d = point_dist(first[i], second[0], &np, &nq);
        table.set(i, 0, d + table.get(i - 1, 0));
    }
    // First row: cumulative cost straight along the second sequence
    for j in 1..n {
        let d = point_dist(first[0], second[j], &np, &nq);
        table.set(0, j, d + table.get(0, j - 1));
    }
    for i in 1..m {
        for j in 1..n {
            let d = point_dist(first[i], second[j], &np, &nq);
            let best = f32::min(table.get(i - 1, j), table.get(i, j - 1));
            table.set(i, j, d + best);
        }
    }
    // Average cost per aligned point pair
    table.get(m - 1, n - 1) / ((m * n) as f32)
}
