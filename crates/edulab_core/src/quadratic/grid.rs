/// Evenly spaced x samples between two inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Grid for the `y = ax^2` page: narrow x range so steep curves stay visible
pub const BASIC_GRID: SampleGrid = SampleGrid::new(-2.0, 2.0, 400);

/// Grid for the `y = a(x-p)^2 + q` page; plotted through a [-5, 5] window
pub const STANDARD_GRID: SampleGrid = SampleGrid::new(-10.0, 10.0, 400);

impl SampleGrid {
    pub const fn new(start: f64, end: f64, count: usize) -> Self {
        Self { start, end, count }
    }

    pub fn spacing(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            (self.end - self.start) / (self.count - 1) as f64
        }
    }

    /// The `i`-th sample; the last one is exactly `end`
    pub fn point(&self, i: usize) -> f64 {
        if self.count >= 2 && i == self.count - 1 {
            self.end
        } else {
            self.start + i as f64 * self.spacing()
        }
    }

    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(|i| self.point(i))
    }
}
