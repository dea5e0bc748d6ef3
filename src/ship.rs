//! Ship types and the straight runs of cells they cover.

/// Orientation of a ship on the ocean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other axis.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A straight run of `length` cells starting at an anchor.
///
/// Runs are only a placement-time view; once committed the grid keeps
/// nothing but per-cell occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipRun {
    x: usize,
    y: usize,
    orientation: Orientation,
    length: usize,
}

impl ShipRun {
    pub fn new(x: usize, y: usize, orientation: Orientation, length: usize) -> Self {
        Self {
            x,
            y,
            orientation,
            length,
        }
    }

    /// Anchor of the run (x, y).
    pub fn origin(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether the whole run lies inside a `width × height` ocean.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                self.y < height && self.length <= width && self.x <= width - self.length
            }
            Orientation::Vertical => {
                self.x < width && self.length <= height && self.y <= height - self.length
            }
        }
    }

    /// Cells covered by the run, anchor first.
    ///
    /// Coordinates saturate at `usize::MAX`; check [`ShipRun::fits`] before use.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (x, y, orientation) = (self.x, self.y, self.orientation);
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => (x.saturating_add(i), y),
            Orientation::Vertical => (x, y.saturating_add(i)),
        })
    }
}
