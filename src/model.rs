use serde::{Deserialize, Serialize};

use crate::error::{Result, ScatterError};

/// Width/height pair in canvas units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
    /// Square size for a circle of diameter `d`.
    pub fn splat(d: f32) -> Self {
        Self {
            width: d,
            height: d,
        }
    }
}

/// Position relative to the canvas origin (top-left), in canvas units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box. `origin` is top-left; dimensions are strictly positive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub origin: Point,
    pub size: Size,
}

impl BoundingBox {
    /// Builds a box, rejecting non-positive dimensions.
    pub fn new(origin: Point, size: Size) -> Result<Self> {
        if !(size.width > 0.0) || !(size.height > 0.0) {
            return Err(ScatterError::InvalidGeometry {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self { origin, size })
    }

    /// Exclusive right edge coordinate (`x + w`).
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }
    /// Exclusive bottom edge coordinate (`y + h`).
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }
    pub fn area(&self) -> f32 {
        self.size.width * self.size.height
    }

    /// Returns true iff `self` and `other` intersect with positive area.
    ///
    /// Strict-inequality test: boxes that merely share an edge do not overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.origin.x < other.right()
            && self.right() > other.origin.x
            && self.origin.y < other.bottom()
            && self.bottom() > other.origin.y
    }
}

/// One circular item to place: an opaque payload plus its diameter.
///
/// The engine never inspects `payload`; it is carried through to the outcome
/// unchanged (typically color/label/icon data owned by the renderer).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item<P> {
    pub payload: P,
    pub diameter: f32,
}

impl<P> Item<P> {
    pub fn new(payload: P, diameter: f32) -> Self {
        Self { payload, diameter }
    }
}

/// A successfully placed item: the input item plus its accepted bounding box.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Placement<P> {
    pub item: Item<P>,
    pub rect: BoundingBox,
}

/// Per-item result: either placed at a concrete box, or skipped because no
/// non-overlapping position was found within the attempt budget.
///
/// `Skipped` is an expected outcome on dense canvases, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Outcome<P> {
    Placed(Placement<P>),
    Skipped(Item<P>),
}

impl<P> Outcome<P> {
    pub fn is_placed(&self) -> bool {
        matches!(self, Outcome::Placed(_))
    }
    pub fn rect(&self) -> Option<&BoundingBox> {
        match self {
            Outcome::Placed(p) => Some(&p.rect),
            Outcome::Skipped(_) => None,
        }
    }
    pub fn item(&self) -> &Item<P> {
        match self {
            Outcome::Placed(p) => &p.item,
            Outcome::Skipped(it) => it,
        }
    }
}

/// Ordered outcomes of one scatter run, index-aligned with the input items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacementResult<P> {
    pub outcomes: Vec<Outcome<P>>,
    /// Canvas dimensions the run was performed against.
    pub canvas: Size,
}

impl<P> PlacementResult<P> {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
    /// Iterator over successful placements, in input order.
    pub fn placements(&self) -> impl Iterator<Item = &Placement<P>> {
        self.outcomes.iter().filter_map(|o| match o {
            Outcome::Placed(p) => Some(p),
            Outcome::Skipped(_) => None,
        })
    }
    /// Iterator over items that could not be placed, in input order.
    pub fn skipped(&self) -> impl Iterator<Item = &Item<P>> {
        self.outcomes.iter().filter_map(|o| match o {
            Outcome::Skipped(it) => Some(it),
            Outcome::Placed(_) => None,
        })
    }

    /// Computes placement statistics for this run.
    pub fn stats(&self) -> ScatterStats {
        let num_items = self.outcomes.len();
        let mut num_placed = 0;
        let mut covered_area = 0f64;
        for o in &self.outcomes {
            if let Outcome::Placed(p) = o {
                num_placed += 1;
                covered_area += p.rect.area() as f64;
            }
        }
        let canvas_area = (self.canvas.width as f64) * (self.canvas.height as f64);
        let occupancy = if canvas_area > 0.0 {
            covered_area / canvas_area
        } else {
            0.0
        };
        ScatterStats {
            num_items,
            num_placed,
            num_skipped: num_items - num_placed,
            canvas_area,
            covered_area,
            occupancy,
        }
    }
}

/// Statistics about how much of the canvas a run managed to fill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScatterStats {
    /// Total number of input items.
    pub num_items: usize,
    /// Items that received a position.
    pub num_placed: usize,
    /// Items skipped after exhausting the attempt budget.
    pub num_skipped: usize,
    /// Canvas area (width * height).
    pub canvas_area: f64,
    /// Summed area of accepted bounding boxes.
    pub covered_area: f64,
    /// covered_area / canvas_area (0.0 to 1.0). Boxes never overlap, so this
    /// is a true coverage ratio.
    pub occupancy: f64,
}

impl ScatterStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Items: {}, Placed: {}, Skipped: {}, Occupancy: {:.2}%, Canvas: {:.0} u², Covered: {:.0} u²",
            self.num_items,
            self.num_placed,
            self.num_skipped,
            self.occupancy * 100.0,
            self.canvas_area,
            self.covered_area,
        )
    }
}
