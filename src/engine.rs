use tracing::{debug, instrument, trace};

use crate::config::ScatterConfig;
use crate::error::{Result, ScatterError};
use crate::model::{BoundingBox, Item, Outcome, Placement, PlacementResult, Point, Size};
use crate::rng::UnitSource;

/// Places circular items one at a time, keeping the accepted boxes of the
/// current run as the obstacle set for later items.
///
/// State is scoped to one run; drop the engine (or build a fresh one) to
/// start over. Holds no RNG: every call takes the caller's source.
pub struct ScatterEngine {
    config: ScatterConfig,
    placed: Vec<BoundingBox>,
}

impl ScatterEngine {
    pub fn new(config: ScatterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            placed: Vec::new(),
        })
    }

    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    /// Boxes accepted so far in this run, in placement order.
    pub fn placed(&self) -> &[BoundingBox] {
        &self.placed
    }

    /// Attempts up to `max_attempts` random positions for `item`, accepting
    /// the first trial box that overlaps no previously accepted box.
    ///
    /// Running out of attempts is not an error: the item comes back as
    /// `Outcome::Skipped` and later items are unaffected. `Err` is reserved
    /// for malformed input (non-positive or non-finite diameter).
    pub fn try_place<P, S: UnitSource + ?Sized>(
        &mut self,
        item: Item<P>,
        rng: &mut S,
    ) -> Result<Outcome<P>> {
        validate_diameter(item.diameter)?;
        let d = item.diameter;
        let span_x = self.config.canvas_width - d;
        let span_y = self.config.canvas_height - d;

        // A negative span means the item cannot fit in that dimension at all;
        // no valid sample exists, so the budget is exhausted without drawing
        // from the source. A zero span degenerates to coordinate 0.
        if span_x >= 0.0 && span_y >= 0.0 {
            for attempt in 1..=self.config.max_attempts {
                let x = rng.next_unit() * span_x;
                let y = rng.next_unit() * span_y;
                let trial = BoundingBox::new(Point::new(x, y), Size::splat(d))?;
                if !self.placed.iter().any(|b| b.overlaps(&trial)) {
                    self.placed.push(trial);
                    trace!(
                        attempt,
                        x = x as f64,
                        y = y as f64,
                        diameter = d as f64,
                        "placed"
                    );
                    return Ok(Outcome::Placed(Placement { item, rect: trial }));
                }
            }
        }
        debug!(
            diameter = d as f64,
            budget = self.config.max_attempts,
            "no free position within budget, skipping item"
        );
        Ok(Outcome::Skipped(item))
    }
}

fn validate_diameter(d: f32) -> Result<()> {
    if !d.is_finite() || d <= 0.0 {
        return Err(ScatterError::InvalidInput(format!(
            "item diameter must be positive and finite, got {d}"
        )));
    }
    Ok(())
}

#[instrument(skip_all)]
/// Scatters `items` over the canvas described by `config`, returning one
/// outcome per item in input order.
///
/// Notes:
/// - All input is validated before any placement runs; a malformed canvas,
///   budget or diameter fails the whole call with no partial result.
/// - Given the same `config`, `items` and source sample sequence, the result
///   is identical run to run.
/// - An empty `items` list is well-formed and yields an empty result.
pub fn scatter<P, S: UnitSource + ?Sized>(
    items: Vec<Item<P>>,
    config: ScatterConfig,
    rng: &mut S,
) -> Result<PlacementResult<P>> {
    config.validate()?;
    for item in &items {
        validate_diameter(item.diameter)?;
    }

    let canvas = Size::new(config.canvas_width, config.canvas_height);
    let mut engine = ScatterEngine::new(config)?;
    let mut outcomes = Vec::with_capacity(items.len());
    for item in items {
        outcomes.push(engine.try_place(item, rng)?);
    }
    Ok(PlacementResult { outcomes, canvas })
}
