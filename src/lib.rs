//! Core library for scattering circular items over a bounded canvas.
//!
//! - Placement is randomized trial-and-retry: each item gets up to
//!   `max_attempts` uniformly sampled positions and the first one whose
//!   bounding box overlaps no previously accepted box wins.
//! - Items that run out of attempts are reported as `Skipped`, never as an
//!   error; dense canvases are expected to skip.
//! - Randomness is injected via [`rng::UnitSource`]; any `rand::Rng` works.
//!
//! Quick example:
//! ```
//! use circle_scatter::{Item, ScatterConfig, SizeClass, scatter};
//! use rand::SeedableRng;
//!
//! # fn main() -> circle_scatter::Result<()> {
//! let items = vec![
//!     Item::with_class("red", SizeClass::Large),
//!     Item::with_class("blue", SizeClass::Medium),
//!     Item::with_class("gray", SizeClass::Small),
//! ];
//! let cfg = ScatterConfig::builder().with_canvas(360.0, 400.0).build();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let result = scatter(items, cfg, &mut rng)?;
//! println!("{}", result.stats().summary());
//! # Ok(()) }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod model;
pub mod rng;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use export::*;
pub use model::*;

/// Convenience prelude for common types and functions.
/// Importing `circle_scatter::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{ScatterConfig, ScatterConfigBuilder, SizeClass};
    pub use crate::engine::{ScatterEngine, scatter};
    pub use crate::error::{Result, ScatterError};
    pub use crate::export::to_json;
    pub use crate::model::{
        BoundingBox, Item, Outcome, Placement, PlacementResult, Point, ScatterStats, Size,
    };
    pub use crate::rng::{ScriptedSource, UnitSource};
}
