use rand::Rng;

/// Capability to produce uniform reals in `[0, 1)`.
///
/// Randomness is injected through this trait rather than pulled from a global
/// generator, so runs are reproducible under a seeded source and tests can
/// script exact sample sequences.
pub trait UnitSource {
    /// Next uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f32;
}

/// Any `rand` generator is a `UnitSource`; `StdRng`, `SmallRng` and
/// `ThreadRng` all plug in directly.
impl<R: Rng> UnitSource for R {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Plays back a fixed sample sequence, then repeats its final value.
///
/// Tracks how many samples were drawn, so tests can assert on exact engine
/// behavior (e.g. attempt budgets).
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    samples: Vec<f32>,
    cursor: usize,
    draws: usize,
}

impl ScriptedSource {
    /// `samples` must be non-empty; each value must lie in `[0, 1)`.
    pub fn new(samples: Vec<f32>) -> Self {
        assert!(!samples.is_empty(), "ScriptedSource needs at least one sample");
        assert!(
            samples.iter().all(|s| (0.0..1.0).contains(s)),
            "ScriptedSource samples must lie in [0, 1)"
        );
        Self {
            samples,
            cursor: 0,
            draws: 0,
        }
    }

    /// Source that always returns `v`.
    pub fn constant(v: f32) -> Self {
        Self::new(vec![v])
    }

    /// Total samples drawn so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl UnitSource for ScriptedSource {
    fn next_unit(&mut self) -> f32 {
        let v = self.samples[self.cursor];
        if self.cursor + 1 < self.samples.len() {
            self.cursor += 1;
        }
        self.draws += 1;
        v
    }
}
