// ── Real-time capacity feed ──
//
// Simulated utilisation bars for the capacity chart. Values are
// percentages kept within [`CapacityFeed::MIN`, `CapacityFeed::MAX`].

use rand::Rng;

/// Rolling set of utilisation bars, one per chart column.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityFeed {
    bars: Vec<f64>,
}

impl CapacityFeed {
    pub const BARS: usize = 100;
    pub const MIN: f64 = 20.0;
    pub const MAX: f64 = 75.0;
    const STEP: f64 = 2.5;

    /// Seed the chart with a sine wave plus noise.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bars = (0..Self::BARS)
            .map(|i| {
                let phase = f64::from(u32::try_from(i).unwrap_or(u32::MAX)) * 0.15;
                let noise = rng.gen_range(0.0..30.0);
                (25.0 + 20.0 * phase.sin() + noise).clamp(Self::MIN, Self::MAX)
            })
            .collect();
        Self { bars }
    }

    /// Advance one refresh: every bar drifts by up to ±2.5.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for bar in &mut self.bars {
            *bar = (*bar + rng.gen_range(-Self::STEP..Self::STEP)).clamp(Self::MIN, Self::MAX);
        }
    }

    pub fn bars(&self) -> &[f64] {
        &self.bars
    }

    pub fn average(&self) -> f64 {
        if self.bars.is_empty() {
            return 0.0;
        }
        let count = f64::from(u32::try_from(self.bars.len()).unwrap_or(u32::MAX));
        self.bars.iter().sum::<f64>() / count
    }

    pub fn peak(&self) -> f64 {
        self.bars.iter().copied().fold(Self::MIN, f64::max)
    }
}
