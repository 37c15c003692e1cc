/// Folds trial outcomes into a running statistic in O(1) time and memory.
pub trait Accumulator<O> {
    fn update(&mut self, outcome: O);

    /// `None` until at least one qualifying trial has been seen.
    fn current_value(&self) -> Option<f64>;

    fn qualifying(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatioAccumulator {
    numerator: u64,
    denominator: u64,
}

impl RatioAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }
}

impl Accumulator<bool> for RatioAccumulator {
    #[inline]
    fn update(&mut self, hit: bool) {
        self.denominator += 1;
        if hit {
            self.numerator += 1;
        }
    }

    fn current_value(&self) -> Option<f64> {
        if self.denominator == 0 {
            None
        } else {
            Some(self.numerator as f64 / self.denominator as f64)
        }
    }

    fn qualifying(&self) -> u64 {
        self.denominator
    }
}

/// `None` marks a trial excluded from both numerator and denominator.
impl Accumulator<Option<bool>> for RatioAccumulator {
    #[inline]
    fn update(&mut self, outcome: Option<bool>) {
        if let Some(hit) = outcome {
            Accumulator::<bool>::update(self, hit);
        }
    }

    fn current_value(&self) -> Option<f64> {
        Accumulator::<bool>::current_value(self)
    }

    fn qualifying(&self) -> u64 {
        self.denominator
    }
}

/// Running arithmetic mean using `(mean * n + x) / (n + 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanAccumulator {
    mean: f64,
    count: u64,
}

impl MeanAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Accumulator<f64> for MeanAccumulator {
    #[inline]
    fn update(&mut self, x: f64) {
        let n = self.count as f64;
        self.mean = (self.mean * n + x) / (n + 1.0);
        self.count += 1;
    }

    fn current_value(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    fn qualifying(&self) -> u64 {
        self.count
    }
}

impl Accumulator<u64> for MeanAccumulator {
    #[inline]
    fn update(&mut self, x: u64) {
        Accumulator::<f64>::update(self, x as f64);
    }

    fn current_value(&self) -> Option<f64> {
        Accumulator::<f64>::current_value(self)
    }

    fn qualifying(&self) -> u64 {
        self.count
    }
}
