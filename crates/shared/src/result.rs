#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub puzzle: &'static str,
    pub seed: u64,
    pub trials: u64,
    pub qualifying: u64,
    pub value: f64,
    pub closed_form: f64,
    pub series: Option<Vec<Option<f64>>>,
}

impl Estimate {
    pub fn abs_error(&self) -> f64 {
        (self.value - self.closed_form).abs()
    }
}

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub results: Vec<Estimate>,
    pub total_trials: u64,
}

impl BatchResult {
    pub fn from_results(results: Vec<Estimate>) -> Self {
        let total_trials = results.iter().map(|r| r.trials).sum();
        Self {
            results,
            total_trials,
        }
    }

    pub fn n_runs(&self) -> usize {
        self.results.len()
    }

    pub fn mean_value(&self) -> f64 {
        if self.results.is_empty() {
            0.0
        } else {
            self.results.iter().map(|r| r.value).sum::<f64>() / self.results.len() as f64
        }
    }

    pub fn min_value(&self) -> Option<f64> {
        self.results.iter().map(|r| r.value).reduce(f64::min)
    }

    pub fn max_value(&self) -> Option<f64> {
        self.results.iter().map(|r| r.value).reduce(f64::max)
    }

    pub fn closed_form(&self) -> Option<f64> {
        self.results.first().map(|r| r.closed_form)
    }
}
