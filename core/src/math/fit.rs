use serde::{Deserialize, Serialize};

/// Empirical fit mapping the trigonometric distance estimate to ground distance.
///
/// `ground = sqrt_coeff * sqrt(x) + linear_coeff * x + intercept`, calibrated
/// against measured distances. Keep the coefficients exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundDistanceFit {
    pub sqrt_coeff: f64,
    pub linear_coeff: f64,
    pub intercept: f64,
}

impl Default for GroundDistanceFit {
    fn default() -> Self {
        Self {
            sqrt_coeff: 0.00462384837384838,
            linear_coeff: -2.70841658341659,
            intercept: 518.807692307693,
        }
    }
}

impl GroundDistanceFit {
    pub fn evaluate(&self, estimate: f64) -> f64 {
        self.sqrt_coeff * estimate.sqrt() + self.linear_coeff * estimate + self.intercept
    }
}
