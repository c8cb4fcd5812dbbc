//! Model selectors and value classification.

use std::fmt;
use std::str::FromStr;

/// Selector for one of the four penetration processes.
///
/// `FromStr` accepts the snake_case name, its kebab-case form and a short
/// alias (`bernoulli`, `walk`, `poisson`, `diffusion`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModelKind {
    /// Count of successful attempts, one Bernoulli trial per step.
    BernoulliAccumulation,
    /// ±1 walk driven by a Bernoulli trial per step.
    SymmetricRandomWalk,
    /// Discrete-time approximation of a Poisson counting process.
    PoissonJumpApproximation,
    /// ±sqrt(dt) walk approximating a diffusion limit.
    ScaledRandomWalkDiffusion,
}

impl ModelKind {
    /// All model kinds, in presentation order.
    pub const ALL: [ModelKind; 4] = [
        ModelKind::BernoulliAccumulation,
        ModelKind::SymmetricRandomWalk,
        ModelKind::PoissonJumpApproximation,
        ModelKind::ScaledRandomWalkDiffusion,
    ];

    /// Canonical snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::BernoulliAccumulation => "bernoulli_accumulation",
            ModelKind::SymmetricRandomWalk => "symmetric_random_walk",
            ModelKind::PoissonJumpApproximation => "poisson_jump_approximation",
            ModelKind::ScaledRandomWalkDiffusion => "scaled_random_walk_diffusion",
        }
    }

    /// One-line description of the update rule.
    pub fn description(&self) -> &'static str {
        match self {
            ModelKind::BernoulliAccumulation => "v + 1 if u < p, else v",
            ModelKind::SymmetricRandomWalk => "v + 1 if u < p, else v - 1 (optionally / n)",
            ModelKind::PoissonJumpApproximation => "v + 1 if u < rate * dt, else v",
            ModelKind::ScaledRandomWalkDiffusion => "v ± sqrt(dt), + if u < p",
        }
    }

    /// Parameter names read by this model besides the step count.
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            ModelKind::BernoulliAccumulation => &["success_probability"],
            ModelKind::SymmetricRandomWalk => &["success_probability", "relative"],
            ModelKind::PoissonJumpApproximation => &["rate"],
            ModelKind::ScaledRandomWalkDiffusion => &["jump_probability"],
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown model name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownModelKind(pub String);

impl fmt::Display for UnknownModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown model '{}'. Supported: bernoulli, walk, poisson, diffusion",
            self.0
        )
    }
}

impl std::error::Error for UnknownModelKind {}

impl FromStr for ModelKind {
    type Err = UnknownModelKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "bernoulli" | "bernoulli_accumulation" => Ok(ModelKind::BernoulliAccumulation),
            "walk" | "random_walk" | "symmetric_random_walk" => Ok(ModelKind::SymmetricRandomWalk),
            "poisson" | "poisson_jump_approximation" => Ok(ModelKind::PoissonJumpApproximation),
            "diffusion" | "scaled_random_walk_diffusion" => {
                Ok(ModelKind::ScaledRandomWalkDiffusion)
            }
            _ => Err(UnknownModelKind(s.to_string())),
        }
    }
}

/// Nature of the values a model produces.
///
/// Decides how final values are bucketed into a histogram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueKind {
    /// Integer-valued; buckets by exact equality.
    Discrete,
    /// Real-valued; buckets by fixed-width bins.
    Continuous,
}

impl ValueKind {
    /// Returns true for integer-valued models.
    #[inline]
    pub fn is_discrete(&self) -> bool {
        matches!(self, ValueKind::Discrete)
    }
}
