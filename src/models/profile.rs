use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Biological sex used to select the BMR equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Weekly activity level, mapped to a TDEE multiplier by the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise.
    Sedentary,
    /// Light exercise 1-3 days a week.
    Light,
    /// Moderate exercise 3-5 days a week.
    Moderate,
    /// Hard exercise 6-7 days a week.
    Heavy,
    /// Physical job or training twice a day.
    Extra,
}

/// Weight goal; shifts the maintenance target by a fixed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Loss,
    Maintenance,
    Gain,
}

/// Immutable input to the calorie estimator.
///
/// Range checks happen in the form layer (`interface::form`) before one of
/// these is built; the estimator trusts whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricProfile {
    pub age_years: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Heavy,
        ActivityLevel::Extra,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Heavy => "heavy",
            ActivityLevel::Extra => "extra",
        }
    }
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Loss, Goal::Maintenance, Goal::Gain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Loss => "loss",
            Goal::Maintenance => "maintenance",
            Goal::Gain => "gain",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(format!("unknown gender '{}'", other)),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == needle)
            .ok_or_else(|| format!("unknown activity level '{}'", needle))
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == needle)
            .ok_or_else(|| format!("unknown goal '{}'", needle))
    }
}
