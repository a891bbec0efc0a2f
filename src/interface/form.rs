use crate::error::{NutriError, Result};
use crate::estimator;
use crate::models::{ActivityLevel, BiometricProfile, Gender, Goal};

/// Partially filled biometric form.
///
/// The estimator is only invoked once every field is present and in range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub age_years: Option<u32>,
    pub gender: Option<Gender>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
}

impl ProfileForm {
    /// Names of fields still missing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.age_years.is_none() {
            missing.push("age");
        }
        if self.gender.is_none() {
            missing.push("gender");
        }
        if self.height_cm.is_none() {
            missing.push("height");
        }
        if self.weight_kg.is_none() {
            missing.push("weight");
        }
        if self.activity_level.is_none() {
            missing.push("activity level");
        }
        if self.goal.is_none() {
            missing.push("goal");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Validate the form into a profile.
    pub fn complete(&self) -> Result<BiometricProfile> {
        let (
            Some(age_years),
            Some(gender),
            Some(height_cm),
            Some(weight_kg),
            Some(activity_level),
            Some(goal),
        ) = (
            self.age_years,
            self.gender,
            self.height_cm,
            self.weight_kg,
            self.activity_level,
            self.goal,
        )
        else {
            return Err(NutriError::InvalidInput(format!(
                "Missing fields: {}",
                self.missing_fields().join(", ")
            )));
        };

        if age_years == 0 {
            return Err(NutriError::InvalidInput("Age must be positive".to_string()));
        }
        check_positive("Height", height_cm)?;
        check_positive("Weight", weight_kg)?;

        Ok(BiometricProfile {
            age_years,
            gender,
            height_cm,
            weight_kg,
            activity_level,
            goal,
        })
    }

    /// Daily target if the form is complete and valid.
    ///
    /// Call again after any field change.
    pub fn estimate(&self) -> Option<i64> {
        self.complete()
            .ok()
            .map(|profile| estimator::estimate_daily_calories(&profile))
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(NutriError::InvalidInput(format!(
            "{} must be a positive number",
            name
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> ProfileForm {
        ProfileForm {
            age_years: Some(30),
            gender: Some(Gender::Male),
            height_cm: Some(180.0),
            weight_kg: Some(80.0),
            activity_level: Some(ActivityLevel::Sedentary),
            goal: Some(Goal::Maintenance),
        }
    }

    #[test]
    fn test_incomplete_form_is_rejected() {
        let form = ProfileForm {
            goal: None,
            weight_kg: None,
            ..full_form()
        };
        assert!(!form.is_complete());
        assert_eq!(form.missing_fields(), vec!["weight", "goal"]);
        assert!(matches!(form.complete(), Err(NutriError::InvalidInput(_))));
        assert_eq!(form.estimate(), None);
    }

    #[test]
    fn test_out_of_range_values() {
        let form = ProfileForm {
            height_cm: Some(f64::NAN),
            ..full_form()
        };
        assert!(form.complete().is_err());

        let form = ProfileForm {
            age_years: Some(0),
            ..full_form()
        };
        assert!(form.complete().is_err());

        let form = ProfileForm {
            weight_kg: Some(-1.0),
            ..full_form()
        };
        assert!(form.complete().is_err());
    }

    #[test]
    fn test_estimate_recomputes_on_change() {
        let mut form = full_form();
        assert_eq!(form.estimate(), Some(2224));
        form.goal = Some(Goal::Loss);
        assert_eq!(form.estimate(), Some(1724));
    }
}
