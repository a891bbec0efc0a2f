use std::collections::HashSet;

use crate::models::{FoodItem, RawHit};

/// Collapse raw hits into unique food candidates.
///
/// Two hits are the same food when their source id, label, category and
/// ceiling-rounded macros all match. The first occurrence wins and the output
/// keeps the order of first appearance. Evaluation is lazy.
pub fn dedupe<I>(raw_hits: I) -> impl Iterator<Item = FoodItem>
where
    I: IntoIterator<Item = RawHit>,
{
    let mut seen = HashSet::new();
    raw_hits
        .into_iter()
        .map(FoodItem::from_hit)
        .filter(move |item| seen.insert(item.key()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawNutrients;

    fn hit(id: &str, label: &str, calories: f64, protein: f64) -> RawHit {
        RawHit {
            food_id: id.to_string(),
            label: label.to_string(),
            category: "Generic foods".to_string(),
            image: None,
            nutrients: RawNutrients {
                calories: Some(calories),
                carbs: Some(10.0),
                fat: Some(1.0),
                fiber: Some(0.5),
                protein: Some(protein),
            },
        }
    }

    #[test]
    fn test_first_occurrence_wins() {
        let hits = vec![
            hit("food_a", "Egg", 143.2, 12.56),
            hit("food_a", "Egg", 143.9, 12.1),
        ];
        let unique: Vec<FoodItem> = dedupe(hits).collect();
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].nutrients.calories, 144);
        assert_eq!(unique[0].nutrients.protein, 13);
    }

    #[test]
    fn test_preserves_first_appearance_order() {
        let hits = vec![
            hit("food_b", "Bread", 265.0, 9.0),
            hit("food_a", "Apple", 52.0, 0.3),
            hit("food_b", "Bread", 265.0, 9.0),
            hit("food_c", "Cheese", 402.0, 25.0),
        ];
        let labels: Vec<String> = dedupe(hits).map(|f| f.label).collect();
        assert_eq!(labels, vec!["Bread", "Apple", "Cheese"]);
    }

    #[test]
    fn test_distinct_rounded_profiles_are_kept() {
        let hits = vec![hit("food_a", "Egg", 143.0, 12.0), hit("food_a", "Egg", 143.0, 13.5)];
        assert_eq!(dedupe(hits).count(), 2);
    }

    #[test]
    fn test_separator_in_label_does_not_merge_foods() {
        let mut first = hit("food_a", "A|B", 100.0, 5.0);
        first.category = "C".to_string();
        let mut second = hit("food_a", "A", 100.0, 5.0);
        second.category = "B|C".to_string();

        let unique: Vec<FoodItem> = dedupe(vec![first, second]).collect();
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].label, "A|B");
        assert_eq!(unique[1].category, "B|C");
    }

    #[test]
    fn test_lazy_take() {
        let hits = (0..1000).map(|i| hit(&format!("food_{}", i), "Rice", 130.0, 2.7));
        let first: Vec<FoodItem> = dedupe(hits).take(3).collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first[2].food_id, "food_2");
    }
}
