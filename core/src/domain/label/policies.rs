/// Labels the vision API commonly returns that say nothing about which food
/// is in the picture.
pub const DEFAULT_GENERIC_LABELS: &[&str] = &[
    "Food",
    "Dish",
    "Cuisine",
    "Ingredient",
    "Recipe",
    "Produce",
    "Fruit",
    "Vegetable",
    "Natural foods",
    "Staple food",
    "Tableware",
    "Plate",
    // Colors. "Orange" is left out because it is also a fruit.
    "Red",
    "Green",
    "Yellow",
    "Brown",
    "White",
    "Black",
    "Purple",
    "Pink",
    "Blue",
];

pub const DEFAULT_GENERIC_PENALTY: f32 = 0.6;

pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

pub fn validate_penalty(penalty: f32) -> Result<(), String> {
    if !penalty.is_finite() || !(0.0..=1.0).contains(&penalty) {
        return Err(format!("label penalty must be within [0, 1], got {}", penalty));
    }
    Ok(())
}
