/// Scoring mechanics: weighted skill/luck blend.

/// Luck share used when the caller does not pick one.
pub const DEFAULT_LUCK_WEIGHT: f64 = 0.05;

/// Composite score: (1 - w) * skill + w * luck.
#[inline]
pub fn composite(skill: f64, luck: f64, weight: f64) -> f64 {
    ((1.0 - weight) * skill) + (weight * luck)
}

/// Element-wise [`composite`] over two parallel arrays.
///
/// Panics if the slices differ in length.
pub fn composite_all(skill: &[f64], luck: &[f64], weight: f64) -> Vec<f64> {
    assert_eq!(
        skill.len(),
        luck.len(),
        "skill and luck arrays must be parallel"
    );
    skill
        .iter()
        .zip(luck)
        .map(|(&s, &l)| composite(s, l, weight))
        .collect()
}
