//! Top-K selection by composite score.

use crate::systems::population::Population;

/// Indices of the `k` highest scores, best first.
///
/// Stable descending sort: equal scores keep population order, so the lower
/// index wins a tie. `0.0` and `-0.0` tie. `k` larger than the population
/// clamps to its size.
pub fn select_top(scores: &[f64], k: usize) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..scores.len()).collect();
    // `+ 0.0` folds -0.0 into +0.0 so total_cmp sees them as equal.
    idx.sort_by(|&a, &b| (scores[b] + 0.0).total_cmp(&(scores[a] + 0.0)));
    idx.truncate(k.min(scores.len()));
    tracing::debug!(population = scores.len(), k, selected = idx.len(), "selected top candidates");
    idx
}

/// Share of `selected` that would also make the cut on skill alone.
///
/// 1.0 means luck changed nobody's outcome. An empty selection is 1.0.
pub fn skill_overlap(population: &Population, selected: &[usize]) -> f64 {
    if selected.is_empty() {
        return 1.0;
    }
    let mut by_skill = vec![false; population.len()];
    for i in select_top(population.skill_scores(), selected.len()) {
        by_skill[i] = true;
    }
    let hits = selected
        .iter()
        .filter(|&&i| by_skill.get(i).copied().unwrap_or(false))
        .count();
    hits as f64 / selected.len() as f64
}
