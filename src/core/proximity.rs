/// Convert absolute rating gaps into bounded proximity scores.
///
/// For each candidate rating R_i against the target rating R_t:
/// d_i = |R_i - R_t|, denom = max(d) + 1, proximity = 1 - d_i / denom.
/// The denominator is always >= 1, so a batch where every candidate shares
/// the target's rating yields proximity 1.0 for all of them, and the
/// widest-gap candidate never reaches exactly 0.
///
/// Normalization is batch-relative: the same candidate can score
/// differently against different candidate pools. Known, accepted property.
pub fn rating_proximity(target_rating: i32, candidate_ratings: &[i32]) -> Vec<f64> {
    if candidate_ratings.is_empty() {
        return Vec::new();
    }

    let gaps: Vec<f64> = candidate_ratings
        .iter()
        .map(|rating| (*rating as i64 - target_rating as i64).abs() as f64)
        .collect();

    let max_gap = gaps.iter().copied().fold(0.0, f64::max);
    let denom = max_gap + 1.0;

    gaps.into_iter().map(|gap| 1.0 - gap / denom).collect()
}
