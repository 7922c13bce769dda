use crate::models::ActionKind;

/// K-factor applied to every rating update
pub const K_FACTOR: f64 = 32.0;

/// Expected score for a player rated `rating_a` against `rating_b`.
///
/// E(A,B) = 1 / (1 + 10^((B - A) / 400)). E(A,B) + E(B,A) = 1, which is
/// what makes the paired update zero-sum before integer truncation.
#[inline]
pub fn expected_score(rating_a: i32, rating_b: i32) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) as f64 / 400.0))
}

/// Rating deltas for one (gainer, loser) outcome.
///
/// The gainer's delta is K * (1 - E_gainer), truncated toward zero, so it
/// is always non-negative; the loser's is K * (0 - E_loser), also truncated
/// toward zero, always non-positive. Independent truncation can leave a ±1
/// residue between the two magnitudes.
pub fn rating_deltas(gainer_rating: i32, loser_rating: i32) -> (i32, i32) {
    let expected_gainer = expected_score(gainer_rating, loser_rating);
    let expected_loser = expected_score(loser_rating, gainer_rating);

    let gain = (K_FACTOR * (1.0 - expected_gainer)) as i32;
    let loss = (K_FACTOR * (0.0 - expected_loser)) as i32;

    (gain, loss)
}

/// Map an interaction onto the (gainer, loser) pair for the rating update.
///
/// A like or superlike is a win for the profile receiving it. A pass makes
/// the actor the gainer, so a profile's rating also rises slightly every
/// time it passes on someone. Inherited product behavior, kept as-is.
pub fn select_pair<'a>(
    action: ActionKind,
    actor_id: &'a str,
    target_id: &'a str,
) -> (&'a str, &'a str) {
    match action {
        ActionKind::Like | ActionKind::Superlike => (target_id, actor_id),
        ActionKind::Pass => (actor_id, target_id),
    }
}
