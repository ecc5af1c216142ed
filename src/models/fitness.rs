use std::cmp::Ordering;

/// Total order over fitness values used for ranking and tournaments.
///
/// Higher is better. NaN ranks below every other value (and equal to other
/// NaNs) so a broken evaluation can never become the elite.
pub(crate) fn compare_fitness(lhs: f64, rhs: f64) -> Ordering {
    match (lhs.is_nan(), rhs.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => lhs.total_cmp(&rhs),
    }
}
