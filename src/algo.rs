/// Finds the largest index `k` in `[min, max]` such that `pred` holds on all
/// of `[min, k]`, assuming `pred` is true on a contiguous (possibly empty)
/// prefix of the range and false from there through `max`.
///
/// Returns `min - 1` when the prefix is empty (including when `min > max`).
/// `pred` is never evaluated outside `[min, max]`, and is evaluated
/// O(log(max - min)) times.
pub fn last_true<F>(min: i64, max: i64, mut pred: F) -> i64
where
    F: FnMut(i64) -> bool,
{
    // Invariant: pred holds at l (or l == min - 1), fails at r (or r == max + 1).
    let mut l = min - 1;
    let mut r = max + 1;

    while r - l > 1 {
        let m = l + (r - l) / 2;

        if pred(m) {
            l = m;
        } else {
            r = m;
        }
    }

    l
}

/// Finds the smallest index `k` in `[min, max]` such that `pred(k)` holds,
/// assuming `pred` is false on a contiguous (possibly empty) prefix of the
/// range and true from there through `max`.
///
/// Returns `None` when `pred` holds nowhere on the range (including when
/// `min > max`). `pred` is never evaluated outside `[min, max]`, and is
/// evaluated O(log(max - min)) times.
pub fn first_true<F>(min: i64, max: i64, mut pred: F) -> Option<i64>
where
    F: FnMut(i64) -> bool,
{
    if min > max {
        return None;
    }

    // Invariant: pred fails at l (or l == min - 1), holds at r (or r == max,
    // not yet verified).
    let mut l = min - 1;
    let mut r = max;

    while r - l > 1 {
        let m = l + (r - l) / 2;

        if pred(m) {
            r = m;
        } else {
            l = m;
        }
    }

    // The narrowing loop alone cannot tell an all-false predicate from one
    // that holds only at max, so the candidate must be confirmed.
    if pred(r) {
        Some(r)
    } else {
        None
    }
}
