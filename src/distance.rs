//! Keyboard-aware edit distance for autocorrect ranking.
//!
//! This is a modified Damerau-Levenshtein distance tuned for real typing
//! errors: substitutions between physically adjacent QWERTY keys are cheap,
//! swapped adjacent characters are rewarded, and insertions or deletions next
//! to a doubled letter are discounted ("catle" -> "cattle", "mapple" ->
//! "maple"). The recurrence is not symmetric by construction, so callers must
//! not assume `edit_distance(a, b) == edit_distance(b, a)`.

/// Per-letter key positions on a QWERTY keyboard, indexed by `letter - 'a'`.
///
/// Keys are numbered along the rows; the top row holds 10 letters and the home
/// row 9, so home-row entries carry an extra 0.1 and bottom-row entries an
/// extra 0.3 to encode their row. Two keys are neighbors when their numbers
/// differ by exactly 1 (same row) or by a value in (9, 11] (adjacent rows).
const QWERTY_KEY_POSITIONS: [f64; 26] = [
    10.1, 24.3, 22.3, 12.1, 2.0, 13.1, 14.1, 15.1, 7.0, 16.1, 17.1, 18.1, 26.3,
    25.3, 8.0, 9.0, 0.0, 3.0, 11.1, 4.0, 6.0, 23.3, 1.0, 21.3, 5.0, 20.3,
];

/// Check whether two keys are adjacent (or diagonally adjacent) on a QWERTY
/// keyboard. Only lowercase ASCII letters have positions; anything else is
/// never close.
pub fn keys_are_close(a: u8, b: u8) -> bool {
    if !a.is_ascii_lowercase() || !b.is_ascii_lowercase() {
        return false;
    }

    let one = QWERTY_KEY_POSITIONS[(a - b'a') as usize];
    let two = QWERTY_KEY_POSITIONS[(b - b'a') as usize];
    let gap = (one - two).abs();

    (gap * 10.0).round() as i64 == 10 || (gap > 9.0 && gap <= 11.0)
}

/// Calculate the weighted edit distance between two words.
///
/// Both inputs are expected to be lowercase ASCII (the BK-tree normalizes
/// before calling). If either input is empty the distance short-circuits to
/// the longer length without entering the recurrence.
pub fn edit_distance(word_a: &str, word_b: &str) -> i32 {
    if word_a.is_empty() || word_b.is_empty() {
        return word_a.len().max(word_b.len()) as i32;
    }

    let a = word_a.as_bytes();
    let b = word_b.as_bytes();

    // Zero doubles as the "not yet computed" marker; the recurrence only
    // produces zero through a chain of free matches ending at (0, 0), in
    // which case recomputing it is cheap and correct.
    let mut memo = vec![vec![0i32; b.len() + 1]; a.len() + 1];

    distance_memoized(a, b, a.len(), b.len(), &mut memo)
}

/// Recursive helper for [`edit_distance`] over suffix lengths `i` and `j`.
fn distance_memoized(a: &[u8], b: &[u8], i: usize, j: usize, memo: &mut Vec<Vec<i32>>) -> i32 {
    if i == 0 && j == 0 {
        return 0;
    }
    // Inflated boundary cost discourages editing away a whole prefix/suffix.
    if i == 0 || j == 0 {
        return i.max(j) as i32 + 2;
    }
    if memo[i][j] != 0 {
        return memo[i][j];
    }

    if a[i - 1] == b[j - 1] {
        let value = distance_memoized(a, b, i - 1, j - 1, memo);
        memo[i][j] = value;
        return value;
    }

    let keys_close = keys_are_close(a[i - 1], b[j - 1]);
    let transposed = is_transposed(a, b, i, j);
    let substitution_weight = if !keys_close && transposed {
        -2
    } else {
        (if keys_close { 0 } else { 1 }) + (if transposed { 0 } else { 1 })
    };

    let substitute = distance_memoized(a, b, i - 1, j - 1, memo) + substitution_weight;
    // Insertions and deletions next to a doubled letter get a discount instead
    // of the usual unit cost, e.g. "catle" -> "cattle" or "mapple" -> "maple".
    let insert = distance_memoized(a, b, i, j - 1, memo) + if repeats_at(b, j) { -1 } else { 1 };
    let delete = distance_memoized(a, b, i - 1, j, memo) + if repeats_at(a, i) { -1 } else { 1 };

    let value = substitute.min(insert.min(delete)) + 1;
    memo[i][j] = value;
    value
}

/// Check whether the character at the edit point `k` sits on a doubled letter.
fn repeats_at(word: &[u8], k: usize) -> bool {
    if word.len() < 3 {
        return false;
    }
    if k == word.len() {
        word[k - 1] == word[k - 2]
    } else {
        word[k] == word[k - 1]
    }
}

/// Check whether the mismatched characters at `i`, `j` are each other's
/// neighbor, swapped.
fn is_transposed(a: &[u8], b: &[u8], i: usize, j: usize) -> bool {
    i > 1 && j > 1 && a[i - 2] == b[j - 1] && a[i - 1] == b[j - 2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_zero() {
        assert_eq!(edit_distance("same", "same"), 0);
        assert_eq!(edit_distance("a", "a"), 0);
        assert_eq!(edit_distance("etc", "etc"), 0);
        assert_eq!(edit_distance("makeup", "makeup"), 0);
    }

    #[test]
    fn test_empty_inputs_short_circuit() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
    }

    #[test]
    fn test_transposition() {
        // Swapped adjacent characters are rewarded over plain substitutions.
        assert_eq!(edit_distance("recieve", "receive"), 2);
        assert_eq!(edit_distance("teh", "the"), 2);
        assert_eq!(edit_distance("ab", "ba"), 2);
    }

    #[test]
    fn test_keyboard_proximity_weighting() {
        // 'y' sits next to 't' but not next to 'w', so "yhere" reads as a slip
        // towards "there" rather than "where".
        assert_eq!(edit_distance("yhere", "there"), 2);
        assert_eq!(edit_distance("yhere", "where"), 3);
    }

    #[test]
    fn test_repeated_letter_discount() {
        // Missing or extra copies of a doubled letter are nearly free.
        assert_eq!(edit_distance("gogle", "google"), 0);
        assert_eq!(edit_distance("catle", "cattle"), 0);
        assert_eq!(edit_distance("mapple", "maple"), 0);
        assert_eq!(edit_distance("utillities", "utilities"), 0);
        assert_eq!(edit_distance("asessment", "assessment"), 0);
    }

    #[test]
    fn test_insertions_and_deletions() {
        assert_eq!(edit_distance("whre", "where"), 2);
        assert_eq!(edit_distance("amazin", "amazon"), 2);
        assert_eq!(edit_distance("amazin", "amazing"), 2);
        assert_eq!(edit_distance("janurary", "january"), 2);
    }

    #[test]
    fn test_boundary_cost_is_inflated() {
        // Single-character mismatch pays the boundary surcharge, not the
        // textbook cost of 1.
        assert_eq!(edit_distance("a", "b"), 3);
        // Unrelated words stay far apart.
        assert_eq!(edit_distance("kitten", "sitting"), 8);
    }

    #[test]
    fn test_symmetry_is_not_assumed() {
        // The recurrence is checked in both orders against fixed values
        // rather than relying on a symmetry law.
        assert_eq!(edit_distance("recieve", "receive"), 2);
        assert_eq!(edit_distance("receive", "recieve"), 2);
        assert_eq!(edit_distance("whre", "where"), 2);
        assert_eq!(edit_distance("where", "whre"), 2);
    }

    #[test]
    fn test_keys_are_close() {
        // Same row.
        assert!(keys_are_close(b'q', b'w'));
        assert!(keys_are_close(b'a', b's'));
        // Adjacent rows.
        assert!(keys_are_close(b'y', b't'));
        assert!(keys_are_close(b'i', b'o'));
        assert!(keys_are_close(b'o', b'i'));
        // Far apart.
        assert!(!keys_are_close(b'q', b'z'));
        assert!(!keys_are_close(b'y', b'w'));
        // Non-letters never have a position.
        assert!(!keys_are_close(b'1', b'a'));
        assert!(!keys_are_close(b' ', b' '));
    }

    #[test]
    fn test_repeats_at() {
        // Too short for the discount.
        assert!(!repeats_at(b"oo", 2));
        // Doubled letter at the edit point.
        assert!(repeats_at(b"google", 2));
        assert!(repeats_at(b"ball", 4));
        assert!(!repeats_at(b"maple", 3));
    }
}
