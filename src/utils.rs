//! Assorted helpers shared by finders, the service and tests.

/// Decode a string into the code-point sequence the finders operate on.
#[inline]
pub fn to_chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Returns true if `sequence` reads the same forwards and backwards.
pub fn is_palindrome(sequence: &[char]) -> bool {
    sequence.iter().eq(sequence.iter().rev())
}

/// Brute-force leftmost longest palindrome as `(start, length)`.
///
/// Enumerates every substring, so it is O(n³); intended for cross-checking
/// the real finders on small inputs.
pub fn brute_force_longest(sequence: &[char]) -> (usize, usize) {
    let n = sequence.len();
    let mut best = (0usize, n.min(1));
    for start in 0..n {
        for end in start + 1..=n {
            let len = end - start;
            if len > best.1 && is_palindrome(&sequence[start..end]) {
                best = (start, len);
            }
        }
    }
    best
}
