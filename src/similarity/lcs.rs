//! Longest common subsequence over characters.
//!
//! Lengths count Unicode scalar values, not bytes.

use crate::errors::PlagcheckError;

/// Upper bound on DP table cells (256 MiB of `u32`).
pub const MAX_TABLE_CELLS: usize = 64 * 1024 * 1024;

/// Length and content of the longest common subsequence of `a` and `b`.
///
/// Builds the full `(n+1) x (m+1)` table and backtracks from the bottom-right
/// corner. When skipping a character, the walk moves up only if the cell above
/// is strictly larger than the cell to the left; on a tie it moves left. With
/// several longest subsequences this decides which one is returned.
///
/// Fails with [`PlagcheckError::InputTooLarge`] when the table would exceed
/// [`MAX_TABLE_CELLS`] or cannot be allocated.
pub fn lcs(a: &str, b: &str) -> Result<(usize, String), PlagcheckError> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let n = a_chars.len();
    let m = b_chars.len();

    if n == 0 || m == 0 {
        return Ok((0, String::new()));
    }

    let width = m + 1;
    let mut dp = allocate_table(n + 1, width)?;

    for i in 1..=n {
        for j in 1..=m {
            dp[i * width + j] = if a_chars[i - 1] == b_chars[j - 1] {
                dp[(i - 1) * width + j - 1] + 1
            } else {
                dp[(i - 1) * width + j].max(dp[i * width + j - 1])
            };
        }
    }

    let len = dp[n * width + m] as usize;
    let mut matched = Vec::with_capacity(len);
    let mut i = n;
    let mut j = m;

    while i > 0 && j > 0 {
        if a_chars[i - 1] == b_chars[j - 1] {
            matched.push(a_chars[i - 1]);
            i -= 1;
            j -= 1;
        } else if dp[(i - 1) * width + j] > dp[i * width + j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    matched.reverse();
    Ok((len, matched.into_iter().collect()))
}

fn allocate_table(rows: usize, cols: usize) -> Result<Vec<u32>, PlagcheckError> {
    let cells = rows
        .checked_mul(cols)
        .filter(|&cells| cells <= MAX_TABLE_CELLS)
        .ok_or_else(|| {
            PlagcheckError::InputTooLarge(format!(
                "comparison needs a {}x{} table, limit is {} cells",
                rows, cols, MAX_TABLE_CELLS
            ))
        })?;

    let mut table = Vec::new();
    table
        .try_reserve_exact(cells)
        .map_err(|e| PlagcheckError::InputTooLarge(format!("cannot allocate table: {}", e)))?;
    table.resize(cells, 0);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lcs_ok(a: &str, b: &str) -> (usize, String) {
        lcs(a, b).unwrap()
    }

    /// Two-row length-only DP, used to cross-check the full table.
    fn lcs_length(a: &str, b: &str) -> usize {
        let b_chars: Vec<char> = b.chars().collect();
        let m = b_chars.len();
        let mut prev = vec![0usize; m + 1];
        let mut curr = vec![0usize; m + 1];

        for ac in a.chars() {
            for j in 1..=m {
                curr[j] = if ac == b_chars[j - 1] {
                    prev[j - 1] + 1
                } else {
                    prev[j].max(curr[j - 1])
                };
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[m]
    }

    #[test]
    fn test_identical_strings() {
        assert_eq!(lcs_ok("the cat sat", "the cat sat"), (11, "the cat sat".to_string()));
    }

    #[test]
    fn test_empty_side() {
        assert_eq!(lcs_ok("", "anything"), (0, String::new()));
        assert_eq!(lcs_ok("anything", ""), (0, String::new()));
        assert_eq!(lcs_ok("", ""), (0, String::new()));
    }

    #[test]
    fn test_reordered_words() {
        assert_eq!(lcs_ok("hello world", "world hello"), (5, "world".to_string()));
    }

    #[test]
    fn test_tie_moves_left() {
        assert_eq!(lcs_ok("ab", "ba"), (1, "b".to_string()));
        assert_eq!(lcs_ok("abc", "acb"), (2, "ac".to_string()));
        assert_eq!(lcs_ok("abcbdab", "bdcaba"), (4, "bdab".to_string()));
    }

    #[test]
    fn test_no_common_characters() {
        assert_eq!(lcs_ok("abc", "xyz"), (0, String::new()));
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(lcs_ok("café", "cafe é"), (4, "café".to_string()));
    }

    #[test]
    fn test_length_matches_string() {
        let pairs = [
            ("kitten sitting", "sitting kitten"),
            ("the quick brown fox", "a quick brown dog"),
            ("aaaa", "aa"),
            ("xmjyauz", "mzjawxu"),
        ];
        for (a, b) in pairs {
            let (len, s) = lcs_ok(a, b);
            assert_eq!(len, s.chars().count());
            assert_eq!(len, lcs_length(a, b));
        }
    }

    #[test]
    fn test_length_symmetric() {
        let pairs = [("hello world", "world hello"), ("abcbdab", "bdcaba"), ("ab", "")];
        for (a, b) in pairs {
            assert_eq!(lcs_length(a, b), lcs_length(b, a));
            assert_eq!(lcs_ok(a, b).0, lcs_ok(b, a).0);
        }
    }

    #[test]
    fn test_oversized_table_rejected() {
        // 10_001 * 10_001 cells is past the limit
        let a = "a".repeat(10_000);
        let b = "b".repeat(10_000);
        let err = lcs(&a, &b).unwrap_err();
        assert!(matches!(err, PlagcheckError::InputTooLarge(_)));
    }

    #[test]
    fn test_table_size_overflow_rejected() {
        assert!(matches!(
            allocate_table(usize::MAX, 2),
            Err(PlagcheckError::InputTooLarge(_))
        ));
    }

    #[test]
    fn test_table_within_limit_allowed() {
        let table = allocate_table(1024, 1024).unwrap();
        assert_eq!(table.len(), 1024 * 1024);
    }
}
