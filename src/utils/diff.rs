//! Line-level sequence alignment.
//!
//! Longest-common-subsequence diff over two line sequences. Within a run of
//! changes, lines only on the left are emitted before lines only on the right.

/// One aligned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOp<'a> {
    /// Only in the left sequence.
    Left(&'a str),
    /// Only in the right sequence.
    Right(&'a str),
    /// In both sequences.
    Both(&'a str),
}

/// Align two line sequences.
pub fn diff_lines<'a, L, R>(left: &'a [L], right: &'a [R]) -> Vec<LineOp<'a>>
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    let n = left.len();
    let m = right.len();

    // lcs[i][j] = LCS length of left[i..] and right[j..]
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if left[i].as_ref() == right[j].as_ref() {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(n + m);
    let mut pending_right = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if left[i].as_ref() == right[j].as_ref() {
            ops.append(&mut pending_right);
            ops.push(LineOp::Both(left[i].as_ref()));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            ops.push(LineOp::Left(left[i].as_ref()));
            i += 1;
        } else {
            pending_right.push(LineOp::Right(right[j].as_ref()));
            j += 1;
        }
    }
    ops.extend(left[i..].iter().map(|l| LineOp::Left(l.as_ref())));
    ops.append(&mut pending_right);
    ops.extend(right[j..].iter().map(|r| LineOp::Right(r.as_ref())));
    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        let a = ["x", "y"];
        assert_eq!(diff_lines(&a, &a), vec![LineOp::Both("x"), LineOp::Both("y")]);
    }

    #[test]
    fn test_replace_emits_left_first() {
        let a = ["v", "a1", "s"];
        let b = ["v", "a2", "s"];
        assert_eq!(
            diff_lines(&a, &b),
            vec![
                LineOp::Both("v"),
                LineOp::Left("a1"),
                LineOp::Right("a2"),
                LineOp::Both("s"),
            ]
        );
    }

    #[test]
    fn test_empty_sides() {
        let a = ["x"];
        let empty: [&str; 0] = [];
        assert_eq!(diff_lines(&a, &empty), vec![LineOp::Left("x")]);
        assert_eq!(diff_lines(&empty, &a), vec![LineOp::Right("x")]);
    }

    #[test]
    fn test_insertion_keeps_order() {
        let a = ["a", "c"];
        let b = ["a", "b", "c", "d"];
        assert_eq!(
            diff_lines(&a, &b),
            vec![
                LineOp::Both("a"),
                LineOp::Right("b"),
                LineOp::Both("c"),
                LineOp::Right("d"),
            ]
        );
    }
}
