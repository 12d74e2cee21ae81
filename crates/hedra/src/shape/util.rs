//! Small utilities: combinations and approximate dedup.

use crate::vec3::Vector3;

/// k-combinations of items (lexicographic).
pub(crate) fn combinations<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let n = items.len();
    if k > n || k == 0 {
        return Vec::new();
    }
    let mut idxs: Vec<usize> = (0..k).collect();
    let mut out = Vec::new();
    loop {
        out.push(idxs.iter().map(|&i| items[i]).collect());
        // rightmost index that can still move
        let Some(i) = (0..k).rev().find(|&i| idxs[i] != i + n - k) else {
            break;
        };
        idxs[i] += 1;
        for j in i + 1..k {
            idxs[j] = idxs[j - 1] + 1;
        }
    }
    out
}

/// Drop points approximately equal to an earlier one; keeps first occurrences in order.
pub(crate) fn dedup_approx(points: &mut Vec<Vector3>) {
    let mut kept: Vec<Vector3> = Vec::with_capacity(points.len());
    for &p in points.iter() {
        if !kept.iter().any(|q| q.approx_eq(p)) {
            kept.push(p);
        }
    }
    *points = kept;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinations_counts_and_order() {
        let items = [0usize, 1, 2, 3];
        let c = combinations(&items, 3);
        assert_eq!(c, vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]);
        assert_eq!(combinations(&[1, 2, 3, 4, 5, 6, 7, 8], 3).len(), 56);
        assert_eq!(combinations(&items, 4).len(), 1);
        assert!(combinations(&items, 5).is_empty());
        assert!(combinations(&items, 0).is_empty());
    }

    #[test]
    fn dedup_merges_within_tolerance() {
        let mut pts = vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.004, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(1.0, 0.0, 0.003),
        ];
        dedup_approx(&mut pts);
        assert_eq!(pts, vec![Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)]);
    }
}
