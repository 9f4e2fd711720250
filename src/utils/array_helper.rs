use ndarray::prelude::*;
use std::cmp::Ordering;

/// Indices that sort `v` in ascending order. NaN compares equal to everything.
pub fn argsort(v: ArrayView1<f64>) -> Vec<usize> {
    let mut idx = (0..v.len()).collect::<Vec<_>>();
    idx.sort_unstable_by(|&i, &j| v[i].partial_cmp(&v[j]).unwrap_or(Ordering::Equal));
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_order() {
        let v: Array1<f64> = array![0.5, -2.0, 1.0, -1.0];
        assert_eq!(argsort(v.view()), vec![1, 3, 0, 2]);
    }
}
