use smartcore::linalg::basic::arrays::Array;

use crate::degree::{compute_degree_matrices, diagonal, diagonal_matrix};
use crate::errors::RecommendError;
use crate::interactions::InteractionMatrix;
use crate::tests::test_data::{random_interactions, triangle, with_cold_user_and_item};

#[test]
fn test_triangle_degrees() {
    let deg = compute_degree_matrices(&triangle());
    assert_eq!(deg.user_degrees(), vec![2.0, 2.0, 2.0]);
    assert_eq!(deg.item_degrees(), vec![2.0, 2.0, 2.0]);
    assert_eq!(deg.p.shape(), (3, 3));
    assert_eq!(deg.q.shape(), (3, 3));
}

#[test]
fn test_degrees_are_row_and_column_sums() {
    let r = random_interactions(17, 11, 0.3, 7);
    let deg = compute_degree_matrices(&r);
    let (m, n) = r.shape();

    for i in 0..m {
        let row_sum: u32 = r.user_row(i).iter().sum();
        assert_eq!(*deg.p.get((i, i)), row_sum as f64);
    }
    for j in 0..n {
        let col_sum: u32 = (0..m).map(|i| r.get(i, j)).sum();
        assert_eq!(*deg.q.get((j, j)), col_sum as f64);
    }
}

#[test]
fn test_degree_matrices_are_diagonal() {
    let deg = compute_degree_matrices(&random_interactions(6, 9, 0.5, 3));
    for (mat, n) in [(&deg.p, 6), (&deg.q, 9)] {
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    assert_eq!(*mat.get((i, j)), 0.0, "off-diagonal ({},{}) not zero", i, j);
                }
            }
        }
    }
}

#[test]
fn test_zero_degrees_are_kept() {
    let deg = compute_degree_matrices(&with_cold_user_and_item());
    assert_eq!(deg.user_degrees(), vec![2.0, 0.0, 2.0, 2.0]);
    assert_eq!(deg.item_degrees(), vec![2.0, 2.0, 2.0, 0.0]);
}

#[test]
fn test_all_zero_matrix_gives_zero_degrees() {
    let r = InteractionMatrix::from_rows(vec![vec![0, 0], vec![0, 0], vec![0, 0]]).unwrap();
    let deg = compute_degree_matrices(&r);
    assert!(deg.user_degrees().iter().all(|&d| d == 0.0));
    assert!(deg.item_degrees().iter().all(|&d| d == 0.0));
}

#[test]
fn test_counts_not_just_presence() {
    let r = InteractionMatrix::from_rows(vec![vec![3, 0], vec![1, 2]]).unwrap();
    let deg = compute_degree_matrices(&r);
    assert_eq!(deg.user_degrees(), vec![3.0, 3.0]);
    assert_eq!(deg.item_degrees(), vec![4.0, 2.0]);
}

#[test]
fn test_diagonal_helpers() {
    let m = diagonal_matrix(&[1.0, 2.5, 0.0]);
    assert_eq!(m.shape(), (3, 3));
    assert_eq!(diagonal(&m).unwrap(), vec![1.0, 2.5, 0.0]);

    let square = triangle().dense();
    assert!(diagonal(&square).is_ok());

    let r = InteractionMatrix::from_rows(vec![vec![1, 0, 1]]).unwrap();
    let err = diagonal(&r.dense()).unwrap_err();
    assert!(matches!(err, RecommendError::DimensionMismatch { .. }));
}
