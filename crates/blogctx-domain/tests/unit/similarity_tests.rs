//! Tests for cosine similarity

use blogctx_domain::Error;
use blogctx_domain::utils::cosine_similarity;

const EPSILON: f32 = 1e-6;

fn sample_pairs() -> Vec<(Vec<f32>, Vec<f32>)> {
    vec![
        (vec![1.0, 0.0], vec![0.0, 1.0]),
        (vec![0.9, 0.1], vec![1.0, 0.0]),
        (vec![-0.5, 2.0, 3.25], vec![1.5, -1.0, 0.75]),
        (vec![0.123, -0.789, 0.456, 0.012], vec![0.3, 0.3, -0.3, 0.3]),
    ]
}

#[test]
fn test_similarity_is_symmetric() {
    for (a, b) in sample_pairs() {
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        assert!((ab - ba).abs() < EPSILON, "sim({a:?},{b:?}) = {ab}, reversed = {ba}");
    }
}

#[test]
fn test_self_similarity_is_one() {
    for (a, _) in sample_pairs() {
        let score = cosine_similarity(&a, &a).unwrap();
        assert!((score - 1.0).abs() < EPSILON, "sim(a,a) = {score} for {a:?}");
    }
}

#[test]
fn test_zero_vector_scores_zero() {
    let zero = vec![0.0; 3];
    let other = vec![0.2, 0.4, 0.6];

    assert_eq!(cosine_similarity(&zero, &other).unwrap(), 0.0);
    assert_eq!(cosine_similarity(&other, &zero).unwrap(), 0.0);
    assert_eq!(cosine_similarity(&zero, &zero).unwrap(), 0.0);
}

#[test]
fn test_opposite_vectors_score_minus_one() {
    let score = cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]).unwrap();
    assert!((score + 1.0).abs() < EPSILON);
}

#[test]
fn test_scale_does_not_change_score() {
    let a = [0.3, 0.4];
    let small = cosine_similarity(&a, &[1.0, 1.0]).unwrap();
    let large = cosine_similarity(&a, &[100.0, 100.0]).unwrap();
    assert!((small - large).abs() < EPSILON);
}

#[test]
fn test_length_mismatch_is_an_error() {
    let result = cosine_similarity(&[1.0, 0.0], &[1.0, 0.0, 0.0]);
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn test_score_stays_within_unit_range() {
    let vectors = [vec![1.0, 1.0], vec![-1.0, -1.0], vec![0.1, 0.1], vec![3.0, 3.0]];
    for a in &vectors {
        for b in &vectors {
            let score = cosine_similarity(a, b).unwrap();
            assert!((-1.0..=1.0).contains(&score), "sim({a:?},{b:?}) = {score}");
        }
    }
    assert_eq!(cosine_similarity(&[1.0, 1.0], &[1.0, 1.0]).unwrap(), 1.0);
}
