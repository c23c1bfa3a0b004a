use super::*;
use half::f16;
use tempfile::TempDir;

const QUESTIONS: [&str; 3] = [
    "How do I reset my password?",
    "Do you offer international shipping?",
    "What is your return policy?",
];

#[test]
fn test_unavailable_scorer_returns_none() {
    let scorer = UnavailableScorer;
    assert!(!scorer.is_available());
    assert!(scorer.score("anything").is_none());
    assert!(scorer.score_candidates("anything", &[0, 1]).is_none());
    assert_eq!(scorer.mode(), SemanticMode::Unavailable);
}

#[test]
fn test_load_without_model_is_unavailable() {
    let scorer = load_semantic_scorer(EmbedderConfig::default(), &QUESTIONS);
    assert!(!scorer.is_available());
}

#[test]
fn test_load_with_missing_model_dir_degrades() {
    let dir = TempDir::new().unwrap();
    let config = EmbedderConfig::from_model_dir(dir.path().join("absent"));
    let scorer = load_semantic_scorer(config, &QUESTIONS);
    assert_eq!(scorer.mode(), SemanticMode::Unavailable);
}

#[test]
fn test_stub_scorer_aligns_with_entries() {
    let scorer = load_semantic_scorer(EmbedderConfig::stub(), &QUESTIONS);
    assert!(scorer.is_available());
    assert_eq!(scorer.mode(), SemanticMode::Stub);

    let scores = scorer.score("How do I reset my password?").unwrap();
    assert_eq!(scores.len(), 3);
    assert!((scores[0] - 1.0).abs() < 1e-2);
    assert!(scores[0] > scores[1]);
}

#[test]
fn test_score_candidates_matches_full_scores() {
    let scorer = load_semantic_scorer(EmbedderConfig::stub(), &QUESTIONS);
    let full = scorer.score("shipping policy").unwrap();
    let partial = scorer.score_candidates("shipping policy", &[2, 0]).unwrap();
    assert_eq!(partial, vec![full[2], full[0]]);
}

#[test]
fn test_score_candidates_out_of_range_is_none() {
    let scorer = load_semantic_scorer(EmbedderConfig::stub(), &QUESTIONS);
    assert!(scorer.score_candidates("x", &[7]).is_none());
}

#[test]
fn test_mock_scorer_counts_calls() {
    let mock = MockSemanticScorer::new(vec![0.1, 0.9]);
    assert_eq!(mock.calls(), 0);
    assert_eq!(mock.score_candidates("q", &[1]), Some(vec![0.9]));
    assert_eq!(mock.score("q"), Some(vec![0.1, 0.9]));
    assert_eq!(mock.calls(), 2);
}

#[test]
fn test_cosine_similarity_edge_cases() {
    let a = vec![f16::from_f32(1.0), f16::from_f32(0.0)];
    assert!((cosine_similarity_f16_f32(&a, &[2.0, 0.0]) - 1.0).abs() < 1e-6);
    assert_eq!(cosine_similarity_f16_f32(&a, &[0.0, 1.0]), 0.0);
    assert_eq!(cosine_similarity_f16_f32(&a, &[1.0]), 0.0);
    assert_eq!(cosine_similarity_f16_f32(&a, &[0.0, 0.0]), 0.0);
    assert!((cosine_similarity_f16_f32(&a, &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
}
