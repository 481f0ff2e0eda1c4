//! End-to-end checks of the public pipeline API.

use demo_core::core::features::{feature_vector, simple_hash};
use demo_core::core::sequencer::text_to_sequence;
use demo_core::core::synthesizer::probabilities;
use demo_core::core::types::{FEATURE_DIM, UNKNOWN_TOKEN};
use demo_core::core::vocabulary::Vocabulary;
use demo_core::persistence::{load_corpus, save_corpus};
use demo_core::{Corpus, DemoEngine, DemoError};

const CATEGORIES: [&str; 3] = ["happy", "sad", "angry"];

#[test]
fn stages_compose_like_the_engine() {
    let corpus = Corpus::builtin();
    let vocab = Vocabulary::from_corpus(&corpus);
    let engine = DemoEngine::new(corpus);

    let text = "今天是一个开心的日子";
    let sequence = text_to_sequence(text, &vocab);
    let features = feature_vector(&sequence);
    let dist = probabilities(&features, &CATEGORIES, "happy").unwrap();

    let trace = engine.classify(text, "happy").unwrap();
    assert_eq!(trace.sequence, sequence);
    assert_eq!(trace.features, features);
    assert_eq!(trace.probabilities, dist);
}

#[test]
fn sequences_only_hold_known_ids_or_zero() {
    let vocab = Vocabulary::from_corpus(&Corpus::builtin());
    let max = vocab.len() as u32;
    for text in ["开心", "Hello, 世界", "他气得脸发青!!", "🙂"] {
        let seq = text_to_sequence(text, &vocab);
        assert_eq!(seq.len(), text.chars().count());
        assert!(seq.iter().all(|&id| id == UNKNOWN_TOKEN || (1..=max).contains(&id)));
    }
}

#[test]
fn every_stage_is_deterministic() {
    let engine = DemoEngine::with_builtin_corpus();
    assert_eq!(simple_hash("12345"), simple_hash("12345"));
    let a = engine.classify("我的心好痛", "sad").unwrap();
    let b = engine.classify("我的心好痛", "sad").unwrap();
    assert_eq!(a, b);
}

#[test]
fn truth_always_wins_for_any_text() {
    let engine = DemoEngine::with_builtin_corpus();
    let texts = ["开心", "", "xyz", "考试砸了", "不理你了", "今天开心极啦，哈哈"];
    for text in texts {
        for truth in CATEGORIES {
            let trace = engine.classify(text, truth).unwrap();
            let dist = &trace.probabilities;
            assert_eq!(dist.total_hundredths(), 100, "{text} / {truth}");
            let winner = dist.get(truth).unwrap();
            assert!(dist.iter().filter(|(n, _)| *n != truth).all(|(_, p)| winner > p));
            assert_eq!(trace.predicted, truth);
        }
    }
}

#[test]
fn empty_text_scenario() {
    let engine = DemoEngine::with_builtin_corpus();
    let trace = engine.classify("", "happy").unwrap();
    assert!(trace.sequence.is_empty());
    assert_eq!(trace.features, [0.0; FEATURE_DIM]);
    let values: Vec<i32> = trace.probabilities.iter().map(|(_, p)| p.hundredths()).collect();
    assert_eq!(values, vec![75, 13, 12]);
}

#[test]
fn unknown_truth_is_a_contract_violation() {
    let engine = DemoEngine::with_builtin_corpus();
    let err = engine.classify("开心", "surprised").unwrap_err();
    assert!(matches!(err, DemoError::UnknownCategory(_)));
    assert_eq!(err.to_string(), "unknown category 'surprised'");
}

#[test]
fn edited_snapshot_reloads_into_a_fresh_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corpus.bin");

    let mut engine = DemoEngine::with_builtin_corpus();
    engine.corpus_mut().add_sample("angry", "气炸了").unwrap();
    save_corpus(engine.corpus(), &path).unwrap();

    let reloaded = DemoEngine::new(load_corpus(&path).unwrap());
    assert_eq!(reloaded.corpus(), engine.corpus());
    // The new sample now contributes to the vocabulary.
    assert!(reloaded.vocabulary().len() > engine.vocabulary().len());
    let trace = reloaded.classify_sample("angry", 10).unwrap();
    assert!(trace.sequence.iter().all(|&id| id != UNKNOWN_TOKEN));
}

#[test]
fn trace_serializes_to_json() {
    let engine = DemoEngine::with_builtin_corpus();
    let trace = engine.classify("开心", "happy").unwrap();
    let value = serde_json::to_value(&trace).unwrap();
    assert_eq!(value["probabilities"]["happy"], 0.66);
    assert_eq!(value["features"].as_array().map(Vec::len), Some(FEATURE_DIM));
}
