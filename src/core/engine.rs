use crate::core::features::feature_vector;
use crate::core::sequencer::text_to_sequence;
use crate::core::synthesizer::probabilities;
use crate::core::types::{FeatureVector, ProbabilityDistribution, Sequence};
use crate::core::vocabulary::Vocabulary;
use crate::corpus::Corpus;
use crate::error::Result;
use serde::Serialize;
use tracing::debug;

// The demo engine owns the corpus and a vocabulary frozen from the corpus it
// was created with. Editing the corpus later does not renumber characters.
pub struct DemoEngine {
    corpus: Corpus,
    vocabulary: Vocabulary,
}

/// Everything one classification produced, stage by stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationTrace {
    pub text: String,
    pub true_category: String,
    pub sequence: Sequence,
    pub features: FeatureVector,
    pub probabilities: ProbabilityDistribution,
    pub predicted: String,
}

/// One line of the five-step processing walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessingStep {
    pub number: u8,
    pub title: &'static str,
    pub detail: String,
}

impl DemoEngine {
    pub fn new(corpus: Corpus) -> Self {
        let vocabulary = Vocabulary::from_corpus(&corpus);
        Self { corpus, vocabulary }
    }

    pub fn with_builtin_corpus() -> Self {
        Self::new(Corpus::builtin())
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn corpus_mut(&mut self) -> &mut Corpus {
        &mut self.corpus
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Runs text through sequencer, feature extractor and synthesizer.
    /// `true_category` must be one of the corpus categories.
    pub fn classify(&self, text: &str, true_category: &str) -> Result<ClassificationTrace> {
        let categories = self.corpus.category_keys();
        let sequence = text_to_sequence(text, &self.vocabulary);
        debug!(?sequence, "sequence");
        let features = feature_vector(&sequence);
        let probabilities = probabilities(&features, &categories, true_category)?;
        let predicted = probabilities
            .predicted()
            .unwrap_or(true_category)
            .to_string();
        debug!(%predicted, "classified");

        Ok(ClassificationTrace {
            text: text.to_string(),
            true_category: true_category.to_string(),
            sequence,
            features,
            probabilities,
            predicted,
        })
    }

    /// Classifies a stored sample with its own category as the truth.
    pub fn classify_sample(&self, category: &str, index: usize) -> Result<ClassificationTrace> {
        let text = self.corpus.sample(category, index)?;
        self.classify(text, category)
    }

    /// The five display steps for a trace, with category labels resolved.
    pub fn steps(&self, trace: &ClassificationTrace) -> Vec<ProcessingStep> {
        let join = |items: Vec<String>| items.join(", ");
        let probabilities = join(
            trace
                .probabilities
                .iter()
                .map(|(name, p)| format!("{}:{}", self.corpus.label(name), p.value()))
                .collect(),
        );

        vec![
            ProcessingStep {
                number: 1,
                title: "Text preprocessing",
                detail: format!("\u{201c}{}\u{201d} → clean and split into characters", trace.text),
            },
            ProcessingStep {
                number: 2,
                title: "Vocabulary lookup",
                detail: format!(
                    "to number sequence → [{}]",
                    join(trace.sequence.iter().map(ToString::to_string).collect())
                ),
            },
            ProcessingStep {
                number: 3,
                title: "RNN processing",
                detail: format!(
                    "sequence features → [{}]",
                    join(trace.features.iter().map(ToString::to_string).collect())
                ),
            },
            ProcessingStep {
                number: 4,
                title: "Classification",
                detail: format!("category probabilities → [{probabilities}]"),
            },
            ProcessingStep {
                number: 5,
                title: "Result",
                detail: self.corpus.label(&trace.predicted).to_string(),
            },
        ]
    }
}
