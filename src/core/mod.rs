// src/core/mod.rs
pub mod engine;
pub mod features;
pub mod sequencer;
pub mod synthesizer;
pub mod types;
pub mod vocabulary;
