// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod logging;
pub mod persistence;

pub use crate::core::engine::{ClassificationTrace, DemoEngine, ProcessingStep};
pub use crate::corpus::Corpus;
pub use crate::error::{DemoError, Result};
