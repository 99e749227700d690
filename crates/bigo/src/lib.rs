//! Heuristic complexity guessing for code playground snippets
//!
//! [`classify`] maps source text to a time and a space complexity class using
//! shallow lexical rules, and [`expand`] turns those classes into chart data.
//! Both are pure and never fail.

pub mod classifier;
pub mod complexity;
pub mod growth;

pub use classifier::{classify, ClassificationResult};
pub use complexity::{ComplexityClass, ParseComplexityError, MAX_RANK};
pub use growth::{expand, expand_labels, DisplayDetails, Expansion, GrowthSample, SAMPLE_SIZES};
