// src/core.rs
pub mod aggregator;
pub mod corpus;
pub mod engine;
pub mod partition;
pub mod reduce;
pub mod strategy;
pub mod tokenizer;
pub mod tracker;
pub mod worker;

#[cfg(test)]
pub mod test_utils;
