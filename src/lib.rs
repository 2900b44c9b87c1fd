pub mod api;
pub mod error;
pub mod generator;
pub mod graph;
pub mod noa;
pub mod sif_examples;
