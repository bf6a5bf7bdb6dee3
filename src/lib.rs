pub mod batch;
pub mod catalog;
pub mod compat;
pub mod engine;
pub mod error;
pub mod graph;
pub mod model;
pub mod suggest;
pub mod validate;
pub mod wasm;
