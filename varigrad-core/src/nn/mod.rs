// src/nn/mod.rs
// Parameter containers built on top of the graph operations.

pub mod init;
pub mod layers;
pub mod module; // Trait Module
pub mod parameter; // struct Parameter

// Re-export common items
pub use layers::linear::Linear;
pub use module::Module;
pub use parameter::Parameter;
