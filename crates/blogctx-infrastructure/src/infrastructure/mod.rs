//! Runtime adapters for infrastructure ports

pub mod delay;

pub use delay::TokioDelay;
