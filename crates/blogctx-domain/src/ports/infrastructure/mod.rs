//! Infrastructure ports

pub mod delay;

pub use delay::Delay;
