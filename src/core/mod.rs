pub mod codec;
pub mod encoder;
pub mod engine;
pub mod marks;
pub mod types;
