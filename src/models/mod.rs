pub mod recommendation;
pub mod sample;
