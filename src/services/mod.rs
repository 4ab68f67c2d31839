pub mod controller;
pub mod dispatcher;
pub mod interpreter;
pub mod normalizer;
pub mod validation;
