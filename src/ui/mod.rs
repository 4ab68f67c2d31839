//! Display surface, page shell and markup helpers.

pub mod markup;
pub mod page;
pub mod surface;
