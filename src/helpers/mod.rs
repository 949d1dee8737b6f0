pub mod decision;
pub mod geo;
