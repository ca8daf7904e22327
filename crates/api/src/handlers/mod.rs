pub mod ai;
pub mod audit;
