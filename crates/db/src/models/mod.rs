pub mod audit;
pub mod campaign;
pub mod concept_note;
pub mod suggestion;
