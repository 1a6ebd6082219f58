pub mod journal;
pub mod mood;
