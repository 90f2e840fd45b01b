pub mod prediction;
pub mod row;

pub use prediction::Prediction;
pub use row::Row;

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
