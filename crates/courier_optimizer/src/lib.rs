pub mod error;
pub mod json;
pub mod pricing;
pub mod problem;
pub mod solver;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
