pub mod assignment;
pub mod construction;
pub mod engine;
pub mod ls;
pub mod optimize_options;
pub mod report;
