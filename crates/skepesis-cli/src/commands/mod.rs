pub mod classify;
pub mod insights;
pub mod summarize;
