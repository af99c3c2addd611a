pub mod release;
pub mod sale;
