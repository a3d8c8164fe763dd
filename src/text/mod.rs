//! Line-oriented text storage.

pub mod document;
pub mod row;

pub use document::Document;
pub use row::Row;
