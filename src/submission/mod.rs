pub mod form;
pub mod parser;
