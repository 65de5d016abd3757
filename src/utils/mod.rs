pub mod code_generator;
pub mod url_validator;

pub use code_generator::{CODE_ALPHABET, CodeGenerator};
