pub mod ast;
pub mod error;
pub mod export;
pub mod scanner;
pub mod config;

pub use ast::{Document, Value};
pub use error::QuillError;
pub use scanner::Scanner;
pub use config::QuillConfig;
