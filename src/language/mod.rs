pub mod ast;
pub mod builtins;
pub mod call;
pub mod errors;
pub mod function;
pub mod signature;
pub mod span;
pub mod types;
