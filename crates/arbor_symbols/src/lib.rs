#![doc = include_str!("../README.md")]

pub mod symbol;
pub mod symbol_table;

pub use self::{symbol::Symbol, symbol_table::SymbolTable};
