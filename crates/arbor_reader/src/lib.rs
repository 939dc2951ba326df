#![doc = include_str!("../README.md")]

pub mod node;
pub mod reader;
pub mod sexpr;

pub use self::{
    node::{GenericNode, GenericNumber, Pair},
    reader::{ParseError, ReadError, ReadResult, TreeReader},
    sexpr::SexprReader,
};
