#![doc = include_str!("../README.md")]

pub mod accessors;
pub mod error;
pub mod expr;
pub mod head;
pub mod lambda;
pub mod value;

pub use self::{
    error::ShapeError,
    expr::TypedExpr,
    head::Head,
    lambda::{Environment, LambdaInfo},
    value::{BoxedNumber, TypedValue},
};
