#![doc = include_str!("../README.md")]

pub mod error;
mod frontend;
pub mod literal;
pub mod syntax_check;
pub mod translator;

pub use self::{
    error::{BuildFrontendError, TranslateError, TranslateResult},
    frontend::{Frontend, FrontendBuilder},
    translator::Translator,
};
