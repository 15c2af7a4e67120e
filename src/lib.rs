// Copyright 2020-2025 the Deno authors. All rights reserved. MIT license.

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
mod test_util;

mod ast_parser;
pub mod context;
pub mod diagnostic;
mod handler;
pub mod linter;
mod performance_mark;
pub mod rules;

pub use deno_ast::view::Program;
