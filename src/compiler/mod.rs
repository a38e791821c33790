//! Compilation: the transform pass, the stringify pass, and parameter
//! binding against the placeholder registry.

mod registry;
mod stringify;
mod transform;

#[cfg(test)]
mod tests;

pub use registry::PlaceholderRegistry;

use crate::ast::Node;
use crate::dialect::{Dialect, Postgres};
use crate::error::{SelqError, SelqResult};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Compiles an AST into SQL text for one dialect and keeps the resulting
/// placeholder registry for parameter binding.
///
/// Compilation state is reset on every [`compile`](Compiler::compile)
/// call; a compiler is single-threaded, but independent compilers run in
/// parallel freely.
pub struct Compiler {
    dialect: Box<dyn Dialect>,
    buffer: String,
    placeholders: PlaceholderRegistry,
}

impl Compiler {
    pub fn new(dialect: impl Dialect + 'static) -> Self {
        Self {
            dialect: Box::new(dialect),
            buffer: String::new(),
            placeholders: PlaceholderRegistry::default(),
        }
    }

    /// A compiler for the default dialect.
    pub fn postgres() -> Self {
        Self::new(Postgres)
    }

    /// Compile a node into SQL text. The node is consumed: the transform
    /// pass may rebuild subtrees before printing.
    ///
    /// There is no partial output: any failure drops the buffer and
    /// returns the error.
    pub fn compile(&mut self, node: impl Into<Node>) -> SelqResult<String> {
        self.buffer.clear();
        self.placeholders = PlaceholderRegistry::default();
        let node = node.into().transform();
        self.stringify(&node)?;
        Ok(std::mem::take(&mut self.buffer))
    }

    /// The placeholder registry of the most recent compilation.
    pub fn placeholders(&self) -> &PlaceholderRegistry {
        &self.placeholders
    }

    /// Turn a `{name → value}` map into the positional parameter vector
    /// for the most recent compilation. Every supplied name must occur in
    /// the query and every placeholder must be covered.
    pub fn build_params<K, V>(&self, input: &HashMap<K, V>) -> SelqResult<Vec<V>>
    where
        K: Borrow<str> + Eq + Hash,
        V: Clone,
    {
        for key in input.keys() {
            let name = key.borrow();
            if self.placeholders.positions_of(name).is_none() {
                return Err(SelqError::UnknownInputKey(name.to_string()));
            }
        }
        self.placeholders
            .names()
            .map(|name| {
                input
                    .get(name)
                    .cloned()
                    .ok_or_else(|| SelqError::UnboundPlaceholder(name.to_string()))
            })
            .collect()
    }

    pub(crate) fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    pub(crate) fn write(&mut self, sql: &str) {
        self.buffer.push_str(sql);
    }

    pub(crate) fn write_identifier(&mut self, name: &str) {
        let quoted = self.dialect.quote_identifier(name);
        self.buffer.push_str(&quoted);
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::postgres()
    }
}
