// Copyright 2020-2025 the Deno authors. All rights reserved. MIT license.
use crate::context::Context;
use deno_ast::view as ast_view;
use deno_ast::view::Node;
use deno_ast::view::NodeTrait;

/// Callbacks for the statement kinds a rule can subscribe to.
///
/// Every method defaults to a no-op, so a handler only implements the kinds
/// it cares about. Nested statements are reached by [`Traverse`], a handler
/// never has to walk into children on its own.
pub trait Handler {
  fn do_while_stmt(&mut self, _n: &ast_view::DoWhileStmt, _ctx: &mut Context) {
  }
  fn for_in_stmt(&mut self, _n: &ast_view::ForInStmt, _ctx: &mut Context) {}
  fn for_of_stmt(&mut self, _n: &ast_view::ForOfStmt, _ctx: &mut Context) {}
  fn for_stmt(&mut self, _n: &ast_view::ForStmt, _ctx: &mut Context) {}
  fn if_stmt(&mut self, _n: &ast_view::IfStmt, _ctx: &mut Context) {}
  fn while_stmt(&mut self, _n: &ast_view::WhileStmt, _ctx: &mut Context) {}
}

pub trait Traverse: Handler {
  /// Visits `node` and all of its descendants depth-first, parents before
  /// children and siblings in source order.
  fn traverse<'a, N>(&mut self, node: N, ctx: &mut Context)
  where
    N: NodeTrait<'a>,
  {
    let node = node.as_node();

    match node {
      Node::DoWhileStmt(n) => self.do_while_stmt(n, ctx),
      Node::ForInStmt(n) => self.for_in_stmt(n, ctx),
      Node::ForOfStmt(n) => self.for_of_stmt(n, ctx),
      Node::ForStmt(n) => self.for_stmt(n, ctx),
      Node::IfStmt(n) => self.if_stmt(n, ctx),
      Node::WhileStmt(n) => self.while_stmt(n, ctx),
      _ => {}
    }

    for child in node.children() {
      self.traverse(child, ctx);
    }
  }
}

impl<H: Handler> Traverse for H {}
