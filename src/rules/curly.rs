// Copyright 2020-2025 the Deno authors. All rights reserved. MIT license.
use super::Context;
use super::LintRule;
use crate::diagnostic::LintFix;
use crate::diagnostic::LintFixChange;
use crate::handler::Handler;
use crate::handler::Traverse;
use crate::Program;

use deno_ast::view::DoWhileStmt;
use deno_ast::view::ForInStmt;
use deno_ast::view::ForOfStmt;
use deno_ast::view::ForStmt;
use deno_ast::view::IfStmt;
use deno_ast::view::NodeTrait;
use deno_ast::view::Stmt;
use deno_ast::view::WhileStmt;
use deno_ast::SourceRange;
use deno_ast::SourceRanged;
use derive_more::Display;

/// Requires the body of every `do-while`, `if`, `for-in`, `for-of`, `for`
/// and `while` statement to be a block.
///
/// Only the consequent of an `if` is checked. An `else if` is an `if`
/// statement of its own and gets checked when it is visited, while a plain
/// `else` body is left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Curly {
  fix: bool,
}

impl Curly {
  /// Reports unbraced bodies and offers a fix wrapping them in braces.
  pub const FIXABLE: Curly = Curly { fix: true };
  /// Reports unbraced bodies without any fix.
  pub const REPORT_ONLY: Curly = Curly { fix: false };
}

const CODE: &str = "curly";
const HINT: &str = "Add curly braces around the body of this statement";
const FIX_DESC: &str = "Add curly braces";

#[derive(Display)]
enum CurlyMessage {
  #[display(fmt = "Use curly braces for `{}` statement", _0)]
  UseCurlyBraces(&'static str),
}

impl LintRule for Curly {
  fn lint_program_with_ast_view<'view>(
    &self,
    context: &mut Context<'view>,
    program: Program<'view>,
  ) {
    CurlyHandler { fix: self.fix }.traverse(program, context);
  }

  fn code(&self) -> &'static str {
    CODE
  }
}

/// The statement kinds whose body must be braced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlowKind {
  DoWhile,
  If,
  ForIn,
  ForOf,
  For,
  While,
}

impl ControlFlowKind {
  /// The label used for this kind in diagnostic messages.
  pub const fn wording(self) -> &'static str {
    match self {
      ControlFlowKind::DoWhile => "do-while",
      ControlFlowKind::If => "if",
      ControlFlowKind::ForIn => "for-in",
      ControlFlowKind::ForOf => "for-of",
      ControlFlowKind::For => "for",
      ControlFlowKind::While => "while",
    }
  }
}

#[derive(Clone, Copy)]
enum ControlFlowStmt<'s, 'a> {
  DoWhile(&'s DoWhileStmt<'a>),
  If(&'s IfStmt<'a>),
  ForIn(&'s ForInStmt<'a>),
  ForOf(&'s ForOfStmt<'a>),
  For(&'s ForStmt<'a>),
  While(&'s WhileStmt<'a>),
}

impl<'s, 'a> ControlFlowStmt<'s, 'a> {
  fn kind(self) -> ControlFlowKind {
    match self {
      ControlFlowStmt::DoWhile(_) => ControlFlowKind::DoWhile,
      ControlFlowStmt::If(_) => ControlFlowKind::If,
      ControlFlowStmt::ForIn(_) => ControlFlowKind::ForIn,
      ControlFlowStmt::ForOf(_) => ControlFlowKind::ForOf,
      ControlFlowStmt::For(_) => ControlFlowKind::For,
      ControlFlowStmt::While(_) => ControlFlowKind::While,
    }
  }

  /// The statement governed by this one. For `if` that is the consequent,
  /// never the alternate.
  fn body(self) -> Stmt<'a> {
    match self {
      ControlFlowStmt::DoWhile(n) => n.body,
      ControlFlowStmt::If(n) => n.cons,
      ControlFlowStmt::ForIn(n) => n.body,
      ControlFlowStmt::ForOf(n) => n.body,
      ControlFlowStmt::For(n) => n.body,
      ControlFlowStmt::While(n) => n.body,
    }
  }

  fn range(self) -> SourceRange {
    match self {
      ControlFlowStmt::DoWhile(n) => n.range(),
      ControlFlowStmt::If(n) => n.range(),
      ControlFlowStmt::ForIn(n) => n.range(),
      ControlFlowStmt::ForOf(n) => n.range(),
      ControlFlowStmt::For(n) => n.range(),
      ControlFlowStmt::While(n) => n.range(),
    }
  }
}

fn is_block(stmt: &Stmt) -> bool {
  matches!(stmt, Stmt::Block(_))
}

/// Wraps `body` in braces. The body starts on a new line, otherwise
/// `deno fmt` turns `{ foo; }` on a single line back into `foo;`.
fn wrap_in_braces(body: &Stmt) -> LintFix {
  LintFix {
    description: FIX_DESC.into(),
    changes: vec![LintFixChange {
      new_text: format!("{{\n{}}}", body.text()).into(),
      range: body.range(),
    }],
  }
}

struct CurlyHandler {
  fix: bool,
}

impl CurlyHandler {
  fn report_no_block(&mut self, ctx: &mut Context, stmt: ControlFlowStmt) {
    let body = stmt.body();
    if is_block(&body) {
      return;
    }

    let fixes = if self.fix {
      vec![wrap_in_braces(&body)]
    } else {
      vec![]
    };

    ctx.add_diagnostic_with_fixes(
      stmt.range(),
      CODE,
      CurlyMessage::UseCurlyBraces(stmt.kind().wording()),
      Some(HINT.to_string()),
      fixes,
    );
  }
}

impl Handler for CurlyHandler {
  fn do_while_stmt(&mut self, node: &DoWhileStmt, ctx: &mut Context) {
    self.report_no_block(ctx, ControlFlowStmt::DoWhile(node));
  }

  fn if_stmt(&mut self, node: &IfStmt, ctx: &mut Context) {
    self.report_no_block(ctx, ControlFlowStmt::If(node));
  }

  fn for_in_stmt(&mut self, node: &ForInStmt, ctx: &mut Context) {
    self.report_no_block(ctx, ControlFlowStmt::ForIn(node));
  }

  fn for_of_stmt(&mut self, node: &ForOfStmt, ctx: &mut Context) {
    self.report_no_block(ctx, ControlFlowStmt::ForOf(node));
  }

  fn for_stmt(&mut self, node: &ForStmt, ctx: &mut Context) {
    self.report_no_block(ctx, ControlFlowStmt::For(node));
  }

  fn while_stmt(&mut self, node: &WhileStmt, ctx: &mut Context) {
    self.report_no_block(ctx, ControlFlowStmt::While(node));
  }
}
