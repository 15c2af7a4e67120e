// Copyright 2020-2025 the Deno authors. All rights reserved. MIT license.
use crate::diagnostic::LintDiagnostic;
use crate::diagnostic::LintFix;
use crate::diagnostic::Position;
use crate::diagnostic::Range;
use deno_ast::view as ast_view;
use deno_ast::ModuleSpecifier;
use deno_ast::ParsedSource;
use deno_ast::SourcePos;
use deno_ast::SourceRange;
use deno_ast::SourceTextInfo;

/// `Context` stores data needed while performing all lint rules to a file.
pub struct Context<'view> {
  parsed_source: ParsedSource,
  diagnostics: Vec<LintDiagnostic>,
  program: ast_view::Program<'view>,
}

impl<'view> Context<'view> {
  pub(crate) fn new(
    parsed_source: ParsedSource,
    program: ast_view::Program<'view>,
  ) -> Self {
    Self {
      parsed_source,
      diagnostics: Vec::new(),
      program,
    }
  }

  pub fn specifier(&self) -> &ModuleSpecifier {
    self.parsed_source.specifier()
  }

  pub fn text_info(&self) -> &SourceTextInfo {
    self.parsed_source.text_info_lazy()
  }

  pub fn program(&self) -> ast_view::Program<'view> {
    self.program
  }

  /// The diagnostics reported so far, in the order they were added.
  pub fn diagnostics(&self) -> &[LintDiagnostic] {
    &self.diagnostics
  }

  pub(crate) fn into_diagnostics(self) -> Vec<LintDiagnostic> {
    self.diagnostics
  }

  pub fn add_diagnostic_with_fixes(
    &mut self,
    range: SourceRange,
    code: impl ToString,
    message: impl ToString,
    maybe_hint: Option<String>,
    fixes: Vec<LintFix>,
  ) {
    let diagnostic =
      self.create_diagnostic(range, code, message, maybe_hint, fixes);
    self.diagnostics.push(diagnostic);
  }

  pub(crate) fn create_diagnostic(
    &self,
    range: SourceRange,
    code: impl ToString,
    message: impl ToString,
    maybe_hint: Option<String>,
    fixes: Vec<LintFix>,
  ) -> LintDiagnostic {
    LintDiagnostic {
      specifier: self.specifier().clone(),
      range: Range {
        start: self.position(range.start),
        end: self.position(range.end),
      },
      text_info: self.text_info().clone(),
      message: message.to_string(),
      code: code.to_string(),
      hint: maybe_hint,
      fixes,
    }
  }

  fn position(&self, pos: SourcePos) -> Position {
    let text_info = self.text_info();
    Position::new(
      pos.as_byte_index(text_info.range().start),
      text_info.line_and_column_index(pos),
    )
  }
}
