// Copyright 2020-2025 the Deno authors. All rights reserved. MIT license.
use crate::ast_parser::parse_program;
use crate::context::Context;
use crate::diagnostic::LintDiagnostic;
use crate::performance_mark::PerformanceMark;
use crate::rules::get_all_rules;
use crate::rules::LintRule;
use deno_ast::MediaType;
use deno_ast::ModuleSpecifier;
use deno_ast::ParseDiagnostic;
use deno_ast::ParsedSource;

pub struct LinterBuilder {
  rules: Vec<&'static dyn LintRule>,
}

impl Default for LinterBuilder {
  fn default() -> Self {
    Self {
      rules: get_all_rules(),
    }
  }
}

impl LinterBuilder {
  pub fn build(self) -> Linter {
    Linter::new(self.rules)
  }

  /// Set a list of rules that will be used for linting.
  ///
  /// Defaults to `get_all_rules()`.
  pub fn rules(mut self, rules: Vec<&'static dyn LintRule>) -> Self {
    self.rules = rules;
    self
  }
}

/// A linter instance. It can be shared between threads; every call works on
/// its own `Context`.
pub struct Linter {
  rules: Vec<&'static dyn LintRule>,
}

pub struct LintFileOptions {
  pub specifier: ModuleSpecifier,
  pub source_code: String,
  pub media_type: MediaType,
}

impl Linter {
  fn new(rules: Vec<&'static dyn LintRule>) -> Self {
    Linter { rules }
  }

  /// Lint a single file.
  ///
  /// Returns `ParsedSource` and `Vec<LintDiagnostic>`, so the file does not
  /// have to be parsed again to apply the fixes.
  pub fn lint_file(
    &self,
    options: LintFileOptions,
  ) -> Result<(ParsedSource, Vec<LintDiagnostic>), ParseDiagnostic> {
    let _mark = PerformanceMark::new("Linter::lint_file");

    let parsed_source = {
      let _mark = PerformanceMark::new("ast_parser.parse_program");
      parse_program(options.specifier, options.media_type, options.source_code)?
    };

    let diagnostics = self.lint_with_ast(&parsed_source);

    Ok((parsed_source, diagnostics))
  }

  /// Lint an already parsed file.
  pub fn lint_with_ast(&self, parsed_source: &ParsedSource) -> Vec<LintDiagnostic> {
    let _mark = PerformanceMark::new("Linter::lint_with_ast");

    let diagnostics = parsed_source.with_view(|program| {
      let mut context = Context::new(parsed_source.clone(), program);

      for rule in &self.rules {
        let _mark = PerformanceMark::new(rule.code());
        rule.lint_program_with_ast_view(&mut context, program);
      }

      context.into_diagnostics()
    });

    debug!(
      "{} diagnostics in {}",
      diagnostics.len(),
      parsed_source.specifier()
    );
    diagnostics
  }
}
