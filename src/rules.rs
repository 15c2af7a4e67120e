// Copyright 2020-2025 the Deno authors. All rights reserved. MIT license.
use crate::context::Context;
use crate::Program;

pub mod curly;

pub trait LintRule: std::fmt::Debug + Send + Sync {
  /// Executes lint using `deno_ast::view`.
  fn lint_program_with_ast_view<'view>(
    &self,
    context: &mut Context<'view>,
    program: Program<'view>,
  );

  /// Returns the unique code that identifies the rule
  fn code(&self) -> &'static str;
}

pub fn get_all_rules() -> Vec<&'static dyn LintRule> {
  get_all_rules_raw()
}

/// Returns a list of rules after filtering.
///
/// Following rules are applied (in the described order):
///
/// - all defined rules are taken as the starting point
///
/// - if `maybe_exclude` is `Some`, all rules with matching codes will
///   be filtered out
///
/// - if `maybe_include` is `Some`, only rules with matching codes are kept,
///   unless they were excluded
///
/// Before returning the list will sorted alphabetically.
pub fn get_filtered_rules(
  maybe_exclude: Option<Vec<String>>,
  maybe_include: Option<Vec<String>>,
) -> Vec<&'static dyn LintRule> {
  let mut rules = get_all_rules_raw()
    .into_iter()
    .filter(|rule| {
      let code = rule.code().to_owned();
      let mut passes = true;

      if let Some(includes) = &maybe_include {
        passes &= includes.contains(&code);
      }

      if let Some(excludes) = &maybe_exclude {
        passes &= !excludes.contains(&code);
      }

      passes
    })
    .collect::<Vec<_>>();

  rules.sort_by_key(|r| r.code());

  rules
}

fn get_all_rules_raw() -> Vec<&'static dyn LintRule> {
  vec![&curly::Curly::FIXABLE]
}
