// Copyright 2018-2025 the Deno authors. All rights reserved. MIT license.

use std::borrow::Cow;

use deno_ast::ModuleSpecifier;
use deno_ast::SourceRange;
use deno_ast::SourceTextInfo;
use deno_ast::TextChange;
use serde::Serialize;
use serde::Serializer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
  /// The 0-indexed line index.
  #[serde(rename(serialize = "line"))]
  #[serde(serialize_with = "to_one_indexed")]
  pub line_index: usize,
  /// The 0-indexed column index.
  #[serde(rename(serialize = "col"))]
  pub column_index: usize,
  #[serde(rename(serialize = "bytePos"))]
  pub byte_index: usize,
}

impl Position {
  pub fn new(byte_index: usize, loc: deno_ast::LineAndColumnIndex) -> Self {
    Position {
      line_index: loc.line_index,
      column_index: loc.column_index,
      byte_index,
    }
  }
}

fn to_one_indexed<S>(x: &usize, s: S) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  s.serialize_u32((x + 1) as u32)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Range {
  pub start: Position,
  pub end: Position,
}

/// A single text replacement that is part of a [`LintFix`].
#[derive(Debug, Clone)]
pub struct LintFixChange {
  pub new_text: Cow<'static, str>,
  pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct LintFix {
  pub description: Cow<'static, str>,
  pub changes: Vec<LintFixChange>,
}

#[derive(Clone, Serialize)]
pub struct LintDiagnostic {
  pub specifier: ModuleSpecifier,
  pub range: Range,
  #[serde(skip)]
  pub text_info: SourceTextInfo,
  pub message: String,
  pub code: String,
  pub hint: Option<String>,
  #[serde(skip)]
  pub fixes: Vec<LintFix>,
}

impl std::fmt::Debug for LintDiagnostic {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("LintDiagnostic")
      .field("specifier", &self.specifier)
      .field("range", &self.range)
      .field("text_info", &"<omitted>")
      .field("message", &self.message)
      .field("code", &self.code)
      .field("hint", &self.hint)
      .field("fixes", &self.fixes)
      .finish()
  }
}

/// Applies the first fix of every diagnostic to the source text.
///
/// Diagnostics must all come from the same file as `text_info`. A change that
/// overlaps one starting earlier is skipped; lint the result again to pick it
/// up on the next pass.
pub fn apply_lint_fixes(
  text_info: &SourceTextInfo,
  diagnostics: &[LintDiagnostic],
) -> String {
  let start_pos = text_info.range().start;
  let mut changes = diagnostics
    .iter()
    .filter_map(|d| d.fixes.first())
    .flat_map(|fix| fix.changes.iter())
    .map(|change| TextChange {
      range: change.range.as_byte_range(start_pos),
      new_text: change.new_text.to_string(),
    })
    .collect::<Vec<_>>();
  changes.sort_by_key(|change| change.range.start);

  let mut last_end = 0;
  changes.retain(|change| {
    if change.range.start < last_end {
      return false;
    }
    last_end = change.range.end;
    true
  });
  deno_ast::apply_text_changes(text_info.text_str(), changes)
}
