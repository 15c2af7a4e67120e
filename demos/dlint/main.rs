// Copyright 2020-2025 the Deno authors. All rights reserved. MIT license.
use anyhow::bail;
use anyhow::Context as _;
use anyhow::Error as AnyError;
use clap::Arg;
use clap::Command;
use deno_ast::MediaType;
use deno_ast::ModuleSpecifier;
use deno_lint_curly::diagnostic::apply_lint_fixes;
use deno_lint_curly::diagnostic::LintDiagnostic;
use deno_lint_curly::linter::LintFileOptions;
use deno_lint_curly::linter::Linter;
use deno_lint_curly::linter::LinterBuilder;
use deno_lint_curly::rules::get_filtered_rules;
use rayon::prelude::*;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;

// Nested statements get fixed one level per pass.
const MAX_FIX_PASSES: usize = 16;

fn create_cli_app() -> Command<'static> {
  Command::new("dlint")
    .about("Requires curly braces around the body of control flow statements")
    .arg(
      Arg::new("FILES")
        .help("Sets the input files to use")
        .required(true)
        .multiple_values(true),
    )
    .arg(
      Arg::new("JSON")
        .long("json")
        .help("Print diagnostics as JSON"),
    )
    .arg(
      Arg::new("FIX")
        .long("fix")
        .help("Apply the suggested fixes and write the files back"),
    )
    .arg(
      Arg::new("RULES_INCLUDE")
        .long("rules-include")
        .help("Only run rules with these codes (comma separated)")
        .takes_value(true)
        .use_value_delimiter(true),
    )
    .arg(
      Arg::new("RULES_EXCLUDE")
        .long("rules-exclude")
        .help("Skip rules with these codes (comma separated)")
        .takes_value(true)
        .use_value_delimiter(true),
    )
}

fn format_diagnostic(diagnostic: &LintDiagnostic, source: &str) -> String {
  let gray = ansi_term::Colour::Fixed(8);
  let cyan = ansi_term::Colour::Fixed(14);
  let red = ansi_term::Colour::Red;

  let start = diagnostic.range.start;
  let end = diagnostic.range.end;
  let line_number = (start.line_index + 1).to_string();
  let gutter = " ".repeat(line_number.len());
  let line = source.lines().nth(start.line_index).unwrap_or_default();
  let underline_len = if start.line_index == end.line_index {
    end.column_index - start.column_index
  } else {
    line.len().saturating_sub(start.column_index)
  };

  let mut lines = vec![
    format!(
      "({}) {}",
      gray.paint(diagnostic.code.as_str()),
      diagnostic.message
    ),
    cyan
      .paint(format!(
        "{}--> {}:{}:{}",
        gutter,
        diagnostic.specifier,
        start.line_index + 1,
        start.column_index + 1
      ))
      .to_string(),
    format!("{} |", gutter),
    format!("{} | {}", line_number, line),
    format!(
      "{} | {}{}",
      gutter,
      " ".repeat(start.column_index),
      red.paint("^".repeat(underline_len.max(1)))
    ),
  ];
  if let Some(hint) = &diagnostic.hint {
    lines.push(format!("{} = hint: {}", gutter, hint));
  }
  lines.join("\n")
}

fn lint_source(
  linter: &Linter,
  specifier: &ModuleSpecifier,
  source_code: &str,
) -> Result<Vec<LintDiagnostic>, AnyError> {
  let (_, diagnostics) = linter
    .lint_file(LintFileOptions {
      specifier: specifier.clone(),
      source_code: source_code.to_string(),
      media_type: MediaType::from_specifier(specifier),
    })
    .map_err(|err| anyhow::anyhow!("{}: {}", specifier, err))?;
  Ok(diagnostics)
}

/// Applies fixes until the file is clean, returning the fixed text.
fn fix_file(
  linter: &Linter,
  specifier: &ModuleSpecifier,
  source_code: String,
) -> Result<String, AnyError> {
  let mut current = source_code;
  for _ in 0..MAX_FIX_PASSES {
    let (parsed_source, diagnostics) = linter
      .lint_file(LintFileOptions {
        specifier: specifier.clone(),
        source_code: current.clone(),
        media_type: MediaType::from_specifier(specifier),
      })
      .map_err(|err| anyhow::anyhow!("{}: {}", specifier, err))?;
    if diagnostics.iter().all(|d| d.fixes.is_empty()) {
      return Ok(current);
    }
    current = apply_lint_fixes(parsed_source.text_info_lazy(), &diagnostics);
  }
  bail!("Fixes did not settle after {} passes", MAX_FIX_PASSES)
}

/// Writes `fixed` to `path` unless it equals `original`. Returns whether the
/// file was written.
fn write_if_changed(
  path: &Path,
  original: &str,
  fixed: &str,
) -> Result<bool, AnyError> {
  if original == fixed {
    return Ok(false);
  }
  std::fs::write(path, fixed)
    .with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(true)
}

fn specifier_for(path: &Path) -> Result<ModuleSpecifier, AnyError> {
  let path = std::fs::canonicalize(path)
    .with_context(|| format!("Failed to resolve {}", path.display()))?;
  ModuleSpecifier::from_file_path(&path)
    .map_err(|_| anyhow::anyhow!("Invalid file path {}", path.display()))
}

fn main() -> Result<(), AnyError> {
  env_logger::init();

  let matches = create_cli_app().get_matches();
  let paths: Vec<PathBuf> = matches
    .values_of("FILES")
    .map(|values| values.map(PathBuf::from).collect())
    .unwrap_or_default();
  let json = matches.is_present("JSON");
  let fix = matches.is_present("FIX");

  let codes = |name: &str| {
    matches
      .values_of(name)
      .map(|values| values.map(String::from).collect::<Vec<_>>())
  };
  let rules =
    get_filtered_rules(codes("RULES_EXCLUDE"), codes("RULES_INCLUDE"));
  log::debug!(
    "running rules: {:?}",
    rules.iter().map(|r| r.code()).collect::<Vec<_>>()
  );

  let linter = LinterBuilder::default().rules(rules).build();
  let all_diagnostics = Mutex::new(Vec::new());

  paths.par_iter().try_for_each(|path| -> Result<(), AnyError> {
    let specifier = specifier_for(path)?;
    let source_code = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read {}", path.display()))?;

    let source_code = if fix {
      let fixed = fix_file(&linter, &specifier, source_code.clone())?;
      write_if_changed(path, &source_code, &fixed)?;
      fixed
    } else {
      source_code
    };

    let diagnostics = lint_source(&linter, &specifier, &source_code)?;
    let mut all_diagnostics = all_diagnostics.lock().unwrap();
    all_diagnostics
      .extend(diagnostics.into_iter().map(|d| (d, source_code.clone())));
    Ok(())
  })?;

  let mut all_diagnostics = all_diagnostics.into_inner().unwrap();
  all_diagnostics.sort_by(|(a, _), (b, _)| {
    a.specifier
      .cmp(&b.specifier)
      .then(a.range.start.byte_index.cmp(&b.range.start.byte_index))
  });

  if json {
    let diagnostics =
      all_diagnostics.iter().map(|(d, _)| d).collect::<Vec<_>>();
    println!("{}", serde_json::to_string_pretty(&diagnostics)?);
  } else {
    for (diagnostic, source_code) in &all_diagnostics {
      eprintln!("{}\n", format_diagnostic(diagnostic, source_code));
    }
  }

  if !all_diagnostics.is_empty() {
    eprintln!("Found {} problems", all_diagnostics.len());
    std::process::exit(1);
  }
  Ok(())
}
