// Copyright 2018-2025 the Deno authors. All rights reserved. MIT license.

use std::time::Instant;

/// A struct to measure how long a function takes to execute.
///
/// When the struct is dropped, `debug!` is used to print the measurement.
pub struct PerformanceMark {
  name: &'static str,
  start: Instant,
}

impl PerformanceMark {
  pub fn new(name: &'static str) -> Self {
    Self {
      name,
      start: Instant::now(),
    }
  }
}

impl Drop for PerformanceMark {
  fn drop(&mut self) {
    debug!("{} took {:#?}", self.name, self.start.elapsed());
  }
}
