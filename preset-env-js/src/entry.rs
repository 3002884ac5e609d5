use crate::ast::Stmt;
use crate::config::Config;
use crate::polyfill::create_import_statement;
use crate::polyfill::is_polyfill_import;
use crate::polyfill::is_require_polyfill_statement;
use crate::polyfill::RequireType;
use crate::polyfill::POLYFILL_SOURCE;
use ahash::HashSet;
use ahash::HashSetExt;
use tracing::debug;
use tracing::debug_span;
use tracing::warn;

pub const REGENERATOR_MODULE: &str = "regenerator-runtime";

/// What [`replace_polyfill_entry`] did to a block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryReplacement {
  /// Form of the entry statement that was replaced, if one was found.
  pub style: Option<RequireType>,
  /// Polyfill statements inserted in place of the entry.
  pub inserted: usize,
  /// Further entry statements that were dropped.
  pub removed_duplicates: usize,
}

impl EntryReplacement {
  pub fn found(&self) -> bool {
    self.style.is_some()
  }
}

/// One statement per polyfill, in order, skipping repeats. With `regenerator`
/// the regenerator runtime is loaded last.
pub fn create_imports<S: AsRef<str>>(
  config: &Config,
  polyfills: &[S],
  require_type: RequireType,
  regenerator: bool,
) -> Vec<Stmt> {
  let mut seen = HashSet::new();
  let mut imports = Vec::with_capacity(polyfills.len() + 1);
  for polyfill in polyfills {
    let polyfill = polyfill.as_ref();
    if seen.insert(polyfill) {
      imports.push(create_import_statement(config, polyfill, require_type));
    }
  }
  if regenerator {
    imports.push(create_import_statement(config, REGENERATOR_MODULE, require_type));
  }
  imports
}

/// Replaces the first `import "@babel/polyfill"` or
/// `require("@babel/polyfill")` in `body` with statements loading the given
/// polyfills individually, in the same form as the statement they replace.
/// Later entry statements are removed.
pub fn replace_polyfill_entry<S: AsRef<str>>(
  config: &Config,
  body: &mut Vec<Stmt>,
  polyfills: &[S],
  regenerator: bool,
) -> EntryReplacement {
  let _span = debug_span!("replace_polyfill_entry", polyfills = polyfills.len()).entered();
  let mut report = EntryReplacement::default();
  let mut out = Vec::with_capacity(body.len() + polyfills.len());
  for stmt in body.drain(..) {
    let style = if is_polyfill_import(&stmt) {
      RequireType::Import
    } else if is_require_polyfill_statement(&stmt) {
      RequireType::Require
    } else {
      out.push(stmt);
      continue;
    };

    if report.found() {
      warn!("`{POLYFILL_SOURCE}` should be loaded once; removing duplicate {style}");
      report.removed_duplicates += 1;
      continue;
    }

    let imports = create_imports(config, polyfills, style, regenerator);
    for import in &imports {
      debug!(statement = %import.to_source(), "replacing polyfill entry");
    }
    report.style = Some(style);
    report.inserted = imports.len();
    out.extend(imports);
  }
  *body = out;

  if !report.found() {
    debug!("no `{POLYFILL_SOURCE}` entry found");
  }
  report
}
