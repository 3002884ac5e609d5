use crate::ast::Expr;
use crate::ast::ImportDecl;
use crate::ast::Stmt;
use crate::config::Config;
use crate::error::PresetError;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The legacy all-in-one polyfill package that entry points import.
pub const POLYFILL_SOURCE: &str = "@babel/polyfill";

/// Prefix for polyfill modules without an entry in [`Config::module_paths`].
pub const DEFAULT_MODULE_PREFIX: &str = "core-js/modules/";

/// Hoist priority of generated imports. Higher than the default of 1, so they
/// run before the module's own statements.
pub const POLYFILL_BLOCK_HOIST: u32 = 3;

/// The statement queries needed to recognise `require("...")` calls. Hosts
/// implement this for their own AST so this crate doesn't depend on it.
pub trait CallStatement {
  /// Name of the callee if the statement is nothing but a call expression
  /// whose callee is a plain identifier.
  fn callee_name(&self) -> Option<&str>;

  /// Value of the argument if the statement is nothing but a call expression
  /// with exactly one argument, and that argument is a string literal.
  fn single_string_literal_argument(&self) -> Option<&str>;
}

impl CallStatement for Stmt {
  fn callee_name(&self) -> Option<&str> {
    match self {
      Stmt::Expr(Expr::Call(call)) => match call.callee.as_ref() {
        Expr::Id(name) => Some(name),
        _ => None,
      },
      _ => None,
    }
  }

  fn single_string_literal_argument(&self) -> Option<&str> {
    match self {
      Stmt::Expr(Expr::Call(call)) => match call.arguments.as_slice() {
        [Expr::Str(value)] => Some(value),
        _ => None,
      },
      _ => None,
    }
  }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequireType {
  /// `import "x";`
  #[default]
  Import,
  /// `require("x");`
  Require,
}

impl FromStr for RequireType {
  type Err = PresetError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "import" => Ok(RequireType::Import),
      "require" => Ok(RequireType::Require),
      other => Err(PresetError::UnknownRequireType(other.to_string())),
    }
  }
}

impl fmt::Display for RequireType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      RequireType::Import => "import",
      RequireType::Require => "require",
    })
  }
}

pub fn is_polyfill_source(source: &str) -> bool {
  source == POLYFILL_SOURCE
}

/// Matches exactly `require("@babel/polyfill");`. Extra arguments, a
/// non-literal argument, a computed callee or an enclosing assignment all
/// disqualify the statement.
pub fn is_require_polyfill_statement<S: CallStatement + ?Sized>(stmt: &S) -> bool {
  stmt.callee_name() == Some("require")
    && stmt
      .single_string_literal_argument()
      .is_some_and(is_polyfill_source)
}

/// Matches `import "@babel/polyfill";` and imports of it with bindings.
pub fn is_polyfill_import(stmt: &Stmt) -> bool {
  matches!(stmt, Stmt::Import(decl) if is_polyfill_source(&decl.source))
}

pub fn resolve_module_path(config: &Config, module: &str) -> String {
  match config.module_path_override(module) {
    Some(path) => path.to_string(),
    None => format!("{DEFAULT_MODULE_PREFIX}{module}"),
  }
}

/// Builds the statement that loads polyfill `module`. Imports carry
/// [`POLYFILL_BLOCK_HOIST`]; requires are untagged. Inserting the statement
/// is up to the caller.
pub fn create_import_statement(config: &Config, module: &str, require_type: RequireType) -> Stmt {
  let path = resolve_module_path(config, module);
  match require_type {
    RequireType::Import => Stmt::Import(ImportDecl {
      specifiers: Vec::new(),
      source: path,
      block_hoist: Some(POLYFILL_BLOCK_HOIST),
    }),
    RequireType::Require => Stmt::Expr(Expr::call(Expr::id("require"), vec![Expr::str(path)])),
  }
}
