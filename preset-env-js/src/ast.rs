//! Minimal statement shapes for the code this crate generates or has to
//! recognise: bare `import "x";` declarations and `require("x");` calls.
//!
//! Hosts with a full AST only need to implement
//! [`CallStatement`](crate::polyfill::CallStatement) for their statement type;
//! these nodes are for hosts that splice source text, and for tests.

use serde::Deserialize;
use serde::Serialize;
use std::cmp::Reverse;

/// Priority given to statements without an explicit hoist tag.
pub const DEFAULT_BLOCK_HOIST: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
  Id(String),
  Str(String),
  Call(CallExpr),
  Member(MemberExpr),
  Assign(AssignExpr),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpr {
  pub callee: Box<Expr>,
  pub arguments: Vec<Expr>,
}

// `object.property`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberExpr {
  pub object: Box<Expr>,
  pub property: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignExpr {
  pub target: Box<Expr>,
  pub value: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDecl {
  // `import {a, b} from "x"`; empty for side-effect imports.
  pub specifiers: Vec<String>,
  pub source: String,
  /// Statements with a higher value are moved ahead of lower ones by
  /// [`hoist_block`].
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub block_hoist: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
  Import(ImportDecl),
  Expr(Expr),
  /// Any other statement, carried as source text and emitted verbatim.
  Raw(String),
}

impl Expr {
  pub fn id(name: impl Into<String>) -> Expr {
    Expr::Id(name.into())
  }

  pub fn str(value: impl Into<String>) -> Expr {
    Expr::Str(value.into())
  }

  pub fn call(callee: Expr, arguments: Vec<Expr>) -> Expr {
    Expr::Call(CallExpr {
      callee: Box::new(callee),
      arguments,
    })
  }

  pub fn member(object: Expr, property: impl Into<String>) -> Expr {
    Expr::Member(MemberExpr {
      object: Box::new(object),
      property: property.into(),
    })
  }

  pub fn assign(target: Expr, value: Expr) -> Expr {
    Expr::Assign(AssignExpr {
      target: Box::new(target),
      value: Box::new(value),
    })
  }

  fn emit(&self, out: &mut String) {
    match self {
      Expr::Id(name) => out.push_str(name),
      Expr::Str(value) => emit_string_literal(out, value),
      Expr::Call(call) => {
        call.callee.emit_operand(out);
        out.push('(');
        for (i, arg) in call.arguments.iter().enumerate() {
          if i > 0 {
            out.push_str(", ");
          }
          arg.emit(out);
        }
        out.push(')');
      }
      Expr::Member(member) => {
        member.object.emit_operand(out);
        out.push('.');
        out.push_str(&member.property);
      }
      Expr::Assign(assign) => {
        assign.target.emit(out);
        out.push_str(" = ");
        assign.value.emit(out);
      }
    }
  }

  // Callee and member object positions bind tighter than assignment.
  fn emit_operand(&self, out: &mut String) {
    if let Expr::Assign(_) = self {
      out.push('(');
      self.emit(out);
      out.push(')');
    } else {
      self.emit(out);
    }
  }
}

impl Stmt {
  pub fn block_hoist(&self) -> Option<u32> {
    match self {
      Stmt::Import(decl) => decl.block_hoist,
      Stmt::Expr(_) | Stmt::Raw(_) => None,
    }
  }

  /// Renders the statement as JavaScript source, including the terminating
  /// semicolon.
  pub fn to_source(&self) -> String {
    let mut out = String::new();
    match self {
      Stmt::Import(decl) => {
        out.push_str("import ");
        if !decl.specifiers.is_empty() {
          out.push('{');
          out.push_str(&decl.specifiers.join(", "));
          out.push_str("} from ");
        }
        emit_string_literal(&mut out, &decl.source);
        out.push(';');
      }
      Stmt::Expr(expr) => {
        expr.emit(&mut out);
        out.push(';');
      }
      Stmt::Raw(source) => out.push_str(source),
    }
    out
  }
}

/// Renders a block one statement per line.
pub fn emit_block(body: &[Stmt]) -> String {
  let mut out = String::new();
  for stmt in body {
    out.push_str(&stmt.to_source());
    out.push('\n');
  }
  out
}

/// Reorders `body` so statements with a higher hoist priority come first.
/// Untagged statements have priority [`DEFAULT_BLOCK_HOIST`]. The sort is
/// stable, so statements of equal priority keep their relative order.
pub fn hoist_block(body: &mut [Stmt]) {
  body.sort_by_key(|stmt| Reverse(stmt.block_hoist().unwrap_or(DEFAULT_BLOCK_HOIST)));
}

fn emit_string_literal(out: &mut String, value: &str) {
  out.push('"');
  for ch in value.chars() {
    match ch {
      '\\' => out.push_str("\\\\"),
      '"' => out.push_str("\\\""),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      '\t' => out.push_str("\\t"),
      '\u{2028}' => out.push_str("\\u2028"),
      '\u{2029}' => out.push_str("\\u2029"),
      ch if ch < '\u{20}' => out.push_str(&format!("\\x{:02X}", ch as u32)),
      ch => out.push(ch),
    }
  }
  out.push('"');
}
