use preset_env_js::ast::emit_block;
use preset_env_js::ast::hoist_block;
use preset_env_js::ast::Expr;
use preset_env_js::ast::ImportDecl;
use preset_env_js::ast::Stmt;
use preset_env_js::entry::EntryReplacement;
use preset_env_js::replace_polyfill_entry;
use preset_env_js::Config;
use preset_env_js::RequireType;
use std::io;
use std::sync::Arc;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

fn polyfill_import() -> Stmt {
  Stmt::Import(ImportDecl {
    specifiers: Vec::new(),
    source: "@babel/polyfill".into(),
    block_hoist: None,
  })
}

fn polyfill_require() -> Stmt {
  Stmt::Expr(Expr::call(
    Expr::id("require"),
    vec![Expr::str("@babel/polyfill")],
  ))
}

#[test]
fn import_entry_is_replaced_and_hoisted() {
  let mut body = vec![
    Stmt::Raw("console.log(1);".into()),
    polyfill_import(),
    Stmt::Raw("export default 2;".into()),
  ];
  let report = replace_polyfill_entry(
    Config::builtin(),
    &mut body,
    &["es.array.includes", "es.promise"],
    true,
  );
  assert_eq!(
    report,
    EntryReplacement {
      style: Some(RequireType::Import),
      inserted: 3,
      removed_duplicates: 0,
    }
  );

  hoist_block(&mut body);
  assert_eq!(
    emit_block(&body),
    "import \"core-js/modules/es.array.includes\";\n\
     import \"core-js/modules/es.promise\";\n\
     import \"regenerator-runtime/runtime\";\n\
     console.log(1);\n\
     export default 2;\n"
  );
}

#[test]
fn require_entry_keeps_its_position() {
  let mut body = vec![
    Stmt::Raw("\"use strict\";".into()),
    polyfill_require(),
    Stmt::Raw("main();".into()),
  ];
  let report = replace_polyfill_entry(Config::builtin(), &mut body, &["es.map"], false);
  assert_eq!(report.style, Some(RequireType::Require));
  assert_eq!(report.inserted, 1);

  hoist_block(&mut body);
  assert_eq!(
    emit_block(&body),
    "\"use strict\";\nrequire(\"core-js/modules/es.map\");\nmain();\n"
  );
}

#[test]
fn custom_module_paths_are_used() {
  let config = Config::default().with_module_path("es.map", "./shims/map.js");
  let mut body = vec![polyfill_require()];
  replace_polyfill_entry(&config, &mut body, &["es.map", "es.set"], false);
  assert_eq!(
    emit_block(&body),
    "require(\"./shims/map.js\");\nrequire(\"core-js/modules/es.set\");\n"
  );
}

#[derive(Clone, Default)]
struct SharedWriter {
  buffer: Arc<Mutex<Vec<u8>>>,
}

struct SharedWriterGuard<'a> {
  buffer: &'a Arc<Mutex<Vec<u8>>>,
}

impl<'a> io::Write for SharedWriterGuard<'a> {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.buffer.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl<'a> MakeWriter<'a> for SharedWriter {
  type Writer = SharedWriterGuard<'a>;

  fn make_writer(&'a self) -> Self::Writer {
    SharedWriterGuard {
      buffer: &self.buffer,
    }
  }
}

#[test]
fn duplicate_entries_are_removed_with_a_warning() {
  let writer = SharedWriter::default();
  let subscriber = tracing_subscriber::fmt()
    .with_max_level(tracing::Level::WARN)
    .with_ansi(false)
    .with_writer(writer.clone())
    .finish();
  let guard = tracing::subscriber::set_default(subscriber);

  let mut body = vec![
    polyfill_import(),
    Stmt::Raw("run();".into()),
    polyfill_require(),
    polyfill_import(),
  ];
  let report = replace_polyfill_entry(Config::builtin(), &mut body, &["es.symbol"], false);
  drop(guard);

  assert_eq!(report.style, Some(RequireType::Import));
  assert_eq!(report.removed_duplicates, 2);
  assert_eq!(
    emit_block(&body),
    "import \"core-js/modules/es.symbol\";\nrun();\n"
  );

  let output = String::from_utf8(writer.buffer.lock().unwrap().clone()).unwrap();
  assert!(
    output.contains("should be loaded once"),
    "expected duplicate warning, got: {output}"
  );
  assert_eq!(output.matches("WARN").count(), 2, "got: {output}");
}
