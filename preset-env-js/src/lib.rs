//! Target version handling and polyfill import synthesis for a preset that
//! compiles JavaScript down to what a set of environments supports.
//!
//! # Examples
//!
//! ```
//! use preset_env_js::{create_import_statement, get_lowest_unreleased, prettify_version};
//! use preset_env_js::{Config, RequireType, VersionValue};
//!
//! let config = Config::builtin();
//! assert_eq!(prettify_version("60.5.0"), "60.5");
//! assert_eq!(
//!   get_lowest_unreleased(config, &"tp".into(), &"11.1".into(), "safari"),
//!   VersionValue::from("11.1"),
//! );
//! let stmt = create_import_statement(config, "es.promise", RequireType::Require);
//! assert_eq!(stmt.to_source(), "require(\"core-js/modules/es.promise\");");
//! ```

pub mod ast;
pub mod compare;
pub mod config;
pub mod entry;
pub mod error;
pub mod polyfill;
pub mod targets;
pub mod unreleased;
pub mod version;

pub use compare::get_lowest_unreleased;
pub use config::Config;
pub use entry::replace_polyfill_entry;
pub use error::PresetError;
pub use error::Result;
pub use polyfill::create_import_statement;
pub use polyfill::is_polyfill_source;
pub use polyfill::is_require_polyfill_statement;
pub use polyfill::resolve_module_path;
pub use polyfill::CallStatement;
pub use polyfill::RequireType;
pub use targets::filter_stage_from_list;
pub use targets::prettify_targets;
pub use targets::Targets;
pub use unreleased::is_unreleased_version;
pub use unreleased::VersionSpecifier;
pub use version::prettify_version;
pub use version::semverify;
pub use version::SemanticVersion;
pub use version::VersionValue;
