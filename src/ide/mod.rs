//! IDE features — completion synthesis for host editors.
//!
//! This module is the interface between the engine and a completion host.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: synthesis takes data in and returns data out
//! 2. **No host types**: plain data here, converted at the host boundary
//!    (`CompletionKind::to_lsp` is the only concession)
//! 3. **One session object**: [`CompletionHost`] owns the lazily loaded
//!    schema; everything else is recomputed per request
//!
//! ## Usage
//!
//! ```
//! use archint::Position;
//! use archint::ide::CompletionHost;
//!
//! let schema = archint::schema::load_str(
//!     "spec:\n  properties:\n    Company:\n      type: string\n      description: Company name\n",
//! )
//! .unwrap();
//! let host = CompletionHost::with_schema(schema);
//!
//! let items = host.provide_completions("", Position::new(0, 0));
//! assert_eq!(items[0].label.as_ref(), "Company");
//! ```

mod completion;
mod host;
mod trigger;

pub use completion::{CompletionItem, CompletionKind, TRIGGER_SUGGEST_COMMAND, completions};
pub use host::{ACKNOWLEDGE_COMMAND, ACKNOWLEDGE_MESSAGE, CompletionHost};
pub use trigger::{TriggerKind, is_trigger_character, newline_position};
