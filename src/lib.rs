//! tinytpl: line-oriented positional template expansion.
//!
//! A [`LineSource`] hands the template to an [`Engine`] one line at a time.
//! The engine replaces `$0`..`$9` with entries of a borrowed [`Values`] table
//! and returns each expanded line from a single, exactly sized output buffer.
//!
//! ```
//! use tinytpl::{Engine, MemoryReader};
//!
//! let mut engine = Engine::new(MemoryReader::new("Hello, $0!\n$1 is $$10"));
//! engine.start(&["world", "Price"]);
//! assert_eq!(engine.next_line()?, Some(&b"Hello, world!"[..]));
//! assert_eq!(engine.next_line()?, Some(&b"Price is $10"[..]));
//! assert_eq!(engine.next_line()?, None);
//! engine.end()?;
//! # Ok::<(), tinytpl::error::TemplateError>(())
//! ```

pub mod buffer;
pub mod config;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod reader;
pub mod values;

pub use buffer::OutputBuffer;
pub use engine::{Engine, LineEnding, Session, WriteOptions, expand_line};
pub use error::{Result, TemplateError};
pub use reader::{FileReader, LineSource, MemoryReader, Span, StreamReader};
pub use values::{MAX_PLACEHOLDERS, Values};
