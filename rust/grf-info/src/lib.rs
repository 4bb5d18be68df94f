//! Static-information block encoding for NewGRF output.
//!
//! A compiled output file may advertise optional metadata about itself — a
//! localized name and description, and the layout of its configurable
//! parameters — as one self-framed binary record. This crate assembles that
//! record from a small tree of typed nodes and emits it through an injected
//! [`BlockStream`].
//!
//! The enclosing stream format has no backpatching: a block's exact byte
//! length must be declared before any of its bytes are emitted. Every node
//! therefore computes its size independently of, and byte-for-byte
//! consistently with, its write path; [`InfoBlock::write`] verifies the two
//! against each other and refuses to finish a block that diverged.
//!
//! # Binary Layout
//!
//! ```text
//! ┌──────────────┬──────────────────────────────────┬──────────────┐
//! │  Block Type  │              Nodes               │  Terminator  │
//! │    (0x14)    │                                  │    (0x00)    │
//! └──────────────┴──────────────────────────────────┴──────────────┘
//!
//! Every node starts with a five byte header:
//!
//! ┌─────────────┬──────────────────┬─ ─ ─ ─ ─ ─ ─ ─ ─┐
//! │     Tag     │    Identifier    │     Payload      │
//! │  (1 byte)   │    (4 bytes)     │                  │
//! └─────────────┴──────────────────┴─ ─ ─ ─ ─ ─ ─ ─ ─┘
//!
//! Text ('T'), header + entry repeated per translation:
//!
//! ┌──────────────┬──────────────────────────────────┐
//! │   Language   │           Encoded Text           │
//! │   (1 byte)   │                                  │
//! └──────────────┴──────────────────────────────────┘
//!
//! Branch ('C'):
//!
//! ┌──────────────────────────────────┬──────────────┐
//! │          Child Nodes             │     0x00     │
//! └──────────────────────────────────┴──────────────┘
//!
//! Binary ('B'), covering scalar leaves as well as the setting-mask and
//! limit leaves, which pack multiple fields into the value:
//!
//! ┌──────────────────┬──────────────────────────────┐
//! │  Width (u16 LE)  │          Value (LE)          │
//! └──────────────────┴──────────────────────────────┘
//! ```
//!
//! All multi-byte integers are little-endian. The explicit width field of a
//! binary leaf is redundant with its identifier but lets a reader skip
//! fields it does not recognize.
//!
//! # Basic Usage
//!
//! ```rust
//! use grf_info::{MemoryStream, MemoryStringTable, name_desc_actions, DEFAULT_LANGUAGE};
//!
//! let mut strings = MemoryStringTable::new();
//! strings.insert("grf.name", DEFAULT_LANGUAGE, *b"My Project");
//! strings.insert("grf.name", 0x01, *b"Mein Projekt");
//! strings.insert("grf.desc", DEFAULT_LANGUAGE, *b"An example");
//!
//! // Only the name carries a real translation, so only it is advertised.
//! let actions = name_desc_actions(&strings, "grf.name", "grf.desc");
//! assert_eq!(actions.len(), 1);
//!
//! let mut stream = MemoryStream::new();
//! for block in &actions {
//!     block.write(&strings, &mut stream).unwrap();
//! }
//!
//! let block = &stream.blocks()[0];
//! assert_eq!(block.declared_size, block.bytes.len());
//! ```

mod block;
mod builder;
mod descriptor;
mod error;
mod identifier;
mod node;
mod stream;
mod strings;

pub use block::*;
pub use builder::*;
pub use descriptor::*;
pub use error::*;
pub use identifier::*;
pub use node::*;
pub use stream::*;
pub use strings::*;
