//! # Markhive Architecture
//!
//! Markhive turns a directory of markdown notes into a browsable static HTML
//! archive with search. It is a **library with two thin clients**: a batch
//! builder driven from the CLI, and an HTTP server that serves the build
//! output.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Builder (commands/build.rs)                             │
//! │  - Walks the notes directory                             │
//! │  - Splits front matter, strips markdown, renders HTML    │
//! │  - Writes <stem>.html per note + summary.json            │
//! └──────────────────────────────────────────────────────────┘
//!                            │ summary.json (the handoff point)
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Search index (index.rs)                                 │
//! │  - Ordered, immutable sequence of NoteRecord             │
//! │  - Substring matching over title, tags, content          │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Server (server.rs)                                      │
//! │  - GET  /              search page                       │
//! │  - POST /notes/:file   pre-rendered HTML, verbatim       │
//! │  - POST /search        query term -> {"responses": [..]} │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key principle: writes and reads are temporally disjoint
//!
//! The builder fully (re)creates the output directory and the summary
//! artifact; the server loads the artifact once at startup and never mutates
//! it. The index is therefore immutable for the server's lifetime and
//! concurrent reads need no locking.
//!
//! ## No I/O assumptions in the command layer
//!
//! Command modules (`commands/*.rs`) take plain arguments and return
//! structured [`commands::CmdResult`] values. The binary in `main.rs` is the
//! only place that knows about stdout, exit codes, or ANSI color.
//!
//! ## Module overview
//!
//! - [`model`]: the [`model::NoteRecord`] data model
//! - [`frontmatter`]: YAML front-matter splitting and parsing
//! - [`render`]: markdown to HTML, and markdown to stripped plain text
//! - [`index`]: the in-memory search index and query type
//! - [`summary`]: reading and writing the summary artifact
//! - [`commands`]: build, search, and export operations
//! - [`server`]: the axum HTTP layer
//! - [`config`]: `config.json` in the output directory
//! - [`error`]: error types

pub mod commands;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod index;
pub mod model;
pub mod render;
pub mod server;
pub mod summary;
