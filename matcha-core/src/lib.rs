//! Matcha registry compiler library
//!
//! Compiles an in-memory catalogue of UI component descriptors into the
//! static artifacts consumed by documentation sites and the `matcha` CLI:
//! a lazy-module index, per-component JSON payloads, framework and
//! component indexes, and per-base-color stylesheet documents.
//!
//! # Architecture
//!
//! ```text
//! catalogue + frameworks + palette
//!            │
//!            ▼
//!     compiler::compile()
//!            │
//!            ├── __registry__/index.js          ← lazy-module index
//!            ├── frameworks/<target>/<name>.json ← component payloads
//!            ├── frameworks/index.json           ← target lookup table
//!            ├── index.json                      ← component catalogue
//!            ├── colors/index.json               ← compiled color table
//!            └── colors/<target>/<base>.json     ← generated stylesheets
//! ```

pub mod compiler;
pub mod registry;
pub mod templates;
