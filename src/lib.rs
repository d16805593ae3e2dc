//! Starter-code scaffolding for generated coding problems.
//!
//! A function signature arrives as a language-independent type
//! representation (JSON produced by the problem-generation pipeline), and
//! a target backend renders it into syntactically valid starter source a
//! user can begin implementing against.
//!
//! ```text
//! Signature schema         Contract              Output backends
//! ────────────────      ──────────────        ─────────────────────
//! parameters       ─┐                      ┌─> Python scaffold
//! return type      ─┼─> CodeGenerator ─────┤
//! named types      ─┘   (codegen.rs)       └─> TypeScript scaffold
//! ```
//!
//! Rendering is a pure function of the schema: the only mutable state is
//! each backend's import accumulator, reset at the start of every render,
//! and [`starter_code`] constructs a fresh backend per call.

pub mod cli;
pub mod codegen;
pub mod ir;
pub mod schema;

pub use codegen::{CodeGenerator, Language, starter_code};
pub use schema::SignatureSchema;
