//! Call Inspector
//!
//! Observes API calls made through an intercepting transport, classifies
//! each response by shape, renders a type-aware view of it, and keeps a
//! bounded persistent history.
//!
//! - `classify` - Payload shape to semantic tag
//! - `render` - Tag and payload to an immutable view fragment
//! - `history` - Log entries and their durable store
//! - `intercept` - Transport decorator emitting entries on settlement
//! - `console` - Mounted view, filtering and deletion tiers
//! - `app` / `ui` - Terminal front end

pub mod app;
pub mod classify;
pub mod cli;
pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod history;
pub mod input;
pub mod intercept;
pub mod logging;
pub mod render;
pub mod ui;
