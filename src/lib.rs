//! # ultima - Multi-key AI Translation CLI
//!
//! `ultima` translates text through Google Gemini or OpenRouter. Each provider
//! holds an ordered list of API keys; a request is tried with each key in turn
//! until one succeeds, so an exhausted or revoked key never interrupts work.
//!
//! ## Quick Start
//!
//! ```bash
//! # Register keys (order is failover priority)
//! ultima keys add gemini AIza...
//! ultima keys add gemini AIzb...
//!
//! # Translate inline text, a file, or stdin
//! ultima --text "Hello" --to fa
//! ultima ./notes.md --from en --to de --tone formal
//! cat report.md | ultima
//!
//! # Switch provider and pick a model
//! ultima use openrouter
//! ultima models refresh
//! ultima models select openrouter meta-llama/llama-3.1-8b-instruct
//! ```
//!
//! ## Storage
//!
//! Settings, keys, history (last 50 translations) and the last translation are
//! kept in a single JSON document at `~/.config/ultima/ultima_data_v3.json`.

/// Command-line interface definitions and handlers.
pub mod cli;

/// File system utilities.
pub mod fs;

/// Source text reading from inline text, files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, logging).
pub mod output;

/// XDG-style path utilities for the settings document.
pub mod paths;

/// Provider gateway with per-key failover.
pub mod provider;

/// Settings document, history and persistence.
pub mod settings;

/// Translation orchestration, prompts, languages and tones.
pub mod translation;

/// Terminal UI components (spinner, colors, console view).
pub mod ui;
