// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge about the registry's HTML. Each spec covers one
//! page shape and encodes *where the data lives* and *how to extract it
//! robustly*.
//!
//! ## What lives here
//! - **URL shaping** for the search entry point (`query`).
//! - **Results-page parsing**: candidate rows, their status cells, and the
//!   "Next" affordance (`results`).
//! - **Detail-page parsing**: label-anchored fields, the owner priority
//!   search and email discovery (`detail`).
//! - **Selector precedence**: ordered fallback chains; the first selector
//!   that matches anything wins.
//!
//! ## What does **not** live here
//! - **Networking.** Specs take HTML strings; fetching is `core::net`.
//! - **Walk control** (caps, pauses, paging decisions). That's `scrape`.
//! - **GUI state or export formatting.**
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scrape::search → Fetch::fetch(url)
//!                            ↘ specs::results::parse(html)
//!                            ↘ Fetch::fetch(detail) → specs::detail::extract(html)
//! ```
//!
//! ## Conventions & invariants
//! - Label lookups go through `core::dom` and run in **document order**.
//! - A missing label, table or cell yields an **empty string**, never an error.
//! - Parsers are pure: same HTML in, same output out.
//!
//! ## Testing notes
//! - Every spec is testable **offline** against inline HTML fixtures.
pub mod query;
pub mod results;
pub mod detail;
