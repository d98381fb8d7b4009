//! Pure rendering engine for gridbio - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - The site model (profile + typed block grid) with JSON round-tripping
//! - Injection-safety primitives applied at every markup boundary
//! - Grid layout resolution (placement, size tiers, font scale)
//! - The social platform registry
//! - The block renderer, document assembler, and runtime script generator
//!   shared by the live preview and the static export
//!
//! # Example
//!
//! ```
//! use gridbio_core::model::{Block, Profile, SiteData};
//! use gridbio_core::render::render_preview;
//!
//! let site = SiteData::new(Profile::new("Jane").with_bio("Maker of things."))
//!     .with_block(Block::link("https://example.com", "My site").with_span(3, 2));
//!
//! let html = render_preview(&site);
//! assert!(html.contains("My site"));
//! // Rendering is deterministic: same model, same bytes.
//! assert_eq!(html, render_preview(&site));
//! ```

pub mod layout;
pub mod model;
pub mod render;
pub mod sanitize;
pub mod script;
pub mod social;

pub use model::{Block, BlockKind, Profile, SiteData};
pub use render::{render_document, render_preview, RenderContext, RenderMode};
pub use script::runtime_script;
