//! # portfolio-site
//!
//! Client-side behavior for the static portfolio pages, compiled to
//! WebAssembly. The markup and CSS are plain static files; this crate only
//! wires a handful of elements to small state flips.
//!
//! Behavior is written against the [`dom::Page`] abstraction so every
//! controller runs headless in native tests. The `browser` feature adds the
//! `web-sys` page and the event bindings in [`web`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Aggregate that owns every controller and routes page events |
//! | [`nav`] | Mobile navigation toggle |
//! | [`theme`] | Light/dark theme toggle with persisted preference |
//! | [`contact`] | Simulated contact form submission |
//! | [`reveal`] | Staggered fade-up delays and resize cleanup |
//! | [`storage`] | Settings store trait and implementations |
//! | [`dom`] | Page/node traits and the in-memory page |
//! | [`config`] | Element identifiers and tunables |
//! | [`consts`] | Shared constants |
//! | [`error`] | Crate error type |

pub mod config;
pub mod consts;
pub mod contact;
pub mod dom;
pub mod error;
pub mod nav;
pub mod reveal;
pub mod site;
pub mod storage;
pub mod theme;
#[cfg(feature = "browser")]
pub mod web;

pub use error::{Result, SiteError};
