//! Thumbnail slider demo page.
//!
//! Build with `wasm-pack build apps/web-demo --target web` and serve
//! `apps/web-demo/static/index.html` next to the generated `pkg/` directory.

pub mod gallery;

#[cfg(target_arch = "wasm32")]
mod web;
