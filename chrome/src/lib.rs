//! Page chrome for the Echo Bridge manual.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns every
//! piece of presentation behavior on the manual page: the sticky header, the
//! decorative background, hover and click micro-interactions, scroll reveal,
//! the scroll progress bar, keyboard shortcuts, and the footer year stamp.
//! None of it talks to the network or persists anything; each behavior is a
//! reaction to a browser event that ends in an inline style or class mutation.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Browser shell [`controller::Controller`] and testable [`controller::ChromeCore`] |
//! | [`feature`] | Installable features and the page anchors each requires |
//! | [`header`] | Sticky header visibility and the per-frame scroll gate |
//! | [`background`] | Seeded generation of floating shapes and pulses |
//! | [`interaction`] | Hover/press style mapping for headings, rows, and buttons |
//! | [`reveal`] | Scroll reveal patches and observer options |
//! | [`progress`] | Scroll progress percentage |
//! | [`keys`] | Keyboard shortcuts |
//! | [`timer`] | Last-wins tickets for deferred work |
//! | [`style`] | [`style::StylePatch`], the unit of every style mutation |
//! | [`dom`] | The single boundary where patches touch the document |
//! | [`config`] | Page-supplied configuration |
//! | [`assets`] | Injected stylesheet, progress bar style, console banner |
//! | [`consts`] | Selectors, counts, ranges, and timings |
//! | [`error`] | [`error::ChromeError`] |

pub mod assets;
pub mod background;
pub mod config;
pub mod consts;
pub mod controller;
pub mod dom;
pub mod error;
pub mod feature;
pub mod header;
pub mod interaction;
pub mod keys;
pub mod progress;
pub mod reveal;
pub mod style;
pub mod timer;

use wasm_bindgen::prelude::*;

/// Wasm entry point: installs the panic hook and logger, then boots the
/// controller once the document is ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    controller::boot();
}
