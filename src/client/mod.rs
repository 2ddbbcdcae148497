//! Behaviour of the browser interactions shipped in `public/js/main.js`.
//!
//! Each handler is wired independently on page load and shares nothing with the others
//! beyond the DOM itself. The models here carry the same rules without a DOM so they can
//! be exercised directly: events go in, element state comes out.

pub mod debounce;
pub mod filter;
pub mod lazy;
pub mod lightbox;
pub mod nav;
pub mod observer;
pub mod reveal;
pub mod scroll;

/// Class toggled on the nav toggle, nav menu, filter buttons and the modal
pub const ACTIVE_CLASS: &str = "active";
