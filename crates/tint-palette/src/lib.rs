//! # tint-palette
//!
//! Named colors for [`tint_core::Color`].
//!
//! The table follows the X11 `rgb.txt` naming used by most graphics tools.
//! Where X11 and the CSS/web palette disagree, the X11 value keeps the plain
//! name and the web value gets a `web` prefix:
//!
//! | Name | X11 | Web variant |
//! |------|-----|-------------|
//! | `gray` | `#bebebe` | `webgray` = `#808080` |
//! | `green` | `#00ff00` | `webgreen` = `#008000` |
//! | `maroon` | `#b03060` | `webmaroon` = `#800000` |
//! | `purple` | `#a020f0` | `webpurple` = `#800080` |
//!
//! # Usage
//!
//! ```rust
//! use tint_core::Color;
//! use tint_palette::lookup;
//!
//! assert_eq!(lookup("Alice Blue"), Some(Color::rgb8(240, 248, 255)));
//! assert_eq!(lookup("dark_slate_grey"), lookup("darkslategray"));
//! assert_eq!(lookup("no such color"), None);
//! ```

#![warn(missing_docs)]

pub mod x11;

pub use x11::{lookup, names, NAMED};
