//! Visual encoding of station data.
//!
//! - Color scale (jet-style gradient over a per-pass value domain)
//! - Popup markup for station markers

pub mod gradient;
pub mod popup;

pub use gradient::{ColorScale, ColorStop};
pub use popup::popup_html;
