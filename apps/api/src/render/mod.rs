// HTML export pipeline: content formatting, CTA templates, block rendering.
// Everything in here is a pure function of its inputs. No I/O and no caching.

pub mod cta;
pub mod formatter;
pub mod html;

pub use html::{render_blocks, LayoutMode};
