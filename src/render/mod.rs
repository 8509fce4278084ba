//! # Rendering
//!
//! Turns issue records into text for people and shells.
//!
//! | Output | Function | Consumer |
//! |--------|----------|----------|
//! | Creation script | [`render_script`] | bash + tracker CLI |
//! | Manual guide | [`render_guide`] | a person using the web UI |

mod guide;
mod script;

pub use guide::{render_guide, GuideOptions};
pub use script::{render_script, shell_quote, ScriptOptions};
