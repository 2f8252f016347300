//! # huekit
//!
//! Interactive scaffolder for a palette-themed stylesheet setup. A run asks
//! three questions, then:
//!
//! 1. renders `root.css` from the root template, replacing
//!    `/* HUE_GENERATION */` with `--hue-N`/`--mono-N` custom properties and
//!    every `STEP` with the chosen colour step;
//! 2. mirrors the stylesheet library into the chosen directory.
//!
//! ```text
//! prompts ──► UserSelection ──► generate ──► root.css
//!                                   └──────► copy ──► styles/**
//! ```
//!
//! Assets are found through [`resolve::TemplateAssets`], either under
//! `./_templates` (`--dev`) or next to the installed binary.
//!
//! ## Rendering without prompts
//!
//! ```
//! use huekit::catalog::PaletteColors;
//! use huekit::generate::render_root;
//! use huekit::prompts::UserSelection;
//!
//! let selection = UserSelection {
//!     palette: PaletteColors {
//!         hues: vec!["#e4572e".into()],
//!         mono: vec!["#1b1b1e".into()],
//!     },
//!     target_path: "src/styles".into(),
//!     colour_step: "0.2".into(),
//! };
//!
//! let css = render_root(":root {\n/* HUE_GENERATION */\n  --step: STEP;\n}", &selection);
//! assert_eq!(
//!     css,
//!     ":root {\n  --hue-1: #e4572e;\n  --mono-0: #1b1b1e;\n  --step: 0.2;\n}"
//! );
//! ```

pub mod app;
pub mod catalog;
pub mod color;
pub mod config;
pub mod copy;
mod error;
pub mod generate;
pub mod logging;
pub mod prompts;
pub mod resolve;

pub use app::{report, run, Outcome};
pub use catalog::{Catalog, Palette, PaletteColors};
pub use config::{Cli, Config};
pub use error::{CatalogError, HuekitError};
pub use prompts::{Frontend, Prompted, UserSelection};
