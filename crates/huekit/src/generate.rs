//! Rendering `root.css` and installing the stylesheet library.
//!
//! Rendering is plain text substitution on the root template:
//!
//! - the first `/* HUE_GENERATION */` is replaced by the palette variables,
//!   hues as `--hue-1..N` then mono colours as `--mono-0..M-1`;
//! - every `STEP` is replaced by the colour step, verbatim.
//!
//! A template without the marker renders without variables; that is not an
//! error.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::PaletteColors;
use crate::color::Painter;
use crate::copy::copy_library;
use crate::error::HuekitError;
use crate::prompts::UserSelection;
use crate::resolve::TemplateAssets;

/// Placeholder replaced by the generated variable block.
pub const MARKER: &str = "/* HUE_GENERATION */";

/// Token replaced by the colour step.
pub const STEP_TOKEN: &str = "STEP";

/// File written into the target directory.
pub const ROOT_CSS: &str = "root.css";

/// One CSS custom property line per colour, hues first.
pub fn variable_lines(colors: &PaletteColors) -> Vec<String> {
    let hues = colors
        .hues
        .iter()
        .enumerate()
        .map(|(i, colour)| format!("  --hue-{}: {};", i + 1, colour));
    let mono = colors
        .mono
        .iter()
        .enumerate()
        .map(|(i, colour)| format!("  --mono-{}: {};", i, colour));
    hues.chain(mono).collect()
}

/// [`variable_lines`] joined with newlines.
pub fn variable_block(colors: &PaletteColors) -> String {
    variable_lines(colors).join("\n")
}

/// Substitutes the marker and step tokens in `template`.
pub fn render_root(template: &str, selection: &UserSelection) -> String {
    template
        .replacen(MARKER, &variable_block(&selection.palette), 1)
        .replace(STEP_TOKEN, &selection.colour_step)
}

/// What a generator run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Path of the written `root.css`.
    pub root_css: PathBuf,
    /// Library files copied, relative to the target directory.
    pub copied: Vec<PathBuf>,
}

/// Writes the themed `root.css` and the library into a target directory.
pub struct Generator<'a> {
    assets: &'a TemplateAssets,
    base_dir: &'a Path,
    painter: Painter,
}

impl<'a> Generator<'a> {
    /// `base_dir` is the directory the selection's target path is relative to.
    pub fn new(assets: &'a TemplateAssets, base_dir: &'a Path, painter: Painter) -> Self {
        Self {
            assets,
            base_dir,
            painter,
        }
    }

    /// Renders and writes `root.css`, then copies the stylesheet library.
    ///
    /// The target directory must already exist. Status lines go to `out`.
    pub fn run<W: Write>(
        &self,
        selection: &UserSelection,
        out: &mut W,
    ) -> Result<GenerateReport, HuekitError> {
        let template = &self.assets.root_template;
        let text = fs::read_to_string(template).map_err(HuekitError::io("read template", template))?;
        if !text.contains(MARKER) {
            debug!(template = %template.display(), "template has no hue marker");
        }

        let target_dir = self.base_dir.join(&selection.target_path);
        let root_css = target_dir.join(ROOT_CSS);
        fs::write(&root_css, render_root(&text, selection))
            .map_err(HuekitError::io("write", &root_css))?;
        info!(path = %root_css.display(), "wrote themed root.css");
        writeln!(out, "{}", self.painter.success("created themed root.css"))
            .map_err(HuekitError::Output)?;

        let copied = copy_library(&self.assets.style_library, &target_dir)?;
        info!(count = copied.len(), "copied library stylesheets");
        writeln!(
            out,
            "{}",
            self.painter.success("updated with library stylesheets")
        )
        .map_err(HuekitError::Output)?;

        Ok(GenerateReport { root_css, copied })
    }
}
