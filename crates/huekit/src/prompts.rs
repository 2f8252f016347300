//! The three setup questions: palette, output path, colour step.
//!
//! Each question is an [`InputChain`] that tries a command line override,
//! then an interactive prompt, then a default. Questions are always asked in
//! the same order, and backing out of any of them ends the sequence with
//! [`Prompted::Cancelled`] before anything is written.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use clap::ArgMatches;
use huekit_input::{
    ArgSource, InputChain, InputCollector, InputError, InputSourceKind, InquireSelect, InquireText,
    RealTerminal, SelectPromptSource, TerminalIO, TextPromptSource,
};
use tracing::debug;

use crate::catalog::{Catalog, PaletteColors};
use crate::color::Painter;
use crate::error::{CatalogError, HuekitError};

pub const PALETTE_MESSAGE: &str = "Choose starter theme from templates";
pub const TARGET_MESSAGE: &str = "generate to which path? (relatively & creates if doesn't exist)";
pub const STEP_MESSAGE: &str = "set colour step";

/// Output directory used when the user accepts the default.
pub const DEFAULT_TARGET: &str = "src/styles";

/// Output directory used when the user answers `.` or `./`.
pub const DOT_TARGET: &str = "styles";

/// Colour step used when the user accepts the default.
pub const DEFAULT_STEP: &str = "0.2";

/// Argument ids that override each question.
pub const PALETTE_ARG: &str = "palette";
pub const TARGET_ARG: &str = "out";
pub const STEP_ARG: &str = "step";

/// Result of a question: an answer, or the user backed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    Completed(T),
    Cancelled,
}

impl<T> Prompted<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Prompted<U> {
        match self {
            Prompted::Completed(value) => Prompted::Completed(f(value)),
            Prompted::Cancelled => Prompted::Cancelled,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Prompted::Cancelled)
    }
}

/// Turns a cancelled prompt into [`Prompted::Cancelled`] and keeps every
/// other failure an error.
fn answered<T>(result: Result<T, InputError>) -> Result<Prompted<T>, HuekitError> {
    match result {
        Ok(value) => Ok(Prompted::Completed(value)),
        Err(InputError::PromptCancelled) => Ok(Prompted::Cancelled),
        Err(err) => Err(err.into()),
    }
}

/// Everything the generator needs from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSelection {
    pub palette: PaletteColors,
    pub target_path: String,
    pub colour_step: String,
}

/// Maps `.` and `./` to [`DOT_TARGET`]; anything else is returned unchanged.
pub fn normalize_target(target: &str) -> &str {
    match target {
        "." | "./" => DOT_TARGET,
        other => other,
    }
}

/// A palette as offered in the selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteChoice {
    pub name: String,
    pub colors: PaletteColors,
    label: String,
}

impl PaletteChoice {
    /// Labels are `"{name}: {swatch}"` so palettes can be told apart at a
    /// glance. Swatches are plain blocks when `painter` does not colour.
    pub fn from_catalog(catalog: &Catalog, painter: &Painter) -> Vec<Self> {
        catalog
            .palettes()
            .iter()
            .map(|palette| PaletteChoice {
                name: palette.name.clone(),
                colors: palette.colors(),
                label: format!("{}: {}", palette.name, painter.swatch(&palette.hues)),
            })
            .collect()
    }
}

impl fmt::Display for PaletteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Picks a palette by name from the `--palette` argument.
struct PaletteArgSource {
    choices: Vec<PaletteChoice>,
}

impl InputCollector<PaletteChoice> for PaletteArgSource {
    fn kind(&self) -> InputSourceKind {
        InputSourceKind::Arg
    }

    fn is_available(&self, matches: &ArgMatches) -> bool {
        matches!(matches.try_get_one::<String>(PALETTE_ARG), Ok(Some(_)))
    }

    fn collect(&self, matches: &ArgMatches) -> Result<Option<PaletteChoice>, InputError> {
        let Some(name) = matches.try_get_one::<String>(PALETTE_ARG).ok().flatten() else {
            return Ok(None);
        };

        match self
            .choices
            .iter()
            .find(|choice| choice.name.eq_ignore_ascii_case(name))
        {
            Some(choice) => Ok(Some(choice.clone())),
            None => {
                let known: Vec<&str> = self.choices.iter().map(|c| c.name.as_str()).collect();
                Err(InputError::validation(format!(
                    "unknown palette '{}' (available: {})",
                    name,
                    known.join(", ")
                )))
            }
        }
    }
}

/// How questions are shown.
pub enum Frontend<T: TerminalIO = RealTerminal> {
    /// Arrow-key menus and inline editing (inquire).
    Rich,
    /// Numbered menus and plain line input on the given terminal.
    Plain(Arc<T>),
}

impl<T: TerminalIO> fmt::Debug for Frontend<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frontend::Rich => f.write_str("Rich"),
            Frontend::Plain(_) => f.write_str("Plain"),
        }
    }
}

/// The palette → output path → colour step sequence.
pub struct PromptSequence<'a, T: TerminalIO = RealTerminal> {
    catalog: &'a Catalog,
    frontend: Frontend<T>,
    base_dir: &'a Path,
    painter: Painter,
}

impl<'a, T: TerminalIO + 'static> PromptSequence<'a, T> {
    /// Output paths are created relative to `base_dir`; `painter` decides
    /// whether palette swatches are coloured.
    pub fn new(
        catalog: &'a Catalog,
        frontend: Frontend<T>,
        base_dir: &'a Path,
        painter: Painter,
    ) -> Self {
        Self {
            catalog,
            frontend,
            base_dir,
            painter,
        }
    }

    /// Asks all three questions in order.
    pub fn run(&self, matches: &ArgMatches) -> Result<Prompted<UserSelection>, HuekitError> {
        let Prompted::Completed(palette) = self.choose_palette(matches)? else {
            return Ok(Prompted::Cancelled);
        };
        let Prompted::Completed(target_path) = self.set_output_path(matches)? else {
            return Ok(Prompted::Cancelled);
        };
        let Prompted::Completed(colour_step) = self.set_colour_step(matches)? else {
            return Ok(Prompted::Cancelled);
        };

        Ok(Prompted::Completed(UserSelection {
            palette,
            target_path,
            colour_step,
        }))
    }

    /// Single choice over the catalog; defaults to its first palette.
    pub fn choose_palette(
        &self,
        matches: &ArgMatches,
    ) -> Result<Prompted<PaletteColors>, HuekitError> {
        let choices = PaletteChoice::from_catalog(self.catalog, &self.painter);
        let default = choices.first().cloned().ok_or(CatalogError::Empty)?;

        let chain = InputChain::<PaletteChoice>::new().try_source(PaletteArgSource {
            choices: choices.clone(),
        });
        let chain = match &self.frontend {
            Frontend::Rich => chain.try_source(InquireSelect::new(PALETTE_MESSAGE, choices)),
            Frontend::Plain(terminal) => chain.try_source(SelectPromptSource::with_shared_terminal(
                PALETTE_MESSAGE,
                choices,
                Arc::clone(terminal),
            )),
        };

        let chosen = answered(chain.default(default).resolve_with_source(matches))?;
        Ok(chosen.map(|resolved| {
            debug!(palette = %resolved.value.name, source = %resolved.source, "palette chosen");
            resolved.value.colors
        }))
    }

    /// Free text, normalized, and created on disk as a side effect.
    pub fn set_output_path(&self, matches: &ArgMatches) -> Result<Prompted<String>, HuekitError> {
        let chain = self
            .text_chain(TARGET_ARG, TARGET_MESSAGE, DEFAULT_TARGET)
            .validate(|s| !s.trim().is_empty(), "path must not be blank");

        let Prompted::Completed(answer) = answered(chain.resolve(matches))? else {
            return Ok(Prompted::Cancelled);
        };

        let target = normalize_target(&answer).to_string();
        let dir = self.base_dir.join(&target);
        fs::create_dir_all(&dir).map_err(HuekitError::io("create directory", &dir))?;
        debug!(target = %target, "output directory ready");

        Ok(Prompted::Completed(target))
    }

    /// Free text, passed through without parsing.
    pub fn set_colour_step(&self, matches: &ArgMatches) -> Result<Prompted<String>, HuekitError> {
        answered(
            self.text_chain(STEP_ARG, STEP_MESSAGE, DEFAULT_STEP)
                .resolve(matches),
        )
    }

    fn text_chain(&self, arg: &str, message: &str, default: &str) -> InputChain<String> {
        let chain = InputChain::<String>::new().try_source(ArgSource::new(arg));
        let chain = match &self.frontend {
            Frontend::Rich => chain.try_source(InquireText::new(message).default(default)),
            Frontend::Plain(terminal) => chain.try_source(
                TextPromptSource::with_shared_terminal(message, Arc::clone(terminal))
                    .default_hint(default),
            ),
        };
        chain.default(default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, Command};
    use crate::color::{swatch, ColorChoice};
    use huekit_input::MockTerminal;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn matches(args: &[&str]) -> ArgMatches {
        Command::new("huekit")
            .arg(Arg::new(PALETTE_ARG).long(PALETTE_ARG))
            .arg(Arg::new(TARGET_ARG).long(TARGET_ARG))
            .arg(Arg::new(STEP_ARG).long(STEP_ARG))
            .try_get_matches_from(args)
            .unwrap()
    }

    fn sequence<'a>(
        catalog: &'a Catalog,
        terminal: &Arc<MockTerminal>,
        base: &'a Path,
    ) -> PromptSequence<'a, MockTerminal> {
        PromptSequence::new(
            catalog,
            Frontend::Plain(Arc::clone(terminal)),
            base,
            Painter::plain(),
        )
    }

    #[test]
    fn normalize_maps_dot_paths_to_styles() {
        assert_eq!(normalize_target("."), "styles");
        assert_eq!(normalize_target("./"), "styles");
        assert_eq!(normalize_target("src/styles"), "src/styles");
        assert_eq!(normalize_target(".."), "..");
        assert_eq!(normalize_target("./css"), "./css");
    }

    #[test]
    fn choices_label_name_and_swatch() {
        let catalog = Catalog::bundled().unwrap();
        let choices = PaletteChoice::from_catalog(&catalog, &Painter::new(ColorChoice::Always));

        assert_eq!(choices.len(), catalog.len());
        let first = &catalog.palettes()[0];
        assert_eq!(
            choices[0].to_string(),
            format!("{}: {}", first.name, swatch(&first.hues))
        );
        assert_eq!(choices[0].colors, first.colors());
    }

    #[test]
    fn uncoloured_labels_have_no_escapes() {
        let catalog = Catalog::bundled().unwrap();
        let choices = PaletteChoice::from_catalog(&catalog, &Painter::new(ColorChoice::Never));

        assert_eq!(choices[0].to_string(), "Ember: ██ ██ ██ ██ ██");
        assert!(choices.iter().all(|c| !c.to_string().contains('\x1b')));
    }

    #[test]
    fn plain_menu_lists_uncoloured_swatches() {
        let catalog = Catalog::bundled().unwrap();
        let base = TempDir::new().unwrap();
        let terminal = Arc::new(MockTerminal::with_responses(["1"]));

        sequence(&catalog, &terminal, base.path())
            .choose_palette(&matches(&["huekit"]))
            .unwrap();

        let menu = &terminal.prompts()[0];
        assert!(menu.contains("  1) Ember: ██ ██ ██ ██ ██\n"));
        assert!(!menu.contains('\x1b'));
    }

    #[test]
    fn full_session_with_answers() {
        let catalog = Catalog::bundled().unwrap();
        let base = TempDir::new().unwrap();
        let terminal = Arc::new(MockTerminal::with_responses(["2", "web/css", "0.35"]));

        let result = sequence(&catalog, &terminal, base.path())
            .run(&matches(&["huekit"]))
            .unwrap();

        assert_eq!(
            result,
            Prompted::Completed(UserSelection {
                palette: catalog.palettes()[1].colors(),
                target_path: "web/css".into(),
                colour_step: "0.35".into(),
            })
        );
        assert!(base.path().join("web/css").is_dir());
    }

    #[test]
    fn empty_answers_take_defaults() {
        let catalog = Catalog::bundled().unwrap();
        let base = TempDir::new().unwrap();
        let terminal = Arc::new(MockTerminal::with_responses(["", "", ""]));

        let Prompted::Completed(selection) = sequence(&catalog, &terminal, base.path())
            .run(&matches(&["huekit"]))
            .unwrap()
        else {
            panic!("expected a completed selection");
        };

        assert_eq!(selection.palette, catalog.palettes()[0].colors());
        assert_eq!(selection.target_path, DEFAULT_TARGET);
        assert_eq!(selection.colour_step, DEFAULT_STEP);
        assert!(base.path().join(DEFAULT_TARGET).is_dir());
    }

    #[test]
    fn dot_answer_creates_styles_dir() {
        let catalog = Catalog::bundled().unwrap();
        let base = TempDir::new().unwrap();
        let terminal = Arc::new(MockTerminal::with_responses(["./"]));

        let target = sequence(&catalog, &terminal, base.path())
            .set_output_path(&matches(&["huekit"]))
            .unwrap();

        assert_eq!(target, Prompted::Completed("styles".to_string()));
        assert!(base.path().join("styles").is_dir());
    }

    #[test]
    fn existing_output_dir_is_fine() {
        let catalog = Catalog::bundled().unwrap();
        let base = TempDir::new().unwrap();
        fs::create_dir_all(base.path().join("src/styles")).unwrap();
        let terminal = Arc::new(MockTerminal::with_responses([""]));

        let target = sequence(&catalog, &terminal, base.path())
            .set_output_path(&matches(&["huekit"]))
            .unwrap();

        assert_eq!(target, Prompted::Completed("src/styles".to_string()));
    }

    #[test]
    fn arguments_skip_prompts() {
        let catalog = Catalog::bundled().unwrap();
        let base = TempDir::new().unwrap();
        let terminal = Arc::new(MockTerminal::eof());

        let result = sequence(&catalog, &terminal, base.path())
            .run(&matches(&[
                "huekit", "--palette", "tide", "--out", "theme", "--step", "0.1",
            ]))
            .unwrap();

        assert_eq!(
            result,
            Prompted::Completed(UserSelection {
                palette: catalog.get("Tide").unwrap().colors(),
                target_path: "theme".into(),
                colour_step: "0.1".into(),
            })
        );
        assert_eq!(terminal.reads(), 0);
    }

    #[test]
    fn unknown_palette_argument_is_an_error() {
        let catalog = Catalog::bundled().unwrap();
        let base = TempDir::new().unwrap();
        let terminal = Arc::new(MockTerminal::eof());

        let err = sequence(&catalog, &terminal, base.path())
            .run(&matches(&["huekit", "--palette", "neon"]))
            .unwrap_err();

        assert!(matches!(
            err,
            HuekitError::Input(InputError::ValidationFailed(ref msg)) if msg.contains("neon")
        ));
    }

    #[test]
    fn cancelling_any_question_cancels_the_sequence() {
        let catalog = Catalog::bundled().unwrap();
        for answered_before_eof in 0..3 {
            let base = TempDir::new().unwrap();
            let script = ["1", "out", "0.2"];
            let terminal = Arc::new(MockTerminal::with_responses(
                script[..answered_before_eof].iter().copied(),
            ));

            let result = sequence(&catalog, &terminal, base.path())
                .run(&matches(&["huekit"]))
                .unwrap();

            assert!(result.is_cancelled(), "eof after {}", answered_before_eof);
        }
    }

    #[test]
    fn interrupting_any_question_cancels_the_sequence() {
        let catalog = Catalog::bundled().unwrap();
        for answered_before_interrupt in 0..3 {
            let base = TempDir::new().unwrap();
            let script = ["2", "web", "0.3"];
            let terminal = Arc::new(
                MockTerminal::with_responses(script[..answered_before_interrupt].iter().copied())
                    .then_interrupt(),
            );

            let result = sequence(&catalog, &terminal, base.path())
                .run(&matches(&["huekit"]))
                .unwrap();

            assert_eq!(result, Prompted::Cancelled, "after {}", answered_before_interrupt);
            assert_eq!(terminal.reads(), answered_before_interrupt + 1);
        }
    }

    #[test]
    fn step_is_not_validated() {
        let catalog = Catalog::bundled().unwrap();
        let base = TempDir::new().unwrap();
        let terminal = Arc::new(MockTerminal::with_responses(["fast please"]));

        let step = sequence(&catalog, &terminal, base.path())
            .set_colour_step(&matches(&["huekit"]))
            .unwrap();

        assert_eq!(step, Prompted::Completed("fast please".to_string()));
    }

    #[test]
    fn non_terminal_uses_defaults_without_reading() {
        let catalog = Catalog::bundled().unwrap();
        let base = TempDir::new().unwrap();
        let terminal = Arc::new(MockTerminal::non_terminal());

        let result = sequence(&catalog, &terminal, base.path())
            .run(&matches(&["huekit", "--out", "."]))
            .unwrap();

        let Prompted::Completed(selection) = result else {
            panic!("expected a completed selection");
        };
        assert_eq!(selection.target_path, "styles");
        assert_eq!(selection.colour_step, DEFAULT_STEP);
        assert_eq!(terminal.reads(), 0);
    }

    proptest! {
        #[test]
        fn normalize_leaves_other_paths_alone(s in "[a-z./_-]{0,12}") {
            prop_assume!(s != "." && s != "./");
            prop_assert_eq!(normalize_target(&s), s.as_str());
        }
    }
}
