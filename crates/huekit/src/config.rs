//! Command line configuration.
//!
//! [`Cli`] is the raw clap surface; [`Config`] is what the rest of huekit
//! consumes. It is built once in `main` and passed down explicitly.

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use huekit_input::RealTerminal;

use crate::catalog::Catalog;
use crate::color::{ColorChoice, Painter};
use crate::error::HuekitError;
use crate::prompts::Frontend;
use crate::resolve::{AssetMode, TemplateAssets};

/// Scaffold a palette-themed root.css and the stylesheet library.
#[derive(Debug, Parser)]
#[command(name = "huekit", version, about)]
pub struct Cli {
    /// Read templates from ./_templates instead of the install location
    #[arg(long)]
    pub dev: bool,

    /// Templates directory holding root.css and styles/
    #[arg(long, value_name = "DIR", env = "HUEKIT_TEMPLATES")]
    pub templates: Option<PathBuf>,

    /// Palette name; skips the palette question
    #[arg(long, value_name = "NAME")]
    pub palette: Option<String>,

    /// Output directory; skips the path question
    #[arg(long, value_name = "PATH")]
    pub out: Option<String>,

    /// Colour step; skips the step question
    #[arg(long, value_name = "STEP")]
    pub step: Option<String>,

    /// JSON palette catalog to use instead of the bundled one
    #[arg(long, value_name = "FILE")]
    pub palettes: Option<PathBuf>,

    /// Ask with plain numbered prompts instead of interactive menus
    #[arg(long)]
    pub plain: bool,

    /// When to colour output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Print the available palettes and exit
    #[arg(long)]
    pub list: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: AssetMode,
    pub templates: Option<PathBuf>,
    pub catalog_file: Option<PathBuf>,
    pub plain: bool,
    pub color: ColorChoice,
    pub list_only: bool,
    pub verbosity: u8,
    /// Directory output paths and dev-mode templates are relative to.
    pub base_dir: PathBuf,
    /// Raw matches, read by the prompt chains for `--palette`, `--out` and `--step`.
    pub matches: ArgMatches,
}

impl Config {
    pub fn from_matches(matches: ArgMatches, base_dir: PathBuf) -> Result<Self, clap::Error> {
        let cli = Cli::from_arg_matches(&matches)?;
        Ok(Self {
            mode: AssetMode::from_dev_flag(cli.dev),
            templates: cli.templates,
            catalog_file: cli.palettes,
            plain: cli.plain,
            color: cli.color,
            list_only: cli.list,
            verbosity: cli.verbose,
            base_dir,
            matches,
        })
    }

    pub fn try_parse_from<I, T>(args: I, base_dir: PathBuf) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Cli::command().try_get_matches_from(args)?;
        Self::from_matches(matches, base_dir)
    }

    /// `--templates` wins over the mode flag.
    pub fn template_assets(&self) -> Result<TemplateAssets, HuekitError> {
        match &self.templates {
            Some(dir) => Ok(TemplateAssets::from_dir(self.base_dir.join(dir))),
            None => TemplateAssets::resolve(self.mode, &self.base_dir),
        }
    }

    /// The bundled catalog, or the `--palettes` file when given.
    pub fn load_catalog(&self) -> Result<Catalog, HuekitError> {
        match &self.catalog_file {
            Some(file) => {
                let path = self.base_dir.join(file);
                let json =
                    fs::read_to_string(&path).map_err(HuekitError::io("read catalog", &path))?;
                Ok(Catalog::from_json(&json)?)
            }
            None => Ok(Catalog::bundled()?),
        }
    }

    pub fn painter(&self) -> Painter {
        Painter::new(self.color)
    }

    pub fn frontend(&self) -> Frontend<RealTerminal> {
        if self.plain {
            Frontend::Plain(Arc::new(RealTerminal))
        } else {
            Frontend::Rich
        }
    }
}
