//! Command helper utilities

use std::io::Write as _;
use std::path::{Path, PathBuf};

use console::Style;
use tempfile::NamedTempFile;

use appforge::catalog::CategoryIndex;
use appforge::config::ForgeConfig;
use appforge::document::Document;
use appforge::error::{Result, file_write_failed, io_error};
use appforge::operations::GenerateOutcome;
use appforge::session::Session;

/// Global options every command sees
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
}

/// Everything a page-producing command needs
pub struct Context {
    pub config: ForgeConfig,
    pub index: CategoryIndex,
    pub seed: Option<u64>,
}

impl Context {
    /// Load configuration and assemble the catalog
    pub fn load(options: &GlobalOptions) -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| io_error(format!("Failed to get current directory: {e}")))?;
        let config = ForgeConfig::load(options.config.as_deref(), &cwd)?;
        let library = appforge::templates::TemplateLibrary::default();
        let index = CategoryIndex::from_library(&library)?;
        let seed = options.seed.or(config.seed);
        Ok(Self {
            config,
            index,
            seed,
        })
    }

    pub fn session(&self) -> Session {
        Session::new(Document::new(self.config.title.as_str()))
            .with_cleanup_on_remount(self.config.cleanup_on_remount)
    }

    /// `--output` if given, else the configured output
    pub fn output_path(&self, output: Option<PathBuf>) -> PathBuf {
        output.unwrap_or_else(|| self.config.output.clone())
    }
}

/// Write the rendered page; `-` means stdout
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    if path.as_os_str() == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(html.as_bytes())?;
        return Ok(());
    }

    let shown = path.display().to_string();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let mut file =
        NamedTempFile::new_in(&parent).map_err(|e| file_write_failed(&shown, e.to_string()))?;
    file.write_all(html.as_bytes())
        .map_err(|e| file_write_failed(&shown, e.to_string()))?;
    file.persist(path)
        .map_err(|e| file_write_failed(&shown, e.error.to_string()))?;
    Ok(())
}

/// Report an outcome and write the page when something was mounted.
///
/// Status lines go to stderr when the page itself goes to stdout.
pub fn finish(session: &Session, outcome: &GenerateOutcome, output: &Path) -> Result<()> {
    let to_stdout = output.as_os_str() == "-";
    let say = |line: String| {
        if to_stdout {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    };

    match outcome {
        GenerateOutcome::Mounted { receipt, .. } => {
            write_page(output, &session.document().render_html())?;
            if !to_stdout {
                say(format!(
                    "{} {} {}",
                    Style::new().green().bold().apply_to("Generated"),
                    Style::new().bold().yellow().apply_to(&receipt.template),
                    Style::new().dim().apply_to(format!("-> {}", output.display()))
                ));
            }
        }
        GenerateOutcome::NoSelection => {
            say("No template selected.".to_string());
        }
        GenerateOutcome::Prompt(message) => {
            say(message.clone());
        }
    }
    Ok(())
}
