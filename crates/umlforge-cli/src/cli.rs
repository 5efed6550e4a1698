//! Command-line interface for the umlforge utility
//!
//! Loads a design-model project JSON and derives its artifacts: Mermaid
//! markup, the boxed plain-text diagram, and source skeletons for the
//! project's target language.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use umlforge::core::factory;
use umlforge::core::logging::init_logging;
use umlforge::prelude::*;

/// Fixed export filenames owned by this layer; the engine itself only
/// produces text.
pub const MERMAID_FILENAME: &str = "diagram.mmd";
pub const ASCII_FILENAME: &str = "diagram.txt";
pub const JAVA_FILENAME: &str = "Generated.java";
pub const C_HEADER_FILENAME: &str = "generated.h";
pub const C_SOURCE_FILENAME: &str = "generated.c";

/// Umlforge - derive UML diagrams and source skeletons from a design model
#[derive(Parser)]
#[command(name = "umlforge")]
#[command(about = "Derive UML diagrams and source skeletons from a design-model project file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate every artifact from a project file
    Generate {
        /// Input project JSON (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory to write the artifact files into; prints to stdout
        /// when omitted
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Which artifact to emit
        #[arg(long, value_enum, default_value_t = ArtifactChoice::All)]
        artifact: ArtifactChoice,
    },

    /// Parse a project file and report what the generators will see
    Check {
        /// Input project JSON (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print a starter project JSON
    Sample,
}

/// Which artifact the generate command emits
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ArtifactChoice {
    /// Everything the project's language produces
    #[default]
    All,
    /// Mermaid classDiagram markup
    Mermaid,
    /// Plain-text boxed diagram
    Uml,
    /// Source skeleton(s) for the target language
    Source,
}

/// Main CLI application
pub struct UmlforgeApp;

impl UmlforgeApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags.
        let log_level_str = std::env::var("UMLFORGE_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("UMLFORGE_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Umlforge v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Generate {
                input,
                out_dir,
                artifact,
            } => self.generate_command(input, out_dir, artifact, cli.verbose),
            Commands::Check { input } => self.check_command(input, cli.verbose),
            Commands::Sample => self.sample_command(),
        }
    }

    /// Handle the generate command
    pub fn generate_command(
        &self,
        input: Option<PathBuf>,
        out_dir: Option<PathBuf>,
        artifact: ArtifactChoice,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;
        let project = parse_project(&content)?;

        if verbose {
            eprintln!(
                "Loaded project: {} classes, {} relationships",
                project.class_count(),
                project.relationship_count()
            );
        }

        let artifacts = Artifacts::generate(&project);
        let files = select_files(&artifacts, artifact);

        match out_dir {
            Some(dir) => {
                fs::create_dir_all(&dir).with_context(|| {
                    format!("Failed to create output directory '{}'", dir.display())
                })?;
                for (name, text) in &files {
                    let path = dir.join(name);
                    self.write_file(&path, text)?;
                    if verbose {
                        eprintln!("Wrote {}", path.display());
                    }
                }
            }
            None => {
                let mut stdout = io::stdout();
                let banners = files.len() > 1;
                for (name, text) in &files {
                    if banners {
                        writeln!(stdout, "==> {} <==", name)?;
                    }
                    writeln!(stdout, "{}", text)?;
                    if banners {
                        writeln!(stdout)?;
                    }
                }
                stdout.flush()?;
            }
        }
        Ok(())
    }

    /// Handle the check command
    pub fn check_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        match parse_project(&content) {
            Ok(project) => {
                println!(
                    "✓ Valid project: {} classes, {} relationships",
                    project.class_count(),
                    project.relationship_count()
                );
                let dangling = project
                    .relationships
                    .iter()
                    .filter(|r| project.resolve_relationship(r).is_none())
                    .count();
                if dangling > 0 {
                    // Dangling references are tolerated, not fatal; the
                    // generators skip them silently.
                    println!(
                        "⚠ {} relationship(s) reference a missing class and will be skipped",
                        dangling
                    );
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Invalid project: {}", e);
                Err(e)
            }
        }
    }

    /// Handle the sample command
    pub fn sample_command(&self) -> Result<()> {
        let project = sample_project();
        println!("{}", serde_json::to_string_pretty(&project)?);
        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) => {
                if path.to_string_lossy() == "-" {
                    let mut content = String::new();
                    io::stdin().read_to_string(&mut content)?;
                    Ok(content)
                } else {
                    fs::read_to_string(&path).map_err(|e| {
                        anyhow!("Failed to read input file '{}': {}", path.display(), e)
                    })
                }
            }
            None => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write one artifact file
    pub fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write output file '{}': {}", path.display(), e))
    }
}

impl Default for UmlforgeApp {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_project(content: &str) -> Result<Project> {
    serde_json::from_str(content).context("Failed to parse project JSON")
}

/// Pair each selected artifact with its fixed export filename.
fn select_files(artifacts: &Artifacts, choice: ArtifactChoice) -> Vec<(&'static str, String)> {
    let mut files: Vec<(&'static str, String)> = Vec::new();
    if matches!(choice, ArtifactChoice::All | ArtifactChoice::Mermaid) {
        files.push((MERMAID_FILENAME, artifacts.mermaid.clone()));
    }
    if matches!(choice, ArtifactChoice::All | ArtifactChoice::Uml) {
        files.push((ASCII_FILENAME, artifacts.ascii_uml.clone()));
    }
    if matches!(choice, ArtifactChoice::All | ArtifactChoice::Source) {
        match &artifacts.source {
            SourceSet::Java { code } => files.push((JAVA_FILENAME, code.clone())),
            SourceSet::C { header, source } => {
                files.push((C_HEADER_FILENAME, header.clone()));
                files.push((C_SOURCE_FILENAME, source.clone()));
            }
        }
    }
    files
}

/// A small worked example: an abstract base, a subclass with a constructor,
/// and an implemented interface.
fn sample_project() -> Project {
    let mut project = factory::initial_project();

    let mut animal = factory::make_class();
    animal.name = "Animal".to_string();
    animal.kind = ClassKind::AbstractClass;
    let mut name_field = factory::make_field(factory::DEFAULT_FIELD_TYPE);
    name_field.name = "name".to_string();
    animal.fields.push(name_field);
    let mut speak = factory::make_method();
    speak.name = "speak".to_string();
    speak.kind = MethodKind::Abstract;
    speak.return_type = "String".to_string();
    animal.methods.push(speak);

    let mut walker = factory::make_class();
    walker.name = "Walker".to_string();
    walker.kind = ClassKind::Interface;
    let mut walk = factory::make_method();
    walk.name = "walk".to_string();
    walker.methods.push(walk);

    let mut dog = factory::make_class();
    dog.name = "Dog".to_string();
    let mut ctor = factory::make_method();
    ctor.return_type = CONSTRUCTOR_RETURN_TYPE.to_string();
    dog.methods.push(ctor);

    let extends = factory::make_relationship(dog.id.clone(), animal.id.clone());
    let mut implements = factory::make_relationship(dog.id.clone(), walker.id.clone());
    implements.kind = RelationshipKind::Implements;

    project.classes = vec![animal, walker, dog];
    project.relationships = vec![extends, implements];
    project
}
