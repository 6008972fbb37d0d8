//! vibedoc: merge chat replies into a markdown design document, one section at a time.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use vibedoc::config::Config;
use vibedoc::edit_plan::EditPlan;
use vibedoc::error::{Error, Result};
use vibedoc::progress::{next_pending_section, section_statuses};
use vibedoc::reducer::DocumentEvent;
use vibedoc::section::SectionPlan;
use vibedoc::{parse, reduce};

#[derive(Parser)]
#[command(name = "vibedoc")]
#[command(about = "Co-author a design document with a chat assistant", long_about = None)]
struct Args {
    /// Config file (defaults to ./vibedoc.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Document file (overrides the config)
    #[arg(long, short = 'd', global = true, value_name = "PATH")]
    document: Option<PathBuf>,

    /// Log merge decisions
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a fresh document from the section plan
    Init {
        /// Document title (defaults to the config title)
        #[arg(long)]
        title: Option<String>,
        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },
    /// Merge a chat reply into a section
    Append {
        /// Section key
        key: String,
        #[command(flatten)]
        input: ContentInput,
    },
    /// Replace a section body outright
    Replace {
        /// Section key
        key: String,
        #[command(flatten)]
        input: ContentInput,
    },
    /// Reset a section to its placeholder
    Clear {
        /// Section key
        key: String,
    },
    /// Print a section body
    Show {
        /// Section key
        key: String,
    },
    /// Show which sections have content
    Status,
    /// Print the next section still waiting for content
    Next,
    /// Apply a saved edit plan
    Replay {
        /// Edit plan JSON file
        plan: PathBuf,
    },
    /// Rewrite the document in canonical form
    Canonicalize,
}

#[derive(clap::Args)]
struct ContentInput {
    /// Content text (reads stdin when neither this nor --file is given)
    #[arg(long, conflicts_with = "file")]
    content: Option<String>,
    /// Read content from a file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

impl ContentInput {
    fn read(&self) -> Result<String> {
        if let Some(content) = &self.content {
            return Ok(content.clone());
        }
        if let Some(path) = &self.file {
            return Ok(fs::read_to_string(path)?);
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let cfg = Config::load(args.config.as_deref())?;
    let plan = cfg.plan()?;
    let path = cfg.document_path(args.document.as_deref());

    match &args.command {
        Command::Init { title, force } => {
            if path.exists() && !force {
                return Err(Error::DocumentExists(path));
            }
            let title = title.clone().unwrap_or_else(|| cfg.title.clone());
            let document = reduce("", &plan, &DocumentEvent::Initialize { title });
            fs::write(&path, document)?;
            println!("Wrote {}", path.display());
        }
        Command::Append { key, input } => {
            let event = DocumentEvent::AppendSection {
                key: checked_key(&plan, key)?,
                content: input.read()?,
            };
            update(&path, &plan, &event)?;
        }
        Command::Replace { key, input } => {
            let event = DocumentEvent::ReplaceSection {
                key: checked_key(&plan, key)?,
                content: input.read()?,
            };
            update(&path, &plan, &event)?;
        }
        Command::Clear { key } => {
            let event = DocumentEvent::ClearSection {
                key: checked_key(&plan, key)?,
            };
            update(&path, &plan, &event)?;
        }
        Command::Show { key } => {
            let key = checked_key(&plan, key)?;
            let parsed = parse(&read_document(&path)?, &plan);
            println!("{}", parsed.section(&key).unwrap_or_default());
        }
        Command::Status => {
            let statuses = section_statuses(&read_document(&path)?, &plan);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&statuses)?);
            } else {
                for status in statuses {
                    let mark = if status.populated { "x" } else { " " };
                    println!("[{mark}] {:<16} {}", status.key, status.heading);
                }
            }
        }
        Command::Next => {
            let document = read_document(&path)?;
            match next_pending_section(&document, &plan) {
                Some(section) if args.json => println!("{}", serde_json::to_string(section)?),
                Some(section) => println!("{}\t{}", section.key, section.heading),
                None if args.json => println!("null"),
                None => println!("All sections have content"),
            }
        }
        Command::Replay { plan: plan_path } => {
            let edits = EditPlan::load(plan_path)?;
            edits.apply_to_file(&path, &plan)?;
        }
        Command::Canonicalize => update(&path, &plan, &DocumentEvent::Canonicalize)?,
    }

    Ok(())
}

fn checked_key(plan: &SectionPlan, key: &str) -> Result<String> {
    if plan.get(key).is_some() {
        Ok(key.to_string())
    } else {
        Err(Error::UnknownSection(key.to_string()))
    }
}

fn read_document(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

fn update(path: &Path, plan: &SectionPlan, event: &DocumentEvent) -> Result<()> {
    let current = read_document(path)?;
    let next = reduce(&current, plan, event);
    if next == current {
        tracing::info!("document unchanged");
    } else {
        fs::write(path, next)?;
    }
    Ok(())
}
