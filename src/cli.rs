//! Minimal CLI: signature schema JSON → starter code (python | typescript)
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::codegen::{self, Language};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// render a function-signature schema into starter code for a target language
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// render a Python starter file
    Python(RenderOut),
    /// render a TypeScript starter file
    Typescript(RenderOut),
}

#[derive(Args, Debug, Clone)]
struct RenderOut {
    /// path to the function-signature schema JSON file
    #[arg(long, short)]
    input: PathBuf,

    /// output source file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let (target, language) = match &self.cmd {
            Command::Python(target) => (target, Language::Python),
            Command::Typescript(target) => (target, Language::Typescript),
        };

        // debug path
        if target.no_op {
            eprintln!("{self:#?}");
            return Ok(());
        }

        // 1) load the schema
        let schema = crate::schema::load(&target.input)?;

        // 2) render starter code for the selected backend
        let source = codegen::starter_code(&schema, language);

        // 3) write it out
        target.write(&source)
    }
}

impl RenderOut {
    fn write(&self, source: &str) -> anyhow::Result<()> {
        match self.out.as_ref() {
            Some(out) => {
                if let Some(parent) = out.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
                std::fs::write(out, source)
                    .with_context(|| format!("failed to write {}", out.display()))?;
            }
            None => println!("{source}"),
        }
        Ok(())
    }
}
