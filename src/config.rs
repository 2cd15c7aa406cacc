use clap::Parser;

use crate::error::Result;
use crate::input::Intent;
use crate::preview::Preview;

/// A scrollable list of recipe cards you can favourite, expand and add to
/// your meal plan.
#[derive(Parser, Debug)]
#[command(name = "recipe-cards")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Comma-separated intents applied at start-up, e.g. `e0,s1,f1`.
    /// The final screen is printed and the program exits.
    #[arg(short, long, conflicts_with = "preview")]
    pub script: Option<String>,

    /// Print one preview and exit.
    #[arg(short, long, value_enum)]
    pub preview: Option<Preview>,

    /// Disable colours and other escape sequences.
    #[arg(long)]
    pub plain: bool,
}

impl Cli {
    /// The parsed `--script` intents; empty when no script was given.
    pub fn script_intents(&self) -> Result<Vec<Intent>> {
        match &self.script {
            Some(script) => Ok(Intent::parse_script(script)?),
            None => Ok(Vec::new()),
        }
    }
}
