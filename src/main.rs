use std::io;

use clap::Parser;

use recipe_cards::config::Cli;
use recipe_cards::error::Result;
use recipe_cards::logging::init_tracing;
use recipe_cards::preview::{self, Preview};
use recipe_cards::recipe::demo_recipes;
use recipe_cards::session::{run_script, Session};
use recipe_cards::terminal::TerminalRenderer;
use recipe_cards::theme::Theme;
use recipe_cards::{RecipeScreen, RecipeStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let theme = Theme::default();
    let mut out = TerminalRenderer::new(io::stdout(), theme).plain(cli.plain);

    if let Some(which) = cli.preview {
        return show_preview(which, &theme, &mut out);
    }

    let store = RecipeStore::demo();
    let screen = RecipeScreen::new().with_theme(theme);

    if cli.script.is_some() {
        run_script(store, &cli.script_intents()?, screen, &mut out)?;
        return Ok(());
    }

    let mut session = Session::start(store, screen, out);
    session.run(io::stdin().lock(), io::stderr())
}

fn show_preview(which: Preview, theme: &Theme, out: &mut TerminalRenderer<io::Stdout>) -> Result<()> {
    match which {
        Preview::Card => {
            if let Some(recipe) = demo_recipes().first() {
                out.draw(&preview::card(recipe, theme))?;
            }
        }
        Preview::Info => out.draw_info_row(&preview::info_row())?,
        Preview::PrepTime => out.draw_prep_time(preview::prep_time())?,
        Preview::PrepType => out.draw_prep_type(&preview::prep_type())?,
        Preview::Screen => out.draw(&preview::screen(theme))?,
    }
    Ok(())
}
