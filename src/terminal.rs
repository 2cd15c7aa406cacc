//! Draws [`ScreenProps`] to a terminal as a vertical list of text cards.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};

use crate::screen::{ButtonProps, CardProps, Icon, IconProps, InfoRowProps, PillProps, ScreenProps};
use crate::theme::{Color, Theme};
use crate::Renderer;

const RULE_WIDTH: usize = 44;

fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Info => "ⓘ",
        Icon::Star => "★",
        Icon::ArrowForward => "→",
        Icon::ThumbUp => "👍",
        Icon::Favourite => "♥",
        Icon::FavouriteBorder => "♡",
    }
}

/// Text renderer for the recipe screen.
///
/// Keeps the most recent Props so typed commands can be dispatched through
/// their callbacks. With `plain` set no escape sequences are written.
pub struct TerminalRenderer<W: Write> {
    out: W,
    theme: Theme,
    plain: bool,
    /// Background of the surface currently being drawn.
    surface: Color,
    latest: Option<ScreenProps>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self {
            out,
            theme,
            plain: false,
            surface: theme.background,
            latest: None,
        }
    }

    pub fn plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    /// Props from the last render, if any.
    pub fn latest(&self) -> Option<&ScreenProps> {
        self.latest.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write `text` as is and flush; used for prompts and help.
    pub fn message(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Draw `props` on their surface colour without taking ownership.
    pub fn draw(&mut self, props: &ScreenProps) -> io::Result<()> {
        self.surface = props.background;
        self.line(&format!("── Recipes ({}) ", props.cards.len()), self.theme.muted)?;
        for card in &props.cards {
            self.draw_card(card)?;
        }
        self.out.flush()
    }

    pub fn draw_card(&mut self, card: &CardProps) -> io::Result<()> {
        let edge = card.border.unwrap_or(self.theme.muted);

        self.paint(&format!("┌─ #{} ", card.index), edge)?;
        self.line(&"─".repeat(RULE_WIDTH.saturating_sub(6)), edge)?;

        self.gutter(edge)?;
        self.paint(&format!("[image: {}]  ", card.image.0), self.theme.muted)?;
        // The heart sits on a muted badge over the image.
        self.pill(glyph(card.favourite.icon), card.favourite.tint, self.theme.muted)?;
        self.newline()?;

        self.gutter(edge)?;
        self.bold(card.title)?;
        self.newline()?;
        self.gutter(edge)?;
        self.line(card.subtitle, self.theme.text)?;

        self.gutter(edge)?;
        self.info_row(&card.info)?;
        self.newline()?;

        if let Some(ingredients) = &card.ingredients {
            for ingredient in ingredients {
                self.gutter(edge)?;
                self.paint("  ┃ ", Color::Green)?;
                self.line(&format!("{} {}", ingredient.item, ingredient.quantity), self.theme.text)?;
            }
        }

        self.gutter(edge)?;
        self.button(&card.actions.secondary)?;
        self.paint("   ", self.theme.text)?;
        self.button(&card.actions.primary)?;
        self.newline()?;

        self.line(&format!("└{}", "─".repeat(RULE_WIDTH - 1)), edge)
    }

    /// Draw the metadata row on a line of its own.
    pub fn draw_info_row(&mut self, info: &InfoRowProps) -> io::Result<()> {
        self.info_row(info)?;
        self.finish_line()
    }

    pub fn draw_prep_time(&mut self, prep_time: &str) -> io::Result<()> {
        self.prep_time(prep_time)?;
        self.finish_line()
    }

    pub fn draw_prep_type(&mut self, prep_type: &PillProps) -> io::Result<()> {
        self.pill(prep_type.label, prep_type.text, prep_type.background)?;
        self.finish_line()
    }

    fn info_row(&mut self, info: &InfoRowProps) -> io::Result<()> {
        self.prep_time(info.prep_time)?;
        self.paint(" │ ", self.theme.muted)?;
        self.pill(info.prep_type.label, info.prep_type.text, info.prep_type.background)?;
        self.paint(" ", self.theme.text)?;
        self.icon(info.rating)?;
        self.paint(" ", self.theme.text)?;
        self.icon(info.forward)?;
        for tag in info.tags {
            self.paint(&format!("  {tag}"), self.theme.text)?;
        }
        Ok(())
    }

    fn prep_time(&mut self, prep_time: &str) -> io::Result<()> {
        self.paint(&format!("{} ", glyph(Icon::Info)), self.theme.text)?;
        self.bold(prep_time)
    }

    fn button(&mut self, button: &ButtonProps) -> io::Result<()> {
        let label = match button.icon {
            Some(icon) => format!("{} {}", glyph(icon), button.label),
            None => button.label.to_string(),
        };
        if button.background == Color::Default {
            self.paint(&format!("[{label}]"), self.theme.text)
        } else {
            self.pill(&label, Color::Black, button.background)
        }
    }

    fn icon(&mut self, icon: IconProps) -> io::Result<()> {
        self.paint(glyph(icon.icon), icon.tint)
    }

    fn pill(&mut self, text: &str, fg: Color, bg: Color) -> io::Result<()> {
        if self.plain {
            return write!(self.out, "( {text} )");
        }
        queue!(
            self.out,
            SetBackgroundColor(bg.to_terminal()),
            SetForegroundColor(fg.to_terminal()),
            Print(format!(" {text} ")),
            ResetColor
        )
    }

    fn bold(&mut self, text: &str) -> io::Result<()> {
        if self.plain {
            return write!(self.out, "{text}");
        }
        self.on_surface()?;
        queue!(
            self.out,
            SetAttribute(Attribute::Bold),
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }

    fn paint(&mut self, text: &str, fg: Color) -> io::Result<()> {
        if self.plain || (fg == Color::Default && self.surface == Color::Default) {
            return write!(self.out, "{text}");
        }
        self.on_surface()?;
        if fg != Color::Default {
            queue!(self.out, SetForegroundColor(fg.to_terminal()))?;
        }
        queue!(self.out, Print(text), ResetColor)
    }

    // Every span ends in ResetColor, so the surface is set again per span.
    fn on_surface(&mut self) -> io::Result<()> {
        if self.surface == Color::Default {
            return Ok(());
        }
        queue!(self.out, SetBackgroundColor(self.surface.to_terminal()))
    }

    fn gutter(&mut self, edge: Color) -> io::Result<()> {
        self.paint("│ ", edge)
    }

    fn line(&mut self, text: &str, fg: Color) -> io::Result<()> {
        self.paint(text, fg)?;
        self.newline()
    }

    fn newline(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    fn finish_line(&mut self) -> io::Result<()> {
        self.newline()?;
        self.out.flush()
    }
}

impl<W: Write> Renderer<ScreenProps> for TerminalRenderer<W> {
    fn render(&mut self, props: ScreenProps) {
        if let Err(err) = self.draw(&props) {
            tracing::error!(%err, "failed to draw recipe screen");
        }
        self.latest = Some(props);
    }
}
