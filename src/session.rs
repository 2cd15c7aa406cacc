//! Driving the recipe screen from typed commands or a start-up script.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::input::{InputError, Intent, HELP};
use crate::screen::{RecipeScreen, ScreenEvent, ScreenProps};
use crate::store::{RecipeStore, StoreError};
use crate::terminal::TerminalRenderer;
use crate::MvuRuntime;

pub const PROMPT: &str = "> ";

type ScreenRuntime<W> = MvuRuntime<ScreenEvent, RecipeStore, ScreenProps, RecipeScreen, TerminalRenderer<W>>;

/// An interactive session: the runtime plus a line-oriented command loop.
pub struct Session<W: Write> {
    runtime: ScreenRuntime<W>,
}

impl<W: Write> Session<W> {
    /// Install the screen and draw the first snapshot.
    pub fn start(store: RecipeStore, screen: RecipeScreen, renderer: TerminalRenderer<W>) -> Self {
        let mut runtime = MvuRuntime::new(store, screen, renderer);
        runtime.start();
        Self { runtime }
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Bad commands, unknown cards and undecodable lines are reported on
    /// `errors` and the loop carries on. Only I/O failures end it early.
    pub fn run<R: BufRead, E: Write>(&mut self, mut input: R, mut errors: E) -> Result<()> {
        self.runtime.renderer_mut().message(&format!("{HELP}\n{PROMPT}"))?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            match self.handle(&buf) {
                Ok(false) => break,
                Ok(true) => {}
                Err(err) => {
                    tracing::debug!(%err, "rejected input");
                    writeln!(errors, "{err}")?;
                }
            }
            self.runtime.renderer_mut().message(PROMPT)?;
        }

        tracing::info!("recipe screen closed");
        Ok(())
    }

    pub fn model(&self) -> &RecipeStore {
        self.runtime.model()
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        self.runtime.renderer()
    }

    /// Everything written so far: snapshots, help, prompts.
    pub fn into_output(self) -> W {
        self.runtime.into_renderer().into_inner()
    }

    /// Apply one raw line. Returns `false` once the user asks to quit.
    fn handle(&mut self, raw: &[u8]) -> std::result::Result<bool, InputError> {
        let line = std::str::from_utf8(raw).map_err(|_| InputError::NotUtf8)?;
        if line.trim().is_empty() {
            return Ok(true);
        }

        match line.parse::<Intent>()? {
            Intent::Quit => return Ok(false),
            Intent::Help => {
                if let Err(err) = self.runtime.renderer_mut().message(&format!("{HELP}\n")) {
                    tracing::error!(%err, "failed to print help");
                }
            }
            intent => {
                let dispatched = match self.runtime.renderer().latest() {
                    Some(props) => intent.dispatch(props),
                    None => Ok(()),
                };
                self.runtime.process_events();
                dispatched?;
            }
        }
        Ok(true)
    }
}

/// Card events for `intents`, rejecting any index past the end of `store`.
pub fn script_events(intents: &[Intent], store: &RecipeStore) -> Result<Vec<ScreenEvent>> {
    let events: Vec<ScreenEvent> = intents.iter().filter_map(|intent| intent.event()).collect();
    if let Some(bad) = events.iter().find(|event| event.index() >= store.len()) {
        return Err(StoreError::IndexOutOfRange {
            index: bad.index(),
            len: store.len(),
        }
        .into());
    }
    Ok(events)
}

/// Apply `intents` at start-up and draw only the final screen to `out`.
///
/// Returns the final store. Nothing is drawn when the script is rejected.
pub fn run_script<W: Write>(
    store: RecipeStore,
    intents: &[Intent],
    screen: RecipeScreen,
    out: &mut TerminalRenderer<W>,
) -> Result<RecipeStore> {
    let events = script_events(intents, &store)?;
    tracing::info!(events = events.len(), "running script");

    let quiet = TerminalRenderer::new(std::io::sink(), Default::default());
    let mut runtime = MvuRuntime::new(store, screen.with_startup_events(events), quiet);
    runtime.start();
    runtime.process_events();

    if let Some(props) = runtime.renderer().latest() {
        out.draw(props)?;
    }
    Ok(runtime.model().clone())
}
