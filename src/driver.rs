#![cfg(feature = "std")]

//! Event loop wiring a [`Session`] to its input, renderer and status reporter.

use tokio::sync::mpsc;

use crate::game::{ClickOutcome, Outcome, Session, TurnState};
use crate::grid::PixelPoint;

/// Source of canvas clicks. `Ok(None)` means the input is closed.
#[async_trait::async_trait]
pub trait InputSource: Send {
    async fn next_click(&mut self) -> anyhow::Result<Option<PixelPoint>>;
}

/// Draws the current session state.
pub trait Renderer {
    fn render(&mut self, session: &Session);
}

/// Receives the end-of-game event.
pub trait StatusReporter {
    fn report(&mut self, outcome: Outcome, message: &str);
}

/// Clicks delivered over a tokio channel.
pub struct ChannelInput {
    rx: mpsc::Receiver<PixelPoint>,
}

impl ChannelInput {
    /// Create the input together with the sender that feeds it.
    pub fn channel(capacity: usize) -> (mpsc::Sender<PixelPoint>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, ChannelInput { rx })
    }
}

#[async_trait::async_trait]
impl InputSource for ChannelInput {
    async fn next_click(&mut self) -> anyhow::Result<Option<PixelPoint>> {
        Ok(self.rx.recv().await)
    }
}

/// Renderer that draws nothing.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _session: &Session) {}
}

/// Reporter that sends the final status to the log.
pub struct LogReporter;

impl StatusReporter for LogReporter {
    fn report(&mut self, outcome: Outcome, message: &str) {
        log::info!("game {}: {}", outcome, message);
    }
}

/// Play `session` until it ends or the input closes.
///
/// Computer turns run to completion without yielding; the loop only awaits
/// while the human is to move. Returns the outcome, or `None` if the input
/// closed first.
pub async fn run_session<I, R, S>(
    session: &mut Session,
    input: &mut I,
    renderer: &mut R,
    reporter: &mut S,
) -> anyhow::Result<Option<Outcome>>
where
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
    S: StatusReporter + ?Sized,
{
    renderer.render(session);
    loop {
        if session.advance().is_some() {
            renderer.render(session);
        }
        if let Some(outcome) = session.outcome() {
            let message = session.status_message().unwrap_or_default();
            reporter.report(outcome, &message);
            return Ok(Some(outcome));
        }
        debug_assert_eq!(session.state(), TurnState::PlayerTurn);

        let Some(click) = input.next_click().await? else {
            log::info!("input closed before the game ended");
            return Ok(None);
        };
        match session.click(click.x, click.y) {
            ClickOutcome::Fired(_) => renderer.render(session),
            other => log::debug!("click at ({}, {}) ignored: {:?}", click.x, click.y, other),
        }
    }
}
