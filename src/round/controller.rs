//! Tokio driver for a round.
//!
//! [`RoundController::spawn`] moves a [`Round`] into its own task. That task
//! is the only place the round is mutated: it `select!`s between the
//! countdown interval and the command channel, so ticks and player actions
//! never interleave. After every step it publishes a fresh
//! [`RoundSnapshot`] on a `watch` channel; fine-grained [`RoundEvent`]s go
//! out on a `broadcast` channel.
//!
//! Dropping the controller (or calling [`RoundController::shutdown`])
//! aborts the task, so no tick lands after the round is discarded.

use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::debug;

use crate::core::error::{GameError, Result};
use crate::core::RoundConfig;
use crate::words::Vocabulary;

use super::{Round, RoundEvent, RoundResult, RoundSnapshot};

/// Buffered events per subscriber before it starts lagging.
pub const EVENT_CAPACITY: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CommandKind {
    Accept,
    Skip,
    AcknowledgeBuzz,
    AcknowledgeFinished,
}

impl CommandKind {
    fn apply(self, round: &mut Round) {
        match self {
            CommandKind::Accept => round.accept(),
            CommandKind::Skip => round.skip(),
            CommandKind::AcknowledgeBuzz => round.acknowledge_buzz(),
            CommandKind::AcknowledgeFinished => round.acknowledge_finished(),
        }
    }
}

#[derive(Debug)]
struct Command {
    kind: CommandKind,
    reply: oneshot::Sender<RoundSnapshot>,
}

/// Handle to a running round.
///
/// Commands are async only because they wait for the round task to apply
/// them; none of them block on time.
#[derive(Debug)]
pub struct RoundController {
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<RoundSnapshot>,
    events: broadcast::Sender<RoundEvent>,
    task: JoinHandle<()>,
}

impl RoundController {
    /// Start a round and its countdown on the current tokio runtime.
    ///
    /// The first tick lands one `config.tick` after this call.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn(config: RoundConfig, vocabulary: Vocabulary) -> Result<Self> {
        let mut round = Round::new(config, vocabulary)?;

        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let sink = events.clone();
        round.subscribe(move |event: &RoundEvent| {
            // No subscribers is fine.
            let _ = sink.send(event.clone());
        });

        let (state_tx, state) = watch::channel(round.snapshot());
        let (commands, command_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_round(round, command_rx, state_tx));

        Ok(Self {
            commands,
            state,
            events,
            task,
        })
    }

    /// Count the current word as guessed.
    pub async fn accept(&self) -> Result<RoundSnapshot> {
        self.send(CommandKind::Accept).await
    }

    /// Pass on the current word.
    pub async fn skip(&self) -> Result<RoundSnapshot> {
        self.send(CommandKind::Skip).await
    }

    /// Reset the pending buzz after the cue has been played.
    pub async fn acknowledge_buzz(&self) -> Result<RoundSnapshot> {
        self.send(CommandKind::AcknowledgeBuzz).await
    }

    /// Clear the finished flag after the results view has been shown.
    pub async fn acknowledge_finished(&self) -> Result<RoundSnapshot> {
        self.send(CommandKind::AcknowledgeFinished).await
    }

    /// Latest published state.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        self.state.borrow().clone()
    }

    /// Receiver that is notified whenever the state changes.
    #[must_use]
    pub fn subscribe_state(&self) -> watch::Receiver<RoundSnapshot> {
        self.state.clone()
    }

    /// Receiver for every event emitted from now on.
    #[must_use]
    pub fn subscribe_events(&self) -> broadcast::Receiver<RoundEvent> {
        self.events.subscribe()
    }

    /// Wait for the clock to run out and return the results payload.
    pub async fn wait_finished(&self) -> Result<RoundResult> {
        let mut state = self.state.clone();
        let snapshot = state
            .wait_for(RoundSnapshot::is_finished)
            .await
            .map_err(|_| GameError::RoundClosed)?;
        Ok(RoundResult::from_snapshot(&snapshot))
    }

    /// Cancel the countdown and stop accepting commands.
    pub fn shutdown(&self) {
        if !self.task.is_finished() {
            debug!("round controller shut down");
        }
        self.task.abort();
    }

    /// Check if the round task is gone.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }

    async fn send(&self, kind: CommandKind) -> Result<RoundSnapshot> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Command { kind, reply })
            .map_err(|_| GameError::RoundClosed)?;
        response.await.map_err(|_| GameError::RoundClosed)
    }
}

impl Drop for RoundController {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_round(
    mut round: Round,
    mut commands: mpsc::UnboundedReceiver<Command>,
    state: watch::Sender<RoundSnapshot>,
) {
    let period = round.config().tick;
    let mut ticker = time::interval_at(Instant::now() + period, period);

    loop {
        tokio::select! {
            _ = ticker.tick(), if !round.is_finished() => {
                round.tick();
                state.send_replace(round.snapshot());
            }
            command = commands.recv() => {
                let Some(Command { kind, reply }) = command else {
                    break;
                };
                kind.apply(&mut round);
                let snapshot = round.snapshot();
                state.send_replace(snapshot.clone());
                // Caller may have stopped waiting.
                let _ = reply.send(snapshot);
            }
        }
    }

    debug!("round task exited");
}
