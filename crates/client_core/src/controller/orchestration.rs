//! Drives a `Session` on the Tokio runtime: executes the reducer's commands,
//! feeds backend replies and clock ticks back into it, and runs the single
//! cooperative event loop.

use std::sync::Arc;

use futures::{Stream, StreamExt};
use tokio::{
    sync::mpsc,
    time::{self, Instant, Interval, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{
    backend::GameBackend,
    controller::{
        events::{Command, Completion, Reply, Request, SessionEvent},
        reducer::{Phase, Session},
    },
    input::Key,
    render::RenderState,
    rules::GameRules,
};

pub struct SessionDriver {
    session: Session,
    backend: Arc<dyn GameBackend>,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
    events_rx: mpsc::UnboundedReceiver<SessionEvent>,
    ticker: Interval,
    in_flight: usize,
}

impl SessionDriver {
    /// Must be called from within a Tokio runtime.
    pub fn new(backend: Arc<dyn GameBackend>, rules: GameRules) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut ticker = time::interval_at(Instant::now() + rules.tick, rules.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            session: Session::new(rules),
            backend,
            events_tx,
            events_rx,
            ticker,
            in_flight: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn render_state(&self) -> RenderState {
        self.session.render()
    }

    /// Backend requests sent whose replies have not been applied yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn dispatch(&mut self, event: SessionEvent) {
        if matches!(event, SessionEvent::Completed(_)) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        for command in self.session.handle(event) {
            self.execute(command);
        }
    }

    /// Waits for the next backend reply or banner timeout and applies it.
    pub async fn pump(&mut self) {
        if let Some(event) = self.events_rx.recv().await {
            self.dispatch(event);
        }
    }

    /// Plays one game. Ending the key stream closes the game; the loop then
    /// returns once the final board is in, or nothing is left in flight.
    pub async fn run<S, R>(mut self, mut keys: S, mut render: R) -> Session
    where
        S: Stream<Item = Key> + Unpin,
        R: FnMut(&RenderState),
    {
        self.dispatch(SessionEvent::Start);
        render(&self.render_state());

        let mut keys_open = true;
        loop {
            if !keys_open && (self.session.phase() == Phase::Ended || self.in_flight == 0) {
                break;
            }
            tokio::select! {
                key = keys.next(), if keys_open => match key {
                    Some(key) => self.dispatch(SessionEvent::Key(key)),
                    None => {
                        debug!("driver: input closed");
                        keys_open = false;
                        self.dispatch(SessionEvent::Close);
                        if self.session.phase() == Phase::Ending {
                            info!(in_flight = self.in_flight, "driver: waiting for final board");
                        }
                    }
                },
                _ = self.ticker.tick() => self.dispatch(SessionEvent::Tick),
                Some(event) = self.events_rx.recv() => self.dispatch(event),
            }
            render(&self.render_state());
        }

        info!(
            phase = ?self.session.phase(),
            points = self.session.points(),
            abandoned = self.in_flight,
            "driver: stopped"
        );
        self.session
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Request { epoch, request } => self.spawn_request(epoch, request),
            Command::StartClock => self.ticker.reset(),
            Command::ResetBannerAfter { token, delay } => {
                let events = self.events_tx.clone();
                tokio::spawn(async move {
                    time::sleep(delay).await;
                    let _ = events.send(SessionEvent::BannerElapsed(token));
                });
            }
        }
    }

    fn spawn_request(&mut self, epoch: u64, request: Request) {
        self.in_flight += 1;
        let backend = Arc::clone(&self.backend);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let reply = perform(backend.as_ref(), request).await;
            // The driver may already be gone; the reply is moot then.
            let _ = events.send(SessionEvent::Completed(Completion { epoch, reply }));
        });
    }
}

async fn perform(backend: &dyn GameBackend, request: Request) -> Reply {
    match request {
        Request::Start => Reply::Started(backend.start().await),
        Request::FetchTiles { game_id } => Reply::TilesFetched(backend.fetch_tiles(&game_id).await),
        Request::SubmitGuess { game_id, word } => {
            let result = backend.submit_guess(&game_id, &word).await;
            Reply::GuessJudged { word, result }
        }
        Request::EndGame { game_id } => Reply::Ended(backend.end_game(&game_id).await),
    }
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
