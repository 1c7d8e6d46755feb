//! The game session state machine.
//!
//! `Session` is mutated only through the methods below, each of which returns
//! the commands the orchestration layer must carry out. Nothing here awaits;
//! backend replies come back in as [`Completion`]s tagged with the epoch they
//! were requested under, and a reply whose epoch is no longer current is
//! dropped without effect.

use shared::domain::GameId;
use tracing::{debug, info, warn};

use crate::{
    backend::{EndOutcome, GuessOutcome, StartOutcome, TilesOutcome},
    board::Board,
    controller::events::{Command, Completion, Reply, Request, SessionEvent},
    error::BackendError,
    guess::Guess,
    input::{self, Intent, Key},
    render::RenderState,
    rules::GameRules,
    timer::{ClockSignal, Countdown},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Unstarted,
    Active,
    /// End requested; waiting for the final board. Input and clock are frozen.
    Ending,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Banner {
    #[default]
    Title,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone)]
pub struct Session {
    rules: GameRules,
    game_id: Option<GameId>,
    points: i64,
    phase: Phase,
    epoch: u64,
    start_pending: bool,
    /// The last `/end` request failed; another end may be requested.
    end_failed: bool,
    board: Board,
    guess: Guess,
    clock: Countdown,
    banner: Banner,
    banner_token: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameRules::default())
    }
}

impl Session {
    pub fn new(rules: GameRules) -> Self {
        Self {
            rules,
            game_id: None,
            points: 0,
            phase: Phase::Unstarted,
            epoch: 0,
            start_pending: false,
            end_failed: false,
            board: Board::new(),
            guess: Guess::new(),
            clock: Countdown::new(),
            banner: Banner::Title,
            banner_token: 0,
        }
    }

    pub fn handle(&mut self, event: SessionEvent) -> Vec<Command> {
        match event {
            SessionEvent::Start => self.start_game(),
            SessionEvent::Key(key) => self.handle_key(key),
            SessionEvent::Tick => self.tick(),
            SessionEvent::Close => self.end_game(),
            SessionEvent::Completed(completion) => self.apply_completion(completion),
            SessionEvent::BannerElapsed(token) => {
                self.banner_elapsed(token);
                Vec::new()
            }
        }
    }

    pub fn start_game(&mut self) -> Vec<Command> {
        if self.phase != Phase::Unstarted || self.start_pending {
            return Vec::new();
        }
        self.start_pending = true;
        info!(epoch = self.epoch, "session: requesting new game");
        vec![self.request(Request::Start)]
    }

    /// Keys are only honoured while the game is active; anything the player
    /// presses that has no effect is dropped silently.
    pub fn handle_key(&mut self, key: Key) -> Vec<Command> {
        if self.phase != Phase::Active {
            return Vec::new();
        }
        match input::dispatch(key, &self.guess) {
            Some(intent) => self.apply_intent(intent),
            None => Vec::new(),
        }
    }

    pub fn apply_intent(&mut self, intent: Intent) -> Vec<Command> {
        if self.phase != Phase::Active {
            return Vec::new();
        }
        match intent {
            Intent::Pick(letter) => {
                if let Some(tile) = self.board.pick(letter) {
                    self.guess.append(tile);
                }
                Vec::new()
            }
            Intent::Backspace => {
                if let Some(id) = self.guess.remove_last() {
                    self.board.unpick(id);
                }
                Vec::new()
            }
            Intent::Submit => self.submit_guess(),
            Intent::Refresh => self.refresh_tiles(),
        }
    }

    pub fn refresh_tiles(&mut self) -> Vec<Command> {
        let Some(game_id) = self.active_game() else {
            return Vec::new();
        };
        debug!(%game_id, "session: requesting fresh tiles");
        vec![self.request(Request::FetchTiles { game_id })]
    }

    pub fn submit_guess(&mut self) -> Vec<Command> {
        if self.guess.is_empty() {
            return Vec::new();
        }
        let Some(game_id) = self.active_game() else {
            return Vec::new();
        };
        let word = self.guess.to_word();
        debug!(%game_id, %word, "session: submitting guess");
        vec![self.request(Request::SubmitGuess { game_id, word })]
    }

    pub fn tick(&mut self) -> Vec<Command> {
        if self.phase != Phase::Active {
            return Vec::new();
        }
        let signal = self.clock.tick();
        self.after_clock_change(signal)
    }

    /// Ends the game from any non-terminal phase. Advancing the epoch here is
    /// what invalidates every reply still in flight. While ending, a new
    /// request goes out only if the previous one failed.
    pub fn end_game(&mut self) -> Vec<Command> {
        match self.phase {
            Phase::Ended => return Vec::new(),
            Phase::Ending => return self.resend_end(),
            Phase::Unstarted | Phase::Active => {}
        }
        self.epoch += 1;
        self.clock.stop();
        self.start_pending = false;
        match self.game_id.clone() {
            Some(game_id) => {
                info!(%game_id, epoch = self.epoch, "session: ending game");
                self.phase = Phase::Ending;
                vec![self.request(Request::EndGame { game_id })]
            }
            None => {
                info!(epoch = self.epoch, "session: closed before a game was issued");
                self.phase = Phase::Ended;
                Vec::new()
            }
        }
    }

    fn resend_end(&mut self) -> Vec<Command> {
        if !self.end_failed {
            return Vec::new();
        }
        let Some(game_id) = self.game_id.clone() else {
            return Vec::new();
        };
        self.end_failed = false;
        info!(%game_id, epoch = self.epoch, "session: requesting end again");
        vec![self.request(Request::EndGame { game_id })]
    }

    pub fn apply_completion(&mut self, completion: Completion) -> Vec<Command> {
        if completion.epoch != self.epoch {
            debug!(
                reply = completion.reply.name(),
                reply_epoch = completion.epoch,
                epoch = self.epoch,
                "session: discarding stale reply"
            );
            return Vec::new();
        }
        match completion.reply {
            Reply::Started(result) => self.on_started(result),
            Reply::TilesFetched(result) => self.on_tiles_fetched(result),
            Reply::GuessJudged { word, result } => self.on_guess_judged(&word, result),
            Reply::Ended(result) => {
                self.on_ended(result);
                Vec::new()
            }
        }
    }

    pub fn banner_elapsed(&mut self, token: u64) {
        if token == self.banner_token {
            self.banner = Banner::Title;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn points(&self) -> i64 {
        self.points
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn game_id(&self) -> Option<&GameId> {
        self.game_id.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn guess(&self) -> &Guess {
        &self.guess
    }

    pub fn time_left(&self) -> i64 {
        self.clock.remaining()
    }

    /// True when the last end request failed and none is outstanding.
    pub fn end_failed(&self) -> bool {
        self.end_failed
    }

    pub fn clock_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn banner(&self) -> Banner {
        self.banner
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn render(&self) -> RenderState {
        RenderState::project(self)
    }

    fn request(&self, request: Request) -> Command {
        Command::Request {
            epoch: self.epoch,
            request,
        }
    }

    fn active_game(&self) -> Option<GameId> {
        if self.phase != Phase::Active {
            return None;
        }
        self.game_id.clone()
    }

    fn after_clock_change(&mut self, signal: Option<ClockSignal>) -> Vec<Command> {
        match signal {
            Some(ClockSignal::Expired) => {
                info!("session: clock ran out");
                self.end_game()
            }
            Some(ClockSignal::Running) | None => Vec::new(),
        }
    }

    fn flash(&mut self, banner: Banner) -> Command {
        self.banner = banner;
        self.banner_token += 1;
        Command::ResetBannerAfter {
            token: self.banner_token,
            delay: self.rules.banner_duration,
        }
    }

    fn on_started(&mut self, result: Result<StartOutcome, BackendError>) -> Vec<Command> {
        self.start_pending = false;
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(%error, "session: failed to start game");
                return Vec::new();
            }
        };
        if self.phase != Phase::Unstarted {
            return Vec::new();
        }
        info!(game_id = %outcome.game_id, tiles = outcome.tiles.len(), "session: game started");
        self.game_id = Some(outcome.game_id);
        self.points = outcome.points;
        self.board.load(&outcome.tiles);
        self.guess.clear();
        self.phase = Phase::Active;
        self.clock.start(self.rules.round_seconds);
        vec![Command::StartClock]
    }

    fn on_tiles_fetched(&mut self, result: Result<TilesOutcome, BackendError>) -> Vec<Command> {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(%error, "session: failed to fetch tiles");
                return Vec::new();
            }
        };
        if self.phase != Phase::Active {
            return Vec::new();
        }
        self.guess.clear();
        self.board.load(&outcome.tiles);
        if let Some(points) = outcome.points {
            self.points = points;
        }
        let signal = self.clock.adjust(-self.rules.refresh_penalty_seconds);
        self.after_clock_change(signal)
    }

    fn on_guess_judged(
        &mut self,
        word: &str,
        result: Result<GuessOutcome, BackendError>,
    ) -> Vec<Command> {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(%error, word, "session: failed to submit guess");
                return Vec::new();
            }
        };
        if self.phase != Phase::Active {
            return Vec::new();
        }
        match outcome {
            GuessOutcome::Accepted { tiles, points } => {
                info!(word, points, "session: guess accepted");
                self.board.load(&tiles);
                self.points = points;
                self.guess.clear();
                let mut commands = vec![self.flash(Banner::Accepted)];
                let signal = self.clock.adjust(self.rules.accept_bonus_seconds);
                commands.extend(self.after_clock_change(signal));
                commands
            }
            GuessOutcome::Rejected => {
                info!(word, "session: guess rejected");
                vec![self.flash(Banner::Rejected)]
            }
        }
    }

    fn on_ended(&mut self, result: Result<EndOutcome, BackendError>) {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(%error, "session: failed to end game");
                if self.phase == Phase::Ending {
                    self.end_failed = true;
                }
                return;
            }
        };
        if self.phase != Phase::Ending {
            return;
        }
        info!(points = outcome.points, "session: game over");
        self.board.load(&outcome.tiles);
        self.points = outcome.points;
        self.guess.clear();
        self.phase = Phase::Ended;
    }
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;
