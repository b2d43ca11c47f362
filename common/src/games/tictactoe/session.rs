use std::time::Instant;

use crate::games::SessionRng;
use crate::log;
use crate::storage::KeyValueStorage;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::settings::{GameMode, TicTacToeSessionSettings};
use super::stats::{SessionStats, StatsStore};
use super::types::{GameResult, Mark};

/// A computer reply waiting out its thinking delay.
///
/// `round` ties the move to the board it was computed for. Any reset bumps the
/// session round, which turns a still-pending move stale; stale moves are
/// ignored and dropped on the next poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingBotMove {
    round: u64,
    index: usize,
    due: Instant,
}

/// Everything one player-facing session owns: the current round, the chosen
/// mode, the running totals and the computer's pending reply.
pub struct TicTacToeSession<S: KeyValueStorage> {
    game_state: TicTacToeGameState,
    settings: TicTacToeSessionSettings,
    stats: SessionStats,
    stats_store: StatsStore<S>,
    rng: SessionRng,
    round: u64,
    pending_bot_move: Option<PendingBotMove>,
}

impl<S: KeyValueStorage> TicTacToeSession<S> {
    pub fn new(settings: TicTacToeSessionSettings, storage: S, rng: SessionRng) -> Self {
        let stats_store = StatsStore::new(storage);
        let stats = stats_store.load();
        log!(
            "Session started in {:?} mode (rng seed {}), {} rounds on record",
            settings.mode,
            rng.seed(),
            stats.total_rounds
        );

        Self {
            game_state: TicTacToeGameState::new(),
            settings,
            stats,
            stats_store,
            rng,
            round: 0,
            pending_bot_move: None,
        }
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn mode(&self) -> GameMode {
        self.settings.mode
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    fn active_bot_move(&self) -> Option<PendingBotMove> {
        self.pending_bot_move.filter(|pending| pending.round == self.round)
    }

    pub fn is_bot_thinking(&self) -> bool {
        self.active_bot_move().is_some()
    }

    /// When the caller should call [`poll`](Self::poll) next.
    pub fn next_wakeup(&self) -> Option<Instant> {
        self.active_bot_move().map(|pending| pending.due)
    }

    pub fn status_text(&self) -> String {
        match self.game_state.result() {
            GameResult::Won(line) => format!("Winner: {}", line.mark),
            GameResult::Draw => "Draw!".to_string(),
            GameResult::InProgress if self.is_bot_thinking() => {
                "Computer is thinking...".to_string()
            }
            GameResult::InProgress => format!("Current turn: {}", self.game_state.current_mark()),
        }
    }

    /// A human marks `index` for whichever side is to move.
    ///
    /// Rejected while the computer owns the turn, including during its delay.
    pub fn handle_cell_click(&mut self, index: usize, now: Instant) -> Result<(), String> {
        if self.is_bot_thinking() {
            return Err("Computer is thinking".to_string());
        }

        let mark = self.game_state.current_mark();
        if self.settings.mode.bot_mark() == Some(mark) {
            return Err(format!("{} is played by the computer", mark));
        }

        self.apply_move(mark, index)?;
        self.schedule_bot_move(now);
        Ok(())
    }

    /// Plays the pending computer move once it is due. Returns whether a move
    /// was applied.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending_bot_move else {
            return false;
        };

        if pending.round != self.round {
            log!("Dropping computer move for round {} in round {}", pending.round, self.round);
            self.pending_bot_move = None;
            return false;
        }

        if now < pending.due {
            return false;
        }

        self.pending_bot_move = None;
        let mark = self.game_state.current_mark();
        match self.apply_move(mark, pending.index) {
            Ok(()) => true,
            Err(e) => {
                log!("Rejected computer move {} at cell {}: {}", mark, pending.index, e);
                false
            }
        }
    }

    /// Clears the board for a new round. Stats are kept and any pending
    /// computer move goes stale.
    pub fn restart(&mut self) {
        if let Some(pending) = self.active_bot_move() {
            log!("Cancelled computer move at cell {}", pending.index);
        }
        self.round += 1;
        self.game_state.reset();
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        if self.settings.mode == mode {
            return;
        }
        log!("Mode changed from {:?} to {:?}", self.settings.mode, mode);
        self.settings.mode = mode;
        self.restart();
    }

    fn apply_move(&mut self, mark: Mark, index: usize) -> Result<(), String> {
        self.game_state.place_mark(mark, index)?;

        let result = self.game_state.result();
        if result.is_terminal() {
            self.finish_round(result);
        }
        Ok(())
    }

    fn finish_round(&mut self, result: GameResult) {
        if !self.stats.record(&result) {
            return;
        }
        log!(
            "Round {} finished: {:?} (X {} / O {} / draws {})",
            self.round,
            self.game_state.status(),
            self.stats.wins_x,
            self.stats.wins_o,
            self.stats.draws
        );
        self.stats_store.persist(&self.stats);
    }

    fn schedule_bot_move(&mut self, now: Instant) {
        if self.game_state.is_over() {
            return;
        }

        let Some(bot_type) = self.settings.mode.bot_type() else {
            return;
        };

        if self.settings.mode.bot_mark() != Some(self.game_state.current_mark()) {
            return;
        }

        let input = BotInput::from_game_state(&self.game_state);
        match calculate_move(bot_type, &input, &mut self.rng) {
            Some(index) => {
                self.pending_bot_move = Some(PendingBotMove {
                    round: self.round,
                    index,
                    due: now + self.settings.bot_delay,
                });
            }
            None => log!("{:?} bot found no move", bot_type),
        }
    }
}
