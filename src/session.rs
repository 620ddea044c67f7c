use std::thread;
use std::time::Duration;

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::autopilot::Autopilot;
use crate::config::{GameConfig, GameMode};
use crate::game::{GameState, GameStatus};
use crate::input::GameCommand;
use crate::score::{Leaderboard, LeaderboardEntry};

/// Result of one scheduled step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The game is not playing, so nothing moved.
    Stalled,
    Continued,
    /// The game ended on this step.
    Finished(GameStatus),
}

/// Summary returned by [`GameSession::run`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub status: GameStatus,
    pub score: u32,
}

/// Drives one game: holds the current snapshot, the seeded rng and the
/// collaborators that react to it.
pub struct GameSession {
    state: GameState,
    rng: StdRng,
    seed: u64,
    autopilot: Option<Box<dyn Autopilot>>,
    leaderboard: Option<Box<dyn Leaderboard>>,
    player: String,
}

impl GameSession {
    /// Creates a session with an idle game. A random seed is chosen when
    /// `seed` is `None`.
    #[must_use]
    pub fn new(config: GameConfig, mode: GameMode, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::with_config(config, mode, &mut rng);

        Self {
            state,
            rng,
            seed,
            autopilot: None,
            leaderboard: None,
            player: String::from("anonymous"),
        }
    }

    /// Lets `autopilot` steer before every tick.
    #[must_use]
    pub fn with_autopilot(mut self, autopilot: Box<dyn Autopilot>) -> Self {
        self.autopilot = Some(autopilot);
        self
    }

    /// Reports finished games with a positive score to `leaderboard`.
    #[must_use]
    pub fn with_leaderboard(mut self, leaderboard: Box<dyn Leaderboard>, player: &str) -> Self {
        self.leaderboard = Some(leaderboard);
        self.player = player.to_owned();
        self
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn leaderboard(&self) -> Option<&dyn Leaderboard> {
        self.leaderboard.as_deref()
    }

    /// Interval to wait before the next [`Self::step`].
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.state.tick_interval()
    }

    /// Replaces the held snapshot with the result of `command`.
    pub fn apply(&mut self, command: GameCommand) {
        let before = self.state.status;
        self.state = self.state.clone().apply(command, &mut self.rng);

        if self.state.status != before {
            info!("{command:?}: {before:?} -> {:?}", self.state.status);
        }
    }

    /// Steers (when an autopilot is installed) and ticks once.
    pub fn step(&mut self) -> StepOutcome {
        if self.state.status != GameStatus::Playing {
            return StepOutcome::Stalled;
        }

        if let Some(autopilot) = &self.autopilot {
            let direction = autopilot.next_direction(&self.state);
            self.state.change_direction_in_place(direction);
        }

        self.state.tick_in_place(&mut self.rng);

        if self.state.status.is_terminal() {
            self.report_finished_game();
            return StepOutcome::Finished(self.state.status);
        }
        StepOutcome::Continued
    }

    /// Starts the game if needed and steps until it ends, `max_ticks` steps
    /// have run, or it stops playing. Sleeps between steps when `realtime`.
    pub fn run(&mut self, max_ticks: Option<u64>, realtime: bool) -> RunSummary {
        self.apply(GameCommand::Start);

        let mut ticks = 0;
        while max_ticks.is_none_or(|limit| ticks < limit) {
            if realtime {
                thread::sleep(self.tick_interval());
            }

            match self.step() {
                StepOutcome::Continued => ticks += 1,
                StepOutcome::Finished(_) => {
                    ticks += 1;
                    break;
                }
                StepOutcome::Stalled => break,
            }
        }

        RunSummary {
            ticks,
            status: self.state.status,
            score: self.state.score,
        }
    }

    fn report_finished_game(&mut self) {
        if self.state.score == 0 {
            return;
        }
        let Some(leaderboard) = self.leaderboard.as_mut() else {
            return;
        };

        let entry = LeaderboardEntry {
            player: self.player.clone(),
            score: self.state.score,
            mode: self.state.mode,
        };
        if let Err(error) = leaderboard.submit(entry) {
            warn!("failed to submit score {}: {error}", self.state.score);
        }
    }
}
