//! Match session orchestrator.
//!
//! [`MatchSession`] owns the single current snapshot and is its only
//! writer. Each call to [`MatchSession::play_round`] collects provider
//! plans, runs the engine exactly once, replaces the snapshot wholesale,
//! and applies the clock bookkeeping the engine deliberately knows nothing
//! about: turn increments, the half-time restart, and the final whistle.

use std::collections::HashMap;

use tokio::sync::broadcast;
use tracing::{debug, info};

use pitch_core::{
    Command, MatchConfig, MatchState, PcgRng, RoundEngine, Score, TeamId, validate,
};
use pitch_content::{Squad, default_squads, kickoff, reposition_for_kickoff};

use crate::api::CommandProvider;
use crate::error::{Result, RuntimeError};
use crate::events::{MatchEvent, extract_events};

/// Event channel capacity; laggy subscribers miss old events rather than
/// backpressuring the session.
const EVENT_CAPACITY: usize = 64;

pub struct MatchSession {
    config: MatchConfig,
    state: MatchState,
    providers: HashMap<TeamId, Box<dyn CommandProvider>>,
    events: broadcast::Sender<MatchEvent>,
    game_over: bool,
}

impl MatchSession {
    /// Kicks off a match with the built-in default squads, Home possessing.
    pub fn kickoff(config: MatchConfig, seed: u64) -> Self {
        let (home, away) = default_squads();
        Self::kickoff_with_squads(config, seed, &home, &away)
    }

    /// Kicks off a match with caller-supplied rosters.
    pub fn kickoff_with_squads(
        config: MatchConfig,
        seed: u64,
        home: &Squad,
        away: &Squad,
    ) -> Self {
        let bounds = config.bounds();
        let (actors, ball) = kickoff(home, away, TeamId::Home, &bounds);
        let state = MatchState::new(seed, bounds, actors, ball);
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        info!(seed, home = %home.name, away = %away.name, "match kicked off");
        Self {
            config,
            state,
            providers: HashMap::new(),
            events,
            game_over: false,
        }
    }

    /// Registers the command source for one team, replacing any previous
    /// one. Teams without a provider rely solely on queued commands.
    pub fn set_provider(&mut self, team: TeamId, provider: Box<dyn CommandProvider>) {
        self.providers.insert(team, provider);
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Subscribes to match events. Events published before the call are
    /// not replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<MatchEvent> {
        self.events.subscribe()
    }

    /// Queues one planning command after validating it against the current
    /// snapshot. A later command of the same kind from the same actor
    /// supersedes the earlier one.
    pub fn queue_command(&mut self, command: Command) -> Result<()> {
        if self.game_over {
            return Err(RuntimeError::MatchOver);
        }
        validate(&self.state, &command)?;
        self.state.commands.push(command);
        Ok(())
    }

    /// Resolves one round.
    ///
    /// Provider commands are merged into the queue under the same
    /// validation as human input; invalid ones are dropped with a debug
    /// log, never an error. The engine runs exactly once, then the clock
    /// advances and accumulated events are broadcast.
    pub async fn play_round(&mut self) -> Result<&MatchState> {
        if self.game_over {
            return Err(RuntimeError::MatchOver);
        }

        for team in [TeamId::Home, TeamId::Away] {
            if let Some(provider) = self.providers.get(&team) {
                let planned = provider.plan_commands(team, &self.state).await?;
                for command in planned {
                    match validate(&self.state, &command) {
                        Ok(()) => self.state.commands.push(command),
                        Err(reason) => {
                            debug!(%team, %reason, "dropping provider command");
                        }
                    }
                }
            }
        }

        let engine = RoundEngine::new(&PcgRng);
        let resolved = engine.resolve(&self.state);
        let mut events = extract_events(&self.state, &resolved);
        self.state = resolved;

        self.advance_clock(&mut events);

        for event in events {
            debug!(?event, "match event");
            // A send error only means nobody is subscribed.
            let _ = self.events.send(event);
        }

        Ok(&self.state)
    }

    /// Loops [`play_round`](Self::play_round) until the final whistle and
    /// returns the full-time score.
    pub async fn run_to_completion(&mut self) -> Result<Score> {
        while !self.game_over {
            self.play_round().await?;
        }
        Ok(self.state.score)
    }

    /// Turn/half bookkeeping on the freshly resolved snapshot. The Away
    /// side takes the second-half kickoff.
    fn advance_clock(&mut self, events: &mut Vec<MatchEvent>) {
        self.state.turn += 1;
        if self.state.turn <= self.config.max_turns_per_half {
            return;
        }

        if self.state.half == 1 {
            self.state.half = 2;
            self.state.turn = 1;
            self.state.active_team = TeamId::Away;
            self.state.ball_position = reposition_for_kickoff(
                &mut self.state.actors,
                TeamId::Away,
                &self.state.bounds,
            );
            self.state.commands.clear();
            info!(score = ?self.state.score, "half time");
            events.push(MatchEvent::HalfStarted { half: 2 });
        } else {
            self.game_over = true;
            info!(score = ?self.state.score, "full time");
            events.push(MatchEvent::MatchEnded {
                score: self.state.score,
            });
        }
    }
}
