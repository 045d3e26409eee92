//! The game session state machine.
//!
//! `GameSession` owns the teams, settings, deck, round state and countdown,
//! and exposes the operations the presentation layer calls. Every
//! operation is synchronous and total: it either applies completely or
//! returns an error without touching state.
//!
//! Ticks arrive through [`GameSession::tick`] tagged with the countdown
//! epoch they were scheduled under; stale ticks are ignored. Wiring ticks
//! to a real clock is the job of [`SharedSession`](super::SharedSession).

use std::sync::Arc;

use im::Vector;
use tracing::{debug, info, warn};

use super::feedback::{Feedback, Signal, Silent};
use super::record::{RoundEnding, RoundRecord, SessionSnapshot};
use crate::cards::{Card, CardSource, CategoryCatalog, Deck, StaticSource};
use crate::core::{GameRng, Phase, RoundState, SessionError, Settings, Team, TeamId, Teams};
use crate::rules::{self, GameResult};
use crate::timer::{Countdown, Tick};

/// Result of `mark_correct`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorrectOutcome {
    /// Score counted, next card drawn.
    Continue,
    /// The guess reached the target score and ended the game.
    Won(GameResult),
}

/// Result of `mark_pass`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassOutcome {
    Passed,
    /// The round's pass budget is spent; nothing changed.
    LimitReached,
}

/// Result of a round ending, by timer or by `end_round`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// No winner yet; carries the team that plays next.
    NextTeam(TeamId),
    GameOver(GameResult),
}

/// Result of delivering a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale epoch, or no round is counting down.
    Ignored,
    /// One second elapsed; carries the time remaining.
    Elapsed(u32),
    /// Time ran out and the round was closed.
    RoundEnded(RoundOutcome),
}

/// Top-level game state for one device.
pub struct GameSession {
    teams: Teams,
    settings: Settings,
    deck: Deck,
    rng: GameRng,
    active: TeamId,
    phase: Phase,
    round: RoundState,
    countdown: Countdown,
    round_number: u32,
    history: Vector<RoundRecord>,
    catalog: CategoryCatalog,
    category: Option<String>,
    source: Arc<dyn CardSource>,
    feedback: Arc<dyn Feedback>,
}

/// Builder for creating a `GameSession`.
///
/// ## Example
///
/// ```
/// use word_guess::cards::Card;
/// use word_guess::core::{Phase, Settings};
/// use word_guess::session::GameSession;
///
/// let mut session = GameSession::builder()
///     .settings(Settings::default().with_target_score(10))
///     .cards(vec![Card::new("1", "Ay", ["Gece", "Yıldız"])])
///     .seed(42)
///     .build()
///     .unwrap();
///
/// session.start_game().unwrap();
/// session.start_round().unwrap();
/// assert_eq!(session.phase(), Phase::Playing);
/// assert_eq!(session.current_card().unwrap().word, "Ay");
/// ```
pub struct GameSessionBuilder {
    settings: Settings,
    teams: Teams,
    seed: Option<u64>,
    cards: Option<Vec<Card>>,
    source: Option<Arc<dyn CardSource>>,
    feedback: Arc<dyn Feedback>,
    catalog: CategoryCatalog,
}

impl Default for GameSessionBuilder {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            teams: Teams::default(),
            seed: None,
            cards: None,
            source: None,
            feedback: Arc::new(Silent),
            catalog: CategoryCatalog::default(),
        }
    }
}

impl GameSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn teams(mut self, teams: Teams) -> Self {
        self.teams = teams;
        self
    }

    /// Seed the shuffling RNG. Unseeded sessions draw a seed from the OS.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start with this card set instead of loading the default category.
    pub fn cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = Some(cards);
        self
    }

    pub fn source(mut self, source: Arc<dyn CardSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn feedback(mut self, feedback: Arc<dyn Feedback>) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn catalog(mut self, catalog: CategoryCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Build an idle session.
    ///
    /// Without explicit cards, the catalog's first playable category is
    /// loaded from the source. A source is optional; without one (and
    /// without cards) the deck starts empty.
    pub fn build(self) -> Result<GameSession, SessionError> {
        self.settings.validate()?;

        let mut rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut deck = Deck::new();
        let mut category = None;

        let source_given = self.source.is_some();
        let source: Arc<dyn CardSource> = match self.source {
            Some(source) => source,
            None => Arc::new(StaticSource::new()),
        };

        if let Some(cards) = self.cards {
            deck.load(cards, &mut rng);
        } else if let Some(default) = self.catalog.default_category() {
            match source.load(&default.dataset) {
                Ok(cards) => {
                    deck.load(cards, &mut rng);
                    category = Some(default.title.clone());
                }
                // Only fatal when the caller asked for a real source
                Err(e) if source_given => return Err(e.into()),
                Err(_) => {}
            }
        }

        info!(seed = rng.seed(), cards = deck.total(), ?category, "session created");

        Ok(GameSession {
            teams: self.teams,
            settings: self.settings,
            deck,
            rng,
            active: TeamId::default(),
            phase: Phase::Idle,
            round: RoundState::default(),
            countdown: Countdown::new(),
            round_number: 0,
            history: Vector::new(),
            catalog: self.catalog,
            category,
            source,
            feedback: self.feedback,
        })
    }
}

impl GameSession {
    /// Start building a session.
    pub fn builder() -> GameSessionBuilder {
        GameSessionBuilder::new()
    }

    // === Game Flow ===

    /// Zero both scores, give the first team the turn, show the scoreboard.
    pub fn start_game(&mut self) -> Result<(), SessionError> {
        self.require("start_game", &[Phase::Idle])?;

        self.teams.reset_scores();
        self.active = TeamId::default();
        self.round = RoundState::default();
        self.round_number = 0;
        self.history.clear();
        self.set_phase(Phase::BetweenRounds);
        Ok(())
    }

    /// Reset round counters, draw the first card and start the countdown.
    ///
    /// With a completely empty deck the round still starts, without a card.
    pub fn start_round(&mut self) -> Result<(), SessionError> {
        self.require("start_round", &[Phase::BetweenRounds])?;

        self.round = RoundState::new(self.settings.round_time_seconds);
        self.round_number += 1;
        self.next_card();
        self.countdown.start(self.settings.round_time_seconds);
        self.round.time_remaining = self.countdown.remaining();

        info!(
            round = self.round_number,
            team = %self.active,
            seconds = self.settings.round_time_seconds,
            "round started"
        );
        self.set_phase(Phase::Playing);
        Ok(())
    }

    /// Suspend the countdown.
    pub fn pause_game(&mut self) -> Result<(), SessionError> {
        self.require("pause_game", &[Phase::Playing])?;
        self.countdown.pause();
        self.set_phase(Phase::Paused);
        Ok(())
    }

    /// Continue the countdown with the time that was left.
    pub fn resume_game(&mut self) -> Result<(), SessionError> {
        self.require("resume_game", &[Phase::Paused])?;
        self.countdown.resume();
        self.set_phase(Phase::Playing);
        Ok(())
    }

    /// Close the round early, as if time had run out.
    pub fn end_round(&mut self) -> Result<RoundOutcome, SessionError> {
        self.require("end_round", &[Phase::Playing])?;
        Ok(self.finish_round(RoundEnding::Ended))
    }

    /// Abandon the game from any phase and return to idle.
    pub fn quit_game(&mut self) {
        info!(phase = %self.phase, "game quit");
        self.reset_game();
    }

    /// Cancel the countdown, zero scores, reshuffle the deck, go idle.
    pub fn reset_game(&mut self) {
        self.countdown.cancel();
        self.teams.reset_scores();
        self.active = TeamId::default();
        self.round = RoundState::default();
        self.round_number = 0;
        self.history.clear();
        self.deck.reset(&mut self.rng);
        self.set_phase(Phase::Idle);
    }

    // === Card Judgments ===

    /// Count a correct guess.
    ///
    /// If the active team's score plus this round's score reaches the
    /// target, the score is committed and the game ends immediately, even
    /// with time left.
    pub fn mark_correct(&mut self) -> Result<CorrectOutcome, SessionError> {
        self.require("mark_correct", &[Phase::Playing])?;

        self.round.round_score += 1;
        self.discard_current();
        self.feedback.emit(Signal::Correct);

        let team = &self.teams[self.active];
        let provisional = Team::provisional(team.score, self.round.round_score);
        if rules::reaches_target(provisional, &self.settings) {
            self.teams[self.active].score = provisional;
            self.countdown.cancel();
            self.push_record(RoundEnding::InstantWin);
            info!(team = %self.active, score = provisional, "instant win");
            let result = self.game_result();
            return Ok(CorrectOutcome::Won(self.finish_game(result)));
        }

        self.next_card();
        Ok(CorrectOutcome::Continue)
    }

    /// Penalize a taboo word. The round score has no floor.
    pub fn mark_taboo(&mut self) -> Result<(), SessionError> {
        self.require("mark_taboo", &[Phase::Playing])?;

        self.round.round_score -= 1;
        self.discard_current();
        self.feedback.emit(Signal::Wrong);
        self.next_card();
        Ok(())
    }

    /// Skip the current card, within the round's pass budget.
    pub fn mark_pass(&mut self) -> Result<PassOutcome, SessionError> {
        self.require("mark_pass", &[Phase::Playing])?;

        if self.is_pass_limit_reached() {
            debug!(passes = self.round.passes_used, "pass rejected, limit reached");
            self.feedback.emit(Signal::PassRejected);
            return Ok(PassOutcome::LimitReached);
        }

        self.round.passes_used += 1;
        self.discard_current();
        self.feedback.emit(Signal::Pass);
        self.next_card();
        Ok(PassOutcome::Passed)
    }

    // === Timer ===

    /// Deliver one countdown tick scheduled under `epoch`.
    pub fn tick(&mut self, epoch: u64) -> TickOutcome {
        if self.phase != Phase::Playing {
            return TickOutcome::Ignored;
        }

        match self.countdown.tick(epoch) {
            Tick::Elapsed(remaining) => {
                self.round.time_remaining = remaining;
                TickOutcome::Elapsed(remaining)
            }
            Tick::Expired => {
                debug!(round = self.round_number, "round time expired");
                TickOutcome::RoundEnded(self.finish_round(RoundEnding::TimeUp))
            }
            Tick::Ignored => TickOutcome::Ignored,
        }
    }

    /// Epoch that ticks must carry to be accepted.
    #[must_use]
    pub fn timer_epoch(&self) -> u64 {
        self.countdown.epoch()
    }

    /// Whether the countdown wants ticks right now.
    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.phase == Phase::Playing && self.countdown.is_running()
    }

    // === Configuration ===

    /// Replace the settings. Only allowed while idle.
    pub fn update_settings(&mut self, settings: Settings) -> Result<(), SessionError> {
        if self.phase != Phase::Idle {
            warn!(phase = %self.phase, "settings change rejected");
            return Err(SessionError::SettingsLocked(self.phase));
        }
        settings.validate()?;
        debug!(?settings, "settings updated");
        self.settings = settings;
        Ok(())
    }

    /// Load a category's dataset into the deck. Only allowed while idle.
    ///
    /// Returns the number of cards loaded. On failure the previous deck
    /// stays in place.
    pub fn select_category(&mut self, title: &str) -> Result<usize, SessionError> {
        self.require("select_category", &[Phase::Idle])?;

        let category = self
            .catalog
            .get(title)
            .ok_or_else(|| SessionError::UnknownCategory(title.to_string()))?;
        if !category.is_playable() {
            warn!(title, status = ?category.status, "category not available");
            return Err(SessionError::CategoryUnavailable(title.to_string()));
        }

        let dataset = category.dataset.clone();
        let cards = self.source.load(&dataset)?;
        let count = cards.len();
        self.deck.load(cards, &mut self.rng);
        self.category = Some(title.to_string());

        info!(title, dataset, cards = count, "category selected");
        Ok(count)
    }

    /// Rename a team. Only allowed while idle.
    pub fn rename_team(&mut self, team: TeamId, name: impl Into<String>) -> Result<(), SessionError> {
        self.require("rename_team", &[Phase::Idle])?;
        self.teams[team].name = name.into();
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn teams(&self) -> &Teams {
        &self.teams
    }

    #[must_use]
    pub fn active_team_id(&self) -> TeamId {
        self.active
    }

    #[must_use]
    pub fn active_team(&self) -> &Team {
        &self.teams[self.active]
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.round.current_card.as_ref()
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.round.time_remaining
    }

    /// Whether another pass would be rejected this round.
    #[must_use]
    pub fn is_pass_limit_reached(&self) -> bool {
        self.settings.pass_limit_reached(self.round.passes_used)
    }

    /// Passes left this round, `None` when unlimited.
    #[must_use]
    pub fn remaining_passes(&self) -> Option<u32> {
        self.settings.remaining_passes(self.round.passes_used)
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    #[must_use]
    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Title of the loaded category, if one was selected.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// The result once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        (self.phase == Phase::GameOver).then(|| self.game_result())
    }

    /// Copy of everything the presentation layer renders.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            teams: self.teams.clone(),
            active_team: self.active,
            round: self.round.clone(),
            settings: self.settings.clone(),
            category: self.category.clone(),
            pass_limit_reached: self.is_pass_limit_reached(),
            remaining_passes: self.remaining_passes(),
            history: self.history.clone(),
        }
    }

    // === Internals ===

    fn require(&self, op: &'static str, allowed: &[Phase]) -> Result<(), SessionError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            warn!(op, phase = %self.phase, "operation rejected");
            Err(SessionError::InvalidPhase { op, phase: self.phase })
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!(from = %self.phase, to = %phase, "phase change");
        }
        self.phase = phase;
    }

    fn next_card(&mut self) {
        self.round.current_card = self.deck.draw(&mut self.rng);
        if self.round.current_card.is_none() {
            warn!("deck is empty, no card in play");
        }
    }

    fn discard_current(&mut self) {
        if let Some(card) = self.round.current_card.take() {
            self.deck.discard(card);
        }
    }

    /// Fold the round into the active team and decide what comes next.
    fn finish_round(&mut self, ending: RoundEnding) -> RoundOutcome {
        self.countdown.cancel();
        // An unjudged card goes back into circulation
        self.discard_current();
        let round_score = self.round.round_score;
        self.teams[self.active].commit(round_score);
        self.push_record(ending);

        info!(
            round = self.round_number,
            team = %self.active,
            round_score,
            total = self.teams[self.active].score,
            ?ending,
            "round finished"
        );

        if let Some(result) = rules::evaluate(&self.teams, &self.settings) {
            return RoundOutcome::GameOver(self.finish_game(result));
        }

        self.feedback.emit(Signal::RoundTimeUp);
        self.active = self.active.next();
        self.set_phase(Phase::BetweenRounds);
        RoundOutcome::NextTeam(self.active)
    }

    fn finish_game(&mut self, result: GameResult) -> GameResult {
        self.set_phase(Phase::GameOver);
        info!(winner = %result.winner, scores = ?result.final_scores, "game over");
        result
    }

    fn game_result(&self) -> GameResult {
        GameResult {
            winner: rules::leader(&self.teams),
            final_scores: self.teams.scores(),
        }
    }

    fn push_record(&mut self, ending: RoundEnding) {
        self.history.push_back(RoundRecord {
            round_number: self.round_number,
            team: self.active,
            round_score: self.round.round_score,
            passes_used: self.round.passes_used,
            team_score: self.teams[self.active].score,
            ending,
        });
    }
}
