use crate::cards::Card;
use crate::config::GameConfig;
use crate::engine::PokerEngine;
use crate::evaluator::{Category, Score};
use crate::session::{SessionId, SessionRegistry};
use std::time::{Duration, Instant};

/// Where the player is in the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    /// No hand dealt yet.
    Idle,
    /// Five cards showing; the player marks discards.
    Dealt,
    /// Round finished; the result is showing.
    Scored,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    Deal,
    ToggleMark(usize),
    Draw,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub phase: Phase,
    engine: SessionRegistry,
    session: SessionId,
    // Cards on screen: the live hand while dealt, the final cards once scored
    cards: Option<[Card; 5]>,
    marks: [bool; 5],
    last_score: Option<Score>,
    history: Vec<Score>,
    // Rounds played per category; high card hands share one entry
    tally: Vec<(Category, u32)>,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    pub fn new(config: GameConfig) -> Self {
        let mut engine = SessionRegistry::new(config);
        let session = engine.open();
        Self {
            phase: Phase::Idle,
            engine,
            session,
            cards: None,
            marks: [false; 5],
            last_score: None,
            history: Vec::new(),
            tally: Vec::new(),
            help_open: false,
            history_open: false,
            history_offset: 0,
            action_error: None,
            action_error_at: None,
        }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn cards(&self) -> Option<&[Card; 5]> {
        self.cards.as_ref()
    }

    pub fn marks(&self) -> &[bool; 5] {
        &self.marks
    }

    pub fn marked_positions(&self) -> Vec<usize> {
        (0..self.marks.len()).filter(|&i| self.marks[i]).collect()
    }

    pub fn last_score(&self) -> Option<&Score> {
        self.last_score.as_ref()
    }

    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    pub fn cards_left(&self) -> usize {
        self.engine.cards_left(self.session).unwrap_or(0)
    }

    /// Non-zero tallies as (label, count), strongest category first.
    pub fn tally(&self) -> Vec<(&'static str, u32)> {
        let mut rows = self.tally.clone();
        rows.sort_by_key(|(category, _)| std::cmp::Reverse(category.ordinal()));
        rows.into_iter().map(|(category, n)| (category.name(), n)).collect()
    }

    fn record(&mut self, category: Category) {
        match self
            .tally
            .iter_mut()
            .find(|(seen, _)| seen.ordinal() == category.ordinal())
        {
            Some((_, n)) => *n += 1,
            None => self.tally.push((category, 1)),
        }
    }

    /// Most recent rounds first, skipping `offset` entries.
    pub fn history_recent_offset(&self, limit: usize, offset: usize) -> Vec<&Score> {
        self.history.iter().rev().skip(offset).take(limit).collect()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn set_action_error(&mut self, msg: String) {
        log::debug!("rejected input: {msg}");
        self.action_error = Some(msg);
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                self.history_open = false;
                self.help_open = !self.help_open;
                false
            }
            InputAction::ToggleHistory => {
                self.help_open = false;
                if !self.history_open {
                    self.history_offset = 0;
                }
                self.history_open = !self.history_open;
                false
            }
            InputAction::HistoryUp => {
                if self.history_open {
                    let max_offset = self.history.len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::Deal => self.deal(),
            InputAction::ToggleMark(idx) => self.toggle_mark(idx),
            InputAction::Draw => self.draw(),
        }
    }

    pub fn deal(&mut self) -> bool {
        if self.phase == Phase::Dealt {
            return false;
        }
        match self.engine.deal(self.session) {
            Ok(cards) => {
                self.cards = Some(cards);
                self.marks = [false; 5];
                self.phase = Phase::Dealt;
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.set_action_error(err.to_string());
                false
            }
        }
    }

    pub fn toggle_mark(&mut self, idx: usize) -> bool {
        if self.phase != Phase::Dealt || idx >= self.marks.len() {
            return false;
        }
        self.marks[idx] = !self.marks[idx];
        true
    }

    /// Redraw the marked cards and score the hand.
    ///
    /// Marking all five is allowed on screen; the engine rejects it and the
    /// hand stays dealt so the player can unmark.
    pub fn draw(&mut self) -> bool {
        if self.phase != Phase::Dealt {
            return false;
        }
        let positions = self.marked_positions();
        match self.engine.score(self.session, &positions) {
            Ok(score) => {
                self.cards = Some(score.cards);
                self.marks = [false; 5];
                self.record(score.category);
                self.history.push(score);
                self.last_score = Some(score);
                self.phase = Phase::Scored;
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.set_action_error(err.to_string());
                false
            }
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        AppState::new(GameConfig::default().with_seed(21))
    }

    #[test]
    fn marks_ignored_before_deal() {
        let mut app = app();
        assert!(!app.handle_input(InputAction::ToggleMark(0)));
        assert!(!app.handle_input(InputAction::Draw));
        assert_eq!(app.phase, Phase::Idle);
    }

    #[test]
    fn five_marks_surface_invalid_index_and_keep_hand() {
        let mut app = app();
        assert!(app.handle_input(InputAction::Deal));
        let dealt = *app.cards().unwrap();
        for i in 0..5 {
            app.handle_input(InputAction::ToggleMark(i));
        }
        assert!(!app.handle_input(InputAction::Draw));
        assert_eq!(app.phase, Phase::Dealt);
        assert!(app.action_error().unwrap().contains("invalid index"));
        assert_eq!(app.cards(), Some(&dealt));
        assert_eq!(app.cards_left(), 47);
    }

    #[test]
    fn draw_scores_and_tallies() {
        let mut app = app();
        app.handle_input(InputAction::Deal);
        app.handle_input(InputAction::ToggleMark(2));
        assert!(app.handle_input(InputAction::Draw));
        assert_eq!(app.phase, Phase::Scored);
        assert_eq!(app.rounds_played(), 1);
        let total: u32 = app.tally().iter().map(|(_, n)| n).sum();
        assert_eq!(total, 1);
        assert!(app.last_score().is_some());
        assert!(app.marked_positions().is_empty());
    }

    #[test]
    fn tally_merges_high_cards_and_orders_by_strength() {
        let mut app = app();
        let q = Card::from_values(12, 2).unwrap();
        let j = Card::from_values(11, 0).unwrap();
        app.record(Category::OnePair);
        app.record(Category::HighCard(q));
        app.record(Category::FullHouse);
        app.record(Category::HighCard(j));
        app.record(Category::OnePair);
        assert_eq!(
            app.tally(),
            vec![("Full House", 1), ("One Pair", 2), ("High Card", 2)]
        );
    }
}
