//! Session bookkeeping around the core deck and hand types.
//!
//! A registry maps opaque ids to one deck and at most one outstanding hand
//! each. Sessions never share a deck; callers serialize access per session.

use crate::cards::Card;
use crate::config::GameConfig;
use crate::deck::Deck;
use crate::evaluator::Score;
use crate::hand::{Hand, HandError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::{Instant, SystemTime};

/// Opaque session identifier, rendered as 32 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u128);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.len() != 32 || !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SessionError::MalformedId(s.to_string()));
        }
        u128::from_str_radix(t, 16)
            .map(SessionId)
            .map_err(|_| SessionError::MalformedId(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("unknown session {0}")]
    UnknownSession(SessionId),
    #[error("session {0} has no hand dealt")]
    NoHand(SessionId),
    #[error("malformed session id '{0}'")]
    MalformedId(String),
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// One player's game state.
#[derive(Debug)]
pub struct Session {
    deck: Deck,
    hand: Option<Hand>,
    created: SystemTime,
    touched: Instant,
}

impl Session {
    fn new(deck: Deck) -> Self {
        Self { deck, hand: None, created: SystemTime::now(), touched: Instant::now() }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    /// Wall-clock creation time.
    pub fn created(&self) -> SystemTime {
        self.created
    }

    /// Last time a call was routed to this session.
    pub fn touched(&self) -> Instant {
        self.touched
    }
}

/// Routes draw/discard/score calls to per-session decks and hands.
///
/// ```
/// use draw_poker::config::GameConfig;
/// use draw_poker::session::SessionRegistry;
///
/// let mut reg = SessionRegistry::new(GameConfig::default().with_seed(1));
/// let id = reg.new_session();
/// reg.deal(id).unwrap();
/// let score = reg.score(id, &[1, 2]).unwrap();
/// assert_eq!(score.cards.len(), 5);
/// ```
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, Session>,
    config: GameConfig,
    rng: ChaCha8Rng,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl SessionRegistry {
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self { sessions: HashMap::new(), config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    pub fn get(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    /// Open a session with a freshly shuffled deck and no hand.
    pub fn new_session(&mut self) -> SessionId {
        let id = loop {
            let candidate = SessionId(self.rng.random());
            if !self.sessions.contains_key(&candidate) {
                break candidate;
            }
        };
        let deck = Deck::from_rng(&mut self.rng);
        self.sessions.insert(id, Session::new(deck));
        log::info!("opened session {id}");
        id
    }

    /// Drop a session and its deck.
    pub fn end_session(&mut self, id: SessionId) -> Result<(), SessionError> {
        self.sessions.remove(&id).ok_or(SessionError::UnknownSession(id))?;
        log::info!("closed session {id}");
        Ok(())
    }

    /// Remove sessions idle for at least the configured TTL. Returns how many were dropped.
    pub fn expire(&mut self) -> usize {
        let ttl = self.config.session_ttl;
        let before = self.sessions.len();
        self.sessions.retain(|id, s| {
            let keep = s.touched.elapsed() < ttl;
            if !keep {
                log::debug!("expiring idle session {id}");
            }
            keep
        });
        before - self.sessions.len()
    }

    fn session_mut(&mut self, id: SessionId) -> Result<&mut Session, SessionError> {
        let session = self.sessions.get_mut(&id).ok_or(SessionError::UnknownSession(id))?;
        session.touched = Instant::now();
        Ok(session)
    }

    /// The session's outstanding hand, dealing a new one from its deck if none is out.
    pub fn deal(&mut self, id: SessionId) -> Result<[Card; 5], SessionError> {
        let Session { deck, hand, .. } = self.session_mut(id)?;
        if let Some(h) = hand.as_ref() {
            return Ok(*h.cards());
        }
        let dealt = Hand::deal(deck)?;
        let cards = *dealt.cards();
        *hand = Some(dealt);
        Ok(cards)
    }

    /// Run the discard/redraw round on the outstanding hand.
    pub fn discard(&mut self, id: SessionId, indices: &[usize]) -> Result<[Card; 5], SessionError> {
        let Session { deck, hand, .. } = self.session_mut(id)?;
        let h = hand.as_mut().ok_or(SessionError::NoHand(id))?;
        h.discard(indices, deck)?;
        Ok(*h.cards())
    }

    /// Score the outstanding hand as it stands and release its cards.
    pub fn evaluate(&mut self, id: SessionId) -> Result<Score, SessionError> {
        let Session { deck, hand, .. } = self.session_mut(id)?;
        let h = hand.take().ok_or(SessionError::NoHand(id))?;
        Ok(h.score(deck))
    }

    /// Discard `indices`, then score. A rejected discard leaves the hand outstanding.
    pub fn score(&mut self, id: SessionId, indices: &[usize]) -> Result<Score, SessionError> {
        self.discard(id, indices)?;
        self.evaluate(id)
    }
}
