//! The bingo session: one player, one card at a time.
//!
//! `BingoSession` owns everything that changes during play: the current
//! screen, the player identifier, the card, the marked set, and the RNG.
//! Shells hold it by value and call into it by `&mut` in response to user
//! actions. Every operation is synchronous.
//!
//! ## Win announcements
//!
//! The board is evaluated after every toggle. Any toggle that leaves a
//! complete line queues a `Bingo` event, so a card that stays won
//! announces again on each further tap.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::screen::Screen;
use crate::cards::{Card, CardGenerator};
use crate::core::{BingoError, Dimension, GameRng, PlayerUid, Result, SessionConfig};
use crate::events::{Announcement, SessionEvent};
use crate::rules::{first_winning_line, Mark, MarkedSet, WinLine};

/// Result of tapping a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// The tapped number.
    pub number: u8,
    /// Its state after the tap.
    pub mark: Mark,
    /// The completed line, if the board is now won.
    pub bingo: Option<WinLine>,
}

/// Render state of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CellState {
    /// Number shown on the cell.
    pub number: u8,
    /// Whether the cell is marked.
    pub marked: bool,
}

/// A single-player bingo session.
#[derive(Clone, Debug)]
pub struct BingoSession {
    config: SessionConfig,
    generator: CardGenerator,
    card_rng: GameRng,
    uid_rng: GameRng,
    seed: u64,
    player_uid: PlayerUid,
    screen: Screen,
    card: Option<Card>,
    marks: MarkedSet,
    events: Vec<SessionEvent>,
}

impl BingoSession {
    /// Create a session on the setup screen.
    ///
    /// The same seed reproduces the same player ID and cards.
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        let root = GameRng::new(seed);
        let card_rng = root.for_context("cards");
        let mut uid_rng = root.for_context("player-uid");
        let player_uid = PlayerUid::generate(&mut uid_rng);

        Self {
            generator: CardGenerator::new(config.card.clone()),
            config,
            card_rng,
            uid_rng,
            seed,
            player_uid,
            screen: Screen::Setup,
            card: None,
            marks: MarkedSet::new(),
            events: Vec::new(),
        }
    }

    /// Create a session with a random seed.
    pub fn from_entropy(config: SessionConfig) -> Self {
        Self::new(config, GameRng::from_entropy().seed())
    }

    // === Queries ===

    /// Seed the session was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current screen.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Display identifier for the player.
    #[must_use]
    pub fn player_uid(&self) -> &PlayerUid {
        &self.player_uid
    }

    /// Current card, if one has been generated.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    /// Size of the current card.
    #[must_use]
    pub fn dimension(&self) -> Option<Dimension> {
        self.card.as_ref().map(Card::dimension)
    }

    /// Currently marked numbers.
    #[must_use]
    pub fn marks(&self) -> &MarkedSet {
        &self.marks
    }

    /// Is `number` marked?
    #[must_use]
    pub fn is_marked(&self, number: u8) -> bool {
        self.marks.is_marked(number)
    }

    /// Every cell of the current card with its marked state, row-major.
    ///
    /// Empty when no card is shown.
    #[must_use]
    pub fn cell_states(&self) -> Vec<CellState> {
        self.card
            .iter()
            .flat_map(|card| card.numbers())
            .map(|&number| CellState {
                number,
                marked: self.marks.is_marked(number),
            })
            .collect()
    }

    /// First complete line on the current card, if any.
    #[must_use]
    pub fn check_bingo(&self) -> Option<WinLine> {
        self.card
            .as_ref()
            .and_then(|card| first_winning_line(card, &self.marks))
    }

    // === Operations ===

    /// Parse a typed dimension and start a card with it.
    ///
    /// Invalid input leaves the session untouched.
    pub fn submit_dimension(&mut self, input: &str) -> Result<&Card> {
        let dimension = input.parse::<Dimension>().map_err(|err| {
            warn!(input, "rejected dimension input");
            err
        })?;
        self.start(dimension)
    }

    /// Generate a card of the given size and switch to the playing screen.
    ///
    /// Any previous card and all marks are discarded.
    #[instrument(skip(self))]
    pub fn start(&mut self, dimension: Dimension) -> Result<&Card> {
        self.replace_card(dimension, false)
    }

    /// Replace the card with a fresh one of the same size.
    pub fn regenerate(&mut self) -> Result<&Card> {
        let dimension = self.dimension().ok_or(BingoError::NoCard)?;
        self.replace_card(dimension, true)
    }

    /// Tap the cell showing `number`, then evaluate the board.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, number: u8) -> Result<ToggleOutcome> {
        let card = self.card.as_ref().ok_or(BingoError::NoCard)?;
        if !card.contains(number) {
            warn!(number, "tapped number not on card");
            return Err(BingoError::NotOnCard { number });
        }

        let mark = self.marks.toggle(number);
        debug!(?mark, marked = self.marks.len(), "toggled cell");
        self.events.push(SessionEvent::CellToggled { number, mark });

        let bingo = first_winning_line(card, &self.marks);
        if let Some(line) = bingo {
            info!(%line, "bingo");
            self.events.push(SessionEvent::Bingo(Announcement::new(
                line,
                &self.config.announcement,
            )));
        }

        Ok(ToggleOutcome { number, mark, bingo })
    }

    /// Leave the card and return to dimension entry.
    ///
    /// The setup screen shows a newly generated player ID. Returns `false`
    /// when already on the setup screen, meaning the shell should exit.
    pub fn back(&mut self) -> bool {
        if self.screen == Screen::Setup {
            return false;
        }

        self.screen = Screen::Setup;
        self.card = None;
        self.marks.clear();
        self.player_uid = PlayerUid::generate(&mut self.uid_rng);
        debug!(uid = self.player_uid.as_str(), "returned to setup");
        self.events.push(SessionEvent::ReturnedToSetup);
        true
    }

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn replace_card(&mut self, dimension: Dimension, regenerated: bool) -> Result<&Card> {
        let card = self.generator.generate(dimension, &mut self.card_rng)?;

        self.marks.clear();
        self.screen = Screen::Playing;
        self.events.push(SessionEvent::CardGenerated {
            dimension: card.dimension(),
            regenerated,
        });
        debug!(dimension = %card.dimension(), regenerated, "new card");

        let card: &Card = self.card.insert(card);
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardConfig;

    fn session() -> BingoSession {
        BingoSession::new(SessionConfig::default(), 42)
    }

    #[test]
    fn test_new_session_on_setup() {
        let session = session();
        assert_eq!(session.screen(), Screen::Setup);
        assert!(session.card().is_none());
        assert!(session.cell_states().is_empty());
        assert!(session.check_bingo().is_none());
        assert_eq!(session.seed(), 42);
    }

    #[test]
    fn test_submit_dimension() {
        let mut session = session();
        let card = session.submit_dimension("4").unwrap();
        assert_eq!(card.len(), 16);
        assert_eq!(session.screen(), Screen::Playing);
        assert_eq!(session.dimension(), Dimension::new(4).ok());
    }

    #[test]
    fn test_invalid_input_changes_nothing() {
        let mut session = session();
        for input in ["", "zero", "0", "-3"] {
            assert!(matches!(
                session.submit_dimension(input),
                Err(BingoError::InvalidDimension { .. })
            ));
        }
        assert_eq!(session.screen(), Screen::Setup);
        assert!(session.card().is_none());
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_oversize_rejected_keeps_previous_card() {
        let mut session = session();
        session.submit_dimension("3").unwrap();
        let before = session.card().cloned();

        let err = session.submit_dimension("11").unwrap_err();
        assert!(matches!(err, BingoError::DimensionTooLarge { .. }));
        assert_eq!(session.card().cloned(), before);
    }

    #[test]
    fn test_huge_dimension_rejected_without_overflow() {
        let mut session = session();
        let err = session.submit_dimension("4294967296").unwrap_err();
        assert_eq!(
            err,
            BingoError::DimensionTooLarge {
                dimension: 4_294_967_296,
                cells: usize::MAX,
                pool: 100,
            }
        );
        assert_eq!(session.screen(), Screen::Setup);
        assert!(session.card().is_none());
    }

    #[test]
    fn test_huge_dimension_clamped_to_full_card() {
        let config = SessionConfig::new().with_card(CardConfig::default().clamping());
        let mut session = BingoSession::new(config, 1);
        let card = session.submit_dimension("4294967296").unwrap();
        assert_eq!(card.dimension().get(), 10);
        assert_eq!(card.len(), 100);
        assert_eq!(session.screen(), Screen::Playing);
    }

    #[test]
    fn test_oversize_clamped() {
        let config = SessionConfig::new().with_card(CardConfig::default().clamping());
        let mut session = BingoSession::new(config, 1);
        let card = session.submit_dimension("12").unwrap();
        assert_eq!(card.dimension().get(), 10);
    }

    #[test]
    fn test_toggle_requires_card() {
        let mut session = session();
        assert_eq!(session.toggle(5), Err(BingoError::NoCard));
        assert_eq!(session.regenerate().unwrap_err(), BingoError::NoCard);
    }

    #[test]
    fn test_toggle_rejects_number_not_on_card() {
        let mut session = session();
        let card = session.submit_dimension("2").unwrap().clone();
        let missing = (1..=100).find(|n| !card.contains(*n)).unwrap();

        assert_eq!(session.toggle(missing), Err(BingoError::NotOnCard { number: missing }));
        assert!(session.marks().is_empty());
    }

    #[test]
    fn test_toggle_flips_and_reports() {
        let mut session = session();
        let number = session.submit_dimension("3").unwrap().numbers()[4];

        let outcome = session.toggle(number).unwrap();
        assert_eq!(outcome.mark, Mark::Marked);
        assert!(session.is_marked(number));

        let outcome = session.toggle(number).unwrap();
        assert_eq!(outcome.mark, Mark::Unmarked);
        assert!(!session.is_marked(number));
    }

    #[test]
    fn test_cell_states_follow_marks() {
        let mut session = session();
        let numbers = session.submit_dimension("2").unwrap().numbers().to_vec();
        session.toggle(numbers[1]).unwrap();

        let states = session.cell_states();
        assert_eq!(states.len(), 4);
        assert_eq!(states[1], CellState { number: numbers[1], marked: true });
        assert!(!states[0].marked);
    }

    #[test]
    fn test_back_resets_and_reissues_uid() {
        let mut session = session();
        let first_uid = session.player_uid().clone();
        session.submit_dimension("3").unwrap();

        assert!(session.back());
        assert_eq!(session.screen(), Screen::Setup);
        assert!(session.card().is_none());
        assert!(session.marks().is_empty());
        assert_ne!(session.player_uid(), &first_uid);

        assert!(!session.back());
    }

    #[test]
    fn test_events_queue_in_order() {
        let mut session = session();
        let number = session.submit_dimension("2").unwrap().numbers()[0];
        session.toggle(number).unwrap();
        session.regenerate().unwrap();

        let dim = Dimension::new(2).unwrap();
        assert_eq!(
            session.drain_events(),
            vec![
                SessionEvent::CardGenerated { dimension: dim, regenerated: false },
                SessionEvent::CellToggled { number, mark: Mark::Marked },
                SessionEvent::CardGenerated { dimension: dim, regenerated: true },
            ]
        );
        assert!(session.drain_events().is_empty());
    }
}
