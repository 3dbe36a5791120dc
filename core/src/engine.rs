use alloc::vec;
use alloc::vec::Vec;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// State of one round: the loaded words, where each team hid its poison, and
/// which cells have been marked so far.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoundRecord")]
pub struct PoisonGame {
    words: Option<WordList>,
    cells: Vec<CellState>,
    phase: GamePhase,
    status: Status,
    team1_poison: Option<CellIndex>,
    team2_poison: Option<CellIndex>,
    total_unique_poisons: Option<PoisonCount>,
    found_poisons: PoisonCount,
    pending: Option<PendingTransition>,
}

/// Serialized shape of [`PoisonGame`], checked before it becomes a live round.
#[derive(Deserialize)]
struct RoundRecord {
    words: Option<WordList>,
    cells: Vec<CellState>,
    phase: GamePhase,
    status: Status,
    team1_poison: Option<CellIndex>,
    team2_poison: Option<CellIndex>,
    total_unique_poisons: Option<PoisonCount>,
    found_poisons: PoisonCount,
    pending: Option<PendingTransition>,
}

impl TryFrom<RoundRecord> for PoisonGame {
    type Error = GameError;

    fn try_from(record: RoundRecord) -> Result<Self> {
        let game = Self {
            words: record.words,
            cells: record.cells,
            phase: record.phase,
            status: record.status,
            team1_poison: record.team1_poison,
            team2_poison: record.team2_poison,
            total_unique_poisons: record.total_unique_poisons,
            found_poisons: record.found_poisons,
            pending: record.pending,
        };
        game.check_consistent()?;
        Ok(game)
    }
}

impl PoisonGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn words(&self) -> Option<&WordList> {
        self.words.as_ref()
    }

    pub fn has_words(&self) -> bool {
        self.words.is_some()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cell_at(&self, index: CellIndex) -> Result<CellState> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::InvalidIndex)
    }

    pub fn is_highlighted(&self, index: CellIndex) -> bool {
        self.pending.is_some_and(|pending| pending.cell == index)
    }

    /// Whether a selection at `index` would do anything right now.
    pub fn can_select(&self, index: CellIndex) -> bool {
        (self.phase.is_placing() || self.phase == GamePhase::Playing)
            && self.pending.is_none()
            && self.cell_at(index).is_ok_and(|cell| !cell.is_marked())
    }

    pub fn cells(&self) -> impl Iterator<Item = CellView<'_>> {
        self.words
            .iter()
            .flat_map(|words| words.iter())
            .zip(&self.cells)
            .enumerate()
            .map(|(index, (word, &state))| CellView {
                index,
                word,
                state,
                highlighted: self.is_highlighted(index),
            })
    }

    pub fn pending(&self) -> Option<PendingTransition> {
        self.pending
    }

    pub fn pending_deadline(&self) -> Option<Duration> {
        self.pending.map(|pending| pending.deadline)
    }

    pub fn poison_of(&self, team: Team) -> Option<CellIndex> {
        match team {
            Team::One => self.team1_poison,
            Team::Two => self.team2_poison,
        }
    }

    /// Known once both teams have hidden their poison.
    pub fn total_unique_poisons(&self) -> Option<PoisonCount> {
        self.total_unique_poisons
    }

    pub fn found_poisons(&self) -> PoisonCount {
        self.found_poisons
    }

    /// Parses `text` and starts a new round with it. Nothing changes if the
    /// text holds no words.
    pub fn import_text(&mut self, text: &str) -> Result<()> {
        let words = WordList::parse(text)?;
        self.load_words(words);
        Ok(())
    }

    /// Replaces the word list and starts over at team 1's placement, whatever
    /// the current phase.
    pub fn load_words(&mut self, words: WordList) {
        log::debug!("loaded {} words during {:?}", words.len(), self.phase);
        self.words = Some(words);
        self.reset_round();
    }

    /// Restarts the round on the current list. Returns `false` when no list is
    /// loaded yet.
    pub fn restart(&mut self) -> bool {
        if self.words.is_none() {
            log::debug!("restart ignored, no words loaded");
            return false;
        }

        log::debug!("restarting round from {:?}", self.phase);
        self.reset_round();
        true
    }

    pub fn select(&mut self, index: CellIndex, now: Duration) -> Result<SelectOutcome> {
        use GamePhase::*;

        if self.phase.is_finished() {
            return Ok(SelectOutcome::NoChange);
        }

        let index = match &self.words {
            Some(words) => words.validate_index(index)?,
            None => return Err(GameError::InvalidIndex),
        };

        if self.pending.is_some() || self.cells[index].is_marked() {
            log::trace!("select {} ignored", index);
            return Ok(SelectOutcome::NoChange);
        }

        Ok(match self.phase {
            Setup => SelectOutcome::NoChange,
            Team1Poison => self.hide_poison(Team::One, index, now),
            Team2Poison => self.hide_poison(Team::Two, index, now),
            Playing => self.reveal(index),
            GameOver => SelectOutcome::NoChange,
        })
    }

    /// Applies the pending transition once its deadline has passed. Returns
    /// whether anything changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };

        if !pending.is_due(now) {
            return false;
        }

        self.pending = None;
        if pending.from != self.phase {
            log::warn!(
                "dropping stale transition from {:?} during {:?}",
                pending.from,
                self.phase
            );
            return false;
        }

        match self.phase {
            GamePhase::Team1Poison => {
                self.phase = GamePhase::Team2Poison;
                self.status = Status::HidePoison(Team::Two);
            }
            GamePhase::Team2Poison => self.start_play(),
            GamePhase::Setup | GamePhase::Playing | GamePhase::GameOver => return false,
        }

        log::debug!("advanced to {:?}", self.phase);
        true
    }

    fn hide_poison(&mut self, team: Team, index: CellIndex, now: Duration) -> SelectOutcome {
        match team {
            Team::One => self.team1_poison = Some(index),
            Team::Two => self.team2_poison = Some(index),
        }
        self.pending = Some(PendingTransition::new(index, self.phase, now));
        log::debug!("{} hid its poison", team);
        SelectOutcome::PoisonHidden(team)
    }

    fn start_play(&mut self) {
        let total = if self.team1_poison == self.team2_poison {
            1
        } else {
            2
        };

        self.total_unique_poisons = Some(total);
        self.found_poisons = 0;
        self.phase = GamePhase::Playing;
        self.status = Status::Started;
    }

    fn is_poisoned(&self, index: CellIndex) -> bool {
        self.team1_poison == Some(index) || self.team2_poison == Some(index)
    }

    fn reveal(&mut self, index: CellIndex) -> SelectOutcome {
        if !self.is_poisoned(index) {
            self.cells[index] = CellState::Safe;
            return SelectOutcome::Safe;
        }

        self.cells[index] = CellState::RevealedPoison;
        self.found_poisons += 1;

        if Some(self.found_poisons) == self.total_unique_poisons {
            self.phase = GamePhase::GameOver;
            self.status = Status::AllCleared;
            log::debug!("all poison found");
            SelectOutcome::AllPoisonsFound
        } else {
            self.status = Status::PoisonHit;
            SelectOutcome::PoisonFound
        }
    }

    /// Checks that a round could have been reached through the public
    /// transitions: one cell per word, poisons and marks that agree with the
    /// phase, and a found count that matches the revealed cells.
    fn check_consistent(&self) -> Result<()> {
        use GamePhase::*;

        let Some(words) = &self.words else {
            let blank = self.phase == Setup
                && self.cells.is_empty()
                && self.team1_poison.is_none()
                && self.team2_poison.is_none()
                && self.total_unique_poisons.is_none()
                && self.found_poisons == 0
                && self.pending.is_none();
            return if blank {
                Ok(())
            } else {
                Err(GameError::InvalidRound)
            };
        };

        if self.cells.len() != words.len() {
            return Err(GameError::InvalidRound);
        }
        for poison in [self.team1_poison, self.team2_poison].into_iter().flatten() {
            words
                .validate_index(poison)
                .map_err(|_| GameError::InvalidRound)?;
        }

        let revealed = self
            .cells
            .iter()
            .filter(|&&cell| cell == CellState::RevealedPoison)
            .count();
        let untouched = self.cells.iter().all(|cell| !cell.is_marked())
            && self.total_unique_poisons.is_none()
            && self.found_poisons == 0;
        let pending_matches = |team: Team| match self.pending {
            None => self.poison_of(team).is_none(),
            Some(pending) => {
                pending.from == self.phase && Some(pending.cell) == self.poison_of(team)
            }
        };

        let consistent = match self.phase {
            Setup => false,
            Team1Poison => {
                untouched && self.team2_poison.is_none() && pending_matches(Team::One)
            }
            Team2Poison => {
                untouched && self.team1_poison.is_some() && pending_matches(Team::Two)
            }
            Playing | GameOver => {
                let (Some(team1), Some(team2)) = (self.team1_poison, self.team2_poison) else {
                    return Err(GameError::InvalidRound);
                };
                let total = if team1 == team2 { 1 } else { 2 };
                let marks_agree =
                    self.cells
                        .iter()
                        .enumerate()
                        .all(|(index, &cell)| match cell {
                            CellState::Unmarked => true,
                            CellState::RevealedPoison => self.is_poisoned(index),
                            CellState::Safe => !self.is_poisoned(index),
                        });

                self.pending.is_none()
                    && self.total_unique_poisons == Some(total)
                    && usize::from(self.found_poisons) == revealed
                    && marks_agree
                    && (self.phase == GameOver) == (self.found_poisons == total)
            }
        };

        if consistent {
            Ok(())
        } else {
            Err(GameError::InvalidRound)
        }
    }

    fn reset_round(&mut self) {
        let len = self.words.as_ref().map_or(0, WordList::len);
        self.cells = vec![CellState::Unmarked; len];
        self.team1_poison = None;
        self.team2_poison = None;
        self.total_unique_poisons = None;
        self.found_poisons = 0;
        self.pending = None;
        self.phase = GamePhase::Team1Poison;
        self.status = Status::HidePoison(Team::One);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    const T0: Duration = Duration::ZERO;

    fn after_highlight(now: Duration) -> Duration {
        now + HIGHLIGHT_DURATION
    }

    fn game_with(words: &[&str]) -> PoisonGame {
        let mut game = PoisonGame::new();
        game.load_words(WordList::from_words(words).unwrap());
        game
    }

    /// Hides both poisons and lets both highlights expire.
    fn placed(words: &[&str], team1: CellIndex, team2: CellIndex) -> PoisonGame {
        let mut game = game_with(words);
        assert_eq!(
            game.select(team1, T0).unwrap(),
            SelectOutcome::PoisonHidden(Team::One)
        );
        assert!(game.tick(after_highlight(T0)));
        let t1 = after_highlight(T0);
        assert_eq!(
            game.select(team2, t1).unwrap(),
            SelectOutcome::PoisonHidden(Team::Two)
        );
        assert!(game.tick(after_highlight(t1)));
        game
    }

    #[test]
    fn new_game_waits_for_words() {
        let mut game = PoisonGame::new();

        assert_eq!(game.phase(), GamePhase::Setup);
        assert_eq!(game.status(), Status::AwaitingWords);
        assert_eq!(game.cells().count(), 0);
        assert_eq!(game.select(0, T0), Err(GameError::InvalidIndex));
    }

    #[test]
    fn empty_import_is_rejected_without_transition() {
        let mut game = PoisonGame::new();

        assert_eq!(game.import_text(" \n,，"), Err(GameError::EmptyWordList));
        assert_eq!(game.phase(), GamePhase::Setup);
        assert!(!game.has_words());
    }

    #[test]
    fn import_starts_team1_placement() {
        let mut game = PoisonGame::new();

        game.import_text("cat\ndog").unwrap();

        assert_eq!(game.phase(), GamePhase::Team1Poison);
        assert_eq!(game.status(), Status::HidePoison(Team::One));
        assert_eq!(game.cell_count(), 2);
    }

    #[test]
    fn placement_highlights_until_deadline() {
        let mut game = game_with(&["cat", "dog"]);

        game.select(1, T0).unwrap();

        assert!(game.is_highlighted(1));
        assert!(!game.is_highlighted(0));
        assert_eq!(game.poison_of(Team::One), Some(1));
        assert_eq!(game.phase(), GamePhase::Team1Poison);
        assert_eq!(game.pending_deadline(), Some(HIGHLIGHT_DURATION));

        assert!(!game.tick(Duration::from_millis(499)));
        assert_eq!(game.phase(), GamePhase::Team1Poison);

        assert!(game.tick(Duration::from_millis(500)));
        assert_eq!(game.phase(), GamePhase::Team2Poison);
        assert_eq!(game.status(), Status::HidePoison(Team::Two));
        assert!(!game.is_highlighted(1));
        assert_eq!(game.cell_at(1), Ok(CellState::Unmarked));
    }

    #[test]
    fn selections_during_highlight_are_ignored() {
        let mut game = game_with(&["cat", "dog", "owl"]);

        game.select(0, T0).unwrap();

        assert_eq!(
            game.select(0, Duration::from_millis(10)).unwrap(),
            SelectOutcome::NoChange
        );
        assert_eq!(
            game.select(2, Duration::from_millis(20)).unwrap(),
            SelectOutcome::NoChange
        );
        assert_eq!(game.poison_of(Team::One), Some(0));
        assert_eq!(game.poison_of(Team::Two), None);
    }

    #[test]
    fn distinct_poisons_need_two_finds() {
        let mut game = placed(&["cat", "dog"], 0, 1);
        let now = Duration::from_secs(5);

        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.status(), Status::Started);
        assert_eq!(game.total_unique_poisons(), Some(2));
        assert_eq!(game.found_poisons(), 0);

        let outcome = game.select(0, now).unwrap();
        assert_eq!(outcome, SelectOutcome::PoisonFound);
        assert_eq!(outcome.notification(), Some(Notification::PoisonHit));
        assert_eq!(game.found_poisons(), 1);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.status(), Status::PoisonHit);
        assert_eq!(game.cell_at(0), Ok(CellState::RevealedPoison));

        let outcome = game.select(1, now).unwrap();
        assert_eq!(outcome, SelectOutcome::AllPoisonsFound);
        assert!(outcome.notification().unwrap().is_final());
        assert_eq!(game.found_poisons(), 2);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.status(), Status::AllCleared);
    }

    #[test]
    fn shared_poison_collapses_to_one() {
        let mut game = placed(&["a", "b", "c"], 1, 1);
        let now = Duration::from_secs(5);

        assert_eq!(game.total_unique_poisons(), Some(1));

        assert_eq!(game.select(0, now).unwrap(), SelectOutcome::Safe);
        assert_eq!(game.cell_at(0), Ok(CellState::Safe));
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.found_poisons(), 0);

        assert_eq!(game.select(1, now).unwrap(), SelectOutcome::AllPoisonsFound);
        assert_eq!(game.found_poisons(), 1);
        assert_eq!(game.phase(), GamePhase::GameOver);
    }

    #[test]
    fn marked_cells_are_terminal() {
        let mut game = placed(&["a", "b", "c"], 0, 2);
        let now = Duration::from_secs(5);

        game.select(0, now).unwrap();
        game.select(1, now).unwrap();

        assert_eq!(game.select(0, now).unwrap(), SelectOutcome::NoChange);
        assert_eq!(game.select(0, now).unwrap(), SelectOutcome::NoChange);
        assert_eq!(game.select(1, now).unwrap(), SelectOutcome::NoChange);
        assert_eq!(game.found_poisons(), 1);
        assert_eq!(game.cell_at(1), Ok(CellState::Safe));
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn game_over_ignores_every_click() {
        let mut game = placed(&["a", "b", "c"], 2, 2);
        let now = Duration::from_secs(5);
        game.select(2, now).unwrap();
        let finished = game.clone();

        assert_eq!(game.select(0, now).unwrap(), SelectOutcome::NoChange);
        assert_eq!(game.select(99, now).unwrap(), SelectOutcome::NoChange);
        assert_eq!(game, finished);
    }

    #[test]
    fn can_select_tracks_pending_marks_and_game_over() {
        let mut game = game_with(&["a", "b"]);
        assert!(game.can_select(0));
        assert!(!game.can_select(2));

        game.select(0, T0).unwrap();
        assert!(!game.can_select(1));
        game.tick(after_highlight(T0));
        assert!(game.can_select(0));

        let mut game = placed(&["a", "b"], 0, 0);
        let now = Duration::from_secs(5);
        game.select(1, now).unwrap();
        assert!(!game.can_select(1));
        assert!(game.can_select(0));
        game.select(0, now).unwrap();
        assert!(!game.can_select(0));
        assert!(!PoisonGame::new().can_select(0));
    }

    #[test]
    fn out_of_range_select_is_an_error() {
        let mut game = game_with(&["a"]);
        assert_eq!(game.select(1, T0), Err(GameError::InvalidIndex));
        assert_eq!(game.phase(), GamePhase::Team1Poison);
    }

    #[test]
    fn restart_clears_the_round() {
        let mut game = placed(&["cat", "dog"], 0, 1);
        let now = Duration::from_secs(5);
        game.select(0, now).unwrap();
        game.select(1, now).unwrap();
        assert_eq!(game.phase(), GamePhase::GameOver);

        assert!(game.restart());

        assert_eq!(game.phase(), GamePhase::Team1Poison);
        assert_eq!(game.status(), Status::HidePoison(Team::One));
        assert_eq!(game.poison_of(Team::One), None);
        assert_eq!(game.poison_of(Team::Two), None);
        assert_eq!(game.total_unique_poisons(), None);
        assert_eq!(game.found_poisons(), 0);
        assert!(game.cells().all(|cell| cell.state == CellState::Unmarked));
        assert_eq!(game.words().map(WordList::len), Some(2));
    }

    #[test]
    fn restart_without_words_is_a_no_op() {
        let mut game = PoisonGame::new();

        assert!(!game.restart());
        assert_eq!(game.phase(), GamePhase::Setup);
    }

    #[test]
    fn stale_tick_after_restart_does_nothing() {
        let mut game = game_with(&["cat", "dog"]);
        game.select(0, T0).unwrap();

        game.restart();

        assert!(!game.tick(Duration::from_secs(1)));
        assert_eq!(game.phase(), GamePhase::Team1Poison);

        // a new placement is not advanced early by the old timer
        let t1 = Duration::from_millis(1_200);
        game.select(1, t1).unwrap();
        assert!(!game.tick(Duration::from_millis(1_300)));
        assert_eq!(game.phase(), GamePhase::Team1Poison);
        assert!(game.tick(after_highlight(t1)));
        assert_eq!(game.phase(), GamePhase::Team2Poison);
    }

    #[test]
    fn reimport_mid_placement_resets_to_team1() {
        let mut game = game_with(&["cat", "dog"]);
        game.select(0, T0).unwrap();
        game.tick(after_highlight(T0));
        game.select(1, Duration::from_secs(1)).unwrap();

        game.import_text("x, y, z").unwrap();

        assert_eq!(game.phase(), GamePhase::Team1Poison);
        assert_eq!(game.cell_count(), 3);
        assert_eq!(game.pending(), None);
        assert_eq!(game.poison_of(Team::One), None);
        assert!(!game.tick(Duration::from_secs(10)));
    }

    #[test]
    fn reimport_mid_play_clears_marks() {
        let mut game = placed(&["a", "b", "c"], 0, 1);
        game.select(2, Duration::from_secs(5)).unwrap();

        game.import_text("d\ne\nf").unwrap();

        assert_eq!(game.phase(), GamePhase::Team1Poison);
        assert!(game.cells().all(|cell| cell.state == CellState::Unmarked));
        assert_eq!(game.cells().map(|cell| cell.word).last(), Some("f"));
    }

    #[test]
    fn found_never_exceeds_total() {
        for (team1, team2) in [(0, 0), (0, 1), (1, 0), (2, 2)] {
            let mut game = placed(&["a", "b", "c"], team1, team2);
            let now = Duration::from_secs(5);
            for index in [2, 1, 0, 2, 1, 0] {
                game.select(index, now).unwrap();
                let total = game.total_unique_poisons().unwrap();
                assert!(game.found_poisons() <= total);
                assert_eq!(
                    game.phase() == GamePhase::GameOver,
                    game.found_poisons() == total
                );
            }
            assert_eq!(game.phase(), GamePhase::GameOver);
        }
    }

    #[test]
    fn cell_views_expose_words_marks_and_highlight() {
        let mut game = game_with(&["cat", "dog"]);
        game.select(1, T0).unwrap();

        let views: Vec<_> = game.cells().collect();

        assert_eq!(
            views,
            vec![
                CellView {
                    index: 0,
                    word: "cat",
                    state: CellState::Unmarked,
                    highlighted: false,
                },
                CellView {
                    index: 1,
                    word: "dog",
                    state: CellState::Unmarked,
                    highlighted: true,
                },
            ]
        );
    }

    #[test]
    fn status_text_never_names_the_poison() {
        let mut game = placed(&["apple", "pear"], 0, 1);
        game.select(0, Duration::from_secs(5)).unwrap();

        let text = game.status().to_string();
        assert!(!text.contains("apple"));
        assert_eq!(game.status().tone(), StatusTone::Prompt);
    }

    #[test]
    fn serialized_rounds_load_back_unchanged() {
        let mut mid_placement = game_with(&["cat", "dog"]);
        mid_placement.select(1, T0).unwrap();
        let mut after_hit = placed(&["a", "b", "c"], 0, 2);
        after_hit.select(0, Duration::from_secs(5)).unwrap();
        after_hit.select(1, Duration::from_secs(5)).unwrap();
        let mut finished = placed(&["a", "b"], 1, 1);
        finished.select(1, Duration::from_secs(5)).unwrap();

        for game in [
            PoisonGame::new(),
            game_with(&["cat", "dog"]),
            mid_placement,
            placed(&["a", "b"], 0, 1),
            after_hit,
            finished,
        ] {
            let json = serde_json::to_string(&game).unwrap();
            let loaded: PoisonGame = serde_json::from_str(&json).unwrap();
            assert_eq!(loaded, game);
        }
    }

    #[test]
    fn loading_a_round_with_missing_cells_fails() {
        let mut value = serde_json::to_value(placed(&["a", "b"], 0, 1)).unwrap();
        value["cells"] = serde_json::json!([]);

        assert!(serde_json::from_value::<PoisonGame>(value).is_err());
    }

    #[test]
    fn loading_play_without_a_poison_total_fails() {
        let mut value = serde_json::to_value(placed(&["a", "b"], 0, 1)).unwrap();
        value["total_unique_poisons"] = serde_json::Value::Null;

        assert!(serde_json::from_value::<PoisonGame>(value).is_err());
    }

    #[test]
    fn loading_inconsistent_counts_fails() {
        let mut game = placed(&["a", "b"], 0, 1);
        game.select(0, Duration::from_secs(5)).unwrap();

        let mut early_game_over = serde_json::to_value(&game).unwrap();
        early_game_over["phase"] = serde_json::json!("GameOver");
        assert!(serde_json::from_value::<PoisonGame>(early_game_over).is_err());

        let mut wrong_count = serde_json::to_value(&game).unwrap();
        wrong_count["found_poisons"] = serde_json::json!(0);
        assert!(serde_json::from_value::<PoisonGame>(wrong_count).is_err());

        let mut stray_poison = serde_json::to_value(&game).unwrap();
        stray_poison["team2_poison"] = serde_json::json!(7);
        assert!(serde_json::from_value::<PoisonGame>(stray_poison).is_err());
    }

    #[test]
    fn loading_words_without_a_round_fails() {
        let mut value = serde_json::to_value(PoisonGame::new()).unwrap();
        value["words"] = serde_json::json!(["a"]);

        assert!(serde_json::from_value::<PoisonGame>(value).is_err());
    }

    #[test]
    fn phase_serializes_as_plain_name() {
        let game = game_with(&["cat"]);
        let json = serde_json::to_value(game.phase()).unwrap();
        assert_eq!(json, serde_json::json!("Team1Poison"));
    }
}
