use crate::catalog::BuildingCatalog;
use crate::models::{HistoryEntry, Point, Rect, Severity};

/// Quiz lifecycle. `Finished` once every question has a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// What the display surface should do after a transition. The session
/// never touches the DOM; the UI layer applies these.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEffect {
    Highlight { bounds: Rect, verdict: Verdict },
    ClearHighlight,
}

/// One play-through of the question sequence.
///
/// All mutation goes through `reset`, `submit_answer`, and
/// `calibration_click`; everything else is a read-only snapshot for
/// rendering. Invariants: `round <= questions.len()`, and
/// `correct + incorrect == round` (an uncalibrated building soft-skips
/// without advancing).
#[derive(Debug, Clone)]
pub struct QuizSession {
    catalog: BuildingCatalog,
    questions: Vec<String>,
    round: usize,
    correct: u32,
    incorrect: u32,
    history: Vec<HistoryEntry>,
}

impl QuizSession {
    pub fn new(catalog: BuildingCatalog, questions: Vec<String>) -> Self {
        Self {
            catalog,
            questions,
            round: 0,
            correct: 0,
            incorrect: 0,
            history: Vec::new(),
        }
    }

    /// A session over the campus catalog with its fixed question order.
    pub fn campus() -> Self {
        let catalog = BuildingCatalog::campus();
        let questions = catalog.question_order();
        Self::new(catalog, questions)
    }

    pub fn phase(&self) -> Phase {
        if self.round >= self.questions.len() {
            Phase::Finished
        } else {
            Phase::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == Phase::Finished
    }

    pub fn round(&self) -> usize {
        self.round
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Back to round zero from any phase. The caller should apply the
    /// returned effect so no stale verdict highlight survives a restart.
    pub fn reset(&mut self) -> RenderEffect {
        self.round = 0;
        self.correct = 0;
        self.incorrect = 0;
        self.history.clear();
        RenderEffect::ClearHighlight
    }

    /// Score a double-click against the current question.
    ///
    /// No-op after `Finished`. An uncalibrated building logs a warning
    /// and leaves the round and both counters untouched — the player can
    /// retry once bounds exist, so this is not a wrong answer.
    pub fn submit_answer(&mut self, point: Point) -> Option<RenderEffect> {
        let Some(name) = self.questions.get(self.round) else {
            return None;
        };
        let Some(building) = self.catalog.lookup(name) else {
            debug_assert!(false, "question not in catalog: {name}");
            return None;
        };
        let Some(bounds) = building.bounds else {
            self.history.push(HistoryEntry::new(
                "Bounds not set yet; use calibration mode.",
                Severity::Negative,
            ));
            return None;
        };

        let verdict = if bounds.contains(point) {
            self.correct += 1;
            self.history
                .push(HistoryEntry::new("Your answer is correct!!", Severity::Positive));
            Verdict::Correct
        } else {
            self.incorrect += 1;
            self.history
                .push(HistoryEntry::new("Sorry wrong location.", Severity::Negative));
            Verdict::Incorrect
        };
        self.round += 1;

        Some(RenderEffect::Highlight { bounds, verdict })
    }

    /// Log a raw click position for manual bounds calibration. Permitted
    /// in any phase; never changes counters or the round.
    pub fn calibration_click(&mut self, point: Point) {
        self.history.push(HistoryEntry::new(
            format!(
                "Calib click: [{:.0}, {:.0}]",
                point.y.round(),
                point.x.round()
            ),
            Severity::Neutral,
        ));
    }

    /// Prompt for the current round, or "Done!" once finished.
    pub fn prompt_text(&self) -> String {
        match self.questions.get(self.round) {
            Some(name) => {
                let grid = self
                    .catalog
                    .lookup(name)
                    .map(|b| b.grid_label.as_str())
                    .unwrap_or("?");
                format!("Double click where you think {name} is ({grid})")
            }
            None => "Done!".to_string(),
        }
    }

    pub fn score_text(&self) -> String {
        format!(
            "Score: {} Correct, {} Incorrect",
            self.correct, self.incorrect
        )
    }

    /// Final summary line, only once the run is over.
    pub fn summary_text(&self) -> Option<String> {
        self.is_finished()
            .then(|| format!("{} Correct, {} Incorrect", self.correct, self.incorrect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Building;

    fn campus_session() -> QuizSession {
        QuizSession::campus()
    }

    /// Center of a building's calibrated bounds.
    fn center_of(session: &QuizSession, name: &str) -> Point {
        let bounds = session.catalog.lookup(name).unwrap().bounds.unwrap();
        Point::new(
            (bounds.min_x() + bounds.max_x()) / 2.0,
            (bounds.min_y() + bounds.max_y()) / 2.0,
        )
    }

    fn assert_counts_match_round(session: &QuizSession) {
        assert_eq!(
            (session.correct() + session.incorrect()) as usize,
            session.round()
        );
    }

    #[test]
    fn test_new_session_starts_at_round_zero() {
        let session = campus_session();
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.round(), 0);
        assert_eq!(session.correct(), 0);
        assert_eq!(session.incorrect(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_reset_clears_everything_and_requests_clear() {
        let mut session = campus_session();
        session.submit_answer(Point::new(0.0, 0.0));
        session.calibration_click(Point::new(5.0, 5.0));
        let effect = session.reset();
        assert_eq!(effect, RenderEffect::ClearHighlight);
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.round(), 0);
        assert_eq!(session.correct(), 0);
        assert_eq!(session.incorrect(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_correct_answer_advances_and_highlights() {
        let mut session = campus_session();
        let p = center_of(&session, "Bayramian Hall");
        let effect = session.submit_answer(p).unwrap();
        assert!(matches!(
            effect,
            RenderEffect::Highlight {
                verdict: Verdict::Correct,
                ..
            }
        ));
        assert_eq!(session.correct(), 1);
        assert_eq!(session.incorrect(), 0);
        assert_eq!(session.round(), 1);
        assert_eq!(session.history().last().unwrap().severity, Severity::Positive);
        assert_counts_match_round(&session);
    }

    #[test]
    fn test_wrong_answer_advances_and_highlights() {
        let mut session = campus_session();
        let effect = session.submit_answer(Point::new(1.0, 1.0)).unwrap();
        assert!(matches!(
            effect,
            RenderEffect::Highlight {
                verdict: Verdict::Incorrect,
                ..
            }
        ));
        assert_eq!(session.correct(), 0);
        assert_eq!(session.incorrect(), 1);
        assert_eq!(session.round(), 1);
        assert_eq!(session.history().last().unwrap().severity, Severity::Negative);
        assert_counts_match_round(&session);
    }

    #[test]
    fn test_perfect_run_finishes_with_full_score() {
        // Scenario: all five questions answered dead-center
        let mut session = campus_session();
        for name in session.questions.clone() {
            let p = center_of(&session, &name);
            session.submit_answer(p).unwrap();
            assert_counts_match_round(&session);
        }
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.correct(), 5);
        assert_eq!(session.incorrect(), 0);
        assert_eq!(session.summary_text().unwrap(), "5 Correct, 0 Incorrect");
        assert_eq!(session.prompt_text(), "Done!");
    }

    #[test]
    fn test_exact_corner_counts_as_correct() {
        // Bayramian Hall's (row, col) corner (530, 308) lies on the
        // closed boundary, so it scores.
        let mut session = campus_session();
        let effect = session.submit_answer(Point::new(308.0, 530.0)).unwrap();
        assert!(matches!(
            effect,
            RenderEffect::Highlight {
                verdict: Verdict::Correct,
                ..
            }
        ));
    }

    #[test]
    fn test_uncalibrated_building_soft_skips() {
        let catalog = BuildingCatalog::from_buildings(vec![Building {
            name: "Magnolia Hall".to_string(),
            code: "MG".to_string(),
            grid_label: "B2".to_string(),
            bounds: None,
        }]);
        let mut session = QuizSession::new(catalog, vec!["Magnolia Hall".to_string()]);

        let effect = session.submit_answer(Point::new(100.0, 100.0));
        assert!(effect.is_none());
        assert_eq!(session.round(), 0);
        assert_eq!(session.correct(), 0);
        assert_eq!(session.incorrect(), 0);
        assert_eq!(session.phase(), Phase::InProgress);
        let entry = session.history().last().unwrap();
        assert_eq!(entry.text, "Bounds not set yet; use calibration mode.");
        assert_eq!(entry.severity, Severity::Negative);
    }

    #[test]
    fn test_submit_after_finished_is_ignored() {
        let mut session = campus_session();
        for name in session.questions.clone() {
            let p = center_of(&session, &name);
            session.submit_answer(p);
        }
        assert!(session.is_finished());

        let effect = session.submit_answer(Point::new(350.0, 560.0));
        assert!(effect.is_none());
        assert_eq!(session.round(), 5);
        assert_eq!(session.correct(), 5);
        assert_eq!(session.incorrect(), 0);
    }

    #[test]
    fn test_calibration_click_only_appends_history() {
        let mut session = campus_session();
        session.calibration_click(Point::new(307.6, 529.4));
        assert_eq!(session.round(), 0);
        assert_eq!(session.correct(), 0);
        assert_eq!(session.incorrect(), 0);
        let entry = session.history().last().unwrap();
        assert_eq!(entry.text, "Calib click: [529, 308]");
        assert_eq!(entry.severity, Severity::Neutral);

        // Still allowed after the run ends
        for name in session.questions.clone() {
            let p = center_of(&session, &name);
            session.submit_answer(p);
        }
        session.calibration_click(Point::new(10.0, 20.0));
        assert_eq!(session.history().last().unwrap().text, "Calib click: [20, 10]");
        assert_eq!(session.round(), 5);
    }

    #[test]
    fn test_prompt_text_names_building_and_grid() {
        let session = campus_session();
        assert_eq!(
            session.prompt_text(),
            "Double click where you think Bayramian Hall is (C4)"
        );
    }

    #[test]
    fn test_score_text_format() {
        let mut session = campus_session();
        session.submit_answer(Point::new(1.0, 1.0));
        assert_eq!(session.score_text(), "Score: 0 Correct, 1 Incorrect");
    }

    #[test]
    fn test_summary_absent_while_in_progress() {
        let session = campus_session();
        assert!(session.summary_text().is_none());
    }

    #[test]
    fn test_mixed_run_counts() {
        let mut session = campus_session();
        // Miss the first two, hit the remaining three
        session.submit_answer(Point::new(1.0, 1.0));
        session.submit_answer(Point::new(1.0, 1.0));
        for _ in 0..3 {
            let name = session.questions[session.round()].clone();
            let p = center_of(&session, &name);
            session.submit_answer(p);
        }
        assert!(session.is_finished());
        assert_eq!(session.summary_text().unwrap(), "3 Correct, 2 Incorrect");
    }
}
