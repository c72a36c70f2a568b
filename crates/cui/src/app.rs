use crate::persistence::{default_scores_path, load_records, save_records};
use banatro_core::{
    insert_record, Event, EventBus, GameSession, Phase, ScoreRecord, SessionError, SortBy,
};
use std::collections::{BTreeSet, VecDeque};
use std::path::PathBuf;

const MAX_EVENT_LOG: usize = 200;

pub struct App {
    pub seed: u64,
    pub session: GameSession,
    pub events: EventBus,
    pub records: Vec<ScoreRecord>,
    pub scores_path: Option<PathBuf>,
    pub hand_cursor: usize,
    pub shop_cursor: usize,
    pub selected: BTreeSet<usize>,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub show_deck: bool,
    pub should_quit: bool,
}

impl App {
    pub fn bootstrap(seed: u64) -> Self {
        let scores_path = default_scores_path();
        let mut status_line = String::from("ready");
        let records = match scores_path.as_deref().map(load_records) {
            Some(Ok(records)) => records,
            Some(Err(err)) => {
                status_line = format!("scores unreadable: {err}");
                Vec::new()
            }
            None => Vec::new(),
        };

        let mut session = GameSession::from_seed(seed);
        let mut events = EventBus::default();
        let _ = session.deal(&mut events);

        let mut app = Self {
            seed,
            session,
            events,
            records,
            scores_path,
            hand_cursor: 0,
            shop_cursor: 0,
            selected: BTreeSet::new(),
            event_log: VecDeque::new(),
            status_line,
            show_help: false,
            show_deck: false,
            should_quit: false,
        };
        app.pump_events();
        app
    }

    pub fn move_hand_cursor(&mut self, forward: bool) {
        let len = self.session.player.hand.len();
        if len == 0 {
            self.hand_cursor = 0;
            return;
        }
        if forward {
            self.hand_cursor = (self.hand_cursor + 1) % len;
        } else {
            self.hand_cursor = self.hand_cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn move_shop_cursor(&mut self, forward: bool) {
        let len = self
            .session
            .shop
            .as_ref()
            .map(|offer| offer.items.len())
            .unwrap_or(0);
        if len == 0 {
            self.shop_cursor = 0;
            return;
        }
        if forward {
            self.shop_cursor = (self.shop_cursor + 1) % len;
        } else {
            self.shop_cursor = self.shop_cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn toggle_selection(&mut self) {
        if self.hand_cursor >= self.session.player.hand.len() {
            return;
        }
        if !self.selected.remove(&self.hand_cursor) {
            self.selected.insert(self.hand_cursor);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn deal(&mut self) {
        match self.session.deal(&mut self.events) {
            Ok(count) => self.status_line = format!("dealt {count} cards"),
            Err(err) => self.report(err),
        }
        self.pump_events();
    }

    pub fn play_selected(&mut self) {
        let indices: Vec<usize> = self.selected.iter().copied().collect();
        match self.session.play(&indices, &mut self.events) {
            Ok(breakdown) => {
                self.status_line = format!(
                    "{}: {} points, +${}",
                    breakdown.kind.label(),
                    breakdown.points,
                    breakdown.coins
                );
                self.after_hand_change();
            }
            Err(err) => self.report(err),
        }
        self.pump_events();
    }

    pub fn redraw_selected(&mut self) {
        let indices: Vec<usize> = self.selected.iter().copied().collect();
        match self.session.redraw(&indices, &mut self.events) {
            Ok(count) => {
                self.status_line = format!("redrew {count} cards");
                self.after_hand_change();
            }
            Err(err) => self.report(err),
        }
        self.pump_events();
    }

    pub fn sort_by_rank(&mut self) {
        self.session.sort_hand(SortBy::Rank);
        self.after_hand_change();
        self.status_line = String::from("sorted by rank");
    }

    pub fn sort_by_suit(&mut self) {
        self.session.sort_hand(SortBy::Suit);
        self.after_hand_change();
        self.status_line = String::from("sorted by suit");
    }

    pub fn enter_or_leave_shop(&mut self) {
        let result = match self.session.phase {
            Phase::Shopping => self.session.exit_shop(&mut self.events),
            _ => self.session.enter_shop(&mut self.events),
        };
        match result {
            Ok(()) => {
                self.shop_cursor = 0;
                self.after_hand_change();
            }
            Err(err) => self.report(err),
        }
        self.pump_events();
    }

    pub fn buy_selected(&mut self) {
        match self.session.purchase(self.shop_cursor, &mut self.events) {
            Ok(()) => {
                let len = self
                    .session
                    .shop
                    .as_ref()
                    .map(|offer| offer.items.len())
                    .unwrap_or(0);
                self.shop_cursor = self.shop_cursor.min(len.saturating_sub(1));
            }
            Err(err) => self.report(err),
        }
        self.pump_events();
    }

    pub fn new_run(&mut self) {
        self.session.new_run(&mut self.events);
        let _ = self.session.deal(&mut self.events);
        self.selected.clear();
        self.hand_cursor = 0;
        self.shop_cursor = 0;
        self.show_deck = false;
        self.status_line = String::from("new run");
        self.pump_events();
    }

    fn after_hand_change(&mut self) {
        self.selected.clear();
        let len = self.session.player.hand.len();
        if self.hand_cursor >= len {
            self.hand_cursor = len.saturating_sub(1);
        }
    }

    fn report(&mut self, err: SessionError) {
        self.status_line = err.to_string();
    }

    /// Drain engine events into the log. A finished run lands in the record
    /// table and is written back to disk here.
    fn pump_events(&mut self) {
        let fired: Vec<Event> = self.events.drain().collect();
        for event in fired {
            if let Event::RunEnded { record } = &event {
                insert_record(&mut self.records, *record);
                if let Some(path) = self.scores_path.as_deref() {
                    if let Err(err) = save_records(&self.records, path) {
                        self.log(format!("scores not saved: {err}"));
                    }
                }
            }
            let line = describe_event(&event);
            self.log(line);
        }
    }

    fn log(&mut self, line: String) {
        self.event_log.push_front(line);
        self.event_log.truncate(MAX_EVENT_LOG);
    }
}

fn describe_event(event: &Event) -> String {
    match event {
        Event::RunStarted { seed, goal } => format!("run started (seed {seed}, goal {goal})"),
        Event::RoundStarted {
            round,
            goal,
            hands,
            redraws,
        } => format!("round {round}: goal {goal}, {hands} hands, {redraws} redraws"),
        Event::HandScored {
            kind,
            points,
            coins,
            round_score,
        } => format!(
            "{} for {points} points (+${coins}), round total {round_score}",
            kind.label()
        ),
        Event::Redrawn {
            count,
            redraws_left,
        } => format!("redrew {count}, {redraws_left} redraws left"),
        Event::RoundCleared { round, score } => format!("round {round} cleared at {score}"),
        Event::ShopEntered { offers } => format!("shop open with {offers} offers"),
        Event::Purchased { item, price, coins } => {
            format!("bought {item} for ${price} (${coins} left)")
        }
        Event::RunEnded { record } => format!(
            "run over: {} points in round {}",
            record.score, record.round
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn isolated_app(seed: u64) -> App {
        // Keep the test away from any real score file.
        std::env::set_var(
            "BANATRO_SCORES",
            std::env::temp_dir().join(format!("banatro-app-test-{}.json", std::process::id())),
        );
        App::bootstrap(seed)
    }

    #[test]
    fn bootstrap_deals_a_full_hand() {
        let app = isolated_app(3);
        assert_eq!(app.session.player.hand.len(), 8);
        assert_eq!(app.session.phase, Phase::Playing);
    }

    #[test]
    fn selection_toggles_under_the_cursor() {
        let mut app = isolated_app(3);
        app.toggle_selection();
        app.move_hand_cursor(true);
        app.toggle_selection();
        assert_eq!(app.selected.iter().copied().collect::<Vec<_>>(), vec![0, 1]);
        app.toggle_selection();
        assert_eq!(app.selected.iter().copied().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn playing_a_selection_logs_and_clears_it() {
        let mut app = isolated_app(3);
        app.toggle_selection();
        app.play_selected();
        assert!(app.selected.is_empty());
        assert_eq!(app.session.rules.hands_remaining, 4);
        assert!(app
            .event_log
            .iter()
            .any(|line| line.contains("points")));
    }

    #[test]
    fn invalid_play_reports_without_state_change() {
        let mut app = isolated_app(3);
        app.play_selected();
        assert_eq!(app.session.rules.hands_remaining, 5);
        assert_eq!(app.status_line, "select between 1 and 5 cards");
    }

    #[test]
    fn hand_cursor_wraps() {
        let mut app = isolated_app(3);
        app.move_hand_cursor(false);
        assert_eq!(app.hand_cursor, 7);
        app.move_hand_cursor(true);
        assert_eq!(app.hand_cursor, 0);
    }

    #[test]
    fn finished_run_is_recorded() {
        let mut app = isolated_app(3);
        app.session.rules.hands_remaining = 1;
        app.toggle_selection();
        app.play_selected();
        assert_eq!(app.session.phase, Phase::GameOver);
        assert_eq!(app.records.len(), 1);
        assert_eq!(app.records[0].round, 1);
    }
}
