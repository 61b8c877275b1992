use std::time::{Duration, Instant};

use crate::config::get_config;
use crate::conversation::{ChatMessage, ConversationLog, ReplyQueue};
use crate::data::{Workout, WorkoutKind, WEEKLY_WORKOUTS};
use crate::dispatcher::dispatch;
use crate::log_view::EventLog;
use crate::splash_screen::SplashScreen;
use crate::status_indicator::StatusIndicator;
use crate::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Splash,
    Dashboard,
    Agent,
    Training,
    Nutrition,
    Metrics,
    QuitConfirm,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutFilter {
    All,
    Cycling,
    Gym,
}

impl WorkoutFilter {
    pub fn cycle(self) -> Self {
        match self {
            WorkoutFilter::All => WorkoutFilter::Cycling,
            WorkoutFilter::Cycling => WorkoutFilter::Gym,
            WorkoutFilter::Gym => WorkoutFilter::All,
        }
    }

    pub fn index(self) -> usize {
        match self {
            WorkoutFilter::All => 0,
            WorkoutFilter::Cycling => 1,
            WorkoutFilter::Gym => 2,
        }
    }

    fn accepts(self, workout: &Workout) -> bool {
        match self {
            WorkoutFilter::All => true,
            WorkoutFilter::Cycling => workout.kind == WorkoutKind::Cycling,
            WorkoutFilter::Gym => workout.kind == WorkoutKind::Gym,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsTab {
    Ftp,
    Hrv,
    Load,
    Sleep,
}

impl MetricsTab {
    pub fn next(self) -> Self {
        match self {
            MetricsTab::Ftp => MetricsTab::Hrv,
            MetricsTab::Hrv => MetricsTab::Load,
            MetricsTab::Load => MetricsTab::Sleep,
            MetricsTab::Sleep => MetricsTab::Ftp,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            MetricsTab::Ftp => MetricsTab::Sleep,
            MetricsTab::Hrv => MetricsTab::Ftp,
            MetricsTab::Load => MetricsTab::Hrv,
            MetricsTab::Sleep => MetricsTab::Load,
        }
    }

    pub fn index(self) -> usize {
        match self {
            MetricsTab::Ftp => 0,
            MetricsTab::Hrv => 1,
            MetricsTab::Load => 2,
            MetricsTab::Sleep => 3,
        }
    }
}

pub struct App {
    pub state: AppState,
    pub return_to: AppState,
    pub theme: ThemeMode,
    pub splash_screen: SplashScreen,

    pub conversation: ConversationLog,
    pub reply_queue: ReplyQueue,
    pub status_indicator: StatusIndicator,
    pub events: EventLog,
    pub chat_input: String,
    pub chat_scroll: u16,
    pub chip_cursor: Option<usize>,

    pub training_filter: WorkoutFilter,
    pub selected_workout: usize,
    pub workout_detail_open: bool,

    pub metrics_tab: MetricsTab,

    last_spinner_update: Instant,
}

impl App {
    pub fn new() -> App {
        let config = get_config();
        let mut events = EventLog::new();
        events.add("Session started");

        App {
            state: AppState::Splash,
            return_to: AppState::Dashboard,
            theme: config.theme,
            splash_screen: SplashScreen::new(),
            conversation: ConversationLog::with_greeting(),
            reply_queue: ReplyQueue::new(),
            status_indicator: StatusIndicator::new(),
            events,
            chat_input: String::new(),
            chat_scroll: u16::MAX,
            chip_cursor: None,
            training_filter: WorkoutFilter::All,
            selected_workout: 0,
            workout_detail_open: false,
            metrics_tab: MetricsTab::Ftp,
            last_spinner_update: Instant::now(),
        }
    }

    /// Switches views. Leaving the agent view drops any replies still
    /// waiting out their typing delay instead of appending them later.
    pub fn set_state(&mut self, next: AppState) {
        if self.state == AppState::Agent && next != AppState::Agent {
            let dropped = self.reply_queue.cancel_all();
            if dropped > 0 {
                self.events
                    .add(format!("Dropped {dropped} pending replies on leaving the agent"));
            }
            self.status_indicator.set_typing(false);
        }
        if next == AppState::QuitConfirm && self.state != AppState::QuitConfirm {
            self.return_to = self.state;
        }
        self.state = next;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    /// Submit guard plus scheduling: blank input is rejected outright;
    /// anything else is appended as a user message and its reply queued
    /// behind the typing delay. A submission while a reply is still
    /// pending simply queues behind it in arrival order.
    pub fn submit_chat(&mut self) {
        let text = self.chat_input.trim().to_string();
        if text.is_empty() {
            return;
        }
        self.chat_input.clear();
        self.send_utterance(text);
    }

    /// Submits one of the latest reply's suggestion chips as user input.
    pub fn submit_chip(&mut self) {
        if let Some(idx) = self.chip_cursor {
            if let Some(text) = self.latest_suggestions().get(idx).cloned() {
                self.send_utterance(text);
            }
        }
    }

    fn send_utterance(&mut self, text: String) {
        let delay = Duration::from_millis(get_config().typing_delay_ms);
        self.events.add(format!("Query submitted ({} chars)", text.len()));

        let reply = dispatch(&text);
        self.conversation.append(ChatMessage::user(text));
        self.reply_queue.schedule(reply, delay);
        self.status_indicator.set_typing(true);
        self.chip_cursor = None;
        self.chat_scroll = u16::MAX;
    }

    /// Moves chip selection through the latest reply's suggestions:
    /// None -> 0 -> 1 -> ... -> None.
    pub fn cycle_chip(&mut self) {
        let count = self.latest_suggestions().len();
        if count == 0 {
            self.chip_cursor = None;
            return;
        }
        self.chip_cursor = match self.chip_cursor {
            None => Some(0),
            Some(i) if i + 1 < count => Some(i + 1),
            Some(_) => None,
        };
    }

    /// Suggestion chips are only offered on the newest message, and only
    /// when the agent is not mid-reply.
    pub fn latest_suggestions(&self) -> &[String] {
        if self.reply_queue.is_waiting() {
            return &[];
        }
        self.conversation
            .last()
            .map_or(&[], |m| m.suggestions.as_slice())
    }

    pub fn filtered_workouts(&self) -> Vec<&'static Workout> {
        WEEKLY_WORKOUTS
            .iter()
            .filter(|w| self.training_filter.accepts(w))
            .collect()
    }

    pub fn cycle_training_filter(&mut self) {
        self.training_filter = self.training_filter.cycle();
        self.selected_workout = 0;
        self.workout_detail_open = false;
    }

    pub fn select_next_workout(&mut self) {
        let count = self.filtered_workouts().len();
        if count > 0 {
            self.selected_workout = (self.selected_workout + 1) % count;
        }
    }

    pub fn select_prev_workout(&mut self) {
        let count = self.filtered_workouts().len();
        if count > 0 {
            self.selected_workout = (self.selected_workout + count - 1) % count;
        }
    }

    pub fn scroll_chat_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_chat_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    /// Per-tick housekeeping: advance the typing animation and append any
    /// reply whose delay has elapsed.
    pub fn on_tick(&mut self, now: Instant) {
        if now.duration_since(self.last_spinner_update) >= Duration::from_millis(120) {
            self.status_indicator.advance();
            self.last_spinner_update = now;
        }

        while let Some(reply) = self.reply_queue.pop_due(now) {
            self.conversation
                .append(ChatMessage::assistant(reply.content, reply.suggestions));
            self.events.add("Agent reply appended");
            self.chat_scroll = u16::MAX;
        }
        self.status_indicator.set_typing(self.reply_queue.is_waiting());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Role;

    #[test]
    fn test_blank_input_is_rejected_before_dispatch() {
        let mut app = App::new();
        let before = app.conversation.len();

        app.chat_input = "   ".to_string();
        app.submit_chat();

        assert_eq!(app.conversation.len(), before);
        assert!(!app.reply_queue.is_waiting());
    }

    #[test]
    fn test_submit_appends_user_message_and_queues_reply() {
        let mut app = App::new();
        app.chat_input = "Ajusta mi FTP".to_string();
        app.submit_chat();

        let last = app.conversation.last().map(|m| m.role);
        assert_eq!(last, Some(Role::User));
        assert!(app.reply_queue.is_waiting());
        assert!(app.status_indicator.is_typing());
        assert!(app.chat_input.is_empty());
    }

    #[test]
    fn test_tick_delivers_due_reply() {
        let mut app = App::new();
        app.chat_input = "hola".to_string();
        app.submit_chat();

        app.on_tick(Instant::now() + Duration::from_secs(30));

        let last = app.conversation.last().expect("assistant reply");
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.suggestions.len(), 4);
        assert!(!app.status_indicator.is_typing());
    }

    #[test]
    fn test_concurrent_submissions_arrive_in_order() {
        let mut app = App::new();
        app.chat_input = "Ajusta mi FTP".to_string();
        app.submit_chat();
        app.chat_input = "hola".to_string();
        app.submit_chat();

        app.on_tick(Instant::now() + Duration::from_secs(30));

        let messages = app.conversation.messages();
        let n = messages.len();
        // greeting, user, user, ftp reply, fallback reply
        assert_eq!(n, 5);
        assert!(messages[n - 2].content.starts_with("🎯"));
        assert!(messages[n - 1].content.starts_with("Entiendo tu consulta"));
    }

    #[test]
    fn test_leaving_agent_drops_pending_replies() {
        let mut app = App::new();
        app.state = AppState::Agent;
        app.chat_input = "hola".to_string();
        app.submit_chat();

        app.set_state(AppState::Dashboard);
        app.on_tick(Instant::now() + Duration::from_secs(30));

        let last = app.conversation.last().expect("last message");
        assert_eq!(last.role, Role::User);
        assert!(!app.status_indicator.is_typing());
    }

    #[test]
    fn test_chip_cursor_cycles_back_to_none() {
        let mut app = App::new();
        // greeting offers four chips
        assert_eq!(app.latest_suggestions().len(), 4);

        app.cycle_chip();
        assert_eq!(app.chip_cursor, Some(0));
        for _ in 0..4 {
            app.cycle_chip();
        }
        assert_eq!(app.chip_cursor, None);
    }

    #[test]
    fn test_chips_hidden_while_reply_pending() {
        let mut app = App::new();
        app.chat_input = "hola".to_string();
        app.submit_chat();
        assert!(app.latest_suggestions().is_empty());
    }

    #[test]
    fn test_training_filter_narrows_list() {
        let mut app = App::new();
        assert_eq!(app.filtered_workouts().len(), 6);

        app.cycle_training_filter();
        assert!(app
            .filtered_workouts()
            .iter()
            .all(|w| w.kind == WorkoutKind::Cycling));

        app.cycle_training_filter();
        assert!(app
            .filtered_workouts()
            .iter()
            .all(|w| w.kind == WorkoutKind::Gym));
    }

    #[test]
    fn test_quit_confirm_remembers_origin() {
        let mut app = App::new();
        app.set_state(AppState::Metrics);
        app.set_state(AppState::QuitConfirm);
        assert_eq!(app.return_to, AppState::Metrics);
    }
}
