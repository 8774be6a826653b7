use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;

use crate::{
    client::Client,
    config::AppConfig,
    controller::{self, Command, Field, Mode, Outcome, ViewState},
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form(Field),
    List,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Form(Field::Name) => Self::Form(Field::Description),
            Self::Form(Field::Description) => Self::List,
            Self::List => Self::Form(Field::Name),
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Form(Field::Name) => Self::List,
            Self::Form(Field::Description) => Self::Form(Field::Name),
            Self::List => Self::Form(Field::Description),
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Quit,
    Send(Command),
    Stay,
}

#[derive(Debug)]
pub struct AppState {
    pub view: ViewState,
    pub focus: Focus,
    pub selected: usize,
    pub in_flight: usize,
    pub last_load: Option<DateTime<Local>>,
    pub endpoint: String,
}

impl AppState {
    pub fn new(endpoint: String) -> Self {
        Self {
            view: ViewState::default(),
            focus: Focus::Form(Field::Name),
            selected: 0,
            in_flight: 0,
            last_load: None,
            endpoint,
        }
    }

    pub fn editing(&self) -> bool {
        matches!(self.view.mode, Mode::Update(_))
    }

    pub fn on_action(&mut self, action: AppAction) -> Step {
        match (self.focus, action) {
            (_, AppAction::Quit) => Step::Quit,
            (_, AppAction::NextField) => {
                self.focus = self.focus.next();
                Step::Stay
            }
            (_, AppAction::PrevField) => {
                self.focus = self.focus.prev();
                Step::Stay
            }
            (_, AppAction::Cancel) if self.editing() => Step::Send(Command::CancelEdit),
            (Focus::Form(field), AppAction::Input(ch)) => {
                let mut value = self.view.field(field).to_string();
                value.push(ch);
                Step::Send(Command::EditField(field, value))
            }
            (Focus::Form(field), AppAction::Backspace) => {
                let mut value = self.view.field(field).to_string();
                if value.pop().is_none() {
                    return Step::Stay;
                }
                Step::Send(Command::EditField(field, value))
            }
            (Focus::Form(_), AppAction::Submit) => Step::Send(Command::Submit),
            (Focus::List, AppAction::Up | AppAction::Input('k')) => {
                self.selected = self.selected.saturating_sub(1);
                Step::Stay
            }
            (Focus::List, AppAction::Down | AppAction::Input('j')) => {
                if self.selected + 1 < self.view.items.len() {
                    self.selected += 1;
                }
                Step::Stay
            }
            (Focus::List, AppAction::Input('q')) => Step::Quit,
            (Focus::List, AppAction::Input('e') | AppAction::Submit) => {
                match self.view.items.get(self.selected) {
                    Some(item) => {
                        let item = item.clone();
                        self.focus = Focus::Form(Field::Name);
                        Step::Send(Command::BeginEdit(item))
                    }
                    None => Step::Stay,
                }
            }
            (Focus::List, AppAction::Input('d') | AppAction::Delete) => {
                match self.view.items.get(self.selected) {
                    Some(item) => Step::Send(Command::DeleteItem(item.id.clone())),
                    None => Step::Stay,
                }
            }
            (Focus::List, AppAction::Input('a')) => {
                self.focus = Focus::Form(Field::Name);
                if self.editing() {
                    Step::Send(Command::CancelEdit)
                } else {
                    Step::Stay
                }
            }
            _ => Step::Stay,
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.view.items.len().saturating_sub(1));
    }
}

pub struct App {
    client: Client,
    pub state: AppState,
    outcomes: mpsc::UnboundedSender<Outcome>,
    completions: mpsc::UnboundedReceiver<Outcome>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url, &config.collection)?;
        let state = AppState::new(client.endpoint().to_string());
        let (outcomes, completions) = mpsc::unbounded_channel();

        Ok(Self {
            client,
            state,
            outcomes,
            completions,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        self.send(Command::Initialize);
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(50);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
                continue;
            }

            tokio::select! {
                Some(outcome) = self.completions.recv() => self.complete(outcome),
                _ = tokio::time::sleep(tick_rate) => {}
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.state.on_action(map_key(key)) {
            Step::Quit => self.should_quit = true,
            Step::Send(command) => self.send(command),
            Step::Stay => {}
        }
    }

    /// Applies the local part of `command` and starts its request, if any.
    ///
    /// Requests run on their own task so the interface keeps accepting
    /// input; their outcomes are applied in completion order.
    fn send(&mut self, command: Command) {
        let view = std::mem::take(&mut self.state.view);
        let (view, request) = controller::dispatch(view, command);
        self.state.view = view;

        let Some(request) = request else {
            return;
        };

        tracing::debug!("sending {request:?}");
        self.state.in_flight += 1;
        let client = self.client.clone();
        let outcomes = self.outcomes.clone();
        tokio::spawn(async move {
            let outcome = controller::execute(&client, request).await;
            if outcomes.send(outcome).is_err() {
                tracing::debug!("event loop closed, dropping outcome");
            }
        });
    }

    fn complete(&mut self, outcome: Outcome) {
        self.state.in_flight = self.state.in_flight.saturating_sub(1);
        if matches!(outcome, Outcome::Listed(Ok(_))) {
            self.state.last_load = Some(Local::now());
        }

        let view = std::mem::take(&mut self.state.view);
        self.state.view = controller::apply(view, outcome);
        self.state.clamp_selection();
    }
}
