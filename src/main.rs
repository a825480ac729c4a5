use std::{
    cmp::min,
    error::Error,
    io::{self, Stdout},
    time::Duration,
};

use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::{Alignment, Constraint, CrosstermBackend, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Terminal,
};

use crate::model::Snapshot;
use crate::store::TaskStore;

mod model;
mod store;

enum AppState {
    Input,
    Browse,
}

struct State {
    pub store: TaskStore,
    pub state: AppState,
    pub task_list_state: ListState,
}

fn main() -> Result<(), Box<dyn Error>> {
    let state = State {
        store: TaskStore::new(),
        state: AppState::Input,
        task_list_state: ListState::default(),
    };
    let mut terminal = setup_terminal()?;
    run(&mut terminal, state)?;
    restore_terminal(&mut terminal)?;
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, Box<dyn Error>> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result<(), Box<dyn Error>> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    Ok(terminal.show_cursor()?)
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut state: State,
) -> Result<(), Box<dyn Error>> {
    Ok(loop {
        let snapshot = state.store.snapshot();
        draw(terminal, &snapshot, &mut state);

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                match state.state {
                    AppState::Input => match key.code {
                        KeyCode::Char(c) => {
                            let text = format!("{}{}", state.store.pending_input(), c);
                            state.store.set_pending_input(text);
                        }
                        KeyCode::Backspace => {
                            let mut text = state.store.pending_input().to_string();
                            text.pop();
                            state.store.set_pending_input(text);
                        }
                        KeyCode::Enter => {
                            state.store.add_task();
                        }
                        KeyCode::Esc => {
                            state.state = AppState::Browse;
                            if state.task_list_state.selected().is_none()
                                && !state.store.tasks().is_empty()
                            {
                                state.task_list_state.select(Some(0));
                            }
                        }
                        _ => {}
                    },
                    AppState::Browse => match key.code {
                        KeyCode::Char('q') => {
                            break;
                        }
                        KeyCode::Char('i') | KeyCode::Esc => {
                            state.state = AppState::Input;
                        }
                        KeyCode::Char('j') | KeyCode::Down => {
                            tasks_move_down(&mut state);
                        }
                        KeyCode::Char('k') | KeyCode::Up => {
                            tasks_move_up(&mut state);
                        }
                        KeyCode::Char(' ') | KeyCode::Enter => {
                            toggle_selected(&mut state);
                        }
                        _ => {}
                    },
                }
            }
        }
    })
}

fn toggle_selected(state: &mut State) {
    match state.task_list_state.selected() {
        Some(task_index) => {
            let id = state.store.tasks().get(task_index).map(|task| task.id);
            if let Some(id) = id {
                state.store.toggle_task(id);
            }
        }
        None => {}
    }
}

fn tasks_move_up(state: &mut State) {
    match state.task_list_state.selected() {
        Some(v) => {
            let max = match v {
                0 => None,
                v => Some(v - 1),
            };
            state.task_list_state.select(max);
        }
        None => {
            state.task_list_state.select(Some(0));
        }
    }
}

fn tasks_move_down(state: &mut State) {
    if state.store.tasks().is_empty() {
        return;
    }
    match state.task_list_state.selected() {
        Some(v) => {
            state
                .task_list_state
                .select(Some(min(v + 1, state.store.tasks().len() - 1)));
        }
        None => {
            state.task_list_state.select(Some(0));
        }
    }
}

fn draw(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    snapshot: &Snapshot,
    state: &mut State,
) {
    let task_items: Vec<_> = snapshot
        .tasks
        .iter()
        .map(|task| {
            let marker = match task.done {
                true => "[x]",
                false => "[ ]",
            };
            let style = match task.done {
                true => Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
                false => Style::default(),
            };
            ListItem::new(Line::from(Span::styled(
                format!("{} {}", marker, task.text),
                style,
            )))
        })
        .collect();

    let task_list_ui = List::new(task_items)
        .block(Block::default().title("Tasks").borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().add_modifier(Modifier::ITALIC))
        .highlight_symbol(">>");

    let input_style = match state.state {
        AppState::Input => Style::default().fg(Color::Yellow),
        AppState::Browse => Style::default(),
    };
    let input_ui = Paragraph::new(snapshot.pending_input.clone()).block(
        Block::default()
            .title("New task")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(input_style),
    );

    let counter_ui = Paragraph::new(format!(
        "Total: {}  Completed: {}",
        snapshot.summary.total, snapshot.summary.completed
    ));

    let help = match state.state {
        AppState::Input => "Type a task, (Enter) add, (Esc) browse the list",
        AppState::Browse => "(j/k) move, (space) toggle done, (i) type, (q) quit",
    };
    let help_ui = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));

    let empty_ui = Paragraph::new("No tasks yet. Type one and press Enter.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    terminal
        .draw(|frame| {
            let size = frame.size();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints(
                    [
                        Constraint::Length(2),
                        Constraint::Length(3),
                        Constraint::Length(1),
                        Constraint::Min(3),
                        Constraint::Length(1),
                    ]
                    .as_ref(),
                )
                .split(size);

            frame.render_widget(
                Paragraph::new("quicktasks")
                    .style(Style::default().add_modifier(Modifier::BOLD))
                    .alignment(Alignment::Center),
                chunks[0],
            );
            frame.render_widget(input_ui, chunks[1]);
            frame.render_widget(counter_ui, chunks[2]);
            match snapshot.tasks.is_empty() {
                true => frame.render_widget(empty_ui, chunks[3]),
                false => frame.render_stateful_widget(
                    task_list_ui,
                    chunks[3],
                    &mut state.task_list_state,
                ),
            }
            frame.render_widget(help_ui, chunks[4]);
        })
        .ok();
}
