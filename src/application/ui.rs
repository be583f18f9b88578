use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::AgentName;
use crate::domain::models::Event;
use crate::domain::models::Language;
use crate::domain::models::Loading;
use crate::domain::models::Phase;
use crate::domain::models::SessionState;
use crate::domain::models::Strings;
use crate::domain::models::TextArea;
use crate::domain::models::TextDirection;
use crate::domain::models::TrainingMode;
use crate::domain::services::AppState;
use crate::domain::services::StateStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum View {
    WordEntry,
    ModeSelect,
    Training,
    Done,
}

/// The word-entry and mode-select views are both the setup phase; which one
/// shows is derived from whether any words exist yet.
fn current_view(session: &SessionState) -> View {
    match session.phase {
        Phase::Setup => {
            if session.mode_select_visible() {
                return View::ModeSelect;
            }
            return View::WordEntry;
        }
        Phase::Training => return View::Training,
        Phase::Done => return View::Done,
    }
}

fn has_text_input(view: View) -> bool {
    return view == View::WordEntry || view == View::Training;
}

fn textarea_title(view: View, strings: &'static Strings) -> &'static str {
    match view {
        View::WordEntry => return strings.btn_send_words,
        View::Training => return strings.btn_send,
        _ => return "",
    }
}

fn body_alignment(direction: TextDirection) -> Alignment {
    if direction == TextDirection::Rtl {
        return Alignment::Right;
    }

    return Alignment::Left;
}

fn render_header<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let strings = app_state.strings();
    let mut header = format!(
        "{title} | {lang} | {count} {words_label}",
        title = strings.app_title,
        lang = strings.lang_name,
        count = app_state.session.words.len(),
        words_label = strings.word_count
    );

    if Config::get(ConfigKey::Agent) == AgentName::Mock.to_string() {
        header = format!("{header} | {}", strings.mock_mode);
    }

    frame.render_widget(
        Paragraph::new(header).style(Style::default().add_modifier(Modifier::BOLD)),
        rect,
    );
}

fn render_banner<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    if let Some(banner) = &app_state.error_banner {
        frame.render_widget(
            Paragraph::new(banner.to_string()).style(Style::default().fg(Color::Red)),
            rect,
        );
    }
}

fn render_body<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &mut AppState, view: View) {
    let strings = app_state.strings();
    let direction = app_state.session.language.direction();
    let alignment = body_alignment(direction);

    match view {
        View::WordEntry => {
            let lines = vec![
                Line::from(Span::styled(
                    strings.paste_words_title.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(strings.paste_words_helper.to_string()),
                Line::from(" ".to_string()),
                Line::from(Span::styled(
                    strings.no_words_yet.to_string(),
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ];
            frame.render_widget(Paragraph::new(lines).alignment(alignment), rect);
        }
        View::ModeSelect => {
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("{}:", strings.learned_words),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(app_state.session.words.join(", ")),
                Line::from(" ".to_string()),
            ];
            if let Some(notice) = &app_state.setup_notice {
                lines.push(Line::from(Span::styled(
                    notice.to_string(),
                    Style::default().fg(Color::Green),
                )));
                lines.push(Line::from(" ".to_string()));
            }
            lines.push(Line::from(Span::styled(
                strings.start_training_title.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            frame.render_widget(Paragraph::new(lines).alignment(alignment), rect);
        }
        View::Training | View::Done => {
            app_state
                .transcript
                .render(frame, rect, &app_state.messages, direction);
        }
    }
}

fn render_hints<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState, view: View) {
    let strings = app_state.strings();

    let lines = match view {
        View::ModeSelect => vec![
            Line::from(strings.choose_direction.to_string()),
            Line::from(format!(
                "(1) English -> {lang}  (2) {lang} -> English  (c) clear words",
                lang = strings.lang_name
            )),
        ],
        View::Done => vec![
            Line::from(format!(
                "{} {}",
                strings.session_complete, strings.what_next
            )),
            Line::from(format!(
                "(f) {}  (t) {}  (c) clear words",
                strings.btn_get_feedback, strings.btn_train_again
            )),
        ],
        _ => vec![],
    };

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .padding(Padding::new(1, 1, 0, 0)),
        ),
        rect,
    );
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: &mut mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut last_view = current_view(&app_state.session);
    let mut last_language = app_state.session.language;
    let mut textarea = TextArea::new(textarea_title(last_view, app_state.strings()));
    let loading = Loading::default();

    #[cfg(feature = "dev")]
    {
        let test_str = "apple, run, beautiful";
        for char in test_str.chars() {
            textarea.input(Input {
                key: Key::Char(char),
                ctrl: false,
                alt: false,
            });
        }
    }

    loop {
        let view = current_view(&app_state.session);
        let language = app_state.session.language;
        if view != last_view || language != last_language {
            textarea = TextArea::new(textarea_title(view, app_state.strings()));
            last_view = view;
            last_language = language;
        }

        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Max(4),
                ])
                .split(frame.size());

            render_header(frame, layout[0], app_state);
            render_banner(frame, layout[1], app_state);
            render_body(frame, layout[2], app_state, view);

            if app_state.waiting_for_agent {
                loading.render(frame, layout[3], app_state.strings().label_loading);
            } else if has_text_input(view) {
                frame.render_widget(textarea.widget(), layout[3]);
            } else {
                render_hints(frame, layout[3], app_state, view);
            }
        })?;

        if app_state.waiting_for_agent {
            match rx.recv().await {
                Some(Event::AgentReply(action, response)) => {
                    app_state.handle_agent_reply(action, response);
                }
                Some(Event::AgentFailure(err)) => {
                    app_state.handle_agent_failure(err);
                }
                None => break,
            }

            continue;
        }

        match crossterm::event::read()?.into() {
            Input {
                key: Key::Char('c'),
                ctrl: true,
                ..
            } => {
                break;
            }
            Input { key: Key::Up, .. } => {
                app_state.transcript.up();
            }
            Input { key: Key::Down, .. } => {
                app_state.transcript.down();
            }
            Input {
                key: Key::Char('u'),
                ctrl: true,
                ..
            } => {
                app_state.transcript.up_page();
            }
            Input {
                key: Key::Char('d'),
                ctrl: true,
                ..
            } => {
                app_state.transcript.down_page();
            }
            Input {
                key: Key::Char('l'),
                ctrl: true,
                ..
            } => {
                app_state.cycle_language();
            }
            Input {
                key: Key::Char('n'),
                ctrl: true,
                ..
            } => {
                app_state.clear_words();
            }
            input => match view {
                View::WordEntry => match input {
                    Input {
                        key: Key::Enter,
                        alt: true,
                        ..
                    } => {
                        textarea.insert_newline();
                    }
                    Input {
                        key: Key::Enter, ..
                    } => {
                        let input_str = textarea.lines().join("\n");
                        if let Some(action) = app_state.submit_words(&input_str) {
                            tx.send(action)?;
                            textarea = TextArea::new(textarea_title(view, app_state.strings()));
                        }
                    }
                    input => {
                        textarea.input(input);
                    }
                },
                View::ModeSelect => match input {
                    Input {
                        key: Key::Char('1'),
                        ..
                    } => {
                        if let Some(action) = app_state.start_training(TrainingMode::Forward) {
                            tx.send(action)?;
                        }
                    }
                    Input {
                        key: Key::Char('2'),
                        ..
                    } => {
                        if let Some(action) = app_state.start_training(TrainingMode::Reverse) {
                            tx.send(action)?;
                        }
                    }
                    Input {
                        key: Key::Char('c'),
                        ..
                    } => {
                        app_state.clear_words();
                    }
                    _ => (),
                },
                View::Training => match input {
                    Input {
                        key: Key::Enter, ..
                    } => {
                        let input_str = textarea.lines().join("\n");
                        if let Some(action) = app_state.submit_answer(&input_str) {
                            tx.send(action)?;
                            textarea = TextArea::new(textarea_title(view, app_state.strings()));
                        }
                    }
                    input => {
                        textarea.input(input);
                    }
                },
                View::Done => match input {
                    Input {
                        key: Key::Char('f'),
                        ..
                    } => {
                        if let Some(action) = app_state.request_feedback() {
                            tx.send(action)?;
                        }
                    }
                    Input {
                        key: Key::Char('t'),
                        ..
                    } => {
                        app_state.train_again();
                    }
                    Input {
                        key: Key::Char('c'),
                        ..
                    } => {
                        app_state.clear_words();
                    }
                    _ => (),
                },
            },
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: &mut mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let agent_name = Config::get(ConfigKey::Agent).parse::<AgentName>()?;
    let language = Config::get(ConfigKey::Language).parse::<Language>()?;
    let mut app_state = AppState::init(StateStore::default(), agent_name, language).await;

    start_loop(&mut terminal, &mut app_state, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
