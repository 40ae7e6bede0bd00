use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use lexiquiz::app::{App, AppScreen};
use lexiquiz::config::Config;
use lexiquiz::event::{AppEvent, EventHandler};
use lexiquiz::session::question::Question;
use lexiquiz::session::snapshot::QuizPhase;
use lexiquiz::ui::components::progress_bar::ProgressBar;
use lexiquiz::ui::components::question_card::QuestionCard;
use lexiquiz::ui::components::reveal_panel::RevealPanel;
use lexiquiz::ui::components::summary::SummaryDashboard;
use lexiquiz::ui::layout::{QuizLayout, centered_rect, pack_hint_lines};
use lexiquiz::ui::theme::Theme;
use lexiquiz::{dataset, logging};

#[derive(Parser)]
#[command(name = "lexiquiz", version, about = "Timed multiple-choice vocabulary quiz")]
struct Cli {
    #[arg(help = "Vocabulary JSON file ({\"vocabulary\": [...]}); the bundled sample if omitted")]
    dataset: Option<PathBuf>,

    #[arg(short, long, help = "Answer time multiplier: 1, 2 or 3 (x5 seconds)")]
    speed: Option<u8>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Shuffle question order")]
    shuffle: bool,

    #[arg(long, help = "Ignore the last dataset remembered in the config")]
    sample: bool,

    #[arg(long, help = "Print the available theme names and exit")]
    list_themes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        for name in Theme::available_themes() {
            println!("{name}");
        }
        return Ok(());
    }

    if let Err(err) = logging::init() {
        eprintln!("lexiquiz: logging disabled ({err:#})");
    }

    let mut saved = Config::load().unwrap_or_else(|err| {
        tracing::warn!("config unreadable, using defaults: {err:#}");
        Config::default()
    });
    let mut config = saved.clone();
    if let Some(speed) = cli.speed {
        config.speed_level = speed;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if cli.shuffle {
        config.shuffle_questions = true;
    }
    config.normalize();

    let dataset_path = cli
        .dataset
        .or_else(|| (!cli.sample).then(|| config.last_dataset.clone()).flatten());
    let (mut questions, label) = load_questions(dataset_path.as_ref())?;
    if dataset_path.is_some() {
        config.last_dataset = dataset_path;
    }
    if config.shuffle_questions {
        dataset::shuffle_questions(&mut questions, &mut SmallRng::from_entropy());
    }

    let mut app = App::new(config, questions, label);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(app.config.tick_ms));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    saved.remember_session(&app.config);
    if let Err(err) = saved.save() {
        tracing::warn!("could not save config: {err:#}");
    }

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn load_questions(path: Option<&PathBuf>) -> Result<(Vec<Question>, String)> {
    match path {
        Some(path) => {
            let questions = dataset::load_file(path)
                .with_context(|| format!("could not load vocabulary from {}", path.display()))?;
            let label = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            Ok((questions, label))
        }
        None => Ok((dataset::bundled(), "sample".to_string())),
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick | AppEvent::Resize => {}
        }
        app.on_tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.screen {
        AppScreen::Quiz => handle_quiz_key(app, key),
        AppScreen::Summary => handle_summary_key(app, key),
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char(ch @ '1'..='9') => {
            let index = ch as usize - '1' as usize;
            app.select_option(index);
        }
        KeyCode::Enter | KeyCode::Char('n') => app.advance(),
        KeyCode::Char('p') | KeyCode::Char(' ') => app.toggle_pause(Instant::now()),
        KeyCode::Char('s') => app.cycle_speed(),
        KeyCode::Char('r') => app.restart(Instant::now()),
        _ => {}
    }
}

fn handle_summary_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') | KeyCode::Enter => app.restart(Instant::now()),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Quiz => render_quiz(frame, app),
        AppScreen::Summary => render_summary(frame, app),
    }
}

fn render_quiz(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let snapshot = &app.snapshot;
    let layout = QuizLayout::new(area);

    let pause_text = if snapshot.is_paused { " | PAUSED" } else { "" };
    let header_info = format!(
        " {} | Score {}/{} | {:.0}% done | Speed {}x{}",
        app.source_label,
        snapshot.score,
        snapshot.question_count,
        snapshot.progress() * 100.0,
        snapshot.speed_level,
        pause_text,
    );
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " lexiquiz ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            &*header_info,
            Style::default()
                .fg(if snapshot.is_paused {
                    colors.warning()
                } else {
                    colors.text_muted()
                })
                .bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    let revealing = snapshot.phase == QuizPhase::Revealing;
    match (revealing, layout.reveal) {
        (true, None) => {
            frame.render_widget(RevealPanel::new(snapshot, &app.theme), layout.card);
        }
        (_, reveal_area) => {
            frame.render_widget(QuestionCard::new(snapshot, &app.theme), layout.card);
            if let (true, Some(reveal_area)) = (revealing, reveal_area) {
                frame.render_widget(RevealPanel::new(snapshot, &app.theme), reveal_area);
            }
        }
    }

    let bar = match snapshot.remaining_ms {
        Some(ms) => ProgressBar::new("Time", snapshot.countdown_ratio, &app.theme)
            .caption(format!("{:.1}s", ms as f64 / 1000.0))
            .warn_when_low(),
        None => {
            let ms = snapshot.reveal_remaining_ms.unwrap_or(0);
            ProgressBar::new("Next question", snapshot.reveal_ratio(), &app.theme)
                .caption(format!("{:.1}s", ms as f64 / 1000.0))
        }
    };
    frame.render_widget(bar, layout.countdown);

    let hints = if revealing {
        vec!["[Enter] Next", "[p] Pause", "[s] Speed", "[r] Restart", "[q] Quit"]
    } else {
        vec!["[1-9] Answer", "[Enter] Skip", "[p] Pause", "[s] Speed", "[q] Quit"]
    };
    let hint_line = pack_hint_lines(&hints, layout.footer.width as usize)
        .into_iter()
        .next()
        .unwrap_or_default();
    let footer = Paragraph::new(Line::from(Span::styled(
        hint_line,
        Style::default().fg(colors.text_muted()),
    )));
    frame.render_widget(footer, layout.footer);
}

fn render_summary(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();

    let Some(ref summary) = app.summary else {
        return;
    };
    let centered = centered_rect(60, 70, area);
    frame.render_widget(SummaryDashboard::new(summary, &app.theme), centered);
}
