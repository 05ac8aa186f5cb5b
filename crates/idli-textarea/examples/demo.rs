use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use idli_textarea::IdliTextArea;
use idli_textarea::TuiTextArea;
use idli_textarea::crossterm_input::input_event_from_crossterm;
use idli_textarea::props::Size;
use idli_textarea::props::Variant;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::style::Style;
use ratatui::text::Span;
use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// Logs go to a file; the terminal belongs to the UI.
fn init_tracing() -> io::Result<()> {
    let file = File::create("idli-textarea-demo.log")?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)
}

fn main() -> io::Result<()> {
    init_tracing()?;

    let mut component = IdliTextArea::new();
    component.set_label("Notes");
    component.set_placeholder("Type something...");
    component.set_size(Some(Size::Md));
    component.set_variant(Some(Variant::Dashed));

    let status = Rc::new(RefCell::new(String::from("no edits yet")));
    let sink = Rc::clone(&status);
    component.on_input_change(move |e| {
        *sink.borrow_mut() = format!(
            "inputChange: {} -> {} chars",
            e.old_value.as_deref().map_or(0, |v| v.chars().count()),
            e.new_value.chars().count()
        );
    });

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut host = TuiTextArea::new(component);
    let res = run(&mut terminal, &mut host, &status);

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    host: &mut TuiTextArea,
    status: &Rc<RefCell<String>>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| {
            let [main, footer] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .areas(f.area());

            host.render_ref(main, f.buffer_mut());
            if let Some((x, y)) = host.cursor_pos(main) {
                f.set_cursor_position((x, y));
            }

            let line = format!(
                "{}  |  ctrl-d disable  ctrl-l inline  ctrl-q quit",
                status.borrow()
            );
            f.buffer_mut()
                .set_span(footer.x, footer.y, &Span::styled(line, Style::default()), footer.width);
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let ev = crossterm::event::read()?;
        if let Event::Key(key) = &ev {
            if key.kind == KeyEventKind::Press && key.modifiers.contains(KeyModifiers::CONTROL) {
                let props = host.component_mut().props_mut();
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('d') => {
                        props.disabled = !props.disabled;
                        continue;
                    }
                    KeyCode::Char('l') => {
                        props.inline = !props.inline;
                        continue;
                    }
                    _ => {}
                }
            }
        }

        if let Some(input) = input_event_from_crossterm(ev) {
            host.input(input);
        }
    }
}
