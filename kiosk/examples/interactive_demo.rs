//! Interactive Demo - TUI ordering kiosk
//!
//! Run: cargo run --example interactive_demo
//!
//! Browse the menu, build a cart, pay, and watch the simulated delivery
//! timeline advance. Keys are listed in the footer.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use kiosk::{
    CheckoutState, Config, KioskCommand, KioskCommandPayload, KioskEvent, KioskManager,
    MenuCatalog, MenuFilter, PaymentInput, PaymentMethod,
};
use ratatui::{prelude::*, widgets::*};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::broadcast;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiLoggerWidget, TuiWidgetEvent, TuiWidgetState};

const PAYMENT_METHODS: [PaymentMethod; 3] = [
    PaymentMethod::Cash,
    PaymentMethod::Card,
    PaymentMethod::Transfer,
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    #[default]
    Normal,
    /// Typing into the card-number field
    Editing,
}

struct App {
    kiosk: KioskManager,
    events: broadcast::Receiver<KioskEvent>,
    /// Menu category filter
    filter: MenuFilter,
    /// Selected row in the filtered menu
    menu_cursor: usize,
    /// Selected payment method index
    method_cursor: usize,
    /// Card number field state
    card_input: Input,
    input_mode: InputMode,
    /// Logger widget state
    logger_state: TuiWidgetState,
}

impl App {
    fn new(kiosk: KioskManager) -> Self {
        let events = kiosk.subscribe();
        Self {
            kiosk,
            events,
            filter: MenuFilter::All,
            menu_cursor: 0,
            method_cursor: 0,
            card_input: Input::default(),
            input_mode: InputMode::default(),
            logger_state: TuiWidgetState::new(),
        }
    }

    fn execute(&self, payload: KioskCommandPayload) {
        // Rejections surface in the log pane via the manager's own warning
        let _ = self.kiosk.execute(KioskCommand::new(payload));
    }

    fn selected_item_id(&self) -> Option<i64> {
        let catalog = self.kiosk.catalog();
        let filtered = catalog.filtered(self.filter);
        filtered.get(self.menu_cursor).map(|item| item.id)
    }

    fn cycle_filter(&mut self) {
        self.filter = match self.filter {
            MenuFilter::All => MenuFilter::Quick,
            MenuFilter::Quick => MenuFilter::SetMenu,
            MenuFilter::SetMenu => MenuFilter::All,
        };
        self.menu_cursor = 0;
    }

    fn submit_payment(&mut self) {
        let payment = match PAYMENT_METHODS[self.method_cursor] {
            PaymentMethod::Cash => PaymentInput::cash(),
            PaymentMethod::Card => PaymentInput::card(self.card_input.value()),
            PaymentMethod::Transfer => PaymentInput::transfer(),
        };
        self.execute(KioskCommandPayload::SubmitPayment { payment });
        self.input_mode = InputMode::Normal;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Route tracing into the TUI log pane
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    // Keep demo data out of /var/lib
    let config = if std::env::var("WORK_DIR").is_ok() {
        Config::from_env()
    } else {
        Config::with_work_dir("./temp_interactive_demo")
    };
    let kiosk = KioskManager::new(MenuCatalog::default_menu(), config)?;
    tracing::info!("Kiosk ready - add items with Enter, checkout with 'c'");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(kiosk);
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    app.kiosk.shutdown();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        // Drain engine events into the log pane; rendering reads the query
        // surface directly each frame
        while let Ok(event) = app.events.try_recv() {
            tracing::info!("event: {:?}", event.payload);
        }

        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    continue;
                }
                match app.input_mode {
                    InputMode::Normal => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Tab => app.cycle_filter(),
                        KeyCode::Up => app.menu_cursor = app.menu_cursor.saturating_sub(1),
                        KeyCode::Down => {
                            let visible = app.kiosk.catalog().filtered(app.filter).len();
                            app.menu_cursor = (app.menu_cursor + 1).min(visible.saturating_sub(1));
                        }
                        KeyCode::Enter => {
                            if app.kiosk.checkout_state() == CheckoutState::AwaitingMethod {
                                app.submit_payment();
                            } else if let Some(item_id) = app.selected_item_id() {
                                app.execute(KioskCommandPayload::AddItem { item_id });
                            }
                        }
                        KeyCode::Char('d') => {
                            if let Some(item_id) = app.selected_item_id() {
                                app.execute(KioskCommandPayload::RemoveItem { item_id });
                            }
                        }
                        KeyCode::Char('+') => {
                            if let Some(item_id) = app.selected_item_id() {
                                app.execute(KioskCommandPayload::ChangeQuantity {
                                    item_id,
                                    delta: 1,
                                });
                            }
                        }
                        KeyCode::Char('-') => {
                            if let Some(item_id) = app.selected_item_id() {
                                app.execute(KioskCommandPayload::ChangeQuantity {
                                    item_id,
                                    delta: -1,
                                });
                            }
                        }
                        KeyCode::Char('c') => app.execute(KioskCommandPayload::BeginCheckout),
                        KeyCode::Char('x') => app.execute(KioskCommandPayload::DismissOrder),
                        KeyCode::Left => app.method_cursor = app.method_cursor.saturating_sub(1),
                        KeyCode::Right => {
                            app.method_cursor = (app.method_cursor + 1).min(PAYMENT_METHODS.len() - 1)
                        }
                        KeyCode::Char('e') => {
                            if app.kiosk.checkout_state() == CheckoutState::AwaitingMethod
                                && PAYMENT_METHODS[app.method_cursor] == PaymentMethod::Card
                            {
                                app.input_mode = InputMode::Editing;
                            }
                        }
                        KeyCode::Esc => {
                            if app.kiosk.checkout_state() == CheckoutState::AwaitingMethod {
                                app.execute(KioskCommandPayload::CancelCheckout);
                            }
                        }
                        KeyCode::PageUp => app.logger_state.transition(TuiWidgetEvent::PrevPageKey),
                        KeyCode::PageDown => {
                            app.logger_state.transition(TuiWidgetEvent::NextPageKey)
                        }
                        _ => {}
                    },
                    InputMode::Editing => match key.code {
                        KeyCode::Enter => app.submit_payment(),
                        KeyCode::Esc => app.input_mode = InputMode::Normal,
                        _ => {
                            app.card_input.handle_event(&Event::Key(key));
                        }
                    },
                }
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(8),
        Constraint::Length(1),
    ])
    .split(f.area());

    // Header
    let header = Paragraph::new(Line::from(vec![
        Span::styled("Menu Fast", Style::new().fg(Color::Yellow).bold()),
        Span::raw("  ordering kiosk  "),
        Span::styled(
            format!("filter: {:?}", app.filter),
            Style::new().fg(Color::Cyan),
        ),
    ]))
    .block(Block::bordered());
    f.render_widget(header, chunks[0]);

    let body = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_menu(f, app, body[0]);

    let right = Layout::vertical([Constraint::Min(5), Constraint::Length(7)]).split(body[1]);
    render_cart(f, app, right[0]);
    render_checkout(f, app, right[1]);

    // Logs
    let logs = TuiLoggerWidget::default()
        .block(Block::bordered().title("Logs"))
        .style_error(Style::new().fg(Color::Red))
        .style_warn(Style::new().fg(Color::Yellow))
        .style_info(Style::new().fg(Color::Green))
        .state(&app.logger_state);
    f.render_widget(logs, chunks[2]);

    // Footer
    let help = match app.input_mode {
        InputMode::Normal => {
            "Enter add/pay | d remove | +/- qty | Tab filter | c checkout | \u{2190}\u{2192} method | e card no. | Esc cancel | x dismiss | q quit"
        }
        InputMode::Editing => "typing card number - Enter submit | Esc back",
    };
    f.render_widget(
        Paragraph::new(help).style(Style::new().fg(Color::DarkGray)),
        chunks[3],
    );
}

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .kiosk
        .catalog()
        .filtered(app.filter)
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let marker = if i == app.menu_cursor { "> " } else { "  " };
            ListItem::new(format!(
                "{}{}  {:.2}  [{}]",
                marker, item.name, item.price, item.category
            ))
        })
        .collect();
    let menu = List::new(items).block(Block::bordered().title("Menu"));
    f.render_widget(menu, area);
}

fn render_cart(f: &mut Frame, app: &App, area: Rect) {
    let lines = app.kiosk.cart_lines();
    let title = format!("Cart ({})", lines.len());

    if lines.is_empty() {
        let empty = Paragraph::new("No items in the cart")
            .style(Style::new().fg(Color::DarkGray))
            .block(Block::bordered().title(title));
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = lines
        .iter()
        .map(|line| {
            Row::new(vec![
                line.name.clone(),
                line.quantity.to_string(),
                format!("{:.2}", kiosk::money::line_total(line.price, line.quantity)),
            ])
        })
        .collect();
    let widths = [
        Constraint::Percentage(60),
        Constraint::Percentage(15),
        Constraint::Percentage(25),
    ];
    let table = Table::new(rows, widths)
        .header(Row::new(vec!["Item", "Qty", "Total"]).style(Style::new().bold()))
        .footer(
            Row::new(vec![
                "Total".to_string(),
                String::new(),
                format!("{:.2}", app.kiosk.cart_total()),
            ])
            .style(Style::new().fg(Color::Yellow).bold()),
        )
        .block(Block::bordered().title(title));
    f.render_widget(table, area);
}

fn render_checkout(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    match app.kiosk.checkout_state() {
        CheckoutState::Idle => {
            lines.push(Line::raw("Press 'c' to checkout"));
        }
        CheckoutState::AwaitingMethod => {
            let methods: Vec<Span> = PAYMENT_METHODS
                .iter()
                .enumerate()
                .flat_map(|(i, method)| {
                    let style = if i == app.method_cursor {
                        Style::new().fg(Color::Black).bg(Color::Yellow)
                    } else {
                        Style::new()
                    };
                    [
                        Span::styled(format!(" {} ", method), style),
                        Span::raw("  "),
                    ]
                })
                .collect();
            lines.push(Line::from(methods));
            if PAYMENT_METHODS[app.method_cursor] == PaymentMethod::Card {
                let cursor = if app.input_mode == InputMode::Editing {
                    "_"
                } else {
                    ""
                };
                lines.push(Line::raw(format!(
                    "Card number: {}{}",
                    app.card_input.value(),
                    cursor
                )));
            }
            lines.push(Line::raw("Enter to pay, Esc to cancel"));
        }
        CheckoutState::Processing { method } => {
            lines.push(Line::styled(
                format!("Processing {} payment...", method),
                Style::new().fg(Color::Yellow),
            ));
        }
        CheckoutState::Confirmed => {
            lines.push(Line::styled(
                "Payment confirmed!",
                Style::new().fg(Color::Green).bold(),
            ));
        }
    }

    if let Some(order) = app.kiosk.current_order() {
        lines.push(Line::from(vec![
            Span::raw(format!("Order {}  ", order.order_id)),
            Span::styled(order.status.to_string(), Style::new().fg(Color::Cyan).bold()),
            Span::raw(format!("  total {:.2}  ('x' dismiss)", order.total)),
        ]));
    }

    let panel = Paragraph::new(lines).block(Block::bordered().title("Checkout"));
    f.render_widget(panel, area);
}
