use crate::app::App;
use banatro_core::{OfferItem, Phase, Suit};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Color, Line, Modifier, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(10),
            Constraint::Length(10),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(root[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Min(6)])
        .split(middle[1]);

    draw_hand(frame, middle[0], app);
    draw_shop(frame, right[0], app);
    draw_jokers(frame, right[1], app);
    draw_events(frame, root[2], app);

    if app.show_deck {
        draw_deck_popup(frame, app);
    }
    if app.session.phase == Phase::GameOver {
        draw_game_over_popup(frame, app);
    }
    if app.show_help {
        draw_help_popup(frame);
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Playing => "playing",
        Phase::Shopping => "shop",
        Phase::GameOver => "game over",
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    let summary = format!(
        "Round {}  [{}]  Score {}/{}  ${}  Hands {}  Redraws {}",
        session.round_no,
        phase_label(session.phase),
        session.player.score,
        session.rules.score_goal,
        session.player.coins,
        session.rules.hands_remaining,
        session.rules.redraws_remaining,
    );
    let extra = format!(
        "Seed {}  Draw {}  Discard {}",
        app.seed,
        session.player.deck.remaining(),
        session.player.deck.discarded(),
    );
    let lines = vec![
        Line::from("Banatro".bold()),
        Line::from(summary),
        Line::from(extra),
        Line::from(format!("Status: {}", app.status_line)),
    ];
    let block = Block::default().borders(Borders::ALL).title("Overview");
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_hand(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .session
        .player
        .hand
        .cards
        .iter()
        .enumerate()
        .map(|(idx, card)| {
            let marker = if app.selected.contains(&idx) { "[x]" } else { "[ ]" };
            let mut line = Line::from(format!("{marker} {}", card.label()));
            if idx == app.hand_cursor {
                line = line.style(Style::default().add_modifier(Modifier::REVERSED));
            }
            ListItem::new(line)
        })
        .collect();
    let title = format!(
        "Hand {}/{}",
        app.session.player.hand.len(),
        app.session.player.hand.max_size
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(List::new(items).block(block), area);
}

fn draw_shop(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Shop");
    match app.session.shop.as_ref() {
        Some(offer) => {
            let items: Vec<ListItem> = offer
                .items
                .iter()
                .map(|item| {
                    let tag = match item {
                        OfferItem::Joker(_) => "joker",
                        OfferItem::Upgrade(_) => "upgrade",
                    };
                    ListItem::new(format!(
                        "${:>3} {tag:<7} {} - {}",
                        item.price(),
                        item.name(),
                        item.description()
                    ))
                })
                .collect();
            let mut state = ListState::default();
            if !offer.items.is_empty() {
                state.select(Some(app.shop_cursor.min(offer.items.len() - 1)));
            }
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
            frame.render_stateful_widget(list, area, &mut state);
        }
        None => {
            let hint = if app.session.shop_available() {
                "shop open, press s to enter"
            } else {
                "clear the round to unlock the shop"
            };
            frame.render_widget(Paragraph::new(hint).block(block), area);
        }
    }
}

fn draw_jokers(frame: &mut Frame, area: Rect, app: &App) {
    let player = &app.session.player;
    let items: Vec<ListItem> = player
        .jokers
        .iter()
        .map(|joker| ListItem::new(format!("{} - {}", joker.name(), joker.description())))
        .collect();
    let title = format!(
        "Jokers {}/{}",
        player.jokers.len(),
        player.effective_joker_slots()
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(List::new(items).block(block), area);
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .event_log
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|entry| Line::from(entry.as_str()))
        .collect();
    let block = Block::default().borders(Borders::ALL).title("Log");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_deck_popup(frame: &mut Frame, app: &App) {
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);
    let deck = &app.session.player.deck;
    let mut lines = vec![
        Line::from("Cards left to draw".bold()),
        Line::from(format!(
            "draw pile: {}   discard pile: {}",
            deck.remaining(),
            deck.discarded()
        )),
        Line::from(""),
    ];
    for suit in Suit::ALL {
        let mut ranks: Vec<_> = deck
            .draw
            .iter()
            .filter(|card| card.suit == suit)
            .map(|card| card.rank)
            .collect();
        // Sorted high to low so nothing about the draw order is revealed.
        ranks.sort_unstable_by(|a, b| b.ordinal().cmp(&a.ordinal()));
        let symbols: Vec<&str> = ranks.iter().map(|rank| rank.symbol()).collect();
        lines.push(Line::from(format!(
            "{} ({:>2}): {}",
            suit.symbol(),
            symbols.len(),
            symbols.join(" ")
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("press v or Esc to close"));
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Deck")
        .style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_game_over_popup(frame: &mut Frame, app: &App) {
    let area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, area);
    let mut lines = vec![
        Line::from("Run over".bold()),
        Line::from(format!(
            "reached round {} with {} points",
            app.session.round_no, app.session.player.score
        )),
        Line::from(""),
        Line::from("High scores".bold()),
    ];
    if app.records.is_empty() {
        lines.push(Line::from("  (none yet)"));
    }
    for (idx, record) in app.records.iter().enumerate() {
        lines.push(Line::from(format!(
            "{:>3}. {:>8} points  round {}",
            idx + 1,
            record.score,
            record.round
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("n: new run  q: quit"));
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Game Over")
        .style(Style::default().fg(Color::Yellow));
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from("Keys".bold()),
        Line::from("  left/right or h/l  move in hand"),
        Line::from("  up/down or k/j     move in shop"),
        Line::from("  space              select card"),
        Line::from("  d                  deal up to hand size"),
        Line::from("  p                  play selection (1-5 cards)"),
        Line::from("  x                  redraw selection"),
        Line::from("  r / u              sort by rank / suit"),
        Line::from("  s                  enter or leave shop"),
        Line::from("  b                  buy highlighted offer"),
        Line::from("  v                  deck counts"),
        Line::from("  n                  new run"),
        Line::from("  Esc                clear selection / close popup"),
        Line::from("  q                  quit"),
    ];
    let block = Block::default().borders(Borders::ALL).title("Help");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
