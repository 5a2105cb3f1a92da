//! Server log pane, pinned to the newest line.
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

pub fn render(frame: &mut Frame, area: Rect, lines: &[String]) {
    // Bottom-to-top with the list reversed keeps the latest entry at the
    // bottom edge regardless of pane height.
    let items: Vec<ListItem> = lines
        .iter()
        .rev()
        .map(|line| ListItem::new(line.as_str()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Signal Log "))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}
