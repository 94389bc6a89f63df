//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::state::{App, AppMode, PromptButton, ScreenState};
use crate::storage::WordStore;
use components::{render_button_row, render_dialog_framework, render_input_widget};
use layouts::centered_rect;

/// 渲染 UI
pub fn render<S: WordStore>(frame: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(5),    // 列表
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_list(frame, app, chunks[1]);
    render_help(frame, app, chunks[2]);

    if let AppMode::AddingWord(button) = app.mode {
        render_add_dialog(frame, app, button);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("GuardaPalabras")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// 单一分区，每个单词一行
fn render_list<S: WordStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .title(format!("Lista ({})", app.row_count()))
        .borders(Borders::ALL);

    if app.screen == ScreenState::Idle {
        frame.render_widget(Paragraph::new("Cargando...").block(block), area);
        return;
    }

    if app.row_count() == 0 {
        let empty = Paragraph::new("No hay palabras, pulse 'a' para agregar una")
            .style(Style::default().fg(Color::Gray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = (0..app.row_count())
        .map(|row| {
            let text = app.row_text(row).unwrap_or_default();
            ListItem::new(Line::from(Span::raw(text.to_string())))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    let mut state = ListState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_help<S: WordStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let help_text = match app.mode {
        AppMode::Normal => "[a] Agregar  [j/k] Navegar  [q] Salir",
        AppMode::AddingWord(_) => "[Enter] Aceptar  [Tab] Cambiar botón  [Esc] Cancelar",
    };

    let text = match app.message.as_deref() {
        Some(message) if !message.is_empty() => format!("{}  |  {}", help_text, message),
        _ => help_text.to_string(),
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_add_dialog<S: WordStore>(frame: &mut Frame, app: &App<S>, button: PromptButton) {
    let area = centered_rect(60, 40, frame.area());
    let inner = render_dialog_framework(frame, area, "Nueva Palabra");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new("Por favor ingrese la nueva palabra")
            .style(Style::default().fg(Color::Gray)),
        chunks[0],
    );
    render_input_widget(frame, chunks[1], "Palabra", &app.input_buffer);

    let focused = match button {
        PromptButton::Save => 0,
        PromptButton::Cancel => 1,
    };
    render_button_row(frame, chunks[2], &["Guardar", "Cancelar"], focused);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryWordStore, WordStore};
    use crate::ui::actions::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text<S: WordStore>(app: &App<S>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_one_row_per_word() {
        let mut store = MemoryWordStore::new();
        store.save("Lunes").unwrap();
        store.save("Mazda").unwrap();
        let mut app = App::new(store);
        app.activate();

        let text = screen_text(&app);
        assert!(text.contains("Lista (2)"));
        assert!(text.contains("Lunes"));
        assert!(text.contains("Mazda"));
    }

    #[test]
    fn test_renders_empty_hint() {
        let mut app = App::new(MemoryWordStore::new());
        app.activate();

        let text = screen_text(&app);
        assert!(text.contains("Lista (0)"));
        assert!(text.contains("No hay palabras"));
    }

    #[test]
    fn test_renders_prompt() {
        let mut app = App::new(MemoryWordStore::new());
        app.activate();
        app.dispatch(Action::StartAddWord);
        app.dispatch(Action::Input('S'));
        app.dispatch(Action::Input('e'));

        let text = screen_text(&app);
        assert!(text.contains("Nueva Palabra"));
        assert!(text.contains("Guardar"));
        assert!(text.contains("Cancelar"));
        assert!(text.contains("Se"));
    }
}
