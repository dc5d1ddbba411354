//! Test what ends up on screen
//!
//! Renders into ratatui's in-memory backend and searches the buffer text.

use libshelf::view::EventBus;
use libshelf::{BookForm, Library, LibraryController, ViewEvent};
use ratatui::{backend::TestBackend, Terminal};
use shelf_tui::app::{Action, AppState, UiConfig};
use shelf_tui::ui::{self, FieldEditor};
use shelf_tui::TuiView;

fn screen(state: &AppState, editor: &FieldEditor) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    terminal
        .draw(|frame| ui::render(frame, state, editor))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for row in buffer.content.chunks(buffer.area.width as usize) {
        for cell in row {
            text.push_str(cell.symbol());
        }
        text.push('\n');
    }
    text
}

fn controller(seed: bool) -> LibraryController<TuiView> {
    let mut bus = EventBus::new();
    let events = bus.subscribe();
    let view = TuiView::new(UiConfig::default(), bus);
    if seed {
        LibraryController::new(Library::new(), view, events)
    } else {
        LibraryController::with_seed(Library::new(), view, events, Vec::new())
    }
}

#[test]
fn test_empty_library_shows_hint() {
    let controller = controller(false);
    let text = screen(controller.view().state(), &FieldEditor::new());

    assert!(text.contains("No books yet"));
    assert!(text.contains("0 books"));
}

#[test]
fn test_demo_cards_are_drawn() {
    let controller = controller(true);
    let text = screen(controller.view().state(), &FieldEditor::new());

    assert!(text.contains("2 books"));
    assert!(text.contains("title: Harry Potter and the Thinking Rock"));
    assert!(text.contains("author: Miku Hatsune"));
    assert!(text.contains("page count: 18"));
    assert!(text.contains("read: No"));
    assert!(text.contains("title: Medibations"));
    assert!(text.contains("read: Yes"));
    assert!(text.contains("Mark as read"));
    assert!(text.contains("Mark as unread"));
    assert!(text.contains("Remove Book"));
}

#[test]
fn test_submitted_dune_card_has_unread_control() {
    let mut controller = controller(false);

    controller.handle(ViewEvent::FormSubmitted(BookForm {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        pages: "412".to_string(),
        genre: "Sci-Fi".to_string(),
        read: true,
    }));
    let text = screen(controller.view().state(), &FieldEditor::new());

    assert!(text.contains("title: Dune"));
    assert!(text.contains("author: Herbert"));
    assert!(text.contains("page count: 412"));
    assert!(text.contains("genre: Sci-Fi"));
    assert!(text.contains("read: Yes"));
    assert!(text.contains("Mark as unread"));
}

#[test]
fn test_empty_fields_are_not_drawn() {
    let mut controller = controller(false);
    controller.handle(ViewEvent::FormSubmitted(BookForm {
        title: "Lonely".to_string(),
        ..BookForm::default()
    }));
    let text = screen(controller.view().state(), &FieldEditor::new());

    assert!(text.contains("title: Lonely"));
    assert!(!text.contains("author:"));
    assert!(!text.contains("genre:"));
    assert!(!text.contains("page count:"));
}

#[test]
fn test_form_dialog_is_drawn() {
    let mut controller = controller(false);
    controller.view_mut().dispatch(Action::OpenForm);

    let state = controller.view().state();
    let mut editor = FieldEditor::new();
    editor.sync(&state.form, state.config.colors_enabled);
    let text = screen(state, &editor);

    assert!(text.contains("Add Book"));
    assert!(text.contains("Title"));
    assert!(text.contains("Author"));
    assert!(text.contains("Pages"));
    assert!(text.contains("Genre"));
    assert!(text.contains("[ ] Already read"));
}

#[test]
fn test_help_overlay_is_drawn() {
    let mut controller = controller(false);
    controller.view_mut().dispatch(Action::ShowHelp);

    let text = screen(controller.view().state(), &FieldEditor::new());

    assert!(text.contains("Keyboard Shortcuts"));
    assert!(text.contains("Sort by title"));
}
