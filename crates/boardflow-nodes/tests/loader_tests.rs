use boardflow_core::BoardSummary;
use boardflow_io::IoError;
use boardflow_nodes::{
    LocalBoardLoader, NodeWidgets, Notifier, RemoteBoardLoader, API_KEY_WIDGET, BOARD_ID_WIDGET,
    BROWSE_BUTTON, FOLDER_PATH_WIDGET,
};
use boardflow_ui::SelectorResponse;
use egui::{vec2, Event, Modifiers, PointerButton, Pos2, Rect};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// An API base nothing listens on, so fetches fail fast.
const DEAD_API_BASE: &str = "http://127.0.0.1:9/api/ext";

#[derive(Default)]
struct TestNode {
    values: HashMap<String, String>,
    buttons: Vec<(String, String)>,
}

impl TestNode {
    fn with_value(name: &str, value: &str) -> Self {
        let mut node = Self::default();
        node.values.insert(name.to_string(), value.to_string());
        node
    }
}

impl NodeWidgets for TestNode {
    fn widget_value(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }

    fn set_widget_value(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    fn add_button(&mut self, name: &str, label: &str) {
        self.buttons.push((name.to_string(), label.to_string()));
    }
}

#[derive(Default)]
struct TestNotifier {
    errors: Vec<String>,
}

impl Notifier for TestNotifier {
    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

fn raw_input(events: Vec<Event>) -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1280.0, 720.0))),
        events,
        ..Default::default()
    }
}

fn drive(
    ctx: &egui::Context,
    loader: &mut RemoteBoardLoader,
    node: &mut TestNode,
    notifier: &mut TestNotifier,
    events: Vec<Event>,
) -> SelectorResponse {
    let mut response = None;
    // egui settles a freshly created Area over two frames (the first paints
    // nothing and does not wire interaction). Drive one empty settle frame
    // before the real one so clicks land on settled selector widgets.
    ctx.run(raw_input(Vec::new()), |ctx| {
        response = Some(loader.update(ctx, node, notifier));
    });
    ctx.run(raw_input(events), |ctx| {
        response = Some(loader.update(ctx, node, notifier));
    });
    response.expect("update ran")
}

fn pointer_press(pos: Pos2) -> Vec<Event> {
    vec![
        Event::PointerMoved(pos),
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            modifiers: Modifiers::default(),
        },
    ]
}

fn pointer_release(pos: Pos2) -> Vec<Event> {
    vec![Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed: false,
        modifiers: Modifiers::default(),
    }]
}

fn summary(id: &str) -> BoardSummary {
    BoardSummary {
        id: id.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_on_created_adds_browse_button() {
    let mut loader = RemoteBoardLoader::new();
    let mut node = TestNode::default();
    loader.on_created(&mut node);
    assert_eq!(
        node.buttons,
        vec![(BROWSE_BUTTON.to_string(), "Load Boards".to_string())]
    );
}

#[test]
fn test_browse_without_api_key_notifies_and_does_not_fetch() {
    let mut loader = RemoteBoardLoader::new();
    let node = TestNode::default();
    let mut notifier = TestNotifier::default();

    loader.on_button(BROWSE_BUTTON, &node, &mut notifier);

    assert_eq!(notifier.errors, vec!["Please enter an API key first."]);
    assert!(!loader.is_fetching());
}

#[test]
fn test_other_buttons_are_ignored() {
    let mut loader = RemoteBoardLoader::new();
    let node = TestNode::default();
    let mut notifier = TestNotifier::default();

    loader.on_button("unrelated", &node, &mut notifier);

    assert!(notifier.errors.is_empty());
    assert!(!loader.is_fetching());
}

#[test]
fn test_failed_fetch_notifies_and_never_opens_dialog() {
    let ctx = egui::Context::default();
    let mut loader = RemoteBoardLoader::new().with_api_base(DEAD_API_BASE);
    let mut node = TestNode::with_value(API_KEY_WIDGET, "secret");
    let mut notifier = TestNotifier::default();

    loader.on_button(BROWSE_BUTTON, &node, &mut notifier);
    assert!(loader.is_fetching());

    // A second press while the fetch is in flight is a no-op.
    loader.on_button(BROWSE_BUTTON, &node, &mut notifier);
    assert!(notifier.errors.is_empty());

    let deadline = Instant::now() + Duration::from_secs(10);
    while notifier.errors.is_empty() && Instant::now() < deadline {
        drive(&ctx, &mut loader, &mut node, &mut notifier, Vec::new());
        std::thread::sleep(Duration::from_millis(10));
    }

    assert_eq!(notifier.errors.len(), 1);
    assert!(notifier.errors[0].starts_with("Failed to load boards:"));
    assert!(!loader.is_fetching());
    assert!(!loader.is_browsing());
}

#[test]
fn test_selection_lands_in_board_id_widget() {
    let ctx = egui::Context::default();
    let mut loader = RemoteBoardLoader::new();
    let mut node = TestNode::default();
    let mut notifier = TestNotifier::default();

    loader.open_browser(vec![summary("pick-me")]).unwrap();
    assert!(loader.is_browsing());

    let layout = drive(&ctx, &mut loader, &mut node, &mut notifier, Vec::new());
    let pos = layout.items[0].rect.center();
    drive(&ctx, &mut loader, &mut node, &mut notifier, pointer_press(pos));
    drive(&ctx, &mut loader, &mut node, &mut notifier, pointer_release(pos));

    assert_eq!(node.values.get(BOARD_ID_WIDGET).map(String::as_str), Some("pick-me"));
    assert!(!loader.is_browsing());
    assert!(notifier.errors.is_empty());
}

#[test]
fn test_dismissal_leaves_board_id_untouched() {
    let ctx = egui::Context::default();
    let mut loader = RemoteBoardLoader::new();
    let mut node = TestNode::default();
    let mut notifier = TestNotifier::default();

    loader.open_browser(vec![summary("a")]).unwrap();
    drive(&ctx, &mut loader, &mut node, &mut notifier, Vec::new());
    // Click the overlay background, outside the centered panel.
    let pos = Pos2::new(5.0, 5.0);
    drive(&ctx, &mut loader, &mut node, &mut notifier, pointer_press(pos));
    let response = drive(&ctx, &mut loader, &mut node, &mut notifier, pointer_release(pos));

    assert!(response.dismissed);
    assert!(!loader.is_browsing());
    assert!(!node.values.contains_key(BOARD_ID_WIDGET));
}

#[test]
fn test_remote_load_preconditions() {
    let loader = RemoteBoardLoader::new().with_api_base(DEAD_API_BASE);

    let no_key = TestNode::default();
    assert!(matches!(
        loader.load(&no_key),
        Err(IoError::MissingApiKey)
    ));

    let no_board = TestNode::with_value(API_KEY_WIDGET, "secret");
    assert!(matches!(
        loader.load(&no_board),
        Err(IoError::MissingBoardId)
    ));
}

#[test]
fn test_local_loader_reads_folder_path_widget() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("board.json"),
        r#"{ "board": { "id": "local", "elements": [] } }"#,
    )
    .unwrap();

    let loader = LocalBoardLoader::new();
    let node = TestNode::with_value(FOLDER_PATH_WIDGET, dir.path().to_str().unwrap());
    let board = loader.load(&node).unwrap();
    assert_eq!(board.id, "local");
    assert_eq!(board.base_path.as_deref(), Some(dir.path()));

    let missing = TestNode::with_value(FOLDER_PATH_WIDGET, "/no/such/folder");
    assert!(matches!(
        loader.load(&missing),
        Err(IoError::FolderNotFound(_))
    ));
}
