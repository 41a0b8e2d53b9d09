//! Modal board selector.
//!
//! A full-viewport dimmed overlay with a centered, scrollable thumbnail
//! grid. Opened with a fetched board list and a one-shot selection
//! callback; torn down by an item click, the close control, or a click on
//! the overlay background.

use boardflow_core::BoardSummary;
use egui::{
    Align, Align2, Color32, CornerRadius, FontId, Id, LayerId, Layout, Order, Rect, Response,
    Sense, Stroke, StrokeKind, Ui, vec2,
};
use tracing::debug;

/// Minimum width of a grid cell; the column count adapts to the viewport.
const CELL_MIN_WIDTH: f32 = 150.0;
/// Gap between grid cells.
const CELL_GAP: f32 = 10.0;
/// Height of the thumbnail region inside a cell.
const THUMB_HEIGHT: f32 = 100.0;
/// Inner padding of a cell.
const CELL_PADDING: f32 = 8.0;
/// Total cell height: thumbnail, label line, padding.
const CELL_HEIGHT: f32 = THUMB_HEIGHT + 2.0 * CELL_PADDING + 18.0;
/// Fraction of the viewport the panel occupies.
const PANEL_FRACTION: f32 = 0.8;
/// Inner margin of the panel frame.
const PANEL_MARGIN: f32 = 16.0;

const PANEL_FILL: Color32 = Color32::from_rgb(34, 34, 34);
const PANEL_STROKE: Color32 = Color32::from_rgb(68, 68, 68);
const CELL_FILL: Color32 = Color32::from_rgb(51, 51, 51);
const PLACEHOLDER_FILL: Color32 = Color32::from_rgb(68, 68, 68);
const TEXT_COLOR: Color32 = Color32::WHITE;
const HOVER_STROKE: Color32 = Color32::LIGHT_BLUE;

/// Errors reported by [`BoardSelector::open`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// A dialog session is already active on this selector.
    #[error("a board selector dialog is already open")]
    AlreadyOpen,
}

/// Everything that lives only between open and close.
struct DialogSession {
    boards: Vec<BoardSummary>,
    on_select: Box<dyn FnOnce(String) + Send>,
}

/// Geometry of one rendered grid item, for host hit-testing and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemGeometry {
    /// Id of the board the cell shows.
    pub board_id: String,
    /// Screen rect of the cell.
    pub rect: Rect,
    /// The thumbnail URI the cell displays, if any.
    pub thumbnail: Option<String>,
}

/// What happened during one [`BoardSelector::show`] frame.
#[derive(Debug, Clone, Default)]
pub struct SelectorResponse {
    /// Whether a dialog session is still open after this frame.
    pub open: bool,
    /// Board id selected this frame. The callback has already run.
    pub selected: Option<String>,
    /// Whether the dialog was dismissed this frame without a selection.
    pub dismissed: bool,
    /// Screen rect of the dimmed overlay, while open.
    pub overlay_rect: Option<Rect>,
    /// Screen rect of the grid panel, while open.
    pub panel_rect: Option<Rect>,
    /// Screen rect of the close control, while open.
    pub close_rect: Option<Rect>,
    /// Geometry of the rendered items, in list order.
    pub items: Vec<ItemGeometry>,
}

/// Modal picker for choosing one board from a fetched list.
///
/// The selector owns at most one dialog session and is the caller's
/// teardown handle for the open dialog. Opening while a session is active
/// is an explicit error rather than a silent replace.
#[derive(Default)]
pub struct BoardSelector {
    session: Option<DialogSession>,
}

impl BoardSelector {
    /// Creates a closed selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a dialog session over `boards`.
    ///
    /// Records with an empty id are skipped; an empty list is fine and
    /// renders just the header. `on_select` runs exactly once, and only if
    /// the user clicks an item.
    pub fn open(
        &mut self,
        boards: Vec<BoardSummary>,
        on_select: impl FnOnce(String) + Send + 'static,
    ) -> Result<(), SelectorError> {
        if self.session.is_some() {
            return Err(SelectorError::AlreadyOpen);
        }
        let total = boards.len();
        let boards: Vec<BoardSummary> =
            boards.into_iter().filter(|b| !b.id.is_empty()).collect();
        if boards.len() < total {
            debug!(
                skipped = total - boards.len(),
                "skipping board entries without an id"
            );
        }
        self.session = Some(DialogSession {
            boards,
            on_select: Box::new(on_select),
        });
        Ok(())
    }

    /// Whether a dialog session is active.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Tears down the open session, if any, without invoking the callback.
    pub fn close(&mut self) {
        self.session = None;
    }

    /// Paints the dialog and handles its input. Call once per frame.
    ///
    /// Does nothing while closed. The three exit paths are an item click
    /// (callback, then teardown), the close control, and a click on the
    /// overlay background (teardown only).
    pub fn show(&mut self, ctx: &egui::Context) -> SelectorResponse {
        let Some(session) = self.session.as_ref() else {
            return SelectorResponse::default();
        };

        let screen = ctx.screen_rect();
        let panel_rect = Rect::from_center_size(screen.center(), screen.size() * PANEL_FRACTION);

        let overlay_id = Id::new("boardflow_selector_overlay");
        let overlay = egui::Area::new(overlay_id)
            .order(Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let response = ui.allocate_rect(screen, Sense::click());
                ui.painter()
                    .rect_filled(screen, 0.0, Color32::from_black_alpha(128));
                response
            })
            .inner;
        // Keep the overlay above whatever the host has in the same layer order.
        ctx.move_to_top(LayerId::new(Order::Middle, overlay_id));

        let mut close_rect = None;
        let mut items = Vec::with_capacity(session.boards.len());
        let mut selected = None;
        let mut close_clicked = false;

        egui::Area::new(Id::new("boardflow_selector_panel"))
            .order(Order::Foreground)
            .fixed_pos(panel_rect.min)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(PANEL_FILL)
                    .stroke(Stroke::new(1.0, PANEL_STROKE))
                    .corner_radius(CornerRadius::same(8))
                    .inner_margin(PANEL_MARGIN)
                    .show(ui, |ui| {
                        let content = panel_rect.size() - vec2(2.0 * PANEL_MARGIN, 2.0 * PANEL_MARGIN);
                        ui.set_min_size(content);
                        ui.set_max_size(content);

                        ui.horizontal(|ui| {
                            ui.heading("Select Moodboard");
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                let response = ui.button("X");
                                if response.clicked() {
                                    close_clicked = true;
                                }
                                close_rect = Some(response.rect);
                            });
                        });
                        ui.separator();

                        egui::ScrollArea::vertical()
                            .auto_shrink([false, false])
                            .show(ui, |ui| {
                                Self::board_grid(ui, &session.boards, &mut items, &mut selected);
                            });
                    });
            });

        // Clicks that land on the panel must not count as background
        // dismissal, even when no widget there consumed them.
        let overlay_clicked = overlay.clicked()
            && overlay
                .interact_pointer_pos()
                .map_or(true, |pos| !panel_rect.contains(pos));

        let mut response = SelectorResponse {
            open: true,
            overlay_rect: Some(screen),
            panel_rect: Some(panel_rect),
            close_rect,
            items,
            ..Default::default()
        };

        if let Some(board_id) = selected {
            if let Some(session) = self.session.take() {
                (session.on_select)(board_id.clone());
            }
            debug!(board_id = %board_id, "board selected");
            response.selected = Some(board_id);
            response.open = false;
        } else if close_clicked || overlay_clicked {
            self.session = None;
            response.dismissed = true;
            response.open = false;
        }

        response
    }

    fn board_grid(
        ui: &mut Ui,
        boards: &[BoardSummary],
        items: &mut Vec<ItemGeometry>,
        selected: &mut Option<String>,
    ) {
        let available = ui.available_width();
        let columns = ((available / (CELL_MIN_WIDTH + CELL_GAP)).floor() as usize).max(1);
        let cell_width = (available - CELL_GAP * (columns as f32 - 1.0)) / columns as f32;

        egui::Grid::new("boardflow_selector_grid")
            .spacing([CELL_GAP, CELL_GAP])
            .show(ui, |ui| {
                for (i, board) in boards.iter().enumerate() {
                    if i > 0 && i % columns == 0 {
                        ui.end_row();
                    }
                    let response = Self::board_cell(ui, board, cell_width);
                    items.push(ItemGeometry {
                        board_id: board.id.clone(),
                        rect: response.rect,
                        thumbnail: board.thumbnail_source().map(str::to_string),
                    });
                    if response.clicked() {
                        *selected = Some(board.id.clone());
                    }
                }
            });
    }

    fn board_cell(ui: &mut Ui, board: &BoardSummary, width: f32) -> Response {
        let (rect, response) =
            ui.allocate_exact_size(vec2(width, CELL_HEIGHT), Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 4.0, CELL_FILL);
            painter.rect_stroke(rect, 4.0, Stroke::new(1.0, PANEL_STROKE), StrokeKind::Inside);

            let thumb_rect = Rect::from_min_size(
                rect.min + vec2(CELL_PADDING, CELL_PADDING),
                vec2(width - 2.0 * CELL_PADDING, THUMB_HEIGHT),
            );
            match board.thumbnail_source() {
                Some(url) => {
                    egui::Image::new(url).paint_at(ui, thumb_rect);
                }
                None => {
                    painter.rect_filled(thumb_rect, 2.0, PLACEHOLDER_FILL);
                    painter.text(
                        thumb_rect.center(),
                        Align2::CENTER_CENTER,
                        "No Preview",
                        FontId::proportional(12.0),
                        TEXT_COLOR,
                    );
                }
            }

            painter.text(
                egui::pos2(rect.center().x, rect.max.y - CELL_PADDING),
                Align2::CENTER_BOTTOM,
                board.display_name(),
                FontId::proportional(12.0),
                TEXT_COLOR,
            );

            if response.hovered() {
                painter.rect_stroke(rect, 4.0, Stroke::new(2.0, HOVER_STROKE), StrokeKind::Outside);
            }
        }

        response
    }
}
