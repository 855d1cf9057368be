//! Painting of an [`AngleClock`] with the egui painter.

use clockwall_lib::angle_clock::{AngleClock, ClockGeometry, Hand, Point};
use eframe::egui;
use egui::{Color32, Painter, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, Widget};

const TICK_STROKE: f32 = 2.0;
const HOUR_STROKE: f32 = 10.0;
const MINUTE_STROKE: f32 = 5.0;
const SECOND_STROKE: f32 = 3.0;
const BORDER_STROKE: f32 = 5.0;

const FACE_COLOR: Color32 = Color32::WHITE;
const HAND_COLOR: Color32 = Color32::BLACK;
const SECOND_HAND_COLOR: Color32 = Color32::RED;

fn to_screen(origin: Pos2, p: Point) -> Pos2 {
    Pos2::new(origin.x + p.x, origin.y + p.y)
}

fn to_canvas(origin: Pos2, pos: Pos2) -> Point {
    Point::new(pos.x - origin.x, pos.y - origin.y)
}

fn paint_clock(
    painter: &Painter,
    rect: Rect,
    geometry: &ClockGeometry,
    selected: Option<Hand>,
    highlight: Color32,
) {
    let origin = rect.min;
    let center = to_screen(origin, geometry.center);
    let hand_color = |hand: Hand, color: Color32| {
        if selected == Some(hand) {
            highlight
        } else {
            color
        }
    };

    painter.rect_filled(rect, 0.0, FACE_COLOR);

    for tick in &geometry.ticks {
        painter.line_segment(
            [to_screen(origin, tick.outer), to_screen(origin, tick.inner)],
            Stroke::new(TICK_STROKE, HAND_COLOR),
        );
    }

    painter.line_segment(
        [center, to_screen(origin, geometry.hour_tip)],
        Stroke::new(HOUR_STROKE, hand_color(Hand::Hour, HAND_COLOR)),
    );
    painter.line_segment(
        [center, to_screen(origin, geometry.minute_tip)],
        Stroke::new(MINUTE_STROKE, hand_color(Hand::Minute, HAND_COLOR)),
    );
    painter.line_segment(
        [center, to_screen(origin, geometry.second_tip)],
        Stroke::new(SECOND_STROKE, hand_color(Hand::Second, SECOND_HAND_COLOR)),
    );

    painter.circle_stroke(center, geometry.radius, Stroke::new(BORDER_STROKE, HAND_COLOR));
}

/// A clock that only displays its time.
pub fn clock_view(ui: &mut Ui, clock: &AngleClock) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(clock.size()), Sense::hover());
    if ui.is_rect_visible(rect) {
        let highlight = ui.visuals().selection.bg_fill;
        paint_clock(&ui.painter_at(rect), rect, &clock.geometry(), None, highlight);
    }
    response
}

/// A clock whose hands can be grabbed and dragged. The response is marked as changed
/// whenever the time moves.
pub struct ClockFace<'a> {
    clock: &'a mut AngleClock,
}

impl<'a> ClockFace<'a> {
    pub fn new(clock: &'a mut AngleClock) -> Self {
        Self { clock }
    }
}

impl Widget for ClockFace<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let sense = if self.clock.is_editable() {
            Sense::click_and_drag()
        } else {
            Sense::hover()
        };
        let (rect, mut response) = ui.allocate_exact_size(Vec2::splat(self.clock.size()), sense);

        if response.drag_started() {
            // Drags start after the pointer moved a little, the hand is picked where it was pressed
            let pressed_at = ui
                .input(|i| i.pointer.press_origin())
                .or(response.interact_pointer_pos());
            if let Some(pos) = pressed_at {
                self.clock.press(to_canvas(rect.min, pos));
            }
        }

        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                if self.clock.drag(to_canvas(rect.min, pos)) {
                    response.mark_changed();
                }
            }
        }

        if response.drag_stopped() {
            self.clock.release();
        }

        let highlight = ui.visuals().selection.bg_fill;
        paint_clock(
            &ui.painter_at(rect),
            rect,
            &self.clock.geometry(),
            self.clock.selected(),
            highlight,
        );

        response
    }
}
