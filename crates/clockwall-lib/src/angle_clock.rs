//! Geometry of an analog clock face.
//!
//! The forward direction turns a [`WallClockTime`] into hand tips and tick marks, the
//! reverse direction turns a pointer position into a new hour, minute or second while
//! the user drags one of the hands.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::wall_time::WallClockTime;

/// Maximum angular distance (radians) between the pointer and a hand to grab it.
pub const HAND_TOLERANCE: f32 = 0.1;
/// Side of the canvas of a freshly created clock.
pub const DEFAULT_CANVAS_SIZE: f32 = 500.0;

const TICK_LENGTH: f32 = 10.0;
const MINUTE_HAND_INSET: f32 = 20.0;
const SECOND_HAND_INSET: f32 = 15.0;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    /// The point at `radius` from `self` in direction `angle` (screen coordinates, y down).
    pub fn polar(self, radius: f32, angle: f32) -> Point {
        Point {
            x: self.x + radius * angle.cos(),
            y: self.y + radius * angle.sin(),
        }
    }

    fn angle_to(self, other: Point) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// Order in which hands are tested when the pointer is close to more than one.
    pub const PRIORITY: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub outer: Point,
    pub inner: Point,
}

/// Everything needed to paint a clock face.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockGeometry {
    pub center: Point,
    pub radius: f32,
    pub hour_tip: Point,
    pub minute_tip: Point,
    pub second_tip: Point,
    pub ticks: [Tick; 12],
}

pub fn hour_angle(time: WallClockTime) -> f32 {
    let total_hour =
        time.hour as f32 + time.minute as f32 / 60.0 + time.second as f32 / 3600.0;
    total_hour / 12.0 * TAU - FRAC_PI_2
}

pub fn minute_angle(time: WallClockTime) -> f32 {
    let total_minute = time.minute as f32 + time.second as f32 / 60.0;
    total_minute / 60.0 * TAU - FRAC_PI_2
}

pub fn second_angle(time: WallClockTime) -> f32 {
    time.second as f32 / 60.0 * TAU - FRAC_PI_2
}

fn hand_angle(time: WallClockTime, hand: Hand) -> f32 {
    match hand {
        Hand::Hour => hour_angle(time),
        Hand::Minute => minute_angle(time),
        Hand::Second => second_angle(time),
    }
}

/// Forward mapping: hand tips and hour ticks for `time` on a face of `radius`.
pub fn geometry(time: WallClockTime, center: Point, radius: f32) -> ClockGeometry {
    let ticks = std::array::from_fn(|t| {
        let angle = t as f32 * TAU / 12.0;
        Tick {
            outer: center.polar(radius, angle),
            inner: center.polar(radius - TICK_LENGTH, angle),
        }
    });

    ClockGeometry {
        center,
        radius,
        hour_tip: center.polar(radius / 2.0, hour_angle(time)),
        minute_tip: center.polar(radius - MINUTE_HAND_INSET, minute_angle(time)),
        second_tip: center.polar(radius - SECOND_HAND_INSET, second_angle(time)),
        ticks,
    }
}

/// Distance between two angles measured around the circle.
fn angular_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

/// Position of the pointer on the dial, 0 at twelve o'clock, growing clockwise.
fn dial_angle(center: Point, pointer: Point) -> f32 {
    (center.angle_to(pointer) + FRAC_PI_2).rem_euclid(TAU)
}

fn sixtieths(dial: f32) -> u32 {
    ((dial / TAU * 60.0).floor() as u32).min(59)
}

fn next_hour(hour: u32) -> u32 {
    if hour < 12 { hour + 1 } else { 1 }
}

fn previous_hour(hour: u32) -> u32 {
    if hour > 1 { hour - 1 } else { 12 }
}

/// A clock face on a square canvas, optionally editable by dragging its hands.
#[derive(Debug, Clone)]
pub struct AngleClock {
    time: WallClockTime,
    size: f32,
    editable: bool,
    selected: Option<Hand>,
}

impl Default for AngleClock {
    fn default() -> Self {
        AngleClock::new(DEFAULT_CANVAS_SIZE)
    }
}

impl AngleClock {
    pub fn new(size: f32) -> Self {
        AngleClock {
            time: WallClockTime::default(),
            size,
            editable: false,
            selected: None,
        }
    }

    pub fn editable(size: f32) -> Self {
        AngleClock {
            editable: true,
            ..AngleClock::new(size)
        }
    }

    pub fn time(&self) -> WallClockTime {
        self.time
    }

    pub fn set_time(&mut self, time: WallClockTime) {
        self.time = time;
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn selected(&self) -> Option<Hand> {
        self.selected
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn resize(&mut self, size: f32) {
        self.size = size;
    }

    pub fn radius(&self) -> f32 {
        self.size * 3.0 / 8.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    pub fn geometry(&self) -> ClockGeometry {
        geometry(self.time, self.center(), self.radius())
    }

    /// Selects the hand under the pointer, if any. Coordinates are canvas-local.
    pub fn press(&mut self, pointer: Point) -> Option<Hand> {
        if !self.editable {
            return None;
        }
        let angle = self.center().angle_to(pointer);
        self.selected = Hand::PRIORITY
            .into_iter()
            .find(|hand| angular_distance(angle, hand_angle(self.time, *hand)) < HAND_TOLERANCE);
        log::debug!("Pressed the clock at {pointer:?}, selected {:?}", self.selected);
        self.selected
    }

    /// Moves the selected hand toward the pointer. Returns whether the time changed.
    pub fn drag(&mut self, pointer: Point) -> bool {
        let Some(hand) = self.selected else {
            return false;
        };
        let before = self.time;
        let dial = dial_angle(self.center(), pointer);
        let t = &mut self.time;

        match hand {
            Hand::Hour => {
                let total_hour = dial / TAU * 12.0;
                let whole = total_hour.floor();
                t.hour = match whole as u32 % 12 {
                    0 => 12,
                    h => h,
                };
                t.minute = (((total_hour - whole) * 60.0).floor() as u32).min(59);
            }
            Hand::Minute => {
                let old = t.minute;
                t.minute = sixtieths(dial);
                if old == 0 && t.minute == 59 {
                    t.hour = previous_hour(t.hour);
                } else if old == 59 && t.minute == 0 {
                    t.hour = next_hour(t.hour);
                }
            }
            Hand::Second => {
                let old = t.second;
                t.second = sixtieths(dial);
                if old == 0 && t.second == 59 {
                    if t.minute == 0 {
                        t.minute = 59;
                        t.hour = previous_hour(t.hour);
                    } else {
                        t.minute -= 1;
                    }
                } else if old == 59 && t.second == 0 {
                    if t.minute == 59 {
                        t.minute = 0;
                        t.hour = next_hour(t.hour);
                    } else {
                        t.minute += 1;
                    }
                }
            }
        }

        t.hour = t.hour.clamp(1, 12);
        t.minute = t.minute.min(59);
        t.second = t.second.min(59);

        before != self.time
    }

    pub fn release(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(hour: u32, minute: u32, second: u32) -> WallClockTime {
        WallClockTime {
            hour,
            minute,
            second,
        }
    }

    /// Pointer position on the dial of `clock` at the given dial angle (0 = twelve).
    fn pointer_at(clock: &AngleClock, dial: f32) -> Point {
        clock.center().polar(100.0, dial - FRAC_PI_2)
    }

    fn dial_for_sixtieth(value: f32) -> f32 {
        value / 60.0 * TAU
    }

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3,
            "{a:?} != {b:?}"
        );
    }

    fn circular_diff(a: u32, b: u32, modulus: u32) -> u32 {
        let d = (a + modulus - b) % modulus;
        d.min(modulus - d)
    }

    fn clock_at(time: WallClockTime) -> AngleClock {
        let mut clock = AngleClock::editable(DEFAULT_CANVAS_SIZE);
        clock.set_time(time);
        clock
    }

    #[test]
    fn test_geometry_three_oclock() {
        let center = Point::new(250.0, 250.0);
        let g = geometry(hms(3, 0, 0), center, 100.0);
        assert_close(g.hour_tip, Point::new(300.0, 250.0));
        assert_close(g.minute_tip, Point::new(250.0, 170.0));
        assert_close(g.second_tip, Point::new(250.0, 165.0));
    }

    #[test]
    fn test_geometry_ticks() {
        let center = Point::new(100.0, 100.0);
        let g = geometry(hms(12, 0, 0), center, 50.0);
        assert_eq!(g.ticks.len(), 12);
        assert_close(g.ticks[0].outer, Point::new(150.0, 100.0));
        assert_close(g.ticks[0].inner, Point::new(140.0, 100.0));
        assert_close(g.ticks[3].outer, Point::new(100.0, 150.0));
        assert_close(g.hour_tip, Point::new(100.0, 75.0));
    }

    #[test]
    fn test_hour_hand_includes_minutes() {
        let center = Point::new(0.0, 0.0);
        let g = geometry(hms(6, 30, 0), center, 100.0);
        let expected = center.polar(50.0, 6.5 / 12.0 * TAU - FRAC_PI_2);
        assert_close(g.hour_tip, expected);
    }

    #[test]
    fn test_radius_follows_size() {
        let mut clock = AngleClock::new(200.0);
        assert_eq!(clock.radius(), 75.0);
        clock.resize(400.0);
        assert_eq!(clock.radius(), 150.0);
        assert_eq!(clock.center(), Point::new(200.0, 200.0));
    }

    #[test]
    fn test_press_selects_each_hand() {
        let mut clock = clock_at(hms(1, 15, 0));
        let hour_dial = hour_angle(clock.time()) + FRAC_PI_2;
        assert_eq!(clock.press(pointer_at(&clock, hour_dial)), Some(Hand::Hour));
        assert_eq!(clock.press(pointer_at(&clock, TAU / 4.0)), Some(Hand::Minute));
        assert_eq!(clock.press(pointer_at(&clock, 0.0)), Some(Hand::Second));
        assert_eq!(clock.press(pointer_at(&clock, TAU / 2.0)), None);
    }

    #[test]
    fn test_press_priority_when_hands_overlap() {
        let mut clock = clock_at(hms(12, 0, 0));
        assert_eq!(clock.press(pointer_at(&clock, 0.0)), Some(Hand::Hour));
        clock.set_time(hms(1, 0, 0));
        assert_eq!(clock.press(pointer_at(&clock, 0.0)), Some(Hand::Minute));
    }

    #[test]
    fn test_press_across_the_atan2_seam() {
        // The nine o'clock direction sits on the ±π seam of atan2
        let mut clock = clock_at(hms(1, 45, 0));
        let just_past = pointer_at(&clock, dial_for_sixtieth(45.3));
        assert_eq!(clock.press(just_past), Some(Hand::Minute));
        let just_before = pointer_at(&clock, dial_for_sixtieth(44.7));
        assert_eq!(clock.press(just_before), Some(Hand::Minute));
    }

    #[test]
    fn test_read_only_clock_ignores_press() {
        let mut clock = AngleClock::new(DEFAULT_CANVAS_SIZE);
        assert_eq!(clock.press(pointer_at(&clock, 0.0)), None);
        assert!(!clock.drag(pointer_at(&clock, 1.0)));
    }

    #[test]
    fn test_drag_without_selection_is_noop() {
        let mut clock = clock_at(hms(4, 20, 10));
        assert!(!clock.drag(pointer_at(&clock, 2.0)));
        assert_eq!(clock.time(), hms(4, 20, 10));
    }

    #[test]
    fn test_drag_hour_hand_moves_minutes() {
        let mut clock = clock_at(hms(1, 15, 0));
        clock.selected = Some(Hand::Hour);
        // Halfway between 4 and 5
        assert!(clock.drag(pointer_at(&clock, 4.5 / 12.0 * TAU)));
        assert_eq!(clock.time().hour, 4);
        assert!(circular_diff(clock.time().minute, 30, 60) <= 1);

        // Just right of twelve folds to 12
        clock.drag(pointer_at(&clock, 0.01));
        assert_eq!(clock.time().hour, 12);
    }

    #[test]
    fn test_minute_wraps_backward_into_hour() {
        let mut clock = clock_at(hms(1, 0, 30));
        clock.selected = Some(Hand::Minute);
        clock.drag(pointer_at(&clock, dial_for_sixtieth(59.5)));
        assert_eq!(clock.time(), hms(12, 59, 30));

        let mut clock = clock_at(hms(7, 0, 30));
        clock.selected = Some(Hand::Minute);
        clock.drag(pointer_at(&clock, dial_for_sixtieth(59.5)));
        assert_eq!(clock.time(), hms(6, 59, 30));
    }

    #[test]
    fn test_minute_wraps_forward_into_hour() {
        let mut clock = clock_at(hms(12, 59, 30));
        let minute_dial = minute_angle(clock.time()) + FRAC_PI_2;
        assert_eq!(clock.press(pointer_at(&clock, minute_dial)), Some(Hand::Minute));
        clock.drag(pointer_at(&clock, dial_for_sixtieth(0.5)));
        assert_eq!(clock.time(), hms(1, 0, 30));

        let mut clock = clock_at(hms(5, 59, 30));
        clock.selected = Some(Hand::Minute);
        clock.drag(pointer_at(&clock, dial_for_sixtieth(0.5)));
        assert_eq!(clock.time(), hms(6, 0, 30));
    }

    #[test]
    fn test_minute_drag_without_crossing_keeps_hour() {
        let mut clock = clock_at(hms(3, 10, 0));
        clock.selected = Some(Hand::Minute);
        clock.drag(pointer_at(&clock, dial_for_sixtieth(40.5)));
        assert_eq!(clock.time(), hms(3, 40, 0));
    }

    #[test]
    fn test_second_wrap_cascades() {
        let mut clock = clock_at(hms(3, 10, 59));
        clock.selected = Some(Hand::Second);
        clock.drag(pointer_at(&clock, dial_for_sixtieth(0.5)));
        assert_eq!(clock.time(), hms(3, 11, 0));

        let mut clock = clock_at(hms(3, 10, 0));
        clock.selected = Some(Hand::Second);
        clock.drag(pointer_at(&clock, dial_for_sixtieth(59.5)));
        assert_eq!(clock.time(), hms(3, 9, 59));

        let mut clock = clock_at(hms(12, 59, 59));
        clock.selected = Some(Hand::Second);
        clock.drag(pointer_at(&clock, dial_for_sixtieth(0.5)));
        assert_eq!(clock.time(), hms(1, 0, 0));

        let mut clock = clock_at(hms(1, 0, 0));
        clock.selected = Some(Hand::Second);
        clock.drag(pointer_at(&clock, dial_for_sixtieth(59.5)));
        assert_eq!(clock.time(), hms(12, 59, 59));
    }

    #[test]
    fn test_forward_then_reverse_recovers_time() {
        for (hour, minute, second) in [(1, 30, 30), (4, 7, 42), (9, 52, 5), (12, 0, 30), (11, 59, 58)] {
            let time = hms(hour, minute, second);
            let clock = clock_at(time);
            let g = clock.geometry();

            let mut probe = clock.clone();
            probe.selected = Some(Hand::Second);
            probe.drag(g.second_tip);
            assert!(circular_diff(probe.time().second, second, 60) <= 1);

            let mut probe = clock.clone();
            probe.selected = Some(Hand::Minute);
            probe.drag(g.minute_tip);
            assert!(circular_diff(probe.time().minute, minute, 60) <= 1);

            let mut probe = clock.clone();
            probe.selected = Some(Hand::Hour);
            probe.drag(g.hour_tip);
            assert_eq!(probe.time().hour, hour);
            assert!(circular_diff(probe.time().minute, minute, 60) <= 1);
        }
    }

    #[test]
    fn test_release_clears_selection() {
        let mut clock = clock_at(hms(1, 15, 0));
        clock.press(pointer_at(&clock, TAU / 4.0));
        assert_eq!(clock.selected(), Some(Hand::Minute));
        clock.release();
        assert_eq!(clock.selected(), None);
    }
}
