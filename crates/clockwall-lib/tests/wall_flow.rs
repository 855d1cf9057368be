use chrono::{NaiveDate, Timelike};
use chrono_tz::Tz;
use clockwall_lib::angle_clock::Point;
use clockwall_lib::config::import_config;
use clockwall_lib::main_window::MainWindowState;
use clockwall_lib::time_picker::PickerOutcome;
use clockwall_lib::ClockError;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()
}

#[test]
fn pick_time_by_dragging_then_fill_the_wall() -> Result<(), Box<dyn std::error::Error>> {
    let config = import_config("main_zone = \"America/New_York\"\n[wall]\ncolumns = 2\n")?;
    let mut window = MainWindowState::new(&config)?;

    window.open_picker();
    let clock = window.picker.clock().clone();
    let center = clock.center();
    // Grab the minute hand, which points at three o'clock at 1:15:00
    window.picker.press(Point::new(center.x + 100.0, center.y));
    // and drag it to half past
    assert!(window.picker.drag(Point::new(center.x - 1.0, center.y + 100.0)));
    window.picker.release();
    window.picker.toggle_meridiem();
    assert_eq!(window.picker.preview(), "Time: 1:30:00 PM");

    let outcome = window.picker.submit();
    assert_eq!(
        outcome,
        PickerOutcome::Submitted {
            hour: 13,
            minute: 30,
            second: 0
        }
    );
    window.on_picker_closed(outcome, date())?;

    for zone in [Tz::Europe__Berlin, Tz::Asia__Kolkata, Tz::Australia__Sydney] {
        window.set_new_zone(zone);
        assert!(window.add_clock()?);
    }
    assert_eq!(window.wall.rows().len(), 2);

    // EDT is UTC-4, CEST is UTC+2
    assert_eq!(
        window.wall.get("Europe/Berlin").unwrap().readout(),
        "Europe/Berlin (CEST): 07:30:00 PM"
    );
    assert_eq!(window.wall.get("Asia/Kolkata").unwrap().time().hour, 11);

    window.wall.remove_zone("Asia/Kolkata")?;
    window.set_new_zone(Tz::Asia__Kolkata);
    assert!(window.add_clock()?);
    assert_eq!(
        window.wall.ids().collect::<Vec<_>>(),
        vec!["Europe/Berlin", "Australia/Sydney", "Asia/Kolkata"]
    );
    Ok(())
}

#[test]
fn main_zone_change_reinterprets_local_time() -> Result<(), Box<dyn std::error::Error>> {
    let config = import_config("main_zone = \"Europe/Paris\"")?;
    let mut window = MainWindowState::new(&config)?;
    window.set_main_time(date(), 15, 0, 0)?;
    window.set_new_zone(Tz::UTC);
    window.add_clock()?;
    assert_eq!(window.wall.get("UTC").unwrap().time_label(), "01:00:00 PM");

    window.change_main_zone(Tz::America__Los_Angeles);
    let main = window.main_instant().unwrap().datetime();
    assert_eq!((main.hour(), main.minute()), (15, 0));
    assert_eq!(window.wall.get("UTC").unwrap().time_label(), "10:00:00 PM");
    Ok(())
}

#[test]
fn unknown_main_zone_is_rejected() {
    let config = clockwall_lib::config::Config {
        main_zone: Some("Moon/Tranquility".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        MainWindowState::new(&config),
        Err(ClockError::ZoneNotFound(_))
    ));
}
