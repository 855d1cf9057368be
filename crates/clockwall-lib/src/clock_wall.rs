use indexmap::IndexMap;

use crate::clock_widget::{ClockWidget, WidgetSignal, DEFAULT_CLOCK_SIZE};
use crate::error::ClockError;
use crate::main_instant::MainInstant;
use crate::zones::resolve_zone;

pub const DEFAULT_COLUMNS: usize = 4;

/// The clocks on the wall, keyed by zone identifier, in the order they were added.
///
/// The wall is the only owner of its widgets. Widgets never remove themselves: they
/// emit a [`WidgetSignal`], which the wall queues and applies in [`ClockWall::dispatch`].
#[derive(Debug, Clone)]
pub struct ClockWall {
    widgets: IndexMap<String, ClockWidget>,
    pending: Vec<(String, WidgetSignal)>,
    columns: usize,
    clock_size: f32,
}

impl Default for ClockWall {
    fn default() -> Self {
        ClockWall::new(DEFAULT_COLUMNS, DEFAULT_CLOCK_SIZE)
    }
}

impl ClockWall {
    pub fn new(columns: usize, clock_size: f32) -> Self {
        ClockWall {
            widgets: IndexMap::new(),
            pending: Vec::new(),
            columns: columns.max(1),
            clock_size,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.widgets.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&ClockWidget> {
        self.widgets.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.widgets.keys().map(String::as_str)
    }

    pub fn widgets_mut(&mut self) -> impl Iterator<Item = (&str, &mut ClockWidget)> {
        self.widgets.iter_mut().map(|(id, w)| (id.as_str(), w))
    }

    /// Adds a clock for `id`. Returns `false` when the zone is already on the wall.
    ///
    /// Clocks are keyed by the database name of the zone, so two spellings of the
    /// same zone share one clock.
    pub fn add_zone(&mut self, id: &str) -> Result<bool, ClockError> {
        let zone = resolve_zone(id)?;
        let key = zone.name();
        if self.widgets.contains_key(key) {
            log::debug!("{key} is already on the wall");
            return Ok(false);
        }
        self.widgets
            .insert(key.to_string(), ClockWidget::new(zone, self.clock_size));
        log::info!("Added a clock for {key}");
        Ok(true)
    }

    /// Removes the clock for `id`. A zone that is not on the wall is reported, not ignored.
    pub fn remove_zone(&mut self, id: &str) -> Result<(), ClockError> {
        let key = resolve_zone(id).map(|zone| zone.name()).unwrap_or(id);
        match self.widgets.shift_remove(key) {
            Some(_) => {
                log::info!("Removed the clock for {id}");
                Ok(())
            }
            None => Err(ClockError::ZoneNotOnWall(id.to_string())),
        }
    }

    pub fn broadcast_main_instant(&mut self, instant: &MainInstant) {
        for widget in self.widgets.values_mut() {
            widget.on_main_instant_changed(instant);
        }
    }

    /// Queues a signal emitted by the widget of `id`.
    pub fn signal(&mut self, id: &str, signal: WidgetSignal) {
        self.pending.push((id.to_string(), signal));
    }

    /// Applies the queued signals. Returns whether the wall changed.
    pub fn dispatch(&mut self) -> bool {
        let mut changed = false;
        for (id, signal) in std::mem::take(&mut self.pending) {
            match signal {
                WidgetSignal::RemoveRequested => match self.remove_zone(&id) {
                    Ok(()) => changed = true,
                    Err(e) => log::warn!("Ignoring a signal from a removed clock: {e}"),
                },
            }
        }
        changed
    }

    /// Identifiers grouped by grid row.
    pub fn rows(&self) -> Vec<Vec<&str>> {
        let ids: Vec<&str> = self.ids().collect();
        ids.chunks(self.columns).map(|row| row.to_vec()).collect()
    }
}
