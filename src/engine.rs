//! The picker engine: owns the selection, the rendered grid and the bound value.
//!
//! Every operation runs to completion synchronously. Whenever the selection
//! changes, the grid is regenerated and the bound value re-derived before the
//! operation returns, so callers never observe a stale value.

use std::fmt;

use chrono::NaiveDate;

use crate::binding::{ChangeCallback, TouchedCallback, ValueAccessor};
use crate::clock::{Clock, SystemClock};
use crate::grid::{DayCell, render_month};
use crate::options::PickerOptions;
use crate::preset::resolve_preset;
use crate::range::{DateRange, RangeError, ValueFormat};
use crate::selection::{Endpoint, SelectionState, TransitionError};
use crate::types::{Preset, Theme};

/// Where a document-level click landed, as seen by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickTarget {
    pub inside_widget: bool,
    pub on_day_cell:   bool,
}

impl ClickTarget {
    pub const fn outside() -> Self {
        Self {
            inside_widget: false,
            on_day_cell:   false,
        }
    }

    pub const fn inside() -> Self {
        Self {
            inside_widget: true,
            on_day_cell:   false,
        }
    }

    pub const fn day_cell() -> Self {
        Self {
            inside_widget: true,
            on_day_cell:   true,
        }
    }
}

pub struct CalendarRangeEngine<C = SystemClock> {
    options:    PickerOptions,
    format:     ValueFormat,
    clock:      C,
    state:      SelectionState,
    preset:     Option<Preset>,
    days:       Vec<DayCell>,
    value:      String,
    on_change:  ChangeCallback,
    on_touched: TouchedCallback,
}

impl CalendarRangeEngine<SystemClock> {
    /// Builds an engine on the system clock, initialized from the default preset.
    pub fn new(options: PickerOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }
}

impl<C: Clock> CalendarRangeEngine<C> {
    /// Builds an engine initialized from the configured default preset.
    pub fn with_clock(options: PickerOptions, clock: C) -> Self {
        let format = options.value_format();
        let preset = options.range;
        let today = clock.today();
        let (state, preset) = Self::preset_state(preset, today, &options)
            .map_or_else(|| (Self::fallback_state(today), None), |state| (state, Some(preset)));

        let mut engine = Self {
            options,
            format,
            clock,
            state,
            preset,
            days: Vec::new(),
            value: String::new(),
            on_change: Box::new(|_| {}),
            on_touched: Box::new(|| {}),
        };
        engine.refresh();
        engine
    }

    /// Builds an engine from a bound value, falling back to the default preset when
    /// the value does not parse.
    pub fn with_value(options: PickerOptions, clock: C, value: &str) -> Self {
        let mut engine = Self::with_clock(options, clock);
        match engine.format.parse(value) {
            Ok(range) => {
                engine.preset = None;
                engine.state = SelectionState::new(range.start(), range);
                engine.refresh();
            }
            Err(err) => log::warn!("ignoring initial value {value:?}: {err}"),
        }
        engine
    }

    /// Re-initializes from new options. Registered callbacks and the clock are kept.
    pub fn reconfigure(&mut self, options: PickerOptions) {
        self.format = options.value_format();
        self.options = options;
        self.preset = None;
        let today = self.clock.today();
        let preset = self.options.range;
        match Self::preset_state(preset, today, &self.options) {
            Some(state) => {
                self.preset = Some(preset);
                self.commit(state);
            }
            None => self.commit(Self::fallback_state(today)),
        }
    }

    fn preset_state(preset: Preset, today: NaiveDate, options: &PickerOptions) -> Option<SelectionState> {
        let resolved = resolve_preset(preset, today, options.start_of_week)?;
        Some(SelectionState::new(resolved.displayed_month, resolved.range))
    }

    fn fallback_state(today: NaiveDate) -> SelectionState {
        SelectionState::new(today, DateRange::single(today))
    }

    // --- accessors ---

    pub const fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub const fn theme(&self) -> Theme {
        self.options.theme
    }

    /// Column headers, first column first
    pub fn day_names(&self) -> &[String] {
        &self.options.day_names
    }

    pub fn preset_label(&self, preset: Preset) -> &str {
        self.options.preset_names.preset(preset)
    }

    pub fn endpoint_label(&self, endpoint: Endpoint) -> &str {
        self.options.preset_names.endpoint(endpoint)
    }

    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    pub const fn range(&self) -> DateRange {
        self.state.range()
    }

    pub const fn displayed_month(&self) -> NaiveDate {
        self.state.displayed_month()
    }

    pub const fn open_endpoint(&self) -> Option<Endpoint> {
        self.state.open_endpoint()
    }

    /// Preset that produced the current range, cleared by manual selection
    pub const fn current_preset(&self) -> Option<Preset> {
        self.preset
    }

    /// Grid produced by the last state change
    pub fn days(&self) -> &[DayCell] {
        &self.days
    }

    // --- operations ---

    pub fn apply_preset(&mut self, preset: Preset) {
        let today = self.clock.today();
        let Some(state) = Self::preset_state(preset, today, &self.options) else {
            log::debug!("preset {preset} is out of range on {today}");
            return;
        };
        log::trace!("preset {preset} -> {}", state.range());
        self.preset = Some(preset);
        self.commit(state);
    }

    pub fn toggle_endpoint(&mut self, which: Endpoint) {
        let next = self.state.toggled(which);
        log::trace!("toggle {which}: {:?} -> {:?}", self.state.open_endpoint(), next.open_endpoint());
        self.state = next;
    }

    /// Moves the open endpoint to `date`.
    ///
    /// # Errors
    /// Returns the reason the click was ignored. The engine is left untouched and
    /// stays interactive.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), TransitionError> {
        let next = self.state.selected(date).inspect_err(|err| log::debug!("ignored day click: {err}"))?;
        self.preset = None;
        self.commit(next);
        Ok(())
    }

    /// Resolves a clicked cell of the current grid and selects its date.
    ///
    /// # Errors
    /// Returns `TransitionError::NoSuchCell` or `TransitionError::FillerCell` for
    /// cells that cannot be picked, otherwise whatever [`Self::select_date`] returns.
    pub fn select_cell(&mut self, index: usize) -> Result<(), TransitionError> {
        let cell = self
            .days
            .get(index)
            .copied()
            .ok_or_else(|| TransitionError::NoSuchCell {
                index,
                len: self.days.len(),
            })
            .inspect_err(|err| log::debug!("ignored day click: {err}"))?;
        if !cell.is_in_displayed_month {
            log::debug!("ignored click on filler cell {}", cell.date);
            return Err(TransitionError::FillerCell { date: cell.date });
        }
        self.select_date(cell.date)
    }

    /// Shifts the displayed month by `delta` months.
    pub fn navigate_month(&mut self, delta: i32) {
        match self.state.navigated(delta) {
            Some(next) => self.commit(next),
            None => log::debug!("cannot move {delta} months from {}", self.state.displayed_month()),
        }
    }

    pub fn prev_month(&mut self) {
        self.navigate_month(-1);
    }

    pub fn next_month(&mut self) {
        self.navigate_month(1);
    }

    /// Forces the popup closed. Leaving an open popup counts as a touch.
    pub fn close(&mut self) {
        if self.state.is_open() {
            self.state = self.state.closed();
            (self.on_touched)();
        }
    }

    /// Closes the popup for clicks outside the widget that did not hit a day cell.
    pub fn handle_document_click(&mut self, target: ClickTarget) {
        if !target.inside_widget && !target.on_day_cell {
            self.close();
        }
    }

    /// Regenerates the grid for the current state.
    pub fn render(&mut self) -> &[DayCell] {
        self.days = render_month(
            self.state.displayed_month(),
            &self.state.range(),
            self.options.start_of_week,
            self.clock.today(),
        );
        &self.days
    }

    /// The selected range written in the bound-value format
    pub fn serialize(&self) -> String {
        self.format.format(&self.state.range())
    }

    /// Replaces the range from a bound value and closes the popup. The displayed
    /// month is kept. On error nothing changes.
    ///
    /// # Errors
    /// Returns `RangeError` when the value is malformed or its start is after its end.
    pub fn deserialize(&mut self, value: &str) -> Result<(), RangeError> {
        let range = self
            .format
            .parse(value)
            .inspect_err(|err| log::warn!("ignoring bound value {value:?}: {err}"))?;
        self.preset = None;
        self.state = self.state.with_range(range);
        self.refresh();
        Ok(())
    }

    fn commit(&mut self, next: SelectionState) {
        self.state = next;
        if self.refresh() {
            (self.on_change)(&self.value);
        }
    }

    /// Re-derives grid and value. Returns whether the value changed.
    fn refresh(&mut self) -> bool {
        self.render();
        let value = self.serialize();
        if value == self.value {
            return false;
        }
        self.value = value;
        true
    }
}

impl<C: Clock> ValueAccessor for CalendarRangeEngine<C> {
    type Error = RangeError;

    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) -> Result<(), Self::Error> {
        if value.is_empty() {
            return Ok(());
        }
        self.deserialize(value)?;
        (self.on_change)(&self.value);
        Ok(())
    }

    fn write_value(&mut self, value: &str) -> Result<(), Self::Error> {
        if value.is_empty() {
            return Ok(());
        }
        self.deserialize(value)
    }

    fn register_on_change(&mut self, callback: ChangeCallback) {
        self.on_change = callback;
    }

    fn register_on_touched(&mut self, callback: TouchedCallback) {
        self.on_touched = callback;
    }
}

impl<C: fmt::Debug> fmt::Debug for CalendarRangeEngine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarRangeEngine")
            .field("options", &self.options)
            .field("clock", &self.clock)
            .field("state", &self.state)
            .field("preset", &self.preset)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
