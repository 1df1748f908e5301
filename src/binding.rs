//! Two-way binding between the picker and a host form control.
//!
//! The host owns a single string field. It pushes values in with
//! [`ValueAccessor::write_value`] and learns about changes made inside the picker
//! through the callbacks it registers.

/// Called with the new bound value after the picker changes it
pub type ChangeCallback = Box<dyn FnMut(&str)>;
/// Called when the user leaves the picker
pub type TouchedCallback = Box<dyn FnMut()>;

/// A form control bound to one string value.
pub trait ValueAccessor {
    type Error;

    /// Current bound value
    fn value(&self) -> &str;

    /// Assigns the value from the control's side and notifies the change callback.
    /// Empty values are ignored.
    ///
    /// # Errors
    /// Returns the control's error when the value is rejected; the control keeps its
    /// previous value.
    fn set_value(&mut self, value: &str) -> Result<(), Self::Error>;

    /// Writes a value coming from the host model without notifying it back.
    /// Empty values are ignored.
    ///
    /// # Errors
    /// Returns the control's error when the value is rejected; the control keeps its
    /// previous value.
    fn write_value(&mut self, value: &str) -> Result<(), Self::Error>;

    fn register_on_change(&mut self, callback: ChangeCallback);

    fn register_on_touched(&mut self, callback: TouchedCallback);
}
