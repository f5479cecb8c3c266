use taskpad_core::TaskBook;
use taskpad_store::{JsonSlot, StoreError};

/// Storage abstraction so the session logic can be unit-tested without
/// touching the filesystem.
pub trait SlotStore {
    /// Error raised by failed writes.
    type Error: std::error::Error;

    /// Read the full task list; absent or invalid data yields an empty
    /// book.
    fn load(&self) -> TaskBook;

    /// Rewrite the full task list.
    ///
    /// # Errors
    /// Returns an error when the slot cannot be written.
    fn save(&self, book: &TaskBook) -> Result<(), Self::Error>;
}

impl SlotStore for JsonSlot {
    type Error = StoreError;

    fn load(&self) -> TaskBook {
        Self::load(self)
    }

    fn save(&self, book: &TaskBook) -> Result<(), Self::Error> {
        Self::save(self, book)
    }
}
