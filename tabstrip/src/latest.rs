use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

/// A shared single-slot cell that always holds the most recently written value.
///
/// Every clone points at the same slot, so a handle captured long ago (for example inside a
/// callback given to a renderer during an earlier render) reads whatever was written last
/// rather than the value that existed when it was captured.
///
/// The cell is `Rc`-based and therefore confined to one thread, matching the event model of the
/// UI thread it serves.
pub struct Latest<T> {
    slot: Rc<RefCell<T>>,
}

impl<T> Latest<T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(RefCell::new(value)),
        }
    }

    /// Overwrites the slot.
    pub fn set(&self, value: T) {
        *self.slot.borrow_mut() = value;
    }

    /// Overwrites the slot and returns the previous value.
    pub fn replace(&self, value: T) -> T {
        self.slot.replace(value)
    }

    /// Runs `f` against the current value.
    ///
    /// `f` must not write to this same cell.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.slot.borrow())
    }

    /// Runs `f` with mutable access to the current value.
    ///
    /// `f` must not touch this same cell.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.slot.borrow_mut())
    }

    /// Returns `true` if both handles share one slot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<T: Clone> Latest<T> {
    /// Clones the current value out of the slot.
    pub fn get(&self) -> T {
        self.slot.borrow().clone()
    }
}

impl<T: Default> Default for Latest<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Clone for Latest<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Latest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.try_borrow() {
            Ok(v) => f.debug_tuple("Latest").field(&*v).finish(),
            Err(_) => f.write_str("Latest(<borrowed>)"),
        }
    }
}
