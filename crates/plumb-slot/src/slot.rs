//! Single typed storage slots.

use crate::raw;
use plumb_core::Emplace;
use std::mem::MaybeUninit;

/// A typed, initially uninitialised storage location for one `T`.
///
/// The slot is exactly the size and alignment of `T` and never allocates.
/// No value is live in the slot until [`construct`](Slot::construct) or
/// [`write`](Slot::write) runs, and a constructed value stays live until
/// [`destroy`](Slot::destroy) runs — dropping the slot itself never runs
/// the value's destructor.
#[repr(transparent)]
pub struct Slot<T> {
    cell: MaybeUninit<T>,
}

impl<T> Slot<T> {
    /// Create an uninitialised slot.
    pub const fn empty() -> Self {
        Self {
            cell: MaybeUninit::uninit(),
        }
    }

    /// Construct a `T` in place from an argument tuple.
    ///
    /// The tuple must exactly match a constructor shape `T` declares via
    /// [`Emplace`]; the returned reference points at the slot's own
    /// storage. Constructing over a live value abandons it without
    /// running its destructor.
    ///
    /// ```
    /// use plumb_slot::Slot;
    ///
    /// let mut slot = Slot::<i32>::empty();
    /// let value = slot.construct(());
    /// assert_eq!(*value, 0);
    /// ```
    ///
    /// Argument tuples that match no declared constructor shape are
    /// rejected at compile time — wrong argument types:
    ///
    /// ```compile_fail
    /// use plumb_slot::Slot;
    ///
    /// let mut slot = Slot::<i32>::empty();
    /// slot.construct((1, '2', 3.0));
    /// ```
    ///
    /// wrong arity for a declared shape:
    ///
    /// ```compile_fail
    /// use plumb_slot::Slot;
    /// use plumb_test_utils::Triple;
    ///
    /// // Triple declares a three-argument shape, not a two-argument one.
    /// let mut slot = Slot::<Triple>::empty();
    /// slot.construct((1, '2'));
    /// ```
    ///
    /// and targets with no constructors at all, such as function
    /// pointers:
    ///
    /// ```compile_fail
    /// use plumb_slot::Slot;
    ///
    /// let mut slot = Slot::<fn() -> i32>::empty();
    /// slot.construct(());
    /// ```
    pub fn construct<A>(&mut self, args: A) -> &mut T
    where
        T: Emplace<A>,
    {
        self.write(T::emplace(args))
    }

    /// Place an already-built value into the slot.
    ///
    /// The constant-evaluable entry point: usable in `const` contexts
    /// when the value expression is itself constant. Like
    /// [`construct`](Slot::construct), overwriting a live value abandons
    /// it without running its destructor.
    pub const fn write(&mut self, value: T) -> &mut T {
        self.cell.write(value)
    }

    /// Run the destructor of the value in the slot, returning the slot to
    /// the uninitialised state. Storage is not released.
    ///
    /// # Safety
    ///
    /// The slot must currently hold a live value, and the caller must not
    /// read it again until a new value is constructed.
    pub unsafe fn destroy(&mut self) {
        // SAFETY: contract forwarded to the caller.
        unsafe { raw::drop_live(&mut self.cell) }
    }

    /// Borrow the value in the slot.
    ///
    /// # Safety
    ///
    /// The slot must currently hold a live value.
    pub unsafe fn assume_live(&self) -> &T {
        // SAFETY: contract forwarded to the caller.
        unsafe { raw::live_ref(&self.cell) }
    }

    /// Mutably borrow the value in the slot.
    ///
    /// # Safety
    ///
    /// The slot must currently hold a live value.
    pub unsafe fn assume_live_mut(&mut self) -> &mut T {
        // SAFETY: contract forwarded to the caller.
        unsafe { raw::live_mut(&mut self.cell) }
    }

    /// Address of the slot's storage.
    pub const fn as_ptr(&self) -> *const T {
        self.cell.as_ptr()
    }

    /// Mutable address of the slot's storage.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.cell.as_mut_ptr()
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::empty()
    }
}
