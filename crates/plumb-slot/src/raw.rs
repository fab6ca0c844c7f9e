//! Low-level primitives for slot memory operations.
//!
//! Everything `unsafe` in the workspace bottoms out here. Each function
//! has a single-sentence caller contract; callers restate it at the call
//! site.

use std::mem::{ManuallyDrop, MaybeUninit};

/// Read a shared reference to the value in `cell`.
///
/// Caller contract: `cell` holds a live, initialised value.
pub(crate) unsafe fn live_ref<T>(cell: &MaybeUninit<T>) -> &T {
    // SAFETY: the caller guarantees `cell` is initialised.
    unsafe { cell.assume_init_ref() }
}

/// Read a mutable reference to the value in `cell`.
///
/// Caller contract: `cell` holds a live, initialised value.
pub(crate) unsafe fn live_mut<T>(cell: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: the caller guarantees `cell` is initialised.
    unsafe { cell.assume_init_mut() }
}

/// Run the destructor of the value in `cell`, leaving it uninitialised.
///
/// Caller contract: `cell` holds a live, initialised value, and nothing
/// reads it again until it is re-initialised.
pub(crate) unsafe fn drop_live<T>(cell: &mut MaybeUninit<T>) {
    // SAFETY: the caller guarantees `cell` is initialised; after this
    // call the cell is treated as uninitialised again.
    unsafe { cell.assume_init_drop() }
}

/// Overlapping storage for two alternative member types.
///
/// `repr(C)` puts both members at offset zero, so activating either
/// member reuses the same address. `ManuallyDrop` members mean the union
/// itself never runs a destructor; lifetimes are managed entirely by the
/// caller through the functions below.
#[repr(C)]
pub(crate) union Overlap<A, B> {
    pub(crate) first: ManuallyDrop<A>,
    pub(crate) second: ManuallyDrop<B>,
}

/// Activate the first member with `value`, returning a reference to it.
///
/// Any previously active member is abandoned without running its
/// destructor, matching union active-member semantics.
pub(crate) fn write_first<A, B>(cell: &mut Overlap<A, B>, value: A) -> &mut A {
    cell.first = ManuallyDrop::new(value);
    // SAFETY: `first` was written on the line above, so it is the active
    // member and holds a live value.
    unsafe { &mut cell.first }
}

/// Activate the second member with `value`, returning a reference to it.
///
/// Any previously active member is abandoned without running its
/// destructor, matching union active-member semantics.
pub(crate) fn write_second<A, B>(cell: &mut Overlap<A, B>, value: B) -> &mut B {
    cell.second = ManuallyDrop::new(value);
    // SAFETY: `second` was written on the line above, so it is the active
    // member and holds a live value.
    unsafe { &mut cell.second }
}

/// Read the first member.
///
/// Caller contract: `first` is the active member and holds a live value.
pub(crate) unsafe fn first_ref<A, B>(cell: &Overlap<A, B>) -> &A {
    // SAFETY: the caller guarantees `first` is active and live.
    unsafe { &cell.first }
}

/// Read the second member.
///
/// Caller contract: `second` is the active member and holds a live value.
pub(crate) unsafe fn second_ref<A, B>(cell: &Overlap<A, B>) -> &B {
    // SAFETY: the caller guarantees `second` is active and live.
    unsafe { &cell.second }
}

/// Run the first member's destructor, deactivating it.
///
/// Caller contract: `first` is the active member and holds a live value;
/// nothing reads it again until a member is re-activated.
pub(crate) unsafe fn drop_first<A, B>(cell: &mut Overlap<A, B>) {
    // SAFETY: the caller guarantees `first` is active and live.
    unsafe { ManuallyDrop::drop(&mut cell.first) }
}

/// Run the second member's destructor, deactivating it.
///
/// Caller contract: `second` is the active member and holds a live value;
/// nothing reads it again until a member is re-activated.
pub(crate) unsafe fn drop_second<A, B>(cell: &mut Overlap<A, B>) {
    // SAFETY: the caller guarantees `second` is active and live.
    unsafe { ManuallyDrop::drop(&mut cell.second) }
}
