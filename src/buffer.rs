//! Flat component buffers for marshaling vectors and points.
//!
//! A [`ComponentBuffer`] is a fixed-capacity slice with a read/write cursor.
//! Types implementing [`Components`] store their components at the cursor in
//! declared order (`x`, `y`, then `z`) and advance it by exactly
//! [`Components::COMPONENT_COUNT`] slots.
//!
//! Capacity is checked before any slot is touched, so a failed operation
//! leaves both the buffer contents and the cursor unchanged.
//!
//! ```
//! use boundum::{ComponentBuffer, Components, Vec3};
//!
//! let mut storage = [0.0f32; 6];
//! let mut buffer = ComponentBuffer::new(&mut storage);
//! Vec3::new(1.0, 2.0, 3.0).write_components(&mut buffer).unwrap();
//! Vec3::new(4.0, 5.0, 6.0).write_components(&mut buffer).unwrap();
//! assert_eq!(buffer.remaining(), 0);
//! assert_eq!(storage, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! ```

use crate::error::{GeomError, Result};
use num_traits::Float;

/// A fixed-capacity numeric buffer with a sequential cursor.
#[derive(Debug)]
pub struct ComponentBuffer<'a, F> {
    data: &'a mut [F],
    position: usize,
}

impl<'a, F: Float> ComponentBuffer<'a, F> {
    /// Wraps `data` with the cursor at the start.
    #[inline]
    pub fn new(data: &'a mut [F]) -> Self {
        Self { data, position: 0 }
    }

    /// Total number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Current cursor position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Slots between the cursor and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Moves the cursor back to the start.
    #[inline]
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Moves the cursor to `position`.
    ///
    /// A position equal to the capacity is allowed and leaves no room.
    pub fn set_position(&mut self, position: usize) -> Result<()> {
        if position > self.data.len() {
            return Err(GeomError::PositionOutOfBounds {
                position,
                capacity: self.data.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Returns the whole underlying slice, independent of the cursor.
    #[inline]
    pub fn as_slice(&self) -> &[F] {
        &*self.data
    }

    /// Writes `values` at the cursor and advances past them.
    pub fn put(&mut self, values: &[F]) -> Result<()> {
        self.ensure_remaining(values.len())?;
        let end = self.position + values.len();
        self.data[self.position..end].copy_from_slice(values);
        self.position = end;
        Ok(())
    }

    /// Reads `N` values at the cursor and advances past them.
    pub fn take<const N: usize>(&mut self) -> Result<[F; N]> {
        self.ensure_remaining(N)?;
        let mut values = [F::zero(); N];
        values.copy_from_slice(&self.data[self.position..self.position + N]);
        self.position += N;
        Ok(values)
    }

    /// Checks room for `count` values of `per_value` slots each.
    ///
    /// An overflowing product is reported as `required: usize::MAX`, which no
    /// slice can satisfy.
    fn ensure_batch(&self, count: usize, per_value: usize) -> Result<()> {
        self.ensure_remaining(count.checked_mul(per_value).unwrap_or(usize::MAX))
    }

    fn ensure_remaining(&self, required: usize) -> Result<()> {
        let remaining = self.remaining();
        if remaining < required {
            tracing::trace!(
                required,
                remaining,
                position = self.position,
                "rejected component buffer access"
            );
            return Err(GeomError::BufferUnderflow {
                required,
                remaining,
            });
        }
        Ok(())
    }
}

/// Values that marshal to and from a [`ComponentBuffer`] in a fixed order.
pub trait Components<F: Float>: Sized {
    /// Number of slots consumed by one value.
    const COMPONENT_COUNT: usize;

    /// Stores the components at the buffer cursor.
    ///
    /// Fails with [`GeomError::BufferUnderflow`] without writing anything if
    /// fewer than [`Self::COMPONENT_COUNT`] slots remain.
    fn write_components(&self, destination: &mut ComponentBuffer<'_, F>) -> Result<()>;

    /// Replaces the components with values read at the buffer cursor.
    ///
    /// Fails with [`GeomError::BufferUnderflow`] without modifying `self` if
    /// fewer than [`Self::COMPONENT_COUNT`] slots remain.
    fn read_components(&mut self, source: &mut ComponentBuffer<'_, F>) -> Result<()>;

    /// Builds a new value from the components at the buffer cursor.
    fn from_components(source: &mut ComponentBuffer<'_, F>) -> Result<Self>
    where
        Self: Default,
    {
        let mut value = Self::default();
        value.read_components(source)?;
        Ok(value)
    }
}

/// Writes every value in `items` to `destination`.
///
/// The space for the whole batch is checked up front, so either all items
/// are written or none are.
pub fn write_all<F, T>(items: &[T], destination: &mut ComponentBuffer<'_, F>) -> Result<()>
where
    F: Float,
    T: Components<F>,
{
    destination.ensure_batch(items.len(), T::COMPONENT_COUNT)?;
    for item in items {
        item.write_components(destination)?;
    }
    Ok(())
}

/// Reads `count` values from `source`.
///
/// Fails without advancing the cursor if the buffer cannot supply all of
/// them.
pub fn read_all<F, T>(count: usize, source: &mut ComponentBuffer<'_, F>) -> Result<Vec<T>>
where
    F: Float,
    T: Components<F> + Default,
{
    source.ensure_batch(count, T::COMPONENT_COUNT)?;
    (0..count).map(|_| T::from_components(source)).collect()
}
