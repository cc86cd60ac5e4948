// This file is part of WordGridSolver.
//
// WordGridSolver is free software: you can redistribute it and/or modify it under the terms of the
// GNU General Public License as published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// WordGridSolver is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with WordGridSolver. If
// not, see <https://www.gnu.org/licenses/>.
//

//! A counting gate on how many explorations run at once.

use std::sync::{Condvar, Mutex};

/// Hands out at most `capacity` [`Permit`]s at a time.
///
/// A permit gives its slot back when dropped, so a branch releases its slot on
/// every way out, early pruning and panics included.
#[derive(Debug)]
pub struct Governor {
    capacity: usize,
    in_flight: Mutex<usize>,
    freed: Condvar,
}

#[derive(Debug)]
#[must_use = "the slot is released as soon as the permit is dropped"]
pub struct Permit<'a> {
    governor: &'a Governor,
}

impl Governor {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "A governor needs at least one slot!");
        return Self {
            capacity,
            in_flight: Mutex::new(0),
            freed: Condvar::new(),
        };
    }

    pub fn capacity(&self) -> usize { return self.capacity; }

    pub fn in_flight(&self) -> usize {
        return *self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
    }

    /// Blocks until a slot is free.
    pub fn acquire(&self) -> Permit<'_> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        while *in_flight >= self.capacity {
            in_flight = self.freed.wait(in_flight).unwrap_or_else(|e| e.into_inner());
        }
        *in_flight += 1;
        return Permit { governor: self };
    }

    /// Takes a slot only if one is free right now.
    pub fn try_acquire(&self) -> Option<Permit<'_>> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if *in_flight >= self.capacity { return None; }
        *in_flight += 1;
        return Some(Permit { governor: self });
    }

    fn release(&self) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        *in_flight -= 1;
        self.freed.notify_one();
    }
}

impl Drop for Permit<'_> {
    fn drop(&mut self) {
        self.governor.release();
    }
}
