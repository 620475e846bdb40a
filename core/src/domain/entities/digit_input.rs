//! Per-slot OTP digit entry with focus tracking.

use lu_shared::types::OtpLength;

/// The digits a user has typed, one slot per code digit
///
/// The number of slots is fixed at construction. Each slot holds nothing or a
/// single ASCII digit; any other input is rejected and leaves the slot as it
/// was. Focus follows the usual OTP keypad behaviour: it advances after a
/// digit is accepted and retreats when backspace is pressed on an empty slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitInput {
    slots: Vec<Option<char>>,
    focus: usize,
}

impl DigitInput {
    /// Create empty input with one slot per digit of `length`
    pub fn new(length: OtpLength) -> Self {
        Self {
            slots: vec![None; length.digits()],
            focus: 0,
        }
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Index of the focused slot
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Digit in a slot, if any
    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// Slot values as displayed, empty string for an empty slot
    pub fn entries(&self) -> Vec<String> {
        self.slots
            .iter()
            .map(|slot| slot.map(String::from).unwrap_or_default())
            .collect()
    }

    /// The filled slots joined in order
    pub fn value(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    /// Whether every slot holds a digit
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Replace a slot's content with `text`
    ///
    /// Accepts an empty string (clears the slot) or exactly one ASCII digit.
    /// Returns `false` and leaves the slot unchanged for anything else or an
    /// out-of-range index.
    pub fn set_slot(&mut self, index: usize, text: &str) -> bool {
        if index >= self.slots.len() {
            return false;
        }

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {
                self.slots[index] = None;
                self.focus = index;
                true
            }
            (Some(c), None) if c.is_ascii_digit() => {
                self.slots[index] = Some(c);
                self.focus = (index + 1).min(self.slots.len() - 1);
                true
            }
            _ => false,
        }
    }

    /// Handle a backspace key press on a slot
    ///
    /// A filled slot is cleared and keeps focus; an empty slot moves focus
    /// to the previous slot (no-op on the first slot).
    pub fn backspace(&mut self, index: usize) -> bool {
        if index >= self.slots.len() {
            return false;
        }

        if self.slots[index].take().is_some() {
            self.focus = index;
        } else {
            self.focus = index.saturating_sub(1);
        }
        true
    }

    /// Distribute a pasted code across the slots starting at the first one
    ///
    /// The paste is rejected as a whole if it is empty, longer than the slot
    /// count, or contains anything but ASCII digits.
    pub fn paste(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty()
            || text.chars().count() > self.slots.len()
            || !text.chars().all(|c| c.is_ascii_digit())
        {
            return false;
        }

        self.clear();
        for (slot, c) in self.slots.iter_mut().zip(text.chars()) {
            *slot = Some(c);
        }
        self.focus = text.len().min(self.slots.len() - 1);
        true
    }

    /// Empty every slot and focus the first one
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.focus = 0;
    }
}
