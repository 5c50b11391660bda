use super::support::Support;
use std::collections::HashMap;

/// Insertion-ordered weights keyed by distribution values.
///
/// Keys are enumerated in the order they were first inserted; lookups go
/// through a hash index into a dense slot vector. Slots are never removed,
/// so indices stay valid for the life of the tally.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tally<T: Support> {
    index: HashMap<T, usize>,
    slots: Vec<(T, f64)>,
}

impl<T: Support> Default for Tally<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            slots: Vec::new(),
        }
    }
}

impl<T: Support> Tally<T> {
    /// the weight stored for x. 0 if x was never inserted.
    pub fn get(&self, x: &T) -> f64 {
        self.lookup(x).copied().unwrap_or(0.)
    }
    /// the weight stored for x, only if x was inserted.
    pub fn lookup(&self, x: &T) -> Option<&f64> {
        self.index.get(x).map(|&i| &self.slots[i].1)
    }
    /// mutable weight for x, inserting a zero slot on first sight.
    pub fn slot(&mut self, x: T) -> &mut f64 {
        let i = match self.index.get(&x) {
            Some(&i) => i,
            None => {
                let i = self.slots.len();
                self.index.insert(x.clone(), i);
                self.slots.push((x, 0.));
                i
            }
        };
        &mut self.slots[i].1
    }
    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> + '_ {
        self.slots.iter().map(|(x, w)| (x, *w))
    }
    pub fn weights_mut(&mut self) -> impl Iterator<Item = &mut f64> + '_ {
        self.slots.iter_mut().map(|(_, w)| w)
    }
    pub fn keys(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().map(|(x, _)| x)
    }
    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn sum(&self) -> f64 {
        self.slots.iter().map(|(_, w)| w).sum()
    }
}
