//! Signal Store
//!
//! Lets the core view models keep their state in a Leptos signal, so every
//! update they make re-renders whatever reads it.

use brandcast::Store;
use leptos::*;

pub struct SignalStore<T: 'static>(RwSignal<T>);

impl<T: 'static> SignalStore<T> {
    pub fn new(value: T) -> Self {
        Self(create_rw_signal(value))
    }

    /// Underlying signal, for reading inside views
    pub fn signal(&self) -> RwSignal<T> {
        self.0
    }
}

impl<T: 'static> Clone for SignalStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalStore<T> {}

impl<T: 'static> Store<T> for SignalStore<T> {
    fn update(&self, f: impl FnOnce(&mut T)) {
        self.0.update(f);
    }

    fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.get_untracked()
    }
}
