//! Confirmed/unconfirmed information about a combatant
//!
//! Each entry carries a value and a confirmed flag. Estimates may be
//! replaced freely until an observed event confirms the entry; after that
//! estimates are ignored. Confirmation is one-way, but a later reveal still
//! replaces the stored value.

use scout_protocol::InfoEntry;

use super::pokemon_type::Type;
use super::stats::StatBlock;

/// One ledger entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Known<T> {
    value: Option<T>,
    confirmed: bool,
}

impl<T> Default for Known<T> {
    fn default() -> Self {
        Self::unknown()
    }
}

impl<T> Known<T> {
    /// Nothing known yet
    pub fn unknown() -> Self {
        Self {
            value: None,
            confirmed: false,
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Record an observed value
    pub fn reveal(&mut self, value: T) {
        self.value = Some(value);
        self.confirmed = true;
    }

    /// Record that there is nothing to know (a consumed item, no tera type)
    pub fn reveal_none(&mut self) {
        self.value = None;
        self.confirmed = true;
    }

    /// Record an estimate, returns false if the entry is already confirmed
    pub fn estimate(&mut self, value: T) -> bool {
        if self.confirmed {
            return false;
        }
        self.value = Some(value);
        true
    }
}

impl<T: std::fmt::Display> Known<T> {
    pub fn to_entry(&self) -> InfoEntry {
        InfoEntry {
            value: self.value.as_ref().map(|v| v.to_string()),
            confirmed: self.confirmed,
        }
    }
}

/// A piece of information observed (or estimated) for a ledger category
#[derive(Debug, Clone, PartialEq)]
pub enum Reveal {
    Item(String),
    Ability(String),
    TeraType(Type),
    Stats(StatBlock),
}

/// Item, ability, tera type and stat spread of one combatant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoLedger {
    pub item: Known<String>,
    pub ability: Known<String>,
    pub tera_type: Known<Type>,
    pub stats: Known<StatBlock>,
}

impl InfoLedger {
    /// Confirm one category
    pub fn reveal(&mut self, reveal: Reveal) {
        match reveal {
            Reveal::Item(item) => self.item.reveal(item),
            Reveal::Ability(ability) => self.ability.reveal(ability),
            Reveal::TeraType(tera) => self.tera_type.reveal(tera),
            Reveal::Stats(stats) => self.stats.reveal(stats),
        }
    }

    /// Estimate one category, returns false if it was already confirmed
    pub fn estimate(&mut self, estimate: Reveal) -> bool {
        match estimate {
            Reveal::Item(item) => self.item.estimate(item),
            Reveal::Ability(ability) => self.ability.estimate(ability),
            Reveal::TeraType(tera) => self.tera_type.estimate(tera),
            Reveal::Stats(stats) => self.stats.estimate(stats),
        }
    }

    /// Confirm every unconfirmed item, ability and tera type as absent
    pub fn confirm_absent(&mut self) {
        if !self.item.is_confirmed() {
            self.item.reveal_none();
        }
        if !self.ability.is_confirmed() {
            self.ability.reveal_none();
        }
        if !self.tera_type.is_confirmed() {
            self.tera_type.reveal_none();
        }
    }

    /// Check whether the known item has the given name
    pub fn has_item(&self, name: &str) -> bool {
        self.item
            .value()
            .is_some_and(|item| crate::reference::to_id(item) == crate::reference::to_id(name))
    }

    pub fn is_fully_confirmed(&self) -> bool {
        self.item.is_confirmed()
            && self.ability.is_confirmed()
            && self.tera_type.is_confirmed()
            && self.stats.is_confirmed()
    }
}
