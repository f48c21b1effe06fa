use std::{collections::HashMap, sync::Mutex};

use super::binding::{CardAccent, DisplayBinding, ResolveBindings, StatCard};

/// The live dashboard surface: whichever summary cards are currently
/// mounted, keyed by accent. Cards may be mounted and removed at any time;
/// the refresh loop re-resolves on every tick.
#[derive(Default)]
pub struct DashboardPage {
    cards: Mutex<HashMap<CardAccent, StatCard>>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a fresh card under the given accent, replacing any card that
    /// was there before. Returns the handle the page renders from.
    pub fn mount_card(&self, accent: CardAccent) -> StatCard {
        let card = StatCard::new();
        self.cards
            .lock()
            .expect("card registry lock poisoned")
            .insert(accent, card.clone());
        card
    }

    pub fn remove_card(&self, accent: CardAccent) {
        self.cards
            .lock()
            .expect("card registry lock poisoned")
            .remove(&accent);
    }

    pub fn card(&self, accent: CardAccent) -> Option<StatCard> {
        self.cards
            .lock()
            .expect("card registry lock poisoned")
            .get(&accent)
            .cloned()
    }
}

impl ResolveBindings for DashboardPage {
    fn resolve_bindings(&self) -> DisplayBinding {
        let cards = self.cards.lock().expect("card registry lock poisoned");
        DisplayBinding {
            total_users: cards.get(&CardAccent::Primary).cloned(),
            active_users: cards.get(&CardAccent::Success).cloned(),
            active_connections: cards.get(&CardAccent::Warning).cloned(),
            total_channels: cards.get(&CardAccent::Info).cloned(),
        }
    }
}
