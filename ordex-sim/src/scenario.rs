use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Duration;

use ordex_shared::{InventoryDecision, PaymentDecision, PaymentStatus};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

const INVENTORY_DELAY: Duration = Duration::from_millis(50);
const PAYMENT_DELAY: Duration = Duration::from_millis(100);
const SLOW_DELAY: Duration = Duration::from_secs(2);

/// Named end-to-end scenarios, keyed by item id in the standard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Success,
    OutOfStock,
    InsufficientFunds,
    InventoryError,
    PaymentError,
    SlowInventory,
    SlowPayment,
}

/// What a simulator should do for one request: wait, then either answer
/// with a decision body or fake an internal error (HTTP 500).
pub enum SimReply<T> {
    Body(T),
    InternalError,
}

pub struct Behavior<T> {
    pub delay: Duration,
    pub reply: SimReply<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableEntry {
    pub item_id: i32,
    pub scenario: Scenario,
}

/// Deterministic decision table: item id → scenario. Data-driven so test
/// profiles can be swapped without code changes.
pub struct ScenarioTable {
    rows: BTreeMap<i32, Scenario>,
}

impl ScenarioTable {
    /// The fixed table exercised by the end-to-end tests and the load
    /// generator.
    pub fn standard() -> Self {
        Self::with_rows([
            (1, Scenario::Success),
            (2, Scenario::OutOfStock),
            (3, Scenario::InsufficientFunds),
            (4, Scenario::InventoryError),
            (5, Scenario::PaymentError),
            (6, Scenario::SlowInventory),
            (7, Scenario::SlowPayment),
        ])
    }

    pub fn with_rows(rows: impl IntoIterator<Item = (i32, Scenario)>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    pub fn scenario_for(&self, item_id: i32) -> Option<Scenario> {
        self.rows.get(&item_id).copied()
    }

    pub fn entries(&self) -> Vec<TableEntry> {
        self.rows
            .iter()
            .map(|(&item_id, &scenario)| TableEntry { item_id, scenario })
            .collect()
    }

    fn inventory_behavior(&self, item_id: i32) -> Behavior<InventoryDecision> {
        match self.scenario_for(item_id) {
            Some(Scenario::OutOfStock) => Behavior {
                delay: INVENTORY_DELAY,
                reply: SimReply::Body(InventoryDecision {
                    in_stock: false,
                    reason: Some("Out of stock".to_string()),
                }),
            },
            Some(Scenario::InventoryError) => Behavior {
                delay: INVENTORY_DELAY,
                reply: SimReply::InternalError,
            },
            Some(Scenario::SlowInventory) => Behavior {
                delay: SLOW_DELAY,
                reply: SimReply::Body(in_stock()),
            },
            Some(_) => Behavior {
                delay: INVENTORY_DELAY,
                reply: SimReply::Body(in_stock()),
            },
            None => Behavior {
                delay: INVENTORY_DELAY,
                reply: SimReply::Body(InventoryDecision {
                    in_stock: false,
                    reason: Some("Item not found".to_string()),
                }),
            },
        }
    }

    fn payment_behavior(&self, item_id: i32) -> Behavior<PaymentDecision> {
        match self.scenario_for(item_id) {
            Some(Scenario::InsufficientFunds) => Behavior {
                delay: PAYMENT_DELAY,
                reply: SimReply::Body(PaymentDecision {
                    status: PaymentStatus::InsufficientFunds,
                    reason: Some("Insufficient funds".to_string()),
                }),
            },
            Some(Scenario::PaymentError) => Behavior {
                delay: PAYMENT_DELAY,
                reply: SimReply::InternalError,
            },
            Some(Scenario::SlowPayment) => Behavior {
                delay: SLOW_DELAY,
                reply: SimReply::Body(approved()),
            },
            // Payment approves anything inventory let through, including
            // unknown items.
            Some(_) | None => Behavior {
                delay: PAYMENT_DELAY,
                reply: SimReply::Body(approved()),
            },
        }
    }
}

fn in_stock() -> InventoryDecision {
    InventoryDecision {
        in_stock: true,
        reason: None,
    }
}

fn approved() -> PaymentDecision {
    PaymentDecision {
        status: PaymentStatus::Success,
        reason: None,
    }
}

/// Probabilistic profile with an injected, seedable generator so load runs
/// are reproducible.
pub struct RandomProfile {
    rng: Mutex<StdRng>,
    pub out_of_stock_probability: f64,
    pub insufficient_funds_probability: f64,
    pub error_probability: f64,
    pub max_extra_delay: Duration,
}

impl RandomProfile {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            out_of_stock_probability: 0.2,
            insufficient_funds_probability: 0.1,
            error_probability: 0.05,
            max_extra_delay: Duration::from_millis(500),
        }
    }

    fn extra_delay(&self, rng: &mut StdRng) -> Duration {
        let cap = self.max_extra_delay.as_millis() as u64;
        Duration::from_millis(rng.gen_range(0..=cap))
    }

    fn inventory_behavior(&self) -> Behavior<InventoryDecision> {
        let mut rng = self.rng.lock().expect("profile rng lock poisoned");
        let delay = INVENTORY_DELAY + self.extra_delay(&mut rng);
        let reply = if rng.gen_bool(self.error_probability) {
            SimReply::InternalError
        } else if rng.gen_bool(self.out_of_stock_probability) {
            SimReply::Body(InventoryDecision {
                in_stock: false,
                reason: Some("Out of stock".to_string()),
            })
        } else {
            SimReply::Body(in_stock())
        };
        Behavior { delay, reply }
    }

    fn payment_behavior(&self) -> Behavior<PaymentDecision> {
        let mut rng = self.rng.lock().expect("profile rng lock poisoned");
        let delay = PAYMENT_DELAY + self.extra_delay(&mut rng);
        let reply = if rng.gen_bool(self.error_probability) {
            SimReply::InternalError
        } else if rng.gen_bool(self.insufficient_funds_probability) {
            SimReply::Body(PaymentDecision {
                status: PaymentStatus::InsufficientFunds,
                reason: Some("Insufficient funds".to_string()),
            })
        } else {
            SimReply::Body(approved())
        };
        Behavior { delay, reply }
    }
}

/// The decision source a simulator is wired with at startup.
pub enum DecisionProfile {
    Table(ScenarioTable),
    Random(RandomProfile),
}

impl DecisionProfile {
    pub fn inventory_behavior(&self, item_id: i32) -> Behavior<InventoryDecision> {
        match self {
            DecisionProfile::Table(table) => table.inventory_behavior(item_id),
            DecisionProfile::Random(profile) => profile.inventory_behavior(),
        }
    }

    pub fn payment_behavior(&self, item_id: i32) -> Behavior<PaymentDecision> {
        match self {
            DecisionProfile::Table(table) => table.payment_behavior(item_id),
            DecisionProfile::Random(profile) => profile.payment_behavior(),
        }
    }

    /// Scenario listing for the info endpoint; empty for random profiles.
    pub fn entries(&self) -> Vec<TableEntry> {
        match self {
            DecisionProfile::Table(table) => table.entries(),
            DecisionProfile::Random(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_matches_the_documented_scenarios() {
        let table = ScenarioTable::standard();
        assert_eq!(table.scenario_for(1), Some(Scenario::Success));
        assert_eq!(table.scenario_for(2), Some(Scenario::OutOfStock));
        assert_eq!(table.scenario_for(3), Some(Scenario::InsufficientFunds));
        assert_eq!(table.scenario_for(4), Some(Scenario::InventoryError));
        assert_eq!(table.scenario_for(5), Some(Scenario::PaymentError));
        assert_eq!(table.scenario_for(6), Some(Scenario::SlowInventory));
        assert_eq!(table.scenario_for(7), Some(Scenario::SlowPayment));
        assert_eq!(table.scenario_for(42), None);
    }

    #[test]
    fn unknown_item_is_reported_as_not_found() {
        let table = ScenarioTable::standard();
        match table.inventory_behavior(42).reply {
            SimReply::Body(decision) => {
                assert!(!decision.in_stock);
                assert_eq!(decision.reason.as_deref(), Some("Item not found"));
            }
            SimReply::InternalError => panic!("unknown items are not internal errors"),
        }
    }

    #[test]
    fn slow_inventory_carries_the_two_second_delay() {
        let table = ScenarioTable::standard();
        assert_eq!(table.inventory_behavior(6).delay, Duration::from_secs(2));
        assert_eq!(table.payment_behavior(6).delay, Duration::from_millis(100));
    }

    #[test]
    fn seeded_profiles_are_reproducible() {
        let a = RandomProfile::seeded(7);
        let b = RandomProfile::seeded(7);

        for _ in 0..32 {
            let (left, right) = (a.inventory_behavior(), b.inventory_behavior());
            assert_eq!(left.delay, right.delay);
            assert_eq!(
                matches!(left.reply, SimReply::InternalError),
                matches!(right.reply, SimReply::InternalError)
            );
        }
    }

    #[test]
    fn table_entries_serialize_with_snake_case_scenarios() {
        let entries = ScenarioTable::standard().entries();
        let value = serde_json::to_value(&entries).unwrap();
        assert_eq!(value[0]["itemId"], 1);
        assert_eq!(value[1]["scenario"], "out_of_stock");
    }
}
