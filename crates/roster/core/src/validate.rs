//! Authoring-boundary checks.
//!
//! Composition tolerates malformed data. Editors and importers call
//! [`validate_unit`] before saving to catch what composition would silently
//! paper over.

use std::collections::HashMap;

use crate::compose::{resolve, resolve_equipped};
use crate::error::{ErrorSeverity, RosterError};
use crate::model::Unit;
use crate::oracle::UpgradeOracle;
use crate::vocab::SlotKind;

/// Problems found in an authored unit and its upgrade slots.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    /// A slot holds more upgrades than its capacity.
    #[error("{slot} slot holds {equipped} upgrades but allows {max}")]
    SlotOverCapacity {
        slot: SlotKind,
        equipped: usize,
        max: u32,
    },

    /// The same id appears twice within one slot.
    #[error("upgrade '{upgrade_id}' is listed twice in the {slot} slot")]
    DuplicateInSlot { slot: SlotKind, upgrade_id: String },

    /// The same id is equipped in more than one slot.
    #[error("upgrade '{upgrade_id}' is equipped in more than one slot")]
    EquippedInMultipleSlots { upgrade_id: String },

    /// No slot of the requested kind has room.
    #[error("no free {slot} slot for upgrade '{upgrade_id}'")]
    NoFreeSlot { slot: SlotKind, upgrade_id: String },

    /// A card restricted to one slot kind sits in a slot of another kind.
    #[error("upgrade '{upgrade_id}' is a {card_slot} card placed in a {slot} slot")]
    SlotMismatch {
        upgrade_id: String,
        slot: SlotKind,
        card_slot: SlotKind,
    },

    /// An equipped id no longer resolves.
    #[error("equipped upgrade '{upgrade_id}' is missing from the catalog")]
    MissingUpgrade { upgrade_id: String },

    #[error("upgrade '{upgrade_id}' has negative cost {cost}")]
    NegativeCost { upgrade_id: String, cost: i32 },

    /// Equipped upgrades leave the unit with no models.
    #[error("derived model count {model_count} is below one")]
    ModelCountNotPositive { model_count: i32 },
}

impl RosterError for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        use ValidationError::*;
        match self {
            // Composition still yields a sensible unit
            MissingUpgrade { .. } | SlotMismatch { .. } => ErrorSeverity::Warning,

            SlotOverCapacity { .. }
            | DuplicateInSlot { .. }
            | EquippedInMultipleSlots { .. }
            | NoFreeSlot { .. }
            | NegativeCost { .. }
            | ModelCountNotPositive { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use ValidationError::*;
        match self {
            SlotOverCapacity { .. } => "ROSTER_SLOT_OVER_CAPACITY",
            DuplicateInSlot { .. } => "ROSTER_DUPLICATE_IN_SLOT",
            EquippedInMultipleSlots { .. } => "ROSTER_EQUIPPED_IN_MULTIPLE_SLOTS",
            NoFreeSlot { .. } => "ROSTER_NO_FREE_SLOT",
            SlotMismatch { .. } => "ROSTER_SLOT_MISMATCH",
            MissingUpgrade { .. } => "ROSTER_MISSING_UPGRADE",
            NegativeCost { .. } => "ROSTER_NEGATIVE_COST",
            ModelCountNotPositive { .. } => "ROSTER_MODEL_COUNT_NOT_POSITIVE",
        }
    }
}

/// Everything [`validate_unit`] found for one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    pub unit_id: String,
    pub issues: Vec<ValidationError>,
}

impl ValidationReport {
    /// True when nothing blocking was found. Warnings are allowed.
    pub fn is_valid(&self) -> bool {
        self.blocking().next().is_none()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn blocking(&self) -> impl Iterator<Item = &ValidationError> + '_ {
        self.issues
            .iter()
            .filter(|issue| issue.severity().is_blocking())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationError> + '_ {
        self.issues
            .iter()
            .filter(|issue| !issue.severity().is_blocking())
    }

    /// Converts into a `Result`, keeping only blocking issues as the error.
    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        let blocking: Vec<_> = self
            .issues
            .into_iter()
            .filter(|issue| issue.severity().is_blocking())
            .collect();
        if blocking.is_empty() {
            Ok(())
        } else {
            Err(blocking)
        }
    }
}

/// Checks a unit's slots and equipped upgrades against the roster invariants.
pub fn validate_unit<U>(unit: &Unit, upgrades: &U) -> ValidationReport
where
    U: UpgradeOracle + ?Sized,
{
    let mut issues = Vec::new();
    // id -> number of distinct slots holding it
    let mut slot_counts: HashMap<&str, usize> = HashMap::new();

    for slot in &unit.upgrade_slots {
        if slot.equipped.len() > slot.max_count as usize {
            issues.push(ValidationError::SlotOverCapacity {
                slot: slot.kind,
                equipped: slot.equipped.len(),
                max: slot.max_count,
            });
        }

        let mut in_slot: Vec<&str> = Vec::with_capacity(slot.equipped.len());
        for id in &slot.equipped {
            if in_slot.contains(&id.as_str()) {
                issues.push(ValidationError::DuplicateInSlot {
                    slot: slot.kind,
                    upgrade_id: id.clone(),
                });
                continue;
            }
            in_slot.push(id.as_str());
            *slot_counts.entry(id.as_str()).or_default() += 1;

            match upgrades.upgrade(id) {
                Some(card) => {
                    if let Some(card_slot) = card.slot.filter(|kind| *kind != slot.kind) {
                        issues.push(ValidationError::SlotMismatch {
                            upgrade_id: id.clone(),
                            slot: slot.kind,
                            card_slot,
                        });
                    }
                    if card.points_cost < 0 {
                        issues.push(ValidationError::NegativeCost {
                            upgrade_id: id.clone(),
                            cost: card.points_cost,
                        });
                    }
                }
                None => issues.push(ValidationError::MissingUpgrade {
                    upgrade_id: id.clone(),
                }),
            }
        }
    }

    // Report each multi-slot id once, at its first walk position.
    let mut reported = Vec::new();
    for (_, id) in unit.equipped_ids() {
        if slot_counts.get(id).copied().unwrap_or_default() > 1 && !reported.contains(&id) {
            reported.push(id);
            issues.push(ValidationError::EquippedInMultipleSlots {
                upgrade_id: id.to_string(),
            });
        }
    }

    let model_count = resolve(unit, &resolve_equipped(unit, upgrades)).model_count;
    if model_count < 1 {
        issues.push(ValidationError::ModelCountNotPositive { model_count });
    }

    ValidationReport {
        unit_id: unit.id.clone(),
        issues,
    }
}
