#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow wrapping when casting catalog indices to ids since a catalog never holds anywhere near i32::MAX symbols
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation
)]

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::SlotError;

/// Id reserved for the wildcard definition. Negative ids are never ordinary.
pub const WILDCARD_ID: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Ordinary(i32),
    Wildcard(i32),
}

impl SymbolKind {
    #[must_use]
    pub fn id(self) -> i32 {
        match self {
            SymbolKind::Ordinary(id) | SymbolKind::Wildcard(id) => id,
        }
    }

    #[must_use]
    pub fn is_wildcard(self) -> bool {
        matches!(self, SymbolKind::Wildcard(_))
    }
}

/// Run equality along a payline.
///
/// | a        | b        | result       |
/// |----------|----------|--------------|
/// | Ordinary | Ordinary | ids equal    |
/// | Wildcard | any      | true         |
/// | any      | Wildcard | true         |
///
/// Two wildcards match each other, so an all-wildcard line is a valid run.
#[must_use]
pub fn matches(a: SymbolKind, b: SymbolKind) -> bool {
    match (a, b) {
        (SymbolKind::Ordinary(a), SymbolKind::Ordinary(b)) => a == b,
        _ => true,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Immutable definition every placed symbol is copied from.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolDef {
    pub kind: SymbolKind,
    pub name: String,
    pub value: u32,
    pub size: Size,
}

/// A symbol sitting in a column. Cloning yields a fully independent copy.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolInstance {
    /// Index of the defining entry in the catalog
    pub symbol: usize,
    pub kind: SymbolKind,
    pub value: u32,
    pub position: Position,
    pub size: Size,
    pub highlighted: bool,
}

impl SymbolInstance {
    #[must_use]
    pub fn matches(&self, other: &SymbolInstance) -> bool {
        matches(self.kind, other.kind)
    }
}

/// Payout parameters for [`generate_catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutRule {
    pub wildcard_value: u32,
    pub default_value: u32,
    pub max_value: u32,
    pub big_value_slots: usize,
}

impl Default for PayoutRule {
    fn default() -> Self {
        Self {
            wildcard_value: crate::game::WILDCARD_VALUE,
            default_value: crate::game::DEFAULT_VALUE,
            max_value: crate::game::MAX_VALUE,
            big_value_slots: crate::game::BIG_VALUE_SLOTS,
        }
    }
}

/// Produces `count` payout values and the wildcard's value.
///
/// The first `min(big_value_slots, count)` values step down from `max_value`
/// by `wildcard_value`; the rest are `default_value`.
pub fn generate_catalog(count: usize, rule: &PayoutRule) -> Result<(u32, Vec<u32>), SlotError> {
    let big = rule.big_value_slots.min(count);
    let mut values = Vec::with_capacity(count);

    for i in 0..big {
        let step = u32::try_from(i)
            .ok()
            .and_then(|i| rule.wildcard_value.checked_mul(i))
            .and_then(|drop| rule.max_value.checked_sub(drop))
            .ok_or(SlotError::PayoutUnderflow {
                max_value: rule.max_value,
                step: rule.wildcard_value,
                slot: i,
            })?;
        values.push(step);
    }
    values.extend(std::iter::repeat_n(rule.default_value, count - big));

    if values.len() != count {
        return Err(SlotError::CatalogSize {
            expected: count,
            actual: values.len(),
        });
    }

    Ok((rule.wildcard_value, values))
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    defs: Vec<SymbolDef>,
    wildcard: Option<usize>,
}

impl Catalog {
    /// Builds the catalog from asset names. Any name containing "wild"
    /// becomes the wildcard; duplicates are dropped, first occurrence wins.
    pub fn from_asset_names<I, S>(names: I, rule: &PayoutRule, size: Size) -> Result<Self, SlotError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordinary: Vec<String> = Vec::new();
        let mut wild: Option<String> = None;

        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if name.to_lowercase().contains("wild") {
                if wild.is_some() {
                    warn!("Ignoring extra wildcard asset {name}");
                } else {
                    wild = Some(name.to_string());
                }
            } else if !ordinary.iter().any(|known| known == name) {
                ordinary.push(name.to_string());
            }
        }

        if ordinary.is_empty() {
            return Err(SlotError::EmptyCatalog);
        }

        let (wildcard_value, values) = generate_catalog(ordinary.len(), rule)?;

        let mut defs: Vec<SymbolDef> = ordinary
            .into_iter()
            .zip(values)
            .enumerate()
            .map(|(id, (name, value))| SymbolDef {
                kind: SymbolKind::Ordinary(id as i32),
                name,
                value,
                size,
            })
            .collect();

        let wildcard = wild.map(|name| {
            defs.push(SymbolDef {
                kind: SymbolKind::Wildcard(WILDCARD_ID),
                name,
                value: wildcard_value,
                size,
            });
            defs.len() - 1
        });

        if wildcard.is_none() {
            debug!("No wildcard asset found, playing without wildcards");
        }

        Ok(Self { defs, wildcard })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SymbolDef> {
        self.defs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolDef> {
        self.defs.iter()
    }

    #[must_use]
    pub fn wildcard(&self) -> Option<&SymbolDef> {
        self.wildcard.and_then(|index| self.defs.get(index))
    }

    /// Copies definition `index` into a fresh instance at the origin.
    #[must_use]
    pub fn instantiate(&self, index: usize) -> Option<SymbolInstance> {
        self.defs.get(index).map(|def| SymbolInstance {
            symbol: index,
            kind: def.kind,
            value: def.value,
            position: Position::default(),
            size: def.size,
            highlighted: false,
        })
    }
}
