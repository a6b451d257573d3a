//! Shops
//!
//! The blacksmith sells arms and armor, the market sells potions.
//! Purchases are all-or-nothing: gold and inventory change together or not at all.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::item::{Item, ItemKind};
use crate::entities::Player;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShopError {
    #[error("{item} costs {cost} gold but only {gold} gold is available")]
    InsufficientGold { item: String, cost: u32, gold: u32 },
    #[error("{0} is not sold here")]
    NotStocked(String),
}

/// Buy a copy of `item` for `player`
pub fn purchase(item: &Item, player: &mut Player) -> Result<(), ShopError> {
    if !player.spend_gold(item.cost) {
        return Err(ShopError::InsufficientGold {
            item: item.name.clone(),
            cost: item.cost,
            gold: player.gold(),
        });
    }
    player.inventory_mut().add(item.clone());
    log::info!(
        "{} bought {} for {} gold ({} left)",
        player.name(),
        item.name,
        item.cost,
        player.gold()
    );
    Ok(())
}

/// The two shopkeepers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shop {
    Blacksmith,
    Market,
}

impl Shop {
    pub fn keeper(&self) -> &'static str {
        match self {
            Shop::Blacksmith => "Blacksmith",
            Shop::Market => "Merchant",
        }
    }

    pub fn stock(&self) -> &'static [ItemKind] {
        match self {
            Shop::Blacksmith => &[
                ItemKind::Sword,
                ItemKind::SteelSword,
                ItemKind::WoodenShield,
                ItemKind::IronShield,
            ],
            Shop::Market => &[ItemKind::HealthPotion],
        }
    }

    pub fn sells(&self, kind: ItemKind) -> bool {
        self.stock().contains(&kind)
    }

    /// What the keeper says when handing over an item
    pub fn sale_line(&self, item: &Item) -> String {
        match self {
            Shop::Blacksmith => {
                format!("{}: 'A fine {} for a brave adventurer!'", self.keeper(), item.name)
            }
            Shop::Market => {
                format!("{}: 'This {} will heal your wounds!'", self.keeper(), item.name)
            }
        }
    }

    /// What the keeper says to an empty purse
    pub fn refusal_line(&self) -> String {
        match self {
            Shop::Blacksmith => format!("{}: 'Come back when you have more gold!'", self.keeper()),
            Shop::Market => format!("{}: 'No gold, no potion!'", self.keeper()),
        }
    }

    /// Sell one of `kind` to the player
    pub fn sell(&self, kind: ItemKind, player: &mut Player) -> Result<Item, ShopError> {
        let item = kind.template();
        if !self.sells(kind) {
            return Err(ShopError::NotStocked(item.name));
        }
        purchase(&item, player)?;
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GameRules;

    fn player_with_gold(gold: u32) -> Player {
        let rules = GameRules {
            starting_gold: gold,
            ..GameRules::default()
        };
        Player::new("Shopper", &rules)
    }

    #[test]
    fn test_purchase_moves_gold_and_item() {
        let mut p = player_with_gold(20);
        assert!(purchase(&ItemKind::Sword.template(), &mut p).is_ok());
        assert_eq!(p.gold(), 10);
        assert_eq!(p.inventory().len(), 1);
        assert_eq!(p.inventory().get(0).unwrap().name, "Sword");
    }

    #[test]
    fn test_purchase_rejected_changes_nothing() {
        let mut p = player_with_gold(5);
        let err = purchase(&ItemKind::SteelSword.template(), &mut p).unwrap_err();
        assert_eq!(
            err,
            ShopError::InsufficientGold {
                item: "Steel Sword".to_string(),
                cost: 25,
                gold: 5
            }
        );
        assert_eq!(p.gold(), 5);
        assert!(p.inventory().is_empty());
    }

    #[test]
    fn test_exact_gold_is_enough() {
        let mut p = player_with_gold(8);
        assert!(purchase(&ItemKind::WoodenShield.template(), &mut p).is_ok());
        assert_eq!(p.gold(), 0);
    }

    #[test]
    fn test_gold_never_negative_over_many_purchases() {
        let mut p = player_with_gold(37);
        for _ in 0..10 {
            let before = (p.gold(), p.inventory().len());
            match purchase(&ItemKind::WoodenShield.template(), &mut p) {
                Ok(()) => assert_eq!(p.gold(), before.0 - 8),
                Err(_) => assert_eq!((p.gold(), p.inventory().len()), before),
            }
        }
        assert_eq!(p.gold(), 5);
        assert_eq!(p.inventory().len(), 4);
    }

    #[test]
    fn test_shop_stock() {
        let mut p = player_with_gold(100);
        assert_eq!(
            Shop::Market.sell(ItemKind::Sword, &mut p),
            Err(ShopError::NotStocked("Sword".to_string()))
        );
        assert_eq!(p.gold(), 100);
        let potion = Shop::Market.sell(ItemKind::HealthPotion, &mut p).unwrap();
        assert_eq!(potion.name, "Health Potion");
        assert_eq!(p.gold(), 95);
    }
}
