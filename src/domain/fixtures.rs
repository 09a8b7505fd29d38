//! Fourteen-unit sample shared by the unit tests.

use super::entities::{Age, Unit, UnitCost};

pub fn unit(id: u32, name: &str, age: Age, cost: Option<UnitCost>) -> Unit {
    Unit {
        id,
        name: name.to_string(),
        description: format!("{name} description"),
        expansion: "Age of Kings".to_string(),
        age,
        cost,
        build_time: None,
        reload_time: None,
        attack_delay: None,
        movement_rate: None,
        line_of_sight: None,
        hit_points: 40,
        range: None,
        attack: None,
        armor: None,
        attack_bonus: Vec::new(),
        accuracy: None,
        search_radius: None,
        blast_radius: None,
        armor_bonus: Vec::new(),
    }
}

pub fn cost(wood: Option<u32>, food: Option<u32>, gold: Option<u32>) -> Option<UnitCost> {
    Some(UnitCost { wood, food, gold })
}

pub fn sample_units() -> Vec<Unit> {
    vec![
        unit(1, "Militia", Age::Dark, cost(None, Some(60), None)),
        unit(2, "Man-at-Arms", Age::Feudal, cost(None, Some(60), Some(20))),
        unit(3, "Spearman", Age::Feudal, cost(Some(25), Some(35), None)),
        unit(4, "Archer", Age::Feudal, cost(Some(25), None, Some(45))),
        unit(5, "Knight", Age::Castle, cost(None, Some(60), Some(75))),
        unit(6, "Crossbowman", Age::Castle, cost(Some(25), None, Some(45))),
        unit(7, "Pikeman", Age::Castle, cost(Some(25), Some(35), None)),
        unit(8, "Champion", Age::Imperial, cost(None, Some(60), Some(20))),
        unit(9, "Elite Skirmisher", Age::Castle, cost(Some(25), Some(35), None)),
        unit(10, "Villager", Age::Dark, cost(None, Some(50), None)),
        unit(11, "Trade Cart", Age::Feudal, cost(Some(100), None, None)),
        unit(12, "Scout Cavalry", Age::Dark, cost(None, Some(80), None)),
        unit(13, "Monk", Age::Castle, cost(None, None, Some(100))),
        unit(14, "Missionary", Age::Castle, None),
    ]
}

pub fn ids(units: &[&Unit]) -> Vec<u32> {
    units.iter().map(|unit| unit.id).collect()
}
