use serde::{Deserialize, Serialize};

/// A hero as it exists on the server. The id is assigned by the remote
/// service and is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u64,
    pub name: String,
}

/// Creation payload for a hero that does not exist yet and therefore has
/// no id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHero {
    pub name: String,
}

/// Opaque acknowledgement returned by mutation endpoints. The body is kept
/// for debugging but never inspected.
#[derive(Debug, Clone)]
pub struct Ack(serde_json::Value);

impl Ack {
    pub(crate) fn new(raw: serde_json::Value) -> Self {
        Self(raw)
    }
}

/// Target of a delete: either a bare id or a full record whose id field is
/// trusted as-is.
#[derive(Debug, Clone)]
pub enum DeleteTarget {
    Id(u64),
    Hero(Hero),
}

impl DeleteTarget {
    pub fn id(&self) -> u64 {
        match self {
            DeleteTarget::Id(id) => *id,
            DeleteTarget::Hero(hero) => hero.id,
        }
    }
}

impl From<u64> for DeleteTarget {
    fn from(id: u64) -> Self {
        DeleteTarget::Id(id)
    }
}

impl From<Hero> for DeleteTarget {
    fn from(hero: Hero) -> Self {
        DeleteTarget::Hero(hero)
    }
}

impl From<&Hero> for DeleteTarget {
    fn from(hero: &Hero) -> Self {
        DeleteTarget::Hero(hero.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_target_extracts_id_from_either_form() {
        let hero = Hero {
            id: 5,
            name: "X".to_string(),
        };
        let by_id = DeleteTarget::from(5);
        let by_ref = DeleteTarget::from(&hero);
        let by_hero = DeleteTarget::from(hero);
        assert_eq!(by_id.id(), 5);
        assert_eq!(by_ref.id(), 5);
        assert_eq!(by_hero.id(), 5);
    }

    #[test]
    fn new_hero_serializes_without_id() {
        let body = serde_json::to_value(NewHero {
            name: "NewHero".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"name": "NewHero"}));
    }
}
