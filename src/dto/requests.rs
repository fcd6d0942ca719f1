use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reference to another resource by id, e.g. `{"id": 3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    pub id: i32,
}

impl From<i32> for IdRef {
    fn from(id: i32) -> Self {
        Self { id }
    }
}

/// Ids of a replacement list, in request order, without duplicates.
pub fn ids_of(refs: &[IdRef]) -> Vec<i32> {
    let mut ids: Vec<i32> = Vec::with_capacity(refs.len());
    for r in refs {
        if !ids.contains(&r.id) {
            ids.push(r.id);
        }
    }
    ids
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryPayload {
    pub name: Option<String>,
    pub coordinates: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityPayload {
    pub name: Option<String>,
    pub coordinates: Option<String>,
    pub image: Option<String>,
    pub country: Option<IdRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistPayload {
    pub name: Option<String>,
    pub image: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub birth_country: Option<IdRef>,
    pub death_country: Option<IdRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MuseumPayload {
    pub name: Option<String>,
    pub image: Option<String>,
    pub address: Option<String>,
    pub total_artworks: Option<i32>,
    pub location: Option<IdRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovementPayload {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub peak_date: Option<NaiveDate>,
    pub origin_country: Option<IdRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtworkPayload {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub image: Option<String>,
    pub museum: Option<IdRef>,
    pub artist: Option<IdRef>,
    pub movement: Option<IdRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub name: Option<String>,
    pub image: Option<String>,
    pub address: Option<String>,
    pub neighborhood: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_country: Option<IdRef>,
    pub museum: Option<IdRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentPayload {
    pub rating: Option<String>,
    pub content: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub artwork: Option<IdRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_of_keeps_first_occurrence() {
        let refs = [IdRef::from(3), IdRef::from(1), IdRef::from(3)];
        assert_eq!(ids_of(&refs), vec![3, 1]);
    }

    #[test]
    fn artwork_kind_is_named_type_on_the_wire() {
        let payload: ArtworkPayload =
            serde_json::from_str(r#"{"name":"Guernica","type":"Oil","museum":{"id":2}}"#)
                .unwrap();
        assert_eq!(payload.kind.as_deref(), Some("Oil"));
        assert_eq!(payload.museum, Some(IdRef { id: 2 }));
        assert!(payload.artist.is_none());
    }
}
