//! Domain DTOs for the placeholder API.
//!
//! # Design
//! One struct per resource, a faithful mirror of the JSON payload: the same
//! DTO is sent on create and update and returned from reads. `id` is
//! server-assigned, so it is optional and omitted from serialized output
//! when absent. The mock-server defines its own schema independently;
//! integration tests catch any drift between the two crates.

use serde::{Deserialize, Serialize};

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// A registered user. The nested objects are optional: create payloads may
/// carry only the scalar fields, and the server echoes back whatever was
/// stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Coordinates as the wire carries them: decimal strings, not floats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_user() -> UserDto {
        UserDto {
            id: None,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
            address: None,
            phone: None,
            website: None,
            company: None,
        }
    }

    #[test]
    fn comment_id_is_omitted_when_absent() {
        let comment = CommentDto {
            id: None,
            post_id: 1,
            name: "first".to_string(),
            email: "a@b.c".to_string(),
            body: "hello".to_string(),
        };
        let json = serde_json::to_value(&comment).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["postId"], 1);
    }

    #[test]
    fn comment_round_trips() {
        let json = r#"{"postId":7,"id":42,"name":"n","email":"e@x.io","body":"b"}"#;
        let comment: CommentDto = serde_json::from_str(json).unwrap();
        assert_eq!(comment.id, Some(42));
        assert_eq!(comment.post_id, 7);
        let back = serde_json::to_value(&comment).unwrap();
        assert_eq!(back, serde_json::from_str::<serde_json::Value>(json).unwrap());
    }

    #[test]
    fn user_optional_fields_are_omitted() {
        let json = serde_json::to_value(minimal_user()).unwrap();
        for field in ["id", "address", "phone", "website", "company"] {
            assert!(json.get(field).is_none(), "{field} should be omitted");
        }
        assert_eq!(json["username"], "Bret");
    }

    #[test]
    fn company_uses_catch_phrase_wire_name() {
        let company = Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        };
        let json = serde_json::to_value(&company).unwrap();
        assert!(json.get("catchPhrase").is_some());
        assert!(json.get("catch_phrase").is_none());
    }

    #[test]
    fn full_user_round_trips() {
        let mut user = minimal_user();
        user.id = Some(1);
        user.address = Some(Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
            geo: Geo {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        });
        user.company = Some(Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        });
        let json = serde_json::to_string(&user).unwrap();
        let back: UserDto = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
