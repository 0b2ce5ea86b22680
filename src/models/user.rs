use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Document stored in the "users" collection
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub age: Option<Number>,
}

/// User as returned by the API
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[schema(value_type = Option<f64>)]
    pub age: Option<Number>,
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doc.name,
            email: doc.email,
            age: doc.age,
        }
    }
}

/// Body of POST /api/users. Every field is optional so presence can be
/// reported as a validation error instead of a deserialization failure.
#[derive(Debug, Serialize, Deserialize, Clone, Default, utoipa::ToSchema)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Kept as sent: integers stay integers, stored as Int64 or Double
    #[schema(value_type = Option<f64>)]
    pub age: Option<Number>,
}

/// Validated input, ready to be persisted
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Option<Number>,
}

impl NewUser {
    pub fn into_document(self) -> UserDocument {
        UserDocument {
            id: None,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(|v| v.trim().is_empty()).unwrap_or(true)
}

impl CreateUserRequest {
    /// Checks required fields. The error lists every missing field.
    pub fn validate(self) -> Result<NewUser, String> {
        let mut missing = Vec::new();
        if is_blank(&self.name) {
            missing.push("name");
        }
        if is_blank(&self.email) {
            missing.push("email");
        }

        if !missing.is_empty() {
            let fields = missing
                .iter()
                .map(|field| format!("`{}`", field))
                .collect::<Vec<_>>()
                .join(" and ");
            let verb = if missing.len() > 1 { "are" } else { "is" };
            return Err(format!("User validation failed: {} {} required", fields, verb));
        }

        Ok(NewUser {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            age: self.age,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, email: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            age: None,
        }
    }

    #[test]
    fn test_valid_request() {
        let user = request(Some("Ann"), Some("ann@example.com")).validate().unwrap();
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "ann@example.com");
    }

    #[test]
    fn test_missing_name() {
        let err = request(None, Some("x@example.com")).validate().unwrap_err();
        assert_eq!(err, "User validation failed: `name` is required");
    }

    #[test]
    fn test_blank_email() {
        let err = request(Some("Ann"), Some("   ")).validate().unwrap_err();
        assert_eq!(err, "User validation failed: `email` is required");
    }

    #[test]
    fn test_both_missing() {
        let err = request(None, None).validate().unwrap_err();
        assert_eq!(err, "User validation failed: `name` and `email` are required");
    }

    #[test]
    fn test_document_without_id_maps_to_empty_id() {
        let doc = UserDocument {
            id: None,
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            age: Some(Number::from(30)),
        };
        let user = User::from(doc);
        assert!(user.id.is_empty());
        assert_eq!(user.age, Some(Number::from(30)));
    }

    #[test]
    fn test_document_id_serializes_as_underscore_id() {
        let id = ObjectId::new();
        let doc = UserDocument {
            id: Some(id),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            age: None,
        };
        let bson = mongodb::bson::to_document(&doc).unwrap();
        assert_eq!(bson.get_object_id("_id").unwrap(), id);
        assert!(!bson.contains_key("age"));
    }

    #[test]
    fn test_age_keeps_its_number_kind() {
        let doc = UserDocument {
            id: None,
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            age: Some(Number::from(30)),
        };
        let bson = mongodb::bson::to_document(&doc).unwrap();
        assert_eq!(bson.get_i64("age").unwrap(), 30);

        let doc = UserDocument {
            age: Number::from_f64(30.5),
            ..doc
        };
        let bson = mongodb::bson::to_document(&doc).unwrap();
        assert_eq!(bson.get_f64("age").unwrap(), 30.5);

        let back: UserDocument = mongodb::bson::from_document(bson).unwrap();
        assert_eq!(back.age, Number::from_f64(30.5));
    }
}
