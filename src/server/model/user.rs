//! Staff user domain model.

/// Authenticated staff account. The password hash never leaves the data layer's
/// login path.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub is_admin: bool,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            is_admin: entity.is_admin,
        }
    }
}
