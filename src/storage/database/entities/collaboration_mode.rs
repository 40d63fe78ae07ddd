use sea_orm::entity::prelude::*;

/// Collaboration mode database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "collaboration_modes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Mode name, unique within the project
    pub name: String,

    pub project_name: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Members relation
    #[sea_orm(has_many = "super::collaboration_mode_member::Entity")]
    Members,
}

impl Related<super::collaboration_mode_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Members.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
