use sea_orm::entity::prelude::*;

/// Membership of a user in a collaboration mode
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "collaboration_mode_members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub mode_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Belongs to mode relation
    #[sea_orm(
        belongs_to = "super::collaboration_mode::Entity",
        from = "Column::ModeId",
        to = "super::collaboration_mode::Column::Id",
        on_delete = "Cascade"
    )]
    Mode,
}

impl Related<super::collaboration_mode::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mode.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
