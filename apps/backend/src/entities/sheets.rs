use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sheets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    /// JSON array of column titles.
    #[sea_orm(column_type = "Text")]
    pub header: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sheet_rows::Entity")]
    SheetRows,
}

impl Related<super::sheet_rows::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SheetRows.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
