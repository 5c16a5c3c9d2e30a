use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sheet_rows")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "sheet_id")]
    pub sheet_id: i64,
    pub position: i64,
    /// JSON array of cells.
    #[sea_orm(column_type = "Text")]
    pub cells: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sheets::Entity",
        from = "Column::SheetId",
        to = "super::sheets::Column::Id",
        on_delete = "Cascade"
    )]
    Sheet,
}

impl Related<super::sheets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sheet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
