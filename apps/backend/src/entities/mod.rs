pub mod sheet_rows;
pub mod sheets;

pub use sheet_rows::Entity as SheetRows;
pub use sheets::Entity as Sheets;
