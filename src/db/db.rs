use crate::libs::data_storage::DataStorage;
use crate::libs::error::AppError;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "timl.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new(file_name: &str) -> Result<Db, AppError> {
        let db_file_path = DataStorage::new().get_path(file_name)?;
        let conn: Connection = Connection::open(db_file_path)?;

        Ok(Db { conn })
    }
}
