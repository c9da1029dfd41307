use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "ttrack.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn: Connection = Connection::open(db_file_path)?;

        // SQLite ships with foreign keys off; without this, purging an
        // entry would orphan its property rows instead of cascading.
        conn.pragma_update(None, "foreign_keys", "ON")?;

        Ok(Db { conn })
    }
}
