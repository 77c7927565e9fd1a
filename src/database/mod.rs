mod connection;
mod dumper;
mod mysql;
mod postgres;

pub use connection::{parse_connection_url, ConnectionInfo, DatabaseKind};
pub use dumper::DatabaseDumper;
pub use mysql::MysqlDumper;
pub use postgres::PostgresDumper;
pub fn create_dumper(kind: DatabaseKind) -> Box<dyn DatabaseDumper> {
    match kind {
        DatabaseKind::Postgres => Box::new(PostgresDumper),
        DatabaseKind::MySql => Box::new(MysqlDumper),
    }
}
