use crate::db::OrmConn;

#[derive(Clone)]
pub struct AppState {
    pub orm: OrmConn,
}

impl AppState {
    pub fn new(orm: OrmConn) -> Self {
        Self { orm }
    }
}
