use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbBackend, FromQueryResult, Statement};
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::gateway::UserQueryGateway;
use crate::models::{User, UserId, UserRole, Username};

const READ_BY_ID_SQL: &str =
    "SELECT id, username, password_hash, role, is_active FROM users WHERE id = $1";

/// PostgreSQL implementation of UserQueryGateway using SeaORM raw statements
#[derive(Clone)]
pub struct PostgresUserQueryGateway {
    db: DatabaseConnection,
}

impl PostgresUserQueryGateway {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct UserRow {
    id: Uuid,
    username: String,
    password_hash: String,
    role: String,
    is_active: bool,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    /// Stored rows that violate domain rules are a data-layer fault
    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let username = Username::new(row.username)
            .map_err(|e| UserError::DataMapper(format!("Invalid stored user {}: {}", row.id, e)))?;
        let role = row
            .role
            .parse::<UserRole>()
            .map_err(|e| UserError::DataMapper(format!("Invalid stored user {}: {}", row.id, e)))?;

        Ok(User {
            id: UserId::new(row.id),
            username,
            password_hash: row.password_hash,
            role,
            is_active: row.is_active,
        })
    }
}

#[async_trait]
impl UserQueryGateway for PostgresUserQueryGateway {
    async fn read_by_id(&self, user_id: &UserId) -> UserResult<Option<User>> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            READ_BY_ID_SQL,
            [user_id.value().into()],
        );

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| UserError::DataMapper(format!("Database error: {}", e)))?;

        row.map(User::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbErr, MockDatabase, Transaction, Value};
    use std::collections::BTreeMap;

    fn row(id: Uuid, username: &str, role: &str, active: bool) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("id", id.into()),
            ("username", username.into()),
            ("password_hash", "$argon2id$hash".into()),
            ("role", role.into()),
            ("is_active", active.into()),
        ])
    }

    #[tokio::test]
    async fn test_read_by_id_maps_row() {
        let id = Uuid::now_v7();
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![row(id, "alice.smith", "super_admin", false)]])
            .into_connection();
        let gateway = PostgresUserQueryGateway::new(db);

        let user = gateway.read_by_id(&UserId::new(id)).await.unwrap().unwrap();

        assert_eq!(user.id.value(), id);
        assert_eq!(user.username.value(), "alice.smith");
        assert_eq!(user.role, UserRole::SuperAdmin);
        assert!(!user.is_active);
    }

    #[tokio::test]
    async fn test_read_by_id_binds_user_id() {
        let id = Uuid::now_v7();
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();
        let gateway = PostgresUserQueryGateway::new(db);

        gateway.read_by_id(&UserId::new(id)).await.unwrap();

        assert_eq!(
            gateway.db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DbBackend::Postgres,
                READ_BY_ID_SQL,
                [id.into()],
            )]
        );
    }

    #[tokio::test]
    async fn test_read_by_id_missing_row_is_none() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();
        let gateway = PostgresUserQueryGateway::new(db);

        let user = gateway.read_by_id(&UserId::new(Uuid::now_v7())).await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_database_failure_is_data_mapper_error() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let gateway = PostgresUserQueryGateway::new(db);

        let err = gateway.read_by_id(&UserId::new(Uuid::now_v7())).await.unwrap_err();
        assert!(matches!(err, UserError::DataMapper(msg) if msg.contains("connection reset")));
    }

    #[tokio::test]
    async fn test_corrupt_role_is_data_mapper_error() {
        let id = Uuid::now_v7();
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![row(id, "alice", "root", true)]])
            .into_connection();
        let gateway = PostgresUserQueryGateway::new(db);

        let err = gateway.read_by_id(&UserId::new(id)).await.unwrap_err();
        assert!(matches!(err, UserError::DataMapper(_)));
    }
}
