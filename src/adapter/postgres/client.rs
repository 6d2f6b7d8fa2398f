//! PostgreSQL Client
//!
//! 接続設定からクライアントを作成する

use anyhow::Result;
use log::{error, info};
use tokio_postgres::{Client, NoTls};

use crate::adapter::config::ConnectionConfig;

/// `ConnectionConfig` から tokio-postgres の設定を組み立てる
pub fn pg_config(connection: &ConnectionConfig) -> tokio_postgres::Config {
    let mut config = tokio_postgres::Config::new();
    config
        .host(&connection.host)
        .port(connection.port)
        .user(&connection.user)
        .password(&connection.password)
        .dbname(&connection.database);
    config
}

/// 接続してクライアントを返す
///
/// 接続の駆動はバックグラウンドタスクで行う。接続エラーはそのまま返す
pub async fn connect(connection: &ConnectionConfig) -> Result<Client> {
    let (client, conn) = pg_config(connection).connect(NoTls).await?;

    tokio::spawn(async move {
        if let Err(e) = conn.await {
            error!("PostgreSQL connection error: {}", e);
        }
    });

    info!(
        "Connected to PostgreSQL at {}:{}/{}",
        connection.host, connection.port, connection.database
    );

    Ok(client)
}
