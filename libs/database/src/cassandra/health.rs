use scylla::client::session::Session;

use super::connector::CassandraError;

/// Check Cassandra connectivity.
pub async fn check_health(session: &Session) -> bool {
    session
        .query_unpaged("SELECT release_version FROM system.local", &[])
        .await
        .is_ok()
}

/// Identity of the node the session landed on.
///
/// The migrator logs this before touching any data so operators can tell
/// from the output which cluster a run actually read from.
#[derive(Debug, Clone)]
pub struct ClusterInfo {
    pub cluster_name: Option<String>,
    pub datacenter: Option<String>,
    pub rack: Option<String>,
    pub release_version: Option<String>,
}

pub async fn get_cluster_info(session: &Session) -> Result<ClusterInfo, CassandraError> {
    let result = session
        .query_unpaged(
            "SELECT cluster_name, data_center, rack, release_version FROM system.local",
            &[],
        )
        .await?;

    let mut info = ClusterInfo {
        cluster_name: None,
        datacenter: None,
        rack: None,
        release_version: None,
    };

    if let Ok(rows_result) = result.into_rows_result()
        && let Ok(mut rows) = rows_result.rows::<(
            Option<String>,
            Option<String>,
            Option<String>,
            Option<String>,
        )>()
        && let Some(Ok((cluster_name, datacenter, rack, release_version))) = rows.next()
    {
        info.cluster_name = cluster_name;
        info.datacenter = datacenter;
        info.rack = rack;
        info.release_version = release_version;
    }

    Ok(info)
}
