//! Greedy proximity grouping of report points.
//!
//! Report volumes per ingest are small and the grouping only feeds a side
//! panel, so this trades global optimality for a single deterministic pass.

use foundation::haversine_km;
use reports::ClusterPoint;

/// Two reports closer than this are treated as the same incident
/// neighborhood.
pub const CLUSTER_RADIUS_KM: f64 = 1.0;

/// A time-ordered group of nearby report points.
pub type Cluster = Vec<ClusterPoint>;

/// Partition `points` into proximity clusters.
///
/// Single-pass greedy assignment: each point joins the first cluster (in
/// creation order) holding any member (in insertion order) strictly within
/// [`CLUSTER_RADIUS_KM`], or starts a new trailing cluster. There is no
/// nearest-cluster search, so a point can join through any one member and
/// membership can chain well past the radius.
///
/// After assignment every cluster is sorted ascending by time. The sort is
/// stable: reports with equal timestamps keep their input order.
///
/// Ordering contract:
/// - The returned sequence is in cluster creation order.
/// - For a fixed input order the assignment is fully deterministic.
///
/// NaN coordinates never compare as near, so such points end up in
/// singleton clusters instead of poisoning existing ones.
pub fn partition(points: &[ClusterPoint]) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();

    for point in points {
        match first_cluster_near(&clusters, point) {
            Some(i) => clusters[i].push(point.clone()),
            None => clusters.push(vec![point.clone()]),
        }
    }

    for cluster in &mut clusters {
        cluster.sort_by_key(|p| p.time);
    }

    clusters
}

/// Index of the first cluster with a member strictly within the radius.
fn first_cluster_near(clusters: &[Cluster], point: &ClusterPoint) -> Option<usize> {
    clusters.iter().position(|cluster| {
        cluster
            .iter()
            .any(|member| haversine_km(member.coords, point.coords) < CLUSTER_RADIUS_KM)
    })
}
