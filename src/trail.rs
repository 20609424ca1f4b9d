use crate::history::HistoryEntry;

/// A map vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<&HistoryEntry> for LatLng {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            lat: entry.latitude,
            lng: entry.longitude,
        }
    }
}

/// The movement trail derived from published history.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    /// Oldest first, the vertex order of the polyline.
    pub path_points: Vec<LatLng>,
    /// Every path point except the newest, which coincides with the live position marker.
    pub waypoint_markers: Vec<LatLng>,
}

/// Project a history (in any order) onto a trail. Fewer than two entries produce no trail.
pub fn project(history: &[HistoryEntry]) -> Option<Trail> {
    if history.len() < 2 {
        return None;
    }

    let mut ordered: Vec<&HistoryEntry> = history.iter().collect();
    ordered.sort_by_key(|entry| entry.timestamp);

    let path_points: Vec<LatLng> = ordered.into_iter().map(LatLng::from).collect();
    let waypoint_markers = path_points[..path_points.len() - 1].to_vec();

    Some(Trail {
        path_points,
        waypoint_markers,
    })
}
