use crate::config::CoordinateMatch;
use crate::models::Location;
use tracing::debug;

/// Maps driver/customer coordinates onto location node labels.
#[derive(Debug, Clone)]
pub struct CoordinateMap {
    positions: Vec<(String, Location)>,
    default_node: String,
}

impl CoordinateMap {
    /// Create a map with no positions; every lookup falls back to `default_node`
    pub fn new<S: Into<String>>(default_node: S) -> Self {
        Self {
            positions: Vec::new(),
            default_node: default_node.into(),
        }
    }

    /// Register the coordinate of a node. Registration order decides which
    /// node wins when two share a coordinate.
    pub fn insert<S: Into<String>>(&mut self, node: S, location: Location) {
        self.positions.push((node.into(), location));
    }

    pub fn default_node(&self) -> &str {
        &self.default_node
    }

    /// Node registered at exactly this coordinate
    pub fn exact(&self, location: &Location) -> Option<&str> {
        self.positions
            .iter()
            .find(|(_, position)| position == location)
            .map(|(label, _)| label.as_str())
    }

    /// Node whose registered coordinate is closest; first registered wins ties
    pub fn nearest(&self, location: &Location) -> Option<&str> {
        let mut nearest = None;
        let mut min_distance = f64::INFINITY;

        for (label, position) in &self.positions {
            let distance = position.distance_to(location);
            if distance < min_distance {
                min_distance = distance;
                nearest = Some(label.as_str());
            }
        }

        nearest
    }

    /// Resolve a coordinate to a node label under the given policy. Never
    /// fails: anything unmatched lands on the default node.
    pub fn resolve(&self, location: &Location, policy: CoordinateMatch) -> &str {
        if let Some(label) = self.exact(location) {
            return label;
        }

        let fallback = match policy {
            CoordinateMatch::Exact => None,
            CoordinateMatch::Nearest => self.nearest(location),
        };

        match fallback {
            Some(label) => label,
            None => {
                debug!(
                    x = location.x,
                    y = location.y,
                    node = %self.default_node,
                    "coordinate matches no node, using default"
                );
                &self.default_node
            }
        }
    }
}
