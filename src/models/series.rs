use serde::Serialize;
use super::record::ReportRecord;

/// One `(samples, value)` point of a trend line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub samples: u64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: &'static str,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(name: &'static str) -> Self {
        Self { name, points: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Received and sent bandwidth over the aggregate rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandwidthSeries {
    pub received: Series,
    pub sent: Series,
}

pub const THROUGHPUT_NAME: &str = "Throughput";
pub const THROUGHPUT_DESCRIPTION: &str =
    "The number of requests processed per time unit (requests per second). Higher throughput indicates better performance.";

/// The response-time columns plotted against load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LatencyMetric {
    Average,
    Median,
    P90,
    P95,
    P99,
}

impl LatencyMetric {
    pub const ALL: [LatencyMetric; 5] = [
        LatencyMetric::Average,
        LatencyMetric::Median,
        LatencyMetric::P90,
        LatencyMetric::P95,
        LatencyMetric::P99,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Average => "Average",
            Self::Median => "Median",
            Self::P90 => "90% Line",
            Self::P95 => "95% Line",
            Self::P99 => "99% Line",
        }
    }

    pub fn value(&self, record: &ReportRecord) -> f64 {
        match self {
            Self::Average => record.average,
            Self::Median => record.median,
            Self::P90 => record.p90,
            Self::P95 => record.p95,
            Self::P99 => record.p99,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Average => "The mean response time: total response time divided by the number of requests.",
            Self::Median => "The median response time. 50% of the requests are processed within this time.",
            Self::P90 => "90% of the requests are processed within this time. A measure of tail latency.",
            Self::P95 => "95% of the requests are processed within this time. Also a measure of tail latency.",
            Self::P99 => "99% of the requests are processed within this time, covering nearly all requests.",
        }
    }
}

impl std::fmt::Display for LatencyMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
