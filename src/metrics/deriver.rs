use crate::models::{
    AggregateView, BandwidthSeries, LatencyMetric, Point, ReportRecord, ReportSet, Series,
    THROUGHPUT_NAME,
};

fn series<'r, I, F>(name: &'static str, records: I, value: F) -> Series
where
    I: IntoIterator<Item = &'r ReportRecord>,
    F: Fn(&ReportRecord) -> f64,
{
    Series {
        name,
        points: records
            .into_iter()
            .map(|r| Point { samples: r.samples, value: value(r) })
            .collect(),
    }
}

/// Throughput against load, one point per record in set order.
pub fn throughput_series(set: &ReportSet) -> Series {
    series(THROUGHPUT_NAME, set, |r| r.throughput)
}

/// One series per latency metric, all sharing the set's samples axis.
pub fn latency_series(set: &ReportSet) -> Vec<Series> {
    LatencyMetric::ALL
        .iter()
        .map(|metric| series(metric.name(), set, |r| metric.value(r)))
        .collect()
}

/// Received and sent KB/sec over the aggregate rows. An empty view gives empty series.
pub fn bandwidth_series(view: &AggregateView<'_>) -> BandwidthSeries {
    BandwidthSeries {
        received: series("Received KB/sec", view.iter(), |r| r.received_kbps),
        sent: series("Sent KB/sec", view.iter(), |r| r.sent_kbps),
    }
}
