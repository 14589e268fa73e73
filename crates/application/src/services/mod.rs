mod statistics_aggregator;

pub use statistics_aggregator::StatisticsAggregator;
