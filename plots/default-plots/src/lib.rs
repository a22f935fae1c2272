use common::plot::Plot;
use throughput_basic::ThroughputBasic;
use time_basic::TimeBasic;

/// The built-in plots in render order
///
/// Also links both plot crates, so their config tags are registered before any
/// config is deserialized.
pub fn init_plots() -> Vec<Box<dyn Plot>> {
    vec![
        Box::new(ThroughputBasic::default()),
        Box::new(TimeBasic::default()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throughput_renders_first() {
        let plots = init_plots();
        let names = plots.iter().map(|p| p.name()).collect::<Vec<_>>();
        assert_eq!(names, ["ThroughputBasic", "TimeBasic"]);
    }
}
