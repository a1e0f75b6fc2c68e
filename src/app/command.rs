/// Side effects requested by the reducer and executed by spawned tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the full resolution pipeline and fetch current conditions.
    /// `Some(city)` takes the geocoding path; `None` asks the device
    /// locator. The resolve step always settles before the fetch begins,
    /// and a resolve error means the fetch never runs.
    Refresh(Option<String>),
}
